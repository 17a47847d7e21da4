use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::models::Seminar;

#[derive(Template)]
#[template(path = "seminar_page.html")]
struct SeminarPageTemplate {
    index_number: i64,
    title: String,
    bg_color: String,
    date: String,
    room: String,
    /// Empty unless the seminar url is an http(s) link
    online_url: String,
    talks: Vec<TalkItem>,
}

struct TalkItem {
    title: String,
    authors: String,
    description: String,
    citations: Vec<CitationItem>,
}

struct CitationItem {
    label: String,
    /// Empty unless the citation url is an http(s) link
    link: String,
}

/// Only http(s) urls become `href`s; anything else could run script on click.
fn web_link(url: &str) -> Option<&str> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")).then_some(url)
}

impl From<&Seminar> for SeminarPageTemplate {
    fn from(seminar: &Seminar) -> Self {
        let talks = seminar
            .real_talks()
            .into_iter()
            .map(|talk| TalkItem {
                title: talk.title.clone(),
                authors: talk
                    .real_authors()
                    .iter()
                    .map(|a| a.display_name())
                    .collect::<Vec<_>>()
                    .join(", "),
                description: talk.description.clone(),
                citations: talk
                    .real_citations()
                    .into_iter()
                    .map(|c| {
                        let url = c.url.as_deref().unwrap_or_default();
                        CitationItem {
                            label: if c.title.is_empty() { url.to_string() } else { c.title.clone() },
                            link: web_link(url).unwrap_or_default().to_string(),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            index_number: seminar.index_number,
            title: seminar.cumulative_title(),
            bg_color: seminar.bg_color(),
            date: seminar
                .date()
                .map(|d| d.format("%A, %-d %B %Y, %H:%M UTC").to_string())
                .unwrap_or_default(),
            room: seminar.room.clone(),
            online_url: web_link(&seminar.online_url).unwrap_or_default().to_string(),
            talks,
        }
    }
}

/// Render the announcement page for a seminar.
///
/// The page is meant to be saved as [`Seminar::target_filename`].
pub fn render_seminar_page(seminar: &Seminar) -> Result<String, askama::Error> {
    SeminarPageTemplate::from(seminar).render()
}

#[utoipa::path(
    post,
    path = "/seminars/page",
    tag = "seminars",
    request_body = Seminar,
    responses(
        (status = 200, description = "HTML announcement page (text/html)"),
        (status = 400, description = "Body is not JSON"),
        (status = 500, description = "Template error")
    )
)]
pub async fn seminar_page(Json(record): Json<Value>) -> Result<Response, StatusCode> {
    let seminar = Seminar::from_object(&record);
    let filename = seminar.target_filename();

    match render_seminar_page(&seminar) {
        Ok(html) => Ok((
            [(header::CONTENT_DISPOSITION, format!("inline; filename=\"{}\"", filename))],
            Html(html),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Template error rendering {}: {:?}", filename, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, Citation, Talk};

    #[test]
    fn test_render_page() {
        let seminar = Seminar::new(
            2,
            "2024-05-02T14:15:00.000Z",
            vec![Talk::new(
                "Quantum walks",
                vec![Author::new("Ada", "Lovelace"), Author::new("Alan", "Turing")],
                "A gentle introduction",
                vec![Citation::new("Notes on the engine", "https://example.org/notes")],
            )],
            "4070",
            "https://meet.example.org/seminar",
        );
        let html = render_seminar_page(&seminar).unwrap();
        assert!(html.contains("<title>Quantum walks</title>"));
        assert!(html.contains("background-color: #eefdf0"));
        assert!(html.contains("Ada Lovelace, Alan Turing"));
        assert!(html.contains("Thursday, 2 May 2024, 14:15 UTC"));
        assert!(html.contains("Room 4070"));
        assert!(html.contains("Notes on the engine"));
        assert!(html.contains("A gentle introduction"));
    }

    #[test]
    fn test_render_skips_placeholders_and_bad_dates() {
        let seminar = Seminar::new(0, "whenever", vec![Talk::default()], "4070", "");
        let html = render_seminar_page(&seminar).unwrap();
        assert!(!html.contains("class=\"talk\""));
        assert!(!html.contains("class=\"when\""));
        assert!(!html.contains("join online"));
    }

    #[test]
    fn test_only_web_urls_become_links() {
        let seminar = Seminar::new(
            0,
            "",
            vec![Talk::new(
                "Engines",
                vec![Author::new("Ada", "Lovelace")],
                "",
                vec![
                    Citation::new("Sketch", "javascript:alert(1)"),
                    Citation::new("Notes", "HTTPS://example.org/notes"),
                ],
            )],
            "4070",
            "JavaScript:alert(1)",
        );
        let html = render_seminar_page(&seminar).unwrap();
        assert!(!html.to_ascii_lowercase().contains("href=\"javascript"));
        assert!(!html.contains("join online"));
        assert!(html.contains("<li>Sketch</li>"));
        assert!(html.contains(">Notes</a>"));
    }

    #[test]
    fn test_web_link() {
        assert_eq!(web_link(" https://example.org "), Some("https://example.org"));
        assert_eq!(web_link("http://example.org"), Some("http://example.org"));
        assert_eq!(web_link("javascript:alert(1)"), None);
        assert_eq!(web_link("data:text/html,hi"), None);
        assert_eq!(web_link(""), None);
    }

    #[test]
    fn test_html_is_escaped() {
        let seminar = Seminar::new(
            0,
            "",
            vec![Talk::new("<script>", Vec::new(), "", Vec::new())],
            "4070",
            "",
        );
        let html = render_seminar_page(&seminar).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
