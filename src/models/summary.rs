use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{Citation, Seminar, Talk};

/// Read-only projection of a seminar with every derived field filled in
#[derive(Debug, Serialize, ToSchema)]
pub struct SeminarSummary {
    pub index_number: i64,
    pub time: String,
    /// Parsed `time`; null when it isn't a valid timestamp
    pub date: Option<DateTime<Utc>>,
    pub room: String,
    pub online_url: String,
    pub target_filename: String,
    pub cumulative_title: String,
    pub bg_color: String,
    /// Real talks only
    pub talks: Vec<TalkSummary>,
    /// Display names of all real authors
    pub authors: Vec<String>,
}

/// Read-only projection of a talk without placeholder entries
#[derive(Debug, Serialize, ToSchema)]
pub struct TalkSummary {
    pub title: String,
    pub description: String,
    pub authors: Vec<String>,
    pub citations: Vec<Citation>,
}

impl From<&Talk> for TalkSummary {
    fn from(talk: &Talk) -> Self {
        Self {
            title: talk.title.clone(),
            description: talk.description.clone(),
            authors: talk.real_authors().iter().map(|a| a.display_name()).collect(),
            citations: talk.real_citations().into_iter().cloned().collect(),
        }
    }
}

impl From<&Seminar> for SeminarSummary {
    fn from(seminar: &Seminar) -> Self {
        Self {
            index_number: seminar.index_number,
            time: seminar.time.clone(),
            date: seminar.date(),
            room: seminar.room.clone(),
            online_url: seminar.online_url.clone(),
            target_filename: seminar.target_filename(),
            cumulative_title: seminar.cumulative_title(),
            bg_color: seminar.bg_color(),
            talks: seminar.real_talks().into_iter().map(TalkSummary::from).collect(),
            authors: seminar.all_authors().iter().map(|a| a.display_name()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    #[test]
    fn test_seminar_summary() {
        let seminar = Seminar::new(
            1,
            "2024-05-02T14:15:00.000Z",
            vec![
                Talk::new("A", vec![Author::new("Ada", "Lovelace")], "first", vec![Citation::new("Notes", "")]),
                Talk::default(),
                Talk::new("B", vec![Author::new("", "Turing")], "", Vec::new()),
            ],
            "4070",
            "",
        );
        let summary = SeminarSummary::from(&seminar);
        assert_eq!(summary.target_filename, "alovelace_turing.html");
        assert_eq!(summary.cumulative_title, "A. B");
        assert_eq!(summary.bg_color, "#eefeef");
        assert_eq!(summary.authors, vec!["Ada Lovelace", "Turing"]);
        assert_eq!(summary.talks.len(), 2);
        assert_eq!(summary.talks[0].citations, vec![Citation::new("Notes", "")]);
        assert!(summary.talks[1].citations.is_empty());
        assert!(summary.date.is_some());
    }

    #[test]
    fn test_summary_invalid_date_is_null() {
        let seminar = Seminar::new(0, "soon", Vec::new(), "4070", "");
        let value = serde_json::to_value(SeminarSummary::from(&seminar)).unwrap();
        assert!(value["date"].is_null());
        assert_eq!(value["target_filename"], ".html");
    }
}
