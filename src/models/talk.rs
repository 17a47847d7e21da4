use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{Author, Citation};
use crate::utils::{as_record, extra_fields, read_field, read_list, Record};

/// Author slots a freshly built talk offers.
pub const MIN_AUTHORS: usize = 5;
/// Citation slots a freshly built talk offers.
pub const MIN_CITATIONS: usize = 10;

/// One talk of a seminar.
///
/// Empty authors and citations act as blank form slots; only the "real"
/// ones take part in the derived views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "Value")]
pub struct Talk {
    pub title: String,
    pub description: String,
    pub authors: Vec<Author>,
    pub citations: Vec<Citation>,
    /// Whether an editor shows the talk unfolded
    #[serde(rename = "uncollapsed")]
    pub expanded: bool,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Record,
}

impl Talk {
    const FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "authors",
        "citations",
        "uncollapsed",
    ];

    /// Build a talk, padding authors to [`MIN_AUTHORS`] and citations to
    /// [`MIN_CITATIONS`] with placeholders. Later edits are not re-padded.
    pub fn new(
        title: impl Into<String>,
        mut authors: Vec<Author>,
        description: impl Into<String>,
        mut citations: Vec<Citation>,
    ) -> Self {
        if authors.len() < MIN_AUTHORS {
            authors.resize_with(MIN_AUTHORS, Author::default);
        }
        if citations.len() < MIN_CITATIONS {
            citations.resize_with(MIN_CITATIONS, Citation::default);
        }
        Self {
            title: title.into(),
            description: description.into(),
            authors,
            citations,
            expanded: true,
            extra: Record::new(),
        }
    }

    /// Rebuild a talk from an untyped record.
    ///
    /// Sequences given in the record replace the placeholder-padded
    /// defaults as-is.
    pub fn from_object(obj: &Value) -> Self {
        let mut talk = Self::default();
        let Some(record) = as_record(obj, "talk") else {
            return talk;
        };
        if let Some(title) = read_field(record, "title") {
            talk.title = title;
        }
        if let Some(description) = read_field(record, "description") {
            talk.description = description;
        }
        if let Some(authors) = read_list(record, "authors", Author::from_object) {
            talk.authors = authors;
        }
        if let Some(citations) = read_list(record, "citations", Citation::from_object) {
            talk.citations = citations;
        }
        // `expanded` is only an alias; kept as an extra key unless it was the one read
        let mut known = Self::FIELDS.to_vec();
        if let Some(expanded) = read_field(record, "uncollapsed") {
            talk.expanded = expanded;
        } else if let Some(expanded) = read_field(record, "expanded") {
            talk.expanded = expanded;
            known.push("expanded");
        }
        talk.extra = extra_fields(record, &known);
        talk
    }

    pub fn is_real(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn real_authors(&self) -> Vec<&Author> {
        self.authors.iter().filter(|author| author.is_real()).collect()
    }

    pub fn real_citations(&self) -> Vec<&Citation> {
        self.citations.iter().filter(|citation| citation.is_real()).collect()
    }
}

impl Default for Talk {
    fn default() -> Self {
        Self::new("", Vec::new(), "", Vec::new())
    }
}

impl From<Value> for Talk {
    fn from(value: Value) -> Self {
        Self::from_object(&value)
    }
}
