use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::utils::{as_record, extra_fields, read_field, slug, Record};

/// A speaker of a talk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "Value", rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Record,
}

impl Author {
    const FIELDS: &'static [&'static str] = &["firstName", "lastName"];

    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            extra: Record::new(),
        }
    }

    /// Rebuild an author from an untyped record.
    pub fn from_object(obj: &Value) -> Self {
        let mut author = Self::default();
        let Some(record) = as_record(obj, "author") else {
            return author;
        };
        if let Some(first_name) = read_field(record, "firstName") {
            author.first_name = first_name;
        }
        if let Some(last_name) = read_field(record, "lastName") {
            author.last_name = last_name;
        }
        author.extra = extra_fields(record, Self::FIELDS);
        author
    }

    pub fn is_real(&self) -> bool {
        !self.first_name.is_empty() || !self.last_name.is_empty()
    }

    /// Non-empty name parts joined with a space.
    pub fn display_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First initial followed by the last name, both slugged.
    ///
    /// "Ada Lovelace" becomes `alovelace`. Distinct authors can share a slug.
    pub fn filename_slug(&self) -> String {
        let initial: String = self
            .first_name
            .to_lowercase()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        format!("{}{}", slug(&initial), slug(&self.last_name.to_lowercase()))
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl From<Value> for Author {
    fn from(value: Value) -> Self {
        Self::from_object(&value)
    }
}
