use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::utils::{as_record, extra_fields, read_field, Record};

/// A reference listed under a talk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "Value")]
pub struct Citation {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Keys of the source record that aren't part of the schema
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Record,
}

impl Citation {
    const FIELDS: &'static [&'static str] = &["title", "url"];

    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: Some(url.into()),
            extra: Record::new(),
        }
    }

    /// Rebuild a citation from an untyped record.
    pub fn from_object(obj: &Value) -> Self {
        let mut citation = Self::default();
        let Some(record) = as_record(obj, "citation") else {
            return citation;
        };
        if let Some(title) = read_field(record, "title") {
            citation.title = title;
        }
        if let Some(url) = read_field(record, "url") {
            citation.url = Some(url);
        }
        citation.extra = extra_fields(record, Self::FIELDS);
        citation
    }

    /// A missing url counts as empty.
    pub fn is_real(&self) -> bool {
        !self.title.is_empty() || self.url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

impl Default for Citation {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl From<Value> for Citation {
    fn from(value: Value) -> Self {
        Self::from_object(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_placeholder() {
        let citation = Citation::default();
        assert_eq!(citation.title, "");
        assert_eq!(citation.url.as_deref(), Some(""));
        assert!(!citation.is_real());
    }

    #[test]
    fn test_is_real() {
        assert!(Citation::new("Shor 1994", "").is_real());
        assert!(Citation::new("", "https://arxiv.org/abs/quant-ph/9508027").is_real());
        assert!(!Citation::new("", "").is_real());
    }

    #[test]
    fn test_missing_url_is_empty() {
        let citation = Citation {
            title: String::new(),
            url: None,
            extra: Record::new(),
        };
        assert!(!citation.is_real());
    }

    #[test]
    fn test_from_object() {
        let citation = Citation::from_object(&json!({"title": "Grover", "url": "https://example.org"}));
        assert_eq!(citation, Citation::new("Grover", "https://example.org"));
    }

    #[test]
    fn test_from_object_partial_and_extra() {
        let citation = Citation::from_object(&json!({"title": "Grover", "year": 1996}));
        assert_eq!(citation.title, "Grover");
        assert_eq!(citation.url.as_deref(), Some(""));
        assert_eq!(citation.extra["year"], json!(1996));

        let value = serde_json::to_value(&citation).unwrap();
        assert_eq!(value, json!({"title": "Grover", "url": "", "year": 1996}));
    }

    #[test]
    fn test_from_object_non_object() {
        assert_eq!(Citation::from_object(&json!("Grover")), Citation::default());
    }

    #[test]
    fn test_deserialize_goes_through_from_object() {
        let citation: Citation = serde_json::from_str(r#"{"title": 5, "url": "u"}"#).unwrap();
        assert_eq!(citation.title, "");
        assert!(citation.is_real());
    }
}
