use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

use super::{Author, Talk};
use crate::utils::{as_record, extra_fields, read_field, read_list, Record};

/// Talks a freshly built seminar starts with.
///
/// Zero: a new seminar has no placeholder talks.
pub const MIN_TALKS: usize = 0;

/// Room used when none is given.
pub const DEFAULT_ROOM: &str = "4070";

/// A seminar session: when and where it happens, and its talks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "Value", rename_all = "camelCase")]
pub struct Seminar {
    /// Running number of the session, also drives [`Seminar::bg_color`]
    pub index_number: i64,
    /// ISO-8601 timestamp
    pub time: String,
    pub room: String,
    pub online_url: String,
    pub talks: Vec<Talk>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Record,
}

impl Seminar {
    const FIELDS: &'static [&'static str] = &["indexNumber", "time", "room", "onlineUrl", "talks"];

    pub fn new(
        index_number: i64,
        time: impl Into<String>,
        mut talks: Vec<Talk>,
        room: impl Into<String>,
        online_url: impl Into<String>,
    ) -> Self {
        if talks.len() < MIN_TALKS {
            talks.resize_with(MIN_TALKS, Talk::default);
        }
        Self {
            index_number,
            time: time.into(),
            room: room.into(),
            online_url: online_url.into(),
            talks,
            extra: Record::new(),
        }
    }

    /// Rebuild a seminar, and all of its talks, from an untyped record.
    pub fn from_object(obj: &Value) -> Self {
        let mut seminar = Self::default();
        let Some(record) = as_record(obj, "seminar") else {
            return seminar;
        };
        if let Some(index_number) = read_index(record, "indexNumber") {
            seminar.index_number = index_number;
        }
        if let Some(time) = read_field(record, "time") {
            seminar.time = time;
        }
        if let Some(room) = read_field(record, "room") {
            seminar.room = room;
        }
        if let Some(online_url) = read_field(record, "onlineUrl") {
            seminar.online_url = online_url;
        }
        if let Some(talks) = read_list(record, "talks", Talk::from_object) {
            seminar.talks = talks;
        }
        seminar.extra = extra_fields(record, Self::FIELDS);
        seminar
    }

    /// The session start, or `None` when `time` isn't a recognizable timestamp.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.time)
    }

    pub fn real_talks(&self) -> Vec<&Talk> {
        self.talks.iter().filter(|talk| talk.is_real()).collect()
    }

    /// Real authors of real talks, in talk order then author order.
    pub fn all_authors(&self) -> Vec<&Author> {
        self.real_talks()
            .into_iter()
            .flat_map(|talk| talk.real_authors())
            .collect()
    }

    /// Name of the generated announcement page, e.g. `alovelace_aturing.html`.
    pub fn target_filename(&self) -> String {
        let slugs: Vec<String> = self
            .all_authors()
            .iter()
            .map(|author| author.filename_slug())
            .collect();
        format!("{}.html", slugs.join("_"))
    }

    pub fn cumulative_title(&self) -> String {
        self.real_talks()
            .iter()
            .map(|talk| talk.title.as_str())
            .collect::<Vec<_>>()
            .join(". ")
    }

    /// Page background, `#ee` followed by green `ff - n` and blue `ee + n` in hex.
    ///
    /// Components are neither padded nor clamped: only `0..=17` yields a
    /// well-formed color. Larger indices give three-digit components and
    /// negative ones a leading minus (`-1` renders as `#ee100ed`).
    pub fn bg_color(&self) -> String {
        let n = i128::from(self.index_number);
        let g = 0xff - n;
        let b = 0xee + n;
        format!("#ee{}{}", signed_hex(g), signed_hex(b))
    }
}

impl Default for Seminar {
    fn default() -> Self {
        Self::new(0, now_iso(), Vec::new(), DEFAULT_ROOM, "")
    }
}

impl From<Value> for Seminar {
    fn from(value: Value) -> Self {
        Self::from_object(&value)
    }
}

/// Current time as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Lowercase hex with a leading `-` for negatives.
fn signed_hex(value: i128) -> String {
    if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{:x}", value)
    }
}

/// Read a whole number, accepting integral floats such as `3.0`.
fn read_index(record: &Record, key: &str) -> Option<i64> {
    let number: Number = read_field(record, key)?;
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Some(f as i64),
        _ => {
            tracing::warn!("Ignoring field {:?}: {} is not a whole number in range", key, number);
            None
        }
    }
}

/// Accepts RFC 3339, offset-less date-times (read as UTC) and bare dates.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
