use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod activity;
pub mod article;
pub mod book;
pub mod channel;
pub mod exhibition;
pub mod literary_event;
pub mod partner;
pub mod publication;
pub mod settings;
pub mod workshop;

/// Scheduling status shared by exhibitions, literary events and workshops.
/// Used only for filtering and ordering; any status may be written at any
/// time — there is no transition logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Upcoming,
    Current,
    Past,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Upcoming => "UPCOMING",
            Status::Current => "CURRENT",
            Status::Past => "PAST",
        }
    }

    /// Lenient parse: anything unrecognized falls back to UPCOMING.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "CURRENT" => Status::Current,
            "PAST" => Status::Past,
            _ => Status::Upcoming,
        }
    }

    /// Display rank: CURRENT first, then UPCOMING, then PAST.
    pub fn rank(&self) -> i64 {
        match self {
            Status::Current => 0,
            Status::Upcoming => 1,
            Status::Past => 2,
        }
    }
}

/// SQL fragment ordering rows by status rank. Append a recency column after it.
pub(crate) const ORDER_BY_STATUS: &str =
    "CASE status WHEN 'CURRENT' THEN 0 WHEN 'UPCOMING' THEN 1 ELSE 2 END";

/// Parse a caller-supplied `YYYY-MM-DD` date; unparseable input becomes NULL.
pub(crate) fn parse_date(s: &Option<String>) -> Option<NaiveDate> {
    s.as_deref()
        .and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
}
