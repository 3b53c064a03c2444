use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

use super::exhibition::Exhibition;
use super::literary_event::LiteraryEvent;
use super::workshop::Workshop;
use super::Status;

/// Which activity table an aggregate item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Art,
    Workshop,
    Literary,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Art => "art",
            ActivityKind::Workshop => "workshop",
            ActivityKind::Literary => "literary",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "art" => Some(ActivityKind::Art),
            "workshop" => Some(ActivityKind::Workshop),
            "literary" => Some(ActivityKind::Literary),
            _ => None,
        }
    }
}

/// Tagged identifier for cross-table activity operations. Replaces the old
/// composite `"<prefix>-<id>"` string, which was split and parsed with no
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityId {
    pub kind: ActivityKind,
    pub id: i64,
}

impl ActivityId {
    /// Parse the legacy composite form, e.g. `"art-12"`. Unknown prefixes,
    /// non-numeric or non-positive ids are rejected outright.
    pub fn parse(raw: &str) -> Option<Self> {
        let (prefix, id) = raw.split_once('-')?;
        let kind = ActivityKind::parse(prefix)?;
        let id: i64 = id.parse().ok()?;
        if id <= 0 {
            return None;
        }
        Some(ActivityId { kind, id })
    }

    pub fn delete(&self, pool: &DbPool) -> Result<(), String> {
        match self.kind {
            ActivityKind::Art => Exhibition::delete(pool, self.id),
            ActivityKind::Workshop => Workshop::delete(pool, self.id),
            ActivityKind::Literary => LiteraryEvent::delete(pool, self.id),
        }
    }
}

/// One row of the merged activities listing.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub kind: ActivityKind,
    pub id: i64,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Status,
    pub image_url: Option<String>,
}

/// Merge exhibitions, workshops and literary events into one listing,
/// ordered by status (current, upcoming, past) then date, newest first.
pub fn list_all(pool: &DbPool) -> Result<Vec<ActivitySummary>, String> {
    let mut items: Vec<ActivitySummary> = Vec::new();

    for e in Exhibition::list(pool, None)? {
        items.push(ActivitySummary {
            kind: ActivityKind::Art,
            id: e.id,
            title_ar: e.title_ar,
            title_fr: e.title_fr,
            date: e.start_date,
            status: e.status,
            image_url: e.image_url,
        });
    }
    for w in Workshop::list(pool, None, None)? {
        items.push(ActivitySummary {
            kind: ActivityKind::Workshop,
            id: w.id,
            title_ar: w.title_ar,
            title_fr: w.title_fr,
            date: Some(w.created_at.date()),
            status: w.status,
            image_url: w.image_url,
        });
    }
    for ev in LiteraryEvent::list(pool, None)? {
        items.push(ActivitySummary {
            kind: ActivityKind::Literary,
            id: ev.id,
            title_ar: ev.title_ar,
            title_fr: ev.title_fr,
            date: ev.event_date,
            status: ev.status,
            image_url: ev.image_url,
        });
    }

    // Dateless rows sink to the end of their status group.
    items.sort_by(|a, b| {
        a.status
            .rank()
            .cmp(&b.status.rank())
            .then_with(|| match (a.date, b.date) {
                (Some(da), Some(db)) => db.cmp(&da),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
    });

    Ok(items)
}
