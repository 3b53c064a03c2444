use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, OptionalExtension, Row, TransactionBehavior};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

use super::parse_date;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideo {
    pub id: i64,
    pub youtube_id: String,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub sort_order: i64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideoForm {
    pub youtube_id: String,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub publish_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContent {
    pub id: i64,
    pub page_title_ar: Option<String>,
    pub page_title_fr: Option<String>,
    pub intro_ar: Option<String>,
    pub intro_fr: Option<String>,
    pub channel_url: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentForm {
    pub page_title_ar: Option<String>,
    pub page_title_fr: Option<String>,
    pub intro_ar: Option<String>,
    pub intro_fr: Option<String>,
    pub channel_url: Option<String>,
}

impl ChannelVideo {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(ChannelVideo {
            id: row.get("id")?,
            youtube_id: row.get("youtube_id")?,
            title_ar: row.get("title_ar")?,
            title_fr: row.get("title_fr")?,
            description_ar: row.get("description_ar")?,
            description_fr: row.get("description_fr")?,
            publish_date: row.get("publish_date")?,
            sort_order: row.get("sort_order")?,
        })
    }

    /// Videos in the order the admin submitted them.
    pub fn list(pool: &DbPool) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let mut stmt = conn
            .prepare("SELECT * FROM cultural_channel_videos ORDER BY sort_order, id")
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], Self::from_row)
            .map_err(|e| e.to_string())?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| e.to_string())
    }
}

impl ChannelContent {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(ChannelContent {
            id: row.get("id")?,
            page_title_ar: row.get("page_title_ar")?,
            page_title_fr: row.get("page_title_fr")?,
            intro_ar: row.get("intro_ar")?,
            intro_fr: row.get("intro_fr")?,
            channel_url: row.get("channel_url")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// The singleton row. First match wins if the table somehow holds more.
    pub fn find(pool: &DbPool) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM cultural_channel_content ORDER BY id LIMIT 1",
            [],
            Self::from_row,
        )
        .ok()
    }
}

/// Replace the channel page wholesale: upsert the singleton content row,
/// delete every existing video, reinsert the submitted list with fresh ids.
///
/// Runs as a single immediate transaction: the write lock is taken at BEGIN,
/// so overlapping syncs serialize and readers never observe a mix of old and
/// new videos. Omitted videos are gone for good — there is no merge.
pub fn replace_all(
    pool: &DbPool,
    content: Option<&ChannelContentForm>,
    videos: &[ChannelVideoForm],
) -> Result<(), String> {
    let mut conn = pool.get().map_err(|e| e.to_string())?;
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| e.to_string())?;

    if let Some(c) = content {
        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM cultural_channel_content ORDER BY id LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| e.to_string())?;

        match existing {
            Some(id) => {
                tx.execute(
                    "UPDATE cultural_channel_content SET page_title_ar=?1, page_title_fr=?2,
                     intro_ar=?3, intro_fr=?4, channel_url=?5, updated_at=CURRENT_TIMESTAMP
                     WHERE id=?6",
                    params![
                        c.page_title_ar,
                        c.page_title_fr,
                        c.intro_ar,
                        c.intro_fr,
                        c.channel_url,
                        id
                    ],
                )
            }
            None => tx.execute(
                "INSERT INTO cultural_channel_content
                 (page_title_ar, page_title_fr, intro_ar, intro_fr, channel_url)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    c.page_title_ar,
                    c.page_title_fr,
                    c.intro_ar,
                    c.intro_fr,
                    c.channel_url
                ],
            ),
        }
        .map_err(|e| e.to_string())?;
    }

    tx.execute("DELETE FROM cultural_channel_videos", [])
        .map_err(|e| e.to_string())?;

    for (i, v) in videos.iter().enumerate() {
        tx.execute(
            "INSERT INTO cultural_channel_videos
             (youtube_id, title_ar, title_fr, description_ar, description_fr,
              publish_date, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                v.youtube_id,
                v.title_ar,
                v.title_fr,
                v.description_ar,
                v.description_fr,
                parse_date(&v.publish_date),
                i as i64,
            ],
        )
        .map_err(|e| e.to_string())?;
    }

    tx.commit().map_err(|e| e.to_string())
}
