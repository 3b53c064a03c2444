use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

use super::{parse_date, Status, ORDER_BY_STATUS};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LiteraryEvent {
    pub id: i64,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub guest_ar: Option<String>,
    pub guest_fr: Option<String>,
    pub location_ar: Option<String>,
    pub location_fr: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub status: Status,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteraryEventForm {
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub guest_ar: Option<String>,
    pub guest_fr: Option<String>,
    pub location_ar: Option<String>,
    pub location_fr: Option<String>,
    pub event_date: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Status,
}

impl LiteraryEvent {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(LiteraryEvent {
            id: row.get("id")?,
            title_ar: row.get("title_ar")?,
            title_fr: row.get("title_fr")?,
            description_ar: row.get("description_ar")?,
            description_fr: row.get("description_fr")?,
            guest_ar: row.get("guest_ar")?,
            guest_fr: row.get("guest_fr")?,
            location_ar: row.get("location_ar")?,
            location_fr: row.get("location_fr")?,
            event_date: row.get("event_date")?,
            image_url: row.get("image_url")?,
            status: Status::parse(&row.get::<_, String>("status")?),
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM literary_events WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    pub fn list(pool: &DbPool, status: Option<Status>) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        let (sql, params_vec): (String, Vec<Box<dyn rusqlite::types::ToSql>>) = match status {
            Some(s) => (
                format!(
                    "SELECT * FROM literary_events WHERE status = ?1
                     ORDER BY {}, event_date DESC, created_at DESC",
                    ORDER_BY_STATUS
                ),
                vec![Box::new(s.as_str().to_string())],
            ),
            None => (
                format!(
                    "SELECT * FROM literary_events
                     ORDER BY {}, event_date DESC, created_at DESC",
                    ORDER_BY_STATUS
                ),
                vec![],
            ),
        };

        let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();

        let rows = stmt
            .query_map(params_refs.as_slice(), Self::from_row)
            .map_err(|e| e.to_string())?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| e.to_string())
    }

    pub fn create(pool: &DbPool, form: &LiteraryEventForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "INSERT INTO literary_events
             (title_ar, title_fr, description_ar, description_fr, guest_ar, guest_fr,
              location_ar, location_fr, event_date, image_url, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                form.title_ar,
                form.title_fr,
                form.description_ar,
                form.description_fr,
                form.guest_ar,
                form.guest_fr,
                form.location_ar,
                form.location_fr,
                parse_date(&form.event_date),
                form.image_url,
                form.status.as_str(),
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &LiteraryEventForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "UPDATE literary_events SET title_ar=?1, title_fr=?2, description_ar=?3,
             description_fr=?4, guest_ar=?5, guest_fr=?6, location_ar=?7, location_fr=?8,
             event_date=?9, image_url=?10, status=?11, updated_at=CURRENT_TIMESTAMP
             WHERE id=?12",
            params![
                form.title_ar,
                form.title_fr,
                form.description_ar,
                form.description_fr,
                form.guest_ar,
                form.guest_fr,
                form.location_ar,
                form.location_fr,
                parse_date(&form.event_date),
                form.image_url,
                form.status.as_str(),
                id,
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM literary_events WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
