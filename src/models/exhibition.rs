use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

use super::{parse_date, Status, ORDER_BY_STATUS};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    pub id: i64,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub artist_ar: Option<String>,
    pub artist_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Status,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionForm {
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub artist_ar: Option<String>,
    pub artist_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Status,
}

impl Exhibition {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Exhibition {
            id: row.get("id")?,
            title_ar: row.get("title_ar")?,
            title_fr: row.get("title_fr")?,
            artist_ar: row.get("artist_ar")?,
            artist_fr: row.get("artist_fr")?,
            description_ar: row.get("description_ar")?,
            description_fr: row.get("description_fr")?,
            image_url: row.get("image_url")?,
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
            status: Status::parse(&row.get::<_, String>("status")?),
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM art_exhibitions WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    /// Current exhibitions first, then upcoming, then past, newest within each.
    pub fn list(pool: &DbPool, status: Option<Status>) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        let (sql, params_vec): (String, Vec<Box<dyn rusqlite::types::ToSql>>) = match status {
            Some(s) => (
                format!(
                    "SELECT * FROM art_exhibitions WHERE status = ?1
                     ORDER BY {}, start_date DESC, created_at DESC",
                    ORDER_BY_STATUS
                ),
                vec![Box::new(s.as_str().to_string())],
            ),
            None => (
                format!(
                    "SELECT * FROM art_exhibitions
                     ORDER BY {}, start_date DESC, created_at DESC",
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

    pub fn create(pool: &DbPool, form: &ExhibitionForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "INSERT INTO art_exhibitions
             (title_ar, title_fr, artist_ar, artist_fr, description_ar, description_fr,
              image_url, start_date, end_date, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                form.title_ar,
                form.title_fr,
                form.artist_ar,
                form.artist_fr,
                form.description_ar,
                form.description_fr,
                form.image_url,
                parse_date(&form.start_date),
                parse_date(&form.end_date),
                form.status.as_str(),
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &ExhibitionForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "UPDATE art_exhibitions SET title_ar=?1, title_fr=?2, artist_ar=?3, artist_fr=?4,
             description_ar=?5, description_fr=?6, image_url=?7, start_date=?8, end_date=?9,
             status=?10, updated_at=CURRENT_TIMESTAMP WHERE id=?11",
            params![
                form.title_ar,
                form.title_fr,
                form.artist_ar,
                form.artist_fr,
                form.description_ar,
                form.description_fr,
                form.image_url,
                parse_date(&form.start_date),
                parse_date(&form.end_date),
                form.status.as_str(),
                id,
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM art_exhibitions WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
