use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

use super::parse_date;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PublicationIssue {
    pub id: i64,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub issue_number: Option<i64>,
    pub cover_url: Option<String>,
    pub pdf_url: Option<String>,
    pub published_at: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationIssueForm {
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub issue_number: Option<i64>,
    pub cover_url: Option<String>,
    pub pdf_url: Option<String>,
    pub published_at: Option<String>,
}

impl PublicationIssue {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(PublicationIssue {
            id: row.get("id")?,
            title_ar: row.get("title_ar")?,
            title_fr: row.get("title_fr")?,
            description_ar: row.get("description_ar")?,
            description_fr: row.get("description_fr")?,
            issue_number: row.get("issue_number")?,
            cover_url: row.get("cover_url")?,
            pdf_url: row.get("pdf_url")?,
            published_at: row.get("published_at")?,
            created_at: row.get("created_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM publication_issues WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    /// Latest issue first.
    pub fn list(pool: &DbPool) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let mut stmt = conn
            .prepare(
                "SELECT * FROM publication_issues
                 ORDER BY issue_number DESC, published_at DESC, id DESC",
            )
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], Self::from_row)
            .map_err(|e| e.to_string())?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| e.to_string())
    }

    pub fn create(pool: &DbPool, form: &PublicationIssueForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "INSERT INTO publication_issues
             (title_ar, title_fr, description_ar, description_fr, issue_number,
              cover_url, pdf_url, published_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                form.title_ar,
                form.title_fr,
                form.description_ar,
                form.description_fr,
                form.issue_number,
                form.cover_url,
                form.pdf_url,
                parse_date(&form.published_at),
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &PublicationIssueForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "UPDATE publication_issues SET title_ar=?1, title_fr=?2, description_ar=?3,
             description_fr=?4, issue_number=?5, cover_url=?6, pdf_url=?7, published_at=?8
             WHERE id=?9",
            params![
                form.title_ar,
                form.title_fr,
                form.description_ar,
                form.description_fr,
                form.issue_number,
                form.cover_url,
                form.pdf_url,
                parse_date(&form.published_at),
                id,
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM publication_issues WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
