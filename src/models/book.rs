use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub author_ar: Option<String>,
    pub author_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub cover_url: Option<String>,
    pub publish_year: Option<i64>,
    pub isbn: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookForm {
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub author_ar: Option<String>,
    pub author_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub cover_url: Option<String>,
    pub publish_year: Option<i64>,
    pub isbn: Option<String>,
}

impl Book {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Book {
            id: row.get("id")?,
            title_ar: row.get("title_ar")?,
            title_fr: row.get("title_fr")?,
            author_ar: row.get("author_ar")?,
            author_fr: row.get("author_fr")?,
            description_ar: row.get("description_ar")?,
            description_fr: row.get("description_fr")?,
            cover_url: row.get("cover_url")?,
            publish_year: row.get("publish_year")?,
            isbn: row.get("isbn")?,
            created_at: row.get("created_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM books WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    pub fn list(pool: &DbPool) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let mut stmt = conn
            .prepare("SELECT * FROM books ORDER BY publish_year DESC, created_at DESC")
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], Self::from_row)
            .map_err(|e| e.to_string())?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| e.to_string())
    }

    pub fn create(pool: &DbPool, form: &BookForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "INSERT INTO books
             (title_ar, title_fr, author_ar, author_fr, description_ar, description_fr,
              cover_url, publish_year, isbn)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                form.title_ar,
                form.title_fr,
                form.author_ar,
                form.author_fr,
                form.description_ar,
                form.description_fr,
                form.cover_url,
                form.publish_year,
                form.isbn,
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &BookForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "UPDATE books SET title_ar=?1, title_fr=?2, author_ar=?3, author_fr=?4,
             description_ar=?5, description_fr=?6, cover_url=?7, publish_year=?8, isbn=?9
             WHERE id=?10",
            params![
                form.title_ar,
                form.title_fr,
                form.author_ar,
                form.author_fr,
                form.description_ar,
                form.description_fr,
                form.cover_url,
                form.publish_year,
                form.isbn,
                id,
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM books WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
