use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

use super::parse_date;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub content_ar: Option<String>,
    pub content_fr: Option<String>,
    pub excerpt_ar: Option<String>,
    pub excerpt_fr: Option<String>,
    pub author_ar: Option<String>,
    pub author_fr: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleForm {
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub content_ar: Option<String>,
    pub content_fr: Option<String>,
    pub excerpt_ar: Option<String>,
    pub excerpt_fr: Option<String>,
    pub author_ar: Option<String>,
    pub author_fr: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<String>,
}

impl Article {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Article {
            id: row.get("id")?,
            title_ar: row.get("title_ar")?,
            title_fr: row.get("title_fr")?,
            content_ar: row.get("content_ar")?,
            content_fr: row.get("content_fr")?,
            excerpt_ar: row.get("excerpt_ar")?,
            excerpt_fr: row.get("excerpt_fr")?,
            author_ar: row.get("author_ar")?,
            author_fr: row.get("author_fr")?,
            image_url: row.get("image_url")?,
            published_at: row.get("published_at")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM articles WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    pub fn list(pool: &DbPool) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let mut stmt = conn
            .prepare("SELECT * FROM articles ORDER BY published_at DESC, created_at DESC")
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], Self::from_row)
            .map_err(|e| e.to_string())?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| e.to_string())
    }

    pub fn create(pool: &DbPool, form: &ArticleForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "INSERT INTO articles
             (title_ar, title_fr, content_ar, content_fr, excerpt_ar, excerpt_fr,
              author_ar, author_fr, image_url, published_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                form.title_ar,
                form.title_fr,
                form.content_ar,
                form.content_fr,
                form.excerpt_ar,
                form.excerpt_fr,
                form.author_ar,
                form.author_fr,
                form.image_url,
                parse_date(&form.published_at),
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &ArticleForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "UPDATE articles SET title_ar=?1, title_fr=?2, content_ar=?3, content_fr=?4,
             excerpt_ar=?5, excerpt_fr=?6, author_ar=?7, author_fr=?8, image_url=?9,
             published_at=?10, updated_at=CURRENT_TIMESTAMP WHERE id=?11",
            params![
                form.title_ar,
                form.title_fr,
                form.content_ar,
                form.content_fr,
                form.excerpt_ar,
                form.excerpt_fr,
                form.author_ar,
                form.author_fr,
                form.image_url,
                parse_date(&form.published_at),
                id,
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM articles WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
