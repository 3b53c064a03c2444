use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

use super::{Status, ORDER_BY_STATUS};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: i64,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub instructor_ar: Option<String>,
    pub instructor_fr: Option<String>,
    pub schedule_ar: Option<String>,
    pub schedule_fr: Option<String>,
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
    pub status: Status,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopForm {
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub instructor_ar: Option<String>,
    pub instructor_fr: Option<String>,
    pub schedule_ar: Option<String>,
    pub schedule_fr: Option<String>,
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Status,
}

impl Workshop {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Workshop {
            id: row.get("id")?,
            title_ar: row.get("title_ar")?,
            title_fr: row.get("title_fr")?,
            description_ar: row.get("description_ar")?,
            description_fr: row.get("description_fr")?,
            instructor_ar: row.get("instructor_ar")?,
            instructor_fr: row.get("instructor_fr")?,
            schedule_ar: row.get("schedule_ar")?,
            schedule_fr: row.get("schedule_fr")?,
            category_id: row.get("category_id")?,
            image_url: row.get("image_url")?,
            status: Status::parse(&row.get::<_, String>("status")?),
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM workshops WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    pub fn list(
        pool: &DbPool,
        status: Option<Status>,
        category_id: Option<i64>,
    ) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        let mut clauses: Vec<String> = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(s) = status {
            params_vec.push(Box::new(s.as_str().to_string()));
            clauses.push(format!("status = ?{}", params_vec.len()));
        }
        if let Some(c) = category_id {
            params_vec.push(Box::new(c));
            clauses.push(format!("category_id = ?{}", params_vec.len()));
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };
        let sql = format!(
            "SELECT * FROM workshops {} ORDER BY {}, created_at DESC",
            where_sql, ORDER_BY_STATUS
        );

        let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();

        let rows = stmt
            .query_map(params_refs.as_slice(), Self::from_row)
            .map_err(|e| e.to_string())?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| e.to_string())
    }

    pub fn create(pool: &DbPool, form: &WorkshopForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "INSERT INTO workshops
             (title_ar, title_fr, description_ar, description_fr, instructor_ar, instructor_fr,
              schedule_ar, schedule_fr, category_id, image_url, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                form.title_ar,
                form.title_fr,
                form.description_ar,
                form.description_fr,
                form.instructor_ar,
                form.instructor_fr,
                form.schedule_ar,
                form.schedule_fr,
                form.category_id,
                form.image_url,
                form.status.as_str(),
            ],
        )
        .map_err(|e| e.to_string())?;

        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &WorkshopForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;

        conn.execute(
            "UPDATE workshops SET title_ar=?1, title_fr=?2, description_ar=?3, description_fr=?4,
             instructor_ar=?5, instructor_fr=?6, schedule_ar=?7, schedule_fr=?8, category_id=?9,
             image_url=?10, status=?11, updated_at=CURRENT_TIMESTAMP WHERE id=?12",
            params![
                form.title_ar,
                form.title_fr,
                form.description_ar,
                form.description_fr,
                form.instructor_ar,
                form.instructor_fr,
                form.schedule_ar,
                form.schedule_fr,
                form.category_id,
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
        conn.execute("DELETE FROM workshops WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}

// ── Workshop categories ────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopCategory {
    pub id: i64,
    pub name_ar: Option<String>,
    pub name_fr: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopCategoryForm {
    pub name_ar: Option<String>,
    pub name_fr: Option<String>,
}

impl WorkshopCategory {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(WorkshopCategory {
            id: row.get("id")?,
            name_ar: row.get("name_ar")?,
            name_fr: row.get("name_fr")?,
        })
    }

    pub fn list(pool: &DbPool) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let mut stmt = conn
            .prepare("SELECT * FROM workshop_categories ORDER BY id")
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], Self::from_row)
            .map_err(|e| e.to_string())?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| e.to_string())
    }

    pub fn create(pool: &DbPool, form: &WorkshopCategoryForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO workshop_categories (name_ar, name_fr) VALUES (?1, ?2)",
            params![form.name_ar, form.name_fr],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn.last_insert_rowid())
    }

    /// Deleting a category detaches its workshops rather than orphaning them.
    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE workshops SET category_id = NULL WHERE category_id = ?1",
            params![id],
        )
        .map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM workshop_categories WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
