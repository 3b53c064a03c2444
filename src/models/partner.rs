use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension, Row, Transaction, TransactionBehavior};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: i64,
    pub name_ar: Option<String>,
    pub name_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub sort_order: i64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PartnerForm {
    pub name_ar: Option<String>,
    pub name_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CollaborativeProgram {
    pub id: i64,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CollaborativeProgramForm {
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PartnersPageContent {
    pub id: i64,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub intro_ar: Option<String>,
    pub intro_fr: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PartnersPageContentForm {
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub intro_ar: Option<String>,
    pub intro_fr: Option<String>,
}

impl Partner {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Partner {
            id: row.get("id")?,
            name_ar: row.get("name_ar")?,
            name_fr: row.get("name_fr")?,
            description_ar: row.get("description_ar")?,
            description_fr: row.get("description_fr")?,
            logo_url: row.get("logo_url")?,
            website_url: row.get("website_url")?,
            sort_order: row.get("sort_order")?,
        })
    }

    pub fn list(pool: &DbPool) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let mut stmt = conn
            .prepare("SELECT * FROM partners ORDER BY sort_order, id")
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], Self::from_row)
            .map_err(|e| e.to_string())?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| e.to_string())
    }
}

impl CollaborativeProgram {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(CollaborativeProgram {
            id: row.get("id")?,
            title_ar: row.get("title_ar")?,
            title_fr: row.get("title_fr")?,
            description_ar: row.get("description_ar")?,
            description_fr: row.get("description_fr")?,
            image_url: row.get("image_url")?,
            sort_order: row.get("sort_order")?,
        })
    }

    pub fn list(pool: &DbPool) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let mut stmt = conn
            .prepare("SELECT * FROM collaborative_programs ORDER BY sort_order, id")
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], Self::from_row)
            .map_err(|e| e.to_string())?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| e.to_string())
    }
}

impl PartnersPageContent {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(PartnersPageContent {
            id: row.get("id")?,
            title_ar: row.get("title_ar")?,
            title_fr: row.get("title_fr")?,
            intro_ar: row.get("intro_ar")?,
            intro_fr: row.get("intro_fr")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// The singleton row. First match wins if the table somehow holds more.
    pub fn find(pool: &DbPool) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM partners_page_content ORDER BY id LIMIT 1",
            [],
            Self::from_row,
        )
        .ok()
    }
}

fn upsert_content(tx: &Transaction, c: &PartnersPageContentForm) -> Result<(), String> {
    let existing: Option<i64> = tx
        .query_row(
            "SELECT id FROM partners_page_content ORDER BY id LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| e.to_string())?;

    match existing {
        Some(id) => tx.execute(
            "UPDATE partners_page_content SET title_ar=?1, title_fr=?2, intro_ar=?3,
             intro_fr=?4, updated_at=CURRENT_TIMESTAMP WHERE id=?5",
            params![c.title_ar, c.title_fr, c.intro_ar, c.intro_fr, id],
        ),
        None => tx.execute(
            "INSERT INTO partners_page_content (title_ar, title_fr, intro_ar, intro_fr)
             VALUES (?1, ?2, ?3, ?4)",
            params![c.title_ar, c.title_fr, c.intro_ar, c.intro_fr],
        ),
    }
    .map_err(|e| e.to_string())?;

    Ok(())
}

/// Replace the partners page wholesale: upsert the singleton content row,
/// then swap out both child collections (partners and collaborative
/// programs) for the submitted lists, fresh ids throughout.
///
/// One immediate transaction covers all three steps, so overlapping syncs
/// serialize and a failure anywhere rolls everything back. Anything the
/// caller leaves out of the lists is deleted — there is no merge.
pub fn replace_all(
    pool: &DbPool,
    content: Option<&PartnersPageContentForm>,
    partners: &[PartnerForm],
    programs: &[CollaborativeProgramForm],
) -> Result<(), String> {
    let mut conn = pool.get().map_err(|e| e.to_string())?;
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| e.to_string())?;

    if let Some(c) = content {
        upsert_content(&tx, c)?;
    }

    tx.execute("DELETE FROM partners", [])
        .map_err(|e| e.to_string())?;
    for (i, p) in partners.iter().enumerate() {
        tx.execute(
            "INSERT INTO partners
             (name_ar, name_fr, description_ar, description_fr, logo_url, website_url, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                p.name_ar,
                p.name_fr,
                p.description_ar,
                p.description_fr,
                p.logo_url,
                p.website_url,
                i as i64,
            ],
        )
        .map_err(|e| e.to_string())?;
    }

    tx.execute("DELETE FROM collaborative_programs", [])
        .map_err(|e| e.to_string())?;
    for (i, p) in programs.iter().enumerate() {
        tx.execute(
            "INSERT INTO collaborative_programs
             (title_ar, title_fr, description_ar, description_fr, image_url, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                p.title_ar,
                p.title_fr,
                p.description_ar,
                p.description_fr,
                p.image_url,
                i as i64,
            ],
        )
        .map_err(|e| e.to_string())?;
    }

    tx.commit().map_err(|e| e.to_string())
}
