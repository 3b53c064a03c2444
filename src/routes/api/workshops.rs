use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use super::{created, fail, ok, ok_empty, ApiResponse, DeleteBody};
use crate::db::DbPool;
use crate::models::workshop::{Workshop, WorkshopCategory, WorkshopCategoryForm, WorkshopForm};
use crate::models::Status;

#[derive(Debug, FromForm)]
pub struct WorkshopQuery {
    pub status: Option<String>,
    #[field(name = "categoryId")]
    pub category_id: Option<i64>,
}

#[get("/workshops?<q..>")]
pub fn workshops_list(pool: &State<DbPool>, q: WorkshopQuery) -> ApiResponse {
    let status = q.status.as_deref().map(Status::parse);
    match Workshop::list(pool, status, q.category_id) {
        Ok(items) => ok(serde_json::to_value(items).unwrap_or_default()),
        Err(e) => fail("fetch workshops", &e),
    }
}

#[post("/workshops", format = "json", data = "<form>")]
pub fn workshop_create(pool: &State<DbPool>, form: Json<WorkshopForm>) -> ApiResponse {
    match Workshop::create(pool, &form) {
        Ok(id) => match Workshop::find_by_id(pool, id) {
            Some(item) => created(serde_json::to_value(item).unwrap_or_default()),
            None => created(json!({ "id": id })),
        },
        Err(e) => fail("create workshop", &e),
    }
}

#[derive(Debug, Deserialize)]
pub struct WorkshopUpdate {
    pub id: i64,
    #[serde(flatten)]
    pub form: WorkshopForm,
}

#[put("/workshops", format = "json", data = "<body>")]
pub fn workshop_update(pool: &State<DbPool>, body: Json<WorkshopUpdate>) -> ApiResponse {
    match Workshop::update(pool, body.id, &body.form) {
        Ok(()) => match Workshop::find_by_id(pool, body.id) {
            Some(item) => ok(serde_json::to_value(item).unwrap_or_default()),
            None => fail("update workshop", &format!("no workshop with id {}", body.id)),
        },
        Err(e) => fail("update workshop", &e),
    }
}

#[delete("/workshops", format = "json", data = "<body>")]
pub fn workshop_delete(pool: &State<DbPool>, body: Json<DeleteBody>) -> ApiResponse {
    match Workshop::delete(pool, body.id) {
        Ok(()) => ok_empty(),
        Err(e) => fail("delete workshop", &e),
    }
}

// ── Workshop categories ────────────────────────────────

#[get("/workshops/categories")]
pub fn categories_list(pool: &State<DbPool>) -> ApiResponse {
    match WorkshopCategory::list(pool) {
        Ok(items) => ok(serde_json::to_value(items).unwrap_or_default()),
        Err(e) => fail("fetch workshop categories", &e),
    }
}

#[post("/workshops/categories", format = "json", data = "<form>")]
pub fn category_create(pool: &State<DbPool>, form: Json<WorkshopCategoryForm>) -> ApiResponse {
    match WorkshopCategory::create(pool, &form) {
        Ok(id) => created(json!({ "id": id, "nameAr": form.name_ar, "nameFr": form.name_fr })),
        Err(e) => fail("create workshop category", &e),
    }
}

#[delete("/workshops/categories", format = "json", data = "<body>")]
pub fn category_delete(pool: &State<DbPool>, body: Json<DeleteBody>) -> ApiResponse {
    match WorkshopCategory::delete(pool, body.id) {
        Ok(()) => ok_empty(),
        Err(e) => fail("delete workshop category", &e),
    }
}
