use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use super::{created, fail, ok, ok_empty, ApiResponse, DeleteBody};
use crate::db::DbPool;
use crate::models::exhibition::{Exhibition, ExhibitionForm};
use crate::models::Status;

#[get("/exhibitions?<status>")]
pub fn exhibitions_list(pool: &State<DbPool>, status: Option<String>) -> ApiResponse {
    let status = status.as_deref().map(Status::parse);
    match Exhibition::list(pool, status) {
        Ok(items) => ok(serde_json::to_value(items).unwrap_or_default()),
        Err(e) => fail("fetch exhibitions", &e),
    }
}

#[post("/exhibitions", format = "json", data = "<form>")]
pub fn exhibition_create(pool: &State<DbPool>, form: Json<ExhibitionForm>) -> ApiResponse {
    match Exhibition::create(pool, &form) {
        Ok(id) => match Exhibition::find_by_id(pool, id) {
            Some(item) => created(serde_json::to_value(item).unwrap_or_default()),
            None => created(json!({ "id": id })),
        },
        Err(e) => fail("create exhibition", &e),
    }
}

#[derive(Debug, Deserialize)]
pub struct ExhibitionUpdate {
    pub id: i64,
    #[serde(flatten)]
    pub form: ExhibitionForm,
}

#[put("/exhibitions", format = "json", data = "<body>")]
pub fn exhibition_update(pool: &State<DbPool>, body: Json<ExhibitionUpdate>) -> ApiResponse {
    match Exhibition::update(pool, body.id, &body.form) {
        Ok(()) => match Exhibition::find_by_id(pool, body.id) {
            Some(item) => ok(serde_json::to_value(item).unwrap_or_default()),
            None => fail("update exhibition", &format!("no exhibition with id {}", body.id)),
        },
        Err(e) => fail("update exhibition", &e),
    }
}

#[delete("/exhibitions", format = "json", data = "<body>")]
pub fn exhibition_delete(pool: &State<DbPool>, body: Json<DeleteBody>) -> ApiResponse {
    match Exhibition::delete(pool, body.id) {
        Ok(()) => ok_empty(),
        Err(e) => fail("delete exhibition", &e),
    }
}
