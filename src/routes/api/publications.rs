use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use super::{created, fail, ok, ok_empty, ApiResponse, DeleteBody};
use crate::db::DbPool;
use crate::models::publication::{PublicationIssue, PublicationIssueForm};

#[get("/publications")]
pub fn publications_list(pool: &State<DbPool>) -> ApiResponse {
    match PublicationIssue::list(pool) {
        Ok(items) => ok(serde_json::to_value(items).unwrap_or_default()),
        Err(e) => fail("fetch publications", &e),
    }
}

#[post("/publications", format = "json", data = "<form>")]
pub fn publication_create(pool: &State<DbPool>, form: Json<PublicationIssueForm>) -> ApiResponse {
    match PublicationIssue::create(pool, &form) {
        Ok(id) => match PublicationIssue::find_by_id(pool, id) {
            Some(item) => created(serde_json::to_value(item).unwrap_or_default()),
            None => created(json!({ "id": id })),
        },
        Err(e) => fail("create publication", &e),
    }
}

#[derive(Debug, Deserialize)]
pub struct PublicationUpdate {
    pub id: i64,
    #[serde(flatten)]
    pub form: PublicationIssueForm,
}

#[put("/publications", format = "json", data = "<body>")]
pub fn publication_update(pool: &State<DbPool>, body: Json<PublicationUpdate>) -> ApiResponse {
    match PublicationIssue::update(pool, body.id, &body.form) {
        Ok(()) => match PublicationIssue::find_by_id(pool, body.id) {
            Some(item) => ok(serde_json::to_value(item).unwrap_or_default()),
            None => fail("update publication", &format!("no publication with id {}", body.id)),
        },
        Err(e) => fail("update publication", &e),
    }
}

#[delete("/publications", format = "json", data = "<body>")]
pub fn publication_delete(pool: &State<DbPool>, body: Json<DeleteBody>) -> ApiResponse {
    match PublicationIssue::delete(pool, body.id) {
        Ok(()) => ok_empty(),
        Err(e) => fail("delete publication", &e),
    }
}
