use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use super::{created, fail, ok, ok_empty, ApiResponse, DeleteBody};
use crate::db::DbPool;
use crate::models::literary_event::{LiteraryEvent, LiteraryEventForm};
use crate::models::Status;

#[get("/events?<status>")]
pub fn events_list(pool: &State<DbPool>, status: Option<String>) -> ApiResponse {
    let status = status.as_deref().map(Status::parse);
    match LiteraryEvent::list(pool, status) {
        Ok(items) => ok(serde_json::to_value(items).unwrap_or_default()),
        Err(e) => fail("fetch events", &e),
    }
}

#[post("/events", format = "json", data = "<form>")]
pub fn event_create(pool: &State<DbPool>, form: Json<LiteraryEventForm>) -> ApiResponse {
    match LiteraryEvent::create(pool, &form) {
        Ok(id) => match LiteraryEvent::find_by_id(pool, id) {
            Some(item) => created(serde_json::to_value(item).unwrap_or_default()),
            None => created(json!({ "id": id })),
        },
        Err(e) => fail("create event", &e),
    }
}

#[derive(Debug, Deserialize)]
pub struct LiteraryEventUpdate {
    pub id: i64,
    #[serde(flatten)]
    pub form: LiteraryEventForm,
}

#[put("/events", format = "json", data = "<body>")]
pub fn event_update(pool: &State<DbPool>, body: Json<LiteraryEventUpdate>) -> ApiResponse {
    match LiteraryEvent::update(pool, body.id, &body.form) {
        Ok(()) => match LiteraryEvent::find_by_id(pool, body.id) {
            Some(item) => ok(serde_json::to_value(item).unwrap_or_default()),
            None => fail("update event", &format!("no event with id {}", body.id)),
        },
        Err(e) => fail("update event", &e),
    }
}

#[delete("/events", format = "json", data = "<body>")]
pub fn event_delete(pool: &State<DbPool>, body: Json<DeleteBody>) -> ApiResponse {
    match LiteraryEvent::delete(pool, body.id) {
        Ok(()) => ok_empty(),
        Err(e) => fail("delete event", &e),
    }
}
