use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;

use super::{bad_request, fail, ok, ok_empty, ApiResponse};
use crate::db::DbPool;
use crate::models::activity::{self, ActivityId, ActivityKind};

#[get("/activities")]
pub fn activities_list(pool: &State<DbPool>) -> ApiResponse {
    match activity::list_all(pool) {
        Ok(items) => ok(serde_json::to_value(items).unwrap_or_default()),
        Err(e) => fail("fetch activities", &e),
    }
}

/// Accepts the tagged form `{"kind": "art", "id": 12}` or the legacy
/// composite string `{"id": "art-12"}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ActivityDeleteBody {
    Tagged { kind: ActivityKind, id: i64 },
    Composite { id: String },
}

#[delete("/activities", format = "json", data = "<body>")]
pub fn activity_delete(pool: &State<DbPool>, body: Json<ActivityDeleteBody>) -> ApiResponse {
    let target = match body.into_inner() {
        ActivityDeleteBody::Tagged { kind, id } => {
            if id <= 0 {
                return bad_request("Invalid activity id");
            }
            ActivityId { kind, id }
        }
        ActivityDeleteBody::Composite { id } => match ActivityId::parse(&id) {
            Some(t) => t,
            None => return bad_request("Invalid activity id"),
        },
    };

    match target.delete(pool) {
        Ok(()) => ok_empty(),
        Err(e) => fail("delete activity", &e),
    }
}
