use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde_json::{json, Value};

pub mod activities;
pub mod articles;
pub mod books;
pub mod channel;
pub mod events;
pub mod exhibitions;
pub mod partners;
pub mod publications;
pub mod upload;
pub mod workshops;

/// Body shared by the single-table DELETE endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct DeleteBody {
    pub id: i64,
}

/// Every handler responds with the same JSON envelope:
/// `{ "success": true, "data": ... }` or `{ "success": false, "error": ... }`.
pub type ApiResponse = Custom<Json<Value>>;

pub(crate) fn ok(data: Value) -> ApiResponse {
    Custom(Status::Ok, Json(json!({ "success": true, "data": data })))
}

pub(crate) fn ok_empty() -> ApiResponse {
    Custom(Status::Ok, Json(json!({ "success": true })))
}

pub(crate) fn created(data: Value) -> ApiResponse {
    Custom(Status::Created, Json(json!({ "success": true, "data": data })))
}

/// Log the real error server-side; hand the client a generic failure.
pub(crate) fn fail(action: &str, err: &str) -> ApiResponse {
    log::error!("Failed to {}: {}", action, err);
    Custom(
        Status::InternalServerError,
        Json(json!({ "success": false, "error": format!("Failed to {}", action) })),
    )
}

pub(crate) fn bad_request(msg: &str) -> ApiResponse {
    Custom(
        Status::BadRequest,
        Json(json!({ "success": false, "error": msg })),
    )
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        exhibitions::exhibitions_list,
        exhibitions::exhibition_create,
        exhibitions::exhibition_update,
        exhibitions::exhibition_delete,
        events::events_list,
        events::event_create,
        events::event_update,
        events::event_delete,
        workshops::workshops_list,
        workshops::workshop_create,
        workshops::workshop_update,
        workshops::workshop_delete,
        workshops::categories_list,
        workshops::category_create,
        workshops::category_delete,
        articles::articles_list,
        articles::article_create,
        articles::article_update,
        articles::article_delete,
        publications::publications_list,
        publications::publication_create,
        publications::publication_update,
        publications::publication_delete,
        books::books_list,
        books::book_create,
        books::book_update,
        books::book_delete,
        partners::partners_get,
        partners::partners_sync,
        channel::channel_get,
        channel::channel_sync,
        activities::activities_list,
        activities::activity_delete,
        upload::upload,
    ]
}
