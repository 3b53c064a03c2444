#[macro_use]
extern crate rocket;

use rocket::fs::FileServer;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde_json::{json, Value};

mod boot;
mod db;
mod models;
mod routes;
mod storage;

mod tests;

#[catch(400)]
fn bad_request() -> Custom<Json<Value>> {
    Custom(
        Status::BadRequest,
        Json(json!({ "success": false, "error": "Bad request" })),
    )
}

#[catch(404)]
fn not_found() -> Custom<Json<Value>> {
    Custom(
        Status::NotFound,
        Json(json!({ "success": false, "error": "Not found" })),
    )
}

#[catch(422)]
fn unprocessable() -> Custom<Json<Value>> {
    Custom(
        Status::UnprocessableEntity,
        Json(json!({ "success": false, "error": "Malformed request body" })),
    )
}

#[catch(500)]
fn server_error() -> Custom<Json<Value>> {
    Custom(
        Status::InternalServerError,
        Json(json!({ "success": false, "error": "Internal server error" })),
    )
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    // Boot check — verify/create directories before anything touches disk
    boot::run();

    let pool = db::init_pool().expect("Failed to initialize database pool");
    db::run_migrations(&pool).expect("Failed to run database migrations");
    db::seed_defaults(&pool).expect("Failed to seed default settings");

    rocket::build()
        .manage(pool)
        .mount("/uploads", FileServer::from("website/uploads"))
        .mount("/api", routes::api::routes())
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, server_error],
        )
}
