use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use super::{created, fail, ok, ok_empty, ApiResponse, DeleteBody};
use crate::db::DbPool;
use crate::models::book::{Book, BookForm};

#[get("/books")]
pub fn books_list(pool: &State<DbPool>) -> ApiResponse {
    match Book::list(pool) {
        Ok(items) => ok(serde_json::to_value(items).unwrap_or_default()),
        Err(e) => fail("fetch books", &e),
    }
}

#[post("/books", format = "json", data = "<form>")]
pub fn book_create(pool: &State<DbPool>, form: Json<BookForm>) -> ApiResponse {
    match Book::create(pool, &form) {
        Ok(id) => match Book::find_by_id(pool, id) {
            Some(item) => created(serde_json::to_value(item).unwrap_or_default()),
            None => created(json!({ "id": id })),
        },
        Err(e) => fail("create book", &e),
    }
}

#[derive(Debug, Deserialize)]
pub struct BookUpdate {
    pub id: i64,
    #[serde(flatten)]
    pub form: BookForm,
}

#[put("/books", format = "json", data = "<body>")]
pub fn book_update(pool: &State<DbPool>, body: Json<BookUpdate>) -> ApiResponse {
    match Book::update(pool, body.id, &body.form) {
        Ok(()) => match Book::find_by_id(pool, body.id) {
            Some(item) => ok(serde_json::to_value(item).unwrap_or_default()),
            None => fail("update book", &format!("no book with id {}", body.id)),
        },
        Err(e) => fail("update book", &e),
    }
}

#[delete("/books", format = "json", data = "<body>")]
pub fn book_delete(pool: &State<DbPool>, body: Json<DeleteBody>) -> ApiResponse {
    match Book::delete(pool, body.id) {
        Ok(()) => ok_empty(),
        Err(e) => fail("delete book", &e),
    }
}
