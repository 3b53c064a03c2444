use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use super::{created, fail, ok, ok_empty, ApiResponse, DeleteBody};
use crate::db::DbPool;
use crate::models::article::{Article, ArticleForm};

#[get("/articles")]
pub fn articles_list(pool: &State<DbPool>) -> ApiResponse {
    match Article::list(pool) {
        Ok(items) => ok(serde_json::to_value(items).unwrap_or_default()),
        Err(e) => fail("fetch articles", &e),
    }
}

#[post("/articles", format = "json", data = "<form>")]
pub fn article_create(pool: &State<DbPool>, form: Json<ArticleForm>) -> ApiResponse {
    match Article::create(pool, &form) {
        Ok(id) => match Article::find_by_id(pool, id) {
            Some(item) => created(serde_json::to_value(item).unwrap_or_default()),
            None => created(json!({ "id": id })),
        },
        Err(e) => fail("create article", &e),
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticleUpdate {
    pub id: i64,
    #[serde(flatten)]
    pub form: ArticleForm,
}

#[put("/articles", format = "json", data = "<body>")]
pub fn article_update(pool: &State<DbPool>, body: Json<ArticleUpdate>) -> ApiResponse {
    match Article::update(pool, body.id, &body.form) {
        Ok(()) => match Article::find_by_id(pool, body.id) {
            Some(item) => ok(serde_json::to_value(item).unwrap_or_default()),
            None => fail("update article", &format!("no article with id {}", body.id)),
        },
        Err(e) => fail("update article", &e),
    }
}

#[delete("/articles", format = "json", data = "<body>")]
pub fn article_delete(pool: &State<DbPool>, body: Json<DeleteBody>) -> ApiResponse {
    match Article::delete(pool, body.id) {
        Ok(()) => ok_empty(),
        Err(e) => fail("delete article", &e),
    }
}
