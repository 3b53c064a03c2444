use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use super::{fail, ok, ApiResponse};
use crate::db::DbPool;
use crate::models::channel::{self, ChannelContent, ChannelContentForm, ChannelVideo, ChannelVideoForm};

#[get("/channel")]
pub fn channel_get(pool: &State<DbPool>) -> ApiResponse {
    let content = ChannelContent::find(pool);
    let videos = match ChannelVideo::list(pool) {
        Ok(v) => v,
        Err(e) => return fail("fetch channel page", &e),
    };
    ok(json!({
        "content": content,
        "videos": videos,
    }))
}

/// Full-replacement payload for the channel page. `videos` is the complete
/// new list; anything not in it is deleted.
#[derive(Debug, Deserialize)]
pub struct ChannelSync {
    pub content: Option<ChannelContentForm>,
    #[serde(default)]
    pub videos: Vec<ChannelVideoForm>,
}

#[put("/channel", format = "json", data = "<body>")]
pub fn channel_sync(pool: &State<DbPool>, body: Json<ChannelSync>) -> ApiResponse {
    match channel::replace_all(pool, body.content.as_ref(), &body.videos) {
        Ok(()) => channel_get(pool),
        Err(e) => fail("save channel page", &e),
    }
}
