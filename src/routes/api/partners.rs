use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use super::{fail, ok, ApiResponse};
use crate::db::DbPool;
use crate::models::partner::{
    self, CollaborativeProgram, CollaborativeProgramForm, Partner, PartnerForm,
    PartnersPageContent, PartnersPageContentForm,
};

#[get("/partners")]
pub fn partners_get(pool: &State<DbPool>) -> ApiResponse {
    let content = PartnersPageContent::find(pool);
    let partners = match Partner::list(pool) {
        Ok(p) => p,
        Err(e) => return fail("fetch partners page", &e),
    };
    let programs = match CollaborativeProgram::list(pool) {
        Ok(p) => p,
        Err(e) => return fail("fetch partners page", &e),
    };
    ok(json!({
        "content": content,
        "partners": partners,
        "programs": programs,
    }))
}

/// Full-replacement payload for the partners page. Both lists are complete
/// new collections; anything not in them is deleted.
#[derive(Debug, Deserialize)]
pub struct PartnersSync {
    pub content: Option<PartnersPageContentForm>,
    #[serde(default)]
    pub partners: Vec<PartnerForm>,
    #[serde(default)]
    pub programs: Vec<CollaborativeProgramForm>,
}

#[put("/partners", format = "json", data = "<body>")]
pub fn partners_sync(pool: &State<DbPool>, body: Json<PartnersSync>) -> ApiResponse {
    match partner::replace_all(pool, body.content.as_ref(), &body.partners, &body.programs) {
        Ok(()) => partners_get(pool),
        Err(e) => fail("save partners page", &e),
    }
}
