use std::path::Path;

use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::State;
use serde_json::json;

use super::{bad_request, fail, ok, ApiResponse};
use crate::db::DbPool;
use crate::models::settings::Setting;
use crate::storage::{self, UploadKind};

#[derive(FromForm)]
pub struct UploadForm<'f> {
    pub file: TempFile<'f>,
}

/// Accepts one image (≤ 5 MB) or PDF/DOC/DOCX document (≤ 10 MB). The file
/// goes to the external blob store when a token is configured; otherwise it
/// lands in the local public uploads directory. Either way the response
/// carries the URL the frontend should store.
#[post("/upload", data = "<form>")]
pub async fn upload(pool: &State<DbPool>, mut form: Form<UploadForm<'_>>) -> ApiResponse {
    let file = &mut form.file;

    let ext = match storage::resolve_extension(file) {
        Some(e) if !e.is_empty() => e,
        _ => return bad_request("Could not determine file type"),
    };
    let kind = match storage::classify(pool, &ext) {
        Some(k) => k,
        None => return bad_request("File type not allowed"),
    };

    let max = storage::max_upload_bytes(pool, kind);
    if file.len() > max {
        return bad_request(&format!(
            "File too large (limit {} MB)",
            max / (1024 * 1024)
        ));
    }

    let filename = format!("{}.{}", uuid::Uuid::new_v4(), ext);
    let dir = kind.dir();
    let _ = std::fs::create_dir_all(dir);
    let dest = Path::new(dir).join(&filename);

    if let Err(e) = file.persist_to(&dest).await {
        return fail("store upload", &e.to_string());
    }

    let bytes = match std::fs::read(&dest) {
        Ok(b) => b,
        Err(e) => return fail("store upload", &e.to_string()),
    };

    // SVG is text; everything else claiming to be an image must sniff as one.
    if kind == UploadKind::Image && ext != "svg" && !storage::sniff_image(&bytes) {
        let _ = std::fs::remove_file(&dest);
        return bad_request("File is not a valid image");
    }

    if let Some(token) = storage::blob_token(pool) {
        let endpoint = Setting::get_or(pool, "uploads_blob_endpoint", storage::DEFAULT_BLOB_ENDPOINT);
        let content_type = storage::content_type_for(&ext).to_string();
        let blob_name = filename.clone();

        let put = rocket::tokio::task::spawn_blocking(move || {
            storage::blob_put(&endpoint, &token, &blob_name, &content_type, bytes)
        })
        .await;

        match put {
            Ok(Ok(url)) => {
                let _ = std::fs::remove_file(&dest);
                return ok(json!({ "url": url }));
            }
            Ok(Err(e)) => log::warn!("Blob upload failed, keeping local copy: {}", e),
            Err(e) => log::warn!("Blob upload task panicked, keeping local copy: {}", e),
        }
    }

    ok(json!({ "url": kind.public_url(&filename) }))
}
