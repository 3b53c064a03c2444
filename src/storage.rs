use rocket::fs::TempFile;

use crate::db::DbPool;
use crate::models::settings::Setting;

pub const UPLOADS_DIR: &str = "website/uploads";
pub const DOCUMENTS_DIR: &str = "website/uploads/documents";
pub const DEFAULT_BLOB_ENDPOINT: &str = "https://blob.vercel-storage.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Document,
}

impl UploadKind {
    pub fn dir(&self) -> &'static str {
        match self {
            UploadKind::Image => UPLOADS_DIR,
            UploadKind::Document => DOCUMENTS_DIR,
        }
    }

    pub fn public_url(&self, filename: &str) -> String {
        match self {
            UploadKind::Image => format!("/uploads/{}", filename),
            UploadKind::Document => format!("/uploads/documents/{}", filename),
        }
    }
}

/// Resolve the file extension: content-type first, then the original
/// filename (raw_name), then the sanitized field name.
pub fn resolve_extension(file: &TempFile<'_>) -> Option<String> {
    file.content_type()
        .and_then(|ct| ct.extension())
        .map(|e| e.to_string().to_lowercase())
        .or_else(|| {
            file.raw_name().and_then(|rn| {
                let s = rn.dangerous_unsafe_unsanitized_raw().as_str().to_string();
                s.rsplit('.').next().map(|e| e.to_lowercase())
            })
        })
        .or_else(|| {
            file.name()
                .and_then(|n| n.rsplit('.').next())
                .map(|e| e.to_lowercase())
        })
}

/// Classify an extension against the configured allow-lists.
/// Returns None for anything that is neither an image nor a document.
pub fn classify(pool: &DbPool, ext: &str) -> Option<UploadKind> {
    let images = Setting::get_or(pool, "uploads_allowed_images", "jpg,jpeg,png,gif,webp,svg");
    if images.split(',').any(|a| a.trim().eq_ignore_ascii_case(ext)) {
        return Some(UploadKind::Image);
    }
    let docs = Setting::get_or(pool, "uploads_allowed_documents", "pdf,doc,docx");
    if docs.split(',').any(|a| a.trim().eq_ignore_ascii_case(ext)) {
        return Some(UploadKind::Document);
    }
    None
}

/// Configured size ceiling in bytes: 5 MB for images, 10 MB for documents.
pub fn max_upload_bytes(pool: &DbPool, kind: UploadKind) -> u64 {
    let (key, default_mb) = match kind {
        UploadKind::Image => ("uploads_max_image_mb", 5),
        UploadKind::Document => ("uploads_max_document_mb", 10),
    };
    let mb = Setting::get_i64(pool, key);
    let mb = if mb <= 0 { default_mb } else { mb };
    (mb as u64) * 1024 * 1024
}

/// Magic-byte check that an upload claiming to be an image really is one.
/// SVG is text and has no magic bytes; callers skip it.
pub fn sniff_image(bytes: &[u8]) -> bool {
    image::guess_format(bytes).is_ok()
}

pub fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// The blob token, from settings or the environment. Empty means unset.
pub fn blob_token(pool: &DbPool) -> Option<String> {
    Setting::get(pool, "uploads_blob_token")
        .filter(|t| !t.trim().is_empty())
        .or_else(|| {
            std::env::var("BLOB_READ_WRITE_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty())
        })
}

/// PUT the bytes to the external blob store and return the public URL it
/// assigns. Blocking; call from a blocking-safe context.
pub fn blob_put(
    endpoint: &str,
    token: &str,
    filename: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<String, String> {
    let client = reqwest::blocking::Client::new();
    let url = format!("{}/{}", endpoint.trim_end_matches('/'), filename);

    let resp = client
        .put(&url)
        .bearer_auth(token)
        .header("x-api-version", "7")
        .header("x-content-type", content_type)
        .body(bytes)
        .send()
        .map_err(|e| e.to_string())?;

    if !resp.status().is_success() {
        return Err(format!("blob store returned {}", resp.status()));
    }

    let body: serde_json::Value = resp.json().map_err(|e| e.to_string())?;
    body.get("url")
        .and_then(|u| u.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| "blob store response missing url".to_string())
}
