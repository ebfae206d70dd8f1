//! Upload validation rules shared by every image-accepting endpoint.
//!
//! Pure functions only; the API crate owns the actual filesystem writes.

use uuid::Uuid;

use crate::error::CoreError;

/// File extensions accepted for image uploads (lowercase, no dot).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// MIME types accepted for image uploads.
pub const IMAGE_MIME_TYPES: &[&str] =
    &["image/png", "image/jpeg", "image/webp", "image/gif"];

/// Default cap on a single uploaded file (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Lowercased extension of `filename`, if any.
pub fn file_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Validate a candidate upload before anything is written to disk.
///
/// Returns the normalized extension on success. The extension allow-list
/// is the gate that matters; the declared MIME type is checked when
/// present, except `application/octet-stream`, which some clients send
/// for every file.
pub fn validate_image_upload(
    filename: &str,
    content_type: Option<&str>,
    size_bytes: u64,
    max_bytes: u64,
) -> Result<String, CoreError> {
    let ext = file_extension(filename)
        .ok_or_else(|| CoreError::Validation(format!("'{filename}' has no file extension")))?;
    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "unsupported image extension '{ext}', expected one of: {}",
            IMAGE_EXTENSIONS.join(", ")
        )));
    }
    if let Some(mime) = content_type {
        if mime != "application/octet-stream" && !IMAGE_MIME_TYPES.contains(&mime) {
            return Err(CoreError::Validation(format!(
                "unsupported content type '{mime}'"
            )));
        }
    }
    if size_bytes > max_bytes {
        return Err(CoreError::Validation(format!(
            "file is {size_bytes} bytes, the limit is {max_bytes}"
        )));
    }
    Ok(ext)
}

/// Collision-resistant stored filename: sanitized stem plus a random
/// suffix, e.g. `Team Photo.PNG` -> `team_photo-<uuid>.png`.
pub fn stored_filename(original: &str, ext: &str) -> String {
    let stem = original
        .rsplit_once('.')
        .map(|(s, _)| s)
        .unwrap_or(original);
    let mut safe: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    safe.truncate(40);
    if safe.trim_matches('_').is_empty() {
        safe = "upload".to_string();
    }
    format!("{safe}-{}.{ext}", Uuid::new_v4().simple())
}
