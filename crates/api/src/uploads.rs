//! Multipart upload handling: filesystem storage plus form decoding helpers.
//!
//! [`UploadStore`] owns the upload root directory. Validation happens in
//! `beacon_core::uploads` before any byte is written; this module adds the
//! actual disk I/O and the mapping between public `/uploads/...` paths and
//! on-disk locations so handlers can delete replaced files.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use beacon_core::error::CoreError;
use beacon_core::types::Timestamp;
use beacon_core::uploads::{stored_filename, validate_image_upload};
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{AppError, AppResult};

/// Public URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// One stored upload: the public path the frontend uses plus the file
/// metadata the owning document records.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// URL path, e.g. `/uploads/team/jane_doe-<uuid>.png`.
    pub public_path: String,
    pub file_size: i64,
    pub mime_type: String,
    /// Pixel dimensions read from the image header, when decodable.
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Writes validated image uploads under a single root directory and maps
/// public `/uploads/...` paths back to disk for deletion.
#[derive(Debug)]
pub struct UploadStore {
    root: PathBuf,
    max_bytes: u64,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    /// The on-disk directory files are written under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate and store one uploaded image under `subdir`.
    ///
    /// Rejects non-image extensions/MIME types and oversize files before
    /// anything touches the filesystem.
    pub async fn save(
        &self,
        subdir: &str,
        original_name: &str,
        content_type: Option<&str>,
        data: &[u8],
    ) -> AppResult<StoredFile> {
        let ext = validate_image_upload(original_name, content_type, data.len() as u64, self.max_bytes)?;
        let filename = stored_filename(original_name, &ext);

        let dir = self.root.join(subdir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload directory: {e}")))?;
        tokio::fs::write(dir.join(&filename), data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write uploaded file: {e}")))?;

        let (width, height) = match image_dimensions(data) {
            Some((w, h)) => (i32::try_from(w).ok(), i32::try_from(h).ok()),
            None => (None, None),
        };

        Ok(StoredFile {
            public_path: format!("{PUBLIC_PREFIX}/{subdir}/{filename}"),
            file_size: data.len() as i64,
            mime_type: mime_for_extension(&ext).to_string(),
            width,
            height,
        })
    }

    /// Best-effort removal of a previously stored file. A missing file or
    /// filesystem failure is logged and otherwise ignored; document
    /// deletion must not hinge on it.
    pub async fn remove(&self, public_path: &str) {
        let Some(disk) = self.disk_path(public_path) else {
            tracing::warn!(path = %public_path, "Not a managed upload path, skipping file delete");
            return;
        };
        if let Err(e) = tokio::fs::remove_file(&disk).await {
            tracing::warn!(path = %public_path, error = %e, "Failed to delete stored file");
        }
    }

    /// Map a public `/uploads/...` path back to its on-disk location.
    ///
    /// Only plain relative components resolve; empty, `.` and `..`
    /// segments return `None` so a stored path can never reach outside
    /// the upload root.
    fn disk_path(&self, public_path: &str) -> Option<PathBuf> {
        let rel = public_path
            .strip_prefix(PUBLIC_PREFIX)?
            .strip_prefix('/')?;
        if rel.is_empty() || rel.split('/').any(|c| c.is_empty() || c == "." || c == "..") {
            return None;
        }
        Some(self.root.join(rel))
    }
}

/// Delete the previous file after an image column change. No-op when no
/// new image arrived or the path is unchanged.
pub async fn remove_replaced(store: &UploadStore, old: Option<&str>, new: Option<&str>) {
    if let (Some(old), Some(new)) = (old, new) {
        if old != new {
            store.remove(old).await;
        }
    }
}

/// MIME type recorded for a stored file, from its validated extension.
fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Pixel dimensions from the encoded image header, if the format is
/// recognized. Decodes the header only, not the pixel data.
pub fn image_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

/// True when the request body is `multipart/form-data`.
pub fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
}

/// One multipart request flattened into text fields plus stored images.
///
/// Every file part (any field name) is validated and written to the
/// store in stream order; text parts land in `fields` by name.
#[derive(Debug)]
pub struct ImageForm {
    pub fields: HashMap<String, String>,
    pub images: Vec<StoredFile>,
}

impl ImageForm {
    /// Public path of the first uploaded file, for single-image resources.
    pub fn first_image_path(&self) -> Option<String> {
        self.images.first().map(|f| f.public_path.clone())
    }
}

/// Drain a multipart stream, storing every file part under `subdir`.
///
/// Fails fast on the first invalid part. Files already stored by the
/// same request are removed again, so a rejected upload leaves nothing
/// on disk.
pub async fn collect_image_form(
    store: &UploadStore,
    subdir: &str,
    mut multipart: Multipart,
) -> AppResult<ImageForm> {
    let mut fields = HashMap::new();
    let mut images = Vec::new();

    if let Err(e) = drain_form(store, subdir, &mut multipart, &mut fields, &mut images).await {
        for stored in &images {
            store.remove(&stored.public_path).await;
        }
        return Err(e);
    }

    Ok(ImageForm { fields, images })
}

async fn drain_form(
    store: &UploadStore,
    subdir: &str,
    multipart: &mut Multipart,
    fields: &mut HashMap<String, String>,
    images: &mut Vec<StoredFile>,
) -> AppResult<()> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if let Some(original) = field.file_name().map(ToString::to_string) {
            let content_type = field.content_type().map(ToString::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            let stored = store
                .save(subdir, &original, content_type.as_deref(), &data)
                .await?;
            images.push(stored);
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            fields.insert(name, value);
        }
    }

    Ok(())
}

/// Required text form field; empty or missing is a validation error.
pub fn require_text(fields: &HashMap<String, String>, name: &str) -> AppResult<String> {
    optional_text(fields, name)
        .ok_or_else(|| AppError::Core(CoreError::Validation(format!("{name} is required"))))
}

/// Optional text form field; empty values collapse to `None`.
pub fn optional_text(fields: &HashMap<String, String>, name: &str) -> Option<String> {
    fields
        .get(name)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Optional integer form field; non-numeric input is a validation error.
pub fn parse_i32_field(fields: &HashMap<String, String>, name: &str) -> AppResult<Option<i32>> {
    match optional_text(fields, name) {
        None => Ok(None),
        Some(raw) => raw.parse::<i32>().map(Some).map_err(|_| {
            AppError::Core(CoreError::Validation(format!(
                "'{name}' must be an integer, got '{raw}'"
            )))
        }),
    }
}

/// Optional timestamp form field. Accepts RFC 3339 or a bare
/// `YYYY-MM-DD` date, which becomes midnight UTC.
pub fn parse_datetime_field(
    fields: &HashMap<String, String>,
    name: &str,
) -> AppResult<Option<Timestamp>> {
    let Some(raw) = optional_text(fields, name) else {
        return Ok(None);
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Some(midnight.and_utc()));
        }
    }
    Err(AppError::Core(CoreError::Validation(format!(
        "'{name}' must be an RFC 3339 timestamp or YYYY-MM-DD date, got '{raw}'"
    ))))
}
