//! Photo attachments, kept inline as `data:` URIs.

use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub data_url: String,
}

pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, B64.encode(bytes))
}

/// Reads an image file into an in-memory attachment.
pub fn load_photo(path: &Path) -> AppResult<PhotoAttachment> {
    let mime = mime_for(path).ok_or_else(|| {
        AppError::InvalidPhoto(format!(
            "'{}' is not a png, jpg, gif or webp image",
            path.display()
        ))
    })?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::InvalidPhoto(format!("invalid file name: {}", path.display())))?
        .to_string();

    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(AppError::InvalidPhoto(format!("'{file_name}' is empty")));
    }

    tracing::debug!(file = %file_name, bytes = bytes.len(), "photo loaded");

    Ok(PhotoAttachment {
        file_name,
        data_url: encode_data_url(mime, &bytes),
    })
}
