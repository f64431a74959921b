use std::path::Path;

use base64::{Engine as _, engine::general_purpose};

use crate::domain::common::entities::app_errors::CoreError;

pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Read a local image fully into memory so it can be stored inline with a recipe
pub async fn read_image_as_data_uri(path: &Path) -> Result<String, CoreError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        tracing::error!("Failed to read image {}: {}", path.display(), e);
        CoreError::ImageReadFailed(format!("{}: {}", path.display(), e))
    })?;

    Ok(encode_data_uri(mime_type_for(path), &bytes))
}
