//! Reference-image loading.

use scriptwright::{ReferenceImage, ScriptwrightResult, StorageError, StorageErrorKind};
use std::path::Path;
use tracing::debug;

/// Guess an image MIME type from a file extension.
pub fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

/// Read an image file into a reference image.
///
/// Files with an unknown extension are sent as `application/octet-stream` and rejected
/// by request validation.
pub async fn load_reference_image(path: &Path) -> ScriptwrightResult<ReferenceImage> {
    let data = tokio::fs::read(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
    })?;
    let mime_type = mime_from_extension(path).unwrap_or("application/octet-stream");
    debug!(path = %path.display(), mime_type, bytes = data.len(), "Loaded reference image");
    Ok(ReferenceImage {
        mime_type: mime_type.to_string(),
        data,
    })
}

/// Read all images, preserving order.
pub async fn load_reference_images(
    paths: &[impl AsRef<Path>],
) -> ScriptwrightResult<Vec<ReferenceImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        images.push(load_reference_image(path.as_ref()).await?);
    }
    Ok(images)
}

/// Read a whole text file.
pub async fn read_text(path: &Path) -> ScriptwrightResult<String> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
    })?;
    Ok(text)
}
