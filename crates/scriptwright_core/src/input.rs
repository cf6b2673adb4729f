//! Input types for model requests.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// Supported input parts.
///
/// # Examples
///
/// ```
/// use scriptwright_core::{Input, MediaSource};
///
/// let text = Input::Text("Write the next episode.".to_string());
/// let image = Input::Image {
///     mime: "image/png".to_string(),
///     source: MediaSource::Base64("iVBORw0KGgo=".to_string()),
/// };
/// assert!(matches!(text, Input::Text(_)));
/// assert!(matches!(image, Input::Image { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Reference image (PNG, JPEG, WebP, ...).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: String,
        /// Media source (base64 or raw bytes)
        source: MediaSource,
    },
}
