//! Media source types for multimodal content.

use serde::{Deserialize, Serialize};

/// Where inline media bytes come from.
///
/// # Examples
///
/// ```
/// use scriptwright_core::MediaSource;
///
/// let base64 = MediaSource::Base64("iVBORw0KGgo=".to_string());
/// let binary = MediaSource::Binary(vec![0x89, 0x50, 0x4E, 0x47]);
/// assert_ne!(base64, binary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// Base64-encoded content
    Base64(String),
    /// Raw binary data, encoded by the driver before sending
    Binary(Vec<u8>),
}
