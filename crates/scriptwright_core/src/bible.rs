//! The continuity record threaded through a series.

use crate::{CharacterProfile, ScriptOverview};
use scriptwright_error::{RequestError, RequestErrorKind};
use serde::{Deserialize, Serialize};

/// Series bible: the character, visual and tonal canon every episode must honor.
///
/// Created once from the overview of a fresh-analysis script, then supplied verbatim
/// with every continuation request.
///
/// # Examples
///
/// ```
/// use scriptwright_core::SeriesBible;
///
/// let text = r#"{
///     "ho_so_nhan_vat": [],
///     "phong_cach_hinh_anh": "Pixar-style 3D animation",
///     "tong_giong": "Warm",
///     "boi_canh_chung": "A mountain village"
/// }"#;
/// let bible = SeriesBible::parse(text)?;
/// assert_eq!(bible.visual_style, "Pixar-style 3D animation");
/// # Ok::<(), scriptwright_error::RequestError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesBible {
    /// Canonical characters; order carries no meaning
    #[serde(rename = "ho_so_nhan_vat")]
    pub characters: Vec<CharacterProfile>,
    /// Canonical visual style
    #[serde(rename = "phong_cach_hinh_anh")]
    pub visual_style: String,
    /// Canonical tonal style
    #[serde(rename = "tong_giong")]
    pub tone: String,
    /// Setting shared by every episode
    #[serde(rename = "boi_canh_chung")]
    pub shared_setting: String,
}

impl SeriesBible {
    /// Projects the continuity record out of a script overview.
    pub fn from_overview(overview: &ScriptOverview) -> Self {
        Self {
            characters: overview.characters.clone(),
            visual_style: overview.visual_style.clone(),
            tone: overview.tone.clone(),
            shared_setting: overview.setting.clone(),
        }
    }

    /// Parses a serialized bible supplied by the caller.
    pub fn parse(text: &str) -> Result<Self, RequestError> {
        serde_json::from_str(text).map_err(|e| {
            RequestError::new(RequestErrorKind::InvalidSeriesBible(e.to_string()))
        })
    }

    /// Looks up a character by name.
    pub fn character(&self, name: &str) -> Option<&CharacterProfile> {
        self.characters.iter().find(|c| c.name == name)
    }
}
