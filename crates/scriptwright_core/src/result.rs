//! The value returned by one generation call.

use crate::{CompetitorAnalysis, ContinuationRequest, Scene, Script, SeriesBible, Suggestions};
use scriptwright_error::{RequestError, RequestErrorKind};
use serde::{Deserialize, Serialize};

/// A complete generation result, owned by the caller once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Mode-prefixed identifier, e.g. `analysis_1700000000000`
    pub id: String,
    /// Analysis of the reference video (placeholder in continuation mode)
    #[serde(rename = "competitorAnalysis")]
    pub competitor_analysis: CompetitorAnalysis,
    /// The generated script
    #[serde(rename = "optimizedScript")]
    pub script: Script,
    /// Title and thumbnail candidates
    pub suggestions: Suggestions,
    /// Continuity record for the next episode
    #[serde(rename = "seriesBible")]
    pub series_bible: SeriesBible,
}

impl GenerationResult {
    /// The final scene of the script, which the next episode continues from.
    pub fn last_scene(&self) -> Option<&Scene> {
        self.script.last_scene()
    }

    /// Serialized series bible, as a continuation request expects it.
    pub fn series_bible_json(&self) -> Result<String, RequestError> {
        serde_json::to_string_pretty(&self.series_bible)
            .map_err(|e| RequestError::new(RequestErrorKind::InvalidSeriesBible(e.to_string())))
    }

    /// Serialized final scene, as a continuation request expects it.
    pub fn last_scene_json(&self) -> Result<String, RequestError> {
        let scene = self
            .last_scene()
            .ok_or_else(|| RequestError::missing("series", "last scene"))?;
        serde_json::to_string_pretty(scene)
            .map_err(|e| RequestError::missing("series", format!("last scene ({})", e)))
    }

    /// A continuation request for the episode after this one.
    ///
    /// # Errors
    ///
    /// Returns a request error if the script has no scenes to continue from.
    pub fn next_episode(&self, topic: impl Into<String>) -> Result<ContinuationRequest, RequestError> {
        Ok(ContinuationRequest {
            series_bible: self.series_bible_json()?,
            last_scene: self.last_scene_json()?,
            topic: topic.into(),
        })
    }
}
