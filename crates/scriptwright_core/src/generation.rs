//! Generation requests: production parameters plus a mode-specific payload.

use crate::{SceneBudget, SeriesBible};
use scriptwright_error::{BuilderError, BuilderErrorKind, RequestError, RequestErrorKind};
use serde::{Deserialize, Serialize};

/// Identifies which of the two generation modes a request uses.
///
/// The string form is the prefix of result identifiers.
///
/// # Examples
///
/// ```
/// use scriptwright_core::ScriptMode;
///
/// assert_eq!(ScriptMode::FreshAnalysis.to_string(), "analysis");
/// assert_eq!(ScriptMode::Continuation.as_ref(), "series");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
)]
pub enum ScriptMode {
    /// Analyze a competitor video and write a superior replacement
    #[strum(serialize = "analysis")]
    #[serde(rename = "analysis")]
    FreshAnalysis,
    /// Write the next episode of an existing series
    #[strum(serialize = "series")]
    #[serde(rename = "series")]
    Continuation,
}

/// Parameters shared by both modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionParams {
    /// Target video length in whole minutes
    pub minutes: u32,
    /// Genre or style label, e.g. "3D animation" or "documentary"
    pub genre: String,
    /// Language every line of dialogue must use
    pub dialogue_language: String,
    /// Narration voice descriptor
    pub voice: String,
}

impl ProductionParams {
    /// Scene budget for the requested duration.
    pub fn budget(&self) -> SceneBudget {
        SceneBudget::for_minutes(self.minutes)
    }

    /// Whether the genre label asks for 3D animation rather than live-action realism.
    pub fn wants_3d(&self) -> bool {
        self.genre.to_lowercase().contains("3d")
    }
}

/// A reference image supplied with a fresh-analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceImage {
    /// MIME type, e.g. "image/jpeg"
    pub mime_type: String,
    /// Raw image bytes
    pub data: Vec<u8>,
}

/// Payload of a fresh competitive-analysis request.
///
/// The builder requires the reference video and the competitive angle; everything
/// else defaults to empty.
///
/// # Examples
///
/// ```
/// use scriptwright_core::FreshAnalysisRequest;
///
/// let request = FreshAnalysisRequest::builder()
///     .reference_video("https://youtu.be/abc123")
///     .competitive_angle("Focus on the emotional payoff")
///     .target_keywords(vec!["bedtime story".to_string()])
///     .build()?;
/// assert_eq!(request.channel, None);
///
/// let incomplete = FreshAnalysisRequest::builder()
///     .reference_video("https://youtu.be/abc123")
///     .build();
/// assert!(incomplete.is_err());
/// # Ok::<(), scriptwright_core::FreshAnalysisRequestBuilderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct FreshAnalysisRequest {
    /// Identifier (usually a URL) of the video to analyze
    pub reference_video: String,
    /// The creator's own channel, used as a style reference
    #[builder(default, setter(into, strip_option))]
    pub channel: Option<String>,
    /// Style reference images
    #[builder(default)]
    pub images: Vec<ReferenceImage>,
    /// How the new script should beat the reference
    pub competitive_angle: String,
    /// Keywords the SEO block must target
    #[builder(default)]
    pub target_keywords: Vec<String>,
    /// Keywords offered for reference only
    #[builder(default)]
    pub suggested_keywords: Vec<String>,
}

impl FreshAnalysisRequest {
    /// Creates a builder.
    pub fn builder() -> FreshAnalysisRequestBuilder {
        FreshAnalysisRequestBuilder::default()
    }
}

impl From<FreshAnalysisRequestBuilderError> for BuilderError {
    #[track_caller]
    fn from(err: FreshAnalysisRequestBuilderError) -> Self {
        match err {
            FreshAnalysisRequestBuilderError::UninitializedField(field) => {
                BuilderError::new(BuilderErrorKind::MissingField(field.to_string()))
            }
            FreshAnalysisRequestBuilderError::ValidationError(reason) => {
                BuilderError::new(BuilderErrorKind::ValidationFailed(reason))
            }
        }
    }
}

/// Payload of a series-continuation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuationRequest {
    /// Serialized [`SeriesBible`] of the series
    pub series_bible: String,
    /// Serialized final scene of the previous episode
    pub last_scene: String,
    /// What the new episode is about
    pub topic: String,
}

impl ContinuationRequest {
    /// Parses the supplied series bible.
    pub fn bible(&self) -> Result<SeriesBible, RequestError> {
        SeriesBible::parse(&self.series_bible)
    }
}

/// The mode-specific part of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerationMode {
    /// Analyze a reference video and write a replacement
    FreshAnalysis(FreshAnalysisRequest),
    /// Continue an existing series
    Continuation(ContinuationRequest),
}

/// A complete generation request.
///
/// # Examples
///
/// ```
/// use scriptwright_core::{ContinuationRequest, GenerationRequest, ProductionParams, ScriptMode};
///
/// let params = ProductionParams {
///     minutes: 5,
///     genre: "3D animation".to_string(),
///     dialogue_language: "Vietnamese".to_string(),
///     voice: "Warm female narrator".to_string(),
/// };
/// let request = GenerationRequest::continuation(params, ContinuationRequest {
///     series_bible: String::new(),
///     last_scene: "{}".to_string(),
///     topic: "The river floods".to_string(),
/// });
///
/// assert_eq!(request.tag(), ScriptMode::Continuation);
/// assert!(request.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Parameters shared by both modes
    pub common: ProductionParams,
    /// Mode-specific payload
    pub mode: GenerationMode,
}

impl GenerationRequest {
    /// A fresh-analysis request.
    pub fn fresh_analysis(common: ProductionParams, request: FreshAnalysisRequest) -> Self {
        Self {
            common,
            mode: GenerationMode::FreshAnalysis(request),
        }
    }

    /// A series-continuation request.
    pub fn continuation(common: ProductionParams, request: ContinuationRequest) -> Self {
        Self {
            common,
            mode: GenerationMode::Continuation(request),
        }
    }

    /// Which mode this request uses.
    pub fn tag(&self) -> ScriptMode {
        match self.mode {
            GenerationMode::FreshAnalysis(_) => ScriptMode::FreshAnalysis,
            GenerationMode::Continuation(_) => ScriptMode::Continuation,
        }
    }

    /// Checks that the request carries every field its mode requires.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] for a zero duration, a blank required field, or a series
    /// bible that is not a valid [`SeriesBible`].
    pub fn validate(&self) -> Result<(), RequestError> {
        let mode = self.tag();
        if self.common.minutes == 0 {
            return Err(RequestError::new(RequestErrorKind::ZeroDuration));
        }
        require(mode, "genre", &self.common.genre)?;
        require(mode, "dialogue language", &self.common.dialogue_language)?;
        require(mode, "voice", &self.common.voice)?;

        match &self.mode {
            GenerationMode::FreshAnalysis(request) => {
                require(mode, "reference video", &request.reference_video)?;
                require(mode, "competitive angle", &request.competitive_angle)?;
            }
            GenerationMode::Continuation(request) => {
                require(mode, "series bible", &request.series_bible)?;
                require(mode, "last scene", &request.last_scene)?;
                require(mode, "new episode topic", &request.topic)?;
                request.bible()?;
            }
        }
        Ok(())
    }
}

fn require(mode: ScriptMode, field: &str, value: &str) -> Result<(), RequestError> {
    if value.trim().is_empty() {
        Err(RequestError::missing(mode.as_ref(), field))
    } else {
        Ok(())
    }
}
