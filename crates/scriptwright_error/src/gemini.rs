//! Gemini-specific error types.
//!
//! These cover the transport/service class of failures. They are surfaced to the
//! caller exactly as the driver produced them; nothing in the workspace retries.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// API request failed before a response arrived
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The response envelope was not the shape the API documents
    #[display("Malformed Gemini response envelope: {}", _0)]
    ResponseEnvelope(String),
    /// The model refused the prompt
    #[display("Prompt blocked by Gemini: {}", _0)]
    PromptBlocked(String),
}

impl GeminiErrorKind {
    /// True for HTTP statuses that indicate exhausted quota or credentials problems.
    pub fn is_quota_or_auth(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::MissingApiKey
                | GeminiErrorKind::HttpError {
                    status_code: 401 | 403 | 429,
                    ..
                }
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use scriptwright_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert!(err.kind.is_quota_or_auth());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
