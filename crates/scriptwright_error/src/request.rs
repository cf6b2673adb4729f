//! Request-shape error types.

/// Ways a generation request can be malformed.
///
/// All of these are detected synchronously, before any model call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RequestErrorKind {
    /// Target duration must be at least one minute
    #[display("Target duration must be at least 1 minute")]
    ZeroDuration,
    /// A field required by the request mode is missing or blank
    #[display("Missing required field for {} request: {}", mode, field)]
    MissingField {
        /// Mode tag of the request ("analysis", "series", "keywords")
        mode: String,
        /// Name of the missing field
        field: String,
    },
    /// The supplied series bible is not a valid continuity record
    #[display("Series bible is not a valid continuity record: {}", _0)]
    InvalidSeriesBible(String),
    /// A reference image could not be prepared for the model call
    #[display("Failed to encode reference image {}: {}", index, reason)]
    ImageEncoding {
        /// Position of the image in the request
        index: usize,
        /// What went wrong
        reason: String,
    },
}

/// Request-shape error with location tracking.
///
/// # Examples
///
/// ```
/// use scriptwright_error::{RequestError, RequestErrorKind};
///
/// let err = RequestError::new(RequestErrorKind::MissingField {
///     mode: "series".to_string(),
///     field: "new episode topic".to_string(),
/// });
/// assert!(format!("{}", err).contains("new episode topic"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The kind of error that occurred
    pub kind: RequestErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RequestError {
    /// Create a new request error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a missing field in the given mode.
    #[track_caller]
    pub fn missing(mode: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::MissingField {
            mode: mode.into(),
            field: field.into(),
        })
    }
}
