//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, ContractError, GeminiError, HttpError, JsonError, RequestError,
    StorageError,
};

/// Every failure a Scriptwright operation can surface.
///
/// # Examples
///
/// ```
/// use scriptwright_error::{ScriptwrightError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ScriptwrightError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScriptwrightErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Script library storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Gemini transport or service error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Request did not carry the fields its mode requires
    #[from(RequestError)]
    Request(RequestError),
    /// Model output violated the response contract
    #[from(ContractError)]
    Contract(ContractError),
}

/// Scriptwright error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scriptwright_error::{ScriptwrightErrorKind, ScriptwrightResult, ConfigError};
///
/// fn might_fail() -> ScriptwrightResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ScriptwrightErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scriptwright Error: {}", _0)]
pub struct ScriptwrightError(Box<ScriptwrightErrorKind>);

impl ScriptwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: ScriptwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScriptwrightErrorKind {
        &self.0
    }

    /// True when the model answered but its output broke the response contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self.kind(), ScriptwrightErrorKind::Contract(_))
    }

    /// True when the request was rejected before any model call.
    pub fn is_request_error(&self) -> bool {
        matches!(self.kind(), ScriptwrightErrorKind::Request(_))
    }
}

// Generic From implementation for any type that converts to ScriptwrightErrorKind
impl<T> From<T> for ScriptwrightError
where
    T: Into<ScriptwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scriptwright operations.
///
/// # Examples
///
/// ```
/// use scriptwright_error::{ScriptwrightResult, HttpError};
///
/// fn fetch_data() -> ScriptwrightResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type ScriptwrightResult<T> = std::result::Result<T, ScriptwrightError>;
