//! Transport failures after the model endpoint accepted the connection.

/// The response from the model endpoint could not be read.
///
/// Connection and status failures are [`GeminiError`](crate::GeminiError)s; this covers
/// the body going missing mid-read.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// Transport message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create an HttpError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The response body could not be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptwright_error::HttpError;
    ///
    /// let err = HttpError::unreadable_body("connection closed before message completed");
    /// assert!(err.message.starts_with("Failed to read response body"));
    /// ```
    #[track_caller]
    pub fn unreadable_body(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Failed to read response body: {}", cause))
    }
}
