//! Serialization failures on the way out: saving the library or printing a result.
//!
//! Parsing model responses never lands here; that is a [`ContractError`](crate::ContractError).

/// A value could not be written as JSON.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: failed to serialize {}: {} at line {} in {}", subject, message, line, file)]
pub struct JsonError {
    /// What was being serialized ("library", "result")
    pub subject: String,
    /// Serializer message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Serialization of `subject` failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptwright_error::JsonError;
    ///
    /// let err = JsonError::serialize("library", "key must be a string");
    /// assert_eq!(err.subject, "library");
    /// assert!(err.to_string().contains("failed to serialize library"));
    /// ```
    #[track_caller]
    pub fn serialize(subject: impl Into<String>, message: impl std::fmt::Display) -> Self {
        let location = std::panic::Location::caller();
        Self {
            subject: subject.into(),
            message: message.to_string(),
            line: location.line(),
            file: location.file(),
        }
    }
}
