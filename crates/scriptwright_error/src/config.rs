//! Configuration loading and validation errors.

/// Settings could not be loaded, or loaded with out-of-range values.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What went wrong, naming the offending setting when there is one
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a ConfigError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A setting loaded but holds a value outside its allowed range.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptwright_error::ConfigError;
    ///
    /// let err = ConfigError::invalid("temperature", "must be between 0.0 and 2.0, got 3");
    /// assert_eq!(err.message, "temperature must be between 0.0 and 2.0, got 3");
    /// ```
    #[track_caller]
    pub fn invalid(setting: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(format!("{} {}", setting, reason))
    }
}
