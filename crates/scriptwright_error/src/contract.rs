//! Response contract violation errors.
//!
//! Raised when the model answered but the answer is not the contracted structure.
//! The raw response text never travels inside these errors; callers log it at the
//! point of failure.

/// Contract violation conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ContractErrorKind {
    /// The response could not be parsed as the required structure
    #[display("AI returned an invalid response for {}: {}", target, reason)]
    InvalidResponse {
        /// What was being parsed ("script", "keywords")
        target: String,
        /// Parser diagnostic (position and expectation, no response text)
        reason: String,
    },
    /// The response carried no text output at all
    #[display("AI returned an empty response for {}", _0)]
    EmptyResponse(String),
    /// Strict scene audit rejected an otherwise well-formed script
    #[display("Generated script failed scene audit: {}", _0)]
    SceneAudit(String),
}

/// Contract violation error with location tracking.
///
/// # Examples
///
/// ```
/// use scriptwright_error::{ContractError, ContractErrorKind};
///
/// let err = ContractError::new(ContractErrorKind::EmptyResponse("script".to_string()));
/// assert!(format!("{}", err).contains("empty response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Contract Error: {} at line {} in {}", kind, line, file)]
pub struct ContractError {
    /// The kind of error that occurred
    pub kind: ContractErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContractError {
    /// Create a new contract error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an unparsable response.
    #[track_caller]
    pub fn invalid(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ContractErrorKind::InvalidResponse {
            target: target.into(),
            reason: reason.into(),
        })
    }
}
