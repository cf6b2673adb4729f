//! Output types from model responses.

use serde::{Deserialize, Serialize};

/// Supported outputs.
///
/// Drivers that receive structured output as text return [`Output::Text`]; drivers that
/// already hold a decoded document may return [`Output::Json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Structured JSON output.
    Json(serde_json::Value),
}
