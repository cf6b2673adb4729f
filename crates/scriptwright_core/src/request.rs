//! Request and response types for model generation.

use crate::{Message, Output, Schema};
use serde::Serialize;

/// Generic structured-generation request.
///
/// # Examples
///
/// ```
/// use scriptwright_core::{GenerateRequest, Input, Message, Role, Schema};
///
/// let request = GenerateRequest {
///     messages: vec![Message::user(vec![Input::Text("Suggest keywords".to_string())])],
///     temperature: Some(0.8),
///     model: Some("gemini-2.5-flash".to_string()),
///     response_schema: Some(Schema::array(Schema::string())),
///     ..Default::default()
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GenerateRequest {
    /// The messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
    /// When present the model is asked for JSON conforming to this schema
    pub response_schema: Option<Schema>,
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use scriptwright_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("[\"a\", \"b\"]".to_string())],
/// };
///
/// assert_eq!(response.text().as_deref(), Some("[\"a\", \"b\"]"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Concatenated textual content of the response, or `None` if it carries none.
    ///
    /// JSON outputs are rendered back to text so callers can parse a single document.
    pub fn text(&self) -> Option<String> {
        let parts: Vec<String> = self
            .outputs
            .iter()
            .map(|output| match output {
                Output::Text(text) => text.clone(),
                Output::Json(value) => value.to_string(),
            })
            .filter(|text| !text.trim().is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.concat())
        }
    }
}
