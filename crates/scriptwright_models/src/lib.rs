//! Generative model drivers for Scriptwright.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - [`GeminiClient`], speaking the REST `generateContent` endpoint
//!   with structured JSON output and inline reference images
//!
//! # Example
//!
//! ```no_run
//! use scriptwright_models::GeminiClient;
//! use scriptwright_interface::ScriptwrightDriver;
//! use scriptwright_core::{GenerateRequest, Input, Message};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GenerateRequest {
//!     messages: vec![Message::user(vec![Input::Text("Hello".to_string())])],
//!     ..Default::default()
//! };
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod metrics;

pub use gemini::{
    Candidate, CandidateContent, Content, DEFAULT_MODEL, GeminiClient, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, InlineData, InlineDataPart, Part, PromptFeedback,
    ResponsePart, TextPart, UsageMetadata,
};
pub use metrics::{LlmMetrics, classify_error};
