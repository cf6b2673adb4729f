//! Google Gemini REST API client.
//!
//! [`GeminiClient`] sends one `generateContent` call per request:
//! - text and inline base64 image parts in a single user turn
//! - system messages folded into `systemInstruction`
//! - `responseMimeType: application/json` plus `responseSchema` when the request carries a schema

mod client;
mod protocol;

pub use client::{DEFAULT_MODEL, GeminiClient};
pub use protocol::{
    Candidate, CandidateContent, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, InlineData, InlineDataPart, Part, PromptFeedback, ResponsePart, TextPart,
    UsageMetadata,
};
