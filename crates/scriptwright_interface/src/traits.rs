//! Trait definitions for model backends.

use async_trait::async_trait;
use scriptwright_core::{GenerateRequest, GenerateResponse};
use scriptwright_error::ScriptwrightResult;

/// Core trait that every model backend implements.
///
/// One call is one awaited request/response exchange. Implementations must not retry:
/// transport, quota and authentication failures are returned to the caller as they are.
#[async_trait]
pub trait ScriptwrightDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> ScriptwrightResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gemini-2.5-pro").
    fn model_name(&self) -> &str;
}
