//! Gemini REST client.

use super::protocol::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::{LlmMetrics, classify_error};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Client;
use scriptwright_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Output, Role};
use scriptwright_error::{GeminiError, GeminiErrorKind, HttpError, ScriptwrightResult};
use scriptwright_interface::ScriptwrightDriver;
use std::env;
use std::time::Instant;
use tracing::{debug, error, instrument, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when neither the client nor the request names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Gemini API client.
///
/// The model named in `GenerateRequest.model` wins over the client's default model, so
/// one client serves both script generation and keyword suggestion.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable and uses
    /// [`DEFAULT_MODEL`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use scriptwright_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> ScriptwrightResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::with_api_key(api_key, DEFAULT_MODEL)
    }

    /// Create a client with an explicit key and default model.
    #[instrument(name = "gemini_client_with_api_key", skip_all, fields(model = %model.as_ref()))]
    pub fn with_api_key(
        api_key: impl Into<String>,
        model: impl AsRef<str>,
    ) -> ScriptwrightResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into());
        }

        let client = Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!("Creating new Gemini client");
        Ok(Self {
            client,
            api_key,
            model: model.as_ref().to_string(),
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API root (proxies, regional endpoints).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Change the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Sends one `generateContent` call.
    #[instrument(skip(self, body))]
    pub async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> ScriptwrightResult<GenerateContentResponse> {
        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read Gemini response body");
            HttpError::unreadable_body(e)
        })?;

        if !status.is_success() {
            error!(status = %status, body = %text, "Gemini API returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: text,
            })
            .into());
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response envelope");
            GeminiError::new(GeminiErrorKind::ResponseEnvelope(e.to_string()))
        })?;

        Ok(parsed)
    }

    /// Converts a generic request into a Gemini request body.
    fn convert_request(request: &GenerateRequest) -> GenerateContentRequest {
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for message in &request.messages {
            let parts: Vec<Part> = message.content.iter().map(convert_input).collect();
            match message.role {
                Role::System => system_parts.extend(parts),
                Role::User => contents.push(Content {
                    role: Some("user".to_string()),
                    parts,
                }),
            }
        }

        let system_instruction = if system_parts.is_empty() {
            None
        } else {
            Some(Content {
                role: None,
                parts: system_parts,
            })
        };

        let generation_config = GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
            response_mime_type: request
                .response_schema
                .as_ref()
                .map(|_| "application/json".to_string()),
            response_schema: request.response_schema.clone(),
        };

        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config: Some(generation_config),
        }
    }

    /// Converts a Gemini response into a generic response.
    ///
    /// A blocked prompt is an error; a response without answer text yields no outputs.
    fn convert_response(response: &GenerateContentResponse) -> ScriptwrightResult<GenerateResponse> {
        if let Some(reason) = response
            .block_reason()
            .filter(|_| response.candidates.is_empty())
        {
            warn!(reason, "Gemini blocked the prompt");
            return Err(
                GeminiError::new(GeminiErrorKind::PromptBlocked(reason.to_string())).into(),
            );
        }

        if let Some(reason) = response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .filter(|reason| *reason != "STOP")
        {
            warn!(finish_reason = reason, "Gemini stopped before a normal finish");
        }

        let outputs = response.first_text().map(Output::Text).into_iter().collect();
        Ok(GenerateResponse { outputs })
    }
}

fn convert_input(input: &Input) -> Part {
    match input {
        Input::Text(text) => Part::text(text.clone()),
        Input::Image { mime, source } => match source {
            MediaSource::Base64(data) => Part::inline(mime.clone(), data.clone()),
            MediaSource::Binary(bytes) => Part::inline(mime.clone(), STANDARD.encode(bytes)),
        },
    }
}

#[async_trait]
impl ScriptwrightDriver for GeminiClient {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(provider = "gemini"))]
    async fn generate(&self, request: &GenerateRequest) -> ScriptwrightResult<GenerateResponse> {
        let model = request.model.as_deref().unwrap_or(&self.model).to_string();
        let body = Self::convert_request(request);
        let metrics = LlmMetrics::get();
        let start = Instant::now();

        let result = match self.generate_content(&model, &body).await {
            Ok(response) => {
                if let Some(total) = response
                    .usage_metadata
                    .as_ref()
                    .and_then(|u| u.total_token_count)
                {
                    metrics.record_tokens(&model, total);
                }
                Self::convert_response(&response)
            }
            Err(e) => Err(e),
        };

        match &result {
            Ok(response) => {
                let elapsed = start.elapsed().as_secs_f64();
                metrics.record_request(self.provider_name(), &model, elapsed);
                debug!(
                    model = %model,
                    outputs = response.outputs.len(),
                    duration_secs = elapsed,
                    "Gemini call completed"
                );
            }
            Err(e) => {
                metrics.record_error(self.provider_name(), &model, classify_error(e));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptwright_core::{Message, Schema};

    fn request() -> GenerateRequest {
        GenerateRequest {
            messages: vec![
                Message::system("You are a screenwriter."),
                Message::user(vec![
                    Input::Text("Write a script.".to_string()),
                    Input::Image {
                        mime: "image/png".to_string(),
                        source: MediaSource::Binary(vec![1, 2, 3]),
                    },
                ]),
            ],
            temperature: Some(0.8),
            response_schema: Some(Schema::object().property("title", Schema::string())),
            ..Default::default()
        }
    }

    #[test]
    fn request_body_matches_wire_format() {
        let body = GeminiClient::convert_request(&request());
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "You are a screenwriter.");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Write a script.");
        assert_eq!(
            json["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(json["contents"][0]["parts"][1]["inlineData"]["data"], "AQID");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn plain_request_omits_structured_output() {
        let request = GenerateRequest {
            messages: vec![Message::user(vec![Input::Text("hi".to_string())])],
            ..Default::default()
        };
        let json = serde_json::to_value(GeminiClient::convert_request(&request)).unwrap();
        assert!(json.get("systemInstruction").is_none());
        assert!(json["generationConfig"].get("responseMimeType").is_none());
        assert!(json["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn response_text_skips_thoughts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [
                    {"text": "thinking...", "thought": true},
                    {"text": "{\"a\":"},
                    {"text": "1}"}
                ]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"totalTokenCount": 42}
        }))
        .unwrap();

        let converted = GeminiClient::convert_response(&response).unwrap();
        assert_eq!(converted.outputs, vec![Output::Text("{\"a\":1}".to_string())]);
    }

    #[test]
    fn empty_candidates_yield_no_outputs() {
        let response = GenerateContentResponse::default();
        let converted = GeminiClient::convert_response(&response).unwrap();
        assert!(converted.outputs.is_empty());
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();

        let err = GeminiClient::convert_response(&response).unwrap_err();
        assert!(format!("{}", err).contains("SAFETY"));
    }

    #[test]
    fn rejects_blank_api_key() {
        assert!(GeminiClient::with_api_key("  ", DEFAULT_MODEL).is_err());
    }
}
