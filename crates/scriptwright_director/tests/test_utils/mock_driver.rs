//! Scripted model driver for testing.

use async_trait::async_trait;
use scriptwright_core::{GenerateRequest, GenerateResponse, Output};
use scriptwright_error::{GeminiError, GeminiErrorKind, ScriptwrightError, ScriptwrightResult};
use scriptwright_interface::ScriptwrightDriver;
use std::sync::{Arc, Mutex};

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return one text output
    Text(String),
    /// Return no outputs at all
    Empty,
    /// Fail with the given error
    Error(GeminiErrorKind),
}

/// Driver that replays scripted responses and records every request it receives.
///
/// The last scripted response repeats once the script runs out.
#[derive(Debug, Clone)]
pub struct MockDriver {
    responses: Vec<MockResponse>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    /// A driver that always answers with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Text(text.into())])
    }

    /// A driver that always fails with `error`.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(error)])
    }

    /// A driver that always answers with no outputs.
    pub fn new_empty() -> Self {
        Self::new_sequence(vec![MockResponse::Empty])
    }

    /// A driver that replays `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, oldest first.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> GenerateRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("driver was never called")
    }
}

#[async_trait]
impl ScriptwrightDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> ScriptwrightResult<GenerateResponse> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        let response = self
            .responses
            .get(index)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or(MockResponse::Empty);

        match response {
            MockResponse::Text(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
            }),
            MockResponse::Empty => Ok(GenerateResponse { outputs: Vec::new() }),
            MockResponse::Error(kind) => Err(ScriptwrightError::from(GeminiError::new(kind))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-gemini"
    }
}
