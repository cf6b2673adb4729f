//! Metrics for model API calls.
//!
//! Provides OpenTelemetry-based metrics for tracking model call latency, failures and
//! token usage. Instruments are created on the global meter, and installing a meter
//! provider is the embedding application's job: call
//! `opentelemetry::global::set_meter_provider` with an SDK provider and an exporter
//! before the first model call. The `scriptwright` binary installs none, so there every
//! instrument is a no-op and nothing is exported.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use scriptwright_error::{GeminiErrorKind, ScriptwrightError, ScriptwrightErrorKind};
use std::sync::OnceLock;

static METRICS: OnceLock<LlmMetrics> = OnceLock::new();

/// Metrics for model API interactions.
///
/// Metrics are labeled with provider and model name.
#[derive(Clone)]
pub struct LlmMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total model API requests
    pub requests: Counter<u64>,
    /// Failed model API requests
    pub errors: Counter<u64>,
    /// Model API call duration in seconds
    pub duration: Histogram<f64>,
    /// Total tokens used (prompt + completion)
    pub tokens_used: Counter<u64>,
}

impl LlmMetrics {
    fn init() -> Self {
        let meter = global::meter("scriptwright_llm");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("llm.requests")
                .with_description("Total model API requests")
                .build(),
            errors: meter
                .u64_counter("llm.errors")
                .with_description("Failed model API requests")
                .build(),
            duration: meter
                .f64_histogram("llm.duration")
                .with_unit("seconds")
                .with_description("Model API call duration")
                .build(),
            tokens_used: meter
                .u64_counter("llm.tokens")
                .with_description("Total tokens used (prompt + completion)")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful request.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed request.
    pub fn record_error(&self, provider: &str, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }

    /// Record token usage reported by the provider.
    pub fn record_tokens(&self, model: &str, total_tokens: u64) {
        let labels = &[KeyValue::new("model", model.to_string())];
        self.tokens_used.add(total_tokens, labels);
    }
}

/// Classify an error for metrics labeling.
///
/// Returns one of: "rate_limit", "auth", "network", "blocked", "invalid_response",
/// "invalid_request", "unknown".
pub fn classify_error(error: &ScriptwrightError) -> &'static str {
    match error.kind() {
        ScriptwrightErrorKind::Gemini(e) => match &e.kind {
            GeminiErrorKind::HttpError {
                status_code: 429, ..
            } => "rate_limit",
            GeminiErrorKind::MissingApiKey
            | GeminiErrorKind::HttpError {
                status_code: 401 | 403,
                ..
            } => "auth",
            GeminiErrorKind::HttpError {
                status_code: 400, ..
            } => "invalid_request",
            GeminiErrorKind::ApiRequest(_) | GeminiErrorKind::ClientCreation(_) => "network",
            GeminiErrorKind::PromptBlocked(_) => "blocked",
            GeminiErrorKind::ResponseEnvelope(_) => "invalid_response",
            GeminiErrorKind::HttpError { .. } => "unknown",
        },
        ScriptwrightErrorKind::Http(_) => "network",
        _ => "unknown",
    }
}
