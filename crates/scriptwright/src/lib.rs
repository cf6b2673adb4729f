//! Scriptwright - structured script generation for short-form video
//!
//! Scriptwright turns either a competitor's video or an existing series into a complete,
//! production-ready script: an overview with a character canon, an SEO block, numbered
//! scenes with image and motion directives, and packaging suggestions.
//!
//! # Modes
//!
//! - **Fresh analysis**: analyze a reference video, then write a superior replacement
//! - **Continuation**: write the next episode of a series from its bible and last scene
//!
//! # Quick Start
//!
//! ```no_run
//! use scriptwright::{
//!     FreshAnalysisRequest, GeminiClient, GenerationRequest, ProductionParams,
//!     ScriptOrchestrator, ScriptwrightConfig,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = ScriptOrchestrator::new(GeminiClient::new()?, ScriptwrightConfig::load()?);
//!
//! let fresh = FreshAnalysisRequest::builder()
//!     .reference_video("https://youtu.be/abc123")
//!     .competitive_angle("A warmer ending")
//!     .build()?;
//! let params = ProductionParams {
//!     minutes: 5,
//!     genre: "3D animation".to_string(),
//!     dialogue_language: "Vietnamese".to_string(),
//!     voice: "Warm female narrator".to_string(),
//! };
//!
//! let result = orchestrator
//!     .generate_script(&GenerationRequest::fresh_analysis(params, fresh))
//!     .await?;
//! println!("{}: {}", result.id, result.script.seo.title);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `scriptwright_core` - Data model, scene budget, typed output schema
//! - `scriptwright_interface` - `ScriptwrightDriver` and `ScriptLibrary` traits
//! - `scriptwright_error` - Error types
//! - `scriptwright_models` - Gemini driver
//! - `scriptwright_library` - In-memory and JSON-file script libraries
//! - `scriptwright_director` - Directive assembly, validation, audit, orchestration
//!
//! This crate (`scriptwright`) re-exports everything for convenience.

pub use scriptwright_core::*;
pub use scriptwright_director::*;
pub use scriptwright_error::*;
pub use scriptwright_interface::*;
pub use scriptwright_library::*;
pub use scriptwright_models::*;

mod logging;

pub use logging::{LoggingConfig, init_logging};
