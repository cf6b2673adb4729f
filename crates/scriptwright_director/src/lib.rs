//! Structured script generation for Scriptwright.
//!
//! The [`ScriptOrchestrator`] runs one generation call end to end:
//! 1. Validate the request and compute its [`SceneBudget`](scriptwright_core::SceneBudget)
//! 2. Encode reference images and [`assemble`] the directive with its output contract
//! 3. Call the model through a [`ScriptwrightDriver`](scriptwright_interface::ScriptwrightDriver)
//! 4. Parse the response, attach the series bible, audit the scenes and assign an id
//!
//! # Example
//!
//! ```no_run
//! use scriptwright_core::{ContinuationRequest, GenerationRequest, ProductionParams};
//! use scriptwright_director::{ScriptOrchestrator, ScriptwrightConfig};
//! # use scriptwright_interface::ScriptwrightDriver;
//!
//! # async fn run<D: ScriptwrightDriver>(driver: D, bible: String, last_scene: String)
//! # -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = ScriptOrchestrator::new(driver, ScriptwrightConfig::load()?);
//!
//! let params = ProductionParams {
//!     minutes: 5,
//!     genre: "3D animation".to_string(),
//!     dialogue_language: "Vietnamese".to_string(),
//!     voice: "warm female narrator".to_string(),
//! };
//! let request = GenerationRequest::continuation(
//!     params,
//!     ContinuationRequest {
//!         series_bible: bible,
//!         last_scene,
//!         topic: "The cat finds the lost key".to_string(),
//!     },
//! );
//!
//! let result = orchestrator.generate_script(&request).await?;
//! println!("{} has {} scenes", result.id, result.script.scene_count());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audit;
mod config;
mod continuity;
mod directive;
mod ids;
mod images;
mod orchestrator;
mod response;
mod schema;

pub use audit::{AuditFinding, AuditReport, audit_packaging, audit_result, audit_script};
pub use config::ScriptwrightConfig;
pub use continuity::resolve_bible;
pub use directive::{Directive, assemble, assemble_keywords};
pub use ids::IdGenerator;
pub use images::encode_images;
pub use orchestrator::ScriptOrchestrator;
pub use response::{
    GenerationPayload, parse_contract, parse_keywords, parse_payload, unwrap_code_fence,
};
pub use schema::{
    CONTENT_GAP_COUNT, DESCRIPTIVE_LANGUAGE, DIALOGUE_CHAR_LIMIT, DIALOGUE_WORD_LIMIT,
    NARRATIVE_LANGUAGE, SUGGESTION_COUNT, character_profile_schema, competitor_analysis_schema,
    keyword_contract, motion_prompt_schema, overview_schema, response_contract, scene_schema,
    script_schema, seo_schema, suggestions_schema,
};
