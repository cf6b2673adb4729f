//! Core data types for Scriptwright.
//!
//! This crate holds the domain model shared by every other crate in the workspace:
//! - Production parameters and the two-mode [`GenerationRequest`]
//! - The [`SceneBudget`] derived from a target duration
//! - Script records ([`Script`], [`Scene`], [`CharacterProfile`], ...)
//! - The continuity record carried between episodes ([`SeriesBible`])
//! - The [`GenerationResult`] handed back to callers and stored in libraries
//! - Driver-level request/response types and the typed output [`Schema`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod bible;
mod budget;
mod generation;
mod input;
mod media;
mod message;
mod output;
mod request;
mod result;
mod role;
mod schema;
mod script;

pub use analysis::{CompetitorAnalysis, StructuralSegment, Suggestions};
pub use bible::SeriesBible;
pub use budget::{SECONDS_PER_SCENE, SceneBudget};
pub use generation::{
    ContinuationRequest, FreshAnalysisRequest, FreshAnalysisRequestBuilder,
    FreshAnalysisRequestBuilderError, GenerationMode, GenerationRequest, ProductionParams,
    ReferenceImage, ScriptMode,
};
pub use input::Input;
pub use media::MediaSource;
pub use message::Message;
pub use output::Output;
pub use request::{GenerateRequest, GenerateResponse};
pub use result::GenerationResult;
pub use role::Role;
pub use schema::{Schema, SchemaType};
pub use script::{CharacterProfile, MotionPrompt, Scene, Script, ScriptOverview, SeoInfo};
