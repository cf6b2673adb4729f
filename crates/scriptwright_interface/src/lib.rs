//! Trait definitions for Scriptwright.
//!
//! Two seams separate the orchestrator from the outside world:
//! - [`ScriptwrightDriver`] - the external generative model
//! - [`ScriptLibrary`] - persistence of the user's saved results

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod library;
mod traits;

pub use library::ScriptLibrary;
pub use traits::ScriptwrightDriver;
