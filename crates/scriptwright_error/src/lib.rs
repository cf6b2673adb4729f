//! Error types for Scriptwright.
//!
//! This crate provides the foundation error types used throughout the Scriptwright workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The three failure classes of a generation call map onto:
//! - [`RequestError`] - the request is missing fields its mode requires
//! - [`GeminiError`] / [`HttpError`] - the model call itself failed
//! - [`ContractError`] - the model answered with something that is not the contracted structure
//!
//! # Examples
//!
//! ```
//! use scriptwright_error::{RequestError, RequestErrorKind, ScriptwrightResult};
//!
//! fn check_minutes(minutes: u32) -> ScriptwrightResult<u32> {
//!     if minutes == 0 {
//!         Err(RequestError::new(RequestErrorKind::ZeroDuration))?
//!     }
//!     Ok(minutes)
//! }
//!
//! assert!(check_minutes(0).is_err());
//! assert_eq!(check_minutes(5).unwrap(), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod contract;
mod error;
mod gemini;
mod http;
mod json;
mod request;
mod storage;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use contract::{ContractError, ContractErrorKind};
pub use error::{ScriptwrightError, ScriptwrightErrorKind, ScriptwrightResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use request::{RequestError, RequestErrorKind};
pub use storage::{StorageError, StorageErrorKind};
