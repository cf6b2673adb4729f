//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scriptwright binary.

mod commands;
mod generate;
mod library;
mod media;
mod output;

pub use commands::{Cli, Commands};
pub use generate::{run_analyze, run_continue, run_keywords};
pub use library::handle_library_command;
