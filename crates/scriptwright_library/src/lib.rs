//! Saved-script library backends.
//!
//! Both backends implement [`ScriptLibrary`](scriptwright_interface::ScriptLibrary) with
//! the same ordering rules: newest first, one entry per id, a re-saved entry moves to the
//! front.
//!
//! - [`InMemoryLibrary`] - lost when dropped; for tests and one-off runs
//! - [`JsonFileLibrary`] - a single JSON array on disk, written atomically

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ordering;
mod in_memory;
mod json_file;

pub use in_memory::InMemoryLibrary;
pub use json_file::JsonFileLibrary;
