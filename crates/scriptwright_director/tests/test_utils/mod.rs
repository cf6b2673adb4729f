//! Test utilities for director tests.
//!
//! This module provides a scripted driver and response fixtures.

pub mod fixtures;
pub mod mock_driver;

#[allow(unused_imports)]
pub use fixtures::{
    VISUAL_STYLE, analysis, continuation_request, fresh_request, params, payload, payload_text,
    placeholder_analysis, sample_bible,
};
#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockResponse};
