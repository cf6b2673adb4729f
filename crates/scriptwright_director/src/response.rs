//! Response validation: raw model text to typed records.

use scriptwright_core::{CompetitorAnalysis, Script, Suggestions};
use scriptwright_error::ContractError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::error::Category;
use tracing::error;

/// The contracted top-level structure of a script-generation response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPayload {
    /// Analysis of the reference video, or the continuation placeholder
    pub competitor_analysis: CompetitorAnalysis,
    /// The generated script
    pub optimized_script: Script,
    /// Title and thumbnail candidates
    pub suggestions: Suggestions,
}

/// Strips a markdown code fence wrapping the whole document.
///
/// Only a fence that opens the document and closes it is removed; anything else is
/// returned trimmed but otherwise untouched.
///
/// # Examples
///
/// ```
/// use scriptwright_director::unwrap_code_fence;
///
/// assert_eq!(unwrap_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(unwrap_code_fence("  [1, 2]  "), "[1, 2]");
/// assert_eq!(unwrap_code_fence("text ```json {} ```"), "text ```json {} ```");
/// ```
pub fn unwrap_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the language tag on the opening line.
    match body.find('\n') {
        Some(newline) if !body[..newline].contains(['{', '[']) => body[newline + 1..].trim(),
        _ => body.trim(),
    }
}

/// Parses a response as `T`, raising a contract error named after `target` on failure.
///
/// The raw text and the full parser message are logged at error level. The returned
/// error carries only the failure category, its position and, for a missing field, the
/// field name.
pub fn parse_contract<T: DeserializeOwned>(target: &str, raw: &str) -> Result<T, ContractError> {
    serde_json::from_str(unwrap_code_fence(raw)).map_err(|e| {
        error!(target_structure = target, raw_response = %raw, error = %e, "Model response violates contract");
        ContractError::invalid(target, diagnostic(&e))
    })
}

/// Describes a parse failure without quoting any of the parsed text.
fn diagnostic(e: &serde_json::Error) -> String {
    let position = format!("line {} column {}", e.line(), e.column());
    match e.classify() {
        Category::Syntax => format!("malformed JSON at {}", position),
        Category::Eof => format!("truncated JSON at {}", position),
        Category::Io => "unreadable response".to_string(),
        Category::Data => {
            let message = e.to_string();
            // Field names after this prefix come from the contract, not the response.
            match message
                .strip_prefix("missing field `")
                .and_then(|rest| rest.split_once('`'))
            {
                Some((field, _)) => format!("missing field `{}` at {}", field, position),
                None => format!("value does not match the contracted structure at {}", position),
            }
        }
    }
}

/// Parses a script-generation response.
pub fn parse_payload(raw: &str) -> Result<GenerationPayload, ContractError> {
    parse_contract("script", raw)
}

/// Parses a keyword-suggestion response.
pub fn parse_keywords(raw: &str) -> Result<Vec<String>, ContractError> {
    parse_contract("keywords", raw)
}
