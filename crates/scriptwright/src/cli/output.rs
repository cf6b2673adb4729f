//! Writing command output.

use scriptwright::{JsonError, ScriptwrightResult, StorageError, StorageErrorKind};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Pretty-print `value` as JSON.
pub fn to_pretty_json(value: &impl Serialize) -> ScriptwrightResult<String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| JsonError::serialize("result", e))?;
    Ok(json)
}

/// Write JSON to `output`, or to stdout when no file is given.
pub async fn emit_json(value: &impl Serialize, output: Option<&Path>) -> ScriptwrightResult<()> {
    let json = to_pretty_json(value)?;
    match output {
        Some(path) => {
            tokio::fs::write(path, json).await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            info!(path = %path.display(), "Wrote result");
        }
        None => println!("{}", json),
    }
    Ok(())
}
