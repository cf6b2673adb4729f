//! Continuity-record handling for both generation modes.

use crate::response::GenerationPayload;
use scriptwright_core::{GenerationMode, SeriesBible};
use scriptwright_error::RequestError;
use tracing::debug;

/// Chooses the series bible to attach to a result.
///
/// A fresh analysis projects a new bible out of the generated overview. A continuation
/// re-attaches the caller's bible unchanged.
pub fn resolve_bible(
    mode: &GenerationMode,
    payload: &GenerationPayload,
) -> Result<SeriesBible, RequestError> {
    match mode {
        GenerationMode::FreshAnalysis(_) => {
            let bible = SeriesBible::from_overview(&payload.optimized_script.overview);
            debug!(characters = bible.characters.len(), "Derived series bible from overview");
            Ok(bible)
        }
        GenerationMode::Continuation(request) => request.bible(),
    }
}
