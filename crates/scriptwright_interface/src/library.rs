//! Repository trait for saved generation results.

use async_trait::async_trait;
use scriptwright_core::GenerationResult;
use scriptwright_error::ScriptwrightResult;

/// The user's library of saved results, most recent first.
///
/// Implementations can keep entries in memory, in a file, or anywhere else.
#[async_trait]
pub trait ScriptLibrary: Send + Sync {
    /// Save a result at the front of the library.
    ///
    /// An existing entry with the same id is replaced, so ids stay unique.
    async fn save(&self, result: &GenerationResult) -> ScriptwrightResult<()>;

    /// Delete the entry with the given id.
    ///
    /// Returns `false` if no such entry existed.
    async fn delete(&self, id: &str) -> ScriptwrightResult<bool>;

    /// All entries, most recent first.
    async fn list(&self) -> ScriptwrightResult<Vec<GenerationResult>>;

    /// Look up one entry by id.
    async fn get(&self, id: &str) -> ScriptwrightResult<Option<GenerationResult>>;

    /// Whether an entry with the given id is saved.
    async fn contains(&self, id: &str) -> ScriptwrightResult<bool> {
        Ok(self.get(id).await?.is_some())
    }
}
