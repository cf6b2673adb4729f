//! In-memory implementation of ScriptLibrary.

use crate::ordering;
use async_trait::async_trait;
use scriptwright_core::GenerationResult;
use scriptwright_error::ScriptwrightResult;
use scriptwright_interface::ScriptLibrary;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory script library.
///
/// Entries live in a vector behind an `RwLock`; clones share the same entries.
/// All data is lost when the last clone is dropped.
///
/// # Example
/// ```
/// use scriptwright_library::InMemoryLibrary;
/// use scriptwright_interface::ScriptLibrary;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let library = InMemoryLibrary::new();
/// assert!(library.list().await?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLibrary {
    entries: Arc<RwLock<Vec<GenerationResult>>>,
}

impl InMemoryLibrary {
    /// Create a new empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library pre-filled with entries, most recent first.
    pub fn with_entries(entries: Vec<GenerationResult>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Number of saved entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the library is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ScriptLibrary for InMemoryLibrary {
    async fn save(&self, result: &GenerationResult) -> ScriptwrightResult<()> {
        let mut entries = self.entries.write().await;
        ordering::upsert_front(&mut entries, result);
        debug!(id = %result.id, count = entries.len(), "Saved result in memory");
        Ok(())
    }

    async fn delete(&self, id: &str) -> ScriptwrightResult<bool> {
        let mut entries = self.entries.write().await;
        Ok(ordering::remove(&mut entries, id))
    }

    async fn list(&self) -> ScriptwrightResult<Vec<GenerationResult>> {
        Ok(self.entries.read().await.clone())
    }

    async fn get(&self, id: &str) -> ScriptwrightResult<Option<GenerationResult>> {
        Ok(ordering::find(&self.entries.read().await, id))
    }
}
