//! JSON-file implementation of ScriptLibrary.

use crate::ordering;
use async_trait::async_trait;
use scriptwright_core::GenerationResult;
use scriptwright_error::{JsonError, ScriptwrightResult, StorageError, StorageErrorKind};
use scriptwright_interface::ScriptLibrary;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// Script library kept in a single JSON file.
///
/// The file holds a JSON array of results, most recent first. It is read once when the
/// library is opened; every change rewrites it through a temp file and a rename, so a
/// crash never leaves a half-written library behind.
#[derive(Debug, Clone)]
pub struct JsonFileLibrary {
    path: PathBuf,
    entries: Arc<RwLock<Vec<GenerationResult>>>,
}

impl JsonFileLibrary {
    /// Open the library at `path`.
    ///
    /// A missing file is an empty library; the file and its parent directories are
    /// created on the first save.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read or does not hold a list of
    /// results.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> ScriptwrightResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = Self::load(&path).await?;
        info!(count = entries.len(), "Opened script library");
        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    /// Location of the library file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(path: &Path) -> ScriptwrightResult<Vec<GenerationResult>> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Library file does not exist yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries = serde_json::from_str(&text).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(entries)
    }

    async fn persist(&self, entries: &[GenerationResult]) -> ScriptwrightResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| JsonError::serialize("library", e))?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "rename {} to {}: {}",
                    temp_path.display(),
                    self.path.display(),
                    e
                )))
            })?;

        debug!(path = %self.path.display(), count = entries.len(), "Wrote library file");
        Ok(())
    }
}

#[async_trait]
impl ScriptLibrary for JsonFileLibrary {
    #[instrument(skip(self, result), fields(id = %result.id))]
    async fn save(&self, result: &GenerationResult) -> ScriptwrightResult<()> {
        let mut entries = self.entries.write().await;
        let mut updated = entries.clone();
        ordering::upsert_front(&mut updated, result);
        self.persist(&updated).await?;
        *entries = updated;
        info!(count = entries.len(), "Saved result to library");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ScriptwrightResult<bool> {
        let mut entries = self.entries.write().await;
        let mut updated = entries.clone();
        if !ordering::remove(&mut updated, id) {
            return Ok(false);
        }
        self.persist(&updated).await?;
        *entries = updated;
        info!(count = entries.len(), "Deleted result from library");
        Ok(true)
    }

    async fn list(&self) -> ScriptwrightResult<Vec<GenerationResult>> {
        Ok(self.entries.read().await.clone())
    }

    async fn get(&self, id: &str) -> ScriptwrightResult<Option<GenerationResult>> {
        Ok(ordering::find(&self.entries.read().await, id))
    }
}
