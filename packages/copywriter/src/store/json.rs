//! JSON-file-backed state store.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::StateStore;
use crate::types::document::AppDocument;

/// State store backed by a single JSON file.
///
/// Reads the whole file on load and rewrites the whole file on save.
/// Concurrent writers race; the last write wins.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load(&self) -> StoreResult<AppDocument> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "state file missing, starting fresh");
                Ok(AppDocument::default())
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn save(&self, document: &AppDocument) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}
