//! In-memory state store for testing and development.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::store::StateStore;
use crate::types::document::AppDocument;

/// In-memory store. Data is lost when the process exits.
pub struct MemoryStore {
    document: RwLock<AppDocument>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a store holding the default document.
    pub fn new() -> Self {
        Self {
            document: RwLock::new(AppDocument::default()),
        }
    }

    /// Create a store seeded with a document.
    pub fn with_document(document: AppDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self) -> StoreResult<AppDocument> {
        Ok(self.document.read().unwrap().clone())
    }

    async fn save(&self, document: &AppDocument) -> StoreResult<()> {
        *self.document.write().unwrap() = document.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trips() {
        let store = MemoryStore::new();

        let mut doc = store.load().await.unwrap();
        doc.create_profile("test").unwrap();
        store.save(&doc).await.unwrap();

        let back = store.load().await.unwrap();
        assert_eq!(back.current_profile, "test");
    }
}
