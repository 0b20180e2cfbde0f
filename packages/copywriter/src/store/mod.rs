//! Persistence for the application document.
//!
//! The whole document is read at startup and overwritten on every save.
//! With several writers the last save wins; that is the documented policy,
//! there is no locking and no versioning.

pub mod json;
pub mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::document::AppDocument;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Load/save of the persisted application document.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the document. A missing backing file yields the default document.
    async fn load(&self) -> StoreResult<AppDocument>;

    /// Overwrite the stored document wholesale.
    async fn save(&self, document: &AppDocument) -> StoreResult<()>;
}
