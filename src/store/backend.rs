//! # Document Store Trait

use async_trait::async_trait;

use super::document::StoredDocument;
use super::errors::StoreResult;

/// Backend trait for registration documents keyed by short key
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Prepare the backing database. Called once at startup.
    async fn ensure_database(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Fetch the document stored under `key`
    async fn get(&self, key: &str) -> StoreResult<StoredDocument>;

    /// Persist a document under its `_id`
    async fn save(&self, doc: StoredDocument) -> StoreResult<()>;

    /// Delete the document stored under `key`
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// Delete the document stored under `key`, treating a missing one as done
    async fn remove(&self, key: &str) -> StoreResult<()> {
        match self.delete(key).await {
            Err(e) if e.is_not_found() => Ok(()),
            other => other,
        }
    }
}
