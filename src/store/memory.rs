//! # In-Memory Backend
//!
//! Follows CouchDB's revision rules so overwrite paths behave the same as in
//! production: saving over an existing document needs its current `_rev`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::backend::DocumentStore;
use super::document::StoredDocument;
use super::errors::{StoreError, StoreResult};

/// In-process document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RwLock<HashMap<String, StoredDocument>>,
    revision: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.docs.read().map(|docs| docs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn next_rev(&self) -> String {
        let n = self.revision.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-memory", n)
    }

    fn poisoned() -> StoreError {
        StoreError::Transport("memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<StoredDocument> {
        let docs = self.docs.read().map_err(|_| Self::poisoned())?;
        docs.get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn save(&self, mut doc: StoredDocument) -> StoreResult<()> {
        let mut docs = self.docs.write().map_err(|_| Self::poisoned())?;

        if let Some(existing) = docs.get(&doc.id) {
            if existing.rev != doc.rev {
                return Err(StoreError::Conflict(doc.id));
            }
        }

        doc.rev = Some(self.next_rev());
        docs.insert(doc.id.clone(), doc);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let mut docs = self.docs.write().map_err(|_| Self::poisoned())?;
        docs.remove(key)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }
}
