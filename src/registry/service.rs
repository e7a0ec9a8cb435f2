//! Registry service
//!
//! Reads reshape a stored document into a [`DocEnvelope`] for one language.
//! Writes run parse, validate, transform, then replace the stored document.

use std::sync::Arc;

use futures_util::future::join_all;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::envelope::DocEnvelope;
use super::errors::{RegistryError, RegistryResult};
use crate::registration::RegistrationPayload;
use crate::schema::RegistrationValidator;
use crate::store::{DocumentStore, StoreError, StoredDocument};

/// Registration reads and writes over an injected store and validator.
#[derive(Debug, Clone)]
pub struct Registry {
    store: Arc<dyn DocumentStore>,
    validator: Arc<RegistrationValidator>,
}

impl Registry {
    pub fn new(store: Arc<dyn DocumentStore>, validator: Arc<RegistrationValidator>) -> Self {
        Self { store, validator }
    }

    /// Envelope for `key` in `lang`.
    ///
    /// Returns `Ok(None)` when there is no document or it has no node for `lang`.
    pub async fn get_doc(&self, key: &str, lang: &str) -> RegistryResult<Option<DocEnvelope>> {
        match self.store.get(key).await {
            Ok(doc) => Ok(DocEnvelope::from_document(&doc, lang)),
            Err(StoreError::NotFound(_)) => {
                debug!(key, "no registration stored");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Envelopes for each key, in input order.
    ///
    /// Keys are resolved independently; a failing key yields `None` without
    /// affecting the others.
    pub async fn get_docs(&self, keys: &[String], lang: &str) -> Vec<Option<DocEnvelope>> {
        let lookups = keys.iter().map(|key| async move {
            match self.get_doc(key, lang).await {
                Ok(envelope) => envelope,
                Err(e) => {
                    warn!(key = %key, error = %e, "batch lookup failed");
                    None
                }
            }
        });
        join_all(lookups).await
    }

    /// Validates `body` and stores it under `key`, replacing any previous registration.
    pub async fn register(&self, key: &str, body: &[u8]) -> RegistryResult<()> {
        let raw: Value = serde_json::from_slice(body).map_err(|_| RegistryError::UnparsableJson)?;
        self.validator.validate(&raw)?;

        let payload = RegistrationPayload::from_value(raw)?;
        let nodes = payload.transform(key)?;

        let doc = StoredDocument::new(
            key,
            nodes.payload_type.as_str(),
            nodes.en.to_value()?,
            nodes.fr.to_value()?,
        );

        self.store.remove(key).await?;
        self.store.save(doc).await?;

        info!(key, payload_type = %nodes.payload_type, "added a smallkey");
        Ok(())
    }

    /// Removes the registration under `key`; a missing one is not an error.
    pub async fn unregister(&self, key: &str) -> RegistryResult<()> {
        self.store.remove(key).await?;
        info!(key, "removed a smallkey");
        Ok(())
    }
}

/// Splits a comma-separated key list, trimming each key.
pub fn parse_key_list(list: &str) -> Vec<String> {
    list.split(',').map(|key| key.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;
    use std::path::Path;

    fn registry() -> (Registry, Arc<MemoryStore>) {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("schemas/registration.json");
        let validator = Arc::new(RegistrationValidator::from_file(&path).unwrap());
        let store = Arc::new(MemoryStore::new());
        (Registry::new(store.clone(), validator), store)
    }

    fn wms_body(layer: &str) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "payload_type": "wms",
            "en": {"service_url": "http://maps.example/wms", "layer": layer},
            "fr": {"service_url": "http://maps.example/wms", "layer": layer}
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_key_list() {
        assert_eq!(parse_key_list("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_key_list("solo"), vec!["solo"]);
        assert_eq!(parse_key_list("a,,b"), vec!["a", "", "b"]);
    }

    #[tokio::test]
    async fn test_register_then_read() {
        let (registry, _) = registry();
        registry.register("k1", &wms_body("rivers")).await.unwrap();

        let envelope = registry.get_doc("k1", "en").await.unwrap().unwrap();
        let layers = &envelope.layers["wms"];
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0]["id"], "rcs.k1.en");
    }

    #[tokio::test]
    async fn test_missing_key_reads_none() {
        let (registry, _) = registry();
        assert!(registry.get_doc("nope", "en").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unparsable_body() {
        let (registry, store) = registry();
        let err = registry.register("k1", b"{ nope").await.unwrap_err();
        assert!(matches!(err, RegistryError::UnparsableJson));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_schema_violation_leaves_store_untouched() {
        let (registry, store) = registry();
        registry.register("k1", &wms_body("rivers")).await.unwrap();

        let err = registry
            .register("k1", br#"{"payload_type": "wms", "en": {}}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Invalid(ref messages) if !messages.is_empty()));

        let stored = store.get("k1").await.unwrap();
        assert_eq!(stored.fragment("en").unwrap()["layerEntries"][0]["id"], "rivers");
    }

    #[tokio::test]
    async fn test_overwrite_keeps_single_document() {
        let (registry, store) = registry();
        registry.register("k1", &wms_body("rivers")).await.unwrap();
        registry.register("k1", &wms_body("lakes")).await.unwrap();

        assert_eq!(store.len(), 1);
        let envelope = registry.get_doc("k1", "fr").await.unwrap().unwrap();
        assert_eq!(envelope.layers["wms"][0]["layerEntries"][0]["id"], "lakes");
    }

    #[tokio::test]
    async fn test_unregister_twice() {
        let (registry, store) = registry();
        registry.register("k1", &wms_body("rivers")).await.unwrap();

        registry.unregister("k1").await.unwrap();
        registry.unregister("k1").await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_get_docs_preserves_order() {
        let (registry, _) = registry();
        registry.register("b", &wms_body("rivers")).await.unwrap();

        let keys = parse_key_list("a,b");
        let docs = registry.get_docs(&keys, "en").await;
        assert_eq!(docs.len(), 2);
        assert!(docs[0].is_none());
        assert!(docs[1].is_some());
    }
}
