//! Response envelope for a single language of a registration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::StoredDocument;

/// `{ "layers": { <payload_type>: [ <node> ] } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocEnvelope {
    pub layers: BTreeMap<String, Vec<Value>>,
}

impl DocEnvelope {
    /// Wraps the node stored for `lang`, or `None` when the document has none.
    pub fn from_document(doc: &StoredDocument, lang: &str) -> Option<Self> {
        let fragment = doc.fragment(lang)?;
        let mut layers = BTreeMap::new();
        layers.insert(doc.doc_type.clone(), vec![fragment.clone()]);
        Some(Self { layers })
    }
}
