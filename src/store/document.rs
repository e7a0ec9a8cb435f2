//! # Stored Registration Document

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One registration as persisted under its short key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    #[serde(rename = "_id")]
    pub id: String,

    /// Store revision; absent on documents not yet saved
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,

    /// Payload type the nodes were built with
    #[serde(rename = "type")]
    pub doc_type: String,

    pub data: DocumentData,
}

/// Per-language nodes of a registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentData {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr: Option<Value>,
}

impl StoredDocument {
    /// Creates an unsaved document.
    pub fn new(key: impl Into<String>, doc_type: impl Into<String>, en: Value, fr: Value) -> Self {
        let key = key.into();
        Self {
            id: key.clone(),
            rev: None,
            doc_type: doc_type.into(),
            data: DocumentData {
                key,
                en: Some(en),
                fr: Some(fr),
            },
        }
    }

    /// Node stored for `lang`, if any.
    ///
    /// Only `en` and `fr` are served; `data.key` is never returned as a fragment.
    pub fn fragment(&self, lang: &str) -> Option<&Value> {
        match lang {
            "en" => self.data.en.as_ref(),
            "fr" => self.data.fr.as_ref(),
            _ => None,
        }
    }
}
