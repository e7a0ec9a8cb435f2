//! Storage-ready layer nodes
//!
//! One transformer per payload type. Each is pure and turns a raw language
//! descriptor plus a generated identifier into a [`Node`].

pub mod esri_feature;
pub mod wms;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{TransformError, TransformResult};

pub use esri_feature::EsriFeatureNode;
pub use wms::{LayerEntry, WmsNode};

/// Normalized layer description for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layerType")]
pub enum Node {
    #[serde(rename = "ogcWms")]
    Wms(WmsNode),
    #[serde(rename = "esriFeature")]
    EsriFeature(EsriFeatureNode),
}

impl Node {
    /// Identifier of the form `rcs.<key>.<lang>`
    pub fn id(&self) -> &str {
        match self {
            Node::Wms(node) => &node.id,
            Node::EsriFeature(node) => &node.id,
        }
    }

    /// Encodes the node for storage.
    pub fn to_value(&self) -> TransformResult<Value> {
        serde_json::to_value(self).map_err(|e| TransformError::Encode {
            id: self.id().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Decodes a raw descriptor, tagging failures with the payload type and id.
pub(crate) fn parse_descriptor<T: serde::de::DeserializeOwned>(
    raw: &Value,
    payload_type: &'static str,
    id: &str,
) -> TransformResult<T> {
    T::deserialize(raw).map_err(|e| TransformError::InvalidDescriptor {
        payload_type,
        id: id.to_string(),
        reason: e.to_string(),
    })
}

/// Trims a required text field, rejecting blank values.
pub(crate) fn required_text(
    value: &str,
    field: &str,
    payload_type: &'static str,
    id: &str,
) -> TransformResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TransformError::BlankField {
            payload_type,
            id: id.to_string(),
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Drops blank optional text.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_is_tagged_with_layer_type() {
        let node = wms::make_node(
            &json!({"service_url": "http://maps.example/wms", "layer": "roads"}),
            "rcs.k.en",
        )
        .unwrap();

        let value = node.to_value().unwrap();
        assert_eq!(value["layerType"], "ogcWms");
        assert_eq!(value["id"], "rcs.k.en");
    }

    #[test]
    fn test_node_decodes_from_storage() {
        let node = esri_feature::make_node(
            &json!({"service_url": "http://maps.example/arcgis/rest/services/x/FeatureServer/0"}),
            "rcs.k.fr",
        )
        .unwrap();

        let decoded: Node = serde_json::from_value(node.to_value().unwrap()).unwrap();
        assert_eq!(decoded, node);
    }

    #[test]
    fn test_optional_text_drops_blank() {
        assert_eq!(optional_text(Some("  ".to_string())), None);
        assert_eq!(optional_text(Some(" a ".to_string())), Some("a".to_string()));
        assert_eq!(optional_text(None), None);
    }
}
