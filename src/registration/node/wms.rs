//! WMS layer transformer

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{optional_text, parse_descriptor, required_text, Node};
use crate::registration::errors::TransformResult;

const PAYLOAD_TYPE: &str = "wms";

pub const DEFAULT_LEGEND_FORMAT: &str = "image/png";
pub const DEFAULT_FEATURE_INFO_FORMAT: &str = "text/plain";

/// Raw WMS descriptor as submitted by a client
#[derive(Debug, Deserialize)]
struct WmsDescriptor {
    service_url: String,
    layer: String,
    #[serde(default)]
    legend_format: Option<String>,
    #[serde(default)]
    feature_info_format: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerEntry {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WmsNode {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub layer_entries: Vec<LayerEntry>,
    pub legend_mime_type: String,
    pub feature_info_mime_type: String,
}

/// Builds a WMS node from a raw descriptor.
pub fn make_node(raw: &Value, id: &str) -> TransformResult<Node> {
    let descriptor: WmsDescriptor = parse_descriptor(raw, PAYLOAD_TYPE, id)?;

    let url = required_text(&descriptor.service_url, "service_url", PAYLOAD_TYPE, id)?;
    let layer = required_text(&descriptor.layer, "layer", PAYLOAD_TYPE, id)?;

    Ok(Node::Wms(WmsNode {
        id: id.to_string(),
        url,
        name: optional_text(descriptor.display_name),
        layer_entries: vec![LayerEntry { id: layer }],
        legend_mime_type: optional_text(descriptor.legend_format)
            .unwrap_or_else(|| DEFAULT_LEGEND_FORMAT.to_string()),
        feature_info_mime_type: optional_text(descriptor.feature_info_format)
            .unwrap_or_else(|| DEFAULT_FEATURE_INFO_FORMAT.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::errors::TransformError;
    use serde_json::json;

    #[test]
    fn test_defaults_applied() {
        let node = make_node(
            &json!({"service_url": " http://maps.example/wms ", "layer": "rivers"}),
            "rcs.abc.en",
        )
        .unwrap();

        let Node::Wms(wms) = node else {
            panic!("expected a WMS node");
        };
        assert_eq!(wms.url, "http://maps.example/wms");
        assert_eq!(wms.layer_entries, vec![LayerEntry { id: "rivers".into() }]);
        assert_eq!(wms.legend_mime_type, DEFAULT_LEGEND_FORMAT);
        assert_eq!(wms.feature_info_mime_type, DEFAULT_FEATURE_INFO_FORMAT);
        assert_eq!(wms.name, None);
    }

    #[test]
    fn test_explicit_formats_kept() {
        let node = make_node(
            &json!({
                "service_url": "http://maps.example/wms",
                "layer": "rivers",
                "legend_format": "image/jpeg",
                "feature_info_format": "application/json",
                "display_name": "Rivers"
            }),
            "rcs.abc.en",
        )
        .unwrap();

        let value = node.to_value().unwrap();
        assert_eq!(value["legendMimeType"], "image/jpeg");
        assert_eq!(value["featureInfoMimeType"], "application/json");
        assert_eq!(value["name"], "Rivers");
        assert_eq!(value["layerEntries"][0]["id"], "rivers");
    }

    #[test]
    fn test_missing_layer_rejected() {
        let err = make_node(&json!({"service_url": "http://maps.example/wms"}), "rcs.abc.fr")
            .unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidDescriptor { payload_type: "wms", ref id, .. } if id == "rcs.abc.fr"
        ));
    }

    #[test]
    fn test_blank_url_rejected() {
        let err = make_node(&json!({"service_url": "  ", "layer": "x"}), "rcs.abc.en").unwrap_err();
        assert!(matches!(err, TransformError::BlankField { ref field, .. } if field == "service_url"));
    }
}
