//! ESRI feature service transformer

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{optional_text, parse_descriptor, required_text, Node};
use crate::registration::errors::TransformResult;

const PAYLOAD_TYPE: &str = "esri_feature";

#[derive(Debug, Deserialize)]
struct EsriFeatureDescriptor {
    service_url: String,
    #[serde(default)]
    display_field: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsriFeatureNode {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_field: Option<String>,
}

/// Builds a feature layer node from a raw descriptor.
pub fn make_node(raw: &Value, id: &str) -> TransformResult<Node> {
    let descriptor: EsriFeatureDescriptor = parse_descriptor(raw, PAYLOAD_TYPE, id)?;

    // Feature layer endpoints are addressed without a trailing slash
    let url = required_text(&descriptor.service_url, "service_url", PAYLOAD_TYPE, id)?
        .trim_end_matches('/')
        .to_string();

    Ok(Node::EsriFeature(EsriFeatureNode {
        id: id.to_string(),
        url,
        name: optional_text(descriptor.display_name),
        name_field: optional_text(descriptor.display_field),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::errors::TransformError;
    use serde_json::json;

    #[test]
    fn test_make_node() {
        let node = make_node(
            &json!({
                "service_url": "http://maps.example/arcgis/rest/services/Parks/FeatureServer/2/",
                "display_field": "PARK_NAME"
            }),
            "rcs.parks.fr",
        )
        .unwrap();

        assert_eq!(
            node,
            Node::EsriFeature(EsriFeatureNode {
                id: "rcs.parks.fr".into(),
                url: "http://maps.example/arcgis/rest/services/Parks/FeatureServer/2".into(),
                name: None,
                name_field: Some("PARK_NAME".into()),
            })
        );
    }

    #[test]
    fn test_non_object_descriptor_rejected() {
        let err = make_node(&json!("http://x"), "rcs.parks.en").unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidDescriptor { payload_type: "esri_feature", .. }
        ));
    }
}
