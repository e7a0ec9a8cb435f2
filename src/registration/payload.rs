//! Registration payload and payload type dispatch

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{TransformError, TransformResult};
use super::key::make_id;
use super::node::{esri_feature, wms, Node};

/// Kind of service a registration describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadType {
    Wms,
    EsriFeature,
}

impl PayloadType {
    /// Wire name, also used as the envelope key
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadType::Wms => "wms",
            PayloadType::EsriFeature => "esri_feature",
        }
    }

    /// Transforms one raw language descriptor into a node tagged with `id`.
    pub fn make_node(&self, raw: &Value, id: &str) -> TransformResult<Node> {
        match self {
            PayloadType::Wms => wms::make_node(raw, id),
            PayloadType::EsriFeature => esri_feature::make_node(raw, id),
        }
    }
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadType {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wms" => Ok(PayloadType::Wms),
            "esri_feature" => Ok(PayloadType::EsriFeature),
            other => Err(TransformError::UnsupportedPayloadType(other.to_string())),
        }
    }
}

/// Body of `PUT /register/{key}`.
///
/// `payload_type` stays a string here so an unknown value that slipped past
/// the schema surfaces as `UnsupportedPayloadType` rather than a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationPayload {
    pub payload_type: String,
    pub en: Value,
    pub fr: Value,
}

/// Nodes produced for both languages of one registration
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedRegistration {
    pub payload_type: PayloadType,
    pub en: Node,
    pub fr: Node,
}

impl RegistrationPayload {
    /// Reads a payload out of an already schema-validated JSON document.
    pub fn from_value(value: Value) -> TransformResult<Self> {
        serde_json::from_value(value).map_err(|e| TransformError::InvalidPayload(e.to_string()))
    }

    /// Transforms both language descriptors for `key`.
    pub fn transform(&self, key: &str) -> TransformResult<TransformedRegistration> {
        let payload_type: PayloadType = self.payload_type.parse()?;
        Ok(TransformedRegistration {
            payload_type,
            en: payload_type.make_node(&self.en, &make_id(key, "en"))?,
            fr: payload_type.make_node(&self.fr, &make_id(key, "fr"))?,
        })
    }
}
