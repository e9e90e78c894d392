//! Wire types for the commerce platform's order metafields
//!
//! These mirror the Admin API payload shapes: a metafield page on read and a
//! single-metafield envelope on write.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Namespace shared by the source and derived metafields.
pub const LICENSE_NAMESPACE: &str = "xchange";

/// Key of the source metafield populated by the platform.
pub const LICENSE_KEY: &str = "licenses";

/// Key of the derived metafield this service writes back.
pub const LICENSE_HTML_KEY: &str = "licenses_html";

/// Metafield type used for the rendered HTML value.
pub const MULTI_LINE_TEXT: &str = "multi_line_text_field";

/// One metafield as returned by the order metafield listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metafield {
    pub namespace: String,
    pub key: String,
    /// Either a JSON-encoded string or an already-decoded structure,
    /// depending on how the store serialized the field.
    #[serde(default)]
    pub value: Value,
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
}

impl Metafield {
    /// Whether this is the licenses source metafield.
    pub fn is_license_source(&self) -> bool {
        self.namespace == LICENSE_NAMESPACE && self.key == LICENSE_KEY
    }

    /// Whether the metafield carries a usable value. A `null` or
    /// empty-string value means the platform has not populated it yet.
    pub fn has_value(&self) -> bool {
        !(self.value.is_null() || self.value.as_str() == Some(""))
    }
}

/// Read envelope: `GET .../orders/{id}/metafields.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetafieldPage {
    #[serde(default)]
    pub metafields: Vec<Metafield>,
}

/// Write payload for a new metafield, POSTed inside a `{"metafield": ...}`
/// envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMetafield {
    pub namespace: String,
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: String,
    pub owner_id: String,
    pub owner_resource: String,
}

impl NewMetafield {
    /// Derived-record payload for one order's rendered license table.
    pub fn licenses_html(order_id: &str, html: String) -> Self {
        Self {
            namespace: LICENSE_NAMESPACE.to_string(),
            key: LICENSE_HTML_KEY.to_string(),
            field_type: MULTI_LINE_TEXT.to_string(),
            value: html,
            owner_id: order_id.to_string(),
            owner_resource: "order".to_string(),
        }
    }
}

/// One product/serial/download triple from the source metafield.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LicenseEntry {
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub download: Option<String>,
}

impl LicenseEntry {
    /// Lenient extraction from one decoded list element.
    ///
    /// Entry shape is not validated upstream: absent or non-string fields
    /// become empty cells, and an empty download means no link.
    pub fn from_value(value: &Value) -> Self {
        let text = |field: &str| {
            value
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let download = value
            .get("download")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Self {
            product: text("product"),
            serial: text("serial"),
            download,
        }
    }
}
