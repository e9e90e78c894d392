//! Tolerant decoding of the licenses metafield value

use serde_json::Value;

use crate::error::ParseErrorKind;
use shared::LicenseEntry;

/// Decode a licenses metafield value into license entries.
///
/// The store hands the value back either as a JSON-encoded string or as an
/// already-decoded list; both must end up as a list. Entry fields are
/// extracted leniently and degrade to empty cells at render time.
pub fn parse_licenses(raw: &Value) -> Result<Vec<LicenseEntry>, ParseErrorKind> {
    let decoded: Value = match raw {
        Value::String(text) => {
            serde_json::from_str(text).map_err(|_| ParseErrorKind::MalformedJson)?
        }
        Value::Array(_) => raw.clone(),
        _ => return Err(ParseErrorKind::UnexpectedType),
    };

    match decoded {
        Value::Array(items) => Ok(items.iter().map(LicenseEntry::from_value).collect()),
        _ => Err(ParseErrorKind::NotAList),
    }
}
