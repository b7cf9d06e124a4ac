//! Raw JSON records as found in the dump files.

use std::collections::HashMap;

use serde::Deserialize;
use tempcalc_domain::entity::AttributeValue;

/// One element of the `/api/states` array.
#[derive(Debug, Deserialize)]
pub(crate) struct RawState {
    pub entity_id: String,
    #[serde(default)]
    pub state: serde_json::Value,
    #[serde(default)]
    pub attributes: HashMap<String, AttributeValue>,
}

impl RawState {
    /// The state as reported text; numbers are rendered, `null` is empty.
    pub fn raw_value(&self) -> String {
        match &self.state {
            serde_json::Value::String(value) => value.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawArea {
    pub id: String,
    pub name: String,
}

/// The area registry file.
///
/// Records stay untyped here so that one malformed entry does not reject
/// the whole registry; they are decoded one by one while building.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawAreaRegistry {
    #[serde(default)]
    pub areas: Vec<serde_json::Value>,
    /// Entity id → area id.
    #[serde(default)]
    pub entities: HashMap<String, serde_json::Value>,
}
