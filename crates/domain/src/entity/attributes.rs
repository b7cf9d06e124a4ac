//! Named sensor attributes extracted from a dynamic attribute map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::AttributeValue;

/// Attribute key holding the unit of measurement.
pub const UNIT_OF_MEASUREMENT: &str = "unit_of_measurement";
/// Attribute key holding the declared device class.
pub const DEVICE_CLASS: &str = "device_class";
/// Attribute key holding the human-readable name.
pub const FRIENDLY_NAME: &str = "friendly_name";

/// The attributes the classifier and filter care about.
///
/// Absence is a first-class state: a missing key, a non-string value and a
/// blank string all become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorAttributes {
    pub unit_of_measurement: Option<String>,
    pub device_class: Option<String>,
    pub friendly_name: Option<String>,
}

impl SensorAttributes {
    /// Pick the known keys out of a raw attribute map.
    #[must_use]
    pub fn from_map(map: &HashMap<String, AttributeValue>) -> Self {
        let text = |key: &str| {
            map.get(key)
                .and_then(AttributeValue::as_str)
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
        };

        Self {
            unit_of_measurement: text(UNIT_OF_MEASUREMENT),
            device_class: text(DEVICE_CLASS),
            friendly_name: text(FRIENDLY_NAME),
        }
    }
}
