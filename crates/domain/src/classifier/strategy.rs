//! Selectable classification strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::ValidationError;

use super::Measurement;
use super::heuristic::{is_plant_decoy, matches_measurement, parse_decimal};

/// How an entity is judged to be a temperature or humidity reading.
///
/// Both strategies exclude plant decoys and readings whose state does not
/// parse as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Trust the declared `device_class` attribute and nothing else.
    DeviceClass,
    /// Keyword exclusion, numeric range, unit whitelist and name inference.
    #[default]
    Heuristic,
}

impl Strategy {
    /// Whether `entity` qualifies as a `measurement` reading under this strategy.
    #[must_use]
    pub fn accepts(self, measurement: Measurement, entity: &Entity) -> bool {
        match self {
            Self::DeviceClass => declares_device_class(measurement, entity),
            Self::Heuristic => matches_measurement(measurement, entity),
        }
    }
}

fn declares_device_class(measurement: Measurement, entity: &Entity) -> bool {
    if is_plant_decoy(entity) || parse_decimal(&entity.raw_value).is_none() {
        return false;
    }
    entity
        .device_class()
        .is_some_and(|class| class.trim().eq_ignore_ascii_case(measurement.device_class()))
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceClass => f.write_str("device_class"),
            Self::Heuristic => f.write_str("heuristic"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "device_class" => Ok(Self::DeviceClass),
            "heuristic" => Ok(Self::Heuristic),
            other => Err(ValidationError::UnknownStrategy(other.to_string())),
        }
    }
}
