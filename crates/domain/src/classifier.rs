//! Classifier — decides what an entity measures.
//!
//! The heuristic predicates live in [`heuristic`]; [`Strategy`] selects
//! between them and the strict device-class check. Every function here is a
//! pure function of the entity and the fixed tables in [`keywords`].

pub mod heuristic;
pub mod keywords;
mod strategy;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::EntityId;

pub use heuristic::{is_humidity, is_outdoor_context, is_plant_decoy, is_temperature};
pub use strategy::Strategy;

/// A physical quantity the engine selects sensors for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    Temperature,
    Humidity,
}

/// Static acceptance rule for one [`Measurement`].
#[derive(Debug, Clone)]
pub struct MeasurementRule {
    /// Inclusive plausibility bounds.
    pub range: RangeInclusive<f64>,
    /// Recognised units, lower-case.
    pub units: &'static [&'static str],
    /// Id fragments used when the unit gives no answer.
    pub name_keywords: &'static [&'static str],
}

impl MeasurementRule {
    /// Whether `unit` (trimmed, case-insensitive) is whitelisted.
    #[must_use]
    pub fn accepts_unit(&self, unit: &str) -> bool {
        let unit = unit.trim().to_lowercase();
        self.units.contains(&unit.as_str())
    }
}

const TEMPERATURE_RULE: MeasurementRule = MeasurementRule {
    range: -40.0..=80.0,
    units: keywords::TEMPERATURE_UNITS,
    name_keywords: keywords::TEMPERATURE_NAME_KEYWORDS,
};

const HUMIDITY_RULE: MeasurementRule = MeasurementRule {
    range: 0.0..=100.0,
    units: keywords::HUMIDITY_UNITS,
    name_keywords: keywords::HUMIDITY_NAME_KEYWORDS,
};

impl Measurement {
    pub const ALL: [Self; 2] = [Self::Temperature, Self::Humidity];

    #[must_use]
    pub fn rule(self) -> MeasurementRule {
        match self {
            Self::Temperature => TEMPERATURE_RULE,
            Self::Humidity => HUMIDITY_RULE,
        }
    }

    /// The `device_class` value declaring this measurement.
    #[must_use]
    pub fn device_class(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
        }
    }
}

/// What an entity turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Temperature,
    Humidity,
    PlantDecoy,
    Unrelated,
}

impl From<Measurement> for Category {
    fn from(measurement: Measurement) -> Self {
        match measurement {
            Measurement::Temperature => Self::Temperature,
            Measurement::Humidity => Self::Humidity,
        }
    }
}

/// Categorise one entity. Plant decoys win over everything else, then
/// temperature, then humidity.
#[must_use]
pub fn classify(strategy: Strategy, entity: &Entity) -> Category {
    if is_plant_decoy(entity) {
        return Category::PlantDecoy;
    }
    Measurement::ALL
        .into_iter()
        .find(|measurement| strategy.accepts(*measurement, entity))
        .map_or(Category::Unrelated, Category::from)
}

/// Ids of all entities accepted for one measurement, tagged with the strategy
/// that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub strategy: Strategy,
    pub measurement: Measurement,
    /// Snapshot enumeration order, never re-sorted.
    pub ids: Vec<EntityId>,
}

/// Run `strategy` for `measurement` over `entities`, preserving their order.
pub fn classify_all<'a>(
    strategy: Strategy,
    measurement: Measurement,
    entities: impl IntoIterator<Item = &'a Entity>,
) -> Classification {
    let ids = entities
        .into_iter()
        .filter(|entity| strategy.accepts(measurement, entity))
        .map(|entity| entity.id.clone())
        .collect();

    Classification {
        strategy,
        measurement,
        ids,
    }
}

/// Id-only form of [`is_outdoor_context`], for candidate lists.
#[must_use]
pub fn is_outdoor_id(id: &EntityId) -> bool {
    id.contains_any(keywords::OUTDOOR_KEYWORDS)
}
