//! Heuristic predicates: keyword exclusion, numeric range, unit whitelist and
//! name inference.

use crate::entity::Entity;

use super::Measurement;
use super::keywords::{EXCLUDED_KEYWORDS, OUTDOOR_KEYWORDS, PLANT_KEYWORDS, contains_any};

/// The id names a plant or soil sensor.
#[must_use]
pub fn is_plant_decoy(entity: &Entity) -> bool {
    entity.id.contains_any(PLANT_KEYWORDS)
}

/// The id suggests an outdoor location. Value and unit are not consulted.
#[must_use]
pub fn is_outdoor_context(entity: &Entity) -> bool {
    entity.id.contains_any(OUTDOOR_KEYWORDS)
}

#[must_use]
pub fn is_temperature(entity: &Entity) -> bool {
    matches_measurement(Measurement::Temperature, entity)
}

#[must_use]
pub fn is_humidity(entity: &Entity) -> bool {
    matches_measurement(Measurement::Humidity, entity)
}

/// Parse a reported state as a decimal, accepting `.` or `,` as separator.
///
/// Non-finite values are rejected.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Layered check shared by both measurements.
///
/// A recognised unit is authoritative. The name keywords are consulted only
/// when the unit is absent or unrecognised, and never after a failed parse
/// or range check.
pub(crate) fn matches_measurement(measurement: Measurement, entity: &Entity) -> bool {
    let rule = measurement.rule();
    let id = entity.id.to_lowercase();

    if is_plant_decoy(entity) || contains_any(&id, EXCLUDED_KEYWORDS) {
        return false;
    }

    let Some(value) = parse_decimal(&entity.raw_value) else {
        return false;
    };
    if !rule.range.contains(&value) {
        return false;
    }

    if entity.unit().is_some_and(|unit| rule.accepts_unit(unit)) {
        return true;
    }

    contains_any(&id, rule.name_keywords)
}
