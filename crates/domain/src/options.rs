//! Room options — the flat mapping the caller persists once the form is
//! submitted, plus its field-level validation.
//!
//! The engine never stores these; it only pre-fills them from a
//! [`Selection`] and checks a submission against a fresh one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::Measurement;
use crate::id::EntityId;
use crate::selection::{MeasurementSelection, Selection};

/// Keys of the persisted mapping.
pub mod keys {
    pub const INDOOR_TEMPERATURE_SENSOR: &str = "indoor_temperature_sensor";
    pub const INDOOR_HUMIDITY_SENSOR: &str = "indoor_humidity_sensor";
    pub const OUTDOOR_TEMPERATURE_SENSOR: &str = "outdoor_temperature_sensor";
    pub const OUTDOOR_HUMIDITY_SENSOR: &str = "outdoor_humidity_sensor";
    pub const ROOM_NAME: &str = "room_name";
    pub const ROOM_AREA: &str = "room_area";
    pub const ROOM_FILTER: &str = "room_filter";
}

/// Toggles for the downstream derived sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FeatureFlags {
    pub enable_absolute_humidity: bool,
    pub enable_mold_index: bool,
    pub enable_dew_point: bool,
    pub enable_enthalpy: bool,
    pub enable_ventilation_recommendation: bool,
    pub enable_ventilation_duration: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_absolute_humidity: true,
            enable_mold_index: true,
            enable_dew_point: true,
            enable_enthalpy: false,
            enable_ventilation_recommendation: true,
            enable_ventilation_duration: true,
        }
    }
}

/// Options for one room, as persisted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomOptions {
    pub indoor_temperature_sensor: Option<EntityId>,
    pub indoor_humidity_sensor: Option<EntityId>,
    pub outdoor_temperature_sensor: Option<EntityId>,
    pub outdoor_humidity_sensor: Option<EntityId>,
    pub room_name: String,
    pub room_area: Option<String>,
    pub room_filter: Option<String>,
    #[serde(flatten)]
    pub features: FeatureFlags,
}

impl RoomOptions {
    /// Form defaults: previously saved values win, otherwise the
    /// selection's indoor default and outdoor guess are used.
    #[must_use]
    pub fn prefill(selection: &Selection, previous: Option<&Self>) -> Self {
        let mut options = previous.cloned().unwrap_or_default();

        fill_blank(
            &mut options.indoor_temperature_sensor,
            selection.temperature.indoor_default.as_ref(),
        );
        fill_blank(
            &mut options.indoor_humidity_sensor,
            selection.humidity.indoor_default.as_ref(),
        );
        fill_blank(
            &mut options.outdoor_temperature_sensor,
            selection.temperature.outdoor_guess(),
        );
        fill_blank(
            &mut options.outdoor_humidity_sensor,
            selection.humidity.outdoor_guess(),
        );

        options
    }

    /// Field-level problems of this submission against `selection`.
    ///
    /// Indoor sensors are required and must be current candidates. Outdoor
    /// sensors are free text and may be left empty.
    #[must_use]
    pub fn field_errors(&self, selection: &Selection) -> Vec<FieldError> {
        [
            (
                keys::INDOOR_TEMPERATURE_SENSOR,
                self.indoor_temperature_sensor.as_ref(),
                Measurement::Temperature,
            ),
            (
                keys::INDOOR_HUMIDITY_SENSOR,
                self.indoor_humidity_sensor.as_ref(),
                Measurement::Humidity,
            ),
        ]
        .into_iter()
        .filter_map(|(field, value, measurement)| {
            check_required(value, selection.measurement(measurement))
                .map(|reason| FieldError { field, reason })
        })
        .collect()
    }

    /// Accept the submission or reject it with the input retained.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionRejected`] carrying this input and every field
    /// error when a required selection is missing or not a candidate.
    pub fn validate(self, selection: &Selection) -> Result<Self, SubmissionRejected> {
        let errors = self.field_errors(selection);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(SubmissionRejected {
                input: self,
                errors,
            })
        }
    }
}

fn is_blank(value: Option<&EntityId>) -> bool {
    value.is_none_or(|id| id.as_str().trim().is_empty())
}

fn fill_blank(slot: &mut Option<EntityId>, default: Option<&EntityId>) {
    if is_blank(slot.as_ref()) {
        *slot = default.cloned();
    }
}

fn check_required(
    value: Option<&EntityId>,
    candidates: &MeasurementSelection,
) -> Option<FieldErrorReason> {
    match value {
        _ if is_blank(value) => Some(FieldErrorReason::Required),
        Some(id) if !candidates.contains(id) => Some(FieldErrorReason::NotACandidate),
        _ => None,
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorReason {
    Required,
    NotACandidate,
}

impl fmt::Display for FieldErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::NotACandidate => f.write_str("not_a_candidate"),
        }
    }
}

/// A validation marker attached to one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: FieldErrorReason,
}

/// A rejected submission. The form is redisplayed with `input`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("submission rejected with {} field error(s)", .errors.len())]
pub struct SubmissionRejected {
    pub input: RoomOptions,
    pub errors: Vec<FieldError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Strategy;
    use crate::selection::OutdoorPick;

    fn measurement(
        measurement: Measurement,
        candidates: &[&str],
        outdoor: Option<&str>,
    ) -> MeasurementSelection {
        let candidates: Vec<EntityId> = candidates.iter().copied().map(EntityId::new).collect();
        MeasurementSelection {
            measurement,
            strategy: Strategy::Heuristic,
            indoor_default: candidates.first().cloned(),
            candidates,
            widened: false,
            outdoor: OutdoorPick {
                id: outdoor.map(EntityId::new),
                tier: None,
            },
        }
    }

    fn selection() -> Selection {
        Selection {
            temperature: measurement(
                Measurement::Temperature,
                &["sensor.room_temp", "sensor.outdoor_temp"],
                Some("sensor.outdoor_temp"),
            ),
            humidity: measurement(Measurement::Humidity, &["sensor.room_hum"], None),
            area_names: vec![],
        }
    }

    #[test]
    fn should_use_documented_feature_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_absolute_humidity);
        assert!(flags.enable_mold_index);
        assert!(flags.enable_dew_point);
        assert!(!flags.enable_enthalpy);
        assert!(flags.enable_ventilation_recommendation);
        assert!(flags.enable_ventilation_duration);
    }

    #[test]
    fn should_prefill_from_selection_when_no_previous_options() {
        let options = RoomOptions::prefill(&selection(), None);

        assert_eq!(
            options.indoor_temperature_sensor,
            Some(EntityId::new("sensor.room_temp"))
        );
        assert_eq!(
            options.indoor_humidity_sensor,
            Some(EntityId::new("sensor.room_hum"))
        );
        assert_eq!(
            options.outdoor_temperature_sensor,
            Some(EntityId::new("sensor.outdoor_temp"))
        );
        assert_eq!(options.outdoor_humidity_sensor, None);
    }

    #[test]
    fn should_prefer_previous_values_when_prefilling() {
        let previous = RoomOptions {
            outdoor_temperature_sensor: Some(EntityId::new("sensor.weather_station")),
            room_name: "Office".to_string(),
            features: FeatureFlags {
                enable_enthalpy: true,
                ..FeatureFlags::default()
            },
            ..RoomOptions::default()
        };

        let options = RoomOptions::prefill(&selection(), Some(&previous));

        assert_eq!(
            options.outdoor_temperature_sensor,
            Some(EntityId::new("sensor.weather_station"))
        );
        assert_eq!(
            options.indoor_temperature_sensor,
            Some(EntityId::new("sensor.room_temp"))
        );
        assert_eq!(options.room_name, "Office");
        assert!(options.features.enable_enthalpy);
    }

    #[test]
    fn should_accept_submission_with_candidate_indoor_sensors() {
        let input = RoomOptions {
            indoor_temperature_sensor: Some(EntityId::new("sensor.room_temp")),
            indoor_humidity_sensor: Some(EntityId::new("sensor.room_hum")),
            ..RoomOptions::default()
        };

        let accepted = input.clone().validate(&selection()).unwrap();
        assert_eq!(accepted, input);
    }

    #[test]
    fn should_reject_missing_indoor_sensors_and_retain_input() {
        let input = RoomOptions {
            indoor_humidity_sensor: Some(EntityId::new("  ")),
            room_name: "Bedroom".to_string(),
            ..RoomOptions::default()
        };

        let rejected = input.clone().validate(&selection()).unwrap_err();

        assert_eq!(rejected.input, input);
        assert_eq!(
            rejected.errors,
            vec![
                FieldError {
                    field: keys::INDOOR_TEMPERATURE_SENSOR,
                    reason: FieldErrorReason::Required,
                },
                FieldError {
                    field: keys::INDOOR_HUMIDITY_SENSOR,
                    reason: FieldErrorReason::Required,
                },
            ]
        );
    }

    #[test]
    fn should_reject_indoor_sensor_that_is_not_a_candidate() {
        let input = RoomOptions {
            indoor_temperature_sensor: Some(EntityId::new("sensor.plant_soil_temp")),
            indoor_humidity_sensor: Some(EntityId::new("sensor.room_hum")),
            ..RoomOptions::default()
        };

        let errors = input.field_errors(&selection());

        assert_eq!(
            errors,
            vec![FieldError {
                field: keys::INDOOR_TEMPERATURE_SENSOR,
                reason: FieldErrorReason::NotACandidate,
            }]
        );
        assert_eq!(errors[0].to_string(), "indoor_temperature_sensor: not_a_candidate");
    }

    #[test]
    fn should_deserialize_flat_mapping_with_defaults() {
        let json = r#"{
            "indoor_temperature_sensor": "sensor.room_temp",
            "room_name": "Kitchen",
            "enable_enthalpy": true
        }"#;

        let options: RoomOptions = serde_json::from_str(json).unwrap();

        assert_eq!(
            options.indoor_temperature_sensor,
            Some(EntityId::new("sensor.room_temp"))
        );
        assert_eq!(options.room_name, "Kitchen");
        assert!(options.features.enable_enthalpy);
        assert!(options.features.enable_dew_point);
        assert!(options.indoor_humidity_sensor.is_none());
    }

    #[test]
    fn should_serialize_feature_flags_at_top_level() {
        let json = serde_json::to_value(RoomOptions::default()).unwrap();
        assert_eq!(json[keys::ROOM_NAME], "");
        assert_eq!(json["enable_mold_index"], true);
        assert!(json.get("features").is_none());
    }
}
