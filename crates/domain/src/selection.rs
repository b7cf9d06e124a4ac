//! Selection — what the engine hands to the configuration layer.

use serde::{Deserialize, Serialize};

use crate::classifier::{Measurement, Strategy};
use crate::id::EntityId;

/// Named tiers of the outdoor tie-break, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutdoorTier {
    /// First candidate whose id carries an outdoor keyword.
    OutdoorKeyword,
    /// First candidate assigned to an area whose name suggests outdoors.
    OutdoorArea,
    /// First candidate, unconditionally.
    FirstCandidate,
}

impl OutdoorTier {
    /// Tiers in the order they are tried.
    pub const ORDER: [Self; 3] = [Self::OutdoorKeyword, Self::OutdoorArea, Self::FirstCandidate];
}

/// Result of the outdoor disambiguation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdoorPick {
    pub id: Option<EntityId>,
    /// The tier that produced `id`; `None` when nothing was picked.
    pub tier: Option<OutdoorTier>,
}

/// Candidates and defaults for one measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementSelection {
    pub measurement: Measurement,
    pub strategy: Strategy,
    /// Qualifying ids in snapshot order.
    pub candidates: Vec<EntityId>,
    /// `true` when the area/text filter matched nothing and `candidates`
    /// is the unfiltered classification instead.
    pub widened: bool,
    /// First candidate, if any.
    pub indoor_default: Option<EntityId>,
    pub outdoor: OutdoorPick,
}

impl MeasurementSelection {
    /// The outdoor guess, if any.
    #[must_use]
    pub fn outdoor_guess(&self) -> Option<&EntityId> {
        self.outdoor.id.as_ref()
    }

    /// Whether `id` is one of the candidates.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.candidates.iter().any(|candidate| candidate.eq_ignore_case(id))
    }
}

/// Full output of one selection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub temperature: MeasurementSelection,
    pub humidity: MeasurementSelection,
    /// Sorted, de-duplicated, non-empty area names for an area picker.
    pub area_names: Vec<String>,
}

impl Selection {
    #[must_use]
    pub fn measurement(&self, measurement: Measurement) -> &MeasurementSelection {
        match measurement {
            Measurement::Temperature => &self.temperature,
            Measurement::Humidity => &self.humidity,
        }
    }
}
