//! Selection service — composes classification, filtering, widening and
//! outdoor disambiguation into the lists shown to the configuration form.

use std::collections::BTreeSet;

use tempcalc_domain::classifier::{Measurement, Strategy, classify_all, is_outdoor_id};
use tempcalc_domain::entity::Entity;
use tempcalc_domain::id::EntityId;
use tempcalc_domain::selection::{MeasurementSelection, Selection};

use crate::ports::{AreaDirectory, EntitySnapshot};
use crate::services::candidate_filter::CandidateFilter;
use crate::services::outdoor_picker::pick_best;

/// Parameters of one selection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionRequest {
    pub strategy: Strategy,
    /// Restrict candidates to the area with this name.
    pub room_area: Option<String>,
    /// Restrict candidates to ids or friendly names containing this text.
    pub room_filter: Option<String>,
}

impl SelectionRequest {
    /// A request without area or text constraints.
    #[must_use]
    pub fn unfiltered(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}

/// Application service producing a [`Selection`] from the live ports.
pub struct SelectionService<S, A> {
    snapshot: S,
    areas: A,
}

impl<S: EntitySnapshot, A: AreaDirectory> SelectionService<S, A> {
    /// Create a new service reading from the given ports.
    pub fn new(snapshot: S, areas: A) -> Self {
        Self { snapshot, areas }
    }

    /// Recompute the selection from the current snapshot.
    ///
    /// Never fails: absence of candidates yields empty lists and `None`
    /// defaults.
    #[tracing::instrument(skip_all, fields(strategy = %request.strategy))]
    pub fn select(&self, request: &SelectionRequest) -> Selection {
        let entities = self.snapshot.sensors();
        let filter = CandidateFilter::new(
            request.room_area.as_deref(),
            request.room_filter.as_deref(),
        );

        let [temperature, humidity] = Measurement::ALL.map(|measurement| {
            self.select_measurement(measurement, request.strategy, &entities, &filter)
        });

        tracing::debug!(
            entities = entities.len(),
            temperature = temperature.candidates.len(),
            humidity = humidity.candidates.len(),
            "selection computed"
        );

        Selection {
            temperature,
            humidity,
            area_names: area_names(&self.areas),
        }
    }

    fn select_measurement(
        &self,
        measurement: Measurement,
        strategy: Strategy,
        entities: &[Entity],
        filter: &CandidateFilter,
    ) -> MeasurementSelection {
        let classified = classify_all(strategy, measurement, entities);
        let filtered = filter.apply(&classified.ids, entities, &self.areas);
        let (candidates, widened) = widen_if_empty(filtered, classified.ids);
        if widened {
            tracing::debug!(
                ?measurement,
                "filter matched nothing, using unfiltered candidates"
            );
        }

        let outdoor_candidates: Vec<EntityId> = candidates
            .iter()
            .filter(|id| is_outdoor_id(id))
            .cloned()
            .collect();
        let outdoor = pick_best(&outdoor_candidates, &self.areas);

        MeasurementSelection {
            measurement,
            strategy: classified.strategy,
            indoor_default: candidates.first().cloned(),
            candidates,
            widened,
            outdoor,
        }
    }
}

/// Single-level fallback: an empty filtered list is replaced by the
/// unfiltered one. Returns the list to use and whether it was widened.
pub fn widen_if_empty(
    filtered: Vec<EntityId>,
    unfiltered: Vec<EntityId>,
) -> (Vec<EntityId>, bool) {
    if filtered.is_empty() && !unfiltered.is_empty() {
        (unfiltered, true)
    } else {
        (filtered, false)
    }
}

/// Sorted, de-duplicated, non-blank area names.
pub fn area_names(areas: &impl AreaDirectory) -> Vec<String> {
    areas
        .areas()
        .into_iter()
        .map(|area| area.name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
