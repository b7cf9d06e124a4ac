//! Candidate filter — narrows a candidate list by area name and free text.
//!
//! The filter never widens an empty result on its own; falling back to the
//! unfiltered list is the caller's decision.

use std::collections::HashMap;

use tempcalc_domain::entity::Entity;
use tempcalc_domain::id::{AreaId, EntityId};

use crate::ports::{AreaDirectory, EntitySnapshot};

/// Normalised area/text constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    area_name: Option<String>,
    text: Option<String>,
}

impl CandidateFilter {
    /// Build a filter; blank values count as absent.
    #[must_use]
    pub fn new(area_name: Option<&str>, text: Option<&str>) -> Self {
        Self {
            area_name: normalize(area_name),
            text: normalize(text),
        }
    }

    /// Whether neither constraint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.area_name.is_none() && self.text.is_none()
    }

    /// Keep the candidates matching both constraints, in input order.
    ///
    /// Friendly names are looked up in `entities`, the same read the
    /// candidates were classified from. An area name that matches no area
    /// is ignored rather than filtering everything out.
    pub fn apply(
        &self,
        candidates: &[EntityId],
        entities: &[Entity],
        areas: &impl AreaDirectory,
    ) -> Vec<EntityId> {
        if self.is_empty() {
            return candidates.to_vec();
        }

        let area = self.area_name.as_deref().and_then(|name| {
            let resolved = resolve_area(name, areas);
            if resolved.is_none() {
                tracing::debug!(area_name = name, "no area matches, area constraint skipped");
            }
            resolved
        });

        let friendly_names: HashMap<String, &str> = entities
            .iter()
            .filter_map(|entity| Some((entity.id.to_lowercase(), entity.friendly_name()?)))
            .collect();

        candidates
            .iter()
            .filter(|id| {
                self.text
                    .as_deref()
                    .is_none_or(|needle| matches_text(id, needle, &friendly_names))
            })
            .filter(|id| {
                area.as_ref()
                    .is_none_or(|area| areas.area_of(id).as_ref() == Some(area))
            })
            .cloned()
            .collect()
    }
}

/// Filter `candidates` by an optional area name and text fragment,
/// reading the snapshot once for friendly names.
pub fn filter(
    candidates: &[EntityId],
    area_name: Option<&str>,
    text: Option<&str>,
    snapshot: &impl EntitySnapshot,
    areas: &impl AreaDirectory,
) -> Vec<EntityId> {
    CandidateFilter::new(area_name, text).apply(candidates, &snapshot.sensors(), areas)
}

/// Find the area whose name equals `name` (trimmed, case-insensitive).
pub fn resolve_area(name: &str, areas: &impl AreaDirectory) -> Option<AreaId> {
    areas
        .areas()
        .into_iter()
        .find(|area| area.has_name(name))
        .map(|area| area.id)
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

/// `needle` is already trimmed and lower-cased; `friendly_names` is keyed
/// by lower-cased entity id.
fn matches_text(id: &EntityId, needle: &str, friendly_names: &HashMap<String, &str>) -> bool {
    let key = id.to_lowercase();
    if key.contains(needle) {
        return true;
    }
    friendly_names
        .get(&key)
        .is_some_and(|name| name.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHome, ids};
    use tempcalc_domain::entity::Entity;

    fn entity(id: &str, friendly_name: Option<&str>, area: Option<&str>) -> Entity {
        let mut builder = Entity::builder().id(id).raw_value("20").unit("\u{b0}C");
        if let Some(name) = friendly_name {
            builder = builder.friendly_name(name);
        }
        if let Some(area) = area {
            builder = builder.area_id(area);
        }
        builder.build().unwrap()
    }

    fn home() -> FakeHome {
        FakeHome::default()
            .with_area("living", "Living Room")
            .with_area("bed", "Schlafzimmer")
            .with_entity(entity("sensor.living_temp", None, Some("living")))
            .with_entity(entity("sensor.th_01", Some("Schlafzimmer Klima"), Some("bed")))
            .with_entity(entity("sensor.th_02", Some("Living Room Klima"), Some("living")))
            .with_entity(entity("sensor.outdoor_temp", None, None))
    }

    fn all() -> Vec<EntityId> {
        ids(&[
            "sensor.living_temp",
            "sensor.th_01",
            "sensor.th_02",
            "sensor.outdoor_temp",
        ])
    }

    #[test]
    fn should_return_identity_when_no_constraints() {
        let home = home();
        let candidates = ids(&["sensor.z", "sensor.a", "sensor.m"]);
        assert_eq!(filter(&candidates, None, None, &home, &home), candidates);
        assert_eq!(
            filter(&candidates, Some("  "), Some(""), &home, &home),
            candidates
        );
    }

    #[test]
    fn should_match_text_against_id() {
        let home = home();
        let result = filter(&all(), None, Some(" LIVING_TEMP "), &home, &home);
        assert_eq!(result, ids(&["sensor.living_temp"]));
    }

    #[test]
    fn should_fall_back_to_friendly_name_when_id_does_not_match() {
        let home = home();
        let result = filter(&all(), None, Some("klima"), &home, &home);
        assert_eq!(result, ids(&["sensor.th_01", "sensor.th_02"]));
    }

    #[test]
    fn should_match_id_or_friendly_name_in_input_order() {
        let home = home();
        let result = filter(&all(), None, Some("living"), &home, &home);
        assert_eq!(result, ids(&["sensor.living_temp", "sensor.th_02"]));
    }

    #[test]
    fn should_filter_by_resolved_area() {
        let home = home();
        let result = filter(&all(), Some("living room"), None, &home, &home);
        assert_eq!(result, ids(&["sensor.living_temp", "sensor.th_02"]));
    }

    #[test]
    fn should_combine_area_and_text() {
        let home = home();
        let result = filter(&all(), Some("Living Room"), Some("th_"), &home, &home);
        assert_eq!(result, ids(&["sensor.th_02"]));
    }

    #[test]
    fn should_skip_area_constraint_when_area_unknown() {
        let home = home();
        let unknown = filter(&all(), Some("Dachboden"), Some("temp"), &home, &home);
        let without = filter(&all(), None, Some("temp"), &home, &home);
        assert_eq!(unknown, without);
        assert_eq!(filter(&all(), Some("Dachboden"), None, &home, &home), all());
    }

    #[test]
    fn should_not_match_partial_area_names() {
        let home = home();
        assert!(resolve_area("Living", &home).is_none());
        assert_eq!(
            resolve_area(" SCHLAFZIMMER ", &home),
            Some(AreaId::new("bed"))
        );
    }

    #[test]
    fn should_return_empty_without_widening() {
        let home = home();
        let result = filter(&all(), None, Some("garage"), &home, &home);
        assert!(result.is_empty());
    }

    #[test]
    fn should_read_friendly_names_from_given_entities() {
        let home = home();
        let entities = vec![
            entity("sensor.th_01", Some("Schlafzimmer Klima"), None),
            entity("sensor.th_02", Some("Arbeitszimmer"), None),
        ];
        home.remove("sensor.th_01");

        let result = CandidateFilter::new(None, Some("klima")).apply(
            &ids(&["sensor.th_01", "sensor.th_02"]),
            &entities,
            &home,
        );

        assert_eq!(result, ids(&["sensor.th_01"]));
    }

    #[test]
    fn should_report_empty_filter() {
        assert!(CandidateFilter::new(None, Some(" ")).is_empty());
        assert!(!CandidateFilter::new(Some("Kitchen"), None).is_empty());
    }
}
