//! Outdoor picker — chooses one outdoor candidate by an ordered tie-break.
//!
//! Tiers are tried in [`OutdoorTier::ORDER`]; the first that yields an id
//! wins. Callers pass candidates already narrowed to outdoor ids, so the
//! keyword tier normally decides. The area tier still runs whenever the
//! keyword tier comes up empty, e.g. for unfiltered lists.

use std::collections::HashSet;

use tempcalc_domain::classifier::is_outdoor_id;
use tempcalc_domain::classifier::keywords::{OUTDOOR_AREA_KEYWORDS, contains_any};
use tempcalc_domain::id::{AreaId, EntityId};
use tempcalc_domain::selection::{OutdoorPick, OutdoorTier};

use crate::ports::AreaDirectory;

/// Pick the best outdoor candidate, keeping snapshot order within each tier.
pub fn pick_best(candidates: &[EntityId], areas: &impl AreaDirectory) -> OutdoorPick {
    OutdoorTier::ORDER
        .into_iter()
        .find_map(|tier| {
            apply_tier(tier, candidates, areas).map(|id| OutdoorPick {
                id: Some(id),
                tier: Some(tier),
            })
        })
        .unwrap_or_default()
}

/// Evaluate a single tier.
pub fn apply_tier(
    tier: OutdoorTier,
    candidates: &[EntityId],
    areas: &impl AreaDirectory,
) -> Option<EntityId> {
    match tier {
        OutdoorTier::OutdoorKeyword => candidates.iter().find(|id| is_outdoor_id(id)).cloned(),
        OutdoorTier::OutdoorArea => {
            let outdoor_areas = outdoor_area_ids(areas);
            if outdoor_areas.is_empty() {
                return None;
            }
            candidates
                .iter()
                .find(|id| {
                    areas
                        .area_of(id)
                        .is_some_and(|area| outdoor_areas.contains(&area))
                })
                .cloned()
        }
        OutdoorTier::FirstCandidate => candidates.first().cloned(),
    }
}

/// Ids of areas whose name contains an outdoor keyword.
pub fn outdoor_area_ids(areas: &impl AreaDirectory) -> HashSet<AreaId> {
    areas
        .areas()
        .into_iter()
        .filter(|area| contains_any(&area.name.to_lowercase(), OUTDOOR_AREA_KEYWORDS))
        .map(|area| area.id)
        .collect()
}
