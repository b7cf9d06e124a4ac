//! In-memory snapshot built from JSON dumps.

use std::collections::HashMap;
use std::path::Path;

use tempcalc_app::ports::{AreaDirectory, EntitySnapshot};
use tempcalc_domain::area::Area;
use tempcalc_domain::entity::{Entity, SensorAttributes};
use tempcalc_domain::id::{AreaId, EntityId};

use crate::error::SnapshotError;
use crate::model::{RawArea, RawAreaRegistry, RawState};

/// Sensor entities and areas read from a state dump, in file order.
#[derive(Debug, Clone, Default)]
pub struct JsonSnapshot {
    entities: Vec<Entity>,
    /// Lower-cased entity id → position in `entities`.
    index: HashMap<String, usize>,
    areas: Vec<Area>,
}

impl JsonSnapshot {
    /// Read the state dump at `states` and, optionally, the area registry
    /// at `areas`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] when a file cannot be read and
    /// [`SnapshotError::Json`] when its content is not valid JSON of the
    /// expected shape. Individual malformed records are skipped.
    pub async fn load(states: &Path, areas: Option<&Path>) -> Result<Self, SnapshotError> {
        let states_json = read(states).await?;
        let areas_json = match areas {
            Some(path) => Some(read(path).await?),
            None => None,
        };
        let snapshot = Self::from_json(&states_json, areas_json.as_deref())?;
        tracing::info!(
            sensors = snapshot.entities.len(),
            areas = snapshot.areas.len(),
            path = %states.display(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Build a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] when either document does not parse
    /// or has the wrong top-level shape. Records inside that do not decode
    /// are skipped with a warning.
    pub fn from_json(states: &str, areas: Option<&str>) -> Result<Self, SnapshotError> {
        let raw_states: Vec<serde_json::Value> = serde_json::from_str(states)?;
        let registry: RawAreaRegistry = match areas {
            Some(json) => serde_json::from_str(json)?,
            None => RawAreaRegistry::default(),
        };

        let areas = build_areas(registry.areas);
        let assignments = build_assignments(registry.entities, &areas);

        let mut snapshot = Self {
            areas,
            ..Self::default()
        };
        for (position, value) in raw_states.into_iter().enumerate() {
            match serde_json::from_value::<RawState>(value) {
                Ok(raw) => snapshot.insert(raw, &assignments),
                Err(err) => tracing::warn!(%err, position, "skipping malformed state record"),
            }
        }
        Ok(snapshot)
    }

    fn insert(&mut self, raw: RawState, assignments: &HashMap<String, AreaId>) {
        let id: EntityId = match raw.entity_id.parse() {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(%err, "skipping state without entity id");
                return;
            }
        };
        let key = id.to_lowercase();
        if self.index.contains_key(&key) {
            tracing::warn!(entity_id = %id, "skipping duplicate entity id");
            return;
        }

        let mut builder = Entity::builder()
            .id(id)
            .raw_value(raw.raw_value())
            .attributes(SensorAttributes::from_map(&raw.attributes));
        if let Some(area_id) = assignments.get(&key) {
            builder = builder.area_id(area_id.clone());
        }

        match builder.build() {
            Ok(entity) if entity.is_sensor() => {
                self.index.insert(key, self.entities.len());
                self.entities.push(entity);
            }
            Ok(entity) => {
                tracing::trace!(entity_id = %entity.id, "ignoring non-sensor entity");
            }
            Err(err) => tracing::warn!(%err, "skipping invalid entity"),
        }
    }
}

async fn read(path: &Path) -> Result<String, SnapshotError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn build_areas(raw: Vec<serde_json::Value>) -> Vec<Area> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(position, value)| {
            let raw = serde_json::from_value::<RawArea>(value)
                .inspect_err(|err| {
                    tracing::warn!(%err, position, "skipping malformed area record");
                })
                .ok()?;
            let id: AreaId = match raw.id.parse() {
                Ok(id) => id,
                Err(err) => {
                    tracing::warn!(%err, name = %raw.name, "skipping area without id");
                    return None;
                }
            };
            Area::builder()
                .id(id)
                .name(raw.name)
                .build()
                .inspect_err(|err| tracing::warn!(%err, "skipping invalid area"))
                .ok()
        })
        .collect()
}

/// Keep only assignments pointing at a known area, keyed by lower-cased
/// entity id.
fn build_assignments(
    raw: HashMap<String, serde_json::Value>,
    areas: &[Area],
) -> HashMap<String, AreaId> {
    raw.into_iter()
        .filter_map(|(entity_id, area_id)| {
            let Some(area_id) = area_id.as_str() else {
                tracing::warn!(%entity_id, "skipping assignment without area id");
                return None;
            };
            let area_id = AreaId::new(area_id.trim());
            if areas.iter().any(|area| area.id == area_id) {
                Some((entity_id.trim().to_lowercase(), area_id))
            } else {
                tracing::warn!(%entity_id, %area_id, "skipping assignment to unknown area");
                None
            }
        })
        .collect()
}

impl EntitySnapshot for JsonSnapshot {
    fn sensors(&self) -> Vec<Entity> {
        self.entities.clone()
    }

    fn get(&self, id: &EntityId) -> Option<Entity> {
        self.index
            .get(&id.to_lowercase())
            .map(|&position| self.entities[position].clone())
    }
}

impl AreaDirectory for JsonSnapshot {
    fn areas(&self) -> Vec<Area> {
        self.areas.clone()
    }

    fn area_of(&self, id: &EntityId) -> Option<AreaId> {
        self.index
            .get(&id.to_lowercase())
            .and_then(|&position| self.entities[position].area_id.clone())
    }
}
