//! Snapshot ports — read-only views of the live entity and area registries.
//!
//! Both registries are mutated externally between calls. Implementations
//! return the state as of the call; callers never keep results around.

use tempcalc_domain::area::Area;
use tempcalc_domain::entity::Entity;
use tempcalc_domain::id::{AreaId, EntityId};

/// The current set of sensor entities.
pub trait EntitySnapshot {
    /// All entities of kind `sensor`, in the provider's enumeration order.
    fn sensors(&self) -> Vec<Entity>;

    /// Look up one entity by id (case-insensitive).
    fn get(&self, id: &EntityId) -> Option<Entity>;
}

/// Areas and the entity → area assignment.
pub trait AreaDirectory {
    /// All known areas.
    fn areas(&self) -> Vec<Area>;

    /// The area `id` is assigned to, if any.
    fn area_of(&self, id: &EntityId) -> Option<AreaId>;
}

impl<T: EntitySnapshot + ?Sized> EntitySnapshot for &T {
    fn sensors(&self) -> Vec<Entity> {
        (**self).sensors()
    }

    fn get(&self, id: &EntityId) -> Option<Entity> {
        (**self).get(id)
    }
}

impl<T: AreaDirectory + ?Sized> AreaDirectory for &T {
    fn areas(&self) -> Vec<Area> {
        (**self).areas()
    }

    fn area_of(&self, id: &EntityId) -> Option<AreaId> {
        (**self).area_of(id)
    }
}
