//! In-memory port fakes shared by the service tests.

use std::cell::RefCell;

use tempcalc_domain::area::Area;
use tempcalc_domain::entity::Entity;
use tempcalc_domain::id::{AreaId, EntityId};

use crate::ports::{AreaDirectory, EntitySnapshot};

/// A mutable fake home: entities and areas can change between calls.
#[derive(Default)]
pub struct FakeHome {
    entities: RefCell<Vec<Entity>>,
    areas: RefCell<Vec<Area>>,
}

impl FakeHome {
    pub fn with_area(self, id: &str, name: &str) -> Self {
        self.areas
            .borrow_mut()
            .push(Area::builder().id(id).name(name).build().unwrap());
        self
    }

    pub fn with_sensor(self, id: &str, value: &str, unit: &str) -> Self {
        self.push(
            Entity::builder()
                .id(id)
                .raw_value(value)
                .unit(unit)
                .build()
                .unwrap(),
        );
        self
    }

    pub fn with_entity(self, entity: Entity) -> Self {
        self.push(entity);
        self
    }

    pub fn push(&self, entity: Entity) {
        self.entities.borrow_mut().push(entity);
    }

    pub fn remove(&self, id: &str) {
        self.entities
            .borrow_mut()
            .retain(|entity| entity.id.as_str() != id);
    }
}

impl EntitySnapshot for FakeHome {
    fn sensors(&self) -> Vec<Entity> {
        self.entities
            .borrow()
            .iter()
            .filter(|entity| entity.is_sensor())
            .cloned()
            .collect()
    }

    fn get(&self, id: &EntityId) -> Option<Entity> {
        self.entities
            .borrow()
            .iter()
            .find(|entity| entity.id.eq_ignore_case(id))
            .cloned()
    }
}

impl AreaDirectory for FakeHome {
    fn areas(&self) -> Vec<Area> {
        self.areas.borrow().clone()
    }

    fn area_of(&self, id: &EntityId) -> Option<AreaId> {
        self.get(id).and_then(|entity| entity.area_id)
    }
}

pub fn ids(raw: &[&str]) -> Vec<EntityId> {
    raw.iter().copied().map(EntityId::new).collect()
}
