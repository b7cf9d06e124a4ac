//! Entity — one externally tracked sensor reading.
//!
//! Entities are produced and owned by the snapshot provider; the engine only
//! reads them.

mod attribute_value;
mod attributes;

pub use attribute_value::AttributeValue;
pub use attributes::{DEVICE_CLASS, FRIENDLY_NAME, SensorAttributes, UNIT_OF_MEASUREMENT};

use serde::{Deserialize, Serialize};

use crate::error::{TempCalcError, ValidationError};
use crate::id::{AreaId, EntityId};

/// Domain prefix of sensor entity ids.
pub const SENSOR_DOMAIN: &str = "sensor";

/// A single sensor reading in the current snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Current state exactly as reported (`"21.5"`, `"21,5"`, `"unavailable"`, …).
    pub raw_value: String,
    pub attributes: SensorAttributes,
    pub area_id: Option<AreaId>,
}

impl Entity {
    /// Create a builder for constructing an [`Entity`].
    #[must_use]
    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TempCalcError::Validation`] when `id` is blank.
    pub fn validate(&self) -> Result<(), TempCalcError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        Ok(())
    }

    /// Whether the entity id belongs to the `sensor` domain.
    #[must_use]
    pub fn is_sensor(&self) -> bool {
        self.id
            .to_lowercase()
            .split_once('.')
            .is_some_and(|(domain, _)| domain == SENSOR_DOMAIN)
    }

    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.attributes.unit_of_measurement.as_deref()
    }

    #[must_use]
    pub fn device_class(&self) -> Option<&str> {
        self.attributes.device_class.as_deref()
    }

    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.attributes.friendly_name.as_deref()
    }
}

/// Step-by-step builder for [`Entity`].
#[derive(Debug, Default)]
pub struct EntityBuilder {
    id: Option<EntityId>,
    raw_value: Option<String>,
    attributes: SensorAttributes,
    area_id: Option<AreaId>,
}

impl EntityBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<EntityId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn raw_value(mut self, raw_value: impl Into<String>) -> Self {
        self.raw_value = Some(raw_value.into());
        self
    }

    #[must_use]
    pub fn attributes(mut self, attributes: SensorAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.attributes.unit_of_measurement = Some(unit.into());
        self
    }

    #[must_use]
    pub fn device_class(mut self, device_class: impl Into<String>) -> Self {
        self.attributes.device_class = Some(device_class.into());
        self
    }

    #[must_use]
    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.attributes.friendly_name = Some(friendly_name.into());
        self
    }

    #[must_use]
    pub fn area_id(mut self, area_id: impl Into<AreaId>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    /// Consume the builder, validate, and return an [`Entity`].
    ///
    /// # Errors
    ///
    /// Returns [`TempCalcError::Validation`] if `id` is missing or blank.
    pub fn build(self) -> Result<Entity, TempCalcError> {
        let entity = Entity {
            id: self.id.ok_or(ValidationError::EmptyId)?,
            raw_value: self.raw_value.unwrap_or_default(),
            attributes: self.attributes,
            area_id: self.area_id,
        };
        entity.validate()?;
        Ok(entity)
    }
}
