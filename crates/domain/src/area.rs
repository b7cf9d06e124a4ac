//! Area — a named grouping (room, balcony, garden) that entities may belong to.

use serde::{Deserialize, Serialize};

use crate::error::{TempCalcError, ValidationError};
use crate::id::AreaId;

/// A named grouping owned by the external area directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
}

impl Area {
    /// Create a builder for constructing an [`Area`].
    #[must_use]
    pub fn builder() -> AreaBuilder {
        AreaBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TempCalcError::Validation`] when `name` or `id` is blank.
    pub fn validate(&self) -> Result<(), TempCalcError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        Ok(())
    }

    /// Case-insensitive, exact (trimmed) name comparison.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// Step-by-step builder for [`Area`].
#[derive(Debug, Default)]
pub struct AreaBuilder {
    id: Option<AreaId>,
    name: Option<String>,
}

impl AreaBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<AreaId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return an [`Area`].
    ///
    /// When no id is given, one is derived from the name (`"Living Room"`
    /// becomes `living_room`).
    ///
    /// # Errors
    ///
    /// Returns [`TempCalcError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Area, TempCalcError> {
        let name = self.name.unwrap_or_default();
        let id = self.id.unwrap_or_else(|| AreaId::new(slugify(&name)));
        let area = Area { id, name };
        area.validate()?;
        Ok(area)
    }
}

fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_area_when_name_provided() {
        let area = Area::builder().name("Living Room").build().unwrap();
        assert_eq!(area.name, "Living Room");
        assert_eq!(area.id.as_str(), "living_room");
    }

    #[test]
    fn should_keep_explicit_id() {
        let area = Area::builder().id("a1").name("Balkon").build().unwrap();
        assert_eq!(area.id, AreaId::new("a1"));
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Area::builder().id("a1").build();
        assert!(matches!(
            result,
            Err(TempCalcError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = Area::builder().id("a1").name("   ").build();
        assert!(matches!(
            result,
            Err(TempCalcError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_match_name_case_insensitively() {
        let area = Area::builder().name("Wohnzimmer").build().unwrap();
        assert!(area.has_name("  wohnZIMMER "));
        assert!(!area.has_name("Wohn"));
    }
}
