//! Typed identifier newtypes backed by strings.
//!
//! Entity ids look like `sensor.living_room_temperature`; area ids are opaque
//! slugs handed out by the area directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Lower-cased copy, used for keyword matching and lookups.
            #[must_use]
            pub fn to_lowercase(&self) -> String {
                self.0.to_lowercase()
            }

            /// Case-insensitive comparison.
            #[must_use]
            pub fn eq_ignore_case(&self, other: &Self) -> bool {
                self.0.to_lowercase() == other.0.to_lowercase()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::EmptyId);
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of an [`Entity`](crate::entity::Entity), e.g. `sensor.balkon_temp`.
    EntityId
);

define_id!(
    /// Identifier of an [`Area`](crate::area::Area).
    AreaId
);

impl EntityId {
    /// Whether the lower-cased id contains any of `keywords`.
    #[must_use]
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        let lowered = self.to_lowercase();
        keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}
