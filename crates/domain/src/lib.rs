//! # tempcalc-domain
//!
//! Pure domain model for the tempcalc sensor selection engine.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Entities** (sensor readings with an id, a raw value and attributes)
//! - Define **Areas** (logical groupings such as rooms, balconies, gardens)
//! - Classify entities as temperature, humidity, plant decoy or outdoor context
//! - Define the **Selection** produced for the configuration layer
//! - Define **Room options** (the flat mapping persisted by the caller) and
//!   their field-level validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod area;
pub mod classifier;
pub mod entity;
pub mod options;
pub mod selection;
