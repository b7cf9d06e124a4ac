//! # tempcalc-adapter-snapshot-json
//!
//! Snapshot adapter reading JSON dumps of a Home Assistant instance.
//!
//! ## Responsibilities
//! - Read the `GET /api/states` array (`entity_id`, `state`, `attributes`)
//! - Read an area registry file (`areas` plus an `entities` → area map)
//! - Map raw records into domain [`Entity`](tempcalc_domain::entity::Entity)
//!   and [`Area`](tempcalc_domain::area::Area) values, skipping malformed ones
//! - Implement the `EntitySnapshot` and `AreaDirectory` ports
//!
//! ## Dependency rule
//! Depends on `tempcalc-app` (for port traits) and `tempcalc-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
mod model;
mod snapshot;

pub use error::SnapshotError;
pub use snapshot::JsonSnapshot;
