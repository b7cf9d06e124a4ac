//! # tempcalc-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EntitySnapshot` — the current set of sensor entities
//!   - `AreaDirectory` — areas and the entity → area lookup
//! - Define **driving/inbound** use-cases:
//!   - candidate filtering by area name and free text
//!   - outdoor disambiguation
//!   - `SelectionService` — classify → filter → widen → disambiguate
//!   - `OptionsService` — form defaults and submission validation
//!
//! Every use-case re-reads the ports on each call; nothing is cached.
//!
//! ## Dependency rule
//! Depends on `tempcalc-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
