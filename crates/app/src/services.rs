//! Application services — use-case implementations.
//!
//! The stage functions take the ports as explicit parameters; the service
//! structs accept port implementations via generic parameters (constructor
//! injection) and hold no other state.

pub mod candidate_filter;
pub mod options_service;
pub mod outdoor_picker;
pub mod selection_service;
