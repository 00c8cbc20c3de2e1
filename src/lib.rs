//! Arcade flight model and chase camera for a small town flight demo.
//!
//! The flight model is fixed-step: one call of [`systems::update_flight`] is
//! one tick, and every tuning constant in [`components::FlightConfig`] is per
//! tick. [`resources::FlightSession`] owns all mutable flight and camera state.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
