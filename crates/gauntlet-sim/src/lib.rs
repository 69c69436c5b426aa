//! Simulation engine for GAUNTLET.
//!
//! Owns the hecs ECS world, runs systems once per tick in a fixed
//! order, and produces GameStateSnapshots for the presentation surface.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use gauntlet_core as core;
