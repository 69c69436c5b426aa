//! GAUNTLET host application.
//!
//! Wires the simulation engine to a fixed-rate loop thread, a command
//! channel (the input source), and snapshot emission (the presentation
//! surface).

pub mod game_loop;
pub mod state;

pub use gauntlet_core as core;
