/*
 * Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The simulation core has no graphics dependencies; the nannou viewer
 * (app, renderer, ui) is compiled with the `viewer` feature.
 */

// Re-export key components for easier access
pub use boid::{Boid, BoidId, Forces, Steering};
pub use config::Config;
pub use debug::DebugInfo;
pub use error::{ConfigError, FlockError, ParamsError};
pub use flock::Flock;
pub use input::{handle_event, DisplayState, InputEvent};
pub use params::{CohesionMode, SimulationParams};
pub use spawn::{spawn_flock, SpawnPattern, SpawnSettings};

// Define modules
pub mod boid;
pub mod config;
pub mod debug;
pub mod error;
pub mod flock;
pub mod input;
pub mod neighbors;
pub mod params;
pub mod physics;
pub mod spawn;
pub mod vector;

#[cfg(feature = "viewer")]
pub mod app;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod ui;
