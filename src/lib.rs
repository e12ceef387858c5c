/*
 * Flock - Module Definitions
 *
 * This file defines the module structure for the flock screen-saver.
 * The simulation core (math, geometry, boid, spawner, physics, simulation)
 * has no window or GPU dependencies; app, input, renderer and ui form the
 * nannou shell around it.
 */

// Re-export key components for easier access
pub use boid::{Boid, Color, Flock};
pub use camera::Viewport;
pub use cli::{Cli, LaunchSettings};
pub use error::FlockError;
pub use geometry::{Triangle, TriangleShape};
pub use params::FlockParams;
pub use simulation::Simulation;

// Core
pub mod boid;
pub mod error;
pub mod geometry;
pub mod math;
pub mod params;
pub mod physics;
pub mod simulation;
pub mod spawner;

// Shell
pub mod app;
pub mod camera;
pub mod cli;
pub mod debug;
pub mod input;
pub mod renderer;
pub mod ui;
