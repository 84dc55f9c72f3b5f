//! Particle Sim - a discrete-time 2D elastic particle simulation
//!
//! Core modules:
//! - `sim`: Physics core (vectors, particles, collisions, walls, per-tick step)
//! - `driver`: Headless frame loop (delta-time capping, FPS counting, reset)
//! - `settings`: JSON configuration
//! - `error`: Crate-wide error type for the config and snapshot layers

pub mod driver;
pub mod error;
pub mod settings;
pub mod sim;

pub use driver::{FpsCounter, FrameClock, Simulation};
pub use error::{Error, Result};
pub use settings::SimConfig;

/// Simulation configuration constants
pub mod consts {
    /// Upper bound for a single tick's delta time (seconds)
    pub const MAX_DELTA_TIME: f64 = 0.1;
    /// Fraction of velocity kept after a wall bounce
    pub const WALL_RESTITUTION: f64 = 0.95;

    /// Generated velocity components fall in [-MAX_INITIAL_SPEED, MAX_INITIAL_SPEED)
    pub const MAX_INITIAL_SPEED: f64 = 100.0;
    /// Default radius range of a standalone random generator
    pub const GENERATOR_MIN_RADIUS: f64 = 5.0;
    pub const GENERATOR_MAX_RADIUS: f64 = 15.0;

    /// Default world (canvas) dimensions
    pub const DEFAULT_WIDTH: f64 = 800.0;
    pub const DEFAULT_HEIGHT: f64 = 600.0;
    /// Default population used by a fresh simulation
    pub const DEFAULT_PARTICLE_COUNT: usize = 100;
    pub const DEFAULT_MIN_RADIUS: f64 = 5.0;
    pub const DEFAULT_MAX_RADIUS: f64 = 20.0;

    /// FPS is republished once per window (milliseconds)
    pub const FPS_WINDOW_MS: f64 = 1000.0;
}

/// Clamp a raw frame delta (seconds) into [0, max]
///
/// Never panics. A NaN `dt` gives 0, a NaN `max` leaves `dt` uncapped and a
/// negative `max` gives 0.
#[inline]
pub fn clamp_delta_time(dt: f64, max: f64) -> f64 {
    if dt.is_nan() { 0.0 } else { dt.min(max).max(0.0) }
}
