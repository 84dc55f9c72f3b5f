//! Physics core
//!
//! Everything here is synchronous, single-threaded and infallible:
//! - Caller-supplied, pre-clamped delta time only
//! - Stable iteration order (by collection index)
//! - Degenerate input handled by policy, never by an error value
//! - No rendering or platform dependencies

pub mod boundary;
pub mod collision;
pub(crate) mod float_repr;
pub mod generator;
pub mod particle;
pub mod tick;
pub mod vector;
pub mod world;

pub use boundary::handle_boundary_collision;
pub use collision::{detect_collision, resolve_collision, update_collisions};
pub use generator::{Bounds, ParticleGenerator, RandomGenerator, random_particle};
pub use particle::{Color, Particle};
pub use tick::step;
pub use vector::Vector2D;
pub use world::World;
