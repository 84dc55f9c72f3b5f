//! World state: the particle collection plus its bounds
//!
//! The world owns every particle. Reset discards the whole collection and
//! regenerates it; particles are never recycled individually.

use serde::{Deserialize, Serialize};

use super::float_repr;
use super::generator::{Bounds, ParticleGenerator};
use super::particle::Particle;
use super::tick::step;
use super::vector::Vector2D;
use crate::error::Result;

/// Complete simulation state (serializable as a snapshot)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    /// Bodies in stable index order (drives the collision sweep order)
    pub particles: Vec<Particle>,
    pub bounds: Bounds,
    /// Delta time used by the most recent tick (seconds)
    #[serde(with = "float_repr")]
    pub last_dt: f64,
    /// Ticks advanced since the last populate/reset
    pub time_ticks: u64,
}

impl World {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            particles: Vec::new(),
            bounds,
            last_dt: 0.0,
            time_ticks: 0,
        }
    }

    /// Build a world from an explicit particle list
    pub fn with_particles(bounds: Bounds, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            ..Self::new(bounds)
        }
    }

    /// Replace the whole collection with `count` freshly generated particles
    pub fn populate<G>(&mut self, count: usize, generator: &mut G)
    where
        G: ParticleGenerator + ?Sized,
    {
        self.particles = (0..count).map(|_| generator.generate(self.bounds)).collect();
        self.last_dt = 0.0;
        self.time_ticks = 0;
        log::info!(
            "Populated world {}x{} with {} particles",
            self.bounds.width,
            self.bounds.height,
            count
        );
    }

    /// Advance one tick. `dt` must already be clamped.
    pub fn step(&mut self, dt: f64) -> usize {
        self.last_dt = dt;
        self.time_ticks += 1;
        step(&mut self.particles, self.bounds, dt)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn total_momentum(&self) -> Vector2D {
        self.particles
            .iter()
            .fold(Vector2D::ZERO, |acc, p| acc + p.momentum())
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Pretty JSON snapshot of the full state
    ///
    /// NaN and ±Inf (e.g. from a zero mass) are written as the strings
    /// `"NaN"`, `"inf"` and `"-inf"` so they survive a restore.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
