//! Initial-state generation
//!
//! Particle placement is policy, not physics, so it sits behind the
//! [`ParticleGenerator`] trait. The default is a seeded PCG generator; tests
//! can hand in a closure for fully deterministic layouts.

use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::float_repr;
use super::particle::{Color, Particle};
use super::vector::Vector2D;
use crate::consts::*;

/// Rectangular world extent, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(with = "float_repr")]
    pub width: f64,
    #[serde(with = "float_repr")]
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Produces one new particle for the given world bounds
pub trait ParticleGenerator {
    fn generate(&mut self, bounds: Bounds) -> Particle;
}

impl<F> ParticleGenerator for F
where
    F: FnMut(Bounds) -> Particle,
{
    fn generate(&mut self, bounds: Bounds) -> Particle {
        self(bounds)
    }
}

/// Random particle fully inside `width x height`
///
/// - radius uniform in `[min_radius, max_radius)`
/// - each coordinate uniform in `[radius, dimension - radius]`
/// - each velocity component uniform in `[-MAX_INITIAL_SPEED, MAX_INITIAL_SPEED)`
/// - mass = π·r² (uniform areal density)
pub fn random_particle<R: Rng + ?Sized>(
    rng: &mut R,
    width: f64,
    height: f64,
    min_radius: f64,
    max_radius: f64,
) -> Particle {
    let radius = rng.random::<f64>() * (max_radius - min_radius) + min_radius;
    let position = Vector2D::random(rng, radius, width - radius, radius, height - radius);
    let velocity = Vector2D::new(
        (rng.random::<f64>() - 0.5) * 2.0 * MAX_INITIAL_SPEED,
        (rng.random::<f64>() - 0.5) * 2.0 * MAX_INITIAL_SPEED,
    );
    let mass = PI * radius * radius;
    let color = Color::Hsl {
        hue: rng.random::<f32>() * 360.0,
        saturation: 70.0,
        lightness: 60.0,
    };

    Particle::new(position, velocity, mass, radius, color)
}

/// Seeded generator backed by PCG32
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: Pcg32,
    min_radius: f64,
    max_radius: f64,
}

impl RandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            min_radius: GENERATOR_MIN_RADIUS,
            max_radius: GENERATOR_MAX_RADIUS,
        }
    }

    /// Seed from OS entropy (non-reproducible runs)
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn with_radius_range(mut self, min_radius: f64, max_radius: f64) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }
}

impl ParticleGenerator for RandomGenerator {
    fn generate(&mut self, bounds: Bounds) -> Particle {
        random_particle(
            &mut self.rng,
            bounds.width,
            bounds.height,
            self.min_radius,
            self.max_radius,
        )
    }
}
