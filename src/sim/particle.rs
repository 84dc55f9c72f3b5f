//! Particle bodies and their kinematic integration

use std::fmt;

use serde::{Deserialize, Serialize};

use super::float_repr;
use super::vector::Vector2D;

/// Display tag for a particle. Never read by the physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Rgb(u8, u8, u8),
    Hsl {
        #[serde(with = "float_repr")]
        hue: f32,
        #[serde(with = "float_repr")]
        saturation: f32,
        #[serde(with = "float_repr")]
        lightness: f32,
    },
}

impl Color {
    pub const WHITE: Self = Color::Rgb(255, 255, 255);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue:.1}, {saturation}%, {lightness}%)"),
        }
    }
}

/// A circular body
///
/// Mass and radius are fixed at construction. Nothing validates that they are
/// positive; non-positive values give undefined (Inf/NaN) physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vector2D,
    pub velocity: Vector2D,
    #[serde(with = "float_repr")]
    mass: f64,
    #[serde(with = "float_repr")]
    radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(
        position: Vector2D,
        velocity: Vector2D,
        mass: f64,
        radius: f64,
        color: Color,
    ) -> Self {
        Self {
            position,
            velocity,
            mass,
            radius,
            color,
        }
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Explicit Euler position step. Velocity is left untouched.
    ///
    /// `dt` is expected to be non-negative and already capped by the caller.
    #[inline]
    pub fn integrate(&mut self, dt: f64) {
        self.position = self.position + self.velocity * dt;
    }

    /// Linear momentum m·v
    #[inline]
    pub fn momentum(&self) -> Vector2D {
        self.velocity * self.mass
    }

    /// Kinetic energy ½·m·|v|²
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }
}
