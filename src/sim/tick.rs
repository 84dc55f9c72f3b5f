//! Per-tick simulation step
//!
//! One tick is three strictly ordered phases over the whole collection:
//! integrate, then walls, then the all-pairs collision sweep. Reordering the
//! phases changes the outcome.

use super::boundary::handle_boundary_collision;
use super::collision::update_collisions;
use super::generator::Bounds;
use super::particle::Particle;

/// Advance every particle by one explicit Euler step of `dt` seconds
///
/// `dt` must already be clamped by the caller. Returns the number of
/// particle-particle contacts resolved.
pub fn step(particles: &mut [Particle], bounds: Bounds, dt: f64) -> usize {
    for particle in particles.iter_mut() {
        particle.integrate(dt);
    }

    for particle in particles.iter_mut() {
        handle_boundary_collision(particle, bounds.width, bounds.height);
    }

    let contacts = update_collisions(particles);
    log::trace!("tick dt={dt:.4} contacts={contacts}");
    contacts
}
