//! Rectangular wall containment
//!
//! Walls sit at x = 0, x = width, y = 0 and y = height. A body poking through
//! a wall is clamped back flush against it and its velocity on that axis is
//! reflected and damped by `WALL_RESTITUTION`.

use super::particle::Particle;
use crate::consts::WALL_RESTITUTION;

/// Clamp one coordinate into `[radius, extent - radius]`, reflecting `vel` on contact
///
/// The near wall wins when both are violated (body wider than the box).
#[inline]
fn contain_axis(pos: &mut f64, vel: &mut f64, radius: f64, extent: f64) {
    if *pos - radius < 0.0 {
        *pos = radius;
        *vel = -*vel * WALL_RESTITUTION;
    } else if *pos + radius > extent {
        *pos = extent - radius;
        *vel = -*vel * WALL_RESTITUTION;
    }
}

/// Keep a particle inside `width x height`, bouncing it off any wall it crosses
///
/// Axes are handled independently, so a corner hit corrects both.
pub fn handle_boundary_collision(particle: &mut Particle, width: f64, height: f64) {
    let radius = particle.radius();
    contain_axis(&mut particle.position.x, &mut particle.velocity.x, radius, width);
    contain_axis(&mut particle.position.y, &mut particle.velocity.y, radius, height);
}
