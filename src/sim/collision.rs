//! Particle-particle collision detection and response
//!
//! Bodies are circles. Detection is a squared-distance test; response pushes
//! the pair apart symmetrically along the contact normal and then exchanges
//! an impulse along that normal if the bodies are approaching.

use super::particle::Particle;

/// True if the two circles overlap or touch
#[inline]
pub fn detect_collision(a: &Particle, b: &Particle) -> bool {
    let distance_squared = a.position.distance_squared(b.position);
    let min_distance = a.radius() + b.radius();
    distance_squared <= min_distance * min_distance
}

/// Separate an overlapping pair and exchange momentum along the contact normal
///
/// Coincident centers have no defined normal and are left untouched. Pairs
/// already moving apart are only de-penetrated.
///
/// The impulse is `2·v_n·m_b / (m_a + m_b)`, applied to `b` scaled by
/// `m_a / m_b`. Momentum is conserved; kinetic energy is only conserved for
/// equal masses.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) {
    let delta = b.position - a.position;
    let distance = delta.magnitude();

    if distance == 0.0 {
        return;
    }

    let overlap = (a.radius() + b.radius() - distance) / 2.0;
    let direction = delta.normalize();

    a.position = a.position - direction * overlap;
    b.position = b.position + direction * overlap;

    let relative_velocity = a.velocity - b.velocity;
    let velocity_along_normal = relative_velocity.dot(direction);

    // Separating
    if velocity_along_normal < 0.0 {
        return;
    }

    let total_mass = a.mass() + b.mass();
    let velocity_change = direction * (2.0 * velocity_along_normal * b.mass() / total_mass);

    a.velocity = a.velocity - velocity_change;
    b.velocity = b.velocity + velocity_change * (a.mass() / b.mass());
}

/// All-pairs sweep over `(i, j)` with `i < j`
///
/// Each detected pair is resolved immediately, so later pairs see the updated
/// state of earlier ones. Returns the number of contacts resolved.
pub fn update_collisions(particles: &mut [Particle]) -> usize {
    let mut contacts = 0;
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if detect_collision(a, b) {
                resolve_collision(a, b);
                contacts += 1;
            }
        }
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::particle::Color;
    use crate::sim::vector::Vector2D;

    fn body(x: f64, y: f64, vx: f64, vy: f64, mass: f64, radius: f64) -> Particle {
        Particle::new(
            Vector2D::new(x, y),
            Vector2D::new(vx, vy),
            mass,
            radius,
            Color::WHITE,
        )
    }

    #[test]
    fn test_detect_overlap() {
        let a = body(0.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        let b = body(15.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        assert!(detect_collision(&a, &b));
    }

    #[test]
    fn test_detect_apart() {
        let a = body(0.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        let b = body(50.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        assert!(!detect_collision(&a, &b));
    }

    #[test]
    fn test_detect_exactly_touching() {
        let a = body(0.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        let b = body(20.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        assert!(detect_collision(&a, &b));

        let c = body(20.0 + 1e-9, 0.0, 0.0, 0.0, 1.0, 10.0);
        assert!(!detect_collision(&a, &c));
    }

    #[test]
    fn test_head_on_equal_mass_swaps_velocities() {
        let mut a = body(0.0, 0.0, 10.0, 0.0, 1.0, 5.0);
        let mut b = body(10.0, 0.0, -10.0, 0.0, 1.0, 5.0);
        let before = a.momentum() + b.momentum();

        resolve_collision(&mut a, &mut b);

        let after = a.momentum() + b.momentum();
        assert!((after.x - before.x).abs() < 0.01);
        assert_eq!(a.velocity, Vector2D::new(-10.0, 0.0));
        assert_eq!(b.velocity, Vector2D::new(10.0, 0.0));
    }

    #[test]
    fn test_separates_overlapping_pair() {
        let mut a = body(0.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        let mut b = body(10.0, 0.0, 0.0, 0.0, 1.0, 10.0);

        resolve_collision(&mut a, &mut b);

        let distance = a.position.distance(b.position);
        assert!(distance >= 20.0 - 0.01);
        // Symmetric push about the midpoint
        assert_eq!(a.position, Vector2D::new(-5.0, 0.0));
        assert_eq!(b.position, Vector2D::new(15.0, 0.0));
    }

    #[test]
    fn test_unequal_mass() {
        let mut light = body(0.0, 0.0, 10.0, 0.0, 1.0, 5.0);
        let mut heavy = body(10.0, 0.0, 0.0, 0.0, 10.0, 5.0);

        resolve_collision(&mut light, &mut heavy);

        assert!(light.velocity.x.abs() > heavy.velocity.x.abs());
        assert!(light.velocity.x < 0.0, "light body should bounce back");
        assert!(heavy.velocity.x > 0.0);
    }

    #[test]
    fn test_separating_pair_keeps_velocity() {
        // Overlapping but already moving apart
        let mut a = body(0.0, 0.0, -5.0, 1.0, 1.0, 10.0);
        let mut b = body(10.0, 0.0, 5.0, 2.0, 3.0, 10.0);

        resolve_collision(&mut a, &mut b);

        assert_eq!(a.velocity, Vector2D::new(-5.0, 1.0));
        assert_eq!(b.velocity, Vector2D::new(5.0, 2.0));
        assert!(a.position.distance(b.position) >= 20.0 - 0.01);
    }

    #[test]
    fn test_tangential_velocity_untouched() {
        let mut a = body(0.0, 0.0, 10.0, 7.0, 1.0, 5.0);
        let mut b = body(10.0, 0.0, -10.0, -3.0, 1.0, 5.0);

        resolve_collision(&mut a, &mut b);

        assert_eq!(a.velocity.y, 7.0);
        assert_eq!(b.velocity.y, -3.0);
    }

    #[test]
    fn test_coincident_centers_noop() {
        let mut a = body(5.0, 5.0, 1.0, 0.0, 1.0, 5.0);
        let mut b = body(5.0, 5.0, -1.0, 0.0, 1.0, 5.0);
        let (a0, b0) = (a.clone(), b.clone());

        resolve_collision(&mut a, &mut b);

        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_sweep_skips_distant_pairs() {
        let mut particles = vec![
            body(0.0, 0.0, 1.0, 0.0, 1.0, 5.0),
            body(100.0, 0.0, -1.0, 0.0, 1.0, 5.0),
            body(0.0, 100.0, 0.0, 1.0, 1.0, 5.0),
        ];
        let before = particles.clone();

        assert_eq!(update_collisions(&mut particles), 0);
        assert_eq!(particles, before);
    }

    fn resolve_pair(particles: &mut [Particle], i: usize, j: usize) {
        let (head, tail) = particles.split_at_mut(j);
        if detect_collision(&head[i], &tail[0]) {
            resolve_collision(&mut head[i], &mut tail[0]);
        }
    }

    #[test]
    fn test_sweep_resolves_in_index_order() {
        // Crowded row of overlapping neighbours
        let mut particles = vec![
            body(0.0, 0.0, 10.0, 0.0, 1.0, 5.0),
            body(6.0, 1.0, 0.0, 0.0, 2.0, 5.0),
            body(12.0, -1.0, -10.0, 0.0, 3.0, 5.0),
            body(16.0, 0.5, -20.0, 5.0, 4.0, 5.0),
        ];

        let mut expected = particles.clone();
        for (i, j) in [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)] {
            resolve_pair(&mut expected, i, j);
        }

        update_collisions(&mut particles);
        assert_eq!(particles, expected);
    }
}
