//! Boundary resolver: the ground plane and the four arena walls.
//!
//! The five half-spaces are processed in a fixed order per tick: ground,
//! x-min, x-max, z-min, z-max. Each correction overwrites velocity based on
//! the state the previous one left, so a cube wedged into a corner is
//! resolved sequentially rather than as a simultaneous constraint solve.
//! The two walls of an axis pair cannot both be penetrated in the same tick
//! for any sane arena, so each pair is an either/or check.

use nalgebra::Vector3;
use rand::Rng;

use crate::config::SandboxConfig;
use crate::cube::Cube;
use crate::math::{bounce_direction, roll_angular_velocity};

// ComplexField provides abs() for f32 in no_std via libm
#[allow(unused_imports)]
use nalgebra::ComplexField;

/// Reflect `cube`'s velocity off a plane with inward `normal`, assuming the
/// position has already been clamped onto the plane.
///
/// The normal component is redirected along a jittered bounce direction and
/// scaled by the bounce factor; the tangential component (taken relative to
/// the unperturbed normal) is scaled by the friction factor. An impact
/// faster than the rest threshold rerolls the tumble.
fn bounce<R: Rng>(cube: &mut Cube, normal: Vector3<f32>, config: &SandboxConfig, rng: &mut R) {
    let dir = bounce_direction(normal, rng);
    let normal_speed = cube.velocity.dot(&normal);

    let bounced = dir * (-normal_speed * config.bounce_factor);
    let tangential = (cube.velocity - normal * normal_speed) * config.friction_factor;
    cube.velocity = bounced + tangential;

    if normal_speed.abs() > config.rest_threshold {
        cube.angular_velocity = roll_angular_velocity(rng);
    }
}

/// Detect and resolve penetration of the five static planes, in order.
pub fn resolve_boundaries<R: Rng>(cube: &mut Cube, config: &SandboxConfig, rng: &mut R) {
    let half = cube.half_size();
    let bound = config.wall_extent;

    if cube.position.y - half < config.ground_y {
        cube.position.y = config.ground_y + half;
        bounce(cube, Vector3::new(0.0, 1.0, 0.0), config, rng);
    }

    if cube.position.x - half < -bound {
        cube.position.x = -bound + half;
        bounce(cube, Vector3::new(1.0, 0.0, 0.0), config, rng);
    } else if cube.position.x + half > bound {
        cube.position.x = bound - half;
        bounce(cube, Vector3::new(-1.0, 0.0, 0.0), config, rng);
    }

    if cube.position.z - half < -bound {
        cube.position.z = -bound + half;
        bounce(cube, Vector3::new(0.0, 0.0, 1.0), config, rng);
    } else if cube.position.z + half > bound {
        cube.position.z = bound - half;
        bounce(cube, Vector3::new(0.0, 0.0, -1.0), config, rng);
    }
}

/// Rest classifier: a cube is settled when it is slow, barely tumbling, and
/// sitting on the ground plane. Settled cubes have both velocities snapped
/// to zero; anything else clears the flag.
pub fn classify_rest(cube: &mut Cube, config: &SandboxConfig) {
    let on_ground =
        cube.position.y - cube.half_size() <= config.ground_y + config.rest_threshold;
    let settled = cube.velocity.norm() < config.rest_threshold
        && cube.angular_velocity.norm() < config.rest_threshold * 10.0
        && on_ground;

    if settled {
        cube.resting = true;
        cube.velocity = Vector3::zeros();
        cube.angular_velocity = Vector3::zeros();
    } else {
        cube.resting = false;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn test_ground_clamp_and_bounce_up() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(0.0, -2.5, 0.0), 0.5);
        cube.velocity = Vector3::new(0.0, -3.0, 0.0);

        resolve_boundaries(&mut cube, &config, &mut rng());

        // Bottom face sits exactly on the ground
        assert!(approx_eq(cube.position.y, config.ground_y + 0.25));
        // Velocity no longer penetrates; full restitution flips the sign
        assert!(cube.velocity.y > 0.0);
    }

    #[test]
    fn test_no_correction_when_inside_bounds() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(1.0, 0.0, -1.0), 0.5);
        cube.velocity = Vector3::new(0.5, -0.5, 0.5);
        let before = cube.clone();

        resolve_boundaries(&mut cube, &config, &mut rng());

        assert_eq!(cube.position, before.position);
        assert_eq!(cube.velocity, before.velocity);
        assert_eq!(cube.angular_velocity, before.angular_velocity);
    }

    #[test]
    fn test_low_wall_clamps_x() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(-8.4, 0.0, 0.0), 0.5);
        cube.velocity = Vector3::new(-2.0, 0.0, 0.0);

        resolve_boundaries(&mut cube, &config, &mut rng());

        assert!(approx_eq(cube.position.x, -config.wall_extent + 0.25));
        assert!(cube.velocity.x > 0.0);
    }

    #[test]
    fn test_high_wall_clamps_z() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(0.0, 0.0, 8.4), 0.5);
        cube.velocity = Vector3::new(0.0, 0.0, 2.0);

        resolve_boundaries(&mut cube, &config, &mut rng());

        assert!(approx_eq(cube.position.z, config.wall_extent - 0.25));
        assert!(cube.velocity.z < 0.0);
    }

    #[test]
    fn test_fast_impact_rerolls_tumble() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(0.0, -2.5, 0.0), 0.5);
        cube.velocity = Vector3::new(0.0, -3.0, 0.0);
        assert_eq!(cube.angular_velocity, Vector3::zeros());

        resolve_boundaries(&mut cube, &config, &mut rng());

        assert!(cube.angular_velocity.norm() > 0.0);
    }

    #[test]
    fn test_slow_impact_keeps_tumble() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(0.0, -1.751, 0.0), 0.5);
        cube.velocity = Vector3::new(0.0, -0.01, 0.0);
        cube.angular_velocity = Vector3::new(1.0, 2.0, 3.0);

        resolve_boundaries(&mut cube, &config, &mut rng());

        // |normal speed| below the rest threshold: tumble untouched
        assert_eq!(cube.angular_velocity, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_friction_damps_tangential_component() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(0.0, -2.5, 0.0), 0.5);
        cube.velocity = Vector3::new(1.0, -0.01, 0.0);

        resolve_boundaries(&mut cube, &config, &mut rng());

        // Tangential x-velocity scaled by the friction factor, plus at most
        // the small redirected normal contribution
        assert!(cube.velocity.x < 1.0);
        assert!(cube.velocity.x > 0.5);
    }

    #[test]
    fn test_corner_hit_resolves_both_planes() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(-8.4, -2.5, 0.0), 0.5);
        cube.velocity = Vector3::new(-2.0, -3.0, 0.0);

        resolve_boundaries(&mut cube, &config, &mut rng());

        assert!(approx_eq(cube.position.y, config.ground_y + 0.25));
        assert!(approx_eq(cube.position.x, -config.wall_extent + 0.25));
    }

    #[test]
    fn test_classify_rest_snaps_velocities() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(0.0, -1.75, 0.0), 0.5);
        cube.velocity = Vector3::new(0.01, 0.01, 0.0);
        cube.angular_velocity = Vector3::new(0.1, 0.0, 0.1);

        classify_rest(&mut cube, &config);

        assert!(cube.resting);
        assert_eq!(cube.velocity, Vector3::zeros());
        assert_eq!(cube.angular_velocity, Vector3::zeros());
    }

    #[test]
    fn test_classify_rest_requires_ground_contact() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(0.0, 5.0, 0.0), 0.5);
        // Slow but airborne
        classify_rest(&mut cube, &config);
        assert!(!cube.resting);
    }

    #[test]
    fn test_classify_rest_clears_flag_when_moving() {
        let config = SandboxConfig::default();
        let mut cube = Cube::new(Vector3::new(0.0, -1.75, 0.0), 0.5);
        cube.resting = true;
        cube.velocity = Vector3::new(1.0, 0.0, 0.0);

        classify_rest(&mut cube, &config);

        assert!(!cube.resting);
        assert_eq!(cube.velocity, Vector3::new(1.0, 0.0, 0.0));
    }
}
