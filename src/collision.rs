//! Pairwise cube collision: AABB overlap, minimum-translation-vector
//! separation, and a symmetric impulse exchange.
//!
//! The world runs [`resolve_pair`] over every unordered pair once per tick,
//! brute force, with no convergence iteration: later pairs in the pass see
//! positions already corrected by earlier ones. That staleness is an
//! accepted approximation, not an exact solve.

use nalgebra::Vector3;
use rand::Rng;

use crate::config::SandboxConfig;
use crate::cube::Cube;
use crate::math::roll_angular_velocity;

/// Extra clearance added to each half of the MTV push so freshly separated
/// boxes do not re-test as overlapping on the next tick.
pub const SEPARATION_EPSILON: f32 = 0.001;

/// Per-axis penetration depths of two AABBs, or `None` when any axis
/// interval is disjoint (strict inequality on both bounds).
fn penetration_depths(a: &Cube, b: &Cube) -> Option<Vector3<f32>> {
    let (a_min, a_max) = (a.aabb_min(), a.aabb_max());
    let (b_min, b_max) = (b.aabb_min(), b.aabb_max());

    if !(a_max.x > b_min.x && a_min.x < b_max.x) {
        return None;
    }
    if !(a_max.y > b_min.y && a_min.y < b_max.y) {
        return None;
    }
    if !(a_max.z > b_min.z && a_min.z < b_max.z) {
        return None;
    }

    Some(Vector3::new(
        a_max.x.min(b_max.x) - a_min.x.max(b_min.x),
        a_max.y.min(b_max.y) - a_min.y.max(b_min.y),
        a_max.z.min(b_max.z) - a_min.z.max(b_min.z),
    ))
}

/// Pick the least-penetration axis and the separation direction pointing
/// from `b` toward `a` on that axis.
///
/// The comparisons are strict: x wins only when strictly smallest, y only
/// when strictly smaller than both others, z otherwise. Exact ties are
/// implementation-defined and land on z.
fn minimum_translation(
    depths: &Vector3<f32>,
    a_pos: &Vector3<f32>,
    b_pos: &Vector3<f32>,
) -> (Vector3<f32>, f32) {
    if depths.x < depths.y && depths.x < depths.z {
        let sign = if a_pos.x > b_pos.x { 1.0 } else { -1.0 };
        (Vector3::new(sign, 0.0, 0.0), depths.x)
    } else if depths.y < depths.x && depths.y < depths.z {
        let sign = if a_pos.y > b_pos.y { 1.0 } else { -1.0 };
        (Vector3::new(0.0, sign, 0.0), depths.y)
    } else {
        let sign = if a_pos.z > b_pos.z { 1.0 } else { -1.0 };
        (Vector3::new(0.0, 0.0, sign), depths.z)
    }
}

/// Detect and resolve one cube pair. Returns `true` when the pair was
/// overlapping.
///
/// Overlapping cubes are pushed apart symmetrically by half the penetration
/// depth (plus a small clearance) each. If they are still closing along the
/// separation axis, an equal-mass impulse is exchanged, the tangential
/// remainder of each velocity is damped by friction, and both tumbles are
/// rerolled; separating pairs get the positional correction only.
pub fn resolve_pair<R: Rng>(
    a: &mut Cube,
    b: &mut Cube,
    config: &SandboxConfig,
    rng: &mut R,
) -> bool {
    let Some(depths) = penetration_depths(a, b) else {
        return false;
    };
    let (dir, depth) = minimum_translation(&depths, &a.position, &b.position);

    let push = depth * 0.5 + SEPARATION_EPSILON;
    a.position += dir * push;
    b.position -= dir * push;

    let closing = (a.velocity - b.velocity).dot(&dir);
    if closing < 0.0 {
        // Equal masses: each cube takes half the relative normal speed
        let impulse = -(1.0 + config.bounce_factor) * closing / 2.0;
        a.velocity += dir * impulse;
        b.velocity -= dir * impulse;

        // Friction damps the tangential remainder, recomputed post-impulse
        let a_normal = a.velocity.dot(&dir);
        let b_normal = b.velocity.dot(&dir);
        a.velocity = dir * a_normal + (a.velocity - dir * a_normal) * config.friction_factor;
        b.velocity = dir * b_normal + (b.velocity - dir * b_normal) * config.friction_factor;

        a.angular_velocity = roll_angular_velocity(rng);
        b.angular_velocity = roll_angular_velocity(rng);
    }

    true
}
