//! Vector policy helpers and the random rolls shared by both resolvers.
//!
//! All operations are pure value transforms on `nalgebra::Vector3<f32>`;
//! the random functions are pure functions of the supplied generator's
//! state stream.

use nalgebra::Vector3;
use rand::Rng;

// ComplexField provides sqrt()/floor() for f32 in no_std via libm
#[allow(unused_imports)]
use nalgebra::ComplexField;

/// Bound of the uniform per-axis jitter added to a bounce normal.
pub const BOUNCE_PERTURBATION: f32 = 0.5;

/// Bound of the uniform angular velocity rolled on impact, degrees/second.
pub const TUMBLE_DEG_PER_SEC: f32 = 180.0;

/// Normalize, mapping the zero vector to the zero vector instead of failing.
/// Keeps downstream collision code branch-free.
#[inline]
pub fn normalize_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    let len = v.norm();
    if len > 0.0 {
        v / len
    } else {
        Vector3::zeros()
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg - (deg / 360.0).floor() * 360.0;
    // The floor-based modulo can round to exactly 360.0 for tiny negatives
    if wrapped >= 360.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// The inward plane normal jittered on its tangential axes, renormalized.
///
/// Produces slightly scattered bounce trajectories instead of a perfect
/// mirror reflection. Jitter is drawn in ascending axis order, only for the
/// axes the normal does not occupy.
pub fn bounce_direction<R: Rng>(normal: Vector3<f32>, rng: &mut R) -> Vector3<f32> {
    let mut jitter = Vector3::zeros();
    if normal.x == 0.0 {
        jitter.x = rng.gen_range(-BOUNCE_PERTURBATION..BOUNCE_PERTURBATION);
    }
    if normal.y == 0.0 {
        jitter.y = rng.gen_range(-BOUNCE_PERTURBATION..BOUNCE_PERTURBATION);
    }
    if normal.z == 0.0 {
        jitter.z = rng.gen_range(-BOUNCE_PERTURBATION..BOUNCE_PERTURBATION);
    }
    normalize_or_zero(normal + jitter)
}

/// Roll a fresh uniform angular velocity triple in `[-180, 180)` deg/s.
/// The visual "tumble on impact" cue; not derived from torque or inertia.
pub fn roll_angular_velocity<R: Rng>(rng: &mut R) -> Vector3<f32> {
    Vector3::new(
        rng.gen_range(-TUMBLE_DEG_PER_SEC..TUMBLE_DEG_PER_SEC),
        rng.gen_range(-TUMBLE_DEG_PER_SEC..TUMBLE_DEG_PER_SEC),
        rng.gen_range(-TUMBLE_DEG_PER_SEC..TUMBLE_DEG_PER_SEC),
    )
}
