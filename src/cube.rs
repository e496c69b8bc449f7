use nalgebra::Vector3;

use crate::math::wrap_degrees;

/// A single simulated cube.
///
/// Orientation is tracked as per-axis accumulated rotation in degrees and is
/// purely cosmetic: the angular velocity is rolled at random on impact, never
/// derived from torque or inertia.
#[derive(Debug, Clone)]
pub struct Cube {
    /// World-space center.
    pub position: Vector3<f32>,
    /// Linear velocity, world units per second.
    pub velocity: Vector3<f32>,
    /// Per-axis rotation rate, degrees per second.
    pub angular_velocity: Vector3<f32>,
    /// Per-axis accumulated rotation, degrees, each component in `[0, 360)`.
    pub orientation: Vector3<f32>,
    /// Edge length of the (uniform) cube.
    pub size: f32,
    /// True when the cube is considered settled.
    pub resting: bool,
}

impl Cube {
    /// Create a cube at rest at `position`.
    ///
    /// # Panics
    /// Panics if `size` is not positive and finite.
    pub fn new(position: Vector3<f32>, size: f32) -> Self {
        assert!(
            size > 0.0 && size.is_finite(),
            "size must be positive and finite"
        );
        Self {
            position,
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            orientation: Vector3::zeros(),
            size,
            resting: false,
        }
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size * 0.5
    }

    /// Minimum corner of the axis-aligned bounding box.
    #[inline]
    pub fn aabb_min(&self) -> Vector3<f32> {
        self.position - Vector3::repeat(self.half_size())
    }

    /// Maximum corner of the axis-aligned bounding box.
    #[inline]
    pub fn aabb_max(&self) -> Vector3<f32> {
        self.position + Vector3::repeat(self.half_size())
    }

    /// Advance this cube by `dt` seconds using semi-implicit Euler.
    ///
    /// Gravity is applied to velocity before the position update, so a tick
    /// moves the cube with the velocity it ends the tick with. Orientation
    /// accumulates from the angular velocity, wrapped per axis to `[0, 360)`.
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        self.velocity.y -= gravity * dt;
        self.position += self.velocity * dt;

        self.orientation += self.angular_velocity * dt;
        self.orientation.x = wrap_degrees(self.orientation.x);
        self.orientation.y = wrap_degrees(self.orientation.y);
        self.orientation.z = wrap_degrees(self.orientation.z);
    }
}
