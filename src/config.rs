/// Simulation parameters, fixed at construction time.
///
/// Defaults match the reference sandbox configuration. Body count is not a
/// field here: it is the const-generic capacity of
/// [`SandboxWorld`](crate::world::SandboxWorld).
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxConfig {
    /// Downward acceleration magnitude, world units per second squared.
    pub gravity: f32,
    /// Height of the ground plane.
    pub ground_y: f32,
    /// Half-extent of the arena: the four walls sit at `x = ±wall_extent`
    /// and `z = ±wall_extent`. Distinct from the ground offset.
    pub wall_extent: f32,
    /// Edge length of every cube. Must be positive.
    pub cube_size: f32,
    /// Coefficient of restitution applied to the normal-velocity component
    /// at a collision.
    pub bounce_factor: f32,
    /// Multiplicative damping applied to the tangential-velocity component
    /// at a collision.
    pub friction_factor: f32,
    /// Speed below which (together with ground contact) a cube counts as
    /// settled. Also the minimum impact speed that rerolls the tumble.
    pub rest_threshold: f32,
    /// Seconds between full-state resets of the cube collection.
    pub reset_interval: f32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            ground_y: -2.0,
            wall_extent: 8.0,
            cube_size: 0.5,
            bounce_factor: 1.0,
            friction_factor: 0.9,
            rest_threshold: 0.05,
            reset_interval: 13.0,
        }
    }
}

/// Minimum extra drop height added to each cube's grid position at reset.
pub const DROP_HEIGHT_MIN: f32 = 5.0;
/// Maximum extra drop height added to each cube's grid position at reset.
pub const DROP_HEIGHT_MAX: f32 = 15.0;
