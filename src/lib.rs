#![no_std]

//! A minimal rigid-body sandbox: `N` cubes fall under gravity inside a walled
//! arena, bounce off the ground and four walls, collide with each other, and
//! settle into rest. The whole scene is torn down and rebuilt on a periodic
//! timer.
//!
//! The crate is a pure simulation core meant to be driven once per rendered
//! frame by a host loop; rendering, windowing, and input live entirely on the
//! host side. The host hands [`SandboxWorld::step`] the measured frame delta
//! and reads the cube collection back for drawing.
//!
//! Randomness (bounce scatter, impact tumble, drop heights) comes from a
//! single generator seeded at construction, so a fixed seed gives a
//! reproducible run.
//!
//! # Example
//! ```
//! use cubefall::{SandboxConfig, SandboxWorld};
//!
//! let mut world = SandboxWorld::<100>::new(SandboxConfig::default(), 0xC0FFEE);
//! for _ in 0..60 {
//!     world.step(1.0 / 60.0);
//! }
//! for cube in world.cubes() {
//!     // hand position/orientation/size to the renderer
//!     let _ = (cube.position, cube.orientation, cube.size);
//! }
//! ```

pub mod boundary;
pub mod collision;
pub mod config;
pub mod cube;
pub mod math;
pub mod world;

pub use config::SandboxConfig;
pub use cube::Cube;
pub use world::SandboxWorld;
