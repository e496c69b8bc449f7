//! The simulation world: owns the cube collection, the shared generator,
//! and the global timers, and orchestrates the per-tick update.

use heapless::Vec;
use log::debug;
use nalgebra::Vector3;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::boundary::{classify_rest, resolve_boundaries};
use crate::collision::resolve_pair;
use crate::config::{SandboxConfig, DROP_HEIGHT_MAX, DROP_HEIGHT_MIN};
use crate::cube::Cube;

/// Cubes per row and per column of the reset grid.
const GRID_DIM: usize = 10;

/// Length of the frame-rate sampling window, seconds.
const FPS_WINDOW_SECONDS: f32 = 0.5;

/// The rigid-cube sandbox.
///
/// Owns a fixed-cardinality collection of `N` cubes (rebuilt wholesale on
/// every reset, never grown or shrunk), the seeded random generator, and the
/// reset/debug/frame-rate timers. Single-threaded and synchronous: a
/// [`step`](Self::step) call runs to completion before returning, so the
/// snapshot read between steps is always self-consistent.
///
/// # Example
/// ```
/// use cubefall::{SandboxConfig, SandboxWorld};
///
/// let mut world = SandboxWorld::<100>::new(SandboxConfig::default(), 7);
/// world.step(1.0 / 60.0);
/// assert_eq!(world.cubes().len(), 100);
/// ```
pub struct SandboxWorld<const N: usize = 100> {
    cubes: Vec<Cube, N>,
    config: SandboxConfig,
    rng: SmallRng,
    reset_timer: f32,
    second_timer: f32,
    seconds_count: u32,
    fps_timer: f32,
    frame_count: u32,
}

impl<const N: usize> SandboxWorld<N> {
    /// Create a world and populate it with `N` cubes via [`reset`](Self::reset).
    ///
    /// `seed` fixes the random stream: two worlds built with the same config
    /// and seed evolve identically. A host that wants varied runs can derive
    /// the seed from wall-clock time.
    pub fn new(config: SandboxConfig, seed: u64) -> Self {
        let mut world = Self {
            cubes: Vec::new(),
            config,
            rng: SmallRng::seed_from_u64(seed),
            reset_timer: 0.0,
            second_timer: 0.0,
            seconds_count: 0,
            fps_timer: 0.0,
            frame_count: 0,
        };
        world.reset();
        world
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Read-only snapshot of the cube collection for the renderer.
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Mutable access to the cubes, for host-side scene tweaks.
    pub fn cubes_mut(&mut self) -> &mut [Cube] {
        &mut self.cubes
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Whole seconds of simulated time since the last reset. Informational.
    pub fn seconds_elapsed(&self) -> u32 {
        self.seconds_count
    }

    /// Discard every cube and rebuild the full collection.
    ///
    /// Cubes land on a centered 10x10 grid in x/z with spacing of one cube
    /// size between neighbours, one extra y layer per hundred cubes, and a
    /// per-cube random extra drop height. All timers restart from zero.
    pub fn reset(&mut self) {
        self.cubes.clear();

        let size = self.config.cube_size;
        let spacing = size * 2.0;
        let half_grid = GRID_DIM as f32 / 2.0;

        for i in 0..N {
            let col = (i % GRID_DIM) as f32 - half_grid;
            let row = ((i / GRID_DIM) % GRID_DIM) as f32 - half_grid;
            let layer = (i / (GRID_DIM * GRID_DIM)) as f32;
            let drop = self.rng.gen_range(DROP_HEIGHT_MIN..DROP_HEIGHT_MAX);

            let position = Vector3::new(col * spacing, layer * spacing + drop, row * spacing);
            let _ = self.cubes.push(Cube::new(position, size));
        }

        self.reset_timer = 0.0;
        self.second_timer = 0.0;
        self.seconds_count = 0;
        self.fps_timer = 0.0;
        self.frame_count = 0;
    }

    /// Advance the simulation by `dt` seconds (one rendered frame).
    ///
    /// `dt` is the caller-measured frame delta and is trusted as-is: it is
    /// neither clamped nor sub-stepped, so a stalled frame produces one
    /// large step whose deep penetrations are only partially corrected that
    /// tick.
    ///
    /// When the reset interval elapses the collection is rebuilt and the
    /// tick ends early, with no physics advance. Otherwise the pipeline is:
    /// integrate every cube, resolve the five boundary planes per cube, run
    /// the all-pairs collision pass, then classify rest.
    pub fn step(&mut self, dt: f32) {
        self.second_timer += dt;
        if self.second_timer >= 1.0 {
            self.seconds_count += 1;
            debug!("simulated {} s since reset", self.seconds_count);
            self.second_timer = 0.0;
        }

        self.frame_count += 1;
        self.fps_timer += dt;
        if self.fps_timer >= FPS_WINDOW_SECONDS {
            debug!("fps: {:.2}", self.frame_count as f32 / self.fps_timer);
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }

        self.reset_timer += dt;
        if self.reset_timer >= self.config.reset_interval {
            debug!("reset interval elapsed, rebuilding {} cubes", N);
            self.reset();
            return;
        }

        for cube in self.cubes.iter_mut() {
            cube.integrate(dt, self.config.gravity);
        }

        for cube in self.cubes.iter_mut() {
            resolve_boundaries(cube, &self.config, &mut self.rng);
        }

        // Brute-force all-pairs pass. Later pairs see positions already
        // corrected by earlier ones in the same pass.
        for i in 0..self.cubes.len() {
            for j in (i + 1)..self.cubes.len() {
                let (head, tail) = self.cubes.split_at_mut(j);
                resolve_pair(&mut head[i], &mut tail[0], &self.config, &mut self.rng);
            }
        }

        for cube in self.cubes.iter_mut() {
            classify_rest(cube, &self.config);
        }
    }
}
