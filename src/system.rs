//! The particle system facade.
//!
//! Owns every per-particle buffer and all mutable per-frame state, and
//! orchestrates shape targeting, gesture forces, and audio modulation once
//! per frame. The external render loop calls [`ParticleSystem::advance`]
//! once per display refresh with the latest sampled inputs (last value
//! wins); between calls the buffers are a consistent snapshot the renderer
//! may read.
//!
//! # Example
//!
//! ```ignore
//! use swirl::prelude::*;
//!
//! let mut system = ParticleSystem::builder()
//!     .with_count(8000)
//!     .with_seed(42)
//!     .with_mode(Mode::Heart)
//!     .build()?;
//!
//! // In the render loop:
//! system.advance(dt, &gesture_frame, audio.as_ref());
//! upload(system.positions(), system.colors(), system.scales());
//! ```

use crate::audio::{AudioFeatures, ColorModulator};
use crate::clock::SimClock;
use crate::error::BuildError;
use crate::gesture::{self, GestureController, GestureFrame};
use crate::physics::{self, ActiveForce, StepContext};
use crate::shape::{Mode, ShapeGenerator, ShapePoints};
use crate::text;
use crate::voice::Command;
use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Default ensemble size.
pub const DEFAULT_COUNT: usize = 8000;

/// Longest accepted text for the TEXT formation; input is truncated.
pub const MAX_TEXT_LEN: usize = 8;

/// Painting trail slots repositioned per frame while POINT is held.
pub const PAINT_BATCH: usize = 20;

// Half-extents of the random clouds used at construction.
const SPAWN_HALF_EXTENT: f32 = 6.0;
const TRAIL_HALF_EXTENT: f32 = 10.0;
const FALLBACK_HALF_EXTENT: f32 = 25.0;

// Painted slots jitter within +-0.25 around the hand.
const PAINT_JITTER: f32 = 0.5;

/// Scalar uniforms the renderer consumes alongside the particle buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniforms {
    /// Scaled elapsed simulation time in seconds.
    pub time: f32,
    /// Base point size after audio modulation.
    pub point_size: f32,
    /// Display color mixed into every particle.
    pub color: Vec3,
}

/// Builder for [`ParticleSystem`].
///
/// Use method chaining to configure, then call `.build()`.
pub struct ParticleSystemBuilder {
    count: usize,
    seed: u64,
    mode: Mode,
}

impl ParticleSystemBuilder {
    pub fn new() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: 0,
            mode: Mode::Heart,
        }
    }

    /// Set the number of particles (fixed for the system's lifetime).
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Seed for all randomized generation, for reproducible ensembles.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Initial formation mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Precompute every target shape and spawn the ensemble.
    pub fn build(self) -> Result<ParticleSystem, BuildError> {
        if self.count == 0 {
            return Err(BuildError::ZeroParticles);
        }

        let mut generator = ShapeGenerator::new(self.count, self.seed);
        let heart = generator.heart();
        let galaxy = generator.galaxy();
        let solar = generator.solar();
        let dna = generator.dna();
        let starfield = generator.starfield();
        let text_positions = generator.scatter(TRAIL_HALF_EXTENT);
        let trail = generator.scatter(TRAIL_HALF_EXTENT);
        let positions = generator.scatter(SPAWN_HALF_EXTENT);
        let scales = generator.scales();

        let mut system = ParticleSystem {
            count: self.count,
            positions,
            velocities: vec![Vec3::ZERO; self.count],
            colors: vec![Vec3::ONE; self.count],
            scales,
            heart,
            galaxy,
            solar,
            dna,
            text_positions,
            trail,
            starfield,
            painting_cursor: 0,
            mode: self.mode,
            rng: SmallRng::seed_from_u64(self.seed.wrapping_add(1)),
            clock: SimClock::new(),
            controller: GestureController::new(),
            modulator: ColorModulator::new(),
        };
        system.set_mode(self.mode);
        Ok(system)
    }
}

impl Default for ParticleSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed-size particle ensemble that springs toward per-mode target shapes
/// and reacts to gesture, audio, and voice input.
///
/// Single-threaded by design: `advance` mutates every buffer exactly once
/// per call and nothing inside it blocks. Dropping (or calling
/// [`dispose`](Self::dispose)) releases all buffers; ownership makes
/// use-after-dispose unrepresentable.
pub struct ParticleSystem {
    count: usize,

    // Per-particle buffers, all exactly `count` entries, index-stable.
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    colors: Vec<Vec3>,
    scales: Vec<f32>,

    // Precomputed target shapes.
    heart: ShapePoints,
    galaxy: ShapePoints,
    solar: ShapePoints,
    dna: ShapePoints,
    text_positions: Vec<Vec3>,
    trail: Vec<Vec3>,
    starfield: Vec<Vec3>,

    painting_cursor: usize,
    mode: Mode,
    rng: SmallRng,
    clock: SimClock,
    controller: GestureController,
    modulator: ColorModulator,
}

impl ParticleSystem {
    /// Start configuring a new system.
    pub fn builder() -> ParticleSystemBuilder {
        ParticleSystemBuilder::new()
    }

    /// Advance the simulation one frame.
    ///
    /// `dt` is the raw elapsed time since the previous call; the secondary
    /// hand's time scale is applied internally. Inputs are read once at the
    /// top of the frame — producers overwrite their latest value, nothing is
    /// queued.
    pub fn advance(&mut self, dt: f32, frame: &GestureFrame, audio: Option<&AudioFeatures>) {
        let time_scale = gesture::time_scale(frame);
        self.clock.set_time_scale(time_scale);
        self.clock.advance(dt);

        self.modulator.update(audio);

        let plan = self.controller.resolve(frame, dt);

        if let Some(center) = plan.shockwave {
            log::debug!("shockwave at {center}");
            physics::shockwave(&self.positions, &mut self.velocities, center);
        }

        if plan.force == ActiveForce::Paint {
            if let Some(hand) = plan.hand {
                self.paint(hand);
            }
        }

        // Frozen time gates the whole integration step; impulses and trail
        // updates above still register and take effect once time resumes.
        if time_scale == 0.0 {
            return;
        }

        let targets: &[Vec3] = match self.mode {
            Mode::Heart => &self.heart.positions,
            Mode::Galaxy => &self.galaxy.positions,
            Mode::Solar => &self.solar.positions,
            Mode::Dna => &self.dna.positions,
            Mode::Text => &self.text_positions,
        };
        let ctx = StepContext {
            force: plan.force,
            targets,
            starfield: &self.starfield,
            trail: &self.trail,
            time: self.clock.elapsed(),
        };
        physics::step(&mut self.positions, &mut self.velocities, &ctx);
    }

    /// Switch the active formation and apply its palette.
    ///
    /// TEXT has no palette of its own and keeps the current colors.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        let palette = match mode {
            Mode::Heart => Some(&self.heart.colors),
            Mode::Galaxy => Some(&self.galaxy.colors),
            Mode::Solar => Some(&self.solar.colors),
            Mode::Dna => Some(&self.dna.colors),
            Mode::Text => None,
        };
        if let Some(palette) = palette {
            self.colors.copy_from_slice(palette);
        }
        log::debug!("mode set to {mode:?}");
    }

    /// Set the base display color (voice or UI command).
    pub fn set_color(&mut self, color: Vec3) {
        self.modulator.set_base_color(color);
    }

    /// Regenerate the TEXT target shape from `text` and switch to it.
    ///
    /// Input is trimmed, uppercased, and truncated to [`MAX_TEXT_LEN`]
    /// characters. If nothing rasterizes, the shape falls back to a wide
    /// random cloud instead of crashing or going empty.
    pub fn set_text(&mut self, input: &str) {
        let label: String = input.trim().to_uppercase().chars().take(MAX_TEXT_LEN).collect();
        let sampled = text::generate_positions(&label, self.count, self.rng.gen());
        if sampled.is_empty() {
            log::warn!("text {label:?} produced no raster pixels; using fallback cloud");
            for slot in self.text_positions.iter_mut() {
                *slot = Vec3::new(
                    (self.rng.gen::<f32>() - 0.5) * 2.0 * FALLBACK_HALF_EXTENT,
                    (self.rng.gen::<f32>() - 0.5) * 2.0 * FALLBACK_HALF_EXTENT,
                    (self.rng.gen::<f32>() - 0.5) * 2.0 * FALLBACK_HALF_EXTENT,
                );
            }
        } else {
            self.text_positions.copy_from_slice(&sampled);
        }
        self.set_mode(Mode::Text);
    }

    /// Apply a decoded voice command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetMode(mode) => self.set_mode(mode),
            Command::SetColor(color) => self.set_color(color),
        }
    }

    /// Kick every particle radially outward from `center`.
    ///
    /// Fired internally when the hand moves fast enough; public so the host
    /// can trigger it from other inputs too.
    pub fn trigger_shockwave(&mut self, center: Vec3) {
        physics::shockwave(&self.positions, &mut self.velocities, center);
    }

    /// Reposition a batch of trail slots around the hand, advancing the
    /// wrapping cursor.
    fn paint(&mut self, hand: Vec3) {
        for _ in 0..PAINT_BATCH {
            self.painting_cursor = (self.painting_cursor + 1) % self.count;
            let jitter = Vec3::new(
                (self.rng.gen::<f32>() - 0.5) * PAINT_JITTER,
                (self.rng.gen::<f32>() - 0.5) * PAINT_JITTER,
                (self.rng.gen::<f32>() - 0.5) * PAINT_JITTER,
            );
            self.trail[self.painting_cursor] = hand + jitter;
        }
    }

    // ========== Renderer-facing accessors ==========

    /// Particle positions as a contiguous float array, stride 3.
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Particle colors as a contiguous float array, stride 3.
    pub fn colors(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Per-particle render scales, stride 1.
    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    /// Smoothed ensemble rotation `(x, y)` in radians.
    pub fn rotation(&self) -> Vec2 {
        self.controller.rotation()
    }

    /// Scalar uniforms for the renderer.
    pub fn uniforms(&self) -> Uniforms {
        Uniforms {
            time: self.clock.elapsed(),
            point_size: self.modulator.point_size(),
            color: self.modulator.display_color(),
        }
    }

    /// Number of particles; fixed at construction.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Currently active formation.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Tear the system down, releasing every buffer.
    ///
    /// Consuming `self` makes advancing a disposed system a compile error
    /// rather than a runtime hazard.
    pub fn dispose(self) {}
}
