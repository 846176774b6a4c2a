//! # Swirl
//!
//! Gesture-reactive particle choreography: a CPU simulation core that keeps
//! thousands of particles reshaping themselves into target formations while
//! reacting, every frame, to hand gestures, audio loudness, and voice
//! commands.
//!
//! Swirl is only the simulation. Hand tracking, audio analysis, speech
//! recognition, and rendering are external collaborators: they feed a
//! [`GestureFrame`], optional [`AudioFeatures`], and decoded [`Command`]s in,
//! and read flat float buffers plus a few scalar uniforms out.
//!
//! ## Quick Start
//!
//! ```ignore
//! use swirl::prelude::*;
//!
//! let mut system = ParticleSystem::builder()
//!     .with_count(8000)
//!     .with_seed(42)
//!     .with_mode(Mode::Galaxy)
//!     .build()?;
//!
//! // Once per display refresh:
//! let gesture = tracker.latest();          // last value wins
//! let audio = analyzer.latest();
//! system.advance(dt, &gesture, audio.as_ref());
//!
//! renderer.upload(system.positions(), system.colors(), system.scales());
//! renderer.set_uniforms(system.uniforms(), system.rotation());
//! ```
//!
//! ## Core Concepts
//!
//! ### Formations
//!
//! Each [`Mode`] owns a precomputed target point cloud (heart curve, spiral
//! galaxy, solar ring system, DNA helix, or a rasterized text silhouette)
//! and a color palette. Particles spring toward their target slot with
//! per-frame damping, plus a small sinusoidal drift so nothing ever sits
//! perfectly still.
//!
//! ### Gestures
//!
//! The primary hand selects the force mode each frame: PINCH attracts
//! particles, OPEN scatters them through a drifting starfield, POINT paints
//! a persistent trail along the hand's path, CLOSED rotates the whole
//! ensemble, and a fast flick fires a radial shockwave. A second hand
//! controls the flow of time (freeze, slow motion, normal).
//!
//! ### Audio and voice
//!
//! Bass pulses the point size, treble pulls the display color toward a
//! brightened variant, and voice transcripts decode into discrete
//! mode/color commands via [`voice::parse_transcript`].

pub mod audio;
pub mod clock;
pub mod error;
pub mod gesture;
pub mod physics;
pub mod shape;
pub mod system;
pub mod text;
pub mod voice;

pub use audio::AudioFeatures;
pub use clock::SimClock;
pub use error::BuildError;
pub use gesture::{Gesture, GestureFrame, Hand};
pub use glam::{Vec2, Vec3};
pub use physics::ActiveForce;
pub use shape::Mode;
pub use system::{ParticleSystem, ParticleSystemBuilder, Uniforms};
pub use voice::Command;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use swirl::prelude::*;
/// ```
pub mod prelude {
    pub use crate::audio::AudioFeatures;
    pub use crate::error::BuildError;
    pub use crate::gesture::{Gesture, GestureFrame, Hand};
    pub use crate::shape::Mode;
    pub use crate::system::{ParticleSystem, ParticleSystemBuilder, Uniforms};
    pub use crate::voice::{parse_transcript, Command};
    pub use crate::{Vec2, Vec3};
}
