//! Error types for swirl.
//!
//! Steady-state simulation never fails: per-frame work is pure arithmetic and
//! every degenerate input degrades to "no effect this frame". The only fallible
//! operation is constructing a system with an unusable configuration.

use std::fmt;

/// Errors that can occur when building a [`ParticleSystem`](crate::ParticleSystem).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The requested particle count was zero.
    ZeroParticles,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::ZeroParticles => {
                write!(f, "Particle count must be greater than zero. Use .with_count() to set one.")
            }
        }
    }
}

impl std::error::Error for BuildError {}
