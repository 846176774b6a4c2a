//! Target shape generation.
//!
//! Every selectable [`Mode`] has a precomputed point cloud of exactly N
//! positions that its particles spring toward, plus a matching color palette
//! that is applied to the live color buffer when the mode becomes active.
//!
//! All generation is deterministic for a given `(count, seed)` pair so tests
//! can assert exact output shapes.
//!
//! # Example
//!
//! ```ignore
//! use swirl::shape::{Mode, ShapeGenerator};
//!
//! let mut gen = ShapeGenerator::new(8000, 42);
//! let heart = gen.heart();
//! assert_eq!(heart.positions.len(), 8000);
//! ```

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

/// Particle formation modes.
///
/// Exactly one mode is active at a time; it selects the target shape and
/// color palette that govern idle behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Parametric heart curve, extruded along z.
    #[default]
    Heart,
    /// Spherical bulge plus four spiral arms.
    Galaxy,
    /// Dense core plus a thin flattened ring.
    Solar,
    /// Two counter-phase helical strands.
    Dna,
    /// Sampled silhouette of a rasterized string.
    Text,
}

/// A precomputed point cloud with its matching per-particle palette.
#[derive(Debug, Clone)]
pub struct ShapePoints {
    /// Target positions, one per particle index.
    pub positions: Vec<Vec3>,
    /// Palette colors, one per particle index.
    pub colors: Vec<Vec3>,
}

/// Deterministic generator for per-mode target point clouds.
///
/// Holds a seeded RNG; generating the same sequence of shapes from two
/// generators constructed with equal `(count, seed)` yields identical output.
pub struct ShapeGenerator {
    count: usize,
    rng: SmallRng,
}

/// Number of spiral arms in the galaxy shape.
const GALAXY_ARMS: usize = 4;

impl ShapeGenerator {
    /// Create a generator for `count` particles with an explicit seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Parametric heart curve.
    ///
    /// The depth factor is raised to `1/2.5`, biasing density toward the
    /// curve itself and thinning the interior; color intensity rises with the
    /// same factor so the densest particles are the brightest.
    pub fn heart(&mut self) -> ShapePoints {
        let mut positions = Vec::with_capacity(self.count);
        let mut colors = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let t = self.rng.gen::<f32>() * TAU;
            let depth = self.rng.gen::<f32>().powf(1.0 / 2.5);
            let x_base = 16.0 * t.sin().powi(3);
            let y_base =
                13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            positions.push(Vec3::new(
                x_base * depth * 0.24,
                y_base * depth * 0.24,
                (self.rng.gen::<f32>() - 0.5) * 5.0 * depth * 0.45,
            ));
            let intensity = 0.7 + depth * 0.3;
            colors.push(Vec3::new(intensity, 0.1, 0.3));
        }
        ShapePoints { positions, colors }
    }

    /// Spiral galaxy: 30% warm spherical bulge, 70% spiral arms that blend
    /// toward blue as radius grows.
    pub fn galaxy(&mut self) -> ShapePoints {
        let mut positions = Vec::with_capacity(self.count);
        let mut colors = Vec::with_capacity(self.count);
        let bulge = (self.count as f32 * 0.3) as usize;
        for i in 0..self.count {
            if i < bulge {
                let r = self.rng.gen::<f32>().powi(2) * 2.5;
                let theta = self.rng.gen::<f32>() * TAU;
                let phi = (2.0 * self.rng.gen::<f32>() - 1.0).acos();
                positions.push(Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin() * 0.5,
                    r * phi.cos() * 0.25,
                ));
                colors.push(Vec3::new(
                    1.0,
                    0.7 + self.rng.gen::<f32>() * 0.3,
                    0.3 + self.rng.gen::<f32>() * 0.2,
                ));
            } else {
                let arm = i % GALAXY_ARMS;
                let radius = 2.5 + self.rng.gen::<f32>() * 10.0;
                let angle = TAU * arm as f32 / GALAXY_ARMS as f32 + radius * 0.6;
                let x = angle.cos() * (radius + self.rng.gen::<f32>() - 0.5);
                let y = angle.sin() * (radius + self.rng.gen::<f32>() - 0.5);
                // Arms thin out vertically as they reach outward
                let z = (self.rng.gen::<f32>() - 0.5) * (0.6 / (radius * 0.3).sqrt());
                positions.push(Vec3::new(x, y, z));
                let blueness = 0.5 + (radius / 12.0) * 0.5;
                colors.push(Vec3::new(
                    0.6,
                    0.7,
                    (blueness + self.rng.gen::<f32>() * 0.3).min(1.0),
                ));
            }
        }
        ShapePoints { positions, colors }
    }

    /// Solar system: each particle has a 20% chance of joining the dense gold
    /// core, otherwise it lands on a thin blue-gray ring.
    pub fn solar(&mut self) -> ShapePoints {
        let mut positions = Vec::with_capacity(self.count);
        let mut colors = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            if self.rng.gen::<f32>() < 0.2 {
                let r = self.rng.gen::<f32>().powi(3) * 2.0;
                let theta = self.rng.gen::<f32>() * TAU;
                let phi = (2.0 * self.rng.gen::<f32>() - 1.0).acos();
                positions.push(Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                ));
                colors.push(Vec3::new(1.0, 0.8, 0.2));
            } else {
                let radius = 3.0 + self.rng.gen::<f32>() * 15.0;
                let angle = self.rng.gen::<f32>() * TAU;
                positions.push(Vec3::new(
                    angle.cos() * radius,
                    angle.sin() * radius,
                    (self.rng.gen::<f32>() - 0.5) * 0.2,
                ));
                colors.push(Vec3::new(0.5, 0.6, 0.7));
            }
        }
        ShapePoints { positions, colors }
    }

    /// DNA double helix: strand membership by index parity, the second strand
    /// phase-shifted by pi, with small per-axis jitter.
    pub fn dna(&mut self) -> ShapePoints {
        let mut positions = Vec::with_capacity(self.count);
        let mut colors = Vec::with_capacity(self.count);
        for i in 0..self.count {
            let progress = i as f32 / self.count as f32;
            let t = progress * PI * 10.0;
            let offset = if i % 2 == 0 { PI } else { 0.0 };
            let x = (t + offset).cos() * 3.5 + (self.rng.gen::<f32>() - 0.5) * 0.3;
            let z = (t + offset).sin() * 3.5 + (self.rng.gen::<f32>() - 0.5) * 0.3;
            let y = (progress - 0.5) * 15.0 + (self.rng.gen::<f32>() - 0.5) * 0.3;
            positions.push(Vec3::new(x, y, z));
            colors.push(if i % 2 == 0 {
                Vec3::new(0.2, 0.8, 1.0)
            } else {
                Vec3::new(1.0, 0.2, 0.8)
            });
        }
        ShapePoints { positions, colors }
    }

    /// Starfield base for chaos-mode drift. Not a selectable mode, so it
    /// carries no palette.
    pub fn starfield(&mut self) -> Vec<Vec3> {
        (0..self.count)
            .map(|_| {
                Vec3::new(
                    (self.rng.gen::<f32>() - 0.5) * 50.0,
                    (self.rng.gen::<f32>() - 0.5) * 30.0,
                    (self.rng.gen::<f32>() - 0.5) * 30.0,
                )
            })
            .collect()
    }

    /// Uniform random cloud inside a cube of the given half-extent.
    ///
    /// Used for initial particle positions, the painting trail seed, and the
    /// fallback cloud when text rasterization yields nothing.
    pub fn scatter(&mut self, half_extent: f32) -> Vec<Vec3> {
        (0..self.count)
            .map(|_| {
                Vec3::new(
                    (self.rng.gen::<f32>() - 0.5) * 2.0 * half_extent,
                    (self.rng.gen::<f32>() - 0.5) * 2.0 * half_extent,
                    (self.rng.gen::<f32>() - 0.5) * 2.0 * half_extent,
                )
            })
            .collect()
    }

    /// Random per-particle render scales in `0.5..2.0`.
    pub fn scales(&mut self) -> Vec<f32> {
        (0..self.count)
            .map(|_| self.rng.gen::<f32>() * 1.5 + 0.5)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_lengths() {
        for count in [1, 100, 8000] {
            let mut gen = ShapeGenerator::new(count, 7);
            assert_eq!(gen.heart().positions.len(), count);
            assert_eq!(gen.galaxy().positions.len(), count);
            assert_eq!(gen.solar().positions.len(), count);
            assert_eq!(gen.dna().positions.len(), count);
            assert_eq!(gen.starfield().len(), count);
        }
    }

    #[test]
    fn test_palette_lengths_match() {
        let mut gen = ShapeGenerator::new(500, 7);
        let shape = gen.galaxy();
        assert_eq!(shape.positions.len(), shape.colors.len());
    }

    #[test]
    fn test_deterministic_for_equal_seeds() {
        let mut a = ShapeGenerator::new(256, 1234);
        let mut b = ShapeGenerator::new(256, 1234);
        assert_eq!(a.heart().positions, b.heart().positions);
        assert_eq!(a.dna().positions, b.dna().positions);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = ShapeGenerator::new(256, 1);
        let mut b = ShapeGenerator::new(256, 2);
        assert_ne!(a.heart().positions, b.heart().positions);
    }

    #[test]
    fn test_heart_envelope() {
        // The heart curve spans roughly [-16, 16] on x and [-17, 12] on y
        // before the 0.24 scale, so |x| <= 3.84 and |y| <= 4.08.
        let mut gen = ShapeGenerator::new(4000, 99);
        for p in gen.heart().positions {
            assert!(p.x.abs() <= 4.0);
            assert!(p.y.abs() <= 4.1);
            assert!(p.z.abs() <= 1.2);
        }
    }

    #[test]
    fn test_dna_strand_palettes() {
        let mut gen = ShapeGenerator::new(64, 3);
        let shape = gen.dna();
        for (i, c) in shape.colors.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(*c, Vec3::new(0.2, 0.8, 1.0));
            } else {
                assert_eq!(*c, Vec3::new(1.0, 0.2, 0.8));
            }
        }
    }

    #[test]
    fn test_solar_ring_is_flat() {
        let mut gen = ShapeGenerator::new(2000, 5);
        let shape = gen.solar();
        for (p, c) in shape.positions.iter().zip(&shape.colors) {
            if *c == Vec3::new(0.5, 0.6, 0.7) {
                // Ring particles stay within the thin disk and the radius band.
                assert!(p.z.abs() <= 0.1);
                let r = (p.x * p.x + p.y * p.y).sqrt();
                assert!((3.0..=18.0).contains(&r));
            }
        }
    }

    #[test]
    fn test_starfield_extent() {
        let mut gen = ShapeGenerator::new(1000, 11);
        for p in gen.starfield() {
            assert!(p.x.abs() <= 25.0);
            assert!(p.y.abs() <= 15.0);
            assert!(p.z.abs() <= 15.0);
        }
    }

    #[test]
    fn test_scales_range() {
        let mut gen = ShapeGenerator::new(1000, 11);
        for s in gen.scales() {
            assert!((0.5..2.0).contains(&s));
        }
    }
}
