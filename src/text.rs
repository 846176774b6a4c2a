//! Text-to-point-cloud sampling.
//!
//! Renders a string onto a small offscreen bitmap using block glyphs, scans
//! for foreground pixels, then samples those pixels (uniformly, with
//! replacement) into a shallow 3D point cloud the particles can spring toward.
//!
//! The sampler is stateless; re-invoking it entirely replaces the previous
//! text shape. An empty result (nothing rasterized) is the caller's cue to
//! keep the previous target or substitute a fallback cloud.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use font8x8::{UnicodeFonts, BASIC_FONTS};

/// Raster canvas width in pixels.
pub const CANVAS_WIDTH: usize = 200;
/// Raster canvas height in pixels.
pub const CANVAS_HEIGHT: usize = 100;

/// Scene-space width the canvas x axis maps onto.
pub const SCENE_WIDTH: f32 = 15.0;
/// Scene-space height the canvas y axis maps onto (inverted).
pub const SCENE_HEIGHT: f32 = 8.0;

/// Foreground luminance threshold (out of 255).
const LUMA_THRESHOLD: u8 = 128;

/// Depth jitter range for the shallow 3D feel.
const DEPTH_JITTER: f32 = 1.0;

/// Source glyphs are 8x8 pixels.
const GLYPH_SIZE: usize = 8;

/// Sample `count` positions from the rasterized silhouette of `text`.
///
/// Returns exactly `count` points, or an empty vector when nothing
/// rasterized (empty string, or no glyph coverage for any character).
/// Output is deterministic for a given `(text, count, seed)`.
pub fn generate_positions(text: &str, count: usize, seed: u64) -> Vec<Vec3> {
    let canvas = rasterize(text);
    let candidates: Vec<(usize, usize)> = (0..CANVAS_HEIGHT)
        .flat_map(|y| (0..CANVAS_WIDTH).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas[y * CANVAS_WIDTH + x] > LUMA_THRESHOLD)
        .collect();

    if candidates.is_empty() {
        return Vec::new();
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let (px, py) = candidates[rng.gen_range(0..candidates.len())];
            Vec3::new(
                (px as f32 / CANVAS_WIDTH as f32 - 0.5) * SCENE_WIDTH,
                -(py as f32 / CANVAS_HEIGHT as f32 - 0.5) * SCENE_HEIGHT,
                (rng.gen::<f32>() - 0.5) * DEPTH_JITTER,
            )
        })
        .collect()
}

/// Draw `text` centered on a white-on-black canvas, scaling the 8x8 block
/// glyphs up as large as the canvas allows.
fn rasterize(text: &str) -> Vec<u8> {
    let mut canvas = vec![0u8; CANVAS_WIDTH * CANVAS_HEIGHT];
    let len = text.chars().count();
    if len == 0 {
        return canvas;
    }

    // Integer upscale chosen so the whole string fits the canvas.
    let scale = (CANVAS_WIDTH / (GLYPH_SIZE * len))
        .min(CANVAS_HEIGHT / GLYPH_SIZE)
        .max(1);
    let glyph_px = GLYPH_SIZE * scale;
    let x0 = CANVAS_WIDTH.saturating_sub(glyph_px * len) / 2;
    let y0 = CANVAS_HEIGHT.saturating_sub(glyph_px) / 2;

    for (ci, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let origin_x = x0 + ci * glyph_px;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                // Fill the scale x scale block for this glyph pixel.
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = origin_x + col * scale + dx;
                        let y = y0 + row * scale + dy;
                        if x < CANVAS_WIDTH && y < CANVAS_HEIGHT {
                            canvas[y * CANVAS_WIDTH + x] = 255;
                        }
                    }
                }
            }
        }
    }

    canvas
}
