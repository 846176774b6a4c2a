//! Audio-driven color and size modulation.
//!
//! An external analyzer supplies banded loudness features each frame; this
//! module turns them into the renderer-facing point size and display color.
//! The display color is the single channel through which voice-issued color
//! commands, gesture-driven reversion, and audio brightening all compose: it
//! exponentially approaches the current target color every frame.

use glam::Vec3;

/// Banded loudness features in `[0, 1]`, as produced by the external
/// spectrum analyzer. Absent features are equivalent to all zeroes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AudioFeatures {
    pub bass: f32,
    pub mid: f32,
    pub treble: f32,
}

/// Renderer point size with no audio input.
pub const BASE_POINT_SIZE: f32 = 45.0;

// Bass multiplies point size by up to 1 + BASS_PULSE.
const BASS_PULSE: f32 = 2.5;
// Treble above this gate pulls the display color toward a brightened target.
const TREBLE_GATE: f32 = 0.55;
const TREBLE_BLEND: f32 = 0.4;
const TREBLE_LIGHTEN: f32 = 0.4;
// Per-frame exponential approach of display color to target color.
const COLOR_BLEND: f32 = 0.1;

/// Blends the display color and point size from the base color, audio
/// features, and the per-frame target color.
#[derive(Debug, Clone)]
pub struct ColorModulator {
    base_color: Vec3,
    target_color: Vec3,
    display_color: Vec3,
    point_size: f32,
}

impl ColorModulator {
    /// Start white at the base point size.
    pub fn new() -> Self {
        Self {
            base_color: Vec3::ONE,
            target_color: Vec3::ONE,
            display_color: Vec3::ONE,
            point_size: BASE_POINT_SIZE,
        }
    }

    /// Set the base color (voice/UI command); the target snaps with it.
    pub fn set_base_color(&mut self, color: Vec3) {
        self.base_color = color;
        self.target_color = color;
    }

    /// Per-frame update: revert the target to base, apply audio modulation,
    /// then ease the display color toward the target.
    pub fn update(&mut self, audio: Option<&AudioFeatures>) {
        self.target_color = self.base_color;

        match audio {
            Some(features) => {
                self.point_size = BASE_POINT_SIZE * (1.0 + features.bass * BASS_PULSE);
                if features.treble > TREBLE_GATE {
                    let bright = lighten(self.target_color, TREBLE_LIGHTEN);
                    self.display_color = self.display_color.lerp(bright, TREBLE_BLEND);
                }
            }
            None => self.point_size = BASE_POINT_SIZE,
        }

        self.display_color = self.display_color.lerp(self.target_color, COLOR_BLEND);
    }

    /// Color uniform the renderer mixes into every particle.
    #[inline]
    pub fn display_color(&self) -> Vec3 {
        self.display_color
    }

    /// Point size uniform.
    #[inline]
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Configured base color.
    #[inline]
    pub fn base_color(&self) -> Vec3 {
        self.base_color
    }
}

impl Default for ColorModulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Raise a color's HSL lightness by `amount`, clamped to white.
pub fn lighten(color: Vec3, amount: f32) -> Vec3 {
    let (h, s, l) = rgb_to_hsl(color);
    hsl_to_rgb(h, s, (l + amount).clamp(0.0, 1.0))
}

fn rgb_to_hsl(c: Vec3) -> (f32, f32, f32) {
    let max = c.x.max(c.y).max(c.z);
    let min = c.x.min(c.y).min(c.z);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d < f32::EPSILON {
        return (0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == c.x {
        ((c.y - c.z) / d + if c.y < c.z { 6.0 } else { 0.0 }) / 6.0
    } else if max == c.y {
        ((c.z - c.x) / d + 2.0) / 6.0
    } else {
        ((c.x - c.y) / d + 4.0) / 6.0
    };
    (h, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
