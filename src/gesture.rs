//! Gesture interpretation.
//!
//! Maps the latest classified hand frame (supplied each frame by an external
//! tracker) to the force mode, rotation targets, time scale, and shockwave
//! triggers that drive the simulation. The tracker reports positions
//! normalized to `[0, 1]`; everything here converts them into simulation
//! space before use.
//!
//! Gesture vocabulary:
//! - PINCH: attract particles toward the hand.
//! - OPEN: chaos mode, particles drift through the starfield.
//! - POINT: painting mode, a rolling cursor drops particles along the hand's path.
//! - CLOSED: rotate the whole ensemble to follow the hand.
//! - Second hand: time control (CLOSED freezes, PINCH slow motion, OPEN normal).

use crate::physics::ActiveForce;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Hand speed (simulation units per second) above which a shockwave fires.
pub const SHOCKWAVE_SPEED: f32 = 150.0;

/// Per-frame exponential smoothing factor for ensemble rotation.
pub const ROTATION_SMOOTHING: f32 = 0.1;

/// Per-frame decay of the rotation target once the hand disappears.
pub const ROTATION_DECAY: f32 = 0.95;

// Hand-speed estimation divides by dt; below this the sample is skipped.
const MIN_SPEED_DT: f32 = 1e-6;

/// Classified hand pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Open,
    Closed,
    Pinch,
    Point,
}

/// One hand as reported by the external tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hand {
    /// Whether the tracker located this hand at all.
    pub found: bool,
    /// Classified pose, present only when found.
    pub gesture: Option<Gesture>,
    /// Position with x/y normalized to `[0, 1]` in the sensor frame.
    pub position: Option<Vec3>,
}

impl Hand {
    /// A tracked hand at normalized sensor coordinates.
    pub fn at(gesture: Gesture, x: f32, y: f32) -> Self {
        Self {
            found: true,
            gesture: Some(gesture),
            position: Some(Vec3::new(x, y, 0.0)),
        }
    }
}

/// The gesture input sampled at the top of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureFrame {
    /// Primary hand: force selection.
    pub hand: Hand,
    /// Optional secondary hand: time control.
    pub second_hand: Option<Hand>,
}

impl GestureFrame {
    /// No hands tracked this frame.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single tracked hand at normalized sensor coordinates.
    pub fn single(gesture: Gesture, x: f32, y: f32) -> Self {
        Self {
            hand: Hand::at(gesture, x, y),
            second_hand: None,
        }
    }
}

/// Map a normalized sensor position into simulation space.
///
/// The sensor x axis is mirrored (camera view vs. scene view) and z is
/// flattened to the interaction plane.
pub fn map_hand_position(normalized: Vec3) -> Vec3 {
    Vec3::new(
        (normalized.x - 0.5) * -15.0,
        (0.5 - normalized.y) * 12.0,
        0.0,
    )
}

/// Global time scale from the secondary hand, if any.
///
/// CLOSED freezes time, PINCH runs slow motion, anything else is normal speed.
pub fn time_scale(frame: &GestureFrame) -> f32 {
    match frame.second_hand {
        Some(hand) if hand.found => match hand.gesture {
            Some(Gesture::Closed) => 0.0,
            Some(Gesture::Pinch) => 0.1,
            _ => 1.0,
        },
        _ => 1.0,
    }
}

/// What the controller resolved for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlan {
    /// Force mode the integrator applies uniformly.
    pub force: ActiveForce,
    /// Hand position in simulation space, when one was reported.
    pub hand: Option<Vec3>,
    /// Shockwave center, when the hand moved fast enough to trigger one.
    pub shockwave: Option<Vec3>,
}

/// Per-frame gesture state machine.
///
/// Owns the rotation pair and the previous hand position used for speed
/// estimation; everything else is resolved fresh each frame.
#[derive(Debug, Default)]
pub struct GestureController {
    previous_hand: Vec3,
    current_rotation: Vec2,
    target_rotation: Vec2,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the frame's gesture input into a [`FramePlan`] and advance the
    /// rotation smoothing.
    ///
    /// `dt` is the raw (unscaled) frame delta; it is only used for hand-speed
    /// estimation and is guarded against zero.
    pub fn resolve(&mut self, frame: &GestureFrame, dt: f32) -> FramePlan {
        let mapped = frame.hand.position.map(map_hand_position);
        let mut plan = FramePlan {
            force: ActiveForce::Spring,
            hand: mapped,
            shockwave: None,
        };

        if let Some(hand) = mapped {
            if frame.hand.found && dt > MIN_SPEED_DT {
                let speed = (hand - self.previous_hand).truncate().length() / dt;
                if speed > SHOCKWAVE_SPEED && frame.hand.gesture != Some(Gesture::Point) {
                    plan.shockwave = Some(hand);
                }
            }
            self.previous_hand = hand;
        }

        match (frame.hand.found, frame.hand.position, mapped) {
            (true, Some(raw), Some(hand)) => match frame.hand.gesture {
                Some(Gesture::Pinch) => plan.force = ActiveForce::Attract { hand },
                Some(Gesture::Open) => plan.force = ActiveForce::Chaos,
                Some(Gesture::Point) => plan.force = ActiveForce::Paint,
                Some(Gesture::Closed) => {
                    plan.force = ActiveForce::Rotate;
                    // Normalized coordinates map to a full turn either way.
                    self.target_rotation.y = (raw.x - 0.5) * TAU;
                    self.target_rotation.x = (raw.y - 0.5) * TAU;
                }
                None => {}
            },
            // Missing or invalid hand: relax toward neutral orientation.
            _ => self.target_rotation *= ROTATION_DECAY,
        }

        self.current_rotation += (self.target_rotation - self.current_rotation) * ROTATION_SMOOTHING;
        plan
    }

    /// Smoothed ensemble rotation `(x, y)` in radians, applied by the
    /// renderer to the whole point cloud.
    pub fn rotation(&self) -> Vec2 {
        self.current_rotation
    }
}
