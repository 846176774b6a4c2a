//! Per-particle physics: spring-damper integration, drift fields, gesture
//! forces, and shockwave impulses.
//!
//! The integrator is deliberately frame-based: a velocity is the displacement
//! applied this frame, not a per-second rate. Forces accumulate into the
//! velocity, damping bleeds energy, then the position integrates in one step.
//! Tuned for a ~60 Hz cadence; the simulation clock's time scale gates the
//! whole step when time is frozen.

use glam::Vec3;

/// Spring strength toward the active target shape.
pub const SPRING_STRENGTH: f32 = 0.05;
/// Weakened spring for chaos-mode drift, so drift dominates.
pub const CHAOS_SPRING_STRENGTH: f32 = 0.01;
/// Per-frame velocity damping.
pub const DAMPING: f32 = 0.92;
/// Faster decay for chaos-mode particles keeps drift bounded.
pub const CHAOS_DAMPING: f32 = 0.90;
/// Particles within this distance of the hand are captured by attraction.
pub const ATTRACT_RADIUS: f32 = 12.0;
/// Inverse-distance attraction strength.
pub const ATTRACT_STRENGTH: f32 = 0.3;
/// Instantaneous radial impulse applied by a shockwave.
pub const SHOCKWAVE_FORCE: f32 = 2.0;

// Additive epsilons so coincident points never divide by zero.
const ATTRACT_EPSILON: f32 = 0.1;
const SHOCKWAVE_EPSILON: f32 = 0.01;

/// How the ensemble is driven this frame.
///
/// Resolved once per frame by the gesture controller, then applied uniformly
/// by [`step`]. Keeping this a small tagged variant makes each force mode
/// independently testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveForce {
    /// Spring toward the active mode's target shape (no hand, or an
    /// unclassified one).
    Spring,
    /// Spring toward the target plus an inverse-distance pull toward the
    /// hand (PINCH).
    Attract {
        /// Hand position in simulation space.
        hand: Vec3,
    },
    /// Loosely-bound drift through the starfield (OPEN).
    Chaos,
    /// Spring toward the painting trail buffer (POINT).
    Paint,
    /// Spring toward the target while the whole ensemble's orientation
    /// tracks the hand (CLOSED). Identical to `Spring` at particle level;
    /// rotation is an ensemble uniform.
    Rotate,
}

/// Everything [`step`] needs besides the mutable particle buffers.
pub struct StepContext<'a> {
    /// Force mode resolved for this frame.
    pub force: ActiveForce,
    /// Active mode's target shape, length N.
    pub targets: &'a [Vec3],
    /// Starfield base positions for chaos drift, length N.
    pub starfield: &'a [Vec3],
    /// Painting trail buffer, length N.
    pub trail: &'a [Vec3],
    /// Scaled elapsed simulation time, drives the drift fields.
    pub time: f32,
}

/// Low-amplitude sinusoidal offset so shaped particles never sit perfectly
/// static. The particle index acts as a phase offset.
pub fn idle_drift(time: f32, index: usize) -> Vec3 {
    let i = index as f32;
    Vec3::new(
        (time * 0.3 + i * 0.05).sin() * 0.15,
        (time * 0.3 + i * 0.05).cos() * 0.15,
        (time * 0.5 + i * 0.1).sin() * 0.12,
    )
}

/// Wide-range drift field layered over the starfield in chaos mode.
pub fn chaos_drift(time: f32, index: usize) -> Vec3 {
    let i = index as f32;
    const RANGE: f32 = 2.0;
    Vec3::new(
        (time * 0.3 + i * 0.1).sin() * RANGE + (time * 0.1 + i * 0.5).cos() * RANGE,
        (time * 0.2 + i * 0.2).cos() * RANGE + (time * 0.4 + i).sin() * RANGE,
        (time * 0.35 + i * 1.5).sin() * RANGE,
    )
}

/// Advance every particle one frame.
///
/// All three slice arguments in `ctx` must have the same length as the
/// particle buffers.
pub fn step(positions: &mut [Vec3], velocities: &mut [Vec3], ctx: &StepContext<'_>) {
    let chaos = ctx.force == ActiveForce::Chaos;
    let spring = if chaos {
        CHAOS_SPRING_STRENGTH
    } else {
        SPRING_STRENGTH
    };
    let damping = if chaos { CHAOS_DAMPING } else { DAMPING };

    for (i, (position, velocity)) in positions.iter_mut().zip(velocities.iter_mut()).enumerate() {
        let target = match ctx.force {
            ActiveForce::Paint => ctx.trail[i],
            ActiveForce::Chaos => ctx.starfield[i] + chaos_drift(ctx.time, i),
            _ => ctx.targets[i] + idle_drift(ctx.time, i),
        };

        *velocity += (target - *position) * spring;

        if let ActiveForce::Attract { hand } = ctx.force {
            let delta = *position - hand;
            let dist = delta.length() + ATTRACT_EPSILON;
            if dist < ATTRACT_RADIUS {
                *velocity -= delta * (ATTRACT_STRENGTH / dist);
            }
        }

        *velocity *= damping;
        *position += *velocity;
    }
}

/// Add an instantaneous radial outward impulse to every particle, scaled by
/// inverse distance from `center`.
pub fn shockwave(positions: &[Vec3], velocities: &mut [Vec3], center: Vec3) {
    for (position, velocity) in positions.iter().zip(velocities.iter_mut()) {
        let delta = *position - center;
        let dist = delta.length() + SHOCKWAVE_EPSILON;
        *velocity += delta / dist * SHOCKWAVE_FORCE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(
        force: ActiveForce,
        targets: &'a [Vec3],
        starfield: &'a [Vec3],
        trail: &'a [Vec3],
    ) -> StepContext<'a> {
        StepContext {
            force,
            targets,
            starfield,
            trail,
            time: 0.0,
        }
    }

    #[test]
    fn test_spring_pulls_toward_target() {
        let targets = vec![Vec3::new(10.0, 0.0, 0.0)];
        let aux = vec![Vec3::ZERO];
        let mut positions = vec![Vec3::ZERO];
        let mut velocities = vec![Vec3::ZERO];

        step(
            &mut positions,
            &mut velocities,
            &ctx(ActiveForce::Spring, &targets, &aux, &aux),
        );
        assert!(positions[0].x > 0.0);
        assert!(velocities[0].x > 0.0);
    }

    #[test]
    fn test_damping_bounds_velocity_decay() {
        // With the target at the particle and zero drift, velocity magnitude
        // after k frames is bounded by v0 * d^k.
        let targets = vec![Vec3::ZERO];
        let aux = vec![Vec3::ZERO];
        let mut positions = vec![Vec3::ZERO];
        let mut velocities = vec![Vec3::new(4.0, 0.0, 0.0)];
        let v0 = velocities[0].length();

        for k in 1..=50 {
            step(
                &mut positions,
                &mut velocities,
                &ctx(ActiveForce::Spring, &targets, &aux, &aux),
            );
            let bound = v0 * DAMPING.powi(k);
            assert!(velocities[0].length() <= bound + 1e-4);
        }
    }

    #[test]
    fn test_attraction_ignores_particles_outside_radius() {
        let hand = Vec3::ZERO;
        let far = Vec3::new(20.0, 0.0, 0.0);
        let targets = vec![far];
        let aux = vec![Vec3::ZERO];
        let mut positions = vec![far];
        let mut velocities = vec![Vec3::ZERO];

        // Target equals position, so with zero drift any velocity change
        // would have to come from the attraction term.
        step(
            &mut positions,
            &mut velocities,
            &ctx(ActiveForce::Attract { hand }, &targets, &aux, &aux),
        );
        assert!(velocities[0].length() < 1e-6);
    }

    #[test]
    fn test_attraction_pulls_captured_particles() {
        let hand = Vec3::ZERO;
        let near = Vec3::new(5.0, 0.0, 0.0);
        let targets = vec![near];
        let aux = vec![Vec3::ZERO];
        let mut positions = vec![near];
        let mut velocities = vec![Vec3::ZERO];

        step(
            &mut positions,
            &mut velocities,
            &ctx(ActiveForce::Attract { hand }, &targets, &aux, &aux),
        );
        assert!(positions[0].x < near.x);
    }

    #[test]
    fn test_attraction_survives_coincident_hand() {
        let hand = Vec3::ZERO;
        let targets = vec![Vec3::ZERO];
        let aux = vec![Vec3::ZERO];
        let mut positions = vec![Vec3::ZERO];
        let mut velocities = vec![Vec3::ZERO];

        step(
            &mut positions,
            &mut velocities,
            &ctx(ActiveForce::Attract { hand }, &targets, &aux, &aux),
        );
        assert!(positions[0].is_finite());
        assert!(velocities[0].is_finite());
    }

    #[test]
    fn test_shockwave_is_radially_symmetric() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let positions = vec![
            center + Vec3::new(3.0, 0.0, 0.0),
            center + Vec3::new(0.0, -3.0, 0.0),
            center + Vec3::new(0.0, 0.0, 3.0),
        ];
        let mut velocities = vec![Vec3::ZERO; 3];
        shockwave(&positions, &mut velocities, center);

        let m0 = velocities[0].length();
        for v in &velocities[1..] {
            assert!((v.length() - m0).abs() < 1e-5);
        }
        // Impulses point outward from the center.
        for (p, v) in positions.iter().zip(&velocities) {
            assert!(v.dot(*p - center) > 0.0);
        }
    }

    #[test]
    fn test_shockwave_at_coincident_point_is_finite() {
        let positions = vec![Vec3::ZERO];
        let mut velocities = vec![Vec3::ZERO];
        shockwave(&positions, &mut velocities, Vec3::ZERO);
        assert!(velocities[0].is_finite());
    }

    #[test]
    fn test_chaos_uses_weak_spring() {
        let targets = vec![Vec3::ZERO];
        let starfield = vec![Vec3::new(100.0, 0.0, 0.0)];
        let trail = vec![Vec3::ZERO];
        let mut chaos_pos = vec![Vec3::ZERO];
        let mut chaos_vel = vec![Vec3::ZERO];
        step(
            &mut chaos_pos,
            &mut chaos_vel,
            &ctx(ActiveForce::Chaos, &targets, &starfield, &trail),
        );

        let spring_targets = vec![Vec3::new(100.0, 0.0, 0.0)];
        let aux = vec![Vec3::ZERO];
        let mut spring_pos = vec![Vec3::ZERO];
        let mut spring_vel = vec![Vec3::ZERO];
        step(
            &mut spring_pos,
            &mut spring_vel,
            &ctx(ActiveForce::Spring, &spring_targets, &aux, &aux),
        );

        // Same displacement to target, but the chaos spring is 5x weaker.
        assert!(chaos_vel[0].length() < spring_vel[0].length());
    }

    #[test]
    fn test_paint_targets_trail_buffer() {
        let targets = vec![Vec3::new(-50.0, 0.0, 0.0)];
        let starfield = vec![Vec3::new(50.0, 0.0, 0.0)];
        let trail = vec![Vec3::new(0.0, 9.0, 0.0)];
        let mut positions = vec![Vec3::ZERO];
        let mut velocities = vec![Vec3::ZERO];
        step(
            &mut positions,
            &mut velocities,
            &ctx(ActiveForce::Paint, &targets, &starfield, &trail),
        );
        assert!(positions[0].y > 0.0);
        assert!(positions[0].x.abs() < 1e-6);
    }

    #[test]
    fn test_drift_is_bounded() {
        for i in 0..50 {
            for t in 0..100 {
                let d = idle_drift(t as f32 * 0.37, i);
                assert!(d.length() <= 0.3);
                let c = chaos_drift(t as f32 * 0.37, i);
                assert!(c.x.abs() <= 4.0 && c.y.abs() <= 4.0 && c.z.abs() <= 2.0);
            }
        }
    }
}
