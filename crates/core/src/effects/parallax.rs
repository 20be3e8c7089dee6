//! Pointer parallax and ambient idle motion.
//!
//! These run every frame off wall-clock time and the smoothed pointer, not
//! scroll progress, so they live outside the timeline model as plain
//! per-frame functions and small stateful accumulators.

use scrollweave_protocol::Vec2;

const DEPTH_FACTOR: f64 = 0.03;
const MAX_DEPTH: f64 = 10.0;

const FLOAT_AMP_Y: f64 = 18.0;
const FLOAT_AMP_X: f64 = 13.5;
const FLOAT_X_RATIO: f64 = 0.7;

const SPIN_RATE: f64 = 0.15;

const GLOW_BASE: f64 = 1.0;
const GLOW_AMP: f64 = 0.1;
const GLOW_SPEED: f64 = 2.0;

/// Parallax strength for a layer. Depth 0 is the closest layer and moves
/// the most; depth 10 is pinned to the background.
pub fn strength(depth: f64) -> f64 {
    (MAX_DEPTH - depth.clamp(0.0, MAX_DEPTH)) * DEPTH_FACTOR
}

/// Pixel offset for a layer given the smoothed pointer in `[-1, 1]`.
/// Layers lean toward the pointer in x and away in y; `intro` scales the
/// whole effect in during the page-load ramp.
pub fn offset(pointer: Vec2, depth: f64, intro: f64) -> Vec2 {
    let s = strength(depth) * intro.clamp(0.0, 1.0);
    Vec2::new(pointer.x * s, -pointer.y * s)
}

/// Slow sinusoidal drift for floating decor. Each element gets its own
/// speed and phase so the field never moves in lockstep.
#[derive(Debug, Clone, Copy)]
pub struct FloatMotion {
    pub speed: f64,
    pub phase: f64,
}

impl FloatMotion {
    pub fn new(speed: f64, phase: f64) -> Self {
        Self { speed, phase }
    }

    /// Offset at time `t` seconds.
    pub fn at(&self, t: f64) -> Vec2 {
        Vec2::new(
            (t * self.speed * FLOAT_X_RATIO + self.phase).cos() * FLOAT_AMP_X,
            (t * self.speed + self.phase).sin() * FLOAT_AMP_Y,
        )
    }
}

/// Frame-rate independent rotation. Feed it the frame delta in seconds
/// and read the accumulated angle in radians.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinAccumulator {
    angle: f64,
}

impl SpinAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta: f64) -> f64 {
        self.angle += delta * SPIN_RATE;
        self.angle
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
}

/// Glow intensity pulse around 1.0 for emissive materials.
pub fn glow_pulse(t: f64, phase: f64) -> f64 {
    GLOW_BASE + (t * GLOW_SPEED + phase).sin() * GLOW_AMP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closer_layers_move_more() {
        assert!(strength(0.0) > strength(5.0));
        assert!(strength(5.0) > strength(10.0));
        assert_eq!(strength(10.0), 0.0);
        assert_eq!(strength(15.0), 0.0);
    }

    #[test]
    fn offset_inverts_the_y_axis() {
        let off = offset(Vec2::new(1.0, 1.0), 0.0, 1.0);
        assert!(off.x > 0.0);
        assert!(off.y < 0.0);
        assert!((off.x + off.y).abs() < 1e-12);
    }

    #[test]
    fn intro_scales_the_effect_in() {
        let full = offset(Vec2::new(1.0, 0.0), 0.0, 1.0);
        let half = offset(Vec2::new(1.0, 0.0), 0.0, 0.5);
        assert!((half.x * 2.0 - full.x).abs() < 1e-12);
        assert_eq!(offset(Vec2::new(1.0, 0.0), 0.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn float_motion_stays_within_its_amplitudes() {
        let motion = FloatMotion::new(1.3, 0.4);
        for step in 0..200 {
            let p = motion.at(step as f64 * 0.1);
            assert!(p.x.abs() <= FLOAT_AMP_X + 1e-9);
            assert!(p.y.abs() <= FLOAT_AMP_Y + 1e-9);
        }
    }

    #[test]
    fn spin_accumulates_across_frames() {
        let mut spin = SpinAccumulator::new();
        spin.advance(1.0);
        spin.advance(1.0);
        assert!((spin.angle() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn glow_pulses_around_unity() {
        for step in 0..100 {
            let g = glow_pulse(step as f64 * 0.05, 0.0);
            assert!(g >= GLOW_BASE - GLOW_AMP - 1e-9);
            assert!(g <= GLOW_BASE + GLOW_AMP + 1e-9);
        }
    }
}
