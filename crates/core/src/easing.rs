use serde::{Deserialize, Serialize};

/// Easing curves applied to a phase's local progress before interpolation.
///
/// Every variant satisfies `apply(0.0) == 0.0` and `apply(1.0) == 1.0`
/// exactly, and is monotone non-decreasing on `[0,1]`. Input outside the
/// unit interval is clamped, never extrapolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    /// `t²` — slow start, used for scatter/dispersal ramps.
    EaseInQuad,
    /// `1 − (1−t)²`.
    EaseOutQuad,
    /// `1 − (1−t)³` — the entrance curve used by nearly every emergence.
    EaseOutCubic,
    /// Smooth S-curve; the tear reveal's radius curve.
    EaseInOutCubic,
    /// Explosive `1 − 2^(−10t)` with `t == 1` pinned to exactly 1, so the
    /// boundary contract holds despite the exponential tail.
    ExpoOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t).powi(2),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}
