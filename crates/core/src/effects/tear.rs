//! Paper-tear reveal over the hero section.
//!
//! A circular tear opens from the center of the hero as the user scrolls,
//! revealing the content underneath. The shader consumes a radius uniform;
//! browsers without shader support fall back to a CSS clip circle, and
//! reduced motion falls back to a plain fade.

use scrollweave_protocol::OutputKey;

use crate::easing::Easing;
use crate::model::{ModelError, Phase, Timeline};

/// Scroll progress at which the tear starts opening.
pub const TEAR_START: f64 = 0.2;
/// Radius, in half-diagonal units, that fully clears the viewport.
pub const FULL_RADIUS: f64 = 1.5;
/// Width of the torn-paper edge band in the shader.
pub const EDGE_WIDTH: f64 = 0.03;
pub const NOISE_SCALE_DESKTOP: f64 = 0.12;
pub const NOISE_SCALE_MOBILE: f64 = 0.08;
/// Paper color behind the tear, as linear RGB. Matches #FDF4EB.
pub const FALLBACK_COLOR: [f64; 3] = [0.992, 0.957, 0.922];

const ACTIVE_MIN: f64 = 0.15;
const ACTIVE_MAX: f64 = 1.05;

/// Remap hero scroll progress into tear progress: flat until
/// [`TEAR_START`], then linear to 1.
pub fn tear_progress(hero_progress: f64) -> f64 {
    ((hero_progress - TEAR_START) / (1.0 - TEAR_START)).clamp(0.0, 1.0)
}

/// Shader radius for a given tear progress.
pub fn radius(progress: f64) -> f64 {
    Easing::EaseInOutCubic.apply(progress) * FULL_RADIUS
}

/// Whether the reveal pass should render at all. Outside this band the
/// tear is either invisible or fully open and the pass is skipped.
pub fn is_active(progress: f64) -> bool {
    progress > ACTIVE_MIN && progress < ACTIVE_MAX
}

/// CSS `clip-path: circle(..%)` radius for the no-shader fallback.
pub fn fallback_radius_pct(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * 100.0
}

/// Opacity of the paper overlay in the reduced-motion fallback.
pub fn fallback_opacity(progress: f64) -> f64 {
    (1.0 - progress).clamp(0.0, 1.0)
}

pub fn noise_scale(mobile: bool) -> f64 {
    if mobile {
        NOISE_SCALE_MOBILE
    } else {
        NOISE_SCALE_DESKTOP
    }
}

/// Stock tear timeline driving the reveal shader's uniforms from hero
/// scroll progress. The progress uniform is linear; the shader applies
/// its own radius curve per [`radius`].
pub fn timeline(mobile: bool) -> Result<Timeline, ModelError> {
    Timeline::new(
        "paper-tear",
        "hero-reveal",
        vec![
            Phase::new(TEAR_START, 1.0, Easing::Linear)
                .channel(OutputKey::uniform("uProgress"), 0.0, 1.0)
                .channel(
                    OutputKey::uniform("uNoiseScale"),
                    noise_scale(mobile),
                    noise_scale(mobile),
                ),
        ],
    )
}
