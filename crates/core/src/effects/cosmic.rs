//! Cosmic journey sequence: atoms scatter into a galaxy while a sun rig
//! crosses the pinned section.
//!
//! The section plays in two stages. A short clip-driven entry runs off the
//! intro clock (frames 0 to 10), then scroll scrubs the remaining frames
//! (11 to 80, complete at half scroll). On top of the clip, individual
//! element timelines handle the atom fade, sun pass, galaxy reveal, and
//! final scatter.

use scrollweave_protocol::{OutputKey, Vec2};

use crate::easing::Easing;
use crate::model::{ModelError, Phase, Timeline};

const ENTRY_FRAMES: f64 = 10.0;
const SCROLL_FRAMES: f64 = 70.0;
/// Fraction of section scroll that finishes the clip scrub.
const SCROLL_SPAN: f64 = 0.5;

const ATOM_FADE_START: f64 = 0.35;
const ATOM_FADE_END: f64 = 0.45;
const SUN_APPEAR_START: f64 = 0.35;
const SUN_APPEAR_END: f64 = 0.50;
const GALAXY_APPEAR_START: f64 = 0.45;
const GALAXY_APPEAR_END: f64 = 0.60;
const SCATTER_START: f64 = 0.70;
const SCATTER_END: f64 = 0.95;

/// World-unit distance atoms fly during the scatter.
pub const SCATTER_DISTANCE: f64 = 80.0;
/// Scale the galaxy expands to while scattering.
pub const GALAXY_EXPANSION: f64 = 4.0;

const STAGGER_STEP: f64 = 0.01;

const ORBIT_TILT_RAD: f64 = 10.0 * std::f64::consts::PI / 180.0;

const BLUR_FOCAL_Z: f64 = -15.0;
const BLUR_RANGE: f64 = 30.0;

const SCROLL_EPSILON: f64 = 0.01;

/// Current clip frame from intro and scroll progress. Any real scroll
/// scrubs the scroll frames immediately, even mid-intro, so there is never
/// a frame jump when the intro hands over; otherwise the intro plays the
/// entry frames and idles on the last one.
pub fn clip_frame(intro: f64, scroll: f64) -> f64 {
    if scroll > SCROLL_EPSILON {
        let scrubbed = (scroll / SCROLL_SPAN).clamp(0.0, 1.0);
        ENTRY_FRAMES + scrubbed * SCROLL_FRAMES
    } else if intro < 1.0 {
        intro.clamp(0.0, 1.0) * ENTRY_FRAMES
    } else {
        ENTRY_FRAMES
    }
}

/// Atom group opacity as the sun pass burns them away.
pub fn atom_opacity(progress: f64) -> f64 {
    (1.0 - (progress - ATOM_FADE_START) / (ATOM_FADE_END - ATOM_FADE_START)).clamp(0.0, 1.0)
}

/// Atoms are removed from the render list entirely past the fade.
pub fn atoms_visible(progress: f64) -> bool {
    progress < ATOM_FADE_END
}

/// Per-atom scatter progress with an explosive ease. Each atom starts
/// [`STAGGER_STEP`] later than the previous one, renormalized so the last
/// atom still finishes at progress 1.
pub fn stagger_progress(progress: f64, index: usize) -> f64 {
    let delay = index as f64 * STAGGER_STEP;
    let local = ((progress - delay) / (1.0 - delay)).clamp(0.0, 1.0);
    Easing::ExpoOut.apply(local)
}

/// Displacement of one atom along its scatter direction.
pub fn scatter_offset(progress: f64, index: usize, direction: Vec2) -> Vec2 {
    let t = stagger_progress(progress, index);
    Vec2::new(
        direction.x * SCATTER_DISTANCE * t,
        direction.y * SCATTER_DISTANCE * t,
    )
}

/// Position on the tilted galaxy orbit, as `[x, y, z]` world units. The
/// orbit lies in the XZ plane rotated [`ORBIT_TILT_RAD`] about X.
pub fn orbit_position(radius: f64, angle: f64) -> [f64; 3] {
    let x = angle.cos() * radius;
    let z = angle.sin() * radius;
    [x, -z * ORBIT_TILT_RAD.sin(), z * ORBIT_TILT_RAD.cos()]
}

/// Depth-of-field blur amount for a particle at depth `z`, in `[0, 1]`.
pub fn depth_blur(z: f64) -> f64 {
    (((z - BLUR_FOCAL_Z).abs()) / BLUR_RANGE).clamp(0.0, 1.0).powf(0.7)
}

/// Atom group fade timeline. Gated on the atom model so nothing is written
/// while the asset streams in.
pub fn atom_timeline() -> Result<Timeline, ModelError> {
    Ok(Timeline::new(
        "atom-fade",
        "atoms",
        vec![
            Phase::new(ATOM_FADE_START, ATOM_FADE_END, Easing::Linear)
                .channel(OutputKey::Opacity, 1.0, 0.0),
        ],
    )?
    .requiring("atom-model"))
}

/// Sun pass: scales in during the middle of the section, scales away with
/// the scatter.
pub fn sun_timeline() -> Result<Timeline, ModelError> {
    Timeline::new(
        "sun-pass",
        "sun",
        vec![
            Phase::new(SUN_APPEAR_START, SUN_APPEAR_END, Easing::EaseOutCubic)
                .channel(OutputKey::Scale, 0.0, 1.0),
            Phase::new(SCATTER_START, SCATTER_END, Easing::EaseInQuad)
                .channel(OutputKey::Scale, 1.0, 0.0),
        ],
    )
}

/// Galaxy particle system: fades in after the atoms burn, then expands and
/// fades through the scatter. Hidden entirely past the scatter end.
pub fn galaxy_timeline() -> Result<Timeline, ModelError> {
    Timeline::new(
        "galaxy-reveal",
        "galaxy",
        vec![
            Phase::new(GALAXY_APPEAR_START, GALAXY_APPEAR_END, Easing::EaseOutCubic)
                .channel(OutputKey::uniform("uOpacity"), 0.0, 1.0),
            Phase::new(SCATTER_START, SCATTER_END, Easing::EaseInQuad)
                .channel(OutputKey::uniform("uOpacity"), 1.0, 0.0)
                .channel(OutputKey::Scale, 1.0, GALAXY_EXPANSION),
        ],
    )
}
