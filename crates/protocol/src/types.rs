use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Componentwise linear interpolation from `self` toward `other`,
    /// pinned at `t == 1` so endpoints reproduce exactly.
    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        if t >= 1.0 {
            return other;
        }
        Vec2 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// The host viewport in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Device pixel ratio, for resolution-dependent uniforms.
    pub dpr: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self { width, height, dpr }
    }
}

/// A section element's bounds relative to the viewport top, as reported by
/// the host's geometry query on scroll/resize. `top` goes negative once the
/// element scrolls past the viewport top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub bottom: f64,
}

impl ElementRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// The user's motion preference, read from the host environment
/// (`prefers-reduced-motion` or equivalent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionPreference {
    #[default]
    Full,
    /// Procedural animation collapses to plain opacity cross-fades.
    Reduced,
}

impl MotionPreference {
    pub fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }
}
