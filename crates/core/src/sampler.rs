//! Scroll and pointer sampling.
//!
//! Everything here converts raw browser geometry (bounding rects, client
//! coordinates, timestamps) into normalized progress values in `[0, 1]`.
//! The functions are pure over their inputs so a headless driver can feed
//! them synthetic geometry.

use scrollweave_protocol::{ElementRect, Vec2, Viewport};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("trigger window is empty: start {start} equals end {end}")]
    EmptyTriggerWindow { start: f64, end: f64 },
    #[error("sticky section ({section}px) does not exceed the viewport ({viewport}px)")]
    SectionTooShort { section: f64, viewport: f64 },
}

/// Maps an element's viewport-relative top edge to progress.
///
/// Progress is 0 while the element top sits at or below `start`, 1 once it
/// reaches `end`, and linear in between. `start > end` is the usual case
/// (the element scrolls upward through the window) but either ordering is
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerWindow {
    start: f64,
    end: f64,
}

impl TriggerWindow {
    pub fn new(start: f64, end: f64) -> Result<Self, SamplerError> {
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(SamplerError::EmptyTriggerWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window positioned at fractions of the viewport height, e.g.
    /// `from_fractions(&vp, 0.9, 0.3)` fires as the element travels from
    /// 90% down the screen to 30%.
    pub fn from_fractions(
        viewport: &Viewport,
        start: f64,
        end: f64,
    ) -> Result<Self, SamplerError> {
        Self::new(viewport.height * start, viewport.height * end)
    }

    pub fn progress(&self, top: f64) -> f64 {
        ((self.start - top) / (self.start - self.end)).clamp(0.0, 1.0)
    }

    /// Sample against a measured rect. An unmeasured element (not mounted,
    /// display:none) reads as progress 0 rather than an error.
    pub fn sample(&self, rect: Option<&ElementRect>) -> f64 {
        match rect {
            Some(rect) => self.progress(rect.top),
            None => 0.0,
        }
    }
}

/// Progress through a pinned (sticky) section.
///
/// While the section is pinned, its container top goes negative as the
/// page scrolls; progress is how far through the pinned range we are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyWindow {
    section_height: f64,
    viewport_height: f64,
}

impl StickyWindow {
    pub fn new(section_height: f64, viewport_height: f64) -> Result<Self, SamplerError> {
        if !(section_height.is_finite() && viewport_height.is_finite())
            || section_height <= viewport_height
        {
            return Err(SamplerError::SectionTooShort {
                section: section_height,
                viewport: viewport_height,
            });
        }
        Ok(Self {
            section_height,
            viewport_height,
        })
    }

    pub fn progress(&self, container_top: f64) -> f64 {
        (-container_top / (self.section_height - self.viewport_height)).clamp(0.0, 1.0)
    }
}

/// Combine an entry window with an exit window into one visibility gate.
/// The element is fully present only while both windows agree.
pub fn gate(entry: f64, exit: f64) -> f64 {
    entry.min(exit).clamp(0.0, 1.0)
}

const POINTER_SMOOTHING: f64 = 0.05;

/// Pointer position normalized to `[-1, 1]` in both axes, with an
/// exponential follower so consumers see eased motion instead of raw
/// pointermove jitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    raw: Vec2,
    smoothed: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer event in client coordinates.
    pub fn observe(&mut self, client_x: f64, client_y: f64, viewport: &Viewport) {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        self.raw = Vec2::new(
            (client_x / viewport.width) * 2.0 - 1.0,
            (client_y / viewport.height) * 2.0 - 1.0,
        );
    }

    /// Advance the follower one frame toward the last observed position.
    pub fn update(&mut self) -> Vec2 {
        self.smoothed = Vec2::new(
            self.smoothed.x + (self.raw.x - self.smoothed.x) * POINTER_SMOOTHING,
            self.smoothed.y + (self.raw.y - self.smoothed.y) * POINTER_SMOOTHING,
        );
        self.smoothed
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }
}

/// One-shot clock for the page-load intro: waits out an initial delay,
/// then ramps 0 to 1 over the configured duration.
#[derive(Debug, Clone, Copy)]
pub struct IntroClock {
    delay_ms: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl IntroClock {
    pub fn new(delay_ms: f64, duration_ms: f64) -> Self {
        Self {
            delay_ms,
            duration_ms,
            started_at: None,
        }
    }

    /// Arm the clock at timestamp `now` (milliseconds). Re-arming after
    /// start is ignored.
    pub fn start(&mut self, now: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn progress(&self, now: f64) -> f64 {
        let Some(started) = self.started_at else {
            return 0.0;
        };
        let elapsed = now - started - self.delay_ms;
        if elapsed <= 0.0 {
            return 0.0;
        }
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}
