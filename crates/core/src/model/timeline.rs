use scrollweave_protocol::{OutputKey, SharedStr, Value};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::easing::Easing;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("timeline {timeline:?} has no phases")]
    NoPhases { timeline: String },
    #[error(
        "timeline {timeline:?}: phase {index} range {start}..{end} is empty or reversed"
    )]
    EmptyPhaseRange {
        timeline: String,
        index: usize,
        start: f64,
        end: f64,
    },
    #[error("timeline {timeline:?}: phase {index} range {start}..{end} lies outside [0,1]")]
    PhaseOutOfRange {
        timeline: String,
        index: usize,
        start: f64,
        end: f64,
    },
    #[error(
        "timeline {timeline:?}: phase {index} starting at {start} overlaps the previous phase ending at {previous_end}"
    )]
    OverlappingPhases {
        timeline: String,
        index: usize,
        start: f64,
        previous_end: f64,
    },
    #[error("timeline {timeline:?}: channel {key:?} interpolates between mismatched value kinds")]
    ChannelKindMismatch { timeline: String, key: OutputKey },
}

/// One interpolated output within a phase: `key` goes from `from` to `to`
/// as the phase's eased local progress goes 0 → 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub key: OutputKey,
    pub from: Value,
    pub to: Value,
}

impl Channel {
    pub fn new(key: OutputKey, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        Self {
            key,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A sub-range of a timeline's progress domain with its own easing and
/// interpolation targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Progress at which this phase begins, in `[0,1]`.
    pub start: f64,
    /// Progress at which this phase completes.
    pub end: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(rename = "outputs")]
    pub channels: Vec<Channel>,
}

impl Phase {
    pub fn new(start: f64, end: f64, easing: Easing) -> Self {
        Self {
            start,
            end,
            easing,
            channels: Vec::new(),
        }
    }

    /// Builder-style channel registration.
    pub fn channel(mut self, key: OutputKey, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        self.channels.push(Channel::new(key, from, to));
        self
    }

    /// Renormalize an absolute progress into this phase's local `[0,1]`.
    fn local(&self, progress: f64) -> f64 {
        ((progress - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// A named animation timeline: an ordered, non-overlapping sequence of
/// phases, all targeting one render-target node.
///
/// Evaluation is a pure function of progress — no hidden state, no
/// accumulation across calls. Below the first phase outputs clamp to that
/// phase's start values; above the last phase they clamp to its end values;
/// in a gap between phases the preceding phase's end values hold.
///
/// Deliberately not `Deserialize`: timelines are only built through
/// [`Timeline::new`] (or the config layer's validating specs), so invalid
/// phase tables cannot enter through serde.
#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    pub name: SharedStr,
    pub target: SharedStr,
    phases: Vec<Phase>,
    /// Asset this timeline's outputs depend on. While the asset is still
    /// loading the driver skips the timeline's writes entirely.
    pub requires: Option<SharedStr>,
}

impl Timeline {
    pub fn new(
        name: impl Into<SharedStr>,
        target: impl Into<SharedStr>,
        phases: Vec<Phase>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        let target = target.into();
        validate_phases(&name, &phases)?;
        Ok(Self {
            name,
            target,
            phases,
            requires: None,
        })
    }

    /// Gate this timeline on an asset being loaded.
    pub fn requiring(mut self, asset: impl Into<SharedStr>) -> Self {
        self.requires = Some(asset.into());
        self
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Overall `(start, end)` progress range covered by the phases.
    pub fn span(&self) -> (f64, f64) {
        let start = self.phases.first().map_or(0.0, |p| p.start);
        let end = self.phases.last().map_or(1.0, |p| p.end);
        (start, end)
    }

    /// Whether any channel drives procedural motion (anything beyond a
    /// plain opacity fade).
    pub fn is_procedural(&self) -> bool {
        self.phases
            .iter()
            .flat_map(|p| &p.channels)
            .any(|c| c.key.is_procedural())
    }

    /// Evaluate every channel at `progress` (clamped to `[0,1]`).
    ///
    /// Results come back in phase/channel declaration order. A key animated
    /// by several phases yields one entry per phase; later entries win when
    /// the caller merges last-write-wins.
    pub fn evaluate(&self, progress: f64) -> Vec<(OutputKey, Value)> {
        let progress = progress.clamp(0.0, 1.0);
        let mut outputs = Vec::new();
        if let Some(first) = self.phases.first()
            && progress < first.start
        {
            // Before the timeline begins: clamp to the first phase's start
            // values, no extrapolation.
            for channel in &first.channels {
                outputs.push((channel.key.clone(), channel.from));
            }
            return outputs;
        }
        for phase in &self.phases {
            if progress < phase.start {
                // This phase and everything after it has not started; the
                // preceding phase's end values hold.
                break;
            }
            let eased = if progress >= phase.end {
                1.0
            } else {
                phase.easing.apply(phase.local(progress))
            };
            for channel in &phase.channels {
                outputs.push((channel.key.clone(), channel.from.lerp(channel.to, eased)));
            }
        }
        outputs
    }

    /// Evaluate a single key, honoring the last-write-wins rule internally.
    pub fn evaluate_key(&self, key: &OutputKey, progress: f64) -> Option<Value> {
        self.evaluate(progress)
            .into_iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .next_back()
    }
}

fn validate_phases(name: &SharedStr, phases: &[Phase]) -> Result<(), ModelError> {
    if phases.is_empty() {
        return Err(ModelError::NoPhases {
            timeline: name.to_string(),
        });
    }
    let mut previous_end = 0.0;
    for (index, phase) in phases.iter().enumerate() {
        if !(phase.start < phase.end) {
            return Err(ModelError::EmptyPhaseRange {
                timeline: name.to_string(),
                index,
                start: phase.start,
                end: phase.end,
            });
        }
        if phase.start < 0.0 || phase.end > 1.0 || !phase.start.is_finite() || !phase.end.is_finite()
        {
            return Err(ModelError::PhaseOutOfRange {
                timeline: name.to_string(),
                index,
                start: phase.start,
                end: phase.end,
            });
        }
        if index > 0 && phase.start < previous_end {
            return Err(ModelError::OverlappingPhases {
                timeline: name.to_string(),
                index,
                start: phase.start,
                previous_end,
            });
        }
        for channel in &phase.channels {
            if !channel.from.same_kind(channel.to) {
                return Err(ModelError::ChannelKindMismatch {
                    timeline: name.to_string(),
                    key: channel.key.clone(),
                });
            }
        }
        previous_end = phase.end;
    }
    Ok(())
}
