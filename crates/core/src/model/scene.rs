use std::collections::HashMap;

use scrollweave_protocol::{OutputKey, SharedStr, Value};

use crate::model::Timeline;

/// Load state of an external asset (3D model, texture, image) that one or
/// more timelines depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetState {
    Pending,
    Ready,
}

/// The animation state owned by one mounted page section.
///
/// A scene is created when its section mounts and dropped when the section
/// unmounts; nothing in it outlives the owning component. Timelines keep
/// declaration order — when two timelines write the same `(target, key)`,
/// the later declaration wins per tick, matching the caller-defined
/// layering the model allows.
#[derive(Debug, Clone)]
pub struct Scene {
    name: SharedStr,
    timelines: Vec<Timeline>,
    assets: HashMap<SharedStr, AssetState>,
}

impl Scene {
    pub fn new(name: impl Into<SharedStr>) -> Self {
        Self {
            name: name.into(),
            timelines: Vec::new(),
            assets: HashMap::new(),
        }
    }

    pub fn name(&self) -> &SharedStr {
        &self.name
    }

    /// Add a timeline. If it requires an asset not yet declared, the asset
    /// is registered as pending.
    pub fn add_timeline(&mut self, timeline: Timeline) {
        if let Some(asset) = &timeline.requires
            && !self.assets.contains_key(asset.as_str())
        {
            self.assets.insert(asset.clone(), AssetState::Pending);
        }
        self.timelines.push(timeline);
    }

    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }

    /// Declare an asset ahead of time (pending until marked ready).
    pub fn declare_asset(&mut self, name: impl Into<SharedStr>) {
        self.assets.entry(name.into()).or_insert(AssetState::Pending);
    }

    /// Mark an asset as loaded. Returns false if the asset was never
    /// declared or required.
    pub fn set_asset_ready(&mut self, name: &str) -> bool {
        match self.assets.get_mut(name) {
            Some(state) => {
                *state = AssetState::Ready;
                true
            }
            None => false,
        }
    }

    pub fn asset_ready(&self, name: &str) -> bool {
        matches!(self.assets.get(name), Some(AssetState::Ready))
    }

    /// Whether a timeline's outputs can be written this tick.
    pub fn is_runnable(&self, timeline: &Timeline) -> bool {
        match &timeline.requires {
            Some(asset) => self.asset_ready(asset),
            None => true,
        }
    }

    /// Evaluate every runnable timeline at `progress`, in declaration
    /// order. Timelines gated on a pending asset contribute nothing — the
    /// frame simply skips their writes until the asset resolves.
    pub fn evaluate(&self, progress: f64) -> Vec<(SharedStr, OutputKey, Value)> {
        let mut outputs = Vec::new();
        for timeline in &self.timelines {
            if !self.is_runnable(timeline) {
                continue;
            }
            for (key, value) in timeline.evaluate(progress) {
                outputs.push((timeline.target.clone(), key, value));
            }
        }
        outputs
    }
}
