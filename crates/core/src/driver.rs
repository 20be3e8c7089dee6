//! Frame scheduling and command emission.
//!
//! The driver owns the mounted scenes, coalesces incoming progress updates
//! between frames, and turns each tick into a flat list of [`WriteCommand`]s
//! for the render layer to apply. It never touches the DOM or a GPU itself.

use std::collections::HashMap;

use scrollweave_protocol::{MotionPreference, OutputKey, SharedStr, Value, WriteCommand};

use crate::model::{Scene, Timeline};

/// Handle to a mounted scene. Stale handles (after unmount) are ignored by
/// every driver method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(u64);

#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
    pub motion: MotionPreference,
}

#[derive(Debug)]
struct MountedScene {
    scene: Scene,
    progress: f64,
}

/// Coalescing frame driver.
///
/// Progress updates arrive at event rate (scroll, pointer) and are folded
/// into per-scene state; [`FrameDriver::tick`] runs at most once per frame
/// and emits commands only when something changed since the previous tick.
#[derive(Debug)]
pub struct FrameDriver {
    options: DriverOptions,
    scenes: Vec<(SceneId, MountedScene)>,
    next_id: u64,
    pending: bool,
}

impl FrameDriver {
    pub fn new(options: DriverOptions) -> Self {
        Self {
            options,
            scenes: Vec::new(),
            next_id: 0,
            pending: false,
        }
    }

    pub fn motion(&self) -> MotionPreference {
        self.options.motion
    }

    /// Register a scene and schedule its initial frame.
    pub fn mount(&mut self, scene: Scene) -> SceneId {
        let id = SceneId(self.next_id);
        self.next_id += 1;
        log::debug!("mount scene {:?} ({} timelines)", scene.name(), scene.len());
        self.scenes.push((id, MountedScene {
            scene,
            progress: 0.0,
        }));
        self.pending = true;
        id
    }

    /// Remove a scene, returning it if the handle was live.
    pub fn unmount(&mut self, id: SceneId) -> Option<Scene> {
        let index = self.scenes.iter().position(|(sid, _)| *sid == id)?;
        let (_, mounted) = self.scenes.remove(index);
        log::debug!("unmount scene {:?}", mounted.scene.name());
        Some(mounted.scene)
    }

    /// Record the latest progress for a scene. Multiple calls between ticks
    /// overwrite each other; only the newest value is evaluated. Returns
    /// false for a stale handle.
    pub fn queue_progress(&mut self, id: SceneId, raw: f64) -> bool {
        let Some((_, mounted)) = self.scenes.iter_mut().find(|(sid, _)| *sid == id) else {
            return false;
        };
        let clamped = raw.clamp(0.0, 1.0);
        if mounted.progress != clamped {
            mounted.progress = clamped;
            self.pending = true;
        }
        true
    }

    /// Mark an asset loaded inside a scene and schedule a frame so the
    /// newly unlocked timelines get written at the current progress.
    pub fn set_asset_ready(&mut self, id: SceneId, asset: &str) -> bool {
        let Some((_, mounted)) = self.scenes.iter_mut().find(|(sid, _)| *sid == id) else {
            return false;
        };
        if mounted.scene.set_asset_ready(asset) {
            log::debug!("asset {asset:?} ready in scene {:?}", mounted.scene.name());
            self.pending = true;
            true
        } else {
            false
        }
    }

    /// Evaluate every mounted scene at its queued progress and emit the
    /// merged command list. Returns an empty list when nothing changed
    /// since the last tick. For each `(target, key)` pair the last write
    /// in declaration order wins.
    pub fn tick(&mut self) -> Vec<WriteCommand> {
        if !self.pending {
            return Vec::new();
        }
        self.pending = false;

        let mut order: Vec<(SharedStr, OutputKey, Value)> = Vec::new();
        let mut index: HashMap<(SharedStr, OutputKey), usize> = HashMap::new();
        for (_, mounted) in &self.scenes {
            for (target, key, value) in evaluate_scene(
                &mounted.scene,
                mounted.progress,
                self.options.motion,
            ) {
                let slot = (target.clone(), key.clone());
                match index.get(&slot) {
                    Some(&at) => order[at] = (target, key, value),
                    None => {
                        index.insert(slot, order.len());
                        order.push((target, key, value));
                    }
                }
            }
        }

        order
            .into_iter()
            .filter_map(|(target, key, value)| command_for(target, key, value))
            .collect()
    }
}

/// Evaluate one scene, applying the motion preference.
///
/// Under reduced motion, procedural timelines are replaced by a plain
/// opacity ramp over the same progress span: content still appears and
/// disappears where it would, but no transforms, clip scrubbing, or shader
/// uniforms are written. A target whose opacity is authored anywhere in the
/// scene keeps that curve; the synthetic ramp is only for targets with no
/// opacity of their own, so it can never overwrite an authored fade.
fn evaluate_scene(
    scene: &Scene,
    progress: f64,
    motion: MotionPreference,
) -> Vec<(SharedStr, OutputKey, Value)> {
    if !motion.is_reduced() {
        return scene.evaluate(progress);
    }
    let mut outputs = Vec::new();
    for timeline in scene.timelines() {
        if !scene.is_runnable(timeline) {
            continue;
        }
        if !timeline.is_procedural() {
            for (key, value) in timeline.evaluate(progress) {
                outputs.push((timeline.target.clone(), key, value));
            }
            continue;
        }
        if has_authored_opacity(scene, &timeline.target) {
            // Keep only the timeline's own opacity outputs; other
            // timelines supply the rest via the normal merge.
            for (key, value) in timeline.evaluate(progress) {
                if key == OutputKey::Opacity {
                    outputs.push((timeline.target.clone(), key, value));
                }
            }
            continue;
        }
        outputs.push((
            timeline.target.clone(),
            OutputKey::Opacity,
            Value::Scalar(span_ramp(timeline, progress)),
        ));
    }
    outputs
}

/// Whether any runnable timeline in the scene animates this target's
/// opacity directly.
fn has_authored_opacity(scene: &Scene, target: &SharedStr) -> bool {
    scene.timelines().iter().any(|timeline| {
        timeline.target == *target
            && scene.is_runnable(timeline)
            && timeline
                .phases()
                .iter()
                .flat_map(|phase| &phase.channels)
                .any(|channel| channel.key == OutputKey::Opacity)
    })
}

/// Linear fade-in over a timeline's progress span, the opacity stand-in
/// for procedural motion on targets that never fade on their own.
fn span_ramp(timeline: &Timeline, progress: f64) -> f64 {
    let (start, end) = timeline.span();
    ((progress.clamp(0.0, 1.0) - start) / (end - start)).clamp(0.0, 1.0)
}

fn command_for(target: SharedStr, key: OutputKey, value: Value) -> Option<WriteCommand> {
    let command = match key {
        OutputKey::Opacity => WriteCommand::SetOpacity {
            target,
            value: value.as_scalar()?,
        },
        OutputKey::Translate => WriteCommand::SetTranslate {
            target,
            offset: value.as_vec2()?,
        },
        OutputKey::Scale => WriteCommand::SetScale {
            target,
            factor: value.as_scalar()?,
        },
        OutputKey::RotationDeg => WriteCommand::SetRotation {
            target,
            degrees: value.as_scalar()?,
        },
        OutputKey::ClipFrame => WriteCommand::SeekClip {
            target,
            frame: value.as_scalar()?,
        },
        OutputKey::Uniform(name) => WriteCommand::SetUniform {
            target,
            name,
            value,
        },
    };
    Some(command)
}
