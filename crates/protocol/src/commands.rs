use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::types::Vec2;
use crate::value::Value;

/// A single, stateless write into the render target.
///
/// The frame driver emits a `Vec<WriteCommand>` per tick. Renderers (DOM
/// style writer, scene-graph adapter) consume the list sequentially; each
/// command carries all the data it needs and never reads target state back.
/// Replaying the same list is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WriteCommand {
    /// Set a node's style opacity.
    SetOpacity { target: SharedStr, value: f64 },

    /// Set a node's translate offset in logical pixels.
    SetTranslate { target: SharedStr, offset: Vec2 },

    /// Set a node's rotation in degrees.
    SetRotation { target: SharedStr, degrees: f64 },

    /// Set a node's uniform scale factor.
    SetScale { target: SharedStr, factor: f64 },

    /// Set a uniform on the node's shader material. Scalar and vector
    /// uniforms share one command; the renderer dispatches on the value.
    SetUniform {
        target: SharedStr,
        name: SharedStr,
        value: Value,
    },

    /// Seek the node's baked animation clip to a frame (fractional frames
    /// interpolate inside the clip).
    SeekClip { target: SharedStr, frame: f64 },
}

impl WriteCommand {
    /// The render-target node this command writes to.
    pub fn target(&self) -> &SharedStr {
        match self {
            WriteCommand::SetOpacity { target, .. }
            | WriteCommand::SetTranslate { target, .. }
            | WriteCommand::SetRotation { target, .. }
            | WriteCommand::SetScale { target, .. }
            | WriteCommand::SetUniform { target, .. }
            | WriteCommand::SeekClip { target, .. } => target,
        }
    }
}
