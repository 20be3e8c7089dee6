use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;

/// A named animation output.
///
/// The closed vocabulary that timelines interpolate and renderers know how
/// to write: style properties, transform fields, animation-clip time, and
/// arbitrary shader uniforms addressed by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKey {
    /// Style opacity in `[0,1]`.
    Opacity,
    /// Translate offset in logical pixels (a `Vec2` value).
    Translate,
    /// Uniform scale factor.
    Scale,
    /// Rotation around the render target's default axis, in degrees.
    RotationDeg,
    /// Seek position of a baked animation clip, in frames.
    ClipFrame,
    /// A shader uniform addressed by name (`uProgress`, `uOpacity`, …).
    Uniform(SharedStr),
}

impl OutputKey {
    pub fn uniform(name: impl Into<SharedStr>) -> Self {
        OutputKey::Uniform(name.into())
    }

    /// Whether this key drives procedural motion (transforms, clips,
    /// shaders) as opposed to a plain cross-fade. Reduced-motion mode
    /// suppresses every key for which this returns true.
    pub fn is_procedural(&self) -> bool {
        !matches!(self, OutputKey::Opacity)
    }
}
