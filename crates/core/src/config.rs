//! Scene descriptions loaded from JSON or TOML.
//!
//! The on-disk format mirrors the model closely: a scene names its assets
//! and timelines, each timeline carries its phases. The format is sniffed
//! from the first non-whitespace byte so callers never pass a flag.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ModelError, Phase, Scene, Timeline};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scene description is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("failed to parse JSON scene: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse TOML scene: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSpec {
    pub name: String,
    #[serde(default)]
    pub assets: Vec<String>,
    #[serde(default)]
    pub timelines: Vec<TimelineSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSpec {
    pub name: String,
    pub target: String,
    #[serde(default)]
    pub requires: Option<String>,
    pub phases: Vec<Phase>,
}

impl SceneSpec {
    /// Validate the description into a runnable scene.
    pub fn into_scene(self) -> Result<Scene, ModelError> {
        let mut scene = Scene::new(self.name.as_str());
        for asset in &self.assets {
            scene.declare_asset(asset.as_str());
        }
        for spec in self.timelines {
            let mut timeline = Timeline::new(spec.name.as_str(), spec.target.as_str(), spec.phases)?;
            if let Some(asset) = spec.requires {
                timeline = timeline.requiring(asset.as_str());
            }
            scene.add_timeline(timeline);
        }
        Ok(scene)
    }
}

/// Parse a scene from raw bytes, sniffing JSON (`{`) versus TOML.
pub fn load_scene(bytes: &[u8]) -> Result<Scene, ConfigError> {
    let spec: SceneSpec = match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => serde_json::from_slice(bytes)?,
        _ => toml::from_str(std::str::from_utf8(bytes)?)?,
    };
    Ok(spec.into_scene()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollweave_protocol::OutputKey;

    const JSON_SCENE: &str = r#"{
        "name": "hero",
        "assets": ["paper-texture"],
        "timelines": [
            {
                "name": "title-fade",
                "target": "title",
                "phases": [
                    {
                        "start": 0.0,
                        "end": 0.5,
                        "easing": "ease-out-cubic",
                        "outputs": [
                            { "key": "opacity", "from": 0.0, "to": 1.0 }
                        ]
                    }
                ]
            }
        ]
    }"#;

    const TOML_SCENE: &str = r#"
name = "hero"
assets = ["paper-texture"]

[[timelines]]
name = "reveal"
target = "hero-canvas"
requires = "paper-texture"

[[timelines.phases]]
start = 0.2
end = 1.0
easing = "linear"

[[timelines.phases.outputs]]
key = { uniform = "uProgress" }
from = 0.0
to = 1.0
"#;

    #[test]
    fn loads_json_scenes() {
        let scene = load_scene(JSON_SCENE.as_bytes())
            .unwrap_or_else(|e| panic!("json scene rejected: {e}"));
        assert_eq!(scene.len(), 1);
        let outputs = scene.evaluate(0.5);
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].1, OutputKey::Opacity);
    }

    #[test]
    fn loads_toml_scenes() {
        let mut scene = load_scene(TOML_SCENE.as_bytes())
            .unwrap_or_else(|e| panic!("toml scene rejected: {e}"));
        assert!(scene.evaluate(0.5).is_empty());
        assert!(scene.set_asset_ready("paper-texture"));
        assert_eq!(scene.evaluate(0.5).len(), 1);
    }

    #[test]
    fn sniffing_tolerates_leading_whitespace() {
        let padded = format!("\n\t  {JSON_SCENE}");
        assert!(load_scene(padded.as_bytes()).is_ok());
    }

    #[test]
    fn invalid_phases_are_rejected_at_load() {
        let bad = r#"{
            "name": "broken",
            "timelines": [
                { "name": "t", "target": "x", "phases": [] }
            ]
        }"#;
        assert!(matches!(
            load_scene(bad.as_bytes()),
            Err(ConfigError::Model(ModelError::NoPhases { .. }))
        ));
    }

    #[test]
    fn non_finite_phase_bounds_are_rejected() {
        // TOML admits `nan` as a float; validation must refuse it before a
        // timeline can evaluate to NaN outputs.
        let bad = r#"
name = "broken"

[[timelines]]
name = "t"
target = "x"

[[timelines.phases]]
start = nan
end = 1.0
easing = "linear"

[[timelines.phases.outputs]]
key = "opacity"
from = 0.0
to = 1.0
"#;
        assert!(matches!(
            load_scene(bad.as_bytes()),
            Err(ConfigError::Model(_))
        ));
    }

    #[test]
    fn malformed_json_reports_a_parse_error() {
        assert!(matches!(
            load_scene(b"{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn non_utf8_toml_reports_an_encoding_error() {
        assert!(matches!(
            load_scene(&[0x6e, 0xff, 0xfe]),
            Err(ConfigError::Utf8(_)) | Err(ConfigError::Toml(_))
        ));
    }
}
