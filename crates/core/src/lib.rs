pub mod config;
pub mod deeplink;
pub mod driver;
pub mod easing;
pub mod effects;
pub mod model;
pub mod sampler;

pub use driver::{DriverOptions, FrameDriver, SceneId};
pub use easing::Easing;
pub use model::{Channel, ModelError, Phase, Scene, Timeline};
pub use sampler::{IntroClock, PointerTracker, SamplerError, StickyWindow, TriggerWindow};
