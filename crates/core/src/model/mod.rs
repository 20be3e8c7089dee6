pub mod scene;
pub mod timeline;

pub use scene::{AssetState, Scene};
pub use timeline::{Channel, ModelError, Phase, Timeline};
