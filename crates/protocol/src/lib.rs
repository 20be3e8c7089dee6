pub mod commands;
pub mod keys;
pub mod shared_str;
pub mod types;
pub mod value;

pub use commands::WriteCommand;
pub use keys::OutputKey;
pub use shared_str::SharedStr;
pub use types::{ElementRect, MotionPreference, Vec2, Viewport};
pub use value::Value;
