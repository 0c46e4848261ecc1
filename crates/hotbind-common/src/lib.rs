pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, HotbindError, PlatformError};
pub use types::HotkeyEncoding;

pub type Result<T> = std::result::Result<T, HotbindError>;
