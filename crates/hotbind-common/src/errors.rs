use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config write error: {0}")]
    WriteError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("invalid keybind: {0}")]
    InvalidKeybind(String),

    #[error("hotkey registration refused: {0}")]
    RegistrationRefused(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HotbindError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown hotkey: {0}")]
    UnknownHotkey(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("Publish.ZoomInSceneHotkey = -1".into());
        assert_eq!(
            err.to_string(),
            "config validation error: Publish.ZoomInSceneHotkey = -1"
        );

        let err = ConfigError::WriteError("read-only filesystem".into());
        assert_eq!(err.to_string(), "config write error: read-only filesystem");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::RegistrationRefused("0x0371 already bound".into());
        assert_eq!(
            err.to_string(),
            "hotkey registration refused: 0x0371 already bound"
        );

        let err = PlatformError::InvalidKeybind("empty keybind string".into());
        assert_eq!(err.to_string(), "invalid keybind: empty keybind string");
    }

    #[test]
    fn hotbind_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: HotbindError = config_err.into();
        assert!(matches!(err, HotbindError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn hotbind_error_from_platform() {
        let platform_err = PlatformError::NotSupported("wayland".into());
        let err: HotbindError = platform_err.into();
        assert!(matches!(err, HotbindError::Platform(_)));
        assert!(err.to_string().contains("wayland"));
    }

    #[test]
    fn hotbind_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HotbindError = io_err.into();
        assert!(matches!(err, HotbindError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn hotbind_error_other_variants() {
        let err = HotbindError::UnknownHotkey("ZoomSideways".into());
        assert_eq!(err.to_string(), "unknown hotkey: ZoomSideways");

        let err = HotbindError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
