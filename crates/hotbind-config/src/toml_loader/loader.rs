//! Core TOML config loading: read from path or platform default.

use crate::schema::ConfigDocument;
use crate::validation;
use hotbind_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load a config document from a specific TOML file path.
///
/// After loading, the document is validated; if validation fails, a warning
/// is logged and the parsed document is returned as-is. Bad hotkey values
/// are read as unbound by the binding layer.
pub fn load_from_path(path: &Path) -> Result<ConfigDocument, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let document: ConfigDocument = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&document) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(document)
}

/// Load from `path`, writing the commented default file first if it is missing.
pub fn load_or_create(path: &Path) -> Result<ConfigDocument, ConfigError> {
    match load_from_path(path) {
        Ok(document) => Ok(document),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            load_from_path(path)
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/hotbind/hotkeys.toml`
/// On Linux: `~/.config/hotbind/hotkeys.toml`
pub fn load_default() -> Result<ConfigDocument, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path)
}
