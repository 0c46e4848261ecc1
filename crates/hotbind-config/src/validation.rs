//! Config validation.
//!
//! Checks hotkey value ranges, the push-to-talk flag, and chord uniqueness,
//! collecting every problem into a single `ConfigError`.

use crate::keybinds;
use crate::schema::{ConfigDocument, HOTKEY_KEYS, KEY_USE_PUSH_TO_TALK, SECTION_AUDIO};
use hotbind_common::ConfigError;
use toml::Value;

/// Run all validations on a document, collecting all errors.
pub fn validate(document: &ConfigDocument) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_hotkeys(&mut errors, document);
    validate_push_to_talk(&mut errors, document);

    if let Err(e) = keybinds::validate_no_duplicates(document) {
        errors.push(e.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_hotkeys(errors: &mut Vec<String>, document: &ConfigDocument) {
    for (section, key) in HOTKEY_KEYS {
        match document.value(section, key) {
            None => {}
            Some(Value::Integer(v)) => {
                if u32::try_from(*v).is_err() {
                    errors.push(format!(
                        "{section}.{key} = {v} is out of range [0, {}]",
                        u32::MAX
                    ));
                }
            }
            Some(other) => {
                errors.push(format!(
                    "{section}.{key} must be an integer, got {}",
                    other.type_str()
                ));
            }
        }
    }
}

fn validate_push_to_talk(errors: &mut Vec<String>, document: &ConfigDocument) {
    match document.value(SECTION_AUDIO, KEY_USE_PUSH_TO_TALK) {
        None | Some(Value::Boolean(_)) | Some(Value::Integer(0 | 1)) => {}
        Some(other) => errors.push(format!(
            "{SECTION_AUDIO}.{KEY_USE_PUSH_TO_TALK} must be 0, 1 or a boolean, got {other}"
        )),
    }
}
