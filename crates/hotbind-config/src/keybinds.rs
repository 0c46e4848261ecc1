//! Hotkey chord validation utilities.

use crate::schema::{ConfigDocument, HOTKEY_KEYS};
use hotbind_common::ConfigError;
use std::collections::HashMap;

/// Returns every bound hotkey as `("Section.Key", encoding)` pairs.
///
/// Missing, non-integer and zero (unbound) entries are skipped.
pub fn bound_hotkeys(document: &ConfigDocument) -> Vec<(String, i64)> {
    HOTKEY_KEYS
        .iter()
        .filter_map(|(section, key)| {
            document
                .get_int(section, key)
                .filter(|v| *v != 0)
                .map(|v| (format!("{section}.{key}"), v))
        })
        .collect()
}

/// Validate that no two hotkeys are bound to the same chord.
pub fn validate_no_duplicates(document: &ConfigDocument) -> Result<(), ConfigError> {
    let binds = bound_hotkeys(document);
    let mut seen: HashMap<i64, &str> = HashMap::new();

    for (name, encoding) in &binds {
        if let Some(existing_name) = seen.get(encoding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate hotkey {encoding:#06x}: assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(*encoding, name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        KEY_MUTE_MIC_HOTKEY, KEY_ZOOM_IN_SCENE_HOTKEY, KEY_ZOOM_OUT_SCENE_HOTKEY, SECTION_AUDIO,
        SECTION_PUBLISH,
    };

    #[test]
    fn empty_document_has_no_bindings() {
        assert!(bound_hotkeys(&ConfigDocument::new()).is_empty());
        assert!(validate_no_duplicates(&ConfigDocument::new()).is_ok());
    }

    #[test]
    fn zero_entries_are_skipped() {
        let mut doc = ConfigDocument::new();
        doc.set_int(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY, 0);
        doc.set_int(SECTION_PUBLISH, KEY_ZOOM_OUT_SCENE_HOTKEY, 0);
        assert!(bound_hotkeys(&doc).is_empty());
        assert!(validate_no_duplicates(&doc).is_ok());
    }

    #[test]
    fn detects_duplicate_chords_across_sections() {
        let mut doc = ConfigDocument::new();
        doc.set_int(SECTION_AUDIO, KEY_MUTE_MIC_HOTKEY, 0x0271);
        doc.set_int(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY, 0x0271);

        let err = validate_no_duplicates(&doc).unwrap_err().to_string();
        assert!(err.contains("duplicate hotkey 0x0271"));
        assert!(err.contains("Audio.MuteMicHotkey"));
        assert!(err.contains("Publish.ZoomInSceneHotkey"));
    }

    #[test]
    fn bound_hotkeys_uses_qualified_names() {
        let mut doc = ConfigDocument::new();
        doc.set_int(SECTION_PUBLISH, KEY_ZOOM_OUT_SCENE_HOTKEY, 0x0272);
        assert_eq!(
            bound_hotkeys(&doc),
            vec![("Publish.ZoomOutSceneHotkey".to_string(), 0x0272)]
        );
    }
}
