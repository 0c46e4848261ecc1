//! Section/key names and the in-memory config document.

use serde::{Deserialize, Serialize};
use toml::{Table, Value};

pub const SECTION_AUDIO: &str = "Audio";
pub const SECTION_PUBLISH: &str = "Publish";

pub const KEY_USE_PUSH_TO_TALK: &str = "UsePushToTalk";
pub const KEY_PUSH_TO_TALK_HOTKEY: &str = "PushToTalkHotkey";
pub const KEY_PUSH_TO_TALK_HOTKEY_2: &str = "PushToTalkHotkey2";
pub const KEY_MUTE_MIC_HOTKEY: &str = "MuteMicHotkey";
pub const KEY_MUTE_DESKTOP_HOTKEY: &str = "MuteDesktopHotkey";
pub const KEY_SWITCH_DISPLAY_MODE_HOTKEY: &str = "SwitchDisplayModeHotkey";
pub const KEY_ZOOM_IN_SCENE_HOTKEY: &str = "ZoomInSceneHotkey";
pub const KEY_ZOOM_OUT_SCENE_HOTKEY: &str = "ZoomOutSceneHotkey";

/// Every `(section, key)` pair holding a hotkey encoding.
pub const HOTKEY_KEYS: [(&str, &str); 7] = [
    (SECTION_AUDIO, KEY_PUSH_TO_TALK_HOTKEY),
    (SECTION_AUDIO, KEY_PUSH_TO_TALK_HOTKEY_2),
    (SECTION_AUDIO, KEY_MUTE_MIC_HOTKEY),
    (SECTION_AUDIO, KEY_MUTE_DESKTOP_HOTKEY),
    (SECTION_PUBLISH, KEY_SWITCH_DISPLAY_MODE_HOTKEY),
    (SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY),
    (SECTION_PUBLISH, KEY_ZOOM_OUT_SCENE_HOTKEY),
];

/// A sectioned settings document.
///
/// Top-level tables are sections. Integer and boolean values are readable
/// through [`get_int`](Self::get_int); everything else is carried along
/// untouched so a save never drops settings owned by other subsystems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    sections: Table,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value lookup.
    pub fn value(&self, section: &str, key: &str) -> Option<&Value> {
        self.sections.get(section)?.get(key)
    }

    /// Read an integer. Booleans read as 0/1; other types read as `None`.
    pub fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        match self.value(section, key)? {
            Value::Integer(i) => Some(*i),
            Value::Boolean(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Write an integer, creating the section if needed.
    pub fn set_int(&mut self, section: &str, key: &str, value: i64) {
        let entry = self
            .sections
            .entry(section)
            .or_insert(Value::Table(Table::new()));

        if !entry.is_table() {
            tracing::warn!(section, "config entry is not a section, replacing it");
            *entry = Value::Table(Table::new());
        }

        if let Some(table) = entry.as_table_mut() {
            table.insert(key.to_string(), Value::Integer(value));
        }
    }

    /// Names of all sections present in the document.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .filter(|(_, v)| v.is_table())
            .map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_read_as_none() {
        let doc = ConfigDocument::new();
        assert_eq!(doc.get_int(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY), None);
    }

    #[test]
    fn set_then_get() {
        let mut doc = ConfigDocument::new();
        doc.set_int(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY, 0x0371);
        assert_eq!(
            doc.get_int(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY),
            Some(0x0371)
        );
        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["Publish"]);
    }

    #[test]
    fn booleans_read_as_ints() {
        let doc: ConfigDocument = toml::from_str("[Audio]\nUsePushToTalk = true\n").unwrap();
        assert_eq!(doc.get_int(SECTION_AUDIO, KEY_USE_PUSH_TO_TALK), Some(1));
    }

    #[test]
    fn strings_are_not_ints() {
        let doc: ConfigDocument = toml::from_str("[Publish]\nZoomInSceneHotkey = \"F2\"\n").unwrap();
        assert_eq!(doc.get_int(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY), None);
        assert!(doc.value(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY).is_some());
    }

    #[test]
    fn set_int_replaces_non_table_section() {
        let mut doc: ConfigDocument = toml::from_str("Publish = 3\n").unwrap();
        doc.set_int(SECTION_PUBLISH, KEY_ZOOM_OUT_SCENE_HOTKEY, 5);
        assert_eq!(doc.get_int(SECTION_PUBLISH, KEY_ZOOM_OUT_SCENE_HOTKEY), Some(5));
    }

    #[test]
    fn unknown_sections_survive_round_trip() {
        let src = "[Video]\nFPS = 30\nEncoder = \"x264\"\n\n[Publish]\nZoomInSceneHotkey = 881\n";
        let mut doc: ConfigDocument = toml::from_str(src).unwrap();
        doc.set_int(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY, 0);

        let out = toml::to_string_pretty(&doc).unwrap();
        let back: ConfigDocument = toml::from_str(&out).unwrap();
        assert_eq!(back.get_int("Video", "FPS"), Some(30));
        assert_eq!(
            back.value("Video", "Encoder").and_then(Value::as_str),
            Some("x264")
        );
        assert_eq!(back.get_int(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY), Some(0));
    }
}
