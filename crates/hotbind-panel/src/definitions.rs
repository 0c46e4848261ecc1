//! The static, ordered table of logical hotkeys.
//!
//! Load and commit walk [`DEFINITIONS`] front to back, so table order is the
//! order in which the registry and the store see calls.

use std::fmt;

use hotbind_common::Action;
use hotbind_config::schema::{
    KEY_MUTE_DESKTOP_HOTKEY, KEY_MUTE_MIC_HOTKEY, KEY_PUSH_TO_TALK_HOTKEY,
    KEY_PUSH_TO_TALK_HOTKEY_2, KEY_SWITCH_DISPLAY_MODE_HOTKEY, KEY_ZOOM_IN_SCENE_HOTKEY,
    KEY_ZOOM_OUT_SCENE_HOTKEY, SECTION_AUDIO, SECTION_PUBLISH,
};

/// Identifies one key-combination field on the panel.
///
/// Discriminants index into [`DEFINITIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HotkeyId {
    PushToTalk,
    PushToTalk2,
    MuteMic,
    MuteDesktop,
    SwitchDisplayMode,
    ZoomInScene,
    ZoomOutScene,
}

impl HotkeyId {
    pub fn definition(self) -> &'static HotkeyDefinition {
        &DEFINITIONS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }
}

impl fmt::Display for HotkeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A logical hotkey: where it is persisted and what it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyDefinition {
    pub id: HotkeyId,
    pub name: &'static str,
    pub section: &'static str,
    pub key: &'static str,
    /// Whether commit registers this hotkey with the registry. Disabled
    /// definitions are still loaded and persisted.
    pub enabled: bool,
    pub action: Action,
}

/// Every hotkey the panel edits, in load/commit order.
///
/// The audio chords are persisted here but bound at runtime by the audio
/// pipeline, so only the publish chords are registered by this panel.
pub static DEFINITIONS: [HotkeyDefinition; 7] = [
    HotkeyDefinition {
        id: HotkeyId::PushToTalk,
        name: "PushToTalk",
        section: SECTION_AUDIO,
        key: KEY_PUSH_TO_TALK_HOTKEY,
        enabled: false,
        action: Action::PushToTalk,
    },
    HotkeyDefinition {
        id: HotkeyId::PushToTalk2,
        name: "PushToTalk2",
        section: SECTION_AUDIO,
        key: KEY_PUSH_TO_TALK_HOTKEY_2,
        enabled: false,
        action: Action::PushToTalk,
    },
    HotkeyDefinition {
        id: HotkeyId::MuteMic,
        name: "MuteMic",
        section: SECTION_AUDIO,
        key: KEY_MUTE_MIC_HOTKEY,
        enabled: false,
        action: Action::MuteMic,
    },
    HotkeyDefinition {
        id: HotkeyId::MuteDesktop,
        name: "MuteDesktop",
        section: SECTION_AUDIO,
        key: KEY_MUTE_DESKTOP_HOTKEY,
        enabled: false,
        action: Action::MuteDesktop,
    },
    HotkeyDefinition {
        id: HotkeyId::SwitchDisplayMode,
        name: "SwitchDisplayMode",
        section: SECTION_PUBLISH,
        key: KEY_SWITCH_DISPLAY_MODE_HOTKEY,
        enabled: true,
        action: Action::SwitchDisplayMode,
    },
    HotkeyDefinition {
        id: HotkeyId::ZoomInScene,
        name: "ZoomInScene",
        section: SECTION_PUBLISH,
        key: KEY_ZOOM_IN_SCENE_HOTKEY,
        enabled: true,
        action: Action::ZoomInScene,
    },
    HotkeyDefinition {
        id: HotkeyId::ZoomOutScene,
        name: "ZoomOutScene",
        section: SECTION_PUBLISH,
        key: KEY_ZOOM_OUT_SCENE_HOTKEY,
        enabled: true,
        action: Action::ZoomOutScene,
    },
];

/// Look a definition up by name, ignoring ASCII case.
pub fn find_definition(name: &str) -> Option<&'static HotkeyDefinition> {
    DEFINITIONS
        .iter()
        .find(|def| def.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotbind_config::schema::HOTKEY_KEYS;

    #[test]
    fn table_order_matches_discriminants() {
        for (i, def) in DEFINITIONS.iter().enumerate() {
            assert_eq!(def.id as usize, i, "{}", def.name);
            assert_eq!(def.id.definition(), def);
        }
    }

    #[test]
    fn every_stored_hotkey_has_a_definition() {
        let keys: Vec<(&str, &str)> = DEFINITIONS.iter().map(|d| (d.section, d.key)).collect();
        assert_eq!(keys, HOTKEY_KEYS.to_vec());
    }

    #[test]
    fn only_publish_hotkeys_are_enabled() {
        let enabled: Vec<HotkeyId> = DEFINITIONS
            .iter()
            .filter(|d| d.enabled)
            .map(|d| d.id)
            .collect();
        assert_eq!(
            enabled,
            vec![
                HotkeyId::SwitchDisplayMode,
                HotkeyId::ZoomInScene,
                HotkeyId::ZoomOutScene
            ]
        );
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        assert_eq!(
            find_definition("zoominscene").map(|d| d.id),
            Some(HotkeyId::ZoomInScene)
        );
        assert_eq!(
            find_definition("SwitchDisplayMode").map(|d| d.action),
            Some(Action::SwitchDisplayMode)
        );
        assert!(find_definition("ZoomSideways").is_none());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(HotkeyId::MuteDesktop.to_string(), "MuteDesktop");
    }
}
