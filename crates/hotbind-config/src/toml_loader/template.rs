//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> &'static str {
    r##"# Hotbind hotkey configuration
#
# Hotkeys are stored as encoded key chords; 0 means unbound.
# Low byte: virtual-key code. Next byte: Shift=1, Ctrl=2, Alt=4, Super=8.
# Example: Ctrl+F2 = 0x0271 = 625
#
# Prefer editing through `hotbind edit`, which re-registers the chords.

[Audio]
UsePushToTalk = 0
PushToTalkHotkey = 0
PushToTalkHotkey2 = 0
MuteMicHotkey = 0
MuteDesktopHotkey = 0

[Publish]
SwitchDisplayModeHotkey = 0
ZoomInSceneHotkey = 0
ZoomOutSceneHotkey = 0
"##
}
