//! Read-only summary of the stored bindings for `hotbind show`.

use std::io::{self, Write};

use hotbind_common::HotkeyEncoding;
use hotbind_config::schema::{KEY_USE_PUSH_TO_TALK, SECTION_AUDIO};
use hotbind_config::ConfigStore;
use hotbind_panel::bindings::stored_encoding;
use hotbind_panel::DEFINITIONS;
use hotbind_platform::encoding_to_display;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BindingRow {
    pub name: &'static str,
    pub section: &'static str,
    pub key: &'static str,
    pub encoding: HotkeyEncoding,
    pub display: String,
    /// Whether applying registers this hotkey globally.
    pub registers: bool,
}

#[derive(Debug, Serialize)]
pub struct BindingsReport {
    pub push_to_talk: bool,
    pub hotkeys: Vec<BindingRow>,
}

pub fn collect<S: ConfigStore + ?Sized>(store: &S) -> BindingsReport {
    let hotkeys = DEFINITIONS
        .iter()
        .map(|def| {
            let encoding = stored_encoding(store, def);
            BindingRow {
                name: def.name,
                section: def.section,
                key: def.key,
                encoding,
                display: encoding_to_display(encoding),
                registers: def.enabled,
            }
        })
        .collect();

    BindingsReport {
        push_to_talk: store.get_bool(SECTION_AUDIO, KEY_USE_PUSH_TO_TALK),
        hotkeys,
    }
}

pub fn write_table<W: Write>(out: &mut W, report: &BindingsReport) -> io::Result<()> {
    for row in &report.hotkeys {
        writeln!(
            out,
            "{:<18} {:<20} {:<8} {}",
            row.name,
            row.display,
            row.encoding.to_string(),
            if row.registers { "global" } else { "audio" }
        )?;
    }
    writeln!(
        out,
        "{:<18} {}",
        "UsePushToTalk",
        if report.push_to_talk { "on" } else { "off" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotbind_config::schema::{KEY_MUTE_MIC_HOTKEY, KEY_ZOOM_IN_SCENE_HOTKEY, SECTION_PUBLISH};
    use hotbind_config::MemoryStore;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_int(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY, 0x0271)
            .with_int(SECTION_AUDIO, KEY_MUTE_MIC_HOTKEY, 0x4170)
            .with_int(SECTION_AUDIO, KEY_USE_PUSH_TO_TALK, 1)
    }

    #[test]
    fn collects_every_definition_in_order() {
        let report = collect(&store());
        let names: Vec<_> = report.hotkeys.iter().map(|r| r.name).collect();
        let expected: Vec<_> = DEFINITIONS.iter().map(|d| d.name).collect();
        assert_eq!(names, expected);
        assert!(report.push_to_talk);

        let zoom = report.hotkeys.iter().find(|r| r.name == "ZoomInScene").unwrap();
        assert_eq!(zoom.encoding, HotkeyEncoding::new(0x0271));
        assert!(zoom.registers);
        let mute = report.hotkeys.iter().find(|r| r.name == "MuteMic").unwrap();
        assert_eq!(mute.display, "0x4170");
        assert!(!mute.registers);
    }

    #[test]
    fn json_carries_raw_encodings() {
        let json = serde_json::to_value(collect(&store())).unwrap();
        assert_eq!(json["push_to_talk"], true);
        let zoom = json["hotkeys"]
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["name"] == "ZoomInScene")
            .unwrap();
        assert_eq!(zoom["encoding"], 0x0271);
        assert_eq!(zoom["section"], "Publish");
    }

    #[test]
    fn table_lists_unbound_as_none() {
        let mut out = Vec::new();
        write_table(&mut out, &collect(&MemoryStore::new())).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("PushToTalk"));
        assert!(text.contains("None"));
        assert!(text.trim_end().ends_with("off"));
    }
}
