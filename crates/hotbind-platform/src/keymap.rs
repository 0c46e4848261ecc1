mod codec;
mod display;
mod parse;
mod types;

pub use codec::{decode_encoding, encode_keybind, parse_hotkey};
pub use display::{encoding_to_display, keybind_to_display};
pub use parse::parse_keybind;
pub use types::{KeyBind, Modifier};

#[cfg(test)]
mod tests {
    use super::*;
    use hotbind_common::HotkeyEncoding;

    #[test]
    fn parse_simple_keybind() {
        let kb = parse_keybind("Ctrl+G").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "G");
    }

    #[test]
    fn parse_multi_modifier_keybind() {
        let kb = parse_keybind("Alt+Shift+z").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Alt, Modifier::Shift]);
        assert_eq!(kb.key, "Z");
    }

    #[test]
    fn parse_option_becomes_alt() {
        let kb = parse_keybind("Option+Period").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Alt]);
        assert_eq!(kb.key, ".");
    }

    #[test]
    fn parse_cmd_modifier() {
        let kb = parse_keybind("Cmd+G").unwrap();
        if cfg!(target_os = "macos") {
            assert_eq!(kb.modifiers, vec![Modifier::Super]);
        } else {
            assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        }
    }

    #[test]
    fn parse_function_key_normalization() {
        assert_eq!(parse_keybind("f2").unwrap().key, "F2");
        assert_eq!(parse_keybind("Ctrl+Esc").unwrap().key, "Escape");
        assert_eq!(parse_keybind("Ctrl+Return").unwrap().key, "Enter");
        assert_eq!(parse_keybind("Shift+pgdn").unwrap().key, "PageDown");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(parse_keybind("").is_err());
        assert!(parse_keybind("   ").is_err());
        assert!(parse_keybind("Ctrl+").is_err());
        assert!(parse_keybind("Hyper+A").is_err());
    }

    #[test]
    fn parse_duplicate_modifiers_deduplicated() {
        let kb = parse_keybind("Ctrl+Ctrl+A").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
    }

    #[test]
    fn encode_ctrl_f2() {
        assert_eq!(parse_hotkey("Ctrl+F2").unwrap(), HotkeyEncoding::new(0x0271));
    }

    #[test]
    fn encode_modifier_flags() {
        assert_eq!(parse_hotkey("Shift+A").unwrap().raw(), 0x0141);
        assert_eq!(parse_hotkey("Alt+F").unwrap().raw(), 0x0446);
        assert_eq!(parse_hotkey("Super+1").unwrap().raw(), 0x0831);
        assert_eq!(parse_hotkey("Ctrl+Alt+Shift+Delete").unwrap().raw(), 0x072E);
    }

    #[test]
    fn encode_rejects_unknown_key() {
        assert!(parse_hotkey("Ctrl+Shift").is_err());
        assert!(parse_hotkey("F25").is_err());
        assert!(parse_hotkey("Ctrl+Banana").is_err());
    }

    #[test]
    fn decode_inverts_encode() {
        for chord in ["Ctrl+F2", "Alt+Shift+Z", "Space", "Ctrl+.", "Super+F24", "Alt+9"] {
            let encoding = parse_hotkey(chord).unwrap();
            let kb = decode_encoding(encoding).unwrap();
            assert_eq!(encode_keybind(&kb).unwrap(), encoding, "{chord}");
        }
    }

    #[test]
    fn decode_orders_modifiers_canonically() {
        let kb = decode_encoding(parse_hotkey("Shift+Ctrl+K").unwrap()).unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
    }

    #[test]
    fn decode_rejects_unknown_bits() {
        assert!(decode_encoding(HotkeyEncoding::UNBOUND).is_none());
        assert!(decode_encoding(HotkeyEncoding::new(0x4170)).is_none());
        assert!(decode_encoding(HotkeyEncoding::new(0x1_0041)).is_none());
        assert!(decode_encoding(HotkeyEncoding::new(0x0007)).is_none());
    }

    #[test]
    fn display_unbound_and_opaque() {
        assert_eq!(encoding_to_display(HotkeyEncoding::UNBOUND), "None");
        assert_eq!(encoding_to_display(HotkeyEncoding::new(0x4170)), "0x4170");
    }

    #[test]
    fn display_keybind_platform() {
        let display = encoding_to_display(parse_hotkey("Ctrl+Shift+T").unwrap());
        if cfg!(target_os = "macos") {
            assert_eq!(display, "\u{2303}\u{21E7}T"); // ⌃⇧T
        } else {
            assert_eq!(display, "Ctrl+Shift+T");
        }
    }

    #[test]
    fn display_super_modifier_platform() {
        let kb = KeyBind {
            modifiers: vec![Modifier::Super],
            key: "Q".into(),
        };
        let display = keybind_to_display(&kb);

        if cfg!(target_os = "macos") {
            assert_eq!(display, "\u{2318}Q"); // ⌘Q
        } else if cfg!(target_os = "windows") {
            assert_eq!(display, "Win+Q");
        } else {
            assert_eq!(display, "Super+Q");
        }
    }

    #[test]
    fn keybind_serialization_roundtrip() {
        let kb = parse_keybind("Ctrl+Shift+T").unwrap();
        let json = serde_json::to_string(&kb).unwrap();
        let deserialized: KeyBind = serde_json::from_str(&json).unwrap();
        assert_eq!(kb, deserialized);
    }
}
