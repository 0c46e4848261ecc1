//! Chord <-> encoding conversion.
//!
//! Layout of an encoding, matching the classic hotkey edit control:
//! bits 0-7 hold the virtual-key code, bits 8-15 the modifier flags.

use hotbind_common::{HotkeyEncoding, PlatformError};

use super::parse::parse_keybind;
use super::types::{KeyBind, Modifier};

const FLAG_SHIFT: u32 = 0x01;
const FLAG_CTRL: u32 = 0x02;
const FLAG_ALT: u32 = 0x04;
const FLAG_SUPER: u32 = 0x08;
const FLAG_MASK: u32 = FLAG_SHIFT | FLAG_CTRL | FLAG_ALT | FLAG_SUPER;

const VK_0: u32 = 0x30;
const VK_A: u32 = 0x41;
const VK_F1: u32 = 0x70;
const FUNCTION_KEYS: u32 = 24;

const NAMED_KEYS: &[(&str, u32)] = &[
    ("Backspace", 0x08),
    ("Tab", 0x09),
    ("Enter", 0x0D),
    ("Escape", 0x1B),
    ("Space", 0x20),
    ("PageUp", 0x21),
    ("PageDown", 0x22),
    ("End", 0x23),
    ("Home", 0x24),
    ("Left", 0x25),
    ("Up", 0x26),
    ("Right", 0x27),
    ("Down", 0x28),
    ("Insert", 0x2D),
    ("Delete", 0x2E),
    (";", 0xBA),
    ("=", 0xBB),
    (",", 0xBC),
    ("-", 0xBD),
    (".", 0xBE),
    ("/", 0xBF),
    ("`", 0xC0),
    ("[", 0xDB),
    ("\\", 0xDC),
    ("]", 0xDD),
    ("'", 0xDE),
];

fn modifier_flag(modifier: Modifier) -> u32 {
    match modifier {
        Modifier::Shift => FLAG_SHIFT,
        Modifier::Ctrl => FLAG_CTRL,
        Modifier::Alt => FLAG_ALT,
        Modifier::Super => FLAG_SUPER,
    }
}

fn virtual_key(key: &str) -> Option<u32> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_uppercase() {
            return Some(VK_A + (c as u32 - 'A' as u32));
        }
        if c.is_ascii_digit() {
            return Some(VK_0 + (c as u32 - '0' as u32));
        }
    }

    if let Some(n) = key.strip_prefix('F').and_then(|n| n.parse::<u32>().ok()) {
        if (1..=FUNCTION_KEYS).contains(&n) {
            return Some(VK_F1 + n - 1);
        }
    }

    NAMED_KEYS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, vk)| *vk)
}

fn key_name(vk: u32) -> Option<String> {
    match vk {
        v if (VK_A..VK_A + 26).contains(&v) => char::from_u32(v).map(String::from),
        v if (VK_0..VK_0 + 10).contains(&v) => char::from_u32(v).map(String::from),
        v if (VK_F1..VK_F1 + FUNCTION_KEYS).contains(&v) => Some(format!("F{}", v - VK_F1 + 1)),
        v => NAMED_KEYS
            .iter()
            .find(|(_, code)| *code == v)
            .map(|(name, _)| (*name).to_string()),
    }
}

/// Encode a parsed chord.
pub fn encode_keybind(kb: &KeyBind) -> Result<HotkeyEncoding, PlatformError> {
    let vk = virtual_key(&kb.key)
        .ok_or_else(|| PlatformError::InvalidKeybind(format!("unsupported key: '{}'", kb.key)))?;
    let flags = kb
        .modifiers
        .iter()
        .fold(0, |acc, m| acc | modifier_flag(*m));
    Ok(HotkeyEncoding::new((flags << 8) | vk))
}

/// Parse a chord string straight to an encoding.
pub fn parse_hotkey(s: &str) -> Result<HotkeyEncoding, PlatformError> {
    encode_keybind(&parse_keybind(s)?)
}

/// Best-effort decode. `None` for unbound encodings, unknown flag bits or
/// unknown key codes.
pub fn decode_encoding(encoding: HotkeyEncoding) -> Option<KeyBind> {
    let raw = encoding.raw();
    if encoding.is_unbound() || raw > 0xFFFF {
        return None;
    }

    let flags = raw >> 8;
    if flags & !FLAG_MASK != 0 {
        return None;
    }

    let key = key_name(raw & 0xFF)?;
    let modifiers = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Super]
        .into_iter()
        .filter(|m| flags & modifier_flag(*m) != 0)
        .collect();

    Some(KeyBind { modifiers, key })
}
