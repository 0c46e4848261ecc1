use hotbind_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a human-readable chord like `"Ctrl+F2"`, `"Alt+Shift+Z"` or
/// `"Option+Period"` into a [`KeyBind`].
///
/// Modifier aliases:
/// - `"Cmd"` / `"Command"` -> `Super` on macOS, `Ctrl` elsewhere
/// - `"Option"` / `"Opt"` / `"Alt"` -> `Alt`
/// - `"Control"` / `"Ctrl"` -> `Ctrl`
/// - `"Win"` / `"Super"` / `"Meta"` -> `Super`
///
/// Every token but the last must be a modifier; the last token is the key.
/// Modifiers are kept in the order written, duplicates dropped.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    if s.trim().is_empty() {
        return Err(PlatformError::InvalidKeybind("empty keybind string".into()));
    }

    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
    let Some((key_token, modifier_tokens)) = tokens.split_last() else {
        return Err(PlatformError::InvalidKeybind("empty keybind string".into()));
    };

    if key_token.is_empty() {
        return Err(PlatformError::InvalidKeybind(format!(
            "keybind has no key component: '{s}'"
        )));
    }

    let mut modifiers = Vec::with_capacity(modifier_tokens.len());
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::InvalidKeybind(format!("unrecognized modifier: '{token}'"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

pub(super) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "backslash" => "\\".into(),
        "semicolon" => ";".into(),
        "minus" => "-".into(),
        "equal" | "equals" => "=".into(),
        "grave" | "backquote" => "`".into(),
        "quote" => "'".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "insert" | "ins" => "Insert".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        "pageup" | "pgup" => "PageUp".into(),
        "pagedown" | "pgdn" => "PageDown".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    format!("{upper}{}", chars.as_str())
                }
                None => lower,
            }
        }
    }
}
