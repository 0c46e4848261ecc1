//! Line-oriented front end for the hotkey panel.
//!
//! Each input line is one dialog event. The panel is opened on start,
//! `apply` commits, `cancel` throws edits away and reloads.

use std::io::{BufRead, Write};

use hotbind_common::{HotbindError, HotkeyEncoding, Result};
use hotbind_config::ConfigStore;
use hotbind_panel::{find_definition, ActiveBindings, HotkeyId, HotkeyView, HotkeysPanel, MemoryView};
use hotbind_platform::{encoding_to_display, parse_hotkey, HotkeyRegistry, MemoryRegistry};
use tracing::debug;

const HELP: &str = "\
commands:
  show                 list every hotkey field
  set <name> <chord>   enter a chord, e.g. `set ZoomInScene Ctrl+F2` or a hex encoding
  clear <name>         clear a field
  ptt on|off           toggle push-to-talk
  apply                commit fields to the registry and config file
  cancel               discard edits and reload from config
  press <chord>        simulate a key press against active registrations
  help                 this text
  quit                 leave (unapplied edits are discarded)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show,
    Set(HotkeyId, HotkeyEncoding),
    Clear(HotkeyId),
    PushToTalk(bool),
    Apply,
    Cancel,
    Press(HotkeyEncoding),
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "show" | "ls" => Command::Show,
        "set" => {
            let (name, chord) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| HotbindError::Other("usage: set <name> <chord>".into()))?;
            Command::Set(hotkey_id(name)?, parse_chord(chord.trim())?)
        }
        "clear" => Command::Clear(hotkey_id(rest)?),
        "ptt" => match rest.to_ascii_lowercase().as_str() {
            "on" | "true" | "1" => Command::PushToTalk(true),
            "off" | "false" | "0" => Command::PushToTalk(false),
            _ => return Err(HotbindError::Other("usage: ptt on|off".into())),
        },
        "apply" => Command::Apply,
        "cancel" => Command::Cancel,
        "press" => Command::Press(parse_chord(rest)?),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(HotbindError::Other(format!("unknown command '{other}'"))),
    };
    Ok(Some(command))
}

fn hotkey_id(name: &str) -> Result<HotkeyId> {
    find_definition(name)
        .map(|def| def.id)
        .ok_or_else(|| HotbindError::UnknownHotkey(name.to_string()))
}

/// A chord string (`Ctrl+F2`) or a raw hex encoding (`0x0271`).
fn parse_chord(s: &str) -> Result<HotkeyEncoding> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16)
            .map(HotkeyEncoding::new)
            .map_err(|e| HotbindError::Other(format!("invalid encoding '{s}': {e}")));
    }
    Ok(parse_hotkey(s)?)
}

/// Drive a panel session from `input` until `quit` or end of input.
pub fn run<S, I, O>(
    bindings: &mut ActiveBindings<MemoryRegistry>,
    store: &mut S,
    mut input: I,
    mut out: O,
) -> Result<()>
where
    S: ConfigStore,
    I: BufRead,
    O: Write,
{
    let mut panel = HotkeysPanel::new(bindings, store, MemoryView::new());
    panel.on_open();
    writeln!(out, "hotkey settings loaded; type `help` for commands")?;

    let mut line = String::new();
    loop {
        let marker = if panel.has_unsaved_changes() { "*" } else { "" };
        write!(out, "hotbind{marker}> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        debug!(?command, "shell command");

        match command {
            Command::Show => write_fields(&mut out, &panel)?,
            Command::Set(id, encoding) => {
                panel.on_set(id, encoding);
                writeln!(out, "{id} = {}", encoding_to_display(encoding))?;
                for (first, second, chord) in panel.conflicts() {
                    if first == id || second == id {
                        writeln!(
                            out,
                            "warning: {first} and {second} share {}",
                            encoding_to_display(chord)
                        )?;
                    }
                }
            }
            Command::Clear(id) => {
                panel.on_clear(id);
                writeln!(out, "{id} cleared")?;
            }
            Command::PushToTalk(enabled) => {
                panel.on_set_push_to_talk(enabled);
                writeln!(out, "push-to-talk {}", if enabled { "on" } else { "off" })?;
            }
            Command::Apply => {
                let report = panel.on_apply();
                writeln!(
                    out,
                    "applied: {} registered, {} released",
                    report.registered.len(),
                    report.released
                )?;
                for (id, encoding) in &report.refused {
                    writeln!(
                        out,
                        "warning: {id} ({}) could not be registered",
                        encoding_to_display(*encoding)
                    )?;
                }
                if !report.flushed {
                    writeln!(out, "warning: settings were not saved to disk")?;
                }
            }
            Command::Cancel => {
                panel.on_cancel();
                panel.on_open();
                writeln!(out, "edits discarded")?;
            }
            Command::Press(encoding) => {
                match panel.manager().bindings().registry().dispatch(encoding) {
                    Some(action) => writeln!(out, "-> {}", action.label())?,
                    None => writeln!(out, "{} is not bound", encoding_to_display(encoding))?,
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }

    if panel.has_unsaved_changes() {
        writeln!(out, "unapplied edits discarded")?;
    }
    panel.on_cancel();
    Ok(())
}

fn write_fields<W, R, S>(out: &mut W, panel: &HotkeysPanel<'_, R, S, MemoryView>) -> Result<()>
where
    W: Write,
    R: HotkeyRegistry,
    S: ConfigStore,
{
    let view = panel.view();
    for (id, encoding) in view.snapshot() {
        let active = panel.manager().bindings().active(id).is_some();
        writeln!(
            out,
            "{:<18} {:<20}{}",
            id.name(),
            encoding_to_display(encoding),
            if active { " (active)" } else { "" }
        )?;
    }
    writeln!(
        out,
        "{:<18} {}",
        "UsePushToTalk",
        if view.push_to_talk() { "on" } else { "off" }
    )?;
    Ok(())
}
