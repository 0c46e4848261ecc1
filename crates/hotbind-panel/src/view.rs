//! The dialog seam: key-combination fields plus the push-to-talk toggle.

use std::collections::BTreeMap;

use hotbind_common::HotkeyEncoding;

use crate::definitions::{HotkeyId, DEFINITIONS};

/// A change notification raised by a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    HotkeyChanged(HotkeyId),
    PushToTalkToggled,
}

/// The panel's controls as the binding core sees them.
///
/// Native controls raise change notifications even for programmatic sets.
/// Implementations queue those and hand them over from
/// [`take_events`](Self::take_events); the panel decides whether they count
/// as user edits.
pub trait HotkeyView {
    fn hotkey(&self, id: HotkeyId) -> HotkeyEncoding;

    fn set_hotkey(&mut self, id: HotkeyId, encoding: HotkeyEncoding);

    fn push_to_talk(&self) -> bool;

    fn set_push_to_talk(&mut self, enabled: bool);

    /// Notifications raised since the last call.
    fn take_events(&mut self) -> Vec<ViewEvent> {
        Vec::new()
    }
}

/// Headless controls: one encoding per field and a checkbox.
///
/// Every set that changes a value queues the matching [`ViewEvent`].
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    fields: BTreeMap<HotkeyId, HotkeyEncoding>,
    push_to_talk: bool,
    events: Vec<ViewEvent>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of every field, in definition order.
    pub fn snapshot(&self) -> Vec<(HotkeyId, HotkeyEncoding)> {
        DEFINITIONS
            .iter()
            .map(|def| (def.id, self.hotkey(def.id)))
            .collect()
    }

    pub fn pending_events(&self) -> &[ViewEvent] {
        &self.events
    }
}

impl HotkeyView for MemoryView {
    fn hotkey(&self, id: HotkeyId) -> HotkeyEncoding {
        self.fields.get(&id).copied().unwrap_or_default()
    }

    fn set_hotkey(&mut self, id: HotkeyId, encoding: HotkeyEncoding) {
        if self.hotkey(id) != encoding {
            self.events.push(ViewEvent::HotkeyChanged(id));
        }
        self.fields.insert(id, encoding);
    }

    fn push_to_talk(&self) -> bool {
        self.push_to_talk
    }

    fn set_push_to_talk(&mut self, enabled: bool) {
        if self.push_to_talk != enabled {
            self.events.push(ViewEvent::PushToTalkToggled);
        }
        self.push_to_talk = enabled;
    }

    fn take_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }
}
