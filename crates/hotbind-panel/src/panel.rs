//! The surface the panel shell drives.

use std::collections::BTreeMap;

use hotbind_common::HotkeyEncoding;
use hotbind_config::ConfigStore;
use hotbind_platform::HotkeyRegistry;
use tracing::trace;

use crate::bindings::ActiveBindings;
use crate::definitions::{HotkeyId, DEFINITIONS};
use crate::manager::{BindingManager, CommitReport};
use crate::view::{HotkeyView, ViewEvent};

/// A hotkey settings panel: the view plus the binding manager behind it.
///
/// The shell calls `on_*` methods in response to dialog events, strictly one
/// at a time from its event loop.
pub struct HotkeysPanel<'a, R: HotkeyRegistry, S: ConfigStore, V: HotkeyView> {
    manager: BindingManager<'a, R, S>,
    view: V,
}

impl<'a, R: HotkeyRegistry, S: ConfigStore, V: HotkeyView> HotkeysPanel<'a, R, S, V> {
    pub fn new(bindings: &'a mut ActiveBindings<R>, store: &'a mut S, view: V) -> Self {
        Self {
            manager: BindingManager::new(bindings, store),
            view,
        }
    }

    pub fn manager(&self) -> &BindingManager<'a, R, S> {
        &self.manager
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn on_open(&mut self) {
        self.manager.load_all(&mut self.view);
    }

    pub fn on_apply(&mut self) -> CommitReport {
        self.pump_events();
        self.manager.commit_all(&self.view)
    }

    /// Close without applying. Pending notifications are dropped.
    pub fn on_cancel(&mut self) {
        self.view.take_events();
        self.manager.discard_changes();
        self.manager.close();
    }

    pub fn on_field_changed(&mut self, id: HotkeyId) {
        if self.manager.note_change() {
            trace!(hotkey = %id, "hotkey field edited");
        }
    }

    pub fn on_toggle_changed(&mut self) {
        if self.manager.note_change() {
            trace!("push-to-talk toggled");
        }
    }

    pub fn on_clear(&mut self, id: HotkeyId) {
        self.manager.clear_field(&mut self.view, id);
        self.pump_events();
    }

    /// The user entered a chord into a field.
    pub fn on_set(&mut self, id: HotkeyId, encoding: HotkeyEncoding) {
        self.view.set_hotkey(id, encoding);
        self.pump_events();
    }

    /// The user flipped the push-to-talk checkbox.
    pub fn on_set_push_to_talk(&mut self, enabled: bool) {
        self.view.set_push_to_talk(enabled);
        self.pump_events();
    }

    pub fn handle_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::HotkeyChanged(id) => self.on_field_changed(id),
            ViewEvent::PushToTalkToggled => self.on_toggle_changed(),
        }
    }

    /// Deliver every queued view notification.
    pub fn pump_events(&mut self) {
        for event in self.view.take_events() {
            self.handle_event(event);
        }
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.manager.is_dirty()
    }

    /// Fields sharing a non-zero chord, as `(first, second, chord)` in
    /// definition order. Informational only; commit does not check it.
    pub fn conflicts(&self) -> Vec<(HotkeyId, HotkeyId, HotkeyEncoding)> {
        let mut first_seen: BTreeMap<HotkeyEncoding, HotkeyId> = BTreeMap::new();
        let mut conflicts = Vec::new();

        for def in DEFINITIONS.iter() {
            let encoding = self.view.hotkey(def.id);
            if encoding.is_unbound() {
                continue;
            }
            match first_seen.get(&encoding) {
                Some(first) => conflicts.push((*first, def.id, encoding)),
                None => {
                    first_seen.insert(encoding, def.id);
                }
            }
        }
        conflicts
    }
}
