//! The binding manager: load, stage, commit.

use hotbind_common::HotkeyEncoding;
use hotbind_config::schema::{KEY_USE_PUSH_TO_TALK, SECTION_AUDIO};
use hotbind_config::ConfigStore;
use hotbind_platform::HotkeyRegistry;
use tracing::{debug, info, warn};

use crate::bindings::{stored_encoding, ActiveBindings, BindOutcome};
use crate::definitions::{HotkeyId, DEFINITIONS};
use crate::tracker::{ChangeTracker, Phase};
use crate::view::HotkeyView;

/// Summary of one commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// Registrations released before re-evaluation.
    pub released: usize,
    pub registered: Vec<(HotkeyId, HotkeyEncoding)>,
    /// Chords the registry refused. They are still persisted.
    pub refused: Vec<(HotkeyId, HotkeyEncoding)>,
    /// Whether the store reported a successful flush.
    pub flushed: bool,
}

/// Mediates between the panel's fields, the active bindings and the store.
///
/// Nothing reaches the registry or the store until [`commit_all`](Self::commit_all).
pub struct BindingManager<'a, R: HotkeyRegistry, S: ConfigStore> {
    bindings: &'a mut ActiveBindings<R>,
    store: &'a mut S,
    tracker: ChangeTracker,
}

impl<'a, R: HotkeyRegistry, S: ConfigStore> BindingManager<'a, R, S> {
    pub fn new(bindings: &'a mut ActiveBindings<R>, store: &'a mut S) -> Self {
        Self {
            bindings,
            store,
            tracker: ChangeTracker::new(),
        }
    }

    pub fn bindings(&self) -> &ActiveBindings<R> {
        &*self.bindings
    }

    pub fn store(&self) -> &S {
        &*self.store
    }

    pub fn phase(&self) -> Phase {
        self.tracker.phase()
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    /// Populate every field and the toggle from the store.
    ///
    /// Notifications raised by the sets are drained while loading and never
    /// count as edits; the panel is clean afterwards.
    pub fn load_all<V: HotkeyView>(&mut self, view: &mut V) {
        self.tracker.begin_load();

        for def in DEFINITIONS.iter() {
            let encoding = stored_encoding(&*self.store, def);
            view.set_hotkey(def.id, encoding);
        }
        view.set_push_to_talk(self.store.get_bool(SECTION_AUDIO, KEY_USE_PUSH_TO_TALK));

        let suppressed = view.take_events().len();
        for _ in 0..suppressed {
            self.tracker.mark_changed();
        }

        self.tracker.finish_load();
        debug!(suppressed, "hotkey panel loaded");
    }

    /// Reconcile registry and store with the fields.
    ///
    /// Every definition is re-evaluated in table order: release, read,
    /// maybe register, persist. The store always ends up holding what the
    /// fields show, whether or not registration succeeded.
    pub fn commit_all<V: HotkeyView>(&mut self, view: &V) -> CommitReport {
        let mut report = CommitReport::default();

        for def in DEFINITIONS.iter() {
            if self.bindings.release(def.id).is_some() {
                report.released += 1;
            }

            let encoding = view.hotkey(def.id);

            match self.bindings.bind(def, encoding) {
                BindOutcome::Registered(_) => report.registered.push((def.id, encoding)),
                BindOutcome::Refused => report.refused.push((def.id, encoding)),
                BindOutcome::Skipped => {}
            }

            self.store.set_int(def.section, def.key, encoding.to_stored());
        }

        self.store
            .set_bool(SECTION_AUDIO, KEY_USE_PUSH_TO_TALK, view.push_to_talk());

        report.flushed = match self.store.flush() {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to persist hotkey settings: {e}");
                false
            }
        };

        self.tracker.mark_committed();
        info!(
            released = report.released,
            registered = report.registered.len(),
            refused = report.refused.len(),
            "hotkey settings applied"
        );
        report
    }

    /// Cancel. Nothing was mutated before commit, so there is nothing to undo.
    pub fn discard_changes(&mut self) {
        debug!(dirty = self.tracker.is_dirty(), "hotkey edits discarded");
    }

    /// Zero a field and mark the panel dirty, even if it was already zero.
    pub fn clear_field<V: HotkeyView>(&mut self, view: &mut V, id: HotkeyId) {
        view.set_hotkey(id, HotkeyEncoding::UNBOUND);
        self.tracker.mark_changed();
        debug!(hotkey = %id, "hotkey field cleared");
    }

    /// A field or toggle reported a change.
    pub fn note_change(&mut self) -> bool {
        self.tracker.mark_changed()
    }

    pub fn close(&mut self) {
        self.tracker.close();
    }
}
