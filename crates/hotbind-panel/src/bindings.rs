//! The process-wide table of active registrations.
//!
//! [`ActiveBindings`] owns the registry and lives as long as the host
//! application. Settings panels come and go and borrow it while open, so a
//! registration made in one panel session is still live in the next.

use std::collections::BTreeMap;

use hotbind_common::HotkeyEncoding;
use hotbind_config::ConfigStore;
use hotbind_platform::{HotkeyHandle, HotkeyRegistry};
use tracing::{debug, info, warn};

use crate::definitions::{HotkeyDefinition, HotkeyId, DEFINITIONS};

/// A live registration for one definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRegistration {
    pub encoding: HotkeyEncoding,
    pub handle: HotkeyHandle,
}

/// What [`ActiveBindings::bind`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// Definition disabled or chord unbound; the registry was not called.
    Skipped,
    Registered(HotkeyHandle),
    /// The registry refused the chord. Not an error: the next commit retries.
    Refused,
}

/// At most one registration per [`HotkeyId`], keyed by definition.
#[derive(Debug)]
pub struct ActiveBindings<R: HotkeyRegistry> {
    registry: R,
    active: BTreeMap<HotkeyId, ActiveRegistration>,
}

impl<R: HotkeyRegistry> ActiveBindings<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            active: BTreeMap::new(),
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn active(&self, id: HotkeyId) -> Option<&ActiveRegistration> {
        self.active.get(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Unregister and forget the registration for `id`, if any.
    pub fn release(&mut self, id: HotkeyId) -> Option<ActiveRegistration> {
        let registration = self.active.remove(&id)?;
        if !self.registry.unregister(registration.handle) {
            warn!(hotkey = %id, handle = %registration.handle, "registry had already dropped handle");
        }
        debug!(hotkey = %id, encoding = %registration.encoding, "hotkey released");
        Some(registration)
    }

    /// Register `encoding` for `def` if it is enabled and bound.
    ///
    /// Any existing registration for the definition is released first.
    pub fn bind(&mut self, def: &HotkeyDefinition, encoding: HotkeyEncoding) -> BindOutcome {
        self.release(def.id);

        if !def.enabled || encoding.is_unbound() {
            return BindOutcome::Skipped;
        }

        match self.registry.register(encoding, def.action) {
            Ok(handle) => {
                self.active
                    .insert(def.id, ActiveRegistration { encoding, handle });
                debug!(hotkey = %def.id, %encoding, %handle, "hotkey bound");
                BindOutcome::Registered(handle)
            }
            Err(e) => {
                warn!(hotkey = %def.id, %encoding, "could not register hotkey: {e}");
                BindOutcome::Refused
            }
        }
    }

    /// Startup pass: bind every definition to its stored chord.
    ///
    /// Returns the number of registrations made.
    pub fn activate_from_store<S: ConfigStore + ?Sized>(&mut self, store: &S) -> usize {
        let registered = DEFINITIONS
            .iter()
            .filter(|def| {
                let encoding = stored_encoding(store, def);
                matches!(self.bind(def, encoding), BindOutcome::Registered(_))
            })
            .count();
        info!(registered, "hotkeys activated from config");
        registered
    }

    /// Unregister everything. Called on host teardown.
    pub fn release_all(&mut self) {
        let ids: Vec<HotkeyId> = self.active.keys().copied().collect();
        for id in ids {
            self.release(id);
        }
    }
}

impl<R: HotkeyRegistry> Drop for ActiveBindings<R> {
    fn drop(&mut self) {
        self.release_all();
    }
}

/// Read a definition's chord from the store.
///
/// Missing keys are unbound. Values that cannot be an encoding are logged
/// and read as unbound.
pub fn stored_encoding<S: ConfigStore + ?Sized>(store: &S, def: &HotkeyDefinition) -> HotkeyEncoding {
    match store.get_int(def.section, def.key) {
        None => HotkeyEncoding::UNBOUND,
        Some(value) => HotkeyEncoding::from_stored(value).unwrap_or_else(|| {
            warn!(
                section = def.section,
                key = def.key,
                value,
                "stored hotkey out of range, treating as unbound"
            );
            HotkeyEncoding::UNBOUND
        }),
    }
}
