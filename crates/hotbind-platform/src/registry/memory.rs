use std::collections::{BTreeMap, HashSet};

use hotbind_common::{Action, HotkeyEncoding, PlatformError};
use tracing::debug;

use super::handle::HotkeyHandle;
use super::HotkeyRegistry;

/// One call made against a [`MemoryRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryCall {
    Register {
        encoding: HotkeyEncoding,
        action: Action,
        /// `None` when the registration was refused.
        handle: Option<HotkeyHandle>,
    },
    Unregister(HotkeyHandle),
}

/// In-process hotkey table.
///
/// Behaves like an OS registry: a chord can be held by one live handle at a
/// time, and chords [`reserve`](Self::reserve)d on behalf of other processes
/// are refused. Every call is recorded for inspection.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    next_handle: u64,
    live: BTreeMap<HotkeyHandle, (HotkeyEncoding, Action)>,
    reserved: HashSet<HotkeyEncoding>,
    calls: Vec<RegistryCall>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a chord as held by something outside this process.
    pub fn reserve(&mut self, encoding: HotkeyEncoding) {
        self.reserved.insert(encoding);
    }

    pub fn release_reservation(&mut self, encoding: HotkeyEncoding) {
        self.reserved.remove(&encoding);
    }

    pub fn is_reserved(&self, encoding: HotkeyEncoding) -> bool {
        self.reserved.contains(&encoding)
    }

    /// Simulate the OS reporting a chord press.
    pub fn dispatch(&self, encoding: HotkeyEncoding) -> Option<Action> {
        self.live
            .values()
            .find(|(e, _)| *e == encoding)
            .map(|(_, action)| *action)
    }

    pub fn encoding_of(&self, handle: HotkeyHandle) -> Option<HotkeyEncoding> {
        self.live.get(&handle).map(|(e, _)| *e)
    }

    /// Live handles bound to `action`, oldest first.
    pub fn handles_for(&self, action: Action) -> Vec<HotkeyHandle> {
        self.live
            .iter()
            .filter(|(_, (_, a))| *a == action)
            .map(|(h, _)| *h)
            .collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn calls(&self) -> &[RegistryCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn is_held(&self, encoding: HotkeyEncoding) -> bool {
        self.reserved.contains(&encoding) || self.live.values().any(|(e, _)| *e == encoding)
    }
}

impl HotkeyRegistry for MemoryRegistry {
    fn register(
        &mut self,
        encoding: HotkeyEncoding,
        action: Action,
    ) -> Result<HotkeyHandle, PlatformError> {
        let result = if encoding.is_unbound() {
            Err(PlatformError::RegistrationRefused(
                "cannot register an unbound chord".into(),
            ))
        } else if self.is_held(encoding) {
            Err(PlatformError::RegistrationRefused(format!(
                "{encoding} is already bound"
            )))
        } else {
            self.next_handle += 1;
            let handle = HotkeyHandle::from_raw(self.next_handle);
            self.live.insert(handle, (encoding, action));
            debug!(%encoding, %handle, action = action.label(), "hotkey registered");
            Ok(handle)
        };

        self.calls.push(RegistryCall::Register {
            encoding,
            action,
            handle: result.as_ref().ok().copied(),
        });
        result
    }

    fn unregister(&mut self, handle: HotkeyHandle) -> bool {
        self.calls.push(RegistryCall::Unregister(handle));
        let removed = self.live.remove(&handle).is_some();
        if removed {
            debug!(%handle, "hotkey unregistered");
        }
        removed
    }
}
