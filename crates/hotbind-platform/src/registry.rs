//! Hotkey registry: binds encoded chords to [`Action`]s at the OS level.
//!
//! The registry is process-wide and outlives any settings panel. The
//! [`HotkeyRegistry`] trait is the seam a platform backend implements;
//! [`MemoryRegistry`] is the in-process implementation used by the settings
//! shell and by tests.
//!
//! [`Action`]: hotbind_common::Action

mod handle;
mod memory;

pub use handle::HotkeyHandle;
pub use memory::{MemoryRegistry, RegistryCall};

use hotbind_common::{Action, HotkeyEncoding, PlatformError};

/// Process-wide table of live OS-level hotkeys.
pub trait HotkeyRegistry {
    /// Bind `encoding` to `action`.
    ///
    /// Fails with [`PlatformError::RegistrationRefused`] when the chord cannot
    /// be bound, e.g. because another process already holds it.
    fn register(
        &mut self,
        encoding: HotkeyEncoding,
        action: Action,
    ) -> Result<HotkeyHandle, PlatformError>;

    /// Release a handle. Returns `false` if it was not live.
    fn unregister(&mut self, handle: HotkeyHandle) -> bool;
}

impl<R: HotkeyRegistry + ?Sized> HotkeyRegistry for &mut R {
    fn register(
        &mut self,
        encoding: HotkeyEncoding,
        action: Action,
    ) -> Result<HotkeyHandle, PlatformError> {
        (**self).register(encoding, action)
    }

    fn unregister(&mut self, handle: HotkeyHandle) -> bool {
        (**self).unregister(handle)
    }
}
