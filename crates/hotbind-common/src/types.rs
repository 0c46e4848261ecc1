use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque encoding of a key chord.
///
/// Zero means "unbound". The binding lifecycle only compares encodings for
/// equality and zero-ness; the keymap layer is the only place that looks
/// inside the bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotkeyEncoding(u32);

impl HotkeyEncoding {
    pub const UNBOUND: Self = Self(0);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn is_unbound(self) -> bool {
        self.0 == 0
    }

    /// Convert a value read from the config store.
    ///
    /// Returns `None` for negative values or values that do not fit in 32 bits.
    pub fn from_stored(value: i64) -> Option<Self> {
        u32::try_from(value).ok().map(Self)
    }

    /// The value written back to the config store.
    pub fn to_stored(self) -> i64 {
        i64::from(self.0)
    }
}

impl From<u32> for HotkeyEncoding {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for HotkeyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}
