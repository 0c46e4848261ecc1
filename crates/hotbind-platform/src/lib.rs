pub mod keymap;
pub mod registry;

pub use keymap::{
    encode_keybind, encoding_to_display, keybind_to_display, parse_hotkey, parse_keybind,
    KeyBind, Modifier,
};
pub use registry::{HotkeyHandle, HotkeyRegistry, MemoryRegistry, RegistryCall};
