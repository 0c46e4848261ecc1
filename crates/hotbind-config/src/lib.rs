//! Hotbind configuration store.
//!
//! Settings live in a sectioned TOML document (`[Audio]`, `[Publish]`, ...)
//! whose hotkey entries are integer chord encodings. Missing keys read as
//! zero, unknown sections are preserved on write, and validation problems
//! are logged rather than rejected so a hand-edited file never locks the
//! user out of the settings panel.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hotbind_config::{ConfigStore, TomlStore};
//! use hotbind_config::schema::{KEY_ZOOM_IN_SCENE_HOTKEY, SECTION_PUBLISH};
//!
//! let mut store = TomlStore::open_default().expect("failed to open config");
//! store.set_int(SECTION_PUBLISH, KEY_ZOOM_IN_SCENE_HOTKEY, 0x0371);
//! store.flush().expect("failed to save config");
//! ```

pub mod keybinds;
pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod toml_store;
pub mod toml_writer;
pub mod validation;

// Re-export core types for convenience
pub use schema::ConfigDocument;
pub use store::{ConfigStore, MemoryStore};
pub use toml_store::TomlStore;
pub use toml_writer::save_document_to_path;
