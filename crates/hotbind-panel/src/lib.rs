//! Hotkey settings panel core.
//!
//! Reconciles three views of each global hotkey: what the config store
//! holds, what the panel's key-combination fields display, and what is
//! registered with the process-wide [`HotkeyRegistry`]. Edits are staged in
//! the fields and only reach the registry and the store on commit.
//!
//! [`HotkeyRegistry`]: hotbind_platform::HotkeyRegistry

pub mod bindings;
pub mod definitions;
pub mod manager;
pub mod panel;
pub mod tracker;
pub mod view;


pub use bindings::{ActiveBindings, ActiveRegistration, BindOutcome};
pub use definitions::{find_definition, HotkeyDefinition, HotkeyId, DEFINITIONS};
pub use manager::{BindingManager, CommitReport};
pub use panel::HotkeysPanel;
pub use tracker::{ChangeTracker, Phase};
pub use view::{HotkeyView, MemoryView, ViewEvent};
