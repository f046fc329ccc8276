//! Preset and preference-store management for the matiz appearance switcher.
//!
//! matiz captures the current visual settings of an editing environment
//! (color scheme, font face, font size by default) as named presets,
//! persists them in a TOML preference document, and cycles, loads, saves,
//! and deletes them on demand.
//!
//! # Architecture
//!
//! - [`PreferenceStore`]: a flat key-value preference document, the single
//!   source of truth. [`FileStore`] persists to a TOML file; [`MemoryStore`]
//!   keeps everything in memory for tests and embedders.
//! - [`PresetStore`]: the decoded plugin document, an ordered list of
//!   [`Preset`] records plus a current-index pointer.
//! - [`PresetController`]: one per user invocation; reloads the store,
//!   performs cycle/load/save/delete, and flushes the result back.
//! - [`EditorContext`] and [`Prompt`]: the host collaborators (active view
//!   settings, quick-select list, text input) expressed as traits.
//!
//! # Example
//!
//! ```rust
//! use matiz_config::{
//!     Direction, MemoryStore, Preset, PresetController, PresetStore, SnapshotContext,
//! };
//!
//! // Seed a store with one preset.
//! let mut plugin = MemoryStore::new();
//! let mut store = PresetStore::load(&plugin).unwrap();
//! store.upsert(
//!     Preset::new("Night")
//!         .with_setting("color_scheme", "Monokai")
//!         .with_setting("font_face", "Iosevka")
//!         .with_setting("font_size", 13),
//! );
//! store.write(&mut plugin).unwrap();
//!
//! // Cycle applies the preset to the global preference document.
//! let mut controller =
//!     PresetController::new(plugin, MemoryStore::new(), SnapshotContext::new()).unwrap();
//! let switched = controller.cycle(Direction::Next).unwrap().unwrap();
//! assert_eq!(switched.name, "Night");
//! ```

mod backend;
mod context;
mod controller;
mod error;
mod preset;
mod store;
mod value;

/// Platform-specific paths for the preference documents.
pub mod paths;

pub use backend::{FileStore, MemoryStore, PreferenceStore};
pub use context::{EditorContext, SnapshotContext};
pub use controller::{Direction, PresetController, Prompt, Switched};
pub use error::ConfigError;
pub use preset::Preset;
pub use store::{
    DEFAULT_CONTROLLED_SETTINGS, KEY_CONTROLLED_SETTINGS, KEY_CURRENT_PRESET, KEY_PRESETS,
    PresetStore,
};
pub use value::SettingValue;
