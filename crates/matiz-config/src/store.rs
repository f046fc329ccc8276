//! The persisted preset store document.

use toml::Value;

use crate::backend::PreferenceStore;
use crate::error::ConfigError;
use crate::preset::Preset;

/// Settings a preset captures and applies when the user has not configured
/// their own list.
pub const DEFAULT_CONTROLLED_SETTINGS: &[&str] = &["color_scheme", "font_face", "font_size"];

/// Document key for the configurable controlled-settings list.
pub const KEY_CONTROLLED_SETTINGS: &str = "controlled_settings";

/// Document key for the preset list.
pub const KEY_PRESETS: &str = "presets";

/// Document key for the current preset index.
pub const KEY_CURRENT_PRESET: &str = "current_preset";

/// Decoded view of the plugin preferences document.
///
/// The store is an ordered list of presets plus a current-index pointer,
/// loaded fresh from the preference backend at the start of every
/// controller invocation and written back before the invocation ends. The
/// backend is the single source of truth; nothing is cached across
/// invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetStore {
    /// Setting names a preset captures and applies.
    pub controlled_settings: Vec<String>,

    /// Ordered preset list.
    pub presets: Vec<Preset>,

    /// Index of the last-applied preset. May drift after deletes; it is
    /// clamped back into bounds whenever the list shrinks under it.
    pub current_preset: usize,
}

impl PresetStore {
    /// Decode the store from a preference document.
    ///
    /// Absent keys take their defaults: the built-in controlled settings,
    /// an empty preset list, and index 0.
    pub fn load(prefs: &dyn PreferenceStore) -> Result<Self, ConfigError> {
        let controlled_settings = match prefs.get(KEY_CONTROLLED_SETTINGS) {
            Some(value) => value.try_into()?,
            None => DEFAULT_CONTROLLED_SETTINGS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        };

        let presets = match prefs.get(KEY_PRESETS) {
            Some(value) => value.try_into()?,
            None => Vec::new(),
        };

        let current_preset = match prefs.get(KEY_CURRENT_PRESET) {
            Some(value) => value.try_into()?,
            None => 0,
        };

        Ok(Self {
            controlled_settings,
            presets,
            current_preset,
        })
    }

    /// Encode the preset list and current index back into the document and
    /// flush it.
    ///
    /// The controlled-settings list is user configuration and is never
    /// written back.
    pub fn write(&self, prefs: &mut dyn PreferenceStore) -> Result<(), ConfigError> {
        prefs.set(KEY_PRESETS, Value::try_from(&self.presets)?);
        prefs.set(
            KEY_CURRENT_PRESET,
            Value::Integer(self.current_preset as i64),
        );
        prefs.flush()
    }

    /// Number of stored presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check whether the store holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Get a preset by index.
    pub fn get(&self, index: usize) -> Option<&Preset> {
        self.presets.get(index)
    }

    /// Names of the stored presets, in order.
    pub fn names(&self) -> Vec<String> {
        self.presets.iter().map(|p| p.name.clone()).collect()
    }

    /// Index of the first preset with the given name.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.name == name)
    }

    /// Insert a preset, replacing the first entry with the same name.
    ///
    /// Returns `true` if an existing entry was overwritten in place,
    /// `false` if the preset was appended.
    pub fn upsert(&mut self, preset: Preset) -> bool {
        if let Some(existing) = self.presets.iter_mut().find(|p| p.name == preset.name) {
            *existing = preset;
            true
        } else {
            self.presets.push(preset);
            false
        }
    }

    /// Remove the preset at `index`.
    ///
    /// The current index is left untouched unless the removal leaves it out
    /// of bounds, in which case it is clamped to the last entry (0 when the
    /// list empties). Returns `None` when `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Preset> {
        if index >= self.presets.len() {
            return None;
        }

        let removed = self.presets.remove(index);

        if self.current_preset >= self.presets.len() {
            self.current_preset = self.presets.len().saturating_sub(1);
        }

        Some(removed)
    }

    /// Wrap an index onto the preset list.
    ///
    /// An index past the end wraps to 0 and a negative index wraps to the
    /// last entry (a single-step wrap, not modulo). Returns `None` when the
    /// list is empty.
    pub fn wrap_index(&self, index: isize) -> Option<usize> {
        let count = self.presets.len();
        if count == 0 {
            return None;
        }

        let count = count as isize;
        let wrapped = if index >= count {
            0
        } else if index < 0 {
            count - 1
        } else {
            index
        };

        Some(wrapped as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;

    fn two_presets() -> PresetStore {
        PresetStore {
            controlled_settings: DEFAULT_CONTROLLED_SETTINGS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            presets: vec![
                Preset::new("A").with_setting("color_scheme", "Monokai"),
                Preset::new("B").with_setting("color_scheme", "Solarized"),
            ],
            current_preset: 0,
        }
    }

    #[test]
    fn test_load_defaults_from_empty_document() {
        let prefs = MemoryStore::new();
        let store = PresetStore::load(&prefs).unwrap();

        assert_eq!(store.controlled_settings, DEFAULT_CONTROLLED_SETTINGS);
        assert!(store.is_empty());
        assert_eq!(store.current_preset, 0);
    }

    #[test]
    fn test_load_custom_controlled_settings() {
        let mut prefs = MemoryStore::new();
        prefs.set(
            KEY_CONTROLLED_SETTINGS,
            Value::try_from(vec!["color_scheme", "line_padding"]).unwrap(),
        );

        let store = PresetStore::load(&prefs).unwrap();
        assert_eq!(store.controlled_settings, vec!["color_scheme", "line_padding"]);
    }

    #[test]
    fn test_write_then_load_roundtrip() {
        let mut prefs = MemoryStore::new();
        let mut store = two_presets();
        store.current_preset = 1;

        store.write(&mut prefs).unwrap();
        let loaded = PresetStore::load(&prefs).unwrap();

        assert_eq!(loaded.presets, store.presets);
        assert_eq!(loaded.current_preset, 1);
    }

    #[test]
    fn test_write_leaves_controlled_settings_alone() {
        let mut prefs = MemoryStore::new();
        two_presets().write(&mut prefs).unwrap();

        assert_eq!(prefs.get(KEY_CONTROLLED_SETTINGS), None);
    }

    #[test]
    fn test_upsert_overwrites_first_match_in_place() {
        let mut store = two_presets();

        let overwrote = store.upsert(Preset::new("A").with_setting("font_size", 15));
        assert!(overwrote);
        assert_eq!(store.len(), 2);
        // Slot 0 is still "A", with the new payload.
        assert_eq!(store.presets[0].name, "A");
        assert_eq!(store.presets[0].get("color_scheme"), None);
    }

    #[test]
    fn test_upsert_appends_new_name() {
        let mut store = two_presets();

        let overwrote = store.upsert(Preset::new("C"));
        assert!(!overwrote);
        assert_eq!(store.names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_remove_keeps_in_bounds_current() {
        let mut store = two_presets();
        store.current_preset = 0;

        let removed = store.remove(0).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(store.names(), vec!["B"]);
        assert_eq!(store.current_preset, 0);
    }

    #[test]
    fn test_remove_clamps_dangling_current() {
        let mut store = two_presets();
        store.current_preset = 1;

        store.remove(1).unwrap();
        assert_eq!(store.current_preset, 0);

        store.remove(0).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.current_preset, 0);
    }

    #[test]
    fn test_remove_out_of_bounds_is_none() {
        let mut store = two_presets();
        assert!(store.remove(2).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_wrap_index() {
        let store = two_presets();

        assert_eq!(store.wrap_index(0), Some(0));
        assert_eq!(store.wrap_index(1), Some(1));
        assert_eq!(store.wrap_index(2), Some(0));
        assert_eq!(store.wrap_index(-1), Some(1));
        // Single-step wrap, not modulo.
        assert_eq!(store.wrap_index(7), Some(0));
    }

    #[test]
    fn test_wrap_index_empty_list() {
        let store = PresetStore {
            controlled_settings: Vec::new(),
            presets: Vec::new(),
            current_preset: 0,
        };
        assert_eq!(store.wrap_index(0), None);
        assert_eq!(store.wrap_index(-1), None);
    }

    #[test]
    fn test_find() {
        let store = two_presets();
        assert_eq!(store.find("B"), Some(1));
        assert_eq!(store.find("missing"), None);
    }
}
