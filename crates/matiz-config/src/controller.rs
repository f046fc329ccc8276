//! The preset controller.
//!
//! One controller is constructed per user invocation. It owns the plugin
//! and global preference stores for the duration of the invocation, reloads
//! the preset store from the backend before every operation, applies the
//! requested mutation, and flushes the result back. It keeps no state of
//! its own across invocations; the backend is the single source of truth.

use crate::backend::PreferenceStore;
use crate::context::EditorContext;
use crate::error::ConfigError;
use crate::preset::Preset;
use crate::store::PresetStore;

/// Cycle direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Step to the next preset, wrapping past the end to the first.
    #[default]
    Next,
    /// Step to the previous preset, wrapping past the start to the last.
    Previous,
}

/// Host UI prompt primitives.
///
/// `None` means the user dismissed the prompt; a dismissed prompt is a
/// completed no-op, not an error.
pub trait Prompt {
    /// Present `items` as a quick-select list; return the chosen index.
    fn select(&mut self, title: &str, items: &[String]) -> Option<usize>;

    /// Ask the user for a line of text.
    fn input(&mut self, label: &str) -> Option<String>;
}

/// Outcome of switching to a preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switched {
    /// Index of the preset that was applied.
    pub index: usize,
    /// Name of the preset that was applied.
    pub name: String,
    /// Whether the preset was missing controlled settings and was re-saved
    /// with the gaps filled from the active context.
    pub reconciled: bool,
}

/// Drives the four preset operations against the preference backend.
///
/// # Example
///
/// ```rust
/// use matiz_config::{
///     Direction, MemoryStore, Preset, PresetController, PresetStore, SnapshotContext,
/// };
///
/// let mut plugin = MemoryStore::new();
/// let mut store = PresetStore::load(&plugin).unwrap();
/// store.upsert(Preset::new("Night").with_setting("color_scheme", "Monokai"));
/// store.upsert(Preset::new("Day").with_setting("color_scheme", "Solarized"));
/// store.write(&mut plugin).unwrap();
///
/// let mut controller =
///     PresetController::new(plugin, MemoryStore::new(), SnapshotContext::new()).unwrap();
/// let switched = controller.cycle(Direction::Next).unwrap().unwrap();
/// assert_eq!(switched.name, "Day");
/// ```
#[derive(Debug)]
pub struct PresetController<P, G, C> {
    plugin: P,
    global: G,
    context: C,
    store: PresetStore,
}

impl<P, G, C> PresetController<P, G, C>
where
    P: PreferenceStore,
    G: PreferenceStore,
    C: EditorContext,
{
    /// Build a controller for one invocation, loading the preset store
    /// from the plugin preference document.
    pub fn new(plugin: P, global: G, context: C) -> Result<Self, ConfigError> {
        let store = PresetStore::load(&plugin)?;
        Ok(Self {
            plugin,
            global,
            context,
            store,
        })
    }

    /// Reload the preset store from the backend, discarding the
    /// invocation-scoped copy.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        self.store = PresetStore::load(&self.plugin)?;
        Ok(())
    }

    /// The invocation-scoped view of the preset store.
    pub fn store(&self) -> &PresetStore {
        &self.store
    }

    /// Step the current preset one position in `direction` and apply it.
    ///
    /// No-op on an empty preset list.
    pub fn cycle(&mut self, direction: Direction) -> Result<Option<Switched>, ConfigError> {
        self.reload()?;

        let step: isize = match direction {
            Direction::Next => 1,
            Direction::Previous => -1,
        };

        self.switch_to(self.store.current_preset as isize + step)
    }

    /// Let the user pick a preset from a quick-select list and apply it.
    ///
    /// A dismissed prompt or an empty preset list is a completed no-op.
    pub fn load(&mut self, prompt: &mut dyn Prompt) -> Result<Option<Switched>, ConfigError> {
        self.reload()?;

        let names = self.store.names();
        if names.is_empty() {
            return Ok(None);
        }

        match prompt.select("Switch to preset", &names) {
            Some(choice) => self.switch_to(choice as isize),
            None => Ok(None),
        }
    }

    /// Capture the active context and save it under a user-supplied name.
    ///
    /// Returns the saved name, or `None` when the prompt was dismissed or
    /// the submitted name was empty (an empty name is silently discarded).
    pub fn save(&mut self, prompt: &mut dyn Prompt) -> Result<Option<String>, ConfigError> {
        self.reload()?;

        let captured = Preset::capture(&self.store.controlled_settings, &self.context);

        match prompt.input("Preset name") {
            Some(name) => self.save_captured(captured, &name),
            None => Ok(None),
        }
    }

    /// Capture the active context and save it under `name` directly.
    pub fn save_named(&mut self, name: &str) -> Result<Option<String>, ConfigError> {
        self.reload()?;

        let captured = Preset::capture(&self.store.controlled_settings, &self.context);
        self.save_captured(captured, name)
    }

    /// Let the user pick a preset from a quick-select list and delete it.
    ///
    /// Returns the deleted name; a dismissed prompt or an empty list is a
    /// completed no-op.
    pub fn delete(&mut self, prompt: &mut dyn Prompt) -> Result<Option<String>, ConfigError> {
        self.reload()?;

        let names = self.store.names();
        if names.is_empty() {
            return Ok(None);
        }

        match prompt.select("Delete preset", &names) {
            Some(choice) => self.delete_at(choice),
            None => Ok(None),
        }
    }

    /// Delete the preset at `index` and persist the shortened list.
    ///
    /// Out-of-bounds indices are a no-op. The current index is clamped only
    /// when the removal leaves it dangling.
    pub fn delete_at(&mut self, index: usize) -> Result<Option<String>, ConfigError> {
        match self.store.remove(index) {
            Some(removed) => {
                self.store.write(&mut self.plugin)?;
                Ok(Some(removed.name))
            }
            None => Ok(None),
        }
    }

    /// Delete the first preset named `name`.
    pub fn delete_named(&mut self, name: &str) -> Result<String, ConfigError> {
        self.reload()?;

        let index = self
            .store
            .find(name)
            .ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))?;

        // The index came from the freshly loaded store, so the removal
        // cannot miss.
        Ok(self.delete_at(index)?.unwrap_or_else(|| name.to_string()))
    }

    /// Apply the preset at `index` (wrapped onto the list) and persist the
    /// new current index.
    ///
    /// No-op on an empty list. When the preset is missing controlled
    /// settings, it is reconciled: re-saved under its own name with the
    /// gaps filled from the active context.
    pub fn switch_to(&mut self, index: isize) -> Result<Option<Switched>, ConfigError> {
        let Some(index) = self.store.wrap_index(index) else {
            return Ok(None);
        };

        let reconciled = self.apply(index)?;

        self.store.current_preset = index;
        self.store.write(&mut self.plugin)?;

        let name = self.store.presets[index].name.clone();
        Ok(Some(Switched {
            index,
            name,
            reconciled,
        }))
    }

    /// Write the preset's controlled settings into the global preference
    /// document and flush it.
    ///
    /// Returns whether reconciliation occurred. Reconciliation keeps a
    /// preset's stored payload in sync with reality after the
    /// controlled-settings list has grown: the healed preset takes its own
    /// values where present and the context's values where missing, and
    /// replaces the stored entry under the same name.
    fn apply(&mut self, index: usize) -> Result<bool, ConfigError> {
        let preset = self.store.presets[index].clone();

        let mut missing = false;
        for name in &self.store.controlled_settings {
            match preset.get(name) {
                Some(value) => self.global.set(name, value.to_toml()),
                None => missing = true,
            }
        }
        self.global.flush()?;

        if !missing {
            return Ok(false);
        }

        let mut healed = Preset::new(&preset.name);
        for name in &self.store.controlled_settings {
            let value = preset.get(name).cloned().or_else(|| self.context.setting(name));
            if let Some(value) = value {
                healed.set(name, value);
            }
        }
        self.store.upsert(healed);

        Ok(true)
    }

    /// Name the captured preset and upsert it into the store.
    ///
    /// An empty name silently discards the capture.
    fn save_captured(
        &mut self,
        mut captured: Preset,
        name: &str,
    ) -> Result<Option<String>, ConfigError> {
        if name.is_empty() {
            return Ok(None);
        }

        captured.name = name.to_string();

        // Re-read the list right before the write, mirroring the
        // read-then-write-whole-document discipline of every mutation.
        self.reload()?;
        self.store.upsert(captured);
        self.store.write(&mut self.plugin)?;

        Ok(Some(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use crate::context::SnapshotContext;
    use crate::value::SettingValue;

    /// Canned prompt answers for driving the controller in tests.
    struct CannedPrompt {
        selection: Option<usize>,
        text: Option<String>,
    }

    impl CannedPrompt {
        fn selecting(index: usize) -> Self {
            Self {
                selection: Some(index),
                text: None,
            }
        }

        fn dismissed() -> Self {
            Self {
                selection: None,
                text: None,
            }
        }

        fn typing(text: &str) -> Self {
            Self {
                selection: None,
                text: Some(text.to_string()),
            }
        }
    }

    impl Prompt for CannedPrompt {
        fn select(&mut self, _title: &str, _items: &[String]) -> Option<usize> {
            self.selection
        }

        fn input(&mut self, _label: &str) -> Option<String> {
            self.text.clone()
        }
    }

    fn seeded_plugin() -> MemoryStore {
        let mut plugin = MemoryStore::new();
        let mut store = PresetStore::load(&plugin).unwrap();
        store.upsert(
            Preset::new("A")
                .with_setting("color_scheme", "Monokai")
                .with_setting("font_face", "Iosevka")
                .with_setting("font_size", 13),
        );
        store.upsert(
            Preset::new("B")
                .with_setting("color_scheme", "Solarized")
                .with_setting("font_face", "Hack")
                .with_setting("font_size", 11),
        );
        store.current_preset = 0;
        store.write(&mut plugin).unwrap();
        plugin
    }

    fn controller(
        plugin: MemoryStore,
    ) -> PresetController<MemoryStore, MemoryStore, SnapshotContext> {
        PresetController::new(plugin, MemoryStore::new(), SnapshotContext::new()).unwrap()
    }

    #[test]
    fn test_cycle_next_applies_and_advances() {
        let mut controller = controller(seeded_plugin());

        let switched = controller.cycle(Direction::Next).unwrap().unwrap();
        assert_eq!(switched.index, 1);
        assert_eq!(switched.name, "B");
        assert!(!switched.reconciled);

        // B's settings landed in the global document.
        assert_eq!(
            controller.global.get("color_scheme"),
            Some(toml::Value::String("Solarized".to_string()))
        );
        assert_eq!(controller.store().current_preset, 1);
    }

    #[test]
    fn test_cycle_wraps_at_both_ends() {
        let mut controller = controller(seeded_plugin());

        // 0 -> 1 -> 0 going next.
        assert_eq!(controller.cycle(Direction::Next).unwrap().unwrap().index, 1);
        assert_eq!(controller.cycle(Direction::Next).unwrap().unwrap().index, 0);

        // 0 -> 1 going previous.
        let switched = controller.cycle(Direction::Previous).unwrap().unwrap();
        assert_eq!(switched.index, 1);
        assert_eq!(switched.name, "B");
    }

    #[test]
    fn test_cycle_on_empty_list_is_noop() {
        let mut controller = controller(MemoryStore::new());

        assert!(controller.cycle(Direction::Next).unwrap().is_none());
        assert_eq!(controller.store().current_preset, 0);
        // Nothing was applied to the global document.
        assert_eq!(controller.global.get("color_scheme"), None);
    }

    #[test]
    fn test_load_switches_to_selection() {
        let mut controller = controller(seeded_plugin());
        let mut prompt = CannedPrompt::selecting(1);

        let switched = controller.load(&mut prompt).unwrap().unwrap();
        assert_eq!(switched.name, "B");
        assert_eq!(controller.store().current_preset, 1);
    }

    #[test]
    fn test_load_dismissed_is_noop() {
        let mut controller = controller(seeded_plugin());
        let mut prompt = CannedPrompt::dismissed();

        assert!(controller.load(&mut prompt).unwrap().is_none());
        assert_eq!(controller.store().current_preset, 0);
    }

    #[test]
    fn test_save_captures_context_under_typed_name() {
        let plugin = seeded_plugin();
        let context = SnapshotContext::new()
            .with_setting("color_scheme", "Gruvbox")
            .with_setting("font_face", "Fira Code")
            .with_setting("font_size", 12);
        let mut controller =
            PresetController::new(plugin, MemoryStore::new(), context).unwrap();

        let mut prompt = CannedPrompt::typing("C");
        let saved = controller.save(&mut prompt).unwrap();
        assert_eq!(saved.as_deref(), Some("C"));

        let store = controller.store();
        assert_eq!(store.names(), vec!["A", "B", "C"]);
        assert_eq!(
            store.get(2).unwrap().get("color_scheme"),
            Some(&SettingValue::from("Gruvbox"))
        );
    }

    #[test]
    fn test_save_empty_name_is_silently_discarded() {
        let mut controller = controller(seeded_plugin());
        let mut prompt = CannedPrompt::typing("");

        assert!(controller.save(&mut prompt).unwrap().is_none());
        assert_eq!(controller.store().names(), vec!["A", "B"]);
    }

    #[test]
    fn test_save_named_overwrites_existing_name() {
        let plugin = seeded_plugin();
        let context = SnapshotContext::new()
            .with_setting("color_scheme", "Nord")
            .with_setting("font_face", "Iosevka")
            .with_setting("font_size", 13);
        let mut controller =
            PresetController::new(plugin, MemoryStore::new(), context).unwrap();

        controller.save_named("A").unwrap();
        controller.save_named("A").unwrap();

        let store = controller.store();
        assert_eq!(store.len(), 2, "repeated saves must overwrite, not append");
        assert_eq!(
            store.get(0).unwrap().get("color_scheme"),
            Some(&SettingValue::from("Nord"))
        );
    }

    #[test]
    fn test_delete_selected_entry() {
        let mut controller = controller(seeded_plugin());
        let mut prompt = CannedPrompt::selecting(0);

        let deleted = controller.delete(&mut prompt).unwrap();
        assert_eq!(deleted.as_deref(), Some("A"));
        assert_eq!(controller.store().names(), vec!["B"]);
        // Current index was in bounds and is untouched.
        assert_eq!(controller.store().current_preset, 0);
    }

    #[test]
    fn test_delete_named_missing_preset_errors() {
        let mut controller = controller(seeded_plugin());

        let result = controller.delete_named("nope");
        assert!(matches!(result, Err(ConfigError::PresetNotFound(_))));
    }

    #[test]
    fn test_switch_reconciles_missing_settings() {
        // "Sparse" predates the font_size controlled setting.
        let mut plugin = MemoryStore::new();
        let mut store = PresetStore::load(&plugin).unwrap();
        store.upsert(
            Preset::new("Sparse")
                .with_setting("color_scheme", "Monokai")
                .with_setting("font_face", "Iosevka"),
        );
        store.write(&mut plugin).unwrap();

        let context = SnapshotContext::new()
            .with_setting("color_scheme", "Whatever Is Active")
            .with_setting("font_face", "Active Font")
            .with_setting("font_size", 13);
        let mut controller = PresetController::new(plugin, MemoryStore::new(), context).unwrap();

        let switched = controller.switch_to(0).unwrap().unwrap();
        assert!(switched.reconciled);

        // The stored preset was healed under the same name: its own values
        // kept, the gap filled from the context.
        let healed = controller.store().get(0).unwrap();
        assert_eq!(healed.name, "Sparse");
        assert_eq!(healed.get("color_scheme"), Some(&SettingValue::from("Monokai")));
        assert_eq!(healed.get("font_size"), Some(&SettingValue::from(13)));

        // And the healed list was persisted.
        let reloaded = PresetStore::load(&controller.plugin).unwrap();
        assert_eq!(
            reloaded.get(0).unwrap().get("font_size"),
            Some(&SettingValue::from(13))
        );
    }

    #[test]
    fn test_switch_applies_only_present_settings() {
        let mut plugin = MemoryStore::new();
        let mut store = PresetStore::load(&plugin).unwrap();
        store.upsert(Preset::new("Partial").with_setting("color_scheme", "Monokai"));
        store.write(&mut plugin).unwrap();

        let mut controller =
            PresetController::new(plugin, MemoryStore::new(), SnapshotContext::new()).unwrap();
        controller.switch_to(0).unwrap().unwrap();

        assert_eq!(
            controller.global.get("color_scheme"),
            Some(toml::Value::String("Monokai".to_string()))
        );
        // Missing in the preset and in the context: not written.
        assert_eq!(controller.global.get("font_size"), None);
    }
}
