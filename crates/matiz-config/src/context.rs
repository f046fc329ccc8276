//! Active editing context.

use std::collections::BTreeMap;

use crate::backend::PreferenceStore;
use crate::value::SettingValue;

/// Read-only view of the currently active editing context.
///
/// In a host editor this would be the active view's effective settings;
/// the CLI implements it with a snapshot of the global preferences
/// document taken at invocation start.
pub trait EditorContext {
    /// Current value of `name` in the active context, if set.
    fn setting(&self, name: &str) -> Option<SettingValue>;
}

/// An owned snapshot of context settings.
///
/// # Example
///
/// ```rust
/// use matiz_config::{EditorContext, SettingValue, SnapshotContext};
///
/// let context = SnapshotContext::new()
///     .with_setting("color_scheme", "Monokai")
///     .with_setting("font_size", 13);
///
/// assert_eq!(context.setting("font_size"), Some(SettingValue::from(13)));
/// assert_eq!(context.setting("font_face"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotContext {
    settings: BTreeMap<String, SettingValue>,
}

impl SnapshotContext {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a setting to the snapshot.
    pub fn with_setting(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.settings.insert(name.into(), value.into());
        self
    }

    /// Snapshot the listed settings out of a preference store.
    ///
    /// Non-scalar values are skipped; context settings are flat scalars.
    pub fn from_prefs(prefs: &dyn PreferenceStore, names: &[String]) -> Self {
        let mut settings = BTreeMap::new();
        for name in names {
            if let Some(value) = prefs.get(name).as_ref().and_then(SettingValue::from_toml) {
                settings.insert(name.clone(), value);
            }
        }

        Self { settings }
    }
}

impl EditorContext for SnapshotContext {
    fn setting(&self, name: &str) -> Option<SettingValue> {
        self.settings.get(name).cloned()
    }
}
