//! Preset records and capture.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::context::EditorContext;
use crate::value::SettingValue;

/// A named snapshot of controlled setting values.
///
/// Presets are stored in the plugin preferences document as an array of
/// tables, each carrying a name and a flat `settings` table:
///
/// ```toml
/// [[presets]]
/// name = "Daylight"
/// [presets.settings]
/// color_scheme = "Solarized Light"
/// font_face = "Iosevka"
/// font_size = 13
/// ```
///
/// A preset freshly captured from the active context has an empty name
/// until the user supplies one; presets are never persisted with an empty
/// name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Unique (by replace-on-save) name of the preset.
    pub name: String,

    /// Captured setting values, keyed by setting name.
    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,
}

impl Preset {
    /// Create a new preset with no captured settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: BTreeMap::new(),
        }
    }

    /// Add a setting value.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Capture a nameless preset from the active editing context.
    ///
    /// Each controlled setting the context can supply a value for is
    /// copied; settings the context does not have are left absent, which
    /// marks the preset for reconciliation on its next apply.
    pub fn capture(controlled: &[String], context: &dyn EditorContext) -> Self {
        let mut settings = BTreeMap::new();
        for name in controlled {
            if let Some(value) = context.setting(name) {
                settings.insert(name.clone(), value);
            }
        }

        Self {
            name: String::new(),
            settings,
        }
    }

    /// Get a captured setting value.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.settings.get(key)
    }

    /// Set a captured setting value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.settings.insert(key.into(), value.into());
    }

    /// Check whether the preset has a value for every listed setting.
    pub fn covers(&self, controlled: &[String]) -> bool {
        controlled.iter().all(|name| self.settings.contains_key(name))
    }
}
