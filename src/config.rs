//! Identifiers and literals the controller uses to find and mark up the page.
//!
//! Defaults match the markup rendered by [`ThemeToggle`](crate::components::ThemeToggle);
//! hosts with different markup override individual fields through
//! [`ThemeConfig::from_json`].

use serde::Deserialize;

use crate::error::ThemeError;
use crate::preference::ThemePreference;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage key holding the persisted preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme";
/// Root attribute read by the stylesheet.
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
/// Element id of the toggle control.
pub const DEFAULT_TOGGLE_ID: &str = "themeToggle";
/// Element id of the indicator icon.
pub const DEFAULT_ICON_ID: &str = "themeIcon";
/// Delay before initializing when the document has already loaded.
pub const DEFAULT_FALLBACK_DELAY_MS: u32 = 100;

/// Controller configuration. Every field has a default.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub icon_id: String,
    pub light_icon: String,
    pub dark_icon: String,
    pub fallback_delay_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            attribute: DEFAULT_ATTRIBUTE.into(),
            toggle_id: DEFAULT_TOGGLE_ID.into(),
            icon_id: DEFAULT_ICON_ID.into(),
            light_icon: ThemePreference::Light.icon_class().into(),
            dark_icon: ThemePreference::Dark.icon_class().into(),
            fallback_delay_ms: DEFAULT_FALLBACK_DELAY_MS,
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON object; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if the input is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Icon class string for the given mode.
    pub fn icon_for(&self, pref: ThemePreference) -> &str {
        match pref {
            ThemePreference::Light => &self.light_icon,
            ThemePreference::Dark => &self.dark_icon,
        }
    }
}
