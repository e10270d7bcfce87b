//! Theme preference value and its string/icon mappings.
//!
//! DESIGN
//! ======
//! The persisted entry and the `data-theme` attribute are both plain strings
//! written by other code paths too, so parsing is strict and anything
//! unrecognized falls back to [`ThemePreference::Light`] at the call site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// The user's chosen visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Literal stored in `localStorage` and written to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve an optional raw value, defaulting to light when it is missing
    /// or not one of the two literals.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }

    /// Default Bootstrap Icons class for this mode.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "bi bi-sun-fill",
            Self::Dark => "bi bi-moon-fill",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is neither `"light"` nor `"dark"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPreference(pub String);

impl fmt::Display for UnknownPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme preference: {:?}", self.0)
    }
}

impl std::error::Error for UnknownPreference {}

impl FromStr for ThemePreference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownPreference(other.to_owned())),
        }
    }
}
