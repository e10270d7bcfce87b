//! # theme-toggle
//!
//! Light/dark theme preference for server-rendered pages. Persists the
//! choice in `localStorage` under `"theme"`, mirrors it into the root
//! `data-theme` attribute and a Bootstrap Icons indicator, and flips it when
//! the toggle control is clicked.
//!
//! The controller talks to the page only through the [`PreferenceStore`] and
//! [`ThemeDom`] traits. Browser adapters live behind the `hydrate` feature;
//! in-memory implementations are always available for tests and headless
//! hosts.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod preference;
pub mod util;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use preference::ThemePreference;
pub use util::dom::{PreferenceStore, ThemeDom};
pub use util::memory::{MemoryDom, MemoryStore};
