//! Theme preference controller.
//!
//! Reads the persisted preference, mirrors it into the root `data-theme`
//! attribute and the indicator icon, and wires the toggle control so each
//! click flips, persists, and re-applies the preference.
//!
//! DESIGN
//! ======
//! The `data-theme` attribute is the source of truth for "current" once the
//! page is running; storage is read only during initialization and written
//! only on toggle. Failures from either collaborator are logged and never
//! reach the caller, so a broken storage backend degrades to a
//! session-only toggle.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::preference::ThemePreference;
use crate::util::dom::{PreferenceStore, ThemeDom};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Set on the toggle control once a controller has attached its handler, so
/// a second controller on the same page does not attach another.
pub const BOUND_ATTRIBUTE: &str = "data-theme-bound";

/// State shared between the controller and the click handler it registers.
struct Shared<S, D> {
    store: Rc<S>,
    dom: Rc<D>,
    config: ThemeConfig,
}

impl<S: PreferenceStore, D: ThemeDom> Shared<S, D> {
    fn current(&self) -> ThemePreference {
        ThemePreference::resolve(self.dom.root_attribute(&self.config.attribute).as_deref())
    }

    fn stored(&self) -> ThemePreference {
        match self.store.get(&self.config.storage_key) {
            Ok(raw) => ThemePreference::resolve(raw.as_deref()),
            Err(e) => {
                log::warn!("theme preference unreadable, using default: {e}");
                ThemePreference::default()
            }
        }
    }

    fn apply(&self, pref: ThemePreference) {
        if let Err(e) = self.dom.set_root_attribute(&self.config.attribute, pref.as_str()) {
            log::warn!("failed to set {}: {e}", self.config.attribute);
        }

        let icon_id = &self.config.icon_id;
        if !self.dom.has_element(icon_id) {
            return;
        }
        let stale = self.config.icon_for(pref.toggled());
        let fresh = self.config.icon_for(pref);
        if let Err(e) = self.dom.replace_classes(icon_id, stale, fresh) {
            log::warn!("failed to update theme icon: {e}");
        }
    }

    fn toggle(&self) -> ThemePreference {
        let next = self.current().toggled();
        self.apply(next);
        if let Err(e) = self.store.set(&self.config.storage_key, next.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
        log::info!("theme changed to: {next}");
        next
    }
}

/// Keeps the root attribute, indicator icon, and persisted entry in sync.
///
/// Create one per page and call [`ThemeController::on_ready`] once the toggle
/// markup is mounted. Initialization and registration each run at most once.
pub struct ThemeController<S, D> {
    shared: Rc<Shared<S, D>>,
    initialized: Cell<bool>,
    registered: Cell<bool>,
}

impl<S, D> ThemeController<S, D>
where
    S: PreferenceStore + 'static,
    D: ThemeDom + 'static,
{
    pub fn new(store: Rc<S>, dom: Rc<D>, config: ThemeConfig) -> Self {
        Self {
            shared: Rc::new(Shared { store, dom, config }),
            initialized: Cell::new(false),
            registered: Cell::new(false),
        }
    }

    /// Controller using the default page contract (`theme`, `data-theme`,
    /// `themeToggle`, `themeIcon`).
    pub fn with_defaults(store: Rc<S>, dom: Rc<D>) -> Self {
        Self::new(store, dom, ThemeConfig::default())
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.shared.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    pub fn is_registered(&self) -> bool {
        self.registered.get()
    }

    /// The preference the page currently shows, from the root attribute.
    /// Unset or unrecognized values read as light.
    pub fn current(&self) -> ThemePreference {
        self.shared.current()
    }

    /// Apply the persisted preference (light if absent or invalid) to the
    /// root attribute and icon. Never writes storage.
    ///
    /// Later calls leave the page untouched and return [`Self::current`].
    pub fn initialize(&self) -> ThemePreference {
        if self.initialized.replace(true) {
            log::debug!("theme already initialized");
            return self.current();
        }
        let pref = self.shared.stored();
        self.shared.apply(pref);
        log::info!("theme initialized: {pref}");
        pref
    }

    /// Attach the click handler to the toggle control.
    ///
    /// Missing toggle or icon elements are logged as warnings and nothing is
    /// attached. Returns whether a handler is attached after the call.
    pub fn register_toggle(&self) -> bool {
        match self.try_register_toggle() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// [`Self::register_toggle`] with the failure reason returned instead of
    /// logged. A toggle control that already carries [`BOUND_ATTRIBUTE`] is
    /// left alone, whichever controller bound it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingToggle`] or [`ThemeError::MissingIcon`]
    /// when the markup is absent, or [`ThemeError::Dom`] if the listener
    /// cannot be attached.
    pub fn try_register_toggle(&self) -> Result<(), ThemeError> {
        let config = &self.shared.config;
        let dom = &self.shared.dom;
        if !dom.has_element(&config.toggle_id) {
            return Err(ThemeError::MissingToggle {
                id: config.toggle_id.clone(),
            });
        }
        if !dom.has_element(&config.icon_id) {
            return Err(ThemeError::MissingIcon {
                id: config.icon_id.clone(),
            });
        }
        // The marker lives on the element, so a re-rendered control (new
        // element, no marker) gets bound again while the same one never does.
        if dom.element_attribute(&config.toggle_id, BOUND_ATTRIBUTE).is_some() {
            log::debug!("theme toggle #{} already bound", config.toggle_id);
            self.registered.set(true);
            return Ok(());
        }

        let shared = Rc::clone(&self.shared);
        dom.on_click(
            &config.toggle_id,
            Box::new(move || {
                shared.toggle();
            }),
        )?;
        if let Err(e) = dom.set_element_attribute(&config.toggle_id, BOUND_ATTRIBUTE, "true") {
            log::warn!("failed to mark theme toggle as bound: {e}");
        }
        if self.registered.replace(true) {
            // Re-rendered markup starts from the server's icon.
            self.shared.apply(self.shared.current());
        }
        Ok(())
    }

    /// Flip the preference, apply it, and persist it. This is what a click
    /// on the toggle control runs.
    pub fn toggle(&self) -> ThemePreference {
        self.shared.toggle()
    }

    /// Startup entry point: initialize, then register the toggle.
    pub fn on_ready(&self) {
        self.initialize();
        self.register_toggle();
    }
}
