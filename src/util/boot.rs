//! Startup sequencing for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that render the [`ThemeToggle`](crate::components::ThemeToggle)
//! component get an explicit ready signal from its mount effect and never go
//! through the timer path. Plain server-rendered pages call
//! `startThemeController` from a script tag instead: while the document is
//! still loading we wait for `DOMContentLoaded`; otherwise we wait a short
//! fixed delay so markup inserted just after the script is picked up.
//!
//! TRADE-OFFS
//! ==========
//! The delay is a heuristic, not a guarantee. Markup inserted after it fires
//! is missed by registration; hosts that insert the toggle late should use
//! the ready signal (`mount`) instead.

use crate::config::ThemeConfig;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "hydrate")]
use crate::controller::ThemeController;
#[cfg(feature = "hydrate")]
use crate::util::browser::{DocumentDom, LocalStorage};

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

/// `document.readyState` while the HTML is still being parsed.
pub const READY_STATE_LOADING: &str = "loading";

/// When to run [`ThemeController::on_ready`](crate::ThemeController::on_ready).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartupPlan {
    /// Subscribe once to `DOMContentLoaded`.
    OnDomReady,
    /// Document already parsed; run after this many milliseconds.
    AfterDelay { delay_ms: u32 },
}

/// Decide how to schedule startup from the document's ready state.
pub fn plan_startup(ready_state: &str, config: &ThemeConfig) -> StartupPlan {
    if ready_state == READY_STATE_LOADING {
        StartupPlan::OnDomReady
    } else {
        StartupPlan::AfterDelay {
            delay_ms: config.fallback_delay_ms,
        }
    }
}

/// Route `log` records to the devtools console and panics to `console.error`.
#[cfg(feature = "hydrate")]
pub fn install_logging() {
    console_error_panic_hook::set_once();
    // Err means the host already installed a logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(feature = "hydrate")]
type BrowserController = ThemeController<LocalStorage, DocumentDom>;

#[cfg(feature = "hydrate")]
thread_local! {
    static PAGE_CONTROLLER: RefCell<Option<Rc<BrowserController>>> = const { RefCell::new(None) };
}

/// Controller bound to `localStorage` and the current document.
#[cfg(feature = "hydrate")]
pub fn browser_controller(config: ThemeConfig) -> Option<BrowserController> {
    let dom = DocumentDom::from_window()?;
    Some(ThemeController::new(Rc::new(LocalStorage), Rc::new(dom), config))
}

/// The page's single controller, created by whichever startup path runs
/// first. Later callers get the same instance and their `config` is ignored.
#[cfg(feature = "hydrate")]
pub fn page_controller(config: ThemeConfig) -> Option<Rc<BrowserController>> {
    PAGE_CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(existing) = slot.as_ref() {
            log::debug!("reusing page theme controller");
            return Some(Rc::clone(existing));
        }
        let controller = Rc::new(browser_controller(config)?);
        *slot = Some(Rc::clone(&controller));
        Some(controller)
    })
}

/// Ready signal: the toggle markup is mounted, so initialize and register now.
#[cfg(feature = "hydrate")]
pub fn mount(config: ThemeConfig) {
    match page_controller(config) {
        Some(controller) => controller.on_ready(),
        None => log::warn!("theme controller skipped: no document"),
    }
}

/// Schedule startup according to [`plan_startup`].
#[cfg(feature = "hydrate")]
pub fn start_with(config: ThemeConfig) {
    let document = web_sys::window().and_then(|w| w.document());
    let (Some(document), Some(controller)) = (document, page_controller(config)) else {
        log::warn!("theme controller skipped: no document");
        return;
    };

    match plan_startup(&document.ready_state(), controller.config()) {
        StartupPlan::OnDomReady => {
            let on_ready = Rc::clone(&controller);
            let cb = Closure::once_into_js(move || on_ready.on_ready());
            let subscribed =
                document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
            if let Err(e) = subscribed {
                log::warn!("DOMContentLoaded subscription failed, starting now: {e:?}");
                controller.on_ready();
            }
        }
        StartupPlan::AfterDelay { delay_ms } => {
            Timeout::new(delay_ms, move || controller.on_ready()).forget();
        }
    }
}

/// Script-tag entry point using the default page contract.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = startThemeController)]
pub fn start_theme_controller() {
    install_logging();
    start_with(ThemeConfig::default());
}

/// Script-tag entry point with a JSON config override. Invalid JSON falls
/// back to the defaults.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = startThemeControllerWith)]
pub fn start_theme_controller_with(config_json: &str) {
    install_logging();
    let config = ThemeConfig::from_json(config_json).unwrap_or_else(|e| {
        log::warn!("{e}; using default theme config");
        ThemeConfig::default()
    });
    start_with(config);
}
