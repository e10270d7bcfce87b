//! Theme toggle button.
//!
//! Renders the `#themeToggle` button and `#themeIcon` icon the controller
//! expects. On hydrate, the mount effect is the ready signal: the markup is
//! guaranteed to exist, so the controller starts without any timer.

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::preference::ThemePreference;

/// Light/dark toggle button for the navbar.
///
/// The server always renders the light icon; the controller swaps it for the
/// persisted preference as soon as the component hydrates.
#[component]
pub fn ThemeToggle(#[prop(optional)] config: Option<ThemeConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let toggle_id = config.toggle_id.clone();
    let icon_id = config.icon_id.clone();
    let icon_class = config.icon_for(ThemePreference::default()).to_owned();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            crate::util::boot::mount(config.clone());
        });
    }

    view! {
        <button
            id=toggle_id
            type="button"
            class="btn btn-link nav-link theme-toggle"
            title="Toggle theme"
        >
            <i id=icon_id class=icon_class></i>
        </button>
    }
}
