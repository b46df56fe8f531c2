//! Navigation bar interaction: burger menu, language dropdown, item
//! activation and scroll-driven deactivation.

use serde::Deserialize;

mod state;
pub use state::{MenuSnapshot, MenuState, SUPPRESSION_MS};

#[cfg(target_arch = "wasm32")]
mod controller;
#[cfg(target_arch = "wasm32")]
pub use controller::NavController;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavOptions {
    pub header_selector: String,
    pub toggle_selector: String,
    pub menu_selector: String,
    pub item_selector: String,
    pub lang_toggle_selector: String,
    pub lang_menu_selector: String,
    pub lang_item_selector: String,
    /// Applied to toggle, menu container and header in lockstep.
    pub open_class: String,
    pub item_active_class: String,
    pub lang_open_class: String,
    /// Run `init` from the constructor.
    pub auto_init: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            header_selector: ".navbar".into(),
            toggle_selector: ".navbar__burger".into(),
            menu_selector: ".navbar__menu".into(),
            item_selector: ".navbar__item".into(),
            lang_toggle_selector: ".navbar__lang-toggle".into(),
            lang_menu_selector: ".navbar__lang-menu".into(),
            lang_item_selector: ".navbar__lang-item".into(),
            open_class: "navbar--open".into(),
            item_active_class: "navbar__item--active".into(),
            lang_open_class: "navbar__lang--open".into(),
            auto_init: true,
        }
    }
}
