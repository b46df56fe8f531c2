//! Scroll-triggered reveal: elements gain a class as they enter the
//! viewport, via intersection notifications where available and geometry
//! polling otherwise.

use serde::Deserialize;

mod strategy;
pub use strategy::{choose, classify, RevealStrategy, Verdict};

#[cfg(target_arch = "wasm32")]
mod controller;
#[cfg(target_arch = "wasm32")]
pub use controller::RevealController;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub selector: String,
    pub active_class: String,
    /// Intersection root; `None` observes against the viewport.
    pub root_selector: Option<String>,
    pub root_margin: String,
    pub threshold: f64,
    /// Once revealed, never hidden again. Honored by the observation
    /// strategy only; the polling strategy toggles freely.
    pub once: bool,
    /// Run `init` from the constructor.
    pub auto_init: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: ".reveal".into(),
            active_class: "reveal--visible".into(),
            root_selector: None,
            root_margin: "0px".into(),
            threshold: 0.15,
            once: true,
            auto_init: true,
        }
    }
}
