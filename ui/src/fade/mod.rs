//! Entrance fade for a single element.

use serde::Deserialize;

mod timeline;
pub use timeline::{FadePhase, FadeTimeline};

#[cfg(target_arch = "wasm32")]
mod controller;
#[cfg(target_arch = "wasm32")]
pub use controller::FadeController;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FadeOptions {
    /// Target of the fade; only the first match is animated.
    pub selector: String,
    /// Transition length in milliseconds, clamped to zero or more.
    pub duration_ms: f64,
    /// Run `init` from the constructor.
    pub auto_init: bool,
}

impl Default for FadeOptions {
    fn default() -> Self {
        Self {
            selector: ".fade-in".into(),
            duration_ms: 600.0,
            auto_init: true,
        }
    }
}
