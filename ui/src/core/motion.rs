//! Platform capability probes and animation-frame plumbing.

use std::cell::RefCell;

use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Whether the user asked the platform to minimise motion. A failing media
/// query reads as "motion allowed".
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Whether viewport-intersection notifications are available on this page.
pub fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Holds at most one outstanding animation-frame callback. `schedule` is a
/// no-op while a frame is pending, which is what coalesces bursts of scroll
/// and resize events into one pass per rendered frame. Dropping the slot
/// cancels the pending callback.
#[derive(Default)]
pub struct FrameSlot {
    handle: RefCell<Option<AnimationFrame>>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, callback: impl FnOnce(f64) + 'static) {
        if self.handle.borrow().is_some() {
            return;
        }
        *self.handle.borrow_mut() = Some(request_animation_frame(callback));
    }

    /// Called from inside the running callback so the next event can
    /// schedule again.
    pub fn finish(&self) {
        self.handle.borrow_mut().take();
    }

    pub fn cancel(&self) {
        self.handle.borrow_mut().take();
    }
}
