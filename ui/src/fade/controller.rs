use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{DocumentReadyState, HtmlElement};

use crate::core::dom;
use crate::core::motion::{self, FrameSlot};

use super::timeline::{FadePhase, FadeTimeline};
use super::FadeOptions;

/// Drives a single opacity transition over a fixed duration, one write per
/// animation frame.
pub struct FadeController {
    options: FadeOptions,
    phase: Cell<FadePhase>,
    element: RefCell<Option<HtmlElement>>,
    timeline: Cell<Option<FadeTimeline>>,
    frame: FrameSlot,
    ready_listener: RefCell<Option<EventListener>>,
}

impl FadeController {
    /// Construction has no side effects unless `auto_init` is set.
    pub fn new(options: FadeOptions) -> Rc<Self> {
        let auto_init = options.auto_init;
        let controller = Rc::new(Self {
            options,
            phase: Cell::new(FadePhase::Idle),
            element: RefCell::new(None),
            timeline: Cell::new(None),
            frame: FrameSlot::new(),
            ready_listener: RefCell::new(None),
        });
        if auto_init {
            controller.init();
        }
        controller
    }

    pub fn phase(&self) -> FadePhase {
        self.phase.get()
    }

    pub fn init(self: &Rc<Self>) {
        if self.phase.get() != FadePhase::Idle {
            return;
        }
        self.phase.set(FadePhase::Initializing);

        if motion::prefers_reduced_motion() {
            if let Some(element) = self.resolve_element() {
                let _ = element.style().set_property("opacity", "1");
            }
            self.phase.set(FadePhase::Settled);
            return;
        }

        let document = match dom::document() {
            Some(document) => document,
            None => {
                self.phase.set(FadePhase::Idle);
                return;
            }
        };
        if document.ready_state() == DocumentReadyState::Loading {
            let controller = Rc::clone(self);
            let listener = EventListener::once(&document, "DOMContentLoaded", move |_| {
                controller.ready_listener.borrow_mut().take();
                controller.begin();
            });
            *self.ready_listener.borrow_mut() = Some(listener);
        } else {
            self.begin();
        }
    }

    /// Cancels the pending frame and ready listener and clears references.
    /// Reachable from any phase; repeated calls are no-ops.
    pub fn destroy(&self) {
        self.frame.cancel();
        self.ready_listener.borrow_mut().take();
        self.element.borrow_mut().take();
        self.timeline.set(None);
        self.phase.set(FadePhase::Destroyed);
    }

    fn begin(self: &Rc<Self>) {
        if self.phase.get() == FadePhase::Destroyed {
            return;
        }
        let Some(element) = self.resolve_element() else {
            self.phase.set(FadePhase::Idle);
            return;
        };
        let style = element.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("will-change", "opacity");
        *self.element.borrow_mut() = Some(element);
        self.phase.set(FadePhase::Animating);
        self.schedule_frame();
    }

    fn schedule_frame(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        self.frame
            .schedule(move |timestamp| controller.on_frame(timestamp));
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.finish();
        if self.phase.get() != FadePhase::Animating {
            return;
        }
        let timeline = match self.timeline.get() {
            Some(timeline) => timeline,
            None => {
                // The first frame's timestamp anchors the session.
                let timeline = FadeTimeline::new(timestamp, self.options.duration_ms);
                self.timeline.set(Some(timeline));
                timeline
            }
        };
        let complete = timeline.is_complete(timestamp);
        if let Some(element) = self.element.borrow().as_ref() {
            let style = element.style();
            if complete {
                // Exact final value, independent of float rounding.
                let _ = style.remove_property("will-change");
                let _ = style.set_property("opacity", "1");
            } else {
                let _ = style.set_property("opacity", &timeline.progress_at(timestamp).to_string());
            }
        }
        if complete {
            self.phase.set(FadePhase::Settled);
        } else {
            self.schedule_frame();
        }
    }

    fn resolve_element(&self) -> Option<HtmlElement> {
        dom::query_one(&self.options.selector)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }
}
