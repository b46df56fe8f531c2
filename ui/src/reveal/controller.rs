use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::core::dom;
use crate::core::motion::{self, FrameSlot};

use super::strategy::{self, RevealStrategy, Verdict};
use super::RevealOptions;

type ObserverCallback = Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>;

/// Toggles a reveal class on a set of elements as they enter or leave the
/// viewport.
pub struct RevealController {
    options: RevealOptions,
    strategy: Cell<Option<RevealStrategy>>,
    elements: RefCell<Vec<Element>>,
    observer: RefCell<Option<IntersectionObserver>>,
    observer_callback: RefCell<Option<ObserverCallback>>,
    scroll_listener: RefCell<Option<EventListener>>,
    resize_listener: RefCell<Option<EventListener>>,
    frame: FrameSlot,
}

impl RevealController {
    /// Construction has no side effects unless `auto_init` is set.
    pub fn new(options: RevealOptions) -> Rc<Self> {
        let auto_init = options.auto_init;
        let controller = Rc::new(Self {
            options,
            strategy: Cell::new(None),
            elements: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
            observer_callback: RefCell::new(None),
            scroll_listener: RefCell::new(None),
            resize_listener: RefCell::new(None),
            frame: FrameSlot::new(),
        });
        if auto_init {
            controller.init();
        }
        controller
    }

    /// The strategy picked at the last `init`, if any.
    pub fn strategy(&self) -> Option<RevealStrategy> {
        self.strategy.get()
    }

    pub fn init(self: &Rc<Self>) {
        if self.strategy.get().is_some() {
            return;
        }
        let elements = dom::query_all(&self.options.selector);
        let strategy = strategy::choose(
            motion::prefers_reduced_motion(),
            motion::intersection_observer_supported(),
        );
        self.strategy.set(Some(strategy));

        if strategy == RevealStrategy::Static {
            for element in &elements {
                set_class(element, &self.options.active_class, true);
            }
            *self.elements.borrow_mut() = elements;
            return;
        }

        for element in &elements {
            if let Some(element) = element.dyn_ref::<HtmlElement>() {
                let _ = element
                    .style()
                    .set_property("will-change", "opacity, transform");
            }
        }
        *self.elements.borrow_mut() = elements;

        match strategy {
            RevealStrategy::Observer => self.install_observer(),
            RevealStrategy::Polling => self.install_polling(),
            RevealStrategy::Static => {}
        }
    }

    /// Full teardown followed by re-initialization, re-querying the target
    /// selector. Content injected after first load is picked up here.
    pub fn refresh(self: &Rc<Self>) {
        self.destroy();
        self.init();
    }

    /// Disconnects the observer, removes the listeners, cancels the pending
    /// frame and strips the style hints. Every step tolerates its resource
    /// never having been created; repeated calls are no-ops.
    pub fn destroy(&self) {
        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        self.observer_callback.borrow_mut().take();
        self.scroll_listener.borrow_mut().take();
        self.resize_listener.borrow_mut().take();
        self.frame.cancel();
        for element in self.elements.borrow().iter() {
            if let Some(element) = element.dyn_ref::<HtmlElement>() {
                let _ = element.style().remove_property("will-change");
            }
        }
        self.elements.borrow_mut().clear();
        self.strategy.set(None);
    }

    fn install_observer(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        let callback: ObserverCallback = Closure::new(
            move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
                controller.on_intersections(&entries, &observer);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&self.options.root_margin);
        init.set_threshold(&JsValue::from_f64(self.options.threshold));
        let root = self
            .options
            .root_selector
            .as_deref()
            .and_then(dom::query_one);
        if let Some(root) = &root {
            init.set_root(Some(root));
        }

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            {
                Ok(observer) => observer,
                Err(_) => {
                    dom::warn("viewport observation failed to start; polling instead");
                    self.strategy.set(Some(RevealStrategy::Polling));
                    self.install_polling();
                    return;
                }
            };
        for element in self.elements.borrow().iter() {
            observer.observe(element);
        }
        *self.observer_callback.borrow_mut() = Some(callback);
        *self.observer.borrow_mut() = Some(observer);
    }

    fn on_intersections(
        &self,
        entries: &[IntersectionObserverEntry],
        observer: &IntersectionObserver,
    ) {
        for entry in entries {
            let target = entry.target();
            if entry.is_intersecting() {
                set_class(&target, &self.options.active_class, true);
                if self.options.once {
                    observer.unobserve(&target);
                }
            } else if !self.options.once {
                set_class(&target, &self.options.active_class, false);
            }
        }
    }

    fn install_polling(self: &Rc<Self>) {
        if let Some(window) = dom::window() {
            let controller = Rc::clone(self);
            *self.scroll_listener.borrow_mut() = Some(EventListener::new_with_options(
                &window,
                "scroll",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: true,
                },
                move |_| controller.schedule_pass(),
            ));
            let controller = Rc::clone(self);
            *self.resize_listener.borrow_mut() = Some(EventListener::new_with_options(
                &window,
                "resize",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: true,
                },
                move |_| controller.schedule_pass(),
            ));
        }
        // One synchronous pass so already-visible elements reveal without
        // waiting for a scroll or resize.
        self.evaluate_pass();
    }

    fn schedule_pass(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        self.frame.schedule(move |_| {
            controller.frame.finish();
            controller.evaluate_pass();
        });
    }

    fn evaluate_pass(&self) {
        let Some(viewport_height) = dom::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|height| height.as_f64())
        else {
            return;
        };
        for element in self.elements.borrow().iter() {
            let top = element.get_bounding_client_rect().top();
            match strategy::classify(top, viewport_height) {
                Verdict::Reveal => set_class(element, &self.options.active_class, true),
                Verdict::Conceal => set_class(element, &self.options.active_class, false),
                Verdict::Leave => {}
            }
        }
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}
