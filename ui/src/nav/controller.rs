use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Node};

use crate::core::dom;
use crate::core::motion::FrameSlot;

use super::state::{MenuState, SUPPRESSION_MS};
use super::NavOptions;

struct NavElements {
    header: Element,
    toggle: Element,
    menu: Element,
    items: Vec<Element>,
    lang_toggle: Option<Element>,
    lang_menu: Option<Element>,
    lang_items: Vec<Element>,
}

/// Wires the burger menu, the language dropdown and per-item activation,
/// keyed off click, keyboard and scroll events.
pub struct NavController {
    options: NavOptions,
    state: RefCell<MenuState>,
    elements: RefCell<Option<NavElements>>,
    listeners: RefCell<Vec<EventListener>>,
    scroll_frame: FrameSlot,
    suppression: RefCell<Option<Timeout>>,
}

impl NavController {
    /// Construction has no side effects unless `auto_init` is set.
    pub fn new(options: NavOptions) -> Rc<Self> {
        let auto_init = options.auto_init;
        let controller = Rc::new(Self {
            options,
            state: RefCell::new(MenuState::new()),
            elements: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            scroll_frame: FrameSlot::new(),
            suppression: RefCell::new(None),
        });
        if auto_init {
            controller.init();
        }
        controller
    }

    /// All-or-nothing: when the header, burger toggle, menu container or the
    /// item list is missing, an error is logged and nothing is attached. The
    /// language cluster is optional; without it only the dropdown wiring is
    /// skipped.
    pub fn init(self: &Rc<Self>) {
        if self.elements.borrow().is_some() {
            return;
        }
        let header = dom::query_one(&self.options.header_selector);
        let toggle = dom::query_one(&self.options.toggle_selector);
        let menu = dom::query_one(&self.options.menu_selector);
        let items = dom::query_all(&self.options.item_selector);
        let (Some(header), Some(toggle), Some(menu)) = (header, toggle, menu) else {
            dom::error("navigation disabled: header, burger toggle or menu container not found");
            return;
        };
        if items.is_empty() {
            dom::error("navigation disabled: no navigation items found");
            return;
        }

        let lang_toggle = dom::query_one(&self.options.lang_toggle_selector);
        let lang_menu = dom::query_one(&self.options.lang_menu_selector);
        let lang_items = if lang_toggle.is_some() && lang_menu.is_some() {
            dom::query_all(&self.options.lang_item_selector)
        } else {
            Vec::new()
        };

        let _ = toggle.set_attribute("aria-expanded", "false");
        if let Some(lang_toggle) = &lang_toggle {
            let _ = lang_toggle.set_attribute("aria-expanded", "false");
        }

        *self.elements.borrow_mut() = Some(NavElements {
            header,
            toggle,
            menu,
            items,
            lang_toggle,
            lang_menu,
            lang_items,
        });
        self.install_listeners();
    }

    /// Removes every listener this controller attached, cancels the pending
    /// scroll frame and suppression timer, and drops element references.
    /// Repeated calls, or a call after a failed `init`, are no-ops.
    pub fn destroy(&self) {
        self.listeners.borrow_mut().clear();
        self.scroll_frame.cancel();
        self.suppression.borrow_mut().take();
        self.elements.borrow_mut().take();
        self.state.replace(MenuState::new());
    }

    fn install_listeners(self: &Rc<Self>) {
        let (toggle, items, lang_toggle, lang_menu, lang_items) = {
            let elements = self.elements.borrow();
            let Some(elements) = elements.as_ref() else {
                return;
            };
            (
                elements.toggle.clone(),
                elements.items.clone(),
                elements.lang_toggle.clone(),
                elements.lang_menu.clone(),
                elements.lang_items.clone(),
            )
        };
        let mut listeners = Vec::new();

        let controller = Rc::clone(self);
        listeners.push(EventListener::new(&toggle, "click", move |_| {
            controller.on_menu_toggle();
        }));
        let controller = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &toggle,
            "keydown",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event| {
                if is_activation_key(event) {
                    event.prevent_default();
                    controller.on_menu_toggle();
                }
            },
        ));

        for item in &items {
            let controller = Rc::clone(self);
            let element = item.clone();
            listeners.push(EventListener::new(item, "click", move |_| {
                controller.on_item_activated(&element);
            }));
            let controller = Rc::clone(self);
            let element = item.clone();
            listeners.push(EventListener::new_with_options(
                item,
                "keydown",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event| {
                    if is_activation_key(event) {
                        event.prevent_default();
                        controller.on_item_activated(&element);
                    }
                },
            ));
        }

        if let (Some(lang_toggle), Some(_)) = (lang_toggle.as_ref(), lang_menu.as_ref()) {
            let controller = Rc::clone(self);
            listeners.push(EventListener::new(lang_toggle, "click", move |event| {
                // Keep the same click from reaching the outside-click handler.
                event.stop_propagation();
                controller.on_lang_toggle();
            }));
            for item in &lang_items {
                let controller = Rc::clone(self);
                listeners.push(EventListener::new(item, "click", move |_| {
                    controller.on_lang_item();
                }));
            }
            if let Some(document) = dom::document() {
                let controller = Rc::clone(self);
                listeners.push(EventListener::new(&document, "click", move |event| {
                    controller.on_document_click(event);
                }));
            }
        }

        if let Some(window) = dom::window() {
            let controller = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                &window,
                "scroll",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: true,
                },
                move |_| controller.on_scroll(),
            ));
        }

        *self.listeners.borrow_mut() = listeners;
    }

    fn on_menu_toggle(&self) {
        let snapshot = self.state.borrow_mut().toggle_menu();
        let elements = self.elements.borrow();
        let Some(elements) = elements.as_ref() else {
            return;
        };
        self.apply_menu(snapshot.menu_open, elements);
        if snapshot.lang_closed {
            self.apply_lang(false, elements);
        }
    }

    fn on_lang_toggle(&self) {
        let open = self.state.borrow_mut().toggle_lang();
        let elements = self.elements.borrow();
        if let Some(elements) = elements.as_ref() {
            self.apply_lang(open, elements);
        }
    }

    fn on_lang_item(&self) {
        if !self.state.borrow_mut().close_lang() {
            return;
        }
        let elements = self.elements.borrow();
        if let Some(elements) = elements.as_ref() {
            self.apply_lang(false, elements);
        }
    }

    /// Closes the dropdown when a click lands outside both the trigger and
    /// the list. Trigger clicks never reach here (propagation stopped).
    fn on_document_click(&self, event: &Event) {
        if !self.state.borrow().lang_open() {
            return;
        }
        let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
        let elements = self.elements.borrow();
        let Some(elements) = elements.as_ref() else {
            return;
        };
        if let Some(target) = &target {
            let inside = |element: &Option<Element>| {
                element
                    .as_ref()
                    .map(|element| element.contains(Some(target)))
                    .unwrap_or(false)
            };
            if inside(&elements.lang_toggle) || inside(&elements.lang_menu) {
                return;
            }
        }
        if self.state.borrow_mut().close_lang() {
            self.apply_lang(false, elements);
        }
    }

    fn on_item_activated(self: &Rc<Self>, activated: &Element) {
        let menu_was_open = self.state.borrow_mut().close_menu();
        {
            let elements = self.elements.borrow();
            let Some(elements) = elements.as_ref() else {
                return;
            };
            if menu_was_open {
                self.apply_menu(false, elements);
            }
            for item in &elements.items {
                set_class(item, &self.options.item_active_class, false);
            }
        }
        set_class(activated, &self.options.item_active_class, true);

        self.state.borrow_mut().begin_suppression();
        let controller = Rc::clone(self);
        let timer = Timeout::new(SUPPRESSION_MS, move || {
            controller.suppression.borrow_mut().take();
            controller.state.borrow_mut().end_suppression();
        });
        // Replacing the slot cancels any window still pending.
        *self.suppression.borrow_mut() = Some(timer);
    }

    fn on_scroll(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        self.scroll_frame.schedule(move |_| {
            controller.scroll_frame.finish();
            if !controller.state.borrow().scroll_clears_active() {
                return;
            }
            let elements = controller.elements.borrow();
            if let Some(elements) = elements.as_ref() {
                for item in &elements.items {
                    set_class(item, &controller.options.item_active_class, false);
                }
            }
        });
    }

    fn apply_menu(&self, open: bool, elements: &NavElements) {
        set_class(&elements.toggle, &self.options.open_class, open);
        set_class(&elements.menu, &self.options.open_class, open);
        set_class(&elements.header, &self.options.open_class, open);
        let _ = elements
            .toggle
            .set_attribute("aria-expanded", bool_attr(open));
    }

    fn apply_lang(&self, open: bool, elements: &NavElements) {
        if let Some(lang_menu) = &elements.lang_menu {
            set_class(lang_menu, &self.options.lang_open_class, open);
        }
        if let Some(lang_toggle) = &elements.lang_toggle {
            set_class(lang_toggle, &self.options.lang_open_class, open);
            let _ = lang_toggle.set_attribute("aria-expanded", bool_attr(open));
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

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn is_activation_key(event: &Event) -> bool {
    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
        return false;
    };
    let key = event.key().to_lowercase();
    key == " " || key == "space" || key == "spacebar" || key == "enter"
}
