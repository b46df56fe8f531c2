//! Page-level composition: one instance of each controller, constructed
//! after the document is parsed and torn down together.

use std::cell::RefCell;
use std::rc::Rc;

use futures_channel::oneshot;
use gloo_events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::DocumentReadyState;

use crate::core::config::PageConfig;
use crate::core::dom;
use crate::fade::FadeController;
use crate::nav::NavController;
use crate::reveal::RevealController;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Owns the page's controllers. Dropping it (or calling `destroy`) detaches
/// every listener and cancels every scheduled callback.
pub struct App {
    fade: Rc<FadeController>,
    nav: Rc<NavController>,
    reveal: Rc<RevealController>,
}

impl App {
    pub fn mount(config: PageConfig) -> Self {
        Self {
            fade: FadeController::new(config.fade),
            nav: NavController::new(config.nav),
            reveal: RevealController::new(config.reveal),
        }
    }

    pub fn fade(&self) -> &Rc<FadeController> {
        &self.fade
    }

    pub fn nav(&self) -> &Rc<NavController> {
        &self.nav
    }

    pub fn reveal(&self) -> &Rc<RevealController> {
        &self.reveal
    }

    pub fn destroy(&self) {
        self.fade.destroy();
        self.nav.destroy();
        self.reveal.destroy();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Mount once the document is parsed, parking the controllers in a
/// page-lifetime slot. Booting again replaces (and tears down) a previous
/// mount.
pub fn boot() {
    spawn_local(async {
        ready().await;
        let app = App::mount(PageConfig::from_document());
        APP.with(|slot| {
            *slot.borrow_mut() = Some(app);
        });
    });
}

/// Tear down a previously booted page.
pub fn shutdown() {
    APP.with(|slot| {
        slot.borrow_mut().take();
    });
}

/// Resolves once `document.readyState` has left `"loading"`.
pub async fn ready() {
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() != DocumentReadyState::Loading {
        return;
    }
    let (sender, receiver) = oneshot::channel();
    let listener = EventListener::once(&document, "DOMContentLoaded", move |_| {
        let _ = sender.send(());
    });
    let _ = receiver.await;
    drop(listener);
}
