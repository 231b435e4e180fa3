//! Shell-side state.
//!
//! Uses `thread_local!` storage (WASM is single-threaded). Page state
//! itself lives in the [`PageController`]; this module only holds the
//! controller handle and the browser resources its effects create.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use lp_page_core::{Effect, PageController, PageEvent};
use web_sys::IntersectionObserver;

thread_local! {
    static CONTROLLER: Rc<RefCell<PageController>> = Rc::default();
    static HIDE_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
    static OBSERVER: RefCell<Option<IntersectionObserver>> = const { RefCell::new(None) };
}

pub fn install(controller: PageController) {
    CONTROLLER.with(|c| *c.borrow_mut() = controller);
}

/// Shared handle, for code that must release the controller across an
/// await.
pub fn controller() -> Rc<RefCell<PageController>> {
    CONTROLLER.with(Rc::clone)
}

/// Feed one event to the controller. The borrow ends before the effects
/// are returned, so applying them may dispatch again.
pub fn handle(event: PageEvent) -> Vec<Effect> {
    CONTROLLER.with(|c| c.borrow_mut().handle(event))
}

// ── Hide timer ──

/// Replace the pending hide timer. Dropping a `Timeout` cancels it.
pub fn set_hide_timer(timer: Timeout) {
    HIDE_TIMER.with(|t| *t.borrow_mut() = Some(timer));
}

pub fn cancel_hide_timer() {
    HIDE_TIMER.with(|t| t.borrow_mut().take());
}

// ── Intersection observer ──

pub fn set_observer(observer: IntersectionObserver) {
    OBSERVER.with(|o| *o.borrow_mut() = Some(observer));
}

pub fn with_observer(f: impl FnOnce(&IntersectionObserver)) {
    OBSERVER.with(|o| {
        if let Some(observer) = o.borrow().as_ref() {
            f(observer);
        }
    });
}
