//! Thin wrapper around the platform's `IntersectionObserver`.
//!
//! Construction can fail when the capability is missing; callers fall back
//! to a static rendering in that case, so everything here returns `Result`
//! instead of unwrapping.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::controllers::visibility::RevealTrigger;

type EntriesClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps an observer and its callback alive; disconnects on drop so a
/// component unmount releases the observation unconditionally.
pub struct IntersectionHandle {
    observer: IntersectionObserver,
    _callback: EntriesClosure,
}

impl Drop for IntersectionHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes `target` and emits once, the first time its visible fraction
/// crosses `threshold`. The observer disconnects itself after firing.
pub fn observe_once(
    target: &Element,
    threshold: f64,
    on_visible: Callback<()>,
) -> Result<IntersectionHandle, JsValue> {
    let trigger = Rc::new(RefCell::new(RevealTrigger::new()));
    let callback: EntriesClosure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            if trigger.borrow().has_fired() {
                return;
            }
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() && trigger.borrow_mut().fire() {
                    observer.disconnect();
                    on_visible.emit(());
                }
            }
        },
    ));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);

    Ok(IntersectionHandle {
        observer,
        _callback: callback,
    })
}

/// Observes every section in `ids` with the given root margin and emits the
/// section id each time one crosses into the intersecting band. Sections
/// that are not in the document are skipped; they simply never report.
pub fn watch_sections(
    ids: &[&str],
    root_margin: &str,
    on_enter: Callback<String>,
) -> Result<IntersectionHandle, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let callback: EntriesClosure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_enter.emit(entry.target().id());
                }
            }
        },
    ));

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for id in ids {
        if let Some(element) = document.get_element_by_id(id) {
            observer.observe(&element);
        }
    }

    Ok(IntersectionHandle {
        observer,
        _callback: callback,
    })
}
