//! Reveal-on-scroll: one IntersectionObserver over every `.hidden` element.
//!
//! Bidirectional and continuous: an element gains `show` whenever it
//! intersects the viewport and loses it whenever it leaves, so scrolling
//! back up re-hides it. Observer defaults apply (any nonzero intersection
//! counts).

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

const HIDDEN_SELECTOR: &str = ".hidden";
const SHOW_CLASS: &str = "show";

/// Observe every reveal-tagged element. With no matches the observer simply
/// has nothing to report.
pub fn init() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let classes = entry.target().class_list();
                if entry.is_intersecting() {
                    let _ = classes.add_1(SHOW_CLASS);
                } else {
                    let _ = classes.remove_1(SHOW_CLASS);
                }
            }
        },
    );
    let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    callback.forget();

    let Ok(elements) = document.query_selector_all(HIDDEN_SELECTOR) else { return };
    for index in 0..elements.length() {
        if let Some(element) = elements.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    // The browser keeps the observer alive through its observed targets;
    // dropping the Rust handle here is fine.
}
