//! Theme toggle: initial resolution, persistence, and OS scheme mirroring.
//!
//! The `data-theme` attribute on `<html>` is the source of truth for the
//! applied theme; [`behavior::theme::ThemeCore`] decides what to apply and
//! this module mirrors each decision onto the DOM, the toggle button, and
//! `localStorage`. Storage failures (quota, privacy mode, disabled storage)
//! degrade to "no preference" with a console warning and never propagate.

use std::cell::RefCell;
use std::rc::Rc;

use behavior::theme::{STORAGE_KEY, Theme, ThemeCore, ToggleUi};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MediaQueryList, MediaQueryListEvent, Storage};

const TOGGLE_ID: &str = "themeToggle";
const LABEL_SELECTOR: &str = ".theme-toggle__label";
const ICON_SELECTOR: &str = "i";
const THEME_ATTR: &str = "data-theme";

/// Wire up the theme toggle. No-ops when the button or root is missing.
pub fn init() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(root) = document.document_element() else { return };
    let Some(button) = document.get_element_by_id(TOGGLE_ID) else { return };

    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten();
    let os_dark = prefers_dark.as_ref().is_some_and(MediaQueryList::matches);
    let (core, initial) = ThemeCore::initial(read_stored(), os_dark);
    let core = Rc::new(RefCell::new(core));

    apply(&root, &button, initial);

    let click = {
        let core = Rc::clone(&core);
        let root = root.clone();
        let button = button.clone();
        Closure::<dyn FnMut()>::new(move || {
            let live = Theme::from_attr(root.get_attribute(THEME_ATTR).as_deref());
            let next = core.borrow_mut().toggle(live);
            apply(&root, &button, next);
            persist(next);
        })
    };
    let _ = button.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();

    // Mirror OS scheme changes until the user makes an explicit choice.
    if let Some(query) = prefers_dark {
        let change = {
            let core = Rc::clone(&core);
            Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                if let Some(next) = core.borrow().os_change(event.matches()) {
                    apply(&root, &button, next);
                }
            })
        };
        let _ = query.add_event_listener_with_callback("change", change.as_ref().unchecked_ref());
        change.forget();
    }
}

/// Apply a theme to the root and refresh every piece of toggle-button UI.
/// Idempotent; safe to call with the already-applied theme.
fn apply(root: &Element, button: &Element, theme: Theme) {
    let _ = root.set_attribute(THEME_ATTR, theme.as_str());

    let ui = ToggleUi::for_theme(theme);
    let _ = button.set_attribute("aria-pressed", ui.aria_pressed);
    let _ = button.set_attribute("aria-label", ui.aria_label);

    if let Ok(Some(label)) = button.query_selector(LABEL_SELECTOR) {
        label.set_text_content(Some(ui.label));
    }
    if let Ok(Some(icon)) = button.query_selector(ICON_SELECTOR) {
        icon.set_class_name(ui.icon_class);
    }

    let classes = button.class_list();
    let _ = classes.toggle_with_force("btn-outline-light", ui.outline_light);
    let _ = classes.toggle_with_force("btn-outline-dark", !ui.outline_light);
}

fn storage() -> Option<Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("theme preference storage unavailable: {err:?}");
            None
        }
    }
}

fn read_stored() -> Option<Theme> {
    match storage()?.get_item(STORAGE_KEY) {
        Ok(value) => value.as_deref().and_then(Theme::parse),
        Err(err) => {
            log::warn!("theme preference unreadable: {err:?}");
            None
        }
    }
}

fn persist(theme: Theme) {
    let Some(storage) = storage() else { return };
    if let Err(err) = storage.set_item(STORAGE_KEY, theme.as_str()) {
        log::warn!("unable to persist theme preference: {err:?}");
    }
}
