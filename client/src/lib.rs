//! WASM behavior layer for the portfolio site.
//!
//! Four independent components attach to a static page when the module
//! starts: the theme toggle, reveal-on-scroll, the decorative particle
//! trail, and the contact form. Each one looks up its own DOM anchors and
//! silently stays inert when they are missing, so a partial page (or a
//! non-browser host) never breaks the rest.
//!
//! All decision logic lives in the `behavior` crate; these modules only
//! translate DOM events in and DOM/canvas/network effects out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme toggle button, persistence, OS scheme mirroring |
//! | [`reveal`] | IntersectionObserver-driven reveal class toggling |
//! | [`trail`] | Canvas particle trail and its frame loop |
//! | [`contact`] | Contact-form validation, serialization, and POST |

#[cfg(target_arch = "wasm32")]
pub mod contact;
#[cfg(target_arch = "wasm32")]
pub mod reveal;
#[cfg(target_arch = "wasm32")]
pub mod theme;
#[cfg(target_arch = "wasm32")]
pub mod trail;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point. Initializers are independent; one missing anchor or
/// failing component never blocks the others.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Err means a logger is already installed by the host page; keep going.
    let _ = console_log::init_with_level(log::Level::Info);

    theme::init();
    reveal::init();
    contact::init();
    trail::init();
}
