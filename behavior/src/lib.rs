//! Behavior core for the portfolio site's client layer.
//!
//! This crate holds every decision the page behavior makes that does not
//! require a browser: theme resolution and toggling, the particle-trail
//! state machine and per-frame particle math, and contact-form payload
//! construction. The `client` crate wires these cores to the DOM, the
//! canvas, storage, and the network; this crate never touches any of them,
//! which is what keeps it testable on the native target.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme state machine, storage key, toggle-button UI descriptor |
//! | [`trail`] | Particle field, scroll-factor math, and the trail lifecycle [`trail::TrailCore`] |
//! | [`contact`] | Contact-form payload, relay endpoint, submit-button labels |
//! | [`consts`] | Shared numeric constants (particle count, enable threshold, etc.) |

pub mod consts;
pub mod contact;
pub mod theme;
pub mod trail;
