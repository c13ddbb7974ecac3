//! Particle trail core: the particle field, per-frame math, and the
//! enable/disable lifecycle.
//!
//! The trail has two logical states (viewport wide enough or not) plus a
//! separate "is a frame callback outstanding" flag, kept apart so the
//! lifecycle state and the scheduling state cannot drift. All transition
//! methods return a command for the client glue to execute; this module
//! never touches the canvas or the event loop.
//!
//! Randomness is an injected uniform-[0,1) sampler so the field is
//! deterministic under test; the browser supplies `Math.random`.

use crate::consts::{PARTICLE_COUNT, SCROLL_BOOST, TRAIL_MIN_WIDTH, WRAP_MARGIN};
use crate::theme::Theme;

#[cfg(test)]
#[path = "trail_test.rs"]
mod trail_test;

// =============================================================
// Particles
// =============================================================

/// One decorative particle. Positions are in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Downward drift per frame, before the scroll boost.
    pub speed: f64,
    /// Horizontal drift per frame; may be negative.
    pub drift: f64,
    /// Opacity in [0.3, 0.7).
    pub alpha: f64,
}

impl Particle {
    fn spawn(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: rng() * width,
            y: rng() * height,
            radius: rng() * 2.0 + 1.0,
            speed: rng() * 0.6 + 0.2,
            drift: rng() * 0.4 - 0.2,
            alpha: rng() * 0.4 + 0.3,
        }
    }
}

/// The full particle collection plus the surface it lives on.
///
/// Regeneration is wholesale: no particle identity survives a reinit, and
/// the count is always exactly [`PARTICLE_COUNT`] afterwards.
#[derive(Debug, Default)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every particle with a fresh spawn over a `width` x `height`
    /// surface.
    pub fn regenerate(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        for _ in 0..PARTICLE_COUNT {
            self.particles.push(Particle::spawn(width, height, rng));
        }
    }

    /// Advance every particle one frame.
    ///
    /// `scroll_factor` is the normalized scroll depth from [`scroll_factor`];
    /// it adds up to [`SCROLL_BOOST`] of extra fall speed. Particles that
    /// leave the surface by more than [`WRAP_MARGIN`] recycle: past the
    /// bottom they reset to just above the top at a fresh random `x`, past
    /// either side they wrap to the opposite edge.
    pub fn step(&mut self, scroll_factor: f64, rng: &mut impl FnMut() -> f64) {
        for particle in &mut self.particles {
            particle.y += particle.speed + scroll_factor * SCROLL_BOOST;
            particle.x += particle.drift;

            if particle.y > self.height + WRAP_MARGIN {
                particle.y = -WRAP_MARGIN;
                particle.x = rng() * self.width;
            }
            if particle.x > self.width + WRAP_MARGIN {
                particle.x = -WRAP_MARGIN;
            }
            if particle.x < -WRAP_MARGIN {
                particle.x = self.width + WRAP_MARGIN;
            }
        }
    }
}

/// Normalized [0, 1] scroll depth.
///
/// `scrollable` is the total scrollable height (page height minus viewport
/// height). Pages that do not scroll produce a zero or negative value, and
/// a zero denominator would produce NaN or infinity; all of those collapse
/// to 0 so the trail falls at base speed.
#[must_use]
pub fn scroll_factor(scroll_y: f64, scrollable: f64) -> f64 {
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    let ratio = scroll_y / scrollable;
    if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 }
}

// =============================================================
// Color
// =============================================================

/// Particle hue as an opaque RGB triple; alpha comes per particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue while the dark theme is applied.
pub const DARK_HUE: Rgb = Rgb { r: 61, g: 155, b: 238 };

/// Hue while the light theme is applied.
pub const LIGHT_HUE: Rgb = Rgb { r: 15, g: 23, b: 42 };

/// The hue for the currently applied theme.
#[must_use]
pub fn hue(theme: Theme) -> Rgb {
    match theme {
        Theme::Dark => DARK_HUE,
        Theme::Light => LIGHT_HUE,
    }
}

/// Canvas fill-style string for one particle, alpha fixed to two decimals.
#[must_use]
pub fn fill_style(theme: Theme, alpha: f64) -> String {
    let Rgb { r, g, b } = hue(theme);
    format!("rgba({r}, {g}, {b}, {alpha:.2})")
}

// =============================================================
// Lifecycle state machine
// =============================================================

/// Logical trail state, driven by viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailState {
    Disabled,
    Enabled,
}

/// What the glue must do after a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAction {
    /// Fit the surface, regenerate the field, and start the frame loop.
    Restart,
    /// Fit the surface and regenerate; the loop keeps whatever schedule it
    /// already has (running, or suspended while the tab is hidden).
    Refresh,
    /// Cancel the frame loop and clear the surface so no stale frame lingers.
    Shutdown,
    /// Nothing to do.
    Ignore,
}

/// What the glue must do after a visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityAction {
    /// Cancel the outstanding frame callback; state stays Enabled and the
    /// canvas keeps its last frame.
    Suspend,
    /// Schedule the frame loop again.
    Resume,
    /// Nothing to do.
    Ignore,
}

/// The trail lifecycle: [`TrailState`] plus the frame-scheduling flag.
///
/// The flag mirrors "a frame callback id is outstanding" and is updated
/// only by [`frame_scheduled`](Self::frame_scheduled) /
/// [`frame_cancelled`](Self::frame_cancelled) at the points where the glue
/// actually schedules or cancels, so it can never disagree with the real
/// callback.
#[derive(Debug)]
pub struct TrailCore {
    state: TrailState,
    loop_scheduled: bool,
}

impl TrailCore {
    /// Initial state: enabled iff the viewport is at least
    /// [`TRAIL_MIN_WIDTH`] wide. The loop is not yet scheduled either way.
    #[must_use]
    pub fn new(viewport_width: f64) -> Self {
        let state = if viewport_width >= TRAIL_MIN_WIDTH {
            TrailState::Enabled
        } else {
            TrailState::Disabled
        };
        Self { state, loop_scheduled: false }
    }

    #[must_use]
    pub fn state(&self) -> TrailState {
        self.state
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state == TrailState::Enabled
    }

    #[must_use]
    pub fn loop_scheduled(&self) -> bool {
        self.loop_scheduled
    }

    /// A frame callback was just handed to the scheduler.
    pub fn frame_scheduled(&mut self) {
        self.loop_scheduled = true;
    }

    /// The outstanding frame callback was cancelled (or failed to schedule).
    pub fn frame_cancelled(&mut self) {
        self.loop_scheduled = false;
    }

    /// The viewport was resized to `width` CSS pixels.
    ///
    /// A wide-enough viewport always regenerates the field, even when the
    /// state does not change; continuity of individual particles is not
    /// preserved across resizes.
    pub fn on_resize(&mut self, width: f64) -> ResizeAction {
        if width >= TRAIL_MIN_WIDTH {
            if self.state == TrailState::Enabled {
                ResizeAction::Refresh
            } else {
                self.state = TrailState::Enabled;
                ResizeAction::Restart
            }
        } else if self.state == TrailState::Enabled {
            self.state = TrailState::Disabled;
            ResizeAction::Shutdown
        } else {
            ResizeAction::Ignore
        }
    }

    /// The tab's visibility changed. Hiding suspends the loop without
    /// leaving Enabled; showing resumes it only if the trail is enabled and
    /// the loop is not already running.
    pub fn on_visibility(&mut self, hidden: bool) -> VisibilityAction {
        if hidden {
            if self.loop_scheduled {
                VisibilityAction::Suspend
            } else {
                VisibilityAction::Ignore
            }
        } else if self.state == TrailState::Enabled && !self.loop_scheduled {
            VisibilityAction::Resume
        } else {
            VisibilityAction::Ignore
        }
    }
}
