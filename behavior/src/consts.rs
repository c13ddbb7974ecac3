//! Shared numeric constants for the behavior crate.

// ── Particle trail ──────────────────────────────────────────────

/// Number of particles in the trail. The field is regenerated wholesale on
/// every (re)initialization, so this count holds at all times.
pub const PARTICLE_COUNT: usize = 40;

/// Minimum viewport width in CSS pixels at which the trail runs.
pub const TRAIL_MIN_WIDTH: f64 = 768.0;

/// Off-surface margin in pixels before a particle wraps to the other edge.
pub const WRAP_MARGIN: f64 = 10.0;

/// Extra downward speed per frame at full scroll depth.
pub const SCROLL_BOOST: f64 = 0.8;
