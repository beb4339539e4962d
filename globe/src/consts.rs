//! Shared numeric constants for the globe crate.

// ── Rotation ────────────────────────────────────────────────────

/// Auto-rotation tick period in milliseconds.
pub const AUTO_TICK_MS: u32 = 30;

/// Degrees advanced per auto-rotation tick.
pub const AUTO_STEP_DEG: f64 = 0.15;

/// Drag sensitivity in degrees of rotation per CSS pixel of pointer travel.
pub const DRAG_DEG_PER_PX: f64 = 0.3;

// ── Projection ──────────────────────────────────────────────────

/// Disc radius as a percentage of the container; the unit circle maps to a
/// disc occupying 80% of the container.
pub const DISC_RADIUS_PCT: f64 = 40.0;

/// Depth margin past the equator kept visible so points fade at the horizon
/// instead of popping.
pub const HORIZON_MARGIN: f64 = 0.1;

/// Canvas sphere radius as a fraction of the shorter viewport edge.
pub const DISC_RADIUS_FRAC: f64 = 0.42;

// ── Visibility floors ───────────────────────────────────────────

/// Minimum projected scale at which a pin is placed at all.
pub const PIN_SCALE_FLOOR: f64 = 0.15;

/// Minimum projected scale at which a landmass blob is drawn.
pub const LANDMASS_SCALE_FLOOR: f64 = 0.1;

/// Projected scale above which a pin label shows without hover.
pub const LABEL_SCALE_FLOOR: f64 = 0.8;

// ── Pin sizing ──────────────────────────────────────────────────

/// Dot diameter at zero scale, in CSS pixels.
pub const PIN_BASE_DIAMETER_PX: f64 = 8.0;

/// Additional dot diameter at full scale, in CSS pixels.
pub const PIN_SCALE_DIAMETER_PX: f64 = 6.0;

/// Dot size multiplier while hovered.
pub const HOVER_BOOST: f64 = 1.6;

/// Pulse ring diameter relative to the dot diameter, at full expansion.
pub const PULSE_RING_FACTOR: f64 = 2.5;

/// Auto-rotation ticks per pulse-ring cycle.
pub const PULSE_PERIOD_FRAMES: u64 = 40;
