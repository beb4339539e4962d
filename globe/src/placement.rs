//! Pin placement: the derived per-frame screen description of a pin.
//!
//! One pure function feeds both representations of a pin (the dot the canvas
//! pass draws, and the transparent hit-target button the overlay positions),
//! so the two can never diverge by a pixel.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use crate::consts::{
    HOVER_BOOST, LABEL_SCALE_FLOOR, PIN_BASE_DIAMETER_PX, PIN_SCALE_DIAMETER_PX, PIN_SCALE_FLOOR,
};
use crate::pin::Pin;
use crate::projection::project;

/// Screen placement of a single pin for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Horizontal position in percent of the container.
    pub x: f64,
    /// Vertical position in percent of the container (+y down).
    pub y: f64,
    /// Projected depth factor in [`PIN_SCALE_FLOOR`, 1].
    pub scale: f64,
    /// Dot diameter in CSS pixels, hover boost applied.
    pub diameter: f64,
    /// Opacity of the dot and its hit-target; fades toward the horizon.
    pub opacity: f64,
    /// Stacking order; nearer pins stack on top.
    pub z_index: i32,
    /// Whether the concept label is shown this frame.
    pub label_visible: bool,
    /// Whether this pin is the hovered one.
    pub hovered: bool,
}

/// Compute the placement for one pin under the given rotation, or `None` when
/// the pin is on the far hemisphere or below the pin visibility floor.
#[must_use]
pub fn place(pin: &Pin, rotation_deg: f64, hovered_id: Option<&str>) -> Option<Placement> {
    let p = project(pin.latitude, pin.longitude, rotation_deg);
    if !p.visible || p.scale < PIN_SCALE_FLOOR {
        return None;
    }

    let hovered = hovered_id.is_some_and(|id| id == pin.id);
    let boost = if hovered { HOVER_BOOST } else { 1.0 };
    // Scale is clamped to [0, 1], so the rounded value fits comfortably.
    #[allow(clippy::cast_possible_truncation)]
    let z_index = (p.scale * 100.0).round() as i32;

    Some(Placement {
        x: p.x,
        y: p.y,
        scale: p.scale,
        diameter: p.scale.mul_add(PIN_SCALE_DIAMETER_PX, PIN_BASE_DIAMETER_PX) * boost,
        opacity: p.scale,
        z_index,
        label_visible: hovered || p.scale > LABEL_SCALE_FLOOR,
        hovered,
    })
}
