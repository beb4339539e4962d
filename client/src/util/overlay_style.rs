//! Inline style builders for the pin hit-target overlay.
//!
//! The canvas pass draws the visible dots; the overlay contributes only
//! transparent, browser-hit-tested buttons. Both consume the same
//! [`globe::placement::Placement`], so position, opacity, and stacking order
//! stay pixel-synchronized with the drawn dots every frame.

#[cfg(test)]
#[path = "overlay_style_test.rs"]
mod overlay_style_test;

use globe::placement::Placement;

/// Style for the interactive container; the cursor tracks drag state.
#[must_use]
pub fn host_style(cursor: &str) -> String {
    format!(
        "position:relative;width:100%;height:100%;user-select:none;touch-action:none;cursor:{cursor};"
    )
}

/// Style for the canvas element filling the container.
pub const CANVAS_STYLE: &str = "position:absolute;inset:0;width:100%;height:100%;";

/// Style for the overlay layer; individual buttons re-enable pointer events.
pub const OVERLAY_LAYER_STYLE: &str = "position:absolute;inset:0;pointer-events:none;";

/// Style applied while a pin has rotated out of the placement set but its
/// overlay node has not been dropped yet.
pub const HIDDEN_PIN_STYLE: &str = "display:none;";

/// Style for one transparent pin hit-target.
///
/// The button is centered on the projected point and sized to the drawn dot
/// so the browser's hit-testing matches the canvas pixels.
#[must_use]
pub fn hit_target_style(placement: &Placement) -> String {
    format!(
        "position:absolute;left:{x:.4}%;top:{y:.4}%;transform:translate(-50%,-50%);\
         width:{d:.2}px;height:{d:.2}px;opacity:{o:.3};z-index:{z};\
         pointer-events:auto;background:transparent;border:none;padding:0;cursor:pointer;",
        x = placement.x,
        y = placement.y,
        d = placement.diameter,
        o = placement.opacity,
        z = placement.z_index,
    )
}
