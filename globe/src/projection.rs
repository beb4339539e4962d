//! Orthographic projection of geographic coordinates onto the globe disc.
//!
//! The camera looks along +Z at a unit sphere; the current rotation is added
//! to the longitude before projecting, which simulates spin about the polar
//! axis. Output positions are percentages of the square container so both the
//! canvas pass and the DOM overlay can consume them without knowing pixel
//! dimensions.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use crate::consts::{DISC_RADIUS_PCT, HORIZON_MARGIN};

/// A geographic point projected onto the container.
///
/// `x` / `y` are percentages of the container (0–100, +y down). `scale` is the
/// depth factor in [0, 1]; `visible` is the near-hemisphere test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub visible: bool,
}

/// Project `(lat, lng)` in degrees under the given rotation offset.
///
/// Pure trigonometry: well-defined for any finite input, deterministic for
/// identical inputs, and periodic in `rotation_deg` with period 360.
#[must_use]
pub fn project(lat_deg: f64, lng_deg: f64, rotation_deg: f64) -> Projected {
    let lng = (lng_deg + rotation_deg).to_radians();
    let lat = lat_deg.to_radians();

    let x = lat.cos() * lng.sin();
    let y = lat.sin();
    let z = lat.cos() * lng.cos();

    Projected {
        x: 50.0 + x * DISC_RADIUS_PCT,
        y: 50.0 - y * DISC_RADIUS_PCT,
        scale: ((z + HORIZON_MARGIN) / (1.0 + HORIZON_MARGIN)).max(0.0),
        visible: z > -HORIZON_MARGIN,
    }
}
