//! Rendering: draws the globe scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of engine state plus the caller's pin
//! collection and produces pixels — it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Globe::render`]) handles the result.

use std::f64::consts::{FRAC_PI_2, PI};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{DISC_RADIUS_FRAC, LANDMASS_SCALE_FLOOR, PULSE_RING_FACTOR};
use crate::pin::Pin;
use crate::placement::place;
use crate::projection::project;
use crate::scene::LANDMASSES;

/// Graticule stroke opacity.
const GRID_STROKE: &str = "rgba(255,255,255,0.04)";

/// Vertical flattening of latitude rings.
const LATITUDE_RING_FLATTEN: f64 = 0.15;

/// Gap between a pin dot and its label, in CSS pixels.
const LABEL_GAP_PX: f64 = 6.0;

/// Read-only view of engine state for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Rotation in degrees as of the most recent tick or drag event.
    pub rotation_deg: f64,
    /// Hovered pin id, if any.
    pub hovered: Option<&'a str>,
    /// Pulse-ring phase in [0, 1).
    pub pulse_phase: f64,
    /// Viewport width in CSS pixels.
    pub viewport_w: f64,
    /// Viewport height in CSS pixels.
    pub viewport_h: f64,
    /// Device pixel ratio.
    pub dpr: f64,
}

/// Draw the full scene: sphere, atmosphere, graticule, landmasses, watermark,
/// and pins. A zero-sized viewport is a no-op frame.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, pins: &[Pin], view: &FrameView<'_>) -> Result<(), JsValue> {
    if view.viewport_w <= 0.0 || view.viewport_h <= 0.0 {
        return Ok(());
    }

    ctx.set_transform(view.dpr, 0.0, 0.0, view.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, view.viewport_w, view.viewport_h);

    let cx = view.viewport_w * 0.5;
    let cy = view.viewport_h * 0.5;
    let r = view.viewport_w.min(view.viewport_h) * DISC_RADIUS_FRAC;

    draw_sphere(ctx, cx, cy, r)?;
    draw_atmosphere(ctx, cx, cy, r)?;
    draw_graticule(ctx, cx, cy, r, view.rotation_deg)?;
    draw_landmasses(ctx, view, r)?;
    draw_watermark(ctx, cx, cy)?;
    draw_pins(ctx, pins, view)?;

    Ok(())
}

// =============================================================
// Backdrop
// =============================================================

fn draw_sphere(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, r: f64) -> Result<(), JsValue> {
    // Highlight offset toward the upper-left reads as directional light.
    let grad = ctx.create_radial_gradient(cx - r * 0.25, cy - r * 0.25, r * 0.05, cx, cy, r)?;
    grad.add_color_stop(0.0, "#1e3a5f")?;
    grad.add_color_stop(0.5, "#0f2240")?;
    grad.add_color_stop(0.85, "#091428")?;
    grad.add_color_stop(1.0, "#050a14")?;

    ctx.begin_path();
    ctx.arc(cx, cy, r, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.fill();
    Ok(())
}

fn draw_atmosphere(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, r: f64) -> Result<(), JsValue> {
    let grad = ctx.create_radial_gradient(cx, cy, r * 0.95, cx, cy, r * 1.15)?;
    grad.add_color_stop(0.0, "rgba(59,130,246,0.08)")?;
    grad.add_color_stop(0.5, "rgba(59,130,246,0.03)")?;
    grad.add_color_stop(1.0, "rgba(59,130,246,0)")?;

    ctx.begin_path();
    ctx.arc(cx, cy, r * 1.15, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.fill();
    Ok(())
}

fn draw_graticule(
    ctx: &CanvasRenderingContext2d,
    cx: f64,
    cy: f64,
    r: f64,
    rotation_deg: f64,
) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(1.0);

    // Latitude rings: ellipses flattened proportional to cos(latitude).
    let mut lat = -60.0_f64;
    while lat <= 60.0 {
        let rad = lat.to_radians();
        let ring_r = r * rad.cos();
        let ring_y = cy - r * rad.sin();
        ctx.begin_path();
        ctx.ellipse(cx, ring_y, ring_r, ring_r * LATITUDE_RING_FLATTEN, 0.0, 0.0, 2.0 * PI)?;
        ctx.stroke();
        lat += 30.0;
    }

    // Longitude half-arcs: horizontal scale follows sin(lng + rotation); the
    // sign of cos(lng + rotation) picks the near or far half.
    let mut lng = 0.0_f64;
    while lng < 180.0 {
        let rad = (lng + rotation_deg).to_radians();
        ctx.begin_path();
        ctx.save();
        ctx.translate(cx, cy)?;
        ctx.scale(rad.sin(), 1.0)?;
        if rad.cos() > 0.0 {
            ctx.arc(0.0, 0.0, r, -FRAC_PI_2, FRAC_PI_2)?;
        } else {
            ctx.arc(0.0, 0.0, r, FRAC_PI_2, -FRAC_PI_2)?;
        }
        ctx.restore();
        ctx.stroke();
        lng += 30.0;
    }

    Ok(())
}

fn draw_landmasses(ctx: &CanvasRenderingContext2d, view: &FrameView<'_>, r: f64) -> Result<(), JsValue> {
    for lm in &LANDMASSES {
        let p = project(lm.lat, lm.lng, view.rotation_deg);
        if !p.visible || p.scale < LANDMASS_SCALE_FLOOR {
            continue;
        }

        let px = p.x / 100.0 * view.viewport_w;
        let py = p.y / 100.0 * view.viewport_h;
        let size = lm.size * p.scale * (r / 200.0);

        let grad = ctx.create_radial_gradient(px, py, 0.0, px, py, size)?;
        grad.add_color_stop(0.0, &format!("rgba(30,70,100,{:.3})", 0.35 * p.scale))?;
        grad.add_color_stop(0.7, &format!("rgba(20,50,80,{:.3})", 0.2 * p.scale))?;
        grad.add_color_stop(1.0, "rgba(20,50,80,0)")?;

        ctx.begin_path();
        ctx.arc(px, py, size, 0.0, 2.0 * PI)?;
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.fill();
    }
    Ok(())
}

fn draw_watermark(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_fill_style_str("rgba(255,255,255,0.05)");
    ctx.set_font("10px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text("M E M O G L O B E", cx, cy)?;
    ctx.restore();
    Ok(())
}

// =============================================================
// Pins
// =============================================================

fn draw_pins(ctx: &CanvasRenderingContext2d, pins: &[Pin], view: &FrameView<'_>) -> Result<(), JsValue> {
    for pin in pins {
        let Some(pl) = place(pin, view.rotation_deg, view.hovered) else {
            continue;
        };

        let px = pl.x / 100.0 * view.viewport_w;
        let py = pl.y / 100.0 * view.viewport_h;
        let radius = pl.diameter * 0.5;
        let colors = pin.status.colors();

        ctx.save();
        ctx.set_global_alpha(pl.opacity);

        if pin.status.pulses() {
            draw_pulse_ring(ctx, px, py, radius, colors.ring, pl.opacity, view.pulse_phase)?;
        }

        // Dot with status glow.
        ctx.set_shadow_color(colors.glow);
        ctx.set_shadow_blur(if pl.hovered { 20.0 } else { 10.0 });
        ctx.set_fill_style_str(colors.dot);
        ctx.begin_path();
        ctx.arc(px, py, radius, 0.0, 2.0 * PI)?;
        ctx.fill();
        ctx.set_shadow_blur(0.0);

        ctx.set_stroke_style_str(if pl.hovered {
            "rgba(255,255,255,0.6)"
        } else {
            "rgba(255,255,255,0.3)"
        });
        ctx.set_line_width(2.0);
        ctx.stroke();

        if pl.label_visible {
            draw_label(ctx, &pin.concept, px, py - radius - LABEL_GAP_PX, pl.hovered)?;
        }

        ctx.restore();
    }
    Ok(())
}

fn draw_pulse_ring(
    ctx: &CanvasRenderingContext2d,
    px: f64,
    py: f64,
    radius: f64,
    ring_color: &str,
    opacity: f64,
    phase: f64,
) -> Result<(), JsValue> {
    // The ring expands from the dot out to PULSE_RING_FACTOR while fading.
    let ring_r = radius * (PULSE_RING_FACTOR - 1.0).mul_add(phase, 1.0);
    ctx.set_global_alpha(opacity * (1.0 - phase));
    ctx.set_fill_style_str(ring_color);
    ctx.begin_path();
    ctx.arc(px, py, ring_r, 0.0, 2.0 * PI)?;
    ctx.fill();
    ctx.set_global_alpha(opacity);
    Ok(())
}

fn draw_label(
    ctx: &CanvasRenderingContext2d,
    text: &str,
    px: f64,
    py: f64,
    hovered: bool,
) -> Result<(), JsValue> {
    let font_px = if hovered { 13.0 } else { 11.0 };
    ctx.set_font(&format!("500 {font_px}px sans-serif"));
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    ctx.set_shadow_color("rgba(0,0,0,0.8)");
    ctx.set_shadow_blur(4.0);
    ctx.set_fill_style_str(if hovered {
        "rgba(255,255,255,0.9)"
    } else {
        "rgba(255,255,255,0.63)"
    });
    ctx.fill_text(text, px, py)?;
    ctx.set_shadow_blur(0.0);
    Ok(())
}
