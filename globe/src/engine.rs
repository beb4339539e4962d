//! Engine: rotation/hover state, the action protocol, and the canvas wrapper.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::PULSE_PERIOD_FRAMES;
use crate::pin::Pin;
use crate::render::{self, FrameView};
use crate::rotation::Rotation;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A pin hit-target was clicked; forward the record to the embedding app.
    PinActivated(Pin),
    /// The interactive surface's cursor should change.
    SetCursor(String),
    /// State changed in a way that requires a redraw.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Globe`] so it can be tested without WASM/browser
/// dependencies. Owns only derived, ephemeral view state: the rotation
/// scalar, the hovered pin id, the pulse frame counter, and the viewport.
/// The pin collection itself is supplied by the caller on every render.
#[derive(Debug)]
pub struct GlobeCore {
    pub rotation: Rotation,
    pub hovered: Option<String>,
    pub frame: u64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for GlobeCore {
    fn default() -> Self {
        Self {
            rotation: Rotation::default(),
            hovered: None,
            frame: 0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl GlobeCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Timer ---

    /// One auto-rotation timer tick: advance the pulse counter and, unless a
    /// drag owns the angle, the rotation.
    pub fn on_tick(&mut self) -> Vec<Action> {
        self.frame = self.frame.wrapping_add(1);
        if self.rotation.tick() {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Drag gesture ---

    /// Pointer went down on the interactive surface at screen `x`.
    pub fn on_pointer_down(&mut self, x: f64) -> Vec<Action> {
        self.rotation.begin_drag(x);
        vec![Action::SetCursor("grabbing".to_owned())]
    }

    /// Pointer moved across the surface.
    pub fn on_pointer_move(&mut self, x: f64) -> Vec<Action> {
        if self.rotation.drag_to(x) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Pointer released or left the surface; ends any drag in progress.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if !self.rotation.is_dragging() {
            return Vec::new();
        }
        self.rotation.end_drag();
        vec![Action::SetCursor("grab".to_owned()), Action::RenderNeeded]
    }

    // --- Pin interactions (hit-tested by the browser overlay) ---

    /// Pointer entered a pin hit-target.
    pub fn on_pin_enter(&mut self, id: &str) -> Vec<Action> {
        if self.hovered.as_deref() == Some(id) {
            return Vec::new();
        }
        self.hovered = Some(id.to_owned());
        vec![Action::RenderNeeded]
    }

    /// Pointer left a pin hit-target. Ignored if another pin has since taken
    /// the hover (enter events can arrive before the matching leave).
    pub fn on_pin_leave(&mut self, id: &str) -> Vec<Action> {
        if self.hovered.as_deref() != Some(id) {
            return Vec::new();
        }
        self.hovered = None;
        vec![Action::RenderNeeded]
    }

    /// A pin hit-target was clicked.
    pub fn on_pin_click(&mut self, pin: &Pin) -> Vec<Action> {
        vec![Action::PinActivated(pin.clone())]
    }

    // --- Viewport ---

    /// Record viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Queries ---

    /// Current rotation in degrees.
    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation.angle_deg()
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.rotation.is_dragging()
    }

    /// The hovered pin id, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Pulse-ring phase in [0, 1), derived from the frame counter.
    #[must_use]
    pub fn pulse_phase(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let phase = (self.frame % PULSE_PERIOD_FRAMES) as f64 / PULSE_PERIOD_FRAMES as f64;
        phase
    }

    /// Read-only view of this frame's state for the render pass.
    #[must_use]
    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            rotation_deg: self.rotation.angle_deg(),
            hovered: self.hovered.as_deref(),
            pulse_phase: self.pulse_phase(),
            viewport_w: self.viewport_width,
            viewport_h: self.viewport_height,
            dpr: self.dpr,
        }
    }
}

/// The full globe engine. Wraps [`GlobeCore`] and owns the browser canvas
/// element.
pub struct Globe {
    canvas: HtmlCanvasElement,
    pub core: GlobeCore,
}

impl Globe {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: GlobeCore::new() }
    }

    // --- Delegated input ---

    pub fn on_tick(&mut self) -> Vec<Action> {
        self.core.on_tick()
    }

    pub fn on_pointer_down(&mut self, x: f64) -> Vec<Action> {
        self.core.on_pointer_down(x)
    }

    pub fn on_pointer_move(&mut self, x: f64) -> Vec<Action> {
        self.core.on_pointer_move(x)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pin_enter(&mut self, id: &str) -> Vec<Action> {
        self.core.on_pin_enter(id)
    }

    pub fn on_pin_leave(&mut self, id: &str) -> Vec<Action> {
        self.core.on_pin_leave(id)
    }

    pub fn on_pin_click(&mut self, pin: &Pin) -> Vec<Action> {
        self.core.on_pin_click(pin)
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the canvas backing store to the
    /// device's pixel density.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let backing_w = (width_css * dpr).round().max(0.0) as u32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let backing_h = (height_css * dpr).round().max(0.0) as u32;

        if self.canvas.width() != backing_w {
            self.canvas.set_width(backing_w);
        }
        if self.canvas.height() != backing_h {
            self.canvas.set_height(backing_h);
        }
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// A missing or non-2D drawing context is a skipped frame, not an error.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context
    /// state).
    pub fn render(&self, pins: &[Pin]) -> Result<(), JsValue> {
        let Ok(Some(object)) = self.canvas.get_context("2d") else {
            return Ok(());
        };
        let Ok(ctx) = object.dyn_into::<CanvasRenderingContext2d>() else {
            return Ok(());
        };
        render::draw(&ctx, pins, &self.core.frame_view())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.core.rotation_deg()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core.is_dragging()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.core.hovered()
    }
}
