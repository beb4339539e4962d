//! Live globe telemetry published by the host component.

#[cfg(test)]
#[path = "globe_view_test.rs"]
mod globe_view_test;

/// Live globe view state consumed by the overlay and any embedding chrome.
///
/// The engine core remains the source of truth; this mirror exists so the
/// declarative side can react to rotation/hover changes without reaching into
/// the engine cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlobeViewState {
    /// Rotation in degrees as of the most recent tick or drag event.
    pub rotation_deg: f64,
    /// Id of the hovered pin, if any.
    pub hovered_pin: Option<String>,
    /// Whether a drag gesture currently owns the rotation.
    pub dragging: bool,
    /// Duration of the most recent render pass in milliseconds.
    pub last_render_ms: Option<f64>,
}
