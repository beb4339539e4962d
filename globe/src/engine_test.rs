#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{AUTO_STEP_DEG, DRAG_DEG_PER_PX, PULSE_PERIOD_FRAMES};
use crate::pin::PinStatus;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn sample_pin(id: &str) -> Pin {
    Pin {
        id: id.into(),
        name: "Cambridge".into(),
        concept: "Retrieval practice".into(),
        latitude: 52.2103,
        longitude: 0.0913,
        status: PinStatus::Review,
        strength: 61.0,
        domain: "Learning science".into(),
    }
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

fn cursor_of(actions: &[Action]) -> Option<&str> {
    actions.iter().find_map(|a| match a {
        Action::SetCursor(name) => Some(name.as_str()),
        _ => None,
    })
}

// =============================================================
// GlobeCore: construction and defaults
// =============================================================

#[test]
fn core_starts_at_rotation_zero() {
    let core = GlobeCore::new();
    assert_eq!(core.rotation_deg(), 0.0);
}

#[test]
fn core_starts_auto_rotating() {
    let core = GlobeCore::new();
    assert!(!core.is_dragging());
}

#[test]
fn core_starts_with_no_hover() {
    let core = GlobeCore::new();
    assert!(core.hovered().is_none());
}

#[test]
fn core_default_viewport_is_zero() {
    let core = GlobeCore::new();
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.viewport_height, 0.0);
    assert_eq!(core.dpr, 1.0);
}

// =============================================================
// Timer tick
// =============================================================

#[test]
fn tick_advances_rotation_and_requests_render() {
    let mut core = GlobeCore::new();
    let actions = core.on_tick();
    assert!(has_render_needed(&actions));
    assert!(approx_eq(core.rotation_deg(), AUTO_STEP_DEG));
}

#[test]
fn tick_advances_pulse_phase() {
    let mut core = GlobeCore::new();
    let before = core.pulse_phase();
    core.on_tick();
    assert!(core.pulse_phase() > before);
}

#[test]
fn pulse_phase_stays_in_unit_interval_and_wraps() {
    let mut core = GlobeCore::new();
    for _ in 0..=PULSE_PERIOD_FRAMES * 2 {
        let phase = core.pulse_phase();
        assert!((0.0..1.0).contains(&phase));
        core.on_tick();
    }
    // A whole number of periods lands back at zero.
    let mut core = GlobeCore::new();
    for _ in 0..PULSE_PERIOD_FRAMES {
        core.on_tick();
    }
    assert_eq!(core.pulse_phase(), 0.0);
}

// =============================================================
// Drag gesture
// =============================================================

#[test]
fn pointer_down_starts_drag_with_grabbing_cursor() {
    let mut core = GlobeCore::new();
    let actions = core.on_pointer_down(100.0);
    assert!(core.is_dragging());
    assert_eq!(cursor_of(&actions), Some("grabbing"));
}

#[test]
fn drag_composes_sensitivity_then_resumes_ticking() {
    let mut core = GlobeCore::new();
    // Spin a little first so the anchor angle is non-zero.
    for _ in 0..20 {
        core.on_tick();
    }
    let r0 = core.rotation_deg();

    core.on_pointer_down(200.0);
    core.on_pointer_move(260.0);
    assert!(approx_eq(core.rotation_deg(), 60.0_f64.mul_add(DRAG_DEG_PER_PX, r0)));

    core.on_pointer_up();
    core.on_tick();
    assert!(approx_eq(
        core.rotation_deg(),
        60.0_f64.mul_add(DRAG_DEG_PER_PX, r0) + AUTO_STEP_DEG
    ));
}

#[test]
fn ticks_do_not_drift_rotation_while_dragging() {
    let mut core = GlobeCore::new();
    core.on_pointer_down(50.0);
    core.on_pointer_move(80.0);
    let dragged = core.rotation_deg();
    for _ in 0..200 {
        let actions = core.on_tick();
        assert!(!has_render_needed(&actions));
    }
    assert_eq!(core.rotation_deg(), dragged);
}

#[test]
fn pointer_move_without_drag_is_ignored() {
    let mut core = GlobeCore::new();
    let actions = core.on_pointer_move(500.0);
    assert!(actions.is_empty());
    assert_eq!(core.rotation_deg(), 0.0);
}

#[test]
fn pointer_move_requests_render_only_on_change() {
    let mut core = GlobeCore::new();
    core.on_pointer_down(100.0);
    assert!(has_render_needed(&core.on_pointer_move(120.0)));
    assert!(core.on_pointer_move(120.0).is_empty());
}

#[test]
fn pointer_up_restores_grab_cursor_and_redraws() {
    let mut core = GlobeCore::new();
    core.on_pointer_down(0.0);
    let actions = core.on_pointer_up();
    assert!(!core.is_dragging());
    assert_eq!(cursor_of(&actions), Some("grab"));
    assert!(has_render_needed(&actions));
}

#[test]
fn pointer_up_without_drag_is_ignored() {
    let mut core = GlobeCore::new();
    assert!(core.on_pointer_up().is_empty());
}

// =============================================================
// Pin hover
// =============================================================

#[test]
fn pin_enter_sets_hover_and_redraws() {
    let mut core = GlobeCore::new();
    let actions = core.on_pin_enter("pin-1");
    assert_eq!(core.hovered(), Some("pin-1"));
    assert!(has_render_needed(&actions));
}

#[test]
fn repeated_pin_enter_is_idempotent() {
    let mut core = GlobeCore::new();
    core.on_pin_enter("pin-1");
    assert!(core.on_pin_enter("pin-1").is_empty());
}

#[test]
fn pin_enter_replaces_previous_hover() {
    let mut core = GlobeCore::new();
    core.on_pin_enter("pin-1");
    core.on_pin_enter("pin-2");
    assert_eq!(core.hovered(), Some("pin-2"));
}

#[test]
fn pin_leave_clears_matching_hover() {
    let mut core = GlobeCore::new();
    core.on_pin_enter("pin-1");
    let actions = core.on_pin_leave("pin-1");
    assert!(core.hovered().is_none());
    assert!(has_render_needed(&actions));
}

#[test]
fn stale_pin_leave_keeps_newer_hover() {
    let mut core = GlobeCore::new();
    core.on_pin_enter("pin-1");
    core.on_pin_enter("pin-2");
    let actions = core.on_pin_leave("pin-1");
    assert!(actions.is_empty());
    assert_eq!(core.hovered(), Some("pin-2"));
}

// =============================================================
// Pin activation
// =============================================================

#[test]
fn pin_click_activates_with_full_record() {
    let mut core = GlobeCore::new();
    let pin = sample_pin("pin-9");
    let actions = core.on_pin_click(&pin);
    match actions.as_slice() {
        [Action::PinActivated(activated)] => assert_eq!(*activated, pin),
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[test]
fn pin_click_does_not_disturb_rotation() {
    let mut core = GlobeCore::new();
    core.on_tick();
    let angle = core.rotation_deg();
    core.on_pin_click(&sample_pin("pin-9"));
    assert_eq!(core.rotation_deg(), angle);
    assert!(!core.is_dragging());
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn set_viewport_records_dimensions() {
    let mut core = GlobeCore::new();
    core.set_viewport(800.0, 600.0, 2.0);
    assert_eq!(core.viewport_width, 800.0);
    assert_eq!(core.viewport_height, 600.0);
    assert_eq!(core.dpr, 2.0);
}

#[test]
fn frame_view_reflects_core_state() {
    let mut core = GlobeCore::new();
    core.set_viewport(640.0, 480.0, 1.5);
    core.on_pin_enter("pin-3");
    core.on_tick();

    let view = core.frame_view();
    assert_eq!(view.rotation_deg, core.rotation_deg());
    assert_eq!(view.hovered, Some("pin-3"));
    assert_eq!(view.viewport_w, 640.0);
    assert_eq!(view.viewport_h, 480.0);
    assert_eq!(view.dpr, 1.5);
}
