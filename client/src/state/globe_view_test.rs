use super::*;

#[test]
fn default_is_idle_at_zero() {
    let state = GlobeViewState::default();
    assert_eq!(state.rotation_deg, 0.0);
    assert!(state.hovered_pin.is_none());
    assert!(!state.dragging);
    assert!(state.last_render_ms.is_none());
}

#[test]
fn clone_preserves_fields() {
    let state = GlobeViewState {
        rotation_deg: 123.4,
        hovered_pin: Some("pin-2".into()),
        dragging: true,
        last_render_ms: Some(1.25),
    };
    assert_eq!(state.clone(), state);
}
