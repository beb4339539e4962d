use super::*;

fn sample_placement() -> Placement {
    Placement {
        x: 50.0,
        y: 31.25,
        scale: 1.0,
        diameter: 14.0,
        opacity: 1.0,
        z_index: 100,
        label_visible: true,
        hovered: false,
    }
}

#[test]
fn hit_target_centers_on_projected_point() {
    let style = hit_target_style(&sample_placement());
    assert!(style.contains("left:50.0000%"));
    assert!(style.contains("top:31.2500%"));
    assert!(style.contains("translate(-50%,-50%)"));
}

#[test]
fn hit_target_matches_dot_size() {
    let style = hit_target_style(&sample_placement());
    assert!(style.contains("width:14.00px"));
    assert!(style.contains("height:14.00px"));
}

#[test]
fn hit_target_carries_stacking_and_fade() {
    let mut placement = sample_placement();
    placement.opacity = 0.402;
    placement.z_index = 40;
    let style = hit_target_style(&placement);
    assert!(style.contains("opacity:0.402"));
    assert!(style.contains("z-index:40"));
}

#[test]
fn hit_target_is_transparent_but_interactive() {
    let style = hit_target_style(&sample_placement());
    assert!(style.contains("background:transparent"));
    assert!(style.contains("pointer-events:auto"));
}

#[test]
fn overlay_layer_blocks_pointer_events() {
    assert!(OVERLAY_LAYER_STYLE.contains("pointer-events:none"));
}

#[test]
fn host_cursor_tracks_drag_state() {
    assert!(host_style("grab").contains("cursor:grab;"));
    assert!(host_style("grabbing").contains("cursor:grabbing;"));
}
