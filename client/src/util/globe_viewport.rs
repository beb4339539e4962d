//! Viewport and state synchronization helpers shared by the globe host.
//!
//! These helpers bridge the Leptos reactive world and the imperative globe
//! engine. They are all `#[cfg(feature = "hydrate")]` because they depend on
//! `web_sys` and signals that only exist in the browser.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use globe::engine::Globe;

#[cfg(feature = "hydrate")]
use crate::state::globe_view::GlobeViewState;

/// Read the canvas element's CSS dimensions and device pixel ratio, then push
/// them to the engine.
///
/// Must be called on every resize event so that the backing store matches the
/// device's pixel density. Uses CSS pixel dimensions (`client_width` /
/// `client_height`); the engine multiplies by DPR when sizing the backing
/// store.
#[cfg(feature = "hydrate")]
pub fn sync_viewport(globe: &mut Globe, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    globe.set_viewport(width, height, dpr);
}

/// Mirror the engine's rotation/hover/drag state into the reactive view
/// signal so the declarative overlay re-renders in lockstep with the canvas.
#[cfg(feature = "hydrate")]
pub fn sync_view_state(globe: &Globe, view: RwSignal<GlobeViewState>) {
    view.update(|v| {
        v.rotation_deg = globe.rotation_deg();
        v.dragging = globe.is_dragging();
        v.hovered_pin = globe.hovered().map(ToOwned::to_owned);
    });
}
