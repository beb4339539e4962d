//! Globe rendering and interaction engine for MemoGlobe.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interactive globe: projecting each pin's geographic coordinate onto the
//! visible disc, maintaining the auto-rotate/drag rotation state, and drawing
//! the sphere, graticule, landmasses, and pins to a 2D canvas. The host UI
//! layer is responsible only for wiring DOM events to the engine, positioning
//! the transparent pin hit-targets from the shared placement data, and
//! forwarding the resulting [`engine::Action`]s to the embedding application.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::GlobeCore`] |
//! | [`pin`] | Pin wire types and the status color palette |
//! | [`projection`] | Orthographic lat/lng to disc projection |
//! | [`rotation`] | Auto-rotate/drag state machine |
//! | [`placement`] | Per-pin screen placement shared with the overlay |
//! | [`scene`] | Decorative landmass anchor data |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`consts`] | Shared numeric constants (tick period, floors, sizes) |

pub mod consts;
pub mod engine;
pub mod pin;
pub mod placement;
pub mod projection;
pub mod render;
pub mod rotation;
pub mod scene;
