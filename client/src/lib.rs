//! # client
//!
//! Leptos + WASM front-end layer for the MemoGlobe globe. Exposes the
//! [`components::globe_host::GlobeHost`] component, which bridges the
//! declarative UI to the imperative `globe` engine: it owns the engine
//! lifecycle, the auto-rotation interval, the resize listener, and the
//! transparent pin hit-target overlay.
//!
//! The embedding application supplies the pin collection and receives
//! activation callbacks; fetching and storing pins is its responsibility.

pub mod components;
pub mod state;
pub mod util;

/// Install the panic hook and route `log` output to the browser console.
///
/// Call once from the embedding application's hydrate entry point.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // A logger was already installed by the embedding application.
        log::warn!("browser logger already initialized");
    }
}
