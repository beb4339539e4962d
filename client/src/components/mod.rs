//! UI components for the globe layer.

pub mod globe_host;
