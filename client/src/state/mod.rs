//! Application state shared between the globe host and embedding chrome.

pub mod globe_view;
