//! Shared Dioxus components and D3.js/Leaflet bridge for AGM dashboard apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for chart/map JS functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, status panel,
//!   chart panels and their bridge render targets)

pub mod components;
pub mod js_bridge;
pub mod state;
