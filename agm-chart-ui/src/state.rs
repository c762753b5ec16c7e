//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use agm_core::filter::FilterState;
use agm_core::plot::Plot;
use dioxus::prelude::*;

/// Shared application state for the AGM dashboard apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Full normalized plot collection (empty until fetched)
    pub plots: Signal<Vec<Plot>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current filter/selection state, recomputed against on every change
    pub filter: Signal<FilterState>,
    /// Bucketing granularity selector value ("Daily" .. "Yearly")
    pub granularity: Signal<String>,
    /// Climate chart kind selector value ("Weather" or "Rainfall")
    pub chart_kind: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            plots: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            filter: Signal::new(FilterState::default()),
            granularity: Signal::new("Weekly".to_string()),
            chart_kind: Signal::new("Weather".to_string()),
        }
    }
}
