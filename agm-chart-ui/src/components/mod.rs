//! Reusable Dioxus RSX components for AGM dashboard apps.

mod band_selector;
mod bridge_target;
mod chart_kind_selector;
mod chart_panel;
mod filter_bar;
mod granularity_selector;
mod plot_selector;
mod status_panel;

pub use band_selector::{band_color, BandSelector};
pub use bridge_target::BridgeTarget;
pub use chart_kind_selector::ChartKindSelector;
pub use chart_panel::ChartPanel;
pub use filter_bar::FilterBar;
pub use granularity_selector::GranularitySelector;
pub use plot_selector::PlotSelector;
pub use status_panel::{Status, StatusPanel};
