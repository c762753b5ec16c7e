//! Biomass band filter buttons.

use crate::state::AppState;
use agm_core::filter::BiomassBand;
use dioxus::prelude::*;

/// Colors matching the treemap band fill.
pub fn band_color(band: BiomassBand) -> &'static str {
    match band {
        BiomassBand::VeryLow => "#C5E1A5",
        BiomassBand::Low => "#9CCC65",
        BiomassBand::Medium => "#66BB6A",
        BiomassBand::High => "#43A047",
        BiomassBand::VeryHigh => "#1B5E20",
    }
}

/// One button per biomass band. Clicking the active band clears the
/// selection; clicking another replaces it.
#[component]
pub fn BandSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.filter.read().selected_band;
    let bands = BiomassBand::ALL.map(|band| {
        let background = if selected == Some(band) {
            band_color(band)
        } else {
            "transparent"
        };
        let style = format!(
            "padding: 4px 10px; cursor: pointer; border-radius: 4px; border: 2px solid {}; background: {};",
            band_color(band),
            background,
        );
        (band, band.label(), style)
    });

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            span {
                style: "font-weight: bold; font-size: 13px;",
                "Biomass: "
            }
            for (band, label, style) in bands {
                button {
                    style: "{style}",
                    onclick: move |_| state.filter.write().toggle_band(band.label()),
                    "{label}"
                }
            }
        }
    }
}
