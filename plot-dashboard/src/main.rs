//! Agricultural plot monitoring dashboard.
//!
//! Shows normalized field plots on a Leaflet map alongside summary gauges
//! and an area-weighted treemap, with client-side filtering.
//!
//! Data flow:
//! 1. On mount: one GET against the field API for today's `end_date`,
//!    normalized into plots. No retry; the error panel offers a reload.
//! 2. On any filter/selection change: re-filter the in-memory collection,
//!    derive summary statistics, and re-render via the JS bridge.

use agm_chart_ui::components::{
    band_color, BandSelector, BridgeTarget, ChartPanel, FilterBar, PlotSelector, Status,
    StatusPanel,
};
use agm_chart_ui::js_bridge;
use agm_chart_ui::state::AppState;
use agm_core::filter::{apply_filters, summarize, BiomassBand};
use agm_core::plot::fetch_plots;
use chrono::Local;
use dioxus::prelude::*;

/// DOM ids the JS bridge renders into.
const MAP_CONTAINER_ID: &str = "plot-map";
const AREA_GAUGE_ID: &str = "area-gauge";
const PH_GAUGE_ID: &str = "ph-gauge";
const CARBON_GAUGE_ID: &str = "carbon-gauge";
const TREEMAP_ID: &str = "plot-treemap";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("plot-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Fetch the plot payload once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
        spawn(async move {
            let client = reqwest::Client::new();
            let end_date = Local::now().naive_local().date();
            match fetch_plots(&client, end_date).await {
                Ok(plots) => {
                    state.plots.set(plots);
                    state.error_msg.set(None);
                }
                Err(err) => {
                    state
                        .error_msg
                        .set(Some(format!("Could not load plot data: {err}")));
                }
            }
            state.loading.set(false);
        });
    });

    // ─── Effect 2: Re-filter and re-render on every state change ───
    use_effect(move || {
        let loading = (state.loading)();
        let plots = state.plots.read().clone();
        let filter = state.filter.read().clone();

        if loading || plots.is_empty() {
            return;
        }

        let filtered = apply_filters(&plots, &filter);
        let summary = summarize(&filtered, &plots, &filter);

        let map_data: Vec<serde_json::Value> = filtered
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "status": p.status,
                    "boundary": p.boundary,
                    "biomass": p.biomass,
                    "area_acres": p.area_acres,
                })
            })
            .collect();
        let map_config = serde_json::json!({
            "center": [summary.map_center.0, summary.map_center.1],
            "selected": filter.selected_plot.clone().unwrap_or_default(),
        });
        js_bridge::render_plot_map(
            MAP_CONTAINER_ID,
            &serde_json::to_string(&map_data).unwrap_or_default(),
            &map_config.to_string(),
        );

        js_bridge::render_gauge(
            AREA_GAUGE_ID,
            &serde_json::json!({
                "value": summary.total_area,
                "max": summary.area_gauge_max,
                "label": "Area (acres)",
                "unit": "ac",
                "color": "#2E7D32",
            })
            .to_string(),
        );
        js_bridge::render_gauge(
            PH_GAUGE_ID,
            &serde_json::json!({
                "value": summary.average_ph,
                "max": 14.0,
                "label": "Avg Soil pH",
                "unit": "",
                "color": "#6D4C41",
            })
            .to_string(),
        );
        js_bridge::render_gauge(
            CARBON_GAUGE_ID,
            &serde_json::json!({
                "value": summary.average_organic_carbon,
                "max": 5.0,
                "label": "Avg Organic Carbon",
                "unit": "%",
                "color": "#455A64",
            })
            .to_string(),
        );

        let treemap_data: Vec<serde_json::Value> = filtered
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "area": p.area_acres,
                    "band": BiomassBand::for_value(p.biomass).label(),
                })
            })
            .collect();
        let band_colors: serde_json::Value = BiomassBand::ALL
            .iter()
            .map(|b| {
                (
                    b.label().to_string(),
                    serde_json::Value::String(band_color(*b).to_string()),
                )
            })
            .collect::<serde_json::Map<String, serde_json::Value>>()
            .into();
        let treemap_config = serde_json::json!({
            "bandColors": band_colors,
        });
        js_bridge::render_treemap(
            TREEMAP_ID,
            &serde_json::to_string(&treemap_data).unwrap_or_default(),
            &treemap_config.to_string(),
        );
    });

    let status = if let Some(message) = state.error_msg.read().clone() {
        Some(Status::Failed(message))
    } else if *state.loading.read() {
        Some(Status::Loading)
    } else if state.plots.read().is_empty() {
        Some(Status::Notice(
            "No plots available for today's measurement window.".to_string(),
        ))
    } else {
        None
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 4px 0; color: #1B5E20;",
                "Field Plot Monitor"
            }
            p {
                style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                "Soil and crop measurements per plot -- areas in acres"
            }

            if let Some(status) = status {
                StatusPanel { status: status }
            } else {
                FilterBar {}
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: center;",
                    PlotSelector {}
                    BandSelector {}
                }

                ChartPanel {
                    title: "Plot Boundaries".to_string(),
                    caption: "Select a plot to highlight its polygon on the map".to_string(),
                    BridgeTarget {
                        id: MAP_CONTAINER_ID.to_string(),
                        min_height: 420,
                    }
                }

                ChartPanel {
                    title: "Filtered Summary".to_string(),
                    caption: "The area gauge reads against the unfiltered total whenever a range filter is active".to_string(),
                    div {
                        style: "display: flex; gap: 12px;",
                        div {
                            style: "flex: 1;",
                            BridgeTarget { id: AREA_GAUGE_ID.to_string(), min_height: 150 }
                        }
                        div {
                            style: "flex: 1;",
                            BridgeTarget { id: PH_GAUGE_ID.to_string(), min_height: 150 }
                        }
                        div {
                            style: "flex: 1;",
                            BridgeTarget { id: CARBON_GAUGE_ID.to_string(), min_height: 150 }
                        }
                    }
                }

                ChartPanel {
                    title: "Biomass Distribution".to_string(),
                    caption: "Plots sized by area in acres, colored by biomass band".to_string(),
                    BridgeTarget {
                        id: TREEMAP_ID.to_string(),
                        min_height: 300,
                    }
                }
            }
        }
    }
}
