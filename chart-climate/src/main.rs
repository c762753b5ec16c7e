//! Weather and rainfall time-series charts.
//!
//! Data flow:
//! 1. Both climate CSVs are embedded at compile time via `include_str!`
//!    inside agm-core; no request is made.
//! 2. On granularity or dataset change: re-bucket the series through the
//!    temporal aggregator and re-render the line chart via D3.js.

use agm_chart_ui::components::{
    BridgeTarget, ChartKindSelector, ChartPanel, GranularitySelector, Status, StatusPanel,
};
use agm_chart_ui::js_bridge;
use agm_chart_ui::state::AppState;
use agm_core::climate::ChartKind;
use agm_core::series::{aggregate, Granularity};
use dioxus::prelude::*;

/// DOM id for the D3 chart target div.
const CHART_CONTAINER_ID: &str = "climate-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("chart-climate-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Initialize chart scripts once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
        state.loading.set(false);
    });

    // ─── Effect 2: Re-aggregate and render on selector change ───
    use_effect(move || {
        let loading = (state.loading)();
        let kind_value = (state.chart_kind)();
        let granularity_value = (state.granularity)();

        if loading {
            return;
        }

        let kind = ChartKind::parse(&kind_value).unwrap_or_default();
        let granularity = Granularity::parse(&granularity_value).unwrap_or_default();

        let points = kind.series();
        if points.is_empty() {
            state
                .error_msg
                .set(Some("No climate data available.".to_string()));
            return;
        }
        state.error_msg.set(None);

        let buckets = aggregate(&points, kind.schema(), granularity);
        let data: Vec<serde_json::Value> = buckets
            .iter()
            .map(|bucket| {
                serde_json::json!({
                    "label": bucket.label,
                    "series": bucket.values,
                })
            })
            .collect();
        let series_names: Vec<&str> = kind.schema().iter().map(|spec| spec.name).collect();
        let config = serde_json::json!({
            "title": format!("{} -- {}", kind.label(), granularity.label()),
            "seriesNames": series_names,
        });

        js_bridge::render_line_chart(
            CHART_CONTAINER_ID,
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    let status = if let Some(message) = state.error_msg.read().clone() {
        Some(Status::Failed(message))
    } else if *state.loading.read() {
        Some(Status::Loading)
    } else {
        None
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 4px 0; color: #1B5E20;",
                "Climate Conditions"
            }
            p {
                style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                "Weather and rainfall observations for the monitored fields"
            }

            if let Some(status) = status {
                StatusPanel { status: status }
            } else {
                div {
                    style: "margin: 8px 0; display: flex; gap: 16px; align-items: center;",
                    ChartKindSelector {}
                    GranularitySelector {}
                }

                ChartPanel {
                    title: "Time Series".to_string(),
                    caption: "Daily compares the two most recent observation days; yearly shows every record".to_string(),
                    BridgeTarget {
                        id: CHART_CONTAINER_ID.to_string(),
                        min_height: 440,
                    }
                }
            }
        }
    }
}
