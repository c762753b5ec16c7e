//! The four range-filter dropdowns (area, soil pH, organic carbon, brix).

use crate::state::AppState;
use agm_core::filter::RangeSelection;
use dioxus::prelude::*;

const AREA_OPTIONS: &[&str] = &["All", "0-25", "25-50", "50-100", "100-250"];
const PH_OPTIONS: &[&str] = &["All", "5.0-6.0", "6.0-6.5", "6.5-7.0", "7.0-7.5", "7.5-9.0"];
const CARBON_OPTIONS: &[&str] = &["All", "0-1", "1-2", "2-3", "3-5"];
const BRIX_OPTIONS: &[&str] = &["All", "10-14", "14-18", "18-22", "22-30"];

#[derive(Props, Clone, PartialEq)]
struct RangeFilterSelectProps {
    label: String,
    options: Vec<String>,
    current: RangeSelection,
    on_select: EventHandler<String>,
}

/// One labeled dropdown over "All" plus fixed "min-max" options.
///
/// The selected option is recovered by parsing each option and comparing
/// against the current selection, so the component carries no string
/// state of its own.
#[component]
fn RangeFilterSelect(props: RangeFilterSelectProps) -> Element {
    rsx! {
        label {
            style: "font-weight: bold; font-size: 13px;",
            "{props.label}: "
            select {
                onchange: move |evt: Event<FormData>| props.on_select.call(evt.value()),
                for choice in props.options.iter() {
                    option {
                        value: "{choice}",
                        selected: RangeSelection::parse(choice) == props.current,
                        "{choice}"
                    }
                }
            }
        }
    }
}

/// The four independent range filters. Each write triggers a full
/// recomputation downstream; "All" is a no-op selection.
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_context::<AppState>();
    let filter = state.filter.read().clone();

    let to_options = |options: &[&str]| -> Vec<String> {
        options.iter().map(|s| s.to_string()).collect()
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 16px; flex-wrap: wrap; align-items: center;",
            RangeFilterSelect {
                label: "Area (acres)".to_string(),
                options: to_options(AREA_OPTIONS),
                current: filter.area,
                on_select: move |value: String| {
                    state.filter.write().area = RangeSelection::parse(&value);
                },
            }
            RangeFilterSelect {
                label: "Soil pH".to_string(),
                options: to_options(PH_OPTIONS),
                current: filter.soil_ph,
                on_select: move |value: String| {
                    state.filter.write().soil_ph = RangeSelection::parse(&value);
                },
            }
            RangeFilterSelect {
                label: "Organic Carbon".to_string(),
                options: to_options(CARBON_OPTIONS),
                current: filter.organic_carbon,
                on_select: move |value: String| {
                    state.filter.write().organic_carbon = RangeSelection::parse(&value);
                },
            }
            RangeFilterSelect {
                label: "Brix".to_string(),
                options: to_options(BRIX_OPTIONS),
                current: filter.brix,
                on_select: move |value: String| {
                    state.filter.write().brix = RangeSelection::parse(&value);
                },
            }
        }
    }
}
