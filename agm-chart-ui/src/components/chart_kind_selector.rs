//! Dropdown selector for the climate chart kind.

use crate::state::AppState;
use agm_core::climate::ChartKind;
use dioxus::prelude::*;

/// Chart kind dropdown (weather or rainfall).
#[component]
pub fn ChartKindSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.chart_kind)();
    let labels = ChartKind::ALL.map(|k| k.label());

    let on_change = move |evt: Event<FormData>| {
        state.chart_kind.set(evt.value());
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Dataset: "
            select {
                onchange: on_change,
                for label in labels {
                    option {
                        value: "{label}",
                        selected: label == current,
                        "{label}"
                    }
                }
            }
        }
    }
}
