//! Dropdown selector for the temporal bucketing granularity.

use crate::state::AppState;
use agm_core::series::Granularity;
use dioxus::prelude::*;

/// Granularity dropdown. The selection lives only in memory; a reload
/// returns to the default.
#[component]
pub fn GranularitySelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.granularity)();
    let labels = Granularity::ALL.map(|g| g.label());

    let on_change = move |evt: Event<FormData>| {
        state.granularity.set(evt.value());
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Granularity: "
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
