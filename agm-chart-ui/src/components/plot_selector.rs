//! Dropdown selector for narrowing to a single plot.

use crate::state::AppState;
use dioxus::prelude::*;

/// Plot dropdown selector.
///
/// The empty option value is the "clear" sentinel, so picking
/// "All Plots" restores the unselected state via the same toggle path
/// the map click events use.
#[component]
pub fn PlotSelector() -> Element {
    let mut state = use_context::<AppState>();
    let plots = state.plots.read().clone();
    let selected = state.filter.read().selected_plot.clone().unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        state.filter.write().toggle_plot(&evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "plot-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Plot: "
            }
            select {
                id: "plot-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All Plots"
                }
                for plot in plots.iter() {
                    option {
                        value: "{plot.name}",
                        selected: plot.name == selected,
                        "{plot.name} ({plot.status})"
                    }
                }
            }
        }
    }
}
