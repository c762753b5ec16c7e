//! Dashboard status: loading, fetch failure, or an informational notice.

use crate::js_bridge;
use dioxus::prelude::*;

/// What the dashboard is waiting on or wants the grower to know.
#[derive(Clone, PartialEq)]
pub enum Status {
    /// The plot payload fetch is still in flight.
    Loading,
    /// The fetch failed; a manual full reload is the only recovery.
    Failed(String),
    /// Valid data but nothing to chart (e.g. zero plots for the date).
    Notice(String),
}

#[derive(Props, Clone, PartialEq)]
pub struct StatusPanelProps {
    pub status: Status,
}

/// One panel for all three states so apps swap a single element
/// instead of juggling separate error/empty/loading components.
#[component]
pub fn StatusPanel(props: StatusPanelProps) -> Element {
    match props.status {
        Status::Loading => rsx! {
            div {
                style: "padding: 32px; text-align: center; color: #666;",
                "Loading field measurements..."
            }
        },
        Status::Failed(message) => rsx! {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                strong { "Error: " }
                "{message}"
                button {
                    style: "margin-left: 12px; padding: 4px 12px; cursor: pointer;",
                    onclick: move |_| js_bridge::reload_page(),
                    "Reload"
                }
            }
        },
        Status::Notice(message) => rsx! {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #E8F5E9; color: #1B5E20; border-radius: 4px; border: 1px solid #A5D6A7;",
                "{message}"
            }
        },
    }
}
