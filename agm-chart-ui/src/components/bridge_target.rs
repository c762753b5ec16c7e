//! The div a JS bridge renderer draws into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BridgeTargetProps {
    /// DOM id the bridge render call targets
    pub id: String,
    /// Reserved height so the layout holds steady while a render polls
    #[props(default = 320)]
    pub min_height: u32,
}

/// Placeholder element owned by the JS side after the first render.
/// Dioxus never writes into it, so bridge-drawn content survives
/// re-renders of the surrounding panel.
#[component]
pub fn BridgeTarget(props: BridgeTargetProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "width: 100%; min-height: {props.min_height}px;",
        }
    }
}
