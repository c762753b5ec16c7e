//! Section panel wrapping one or more bridge render targets.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// Section heading
    pub title: String,
    /// Optional fine print under the heading (units, data notes)
    #[props(default = String::new())]
    pub caption: String,
    pub children: Element,
}

/// A bordered dashboard section: heading, optional caption, and the
/// bridge targets the charts draw into. The green accent keeps the
/// field-monitoring panels visually distinct from status boxes.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    rsx! {
        section {
            style: "margin: 12px 0; padding: 10px 12px; border: 1px solid #DCE5DC; border-left: 4px solid #2E7D32; border-radius: 4px; background: #FAFBFA;",
            h3 {
                style: "margin: 0 0 2px 0; font-size: 15px; color: #1B5E20;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0 0 6px 0; font-size: 11px; color: #777;",
                    "{props.caption}"
                }
            }
            {props.children}
        }
    }
}
