use dioxus::prelude::*;

use crate::k8s::HeatmapEntry;

#[derive(Props, PartialEq, Clone)]
pub struct HeatmapGridProps {
    entries: Vec<HeatmapEntry>,
}

#[component]
pub fn HeatmapGrid(props: HeatmapGridProps) -> Element {
    if props.entries.is_empty() {
        return rsx! {
            p { class: "empty-state", "No namespaces with pods" }
        };
    }

    rsx! {
        div { class: "heatmap-grid",
            {props.entries.iter().map(|entry| {
                let stats = &entry.stats;
                rsx! {
                    div {
                        key: "{stats.namespace}",
                        class: "heatmap-cell intensity-{entry.intensity}",
                        title: "issues {stats.issues}, restarts {stats.restarts}, warnings {stats.warning_events}",
                        span { class: "heatmap-name", "{stats.namespace}" }
                        span { class: "heatmap-score", "{stats.issue_score}" }
                    }
                }
            })}
        }
        div { class: "heatmap-legend",
            span { "Low" }
            {(0..=4u8).map(|level| rsx! {
                span { key: "{level}", class: "heatmap-swatch intensity-{level}" }
            })}
            span { "High" }
        }
    }
}
