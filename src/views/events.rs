use dioxus::prelude::*;

use crate::components::{SearchInput, StatCard, TableState};
use crate::contexts::SnapshotContext;
use crate::k8s::{warnings_by_namespace, warnings_by_reason, WarningReasonSummary};

const EVENTS_CSS: Asset = asset!("/assets/styling/events.css");

#[derive(Debug, Clone, Copy, PartialEq)]
enum ReasonColumn {
    Reason,
    Count,
    Namespaces,
}

fn sorted_reasons(
    reasons: &[WarningReasonSummary],
    table: &TableState<ReasonColumn>,
) -> Vec<WarningReasonSummary> {
    let mut visible: Vec<WarningReasonSummary> = reasons
        .iter()
        .filter(|summary| {
            table.matches(&summary.reason) || summary.namespaces.iter().any(|ns| table.matches(ns))
        })
        .cloned()
        .collect();
    visible.sort_by(|a, b| {
        let ascending = match table.sort_column() {
            ReasonColumn::Reason => a.reason.cmp(&b.reason),
            ReasonColumn::Count => a.count.cmp(&b.count),
            ReasonColumn::Namespaces => a.namespaces.len().cmp(&b.namespaces.len()),
        };
        table.order(ascending)
    });
    visible
}

#[component]
pub fn Events() -> Element {
    let data = use_context::<SnapshotContext>();
    let mut table = use_signal(|| TableState::new(ReasonColumn::Count));

    let reasons = use_memo(move || warnings_by_reason(&data.snapshot.read().events));
    let namespaces = use_memo(move || warnings_by_namespace(&data.snapshot.read().events));

    let namespaces = namespaces();
    let total: u64 = namespaces.iter().map(|entry| entry.count).sum();
    let reason_total = reasons.read().len();
    let visible = sorted_reasons(&reasons.read(), &table.read());

    rsx! {
        document::Link { rel: "stylesheet", href: EVENTS_CSS }

        div { class: "events-container",
            div { class: "events-header",
                div { class: "header-left",
                    h1 { "Warning Events" }
                    div { class: "header-controls",
                        SearchInput {
                            query: table.read().filter.clone(),
                            placeholder: "Filter by reason or namespace...",
                            on_change: move |q| table.write().filter = q
                        }
                        span { class: "event-count", "{visible.len()} of {reason_total} reasons" }
                    }
                }
            }

            div { class: "stats-grid",
                StatCard { label: "Warnings", value: total.to_string(), tone: "status-warning" }
                StatCard { label: "Reasons", value: reason_total.to_string() }
                StatCard { label: "Namespaces", value: namespaces.len().to_string() }
            }

            div { class: "events-section",
                h2 { "By Reason" }
                if visible.is_empty() {
                    p { class: "empty-state", "No warning events" }
                } else {
                    table { class: "events-table",
                        thead {
                            tr {
                                th { onclick: move |_| table.write().toggle_sort(ReasonColumn::Reason),
                                    "Reason{table.read().indicator(ReasonColumn::Reason)}"
                                }
                                th { onclick: move |_| table.write().toggle_sort(ReasonColumn::Count),
                                    "Count{table.read().indicator(ReasonColumn::Count)}"
                                }
                                th { onclick: move |_| table.write().toggle_sort(ReasonColumn::Namespaces),
                                    "Namespaces{table.read().indicator(ReasonColumn::Namespaces)}"
                                }
                            }
                        }
                        tbody {
                            {visible.into_iter().map(|summary| {
                                let reason = summary.reason.clone();
                                let expanded = table.read().is_expanded(&summary.reason);
                                let toggle = if expanded { "▾" } else { "▸" };
                                let namespace_list = summary.namespaces.iter().cloned().collect::<Vec<_>>().join(", ");
                                let resource_list = summary.resources.join(", ");
                                rsx! {
                                    Fragment { key: "{summary.reason}",
                                        tr {
                                            class: "reason-row",
                                            onclick: move |_| table.write().toggle_expanded(&reason),
                                            td { span { class: "expand-toggle", "{toggle}" } " {summary.reason}" }
                                            td { "{summary.count}" }
                                            td { "{summary.namespaces.len()}" }
                                        }
                                        if expanded {
                                            tr { class: "reason-details",
                                                td { colspan: "3",
                                                    div { class: "detail-line",
                                                        span { class: "detail-label", "Namespaces: " }
                                                        "{namespace_list}"
                                                    }
                                                    div { class: "detail-line",
                                                        span { class: "detail-label", "Resources: " }
                                                        "{resource_list}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            })}
                        }
                    }
                }
            }

            div { class: "events-section",
                h2 { "By Namespace" }
                if namespaces.is_empty() {
                    p { class: "empty-state", "No warning events" }
                } else {
                    table { class: "events-table",
                        thead {
                            tr {
                                th { "Namespace" }
                                th { "Warnings" }
                            }
                        }
                        tbody {
                            {namespaces.iter().map(|entry| rsx! {
                                tr { key: "{entry.namespace}",
                                    td { "{entry.namespace}" }
                                    td { "{entry.count}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn summary(reason: &str, count: u64, namespaces: &[&str]) -> WarningReasonSummary {
        WarningReasonSummary {
            reason: reason.to_string(),
            count,
            namespaces: namespaces.iter().map(|ns| ns.to_string()).collect::<BTreeSet<_>>(),
            resources: Vec::new(),
        }
    }

    #[test]
    fn test_sorted_reasons_by_count_descending() {
        let reasons = vec![
            summary("FailedMount", 1, &["a"]),
            summary("BackOff", 7, &["a", "b"]),
        ];
        let table = TableState::new(ReasonColumn::Count);
        let names: Vec<String> = sorted_reasons(&reasons, &table).into_iter().map(|s| s.reason).collect();
        assert_eq!(names, vec!["BackOff", "FailedMount"]);
    }

    #[test]
    fn test_sorted_reasons_filters_on_namespace() {
        let reasons = vec![
            summary("FailedMount", 1, &["storage"]),
            summary("BackOff", 7, &["shop"]),
        ];
        let mut table = TableState::new(ReasonColumn::Reason);
        table.filter = "STOR".to_string();
        let names: Vec<String> = sorted_reasons(&reasons, &table).into_iter().map(|s| s.reason).collect();
        assert_eq!(names, vec!["FailedMount"]);
    }
}
