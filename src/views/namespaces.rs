use dioxus::prelude::*;

use crate::components::{HeatmapGrid, SearchInput, TableState};
use crate::contexts::SnapshotContext;
use crate::k8s::{bucketize, namespace_pod_stats, top_offenders, warning_counts_by_namespace, NamespacePodStats};
use crate::utils::config::TOP_OFFENDERS_LIMIT;

const NAMESPACES_CSS: Asset = asset!("/assets/styling/namespaces.css");

#[derive(Debug, Clone, Copy, PartialEq)]
enum StatsColumn {
    Namespace,
    Pods,
    Issues,
    Restarts,
    Warnings,
    Score,
}

fn sorted_stats(stats: &[NamespacePodStats], table: &TableState<StatsColumn>) -> Vec<NamespacePodStats> {
    let mut visible: Vec<NamespacePodStats> = stats
        .iter()
        .filter(|entry| table.matches(&entry.namespace))
        .cloned()
        .collect();
    visible.sort_by(|a, b| {
        let ascending = match table.sort_column() {
            StatsColumn::Namespace => a.namespace.cmp(&b.namespace),
            StatsColumn::Pods => a.total.cmp(&b.total),
            StatsColumn::Issues => a.issues.cmp(&b.issues),
            StatsColumn::Restarts => a.restarts.cmp(&b.restarts),
            StatsColumn::Warnings => a.warning_events.cmp(&b.warning_events),
            StatsColumn::Score => a.issue_score.cmp(&b.issue_score),
        };
        table.order(ascending)
    });
    visible
}

/// Header count. `shown` only differs from `with_pods` while a filter is active.
fn count_label(shown: usize, with_pods: usize, total: usize) -> String {
    if shown == with_pods {
        format!("{} with pods, {} total", with_pods, total)
    } else {
        format!("{} shown of {} with pods, {} total", shown, with_pods, total)
    }
}

#[component]
pub fn Namespaces() -> Element {
    let data = use_context::<SnapshotContext>();
    let mut table = use_signal(|| TableState::new(StatsColumn::Score));

    let stats = use_memo(move || {
        let snap = data.snapshot.read();
        namespace_pod_stats(&snap.pods, &warning_counts_by_namespace(&snap.events))
    });
    let heatmap = use_memo(move || bucketize(&stats.read()));
    let offenders = use_memo(move || top_offenders(&stats.read(), TOP_OFFENDERS_LIMIT));

    let heatmap = heatmap();
    let offenders = offenders();
    let namespace_count = data.snapshot.read().namespaces.len();
    let visible = sorted_stats(&stats.read(), &table.read());
    let header_count = count_label(visible.len(), stats.read().len(), namespace_count);

    rsx! {
        document::Link { rel: "stylesheet", href: NAMESPACES_CSS }

        div { class: "namespaces-container",
            div { class: "namespaces-header",
                div { class: "header-left",
                    h1 { "Namespaces" }
                    div { class: "header-controls",
                        SearchInput {
                            query: table.read().filter.clone(),
                            placeholder: "Search namespaces...",
                            on_change: move |q| table.write().filter = q
                        }
                        span { class: "namespace-count", "{header_count}" }
                    }
                }
            }

            div { class: "namespaces-section",
                h2 { "Issue Heatmap" }
                HeatmapGrid { entries: heatmap }
            }

            div { class: "namespaces-section",
                h2 { "Top Offenders" }
                if offenders.is_empty() {
                    p { class: "empty-state", "No namespace has issues, restarts or warnings" }
                } else {
                    ol { class: "offender-list",
                        {offenders.iter().map(|entry| rsx! {
                            li { key: "{entry.namespace}",
                                span { class: "offender-name", "{entry.namespace}" }
                                span { class: "offender-score", "{entry.issue_score}" }
                            }
                        })}
                    }
                }
            }

            div { class: "namespaces-section",
                h2 { "Pod Stats" }
                table { class: "namespaces-table",
                    thead {
                        tr {
                            th { onclick: move |_| table.write().toggle_sort(StatsColumn::Namespace),
                                "Namespace{table.read().indicator(StatsColumn::Namespace)}"
                            }
                            th { onclick: move |_| table.write().toggle_sort(StatsColumn::Pods),
                                "Pods{table.read().indicator(StatsColumn::Pods)}"
                            }
                            th { "Running" }
                            th { "Pending" }
                            th { "Failed" }
                            th { onclick: move |_| table.write().toggle_sort(StatsColumn::Issues),
                                "Issues{table.read().indicator(StatsColumn::Issues)}"
                            }
                            th { onclick: move |_| table.write().toggle_sort(StatsColumn::Restarts),
                                "Restarts{table.read().indicator(StatsColumn::Restarts)}"
                            }
                            th { onclick: move |_| table.write().toggle_sort(StatsColumn::Warnings),
                                "Warnings{table.read().indicator(StatsColumn::Warnings)}"
                            }
                            th { onclick: move |_| table.write().toggle_sort(StatsColumn::Score),
                                "Score{table.read().indicator(StatsColumn::Score)}"
                            }
                        }
                    }
                    tbody {
                        {visible.iter().map(|entry| rsx! {
                            tr { key: "{entry.namespace}",
                                td { "{entry.namespace}" }
                                td { "{entry.total}" }
                                td { "{entry.phases.running}" }
                                td { "{entry.phases.pending}" }
                                td { "{entry.phases.failed}" }
                                td { "{entry.issues}" }
                                td { "{entry.restarts}" }
                                td { "{entry.warning_events}" }
                                td { class: "score", "{entry.issue_score}" }
                            }
                        })}
                    }
                }
            }
        }
    }
}
