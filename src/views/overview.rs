use dioxus::prelude::*;
use k8s_openapi::chrono::Utc;

use crate::components::StatCard;
use crate::contexts::SnapshotContext;
use crate::k8s::{
    namespace_pod_stats, recent_warnings, top_offenders, warning_counts_by_namespace,
    ClusterHealth,
};
use crate::utils::config::{OVERVIEW_RANKING_LIMIT, RECENT_WARNINGS_LIMIT};

const OVERVIEW_CSS: Asset = asset!("/assets/styling/overview.css");

/// The landing page: cluster health score, headline counts, worst namespaces
/// and the latest warnings
#[component]
pub fn Overview() -> Element {
    let data = use_context::<SnapshotContext>();

    let health = use_memo(move || {
        let snap = data.snapshot.read();
        ClusterHealth::compute(&snap.nodes, &snap.pods, &snap.namespaces, &snap.events)
    });
    let offenders = use_memo(move || {
        let snap = data.snapshot.read();
        let warnings = warning_counts_by_namespace(&snap.events);
        top_offenders(&namespace_pod_stats(&snap.pods, &warnings), OVERVIEW_RANKING_LIMIT)
    });
    let recent = use_memo(move || {
        let snap = data.snapshot.read();
        recent_warnings(&snap.events, Utc::now(), RECENT_WARNINGS_LIMIT)
    });

    let health = health();
    let offenders = offenders();
    let recent = recent();
    let ready_nodes = health.node_count.saturating_sub(health.nodes_not_ready);
    let warning_tone = if health.warning_events > 0 { "status-warning" } else { "" };

    rsx! {
        document::Link { rel: "stylesheet", href: OVERVIEW_CSS }

        div { class: "overview-container",
            div { class: "overview-header",
                h1 { "Cluster Overview" }
            }

            div { class: "cluster-status",
                div { class: "status-card health-card",
                    h3 { "Cluster Health" }
                    p { class: "status-value status-{health.status}", "{health.score}" }
                    p { class: "status-subtext", "{health.status}" }
                }
                StatCard {
                    label: "Nodes Ready",
                    value: format!("{}/{}", ready_nodes, health.node_count),
                    subtext: format!("{} not ready", health.nodes_not_ready),
                }
                StatCard {
                    label: "Pods Running",
                    value: format!("{}/{}", health.pods_running, health.pod_count),
                    subtext: format!("{} with issues, {} failed", health.pods_with_issues, health.failed_pods),
                }
                StatCard {
                    label: "Namespaces",
                    value: health.namespace_count.to_string(),
                }
                StatCard {
                    label: "Restarts",
                    value: health.total_restarts.to_string(),
                    subtext: "across all containers",
                }
                StatCard {
                    label: "Events",
                    value: health.warning_events.to_string(),
                    subtext: format!("warnings, {} normal", health.normal_events),
                    tone: warning_tone,
                }
            }

            div { class: "resource-section",
                h2 { "Top Offending Namespaces" }
                if offenders.is_empty() {
                    p { class: "empty-state", "No namespace has issues, restarts or warnings" }
                } else {
                    table { class: "events-table",
                        thead {
                            tr {
                                th { "Namespace" }
                                th { "Issues" }
                                th { "Restarts" }
                                th { "Warnings" }
                                th { "Score" }
                            }
                        }
                        tbody {
                            {offenders.iter().map(|entry| rsx! {
                                tr { key: "{entry.namespace}",
                                    td { "{entry.namespace}" }
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

            div { class: "resource-section",
                h2 { "Recent Warnings" }
                if recent.is_empty() {
                    p { class: "empty-state", "No warning events" }
                } else {
                    table { class: "events-table",
                        thead {
                            tr {
                                th { "Age" }
                                th { "Reason" }
                                th { "Resource" }
                                th { "Namespace" }
                                th { "Count" }
                                th { "Message" }
                            }
                        }
                        tbody {
                            {recent.iter().enumerate().map(|(i, warning)| rsx! {
                                tr { key: "{i}",
                                    td { "{warning.age}" }
                                    td { class: "status-warning", "{warning.reason}" }
                                    td { "{warning.object}" }
                                    td { "{warning.namespace}" }
                                    td { "{warning.count}" }
                                    td { "{warning.message}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
