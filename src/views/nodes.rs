use dioxus::prelude::*;

use crate::components::{DistributionBar, SearchInput, Segment, StatCard, TableState};
use crate::contexts::SnapshotContext;
use crate::k8s::{node_rows, summarize_taints, NodeRow, NodeStatus, NodeStatusCounts};

const NODES_CSS: Asset = asset!("/assets/styling/nodes.css");

#[derive(Debug, Clone, Copy, PartialEq)]
enum NodeColumn {
    Name,
    Status,
    Taints,
}

fn status_class(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Ready => "status-healthy",
        NodeStatus::NotReady => "status-critical",
        NodeStatus::SchedulingDisabled => "status-warning",
        NodeStatus::Unknown => "status-unknown",
    }
}

fn status_rank(status: NodeStatus) -> u8 {
    match status {
        NodeStatus::Ready => 0,
        NodeStatus::SchedulingDisabled => 1,
        NodeStatus::Unknown => 2,
        NodeStatus::NotReady => 3,
    }
}

fn sorted_rows(rows: &[NodeRow], table: &TableState<NodeColumn>) -> Vec<NodeRow> {
    let mut visible: Vec<NodeRow> = rows
        .iter()
        .filter(|row| table.matches(&row.name) || table.matches(row.status.as_str()))
        .cloned()
        .collect();
    visible.sort_by(|a, b| {
        let ascending = match table.sort_column() {
            NodeColumn::Name => a.name.cmp(&b.name),
            NodeColumn::Status => status_rank(a.status).cmp(&status_rank(b.status)),
            NodeColumn::Taints => a.taints.cmp(&b.taints),
        };
        table.order(ascending)
    });
    visible
}

#[component]
pub fn Nodes() -> Element {
    let data = use_context::<SnapshotContext>();
    let mut table = use_signal(|| TableState::new(NodeColumn::Status));

    let counts = use_memo(move || NodeStatusCounts::from_nodes(&data.snapshot.read().nodes));
    let rows = use_memo(move || node_rows(&data.snapshot.read().nodes));
    let taints = use_memo(move || summarize_taints(&data.snapshot.read().nodes));

    let counts = counts();
    let taints = taints();
    let visible = sorted_rows(&rows.read(), &table.read());
    let segments: Vec<Segment> = NodeStatus::ALL
        .iter()
        .map(|status| Segment {
            label: status.to_string(),
            count: counts.get(*status),
            class: status_class(*status),
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: NODES_CSS }

        div { class: "nodes-container",
            div { class: "nodes-header",
                div { class: "header-left",
                    h1 { "Nodes" }
                    div { class: "header-controls",
                        SearchInput {
                            query: table.read().filter.clone(),
                            placeholder: "Search nodes...",
                            on_change: move |q| table.write().filter = q
                        }
                        span { class: "node-count", "{visible.len()} of {counts.total()} nodes" }
                    }
                }
            }

            div { class: "stats-grid",
                StatCard { label: "Ready", value: counts.ready.to_string(), tone: "status-healthy" }
                StatCard { label: "Not Ready", value: counts.not_ready.to_string(), tone: "status-critical" }
                StatCard { label: "Scheduling Disabled", value: counts.scheduling_disabled.to_string(), tone: "status-warning" }
                StatCard { label: "Unknown", value: counts.unknown.to_string() }
            }
            DistributionBar { segments }

            table { class: "nodes-table",
                thead {
                    tr {
                        th { onclick: move |_| table.write().toggle_sort(NodeColumn::Name),
                            "Name{table.read().indicator(NodeColumn::Name)}"
                        }
                        th { onclick: move |_| table.write().toggle_sort(NodeColumn::Status),
                            "Status{table.read().indicator(NodeColumn::Status)}"
                        }
                        th { "CPU" }
                        th { "Memory" }
                        th { onclick: move |_| table.write().toggle_sort(NodeColumn::Taints),
                            "Taints{table.read().indicator(NodeColumn::Taints)}"
                        }
                        th { "Message" }
                    }
                }
                tbody {
                    {visible.iter().map(|row| rsx! {
                        tr { key: "{row.name}",
                            td { "{row.name}" }
                            td {
                                span { class: "status-badge {status_class(row.status)}", "{row.status}" }
                            }
                            td { "{row.cpu}" }
                            td { "{row.memory}" }
                            td { "{row.taints}" }
                            td { class: "node-message", "{row.message}" }
                        }
                    })}
                }
            }

            div { class: "taints-section",
                h2 { "Taints" }
                if taints.is_empty() {
                    p { class: "empty-state", "No node carries a taint" }
                } else {
                    table { class: "nodes-table",
                        thead {
                            tr {
                                th { "Taint" }
                                th { "Nodes" }
                                th { "Occurrences" }
                            }
                        }
                        tbody {
                            {taints.iter().map(|item| rsx! {
                                tr { key: "{item.taint}",
                                    td { code { "{item.taint}" } }
                                    td { "{item.nodes}" }
                                    td { "{item.occurrences}" }
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

    fn row(name: &str, status: NodeStatus, taints: usize) -> NodeRow {
        NodeRow {
            name: name.to_string(),
            status,
            message: String::new(),
            cpu: "4".to_string(),
            memory: "16Gi".to_string(),
            taints,
        }
    }

    #[test]
    fn test_sorted_rows_by_status_puts_problems_first() {
        let rows = vec![
            row("a", NodeStatus::Ready, 0),
            row("b", NodeStatus::NotReady, 1),
            row("c", NodeStatus::SchedulingDisabled, 2),
        ];
        let table = TableState::new(NodeColumn::Status);
        let names: Vec<String> = sorted_rows(&rows, &table).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sorted_rows_filters_by_name_or_status() {
        let rows = vec![row("worker-1", NodeStatus::Ready, 0), row("gpu-1", NodeStatus::NotReady, 0)];
        let mut table = TableState::new(NodeColumn::Name);
        table.filter = "notready".to_string();
        let names: Vec<String> = sorted_rows(&rows, &table).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["gpu-1"]);
    }
}
