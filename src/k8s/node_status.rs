use std::fmt;

use k8s_openapi::api::core::v1::Node;
use serde::Serialize;

/// Scheduling-facing status of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeStatus {
    Ready,
    NotReady,
    SchedulingDisabled,
    Unknown,
}

impl NodeStatus {
    pub const ALL: [NodeStatus; 4] = [
        NodeStatus::Ready,
        NodeStatus::NotReady,
        NodeStatus::SchedulingDisabled,
        NodeStatus::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Ready => "Ready",
            NodeStatus::NotReady => "NotReady",
            NodeStatus::SchedulingDisabled => "SchedulingDisabled",
            NodeStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status string of the node's "Ready" condition, if the kubelet reported one.
pub fn ready_condition_status(node: &Node) -> Option<&str> {
    node.status
        .as_ref()?
        .conditions
        .as_ref()?
        .iter()
        .find(|cond| cond.type_ == "Ready")
        .map(|cond| cond.status.as_str())
}

/// Kubelet readiness only. A missing Ready condition is not ready, and a
/// cordoned node that reports Ready is ready.
pub fn node_is_ready(node: &Node) -> bool {
    ready_condition_status(node) == Some("True")
}

pub fn is_unschedulable(node: &Node) -> bool {
    node.spec
        .as_ref()
        .and_then(|spec| spec.unschedulable)
        .unwrap_or(false)
}

pub fn classify_node(node: &Node) -> NodeStatus {
    if is_unschedulable(node) {
        return NodeStatus::SchedulingDisabled;
    }
    match ready_condition_status(node) {
        None => NodeStatus::Unknown,
        Some("True") => NodeStatus::Ready,
        Some(_) => NodeStatus::NotReady,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeStatusCounts {
    pub ready: usize,
    pub not_ready: usize,
    pub scheduling_disabled: usize,
    pub unknown: usize,
}

impl NodeStatusCounts {
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut counts = NodeStatusCounts::default();
        for node in nodes {
            *counts.slot(classify_node(node)) += 1;
        }
        counts
    }

    pub fn get(&self, status: NodeStatus) -> usize {
        match status {
            NodeStatus::Ready => self.ready,
            NodeStatus::NotReady => self.not_ready,
            NodeStatus::SchedulingDisabled => self.scheduling_disabled,
            NodeStatus::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.ready + self.not_ready + self.scheduling_disabled + self.unknown
    }

    fn slot(&mut self, status: NodeStatus) -> &mut usize {
        match status {
            NodeStatus::Ready => &mut self.ready,
            NodeStatus::NotReady => &mut self.not_ready,
            NodeStatus::SchedulingDisabled => &mut self.scheduling_disabled,
            NodeStatus::Unknown => &mut self.unknown,
        }
    }
}

/// One row of the nodes table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRow {
    pub name: String,
    pub status: NodeStatus,
    pub message: String,
    pub cpu: String,
    pub memory: String,
    pub taints: usize,
}

pub fn node_rows(nodes: &[Node]) -> Vec<NodeRow> {
    nodes
        .iter()
        .map(|node| {
            let status = node.status.as_ref();
            let capacity = |resource: &str| {
                status
                    .and_then(|s| s.capacity.as_ref())
                    .and_then(|capacity| capacity.get(resource))
                    .map(|q| q.0.clone())
                    .unwrap_or_else(|| "-".to_string())
            };
            let message = status
                .and_then(|s| s.conditions.as_ref())
                .and_then(|conditions| conditions.iter().find(|cond| cond.type_ == "Ready"))
                .and_then(|cond| cond.message.clone())
                .unwrap_or_default();

            NodeRow {
                name: node.metadata.name.clone().unwrap_or_default(),
                status: classify_node(node),
                message,
                cpu: capacity("cpu"),
                memory: capacity("memory"),
                taints: node
                    .spec
                    .as_ref()
                    .and_then(|spec| spec.taints.as_ref())
                    .map(Vec::len)
                    .unwrap_or(0),
            }
        })
        .collect()
}
