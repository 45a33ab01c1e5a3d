use std::fmt;

use k8s_openapi::api::core::v1::{Event, Namespace, Node, Pod};
use serde::Serialize;

use crate::k8s::node_status::node_is_ready;
use crate::k8s::pod_phase::{classify_pod, pod_has_issues, pod_is_failed, pod_restart_count, PodPhase};
use crate::k8s::warning_events::{event_count, is_normal, is_warning};
use crate::utils::config::{
    HEALTHY_SCORE_THRESHOLD, NODE_HEALTH_WEIGHT, POD_HEALTH_WEIGHT, WARNING_EVENT_BUDGET,
    WARNING_SCORE_THRESHOLD,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    pub fn from_score(score: i32) -> Self {
        if score >= HEALTHY_SCORE_THRESHOLD {
            HealthStatus::Healthy
        } else if score >= WARNING_SCORE_THRESHOLD {
            HealthStatus::Warning
        } else {
            HealthStatus::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Warning => "warning",
            HealthStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterHealth {
    pub node_count: usize,
    pub nodes_not_ready: usize,
    pub pod_count: usize,
    pub pods_running: usize,
    pub pods_with_issues: usize,
    pub failed_pods: usize,
    pub total_restarts: u64,
    pub namespace_count: usize,
    pub warning_events: u64,
    pub normal_events: u64,
    pub score: i32,
    pub status: HealthStatus,
}

impl Default for ClusterHealth {
    fn default() -> Self {
        ClusterHealth::compute(&[], &[], &[], &[])
    }
}

impl ClusterHealth {
    pub fn compute(nodes: &[Node], pods: &[Pod], namespaces: &[Namespace], events: &[Event]) -> Self {
        let nodes_not_ready = nodes.iter().filter(|node| !node_is_ready(node)).count();
        let pods_running = pods
            .iter()
            .filter(|pod| classify_pod(pod) == PodPhase::Running)
            .count();
        let pods_with_issues = pods.iter().filter(|pod| pod_has_issues(pod)).count();
        let failed_pods = pods.iter().filter(|pod| pod_is_failed(pod)).count();
        let total_restarts: u64 = pods.iter().map(pod_restart_count).sum();
        let warning_events: u64 = events.iter().filter(|e| is_warning(e)).map(event_count).sum();
        let normal_events: u64 = events.iter().filter(|e| is_normal(e)).map(event_count).sum();

        let score = health_score(
            nodes.len(),
            nodes_not_ready,
            pods.len(),
            pods_with_issues,
            failed_pods,
            warning_events,
        );

        ClusterHealth {
            node_count: nodes.len(),
            nodes_not_ready,
            pod_count: pods.len(),
            pods_running,
            pods_with_issues,
            failed_pods,
            total_restarts,
            namespace_count: namespaces.len(),
            warning_events,
            normal_events,
            score,
            status: HealthStatus::from_score(score),
        }
    }
}

/// Weighted score: node readiness (40), pod health (40), and a warning
/// budget (20) that loses a point per warning event. Without nodes there is
/// nothing to judge and the cluster scores 100.
///
/// Issues and failures are subtracted separately, so a failed pod that also
/// has issues counts twice and the pod term can drop below zero.
pub fn health_score(
    node_count: usize,
    nodes_not_ready: usize,
    pod_count: usize,
    pods_with_issues: usize,
    failed_pods: usize,
    warning_events: u64,
) -> i32 {
    if node_count == 0 {
        return 100;
    }

    let ready_nodes = node_count as f64 - nodes_not_ready as f64;
    let healthy_pods = pod_count as f64 - pods_with_issues as f64 - failed_pods as f64;

    let node_term = ready_nodes / node_count as f64 * NODE_HEALTH_WEIGHT;
    let pod_term = healthy_pods / pod_count.max(1) as f64 * POD_HEALTH_WEIGHT;
    let warning_term = WARNING_EVENT_BUDGET.saturating_sub(warning_events) as f64;

    (node_term + pod_term + warning_term).round() as i32
}
