use std::fmt;

use k8s_openapi::api::core::v1::Pod;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PodPhase {
    Running,
    Pending,
    Failed,
    Succeeded,
    Unknown,
}

impl PodPhase {
    pub const ALL: [PodPhase; 5] = [
        PodPhase::Running,
        PodPhase::Pending,
        PodPhase::Failed,
        PodPhase::Succeeded,
        PodPhase::Unknown,
    ];

    /// Anything other than the four known phases collapses to `Unknown`.
    pub fn from_phase(phase: Option<&str>) -> Self {
        match phase {
            Some("Running") => PodPhase::Running,
            Some("Pending") => PodPhase::Pending,
            Some("Failed") => PodPhase::Failed,
            Some("Succeeded") => PodPhase::Succeeded,
            _ => PodPhase::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PodPhase::Running => "Running",
            PodPhase::Pending => "Pending",
            PodPhase::Failed => "Failed",
            PodPhase::Succeeded => "Succeeded",
            PodPhase::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify_pod(pod: &Pod) -> PodPhase {
    PodPhase::from_phase(pod.status.as_ref().and_then(|s| s.phase.as_deref()))
}

pub fn pod_is_failed(pod: &Pod) -> bool {
    classify_pod(pod) == PodPhase::Failed
}

/// Sum of restart counts over the pod's containers.
pub fn pod_restart_count(pod: &Pod) -> u64 {
    pod.status
        .as_ref()
        .and_then(|s| s.container_statuses.as_ref())
        .map(|containers| {
            containers
                .iter()
                .map(|c| c.restart_count.max(0) as u64)
                .sum()
        })
        .unwrap_or(0)
}

/// A pod has issues when a running container is not ready, a container
/// terminated with a non-zero exit code, or a condition is failing for any
/// reason other than the pod having completed.
pub fn pod_has_issues(pod: &Pod) -> bool {
    let Some(status) = pod.status.as_ref() else {
        return false;
    };

    for container in status.container_statuses.iter().flatten() {
        let Some(state) = container.state.as_ref() else {
            continue;
        };
        if state.running.is_some() && !container.ready {
            return true;
        }
        if state.terminated.as_ref().is_some_and(|t| t.exit_code != 0) {
            return true;
        }
    }

    status.conditions.iter().flatten().any(|cond| {
        cond.status != "True" && cond.reason.as_deref() != Some("PodCompleted")
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PodPhaseCounts {
    pub running: usize,
    pub pending: usize,
    pub failed: usize,
    pub succeeded: usize,
    pub unknown: usize,
}

impl PodPhaseCounts {
    pub fn from_pods(pods: &[Pod]) -> Self {
        let mut counts = PodPhaseCounts::default();
        for pod in pods {
            counts.add(classify_pod(pod));
        }
        counts
    }

    pub fn add(&mut self, phase: PodPhase) {
        match phase {
            PodPhase::Running => self.running += 1,
            PodPhase::Pending => self.pending += 1,
            PodPhase::Failed => self.failed += 1,
            PodPhase::Succeeded => self.succeeded += 1,
            PodPhase::Unknown => self.unknown += 1,
        }
    }

    pub fn get(&self, phase: PodPhase) -> usize {
        match phase {
            PodPhase::Running => self.running,
            PodPhase::Pending => self.pending,
            PodPhase::Failed => self.failed,
            PodPhase::Succeeded => self.succeeded,
            PodPhase::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        PodPhase::ALL.iter().map(|phase| self.get(*phase)).sum()
    }
}
