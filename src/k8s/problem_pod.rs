use std::fmt;

use k8s_openapi::{
    api::core::v1::Pod,
    chrono::{DateTime, Utc},
};
use serde::Serialize;

use crate::k8s::namespace_stats::pod_namespace;
use crate::k8s::pod_phase::pod_restart_count;
use crate::utils::{age_since, config::FREQUENT_RESTART_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    CrashLoopBackOff,
    ImagePullError,
    ContainerFailed,
    OomKilled,
    ContainerNotReady,
    FrequentRestarts,
    Evicted,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueKind::CrashLoopBackOff => "CrashLoopBackOff",
            IssueKind::ImagePullError => "Image Pull Error",
            IssueKind::ContainerFailed => "Container Failed",
            IssueKind::OomKilled => "OOMKilled",
            IssueKind::ContainerNotReady => "Container Not Ready",
            IssueKind::FrequentRestarts => "Frequent Restarts",
            IssueKind::Evicted => "Evicted",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemPod {
    pub name: String,
    pub namespace: String,
    pub owner: Option<String>,
    pub kind: IssueKind,
    pub details: String,
    pub severity: Severity,
    pub restarts: u64,
    pub age: String,
}

/// First problem found on the pod, checking containers in order before the
/// pod-level eviction reason.
pub fn detect_pod_problem(pod: &Pod, now: DateTime<Utc>) -> Option<ProblemPod> {
    let status = pod.status.as_ref()?;
    let found = status
        .container_statuses
        .iter()
        .flatten()
        .find_map(|container| {
            let state = container.state.as_ref();

            if let Some(waiting) = state.and_then(|s| s.waiting.as_ref()) {
                match waiting.reason.as_deref() {
                    Some("CrashLoopBackOff") => {
                        return Some((
                            IssueKind::CrashLoopBackOff,
                            Severity::High,
                            format!(
                                "Container {} has crashed {} times",
                                container.name, container.restart_count
                            ),
                        ));
                    }
                    Some("ImagePullBackOff" | "ErrImagePull") => {
                        return Some((
                            IssueKind::ImagePullError,
                            Severity::High,
                            format!(
                                "Container {} failed to pull image: {}",
                                container.name,
                                waiting.message.as_deref().unwrap_or("No details available")
                            ),
                        ));
                    }
                    _ => {}
                }
            }

            if let Some(terminated) = state.and_then(|s| s.terminated.as_ref()) {
                if terminated.exit_code != 0 {
                    return Some((
                        IssueKind::ContainerFailed,
                        Severity::High,
                        format!(
                            "Container {} terminated with exit code {}: {}",
                            container.name,
                            terminated.exit_code,
                            terminated
                                .message
                                .as_deref()
                                .or(terminated.reason.as_deref())
                                .unwrap_or("No details available")
                        ),
                    ));
                }
            }

            let last_reason = container
                .last_state
                .as_ref()
                .and_then(|s| s.terminated.as_ref())
                .and_then(|t| t.reason.as_deref());
            if last_reason == Some("OOMKilled") {
                return Some((
                    IssueKind::OomKilled,
                    Severity::High,
                    format!("Container {} was last terminated out of memory", container.name),
                ));
            }

            if !container.ready && container.restart_count == 0 {
                return Some((
                    IssueKind::ContainerNotReady,
                    Severity::Medium,
                    format!(
                        "Container {} is not ready and has never started successfully",
                        container.name
                    ),
                ));
            }

            if container.restart_count > FREQUENT_RESTART_THRESHOLD {
                return Some((
                    IssueKind::FrequentRestarts,
                    Severity::Medium,
                    format!(
                        "Container {} has restarted {} times",
                        container.name, container.restart_count
                    ),
                ));
            }

            None
        })
        .or_else(|| {
            (status.reason.as_deref() == Some("Evicted")).then(|| {
                (
                    IssueKind::Evicted,
                    Severity::High,
                    status
                        .message
                        .clone()
                        .unwrap_or_else(|| "No details available".to_string()),
                )
            })
        });

    let (kind, severity, details) = found?;
    Some(ProblemPod {
        name: pod.metadata.name.clone().unwrap_or_default(),
        namespace: pod_namespace(pod).to_string(),
        owner: pod
            .metadata
            .owner_references
            .as_ref()
            .and_then(|owners| owners.first())
            .map(|owner| format!("{}/{}", owner.kind, owner.name)),
        kind,
        details,
        severity,
        restarts: pod_restart_count(pod),
        age: age_since(pod.metadata.creation_timestamp.as_ref().map(|t| t.0), now),
    })
}

/// Problem pods, most severe first, then by restart count.
pub fn problem_pods(pods: &[Pod], now: DateTime<Utc>) -> Vec<ProblemPod> {
    let mut problems: Vec<ProblemPod> = pods
        .iter()
        .filter_map(|pod| detect_pod_problem(pod, now))
        .collect();
    problems.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| b.restarts.cmp(&a.restarts))
    });
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k8s::fixtures::*;
    use k8s_openapi::{
        api::core::v1::{ContainerState, ContainerStateTerminated},
        apimachinery::pkg::apis::meta::v1::OwnerReference,
        chrono::{Duration, TimeZone},
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_healthy_pod_has_no_problem() {
        assert!(detect_pod_problem(&running_pod("default", "web"), now()).is_none());
    }

    #[test]
    fn test_crash_loop() {
        let pod = created_at(
            with_container(
                pod(Some("shop"), "cart", Some("Running")),
                waiting_container("app", "CrashLoopBackOff", 12),
            ),
            now() - Duration::hours(5),
        );
        let problem = detect_pod_problem(&pod, now()).unwrap();
        assert_eq!(problem.kind, IssueKind::CrashLoopBackOff);
        assert_eq!(problem.severity, Severity::High);
        assert_eq!(problem.details, "Container app has crashed 12 times");
        assert_eq!(problem.restarts, 12);
        assert_eq!(problem.age, "5h");
        assert_eq!(problem.namespace, "shop");
    }

    #[test]
    fn test_image_pull() {
        let pod = with_container(pod(Some("a"), "p", Some("Pending")), waiting_container("app", "ErrImagePull", 0));
        let problem = detect_pod_problem(&pod, now()).unwrap();
        assert_eq!(problem.kind, IssueKind::ImagePullError);
        assert!(problem.details.contains("container app is waiting"));
    }

    #[test]
    fn test_failed_container() {
        let pod = with_container(pod(Some("a"), "p", Some("Failed")), terminated_container("job", 137, 0));
        let problem = detect_pod_problem(&pod, now()).unwrap();
        assert_eq!(problem.kind, IssueKind::ContainerFailed);
        assert_eq!(problem.details, "Container job terminated with exit code 137: Error");
    }

    #[test]
    fn test_oom_killed_last_state() {
        let mut container = running_container("app", true, 2);
        container.last_state = Some(ContainerState {
            terminated: Some(ContainerStateTerminated {
                exit_code: 137,
                reason: Some("OOMKilled".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let pod = with_container(pod(Some("a"), "p", Some("Running")), container);
        assert_eq!(detect_pod_problem(&pod, now()).unwrap().kind, IssueKind::OomKilled);
    }

    #[test]
    fn test_not_ready_and_frequent_restarts() {
        let fresh = with_container(pod(Some("a"), "p", Some("Running")), running_container("app", false, 0));
        let problem = detect_pod_problem(&fresh, now()).unwrap();
        assert_eq!(problem.kind, IssueKind::ContainerNotReady);
        assert_eq!(problem.severity, Severity::Medium);

        let flappy = with_container(pod(Some("a"), "q", Some("Running")), running_container("app", true, 6));
        assert_eq!(detect_pod_problem(&flappy, now()).unwrap().kind, IssueKind::FrequentRestarts);

        let settled = with_container(pod(Some("a"), "r", Some("Running")), running_container("app", true, 5));
        assert!(detect_pod_problem(&settled, now()).is_none());
    }

    #[test]
    fn test_evicted() {
        let mut evicted = pod(Some("a"), "p", Some("Failed"));
        let status = evicted.status.as_mut().unwrap();
        status.reason = Some("Evicted".to_string());
        status.message = Some("The node was low on resource: memory.".to_string());
        let problem = detect_pod_problem(&evicted, now()).unwrap();
        assert_eq!(problem.kind, IssueKind::Evicted);
        assert_eq!(problem.details, "The node was low on resource: memory.");
        assert_eq!(problem.age, "unknown");
    }

    #[test]
    fn test_owner_reference() {
        let mut owned = with_container(pod(Some("a"), "web-abc", Some("Running")), running_container("app", false, 0));
        owned.metadata.owner_references = Some(vec![OwnerReference {
            kind: "ReplicaSet".to_string(),
            name: "web-7d9f".to_string(),
            ..Default::default()
        }]);
        assert_eq!(
            detect_pod_problem(&owned, now()).unwrap().owner.as_deref(),
            Some("ReplicaSet/web-7d9f")
        );
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::High > Severity::Medium);
        assert_eq!(Severity::Medium.as_str(), "medium");
    }

    #[test]
    fn test_problem_pods_ordering() {
        let pods = vec![
            with_container(pod(Some("a"), "flappy", Some("Running")), running_container("app", true, 8)),
            with_container(pod(Some("a"), "crash-few", Some("Running")), waiting_container("app", "CrashLoopBackOff", 3)),
            running_pod("a", "fine"),
            with_container(pod(Some("a"), "crash-many", Some("Running")), waiting_container("app", "CrashLoopBackOff", 30)),
        ];
        let names: Vec<String> = problem_pods(&pods, now()).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["crash-many", "crash-few", "flappy"]);
    }
}
