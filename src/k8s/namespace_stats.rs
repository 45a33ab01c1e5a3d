use std::collections::HashMap;

use k8s_openapi::api::core::v1::Pod;
use serde::Serialize;

use crate::k8s::pod_phase::{classify_pod, pod_has_issues, pod_restart_count, PodPhaseCounts};
use crate::utils::config::UNKNOWN_PLACEHOLDER;

/// Per-namespace pod health. `issue_score = issues + restarts + warning_events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamespacePodStats {
    pub namespace: String,
    #[serde(flatten)]
    pub phases: PodPhaseCounts,
    pub issues: u64,
    pub restarts: u64,
    pub warning_events: u64,
    pub issue_score: u64,
    pub total: usize,
}

impl NamespacePodStats {
    fn new(namespace: &str) -> Self {
        NamespacePodStats {
            namespace: namespace.to_string(),
            ..Default::default()
        }
    }
}

pub fn pod_namespace(pod: &Pod) -> &str {
    match pod.metadata.namespace.as_deref() {
        Some(ns) if !ns.is_empty() => ns,
        _ => UNKNOWN_PLACEHOLDER,
    }
}

/// Builds one entry per namespace that has pods, joined with the warning
/// counts from `warnings`. Sorted by issues, then by pod count.
pub fn namespace_pod_stats(pods: &[Pod], warnings: &HashMap<String, u64>) -> Vec<NamespacePodStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<NamespacePodStats> = Vec::new();

    for pod in pods {
        let namespace = pod_namespace(pod);
        let slot = *index.entry(namespace).or_insert_with(|| {
            stats.push(NamespacePodStats::new(namespace));
            stats.len() - 1
        });

        let entry = &mut stats[slot];
        entry.phases.add(classify_pod(pod));
        entry.total += 1;
        if pod_has_issues(pod) {
            entry.issues += 1;
        }
        entry.restarts += pod_restart_count(pod);
    }

    for entry in stats.iter_mut() {
        entry.warning_events = warnings.get(&entry.namespace).copied().unwrap_or(0);
        entry.issue_score = entry.issues + entry.restarts + entry.warning_events;
    }

    stats.sort_by(|a, b| b.issues.cmp(&a.issues).then_with(|| b.total.cmp(&a.total)));
    stats
}

/// Namespaces with a non-zero issue score, worst first, at most `limit`.
pub fn top_offenders(stats: &[NamespacePodStats], limit: usize) -> Vec<NamespacePodStats> {
    let mut offenders: Vec<NamespacePodStats> = stats
        .iter()
        .filter(|entry| entry.issue_score > 0)
        .cloned()
        .collect();
    offenders.sort_by(|a, b| b.issue_score.cmp(&a.issue_score));
    offenders.truncate(limit);
    offenders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k8s::fixtures::*;

    fn warnings(entries: &[(&str, u64)]) -> HashMap<String, u64> {
        entries.iter().map(|(ns, count)| (ns.to_string(), *count)).collect()
    }

    fn troubled_pod(namespace: &str, name: &str, restarts: i32) -> Pod {
        with_container(
            pod(Some(namespace), name, Some("Running")),
            running_container("app", false, restarts),
        )
    }

    #[test]
    fn test_issue_score_scenario() {
        let pods = vec![
            troubled_pod("shop", "cart-1", 1),
            troubled_pod("shop", "cart-2", 2),
            running_pod("shop", "web-1"),
        ];
        let stats = namespace_pod_stats(&pods, &warnings(&[("shop", 4)]));
        assert_eq!(stats.len(), 1);
        let shop = &stats[0];
        assert_eq!(shop.issues, 2);
        assert_eq!(shop.restarts, 3);
        assert_eq!(shop.warning_events, 4);
        assert_eq!(shop.issue_score, 9);
        assert_eq!(shop.total, 3);
        assert_eq!(shop.phases.running, 3);
    }

    #[test]
    fn test_phase_counts_sum_to_total() {
        let pods = vec![
            pod(Some("a"), "1", Some("Running")),
            pod(Some("a"), "2", Some("Pending")),
            pod(Some("a"), "3", Some("Succeeded")),
            pod(Some("a"), "4", Some("Failed")),
            pod(Some("a"), "5", None),
            pod(None, "6", Some("Running")),
        ];
        for entry in namespace_pod_stats(&pods, &HashMap::new()) {
            assert_eq!(entry.phases.total(), entry.total);
        }
    }

    #[test]
    fn test_missing_namespace_uses_placeholder() {
        let stats = namespace_pod_stats(&[pod(None, "orphan", Some("Running"))], &HashMap::new());
        assert_eq!(stats[0].namespace, "<unknown>");
    }

    #[test]
    fn test_warnings_only_join_existing_namespaces() {
        let pods = vec![running_pod("a", "web")];
        let stats = namespace_pod_stats(&pods, &warnings(&[("a", 2), ("ghost", 7), ("<cluster>", 1)]));
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].warning_events, 2);
        assert_eq!(stats[0].issue_score, 2);
    }

    #[test]
    fn test_sorted_by_issues_then_total() {
        let pods = vec![
            running_pod("quiet", "1"),
            running_pod("quiet", "2"),
            running_pod("quiet", "3"),
            running_pod("small", "1"),
            troubled_pod("noisy", "1", 0),
        ];
        let order: Vec<String> = namespace_pod_stats(&pods, &HashMap::new())
            .into_iter()
            .map(|entry| entry.namespace)
            .collect();
        assert_eq!(order, vec!["noisy", "quiet", "small"]);
    }

    #[test]
    fn test_top_offenders() {
        let pods = vec![
            running_pod("clean", "1"),
            troubled_pod("restarts", "1", 10),
            troubled_pod("issues", "1", 0),
            running_pod("warned", "1"),
        ];
        let stats = namespace_pod_stats(&pods, &warnings(&[("warned", 3)]));
        let top = top_offenders(&stats, 2);
        let names: Vec<&str> = top.iter().map(|entry| entry.namespace.as_str()).collect();
        assert_eq!(names, vec!["restarts", "warned"]);

        let all = top_offenders(&stats, 10);
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|entry| entry.issue_score > 0));
    }

    #[test]
    fn test_stats_are_idempotent() {
        let pods = vec![troubled_pod("a", "1", 2), running_pod("b", "1")];
        let warnings = warnings(&[("a", 1)]);
        assert_eq!(namespace_pod_stats(&pods, &warnings), namespace_pod_stats(&pods, &warnings));
    }

    #[test]
    fn test_flat_field_names() {
        let stats = namespace_pod_stats(&[running_pod("a", "web")], &HashMap::new());
        let value = serde_json::to_value(&stats[0]).unwrap();
        for field in [
            "namespace", "running", "pending", "failed", "succeeded", "unknown", "issues",
            "restarts", "warning_events", "issue_score", "total",
        ] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
        assert!(value.get("phases").is_none());
    }
}
