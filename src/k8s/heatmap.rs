use serde::Serialize;

use crate::k8s::namespace_stats::NamespacePodStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapEntry {
    #[serde(flatten)]
    pub stats: NamespacePodStats,
    pub intensity: u8,
}

/// Five-level bucket of `score` relative to the largest score on the map.
pub fn intensity(score: u64, max_score: u64) -> u8 {
    if max_score == 0 {
        return 0;
    }
    let ratio = score as f64 / max_score as f64;
    if ratio >= 0.75 {
        4
    } else if ratio >= 0.5 {
        3
    } else if ratio >= 0.25 {
        2
    } else if ratio > 0.0 {
        1
    } else {
        0
    }
}

/// Annotates each entry with its intensity, keeping the input order.
pub fn bucketize(stats: &[NamespacePodStats]) -> Vec<HeatmapEntry> {
    let max_score = stats.iter().map(|entry| entry.issue_score).max().unwrap_or(0);
    stats
        .iter()
        .map(|entry| HeatmapEntry {
            stats: entry.clone(),
            intensity: intensity(entry.issue_score, max_score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(namespace: &str, issue_score: u64) -> NamespacePodStats {
        NamespacePodStats {
            namespace: namespace.to_string(),
            issue_score,
            ..Default::default()
        }
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(intensity(100, 100), 4);
        assert_eq!(intensity(75, 100), 4);
        assert_eq!(intensity(74, 100), 3);
        assert_eq!(intensity(50, 100), 3);
        assert_eq!(intensity(49, 100), 2);
        assert_eq!(intensity(25, 100), 2);
        assert_eq!(intensity(24, 100), 1);
        assert_eq!(intensity(1, 100), 1);
        assert_eq!(intensity(0, 100), 0);
    }

    #[test]
    fn test_all_zero_scores() {
        let entries = bucketize(&[scored("a", 0), scored("b", 0)]);
        assert!(entries.iter().all(|entry| entry.intensity == 0));
    }

    #[test]
    fn test_max_is_hottest_and_order_is_kept() {
        let entries = bucketize(&[scored("low", 1), scored("top", 12), scored("none", 0), scored("mid", 6)]);
        let view: Vec<(&str, u8)> = entries
            .iter()
            .map(|entry| (entry.stats.namespace.as_str(), entry.intensity))
            .collect();
        assert_eq!(view, vec![("low", 1), ("top", 4), ("none", 0), ("mid", 3)]);
    }

    #[test]
    fn test_bucketize_is_idempotent() {
        let stats = [scored("a", 3), scored("b", 9), scored("c", 0)];
        assert_eq!(bucketize(&stats), bucketize(&stats));
    }

    #[test]
    fn test_empty_input() {
        assert!(bucketize(&[]).is_empty());
    }
}
