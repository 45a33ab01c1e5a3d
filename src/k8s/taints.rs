use std::collections::{HashMap, HashSet};

use k8s_openapi::api::core::v1::{Node, Taint};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaintSummaryItem {
    pub taint: String,
    pub nodes: usize,
    pub occurrences: usize,
}

/// Canonical label: `key=value:Effect`, or `key:Effect` when the value is empty.
pub fn format_taint(taint: &Taint) -> String {
    match taint.value.as_deref() {
        Some(value) if !value.is_empty() => format!("{}={}:{}", taint.key, value, taint.effect),
        _ => format!("{}:{}", taint.key, taint.effect),
    }
}

/// Groups taints across nodes, most frequent first. Ties keep encounter order.
pub fn summarize_taints(nodes: &[Node]) -> Vec<TaintSummaryItem> {
    let mut index: HashMap<String, usize> = HashMap::new();
    // Distinct nodes are tracked by position so unnamed nodes stay distinct
    let mut groups: Vec<(String, HashSet<usize>, usize)> = Vec::new();

    for (position, node) in nodes.iter().enumerate() {
        let taints = node.spec.as_ref().and_then(|spec| spec.taints.as_ref());
        for taint in taints.into_iter().flatten() {
            let label = format_taint(taint);
            let slot = match index.get(&label) {
                Some(slot) => *slot,
                None => {
                    groups.push((label.clone(), HashSet::new(), 0));
                    index.insert(label, groups.len() - 1);
                    groups.len() - 1
                }
            };
            let (_, node_positions, occurrences) = &mut groups[slot];
            node_positions.insert(position);
            *occurrences += 1;
        }
    }

    let mut summary: Vec<TaintSummaryItem> = groups
        .into_iter()
        .map(|(taint, node_positions, occurrences)| TaintSummaryItem {
            taint,
            nodes: node_positions.len(),
            occurrences,
        })
        .collect();
    summary.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    summary
}
