use std::collections::{BTreeSet, HashMap};

use k8s_openapi::{
    api::core::v1::Event,
    chrono::{DateTime, Utc},
};
use serde::Serialize;

use crate::utils::{
    age_since,
    config::{CLUSTER_SCOPE_PLACEHOLDER, REASON_SAMPLE_LIMIT, UNKNOWN_PLACEHOLDER},
};

pub fn is_warning(event: &Event) -> bool {
    event.type_.as_deref() == Some("Warning")
}

pub fn is_normal(event: &Event) -> bool {
    event.type_.as_deref() == Some("Normal")
}

/// Repeat count of an event; absent counts as a single occurrence.
pub fn event_count(event: &Event) -> u64 {
    event.count.map(|count| count.max(0) as u64).unwrap_or(1)
}

/// Namespace of the involved object, `<cluster>` for cluster-scoped objects.
pub fn event_namespace(event: &Event) -> &str {
    match event.involved_object.namespace.as_deref() {
        Some(ns) if !ns.is_empty() => ns,
        _ => CLUSTER_SCOPE_PLACEHOLDER,
    }
}

pub fn event_reason(event: &Event) -> &str {
    match event.reason.as_deref() {
        Some(reason) if !reason.is_empty() => reason,
        _ => UNKNOWN_PLACEHOLDER,
    }
}

/// Most recent timestamp an event carries: last seen, then event time, then
/// first seen.
pub fn event_timestamp(event: &Event) -> Option<DateTime<Utc>> {
    if let Some(ts) = &event.last_timestamp {
        return Some(ts.0);
    }
    if let Some(ts) = &event.event_time {
        return Some(ts.0);
    }
    event.first_timestamp.as_ref().map(|ts| ts.0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceWarningCount {
    pub namespace: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningReasonSummary {
    pub reason: String,
    pub count: u64,
    pub namespaces: BTreeSet<String>,
    pub resources: Vec<String>,
}

/// Summed warning counts per namespace, largest first.
pub fn warnings_by_namespace(events: &[Event]) -> Vec<NamespaceWarningCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<NamespaceWarningCount> = Vec::new();

    for event in events.iter().filter(|e| is_warning(e)) {
        let namespace = event_namespace(event);
        let slot = *index.entry(namespace).or_insert_with(|| {
            counts.push(NamespaceWarningCount {
                namespace: namespace.to_string(),
                count: 0,
            });
            counts.len() - 1
        });
        counts[slot].count += event_count(event);
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Lookup form of [`warnings_by_namespace`], joined against pod namespaces.
pub fn warning_counts_by_namespace(events: &[Event]) -> HashMap<String, u64> {
    warnings_by_namespace(events)
        .into_iter()
        .map(|entry| (entry.namespace, entry.count))
        .collect()
}

/// Warning events grouped by reason, largest summed count first.
pub fn warnings_by_reason(events: &[Event]) -> Vec<WarningReasonSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<WarningReasonSummary> = Vec::new();

    for event in events.iter().filter(|e| is_warning(e)) {
        let reason = event_reason(event);
        let slot = *index.entry(reason).or_insert_with(|| {
            summaries.push(WarningReasonSummary {
                reason: reason.to_string(),
                count: 0,
                namespaces: BTreeSet::new(),
                resources: Vec::new(),
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        summary.count += event_count(event);
        summary.namespaces.insert(event_namespace(event).to_string());
        if let Some(name) = event.involved_object.name.as_deref() {
            if summary.resources.len() < REASON_SAMPLE_LIMIT
                && !summary.resources.iter().any(|r| r == name)
            {
                summary.resources.push(name.to_string());
            }
        }
    }

    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentWarning {
    pub reason: String,
    pub message: String,
    pub namespace: String,
    pub object: String,
    pub count: u64,
    pub age: String,
}

/// Newest warnings first; events without any timestamp go last.
pub fn recent_warnings(events: &[Event], now: DateTime<Utc>, limit: usize) -> Vec<RecentWarning> {
    let mut warnings: Vec<&Event> = events.iter().filter(|e| is_warning(e)).collect();
    warnings.sort_by(|a, b| event_timestamp(b).cmp(&event_timestamp(a)));

    warnings
        .into_iter()
        .take(limit)
        .map(|event| {
            let involved = &event.involved_object;
            RecentWarning {
                reason: event_reason(event).to_string(),
                message: event.message.clone().unwrap_or_default(),
                namespace: event_namespace(event).to_string(),
                object: format!(
                    "{}/{}",
                    involved.kind.as_deref().unwrap_or("Unknown"),
                    involved.name.as_deref().unwrap_or(UNKNOWN_PLACEHOLDER)
                ),
                count: event_count(event),
                age: age_since(event_timestamp(event), now),
            }
        })
        .collect()
}
