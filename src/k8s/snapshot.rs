use std::fmt::Debug;

use dioxus::logger::tracing;
use k8s_openapi::{
    api::core::v1::{Event, Namespace, Node, Pod},
    chrono::{DateTime, Utc},
};
use kube::{
    api::{Api, ListParams},
    Client, Resource,
};
use serde::de::DeserializeOwned;

/// Point-in-time copy of every collection the dashboard derives from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterSnapshot {
    pub nodes: Vec<Node>,
    pub pods: Vec<Pod>,
    pub namespaces: Vec<Namespace>,
    pub events: Vec<Event>,
    pub fetched_at: Option<DateTime<Utc>>,
}

async fn list_all<K>(client: Client, kind: &str) -> Vec<K>
where
    K: Resource + Clone + DeserializeOwned + Debug,
    <K as Resource>::DynamicType: Default,
{
    let api: Api<K> = Api::all(client);
    match api.list(&ListParams::default()).await {
        Ok(list) => list.items,
        Err(e) => {
            tracing::error!("Failed to fetch {}: {}", kind, e);
            Vec::new()
        }
    }
}

/// Lists nodes, pods, namespaces and events cluster-wide. A kind that fails
/// to list comes back empty.
pub async fn fetch_snapshot(client: Client) -> ClusterSnapshot {
    let (nodes, pods, namespaces, events) = futures::join!(
        list_all::<Node>(client.clone(), "nodes"),
        list_all::<Pod>(client.clone(), "pods"),
        list_all::<Namespace>(client.clone(), "namespaces"),
        list_all::<Event>(client, "events"),
    );

    tracing::info!(
        "Snapshot loaded: {} nodes, {} pods, {} namespaces, {} events",
        nodes.len(),
        pods.len(),
        namespaces.len(),
        events.len()
    );

    ClusterSnapshot {
        nodes,
        pods,
        namespaces,
        events,
        fetched_at: Some(Utc::now()),
    }
}
