use dioxus::prelude::*;
use kube::Client;

use crate::k8s::{fetch_snapshot, ClusterSnapshot};

/// Shared cluster data. Views derive their tables from `snapshot` with
/// `use_memo`, so every refresh recomputes them from scratch.
#[derive(Clone, Copy)]
pub struct SnapshotContext {
    pub snapshot: Signal<ClusterSnapshot>,
    pub loading: Signal<bool>,
    generation: Signal<u64>,
}

impl SnapshotContext {
    /// Reload every collection
    pub fn refresh(&mut self) {
        self.generation += 1;
    }
}

/// Provides the snapshot context and keeps it loaded for `client`
pub fn use_snapshot_provider(client: Client) -> SnapshotContext {
    let snapshot = use_signal(ClusterSnapshot::default);
    let loading = use_signal(|| true);
    let generation = use_signal(|| 0u64);

    let context = use_context_provider(|| SnapshotContext {
        snapshot,
        loading,
        generation,
    });

    use_effect(move || {
        // Re-run whenever a refresh bumps the generation
        let _ = generation();
        let client = client.clone();
        let mut snapshot = snapshot;
        let mut loading = loading;

        loading.set(true);
        spawn(async move {
            let fresh = fetch_snapshot(client).await;
            snapshot.set(fresh);
            loading.set(false);
        });
    });

    context
}
