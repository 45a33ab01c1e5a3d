pub mod cluster_health;
pub mod heatmap;
pub mod namespace_stats;
pub mod node_status;
pub mod pod_phase;
pub mod problem_pod;
pub mod snapshot;
pub mod taints;
pub mod warning_events;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cluster_health::*;
pub use heatmap::*;
pub use namespace_stats::*;
pub use node_status::*;
pub use pod_phase::*;
pub use problem_pod::*;
pub use snapshot::*;
pub use taints::*;
pub use warning_events::*;
