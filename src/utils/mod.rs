/// Configuration constants for the application
pub mod config {
    /// Default kubeconfig identifier
    pub const DEFAULT_KUBECONFIG: &str = "default";

    /// Command line flag selecting a kubeconfig file
    pub const KUBECONFIG_FLAG: &str = "--kubeconfig";

    /// Namespace reported for events about cluster-scoped objects
    pub const CLUSTER_SCOPE_PLACEHOLDER: &str = "<cluster>";

    /// Stand-in for a missing pod namespace or event reason
    pub const UNKNOWN_PLACEHOLDER: &str = "<unknown>";

    /// Affected resource names kept per warning reason
    pub const REASON_SAMPLE_LIMIT: usize = 10;

    /// Namespaces shown in the "top offenders" ranking
    pub const TOP_OFFENDERS_LIMIT: usize = 8;

    /// Namespaces shown in the overview ranking
    pub const OVERVIEW_RANKING_LIMIT: usize = 10;

    /// Rows in the recent warnings table
    pub const RECENT_WARNINGS_LIMIT: usize = 20;

    /// Problem pod cards revealed per "Show More" click
    pub const PROBLEM_POD_PAGE_SIZE: usize = 6;

    /// Restarts above this count flag a container as frequently restarting
    pub const FREQUENT_RESTART_THRESHOLD: i32 = 5;

    /// Health score weights
    pub const NODE_HEALTH_WEIGHT: f64 = 40.0;
    pub const POD_HEALTH_WEIGHT: f64 = 40.0;
    pub const WARNING_EVENT_BUDGET: u64 = 20;

    /// Health status banding
    pub const HEALTHY_SCORE_THRESHOLD: i32 = 80;
    pub const WARNING_SCORE_THRESHOLD: i32 = 50;
}

/// Utility functions for time and age calculations
pub mod time_utils {
    use k8s_openapi::chrono::{DateTime, Utc};

    /// Formats a duration in seconds into a human-readable string (e.g., "2d", "5h", "30m")
    pub fn format_duration(seconds: i64) -> String {
        let seconds = seconds.max(0);
        if seconds < 60 {
            format!("{}s", seconds)
        } else if seconds < 3600 {
            format!("{}m", seconds / 60)
        } else if seconds < 86400 {
            format!("{}h", seconds / 3600)
        } else {
            format!("{}d", seconds / 86400)
        }
    }

    /// Age of a timestamp relative to `now`
    pub fn age_since(time: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
        match time {
            Some(time) => format_duration(now.signed_duration_since(time).num_seconds()),
            None => "unknown".to_string(),
        }
    }
}

pub use time_utils::age_since;
