//! Shared building blocks for the dashboard views.

mod distribution_bar;
pub use distribution_bar::{DistributionBar, Segment};

mod heatmap_grid;
pub use heatmap_grid::HeatmapGrid;

mod search_input;
pub use search_input::SearchInput;

mod stat_card;
pub use stat_card::StatCard;

pub mod table_state;
pub use table_state::TableState;
