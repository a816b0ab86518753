mod chart_config;
mod chart_layout;
mod stacked_bar;

pub use chart_config::{ChartConfig, Padding};
pub use chart_layout::{ChartGeometry, ChartLayoutCoordinator};
pub use stacked_bar::{StackedBarChart, StackedBarData};
