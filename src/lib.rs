//! slotchart-rs: discrete-label chart layout.
//!
//! The crate centers on the axis slot-layout engine, which spreads labeled
//! slots evenly along one axis within min/max separation and slot-size bounds.
//! Chart-level coordination reserves axis bands around a plot area, and the
//! render module turns computed layouts into backend-agnostic draw primitives.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartLayoutCoordinator, StackedBarChart};
pub use error::{ChartError, ChartResult};
