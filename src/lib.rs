//! range-chart: time-range dataset selection for chart widgets.
//!
//! A dropdown picks one of a fixed set of time ranges, the matching series is
//! pushed into a chart instance and the chart is redrawn through a
//! [`render::Renderer`]. Chart options are strongly typed and validated when
//! an instance is created.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartInstance, Dashboard, DashboardConfig, DatasetSelector};
pub use error::{ChartError, ChartResult};
