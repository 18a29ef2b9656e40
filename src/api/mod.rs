mod chart;
mod chart_config;
mod controls;
mod dashboard;
pub mod presets;
mod selector;
mod validation;

pub use crate::render::{
    ChartKind, DatasetStyle, DisplayFormats, Distribution, TimeAxisConfig, TimeUnit,
};
pub use chart::{ChartInstance, ChartState};
pub use chart_config::{ChartConfig, LegendConfig};
pub use controls::{ControlRegistry, ControlSurface, DropdownControl};
pub use dashboard::{Dashboard, DashboardConfig, Widget, WidgetConfig, WidgetSlot};
pub use selector::{DatasetSelector, SelectionOutcome};
pub use validation::{DisplayFormatToken, tokenize_display_format};
