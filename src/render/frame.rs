use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartKind, DatasetStyle, TimeAxisConfig};

/// Materialized chart state handed to a renderer on each update.
///
/// Mirrors what a charting library reads after its data arrays were mutated:
/// labels, one dataset's values and the unchanged styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub surface_id: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub dataset: DatasetStyle,
    pub x_axis: TimeAxisConfig,
    pub legend_visible: bool,
    /// Whether the surface resizes with its container.
    pub responsive: bool,
}

impl ChartFrame {
    pub fn validate(&self) -> ChartResult<()> {
        if self.surface_id.is_empty() {
            return Err(ChartError::InvalidData(
                "frame surface id must not be empty".to_owned(),
            ));
        }
        if self.labels.len() != self.values.len() {
            return Err(ChartError::LengthMismatch {
                labels: self.labels.len(),
                values: self.values.len(),
            });
        }
        self.dataset.background_color.validate()?;
        self.dataset.border_color.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
