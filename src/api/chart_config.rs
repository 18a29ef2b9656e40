use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartKind, DatasetStyle, DisplayFormats, Distribution, TimeAxisConfig};

use super::validation::validate_chart_config;

/// Whether the dataset legend is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub display: bool,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { display: true }
    }
}

/// Typed configuration of one chart widget.
///
/// Replaces the loosely shaped option object of browser charting libraries:
/// every recognized option is an enum or a validated value, so malformed
/// setups are rejected when the chart instance is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    #[serde(default = "default_responsive")]
    pub responsive: bool,
    #[serde(default)]
    pub legend: LegendConfig,
    pub dataset: DatasetStyle,
    #[serde(default)]
    pub x_axis: TimeAxisConfig,
}

impl ChartConfig {
    #[must_use]
    pub fn new(kind: ChartKind, dataset: DatasetStyle) -> Self {
        Self {
            kind,
            responsive: default_responsive(),
            legend: LegendConfig::default(),
            dataset,
            x_axis: TimeAxisConfig::default(),
        }
    }

    #[must_use]
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    #[must_use]
    pub fn with_legend_display(mut self, display: bool) -> Self {
        self.legend = LegendConfig { display };
        self
    }

    #[must_use]
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.x_axis.distribution = distribution;
        self
    }

    #[must_use]
    pub fn with_display_formats(mut self, display_formats: DisplayFormats) -> Self {
        self.x_axis.display_formats = display_formats;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_chart_config(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_responsive() -> bool {
    true
}
