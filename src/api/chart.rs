use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::TimeSeries;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartFrame, Renderer};

use super::ChartConfig;

/// Displayed data plus the configuration it is rendered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    pub config: ChartConfig,
    pub series: TimeSeries,
}

/// One chart widget bound to a render surface.
///
/// Owns its state exclusively. Callers replace the displayed series and then
/// ask for a redraw, which hands a [`ChartFrame`] to the renderer.
#[derive(Debug)]
pub struct ChartInstance<R: Renderer> {
    surface_id: String,
    state: ChartState,
    renderer: R,
    update_count: usize,
}

impl<R: Renderer> ChartInstance<R> {
    pub fn new(
        surface_id: impl Into<String>,
        config: ChartConfig,
        series: TimeSeries,
        renderer: R,
    ) -> ChartResult<Self> {
        let surface_id = surface_id.into();
        if surface_id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "chart surface id must not be empty".to_owned(),
            ));
        }
        config.validate()?;
        debug!(
            surface_id = %surface_id,
            kind = ?config.kind,
            points = series.len(),
            "create chart instance"
        );

        Ok(Self {
            surface_id,
            state: ChartState { config, series },
            renderer,
            update_count: 0,
        })
    }

    /// Replaces the displayed labels and values; configuration is untouched.
    pub fn replace_series(&mut self, series: &TimeSeries) {
        trace!(
            surface_id = %self.surface_id,
            previous = self.state.series.len(),
            next = series.len(),
            "replace series"
        );
        self.state.series.clone_from(series);
    }

    /// Redraws from current state.
    pub fn update(&mut self) -> ChartResult<()> {
        let frame = self.frame();
        self.renderer.update(&frame)?;
        self.update_count += 1;
        trace!(
            surface_id = %self.surface_id,
            update_count = self.update_count,
            "chart updated"
        );
        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> ChartFrame {
        let config = &self.state.config;
        ChartFrame {
            surface_id: self.surface_id.clone(),
            kind: config.kind,
            labels: self.state.series.labels().to_vec(),
            values: self.state.series.values().to_vec(),
            dataset: config.dataset.clone(),
            x_axis: config.x_axis.clone(),
            legend_visible: config.legend.display,
            responsive: config.responsive,
        }
    }

    #[must_use]
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.state.config
    }

    #[must_use]
    pub fn series(&self) -> &TimeSeries {
        &self.state.series
    }

    /// Number of successful redraws since creation.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.update_count
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
