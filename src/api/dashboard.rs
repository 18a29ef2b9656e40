use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{RangeTable, TimeSeries};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{
    ChartConfig, ChartInstance, ControlRegistry, ControlSurface, DatasetSelector, DropdownControl,
    SelectionOutcome,
};

/// Setup of one widget: where it renders and which dropdown drives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub surface_id: String,
    pub control_id: String,
    pub chart: ChartConfig,
    /// Series shown before the first selection; defaults to the default range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_series: Option<TimeSeries>,
    /// Widget-specific range table overriding the dashboard table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranges: Option<RangeTable>,
}

impl WidgetConfig {
    #[must_use]
    pub fn new(
        surface_id: impl Into<String>,
        control_id: impl Into<String>,
        chart: ChartConfig,
    ) -> Self {
        Self {
            surface_id: surface_id.into(),
            control_id: control_id.into(),
            chart,
            initial_series: None,
            ranges: None,
        }
    }

    #[must_use]
    pub fn with_initial_series(mut self, series: TimeSeries) -> Self {
        self.initial_series = Some(series);
        self
    }

    #[must_use]
    pub fn with_ranges(mut self, ranges: RangeTable) -> Self {
        self.ranges = Some(ranges);
        self
    }
}

/// Serializable description of the whole dashboard.
///
/// Range tables are plain data here, so alternative sample sets are swapped
/// by loading a different config rather than by editing code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub line: WidgetConfig,
    pub bar: WidgetConfig,
    pub ranges: RangeTable,
}

impl DashboardConfig {
    #[must_use]
    pub fn new(line: WidgetConfig, bar: WidgetConfig, ranges: RangeTable) -> Self {
        Self { line, bar, ranges }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for widget in [&self.line, &self.bar] {
            if widget.control_id.trim().is_empty() {
                return Err(ChartError::InvalidData(
                    "widget control id must not be empty".to_owned(),
                ));
            }
            widget.chart.validate()?;
        }
        if self.line.control_id == self.bar.control_id {
            return Err(ChartError::InvalidData(format!(
                "widgets must use distinct controls, both use `{}`",
                self.line.control_id
            )));
        }
        if self.line.surface_id == self.bar.surface_id {
            return Err(ChartError::InvalidData(format!(
                "widgets must use distinct surfaces, both use `{}`",
                self.line.surface_id
            )));
        }
        Ok(())
    }

    /// Builds dropdowns listing each widget's range labels, with the default
    /// range selected.
    #[must_use]
    pub fn control_registry(&self) -> ControlRegistry {
        let mut registry = ControlRegistry::new();
        for widget in [&self.line, &self.bar] {
            let table = widget.ranges.as_ref().unwrap_or(&self.ranges);
            let mut control = DropdownControl::new(widget.control_id.clone(), table.labels());
            control.select_text(table.default_label());
            registry.insert(control);
        }
        registry
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize dashboard config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse dashboard config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Identifies one of the dashboard's two widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSlot {
    Line,
    Bar,
}

/// A chart instance together with the dropdown and selector that drive it.
#[derive(Debug)]
pub struct Widget<R: Renderer> {
    control_id: String,
    selector: DatasetSelector,
    chart: ChartInstance<R>,
}

impl<R: Renderer> Widget<R> {
    fn from_config(
        config: WidgetConfig,
        shared_ranges: &RangeTable,
        renderer: R,
    ) -> ChartResult<Self> {
        let table = config.ranges.unwrap_or_else(|| shared_ranges.clone());
        let initial = config
            .initial_series
            .unwrap_or_else(|| table.default_option().series.clone());
        let chart = ChartInstance::new(config.surface_id, config.chart, initial, renderer)?;
        Ok(Self {
            control_id: config.control_id,
            selector: DatasetSelector::new(table),
            chart,
        })
    }

    fn apply(&mut self, controls: &impl ControlSurface) -> ChartResult<SelectionOutcome> {
        let control = controls.require_dropdown(&self.control_id)?;
        self.selector.apply_selection(control, &mut self.chart)
    }

    #[must_use]
    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    #[must_use]
    pub fn selector(&self) -> &DatasetSelector {
        &self.selector
    }

    #[must_use]
    pub fn chart(&self) -> &ChartInstance<R> {
        &self.chart
    }
}

/// Top-level controller owning the line and bar widgets.
///
/// Built once and passed explicitly to selection handlers. The widgets never
/// share state: a selection on one control only touches its own chart.
#[derive(Debug)]
pub struct Dashboard<R: Renderer> {
    line: Widget<R>,
    bar: Widget<R>,
}

impl<R: Renderer> Dashboard<R> {
    pub fn new(config: DashboardConfig, line_renderer: R, bar_renderer: R) -> ChartResult<Self> {
        config.validate()?;
        let DashboardConfig { line, bar, ranges } = config;
        let line = Widget::from_config(line, &ranges, line_renderer)?;
        let bar = Widget::from_config(bar, &ranges, bar_renderer)?;
        debug!(
            line_control = %line.control_id,
            bar_control = %bar.control_id,
            "dashboard ready"
        );
        Ok(Self { line, bar })
    }

    /// Draws both widgets from their current state.
    pub fn render_all(&mut self) -> ChartResult<()> {
        self.line.chart.update()?;
        self.bar.chart.update()
    }

    /// Selection handler for the line widget's dropdown.
    pub fn apply_line_selection(
        &mut self,
        controls: &impl ControlSurface,
    ) -> ChartResult<SelectionOutcome> {
        self.line.apply(controls)
    }

    /// Selection handler for the bar widget's dropdown.
    pub fn apply_bar_selection(
        &mut self,
        controls: &impl ControlSurface,
    ) -> ChartResult<SelectionOutcome> {
        self.bar.apply(controls)
    }

    /// Routes a selection-changed event to the widget bound to `control_id`.
    pub fn on_selection_changed(
        &mut self,
        control_id: &str,
        controls: &impl ControlSurface,
    ) -> ChartResult<SelectionOutcome> {
        match self.slot_for_control(control_id) {
            Some(WidgetSlot::Line) => self.apply_line_selection(controls),
            Some(WidgetSlot::Bar) => self.apply_bar_selection(controls),
            None => {
                warn!(control_id, "selection event from unbound control");
                Err(ChartError::UnknownControl(control_id.to_owned()))
            }
        }
    }

    #[must_use]
    pub fn slot_for_control(&self, control_id: &str) -> Option<WidgetSlot> {
        if self.line.control_id == control_id {
            Some(WidgetSlot::Line)
        } else if self.bar.control_id == control_id {
            Some(WidgetSlot::Bar)
        } else {
            None
        }
    }

    #[must_use]
    pub fn widget(&self, slot: WidgetSlot) -> &Widget<R> {
        match slot {
            WidgetSlot::Line => &self.line,
            WidgetSlot::Bar => &self.bar,
        }
    }

    #[must_use]
    pub fn line(&self) -> &Widget<R> {
        &self.line
    }

    #[must_use]
    pub fn bar(&self) -> &Widget<R> {
        &self.bar
    }

    #[must_use]
    pub fn into_renderers(self) -> (R, R) {
        (self.line.chart.into_renderer(), self.bar.chart.into_renderer())
    }
}
