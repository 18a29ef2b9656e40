use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{RangeTable, Resolution};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartInstance, DropdownControl};

/// What a selection change applied to a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    /// Text read from the dropdown.
    pub selected_text: String,
    /// Label of the range that was applied.
    pub applied_label: String,
    /// `true` when the text was unknown and the default range was applied.
    pub fallback: bool,
    pub notice: Option<String>,
    pub points: usize,
}

/// Maps dropdown selections to range series and pushes them into a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSelector {
    table: RangeTable,
}

impl DatasetSelector {
    #[must_use]
    pub fn new(table: RangeTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &RangeTable {
        &self.table
    }

    #[must_use]
    pub fn resolve(&self, text: &str) -> Resolution<'_> {
        self.table.resolve(text)
    }

    /// Applies the control's current selection to `chart` and redraws it.
    ///
    /// Unknown texts apply the table's default range. A control without a
    /// non-empty selection is rejected before the chart is touched.
    pub fn apply_selection<R: Renderer>(
        &self,
        control: &DropdownControl,
        chart: &mut ChartInstance<R>,
    ) -> ChartResult<SelectionOutcome> {
        let text = control.selected_text()?;
        self.apply_text(text, chart)
    }

    /// Applies a selection given directly as text.
    pub fn apply_text<R: Renderer>(
        &self,
        text: &str,
        chart: &mut ChartInstance<R>,
    ) -> ChartResult<SelectionOutcome> {
        let Resolution { option, fallback } = self.resolve(text);
        debug!(
            surface_id = chart.surface_id(),
            selected = text,
            applied = %option.label,
            fallback,
            "apply range selection"
        );

        chart.replace_series(&option.series);
        chart.update()?;

        Ok(SelectionOutcome {
            selected_text: text.to_owned(),
            applied_label: option.label.clone(),
            fallback,
            notice: option.notice.clone(),
            points: option.series.len(),
        })
    }
}
