use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Chart widget kinds supported by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// How samples are spread along the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// Distance between points is proportional to elapsed time.
    #[default]
    Linear,
}

/// Time units a time axis may pick for its ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 9] = [
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Quarter,
        TimeUnit::Year,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Year => "year",
        }
    }
}

/// Per-unit display-format patterns (`HH:mm:ss`, `MMM YYYY`, ...).
///
/// Units without an entry are left to the charting backend's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayFormats(IndexMap<TimeUnit, String>);

impl DisplayFormats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, unit: TimeUnit, pattern: impl Into<String>) -> Self {
        self.0.insert(unit, pattern.into());
        self
    }

    pub fn set(&mut self, unit: TimeUnit, pattern: impl Into<String>) {
        self.0.insert(unit, pattern.into());
    }

    #[must_use]
    pub fn get(&self, unit: TimeUnit) -> Option<&str> {
        self.0.get(&unit).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeUnit, &str)> + '_ {
        self.0.iter().map(|(unit, pattern)| (*unit, pattern.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// X-axis configuration. The axis is always a time axis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeAxisConfig {
    #[serde(default)]
    pub distribution: Distribution,
    #[serde(default)]
    pub display_formats: DisplayFormats,
}

/// Styling of the single dataset a widget displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStyle {
    pub label: String,
    #[serde(default)]
    pub fill: bool,
    pub background_color: Color,
    pub border_color: Color,
}

impl DatasetStyle {
    #[must_use]
    pub fn new(label: impl Into<String>, background_color: Color, border_color: Color) -> Self {
        Self {
            label: label.into(),
            fill: false,
            background_color,
            border_color,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }
}
