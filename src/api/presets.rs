//! Built-in sample setup for the connections ("Conexiones") dashboard.
//!
//! All series here are static fixtures. Hosts with real data should load a
//! [`DashboardConfig`] from JSON instead.

use crate::core::{RangeOption, RangeTable, TimeSeries};
use crate::error::ChartResult;
use crate::render::Color;

use super::{
    ChartConfig, ChartKind, DashboardConfig, DatasetStyle, DisplayFormats, TimeUnit, WidgetConfig,
};

pub const LAST_HOUR: &str = "Last hour";
pub const LAST_FIVE_HOURS: &str = "Last five hours";
pub const LAST_DAY: &str = "Last day";
pub const LAST_THREE_DAYS: &str = "Last three days";

pub const LINE_SURFACE_ID: &str = "lineChart";
pub const BAR_SURFACE_ID: &str = "barChart";
pub const LINE_CONTROL_ID: &str = "longTimeLine";
pub const BAR_CONTROL_ID: &str = "longTimeBar";

pub const CONNECTIONS_DATASET_LABEL: &str = "Conexiones";

pub fn last_hour_series() -> ChartResult<TimeSeries> {
    TimeSeries::from_pairs([
        ("2022-06-10 13:00:00", 0.0),
        ("2022-06-10 13:08:00", 1.0),
        ("2022-06-10 13:17:00", 3.0),
        ("2022-06-10 13:25:00", 5.0),
        ("2022-06-10 13:34:00", 10.0),
        ("2022-06-10 13:42:00", 11.0),
        ("2022-06-10 13:51:00", 12.0),
        ("2022-06-10 14:00:00", 12.0),
    ])
}

pub fn last_five_hours_series() -> ChartResult<TimeSeries> {
    TimeSeries::from_pairs([
        ("2022-06-10 09:00:00", 0.0),
        ("2022-06-10 09:45:00", 4.0),
        ("2022-06-10 10:25:00", 9.0),
        ("2022-06-10 11:10:00", 15.0),
        ("2022-06-10 11:50:00", 22.0),
        ("2022-06-10 12:35:00", 26.0),
        ("2022-06-10 13:15:00", 31.0),
        ("2022-06-10 14:00:00", 35.0),
    ])
}

pub fn last_day_series() -> ChartResult<TimeSeries> {
    TimeSeries::from_pairs([
        ("2022-06-09 14:00:00", 0.0),
        ("2022-06-09 17:30:00", 8.0),
        ("2022-06-09 21:00:00", 15.0),
        ("2022-06-10 00:30:00", 19.0),
        ("2022-06-10 04:00:00", 27.0),
        ("2022-06-10 07:30:00", 36.0),
        ("2022-06-10 11:00:00", 41.0),
        ("2022-06-10 14:00:00", 50.0),
    ])
}

pub fn last_three_days_series() -> ChartResult<TimeSeries> {
    TimeSeries::from_pairs([
        ("2022-06-07 14:00:00", 0.0),
        ("2022-06-08 00:00:00", 25.0),
        ("2022-06-08 10:00:00", 39.0),
        ("2022-06-08 20:00:00", 43.0),
        ("2022-06-09 06:00:00", 55.0),
        ("2022-06-09 16:00:00", 74.0),
        ("2022-06-10 02:00:00", 88.0),
        ("2022-06-10 14:00:00", 100.0),
    ])
}

/// Monthly totals shown before any range is picked.
pub fn monthly_connections_series() -> ChartResult<TimeSeries> {
    TimeSeries::from_pairs([
        ("2022-01-01", 2.0),
        ("2022-02-01", 8.0),
        ("2022-03-01", 10.0),
        ("2022-04-01", 12.0),
        ("2022-05-01", 15.0),
        ("2022-06-01", 20.0),
        ("2022-07-01", 22.0),
        ("2022-08-01", 25.0),
        ("2022-09-01", 29.0),
        ("2022-10-01", 33.0),
        ("2022-11-01", 40.0),
        ("2022-12-01", 42.0),
    ])
}

/// The four selectable ranges; "Last three days" is the fallback.
pub fn connection_ranges() -> ChartResult<RangeTable> {
    RangeTable::new(
        [
            RangeOption::new(LAST_HOUR, last_hour_series()?)
                .with_notice("Se va a ver la ultima hora"),
            RangeOption::new(LAST_FIVE_HOURS, last_five_hours_series()?)
                .with_notice("Se van a ver las ultimas 5 horas"),
            RangeOption::new(LAST_DAY, last_day_series()?)
                .with_notice("Se va a ver el ultimo dia"),
            RangeOption::new(LAST_THREE_DAYS, last_three_days_series()?)
                .with_notice("Se va a ver los ultimos 3 dias"),
        ],
        LAST_THREE_DAYS,
    )
}

fn connections_display_formats(month_pattern: &str) -> DisplayFormats {
    DisplayFormats::new()
        .with(TimeUnit::Hour, "HH:mm:ss")
        .with(TimeUnit::Day, "HH:mm")
        .with(TimeUnit::Week, "MMM DD")
        .with(TimeUnit::Month, month_pattern)
        .with(TimeUnit::Quarter, "MMM YYYY")
        .with(TimeUnit::Year, "MMM YYYY")
}

fn connections_dataset() -> DatasetStyle {
    DatasetStyle::new(
        CONNECTIONS_DATASET_LABEL,
        Color::rgba(0.0, 0.0, 1.0, 1.0),
        Color::rgba(0.0, 0.0, 1.0, 0.1),
    )
}

#[must_use]
pub fn connections_chart_config(kind: ChartKind) -> ChartConfig {
    let month_pattern = match kind {
        ChartKind::Line => "DD MMM YYYY",
        ChartKind::Bar => "MMM YYYY",
    };
    ChartConfig::new(kind, connections_dataset())
        .with_display_formats(connections_display_formats(month_pattern))
}

impl DashboardConfig {
    /// Line and bar widgets over the sample connection counts.
    pub fn connections() -> ChartResult<Self> {
        let initial = monthly_connections_series()?;
        let line = WidgetConfig::new(
            LINE_SURFACE_ID,
            LINE_CONTROL_ID,
            connections_chart_config(ChartKind::Line),
        )
        .with_initial_series(initial.clone());
        let bar = WidgetConfig::new(
            BAR_SURFACE_ID,
            BAR_CONTROL_ID,
            connections_chart_config(ChartKind::Bar),
        )
        .with_initial_series(initial);
        Ok(Self::new(line, bar, connection_ranges()?))
    }
}
