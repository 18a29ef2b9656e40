use range_chart::ChartError;
use range_chart::api::presets::{
    LAST_DAY, LAST_FIVE_HOURS, LAST_HOUR, LAST_THREE_DAYS, connection_ranges,
    connections_chart_config, last_day_series, last_five_hours_series, last_hour_series,
    last_three_days_series, monthly_connections_series,
};
use range_chart::api::{ChartInstance, ChartKind, DatasetSelector, DropdownControl};
use range_chart::render::NullRenderer;

fn line_chart() -> ChartInstance<NullRenderer> {
    ChartInstance::new(
        "lineChart",
        connections_chart_config(ChartKind::Line),
        monthly_connections_series().expect("monthly series"),
        NullRenderer::default(),
    )
    .expect("chart init")
}

fn selector() -> DatasetSelector {
    DatasetSelector::new(connection_ranges().expect("preset table"))
}

fn control_selecting(text: &str) -> DropdownControl {
    DropdownControl::new("longTimeLine", [text]).with_selected_index(0)
}

#[test]
fn each_known_label_applies_its_series() {
    let selector = selector();
    let expected = [
        (LAST_HOUR, last_hour_series().expect("series")),
        (LAST_FIVE_HOURS, last_five_hours_series().expect("series")),
        (LAST_DAY, last_day_series().expect("series")),
        (LAST_THREE_DAYS, last_three_days_series().expect("series")),
    ];

    for (label, series) in expected {
        let mut chart = line_chart();
        let outcome = selector
            .apply_selection(&control_selecting(label), &mut chart)
            .expect("apply");
        assert_eq!(outcome.applied_label, label);
        assert!(!outcome.fallback);
        assert_eq!(chart.series(), &series);
    }
}

#[test]
fn last_hour_sets_the_eight_point_hour_series() {
    let selector = selector();
    let mut chart = line_chart();
    let outcome = selector
        .apply_selection(&control_selecting(LAST_HOUR), &mut chart)
        .expect("apply");

    assert_eq!(outcome.points, 8);
    assert_eq!(chart.series().labels().len(), 8);
    assert_eq!(
        chart.series().values(),
        &[0.0, 1.0, 3.0, 5.0, 10.0, 11.0, 12.0, 12.0]
    );
    assert_eq!(outcome.notice.as_deref(), Some("Se va a ver la ultima hora"));
}

#[test]
fn unknown_text_falls_back_to_three_days() {
    let selector = selector();
    let mut chart = line_chart();
    let outcome = selector
        .apply_selection(&control_selecting("Last month"), &mut chart)
        .expect("fallback is not an error");

    assert!(outcome.fallback);
    assert_eq!(outcome.selected_text, "Last month");
    assert_eq!(outcome.applied_label, LAST_THREE_DAYS);
    assert_eq!(
        chart.series().values(),
        &[0.0, 25.0, 39.0, 43.0, 55.0, 74.0, 88.0, 100.0]
    );
}

#[test]
fn selection_redraws_once_and_keeps_configuration() {
    let selector = selector();
    let mut chart = line_chart();
    let config_before = chart.config().clone();

    selector
        .apply_selection(&control_selecting(LAST_DAY), &mut chart)
        .expect("apply");

    assert_eq!(chart.update_count(), 1);
    assert_eq!(chart.config(), &config_before);
    let frame = chart
        .renderer()
        .last_frame
        .as_ref()
        .expect("renderer saw a frame");
    assert_eq!(frame.surface_id, "lineChart");
    assert_eq!(frame.kind, ChartKind::Line);
    assert_eq!(frame.values, chart.series().values());
    assert_eq!(frame.labels, chart.series().labels());
}

#[test]
fn missing_selection_is_rejected_before_touching_chart() {
    let selector = selector();
    let mut chart = line_chart();
    let before = chart.series().clone();

    let unselected = DropdownControl::new("longTimeLine", [LAST_HOUR]);
    let err = selector
        .apply_selection(&unselected, &mut chart)
        .expect_err("no selection");
    assert!(matches!(err, ChartError::EmptySelection(id) if id == "longTimeLine"));

    let blank = DropdownControl::new("longTimeLine", [""]).with_selected_index(0);
    assert!(selector.apply_selection(&blank, &mut chart).is_err());

    let out_of_bounds = DropdownControl::new("longTimeLine", [LAST_HOUR]).with_selected_index(3);
    assert!(selector.apply_selection(&out_of_bounds, &mut chart).is_err());

    assert_eq!(chart.series(), &before);
    assert_eq!(chart.update_count(), 0);
}

#[test]
fn applying_twice_is_idempotent() {
    let selector = selector();
    let mut once = line_chart();
    let mut twice = line_chart();

    selector.apply_text(LAST_FIVE_HOURS, &mut once).expect("apply");
    selector.apply_text(LAST_FIVE_HOURS, &mut twice).expect("apply");
    selector.apply_text(LAST_FIVE_HOURS, &mut twice).expect("apply");

    assert_eq!(once.state(), twice.state());
    assert_eq!(once.frame(), twice.frame());
}

#[test]
fn switching_away_and_back_leaves_no_residue() {
    let selector = selector();
    let mut direct = line_chart();
    let mut round_trip = line_chart();

    selector.apply_text(LAST_HOUR, &mut direct).expect("apply");

    selector.apply_text(LAST_HOUR, &mut round_trip).expect("apply");
    selector.apply_text(LAST_DAY, &mut round_trip).expect("apply");
    selector.apply_text(LAST_HOUR, &mut round_trip).expect("apply");

    assert_eq!(direct.state(), round_trip.state());
}

#[test]
fn empty_surface_id_is_rejected() {
    let result = ChartInstance::new(
        " ",
        connections_chart_config(ChartKind::Bar),
        monthly_connections_series().expect("series"),
        NullRenderer::default(),
    );
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn frame_carries_responsive_flag() {
    let mut fixed = ChartInstance::new(
        "lineChart",
        connections_chart_config(ChartKind::Line).with_responsive(false),
        monthly_connections_series().expect("series"),
        NullRenderer::default(),
    )
    .expect("chart init");
    fixed.update().expect("draw");
    let frame = fixed.renderer().last_frame.as_ref().expect("frame");
    assert!(!frame.responsive);

    let mut chart = line_chart();
    chart.update().expect("draw");
    assert!(chart.renderer().last_frame.as_ref().expect("frame").responsive);
}

#[test]
fn chart_instance_is_debuggable() {
    let chart = line_chart();
    let debug = format!("{chart:?}");
    assert!(debug.contains("ChartInstance"));
    assert!(debug.contains("lineChart"));
}
