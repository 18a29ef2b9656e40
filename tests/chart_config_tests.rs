use range_chart::ChartError;
use range_chart::api::presets::connections_chart_config;
use range_chart::api::{
    ChartConfig, ChartKind, DatasetStyle, DisplayFormats, Distribution, TimeUnit,
};
use range_chart::render::Color;

fn dataset() -> DatasetStyle {
    DatasetStyle::new(
        "Conexiones",
        Color::rgba(0.0, 0.0, 1.0, 1.0),
        Color::rgba(0.0, 0.0, 1.0, 0.1),
    )
}

#[test]
fn preset_configs_differ_only_in_month_format() {
    let line = connections_chart_config(ChartKind::Line);
    let bar = connections_chart_config(ChartKind::Bar);
    line.validate().expect("line config valid");
    bar.validate().expect("bar config valid");

    assert_eq!(line.x_axis.display_formats.get(TimeUnit::Month), Some("DD MMM YYYY"));
    assert_eq!(bar.x_axis.display_formats.get(TimeUnit::Month), Some("MMM YYYY"));
    for unit in [TimeUnit::Hour, TimeUnit::Day, TimeUnit::Week, TimeUnit::Quarter, TimeUnit::Year] {
        assert_eq!(
            line.x_axis.display_formats.get(unit),
            bar.x_axis.display_formats.get(unit)
        );
    }
    assert_eq!(line.x_axis.distribution, Distribution::Linear);
    assert!(line.legend.display);
    assert!(line.responsive);
    assert!(!line.dataset.fill);
}

#[test]
fn json_round_trip_keeps_typed_options() {
    let config = connections_chart_config(ChartKind::Bar);
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"kind\": \"bar\""));
    assert!(json.contains("rgba(0,0,255,0.1)"));
    assert!(json.contains("\"month\": \"MMM YYYY\""));

    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn json_defaults_fill_optional_sections() {
    let input = r#"{
        "kind": "line",
        "dataset": {
            "label": "Conexiones",
            "background_color": "rgba(0,0,255,1.0)",
            "border_color": "rgba(0,0,255,0.1)"
        }
    }"#;
    let config = ChartConfig::from_json_str(input).expect("parse");
    assert_eq!(config.kind, ChartKind::Line);
    assert!(config.responsive);
    assert!(config.legend.display);
    assert!(config.x_axis.display_formats.is_empty());
    assert_eq!(config.dataset.background_color, Color::rgba(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn unknown_chart_kind_is_rejected_at_parse_time() {
    let input = r#"{
        "kind": "doughnut",
        "dataset": {
            "label": "Conexiones",
            "background_color": "rgba(0,0,255,1.0)",
            "border_color": "rgba(0,0,255,0.1)"
        }
    }"#;
    assert!(matches!(
        ChartConfig::from_json_str(input),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn unknown_time_unit_and_distribution_are_rejected() {
    let bad_unit = r##"{
        "kind": "line",
        "dataset": {"label": "x", "background_color": "#0000ff", "border_color": "#0000ff"},
        "x_axis": {"display_formats": {"fortnight": "MMM DD"}}
    }"##;
    assert!(ChartConfig::from_json_str(bad_unit).is_err());

    let bad_distribution = r##"{
        "kind": "line",
        "dataset": {"label": "x", "background_color": "#0000ff", "border_color": "#0000ff"},
        "x_axis": {"distribution": "series"}
    }"##;
    assert!(ChartConfig::from_json_str(bad_distribution).is_err());
}

#[test]
fn malformed_display_format_is_rejected() {
    let config = ChartConfig::new(ChartKind::Line, dataset())
        .with_display_formats(DisplayFormats::new().with(TimeUnit::Hour, "HH:mm:ssss"));
    let err = config.validate().expect_err("bad pattern must fail");
    assert!(matches!(err, ChartError::InvalidDisplayFormat { .. }));
}

#[test]
fn empty_dataset_label_is_rejected() {
    let mut style = dataset();
    style.label = "  ".to_owned();
    let config = ChartConfig::new(ChartKind::Bar, style);
    assert!(matches!(config.validate(), Err(ChartError::InvalidData(_))));
}

#[test]
fn out_of_range_color_is_rejected() {
    let style = DatasetStyle::new(
        "Conexiones",
        Color::rgba(0.0, 0.0, 1.5, 1.0),
        Color::rgba(0.0, 0.0, 1.0, 0.1),
    );
    let config = ChartConfig::new(ChartKind::Bar, style);
    assert!(config.validate().is_err());
}

#[test]
fn css_colors_parse_and_format() {
    let color: Color = "rgba(0,0,255,0.1)".parse().expect("rgba");
    assert_eq!(color, Color::rgba(0.0, 0.0, 1.0, 0.1));
    assert_eq!(color.to_css(), "rgba(0,0,255,0.1)");

    let solid = Color::parse_css("rgb(255, 0, 0)").expect("rgb");
    assert_eq!(solid, Color::rgb(1.0, 0.0, 0.0));

    let hex = Color::parse_css("#00ff00").expect("hex");
    assert_eq!(hex, Color::rgb(0.0, 1.0, 0.0));

    for bad in ["blue", "rgba(0,0,256,1)", "rgba(0,0,255)", "rgba(0,0,255,2.0)", "#12345"] {
        assert!(
            matches!(Color::parse_css(bad), Err(ChartError::InvalidColor(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn non_byte_colors_survive_css_round_trip() {
    let grey = Color::rgb(0.5, 0.5, 0.5);
    let css = grey.to_css();
    assert!(css.starts_with("color(srgb "), "{css}");
    assert_eq!(Color::parse_css(&css).expect("reparse"), grey);

    let translucent = Color::rgba(0.1, 0.2, 0.3, 0.25);
    assert_eq!(Color::parse_css(&translucent.to_css()).expect("reparse"), translucent);

    let byte_exact = Color::from_rgba8(12, 34, 56, 0.5);
    assert_eq!(byte_exact.to_css(), "rgba(12,34,56,0.5)");

    assert_eq!(
        Color::parse_css("color(srgb 0.25 0.5 1)").expect("no alpha"),
        Color::rgb(0.25, 0.5, 1.0)
    );
    for bad in ["color(srgb 0.5 0.5)", "color(display-p3 0 0 0)", "color(srgb 0 0 2 / 1)"] {
        assert!(
            matches!(Color::parse_css(bad), Err(ChartError::InvalidColor(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn config_json_keeps_exact_dataset_colors() {
    let style = DatasetStyle::new(
        "Conexiones",
        Color::rgb(0.5, 0.5, 0.5),
        Color::rgba(1.0 / 3.0, 0.0, 1.0, 0.1),
    );
    let config = ChartConfig::new(ChartKind::Line, style);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn sub_second_week_and_quarter_formats_validate() {
    let formats = DisplayFormats::new()
        .with(TimeUnit::Millisecond, "HH:mm:ss.SSS")
        .with(TimeUnit::Week, "ll")
        .with(TimeUnit::Day, "dddd, MMMM Do YYYY")
        .with(TimeUnit::Quarter, "[Q]Q - YYYY");
    let config = ChartConfig::new(ChartKind::Bar, dataset()).with_display_formats(formats);
    config.validate().expect("moment-style tokens accepted");
}

#[test]
fn render_module_owns_the_style_types() {
    use range_chart::render;

    let style = render::DatasetStyle::new(
        "Conexiones",
        Color::rgb(0.0, 0.0, 1.0),
        Color::rgba(0.0, 0.0, 1.0, 0.1),
    );
    let axis = render::TimeAxisConfig {
        distribution: render::Distribution::Linear,
        display_formats: render::DisplayFormats::new().with(render::TimeUnit::Hour, "HH:mm"),
    };
    let mut config = ChartConfig::new(render::ChartKind::Line, style);
    config.x_axis = axis;
    config.validate().expect("render types usable through api config");
    assert_eq!(config.kind, ChartKind::Line);
}
