use criterion::{Criterion, criterion_group, criterion_main};
use range_chart::api::presets::{LAST_HOUR, connection_ranges, connections_chart_config};
use range_chart::api::{ChartConfig, ChartInstance, ChartKind, DatasetSelector};
use range_chart::core::TimeSeries;
use range_chart::render::NullRenderer;
use std::hint::black_box;

fn bench_resolve_fallback(c: &mut Criterion) {
    let table = connection_ranges().expect("preset table");

    c.bench_function("range_resolve_fallback", |b| {
        b.iter(|| {
            let _ = table.resolve(black_box("Last fortnight"));
        })
    });
}

fn bench_apply_selection(c: &mut Criterion) {
    let selector = DatasetSelector::new(connection_ranges().expect("preset table"));
    let mut chart = ChartInstance::new(
        "lineChart",
        connections_chart_config(ChartKind::Line),
        TimeSeries::empty(),
        NullRenderer::default(),
    )
    .expect("chart init");

    c.bench_function("apply_selection_last_hour", |b| {
        b.iter(|| {
            selector
                .apply_text(black_box(LAST_HOUR), &mut chart)
                .expect("apply should succeed");
        })
    });
}

fn bench_config_parse(c: &mut Criterion) {
    let json = connections_chart_config(ChartKind::Bar)
        .to_json_pretty()
        .expect("serialize");

    c.bench_function("chart_config_parse", |b| {
        b.iter(|| {
            let _ = ChartConfig::from_json_str(black_box(&json)).expect("parse");
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_fallback,
    bench_apply_selection,
    bench_config_parse
);
criterion_main!(benches);
