use chart_nav::api::{ChartNavigator, NavigatorConfig};
use chart_nav::core::{
    AxisOrientation, BandScale, ChartLayout, Insets, NumericScale, PixelPoint, PixelRange,
    ScaleTuning, ZoomController, ZoomDirection,
};
use chart_nav::render::{NullRenderer, ScrollbarStyle, build_scrollbar_frame};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn layout() -> ChartLayout {
    ChartLayout::new(1920.0, 1080.0)
        .with_margin(Insets::new(10.0, 10.0, 60.0, 60.0))
        .with_padding(Insets::new(20.0, 20.0, 20.0, 20.0))
}

fn bench_numeric_scale_round_trip(c: &mut Criterion) {
    let mut scale = NumericScale::new(
        (0.0, 10_000.0),
        PixelRange::new(0.0, 1920.0).expect("valid range"),
        AxisOrientation::Horizontal,
        ScaleTuning::default(),
    )
    .expect("valid scale");
    scale.set_window(2_500.0, 7_500.0);

    c.bench_function("numeric_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.to_pixel(black_box(4_321.123));
            let _ = scale.to_value(px);
        })
    });
}

fn bench_zoom_cycle(c: &mut Criterion) {
    let zoom = ZoomController::default();
    let mut scale = NumericScale::new(
        (-1_000.0, 1_000.0),
        PixelRange::new(0.0, 1920.0).expect("valid range"),
        AxisOrientation::Horizontal,
        ScaleTuning::default(),
    )
    .expect("valid scale");

    c.bench_function("zoom_in_out_cycle_16", |b| {
        b.iter(|| {
            for _ in 0..8 {
                zoom.zoom(&mut scale, ZoomDirection::In);
            }
            for _ in 0..8 {
                zoom.zoom(&mut scale, ZoomDirection::Out);
            }
            black_box(scale.window());
        })
    });
}

fn bench_scrollbar_drag_100_moves(c: &mut Criterion) {
    let mut nav = ChartNavigator::numeric(
        NullRenderer::default(),
        NavigatorConfig::new(layout()),
        (0.0, 10_000.0),
        (-50.0, 50.0),
    )
    .expect("valid navigator");
    nav.on_zoom_in_click().expect("zoom in");
    let thumb_center = 60.0 + 20.0 + (1920.0 - 80.0 - 20.0) / 2.0;

    c.bench_function("scrollbar_drag_100_moves", |b| {
        b.iter(|| {
            nav.on_pointer_down(PixelPoint::new(thumb_center, 1072.0))
                .expect("down");
            for step in 0..100 {
                let x = thumb_center + (step % 20) as f64 * 5.0 - 50.0;
                nav.on_pointer_move(PixelPoint::new(x, 1072.0))
                    .expect("move");
            }
            nav.on_pointer_up(PixelPoint::new(thumb_center, 1072.0))
                .expect("up");
        })
    });
}

fn bench_band_layout_1k(c: &mut Criterion) {
    let keys: Vec<String> = (0..1_000).map(|i| format!("category-{i}")).collect();
    let range = PixelRange::new(0.0, 1920.0).expect("valid range");
    let scale = BandScale::new(keys.iter().cloned(), range).expect("valid band scale");

    c.bench_function("band_layout_1k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for key in &keys {
                total += scale.to_pixel(key).unwrap_or_default();
            }
            black_box(total);
        })
    });
}

fn bench_scrollbar_frame(c: &mut Criterion) {
    let nav = ChartNavigator::numeric(
        NullRenderer::default(),
        NavigatorConfig::new(layout()),
        (0.0, 1.0),
        (0.0, 1.0),
    )
    .expect("valid navigator");

    c.bench_function("scrollbar_frame_build", |b| {
        b.iter(|| {
            let frame = build_scrollbar_frame(&nav.view(), ScrollbarStyle::default());
            black_box(frame.lines.len());
        })
    });
}

criterion_group!(
    benches,
    bench_numeric_scale_round_trip,
    bench_zoom_cycle,
    bench_scrollbar_drag_100_moves,
    bench_band_layout_1k,
    bench_scrollbar_frame
);
criterion_main!(benches);
