use approx::assert_abs_diff_eq;
use chart_nav::ChartError;
use chart_nav::charts::{
    CategoryCount, DataValue, Dataset, DatasetProvider, HISTOGRAM_Y_LABEL, HistogramBin,
    InMemoryDatasets, bar_chart_layout, bar_chart_navigator, histogram_layout, histogram_navigator,
    scatter_plot_layout, scatter_plot_navigator,
};
use chart_nav::core::PixelPoint;
use chart_nav::render::NullRenderer;

const SALES_JSON: &str = r#"{
    "sales": {
        "columns": ["region", "units", "price"],
        "rows": [
            ["north", 3, 10.5],
            ["south", 5, 2.5],
            ["east", 1, "n/a"],
            ["west", 4, 7.0]
        ]
    }
}"#;

fn datasets() -> InMemoryDatasets {
    InMemoryDatasets::from_json_str(SALES_JSON).expect("valid datasets json")
}

#[test]
fn in_memory_datasets_expose_columns_and_rows() {
    let data = datasets();
    assert_eq!(data.dataset_ids().collect::<Vec<_>>(), vec!["sales"]);
    assert_eq!(
        data.column_names("sales").expect("columns"),
        vec!["region", "units", "price"]
    );

    let rows = data.rows("sales").expect("rows");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0][0], DataValue::from("north"));
    assert_eq!(rows[0][1].as_f64(), Some(3.0));
    assert_eq!(rows[2][2].as_f64(), None);
    assert_eq!(rows[3][2].to_key(), "7");

    assert!(matches!(
        data.rows("missing"),
        Err(ChartError::Dataset(_))
    ));
    assert!(InMemoryDatasets::from_json_str("[1, 2]").is_err());
}

#[test]
fn scatter_plot_spans_both_value_columns() {
    let nav = scatter_plot_navigator(&datasets(), "sales", NullRenderer::default())
        .expect("scatter navigator");

    assert_eq!(nav.x_scale().window(), Some((1.0, 5.0)));
    // The non-numeric price cell is skipped.
    assert_eq!(nav.y_scale().window(), Some((2.5, 10.5)));
    assert_eq!(nav.labels().x, "units");
    assert_eq!(nav.labels().y, "price");
    assert_eq!(nav.config().layout, scatter_plot_layout());
}

#[test]
fn scatter_plot_drag_maps_through_the_layout() {
    let mut nav = scatter_plot_navigator(&datasets(), "sales", NullRenderer::default())
        .expect("scatter navigator");

    // X track runs 70..380 (310 px) for an extent of 4 units.
    assert!(nav.on_pointer_down(PixelPoint::new(75.0, 395.0)).expect("down"));
    nav.on_pointer_up(PixelPoint::new(230.0, 395.0))
        .expect("up");
    let (start, end) = nav.x_scale().window().expect("numeric x");
    assert_abs_diff_eq!(start, 3.0, epsilon = 1e-9);
    assert_eq!(end, 5.0);
}

#[test]
fn histogram_uses_value_column_and_fullest_bin() {
    let bins = [
        HistogramBin {
            x0: 2.0,
            x1: 6.0,
            count: 1,
        },
        HistogramBin {
            x0: 6.0,
            x1: 11.0,
            count: 2,
        },
    ];
    let nav = histogram_navigator(&datasets(), "sales", &bins, NullRenderer::default())
        .expect("histogram navigator");

    assert_eq!(nav.x_scale().window(), Some((2.5, 10.5)));
    assert_eq!(nav.y_scale().window(), Some((0.0, 2.0)));
    assert_eq!(nav.labels().x, "price");
    assert_eq!(nav.labels().y, HISTOGRAM_Y_LABEL);
    assert_eq!(nav.config().layout, histogram_layout());
}

#[test]
fn bar_chart_has_categorical_x_and_headroom_on_y() {
    let bars = vec![
        CategoryCount::new("north", 3.0),
        CategoryCount::new("south", 5.0),
        CategoryCount::new("west", 4.0),
    ];
    let mut nav = bar_chart_navigator(&datasets(), "sales", &bars, NullRenderer::default())
        .expect("bar navigator");

    let band = nav.x_scale().as_band().expect("categorical x");
    assert_eq!(band.keys().collect::<Vec<_>>(), vec!["north", "south", "west"]);
    let (y0, y1) = nav.y_scale().window().expect("numeric y");
    assert_eq!(y0, 0.0);
    assert_abs_diff_eq!(y1, 5.25, epsilon = 1e-9);
    assert_eq!(nav.labels().x, "region");
    assert_eq!(nav.labels().y, "units");
    assert_eq!(nav.config().layout, bar_chart_layout());

    nav.on_zoom_in_click().expect("zoom in");
    assert_eq!(nav.x_scale().window(), None);
    let (y0, y1) = nav.y_scale().window().expect("numeric y");
    assert_abs_diff_eq!(y0, 5.25 / 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y1, 5.25 * 5.0 / 6.0, epsilon = 1e-9);
}

#[test]
fn degenerate_dataset_still_builds_a_usable_navigator() {
    let mut data = InMemoryDatasets::new();
    data.insert(
        "flat",
        Dataset {
            columns: vec!["id".to_owned(), "a".to_owned(), "b".to_owned()],
            rows: vec![
                vec!["r1".into(), 4.0.into(), 4.0.into()],
                vec!["r2".into(), 4.0.into(), 4.0.into()],
            ],
        },
    );

    let mut nav =
        scatter_plot_navigator(&data, "flat", NullRenderer::default()).expect("scatter navigator");
    assert_eq!(nav.x_scale().window(), Some((3.5, 4.5)));
    nav.on_zoom_in_click().expect("zoom in");
    assert_eq!(nav.redraw_target().redraw_count, 1);

    let empty = histogram_navigator(&data, "flat", &[], NullRenderer::default())
        .expect("histogram navigator");
    assert_eq!(empty.y_scale().window(), Some((-0.5, 0.5)));
}

#[test]
fn missing_columns_and_datasets_are_errors() {
    let mut data = InMemoryDatasets::new();
    data.insert(
        "narrow",
        Dataset {
            columns: vec!["only".to_owned()],
            rows: vec![vec![1.0.into()]],
        },
    );

    assert!(matches!(
        scatter_plot_navigator(&data, "narrow", NullRenderer::default()),
        Err(ChartError::Dataset(_))
    ));
    assert!(matches!(
        bar_chart_navigator(&data, "absent", &[], NullRenderer::default()),
        Err(ChartError::Dataset(_))
    ));
}
