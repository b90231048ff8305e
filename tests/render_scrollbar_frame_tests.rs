use chart_nav::api::{ChartNavigator, NavigatorConfig};
use chart_nav::core::{ChartLayout, Insets, PixelPoint};
use chart_nav::render::{
    Color, LineCap, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, ScrollbarStyle,
    build_scrollbar_frame,
};

fn navigator() -> ChartNavigator<NullRenderer> {
    let layout = ChartLayout::new(220.0, 220.0)
        .with_margin(Insets::new(0.0, 0.0, 100.0, 100.0))
        .with_padding(Insets::new(10.0, 10.0, 10.0, 10.0))
        .with_scroll_size(15.0);
    ChartNavigator::numeric(
        NullRenderer::default(),
        NavigatorConfig::new(layout),
        (0.0, 100.0),
        (0.0, 100.0),
    )
    .expect("valid navigator")
}

#[test]
fn full_window_fills_both_tracks() {
    let nav = navigator();
    let style = ScrollbarStyle::default();
    let frame = build_scrollbar_frame(&nav.view(), style);
    frame.validate().expect("valid frame");

    assert_eq!(frame.width, 220.0);
    assert_eq!(
        frame.rects,
        vec![
            RectPrimitive::new(110.0, 205.0, 100.0, 15.0, style.track),
            RectPrimitive::new(0.0, 10.0, 15.0, 100.0, style.track),
        ]
    );

    let x_thumb = frame.lines[0];
    assert_eq!((x_thumb.x1, x_thumb.x2), (117.5, 202.5));
    assert_eq!((x_thumb.y1, x_thumb.y2), (212.5, 212.5));
    assert_eq!(x_thumb.stroke_width, 15.0);
    assert_eq!(x_thumb.cap, LineCap::Round);
    assert_eq!(x_thumb.color, style.thumb);

    let y_thumb = frame.lines[3];
    assert_eq!((y_thumb.x1, y_thumb.x2), (7.5, 7.5));
    assert_eq!((y_thumb.y1, y_thumb.y2), (17.5, 102.5));
}

#[test]
fn end_cap_separators_sit_inside_the_thumb() {
    let nav = navigator();
    let frame = build_scrollbar_frame(&nav.view(), ScrollbarStyle::default());

    let separators: Vec<&LinePrimitive> = frame
        .lines
        .iter()
        .filter(|line| line.stroke_width == 1.0)
        .collect();
    assert_eq!(separators.len(), 4);
    assert_eq!((separators[0].x1, separators[0].y1), (118.5, 205.0));
    assert_eq!((separators[1].x1, separators[1].y2), (201.5, 220.0));
    assert_eq!((separators[2].x1, separators[2].y1), (0.0, 18.5));
}

#[test]
fn thumb_follows_window_after_drag() {
    let mut nav = navigator();
    // Grab the upper end-cap of the Y track and pull it down by 40 px.
    nav.on_pointer_down(PixelPoint::new(7.0, 15.0))
        .expect("down");
    nav.on_pointer_up(PixelPoint::new(7.0, 55.0)).expect("up");
    assert_eq!(nav.y_scale().window(), Some((0.0, 60.0)));

    let frame = nav
        .redraw_target()
        .last_frame
        .clone()
        .expect("frame recorded");
    let y_thumb = frame.lines[3];
    // Thumb covers screen rows 50..110, inset by half the thickness.
    assert_eq!((y_thumb.y1, y_thumb.y2), (57.5, 102.5));
}

#[test]
fn frame_validation_rejects_bad_primitives() {
    let frame = RenderFrame::new(100.0, 100.0).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        -1.0,
        5.0,
        Color::gray(0.5),
    ));
    assert!(frame.validate().is_err());

    let frame = RenderFrame::new(100.0, 100.0).with_line(LinePrimitive::new(
        0.0,
        0.0,
        10.0,
        10.0,
        1.0,
        Color::rgba(1.2, 0.0, 0.0, 1.0),
    ));
    assert!(frame.validate().is_err());

    assert!(RenderFrame::new(0.0, 100.0).validate().is_err());
    assert!(RenderFrame::new(10.0, 10.0).is_empty());
}
