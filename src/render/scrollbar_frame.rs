use serde::{Deserialize, Serialize};

use crate::api::NavigationView;
use crate::interaction::{ScrollAxis, ScrollbarTrack};
use crate::render::{Color, LineCap, LinePrimitive, RectPrimitive, RenderFrame};

/// Colors used when painting scrollbars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarStyle {
    pub track: Color,
    pub thumb: Color,
    pub end_cap_separator: Color,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            track: Color::gray(0.933),
            thumb: Color::gray(0.8),
            end_cap_separator: Color::gray(1.0),
        }
    }
}

/// Builds the scrollbar layer for the current view.
///
/// Each numeric axis gets its track, a round-capped thumb spanning the
/// visible window, and one thin separator inside each end-cap. Categorical
/// axes have no scrollbar.
#[must_use]
pub fn build_scrollbar_frame(view: &NavigationView<'_>, style: ScrollbarStyle) -> RenderFrame {
    let mut frame = RenderFrame::new(view.layout.width, view.layout.height);
    let thickness = view.layout.scroll_size;

    for (track, scale) in [
        (view.scrollbars.x, view.x.as_numeric()),
        (view.scrollbars.y, view.y.as_numeric()),
    ] {
        let Some(scale) = scale else {
            continue;
        };
        let (low, high) = track.thumb_pixels(scale);
        push_scrollbar(&mut frame, track, low, high, thickness, style);
    }

    frame
}

fn push_scrollbar(
    frame: &mut RenderFrame,
    track: ScrollbarTrack,
    thumb_low: f64,
    thumb_high: f64,
    thickness: f64,
    style: ScrollbarStyle,
) {
    let half = thickness / 2.0;
    let along = track.along();
    let across = track.across();
    let center = across.low + half;
    // The round caps extend half a thickness past each end of the stroke.
    let (a1, a2) = (thumb_low + half, thumb_high - half);
    let (s1, s2) = (a1 + 1.0, a2 - 1.0);

    match track.axis() {
        ScrollAxis::X => {
            frame.rects.push(RectPrimitive::new(
                along.low,
                across.low,
                along.length(),
                across.length(),
                style.track,
            ));
            frame.lines.push(
                LinePrimitive::new(a1, center, a2, center, thickness, style.thumb)
                    .with_cap(LineCap::Round),
            );
            for s in [s1, s2] {
                frame.lines.push(LinePrimitive::new(
                    s,
                    across.low,
                    s,
                    across.high,
                    1.0,
                    style.end_cap_separator,
                ));
            }
        }
        ScrollAxis::Y => {
            frame.rects.push(RectPrimitive::new(
                across.low,
                along.low,
                across.length(),
                along.length(),
                style.track,
            ));
            frame.lines.push(
                LinePrimitive::new(center, a1, center, a2, thickness, style.thumb)
                    .with_cap(LineCap::Round),
            );
            for s in [s1, s2] {
                frame.lines.push(LinePrimitive::new(
                    across.low,
                    s,
                    across.high,
                    s,
                    1.0,
                    style.end_cap_separator,
                ));
            }
        }
    }
}
