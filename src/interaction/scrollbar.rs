use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, NumericScale, PixelPoint, PixelRange};
use crate::error::{ChartError, ChartResult};

use super::{DragMode, ScrollAxis};

/// Hit region and thumb geometry of one scrollbar.
///
/// Positions along the track are measured in the value direction: left to
/// right for the X track, bottom to top for the Y track. This keeps thumb
/// classification identical for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarTrack {
    axis: ScrollAxis,
    along: PixelRange,
    across: PixelRange,
    end_cap_px: f64,
}

impl ScrollbarTrack {
    #[must_use]
    pub fn axis(self) -> ScrollAxis {
        self.axis
    }

    /// Pixel interval along the track, in screen coordinates.
    #[must_use]
    pub fn along(self) -> PixelRange {
        self.along
    }

    /// Pixel interval across the track (its thickness).
    #[must_use]
    pub fn across(self) -> PixelRange {
        self.across
    }

    #[must_use]
    pub fn end_cap_px(self) -> f64 {
        self.end_cap_px
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.along.length()
    }

    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        match self.axis {
            ScrollAxis::X => self.along.contains(point.x) && self.across.contains(point.y),
            ScrollAxis::Y => self.along.contains(point.y) && self.across.contains(point.x),
        }
    }

    /// Distance of `point` from the track origin in the value direction.
    #[must_use]
    pub fn value_offset(self, point: PixelPoint) -> f64 {
        match self.axis {
            ScrollAxis::X => point.x - self.along.low,
            ScrollAxis::Y => self.along.high - point.y,
        }
    }

    /// Thumb edges as value-direction offsets `(min edge, max edge)`.
    #[must_use]
    pub fn thumb_offsets(self, scale: &NumericScale) -> (f64, f64) {
        let (lo, hi) = scale.window_fraction();
        (lo * self.length(), hi * self.length())
    }

    /// Thumb edges in screen pixels, ordered low to high.
    #[must_use]
    pub fn thumb_pixels(self, scale: &NumericScale) -> (f64, f64) {
        let (lo, hi) = self.thumb_offsets(scale);
        match self.axis {
            ScrollAxis::X => (self.along.low + lo, self.along.low + hi),
            ScrollAxis::Y => (self.along.high - hi, self.along.high - lo),
        }
    }

    /// Decides whether a press at `point` grabs an end-cap or the thumb body.
    ///
    /// Presses within the end-cap margin of an edge (or beyond it) resize that
    /// edge. When the thumb is narrower than two margins the nearer edge wins.
    #[must_use]
    pub fn classify(self, point: PixelPoint, scale: &NumericScale) -> DragMode {
        let t = self.value_offset(point);
        let (lo, hi) = self.thumb_offsets(scale);
        let near_min = t < lo + self.end_cap_px;
        let near_max = t > hi - self.end_cap_px;

        match (near_min, near_max) {
            (true, true) if (hi - t) < (t - lo) => DragMode::ResizeMax,
            (true, _) => DragMode::ResizeMin,
            (false, true) => DragMode::ResizeMax,
            (false, false) => DragMode::Pan,
        }
    }

    /// Converts a value-direction pixel delta into a data delta using the
    /// full-extent-to-track ratio.
    #[must_use]
    pub fn pixels_to_data(self, delta_px: f64, scale: &NumericScale) -> f64 {
        delta_px * scale.extent_span() / self.length()
    }
}

/// Both scrollbar tracks of a chart, derived once from its layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarLayout {
    pub x: ScrollbarTrack,
    pub y: ScrollbarTrack,
}

impl ScrollbarLayout {
    /// Builds the tracks; each end-cap margin is `end_cap_ratio * scroll_size`.
    pub fn new(layout: &ChartLayout, end_cap_ratio: f64) -> ChartResult<Self> {
        if !end_cap_ratio.is_finite() || end_cap_ratio < 0.0 {
            return Err(ChartError::InvalidConfig(
                "end cap ratio must be finite and >= 0".to_owned(),
            ));
        }
        layout.validate()?;

        let end_cap_px = end_cap_ratio * layout.scroll_size;
        let x = ScrollbarTrack {
            axis: ScrollAxis::X,
            along: layout.x_track_range()?,
            across: PixelRange::new(layout.height - layout.scroll_size, layout.height)?,
            end_cap_px,
        };
        let y = ScrollbarTrack {
            axis: ScrollAxis::Y,
            along: layout.y_track_range()?,
            across: PixelRange::new(0.0, layout.scroll_size)?,
            end_cap_px,
        };
        Ok(Self { x, y })
    }

    #[must_use]
    pub fn track(&self, axis: ScrollAxis) -> ScrollbarTrack {
        match axis {
            ScrollAxis::X => self.x,
            ScrollAxis::Y => self.y,
        }
    }

    /// Track under `point`; the X track is tested first.
    #[must_use]
    pub fn hit_test(&self, point: PixelPoint) -> Option<ScrollAxis> {
        if self.x.contains(point) {
            Some(ScrollAxis::X)
        } else if self.y.contains(point) {
            Some(ScrollAxis::Y)
        } else {
            None
        }
    }
}
