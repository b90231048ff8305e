use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::axis_scale::{AxisScale, NumericScale};
use crate::core::windowing::shift_inside;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Discrete zoom steps around the window center.
///
/// With divisor `d`, a zoom-in step removes `span / d` from each side of the
/// window and a zoom-out step adds `span / (d - 2)` to each side, which
/// exactly undoes one zoom-in step. `d = 6` turns `[20, 80]` into `[30, 70]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomController {
    zoom_divisor: f64,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            zoom_divisor: Self::DEFAULT_ZOOM_DIVISOR,
        }
    }
}

impl ZoomController {
    pub const DEFAULT_ZOOM_DIVISOR: f64 = 6.0;

    pub fn new(zoom_divisor: f64) -> ChartResult<Self> {
        if !zoom_divisor.is_finite() || zoom_divisor <= 2.0 {
            return Err(ChartError::InvalidConfig(
                "zoom divisor must be finite and > 2".to_owned(),
            ));
        }
        Ok(Self { zoom_divisor })
    }

    #[must_use]
    pub fn zoom_divisor(self) -> f64 {
        self.zoom_divisor
    }

    /// Fraction of the current span removed from each side by a zoom-in step.
    #[must_use]
    pub fn zoom_factor(self) -> f64 {
        1.0 / self.zoom_divisor
    }

    /// Applies one zoom step to a numeric scale. Returns `true` when the window changed.
    pub fn zoom(self, scale: &mut NumericScale, direction: ZoomDirection) -> bool {
        let (start, end) = self.zoomed_window(scale, direction);
        scale.set_window(start, end)
    }

    /// Applies one zoom step to an axis; categorical axes are left untouched.
    pub fn zoom_axis(self, scale: &mut AxisScale, direction: ZoomDirection) -> bool {
        match scale {
            AxisScale::Numeric(scale) => self.zoom(scale, direction),
            AxisScale::Band(_) => false,
        }
    }

    /// Zooms both axes by the same factor in one call, keeping their spans independent.
    pub fn zoom_2d(self, x: &mut AxisScale, y: &mut AxisScale, direction: ZoomDirection) -> bool {
        let x_changed = self.zoom_axis(x, direction);
        let y_changed = self.zoom_axis(y, direction);
        debug!(?direction, x_changed, y_changed, "zoom step");
        x_changed || y_changed
    }

    fn zoomed_window(self, scale: &NumericScale, direction: ZoomDirection) -> (f64, f64) {
        let full = scale.full_extent();
        let (start, end) = scale.window();
        let span = end - start;

        match direction {
            ZoomDirection::In => {
                let shrink = span / self.zoom_divisor;
                let min_span = scale.min_window_span();
                if span - 2.0 * shrink >= min_span {
                    (start + shrink, end - shrink)
                } else {
                    let center = (start + end) / 2.0;
                    shift_inside(full, center - min_span / 2.0, center + min_span / 2.0)
                }
            }
            ZoomDirection::Out => {
                let grow = span / (self.zoom_divisor - 2.0);
                ((start - grow).max(full.0), (end + grow).min(full.1))
            }
        }
    }
}
