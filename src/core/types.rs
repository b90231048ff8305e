use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pointer position in drawing-surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Space reserved on each side of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    fn validate(self, name: &str) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::layout(format!(
                    "{name}.{side} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Destination pixel interval of an axis. `low < high` always holds for a
/// validated range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub low: f64,
    pub high: f64,
}

impl PixelRange {
    pub fn new(low: f64, high: f64) -> ChartResult<Self> {
        let range = Self { low, high };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low >= self.high {
            return Err(ChartError::layout(format!(
                "pixel range must be finite with low < high (got {}..{})",
                self.low, self.high
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.high - self.low
    }

    #[must_use]
    pub fn contains(self, pixel: f64) -> bool {
        self.low <= pixel && pixel <= self.high
    }
}

/// Direction in which data values grow on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// Window start maps to `PixelRange::low` (left to right).
    #[default]
    Horizontal,
    /// Window start maps to `PixelRange::high` (bottom to top, screen Y grows down).
    Vertical,
}

/// Fixed pixel geometry of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Insets,
    pub padding: Insets,
    pub scroll_size: f64,
}

impl ChartLayout {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Insets::default(),
            padding: Insets::default(),
            scroll_size: 15.0,
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_scroll_size(mut self, scroll_size: f64) -> Self {
        self.scroll_size = scroll_size;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ChartError::layout("width and height must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartError::layout(format!(
                "surface size must be > 0 (got {}x{})",
                self.width, self.height
            )));
        }
        if !self.scroll_size.is_finite() || self.scroll_size <= 0.0 {
            return Err(ChartError::layout("scroll size must be finite and > 0"));
        }
        self.margin.validate("margin")?;
        self.padding.validate("padding")?;

        self.x_plot_range()?;
        self.y_plot_range()?;
        self.x_track_range()?;
        self.y_track_range()?;
        Ok(())
    }

    /// Horizontal pixel interval of the plot body.
    pub fn x_plot_range(&self) -> ChartResult<PixelRange> {
        PixelRange::new(
            self.margin.left + self.padding.left,
            self.width - self.margin.right - self.padding.right,
        )
    }

    /// Vertical pixel interval of the plot body (top to bottom).
    pub fn y_plot_range(&self) -> ChartResult<PixelRange> {
        PixelRange::new(
            self.margin.top + self.padding.top,
            self.height - self.margin.bottom - self.padding.bottom,
        )
    }

    /// Along-track interval of the horizontal scrollbar.
    pub fn x_track_range(&self) -> ChartResult<PixelRange> {
        PixelRange::new(
            self.margin.left + self.padding.left,
            self.width - self.padding.right,
        )
    }

    /// Along-track interval of the vertical scrollbar (top to bottom).
    pub fn y_track_range(&self) -> ChartResult<PixelRange> {
        PixelRange::new(
            self.padding.top,
            self.height - self.margin.bottom - self.padding.bottom,
        )
    }
}
