use serde::{Deserialize, Serialize};

use crate::core::{
    AxisOrientation, BandScale, ChartLayout, NumericScale, ScaleTuning, ZoomController,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ScrollbarLayout;

/// Constants controlling zoom steps, drag limits and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationTuning {
    /// Each zoom-in step removes `span / zoom_divisor` from both window sides.
    pub zoom_divisor: f64,
    /// Smallest window span relative to the full extent span.
    pub min_window_fraction: f64,
    /// End-cap grab margin as a fraction of the scrollbar thickness.
    pub end_cap_ratio: f64,
    /// Span substituted for zero-span extents.
    pub degenerate_span: f64,
}

impl Default for NavigationTuning {
    fn default() -> Self {
        let scale = ScaleTuning::default();
        Self {
            zoom_divisor: ZoomController::DEFAULT_ZOOM_DIVISOR,
            min_window_fraction: scale.min_window_fraction,
            end_cap_ratio: 0.8,
            degenerate_span: scale.degenerate_span,
        }
    }
}

impl NavigationTuning {
    #[must_use]
    pub fn scale_tuning(self) -> ScaleTuning {
        ScaleTuning {
            min_window_fraction: self.min_window_fraction,
            degenerate_span: self.degenerate_span,
        }
    }

    pub fn zoom_controller(self) -> ChartResult<ZoomController> {
        ZoomController::new(self.zoom_divisor)
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.zoom_controller()?;
        self.scale_tuning().validate()?;
        if !self.end_cap_ratio.is_finite() || self.end_cap_ratio < 0.0 {
            return Err(ChartError::InvalidConfig(
                "end cap ratio must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Per-chart construction parameters. Immutable once a navigator is built.
///
/// Serializable so hosts can keep chart setups next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    pub layout: ChartLayout,
    #[serde(default)]
    pub tuning: NavigationTuning,
}

impl NavigatorConfig {
    #[must_use]
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            tuning: NavigationTuning::default(),
        }
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: NavigationTuning) -> Self {
        self.tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_zoom_divisor(mut self, zoom_divisor: f64) -> Self {
        self.tuning.zoom_divisor = zoom_divisor;
        self
    }

    #[must_use]
    pub fn with_min_window_fraction(mut self, fraction: f64) -> Self {
        self.tuning.min_window_fraction = fraction;
        self
    }

    #[must_use]
    pub fn with_end_cap_ratio(mut self, ratio: f64) -> Self {
        self.tuning.end_cap_ratio = ratio;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.layout.validate()?;
        self.tuning.validate()?;
        Ok(())
    }

    pub fn scrollbars(&self) -> ChartResult<ScrollbarLayout> {
        ScrollbarLayout::new(&self.layout, self.tuning.end_cap_ratio)
    }

    /// Horizontal numeric axis over the plot body.
    pub fn numeric_x(&self, full: (f64, f64)) -> ChartResult<NumericScale> {
        NumericScale::new(
            full,
            self.layout.x_plot_range()?,
            AxisOrientation::Horizontal,
            self.tuning.scale_tuning(),
        )
    }

    /// Vertical numeric axis over the plot body.
    pub fn numeric_y(&self, full: (f64, f64)) -> ChartResult<NumericScale> {
        NumericScale::new(
            full,
            self.layout.y_plot_range()?,
            AxisOrientation::Vertical,
            self.tuning.scale_tuning(),
        )
    }

    /// Categorical horizontal axis over the plot body.
    pub fn band_x<I, S>(&self, keys: I) -> ChartResult<BandScale>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BandScale::new(keys, self.layout.x_plot_range()?)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize navigator config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse navigator config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}
