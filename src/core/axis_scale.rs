use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::scale::LinearScale;
use crate::core::types::{AxisOrientation, PixelRange};
use crate::core::windowing::{
    clamp_window, finite_extent, min_window_span, normalize_extent, pan_window, resize_window_max,
    resize_window_min,
};
use crate::error::{ChartError, ChartResult};

/// Limits applied to every numeric window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTuning {
    /// Smallest window span relative to the full extent span.
    pub min_window_fraction: f64,
    /// Span substituted for extents built from a single distinct value.
    pub degenerate_span: f64,
}

impl Default for ScaleTuning {
    fn default() -> Self {
        Self {
            min_window_fraction: 0.01,
            degenerate_span: 1.0,
        }
    }
}

impl ScaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_window_fraction.is_finite()
            || self.min_window_fraction <= 0.0
            || self.min_window_fraction > 1.0
        {
            return Err(ChartError::InvalidConfig(
                "min window fraction must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.degenerate_span.is_finite() || self.degenerate_span <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "degenerate span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Continuous axis with an immutable full extent and a mutable visible window.
///
/// The window always satisfies `full.0 <= window.0 <= window.1 <= full.1`
/// and is never narrower than `min_window_fraction` of the full span.
/// Deserialized scales are re-validated before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NumericScaleRepr")]
pub struct NumericScale {
    full_start: f64,
    full_end: f64,
    window_start: f64,
    window_end: f64,
    pixel_range: PixelRange,
    orientation: AxisOrientation,
    min_window_fraction: f64,
}

impl NumericScale {
    /// Creates a scale whose window equals the full extent.
    pub fn new(
        full: (f64, f64),
        pixel_range: PixelRange,
        orientation: AxisOrientation,
        tuning: ScaleTuning,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        pixel_range.validate()?;
        let (full_start, full_end) = normalize_extent(full.0, full.1, tuning.degenerate_span)?;

        Ok(Self {
            full_start,
            full_end,
            window_start: full_start,
            window_end: full_end,
            pixel_range,
            orientation,
            min_window_fraction: tuning.min_window_fraction,
        })
    }

    /// Fits the full extent from data values; non-finite values are skipped.
    ///
    /// An empty input yields a degenerate extent around `0.0`.
    pub fn from_values(
        values: impl IntoIterator<Item = f64>,
        pixel_range: PixelRange,
        orientation: AxisOrientation,
        tuning: ScaleTuning,
    ) -> ChartResult<Self> {
        let extent = finite_extent(values).unwrap_or((0.0, 0.0));
        Self::new(extent, pixel_range, orientation, tuning)
    }

    #[must_use]
    pub fn full_extent(&self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    #[must_use]
    pub fn window(&self) -> (f64, f64) {
        (self.window_start, self.window_end)
    }

    #[must_use]
    pub fn pixel_range(&self) -> PixelRange {
        self.pixel_range
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn extent_span(&self) -> f64 {
        self.full_end - self.full_start
    }

    #[must_use]
    pub fn window_span(&self) -> f64 {
        self.window_end - self.window_start
    }

    #[must_use]
    pub fn min_window_fraction(&self) -> f64 {
        self.min_window_fraction
    }

    /// Smallest span the window may shrink to.
    #[must_use]
    pub fn min_window_span(&self) -> f64 {
        min_window_span(self.full_extent(), self.min_window_fraction)
    }

    /// Window bounds as fractions of the full extent, in `[0, 1]`.
    #[must_use]
    pub fn window_fraction(&self) -> (f64, f64) {
        let span = self.extent_span();
        (
            (self.window_start - self.full_start) / span,
            (self.window_end - self.full_start) / span,
        )
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.window_start == self.full_start && self.window_end == self.full_end
    }

    #[must_use]
    pub fn to_pixel(&self, value: f64) -> f64 {
        self.visible_linear().domain_to_pixel(value)
    }

    #[must_use]
    pub fn to_value(&self, pixel: f64) -> f64 {
        self.visible_linear().pixel_to_domain(pixel)
    }

    /// Replaces the window after clamping it into the full extent.
    ///
    /// Returns `true` when the window changed. Non-finite requests are ignored.
    pub fn set_window(&mut self, start: f64, end: f64) -> bool {
        if !start.is_finite() || !end.is_finite() {
            warn!(start, end, "ignoring non-finite window request");
            return false;
        }
        let window = clamp_window(self.full_extent(), start, end, self.min_window_span());
        self.replace_window(window)
    }

    pub fn reset_window(&mut self) -> bool {
        self.replace_window(self.full_extent())
    }

    /// Shifts the window by a data delta without resizing it.
    pub fn pan_by(&mut self, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let window = pan_window(self.full_extent(), self.window(), delta);
        self.replace_window(window)
    }

    /// Moves the lower window bound by a data delta.
    pub fn resize_min_by(&mut self, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let window = resize_window_min(
            self.full_extent(),
            self.window(),
            delta,
            self.min_window_span(),
        );
        self.replace_window(window)
    }

    /// Moves the upper window bound by a data delta.
    pub fn resize_max_by(&mut self, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let window = resize_window_max(
            self.full_extent(),
            self.window(),
            delta,
            self.min_window_span(),
        );
        self.replace_window(window)
    }

    fn replace_window(&mut self, (start, end): (f64, f64)) -> bool {
        let changed = start != self.window_start || end != self.window_end;
        self.window_start = start;
        self.window_end = end;
        changed
    }

    fn visible_linear(&self) -> LinearScale {
        LinearScale::from_validated(
            self.window_start,
            self.window_end,
            self.pixel_range,
            self.orientation,
        )
    }
}

#[derive(Deserialize)]
struct NumericScaleRepr {
    full_start: f64,
    full_end: f64,
    window_start: f64,
    window_end: f64,
    pixel_range: PixelRange,
    orientation: AxisOrientation,
    min_window_fraction: f64,
}

impl TryFrom<NumericScaleRepr> for NumericScale {
    type Error = ChartError;

    fn try_from(repr: NumericScaleRepr) -> ChartResult<Self> {
        let tuning = ScaleTuning {
            min_window_fraction: repr.min_window_fraction,
            ..ScaleTuning::default()
        };
        let mut scale = Self::new(
            (repr.full_start, repr.full_end),
            repr.pixel_range,
            repr.orientation,
            tuning,
        )?;

        let (start, end) = (repr.window_start, repr.window_end);
        if !start.is_finite()
            || !end.is_finite()
            || start >= end
            || start < scale.full_start
            || end > scale.full_end
        {
            return Err(ChartError::InvalidData(format!(
                "window {start}..{end} does not fit extent {}..{}",
                scale.full_start, scale.full_end
            )));
        }

        scale.replace_window((start, end));
        if scale.window_span() < scale.min_window_span() {
            scale.set_window(start, end);
        }
        Ok(scale)
    }
}

/// Categorical axis: an ordered set of distinct keys laid out as equal bands.
///
/// Categorical windows always cover every key; re-aggregation happens outside
/// the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BandScaleRepr")]
pub struct BandScale {
    keys: IndexSet<String>,
    pixel_range: PixelRange,
    padding: f64,
}

#[derive(Deserialize)]
struct BandScaleRepr {
    keys: IndexSet<String>,
    pixel_range: PixelRange,
    padding: f64,
}

impl TryFrom<BandScaleRepr> for BandScale {
    type Error = ChartError;

    fn try_from(repr: BandScaleRepr) -> ChartResult<Self> {
        Self::new(repr.keys, repr.pixel_range)?.with_padding(repr.padding)
    }
}

impl BandScale {
    /// Band padding applied when none is configured.
    pub const DEFAULT_PADDING: f64 = 0.2;

    pub fn new<I, S>(keys: I, pixel_range: PixelRange) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        pixel_range.validate()?;
        Ok(Self {
            keys: keys.into_iter().map(Into::into).collect(),
            pixel_range,
            padding: Self::DEFAULT_PADDING,
        })
    }

    /// Sets inner and outer padding as a fraction of the band step.
    pub fn with_padding(mut self, padding: f64) -> ChartResult<Self> {
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidConfig(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        self.padding = padding;
        Ok(self)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn pixel_range(&self) -> PixelRange {
        self.pixel_range
    }

    /// Distance between the starts of two neighbouring bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        let n = self.keys.len() as f64;
        // Outer padding on both ends plus `n - 1` inner gaps.
        self.pixel_range.length() / (n - self.padding + 2.0 * self.padding).max(1.0)
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        if self.keys.is_empty() {
            return 0.0;
        }
        self.step() * (1.0 - self.padding)
    }

    /// Start pixel of the band for `key`, `None` for unknown keys.
    #[must_use]
    pub fn to_pixel(&self, key: &str) -> Option<f64> {
        let index = self.keys.get_index_of(key)?;
        let step = self.step();
        Some(self.pixel_range.low + step * self.padding + step * index as f64)
    }
}

/// One axis of a chart: continuous or categorical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisScale {
    Numeric(NumericScale),
    Band(BandScale),
}

impl AxisScale {
    #[must_use]
    pub fn as_numeric(&self) -> Option<&NumericScale> {
        match self {
            Self::Numeric(scale) => Some(scale),
            Self::Band(_) => None,
        }
    }

    pub fn as_numeric_mut(&mut self) -> Option<&mut NumericScale> {
        match self {
            Self::Numeric(scale) => Some(scale),
            Self::Band(_) => None,
        }
    }

    #[must_use]
    pub fn as_band(&self) -> Option<&BandScale> {
        match self {
            Self::Band(scale) => Some(scale),
            Self::Numeric(_) => None,
        }
    }

    #[must_use]
    pub fn pixel_range(&self) -> PixelRange {
        match self {
            Self::Numeric(scale) => scale.pixel_range(),
            Self::Band(scale) => scale.pixel_range(),
        }
    }

    /// Inverse mapping; categorical axes do not support it.
    #[must_use]
    pub fn to_value(&self, pixel: f64) -> Option<f64> {
        self.as_numeric().map(|scale| scale.to_value(pixel))
    }

    /// Current window of a numeric axis.
    #[must_use]
    pub fn window(&self) -> Option<(f64, f64)> {
        self.as_numeric().map(NumericScale::window)
    }

    pub fn reset_window(&mut self) -> bool {
        self.as_numeric_mut()
            .is_some_and(NumericScale::reset_window)
    }
}

impl From<NumericScale> for AxisScale {
    fn from(value: NumericScale) -> Self {
        Self::Numeric(value)
    }
}

impl From<BandScale> for AxisScale {
    fn from(value: BandScale) -> Self {
        Self::Band(value)
    }
}
