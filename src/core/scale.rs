use serde::{Deserialize, Serialize};

use crate::core::types::{AxisOrientation, PixelRange};
use crate::error::{ChartError, ChartResult};

/// Linear mapping between a domain interval and a pixel interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range: PixelRange,
    orientation: AxisOrientation,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range: PixelRange,
        orientation: AxisOrientation,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        range.validate()?;

        Ok(Self {
            domain_start,
            domain_end,
            range,
            orientation,
        })
    }

    /// Builds a scale from parts the caller already validated (finite
    /// non-empty domain, ordered pixel range).
    #[must_use]
    pub(crate) fn from_validated(
        domain_start: f64,
        domain_end: f64,
        range: PixelRange,
        orientation: AxisOrientation,
    ) -> Self {
        debug_assert!(domain_start != domain_end);
        Self {
            domain_start,
            domain_end,
            range,
            orientation,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> PixelRange {
        self.range
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        match self.orientation {
            AxisOrientation::Horizontal => self.range.low + normalized * self.range.length(),
            AxisOrientation::Vertical => self.range.high - normalized * self.range.length(),
        }
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = match self.orientation {
            AxisOrientation::Horizontal => (pixel - self.range.low) / self.range.length(),
            AxisOrientation::Vertical => (self.range.high - pixel) / self.range.length(),
        };
        let span = self.domain_end - self.domain_start;
        self.domain_start + normalized * span
    }
}
