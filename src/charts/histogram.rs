use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{AxisLabels, ChartNavigator, NavigatorConfig, Redraw};
use crate::core::windowing::finite_extent;
use crate::core::{ChartLayout, Insets};
use crate::error::ChartResult;

use super::dataset::{DatasetProvider, column_name, numeric_column};

/// Column whose values are binned.
pub const HISTOGRAM_VALUE_COLUMN: usize = 2;
pub const HISTOGRAM_Y_LABEL: &str = "Frequency";

/// One prepared histogram bin covering `[x0, x1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub x0: f64,
    pub x1: f64,
    pub count: u64,
}

#[must_use]
pub fn histogram_layout() -> ChartLayout {
    ChartLayout::new(400.0, 400.0)
        .with_padding(Insets::new(20.0, 20.0, 0.0, 20.0))
        .with_margin(Insets::new(0.0, 0.0, 50.0, 50.0))
        .with_scroll_size(15.0)
}

/// Builds the navigator of a histogram.
///
/// X spans the values of the binned column, Y spans `[0, fullest bin]`.
pub fn histogram_navigator<P, R>(
    provider: &P,
    dataset_id: &str,
    bins: &[HistogramBin],
    redraw: R,
) -> ChartResult<ChartNavigator<R>>
where
    P: DatasetProvider + ?Sized,
    R: Redraw,
{
    let labels = AxisLabels::new(
        column_name(provider, dataset_id, HISTOGRAM_VALUE_COLUMN)?,
        HISTOGRAM_Y_LABEL,
    );
    let values = numeric_column(provider, dataset_id, HISTOGRAM_VALUE_COLUMN)?;
    let x_extent = finite_extent(values).unwrap_or((0.0, 0.0));
    let fullest = bins.iter().map(|bin| bin.count).max().unwrap_or(0);
    debug!(dataset_id, ?x_extent, bins = bins.len(), fullest, "histogram navigator");

    let config = NavigatorConfig::new(histogram_layout());
    let navigator = ChartNavigator::numeric(redraw, config, x_extent, (0.0, fullest as f64))?;
    Ok(navigator.with_labels(labels))
}
