use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{AxisLabels, ChartNavigator, NavigatorConfig, Redraw};
use crate::core::{ChartLayout, Insets};
use crate::error::ChartResult;

use super::dataset::{DatasetProvider, column_name};

/// Column holding the category of each row.
pub const BAR_CATEGORY_COLUMN: usize = 0;
/// Column whose name titles the count axis.
pub const BAR_VALUE_COLUMN: usize = 1;
/// Headroom above the tallest bar.
pub const BAR_HEADROOM: f64 = 1.05;

/// One prepared bar: a category and its aggregated count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub key: String,
    pub count: f64,
}

impl CategoryCount {
    #[must_use]
    pub fn new(key: impl Into<String>, count: f64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

#[must_use]
pub fn bar_chart_layout() -> ChartLayout {
    ChartLayout::new(1000.0, 400.0)
        .with_padding(Insets::new(20.0, 20.0, 0.0, 20.0))
        .with_margin(Insets::new(0.0, 0.0, 120.0, 50.0))
        .with_scroll_size(15.0)
}

/// Builds the navigator of a bar chart.
///
/// The X axis is categorical over the prepared bar keys, in the order given.
/// The Y axis spans `[0, 1.05 * tallest bar]`.
pub fn bar_chart_navigator<P, R>(
    provider: &P,
    dataset_id: &str,
    bars: &[CategoryCount],
    redraw: R,
) -> ChartResult<ChartNavigator<R>>
where
    P: DatasetProvider + ?Sized,
    R: Redraw,
{
    let labels = AxisLabels::new(
        column_name(provider, dataset_id, BAR_CATEGORY_COLUMN)?,
        column_name(provider, dataset_id, BAR_VALUE_COLUMN)?,
    );

    let config = NavigatorConfig::new(bar_chart_layout());
    let tallest = bars
        .iter()
        .map(|bar| bar.count)
        .filter(|count| count.is_finite())
        .fold(0.0_f64, f64::max);
    let x = config.band_x(bars.iter().map(|bar| bar.key.clone()))?;
    let y = config.numeric_y((0.0, BAR_HEADROOM * tallest))?;
    debug!(dataset_id, bars = bars.len(), tallest, "bar chart navigator");

    Ok(ChartNavigator::new(redraw, config, x, y)?.with_labels(labels))
}
