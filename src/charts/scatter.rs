use tracing::debug;

use crate::api::{AxisLabels, ChartNavigator, NavigatorConfig, Redraw};
use crate::core::windowing::finite_extent;
use crate::core::{ChartLayout, Insets};
use crate::error::ChartResult;

use super::dataset::{DatasetProvider, column_name, numeric_column};

pub const SCATTER_X_COLUMN: usize = 1;
pub const SCATTER_Y_COLUMN: usize = 2;

#[must_use]
pub fn scatter_plot_layout() -> ChartLayout {
    ChartLayout::new(400.0, 400.0)
        .with_padding(Insets::new(20.0, 20.0, 20.0, 20.0))
        .with_margin(Insets::new(10.0, 10.0, 50.0, 50.0))
        .with_scroll_size(15.0)
}

/// Builds the navigator of a scatter plot from the extents of its two value columns.
pub fn scatter_plot_navigator<P, R>(
    provider: &P,
    dataset_id: &str,
    redraw: R,
) -> ChartResult<ChartNavigator<R>>
where
    P: DatasetProvider + ?Sized,
    R: Redraw,
{
    let labels = AxisLabels::new(
        column_name(provider, dataset_id, SCATTER_X_COLUMN)?,
        column_name(provider, dataset_id, SCATTER_Y_COLUMN)?,
    );
    let x_extent = finite_extent(numeric_column(provider, dataset_id, SCATTER_X_COLUMN)?)
        .unwrap_or((0.0, 0.0));
    let y_extent = finite_extent(numeric_column(provider, dataset_id, SCATTER_Y_COLUMN)?)
        .unwrap_or((0.0, 0.0));
    debug!(dataset_id, ?x_extent, ?y_extent, "scatter plot navigator");

    let config = NavigatorConfig::new(scatter_plot_layout());
    Ok(ChartNavigator::numeric(redraw, config, x_extent, y_extent)?.with_labels(labels))
}
