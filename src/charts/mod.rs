//! Per-chart bindings to the navigation engine.
//!
//! Each binding fixes the chart's layout constants and derives the full
//! extents from its dataset and prepared series. Mark drawing and data
//! preparation stay with the host.

mod bar;
mod dataset;
mod histogram;
mod scatter;

pub use bar::{
    BAR_CATEGORY_COLUMN, BAR_HEADROOM, BAR_VALUE_COLUMN, CategoryCount, bar_chart_layout,
    bar_chart_navigator,
};
pub use dataset::{DataValue, Dataset, DatasetProvider, InMemoryDatasets};
pub use histogram::{
    HISTOGRAM_VALUE_COLUMN, HISTOGRAM_Y_LABEL, HistogramBin, histogram_layout,
    histogram_navigator,
};
pub use scatter::{
    SCATTER_X_COLUMN, SCATTER_Y_COLUMN, scatter_plot_layout, scatter_plot_navigator,
};
