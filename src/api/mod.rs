//! Host-facing navigation facade.

mod config;
mod navigator;
mod snapshot;

pub use config::{NavigationTuning, NavigatorConfig};
pub use navigator::{AxisLabels, ChartNavigator, NavigationView, Redraw};
pub use snapshot::{
    NAVIGATION_SNAPSHOT_JSON_SCHEMA_V1, NavigationSnapshot, NavigationSnapshotJsonContractV1,
};
