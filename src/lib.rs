//! chart-nav: headless viewport navigation engine for interactive 2D charts.
//!
//! The crate owns the visible window of each chart axis and the transform
//! between that window and on-screen pixels. It maps data to pixels, applies
//! discrete zoom steps, drives scrollbar pan/resize gestures, and clamps
//! every window to the full data extent. Mark drawing stays with the host,
//! which is notified through [`api::Redraw`].

pub mod api;
pub mod charts;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartNavigator, NavigatorConfig};
pub use error::{ChartError, ChartResult};
