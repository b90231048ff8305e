pub mod axis_scale;
pub mod scale;
pub mod types;
pub mod windowing;
pub mod zoom;

pub use axis_scale::{AxisScale, BandScale, NumericScale, ScaleTuning};
pub use scale::LinearScale;
pub use types::{AxisOrientation, ChartLayout, Insets, PixelPoint, PixelRange};
pub use zoom::{ZoomController, ZoomDirection};
