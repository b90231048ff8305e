mod frame;
mod null_renderer;
mod primitives;
mod scrollbar_frame;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LineCap, LinePrimitive, RectPrimitive};
pub use scrollbar_frame::{ScrollbarStyle, build_scrollbar_frame};
