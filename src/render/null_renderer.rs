use crate::api::{NavigationView, Redraw};
use crate::error::ChartResult;
use crate::render::{RenderFrame, ScrollbarStyle, build_scrollbar_frame};

/// Headless redraw target used by tests and by hosts without a backend.
///
/// It still builds and validates the scrollbar frame on every redraw so
/// tests catch invalid geometry before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub redraw_count: usize,
    pub last_x_window: Option<(f64, f64)>,
    pub last_y_window: Option<(f64, f64)>,
    pub last_frame: Option<RenderFrame>,
}

impl Redraw for NullRenderer {
    fn redraw(&mut self, view: &NavigationView<'_>) -> ChartResult<()> {
        let frame = build_scrollbar_frame(view, ScrollbarStyle::default());
        frame.validate()?;
        self.redraw_count += 1;
        self.last_x_window = view.x.window();
        self.last_y_window = view.y.window();
        self.last_frame = Some(frame);
        Ok(())
    }
}
