use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    AxisOrientation, AxisScale, ChartLayout, PixelPoint, PixelRange, ZoomController,
    ZoomDirection,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{DragState, ScrollbarInteraction, ScrollbarLayout};

use super::{NavigationSnapshot, NavigatorConfig};

/// Axis titles handed to renderers alongside the scales.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    #[must_use]
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Read-only view of the navigation state passed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct NavigationView<'a> {
    pub x: &'a AxisScale,
    pub y: &'a AxisScale,
    pub drag: DragState,
    pub layout: &'a ChartLayout,
    pub scrollbars: &'a ScrollbarLayout,
    pub labels: &'a AxisLabels,
}

/// Redraw target supplied by a chart renderer.
///
/// Called synchronously after every navigation change; it may run many times
/// in a row with identical state and must produce the same picture each time.
pub trait Redraw {
    fn redraw(&mut self, view: &NavigationView<'_>) -> ChartResult<()>;
}

impl<F> Redraw for F
where
    F: FnMut(&NavigationView<'_>) -> ChartResult<()>,
{
    fn redraw(&mut self, view: &NavigationView<'_>) -> ChartResult<()> {
        self(view)
    }
}

/// Per-chart navigation facade.
///
/// Owns both axis scales and the scrollbar gesture state. Its methods are the
/// only mutators; renderers observe the result through [`NavigationView`].
pub struct ChartNavigator<R: Redraw> {
    redraw: R,
    config: NavigatorConfig,
    x_scale: AxisScale,
    y_scale: AxisScale,
    zoom: ZoomController,
    interaction: ScrollbarInteraction,
    labels: AxisLabels,
}

impl<R: Redraw> ChartNavigator<R> {
    pub fn new(
        redraw: R,
        config: NavigatorConfig,
        x_scale: impl Into<AxisScale>,
        y_scale: impl Into<AxisScale>,
    ) -> ChartResult<Self> {
        config.validate()?;
        let x_scale = x_scale.into();
        let y_scale = y_scale.into();

        if let Some(x) = x_scale.as_numeric() {
            if x.orientation() != AxisOrientation::Horizontal {
                return Err(ChartError::InvalidConfig(
                    "x axis must use horizontal orientation".to_owned(),
                ));
            }
        }
        match &y_scale {
            AxisScale::Numeric(y) if y.orientation() == AxisOrientation::Vertical => {}
            AxisScale::Numeric(_) => {
                return Err(ChartError::InvalidConfig(
                    "y axis must use vertical orientation".to_owned(),
                ));
            }
            AxisScale::Band(_) => {
                return Err(ChartError::InvalidConfig(
                    "categorical y axes are not supported".to_owned(),
                ));
            }
        }

        check_axis_matches_config("x", &x_scale, config.layout.x_plot_range()?, &config)?;
        check_axis_matches_config("y", &y_scale, config.layout.y_plot_range()?, &config)?;

        let zoom = config.tuning.zoom_controller()?;
        let interaction = ScrollbarInteraction::new(config.scrollbars()?);
        debug!(
            width = config.layout.width,
            height = config.layout.height,
            x_window = ?x_scale.window(),
            y_window = ?y_scale.window(),
            "chart navigator created"
        );

        Ok(Self {
            redraw,
            config,
            x_scale,
            y_scale,
            zoom,
            interaction,
            labels: AxisLabels::default(),
        })
    }

    /// Convenience constructor for two numeric axes over the plot body.
    pub fn numeric(
        redraw: R,
        config: NavigatorConfig,
        x_extent: (f64, f64),
        y_extent: (f64, f64),
    ) -> ChartResult<Self> {
        let x = config.numeric_x(x_extent)?;
        let y = config.numeric_y(y_extent)?;
        Self::new(redraw, config, x, y)
    }

    #[must_use]
    pub fn with_labels(mut self, labels: AxisLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    #[must_use]
    pub fn x_scale(&self) -> &AxisScale {
        &self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> &AxisScale {
        &self.y_scale
    }

    #[must_use]
    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.interaction.state()
    }

    #[must_use]
    pub fn redraw_target(&self) -> &R {
        &self.redraw
    }

    #[must_use]
    pub fn into_redraw_target(self) -> R {
        self.redraw
    }

    #[must_use]
    pub fn view(&self) -> NavigationView<'_> {
        NavigationView {
            x: &self.x_scale,
            y: &self.y_scale,
            drag: self.interaction.state(),
            layout: &self.config.layout,
            scrollbars: self.interaction.tracks(),
            labels: &self.labels,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot::from_view(&self.view())
    }

    /// Paints the current state, e.g. on first mount.
    pub fn redraw(&mut self) -> ChartResult<()> {
        let view = NavigationView {
            x: &self.x_scale,
            y: &self.y_scale,
            drag: self.interaction.state(),
            layout: &self.config.layout,
            scrollbars: self.interaction.tracks(),
            labels: &self.labels,
        };
        self.redraw.redraw(&view)
    }

    pub fn on_zoom_in_click(&mut self) -> ChartResult<()> {
        self.zoom_step(ZoomDirection::In)
    }

    pub fn on_zoom_out_click(&mut self) -> ChartResult<()> {
        self.zoom_step(ZoomDirection::Out)
    }

    /// Returns `true` when the press started a gesture (and a redraw was issued).
    pub fn on_pointer_down(&mut self, point: PixelPoint) -> ChartResult<bool> {
        let changed = self
            .interaction
            .pointer_down(point, &self.x_scale, &self.y_scale);
        self.redraw_if(changed)
    }

    /// Returns `true` when a drag was active (and a redraw was issued).
    pub fn on_pointer_move(&mut self, point: PixelPoint) -> ChartResult<bool> {
        let changed =
            self.interaction
                .pointer_move(point, &mut self.x_scale, &mut self.y_scale);
        self.redraw_if(changed)
    }

    /// Returns `true` when a drag ended (and a redraw was issued).
    pub fn on_pointer_up(&mut self, point: PixelPoint) -> ChartResult<bool> {
        let changed = self
            .interaction
            .pointer_up(point, &mut self.x_scale, &mut self.y_scale);
        self.redraw_if(changed)
    }

    /// Host-side cancel (pointer left the surface, unrelated re-render).
    pub fn on_pointer_cancel(&mut self) -> ChartResult<bool> {
        let changed = self.interaction.cancel();
        self.redraw_if(changed)
    }

    /// Restores both windows to their full extents.
    pub fn reset_view(&mut self) -> ChartResult<bool> {
        self.interaction.cancel();
        let x_changed = self.x_scale.reset_window();
        let y_changed = self.y_scale.reset_window();
        debug!(x_changed, y_changed, "view reset");
        self.redraw_if(x_changed || y_changed)
    }

    fn zoom_step(&mut self, direction: ZoomDirection) -> ChartResult<()> {
        self.zoom
            .zoom_2d(&mut self.x_scale, &mut self.y_scale, direction);
        self.redraw()
    }

    fn redraw_if(&mut self, changed: bool) -> ChartResult<bool> {
        if !changed {
            trace!("navigation event produced no change; redraw skipped");
            return Ok(false);
        }
        self.redraw()?;
        Ok(true)
    }
}

/// Scales must be built for the navigator's own layout and tuning, so the
/// limits it reports are the ones it enforces.
fn check_axis_matches_config(
    name: &str,
    scale: &AxisScale,
    plot_range: PixelRange,
    config: &NavigatorConfig,
) -> ChartResult<()> {
    let range = scale.pixel_range();
    if range != plot_range {
        return Err(ChartError::InvalidConfig(format!(
            "{name} axis pixel range {}..{} does not match the layout plot range {}..{}",
            range.low, range.high, plot_range.low, plot_range.high
        )));
    }
    if let Some(numeric) = scale.as_numeric() {
        if numeric.min_window_fraction() != config.tuning.min_window_fraction {
            return Err(ChartError::InvalidConfig(format!(
                "{name} axis min window fraction {} does not match the configured {}",
                numeric.min_window_fraction(),
                config.tuning.min_window_fraction
            )));
        }
    }
    Ok(())
}
