//! Scrollbar drag state machine.
//!
//! A press on a scrollbar track starts a gesture that either pans the window
//! (thumb body) or moves one of its bounds (end-caps). Moves are applied
//! incrementally: the anchor resets after every move, so once a bound clamps,
//! further drift in that direction does nothing until the pointer reverses.

mod scrollbar;

pub use scrollbar::{ScrollbarLayout, ScrollbarTrack};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisScale, NumericScale, PixelPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragMode {
    /// Thumb body: both bounds shift together.
    Pan,
    /// Lower end-cap: only the window start moves.
    ResizeMin,
    /// Upper end-cap: only the window end moves.
    ResizeMax,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        axis: ScrollAxis,
        mode: DragMode,
        /// Value-direction track offset of the last processed pointer position.
        anchor_px: f64,
    },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Interprets pointer events over the two scrollbar tracks of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarInteraction {
    tracks: ScrollbarLayout,
    state: DragState,
}

impl ScrollbarInteraction {
    #[must_use]
    pub fn new(tracks: ScrollbarLayout) -> Self {
        Self {
            tracks,
            state: DragState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn tracks(&self) -> &ScrollbarLayout {
        &self.tracks
    }

    /// Starts a gesture when `point` lies on the track of a numeric axis.
    ///
    /// Returns `true` when the machine entered `Dragging`. A press while a
    /// gesture is still active (a lost release) restarts the gesture.
    pub fn pointer_down(&mut self, point: PixelPoint, x: &AxisScale, y: &AxisScale) -> bool {
        let was_dragging = self.state.is_dragging();
        self.state = DragState::Idle;

        let Some(axis) = self.tracks.hit_test(point) else {
            trace!(x = point.x, y = point.y, "pointer down outside scrollbars");
            return was_dragging;
        };
        let Some(scale) = pick(axis, x, y).as_numeric() else {
            trace!(?axis, "pointer down on categorical axis track ignored");
            return was_dragging;
        };

        let track = self.tracks.track(axis);
        let mode = track.classify(point, scale);
        let anchor_px = track.value_offset(point);
        trace!(?axis, ?mode, anchor_px, "scrollbar drag started");
        self.state = DragState::Dragging {
            axis,
            mode,
            anchor_px,
        };
        true
    }

    /// Applies the pointer displacement since the last event to the dragged axis.
    ///
    /// Returns `true` while a gesture is active, whether or not the window
    /// moved; idle moves are no-ops.
    pub fn pointer_move(
        &mut self,
        point: PixelPoint,
        x: &mut AxisScale,
        y: &mut AxisScale,
    ) -> bool {
        let DragState::Dragging {
            axis,
            mode,
            anchor_px,
        } = self.state
        else {
            return false;
        };

        let track = self.tracks.track(axis);
        let offset = track.value_offset(point);
        if !offset.is_finite() {
            trace!(?axis, "non-finite pointer position ignored; anchor kept");
            return true;
        }
        if let Some(scale) = pick_mut(axis, x, y).as_numeric_mut() {
            let delta = track.pixels_to_data(offset - anchor_px, scale);
            let changed = apply_drag(scale, mode, delta);
            trace!(?axis, ?mode, delta, changed, "scrollbar drag");
        }

        self.state = DragState::Dragging {
            axis,
            mode,
            anchor_px: offset,
        };
        true
    }

    /// Applies the release position as the final move and ends the gesture.
    pub fn pointer_up(&mut self, point: PixelPoint, x: &mut AxisScale, y: &mut AxisScale) -> bool {
        let handled = self.pointer_move(point, x, y);
        if handled {
            trace!("scrollbar drag finished");
        }
        self.state = DragState::Idle;
        handled
    }

    /// Ends the gesture without applying any further movement.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.state.is_dragging();
        if was_dragging {
            trace!("scrollbar drag cancelled");
        }
        self.state = DragState::Idle;
        was_dragging
    }
}

fn apply_drag(scale: &mut NumericScale, mode: DragMode, delta: f64) -> bool {
    match mode {
        DragMode::Pan => scale.pan_by(delta),
        DragMode::ResizeMin => scale.resize_min_by(delta),
        DragMode::ResizeMax => scale.resize_max_by(delta),
    }
}

fn pick<'a>(axis: ScrollAxis, x: &'a AxisScale, y: &'a AxisScale) -> &'a AxisScale {
    match axis {
        ScrollAxis::X => x,
        ScrollAxis::Y => y,
    }
}

fn pick_mut<'a>(axis: ScrollAxis, x: &'a mut AxisScale, y: &'a mut AxisScale) -> &'a mut AxisScale {
    match axis {
        ScrollAxis::X => x,
        ScrollAxis::Y => y,
    }
}
