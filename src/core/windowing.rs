//! Pure window arithmetic shared by the axis scales, the zoom controller and
//! the scrollbar state machine.
//!
//! Every function takes the full extent `(min, max)` and a window that already
//! satisfies `full.0 <= window.0 <= window.1 <= full.1`, and returns a window
//! that still does.

use crate::error::{ChartError, ChartResult};

/// Orders a raw extent and widens zero-span extents around their value.
///
/// The widening is at least a couple of ULPs of the value, so large values
/// (nanosecond timestamps) still get a non-zero span.
pub fn normalize_extent(start: f64, end: f64, degenerate_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "extent bounds must be finite".to_owned(),
        ));
    }

    let (lo, hi) = if start == end {
        let half = (degenerate_span / 2.0).max(2.0 * f64::EPSILON * start.abs());
        (start - half, end + half)
    } else {
        (start.min(end), start.max(end))
    };

    if !lo.is_finite() || !hi.is_finite() || !(hi - lo).is_finite() || lo >= hi {
        return Err(ChartError::InvalidData(format!(
            "extent {start}..{end} has no finite non-zero span"
        )));
    }
    Ok((lo, hi))
}

/// Smallest window span allowed inside `full`.
///
/// `fraction` of the extent span, floored at a few ULPs of the bounds so a
/// clamped window never collapses to zero width, and capped at the full span.
#[must_use]
pub fn min_window_span(full: (f64, f64), fraction: f64) -> f64 {
    let span = full.1 - full.0;
    let ulp_floor = 4.0 * f64::EPSILON * full.0.abs().max(full.1.abs());
    (fraction * span).max(ulp_floor).min(span)
}

/// Min/max over the finite values, `None` when there are none.
#[must_use]
pub fn finite_extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values.into_iter().filter(|v| v.is_finite()) {
        min = min.min(value);
        max = max.max(value);
    }
    (min <= max).then_some((min, max))
}

/// Fits a requested window inside `full` with at least `min_span` width.
///
/// Bounds are clamped first; a window that ends up narrower than `min_span`
/// is widened around its center and shifted back inside the extent.
#[must_use]
pub fn clamp_window(full: (f64, f64), start: f64, end: f64, min_span: f64) -> (f64, f64) {
    let full_span = full.1 - full.0;
    let min_span = min_span.min(full_span);

    let mut lo = start.clamp(full.0, full.1);
    let mut hi = end.clamp(full.0, full.1);
    if hi - lo >= min_span {
        return (lo, hi);
    }

    let center = ((start + end) / 2.0).clamp(full.0, full.1);
    lo = center - min_span / 2.0;
    hi = center + min_span / 2.0;
    shift_inside(full, lo, hi)
}

/// Shifts `[lo, hi]` (no wider than `full`) so it lies inside `full`.
#[must_use]
pub fn shift_inside(full: (f64, f64), lo: f64, hi: f64) -> (f64, f64) {
    if lo < full.0 {
        (full.0, (hi + (full.0 - lo)).min(full.1))
    } else if hi > full.1 {
        ((lo - (hi - full.1)).max(full.0), full.1)
    } else {
        (lo, hi)
    }
}

/// Shifts both bounds by `delta`, reduced so neither bound leaves the extent.
#[must_use]
pub fn pan_window(full: (f64, f64), window: (f64, f64), delta: f64) -> (f64, f64) {
    let span = window.1 - window.0;
    if window.0 + delta <= full.0 {
        (full.0, (full.0 + span).min(full.1))
    } else if window.1 + delta >= full.1 {
        ((full.1 - span).max(full.0), full.1)
    } else {
        (window.0 + delta, window.1 + delta)
    }
}

/// Moves the lower bound only, never below `full.0` nor within `min_span` of the upper bound.
#[must_use]
pub fn resize_window_min(
    full: (f64, f64),
    window: (f64, f64),
    delta: f64,
    min_span: f64,
) -> (f64, f64) {
    let ceiling = (window.1 - min_span).max(full.0);
    let lo = (window.0 + delta).min(ceiling).max(full.0);
    (lo, window.1)
}

/// Moves the upper bound only, never above `full.1` nor within `min_span` of the lower bound.
#[must_use]
pub fn resize_window_max(
    full: (f64, f64),
    window: (f64, f64),
    delta: f64,
    min_span: f64,
) -> (f64, f64) {
    let floor = (window.0 + min_span).min(full.1);
    let hi = (window.1 + delta).max(floor).min(full.1);
    (window.0, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_extent_orders_and_widens() {
        assert_eq!(normalize_extent(5.0, 1.0, 1.0).expect("ordered"), (1.0, 5.0));
        assert_eq!(normalize_extent(3.0, 3.0, 2.0).expect("widened"), (2.0, 4.0));
        assert!(normalize_extent(f64::NAN, 1.0, 1.0).is_err());
    }

    #[test]
    fn normalize_extent_widens_beyond_ulp_of_large_values() {
        let (lo, hi) = normalize_extent(1e17, 1e17, 1.0).expect("widened");
        assert!(lo < 1e17 && 1e17 < hi);
        assert!(normalize_extent(f64::MAX, f64::MAX, 1.0).is_err());
        assert!(normalize_extent(-f64::MAX, f64::MAX, 1.0).is_err());
    }

    #[test]
    fn min_window_span_is_floored_at_bound_precision() {
        assert_eq!(min_window_span((0.0, 100.0), 0.01), 1.0);
        let full = (1e17, 1e17 + 1024.0);
        let min_span = min_window_span(full, 0.001);
        assert!(min_span > 1.0);
        assert!(full.1 - min_span < full.1);
        assert_eq!(min_window_span((0.0, 1.0), 1.0), 1.0);
    }

    #[test]
    fn clamp_window_keeps_far_outside_requests_at_the_edge() {
        assert_eq!(clamp_window((0.0, 100.0), 1e300, 1e300, 1.0), (99.0, 100.0));
    }

    #[test]
    fn finite_extent_skips_non_finite_values() {
        let extent = finite_extent([3.0, f64::NAN, -1.0, f64::INFINITY, 7.5]);
        assert_eq!(extent, Some((-1.0, 7.5)));
        assert_eq!(finite_extent([f64::NAN]), None);
    }

    #[test]
    fn clamp_window_widens_inverted_requests_to_min_span() {
        let (lo, hi) = clamp_window((0.0, 100.0), 60.0, 40.0, 10.0);
        assert_eq!((lo, hi), (45.0, 55.0));
    }

    #[test]
    fn pan_window_snaps_to_the_edge_it_reaches() {
        assert_eq!(pan_window((0.0, 100.0), (20.0, 60.0), 15.0), (35.0, 75.0));
        assert_eq!(pan_window((0.0, 100.0), (20.0, 60.0), 90.0), (60.0, 100.0));
        assert_eq!(pan_window((0.0, 100.0), (20.0, 60.0), -90.0), (0.0, 40.0));
    }

    #[test]
    fn resize_bounds_never_cross() {
        assert_eq!(
            resize_window_min((0.0, 100.0), (10.0, 50.0), 80.0, 5.0),
            (45.0, 50.0)
        );
        assert_eq!(
            resize_window_max((0.0, 100.0), (10.0, 50.0), -80.0, 5.0),
            (10.0, 15.0)
        );
    }

    #[test]
    fn clamp_window_shifts_min_span_window_off_the_edge() {
        let (lo, hi) = clamp_window((0.0, 100.0), 99.0, 99.0, 10.0);
        assert_eq!((lo, hi), (90.0, 100.0));
    }
}
