//! Liang-Barsky parametric clipping.

use super::{has_finite_input, ClipOutcome, RejectReason};
use crate::geometry::{ClipWindow, Line, Point};

/// Clip with the Liang-Barsky algorithm.
///
/// With `P(t) = start + t·(end - start)`, each boundary contributes a
/// direction term `p` and an offset `q`. A zero `p` with negative `q` means
/// the segment runs parallel to and outside that boundary. Otherwise
/// `r = q / p` bounds `t` from below (entering, `p < 0`) or above
/// (leaving, `p > 0`), starting from the implicit `[0, 1]`.
#[must_use]
pub fn clip_liang_barsky(line: Line, window: &ClipWindow) -> ClipOutcome {
    if !has_finite_input(&line, window) {
        return ClipOutcome::Rejected(RejectReason::NonFinite);
    }

    let Line { start, end } = line;
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let p = [-dx, dx, -dy, dy];
    let q = [
        start.x - window.x_min(),
        window.x_max() - start.x,
        start.y - window.y_min(),
        window.y_max() - start.y,
    ];

    if p.iter().zip(&q).any(|(&p, &q)| p == 0.0 && q < 0.0) {
        crate::raster_debug!(Clip, "liang-barsky: {line} parallel to and outside the window");
        return ClipOutcome::Rejected(RejectReason::ParallelOutside);
    }

    let mut t_enter = 0.0_f64;
    let mut t_leave = 1.0_f64;
    for (&p, &q) in p.iter().zip(&q) {
        if p < 0.0 {
            t_enter = t_enter.max(q / p);
        } else if p > 0.0 {
            t_leave = t_leave.min(q / p);
        }
    }

    if t_enter > t_leave {
        crate::raster_debug!(Clip, "liang-barsky rejected {line}");
        return ClipOutcome::Rejected(RejectReason::Outside);
    }

    // Untouched endpoints are returned as-is. Interior evaluation of P(t) can
    // land a rounding step outside, so it is clamped to the inclusive window.
    let at = |t: f64| {
        if t <= 0.0 {
            start
        } else if t >= 1.0 {
            end
        } else {
            window.clamp(Point::new(start.x + dx * t, start.y + dy * t))
        }
    };
    let clipped = Line::new(at(t_enter), at(t_leave));
    crate::raster_debug!(Clip, "liang-barsky accepted {clipped}");
    ClipOutcome::Accepted(clipped)
}
