//! Cohen-Sutherland region-code clipping.

use super::{has_finite_input, ClipOutcome, RejectReason};
use crate::geometry::{ClipWindow, Line, Point};
use std::ops::{BitAnd, BitOr};

/// Each pass pins one endpoint onto a boundary it violated; two endpoints
/// with at most two violated half-planes each never need more than this.
const MAX_PASSES: usize = 8;

/// Four-bit region code: one bit per violated window half-plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Outcode(u8);

impl Outcode {
    /// Inside (or on the boundary of) the window.
    pub const INSIDE: Self = Self(0);
    /// `x < x_min`.
    pub const LEFT: Self = Self(1);
    /// `x > x_max`.
    pub const RIGHT: Self = Self(2);
    /// `y < y_min`.
    pub const BOTTOM: Self = Self(4);
    /// `y > y_max`.
    pub const TOP: Self = Self(8);

    /// Classify `p`. Comparisons are strict, so boundary points are inside.
    #[must_use]
    pub fn of(p: Point, window: &ClipWindow) -> Self {
        let mut code = Self::INSIDE;
        if p.x < window.x_min() {
            code = code | Self::LEFT;
        } else if p.x > window.x_max() {
            code = code | Self::RIGHT;
        }
        if p.y < window.y_min() {
            code = code | Self::BOTTOM;
        } else if p.y > window.y_max() {
            code = code | Self::TOP;
        }
        code
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when no half-plane is violated.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `flag` is set.
    #[must_use]
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }
}

impl BitOr for Outcode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Outcode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Intersection of segment `a`-`b` with the boundary named by `out`.
///
/// Boundaries are tried TOP, BOTTOM, RIGHT, LEFT. Returns `None` when the
/// segment has no extent along the axis being divided by.
fn boundary_intersection(a: Point, b: Point, out: Outcode, window: &ClipWindow) -> Option<Point> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let horizontal = |y_edge: f64| {
        (dy != 0.0).then(|| Point::new(a.x + dx * (y_edge - a.y) / dy, y_edge))
    };
    let vertical = |x_edge: f64| {
        (dx != 0.0).then(|| Point::new(x_edge, a.y + dy * (x_edge - a.x) / dx))
    };

    if out.contains(Outcode::TOP) {
        horizontal(window.y_max())
    } else if out.contains(Outcode::BOTTOM) {
        horizontal(window.y_min())
    } else if out.contains(Outcode::RIGHT) {
        vertical(window.x_max())
    } else if out.contains(Outcode::LEFT) {
        vertical(window.x_min())
    } else {
        None
    }
}

/// Clip with the Cohen-Sutherland algorithm.
///
/// Both outcodes zero accepts; a shared violated half-plane rejects;
/// otherwise an outside endpoint is moved onto the boundary it violates and
/// the loop repeats.
#[must_use]
pub fn clip_cohen_sutherland(line: Line, window: &ClipWindow) -> ClipOutcome {
    if !has_finite_input(&line, window) {
        return ClipOutcome::Rejected(RejectReason::NonFinite);
    }

    let (mut p0, mut p1) = (line.start, line.end);
    let mut code0 = Outcode::of(p0, window);
    let mut code1 = Outcode::of(p1, window);

    for _ in 0..MAX_PASSES {
        if code0.is_inside() && code1.is_inside() {
            return accept(p0, p1, window);
        }
        if !(code0 & code1).is_inside() {
            crate::raster_debug!(Clip, "cohen-sutherland rejected {line}");
            return ClipOutcome::Rejected(RejectReason::Outside);
        }

        let move_start = !code0.is_inside();
        let out = if move_start { code0 } else { code1 };
        // Always intersect the input segment, not the partly clipped one, so
        // a corner touch on integer coordinates lands exactly on the corner.
        let Some(hit) = boundary_intersection(line.start, line.end, out, window) else {
            crate::raster_warn!(Clip, "zero delta on boundary intersection for {line}");
            return ClipOutcome::Rejected(RejectReason::DegenerateBoundary);
        };

        if move_start {
            p0 = hit;
            code0 = Outcode::of(p0, window);
        } else {
            p1 = hit;
            code1 = Outcode::of(p1, window);
        }
    }

    crate::raster_warn!(Clip, "cohen-sutherland did not settle for {line}");
    ClipOutcome::Rejected(RejectReason::Outside)
}

/// Final acceptance with the containment sanity check.
fn accept(p0: Point, p1: Point, window: &ClipWindow) -> ClipOutcome {
    let clipped = Line::new(p0, p1);
    let inside = window.contains(p0) || window.contains(p1);
    debug_assert!(inside, "accepted {clipped} has no endpoint inside the window");
    if !inside {
        crate::raster_warn!(Clip, "accepted {clipped} has no endpoint inside the window");
    }
    crate::raster_debug!(Clip, "cohen-sutherland accepted {clipped}");
    ClipOutcome::Accepted(clipped)
}
