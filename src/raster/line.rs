//! Line rasterizers.
//!
//! Both iterators are lazy and `Clone`: cloning before the first `next()`
//! gives an independent replay of the same pixel sequence.

use crate::geometry::{snap, PixelPoint, Point};

// ============================================================================
// DDA
// ============================================================================

/// Digital Differential Analyzer over real endpoints.
///
/// Emits the rounded start pixel followed by `steps` further pixels, where
/// `steps = round(max(|dx|, |dy|))`. Positions accumulate in floating point
/// and are rounded on emission only, so accumulated error is part of the
/// output.
#[derive(Debug, Clone)]
pub struct DdaLine {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    remaining: usize,
    started: bool,
}

impl DdaLine {
    /// Prepare a DDA walk from `p1` to `p2`.
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let span = dx.abs().max(dy.abs());

        // Non-finite spans emit the start pixel only.
        let steps = if span.is_finite() && !dx.is_nan() && !dy.is_nan() {
            span.round_ties_even()
        } else {
            0.0
        };
        let remaining = steps as usize;
        let (x_inc, y_inc) = if remaining == 0 {
            (0.0, 0.0)
        } else {
            (dx / steps, dy / steps)
        };

        Self {
            x: p1.x,
            y: p1.y,
            x_inc,
            y_inc,
            remaining,
            started: false,
        }
    }
}

impl Iterator for DdaLine {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<PixelPoint> {
        if !self.started {
            self.started = true;
        } else if self.remaining > 0 {
            self.remaining -= 1;
            self.x += self.x_inc;
            self.y += self.y_inc;
        } else {
            return None;
        }
        Some(PixelPoint::new(snap(self.x), snap(self.y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.saturating_add(usize::from(!self.started));
        (n, Some(n))
    }
}

impl ExactSizeIterator for DdaLine {}

/// Rasterize a line with the incremental (DDA) method.
#[must_use]
pub fn rasterize_line_incremental(p1: Point, p2: Point) -> DdaLine {
    DdaLine::new(p1, p2)
}

// ============================================================================
// Bresenham
// ============================================================================

/// Integer Bresenham line walk.
///
/// After setup every update is exact integer arithmetic. The decision
/// variable starts at `2·minor - major` and moves by `2·minor` on a straight
/// step or `2·(minor - major)` on a diagonal step; a value `<= 0` selects the
/// straight step.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    incr_x: i32,
    incr_y: i32,
    x_major: bool,
    decision: i64,
    inc_straight: i64,
    inc_diagonal: i64,
    remaining: u64,
    started: bool,
}

impl BresenhamLine {
    /// Prepare a Bresenham walk from `p1` to `p2`.
    #[must_use]
    pub fn new(p1: PixelPoint, p2: PixelPoint) -> Self {
        let dx = (i64::from(p2.x) - i64::from(p1.x)).abs();
        let dy = (i64::from(p2.y) - i64::from(p1.y)).abs();
        let incr_x = if p1.x < p2.x { 1 } else { -1 };
        let incr_y = if p1.y < p2.y { 1 } else { -1 };

        let x_major = dx > dy;
        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };

        Self {
            x: p1.x,
            y: p1.y,
            incr_x,
            incr_y,
            x_major,
            decision: 2 * minor - major,
            inc_straight: 2 * minor,
            inc_diagonal: 2 * (minor - major),
            remaining: major as u64,
            started: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<PixelPoint> {
        if !self.started {
            self.started = true;
            return Some(PixelPoint::new(self.x, self.y));
        }
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        if self.decision <= 0 {
            self.decision += self.inc_straight;
            if self.x_major {
                self.x += self.incr_x;
            } else {
                self.y += self.incr_y;
            }
        } else {
            self.decision += self.inc_diagonal;
            self.x += self.incr_x;
            self.y += self.incr_y;
        }
        Some(PixelPoint::new(self.x, self.y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining)
            .unwrap_or(usize::MAX)
            .saturating_add(usize::from(!self.started));
        (n, Some(n))
    }
}

/// Rasterize a line with Bresenham's integer algorithm.
#[must_use]
pub fn rasterize_line_bresenham(p1: PixelPoint, p2: PixelPoint) -> BresenhamLine {
    BresenhamLine::new(p1, p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(points: &[(i32, i32)]) -> Vec<PixelPoint> {
        points.iter().copied().map(PixelPoint::from).collect()
    }

    #[test]
    fn test_bresenham_shallow_sequence() {
        let pixels: Vec<_> =
            rasterize_line_bresenham(PixelPoint::new(0, 0), PixelPoint::new(4, 2)).collect();
        assert_eq!(pixels, px(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]));
    }

    #[test]
    fn test_bresenham_steep_negative_direction() {
        let pixels: Vec<_> =
            rasterize_line_bresenham(PixelPoint::new(0, 0), PixelPoint::new(-2, -4)).collect();
        assert_eq!(pixels, px(&[(0, 0), (0, -1), (-1, -2), (-1, -3), (-2, -4)]));
    }

    #[test]
    fn test_bresenham_horizontal_and_vertical() {
        let h: Vec<_> =
            rasterize_line_bresenham(PixelPoint::new(3, 7), PixelPoint::new(0, 7)).collect();
        assert_eq!(h, px(&[(3, 7), (2, 7), (1, 7), (0, 7)]));

        let v: Vec<_> =
            rasterize_line_bresenham(PixelPoint::new(1, 1), PixelPoint::new(1, 3)).collect();
        assert_eq!(v, px(&[(1, 1), (1, 2), (1, 3)]));
    }

    #[test]
    fn test_bresenham_degenerate_is_single_pixel() {
        let p = PixelPoint::new(9, -4);
        let pixels: Vec<_> = rasterize_line_bresenham(p, p).collect();
        assert_eq!(pixels, vec![p]);
    }

    #[test]
    fn test_bresenham_is_8_connected_and_ends_on_target() {
        let end = PixelPoint::new(17, -6);
        let pixels: Vec<_> = rasterize_line_bresenham(PixelPoint::new(-3, 5), end).collect();
        assert_eq!(pixels.len(), 21);
        assert_eq!(pixels.last(), Some(&end));
        for w in pixels.windows(2) {
            assert!((w[1].x - w[0].x).abs() <= 1);
            assert!((w[1].y - w[0].y).abs() <= 1);
        }
    }

    #[test]
    fn test_dda_shallow_sequence_rounds_half_to_even() {
        let pixels: Vec<_> =
            rasterize_line_incremental(Point::new(0.0, 0.0), Point::new(4.0, 2.0)).collect();
        // y walks 0, 0.5, 1.0, 1.5, 2.0
        assert_eq!(pixels, px(&[(0, 0), (1, 0), (2, 1), (3, 2), (4, 2)]));
    }

    #[test]
    fn test_dda_degenerate_is_single_pixel() {
        let p = Point::new(2.0, 3.0);
        let pixels: Vec<_> = rasterize_line_incremental(p, p).collect();
        assert_eq!(pixels, px(&[(2, 3)]));
    }

    #[test]
    fn test_dda_sub_pixel_span_is_single_pixel() {
        let pixels: Vec<_> =
            rasterize_line_incremental(Point::new(1.0, 1.0), Point::new(1.2, 1.3)).collect();
        assert_eq!(pixels, px(&[(1, 1)]));
    }

    #[test]
    fn test_dda_nan_does_not_loop() {
        let pixels: Vec<_> =
            rasterize_line_incremental(Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)).collect();
        assert_eq!(pixels.len(), 1);
    }

    #[test]
    fn test_iterators_are_restartable_and_exact_size() {
        let dda = rasterize_line_incremental(Point::new(0.0, 0.0), Point::new(10.0, 3.0));
        assert_eq!(dda.len(), 11);
        let first: Vec<_> = dda.clone().collect();
        let second: Vec<_> = dda.collect();
        assert_eq!(first, second);

        let bres = rasterize_line_bresenham(PixelPoint::new(0, 0), PixelPoint::new(10, 3));
        assert_eq!(bres.size_hint(), (11, Some(11)));
        assert_eq!(bres.clone().count(), bres.count());
    }

    #[test]
    fn test_dda_and_bresenham_agree_on_diagonal() {
        let dda: Vec<_> =
            rasterize_line_incremental(Point::new(0.0, 0.0), Point::new(5.0, 5.0)).collect();
        let bres: Vec<_> =
            rasterize_line_bresenham(PixelPoint::new(0, 0), PixelPoint::new(5, 5)).collect();
        assert_eq!(dda, bres);
    }
}
