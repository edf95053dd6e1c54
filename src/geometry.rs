//! Geometric primitives.
//!
//! Geometry math happens on [`Point`] (real coordinates). [`PixelPoint`] is
//! the discrete form produced at the rasterization boundary; the only way
//! from one to the other is [`Point::to_pixel`], which rounds half to even.

use std::fmt;

/// Largest coordinate magnitude, in pixels, that a scene will store.
///
/// Rasterizer cost grows with the span of a primitive, so anything farther
/// out than this is refused instead of walked pixel by pixel off-canvas.
pub const MAX_COORDINATE: f64 = 1.0e6;

/// A 2D point with real coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Shift by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// True when neither coordinate is NaN or infinite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Round to the nearest pixel, ties to even.
    #[must_use]
    pub fn to_pixel(self) -> PixelPoint {
        PixelPoint::new(snap(self.x), snap(self.y))
    }
}

impl From<PixelPoint> for Point {
    fn from(p: PixelPoint) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An integer pixel coordinate (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PixelPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelPoint {
    /// Create a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Round a real coordinate to a pixel index, ties to even.
///
/// Out-of-range values saturate at the `i32` bounds.
#[inline]
pub(crate) fn snap(v: f64) -> i32 {
    v.round_ties_even() as i32
}

/// A line segment between two points.
///
/// Endpoint order decides the scan direction when rasterizing; clipping
/// treats both orders alike.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// True when both endpoints are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line from {} to {}", self.start, self.end)
    }
}

/// A circle; the radius is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Create a circle. A negative radius degenerates to 0.
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: if radius > 0.0 { radius } else { 0.0 },
        }
    }

    /// Circle centered on `center` passing through `rim`.
    #[must_use]
    pub fn from_two_points(center: Point, rim: Point) -> Self {
        Self::new(center, center.distance(rim))
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius (always `>= 0`).
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// True when center and radius are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle at {} with radius {}", self.center, self.radius)
    }
}

/// Axis-aligned clipping rectangle, normalized so `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    min: Point,
    max: Point,
}

impl ClipWindow {
    /// Build a window from any two opposite corners.
    ///
    /// A NaN in either corner carries into the bounds, so the window reports
    /// itself as non-finite instead of collapsing onto the other corner.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(nan_min(a.x, b.x), nan_min(a.y, b.y)),
            max: Point::new(nan_max(a.x, b.x), nan_max(a.y, b.y)),
        }
    }

    /// Build a window from explicit bounds (normalized like [`ClipWindow::new`]).
    #[must_use]
    pub fn from_bounds(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self::new(Point::new(x_min, y_min), Point::new(x_max, y_max))
    }

    /// Smallest x.
    #[must_use]
    pub const fn x_min(&self) -> f64 {
        self.min.x
    }

    /// Smallest y.
    #[must_use]
    pub const fn y_min(&self) -> f64 {
        self.min.y
    }

    /// Largest x.
    #[must_use]
    pub const fn x_max(&self) -> f64 {
        self.max.x
    }

    /// Largest y.
    #[must_use]
    pub const fn y_max(&self) -> f64 {
        self.max.y
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Clamp a point onto the window (inclusive boundary).
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }

    /// The four boundary edges, in drawing order.
    #[must_use]
    pub fn edges(&self) -> [Line; 4] {
        let (a, b) = (self.min, self.max);
        let top_right = Point::new(b.x, a.y);
        let bottom_left = Point::new(a.x, b.y);
        [
            Line::new(a, top_right),
            Line::new(top_right, b),
            Line::new(b, bottom_left),
            Line::new(bottom_left, a),
        ]
    }

    /// True when all bounds are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// `f64::min` that propagates NaN.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// `f64::max` that propagates NaN.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance(p2) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_lerp() {
        let mid = Point::new(0.0, 0.0).lerp(Point::new(10.0, 10.0), 0.5);
        assert_eq!(mid, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_to_pixel_rounds_half_to_even() {
        assert_eq!(Point::new(0.5, 1.5).to_pixel(), PixelPoint::new(0, 2));
        assert_eq!(Point::new(-0.5, -1.5).to_pixel(), PixelPoint::new(0, -2));
        assert_eq!(Point::new(2.4, 2.6).to_pixel(), PixelPoint::new(2, 3));
    }

    #[test]
    fn test_line_length_and_display() {
        let line = Line::from_coords(0.0, 0.0, 3.0, 4.0);
        assert!((line.length() - 5.0).abs() < 1e-12);
        assert_eq!(line.to_string(), "Line from (0, 0) to (3, 4)");
    }

    #[test]
    fn test_circle_radius_never_negative() {
        assert_eq!(Circle::new(Point::ORIGIN, -3.0).radius(), 0.0);
        assert_eq!(Circle::new(Point::ORIGIN, 3.0).radius(), 3.0);
    }

    #[test]
    fn test_circle_from_two_points() {
        let c = Circle::from_two_points(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(c.center(), Point::new(1.0, 1.0));
        assert!((c.radius() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_clip_window_normalizes_corners() {
        let w = ClipWindow::new(Point::new(10.0, -2.0), Point::new(-4.0, 8.0));
        assert_eq!(w.x_min(), -4.0);
        assert_eq!(w.x_max(), 10.0);
        assert_eq!(w.y_min(), -2.0);
        assert_eq!(w.y_max(), 8.0);
    }

    #[test]
    fn test_clip_window_keeps_nan_corner() {
        let w = ClipWindow::new(Point::new(f64::NAN, 0.0), Point::new(5.0, 5.0));
        assert!(!w.is_finite());
        assert!(w.x_min().is_nan());
        assert!(w.x_max().is_nan());
        assert_eq!(w.y_min(), 0.0);
        assert!(!ClipWindow::from_bounds(0.0, 0.0, 5.0, f64::NAN).is_finite());
    }

    #[test]
    fn test_clip_window_contains_is_inclusive() {
        let w = ClipWindow::from_bounds(-5.0, -5.0, 5.0, 5.0);
        assert!(w.contains(Point::new(5.0, -5.0)));
        assert!(w.contains(Point::ORIGIN));
        assert!(!w.contains(Point::new(5.000_001, 0.0)));
    }

    #[test]
    fn test_clip_window_edges_close_the_loop() {
        let w = ClipWindow::from_bounds(0.0, 0.0, 4.0, 2.0);
        let edges = w.edges();
        for pair in edges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(edges[3].end, edges[0].start);
    }
}
