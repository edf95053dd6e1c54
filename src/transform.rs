//! Affine transforms over lines and circles.
//!
//! All functions are pure: they return new primitives and never draw.
//! Rotation and scaling pivot on the primitive itself (a line's start point,
//! a circle's center), never on a global origin. Reflection goes through a
//! [`CoordinateSpace`] so the mirror axes pass through the canvas center.

use crate::error::{ensure_finite_param, Error, Result};
use crate::geometry::{Circle, Line, Point};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Coordinate spaces
// ============================================================================

/// Conversion between pixel space (origin top-left, y down) and a Cartesian
/// space (y up).
pub trait CoordinateSpace {
    /// Pixel coordinates to Cartesian coordinates.
    fn to_cartesian(&self, pixel: Point) -> Point;

    /// Cartesian coordinates to pixel coordinates.
    fn to_pixel(&self, cartesian: Point) -> Point;
}

/// Cartesian plane whose origin sits at a fixed pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredPlane {
    origin: Point,
}

impl CenteredPlane {
    /// Plane with its origin at the given pixel position.
    #[must_use]
    pub const fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Plane centered on a `width` x `height` canvas.
    #[must_use]
    pub fn for_size(width: u32, height: u32) -> Self {
        Self::new(Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0))
    }

    /// Pixel position of the Cartesian origin.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }
}

impl CoordinateSpace for CenteredPlane {
    fn to_cartesian(&self, pixel: Point) -> Point {
        Point::new(pixel.x - self.origin.x, self.origin.y - pixel.y)
    }

    fn to_pixel(&self, cartesian: Point) -> Point {
        Point::new(cartesian.x + self.origin.x, self.origin.y - cartesian.y)
    }
}

// ============================================================================
// Translation
// ============================================================================

/// Shift both endpoints by `delta`.
#[must_use]
pub fn translate_line(line: Line, delta: Point) -> Line {
    Line::new(
        line.start.offset(delta.x, delta.y),
        line.end.offset(delta.x, delta.y),
    )
}

/// Shift the center by `delta`; the radius is unchanged.
#[must_use]
pub fn translate_circle(circle: Circle, delta: Point) -> Circle {
    Circle::new(circle.center().offset(delta.x, delta.y), circle.radius())
}

/// Translate every line and circle by `delta`.
#[must_use]
pub fn translate(lines: &[Line], circles: &[Circle], delta: Point) -> (Vec<Line>, Vec<Circle>) {
    (
        lines.iter().map(|&l| translate_line(l, delta)).collect(),
        circles.iter().map(|&c| translate_circle(c, delta)).collect(),
    )
}

// ============================================================================
// Rotation
// ============================================================================

/// Rotate the end point about the start point by `angle_degrees`.
///
/// Positive angles turn counter-clockwise in a y-up frame; in pixel space
/// (y down) that appears clockwise. Both endpoints of the result are
/// rounded to the nearest integer, ties to even.
#[must_use]
pub fn rotate(line: Line, angle_degrees: f64) -> Line {
    let (s, c) = angle_degrees.to_radians().sin_cos();
    let pivot = line.start;
    let vx = line.end.x - pivot.x;
    let vy = line.end.y - pivot.y;

    let end = Point::new(pivot.x + vx * c - vy * s, pivot.y + vx * s + vy * c);
    Line::new(round_point(pivot), round_point(end))
}

fn round_point(p: Point) -> Point {
    Point::new(p.x.round_ties_even(), p.y.round_ties_even())
}

// ============================================================================
// Scaling
// ============================================================================

/// Scale the start-to-end vector by `factor`, keeping the start fixed.
///
/// A negative factor flips the line through its start point.
#[must_use]
pub fn scale_line(line: Line, factor: f64) -> Line {
    let Line { start, end } = line;
    Line::new(
        start,
        Point::new(
            start.x + (end.x - start.x) * factor,
            start.y + (end.y - start.y) * factor,
        ),
    )
}

/// Scale the radius by the magnitude of `factor`, keeping the center fixed.
#[must_use]
pub fn scale_circle(circle: Circle, factor: f64) -> Circle {
    Circle::new(circle.center(), circle.radius() * factor.abs())
}

// ============================================================================
// Reflection
// ============================================================================

/// Mirror axis for [`reflect_line`] and [`reflect_circle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Mirror across the horizontal axis (negate y).
    X,
    /// Mirror across the vertical axis (negate x).
    Y,
    /// Mirror through the origin (negate both).
    XY,
}

impl Axis {
    fn apply(self, p: Point) -> Point {
        match self {
            Self::X => Point::new(p.x, -p.y),
            Self::Y => Point::new(-p.x, p.y),
            Self::XY => Point::new(-p.x, -p.y),
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" => Ok(Self::X),
            "Y" => Ok(Self::Y),
            "XY" => Ok(Self::XY),
            other => Err(Error::InvalidAxis(other.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::XY => "XY",
        })
    }
}

/// Reflect a pixel-space point across `axis` of `space`.
#[must_use]
pub fn reflect_point(p: Point, axis: Axis, space: &dyn CoordinateSpace) -> Point {
    space.to_pixel(axis.apply(space.to_cartesian(p)))
}

/// Reflect both endpoints of a line.
#[must_use]
pub fn reflect_line(line: Line, axis: Axis, space: &dyn CoordinateSpace) -> Line {
    Line::new(
        reflect_point(line.start, axis, space),
        reflect_point(line.end, axis, space),
    )
}

/// Reflect a circle's center; the radius is unchanged.
#[must_use]
pub fn reflect_circle(circle: Circle, axis: Axis, space: &dyn CoordinateSpace) -> Circle {
    Circle::new(reflect_point(circle.center(), axis, space), circle.radius())
}

// ============================================================================
// Batch transforms
// ============================================================================

/// One transform applied to a whole scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Shift everything by `(dx, dy)`.
    Translate {
        /// Horizontal shift in pixels.
        dx: f64,
        /// Vertical shift in pixels.
        dy: f64,
    },
    /// Rotate lines about their start points; circles are unaffected.
    Rotate {
        /// Angle in degrees.
        degrees: f64,
    },
    /// Scale lines about their start points and circle radii.
    Scale {
        /// Scale factor.
        factor: f64,
    },
    /// Mirror across an axis of the coordinate space.
    Reflect(Axis),
}

impl Transform {
    /// Reject NaN/infinite parameters.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Translate { dx, dy } => {
                ensure_finite_param("dx", dx)?;
                ensure_finite_param("dy", dy)
            }
            Self::Rotate { degrees } => ensure_finite_param("degrees", degrees),
            Self::Scale { factor } => ensure_finite_param("factor", factor),
            Self::Reflect(_) => Ok(()),
        }
    }

    /// Map one line.
    #[must_use]
    pub fn apply_line(&self, line: Line, space: &dyn CoordinateSpace) -> Line {
        match *self {
            Self::Translate { dx, dy } => translate_line(line, Point::new(dx, dy)),
            Self::Rotate { degrees } => rotate(line, degrees),
            Self::Scale { factor } => scale_line(line, factor),
            Self::Reflect(axis) => reflect_line(line, axis, space),
        }
    }

    /// Map one circle.
    #[must_use]
    pub fn apply_circle(&self, circle: Circle, space: &dyn CoordinateSpace) -> Circle {
        match *self {
            Self::Translate { dx, dy } => translate_circle(circle, Point::new(dx, dy)),
            Self::Rotate { .. } => circle,
            Self::Scale { factor } => scale_circle(circle, factor),
            Self::Reflect(axis) => reflect_circle(circle, axis, space),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translate { dx, dy } => write!(f, "translate by ({dx}, {dy})"),
            Self::Rotate { degrees } => write!(f, "rotate by {degrees} degrees"),
            Self::Scale { factor } => write!(f, "scale by {factor}"),
            Self::Reflect(axis) => write!(f, "reflect across {axis}"),
        }
    }
}
