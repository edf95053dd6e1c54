//! Scene model: the authoritative primitive lists.
//!
//! A [`Scene`] never draws. Every mutation replaces or extends its lists, and
//! the picture is recomputed from scratch by [`render_scene`]. [`Session`]
//! pairs a scene with a pixel sink and performs that clear-and-replay after
//! each mutation.

mod render;
mod session;

pub use render::{render_scene, RenderStyle};
pub use session::Session;

use crate::clip::ClipAlgorithm;
use crate::error::{ensure_drawable, ensure_finite, Result};
use crate::geometry::{Circle, ClipWindow, Line};
use crate::transform::{Axis, CoordinateSpace, Transform};

/// Outcome of clipping every stored line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipReport {
    /// Lines with a visible part, now replaced by that part.
    pub kept: usize,
    /// Lines removed because nothing was visible.
    pub dropped: usize,
}

/// Ordered lines and circles, plus the last clip window.
///
/// Insertion order only affects layering when replayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    lines: Vec<Line>,
    circles: Vec<Circle>,
    clip_overlay: Option<ClipWindow>,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Stored circles in insertion order.
    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Window of the most recent clip, until the next mutation.
    #[must_use]
    pub const fn clip_overlay(&self) -> Option<&ClipWindow> {
        self.clip_overlay.as_ref()
    }

    /// True when there are no lines and no circles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.circles.is_empty()
    }

    /// Append a completed line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`](crate::Error::NonFiniteCoordinate)
    /// if an endpoint is NaN or infinite, or
    /// [`Error::CoordinateOutOfRange`](crate::Error::CoordinateOutOfRange)
    /// beyond [`MAX_COORDINATE`](crate::geometry::MAX_COORDINATE); the scene
    /// is left unchanged.
    pub fn add_line(&mut self, line: Line) -> Result<()> {
        check_line("line", &line)?;
        crate::raster_debug!(Scene, "add {line}");
        self.lines.push(line);
        self.clip_overlay = None;
        Ok(())
    }

    /// Append a completed circle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`](crate::Error::NonFiniteCoordinate)
    /// if the center or radius is NaN or infinite, or an out-of-range error
    /// for a circle too large to rasterize.
    pub fn add_circle(&mut self, circle: Circle) -> Result<()> {
        check_circle("circle", &circle)?;
        crate::raster_debug!(Scene, "add {circle}");
        self.circles.push(circle);
        self.clip_overlay = None;
        Ok(())
    }

    /// Remove every primitive.
    pub fn clear(&mut self) {
        crate::raster_debug!(
            Scene,
            "clear {} lines, {} circles",
            self.lines.len(),
            self.circles.len()
        );
        self.lines.clear();
        self.circles.clear();
        self.clip_overlay = None;
    }

    /// Clip every line against `window`, replacing the line list with the
    /// visible parts. Circles are not clipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the window has non-finite bounds.
    pub fn clip(&mut self, window: ClipWindow, algorithm: ClipAlgorithm) -> Result<ClipReport> {
        ensure_finite(
            "clip window",
            &[window.x_min(), window.y_min(), window.x_max(), window.y_max()],
        )?;
        crate::time_scope!(Scene, "clip");

        let before = self.lines.len();
        let kept: Vec<Line> = self
            .lines
            .iter()
            .filter_map(|&line| algorithm.clip(line, &window).line())
            .collect();
        let report = ClipReport {
            kept: kept.len(),
            dropped: before - kept.len(),
        };

        crate::raster_debug!(
            Scene,
            "{algorithm:?} kept {} and dropped {} lines",
            report.kept,
            report.dropped
        );
        self.lines = kept;
        self.clip_overlay = Some(window);
        Ok(report)
    }

    /// Map every primitive through `transform` and replace both lists.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-finite transform parameter, or when any
    /// transformed coordinate overflows or leaves the
    /// [`MAX_COORDINATE`](crate::geometry::MAX_COORDINATE) range. The scene
    /// is left unchanged on error.
    pub fn apply(&mut self, transform: Transform, space: &dyn CoordinateSpace) -> Result<()> {
        transform.validate()?;
        crate::raster_debug!(Scene, "{transform}");

        let lines = self
            .lines
            .iter()
            .map(|&l| {
                let mapped = transform.apply_line(l, space);
                check_line("transformed line", &mapped).map(|()| mapped)
            })
            .collect::<Result<Vec<_>>>()?;
        let circles = self
            .circles
            .iter()
            .map(|&c| {
                let mapped = transform.apply_circle(c, space);
                check_circle("transformed circle", &mapped).map(|()| mapped)
            })
            .collect::<Result<Vec<_>>>()?;

        self.lines = lines;
        self.circles = circles;
        self.clip_overlay = None;
        Ok(())
    }

    /// Translate everything by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dx` or `dy` is not finite or a moved primitive
    /// leaves the coordinate range.
    pub fn translate(&mut self, dx: f64, dy: f64, space: &dyn CoordinateSpace) -> Result<()> {
        self.apply(Transform::Translate { dx, dy }, space)
    }

    /// Rotate each line about its start point; circles stay put.
    ///
    /// # Errors
    ///
    /// Returns an error if `degrees` is not finite or a rotated end point
    /// leaves the coordinate range.
    pub fn rotate_lines(&mut self, degrees: f64, space: &dyn CoordinateSpace) -> Result<()> {
        self.apply(Transform::Rotate { degrees }, space)
    }

    /// Scale lines about their start points and circle radii.
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` is not finite or the scaled primitives
    /// overflow or leave the coordinate range.
    pub fn scale(&mut self, factor: f64, space: &dyn CoordinateSpace) -> Result<()> {
        self.apply(Transform::Scale { factor }, space)
    }

    /// Mirror everything across `axis` of `space`.
    ///
    /// # Errors
    ///
    /// Returns an error if a mirrored primitive leaves the coordinate range.
    pub fn reflect(&mut self, axis: Axis, space: &dyn CoordinateSpace) -> Result<()> {
        self.apply(Transform::Reflect(axis), space)
    }
}

fn check_line(context: &'static str, line: &Line) -> Result<()> {
    ensure_drawable(context, &[line.start.x, line.start.y, line.end.x, line.end.y])
}

fn check_circle(context: &'static str, circle: &Circle) -> Result<()> {
    let center = circle.center();
    ensure_drawable(context, &[center.x, center.y, circle.radius()])
}
