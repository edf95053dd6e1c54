//! A scene bound to a drawing surface.

use super::{render_scene, ClipReport, RenderStyle, Scene};
use crate::canvas::Canvas;
use crate::clip::ClipAlgorithm;
use crate::config::Config;
use crate::error::Result;
use crate::geometry::{Circle, ClipWindow, Line, Point};
use crate::raster::PixelSink;
use crate::transform::{Axis, CoordinateSpace, Transform};

/// Owns a [`Scene`] and the sink it is shown on.
///
/// Every successful mutation is followed by a full redraw, so the sink
/// always shows exactly the current primitives. A failed mutation leaves
/// both the scene and the sink untouched.
#[derive(Debug)]
pub struct Session<S> {
    scene: Scene,
    sink: S,
    style: RenderStyle,
}

impl<S: PixelSink + CoordinateSpace> Session<S> {
    /// Start an empty session and draw the reference frame.
    pub fn new(sink: S, style: RenderStyle) -> Self {
        let mut session = Self {
            scene: Scene::new(),
            sink,
            style,
        };
        session.redraw();
        session
    }

    /// Current primitives.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The drawing surface.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Replay style.
    #[must_use]
    pub const fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Change the replay style and redraw.
    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
        self.redraw();
    }

    /// Clear the sink and replay the whole scene.
    pub fn redraw(&mut self) {
        render_scene(&self.scene, &self.style, &mut self.sink);
    }

    /// Add a line and redraw.
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite endpoints.
    pub fn add_line(&mut self, line: Line) -> Result<()> {
        self.scene.add_line(line)?;
        self.redraw();
        Ok(())
    }

    /// Add a circle and redraw.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-finite center or radius.
    pub fn add_circle(&mut self, circle: Circle) -> Result<()> {
        self.scene.add_circle(circle)?;
        self.redraw();
        Ok(())
    }

    /// Add the circle centered on `center` passing through `rim`.
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite points.
    pub fn add_circle_through(&mut self, center: Point, rim: Point) -> Result<()> {
        self.add_circle(Circle::from_two_points(center, rim))
    }

    /// Remove every primitive and redraw the empty frame.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.redraw();
    }

    /// Clip all lines against `window` and redraw with the window outlined.
    ///
    /// # Errors
    ///
    /// Returns an error if the window has non-finite bounds.
    pub fn clip(&mut self, window: ClipWindow, algorithm: ClipAlgorithm) -> Result<ClipReport> {
        let report = self.scene.clip(window, algorithm)?;
        self.redraw();
        Ok(report)
    }

    /// Apply one transform to the whole scene and redraw.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-finite transform parameter or when a
    /// transformed primitive leaves the drawable coordinate range.
    pub fn apply(&mut self, transform: Transform) -> Result<()> {
        self.scene.apply(transform, &self.sink)?;
        self.redraw();
        Ok(())
    }

    /// Translate everything by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dx` or `dy` is not finite or the moved scene
    /// leaves the coordinate range.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.apply(Transform::Translate { dx, dy })
    }

    /// Rotate each line about its start point.
    ///
    /// # Errors
    ///
    /// Returns an error if `degrees` is not finite or a rotated line leaves
    /// the coordinate range.
    pub fn rotate_lines(&mut self, degrees: f64) -> Result<()> {
        self.apply(Transform::Rotate { degrees })
    }

    /// Scale lines and circles.
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` is not finite or the scaled scene leaves
    /// the coordinate range.
    pub fn scale(&mut self, factor: f64) -> Result<()> {
        self.apply(Transform::Scale { factor })
    }

    /// Mirror across the axis named by `axis` (`"X"`, `"Y"` or `"XY"`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAxis`](crate::Error::InvalidAxis) for any
    /// other token; nothing is redrawn in that case.
    pub fn reflect(&mut self, axis: &str) -> Result<()> {
        let axis: Axis = axis.parse()?;
        self.apply(Transform::Reflect(axis))
    }

    /// Give back the scene and sink.
    pub fn into_parts(self) -> (Scene, S) {
        (self.scene, self.sink)
    }
}

impl Session<Canvas> {
    /// Session on a canvas built from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for zero canvas dimensions or malformed colors.
    pub fn from_config(config: &Config) -> Result<Self> {
        let canvas = Canvas::from_config(&config.canvas)?;
        let style = RenderStyle::from_config(&config.render)?;
        Ok(Self::new(canvas, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::error::Error;

    #[test]
    fn test_new_session_draws_axes() {
        let session = Session::new(Canvas::new(20, 10).unwrap(), RenderStyle::default());
        assert_eq!(session.sink().framebuffer().count_color(Rgba::BLACK), 29);
        assert!(session.scene().is_empty());
    }

    #[test]
    fn test_add_line_redraws() {
        let mut session = Session::new(Canvas::new(20, 10).unwrap(), RenderStyle::default());
        session.add_line(Line::from_coords(1.0, 1.0, 4.0, 1.0)).unwrap();
        for x in 1..=4 {
            assert_eq!(session.sink().pixel(x, 1), Some(Rgba::BLACK));
        }
    }

    #[test]
    fn test_clear_returns_to_axes_only() {
        let mut session = Session::new(Canvas::new(20, 10).unwrap(), RenderStyle::default());
        session.add_line(Line::from_coords(1.0, 1.0, 4.0, 1.0)).unwrap();
        session.clear();
        assert_eq!(session.sink().framebuffer().count_color(Rgba::BLACK), 29);
    }

    #[test]
    fn test_invalid_axis_changes_nothing() {
        let mut session = Session::new(Canvas::new(20, 10).unwrap(), RenderStyle::default());
        session.add_line(Line::from_coords(1.0, 1.0, 4.0, 1.0)).unwrap();
        let before = session.sink().to_png_bytes().unwrap();

        assert!(matches!(session.reflect("Z"), Err(Error::InvalidAxis(_))));
        assert_eq!(session.scene().lines()[0], Line::from_coords(1.0, 1.0, 4.0, 1.0));
        assert_eq!(session.sink().to_png_bytes().unwrap(), before);
    }

    #[test]
    fn test_reflect_uses_canvas_center() {
        let mut session = Session::new(Canvas::new(20, 10).unwrap(), RenderStyle::default());
        session.add_line(Line::from_coords(1.0, 1.0, 4.0, 1.0)).unwrap();
        session.reflect("XY").unwrap();
        assert_eq!(session.scene().lines()[0], Line::from_coords(19.0, 9.0, 16.0, 9.0));
        assert_eq!(session.sink().pixel(1, 1), Some(Rgba::WHITE));
        assert_eq!(session.sink().pixel(17, 9), Some(Rgba::BLACK));
    }

    #[test]
    fn test_clip_outlines_window() {
        let mut session = Session::new(Canvas::new(20, 10).unwrap(), RenderStyle::default());
        session.add_line(Line::from_coords(0.0, 2.0, 19.0, 2.0)).unwrap();
        let report = session
            .clip(ClipWindow::from_bounds(3.0, 1.0, 8.0, 3.0), ClipAlgorithm::CohenSutherland)
            .unwrap();
        assert_eq!(report, ClipReport { kept: 1, dropped: 0 });
        assert_eq!(session.sink().pixel(3, 1), Some(Rgba::RED));
        assert_eq!(session.sink().pixel(5, 2), Some(Rgba::BLACK));
        assert_eq!(session.sink().pixel(12, 2), Some(Rgba::WHITE));

        session.translate(0.0, 0.0).unwrap();
        assert_eq!(session.sink().framebuffer().count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.canvas.width = 32;
        config.canvas.height = 16;
        config.canvas.draw_axes = false;
        let session = Session::from_config(&config).unwrap();
        assert_eq!(session.sink().width(), 32);
        assert_eq!(session.sink().framebuffer().count_color(Rgba::WHITE), 32 * 16);
    }
}
