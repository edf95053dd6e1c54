//! The concrete pixel sink: a framebuffer with a centered Cartesian plane.

use crate::color::Rgba;
use crate::config::CanvasConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point};
use crate::output::PngEncoder;
use crate::raster::{Drawable, LineAlgorithm, PixelSink};
use crate::transform::{CenteredPlane, CoordinateSpace};
use std::path::Path;

/// Background and reference-frame appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasStyle {
    /// Color used by [`PixelSink::clear_all`].
    pub background: Rgba,
    /// Color of the coordinate axes.
    pub axis_color: Rgba,
    /// Whether [`PixelSink::draw_reference_frame`] draws the axes.
    pub draw_axes: bool,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            axis_color: Rgba::BLACK,
            draw_axes: true,
        }
    }
}

impl CanvasStyle {
    /// Resolve hex colors from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`](crate::Error::InvalidColor) for a
    /// malformed color string.
    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        Ok(Self {
            background: config.background.parse()?,
            axis_color: config.axis_color.parse()?,
            draw_axes: config.draw_axes,
        })
    }
}

/// Drawing surface with its Cartesian origin at the center.
#[derive(Debug, Clone)]
pub struct Canvas {
    fb: Framebuffer,
    plane: CenteredPlane,
    style: CanvasStyle,
}

impl Canvas {
    /// Create a blank canvas with the default style.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_style(width, height, CanvasStyle::default())
    }

    /// Create a blank canvas with an explicit style.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn with_style(width: u32, height: u32, style: CanvasStyle) -> Result<Self> {
        let mut fb = Framebuffer::new(width, height)?;
        fb.clear(style.background);
        Ok(Self {
            fb,
            plane: CenteredPlane::for_size(width, height),
            style,
        })
    }

    /// Create a canvas from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for zero dimensions or malformed colors.
    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        Self::with_style(config.width, config.height, CanvasStyle::from_config(config)?)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.fb.width()
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.fb.height()
    }

    /// Underlying pixels.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// The Cartesian plane used for reflection.
    #[must_use]
    pub const fn plane(&self) -> &CenteredPlane {
        &self.plane
    }

    /// Current style.
    #[must_use]
    pub const fn style(&self) -> &CanvasStyle {
        &self.style
    }

    /// Color at a pixel, `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.fb.get_pixel(x, y)
    }

    /// Min, max and mean luminance of the current pixels.
    ///
    /// A freshly cleared canvas reports `min == max`; any primitive drawn in
    /// a color darker or lighter than the background widens the range.
    #[must_use]
    pub fn luminance_stats(&self) -> (f32, f32, f32) {
        self.fb.luminance_stats()
    }

    /// Write the canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(&self.fb, path)
    }

    /// Encode the canvas as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.fb)
    }

    fn axes(&self) -> [Line; 2] {
        let origin = self.plane.origin();
        let right = f64::from(self.width().saturating_sub(1));
        let bottom = f64::from(self.height().saturating_sub(1));
        [
            Line::new(Point::new(0.0, origin.y), Point::new(right, origin.y)),
            Line::new(Point::new(origin.x, 0.0), Point::new(origin.x, bottom)),
        ]
    }
}

impl PixelSink for Canvas {
    fn plot_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        self.fb.plot(x, y, color);
    }

    fn draw_reference_frame(&mut self) {
        if !self.style.draw_axes {
            return;
        }
        let color = self.style.axis_color;
        for axis in self.axes() {
            axis.draw_with(self, color, LineAlgorithm::Bresenham);
        }
    }

    fn clear_all(&mut self) {
        self.fb.clear(self.style.background);
    }
}

impl CoordinateSpace for Canvas {
    fn to_cartesian(&self, pixel: Point) -> Point {
        self.plane.to_cartesian(pixel)
    }

    fn to_pixel(&self, cartesian: Point) -> Point {
        self.plane.to_pixel(cartesian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_background() {
        let canvas = Canvas::new(20, 10).unwrap();
        assert_eq!(canvas.framebuffer().count_color(Rgba::WHITE), 200);
        assert_eq!(canvas.plane().origin(), Point::new(10.0, 5.0));
    }

    #[test]
    fn test_invalid_canvas_dimensions() {
        assert!(Canvas::new(0, 10).is_err());
    }

    #[test]
    fn test_plot_pixel_ignores_out_of_range() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.plot_pixel(-1, 0, Rgba::RED);
        canvas.plot_pixel(4, 0, Rgba::RED);
        canvas.plot_pixel(1, 2, Rgba::RED);
        assert_eq!(canvas.framebuffer().count_color(Rgba::RED), 1);
        assert_eq!(canvas.pixel(1, 2), Some(Rgba::RED));
    }

    #[test]
    fn test_reference_frame_draws_axes_through_center() {
        let mut canvas = Canvas::new(20, 10).unwrap();
        canvas.draw_reference_frame();
        // Horizontal row y = 5 and column x = 10, sharing one pixel.
        assert_eq!(canvas.framebuffer().count_color(Rgba::BLACK), 20 + 10 - 1);
        assert_eq!(canvas.pixel(0, 5), Some(Rgba::BLACK));
        assert_eq!(canvas.pixel(10, 0), Some(Rgba::BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_reference_frame_can_be_disabled() {
        let style = CanvasStyle {
            draw_axes: false,
            ..CanvasStyle::default()
        };
        let mut canvas = Canvas::with_style(8, 8, style).unwrap();
        canvas.draw_reference_frame();
        assert_eq!(canvas.framebuffer().count_color(Rgba::WHITE), 64);
    }

    #[test]
    fn test_clear_all_restores_background() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.draw_reference_frame();
        canvas.plot_pixel(1, 1, Rgba::RED);
        canvas.clear_all();
        assert_eq!(canvas.framebuffer().count_color(Rgba::WHITE), 64);
    }

    #[test]
    fn test_luminance_range_tracks_drawing() {
        let mut canvas = Canvas::new(20, 10).unwrap();
        let (min, max, mean) = canvas.luminance_stats();
        assert!(max - min < 0.01);
        assert!((mean - 255.0).abs() < 0.5);

        canvas.draw_reference_frame();
        let (min, max, drawn_mean) = canvas.luminance_stats();
        assert!(min < 1.0);
        assert!(max > 254.0);
        assert!(drawn_mean < mean);

        canvas.clear_all();
        let (min, max, _) = canvas.luminance_stats();
        assert!(max - min < 0.01);
    }

    #[test]
    fn test_from_config_rejects_bad_color() {
        let config = CanvasConfig {
            background: "white".to_string(),
            ..CanvasConfig::default()
        };
        assert!(matches!(
            Canvas::from_config(&config),
            Err(crate::Error::InvalidColor(_))
        ));
    }

    #[test]
    fn test_canvas_is_a_coordinate_space() {
        let canvas = Canvas::new(800, 600).unwrap();
        assert_eq!(canvas.to_cartesian(Point::new(400.0, 300.0)), Point::ORIGIN);
        assert_eq!(canvas.to_pixel(Point::new(10.0, 10.0)), Point::new(410.0, 290.0));
    }
}
