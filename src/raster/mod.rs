//! Rasterization of ideal lines and circles into integer pixels.
//!
//! # Algorithms
//!
//! - **DDA**: real-valued incremental line walk, rounded on emission
//! - **Bresenham's Line**: exact integer decision-variable line walk
//! - **Bresenham's Circle**: first-octant midpoint walk, mirrored eight ways
//!
//! Every rasterizer is a lazy, finite iterator; none of them fail. Degenerate
//! input (identical endpoints, zero radius) yields a minimal pixel run.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

mod circle;
mod line;

pub use circle::{plot_octant_mirror, rasterize_circle_bresenham, BresenhamCircle};
pub use line::{
    rasterize_line_bresenham, rasterize_line_incremental, BresenhamLine, DdaLine,
};

use crate::color::Rgba;
use crate::geometry::{Circle, Line, PixelPoint};
use serde::{Deserialize, Serialize};

/// Something that accepts single pixels (canvas, framebuffer, recorder).
///
/// Pixel coordinates follow the canvas convention: origin top-left,
/// y grows downward. Out-of-range pixels are the sink's business.
pub trait PixelSink {
    /// Draw a unit-size mark at `(x, y)`.
    fn plot_pixel(&mut self, x: i32, y: i32, color: Rgba);

    /// Redraw fixed background geometry (e.g. coordinate axes).
    fn draw_reference_frame(&mut self);

    /// Erase everything drawn so far.
    fn clear_all(&mut self);
}

/// Line rasterization method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineAlgorithm {
    /// Digital Differential Analyzer.
    #[default]
    Dda,
    /// Bresenham's integer algorithm.
    Bresenham,
}

/// Pixel run of a line under either algorithm.
#[derive(Debug, Clone)]
pub enum LinePixels {
    /// Produced by [`rasterize_line_incremental`].
    Dda(DdaLine),
    /// Produced by [`rasterize_line_bresenham`].
    Bresenham(BresenhamLine),
}

impl Iterator for LinePixels {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<PixelPoint> {
        match self {
            Self::Dda(it) => it.next(),
            Self::Bresenham(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Dda(it) => it.size_hint(),
            Self::Bresenham(it) => it.size_hint(),
        }
    }
}

impl Line {
    /// Rasterize with the chosen algorithm.
    ///
    /// Bresenham works on integer endpoints, so they are rounded first;
    /// DDA keeps the real endpoints and rounds each emitted pixel.
    #[must_use]
    pub fn pixels(&self, algorithm: LineAlgorithm) -> LinePixels {
        match algorithm {
            LineAlgorithm::Dda => LinePixels::Dda(rasterize_line_incremental(self.start, self.end)),
            LineAlgorithm::Bresenham => LinePixels::Bresenham(rasterize_line_bresenham(
                self.start.to_pixel(),
                self.end.to_pixel(),
            )),
        }
    }
}

impl Circle {
    /// Rasterize the outline with Bresenham's circle algorithm.
    #[must_use]
    pub fn pixels(&self) -> BresenhamCircle {
        rasterize_circle_bresenham(self.center().to_pixel(), self.radius())
    }
}

/// Trait for primitives that can be plotted into a [`PixelSink`].
pub trait Drawable {
    /// Plot this primitive using `algorithm` where it applies.
    fn draw_with(&self, sink: &mut dyn PixelSink, color: Rgba, algorithm: LineAlgorithm);

    /// Plot this primitive with the default line algorithm.
    fn draw(&self, sink: &mut dyn PixelSink, color: Rgba) {
        self.draw_with(sink, color, LineAlgorithm::default());
    }
}

impl Drawable for Line {
    fn draw_with(&self, sink: &mut dyn PixelSink, color: Rgba, algorithm: LineAlgorithm) {
        plot_all(sink, self.pixels(algorithm), color);
    }
}

impl Drawable for Circle {
    fn draw_with(&self, sink: &mut dyn PixelSink, color: Rgba, _algorithm: LineAlgorithm) {
        plot_all(sink, self.pixels(), color);
    }
}

/// Feed a pixel run into a sink.
pub fn plot_all<I>(sink: &mut dyn PixelSink, pixels: I, color: Rgba)
where
    I: IntoIterator<Item = PixelPoint>,
{
    for p in pixels {
        sink.plot_pixel(p.x, p.y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[derive(Default)]
    struct Recorder {
        pixels: Vec<(i32, i32, Rgba)>,
        frames: usize,
        clears: usize,
    }

    impl PixelSink for Recorder {
        fn plot_pixel(&mut self, x: i32, y: i32, color: Rgba) {
            self.pixels.push((x, y, color));
        }

        fn draw_reference_frame(&mut self) {
            self.frames += 1;
        }

        fn clear_all(&mut self) {
            self.clears += 1;
            self.pixels.clear();
        }
    }

    #[test]
    fn test_drawable_line_uses_requested_algorithm() {
        let line = Line::from_coords(0.0, 0.0, 4.0, 2.0);

        let mut dda = Recorder::default();
        line.draw_with(&mut dda, Rgba::BLACK, LineAlgorithm::Dda);
        let mut bres = Recorder::default();
        line.draw_with(&mut bres, Rgba::BLACK, LineAlgorithm::Bresenham);

        assert_eq!(dda.pixels[3], (3, 2, Rgba::BLACK));
        assert_eq!(bres.pixels[3], (3, 1, Rgba::BLACK));
    }

    #[test]
    fn test_drawable_default_is_dda() {
        let line = Line::from_coords(0.0, 0.0, 4.0, 2.0);
        let mut a = Recorder::default();
        line.draw(&mut a, Rgba::RED);
        let expected: Vec<_> = line
            .pixels(LineAlgorithm::Dda)
            .map(|p| (p.x, p.y, Rgba::RED))
            .collect();
        assert_eq!(a.pixels, expected);
    }

    #[test]
    fn test_drawable_circle() {
        let circle = Circle::new(Point::new(10.4, 10.6), 3.0);
        let mut rec = Recorder::default();
        circle.draw(&mut rec, Rgba::BLUE);
        assert!(rec.pixels.contains(&(10, 14, Rgba::BLUE)));
        assert!(rec.pixels.contains(&(7, 11, Rgba::BLUE)));
        assert_eq!(rec.frames, 0);
        assert_eq!(rec.clears, 0);
    }

    #[test]
    fn test_bresenham_rounds_real_endpoints() {
        let line = Line::from_coords(0.4, 0.6, 3.5, 0.6);
        let pixels: Vec<_> = line.pixels(LineAlgorithm::Bresenham).collect();
        assert_eq!(pixels.first(), Some(&PixelPoint::new(0, 1)));
        assert_eq!(pixels.last(), Some(&PixelPoint::new(4, 1)));
    }

    #[test]
    fn test_line_algorithm_serde_names() {
        let algo: LineAlgorithm = serde_yaml_ng::from_str("bresenham").unwrap();
        assert_eq!(algo, LineAlgorithm::Bresenham);
        assert_eq!(LineAlgorithm::default(), LineAlgorithm::Dda);
    }
}
