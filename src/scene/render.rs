//! Clear-and-replay rendering of a scene.

use super::Scene;
use crate::color::Rgba;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::raster::{Drawable, LineAlgorithm, PixelSink};

/// Colors and options used when replaying a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Algorithm for stored lines.
    pub line_algorithm: LineAlgorithm,
    /// Line color.
    pub line_color: Rgba,
    /// Circle outline color.
    pub circle_color: Rgba,
    /// Circle center mark color.
    pub center_color: Rgba,
    /// Clip window outline color.
    pub overlay_color: Rgba,
    /// Plot each circle's center pixel.
    pub mark_circle_centers: bool,
    /// Outline the last clip window.
    pub show_clip_window: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            line_algorithm: LineAlgorithm::Dda,
            line_color: Rgba::BLACK,
            circle_color: Rgba::BLACK,
            center_color: Rgba::BLACK,
            overlay_color: Rgba::RED,
            mark_circle_centers: true,
            show_clip_window: true,
        }
    }
}

impl RenderStyle {
    /// Resolve hex colors from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`](crate::Error::InvalidColor) for a
    /// malformed color string.
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            line_algorithm: config.line_algorithm,
            line_color: config.line_color.parse()?,
            circle_color: config.circle_color.parse()?,
            center_color: config.center_color.parse()?,
            overlay_color: config.overlay_color.parse()?,
            mark_circle_centers: config.mark_circle_centers,
            show_clip_window: config.show_clip_window,
        })
    }
}

/// Redraw `scene` into `sink` from nothing.
///
/// Erases the sink, restores its reference frame, then plots every line,
/// every circle and the clip overlay in that order. The output depends only
/// on `scene` and `style`.
pub fn render_scene(scene: &Scene, style: &RenderStyle, sink: &mut dyn PixelSink) {
    crate::time_scope!(Render, "replay scene");
    sink.clear_all();
    sink.draw_reference_frame();

    for line in scene.lines() {
        line.draw_with(sink, style.line_color, style.line_algorithm);
    }

    for circle in scene.circles() {
        if style.mark_circle_centers {
            let c = circle.center().to_pixel();
            sink.plot_pixel(c.x, c.y, style.center_color);
        }
        circle.draw(sink, style.circle_color);
    }

    if style.show_clip_window {
        if let Some(window) = scene.clip_overlay() {
            for edge in window.edges() {
                edge.draw_with(sink, style.overlay_color, LineAlgorithm::Bresenham);
            }
        }
    }

    crate::raster_trace!(
        Render,
        "replayed {} lines, {} circles",
        scene.lines().len(),
        scene.circles().len()
    );
}
