//! YAML configuration for canvas and rendering.
//!
//! Every field has a default, so an empty document is a valid configuration.
//! Colors stay as hex strings here and are validated when resolved into a
//! [`RenderStyle`](crate::scene::RenderStyle) or
//! [`CanvasStyle`](crate::canvas::CanvasStyle).

use crate::error::{Error, Result};
use crate::raster::LineAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color (`#rrggbb` or `#rrggbbaa`).
    #[serde(default = "default_background")]
    pub background: String,

    /// Color of the coordinate axes.
    #[serde(default = "default_black")]
    pub axis_color: String,

    /// Draw axes through the canvas center on every redraw.
    #[serde(default = "default_true")]
    pub draw_axes: bool,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_background() -> String {
    "#ffffff".to_string()
}
fn default_black() -> String {
    "#000000".to_string()
}
fn default_overlay() -> String {
    "#ff0000".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            axis_color: default_black(),
            draw_axes: default_true(),
        }
    }
}

/// Scene replay settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Algorithm used to replay stored lines (`dda` or `bresenham`).
    #[serde(default)]
    pub line_algorithm: LineAlgorithm,

    /// Line color.
    #[serde(default = "default_black")]
    pub line_color: String,

    /// Circle outline color.
    #[serde(default = "default_black")]
    pub circle_color: String,

    /// Color of the circle center mark.
    #[serde(default = "default_black")]
    pub center_color: String,

    /// Color of the clip window outline.
    #[serde(default = "default_overlay")]
    pub overlay_color: String,

    /// Plot a pixel at each circle's center.
    #[serde(default = "default_true")]
    pub mark_circle_centers: bool,

    /// Outline the last clip window until the next edit.
    #[serde(default = "default_true")]
    pub show_clip_window: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_algorithm: LineAlgorithm::default(),
            line_color: default_black(),
            circle_color: default_black(),
            center_color: default_black(),
            overlay_color: default_overlay(),
            mark_circle_centers: default_true(),
            show_clip_window: default_true(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Replay settings.
    #[serde(default)]
    pub render: RenderConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Serializes the configuration back to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                crate::raster_warn!(Config, "using defaults: {e}");
                Self::default()
            }
        }
    }
}
