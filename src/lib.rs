//! # Trueno-Raster
//!
//! Classic 2D raster graphics primitives on a SIMD-backed framebuffer.
//!
//! The crate covers the textbook pipeline of an interactive drawing canvas:
//! scan-converting ideal geometry into pixels, clipping lines against a
//! window, and transforming whole scenes before replaying them.
//!
//! ## Features
//!
//! - **Rasterization**: DDA and Bresenham lines, Bresenham circles with
//!   eight-way symmetry, all as lazy pixel iterators
//! - **Clipping**: Cohen-Sutherland and Liang-Barsky with a shared contract
//! - **Transforms**: translation, rotation and scaling about the primitive,
//!   reflection through a centered Cartesian plane
//! - **Scene replay**: a single source of truth redrawn from scratch after
//!   every edit, exported as PNG
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let canvas = Canvas::new(200, 100)?;
//! let mut session = Session::new(canvas, RenderStyle::default());
//!
//! session.add_line(Line::from_coords(10.0, 10.0, 150.0, 60.0))?;
//! session.add_circle(Circle::new(Point::new(100.0, 50.0), 20.0))?;
//! session.clip(ClipWindow::from_bounds(20.0, 20.0, 180.0, 80.0), ClipAlgorithm::LiangBarsky)?;
//! session.reflect("Y")?;
//!
//! let png = session.sink().to_png_bytes()?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." *IBM Systems Journal*, 4(1), 25-30.
//! - Newman, W. M., & Sproull, R. F. (1979). *Principles of Interactive
//!   Computer Graphics*. McGraw-Hill.
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line
//!   clipping." *ACM Transactions on Graphics*, 3(1), 1-22.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code (Cloudflare incident 2025-11-18)
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and hex parsing.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, lines, circles, clip windows).
pub mod geometry;

// ============================================================================
// Algorithms
// ============================================================================

/// Line and circle rasterization.
pub mod raster;

/// Line clipping against a rectangular window.
pub mod clip;

/// Translation, rotation, scaling and reflection.
pub mod transform;

// ============================================================================
// Scene and Rendering
// ============================================================================

/// Drawing surface with a centered Cartesian plane.
pub mod canvas;

/// Scene model and clear-and-replay rendering.
pub mod scene;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Configuration and Diagnostics
// ============================================================================

/// YAML configuration.
pub mod config;

/// Opt-in diagnostic logging.
pub mod debug;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, CanvasStyle};
    pub use crate::clip::{ClipAlgorithm, ClipOutcome, RejectReason};
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, ClipWindow, Line, PixelPoint, Point};
    pub use crate::raster::{Drawable, LineAlgorithm, PixelSink};
    pub use crate::scene::{render_scene, ClipReport, RenderStyle, Scene, Session};
    pub use crate::transform::{Axis, CenteredPlane, CoordinateSpace, Transform};
}
