//! Error types for trueno-raster operations.
//!
//! Geometric outcomes such as a rejected clip or a zero-length line are
//! ordinary return values and never appear here. Only contract violations
//! (malformed tokens, non-finite input) and I/O problems do.

use crate::geometry::MAX_COORDINATE;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Reflection axis token outside `X`, `Y`, `XY`.
    #[error("Invalid reflection axis '{0}': expected X, Y or XY")]
    InvalidAxis(String),

    /// A primitive carried a NaN or infinite coordinate.
    #[error("Non-finite coordinate in {context}")]
    NonFiniteCoordinate {
        /// What was being validated (e.g. "line", "circle").
        context: &'static str,
    },

    /// A primitive lies too far from the canvas to be rasterized.
    #[error("Coordinate in {context} exceeds +/-{limit}")]
    CoordinateOutOfRange {
        /// What was being validated (e.g. "line", "transformed circle").
        context: &'static str,
        /// The magnitude bound that was exceeded.
        limit: f64,
    },

    /// A transform parameter was NaN or infinite.
    #[error("Non-finite {name} parameter: {value}")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}

/// Checks that every value is finite, reporting `context` otherwise.
pub(crate) fn ensure_finite(context: &'static str, values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(Error::NonFiniteCoordinate { context })
    }
}

/// Checks that every value is finite and within [`MAX_COORDINATE`].
pub(crate) fn ensure_drawable(context: &'static str, values: &[f64]) -> Result<()> {
    ensure_finite(context, values)?;
    if values.iter().all(|v| v.abs() <= MAX_COORDINATE) {
        Ok(())
    } else {
        Err(Error::CoordinateOutOfRange {
            context,
            limit: MAX_COORDINATE,
        })
    }
}

/// Checks that a single transform parameter is finite.
pub(crate) fn ensure_finite_param(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_axis_names_token() {
        let err = Error::InvalidAxis("Z".to_string());
        assert!(err.to_string().contains("'Z'"));
        assert!(err.to_string().contains("XY"));
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("line", &[0.0, 1.0, -3.5]).is_ok());
        let err = ensure_finite("circle", &[0.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteCoordinate { context: "circle" }));
    }

    #[test]
    fn test_ensure_drawable_bounds_magnitude() {
        assert!(ensure_drawable("line", &[-MAX_COORDINATE, MAX_COORDINATE]).is_ok());
        let err = ensure_drawable("line", &[0.0, MAX_COORDINATE * 2.0]).unwrap_err();
        assert!(matches!(err, Error::CoordinateOutOfRange { context: "line", .. }));
        let err = ensure_drawable("line", &[f64::NEG_INFINITY]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteCoordinate { context: "line" }));
    }

    #[test]
    fn test_ensure_finite_param() {
        assert!(ensure_finite_param("factor", 2.0).is_ok());
        let err = ensure_finite_param("angle", f64::INFINITY).unwrap_err();
        assert!(err.to_string().contains("angle"));
    }
}
