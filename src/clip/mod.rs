//! Line clipping against an axis-aligned window.
//!
//! Two classic algorithms with the same contract: given a [`Line`] and a
//! [`ClipWindow`], either accept with the visible sub-segment or reject.
//! Rejection is an ordinary [`ClipOutcome`], never an error, and both
//! algorithms reach the same decision and endpoints up to rounding.
//!
//! # References
//!
//! - Newman, W. M., & Sproull, R. F. (1979). *Principles of Interactive
//!   Computer Graphics*. McGraw-Hill. (Cohen-Sutherland)
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line
//!   clipping." *ACM Transactions on Graphics*, 3(1), 1-22.

mod cohen_sutherland;
mod liang_barsky;

pub use cohen_sutherland::{clip_cohen_sutherland, Outcode};
pub use liang_barsky::clip_liang_barsky;

use crate::geometry::{ClipWindow, Line};
use serde::{Deserialize, Serialize};

/// Why a segment produced no visible part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The segment lies entirely outside the window.
    Outside,
    /// The segment is parallel to a boundary and on its outer side.
    ParallelOutside,
    /// A boundary intersection would divide by a zero delta.
    DegenerateBoundary,
    /// The segment or window carried NaN/infinite coordinates.
    NonFinite,
}

/// Result of clipping one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipOutcome {
    /// Visible part of the segment, endpoints inside the window (inclusive).
    Accepted(Line),
    /// Nothing visible.
    Rejected(RejectReason),
}

impl ClipOutcome {
    /// True for [`ClipOutcome::Accepted`].
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The clipped segment, if any.
    #[must_use]
    pub const fn line(&self) -> Option<Line> {
        match self {
            Self::Accepted(line) => Some(*line),
            Self::Rejected(_) => None,
        }
    }
}

/// Clipping method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClipAlgorithm {
    /// Region-outcode iteration.
    #[default]
    CohenSutherland,
    /// Parametric entering/leaving bounds.
    LiangBarsky,
}

impl ClipAlgorithm {
    /// Clip `line` against `window` with this method.
    #[must_use]
    pub fn clip(self, line: Line, window: &ClipWindow) -> ClipOutcome {
        match self {
            Self::CohenSutherland => clip_cohen_sutherland(line, window),
            Self::LiangBarsky => clip_liang_barsky(line, window),
        }
    }
}

fn has_finite_input(line: &Line, window: &ClipWindow) -> bool {
    line.is_finite() && window.is_finite()
}
