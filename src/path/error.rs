//! Error types for path geometry validation

use thiserror::Error;

use crate::geometry::{Axis, Point};

/// Which terminal of a connection an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEnd {
    From,
    To,
}

impl std::fmt::Display for TerminalEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalEnd::From => write!(f, "from"),
            TerminalEnd::To => write!(f, "to"),
        }
    }
}

/// Violations of the path invariants: axis alignment, continuity and anchor
/// attachment
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    /// A segment's endpoints disagree with its declared direction
    #[error("segment {index} is declared {axis:?} but its endpoints are not aligned on that axis")]
    AxisMismatch { index: usize, axis: Axis },

    /// Two consecutive segments do not share a point
    #[error("segments {index} and {} do not share a point", .index + 1)]
    Discontinuity { index: usize },

    /// A terminal segment no longer meets its anchor's position
    #[error("{end} terminal segment does not meet its anchor at ({:.1}, {:.1})", .expected.x, .expected.y)]
    AnchorDetachment {
        end: TerminalEnd,
        expected: Point,
        actual: Point,
    },

    /// A connection with no segments at all
    #[error("connection has no segments")]
    Empty,
}

impl GeometryError {
    pub fn axis_mismatch(index: usize, axis: Axis) -> Self {
        Self::AxisMismatch { index, axis }
    }

    pub fn discontinuity(index: usize) -> Self {
        Self::Discontinuity { index }
    }

    pub fn detached(end: TerminalEnd, expected: Point, actual: Point) -> Self {
        Self::AnchorDetachment {
            end,
            expected,
            actual,
        }
    }
}
