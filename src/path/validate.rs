//! Invariant checks for segment lists and whole connections.
//!
//! Axis alignment and continuity are hard errors. Direction alternation
//! between neighbors is advisory only: jogs legitimately leave
//! same-direction neighbors behind, so a violation is logged, never
//! rejected.

use log::warn;

use crate::geometry::{coords_eq, Axis, Point};

use super::error::{GeometryError, TerminalEnd};
use super::types::{Connection, Segment};

/// Verify that every segment is aligned on its declared axis and that
/// consecutive segments share a point.
pub fn validate_segments(segments: &[Segment]) -> Result<(), GeometryError> {
    for (index, segment) in segments.iter().enumerate() {
        let aligned = match segment.axis {
            Axis::Horizontal => coords_eq(segment.start.y, segment.end.y),
            Axis::Vertical => coords_eq(segment.start.x, segment.end.x),
        };
        if !aligned {
            return Err(GeometryError::axis_mismatch(index, segment.axis));
        }
    }

    for (index, pair) in segments.windows(2).enumerate() {
        if !pair[0].end.almost_eq(pair[1].start) {
            return Err(GeometryError::discontinuity(index));
        }
    }

    for (index, pair) in segments.windows(2).enumerate() {
        if pair[0].axis == pair[1].axis {
            warn!(
                "segments {} and {} run on the same axis ({:?})",
                index,
                index + 1,
                pair[0].axis
            );
        }
    }

    Ok(())
}

/// Run [`validate_segments`], then check that the path's first and last
/// points sit exactly on the anchors.
pub fn validate_connection(
    connection: &Connection,
    from_pos: Point,
    to_pos: Point,
) -> Result<(), GeometryError> {
    validate_segments(&connection.segments)?;

    let first = connection.segments.first().ok_or(GeometryError::Empty)?;
    let last = connection.segments.last().ok_or(GeometryError::Empty)?;

    if !first.start.almost_eq(from_pos) {
        return Err(GeometryError::detached(
            TerminalEnd::From,
            from_pos,
            first.start,
        ));
    }
    if !last.end.almost_eq(to_pos) {
        return Err(GeometryError::detached(TerminalEnd::To, to_pos, last.end));
    }

    Ok(())
}
