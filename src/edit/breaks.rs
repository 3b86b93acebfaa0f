//! Jog insertion and removal.
//!
//! A jog replaces one segment with a four-segment detour that leaves the
//! segment's endpoints in place: the tail half is displaced sideways by
//! [`BREAK_OFFSET`], so the detour rejoins the original line at the far
//! endpoint. Removal deletes a point pair and repairs the seam it leaves.
//! Both operations build a candidate list, validate it, and only then
//! commit; a rejected attempt never mutates the connection.

use log::debug;

use crate::geometry::{coords_eq, Axis, Point};
use crate::path::codec;
use crate::path::validate::validate_segments;
use crate::path::{Connection, Segment, TerminalEnd};

use super::error::EditError;
use super::sync;

/// Perpendicular displacement of an inserted jog
pub const BREAK_OFFSET: f64 = 30.0;

/// Project a point onto a segment's span, clamped to it. The projection is
/// rejected when it lands exactly on either endpoint, since a jog there
/// would leave a zero-length stub.
pub fn jog_origin(segment: &Segment, point: Point) -> Result<Point, EditError> {
    let origin = match segment.axis {
        Axis::Horizontal => {
            let lo = segment.start.x.min(segment.end.x);
            let hi = segment.start.x.max(segment.end.x);
            Point::new(point.x.clamp(lo, hi), segment.start.y)
        }
        Axis::Vertical => {
            let lo = segment.start.y.min(segment.end.y);
            let hi = segment.start.y.max(segment.end.y);
            Point::new(segment.start.x, point.y.clamp(lo, hi))
        }
    };
    if origin.almost_eq(segment.start) || origin.almost_eq(segment.end) {
        return Err(EditError::BreakAtEndpoint);
    }
    Ok(origin)
}

/// Replace segment `segment_index` with a four-segment jog starting at
/// `origin` (a point on the segment, usually its midpoint).
///
/// Only one jog may be pending on a connection at a time; the pending state
/// clears when the jog is removed or the edit session ends.
pub fn insert_break(
    connection: &mut Connection,
    segment_index: usize,
    origin: Point,
) -> Result<(), EditError> {
    if connection.has_pending_break() {
        return Err(EditError::BreakPending);
    }
    let segment = *connection
        .segments
        .get(segment_index)
        .ok_or(EditError::SegmentOutOfRange {
            index: segment_index,
        })?;

    let axis = segment.axis;
    let (p0, p1) = (segment.start, segment.end);
    let break_point = match axis {
        Axis::Horizontal => Point::new(origin.x, origin.y + BREAK_OFFSET),
        Axis::Vertical => Point::new(origin.x + BREAK_OFFSET, origin.y),
    };
    // Rejoin the original line at p1: the return point carries the break
    // point's cross-axis coordinate and p1's own-axis coordinate.
    let return_point = match axis {
        Axis::Horizontal => Point::new(p1.x, break_point.y),
        Axis::Vertical => Point::new(break_point.x, p1.y),
    };

    let mut jog = [
        Segment::new(axis, p0, origin),
        Segment::new(axis.perp(), origin, break_point),
        Segment::new(axis, break_point, return_point),
        Segment::new(axis.perp(), return_point, p1),
    ];
    for segment in &mut jog {
        segment.is_break = true;
    }

    let mut candidate = connection.segments.clone();
    candidate.splice(segment_index..=segment_index, jog);
    validate_segments(&candidate)?;

    debug!(
        "connection {:?}: jog inserted at segment {} ({} -> {} segments)",
        connection.id,
        segment_index,
        connection.segments.len(),
        candidate.len()
    );
    connection.segments = candidate;
    connection.user_modified = true;
    connection.touch();
    Ok(())
}

/// Remove the jog segment at `handle_index`, deleting its two endpoints
/// from the point sequence and repairing the seam that leaves behind.
///
/// `to_pos` is the live position of the connection's `to` anchor: the seam
/// repair snaps points toward the head of the path, so a removal near the
/// tail can pull the final point off its anchor and must be compensated by
/// re-synchronizing that terminal.
pub fn remove_break(
    connection: &mut Connection,
    handle_index: usize,
    to_pos: Point,
) -> Result<(), EditError> {
    let last = connection.segments.len() - 1;
    if handle_index == 0 || handle_index == last {
        return Err(EditError::TerminalSegment {
            index: handle_index,
        });
    }

    let points = codec::to_points(&connection.segments);
    let count = points.len();
    // Type A paths have an odd point count, type B an even one
    let required = if count % 2 == 1 { 5 } else { 6 };
    if count < required {
        return Err(EditError::TooFewPoints {
            points: count,
            required,
        });
    }

    let mut reduced = points;
    reduced.drain(handle_index..handle_index + 2);
    let candidate = rebuild_orthogonal(reduced);
    validate_segments(&candidate)?;

    debug!(
        "connection {:?}: jog removed at segment {} ({} -> {} segments)",
        connection.id,
        handle_index,
        connection.segments.len(),
        candidate.len()
    );
    connection.segments = candidate;
    connection.user_modified = true;
    connection.touch();

    // Compensating step: the seam snap may have detached the tail terminal
    if let Some(tail) = connection.segments.last() {
        if !tail.end.almost_eq(to_pos) {
            sync::anchor_moved(connection, TerminalEnd::To, to_pos);
        }
    }
    Ok(())
}

/// Rebuild a segment list from a reduced point sequence, forcing
/// orthogonality at the seam the removal left.
///
/// A pair that is neither vertical nor horizontal takes the direction that
/// differs from the preceding segment (alternation heuristic) and snaps the
/// later point's off-axis coordinate to the earlier point's value. Exact
/// duplicate points produced by the snap are collapsed before the segments
/// are rebuilt.
fn rebuild_orthogonal(mut points: Vec<Point>) -> Vec<Segment> {
    let mut previous_axis: Option<Axis> = None;
    for i in 0..points.len().saturating_sub(1) {
        let a = points[i];
        let b = points[i + 1];
        let axis = if coords_eq(a.x, b.x) {
            Axis::Vertical
        } else if coords_eq(a.y, b.y) {
            Axis::Horizontal
        } else {
            let axis = seam_axis(previous_axis, &points, i);
            match axis {
                Axis::Vertical => points[i + 1].x = a.x,
                Axis::Horizontal => points[i + 1].y = a.y,
            }
            axis
        };
        previous_axis = Some(axis);
    }

    points.dedup_by(|a, b| a.almost_eq(*b));
    codec::to_segments(&points)
}

/// Direction for a diagonal seam pair: differ from the preceding segment
/// when there is one, otherwise differ from the following pair's natural
/// direction, otherwise follow the dominant delta.
fn seam_axis(previous: Option<Axis>, points: &[Point], i: usize) -> Axis {
    if let Some(axis) = previous {
        return axis.perp();
    }
    if let (Some(b), Some(c)) = (points.get(i + 1), points.get(i + 2)) {
        if coords_eq(b.x, c.x) {
            return Axis::Horizontal;
        }
        if coords_eq(b.y, c.y) {
            return Axis::Vertical;
        }
    }
    let a = points[i];
    let b = points[i + 1];
    if (b.x - a.x).abs() >= (b.y - a.y).abs() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}
