//! Conversion between the segment list and the flat point sequence.
//!
//! The point form is what the rendering sink consumes and what persisted
//! user-modified connections store; the segment form is what the router,
//! validator and editor operate on.

use crate::geometry::{coords_eq, Axis, Point};

use super::types::Segment;

/// Flatten an ordered segment list into its point sequence:
/// `[segments[0].start, segments[0].end, segments[1].end, ...]`
pub fn to_points(segments: &[Segment]) -> Vec<Point> {
    let mut points = Vec::with_capacity(segments.len() + 1);
    if let Some(first) = segments.first() {
        points.push(first.start);
    }
    for segment in segments {
        points.push(segment.end);
    }
    points
}

/// Rebuild a segment list from a point sequence.
///
/// A consecutive pair with equal `x` becomes Vertical, anything else
/// Horizontal; equal-x is checked first, so a zero-length pair classifies as
/// Vertical. The caller guarantees orthogonality; diagonals are neither
/// detected nor repaired here (the validator catches them).
pub fn to_segments(points: &[Point]) -> Vec<Segment> {
    points
        .windows(2)
        .map(|pair| {
            let axis = if coords_eq(pair[0].x, pair[1].x) {
                Axis::Vertical
            } else {
                Axis::Horizontal
            };
            Segment::new(axis, pair[0], pair[1])
        })
        .collect()
}
