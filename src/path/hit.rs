//! Nearest-segment lookup for edit targeting.

use crate::geometry::{Axis, Point};

use super::types::Segment;

/// Pointer distance beyond which a hit test finds nothing
pub const HIT_RADIUS: f64 = 30.0;

/// Distance from a point to a segment.
///
/// While the point's own-axis coordinate lies within the segment's span the
/// distance is the plain cross-axis difference; past either end it is the
/// Euclidean distance to the nearer endpoint.
pub fn distance_to_segment(segment: &Segment, point: Point) -> f64 {
    let (span_min, span_max, along, cross_delta) = match segment.axis {
        Axis::Horizontal => (
            segment.start.x.min(segment.end.x),
            segment.start.x.max(segment.end.x),
            point.x,
            (point.y - segment.start.y).abs(),
        ),
        Axis::Vertical => (
            segment.start.y.min(segment.end.y),
            segment.start.y.max(segment.end.y),
            point.y,
            (point.x - segment.start.x).abs(),
        ),
    };

    if along >= span_min && along <= span_max {
        cross_delta
    } else {
        point
            .distance_to(segment.start)
            .min(point.distance_to(segment.end))
    }
}

/// Find the segment nearest to a point, or `None` if the minimum distance is
/// at or beyond `radius`.
pub fn find_nearest_segment(segments: &[Segment], point: Point, radius: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, segment) in segments.iter().enumerate() {
        let distance = distance_to_segment(segment, point);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    match best {
        Some((index, distance)) if distance < radius => Some(index),
        _ => None,
    }
}
