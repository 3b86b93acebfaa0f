//! Initial routing between two anchors.
//!
//! Routing is purely a function of the two anchor positions and facings:
//! same horizontal-facing classification yields a three-segment path around
//! a center axis, mixed facings yield a two-segment L-shape. The output
//! satisfies the path invariants by construction.

use crate::geometry::{Point, Side};

use super::types::Segment;

/// Shape of the initial route between two anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteCase {
    /// L-shape: the anchors face perpendicular axes
    TwoSegments,
    /// Center-axis path: both anchors face the same axis
    ThreeSegments,
}

/// Classify the route by the anchors' facing axes
pub fn classify(side1: Side, side2: Side) -> RouteCase {
    if side1.is_horizontal_facing() == side2.is_horizontal_facing() {
        RouteCase::ThreeSegments
    } else {
        RouteCase::TwoSegments
    }
}

/// Compute the initial segment list between two anchor positions
pub fn route(pos1: Point, side1: Side, pos2: Point, side2: Side) -> Vec<Segment> {
    match classify(side1, side2) {
        RouteCase::TwoSegments => route_l_shape(pos1, side1, pos2),
        RouteCase::ThreeSegments => route_center_axis(pos1, side1, pos2),
    }
}

/// L-shape: one bend at the corner dictated by anchor1's facing
fn route_l_shape(pos1: Point, side1: Side, pos2: Point) -> Vec<Segment> {
    if side1.is_horizontal_facing() {
        let corner = Point::new(pos2.x, pos1.y);
        vec![
            Segment::horizontal(pos1, corner),
            Segment::vertical(corner, pos2),
        ]
    } else {
        let corner = Point::new(pos1.x, pos2.y);
        vec![
            Segment::vertical(pos1, corner),
            Segment::horizontal(corner, pos2),
        ]
    }
}

/// Center-axis path: out along the facing axis to the midline between the
/// anchors, across, then in to the target
fn route_center_axis(pos1: Point, side1: Side, pos2: Point) -> Vec<Segment> {
    if side1.is_horizontal_facing() {
        let cx = (pos1.x + pos2.x) / 2.0;
        let bend1 = Point::new(cx, pos1.y);
        let bend2 = Point::new(cx, pos2.y);
        vec![
            Segment::horizontal(pos1, bend1),
            Segment::vertical(bend1, bend2),
            Segment::horizontal(bend2, pos2),
        ]
    } else {
        let cy = (pos1.y + pos2.y) / 2.0;
        let bend1 = Point::new(pos1.x, cy);
        let bend2 = Point::new(pos2.x, cy);
        vec![
            Segment::vertical(pos1, bend1),
            Segment::horizontal(bend1, bend2),
            Segment::vertical(bend2, pos2),
        ]
    }
}
