//! Anchors: directional attachment points on a host shape's boundary.
//!
//! An anchor's position is never stored; it is derived from the host's
//! bounds, the side it sits on and its normalized offset along that side.
//! Offsets run left-to-right on the top and bottom sides and top-to-bottom
//! on the left and right sides.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Side};
use crate::path::{AnchorId, ShapeId};

/// An attachment point on a host shape's boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub host: ShapeId,
    pub side: Side,
    /// Normalized position along the side, in `[0, 1]`
    pub offset: f64,
    /// The peer anchor while connected; a free anchor carries `None`
    pub connected_to: Option<AnchorId>,
}

impl Anchor {
    pub fn new(host: ShapeId, side: Side, offset: f64) -> Self {
        Self {
            host,
            side,
            offset: offset.clamp(0.0, 1.0),
            connected_to: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.connected_to.is_none()
    }

    /// Derive the anchor's position from its host's bounds
    pub fn position(&self, bounds: &Rect) -> Point {
        side_offset_to_point(bounds, self.side, self.offset)
    }
}

/// Map a side and normalized offset to a boundary point
pub fn side_offset_to_point(bounds: &Rect, side: Side, offset: f64) -> Point {
    let offset = offset.clamp(0.0, 1.0);
    match side {
        Side::Top => Point::new(bounds.x + offset * bounds.width, bounds.y),
        Side::Bottom => Point::new(bounds.x + offset * bounds.width, bounds.bottom()),
        Side::Left => Point::new(bounds.x, bounds.y + offset * bounds.height),
        Side::Right => Point::new(bounds.right(), bounds.y + offset * bounds.height),
    }
}

/// Project an arbitrary point onto a side of the bounds, clamped to the
/// side's span. Returns the boundary point and the normalized offset,
/// used while the user slides an anchor along its host's boundary.
pub fn project_onto_side(bounds: &Rect, side: Side, point: Point) -> (Point, f64) {
    let offset = match side {
        Side::Top | Side::Bottom => {
            if bounds.width <= 0.0 {
                0.5
            } else {
                ((point.x - bounds.x) / bounds.width).clamp(0.0, 1.0)
            }
        }
        Side::Left | Side::Right => {
            if bounds.height <= 0.0 {
                0.5
            } else {
                ((point.y - bounds.y) / bounds.height).clamp(0.0, 1.0)
            }
        }
    };
    (side_offset_to_point(bounds, side, offset), offset)
}

/// Capability interface for resolving anchor positions, so the editor and
/// validator stay independent of how anchors and hosts are stored.
pub trait AnchorPositions {
    fn position_of(&self, anchor: AnchorId) -> Option<Point>;
}
