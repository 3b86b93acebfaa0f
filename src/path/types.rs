//! Core path types: segments and connections

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Point};

/// Identifier of a host shape owned by the diagram aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u32);

/// Identifier of an anchor on a host shape's boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorId(pub u32);

/// Identifier of a connection between two anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub u32);

/// One axis-aligned stretch of a connection's path.
///
/// Ordering within [`Connection::segments`] is significant: consecutive
/// segments share a point, and the first/last segments touch the anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub axis: Axis,
    pub start: Point,
    pub end: Point,
    /// Marks a segment that belongs to a jog still pending in the current
    /// edit session. At most one jog may be pending per connection.
    pub is_break: bool,
}

impl Segment {
    pub fn new(axis: Axis, start: Point, end: Point) -> Self {
        Self {
            axis,
            start,
            end,
            is_break: false,
        }
    }

    pub fn horizontal(start: Point, end: Point) -> Self {
        Self::new(Axis::Horizontal, start, end)
    }

    pub fn vertical(start: Point, end: Point) -> Self {
        Self::new(Axis::Vertical, start, end)
    }

    /// Midpoint of the segment, where its edit handle sits
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Length along the segment's own axis
    pub fn length(&self) -> f64 {
        match self.axis {
            Axis::Horizontal => (self.end.x - self.start.x).abs(),
            Axis::Vertical => (self.end.y - self.start.y).abs(),
        }
    }
}

/// A routed path between two anchors
#[derive(Debug, Clone)]
pub struct Connection {
    pub id: ConnectionId,
    pub from_anchor: AnchorId,
    pub to_anchor: AnchorId,
    /// Never empty; produced by the router, mutated only by the editor and
    /// the endpoint synchronizer
    pub segments: Vec<Segment>,
    /// Set once the user reshapes the path; persisted connections keep their
    /// verbatim point sequence only when this is set
    pub user_modified: bool,
    pub last_modified: SystemTime,
}

impl Connection {
    pub fn new(
        id: ConnectionId,
        from_anchor: AnchorId,
        to_anchor: AnchorId,
        segments: Vec<Segment>,
    ) -> Self {
        debug_assert!(!segments.is_empty(), "a connection has at least one segment");
        Self {
            id,
            from_anchor,
            to_anchor,
            segments,
            user_modified: false,
            last_modified: SystemTime::now(),
        }
    }

    /// Flat point sequence for the rendering sink
    pub fn points(&self) -> Vec<Point> {
        super::codec::to_points(&self.segments)
    }

    /// True while a jog inserted in the current edit session has not been
    /// committed or removed
    pub fn has_pending_break(&self) -> bool {
        self.segments.iter().any(|s| s.is_break)
    }

    pub(crate) fn touch(&mut self) {
        self.last_modified = SystemTime::now();
    }
}
