//! The diagram aggregate: one explicit owner for shapes, anchors and
//! connections, with the connect/disconnect lifecycle and the propagation
//! of shape and anchor movement into attached paths.

pub mod anchor;
pub mod error;
pub mod persist;

use std::collections::HashMap;

use log::debug;

use crate::edit::sync;
use crate::geometry::{Point, Rect, Side};
use crate::path::{route, AnchorId, Connection, ConnectionId, ShapeId, TerminalEnd};

pub use anchor::{project_onto_side, side_offset_to_point, Anchor, AnchorPositions};
pub use error::DiagramError;

/// A host shape, reduced to the boundary its anchors attach to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub bounds: Rect,
}

/// Owner of all diagram elements. Created when a document opens, dropped
/// when it closes; nothing in the engine holds element collections outside
/// of it.
#[derive(Debug, Default)]
pub struct Diagram {
    shapes: HashMap<ShapeId, Shape>,
    anchors: HashMap<AnchorId, Anchor>,
    connections: HashMap<ConnectionId, Connection>,
    next_shape: u32,
    next_anchor: u32,
    next_connection: u32,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, bounds: Rect) -> ShapeId {
        let id = ShapeId(self.next_shape);
        self.next_shape += 1;
        self.shapes.insert(id, Shape { id, bounds });
        id
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    pub fn add_anchor(
        &mut self,
        host: ShapeId,
        side: Side,
        offset: f64,
    ) -> Result<AnchorId, DiagramError> {
        if !self.shapes.contains_key(&host) {
            return Err(DiagramError::UnknownShape(host));
        }
        let id = AnchorId(self.next_anchor);
        self.next_anchor += 1;
        self.anchors.insert(id, Anchor::new(host, side, offset));
        Ok(id)
    }

    pub fn anchor(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.get(&id)
    }

    pub fn anchors(&self) -> impl Iterator<Item = (AnchorId, &Anchor)> {
        self.anchors.iter().map(|(id, anchor)| (*id, anchor))
    }

    /// Derived position of an anchor on its host's boundary
    pub fn anchor_position(&self, id: AnchorId) -> Option<Point> {
        let anchor = self.anchors.get(&id)?;
        let shape = self.shapes.get(&anchor.host)?;
        Some(anchor.position(&shape.bounds))
    }

    /// Join two free anchors with a freshly routed connection. Both anchors
    /// flip to occupied, referencing each other.
    pub fn connect(&mut self, a: AnchorId, b: AnchorId) -> Result<ConnectionId, DiagramError> {
        if a == b {
            return Err(DiagramError::SelfConnection(a));
        }
        let anchor_a = *self.anchors.get(&a).ok_or(DiagramError::UnknownAnchor(a))?;
        let anchor_b = *self.anchors.get(&b).ok_or(DiagramError::UnknownAnchor(b))?;
        if !anchor_a.is_free() {
            return Err(DiagramError::AnchorOccupied(a));
        }
        if !anchor_b.is_free() {
            return Err(DiagramError::AnchorOccupied(b));
        }
        let pos_a = self
            .anchor_position(a)
            .ok_or(DiagramError::UnknownShape(anchor_a.host))?;
        let pos_b = self
            .anchor_position(b)
            .ok_or(DiagramError::UnknownShape(anchor_b.host))?;

        let id = ConnectionId(self.next_connection);
        self.next_connection += 1;
        let segments = route(pos_a, anchor_a.side, pos_b, anchor_b.side);
        debug!(
            "connection {:?}: routed {} segments between {:?} and {:?}",
            id,
            segments.len(),
            a,
            b
        );
        self.connections
            .insert(id, Connection::new(id, a, b, segments));
        self.anchors.get_mut(&a).unwrap().connected_to = Some(b);
        self.anchors.get_mut(&b).unwrap().connected_to = Some(a);
        Ok(id)
    }

    /// Remove a connection, reverting both anchors to free
    pub fn disconnect(&mut self, id: ConnectionId) -> Result<(), DiagramError> {
        let connection = self
            .connections
            .remove(&id)
            .ok_or(DiagramError::UnknownConnection(id))?;
        for anchor_id in [connection.from_anchor, connection.to_anchor] {
            if let Some(anchor) = self.anchors.get_mut(&anchor_id) {
                anchor.connected_to = None;
            }
        }
        Ok(())
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    pub fn connection_mut(&mut self, id: ConnectionId) -> Option<&mut Connection> {
        self.connections.get_mut(&id)
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Delete an anchor; its connection, if any, goes with it
    pub fn remove_anchor(&mut self, id: AnchorId) -> Result<(), DiagramError> {
        let anchor = *self.anchors.get(&id).ok_or(DiagramError::UnknownAnchor(id))?;
        if anchor.connected_to.is_some() {
            let doomed: Vec<ConnectionId> = self
                .connections
                .values()
                .filter(|c| c.from_anchor == id || c.to_anchor == id)
                .map(|c| c.id)
                .collect();
            for connection in doomed {
                self.disconnect(connection)?;
            }
        }
        self.anchors.remove(&id);
        Ok(())
    }

    /// Delete a shape, cascading to its anchors and their connections
    pub fn remove_shape(&mut self, id: ShapeId) -> Result<(), DiagramError> {
        if self.shapes.remove(&id).is_none() {
            return Err(DiagramError::UnknownShape(id));
        }
        let owned: Vec<AnchorId> = self
            .anchors
            .iter()
            .filter(|(_, anchor)| anchor.host == id)
            .map(|(anchor_id, _)| *anchor_id)
            .collect();
        for anchor_id in owned {
            self.remove_anchor(anchor_id)?;
        }
        Ok(())
    }

    /// Move or resize a host shape, repairing the terminal segment of every
    /// connection attached to one of its anchors.
    pub fn move_shape(&mut self, id: ShapeId, bounds: Rect) -> Result<(), DiagramError> {
        let shape = self
            .shapes
            .get_mut(&id)
            .ok_or(DiagramError::UnknownShape(id))?;
        shape.bounds = bounds;

        let moved: Vec<(AnchorId, Point)> = self
            .anchors
            .iter()
            .filter(|(_, anchor)| anchor.host == id && !anchor.is_free())
            .map(|(anchor_id, anchor)| (*anchor_id, anchor.position(&bounds)))
            .collect();
        for (anchor_id, position) in moved {
            self.sync_connection_of(anchor_id, position, false);
        }
        Ok(())
    }

    /// Slide an anchor along its host's boundary toward a pointer position,
    /// then repair its connection's terminal segment. Returns the anchor's
    /// new position.
    pub fn drag_anchor(&mut self, id: AnchorId, pointer: Point) -> Result<Point, DiagramError> {
        let anchor = *self.anchors.get(&id).ok_or(DiagramError::UnknownAnchor(id))?;
        let shape = self
            .shapes
            .get(&anchor.host)
            .ok_or(DiagramError::UnknownShape(anchor.host))?;
        let (position, offset) = project_onto_side(&shape.bounds, anchor.side, pointer);
        self.anchors.get_mut(&id).unwrap().offset = offset;
        if !anchor.is_free() {
            self.sync_connection_of(id, position, true);
        }
        Ok(position)
    }

    fn sync_connection_of(&mut self, anchor_id: AnchorId, position: Point, anchor_drag: bool) {
        for connection in self.connections.values_mut() {
            let end = if connection.from_anchor == anchor_id {
                TerminalEnd::From
            } else if connection.to_anchor == anchor_id {
                TerminalEnd::To
            } else {
                continue;
            };
            if anchor_drag {
                sync::anchor_moved(connection, end, position);
            } else {
                sync::host_moved(connection, end, position);
            }
        }
    }

    pub(crate) fn restore_shape(&mut self, id: ShapeId, bounds: Rect) {
        self.next_shape = self.next_shape.max(id.0 + 1);
        self.shapes.insert(id, Shape { id, bounds });
    }

    pub(crate) fn restore_anchor(&mut self, id: AnchorId, anchor: Anchor) {
        self.next_anchor = self.next_anchor.max(id.0 + 1);
        self.anchors.insert(id, anchor);
    }

    pub(crate) fn restore_connection(&mut self, connection: Connection) {
        self.next_connection = self.next_connection.max(connection.id.0 + 1);
        if let Some(anchor) = self.anchors.get_mut(&connection.from_anchor) {
            anchor.connected_to = Some(connection.to_anchor);
        }
        if let Some(anchor) = self.anchors.get_mut(&connection.to_anchor) {
            anchor.connected_to = Some(connection.from_anchor);
        }
        self.connections.insert(connection.id, connection);
    }
}

impl AnchorPositions for Diagram {
    fn position_of(&self, anchor: AnchorId) -> Option<Point> {
        self.anchor_position(anchor)
    }
}
