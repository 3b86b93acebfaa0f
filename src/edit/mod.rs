//! Interactive mutation layer: edit sessions, handles, dominant-axis
//! handle drags, and jog insertion/removal entry points.
//!
//! A connection is either in `VIEW` (no session) or `EDIT` (session with
//! one handle per segment). Handles are ephemeral view state: they are
//! regenerated from the live segments after every mutation and identify
//! segments by index, never by reference.

pub mod breaks;
pub mod error;
pub mod sync;

use std::collections::HashMap;

use log::debug;

use crate::diagram::anchor::AnchorPositions;
use crate::geometry::{Axis, Point};
use crate::path::{find_nearest_segment, Connection, ConnectionId, HIT_RADIUS};

pub use breaks::BREAK_OFFSET;
pub use error::EditError;

/// Ephemeral grab point for one segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub segment_index: usize,
    pub midpoint: Point,
    /// Terminal handles (first and last segment) touch the anchors and are
    /// not draggable
    pub is_terminal: bool,
}

/// Per-connection edit state
#[derive(Debug, Default)]
struct EditSession {
    handles: Vec<Handle>,
    /// Index of the segment being dragged; doubles as the re-entrancy guard
    /// against nested drag starts from duplicate input events
    drag: Option<usize>,
}

/// The interactive editor. Owns the edit sessions; connections themselves
/// stay pure domain state.
#[derive(Debug, Default)]
pub struct Editor {
    sessions: HashMap<ConnectionId, EditSession>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `EDIT` mode for a connection, generating one handle per
    /// segment. Re-entering refreshes the handles.
    pub fn begin_edit(&mut self, connection: &Connection) -> &[Handle] {
        let session = self.sessions.entry(connection.id).or_default();
        session.handles = handles_for(connection);
        session.drag = None;
        &session.handles
    }

    /// Leave `EDIT` mode, committing any pending jog: `is_break` markers
    /// are cleared so a later session may insert a new jog.
    pub fn end_edit(&mut self, connection: &mut Connection) {
        if self.sessions.remove(&connection.id).is_some() && connection.has_pending_break() {
            for segment in &mut connection.segments {
                segment.is_break = false;
            }
            debug!("connection {:?}: pending jog committed", connection.id);
        }
    }

    pub fn is_editing(&self, id: ConnectionId) -> bool {
        self.sessions.contains_key(&id)
    }

    /// Current handles, if the connection is in edit mode
    pub fn handles(&self, id: ConnectionId) -> Option<&[Handle]> {
        self.sessions.get(&id).map(|s| s.handles.as_slice())
    }

    /// Start dragging an interior handle. Rejects terminal handles and a
    /// second drag start while one is active.
    pub fn begin_drag(
        &mut self,
        connection: &Connection,
        handle_index: usize,
    ) -> Result<(), EditError> {
        let session = self.session_mut(connection.id)?;
        let handle = *session
            .handles
            .get(handle_index)
            .ok_or(EditError::UnknownHandle {
                index: handle_index,
            })?;
        if handle.is_terminal {
            return Err(EditError::TerminalSegment {
                index: handle.segment_index,
            });
        }
        if session.drag.is_some() {
            return Err(EditError::DragInProgress);
        }
        session.drag = Some(handle.segment_index);
        Ok(())
    }

    /// Move the dragged segment perpendicular to its own direction.
    ///
    /// The pointer delta is measured from the segment's current midpoint;
    /// only the dominant-axis component is applied, and only when that axis
    /// is perpendicular to the segment. Each move commits directly; there is
    /// no cancel.
    pub fn drag_to(
        &mut self,
        connection: &mut Connection,
        pointer: Point,
    ) -> Result<(), EditError> {
        let session = self.session_mut(connection.id)?;
        let index = session.drag.ok_or(EditError::NoActiveDrag)?;

        let segment = connection.segments[index];
        let mid = segment.midpoint();
        let dx = pointer.x - mid.x;
        let dy = pointer.y - mid.y;
        match segment.axis {
            Axis::Vertical if dx.abs() > dy.abs() => {
                let seg = &mut connection.segments[index];
                seg.start.x += dx;
                seg.end.x += dx;
            }
            Axis::Horizontal if dy.abs() > dx.abs() => {
                let seg = &mut connection.segments[index];
                seg.start.y += dy;
                seg.end.y += dy;
            }
            // Dominant motion along the segment's own axis is ignored
            _ => return Ok(()),
        }
        connection.segments[index - 1].end = connection.segments[index].start;
        connection.segments[index + 1].start = connection.segments[index].end;
        connection.user_modified = true;
        connection.touch();
        self.refresh(connection);
        Ok(())
    }

    /// Finish the active drag
    pub fn end_drag(&mut self, connection: &Connection) -> Result<(), EditError> {
        let session = self.session_mut(connection.id)?;
        if session.drag.take().is_none() {
            return Err(EditError::NoActiveDrag);
        }
        Ok(())
    }

    /// Insert a jog at an explicit point: the nearest segment within the
    /// hit radius is targeted and the point is projected onto it.
    ///
    /// Rejected while a drag is active: the drag holds a segment index that
    /// a splice would invalidate.
    pub fn insert_break_at_point(
        &mut self,
        connection: &mut Connection,
        point: Point,
    ) -> Result<(), EditError> {
        self.session_idle(connection.id)?;
        let index = find_nearest_segment(&connection.segments, point, HIT_RADIUS)
            .ok_or(EditError::NothingNearby)?;
        let origin = breaks::jog_origin(&connection.segments[index], point)?;
        breaks::insert_break(connection, index, origin)?;
        self.refresh(connection);
        Ok(())
    }

    /// Insert a jog at a handle, using the segment's own midpoint as the
    /// jog origin.
    pub fn insert_break_at_handle(
        &mut self,
        connection: &mut Connection,
        handle_index: usize,
    ) -> Result<(), EditError> {
        let session = self.session_idle(connection.id)?;
        let handle = *session
            .handles
            .get(handle_index)
            .ok_or(EditError::UnknownHandle {
                index: handle_index,
            })?;
        breaks::insert_break(connection, handle.segment_index, handle.midpoint)?;
        self.refresh(connection);
        Ok(())
    }

    /// Remove the jog at an interior handle. `positions` resolves the `to`
    /// anchor for the compensating terminal re-sync.
    pub fn remove_break(
        &mut self,
        connection: &mut Connection,
        handle_index: usize,
        positions: &impl AnchorPositions,
    ) -> Result<(), EditError> {
        self.session_idle(connection.id)?;
        let to_pos = positions
            .position_of(connection.to_anchor)
            .ok_or(EditError::AnchorUnresolved(connection.to_anchor))?;
        breaks::remove_break(connection, handle_index, to_pos)?;
        self.refresh(connection);
        Ok(())
    }

    fn session_mut(&mut self, id: ConnectionId) -> Result<&mut EditSession, EditError> {
        self.sessions.get_mut(&id).ok_or(EditError::NoSession(id))
    }

    /// Like [`session_mut`](Self::session_mut), but additionally rejects
    /// while a drag is active. Jog splices renumber the segments, which
    /// would leave the drag pointing at the wrong one.
    fn session_idle(&mut self, id: ConnectionId) -> Result<&mut EditSession, EditError> {
        let session = self.session_mut(id)?;
        if session.drag.is_some() {
            return Err(EditError::DragInProgress);
        }
        Ok(session)
    }

    fn refresh(&mut self, connection: &Connection) {
        if let Some(session) = self.sessions.get_mut(&connection.id) {
            session.handles = handles_for(connection);
        }
    }
}

fn handles_for(connection: &Connection) -> Vec<Handle> {
    let last = connection.segments.len() - 1;
    connection
        .segments
        .iter()
        .enumerate()
        .map(|(index, segment)| Handle {
            segment_index: index,
            midpoint: segment.midpoint(),
            is_terminal: index == 0 || index == last,
        })
        .collect()
}
