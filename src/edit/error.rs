//! Error types for interactive edits.
//!
//! Every variant is local and recoverable: a rejected edit leaves the
//! previous valid path untouched, and the surrounding UI decides how to
//! surface it.

use thiserror::Error;

use crate::path::{AnchorId, ConnectionId, GeometryError};

/// Reasons an edit attempt is rejected or fails
#[derive(Debug, Error)]
pub enum EditError {
    #[error("connection {0:?} is not in edit mode")]
    NoSession(ConnectionId),

    #[error("handle {index} does not exist")]
    UnknownHandle { index: usize },

    #[error("segment {index} does not exist")]
    SegmentOutOfRange { index: usize },

    #[error("segment {index} is terminal and cannot be edited")]
    TerminalSegment { index: usize },

    #[error("a drag is already in progress on this connection")]
    DragInProgress,

    #[error("no drag is in progress on this connection")]
    NoActiveDrag,

    #[error("connection already has a pending break")]
    BreakPending,

    #[error("break point coincides with a segment endpoint")]
    BreakAtEndpoint,

    #[error("no segment within hit radius of the requested point")]
    NothingNearby,

    #[error("path has {points} points, removal needs at least {required}")]
    TooFewPoints { points: usize, required: usize },

    #[error("anchor {0:?} has no resolvable position")]
    AnchorUnresolved(AnchorId),

    /// The repaired geometry failed validation; the mutation was discarded
    #[error("repaired path failed validation: {0}")]
    Geometry(#[from] GeometryError),
}
