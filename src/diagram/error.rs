//! Error types for the diagram aggregate

use thiserror::Error;

use crate::path::{AnchorId, ConnectionId, ShapeId};

/// Errors from diagram-level operations: joining anchors, moving shapes,
/// resolving references
#[derive(Debug, Clone, Error)]
pub enum DiagramError {
    #[error("unknown shape {0:?}")]
    UnknownShape(ShapeId),

    #[error("unknown anchor {0:?}")]
    UnknownAnchor(AnchorId),

    #[error("unknown connection {0:?}")]
    UnknownConnection(ConnectionId),

    #[error("anchor {0:?} is already connected")]
    AnchorOccupied(AnchorId),

    #[error("cannot connect anchor {0:?} to itself")]
    SelfConnection(AnchorId),
}
