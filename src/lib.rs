//! Orthowire - orthogonal connection routing and interactive path editing
//!
//! This library connects anchors on the boundaries of diagram shapes with
//! rectilinear (Manhattan) paths and keeps those paths editable: interior
//! bends can be dragged, perpendicular detours (jogs) inserted and removed,
//! and the path stays glued to its anchors as shapes move. Rendering and
//! input plumbing are external; the engine only consumes anchor positions
//! and produces flat point sequences for a rendering sink to redraw.
//!
//! # Example
//!
//! ```rust
//! use orthowire::{Diagram, Rect, Side};
//!
//! let mut diagram = Diagram::new();
//! let a = diagram.add_shape(Rect::new(0.0, 0.0, 80.0, 40.0));
//! let b = diagram.add_shape(Rect::new(200.0, 100.0, 80.0, 40.0));
//! let from = diagram.add_anchor(a, Side::Right, 0.5).unwrap();
//! let to = diagram.add_anchor(b, Side::Left, 0.5).unwrap();
//!
//! let id = diagram.connect(from, to).unwrap();
//! let points = diagram.connection(id).unwrap().points();
//! assert_eq!(points.len(), 4); // three segments around the center axis
//! assert_eq!(points[0].x, 80.0);
//! ```

pub mod diagram;
pub mod edit;
pub mod geometry;
pub mod path;

pub use diagram::persist::{self, DiagramDoc, PersistError};
pub use diagram::{
    project_onto_side, side_offset_to_point, Anchor, AnchorPositions, Diagram, DiagramError,
    Shape,
};
pub use edit::{EditError, Editor, Handle, BREAK_OFFSET};
pub use geometry::{Axis, Point, Rect, Side};
pub use path::{
    classify, find_nearest_segment, route, validate_connection, validate_segments, AnchorId,
    Connection, ConnectionId, GeometryError, RouteCase, Segment, ShapeId, TerminalEnd,
    HIT_RADIUS,
};
