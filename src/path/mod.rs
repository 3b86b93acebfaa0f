//! Path representation and the algorithms that work on it: routing,
//! segment/point conversion, invariant validation and hit testing.

pub mod codec;
pub mod error;
pub mod hit;
pub mod router;
pub mod types;
pub mod validate;

pub use error::{GeometryError, TerminalEnd};
pub use hit::{find_nearest_segment, HIT_RADIUS};
pub use router::{classify, route, RouteCase};
pub use types::{AnchorId, Connection, ConnectionId, Segment, ShapeId};
pub use validate::{validate_connection, validate_segments};
