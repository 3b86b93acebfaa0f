//! Endpoint synchronizer: keeps a path glued to its anchors as they move.
//!
//! Only the terminal segment attached to the moved anchor and its single
//! neighbor are touched; interior segments never move. The anchor's new
//! coordinate becomes the terminal segment's own endpoint, and the terminal
//! segment's other endpoint keeps its own-axis coordinate while its
//! cross-axis coordinate snaps to the anchor, which restores orthogonality
//! without reshaping the rest of the path.

use crate::geometry::{Axis, Point};
use crate::path::{Connection, TerminalEnd};

/// The anchor itself was dragged along its host's boundary.
pub fn anchor_moved(connection: &mut Connection, end: TerminalEnd, new_pos: Point) {
    sync_terminal(connection, end, new_pos);
}

/// The host shape moved or resized, carrying the anchor with it.
///
/// Currently applies the same terminal repair as [`anchor_moved`]; a policy
/// that translates the whole path on host moves would replace only this
/// function.
pub fn host_moved(connection: &mut Connection, end: TerminalEnd, new_pos: Point) {
    sync_terminal(connection, end, new_pos);
}

fn sync_terminal(connection: &mut Connection, end: TerminalEnd, new_pos: Point) {
    let last = connection.segments.len() - 1;
    match end {
        TerminalEnd::From => {
            let terminal = &mut connection.segments[0];
            terminal.start = new_pos;
            match terminal.axis {
                Axis::Horizontal => terminal.end.y = new_pos.y,
                Axis::Vertical => terminal.end.x = new_pos.x,
            }
            let shared = terminal.end;
            if last >= 1 {
                connection.segments[1].start = shared;
            }
        }
        TerminalEnd::To => {
            let terminal = &mut connection.segments[last];
            terminal.end = new_pos;
            match terminal.axis {
                Axis::Horizontal => terminal.start.y = new_pos.y,
                Axis::Vertical => terminal.start.x = new_pos.x,
            }
            let shared = terminal.start;
            if last >= 1 {
                connection.segments[last - 1].end = shared;
            }
        }
    }
    connection.touch();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::types::{AnchorId, ConnectionId, Segment};
    use crate::path::validate_segments;

    fn three_segment_connection() -> Connection {
        // H(0,0 -> 50,0), V(50,0 -> 50,50), H(50,50 -> 100,50)
        Connection::new(
            ConnectionId(1),
            AnchorId(1),
            AnchorId(2),
            vec![
                Segment::horizontal(Point::new(0.0, 0.0), Point::new(50.0, 0.0)),
                Segment::vertical(Point::new(50.0, 0.0), Point::new(50.0, 50.0)),
                Segment::horizontal(Point::new(50.0, 50.0), Point::new(100.0, 50.0)),
            ],
        )
    }

    #[test]
    fn test_from_anchor_moved_along_axis() {
        // Scenario: anchor A moves from (0,0) to (10,0)
        let mut conn = three_segment_connection();
        anchor_moved(&mut conn, TerminalEnd::From, Point::new(10.0, 0.0));
        assert_eq!(conn.segments[0].start, Point::new(10.0, 0.0));
        assert_eq!(conn.segments[0].end, Point::new(50.0, 0.0));
        // Interior and far segments untouched
        assert_eq!(conn.segments[1].start, Point::new(50.0, 0.0));
        assert_eq!(conn.segments[2].end, Point::new(100.0, 50.0));
        assert!(validate_segments(&conn.segments).is_ok());
    }

    #[test]
    fn test_from_anchor_moved_across_axis() {
        let mut conn = three_segment_connection();
        anchor_moved(&mut conn, TerminalEnd::From, Point::new(0.0, 20.0));
        // Terminal keeps its own-axis extent, inner endpoint snaps to y=20
        assert_eq!(conn.segments[0].start, Point::new(0.0, 20.0));
        assert_eq!(conn.segments[0].end, Point::new(50.0, 20.0));
        assert_eq!(conn.segments[1].start, Point::new(50.0, 20.0));
        assert_eq!(conn.segments[1].end, Point::new(50.0, 50.0));
        assert!(validate_segments(&conn.segments).is_ok());
    }

    #[test]
    fn test_to_anchor_moved() {
        let mut conn = three_segment_connection();
        host_moved(&mut conn, TerminalEnd::To, Point::new(100.0, 70.0));
        assert_eq!(conn.segments[2].end, Point::new(100.0, 70.0));
        assert_eq!(conn.segments[2].start, Point::new(50.0, 70.0));
        assert_eq!(conn.segments[1].end, Point::new(50.0, 70.0));
        // The from side never moves
        assert_eq!(conn.segments[0].start, Point::new(0.0, 0.0));
        assert!(validate_segments(&conn.segments).is_ok());
    }

    #[test]
    fn test_sync_does_not_mark_user_modified() {
        let mut conn = three_segment_connection();
        anchor_moved(&mut conn, TerminalEnd::From, Point::new(10.0, 0.0));
        assert!(!conn.user_modified);
    }
}
