//! Integration tests for the interactive editing layer

use pretty_assertions::assert_eq;

use orthowire::{
    validate_connection, AnchorId, ConnectionId, Diagram, EditError, Editor, Point, Rect, Side,
};

/// Scenario 1 fixture: two shapes whose facing anchors sit at (0,0) and
/// (100,50), giving the canonical three-segment route H-V-H.
fn scenario() -> (Diagram, ConnectionId, AnchorId, AnchorId) {
    let mut diagram = Diagram::new();
    let a = diagram.add_shape(Rect::new(-60.0, -30.0, 60.0, 60.0));
    let b = diagram.add_shape(Rect::new(100.0, 20.0, 60.0, 60.0));
    let from = diagram.add_anchor(a, Side::Right, 0.5).unwrap();
    let to = diagram.add_anchor(b, Side::Left, 0.5).unwrap();
    let id = diagram.connect(from, to).unwrap();
    assert_eq!(
        diagram.connection(id).unwrap().points(),
        vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(50.0, 50.0),
            Point::new(100.0, 50.0),
        ]
    );
    (diagram, id, from, to)
}

#[test]
fn break_insert_expands_three_segments_to_six() {
    // Scenario 3: break at the midpoint (50,25) of the interior segment
    let (mut diagram, id, from, to) = scenario();
    let mut editor = Editor::new();

    let connection = diagram.connection_mut(id).unwrap();
    editor.begin_edit(connection);
    editor
        .insert_break_at_point(connection, Point::new(50.0, 25.0))
        .unwrap();

    assert_eq!(connection.segments.len(), 6);
    let connection = diagram.connection(id).unwrap();
    let from_pos = diagram.anchor_position(from).unwrap();
    let to_pos = diagram.anchor_position(to).unwrap();
    assert!(validate_connection(connection, from_pos, to_pos).is_ok());
}

#[test]
fn break_insert_then_remove_is_idempotent() {
    let (mut diagram, id, _, _) = scenario();
    let mut editor = Editor::new();
    let original = diagram.connection(id).unwrap().points();

    // remove_break resolves the live to-anchor through the diagram, so work
    // on a detached copy of the jogged connection
    let mut connection = {
        let connection = diagram.connection_mut(id).unwrap();
        editor.begin_edit(connection);
        editor.insert_break_at_handle(connection, 1).unwrap();
        connection.clone()
    };
    assert_eq!(connection.segments.len(), 6);
    editor.remove_break(&mut connection, 2, &diagram).unwrap();

    assert_eq!(connection.points(), original);
    assert_eq!(connection.segments.len(), 3);
}

#[test]
fn only_one_jog_may_be_pending() {
    let (mut diagram, id, _, _) = scenario();
    let mut editor = Editor::new();
    let connection = diagram.connection_mut(id).unwrap();
    editor.begin_edit(connection);
    editor.insert_break_at_handle(connection, 1).unwrap();
    let before = connection.points();

    let err = editor.insert_break_at_point(connection, Point::new(25.0, 0.0));
    assert!(matches!(err, Err(EditError::BreakPending)));
    assert_eq!(connection.points(), before);

    // Leaving edit mode commits the jog; a new session may add another
    editor.end_edit(connection);
    editor.begin_edit(&*connection);
    editor
        .insert_break_at_point(connection, Point::new(25.0, 0.0))
        .unwrap();
    assert_eq!(connection.segments.len(), 9);
}

#[test]
fn handle_drag_touches_only_the_dragged_segment_and_its_neighbors() {
    let (mut diagram, id, from, to) = scenario();
    let mut editor = Editor::new();
    let connection = diagram.connection_mut(id).unwrap();
    editor.begin_edit(connection);

    editor.begin_drag(connection, 1).unwrap();
    editor.drag_to(connection, Point::new(65.0, 27.0)).unwrap();
    editor.end_drag(connection).unwrap();

    // The interior segment moved to x=65; terminals changed only at the
    // shared points, and the anchor ends stayed put
    assert_eq!(
        connection.points(),
        vec![
            Point::new(0.0, 0.0),
            Point::new(65.0, 0.0),
            Point::new(65.0, 50.0),
            Point::new(100.0, 50.0),
        ]
    );
    let connection = diagram.connection(id).unwrap();
    let from_pos = diagram.anchor_position(from).unwrap();
    let to_pos = diagram.anchor_position(to).unwrap();
    assert!(validate_connection(connection, from_pos, to_pos).is_ok());
}

#[test]
fn removal_is_rejected_at_terminals_and_below_minimum() {
    let (mut diagram, id, _, _) = scenario();
    let mut editor = Editor::new();

    let mut connection = diagram.connection(id).unwrap().clone();
    editor.begin_edit(&connection);

    // 4 points: below the 6-point minimum for even counts
    let err = editor.remove_break(&mut connection, 1, &diagram);
    assert!(matches!(
        err,
        Err(EditError::TooFewPoints {
            points: 4,
            required: 6
        })
    ));

    editor.insert_break_at_handle(&mut connection, 1).unwrap();
    let before = connection.points();
    assert!(matches!(
        editor.remove_break(&mut connection, 0, &diagram),
        Err(EditError::TerminalSegment { index: 0 })
    ));
    let last = connection.segments.len() - 1;
    assert!(matches!(
        editor.remove_break(&mut connection, last, &diagram),
        Err(EditError::TerminalSegment { .. })
    ));
    assert_eq!(connection.points(), before);
}

#[test]
fn removal_repairs_the_seam_and_keeps_anchors_attached() {
    // Removing a jog leaves a diagonal seam; the rebuild snaps it back to
    // orthogonal and the tail stays on the to anchor
    let mut diagram = Diagram::new();
    let a = diagram.add_shape(Rect::new(-60.0, -40.0, 60.0, 80.0));
    let b = diagram.add_shape(Rect::new(50.0, 80.0, 60.0, 80.0));
    let from = diagram.add_anchor(a, Side::Right, 0.5).unwrap();
    let to = diagram.add_anchor(b, Side::Top, 0.5).unwrap();
    let id = diagram.connect(from, to).unwrap();
    // Mixed facing: two segments, 3 points. Drag the path into a five-point
    // shape by inserting a jog and committing it.
    let mut editor = Editor::new();
    let connection = diagram.connection_mut(id).unwrap();
    editor.begin_edit(connection);
    editor.insert_break_at_handle(connection, 1).unwrap();
    editor.end_edit(connection);
    assert_eq!(connection.points().len(), 6);

    editor.begin_edit(&*connection);
    editor.remove_break(connection, 2, &FixedPositions(Point::new(80.0, 80.0))).unwrap();

    let to_pos = Point::new(80.0, 80.0);
    assert_eq!(connection.points().last().copied(), Some(to_pos));
    assert_eq!(connection.points().first().copied(), Some(Point::new(0.0, 0.0)));
}

struct FixedPositions(Point);

impl orthowire::AnchorPositions for FixedPositions {
    fn position_of(&self, _anchor: AnchorId) -> Option<Point> {
        Some(self.0)
    }
}
