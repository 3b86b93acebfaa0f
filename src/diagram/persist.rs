//! Durable diagram records and their TOML form.
//!
//! A connection's durable record is its id and anchor pair; the verbatim
//! point sequence is stored only when the user reshaped the path, so
//! authored jogs survive reload instead of being recomputed away by the
//! router. Everything else is re-derived on load.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Rect, Side};
use crate::path::{codec, validate_segments, AnchorId, Connection, ConnectionId, GeometryError, ShapeId};

use super::anchor::Anchor;
use super::error::DiagramError;
use super::Diagram;

/// Errors raised while loading or saving a diagram document
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("invalid diagram document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize diagram document: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error("connection {id:?} stores fewer than two points")]
    ShortPath { id: ConnectionId },

    #[error("stored path for connection {id:?} is invalid: {source}")]
    Geometry {
        id: ConnectionId,
        source: GeometryError,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: ShapeId,
    pub bounds: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorRecord {
    pub id: AnchorId,
    pub shape: ShapeId,
    pub side: Side,
    pub offset: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub id: ConnectionId,
    pub from: AnchorId,
    pub to: AnchorId,
    /// Present only for user-modified paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<[f64; 2]>>,
}

/// The whole document, as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagramDoc {
    #[serde(default)]
    pub shapes: Vec<ShapeRecord>,
    #[serde(default)]
    pub anchors: Vec<AnchorRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

/// Capture a diagram's durable state. Records are ordered by id so the
/// output is stable across runs.
pub fn to_document(diagram: &Diagram) -> DiagramDoc {
    let mut shapes: Vec<ShapeRecord> = diagram
        .shapes()
        .map(|shape| ShapeRecord {
            id: shape.id,
            bounds: shape.bounds,
        })
        .collect();
    shapes.sort_by_key(|record| record.id);

    let mut anchors: Vec<AnchorRecord> = diagram
        .anchors()
        .map(|(id, anchor)| AnchorRecord {
            id,
            shape: anchor.host,
            side: anchor.side,
            offset: anchor.offset,
        })
        .collect();
    anchors.sort_by_key(|record| record.id);

    let mut connections: Vec<ConnectionRecord> = diagram
        .connections()
        .map(|connection| ConnectionRecord {
            id: connection.id,
            from: connection.from_anchor,
            to: connection.to_anchor,
            points: connection.user_modified.then(|| {
                connection
                    .points()
                    .iter()
                    .map(|point| [point.x, point.y])
                    .collect()
            }),
        })
        .collect();
    connections.sort_by_key(|record| record.id);

    DiagramDoc {
        shapes,
        anchors,
        connections,
    }
}

/// Serialize a diagram to TOML text
pub fn save(diagram: &Diagram) -> Result<String, PersistError> {
    Ok(toml::to_string_pretty(&to_document(diagram))?)
}

/// Parse TOML text and rebuild the diagram: plain connections are routed
/// afresh, user-modified ones restore their verbatim point sequence.
pub fn load(text: &str) -> Result<Diagram, PersistError> {
    let doc: DiagramDoc = toml::from_str(text)?;
    from_document(&doc)
}

/// Rebuild a diagram from its document form
pub fn from_document(doc: &DiagramDoc) -> Result<Diagram, PersistError> {
    let mut diagram = Diagram::new();
    for record in &doc.shapes {
        diagram.restore_shape(record.id, record.bounds);
    }
    for record in &doc.anchors {
        if diagram.shape(record.shape).is_none() {
            return Err(DiagramError::UnknownShape(record.shape).into());
        }
        diagram.restore_anchor(record.id, Anchor::new(record.shape, record.side, record.offset));
    }
    for record in &doc.connections {
        let from = diagram
            .anchor(record.from)
            .ok_or(DiagramError::UnknownAnchor(record.from))?;
        let to = diagram
            .anchor(record.to)
            .ok_or(DiagramError::UnknownAnchor(record.to))?;
        if !from.is_free() {
            return Err(DiagramError::AnchorOccupied(record.from).into());
        }
        if !to.is_free() {
            return Err(DiagramError::AnchorOccupied(record.to).into());
        }

        match &record.points {
            Some(raw) => {
                if raw.len() < 2 {
                    return Err(PersistError::ShortPath { id: record.id });
                }
                let points: Vec<Point> =
                    raw.iter().map(|[x, y]| Point::new(*x, *y)).collect();
                let segments = codec::to_segments(&points);
                validate_segments(&segments).map_err(|source| PersistError::Geometry {
                    id: record.id,
                    source,
                })?;
                let mut connection =
                    Connection::new(record.id, record.from, record.to, segments);
                connection.user_modified = true;
                diagram.restore_connection(connection);
            }
            None => {
                let from_pos = diagram
                    .anchor_position(record.from)
                    .ok_or(DiagramError::UnknownAnchor(record.from))?;
                let to_pos = diagram
                    .anchor_position(record.to)
                    .ok_or(DiagramError::UnknownAnchor(record.to))?;
                let segments =
                    crate::path::route(from_pos, from.side, to_pos, to.side);
                diagram.restore_connection(Connection::new(
                    record.id,
                    record.from,
                    record.to,
                    segments,
                ));
            }
        }
    }
    Ok(diagram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::Editor;
    use crate::geometry::Side;

    fn sample() -> Diagram {
        let mut diagram = Diagram::new();
        let a = diagram.add_shape(Rect::new(0.0, 0.0, 80.0, 40.0));
        let b = diagram.add_shape(Rect::new(200.0, 100.0, 80.0, 40.0));
        let from = diagram.add_anchor(a, Side::Right, 0.5).unwrap();
        let to = diagram.add_anchor(b, Side::Left, 0.5).unwrap();
        diagram.connect(from, to).unwrap();
        diagram
    }

    #[test]
    fn test_plain_connection_omits_points() {
        let diagram = sample();
        let doc = to_document(&diagram);
        assert_eq!(doc.connections.len(), 1);
        assert!(doc.connections[0].points.is_none());
    }

    #[test]
    fn test_round_trip_reroutes_plain_connection() {
        let diagram = sample();
        let text = save(&diagram).unwrap();
        let restored = load(&text).unwrap();

        let original = diagram.connections().next().unwrap();
        let rebuilt = restored.connections().next().unwrap();
        assert_eq!(rebuilt.points(), original.points());
        assert!(!rebuilt.user_modified);
    }

    #[test]
    fn test_user_modified_path_restored_verbatim() {
        let mut diagram = sample();
        let id = diagram.connections().next().unwrap().id;

        let mut editor = Editor::new();
        let connection = diagram.connection(id).unwrap().clone();
        editor.begin_edit(&connection);
        let mut connection = connection;
        editor.insert_break_at_handle(&mut connection, 1).unwrap();
        editor.end_edit(&mut connection);
        let jogged = connection.points();
        *diagram.connection_mut(id).unwrap() = connection;

        let text = save(&diagram).unwrap();
        let restored = load(&text).unwrap();
        let rebuilt = restored.connection(id).unwrap();
        assert_eq!(rebuilt.points(), jogged);
        assert!(rebuilt.user_modified);
        assert_eq!(rebuilt.segments.len(), 6);
    }

    #[test]
    fn test_load_rejects_dangling_anchor() {
        let text = r#"
            [[shapes]]
            id = 0
            bounds = { x = 0.0, y = 0.0, width = 10.0, height = 10.0 }

            [[anchors]]
            id = 0
            shape = 3
            side = "top"
            offset = 0.5
        "#;
        assert!(matches!(
            load(text),
            Err(PersistError::Diagram(DiagramError::UnknownShape(ShapeId(3))))
        ));
    }

    #[test]
    fn test_load_rejects_diagonal_points() {
        let text = r#"
            [[shapes]]
            id = 0
            bounds = { x = 0.0, y = 0.0, width = 10.0, height = 10.0 }

            [[shapes]]
            id = 1
            bounds = { x = 50.0, y = 50.0, width = 10.0, height = 10.0 }

            [[anchors]]
            id = 0
            shape = 0
            side = "right"
            offset = 0.5

            [[anchors]]
            id = 1
            shape = 1
            side = "left"
            offset = 0.5

            [[connections]]
            id = 0
            from = 0
            to = 1
            points = [[10.0, 5.0], [50.0, 55.0]]
        "#;
        assert!(matches!(
            load(text),
            Err(PersistError::Geometry { .. })
        ));
    }
}
