//! Geometric vocabulary: points, rectangles, axes and shape sides.

use serde::{Deserialize, Serialize};

/// Tolerance for coordinate comparisons. Path coordinates come from halving
/// and snapping, so anything below this is accumulated float noise.
pub const EPS: f64 = 1e-6;

/// Compare two coordinates within [`EPS`].
pub fn coords_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}

/// A 2D point in diagram coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Compare two points within [`EPS`] on both coordinates.
    pub fn almost_eq(&self, other: Point) -> bool {
        coords_eq(self.x, other.x) && coords_eq(self.y, other.y)
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle, the boundary a shape exposes to its anchors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this rectangle contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

/// Direction of a path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    pub fn perp(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Side of a host shape an anchor sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Left- and right-facing anchors leave their host horizontally.
    /// This classification alone decides the routing case.
    pub fn is_horizontal_facing(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    /// Axis a connection departs along from this side
    pub fn facing_axis(self) -> Axis {
        if self.is_horizontal_facing() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let c = r.center();
        assert_eq!(c.x, 50.0);
        assert_eq!(c.y, 25.0);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(Point::new(50.0, 50.0)));
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(100.0, 100.0)));
        assert!(!r.contains(Point::new(-1.0, 50.0)));
        assert!(!r.contains(Point::new(101.0, 50.0)));
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn test_side_facing() {
        assert!(Side::Left.is_horizontal_facing());
        assert!(Side::Right.is_horizontal_facing());
        assert!(!Side::Top.is_horizontal_facing());
        assert!(!Side::Bottom.is_horizontal_facing());
        assert_eq!(Side::Top.facing_axis(), Axis::Vertical);
        assert_eq!(Side::Left.facing_axis(), Axis::Horizontal);
    }

    #[test]
    fn test_axis_perp() {
        assert_eq!(Axis::Horizontal.perp(), Axis::Vertical);
        assert_eq!(Axis::Vertical.perp(), Axis::Horizontal);
    }

    #[test]
    fn test_almost_eq_tolerates_noise() {
        let a = Point::new(50.0, 25.0);
        let b = Point::new(50.0 + 1e-9, 25.0 - 1e-9);
        assert!(a.almost_eq(b));
        assert!(!a.almost_eq(Point::new(50.1, 25.0)));
    }
}
