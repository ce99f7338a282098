//! Points in the Euclidean plane.

use std::fmt;

use crate::GeometryError;

/// A point in the Euclidean plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Area of the triangle spanned by three points, by the shoelace
/// formula. Zero for collinear points.
#[must_use]
pub fn triangle_area_from_points(a: Point, b: Point, c: Point) -> f64 {
    (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs() / 2.0
}

/// Whether `p` lies inside or on the circle around `center`.
///
/// # Errors
///
/// [`GeometryError::NegativeDimension`] for a negative radius.
pub fn point_in_circle(p: Point, center: Point, radius: f64) -> Result<bool, GeometryError> {
    if radius < 0.0 {
        return Err(GeometryError::NegativeDimension("radius"));
    }
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Ok(dx * dx + dy * dy <= radius * radius)
}

/// The quadrant a point falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// On the x or y axis.
    OnAxis,
    /// x > 0, y > 0.
    First,
    /// x < 0, y > 0.
    Second,
    /// x < 0, y < 0.
    Third,
    /// x > 0, y < 0.
    Fourth,
}

/// Classifies the quadrant of `p`; points on either axis are
/// [`Quadrant::OnAxis`].
#[must_use]
pub fn quadrant(p: Point) -> Quadrant {
    if p.x == 0.0 || p.y == 0.0 {
        return Quadrant::OnAxis;
    }
    match (p.x > 0.0, p.y > 0.0) {
        (true, true) => Quadrant::First,
        (false, true) => Quadrant::Second,
        (false, false) => Quadrant::Third,
        (true, false) => Quadrant::Fourth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(origin.distance(&Point::new(3.0, 4.0)), 5.0);
        assert_eq!(origin.distance(&origin), 0.0);
    }

    #[test]
    fn test_shoelace_area() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(0.0, 3.0);
        assert_eq!(triangle_area_from_points(a, b, c), 6.0);
        // collinear
        assert_eq!(
            triangle_area_from_points(a, Point::new(1.0, 1.0), Point::new(2.0, 2.0)),
            0.0
        );
    }

    #[test]
    fn test_point_in_circle() {
        let center = Point::new(1.0, 1.0);
        assert_eq!(point_in_circle(Point::new(1.0, 2.0), center, 1.0), Ok(true));
        assert_eq!(point_in_circle(Point::new(3.0, 3.0), center, 1.0), Ok(false));
        assert!(point_in_circle(center, center, -1.0).is_err());
    }

    #[test]
    fn test_quadrants() {
        assert_eq!(quadrant(Point::new(1.0, 1.0)), Quadrant::First);
        assert_eq!(quadrant(Point::new(-1.0, 1.0)), Quadrant::Second);
        assert_eq!(quadrant(Point::new(-1.0, -1.0)), Quadrant::Third);
        assert_eq!(quadrant(Point::new(1.0, -1.0)), Quadrant::Fourth);
        assert_eq!(quadrant(Point::new(0.0, 5.0)), Quadrant::OnAxis);
    }

    #[test]
    fn test_display_rounds_to_hundredths() {
        assert_eq!(Point::new(1.005, -2.5).to_string(), "(1.00, -2.50)");
    }
}
