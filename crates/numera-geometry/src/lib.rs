//! # numera-geometry
//!
//! Plane geometry and figure formulas:
//!
//! - Areas, perimeters and volumes of standard figures (`figures`)
//! - Points, distances, quadrants and the shoelace formula (`plane`)
//! - Triangles validated at construction, with side and angle
//!   classification (`triangle`)
//!
//! Dimension preconditions (non-negative lengths, the triangle
//! inequality) are enforced at the call that receives them and reported
//! as [`GeometryError`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use thiserror::Error;

pub mod figures;
pub mod plane;
pub mod triangle;

pub use figures::{
    circle_area, cylinder_volume, free_fall_velocity, free_fall_velocity_with,
    rectangle_perimeter_area, trapezoid_area, STANDARD_GRAVITY,
};
pub use plane::{point_in_circle, quadrant, triangle_area_from_points, Point, Quadrant};
pub use triangle::{is_pythagorean_triple, AngleKind, Triangle, TriangleKind};

/// Errors reported when a figure's preconditions are violated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A dimension that must be non-negative was negative.
    #[error("{0} must be non-negative")]
    NegativeDimension(&'static str),
    /// A triangle side was zero or negative.
    #[error("triangle sides must be positive")]
    NonPositiveSide,
    /// The side lengths violate the triangle inequality.
    #[error("side lengths do not form a triangle")]
    NotATriangle,
}
