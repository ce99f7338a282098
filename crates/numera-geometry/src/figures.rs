//! Areas, perimeters and volumes of standard figures.

use std::f64::consts::PI;

use crate::GeometryError;

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Area of a circle.
///
/// # Errors
///
/// [`GeometryError::NegativeDimension`] for a negative radius.
pub fn circle_area(radius: f64) -> Result<f64, GeometryError> {
    if radius < 0.0 {
        return Err(GeometryError::NegativeDimension("radius"));
    }
    Ok(PI * radius * radius)
}

/// Area of a trapezoid with parallel sides `a`, `b` and height `h`.
///
/// # Errors
///
/// [`GeometryError::NegativeDimension`] for a negative side or height.
pub fn trapezoid_area(a: f64, b: f64, h: f64) -> Result<f64, GeometryError> {
    if a < 0.0 || b < 0.0 {
        return Err(GeometryError::NegativeDimension("side"));
    }
    if h < 0.0 {
        return Err(GeometryError::NegativeDimension("height"));
    }
    Ok((a + b) * h / 2.0)
}

/// Perimeter and area of a rectangle, in that order.
///
/// # Errors
///
/// [`GeometryError::NegativeDimension`] for a negative side.
pub fn rectangle_perimeter_area(length: f64, width: f64) -> Result<(f64, f64), GeometryError> {
    if length < 0.0 || width < 0.0 {
        return Err(GeometryError::NegativeDimension("side"));
    }
    Ok((2.0 * (length + width), length * width))
}

/// Volume of a right circular cylinder.
///
/// # Errors
///
/// [`GeometryError::NegativeDimension`] for a negative radius or height.
pub fn cylinder_volume(radius: f64, height: f64) -> Result<f64, GeometryError> {
    if height < 0.0 {
        return Err(GeometryError::NegativeDimension("height"));
    }
    Ok(circle_area(radius)? * height)
}

/// Impact velocity of a body falling from rest at standard gravity.
///
/// # Errors
///
/// [`GeometryError::NegativeDimension`] for a negative height.
pub fn free_fall_velocity(height: f64) -> Result<f64, GeometryError> {
    free_fall_velocity_with(height, STANDARD_GRAVITY)
}

/// Impact velocity v = √(2gh) from rest under gravity `gravity`.
///
/// # Errors
///
/// [`GeometryError::NegativeDimension`] for a negative height or gravity.
pub fn free_fall_velocity_with(height: f64, gravity: f64) -> Result<f64, GeometryError> {
    if height < 0.0 {
        return Err(GeometryError::NegativeDimension("height"));
    }
    if gravity < 0.0 {
        return Err(GeometryError::NegativeDimension("gravity"));
    }
    Ok((2.0 * gravity * height).sqrt())
}
