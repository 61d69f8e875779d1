//! Plane geometry: areas, perimeters, distances.

use crate::guard::{non_negative, positive};
use crate::{FormulaError, FormulaResult};
use std::f64::consts::PI;

const NEGATIVE_DIMENSIONS: &str = "dimensions cannot be negative";
const NEGATIVE_RADIUS: &str = "radius cannot be negative";
const NEGATIVE_SIDE: &str = "side length cannot be negative";
const NEGATIVE_SEMI_AXES: &str = "semi-axes cannot be negative";
const NON_POSITIVE_SIDES: &str = "side lengths must be positive";

pub fn area_circle(radius: f64) -> FormulaResult<f64> {
    non_negative(&[radius], NEGATIVE_RADIUS)?;
    Ok(PI * radius * radius)
}

pub fn area_rectangle(length: f64, width: f64) -> FormulaResult<f64> {
    non_negative(&[length, width], NEGATIVE_DIMENSIONS)?;
    Ok(length * width)
}

pub fn area_square(side: f64) -> FormulaResult<f64> {
    non_negative(&[side], NEGATIVE_SIDE)?;
    Ok(side * side)
}

pub fn area_triangle(base: f64, height: f64) -> FormulaResult<f64> {
    non_negative(&[base, height], NEGATIVE_DIMENSIONS)?;
    Ok(0.5 * base * height)
}

/// Heron's formula over the semi-perimeter.
pub fn area_triangle_heron(a: f64, b: f64, c: f64) -> FormulaResult<f64> {
    positive(&[a, b, c], NON_POSITIVE_SIDES)?;
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(FormulaError::Degenerate(
            "invalid triangle - triangle inequality violated",
        ));
    }
    let s = (a + b + c) / 2.0;
    Ok((s * (s - a) * (s - b) * (s - c)).sqrt())
}

pub fn area_rhombus(diagonal1: f64, diagonal2: f64) -> FormulaResult<f64> {
    non_negative(&[diagonal1, diagonal2], "diagonal lengths cannot be negative")?;
    Ok(diagonal1 * diagonal2 / 2.0)
}

pub fn area_trapezoid(base1: f64, base2: f64, height: f64) -> FormulaResult<f64> {
    non_negative(&[base1, base2, height], NEGATIVE_DIMENSIONS)?;
    Ok((base1 + base2) * height / 2.0)
}

pub fn area_regular_polygon(perimeter: f64, apothem: f64) -> FormulaResult<f64> {
    non_negative(&[perimeter, apothem], NEGATIVE_DIMENSIONS)?;
    Ok(perimeter * apothem / 2.0)
}

pub fn area_ellipse(semi_major_axis: f64, semi_minor_axis: f64) -> FormulaResult<f64> {
    non_negative(&[semi_major_axis, semi_minor_axis], NEGATIVE_SEMI_AXES)?;
    Ok(PI * semi_major_axis * semi_minor_axis)
}

/// Sector of a circle; the angle is in degrees within `[0, 360]`.
pub fn area_sector(radius: f64, angle_degrees: f64) -> FormulaResult<f64> {
    non_negative(&[radius], NEGATIVE_RADIUS)?;
    if !(0.0..=360.0).contains(&angle_degrees) {
        return Err(FormulaError::OutOfDomain(
            "angle must be between 0 and 360 degrees",
        ));
    }
    Ok(angle_degrees / 360.0 * PI * radius * radius)
}

pub fn area_annulus(outer_radius: f64, inner_radius: f64) -> FormulaResult<f64> {
    non_negative(&[outer_radius, inner_radius], "radii cannot be negative")?;
    if inner_radius >= outer_radius {
        return Err(FormulaError::Degenerate(
            "inner radius must be less than outer radius",
        ));
    }
    Ok(PI * (outer_radius * outer_radius - inner_radius * inner_radius))
}

pub fn circumference_circle(radius: f64) -> FormulaResult<f64> {
    non_negative(&[radius], NEGATIVE_RADIUS)?;
    Ok(2.0 * PI * radius)
}

pub fn perimeter_rectangle(length: f64, width: f64) -> FormulaResult<f64> {
    non_negative(&[length, width], NEGATIVE_DIMENSIONS)?;
    Ok(2.0 * (length + width))
}

pub fn perimeter_square(side: f64) -> FormulaResult<f64> {
    non_negative(&[side], NEGATIVE_SIDE)?;
    Ok(4.0 * side)
}

pub fn perimeter_triangle(a: f64, b: f64, c: f64) -> FormulaResult<f64> {
    positive(&[a, b, c], NON_POSITIVE_SIDES)?;
    Ok(a + b + c)
}

pub fn perimeter_regular_polygon(num_sides: f64, side_length: f64) -> FormulaResult<f64> {
    if num_sides < 3.0 {
        return Err(FormulaError::OutOfDomain(
            "a polygon must have at least 3 sides",
        ));
    }
    non_negative(&[side_length], NEGATIVE_SIDE)?;
    Ok(num_sides * side_length)
}

/// Ramanujan's second approximation of an ellipse perimeter.
pub fn perimeter_ellipse(semi_major_axis: f64, semi_minor_axis: f64) -> FormulaResult<f64> {
    non_negative(&[semi_major_axis, semi_minor_axis], NEGATIVE_SEMI_AXES)?;
    let (a, b) = (semi_major_axis, semi_minor_axis);
    let h = (a - b).powi(2) / (a + b).powi(2);
    Ok(PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt())))
}

pub fn distance_2d(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

pub fn distance_3d(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2) + (z2 - z1).powi(2)).sqrt()
}

pub fn midpoint_2d(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64) {
    ((x1 + x2) / 2.0, (y1 + y2) / 2.0)
}

pub fn slope_line(x1: f64, y1: f64, x2: f64, y2: f64) -> FormulaResult<f64> {
    if x2 == x1 {
        return Err(FormulaError::Degenerate(
            "slope is undefined for vertical lines",
        ));
    }
    Ok((y2 - y1) / (x2 - x1))
}

/// Angle between the vectors `(x1, y1)` and `(x2, y2)`, in degrees.
pub fn angle_between_vectors(x1: f64, y1: f64, x2: f64, y2: f64) -> FormulaResult<f64> {
    let magnitude1 = x1.hypot(y1);
    let magnitude2 = x2.hypot(y2);
    if magnitude1 == 0.0 || magnitude2 == 0.0 {
        return Err(FormulaError::Degenerate(
            "cannot calculate angle with zero vector",
        ));
    }
    let cos_angle = ((x1 * x2 + y1 * y2) / (magnitude1 * magnitude2)).clamp(-1.0, 1.0);
    Ok(cos_angle.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn circle_area_rejects_negative_radius() {
        assert!(close(area_circle(4.0).expect("area"), 50.26548245743669));
        assert_eq!(area_circle(0.0), Ok(0.0));
        assert!(matches!(
            area_circle(-5.0),
            Err(FormulaError::NegativeInput(_))
        ));
    }

    #[test]
    fn heron_checks_sides_and_inequality() {
        assert_eq!(area_triangle_heron(3.0, 4.0, 5.0), Ok(6.0));
        assert!(area_triangle_heron(0.0, 4.0, 5.0).is_err());
        assert!(matches!(
            area_triangle_heron(1.0, 2.0, 3.0),
            Err(FormulaError::Degenerate(_))
        ));
    }

    #[test]
    fn sector_and_annulus_bounds() {
        assert!(close(area_sector(2.0, 90.0).expect("sector"), PI));
        assert!(area_sector(2.0, 361.0).is_err());
        assert!(area_sector(2.0, -1.0).is_err());
        assert!(close(area_annulus(2.0, 1.0).expect("annulus"), 3.0 * PI));
        assert!(area_annulus(1.0, 1.0).is_err());
    }

    #[test]
    fn perimeters() {
        assert_eq!(perimeter_rectangle(12.0, 8.0), Ok(40.0));
        assert_eq!(perimeter_regular_polygon(6.0, 2.0), Ok(12.0));
        assert!(perimeter_regular_polygon(2.0, 2.0).is_err());
        assert!(close(
            perimeter_ellipse(3.0, 3.0).expect("circle"),
            2.0 * PI * 3.0
        ));
    }

    #[test]
    fn distances_slopes_and_angles() {
        assert_eq!(distance_2d(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance_3d(0.0, 0.0, 0.0, 2.0, 3.0, 6.0), 7.0);
        assert_eq!(midpoint_2d(0.0, 0.0, 4.0, -2.0), (2.0, -1.0));
        assert_eq!(slope_line(0.0, 0.0, 2.0, 6.0), Ok(3.0));
        assert!(slope_line(1.0, 0.0, 1.0, 5.0).is_err());
        assert!(close(
            angle_between_vectors(1.0, 0.0, 0.0, 1.0).expect("angle"),
            90.0
        ));
        assert!(angle_between_vectors(0.0, 0.0, 0.0, 1.0).is_err());
    }
}
