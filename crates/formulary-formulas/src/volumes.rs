//! Volumes and surface areas of solids.

use crate::FormulaResult;
use crate::guard::non_negative;
use std::f64::consts::PI;

const NEGATIVE_DIMENSIONS: &str = "dimensions cannot be negative";

pub fn volume_cube(side: f64) -> FormulaResult<f64> {
    non_negative(&[side], "side length cannot be negative")?;
    Ok(side.powi(3))
}

pub fn volume_rectangular_prism(length: f64, width: f64, height: f64) -> FormulaResult<f64> {
    non_negative(&[length, width, height], NEGATIVE_DIMENSIONS)?;
    Ok(length * width * height)
}

pub fn volume_sphere(radius: f64) -> FormulaResult<f64> {
    non_negative(&[radius], "radius cannot be negative")?;
    Ok(4.0 / 3.0 * PI * radius.powi(3))
}

pub fn volume_cylinder(radius: f64, height: f64) -> FormulaResult<f64> {
    non_negative(&[radius, height], NEGATIVE_DIMENSIONS)?;
    Ok(PI * radius.powi(2) * height)
}

pub fn volume_cone(radius: f64, height: f64) -> FormulaResult<f64> {
    non_negative(&[radius, height], NEGATIVE_DIMENSIONS)?;
    Ok(PI * radius.powi(2) * height / 3.0)
}

pub fn volume_pyramid(base_area: f64, height: f64) -> FormulaResult<f64> {
    non_negative(&[base_area, height], NEGATIVE_DIMENSIONS)?;
    Ok(base_area * height / 3.0)
}

/// Ellipsoid with semi-axes `a`, `b`, `c`.
pub fn volume_ellipsoid(a: f64, b: f64, c: f64) -> FormulaResult<f64> {
    non_negative(&[a, b, c], "semi-axes cannot be negative")?;
    Ok(4.0 / 3.0 * PI * a * b * c)
}

pub fn surface_area_sphere(radius: f64) -> FormulaResult<f64> {
    non_negative(&[radius], "radius cannot be negative")?;
    Ok(4.0 * PI * radius.powi(2))
}

/// Closed cylinder: both caps plus the lateral surface.
pub fn surface_area_cylinder(radius: f64, height: f64) -> FormulaResult<f64> {
    non_negative(&[radius, height], NEGATIVE_DIMENSIONS)?;
    Ok(2.0 * PI * radius * (radius + height))
}

/// Base disc plus lateral surface of a right circular cone.
pub fn surface_area_cone(radius: f64, slant_height: f64) -> FormulaResult<f64> {
    non_negative(&[radius, slant_height], NEGATIVE_DIMENSIONS)?;
    Ok(PI * radius * (radius + slant_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormulaError;

    #[test]
    fn sphere_volume() {
        let volume = volume_sphere(3.0).expect("sphere");
        assert!((volume - 36.0 * PI).abs() < 1e-9);
        assert!(matches!(
            volume_sphere(-1.0),
            Err(FormulaError::NegativeInput(_))
        ));
    }

    #[test]
    fn prisms_and_cones() {
        assert_eq!(volume_cube(4.0), Ok(64.0));
        assert_eq!(volume_rectangular_prism(2.0, 3.0, 4.0), Ok(24.0));
        assert_eq!(volume_pyramid(9.0, 3.0), Ok(9.0));
        assert!((volume_cylinder(2.0, 6.0).expect("cylinder") - 24.0 * PI).abs() < 1e-9);
        assert!((volume_cone(3.0, 4.0).expect("cone") - 12.0 * PI).abs() < 1e-9);
        assert!(volume_cone(3.0, -4.0).is_err());
    }

    #[test]
    fn surface_areas() {
        assert!((surface_area_sphere(1.0).expect("sphere") - 4.0 * PI).abs() < 1e-12);
        assert!((surface_area_cylinder(1.0, 1.0).expect("cylinder") - 4.0 * PI).abs() < 1e-12);
        assert!((surface_area_cone(1.0, 2.0).expect("cone") - 3.0 * PI).abs() < 1e-12);
        assert!(surface_area_cone(-1.0, 2.0).is_err());
    }
}
