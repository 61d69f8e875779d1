//! Operation registry: operation id -> {handler, required parameter set}.
//!
//! The table is static, built at compile time, and indexed by the
//! identifier's catalog position. It is never mutated, so concurrent
//! readers need no synchronization.
//!
//! Adding an operation means adding one catalog token and one row here;
//! the dispatcher does not change.

use crate::binding::BoundArguments;
use crate::error::HandlerFailure;
use crate::operation::{Category, OperationId};
use crate::outcome::Outcome::{self, Flag, Pair, Scalar};
use formulary_formulas::{arithmetic, geometry, logarithms, statistics, trigonometry, volumes};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

pub const OPERATION_REGISTRY_KIND: &str = "formulary.operation_registry.v1";

pub(crate) type Handler = fn(&BoundArguments<'_>) -> Result<Outcome, HandlerFailure>;

/// Registry entry for one operation.
#[derive(Clone, Copy)]
pub struct OperationSpec {
    id: OperationId,
    display_name: &'static str,
    summary: &'static str,
    required: &'static [&'static str],
    handler: Handler,
}

impl OperationSpec {
    pub fn id(&self) -> OperationId {
        self.id
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// Exact parameter names the handler accepts, in declaration order.
    pub fn required_params(&self) -> &'static [&'static str] {
        self.required
    }

    pub fn requires(&self, name: &str) -> bool {
        self.required.contains(&name)
    }

    pub(crate) fn handler(&self) -> Handler {
        self.handler
    }
}

impl fmt::Debug for OperationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationSpec")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

const fn spec(
    id: OperationId,
    display_name: &'static str,
    summary: &'static str,
    required: &'static [&'static str],
    handler: Handler,
) -> OperationSpec {
    OperationSpec {
        id,
        display_name,
        summary,
        required,
        handler,
    }
}

const AB: &[&str] = &["a", "b"];
const ABC: &[&str] = &["a", "b", "c"];
const NUM: &[&str] = &["num"];
const N: &[&str] = &["n"];
const NR: &[&str] = &["n", "r"];
const RADIUS: &[&str] = &["radius"];
const RADIUS_HEIGHT: &[&str] = &["radius", "height"];
const LENGTH_WIDTH: &[&str] = &["length", "width"];
const SIDE: &[&str] = &["side"];
const SEMI_AXES: &[&str] = &["semi_major_axis", "semi_minor_axis"];
const POINTS_2D: &[&str] = &["x1", "y1", "x2", "y2"];
const ANGLE_DEGREES: &[&str] = &["angle_degrees"];
const ANGLE_RADIANS: &[&str] = &["angle_radians"];
const VALUE: &[&str] = &["value"];
const YX: &[&str] = &["y", "x"];
const X: &[&str] = &["x"];
const VALUES: &[&str] = &["values"];

static OPERATION_SPECS: [OperationSpec; OperationId::COUNT] = [
    // Arithmetic
    spec(OperationId::Add, "Addition", "Add two numbers.", AB, |args| {
        Ok(Scalar(arithmetic::add(args.scalar("a")?, args.scalar("b")?)))
    }),
    spec(OperationId::Subtract, "Subtraction", "Subtract b from a.", AB, |args| {
        Ok(Scalar(arithmetic::subtract(args.scalar("a")?, args.scalar("b")?)))
    }),
    spec(OperationId::Multiply, "Multiplication", "Multiply two numbers.", AB, |args| {
        Ok(Scalar(arithmetic::multiply(args.scalar("a")?, args.scalar("b")?)))
    }),
    spec(OperationId::Divide, "Division", "Divide a by b.", AB, |args| {
        Ok(Scalar(arithmetic::divide(args.scalar("a")?, args.scalar("b")?)?))
    }),
    spec(OperationId::Modulo, "Modulo", "Remainder of a divided by b.", AB, |args| {
        Ok(Scalar(arithmetic::modulo(args.scalar("a")?, args.scalar("b")?)?))
    }),
    spec(OperationId::FloorDivide, "Floor division", "Divide a by b, rounding down.", AB, |args| {
        Ok(Scalar(arithmetic::floor_divide(args.scalar("a")?, args.scalar("b")?)?))
    }),
    spec(OperationId::Power, "Power", "Raise num to the given power.", &["num", "power"], |args| {
        Ok(Scalar(arithmetic::power(args.scalar("num")?, args.scalar("power")?)))
    }),
    spec(OperationId::SquareRoot, "Square root", "Square root of a non-negative number.", NUM, |args| {
        Ok(Scalar(arithmetic::square_root(args.scalar("num")?)?))
    }),
    spec(OperationId::CubeRoot, "Cube root", "Real cube root of a number.", NUM, |args| {
        Ok(Scalar(arithmetic::cube_root(args.scalar("num")?)))
    }),
    spec(OperationId::NthRoot, "Nth root", "Real nth root of a number.", &["num", "n"], |args| {
        Ok(Scalar(arithmetic::nth_root(args.scalar("num")?, args.scalar("n")?)?))
    }),
    spec(OperationId::Square, "Square", "Square of a number.", NUM, |args| {
        Ok(Scalar(arithmetic::square(args.scalar("num")?)))
    }),
    spec(OperationId::Cube, "Cube", "Cube of a number.", NUM, |args| {
        Ok(Scalar(arithmetic::cube(args.scalar("num")?)))
    }),
    spec(OperationId::AbsoluteValue, "Absolute value", "Absolute value of a number.", NUM, |args| {
        Ok(Scalar(arithmetic::absolute_value(args.scalar("num")?)))
    }),
    spec(OperationId::Sign, "Sign", "Sign of a number: -1, 0, or 1.", NUM, |args| {
        Ok(Scalar(arithmetic::sign(args.scalar("num")?)))
    }),
    spec(OperationId::Ceiling, "Ceiling", "Round up to the nearest integer.", NUM, |args| {
        Ok(Scalar(arithmetic::ceiling(args.scalar("num")?)))
    }),
    spec(OperationId::Floor, "Floor", "Round down to the nearest integer.", NUM, |args| {
        Ok(Scalar(arithmetic::floor(args.scalar("num")?)))
    }),
    spec(
        OperationId::RoundToDecimals,
        "Round to decimals",
        "Round to a number of decimal places, ties to even.",
        &["num", "decimals"],
        |args| {
            Ok(Scalar(arithmetic::round_to_decimals(
                args.scalar("num")?,
                args.scalar("decimals")?,
            )?))
        },
    ),
    spec(OperationId::Factorial, "Factorial", "Factorial of a non-negative integer.", N, |args| {
        Ok(Scalar(arithmetic::factorial(args.scalar("n")?)?))
    }),
    spec(OperationId::Combination, "Combination", "Ways to choose r of n, C(n, r).", NR, |args| {
        Ok(Scalar(arithmetic::combination(args.scalar("n")?, args.scalar("r")?)?))
    }),
    spec(OperationId::Permutation, "Permutation", "Ordered arrangements of r of n, P(n, r).", NR, |args| {
        Ok(Scalar(arithmetic::permutation(args.scalar("n")?, args.scalar("r")?)?))
    }),
    spec(OperationId::Gcd, "Greatest common divisor", "Greatest common divisor of two integers.", AB, |args| {
        Ok(Scalar(arithmetic::greatest_common_divisor(args.scalar("a")?, args.scalar("b")?)?))
    }),
    spec(OperationId::Lcm, "Least common multiple", "Least common multiple of two integers.", AB, |args| {
        Ok(Scalar(arithmetic::least_common_multiple(args.scalar("a")?, args.scalar("b")?)?))
    }),
    spec(OperationId::IsPrime, "Primality", "Whether an integer is prime.", N, |args| {
        Ok(Flag(arithmetic::is_prime(args.scalar("n")?)?))
    }),
    spec(OperationId::Fibonacci, "Fibonacci", "The nth Fibonacci number.", N, |args| {
        Ok(Scalar(arithmetic::fibonacci(args.scalar("n")?)?))
    }),
    spec(OperationId::ArithmeticMean, "Arithmetic mean", "Arithmetic mean of two numbers.", AB, |args| {
        Ok(Scalar(arithmetic::arithmetic_mean(args.scalar("a")?, args.scalar("b")?)))
    }),
    spec(OperationId::GeometricMean, "Geometric mean", "Geometric mean of two non-negative numbers.", AB, |args| {
        Ok(Scalar(arithmetic::geometric_mean(args.scalar("a")?, args.scalar("b")?)?))
    }),
    spec(OperationId::HarmonicMean, "Harmonic mean", "Harmonic mean of two non-zero numbers.", AB, |args| {
        Ok(Scalar(arithmetic::harmonic_mean(args.scalar("a")?, args.scalar("b")?)?))
    }),
    spec(
        OperationId::Percentage,
        "Percentage",
        "What percentage part is of whole.",
        &["part", "whole"],
        |args| Ok(Scalar(arithmetic::percentage(args.scalar("part")?, args.scalar("whole")?)?)),
    ),
    spec(
        OperationId::PercentageChange,
        "Percentage change",
        "Percentage change from old value to new value.",
        &["old_value", "new_value"],
        |args| {
            Ok(Scalar(arithmetic::percentage_change(
                args.scalar("old_value")?,
                args.scalar("new_value")?,
            )?))
        },
    ),
    // Geometry
    spec(OperationId::AreaCircle, "Circle area", "Area of a circle from its radius.", RADIUS, |args| {
        Ok(Scalar(geometry::area_circle(args.scalar("radius")?)?))
    }),
    spec(OperationId::AreaRectangle, "Rectangle area", "Area of a rectangle.", LENGTH_WIDTH, |args| {
        Ok(Scalar(geometry::area_rectangle(args.scalar("length")?, args.scalar("width")?)?))
    }),
    spec(OperationId::AreaSquare, "Square area", "Area of a square.", SIDE, |args| {
        Ok(Scalar(geometry::area_square(args.scalar("side")?)?))
    }),
    spec(
        OperationId::AreaTriangle,
        "Triangle area",
        "Area of a triangle from base and height.",
        &["base", "height"],
        |args| Ok(Scalar(geometry::area_triangle(args.scalar("base")?, args.scalar("height")?)?)),
    ),
    spec(OperationId::AreaTriangleHeron, "Triangle area (Heron)", "Area of a triangle from its three sides.", ABC, |args| {
        Ok(Scalar(geometry::area_triangle_heron(
            args.scalar("a")?,
            args.scalar("b")?,
            args.scalar("c")?,
        )?))
    }),
    spec(
        OperationId::AreaRhombus,
        "Rhombus area",
        "Area of a rhombus from its diagonals.",
        &["diagonal1", "diagonal2"],
        |args| {
            Ok(Scalar(geometry::area_rhombus(
                args.scalar("diagonal1")?,
                args.scalar("diagonal2")?,
            )?))
        },
    ),
    spec(
        OperationId::AreaTrapezoid,
        "Trapezoid area",
        "Area of a trapezoid.",
        &["base1", "base2", "height"],
        |args| {
            Ok(Scalar(geometry::area_trapezoid(
                args.scalar("base1")?,
                args.scalar("base2")?,
                args.scalar("height")?,
            )?))
        },
    ),
    spec(
        OperationId::AreaRegularPolygon,
        "Regular polygon area",
        "Area of a regular polygon from perimeter and apothem.",
        &["perimeter", "apothem"],
        |args| {
            Ok(Scalar(geometry::area_regular_polygon(
                args.scalar("perimeter")?,
                args.scalar("apothem")?,
            )?))
        },
    ),
    spec(OperationId::AreaEllipse, "Ellipse area", "Area of an ellipse.", SEMI_AXES, |args| {
        Ok(Scalar(geometry::area_ellipse(
            args.scalar("semi_major_axis")?,
            args.scalar("semi_minor_axis")?,
        )?))
    }),
    spec(
        OperationId::AreaSector,
        "Sector area",
        "Area of a circular sector.",
        &["radius", "angle_degrees"],
        |args| {
            Ok(Scalar(geometry::area_sector(
                args.scalar("radius")?,
                args.scalar("angle_degrees")?,
            )?))
        },
    ),
    spec(
        OperationId::AreaAnnulus,
        "Annulus area",
        "Area of a ring between two concentric circles.",
        &["outer_radius", "inner_radius"],
        |args| {
            Ok(Scalar(geometry::area_annulus(
                args.scalar("outer_radius")?,
                args.scalar("inner_radius")?,
            )?))
        },
    ),
    spec(OperationId::CircumferenceCircle, "Circle circumference", "Circumference of a circle.", RADIUS, |args| {
        Ok(Scalar(geometry::circumference_circle(args.scalar("radius")?)?))
    }),
    spec(OperationId::PerimeterRectangle, "Rectangle perimeter", "Perimeter of a rectangle.", LENGTH_WIDTH, |args| {
        Ok(Scalar(geometry::perimeter_rectangle(args.scalar("length")?, args.scalar("width")?)?))
    }),
    spec(OperationId::PerimeterSquare, "Square perimeter", "Perimeter of a square.", SIDE, |args| {
        Ok(Scalar(geometry::perimeter_square(args.scalar("side")?)?))
    }),
    spec(OperationId::PerimeterTriangle, "Triangle perimeter", "Perimeter of a triangle.", ABC, |args| {
        Ok(Scalar(geometry::perimeter_triangle(
            args.scalar("a")?,
            args.scalar("b")?,
            args.scalar("c")?,
        )?))
    }),
    spec(
        OperationId::PerimeterRegularPolygon,
        "Regular polygon perimeter",
        "Perimeter of a regular polygon.",
        &["num_sides", "side_length"],
        |args| {
            Ok(Scalar(geometry::perimeter_regular_polygon(
                args.scalar("num_sides")?,
                args.scalar("side_length")?,
            )?))
        },
    ),
    spec(
        OperationId::PerimeterEllipse,
        "Ellipse perimeter",
        "Approximate perimeter of an ellipse (Ramanujan).",
        SEMI_AXES,
        |args| {
            Ok(Scalar(geometry::perimeter_ellipse(
                args.scalar("semi_major_axis")?,
                args.scalar("semi_minor_axis")?,
            )?))
        },
    ),
    spec(OperationId::Distance2d, "Distance (2D)", "Distance between two points in the plane.", POINTS_2D, |args| {
        Ok(Scalar(geometry::distance_2d(
            args.scalar("x1")?,
            args.scalar("y1")?,
            args.scalar("x2")?,
            args.scalar("y2")?,
        )))
    }),
    spec(
        OperationId::Distance3d,
        "Distance (3D)",
        "Distance between two points in space.",
        &["x1", "y1", "z1", "x2", "y2", "z2"],
        |args| {
            Ok(Scalar(geometry::distance_3d(
                args.scalar("x1")?,
                args.scalar("y1")?,
                args.scalar("z1")?,
                args.scalar("x2")?,
                args.scalar("y2")?,
                args.scalar("z2")?,
            )))
        },
    ),
    spec(OperationId::Midpoint2d, "Midpoint (2D)", "Midpoint between two points in the plane.", POINTS_2D, |args| {
        let (x, y) = geometry::midpoint_2d(
            args.scalar("x1")?,
            args.scalar("y1")?,
            args.scalar("x2")?,
            args.scalar("y2")?,
        );
        Ok(Pair(x, y))
    }),
    spec(OperationId::SlopeLine, "Slope", "Slope of the line through two points.", POINTS_2D, |args| {
        Ok(Scalar(geometry::slope_line(
            args.scalar("x1")?,
            args.scalar("y1")?,
            args.scalar("x2")?,
            args.scalar("y2")?,
        )?))
    }),
    spec(
        OperationId::AngleBetweenVectors,
        "Angle between vectors",
        "Angle between two plane vectors, in degrees.",
        POINTS_2D,
        |args| {
            Ok(Scalar(geometry::angle_between_vectors(
                args.scalar("x1")?,
                args.scalar("y1")?,
                args.scalar("x2")?,
                args.scalar("y2")?,
            )?))
        },
    ),
    // Volumes
    spec(OperationId::VolumeCube, "Cube volume", "Volume of a cube.", SIDE, |args| {
        Ok(Scalar(volumes::volume_cube(args.scalar("side")?)?))
    }),
    spec(
        OperationId::VolumeRectangularPrism,
        "Rectangular prism volume",
        "Volume of a rectangular box.",
        &["length", "width", "height"],
        |args| {
            Ok(Scalar(volumes::volume_rectangular_prism(
                args.scalar("length")?,
                args.scalar("width")?,
                args.scalar("height")?,
            )?))
        },
    ),
    spec(OperationId::VolumeSphere, "Sphere volume", "Volume of a sphere.", RADIUS, |args| {
        Ok(Scalar(volumes::volume_sphere(args.scalar("radius")?)?))
    }),
    spec(OperationId::VolumeCylinder, "Cylinder volume", "Volume of a cylinder.", RADIUS_HEIGHT, |args| {
        Ok(Scalar(volumes::volume_cylinder(args.scalar("radius")?, args.scalar("height")?)?))
    }),
    spec(OperationId::VolumeCone, "Cone volume", "Volume of a cone.", RADIUS_HEIGHT, |args| {
        Ok(Scalar(volumes::volume_cone(args.scalar("radius")?, args.scalar("height")?)?))
    }),
    spec(
        OperationId::VolumePyramid,
        "Pyramid volume",
        "Volume of a pyramid from base area and height.",
        &["base_area", "height"],
        |args| {
            Ok(Scalar(volumes::volume_pyramid(
                args.scalar("base_area")?,
                args.scalar("height")?,
            )?))
        },
    ),
    spec(OperationId::VolumeEllipsoid, "Ellipsoid volume", "Volume of an ellipsoid from its semi-axes.", ABC, |args| {
        Ok(Scalar(volumes::volume_ellipsoid(
            args.scalar("a")?,
            args.scalar("b")?,
            args.scalar("c")?,
        )?))
    }),
    spec(OperationId::SurfaceAreaSphere, "Sphere surface area", "Surface area of a sphere.", RADIUS, |args| {
        Ok(Scalar(volumes::surface_area_sphere(args.scalar("radius")?)?))
    }),
    spec(
        OperationId::SurfaceAreaCylinder,
        "Cylinder surface area",
        "Surface area of a closed cylinder.",
        RADIUS_HEIGHT,
        |args| {
            Ok(Scalar(volumes::surface_area_cylinder(
                args.scalar("radius")?,
                args.scalar("height")?,
            )?))
        },
    ),
    spec(
        OperationId::SurfaceAreaCone,
        "Cone surface area",
        "Surface area of a cone from radius and slant height.",
        &["radius", "slant_height"],
        |args| {
            Ok(Scalar(volumes::surface_area_cone(
                args.scalar("radius")?,
                args.scalar("slant_height")?,
            )?))
        },
    ),
    // Trigonometry
    spec(OperationId::SinDegrees, "Sine (degrees)", "Sine of an angle in degrees.", ANGLE_DEGREES, |args| {
        Ok(Scalar(trigonometry::sin_degrees(args.scalar("angle_degrees")?)))
    }),
    spec(OperationId::CosDegrees, "Cosine (degrees)", "Cosine of an angle in degrees.", ANGLE_DEGREES, |args| {
        Ok(Scalar(trigonometry::cos_degrees(args.scalar("angle_degrees")?)))
    }),
    spec(OperationId::TanDegrees, "Tangent (degrees)", "Tangent of an angle in degrees.", ANGLE_DEGREES, |args| {
        Ok(Scalar(trigonometry::tan_degrees(args.scalar("angle_degrees")?)))
    }),
    spec(OperationId::SinRadians, "Sine (radians)", "Sine of an angle in radians.", ANGLE_RADIANS, |args| {
        Ok(Scalar(trigonometry::sin_radians(args.scalar("angle_radians")?)))
    }),
    spec(OperationId::CosRadians, "Cosine (radians)", "Cosine of an angle in radians.", ANGLE_RADIANS, |args| {
        Ok(Scalar(trigonometry::cos_radians(args.scalar("angle_radians")?)))
    }),
    spec(OperationId::TanRadians, "Tangent (radians)", "Tangent of an angle in radians.", ANGLE_RADIANS, |args| {
        Ok(Scalar(trigonometry::tan_radians(args.scalar("angle_radians")?)))
    }),
    spec(OperationId::AsinDegrees, "Arcsine (degrees)", "Arcsine in degrees.", VALUE, |args| {
        Ok(Scalar(trigonometry::asin_degrees(args.scalar("value")?)?))
    }),
    spec(OperationId::AcosDegrees, "Arccosine (degrees)", "Arccosine in degrees.", VALUE, |args| {
        Ok(Scalar(trigonometry::acos_degrees(args.scalar("value")?)?))
    }),
    spec(OperationId::AtanDegrees, "Arctangent (degrees)", "Arctangent in degrees.", VALUE, |args| {
        Ok(Scalar(trigonometry::atan_degrees(args.scalar("value")?)))
    }),
    spec(OperationId::AsinRadians, "Arcsine (radians)", "Arcsine in radians.", VALUE, |args| {
        Ok(Scalar(trigonometry::asin_radians(args.scalar("value")?)?))
    }),
    spec(OperationId::AcosRadians, "Arccosine (radians)", "Arccosine in radians.", VALUE, |args| {
        Ok(Scalar(trigonometry::acos_radians(args.scalar("value")?)?))
    }),
    spec(OperationId::AtanRadians, "Arctangent (radians)", "Arctangent in radians.", VALUE, |args| {
        Ok(Scalar(trigonometry::atan_radians(args.scalar("value")?)))
    }),
    spec(OperationId::Atan2Degrees, "Two-argument arctangent (degrees)", "Quadrant-aware arctangent of y/x in degrees.", YX, |args| {
        Ok(Scalar(trigonometry::atan2_degrees(args.scalar("y")?, args.scalar("x")?)))
    }),
    spec(OperationId::Atan2Radians, "Two-argument arctangent (radians)", "Quadrant-aware arctangent of y/x in radians.", YX, |args| {
        Ok(Scalar(trigonometry::atan2_radians(args.scalar("y")?, args.scalar("x")?)))
    }),
    spec(OperationId::SecDegrees, "Secant (degrees)", "Secant of an angle in degrees.", ANGLE_DEGREES, |args| {
        Ok(Scalar(trigonometry::sec_degrees(args.scalar("angle_degrees")?)?))
    }),
    spec(OperationId::CscDegrees, "Cosecant (degrees)", "Cosecant of an angle in degrees.", ANGLE_DEGREES, |args| {
        Ok(Scalar(trigonometry::csc_degrees(args.scalar("angle_degrees")?)?))
    }),
    spec(OperationId::CotDegrees, "Cotangent (degrees)", "Cotangent of an angle in degrees.", ANGLE_DEGREES, |args| {
        Ok(Scalar(trigonometry::cot_degrees(args.scalar("angle_degrees")?)?))
    }),
    spec(OperationId::DegreesToRadians, "Degrees to radians", "Convert degrees to radians.", &["degrees"], |args| {
        Ok(Scalar(trigonometry::degrees_to_radians(args.scalar("degrees")?)))
    }),
    spec(OperationId::RadiansToDegrees, "Radians to degrees", "Convert radians to degrees.", &["radians"], |args| {
        Ok(Scalar(trigonometry::radians_to_degrees(args.scalar("radians")?)))
    }),
    // Logarithms and exponentials
    spec(OperationId::NaturalLog, "Natural logarithm", "Logarithm base e.", X, |args| {
        Ok(Scalar(logarithms::natural_log(args.scalar("x")?)?))
    }),
    spec(OperationId::LogBase10, "Common logarithm", "Logarithm base 10.", X, |args| {
        Ok(Scalar(logarithms::log_base_10(args.scalar("x")?)?))
    }),
    spec(OperationId::LogBase2, "Binary logarithm", "Logarithm base 2.", X, |args| {
        Ok(Scalar(logarithms::log_base_2(args.scalar("x")?)?))
    }),
    spec(OperationId::LogCustomBase, "Logarithm (custom base)", "Logarithm of x in the given base.", &["x", "base"], |args| {
        Ok(Scalar(logarithms::log_custom_base(args.scalar("x")?, args.scalar("base")?)?))
    }),
    spec(OperationId::ExponentialE, "Exponential", "e raised to the power x.", X, |args| {
        Ok(Scalar(logarithms::exponential_e(args.scalar("x")?)))
    }),
    spec(OperationId::ExponentialBase10, "Power of ten", "10 raised to the power x.", X, |args| {
        Ok(Scalar(logarithms::exponential_base_10(args.scalar("x")?)))
    }),
    spec(OperationId::ExponentialBase2, "Power of two", "2 raised to the power x.", X, |args| {
        Ok(Scalar(logarithms::exponential_base_2(args.scalar("x")?)))
    }),
    spec(
        OperationId::ExponentialCustomBase,
        "Exponential (custom base)",
        "base raised to the given exponent.",
        &["base", "exponent"],
        |args| {
            Ok(Scalar(logarithms::exponential_custom_base(
                args.scalar("base")?,
                args.scalar("exponent")?,
            )?))
        },
    ),
    spec(OperationId::Sinh, "Hyperbolic sine", "Hyperbolic sine of x.", X, |args| {
        Ok(Scalar(logarithms::sinh(args.scalar("x")?)))
    }),
    spec(OperationId::Cosh, "Hyperbolic cosine", "Hyperbolic cosine of x.", X, |args| {
        Ok(Scalar(logarithms::cosh(args.scalar("x")?)))
    }),
    spec(OperationId::Tanh, "Hyperbolic tangent", "Hyperbolic tangent of x.", X, |args| {
        Ok(Scalar(logarithms::tanh(args.scalar("x")?)))
    }),
    spec(OperationId::Asinh, "Inverse hyperbolic sine", "Inverse hyperbolic sine of x.", X, |args| {
        Ok(Scalar(logarithms::asinh(args.scalar("x")?)))
    }),
    spec(OperationId::Acosh, "Inverse hyperbolic cosine", "Inverse hyperbolic cosine of x >= 1.", X, |args| {
        Ok(Scalar(logarithms::acosh(args.scalar("x")?)?))
    }),
    spec(OperationId::Atanh, "Inverse hyperbolic tangent", "Inverse hyperbolic tangent of |x| < 1.", X, |args| {
        Ok(Scalar(logarithms::atanh(args.scalar("x")?)?))
    }),
    // Statistics
    spec(OperationId::Mean, "Mean", "Arithmetic mean of a sample.", VALUES, |args| {
        Ok(Scalar(statistics::mean(args.series("values")?)?))
    }),
    spec(OperationId::Median, "Median", "Middle value of a sample.", VALUES, |args| {
        Ok(Scalar(statistics::median(args.series("values")?)?))
    }),
    spec(OperationId::Mode, "Mode", "Most frequent value(s) of a sample.", VALUES, |args| {
        Ok(statistics::mode(args.series("values")?)?.into())
    }),
    spec(OperationId::VariancePopulation, "Population variance", "Variance of a whole population.", VALUES, |args| {
        Ok(Scalar(statistics::variance_population(args.series("values")?)?))
    }),
    spec(OperationId::VarianceSample, "Sample variance", "Unbiased variance of a sample.", VALUES, |args| {
        Ok(Scalar(statistics::variance_sample(args.series("values")?)?))
    }),
    spec(
        OperationId::StandardDeviationPopulation,
        "Population standard deviation",
        "Standard deviation of a whole population.",
        VALUES,
        |args| Ok(Scalar(statistics::standard_deviation_population(args.series("values")?)?)),
    ),
    spec(
        OperationId::StandardDeviationSample,
        "Sample standard deviation",
        "Standard deviation of a sample.",
        VALUES,
        |args| Ok(Scalar(statistics::standard_deviation_sample(args.series("values")?)?)),
    ),
    spec(OperationId::RangeValues, "Range", "Largest minus smallest value.", VALUES, |args| {
        Ok(Scalar(statistics::range_values(args.series("values")?)?))
    }),
    spec(OperationId::Quartile1, "First quartile", "First quartile (Q1) of a sample.", VALUES, |args| {
        Ok(Scalar(statistics::quartile_1(args.series("values")?)?))
    }),
    spec(OperationId::Quartile3, "Third quartile", "Third quartile (Q3) of a sample.", VALUES, |args| {
        Ok(Scalar(statistics::quartile_3(args.series("values")?)?))
    }),
    spec(OperationId::InterquartileRange, "Interquartile range", "Q3 minus Q1 of a sample.", VALUES, |args| {
        Ok(Scalar(statistics::interquartile_range(args.series("values")?)?))
    }),
    spec(
        OperationId::CorrelationCoefficient,
        "Correlation coefficient",
        "Pearson correlation of two paired samples.",
        &["x_values", "y_values"],
        |args| {
            Ok(Scalar(statistics::correlation_coefficient(
                args.series("x_values")?,
                args.series("y_values")?,
            )?))
        },
    ),
    spec(
        OperationId::ZScore,
        "Z-score",
        "Standard score of a value within a population.",
        &["value", "population_mean", "population_std"],
        |args| {
            Ok(Scalar(statistics::z_score(
                args.scalar("value")?,
                args.scalar("population_mean")?,
                args.scalar("population_std")?,
            )?))
        },
    ),
    spec(
        OperationId::Percentile,
        "Percentile",
        "Value at a percentile rank between 0 and 100.",
        &["values", "percentile_rank"],
        |args| {
            Ok(Scalar(statistics::percentile(
                args.series("values")?,
                args.scalar("percentile_rank")?,
            )?))
        },
    ),
];

/// Every registry row, in catalog order.
pub fn operation_specs() -> &'static [OperationSpec] {
    &OPERATION_SPECS
}

/// Registry entry for `id`. Total over the catalog.
pub fn spec_for(id: OperationId) -> &'static OperationSpec {
    &OPERATION_SPECS[id.index()]
}

/// Exact parameter names of `id`.
pub fn required_params(id: OperationId) -> &'static [&'static str] {
    spec_for(id).required_params()
}

/// Introspection row for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationInfo {
    pub id: OperationId,
    pub category: Category,
    pub display_name: String,
    pub summary: String,
    pub required_params: Vec<String>,
}

impl From<&OperationSpec> for OperationInfo {
    fn from(spec: &OperationSpec) -> Self {
        Self {
            id: spec.id,
            category: spec.id.category(),
            display_name: spec.display_name.to_string(),
            summary: spec.summary.to_string(),
            required_params: spec.required.iter().map(ToString::to_string).collect(),
        }
    }
}

pub fn operation_info(id: OperationId) -> OperationInfo {
    OperationInfo::from(spec_for(id))
}

/// Every operation with its parameters, in catalog order.
pub fn list_operations() -> Vec<OperationInfo> {
    OPERATION_SPECS.iter().map(OperationInfo::from).collect()
}

pub fn operations_in(category: Category) -> Vec<OperationInfo> {
    OPERATION_SPECS
        .iter()
        .filter(|spec| spec.id.category() == category)
        .map(OperationInfo::from)
        .collect()
}

/// Parameter names required by `operation`, looked up by token.
pub fn parameter_requirements(
    operation: &str,
) -> Result<&'static [&'static str], crate::DispatchError> {
    let id: OperationId =
        operation
            .parse()
            .map_err(|_| crate::DispatchError::UnsupportedOperation {
                operation: operation.trim().to_string(),
            })?;
    Ok(required_params(id))
}

pub fn operation_registry_json() -> Value {
    json!({
        "schema": 1,
        "registryKind": OPERATION_REGISTRY_KIND,
        "operationCount": OperationId::COUNT,
        "operations": list_operations(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn table_rows_align_with_catalog_positions() {
        assert_eq!(OPERATION_SPECS.len(), OperationId::COUNT);
        for (position, id) in OperationId::ALL.iter().enumerate() {
            assert_eq!(
                OPERATION_SPECS[position].id, *id,
                "registry row {position} is not {id}"
            );
            assert_eq!(spec_for(*id).id(), *id);
        }
    }

    #[test]
    fn parameter_sets_are_unique_and_non_empty() {
        for spec in operation_specs() {
            let names: BTreeSet<&str> = spec.required_params().iter().copied().collect();
            assert!(!names.is_empty(), "{} has no parameters", spec.id());
            assert_eq!(
                names.len(),
                spec.required_params().len(),
                "{} declares a parameter twice",
                spec.id()
            );
        }
    }

    #[test]
    fn representative_parameter_sets() {
        assert_eq!(required_params(OperationId::Add), ["a", "b"]);
        assert_eq!(required_params(OperationId::AreaCircle), ["radius"]);
        assert_eq!(
            required_params(OperationId::SlopeLine),
            ["x1", "y1", "x2", "y2"]
        );
        assert_eq!(
            required_params(OperationId::Percentile),
            ["values", "percentile_rank"]
        );
        assert_eq!(
            required_params(OperationId::CorrelationCoefficient),
            ["x_values", "y_values"]
        );
        assert!(spec_for(OperationId::LogCustomBase).requires("base"));
        assert!(!spec_for(OperationId::LogCustomBase).requires("Base"));
    }

    #[test]
    fn listing_follows_catalog_order() {
        let rows = list_operations();
        assert_eq!(rows.len(), OperationId::COUNT);
        let ids: Vec<OperationId> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, OperationId::ALL);
        assert_eq!(rows[0].display_name, "Addition");

        let volumes = operations_in(Category::Volumes);
        assert_eq!(volumes.len(), 10);
        assert!(volumes.iter().all(|row| row.category == Category::Volumes));
    }

    #[test]
    fn parameter_requirements_resolves_tokens() {
        assert_eq!(parameter_requirements("divide"), Ok(&["a", "b"][..]));
        assert_eq!(
            parameter_requirements("integrate"),
            Err(crate::DispatchError::UnsupportedOperation {
                operation: "integrate".to_string()
            })
        );
    }

    #[test]
    fn registry_json_surface_is_deterministic() {
        let first = operation_registry_json();
        let second = operation_registry_json();
        assert_eq!(first, second);
        assert_eq!(
            first.get("registryKind").and_then(Value::as_str),
            Some(OPERATION_REGISTRY_KIND)
        );
        assert_eq!(first["operations"][0]["id"], "add");
        assert_eq!(first["operations"][0]["requiredParams"], json!(["a", "b"]));
        assert_eq!(first["operations"][29]["category"], "geometry");
    }
}
