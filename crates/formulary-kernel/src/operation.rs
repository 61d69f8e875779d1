//! The operation catalog: a closed set of operation identifiers.
//!
//! Identifiers are grouped by [`Category`] for documentation and listing
//! only; grouping has no effect on dispatch.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Documentation grouping of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Arithmetic,
    Geometry,
    Volumes,
    Trigonometry,
    Logarithms,
    Statistics,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Arithmetic,
        Category::Geometry,
        Category::Volumes,
        Category::Trigonometry,
        Category::Logarithms,
        Category::Statistics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arithmetic => "arithmetic",
            Self::Geometry => "geometry",
            Self::Volumes => "volumes",
            Self::Trigonometry => "trigonometry",
            Self::Logarithms => "logarithms",
            Self::Statistics => "statistics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation token that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

macro_rules! catalog {
    ($( $category:ident { $( $variant:ident => $token:literal ),* $(,)? } )*) => {
        /// Identifier of one supported computation.
        ///
        /// Declaration order is catalog order; the discriminant doubles as the
        /// row index into the registry table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum OperationId {
            $( $( $variant, )* )*
        }

        impl OperationId {
            /// Every identifier, in catalog order.
            pub const ALL: &'static [OperationId] = &[ $( $( OperationId::$variant, )* )* ];

            /// Number of catalog entries.
            pub const COUNT: usize = Self::ALL.len();

            /// Stable snake_case token.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $( Self::$variant => $token, )* )*
                }
            }

            pub fn category(self) -> Category {
                match self {
                    $( $( Self::$variant )|* => Category::$category, )*
                }
            }
        }
    };
}

catalog! {
    Arithmetic {
        Add => "add",
        Subtract => "subtract",
        Multiply => "multiply",
        Divide => "divide",
        Modulo => "modulo",
        FloorDivide => "floor_divide",
        Power => "power",
        SquareRoot => "square_root",
        CubeRoot => "cube_root",
        NthRoot => "nth_root",
        Square => "square",
        Cube => "cube",
        AbsoluteValue => "absolute_value",
        Sign => "sign",
        Ceiling => "ceiling",
        Floor => "floor",
        RoundToDecimals => "round_to_decimals",
        Factorial => "factorial",
        Combination => "combination",
        Permutation => "permutation",
        Gcd => "gcd",
        Lcm => "lcm",
        IsPrime => "is_prime",
        Fibonacci => "fibonacci",
        ArithmeticMean => "arithmetic_mean",
        GeometricMean => "geometric_mean",
        HarmonicMean => "harmonic_mean",
        Percentage => "percentage",
        PercentageChange => "percentage_change",
    }
    Geometry {
        AreaCircle => "area_circle",
        AreaRectangle => "area_rectangle",
        AreaSquare => "area_square",
        AreaTriangle => "area_triangle",
        AreaTriangleHeron => "area_triangle_heron",
        AreaRhombus => "area_rhombus",
        AreaTrapezoid => "area_trapezoid",
        AreaRegularPolygon => "area_regular_polygon",
        AreaEllipse => "area_ellipse",
        AreaSector => "area_sector",
        AreaAnnulus => "area_annulus",
        CircumferenceCircle => "circumference_circle",
        PerimeterRectangle => "perimeter_rectangle",
        PerimeterSquare => "perimeter_square",
        PerimeterTriangle => "perimeter_triangle",
        PerimeterRegularPolygon => "perimeter_regular_polygon",
        PerimeterEllipse => "perimeter_ellipse",
        Distance2d => "distance_2d",
        Distance3d => "distance_3d",
        Midpoint2d => "midpoint_2d",
        SlopeLine => "slope_line",
        AngleBetweenVectors => "angle_between_vectors",
    }
    Volumes {
        VolumeCube => "volume_cube",
        VolumeRectangularPrism => "volume_rectangular_prism",
        VolumeSphere => "volume_sphere",
        VolumeCylinder => "volume_cylinder",
        VolumeCone => "volume_cone",
        VolumePyramid => "volume_pyramid",
        VolumeEllipsoid => "volume_ellipsoid",
        SurfaceAreaSphere => "surface_area_sphere",
        SurfaceAreaCylinder => "surface_area_cylinder",
        SurfaceAreaCone => "surface_area_cone",
    }
    Trigonometry {
        SinDegrees => "sin_degrees",
        CosDegrees => "cos_degrees",
        TanDegrees => "tan_degrees",
        SinRadians => "sin_radians",
        CosRadians => "cos_radians",
        TanRadians => "tan_radians",
        AsinDegrees => "asin_degrees",
        AcosDegrees => "acos_degrees",
        AtanDegrees => "atan_degrees",
        AsinRadians => "asin_radians",
        AcosRadians => "acos_radians",
        AtanRadians => "atan_radians",
        Atan2Degrees => "atan2_degrees",
        Atan2Radians => "atan2_radians",
        SecDegrees => "sec_degrees",
        CscDegrees => "csc_degrees",
        CotDegrees => "cot_degrees",
        DegreesToRadians => "degrees_to_radians",
        RadiansToDegrees => "radians_to_degrees",
    }
    Logarithms {
        NaturalLog => "natural_log",
        LogBase10 => "log_base_10",
        LogBase2 => "log_base_2",
        LogCustomBase => "log_custom_base",
        ExponentialE => "exponential_e",
        ExponentialBase10 => "exponential_base_10",
        ExponentialBase2 => "exponential_base_2",
        ExponentialCustomBase => "exponential_custom_base",
        Sinh => "sinh",
        Cosh => "cosh",
        Tanh => "tanh",
        Asinh => "asinh",
        Acosh => "acosh",
        Atanh => "atanh",
    }
    Statistics {
        Mean => "mean",
        Median => "median",
        Mode => "mode",
        VariancePopulation => "variance_population",
        VarianceSample => "variance_sample",
        StandardDeviationPopulation => "standard_deviation_population",
        StandardDeviationSample => "standard_deviation_sample",
        RangeValues => "range_values",
        Quartile1 => "quartile_1",
        Quartile3 => "quartile_3",
        InterquartileRange => "interquartile_range",
        CorrelationCoefficient => "correlation_coefficient",
        ZScore => "z_score",
        Percentile => "percentile",
    }
}

impl OperationId {
    /// Row index of this identifier in catalog order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationId {
    type Err = UnknownOperation;

    /// Tokens match ASCII case-insensitively, so `AREA_CIRCLE` and
    /// `area_circle` name the same operation.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let token = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownOperation(token.to_string()))
    }
}

impl Serialize for OperationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OperationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
