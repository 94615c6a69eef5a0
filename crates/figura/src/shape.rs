//! The shape capability and its variants.
//!
//! Every shape implements [`Shape`], which provides the area and, through its
//! [`Display`](fmt::Display) supertrait, the documented string form. Shapes
//! defined by a radius also implement [`RoundShape`].
//!
//! [`Figure`] is the closed sum of all variants, for callers that hold shapes
//! of mixed kinds or build them from a [`ShapeKind`] at runtime.
//!
//! # Example
//!
//! ```
//! use figura::{Circle, Figure, RoundShape, Shape, Square};
//!
//! let square = Square::new(9.0);
//! assert_eq!(square.area(), 81.0);
//! assert_eq!(square.to_string(), "Square[width=9,area=81]");
//!
//! let circle = Circle::new(15.0);
//! assert_eq!(circle.diameter(), 30.0);
//!
//! let figures: Vec<Figure> = vec![square.into(), circle.into()];
//! let total: f64 = figures.iter().map(Shape::area).sum();
//! assert!(total > 81.0);
//! ```

use std::{fmt, str::FromStr};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

mod circle;
mod rectangle;
mod semi_circle;
mod square;
mod triangle;

pub use circle::Circle;
pub use rectangle::{Rectangle, rectangle_area};
pub use semi_circle::SemiCircle;
pub use square::{Square, square_area};
pub use triangle::{Triangle, triangle_area};

/// Value substituted for any dimension that is not supplied at construction.
pub const DEFAULT_DIMENSION: f64 = 1.0;

/// Fractional digits used when rendering a circumference.
const CIRCUMFERENCE_DIGITS: usize = 3;

/// The capability shared by every shape.
///
/// The string form is provided by [`fmt::Display`]. It names the shape and its
/// defining attributes, e.g. `Rectangle[width=5,height=6,area=30]`.
pub trait Shape: fmt::Display + fmt::Debug {
    /// Returns the area enclosed by the shape.
    ///
    /// No validation is applied to the stored dimensions, so negative or NaN
    /// dimensions produce a negative or NaN area.
    fn area(&self) -> f64;

    /// Returns which variant this shape is.
    fn kind(&self) -> ShapeKind;
}

/// A shape defined by a single radius.
pub trait RoundShape: Shape {
    /// Returns the radius.
    fn radius(&self) -> f64;

    /// Returns the diameter, twice the radius.
    fn diameter(&self) -> f64 {
        2.0 * self.radius()
    }

    /// Returns the length of the shape's perimeter.
    fn circumference(&self) -> f64;
}

/// Names the shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Square,
    Triangle,
    Circle,
    SemiCircle,
}

impl ShapeKind {
    /// All variants, in declaration order.
    pub const ALL: [ShapeKind; 5] = [
        Self::Rectangle,
        Self::Square,
        Self::Triangle,
        Self::Circle,
        Self::SemiCircle,
    ];

    /// Returns the name used in the shape's string form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Square => "Square",
            Self::Triangle => "Triangle",
            Self::Circle => "Circle",
            Self::SemiCircle => "SemiCircle",
        }
    }

    /// Returns how many dimensions the variant's constructor takes.
    pub fn dimension_count(self) -> usize {
        match self {
            Self::Rectangle | Self::Triangle => 2,
            Self::Square | Self::Circle | Self::SemiCircle => 1,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Parses a kind from its display name or snake_case form, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rectangle" => Ok(Self::Rectangle),
            "square" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            "circle" => Ok(Self::Circle),
            "semicircle" | "semi_circle" | "semi-circle" => Ok(Self::SemiCircle),
            _ => Err(ShapeError::unknown_kind(s)),
        }
    }
}

/// Any one of the shape variants.
///
/// Serialized with an internal `kind` tag, e.g. `{ kind = "square", width = 3 }`.
/// Missing or null dimensions deserialize to [`DEFAULT_DIMENSION`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
    Circle(Circle),
    SemiCircle(SemiCircle),
}

impl Figure {
    /// Builds a figure of the given kind from positional dimensions.
    ///
    /// Rectangles take `[width, height]`, triangles take `[base, height]`,
    /// squares take `[width]` and circles and semicircles take `[radius]`.
    /// A `None` dimension is defaulted exactly as the typed constructors do.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::DimensionCount`] if `dimensions` does not hold
    /// exactly [`ShapeKind::dimension_count`] entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use figura::{Figure, Shape, ShapeKind};
    ///
    /// let figure = Figure::from_dimensions(ShapeKind::Rectangle, &[Some(5.0), None]).unwrap();
    /// assert_eq!(figure.area(), 5.0);
    ///
    /// assert!(Figure::from_dimensions(ShapeKind::Circle, &[]).is_err());
    /// ```
    pub fn from_dimensions(
        kind: ShapeKind,
        dimensions: &[Option<f64>],
    ) -> Result<Self, ShapeError> {
        let expected = kind.dimension_count();
        if dimensions.len() != expected {
            return Err(ShapeError::DimensionCount {
                kind,
                expected,
                found: dimensions.len(),
            });
        }

        let figure: Self = match kind {
            ShapeKind::Rectangle => Rectangle::new(dimensions[0], dimensions[1]).into(),
            ShapeKind::Square => Square::new(dimensions[0]).into(),
            ShapeKind::Triangle => Triangle::new(dimensions[0], dimensions[1]).into(),
            ShapeKind::Circle => Circle::new(dimensions[0]).into(),
            ShapeKind::SemiCircle => SemiCircle::new(dimensions[0]).into(),
        };

        debug!(figure:?; "Figure built from dimensions");
        Ok(figure)
    }

    /// Returns the radius-based view of this figure, if it has one.
    pub fn as_round(&self) -> Option<&dyn RoundShape> {
        match self {
            Self::Circle(circle) => Some(circle),
            Self::SemiCircle(semi_circle) => Some(semi_circle),
            Self::Rectangle(_) | Self::Square(_) | Self::Triangle(_) => None,
        }
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            Self::Rectangle(rectangle) => rectangle,
            Self::Square(square) => square,
            Self::Triangle(triangle) => triangle,
            Self::Circle(circle) => circle,
            Self::SemiCircle(semi_circle) => semi_circle,
        }
    }
}

impl Shape for Figure {
    fn area(&self) -> f64 {
        self.as_shape().area()
    }

    fn kind(&self) -> ShapeKind {
        self.as_shape().kind()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_shape(), f)
    }
}

impl From<Rectangle> for Figure {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Square> for Figure {
    fn from(square: Square) -> Self {
        Self::Square(square)
    }
}

impl From<Triangle> for Figure {
    fn from(triangle: Triangle) -> Self {
        Self::Triangle(triangle)
    }
}

impl From<Circle> for Figure {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<SemiCircle> for Figure {
    fn from(semi_circle: SemiCircle) -> Self {
        Self::SemiCircle(semi_circle)
    }
}

/// Resolves an optional constructor argument, substituting [`DEFAULT_DIMENSION`].
fn dimension_or_default(kind: ShapeKind, dimension: &'static str, value: Option<f64>) -> f64 {
    value.unwrap_or_else(|| {
        trace!(kind:?, dimension; "Dimension not supplied, using default");
        DEFAULT_DIMENSION
    })
}
