use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Rectangle, Shape, ShapeKind, dimension_or_default};
use crate::number::Plain;

/// A rectangle whose sides are all the same length.
///
/// Only the side length is stored. It serves as both width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SquareFields")]
pub struct Square {
    width: f64,
}

#[derive(Deserialize)]
struct SquareFields {
    width: Option<f64>,
}

impl From<SquareFields> for Square {
    fn from(fields: SquareFields) -> Self {
        Self::new(fields.width)
    }
}

impl Square {
    /// Creates a square with sides of length `width`, defaulting to 1.
    pub fn new(width: impl Into<Option<f64>>) -> Self {
        Self {
            width: dimension_or_default(ShapeKind::Square, "width", width.into()),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Same as [`width`](Self::width).
    pub fn height(&self) -> f64 {
        self.width
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.width * self.width
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Square[width={},area={}]",
            Plain(self.width),
            Plain(self.area())
        )
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        Rectangle::new(square.width, square.width)
    }
}

/// Area of a square with sides of length `side`, without constructing one.
pub fn square_area(side: f64) -> f64 {
    side * side
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_area() {
        assert_approx_eq!(f64, Square::new(9.0).area(), 81.0);
        assert_approx_eq!(f64, Square::new(0.5).area(), 0.25);
        assert_approx_eq!(f64, Square::new(-3.0).area(), 9.0);
    }

    #[test]
    fn test_default_applies_to_both_sides() {
        let square = Square::new(None);
        assert_eq!(square.width(), 1.0);
        assert_eq!(square.height(), 1.0);
        assert_eq!(square.area(), 1.0);
        assert_eq!(Square::default(), square);
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(9.0).to_string(), "Square[width=9,area=81]");
        assert_eq!(Square::new(5.0).to_string(), "Square[width=5,area=25]");
        assert_eq!(Square::new(1.5).to_string(), "Square[width=1.5,area=2.25]");
    }

    #[test]
    fn test_into_rectangle() {
        let rect = Rectangle::from(Square::new(4.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 4.0);
        assert_eq!(rect.to_string(), "Rectangle[width=4,height=4,area=16]");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn side_strategy() -> impl Strategy<Value = f64> {
        -1000.0f64..1000.0
    }

    /// The instance, the helper and the equal-sided rectangle all agree.
    fn check_area_matches_equal_sided_rectangle(side: f64) -> Result<(), TestCaseError> {
        let square = Square::new(side);
        prop_assert_eq!(square.area(), side * side);
        prop_assert_eq!(square.area(), square_area(side));
        prop_assert_eq!(square.area(), Rectangle::new(side, side).area());
        prop_assert_eq!(square.area(), Rectangle::from(square).area());
        Ok(())
    }

    proptest! {
        #[test]
        fn area_matches_equal_sided_rectangle(side in side_strategy()) {
            check_area_matches_equal_sided_rectangle(side)?;
        }
    }
}
