use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Shape, ShapeKind, dimension_or_default};
use crate::number::Plain;

/// A four-sided shape with independent width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RectangleFields")]
pub struct Rectangle {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RectangleFields {
    width: Option<f64>,
    height: Option<f64>,
}

impl From<RectangleFields> for Rectangle {
    fn from(fields: RectangleFields) -> Self {
        Self::new(fields.width, fields.height)
    }
}

impl Rectangle {
    /// Creates a rectangle. Each dimension not supplied defaults to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use figura::{Rectangle, Shape};
    ///
    /// assert_eq!(Rectangle::new(5.0, 6.0).area(), 30.0);
    /// assert_eq!(Rectangle::new(5.0, None).area(), 5.0);
    /// ```
    pub fn new(width: impl Into<Option<f64>>, height: impl Into<Option<f64>>) -> Self {
        Self {
            width: dimension_or_default(ShapeKind::Rectangle, "width", width.into()),
            height: dimension_or_default(ShapeKind::Rectangle, "height", height.into()),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        rectangle_area(self.width, self.height)
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle[width={},height={},area={}]",
            Plain(self.width),
            Plain(self.height),
            Plain(self.area())
        )
    }
}

/// Area of a `width` by `height` rectangle, without constructing one.
///
/// Unlike [`Rectangle::new`], no defaults are applied.
pub fn rectangle_area(width: f64, height: f64) -> f64 {
    width * height
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_area() {
        assert_approx_eq!(f64, Rectangle::new(5.0, 6.0).area(), 30.0);
        assert_approx_eq!(f64, Rectangle::new(2.5, 4.0).area(), 10.0);
        assert_approx_eq!(f64, Rectangle::new(0.0, 7.0).area(), 0.0);
    }

    #[test]
    fn test_defaults_each_dimension_independently() {
        let rect = Rectangle::new(None, None);
        assert_eq!(rect.width(), 1.0);
        assert_eq!(rect.height(), 1.0);
        assert_eq!(rect.area(), 1.0);

        let rect = Rectangle::new(4.0, None);
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 1.0);

        let rect = Rectangle::new(None, 3.0);
        assert_eq!(rect.width(), 1.0);
        assert_eq!(rect.height(), 3.0);

        assert_eq!(Rectangle::default(), Rectangle::new(1.0, 1.0));
    }

    #[test]
    fn test_negative_dimensions_are_not_rejected() {
        let rect = Rectangle::new(-2.0, 3.0);
        assert_approx_eq!(f64, rect.area(), -6.0);
    }

    #[test]
    fn test_helper_does_not_default() {
        assert!(rectangle_area(f64::NAN, 3.0).is_nan());
        assert_approx_eq!(f64, rectangle_area(1.5, 2.0), 3.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Rectangle::new(5.0, 6.0).to_string(),
            "Rectangle[width=5,height=6,area=30]"
        );
        assert_eq!(
            Rectangle::new(1.5, 2.0).to_string(),
            "Rectangle[width=1.5,height=2,area=3]"
        );
        assert_eq!(
            Rectangle::new(None, None).to_string(),
            "Rectangle[width=1,height=1,area=1]"
        );
    }

    #[test]
    fn test_display_extreme_magnitudes() {
        assert_eq!(
            Rectangle::new(1e11, 1e11).to_string(),
            "Rectangle[width=100000000000,height=100000000000,area=1e+22]"
        );
        assert_eq!(
            Rectangle::new(1e-7, 1.0).to_string(),
            "Rectangle[width=1e-7,height=1,area=1e-7]"
        );
    }
}
