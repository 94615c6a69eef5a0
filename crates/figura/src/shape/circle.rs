use std::{f64::consts::PI, fmt};

use serde::{Deserialize, Serialize};

use super::{CIRCUMFERENCE_DIGITS, RoundShape, Shape, ShapeKind, dimension_or_default};
use crate::number::{Fixed, Plain};

/// A full circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CircleFields")]
pub struct Circle {
    radius: f64,
}

#[derive(Deserialize)]
pub(super) struct CircleFields {
    pub(super) radius: Option<f64>,
}

impl From<CircleFields> for Circle {
    fn from(fields: CircleFields) -> Self {
        Self::new(fields.radius)
    }
}

impl Circle {
    /// Creates a circle, defaulting the radius to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use figura::{Circle, RoundShape};
    ///
    /// let circle = Circle::new(15.0);
    /// assert_eq!(circle.diameter(), 30.0);
    /// assert_eq!(
    ///     circle.to_string(),
    ///     "Circle[radius=15,diameter=30,circumference=94.248]"
    /// );
    /// ```
    pub fn new(radius: impl Into<Option<f64>>) -> Self {
        Self {
            radius: dimension_or_default(ShapeKind::Circle, "radius", radius.into()),
        }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

impl RoundShape for Circle {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle[radius={},diameter={},circumference={}]",
            Plain(self.radius),
            Plain(self.diameter()),
            Fixed::new(self.circumference(), CIRCUMFERENCE_DIGITS)
        )
    }
}
