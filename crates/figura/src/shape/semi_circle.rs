use std::{f64::consts::PI, fmt};

use serde::{Deserialize, Serialize};

use super::{
    CIRCUMFERENCE_DIGITS, Circle, RoundShape, Shape, ShapeKind, circle::CircleFields,
    dimension_or_default,
};
use crate::number::{Fixed, Plain};

/// Half of a circle, cut along a diameter.
///
/// The circumference is the arc plus the straight edge, so it is not half of
/// the full circle's circumference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CircleFields")]
pub struct SemiCircle {
    radius: f64,
}

impl From<CircleFields> for SemiCircle {
    fn from(fields: CircleFields) -> Self {
        Self::new(fields.radius)
    }
}

impl SemiCircle {
    /// Creates a semicircle, defaulting the radius to 1.
    pub fn new(radius: impl Into<Option<f64>>) -> Self {
        Self {
            radius: dimension_or_default(ShapeKind::SemiCircle, "radius", radius.into()),
        }
    }
}

impl Default for SemiCircle {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Shape for SemiCircle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius / 2.0
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::SemiCircle
    }
}

impl RoundShape for SemiCircle {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn circumference(&self) -> f64 {
        PI * self.radius + 2.0 * self.radius
    }
}

impl fmt::Display for SemiCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SemiCircle[radius={},diameter={},circumference={}]",
            Plain(self.radius),
            Plain(self.diameter()),
            Fixed::new(self.circumference(), CIRCUMFERENCE_DIGITS)
        )
    }
}

impl From<SemiCircle> for Circle {
    fn from(semi_circle: SemiCircle) -> Self {
        Circle::new(semi_circle.radius)
    }
}
