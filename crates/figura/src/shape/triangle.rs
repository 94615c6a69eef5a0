use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Shape, ShapeKind, dimension_or_default};
use crate::number::Plain;

/// A triangle described by its base and perpendicular height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "TriangleFields")]
pub struct Triangle {
    base: f64,
    height: f64,
}

#[derive(Deserialize)]
struct TriangleFields {
    base: Option<f64>,
    height: Option<f64>,
}

impl From<TriangleFields> for Triangle {
    fn from(fields: TriangleFields) -> Self {
        Self::new(fields.base, fields.height)
    }
}

impl Triangle {
    /// Creates a triangle. Each dimension not supplied defaults to 1.
    pub fn new(base: impl Into<Option<f64>>, height: impl Into<Option<f64>>) -> Self {
        Self {
            base: dimension_or_default(ShapeKind::Triangle, "base", base.into()),
            height: dimension_or_default(ShapeKind::Triangle, "height", height.into()),
        }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        triangle_area(self.base, self.height)
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle[base={},height={}]",
            Plain(self.base),
            Plain(self.height)
        )
    }
}

/// Area of a triangle with the given base and height, without constructing one.
///
/// No defaults are applied.
pub fn triangle_area(base: f64, height: f64) -> f64 {
    0.5 * base * height
}
