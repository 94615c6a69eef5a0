//! Figura - plane shapes with area, circumference and a stable string form.
//!
//! This crate provides a small, closed set of immutable shape values:
//!
//! - **Capability**: [`Shape`] (area and string form) and [`RoundShape`]
//!   (radius, diameter, circumference)
//! - **Variants**: [`Rectangle`], [`Square`], [`Triangle`], [`Circle`] and
//!   [`SemiCircle`]
//! - **Sum type**: [`Figure`], any one of the variants, with [`ShapeKind`]
//!   naming them
//! - **Helpers**: [`rectangle_area`], [`square_area`] and [`triangle_area`]
//!   compute areas without constructing a shape
//!
//! Constructors accept optional dimensions; any dimension not supplied is
//! replaced by [`DEFAULT_DIMENSION`].
//!
//! ```
//! use figura::{Rectangle, Shape, Triangle};
//!
//! let rect = Rectangle::new(5.0, 6.0);
//! assert_eq!(rect.to_string(), "Rectangle[width=5,height=6,area=30]");
//!
//! let unit = Rectangle::new(None, None);
//! assert_eq!(unit.area(), 1.0);
//!
//! assert_eq!(Triangle::new(15.0, 20.0).area(), 150.0);
//! ```

mod error;
mod number;
pub mod shape;

pub use error::ShapeError;
pub use shape::{
    Circle, DEFAULT_DIMENSION, Figure, Rectangle, RoundShape, SemiCircle, Shape, ShapeKind,
    Square, Triangle, rectangle_area, square_area, triangle_area,
};
