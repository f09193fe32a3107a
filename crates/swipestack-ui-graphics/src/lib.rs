//! Pure math/data for drawing swipestack cards
//!
//! Geometry primitives and color definitions shared by the input and
//! projection layers.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::Point;
}
