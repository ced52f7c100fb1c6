//! Pure geometry for the card stack
//!
//! This crate contains the point, size and layer primitives shared by the
//! physics, animation and view crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{GraphicsLayer, Point, Size};
}
