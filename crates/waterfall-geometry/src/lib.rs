//! Geometry primitives for the waterfall layout engine
//!
//! Sizes, rectangles and edge insets in logical pixels.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Rect, Size};
}
