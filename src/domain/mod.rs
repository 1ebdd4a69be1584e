//! Domain types: geometry and selection tracking

pub mod geometry;
pub mod selection;

pub use geometry::{Point, Rect};
pub use selection::Selection;
