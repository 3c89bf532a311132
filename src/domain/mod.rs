//! Pure domain types with minimal dependencies
//!
//! This module contains the figure model: geometry, transforms, styles,
//! figures, groups and layers. Types here have no rasterizer or encoder
//! dependencies so both exporters can share them.

pub mod figure;
pub mod geometry;
pub mod layer;
pub mod style;
pub mod transform;

pub use figure::*;
pub use geometry::*;
pub use layer::*;
pub use style::*;
pub use transform::*;
