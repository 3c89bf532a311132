//! Figure rendering module
//!
//! This module contains:
//! - Conversions from domain geometry to tiny-skia paths and strokes
//! - The pixel surface and its scoped drawing context
//! - The renderer that paints figures and groups

pub mod geometry;
pub mod renderer;
pub mod surface;

pub use renderer::{Renderable, Renderer, ShapeRenderer};
pub use surface::{DrawingContext, Surface};
