//! Figure model with raster and SVG export
//!
//! A [`Layer`](domain::Layer) holds figures (geometry + transform + style)
//! and a background. [`export_raster`] paints it with tiny-skia and encodes
//! by file extension; [`export_vector`] writes SVG text.

pub mod config;
pub mod domain;
pub mod export;
pub mod render;

pub use config::ExportConfig;
pub use export::{export_raster, export_raster_with, export_vector, export_vector_with};
