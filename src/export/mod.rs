//! Layer export
//!
//! Two independent serializers over a borrowed [`Layer`](crate::domain::Layer):
//! - raster images, format chosen by file extension
//! - SVG markup on a fixed canvas

pub mod markup;
pub mod named_color;
pub mod normalize;
pub mod raster;

pub use markup::{export_vector, export_vector_with, to_markup};
pub use named_color::{color_to_hex, named_color};
pub use normalize::{Normalized, normalize};
pub use raster::{RasterFormat, export_raster, export_raster_with, render_layer};
