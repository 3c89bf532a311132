//! Raster export: size the canvas, paint the layer, encode by file extension

use std::fs::File;
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};

use super::normalize::normalize;
use crate::config::ExportConfig;
use crate::domain::Layer;
use crate::render::{Renderer, ShapeRenderer, Surface};

/// Output encodings, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
    /// Metafile request; written as PNG since there is no metafile encoder
    Emf,
    Gif,
    Icon,
    Tiff,
    /// Fallback for any other or missing extension
    Bmp,
}

impl RasterFormat {
    /// Pick the format for `path`, case-insensitively, falling back to BMP
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("png") => RasterFormat::Png,
            Some("jpg") => RasterFormat::Jpeg,
            Some("emf") => RasterFormat::Emf,
            Some("gif") => RasterFormat::Gif,
            Some("ico") => RasterFormat::Icon,
            Some("tif") => RasterFormat::Tiff,
            _ => RasterFormat::Bmp,
        }
    }
}

/// Paint `layer` onto a freshly sized canvas
pub fn render_layer(layer: &Layer, config: &ExportConfig) -> Result<RgbaImage> {
    let normalized = normalize(layer);
    let mut surface = Surface::new(normalized.width, normalized.height)?;
    {
        let mut ctx = surface.context(layer.visible_background(), config.anti_alias);
        ShapeRenderer.render(&mut ctx, (&normalized.group).into());
    }
    surface.to_rgba_image()
}

/// Export `layer` as an image with default settings
pub fn export_raster(path: impl AsRef<Path>, layer: &Layer) -> Result<()> {
    export_raster_with(path, layer, &ExportConfig::default())
}

/// Export `layer` as an image, the format following the file extension
pub fn export_raster_with(
    path: impl AsRef<Path>,
    layer: &Layer,
    config: &ExportConfig,
) -> Result<()> {
    let path = path.as_ref();
    let format = RasterFormat::from_path(path);
    let image = render_layer(layer, config)?;
    log::debug!(
        "Writing {}x{} {:?} image to {}",
        image.width(),
        image.height(),
        format,
        path.display()
    );

    let file = File::create(path)
        .with_context(|| format!("Failed to create image file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, &image, format, config)
        .with_context(|| format!("Failed to encode image: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write image file: {}", path.display()))?;
    Ok(())
}

/// Encode `image` in `format` into `w`
pub fn encode<W: Write + Seek>(
    w: &mut W,
    image: &RgbaImage,
    format: RasterFormat,
    config: &ExportConfig,
) -> Result<()> {
    match format {
        RasterFormat::Png | RasterFormat::Emf => write_png(w, image)?,
        RasterFormat::Jpeg => {
            // No alpha channel in JPEG
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            let mut encoder = JpegEncoder::new_with_quality(w, config.jpeg_quality());
            encoder.encode_image(&rgb)?;
        }
        RasterFormat::Gif => image.write_to(w, ImageFormat::Gif)?,
        RasterFormat::Icon => image.write_to(w, ImageFormat::Ico)?,
        RasterFormat::Tiff => image.write_to(w, ImageFormat::Tiff)?,
        RasterFormat::Bmp => image.write_to(w, ImageFormat::Bmp)?,
    }
    Ok(())
}

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BorderStyle, Color, Figure, FillStyle, Geometry, Rect, Style};

    fn red_square_layer(background: Option<FillStyle>) -> Layer {
        let style = Style::new(
            Some(FillStyle::solid(Color::RED)),
            Some(BorderStyle::default().hidden()),
        );
        Layer::new(background).with(
            Figure::new(Geometry::Rectangle(Rect::from_xywh(0.0, 0.0, 10.0, 10.0)))
                .with_style(style),
        )
    }

    #[test]
    fn test_format_from_extension() {
        let cases = [
            ("a.png", RasterFormat::Png),
            ("a.jpg", RasterFormat::Jpeg),
            ("a.emf", RasterFormat::Emf),
            ("a.gif", RasterFormat::Gif),
            ("a.ico", RasterFormat::Icon),
            ("a.tif", RasterFormat::Tiff),
            ("a.PNG", RasterFormat::Png),
            ("a.jpeg", RasterFormat::Bmp),
            ("a.bmp", RasterFormat::Bmp),
            ("noextension", RasterFormat::Bmp),
        ];
        for (name, expected) in cases {
            assert_eq!(RasterFormat::from_path(Path::new(name)), expected, "{}", name);
        }
    }

    #[test]
    fn test_hidden_background_shifts_shape_into_margin() {
        let image = render_layer(&red_square_layer(None), &ExportConfig::default()).unwrap();
        assert_eq!(image.dimensions(), (12, 12));
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(10, 10).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(11, 11).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_visible_background_is_painted_under_shapes() {
        let mut layer = red_square_layer(Some(FillStyle::solid(Color::WHITE)));
        if let Some(crate::domain::Drawable::Figure(figure)) = layer.figures.first_mut() {
            figure.transform.translate(5.0, 3.0);
        }
        let image = render_layer(&layer, &ExportConfig::default()).unwrap();
        assert_eq!(image.dimensions(), (20, 16));
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(5, 3).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(16, 14).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_export_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        export_raster(&path, &red_square_layer(None)).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (12, 12));
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(5, 5).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(10, 10).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(11, 11).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_every_format_decodes_with_canvas_size() {
        let dir = tempfile::tempdir().unwrap();
        let layer = red_square_layer(Some(FillStyle::solid(Color::WHITE)));
        for name in ["out.jpg", "out.gif", "out.ico", "out.tif", "out.bmp"] {
            let path = dir.path().join(name);
            export_raster(&path, &layer).unwrap();
            let decoded = image::open(&path).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (10, 10), "{}", name);
        }
    }

    #[test]
    fn test_emf_and_unknown_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let layer = red_square_layer(None);

        let emf = dir.path().join("out.emf");
        export_raster(&emf, &layer).unwrap();
        let bytes = std::fs::read(&emf).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));

        let other = dir.path().join("out.xyz");
        export_raster(&other, &layer).unwrap();
        let bytes = std::fs::read(&other).unwrap();
        assert!(bytes.starts_with(b"BM"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let layer = red_square_layer(None);
        let path = dir.path().join("out.png");
        export_raster(&path, &layer).unwrap();
        let first = std::fs::read(&path).unwrap();
        export_raster(&path, &layer).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = export_raster(&path, &red_square_layer(None)).unwrap_err();
        assert!(err.root_cause().downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn test_empty_layer_exports_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let layer = Layer::new(Some(FillStyle::solid(Color::WHITE)));
        let path = dir.path().join("empty.png");
        export_raster(&path, &layer).unwrap();
        assert!(path.exists());
    }
}
