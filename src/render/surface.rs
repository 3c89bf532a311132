//! Pixel surface and the scoped drawing context over it

use anyhow::{Context, Result};
use image::RgbaImage;
use tiny_skia::{
    FillRule, GradientStop, LinearGradient, Paint, Pixmap, SpreadMode, Transform,
};

use super::geometry::{gradient_line, skia_stroke};
use crate::domain::{BorderStyle, FillStyle, Rect};

/// An owned RGBA pixel buffer
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Allocate a transparent surface.
    ///
    /// A pixel buffer cannot be empty, so each side is at least one pixel.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (w, h) = (width.max(1), height.max(1));
        let pixmap = Pixmap::new(w, h)
            .with_context(|| format!("Failed to allocate {}x{} surface", w, h))?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Borrow the surface for drawing. The context lives until the end of the
    /// caller's scope; the surface is usable again once it is dropped.
    pub fn context(
        &mut self,
        background: Option<&FillStyle>,
        anti_alias: bool,
    ) -> DrawingContext<'_> {
        log::trace!(
            "Acquired drawing context on {}x{} surface",
            self.width(),
            self.height()
        );
        DrawingContext {
            pixmap: &mut self.pixmap,
            background: background.filter(|f| f.visible).cloned(),
            anti_alias,
        }
    }

    /// Copy the pixels out as straight (non-premultiplied) RGBA
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let mut raw = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            raw.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(self.width(), self.height(), raw)
            .context("Surface size does not match its pixel data")
    }
}

/// Drawing state borrowed from a [`Surface`]
pub struct DrawingContext<'a> {
    pixmap: &'a mut Pixmap,
    background: Option<FillStyle>,
    anti_alias: bool,
}

impl DrawingContext<'_> {
    /// Replace every pixel with the background color at its opacity, if the
    /// background is visible
    pub fn clear_background(&mut self) {
        let Some(background) = &self.background else {
            return;
        };
        let [r, g, b, a] = background.color.to_rgba_u8(background.opacity);
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    /// Fill an outline; `bounds` orients gradient fills
    pub fn fill_path(&mut self, path: &tiny_skia::Path, fill: &FillStyle, bounds: Rect) {
        let [r, g, b, a] = fill.color.to_rgba_u8(fill.opacity);

        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = self.anti_alias;

        if let Some(gradient) = &fill.gradient {
            let (start, end) = gradient_line(bounds, gradient.angle);
            let [r2, g2, b2, a2] = gradient.color.to_rgba_u8(fill.opacity);
            // Falls back to the solid color when the line is degenerate
            if let Some(shader) = LinearGradient::new(
                tiny_skia::Point::from_xy(start.x, start.y),
                tiny_skia::Point::from_xy(end.x, end.y),
                vec![
                    GradientStop::new(0.0, tiny_skia::Color::from_rgba8(r, g, b, a)),
                    GradientStop::new(1.0, tiny_skia::Color::from_rgba8(r2, g2, b2, a2)),
                ],
                SpreadMode::Pad,
                Transform::identity(),
            ) {
                paint.shader = shader;
            }
        }

        self.pixmap
            .fill_path(path, &paint, FillRule::EvenOdd, Transform::identity(), None);
    }

    /// Stroke an outline with the border's width and dash pattern
    pub fn stroke_path(&mut self, path: &tiny_skia::Path, border: &BorderStyle) {
        let [r, g, b, a] = border.color.to_rgba_u8(255);

        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = self.anti_alias;

        let stroke = skia_stroke(border);
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }
}

impl Drop for DrawingContext<'_> {
    fn drop(&mut self) {
        log::trace!("Released drawing context");
    }
}
