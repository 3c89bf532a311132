//! Canvas sizing for raster export
//!
//! Works on a borrowed group view so the layer itself is never moved.

use crate::domain::{GroupFigure, Layer, Rect};

/// Canvas size and the group to paint onto it
#[derive(Clone, Copy, Debug)]
pub struct Normalized<'a> {
    pub group: GroupFigure<'a>,
    /// Aggregate world bounds of the layer before any shift
    pub bounds: Rect,
    pub width: u32,
    pub height: u32,
}

/// Size the canvas for `layer` and position its content.
///
/// With a visible background the canvas is `left*2 + width` by
/// `top*2 + height`, mirroring the content's offset from the origin as a far
/// margin, and nothing is moved. Without one the canvas is the content size
/// plus one unit on each side and the group is shifted by
/// `(1 - left, 1 - top)` so content starts one unit in from the origin.
/// Sizes truncate toward zero; negative results clamp to zero.
pub fn normalize(layer: &Layer) -> Normalized<'_> {
    let mut group = layer.group();
    let bounds = group.bounds();

    let (width, height) = if layer.visible_background().is_some() {
        (
            (bounds.left * 2.0 + bounds.width()) as u32,
            (bounds.top * 2.0 + bounds.height()) as u32,
        )
    } else {
        group.transform.translate(1.0 - bounds.left, 1.0 - bounds.top);
        (
            (bounds.width() + 2.0) as u32,
            (bounds.height() + 2.0) as u32,
        )
    };

    log::debug!(
        "Normalized layer bounds ({}, {}, {}x{}) to {}x{} canvas",
        bounds.left,
        bounds.top,
        bounds.width(),
        bounds.height(),
        width,
        height
    );

    Normalized {
        group,
        bounds,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Color, Figure, FillStyle, Geometry, Transform};

    fn rect_layer(x: f32, y: f32, w: f32, h: f32, background: Option<FillStyle>) -> Layer {
        Layer::new(background).with(Figure::new(Geometry::Rectangle(Rect::from_xywh(x, y, w, h))))
    }

    #[test]
    fn test_visible_background_mirrors_offset() {
        let layer = rect_layer(5.0, 3.0, 20.0, 10.0, Some(FillStyle::solid(Color::WHITE)));
        let normalized = normalize(&layer);
        assert_eq!((normalized.width, normalized.height), (30, 16));
        assert!(normalized.group.transform.is_identity());
    }

    #[test]
    fn test_visible_background_formula_holds_across_offsets() {
        for (left, top, w, h) in [(0.0, 0.0, 7.0, 3.0), (12.0, 1.0, 1.0, 40.0), (3.0, 9.0, 0.0, 0.0)] {
            let layer = rect_layer(left, top, w, h, Some(FillStyle::solid(Color::WHITE)));
            let normalized = normalize(&layer);
            assert_eq!(normalized.width, (left * 2.0 + w) as u32);
            assert_eq!(normalized.height, (top * 2.0 + h) as u32);
        }
    }

    #[test]
    fn test_hidden_background_adds_margin_and_shifts() {
        let layer = rect_layer(5.0, 3.0, 20.0, 10.0, Some(FillStyle::solid(Color::WHITE).hidden()));
        let normalized = normalize(&layer);
        assert_eq!((normalized.width, normalized.height), (22, 12));
        assert_eq!(normalized.group.transform, Transform::translation(-4.0, -2.0));
        assert_eq!(normalized.group.bounds(), Rect::new(1.0, 1.0, 21.0, 11.0));
    }

    #[test]
    fn test_missing_background_behaves_like_hidden() {
        let layer = rect_layer(0.0, 0.0, 10.0, 10.0, None);
        let normalized = normalize(&layer);
        assert_eq!((normalized.width, normalized.height), (12, 12));
    }

    #[test]
    fn test_layer_figures_are_not_moved() {
        let layer = rect_layer(5.0, 3.0, 20.0, 10.0, None);
        let before = layer.clone();
        let _ = normalize(&layer);
        assert_eq!(layer, before);
    }

    #[test]
    fn test_empty_layer_with_background_is_zero_sized() {
        let layer = Layer::new(Some(FillStyle::solid(Color::WHITE)));
        let normalized = normalize(&layer);
        assert_eq!((normalized.width, normalized.height), (0, 0));
    }
}
