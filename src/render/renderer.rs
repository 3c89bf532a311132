//! Renderer: paints figures and groups onto a drawing context

use super::geometry::skia_path;
use super::surface::DrawingContext;
use crate::domain::{Drawable, Figure, GroupFigure, Transform};

/// Something the renderer accepts as a single entry point
#[derive(Clone, Copy, Debug)]
pub enum Renderable<'a> {
    Drawable(&'a Drawable),
    Group(GroupFigure<'a>),
}

impl<'a> From<&'a Drawable> for Renderable<'a> {
    fn from(drawable: &'a Drawable) -> Self {
        Renderable::Drawable(drawable)
    }
}

impl<'a> From<&GroupFigure<'a>> for Renderable<'a> {
    fn from(group: &GroupFigure<'a>) -> Self {
        Renderable::Group(*group)
    }
}

/// Paints items onto a drawing context
pub trait Renderer {
    /// Clear to the context's background (if visible), then paint `item`
    fn render(&self, ctx: &mut DrawingContext<'_>, item: Renderable<'_>);
}

/// Stateless renderer shared by every figure
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeRenderer;

impl Renderer for ShapeRenderer {
    fn render(&self, ctx: &mut DrawingContext<'_>, item: Renderable<'_>) {
        ctx.clear_background();
        let identity = Transform::identity();
        match item {
            Renderable::Drawable(drawable) => paint_drawable(ctx, drawable, &identity),
            Renderable::Group(group) => paint_members(ctx, group.members(), &group.transform),
        }
    }
}

/// Paint members in order so later ones cover earlier ones
fn paint_members(ctx: &mut DrawingContext<'_>, members: &[Drawable], parent: &Transform) {
    for member in members {
        paint_drawable(ctx, member, parent);
    }
}

fn paint_drawable(ctx: &mut DrawingContext<'_>, drawable: &Drawable, parent: &Transform) {
    match drawable {
        Drawable::Figure(figure) => paint_figure(ctx, figure, parent),
        Drawable::Group(group) => {
            let transform = group.transform.then(parent);
            paint_members(ctx, &group.members, &transform);
        }
    }
}

fn paint_figure(ctx: &mut DrawingContext<'_>, figure: &Figure, parent: &Transform) {
    let path = parent.apply_path(&figure.transformed_path());
    let Some(outline) = skia_path(&path) else {
        log::trace!("Skipping degenerate {} outline", figure.geometry.name());
        return;
    };

    if let Some(fill) = figure.style.visible_fill() {
        ctx.fill_path(&outline, fill, path.bounds());
    }
    if let Some(border) = figure.style.visible_border() {
        ctx.stroke_path(&outline, border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BorderStyle, Color, FillStyle, Geometry, Group, LinearGradient, Point, Rect, Style,
    };
    use crate::render::Surface;

    fn filled_rect(x: f32, y: f32, w: f32, h: f32, color: Color) -> Figure {
        Figure::new(Geometry::Rectangle(Rect::from_xywh(x, y, w, h)))
            .with_style(Style::new(Some(FillStyle::solid(color)), None))
    }

    fn pixel(surface: &Surface, x: u32, y: u32) -> [u8; 4] {
        surface.to_rgba_image().unwrap().get_pixel(x, y).0
    }

    #[test]
    fn test_fill_paints_inside_transformed_outline() {
        let figure = filled_rect(0.0, 0.0, 4.0, 4.0, Color::RED)
            .with_transform(Transform::translation(4.0, 4.0));
        let mut surface = Surface::new(10, 10).unwrap();
        {
            let mut ctx = surface.context(None, false);
            ShapeRenderer.render(&mut ctx, (&Drawable::from(figure)).into());
        }
        assert_eq!(pixel(&surface, 5, 5), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 1, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_later_members_paint_over_earlier() {
        let members: Vec<Drawable> = vec![
            filled_rect(0.0, 0.0, 6.0, 6.0, Color::RED).into(),
            filled_rect(2.0, 2.0, 6.0, 6.0, Color::BLUE).into(),
        ];
        let group = GroupFigure::new(&members);
        let mut surface = Surface::new(10, 10).unwrap();
        {
            let mut ctx = surface.context(None, false);
            ShapeRenderer.render(&mut ctx, (&group).into());
        }
        assert_eq!(pixel(&surface, 1, 1), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 4, 4), [0, 0, 255, 255]);
    }

    #[test]
    fn test_group_transform_moves_members() {
        let members: Vec<Drawable> = vec![filled_rect(5.0, 5.0, 2.0, 2.0, Color::RED).into()];
        let mut group = GroupFigure::new(&members);
        group.transform.translate(-5.0, -5.0);
        let mut surface = Surface::new(10, 10).unwrap();
        {
            let mut ctx = surface.context(None, false);
            ShapeRenderer.render(&mut ctx, (&group).into());
        }
        assert_eq!(pixel(&surface, 1, 1), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 6, 6), [0, 0, 0, 0]);
    }

    #[test]
    fn test_nested_group_is_rendered_recursively() {
        let mut inner = Group::new(vec![filled_rect(0.0, 0.0, 2.0, 2.0, Color::BLUE).into()]);
        inner.transform = Transform::translation(6.0, 6.0);
        let drawable = Drawable::from(inner);
        let mut surface = Surface::new(10, 10).unwrap();
        {
            let mut ctx = surface.context(None, false);
            ShapeRenderer.render(&mut ctx, (&drawable).into());
        }
        assert_eq!(pixel(&surface, 7, 7), [0, 0, 255, 255]);
    }

    #[test]
    fn test_background_cleared_before_painting() {
        let figure = filled_rect(0.0, 0.0, 2.0, 2.0, Color::RED);
        let background = FillStyle::solid(Color::WHITE);
        let mut surface = Surface::new(4, 4).unwrap();
        {
            let mut ctx = surface.context(Some(&background), false);
            ShapeRenderer.render(&mut ctx, (&Drawable::from(figure)).into());
        }
        assert_eq!(pixel(&surface, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 3, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn test_border_only_leaves_interior_empty() {
        let figure = Figure::new(Geometry::Rectangle(Rect::from_xywh(1.0, 1.0, 8.0, 8.0)))
            .with_style(Style::new(None, Some(BorderStyle::new(Color::BLACK, 2.0))));
        let mut surface = Surface::new(10, 10).unwrap();
        {
            let mut ctx = surface.context(None, false);
            ShapeRenderer.render(&mut ctx, (&Drawable::from(figure)).into());
        }
        assert_eq!(pixel(&surface, 1, 5), [0, 0, 0, 255]);
        assert_eq!(pixel(&surface, 5, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn test_gradient_runs_between_colors() {
        let fill = FillStyle::solid(Color::BLACK).with_gradient(LinearGradient {
            color: Color::WHITE,
            angle: 0.0,
        });
        let figure = Figure::new(Geometry::Rectangle(Rect::from_xywh(0.0, 0.0, 20.0, 2.0)))
            .with_style(Style::new(Some(fill), None));
        let mut surface = Surface::new(20, 2).unwrap();
        {
            let mut ctx = surface.context(None, false);
            ShapeRenderer.render(&mut ctx, (&Drawable::from(figure)).into());
        }
        let left = pixel(&surface, 0, 1);
        let right = pixel(&surface, 19, 1);
        assert!(left[0] < 30);
        assert!(right[0] > 225);
    }

    #[test]
    fn test_degenerate_figure_paints_nothing() {
        let figure = Figure::new(Geometry::Polyline(vec![Point::new(1.0, 1.0)]))
            .with_style(Style::new(Some(FillStyle::solid(Color::RED)), None));
        let mut surface = Surface::new(4, 4).unwrap();
        {
            let mut ctx = surface.context(None, false);
            ShapeRenderer.render(&mut ctx, (&Drawable::from(figure)).into());
        }
        assert_eq!(pixel(&surface, 1, 1), [0, 0, 0, 0]);
    }
}
