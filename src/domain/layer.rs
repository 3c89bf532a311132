//! Layers: the unit of export

use super::figure::{Drawable, GroupFigure};
use super::style::FillStyle;

/// Ordered figures plus a canvas background
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    /// Drawn in order, later items on top
    pub figures: Vec<Drawable>,
    /// Canvas background; `None` behaves like an invisible one
    pub fill: Option<FillStyle>,
}

impl Layer {
    pub fn new(fill: Option<FillStyle>) -> Self {
        Self {
            figures: Vec::new(),
            fill,
        }
    }

    pub fn push(&mut self, drawable: impl Into<Drawable>) {
        self.figures.push(drawable.into());
    }

    pub fn with(mut self, drawable: impl Into<Drawable>) -> Self {
        self.push(drawable);
        self
    }

    /// Background style if present and visible
    pub fn visible_background(&self) -> Option<&FillStyle> {
        self.fill.as_ref().filter(|f| f.visible)
    }

    /// Borrowed group over every figure of the layer
    pub fn group(&self) -> GroupFigure<'_> {
        GroupFigure::new(&self.figures)
    }
}
