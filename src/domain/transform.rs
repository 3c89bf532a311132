//! Affine transform attached to every figure

use super::geometry::{Path, Point};

/// 2x3 affine matrix.
///
/// A point maps as `x' = sx*x + kx*y + tx`, `y' = ky*x + sy*y + ty`. The
/// coefficients are public because editors nudge them in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub ky: f32,
    pub kx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Create a transform from its six coefficients in matrix element order
    pub const fn new(sx: f32, ky: f32, kx: f32, sy: f32, tx: f32, ty: f32) -> Self {
        Self {
            sx,
            ky,
            kx,
            sy,
            tx,
            ty,
        }
    }

    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation about the origin, clockwise on a y-down canvas
    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// The six coefficients as `[sx, ky, kx, sy, tx, ty]`
    pub fn elements(&self) -> [f32; 6] {
        [self.sx, self.ky, self.kx, self.sy, self.tx, self.ty]
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Composition that applies `self` first and `next` second
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            sx: next.sx * self.sx + next.kx * self.ky,
            ky: next.ky * self.sx + next.sy * self.ky,
            kx: next.sx * self.kx + next.kx * self.sy,
            sy: next.ky * self.kx + next.sy * self.sy,
            tx: next.sx * self.tx + next.kx * self.ty + next.tx,
            ty: next.ky * self.tx + next.sy * self.ty + next.ty,
        }
    }

    /// Shift the result of this transform by a world-space offset
    pub fn translate(&mut self, dx: f32, dy: f32) {
        *self = self.then(&Transform::translation(dx, dy));
    }

    /// Scale the result of this transform about the world origin
    pub fn scale_by(&mut self, sx: f32, sy: f32) {
        *self = self.then(&Transform::scale(sx, sy));
    }

    /// Rotate the result of this transform about the world origin
    pub fn rotate(&mut self, degrees: f32) {
        *self = self.then(&Transform::rotation(degrees));
    }

    pub fn apply_point(&self, p: Point) -> Point {
        Point {
            x: self.sx * p.x + self.kx * p.y + self.tx,
            y: self.ky * p.x + self.sy * p.y + self.ty,
        }
    }

    /// Map points, keeping their order
    pub fn apply_points(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.apply_point(*p)).collect()
    }

    pub fn apply_path(&self, path: &Path) -> Path {
        path.map_points(|p| self.apply_point(p))
    }
}
