//! Conversions from domain geometry to tiny-skia
//!
//! Also holds the small amount of math shared by fills that need the
//! figure's bounds (gradient end points).

use tiny_skia::{PathBuilder, Stroke, StrokeDash};

use crate::domain::{BorderStyle, Path, PathCmd, Point, Rect};

/// Build a tiny-skia path; `None` for outlines the rasterizer cannot represent
/// (empty, single point, zero-length).
pub fn skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for cmd in path.commands() {
        match *cmd {
            PathCmd::MoveTo(p) => pb.move_to(p.x, p.y),
            PathCmd::LineTo(p) => pb.line_to(p.x, p.y),
            PathCmd::CubicTo(c1, c2, end) => pb.cubic_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y),
            PathCmd::Close => pb.close(),
        }
    }
    pb.finish()
}

/// Stroke settings for a border; dash intervals scale with the width
pub fn skia_stroke(border: &BorderStyle) -> Stroke {
    let dash = border.dash.intervals().and_then(|intervals| {
        let scaled = intervals.iter().map(|i| i * border.width).collect();
        StrokeDash::new(scaled, 0.0)
    });
    Stroke {
        width: border.width,
        dash,
        ..Default::default()
    }
}

/// End points of a linear gradient crossing `bounds` at `angle` degrees.
///
/// The line runs through the center and is just long enough for both end
/// points to touch the box corners when projected onto it.
pub fn gradient_line(bounds: Rect, angle: f32) -> (Point, Point) {
    let center = bounds.center();
    let (sin, cos) = angle.to_radians().sin_cos();
    let half = ((bounds.width() * cos).abs() + (bounds.height() * sin).abs()) * 0.5;
    (
        Point::new(center.x - cos * half, center.y - sin * half),
        Point::new(center.x + cos * half, center.y + sin * half),
    )
}
