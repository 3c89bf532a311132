//! Local-coordinate shape definitions and outline paths
//!
//! Everything here is expressed in a figure's own coordinate space. Nothing
//! in this module knows about transforms; see [`super::transform`].

/// Ellipse bezier approximation constant: 4/3 * (sqrt(2) - 1)
pub const BEZIER_K: f32 = 0.552_284_8;

/// A point in 2D space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in floating point coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create a new rectangle from edge coordinates
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from its top-left corner and size
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Smallest rectangle containing every point, or `None` for an empty set
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut rect = Rect::new(first.x, first.y, first.x, first.y);
        for p in iter {
            rect.left = rect.left.min(p.x);
            rect.top = rect.top.min(p.y);
            rect.right = rect.right.max(p.x);
            rect.bottom = rect.bottom.max(p.y);
        }
        Some(rect)
    }

    /// Get the width of the rectangle
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Get the height of the rectangle
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Smallest rectangle containing both rectangles
    pub fn union(&self, other: Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Translate the rectangle by the given offset
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}

/// One outline command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// An outline made of straight and cubic segments.
///
/// Unlike the rasterizer's own path type this one may be empty or consist of
/// a single point; degenerate outlines are legal data and simply paint
/// nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::LineTo(p));
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, end: Point) {
        self.cmds.push(PathCmd::CubicTo(c1, c2, end));
    }

    pub fn close(&mut self) {
        self.cmds.push(PathCmd::Close);
    }

    /// Append every command of `other` to this path
    pub fn extend(&mut self, other: Path) {
        self.cmds.extend(other.cmds);
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Every point of the path in command order, bezier control points included
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cmds.iter().flat_map(|cmd| {
            let pts: [Option<Point>; 3] = match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => [Some(p), None, None],
                PathCmd::CubicTo(c1, c2, end) => [Some(c1), Some(c2), Some(end)],
                PathCmd::Close => [None, None, None],
            };
            pts.into_iter().flatten()
        })
    }

    /// Bounding box of the path; an empty path has an empty box at the origin
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.points()).unwrap_or_default()
    }

    /// Return a copy of the path with every point mapped through `f`
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> Path {
        let cmds = self
            .cmds
            .iter()
            .map(|cmd| match *cmd {
                PathCmd::MoveTo(p) => PathCmd::MoveTo(f(p)),
                PathCmd::LineTo(p) => PathCmd::LineTo(f(p)),
                PathCmd::CubicTo(c1, c2, end) => PathCmd::CubicTo(f(c1), f(c2), f(end)),
                PathCmd::Close => PathCmd::Close,
            })
            .collect();
        Path { cmds }
    }

    /// Closed axis-aligned rectangle outline, clockwise from the top-left corner
    pub fn rect(r: Rect) -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(r.left, r.top));
        path.line_to(Point::new(r.right, r.top));
        path.line_to(Point::new(r.right, r.bottom));
        path.line_to(Point::new(r.left, r.bottom));
        path.close();
        path
    }

    /// Ellipse inscribed in `r`, built from four cubic bezier arcs
    pub fn ellipse(r: Rect) -> Path {
        let Point { x: cx, y: cy } = r.center();
        let rx = r.width() * 0.5;
        let ry = r.height() * 0.5;
        let kx = rx * BEZIER_K;
        let ky = ry * BEZIER_K;

        let mut path = Path::new();

        // Start at top
        path.move_to(Point::new(cx, cy - ry));
        // Top to right
        path.cubic_to(
            Point::new(cx + kx, cy - ry),
            Point::new(cx + rx, cy - ky),
            Point::new(cx + rx, cy),
        );
        // Right to bottom
        path.cubic_to(
            Point::new(cx + rx, cy + ky),
            Point::new(cx + kx, cy + ry),
            Point::new(cx, cy + ry),
        );
        // Bottom to left
        path.cubic_to(
            Point::new(cx - kx, cy + ry),
            Point::new(cx - rx, cy + ky),
            Point::new(cx - rx, cy),
        );
        // Left to top
        path.cubic_to(
            Point::new(cx - rx, cy - ky),
            Point::new(cx - kx, cy - ry),
            Point::new(cx, cy - ry),
        );
        path.close();
        path
    }

    /// Outline through `points` in order, closed when `closed` is set
    pub fn poly(points: &[Point], closed: bool) -> Path {
        let mut path = Path::new();
        let Some((first, rest)) = points.split_first() else {
            return path;
        };
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        if closed {
            path.close();
        }
        path
    }
}

/// Shape definition of a figure, tagged by kind
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Rectangle(Rect),
    Square { left: f32, top: f32, side: f32 },
    Ellipse(Rect),
    Circle { cx: f32, cy: f32, radius: f32 },
    /// Closed outline through the points
    Polygon(Vec<Point>),
    /// Open outline through the points
    Polyline(Vec<Point>),
    /// Free-form outline produced by some other tool
    Custom { name: String, path: Path },
}

impl Geometry {
    /// Kind name as shown to the user
    pub fn name(&self) -> &str {
        match self {
            Geometry::Rectangle(_) => "Rectangle",
            Geometry::Square { .. } => "Square",
            Geometry::Ellipse(_) => "Ellipse",
            Geometry::Circle { .. } => "Circle",
            Geometry::Polygon(_) => "Polygon",
            Geometry::Polyline(_) => "Polyline",
            Geometry::Custom { name, .. } => name.as_str(),
        }
    }

    /// Points of a polygon or polyline, `None` for every other kind
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Geometry::Polygon(points) | Geometry::Polyline(points) => {
                Some(points.as_slice())
            }
            _ => None,
        }
    }

    /// Untransformed outline of the shape
    pub fn local_path(&self) -> Path {
        match self {
            Geometry::Rectangle(r) => Path::rect(*r),
            Geometry::Square { left, top, side } => {
                Path::rect(Rect::from_xywh(*left, *top, *side, *side))
            }
            Geometry::Ellipse(r) => Path::ellipse(*r),
            Geometry::Circle { cx, cy, radius } => Path::ellipse(Rect::new(
                cx - radius,
                cy - radius,
                cx + radius,
                cy + radius,
            )),
            Geometry::Polygon(points) => Path::poly(points, true),
            Geometry::Polyline(points) => Path::poly(points, false),
            Geometry::Custom { path, .. } => path.clone(),
        }
    }
}
