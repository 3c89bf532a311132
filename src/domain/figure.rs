//! Figures, nested groups and the borrowed group view used for export

use super::geometry::{Geometry, Path, Rect};
use super::style::Style;
use super::transform::Transform;

/// One drawable shape: geometry in local space, its transform and its paint
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub geometry: Geometry,
    pub transform: Transform,
    pub style: Style,
}

impl Figure {
    /// Figure with an identity transform and no fill or border
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            transform: Transform::identity(),
            style: Style::default(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn local_path(&self) -> Path {
        self.geometry.local_path()
    }

    /// Outline in world coordinates
    pub fn transformed_path(&self) -> Path {
        self.transform.apply_path(&self.local_path())
    }

    /// World-space bounds, the same box used for painting and group bounds
    pub fn bounds(&self) -> Rect {
        self.transformed_path().bounds()
    }
}

/// A group nested inside a layer, owning its members
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub members: Vec<Drawable>,
    pub transform: Transform,
}

impl Group {
    pub fn new(members: Vec<Drawable>) -> Self {
        Self {
            members,
            transform: Transform::identity(),
        }
    }

    /// Borrowed view over the members carrying a copy of this group's transform
    pub fn view(&self) -> GroupFigure<'_> {
        GroupFigure {
            members: &self.members,
            transform: self.transform,
        }
    }
}

/// Anything that can sit in a layer
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Figure(Figure),
    Group(Group),
}

impl Drawable {
    /// Every outline of this item in world coordinates.
    ///
    /// A group yields the concatenation of its members' outlines, each mapped
    /// through the group's own transform after the member's.
    pub fn world_path(&self) -> Path {
        match self {
            Drawable::Figure(figure) => figure.transformed_path(),
            Drawable::Group(group) => group.view().members_path(),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.world_path().bounds()
    }

    pub fn as_figure(&self) -> Option<&Figure> {
        match self {
            Drawable::Figure(figure) => Some(figure),
            Drawable::Group(_) => None,
        }
    }
}

impl From<Figure> for Drawable {
    fn from(figure: Figure) -> Self {
        Drawable::Figure(figure)
    }
}

impl From<Group> for Drawable {
    fn from(group: Group) -> Self {
        Drawable::Group(group)
    }
}

/// A group over borrowed members.
///
/// Members are shared with their owner, so later edits to them show through
/// the view. The transform is the view's own copy: moving the view never
/// touches the members or the group it came from.
#[derive(Clone, Copy, Debug)]
pub struct GroupFigure<'a> {
    members: &'a [Drawable],
    pub transform: Transform,
}

impl<'a> GroupFigure<'a> {
    pub fn new(members: &'a [Drawable]) -> Self {
        Self {
            members,
            transform: Transform::identity(),
        }
    }

    pub fn members(&self) -> &'a [Drawable] {
        self.members
    }

    /// All member outlines in world coordinates, after this view's transform
    pub fn members_path(&self) -> Path {
        let mut path = Path::new();
        for member in self.members {
            path.extend(self.transform.apply_path(&member.world_path()));
        }
        path
    }

    /// Synthesized geometry: the union box of the members' transformed outlines
    pub fn local_path(&self) -> Path {
        let mut path = Path::new();
        for member in self.members {
            path.extend(member.world_path());
        }
        Path::rect(path.bounds())
    }

    pub fn transformed_path(&self) -> Path {
        self.transform.apply_path(&self.local_path())
    }

    pub fn bounds(&self) -> Rect {
        self.transformed_path().bounds()
    }
}
