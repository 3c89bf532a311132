//! Paint attributes for figures and layer backgrounds

/// Opaque RGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to RGBA bytes with the given alpha
    pub fn to_rgba_u8(self, alpha: u8) -> [u8; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

/// Second color and direction of a linear gradient fill
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    /// Color at the far end of the gradient; the fill color is the near end
    pub color: Color,
    /// Direction in degrees, 0 = left to right, clockwise on a y-down canvas
    pub angle: f32,
}

/// Interior paint of a figure or the background of a layer
#[derive(Clone, Debug, PartialEq)]
pub struct FillStyle {
    pub color: Color,
    /// 0 = fully transparent, 255 = opaque
    pub opacity: u8,
    pub visible: bool,
    pub gradient: Option<LinearGradient>,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            opacity: 255,
            visible: true,
            gradient: None,
        }
    }
}

impl FillStyle {
    /// Visible opaque solid fill
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_opacity(mut self, opacity: u8) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_gradient(mut self, gradient: LinearGradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

const DASH: &[f32] = &[3.0, 1.0];
const DOT: &[f32] = &[1.0, 1.0];
const DASH_DOT: &[f32] = &[3.0, 1.0, 1.0, 1.0];
const DASH_DOT_DOT: &[f32] = &[3.0, 1.0, 1.0, 1.0, 1.0, 1.0];

/// Named stroke dash patterns
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
}

impl DashStyle {
    /// All patterns in the order the editor lists them
    pub const ALL: [DashStyle; 5] = [
        DashStyle::Solid,
        DashStyle::Dash,
        DashStyle::Dot,
        DashStyle::DashDot,
        DashStyle::DashDotDot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DashStyle::Solid => "Solid",
            DashStyle::Dash => "Dash",
            DashStyle::Dot => "Dot",
            DashStyle::DashDot => "DashDot",
            DashStyle::DashDotDot => "DashDotDot",
        }
    }

    /// On/off intervals in multiples of the stroke width, `None` for solid lines
    pub fn intervals(self) -> Option<&'static [f32]> {
        match self {
            DashStyle::Solid => None,
            DashStyle::Dash => Some(DASH),
            DashStyle::Dot => Some(DOT),
            DashStyle::DashDot => Some(DASH_DOT),
            DashStyle::DashDotDot => Some(DASH_DOT_DOT),
        }
    }
}

/// Outline paint of a figure
#[derive(Clone, Debug, PartialEq)]
pub struct BorderStyle {
    pub color: Color,
    /// Stroke width in world units
    pub width: f32,
    pub dash: DashStyle,
    pub visible: bool,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            dash: DashStyle::Solid,
            visible: true,
        }
    }
}

impl BorderStyle {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    pub fn with_dash(mut self, dash: DashStyle) -> Self {
        self.dash = dash;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Fill and border of a figure.
///
/// A `None` sub-style means the aspect does not exist for this figure at all,
/// which is different from a present but invisible one. Both are skipped when
/// drawing and exporting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub fill: Option<FillStyle>,
    pub border: Option<BorderStyle>,
}

impl Style {
    pub fn new(fill: Option<FillStyle>, border: Option<BorderStyle>) -> Self {
        Self { fill, border }
    }

    /// Fill style if present and visible
    pub fn visible_fill(&self) -> Option<&FillStyle> {
        self.fill.as_ref().filter(|f| f.visible)
    }

    /// Border style if present and visible
    pub fn visible_border(&self) -> Option<&BorderStyle> {
        self.border.as_ref().filter(|b| b.visible)
    }
}
