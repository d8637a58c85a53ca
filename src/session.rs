use egui::{Color32, Pos2};

/// Background color of the surface. Clearing resets to this, and the eraser
/// paints with it.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Default stroke thickness, matching the width control's initial value.
pub const DEFAULT_LINE_WIDTH: f32 = 5.0;

/// Preset colors offered as swatches next to the free-form picker.
pub const SWATCHES: [Color32; 9] = [
    Color32::from_rgb(0x1a, 0xbc, 0x9c),
    Color32::from_rgb(0x34, 0x98, 0xdb),
    Color32::from_rgb(0x34, 0x49, 0x5e),
    Color32::from_rgb(0x27, 0xae, 0x60),
    Color32::from_rgb(0x8e, 0x44, 0xad),
    Color32::from_rgb(0xf1, 0xc4, 0x0f),
    Color32::from_rgb(0xe6, 0x7e, 0x22),
    Color32::from_rgb(0xe7, 0x4c, 0x3c),
    Color32::from_rgb(0xc0, 0x39, 0x2b),
];

/// What a plain click on the surface does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Mode {
    /// Pointer movement while pressed renders a stroke; clicks do nothing.
    Draw,
    /// A click floods the whole surface with the fill color.
    Fill,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Draw => Mode::Fill,
            Mode::Fill => Mode::Draw,
        }
    }
}

/// Stroke endpoint shape. Only `Round` is ever rendered; the session keeps the
/// cap fixed and exposes no control to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineCap {
    Round,
    Butt,
    Square,
}

/// The style values that text stamping temporarily overrides. Captured before
/// the stamp and reapplied afterwards, so stamping never leaks style changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSnapshot {
    stroke_color: Color32,
    fill_color: Color32,
    line_width: f32,
}

/// Mutable state of one drawing session: the active style plus the transient
/// pointer state. The style part is persisted across restarts; the transient
/// part always starts fresh.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Session {
    stroke_color: Color32,
    fill_color: Color32,
    line_width: f32,
    line_cap: LineCap,
    mode: Mode,
    #[serde(skip)]
    is_painting: bool,
    /// Last known pointer position on the surface. Doubles as the start point
    /// of the next stroke segment; cleared when the pointer leaves the surface.
    #[serde(skip)]
    cursor: Option<Pos2>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            stroke_color: Color32::BLACK,
            fill_color: Color32::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
            line_cap: LineCap::Round,
            mode: Mode::Draw,
            is_painting: false,
            cursor: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke_color(&self) -> Color32 {
        self.stroke_color
    }

    pub fn fill_color(&self) -> Color32 {
        self.fill_color
    }

    /// Set both the stroke and fill color, as the picker and swatches do.
    pub fn set_color(&mut self, color: Color32) {
        self.stroke_color = color;
        self.fill_color = color;
    }

    /// Set only the stroke color. Used by the eraser, which must leave the
    /// fill color alone.
    pub fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn line_width_mut(&mut self) -> &mut f32 {
        &mut self.line_width
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width.max(0.1);
    }

    pub fn line_cap(&self) -> LineCap {
        self.line_cap
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Label for the mode-toggle button. Derived from the mode at render time:
    /// it names the mode the *next* click switches to, not the current one.
    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            Mode::Draw => "Fill",
            Mode::Fill => "Draw",
        }
    }

    pub fn is_painting(&self) -> bool {
        self.is_painting
    }

    pub fn set_painting(&mut self, painting: bool) {
        self.is_painting = painting;
    }

    pub fn cursor(&self) -> Option<Pos2> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<Pos2>) {
        self.cursor = cursor;
    }

    pub fn snapshot(&self) -> StyleSnapshot {
        StyleSnapshot {
            stroke_color: self.stroke_color,
            fill_color: self.fill_color,
            line_width: self.line_width,
        }
    }

    pub fn restore(&mut self, snapshot: StyleSnapshot) {
        self.stroke_color = snapshot.stroke_color;
        self.fill_color = snapshot.fill_color;
        self.line_width = snapshot.line_width;
    }
}
