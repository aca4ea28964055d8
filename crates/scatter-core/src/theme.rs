// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for mark colors, shared by the raster and SVG backends.

use crate::scene::{Mark, MarkClass};

/// Backend-neutral ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f32 { self.a as f32 / 255.0 }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub point: Color,
    pub regression_line: Color,
    pub residual: Color,
    pub cursor: Color,
    pub tooltip: Color,
    pub tooltip_muted: Color,
    pub button_fill: Color,
    pub button_text: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 255, 255, 255),
            axis_line: Color::from_argb(255, 0, 0, 0),
            axis_label: Color::from_argb(255, 20, 20, 30),
            point: Color::from_argb(255, 30, 30, 30),
            regression_line: Color::from_argb(255, 0, 0, 255),
            residual: Color::from_argb(255, 255, 0, 0),
            cursor: Color::from_argb(60, 70, 130, 180),
            tooltip: Color::from_argb(230, 0, 0, 0),
            tooltip_muted: Color::from_argb(230, 128, 128, 128),
            button_fill: Color::from_argb(255, 230, 230, 235),
            button_text: Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            point: Color::from_argb(255, 235, 235, 245),
            regression_line: Color::from_argb(255, 64, 160, 255),
            residual: Color::from_argb(255, 220, 80, 80),
            cursor: Color::from_argb(80, 255, 230, 70),
            tooltip: Color::from_argb(230, 235, 235, 245),
            tooltip_muted: Color::from_argb(230, 150, 150, 160),
            button_fill: Color::from_argb(255, 40, 40, 45),
            button_text: Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn color_for(&self, mark: &Mark) -> Color {
        match mark.class {
            MarkClass::Point => self.point,
            MarkClass::RegressionLine => self.regression_line,
            MarkClass::Residual => self.residual,
            MarkClass::Axis => self.axis_line,
            MarkClass::Cursor => self.cursor,
            MarkClass::Tooltip if mark.muted => self.tooltip_muted,
            MarkClass::Tooltip => self.tooltip,
            MarkClass::Button => self.button_fill,
        }
    }

    /// Color for text drawn by a mark of this class.
    pub fn text_color_for(&self, mark: &Mark) -> Color {
        match mark.class {
            MarkClass::Axis => self.axis_label,
            MarkClass::Button => self.button_text,
            _ => self.color_for(mark),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
