// File: crates/scatter-core/src/scale.rs
// Summary: Linear data-to-pixel scales for the X and Y axes, recomputed per viewport size.

use crate::geometry::{Pos, RectF32};
use crate::point::Point;
use crate::types::Insets;

/// General scale transform operations between data space and absolute surface pixels.
pub trait ScaleTransform {
    fn to_screen_x(&self, x: f64) -> f32;
    fn to_screen_y(&self, y: f64) -> f32;
    fn from_screen_x(&self, px: f32) -> f64;
    fn from_screen_y(&self, py: f32) -> f64;

    fn to_screen(&self, p: Point) -> Pos {
        Pos::new(self.to_screen_x(p.x), self.to_screen_y(p.y))
    }
    fn from_screen(&self, pos: Pos) -> Point {
        Point::new(self.from_screen_x(pos.x), self.from_screen_y(pos.y))
    }
}

/// Linear map from a data domain onto a pixel range. The range may be inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = (self.range.0 as f64, self.range.1 as f64);
        let span = d1 - d0;
        if span.abs() < 1e-12 {
            return self.range.0;
        }
        (r0 + (v - d0) * (r1 - r0) / span) as f32
    }

    #[inline]
    pub fn invert(&self, px: f32) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = (self.range.0 as f64, self.range.1 as f64);
        let span = r1 - r0;
        if span.abs() < 1e-12 {
            return d0;
        }
        d0 + (px as f64 - r0) * (d1 - d0) / span
    }
}

/// Pair of axis scales plus the plot-area placement inside the surface.
/// The data domain equals the plot size in pixels: x `[0, w]` and y `[0, h]`, y pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub insets: Insets,
    pub plot_width: f32,
    pub plot_height: f32,
}

impl Scales {
    pub fn for_viewport(width: u32, height: u32, insets: Insets) -> Self {
        let plot_width = width.saturating_sub(insets.hsum()).max(1) as f32;
        let plot_height = height.saturating_sub(insets.vsum()).max(1) as f32;
        Self {
            x: LinearScale::new((0.0, plot_width as f64), (0.0, plot_width)),
            y: LinearScale::new((0.0, plot_height as f64), (plot_height, 0.0)),
            insets,
            plot_width,
            plot_height,
        }
    }

    /// Plot area in absolute surface pixels.
    pub fn plot_rect(&self) -> RectF32 {
        RectF32::from_ltwh(
            self.insets.left as f32,
            self.insets.top as f32,
            self.plot_width,
            self.plot_height,
        )
    }
}

impl ScaleTransform for Scales {
    fn to_screen_x(&self, x: f64) -> f32 { self.insets.left as f32 + self.x.map(x) }
    fn to_screen_y(&self, y: f64) -> f32 { self.insets.top as f32 + self.y.map(y) }
    fn from_screen_x(&self, px: f32) -> f64 { self.x.invert(px - self.insets.left as f32) }
    fn from_screen_y(&self, py: f32) -> f64 { self.y.invert(py - self.insets.top as f32) }
}
