// File: crates/scatter-core/src/scene.rs
// Summary: Renderer-agnostic drawing surface: retained marks tagged by class, plus the Surface trait.

use crate::geometry::{distance_to_segment, Pos, RectF32};
use crate::point::Point;

/// What a mark represents; clearing and picking work per class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkClass {
    Point,
    RegressionLine,
    Residual,
    Axis,
    Cursor,
    Tooltip,
    Button,
}

impl MarkClass {
    /// Class name used in SVG output.
    pub fn css_class(&self) -> &'static str {
        match self {
            MarkClass::Point => "point",
            MarkClass::RegressionLine => "reg-line",
            MarkClass::Residual => "residual-line",
            MarkClass::Axis => "axis",
            MarkClass::Cursor => "cursor",
            MarkClass::Tooltip => "tooltip",
            MarkClass::Button => "button",
        }
    }

    /// Paint order, lowest first.
    pub fn layer(&self) -> u8 {
        match self {
            MarkClass::Cursor => 0,
            MarkClass::Axis => 1,
            MarkClass::Button => 2,
            MarkClass::Residual => 3,
            MarkClass::RegressionLine => 4,
            MarkClass::Point => 5,
            MarkClass::Tooltip => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { center: Pos, radius: f32 },
    Segment { from: Pos, to: Pos },
    Text { at: Pos, text: String, anchor: Anchor },
    Rect { rect: RectF32 },
}

impl Shape {
    /// Non-finite geometry (NaN regression output) is kept in the scene but never painted.
    pub fn is_finite(&self) -> bool {
        match self {
            Shape::Circle { center, radius } => center.is_finite() && radius.is_finite(),
            Shape::Segment { from, to } => from.is_finite() && to.is_finite(),
            Shape::Text { at, .. } => at.is_finite(),
            Shape::Rect { rect } => {
                rect.left.is_finite() && rect.top.is_finite() && rect.right.is_finite() && rect.bottom.is_finite()
            }
        }
    }

    fn hit(&self, at: Pos, tolerance: f32) -> bool {
        if !self.is_finite() {
            return false;
        }
        match self {
            Shape::Circle { center, radius } => center.distance(at) <= radius + tolerance,
            Shape::Segment { from, to } => distance_to_segment(at, *from, *to) <= tolerance,
            Shape::Rect { rect } => rect.contains(at),
            Shape::Text { .. } => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    pub class: MarkClass,
    pub shape: Shape,
    /// Data point behind a point mark.
    pub datum: Option<Point>,
    /// Secondary styling (greyed tooltip text).
    pub muted: bool,
}

impl Mark {
    pub fn new(class: MarkClass, shape: Shape) -> Self {
        Self { class, shape, datum: None, muted: false }
    }

    pub fn with_datum(mut self, datum: Point) -> Self {
        self.datum = Some(datum);
        self
    }

    pub fn muted(mut self) -> Self {
        self.muted = true;
        self
    }
}

/// Minimal drawing interface the chart view talks to. Backends only need `add`,
/// `remove`, `count` and `pick`; the `draw_*` helpers build marks on top of them.
pub trait Surface {
    fn add(&mut self, mark: Mark);
    /// Remove every mark of `class`, returning how many were removed.
    fn remove(&mut self, class: MarkClass) -> usize;
    fn count(&self, class: MarkClass) -> usize;
    /// Topmost mark of `class` under `at`, within `tolerance` pixels.
    fn pick(&self, class: MarkClass, at: Pos, tolerance: f32) -> Option<&Mark>;

    fn draw_point(&mut self, at: Pos, radius: f32, datum: Point) {
        self.add(Mark::new(MarkClass::Point, Shape::Circle { center: at, radius }).with_datum(datum));
    }

    fn draw_segment(&mut self, class: MarkClass, from: Pos, to: Pos) {
        self.add(Mark::new(class, Shape::Segment { from, to }));
    }

    fn draw_text(&mut self, class: MarkClass, at: Pos, text: impl Into<String>, anchor: Anchor) {
        self.add(Mark::new(class, Shape::Text { at, text: text.into(), anchor }));
    }

    fn draw_rect(&mut self, class: MarkClass, rect: RectF32) {
        self.add(Mark::new(class, Shape::Rect { rect }));
    }
}

/// Retained list of marks; the default surface consumed by the raster and SVG backends.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    marks: Vec<Mark>,
}

impl Scene {
    pub fn new() -> Self { Self::default() }

    pub fn marks(&self) -> &[Mark] { &self.marks }

    pub fn is_empty(&self) -> bool { self.marks.is_empty() }

    pub fn of_class(&self, class: MarkClass) -> impl Iterator<Item = &Mark> + '_ {
        self.marks.iter().filter(move |m| m.class == class)
    }

    /// Marks sorted by layer; insertion order is kept within a layer.
    pub fn paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.iter().collect();
        out.sort_by_key(|m| m.class.layer());
        out
    }
}

impl Surface for Scene {
    fn add(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    fn remove(&mut self, class: MarkClass) -> usize {
        let before = self.marks.len();
        self.marks.retain(|m| m.class != class);
        before - self.marks.len()
    }

    fn count(&self, class: MarkClass) -> usize {
        self.of_class(class).count()
    }

    fn pick(&self, class: MarkClass, at: Pos, tolerance: f32) -> Option<&Mark> {
        self.marks.iter().rev().find(|m| m.class == class && m.shape.hit(at, tolerance))
    }
}
