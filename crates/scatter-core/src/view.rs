// File: crates/scatter-core/src/view.rs
// Summary: ChartView maps points to pixels and draws points, axes, regression line and residuals onto a Surface.
// Notes:
// - Resize recomputes scales and redraws points only; axes and the line keep their old placement
//   until the next refresh or explicit redraw.

use tracing::debug;

use crate::axis::{Axis, Orient, DEFAULT_TICK_COUNT};
use crate::geometry::Pos;
use crate::input::Toolbar;
use crate::point::Point;
use crate::regression::RegressionLine;
use crate::scale::{Scales, ScaleTransform};
use crate::scene::{Anchor, Mark, MarkClass, Scene, Shape, Surface};
use crate::store::max_x;
use crate::types::Insets;

/// Where the cursor marker sits before the pointer first moves.
pub const CURSOR_HOME: Pos = Pos::new(-100.0, -100.0);

const TICK_LEN: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewStyle {
    pub point_radius: f32,
    pub cursor_radius: f32,
    pub tick_count: usize,
    /// Extra pick slack around points and the line, in pixels.
    pub hover_tolerance: f32,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self { point_radius: 2.9, cursor_radius: 8.0, tick_count: DEFAULT_TICK_COUNT, hover_tolerance: 3.0 }
    }
}

pub struct ChartView<S = Scene> {
    surface: S,
    width: u32,
    height: u32,
    scales: Scales,
    style: ViewStyle,
    line: Option<RegressionLine>,
}

impl ChartView<Scene> {
    pub fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self::with_surface(Scene::new(), width, height, insets)
    }
}

impl<S: Surface> ChartView<S> {
    pub fn with_surface(surface: S, width: u32, height: u32, insets: Insets) -> Self {
        let mut view = Self {
            surface,
            width,
            height,
            scales: Scales::for_viewport(width, height, insets),
            style: ViewStyle::default(),
            line: None,
        };
        view.move_cursor(CURSOR_HOME);
        view
    }

    pub fn with_style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self.move_cursor(CURSOR_HOME);
        self
    }

    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn into_surface(self) -> S { self.surface }
    pub fn scales(&self) -> &Scales { &self.scales }
    pub fn style(&self) -> &ViewStyle { &self.style }
    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    /// Line currently on screen, if any.
    pub fn regression_line(&self) -> Option<RegressionLine> { self.line }

    /// Draw one mark per point not yet on screen. Points already drawn are left as they are.
    pub fn render(&mut self, points: &[Point]) -> usize {
        let drawn = self.surface.count(MarkClass::Point);
        let mut added = 0;
        for &p in points.iter().skip(drawn) {
            let at = self.scales.to_screen(p);
            self.surface.draw_point(at, self.style.point_radius, p);
            added += 1;
        }
        debug!(added, total = drawn + added, "render points");
        added
    }

    pub fn draw_axes(&mut self) {
        self.surface.remove(MarkClass::Axis);
        let plot = self.scales.plot_rect();
        let x_axis = Axis::from_scale("X", Orient::Bottom, &self.scales.x, self.style.tick_count);
        let y_axis = Axis::from_scale("Y", Orient::Left, &self.scales.y, self.style.tick_count);

        for axis in [&x_axis, &y_axis] {
            match axis.orient {
                Orient::Bottom => {
                    self.surface.draw_segment(
                        MarkClass::Axis,
                        Pos::new(plot.left, plot.bottom),
                        Pos::new(plot.right, plot.bottom),
                    );
                    for t in &axis.ticks {
                        let x = plot.left + t.offset;
                        self.surface.draw_segment(MarkClass::Axis, Pos::new(x, plot.bottom), Pos::new(x, plot.bottom + TICK_LEN));
                        self.surface.draw_text(MarkClass::Axis, Pos::new(x, plot.bottom + 18.0), t.label.clone(), Anchor::Middle);
                    }
                    self.surface.draw_text(MarkClass::Axis, Pos::new(plot.right, plot.bottom - 6.0), axis.label.clone(), Anchor::End);
                }
                Orient::Left => {
                    self.surface.draw_segment(
                        MarkClass::Axis,
                        Pos::new(plot.left, plot.top),
                        Pos::new(plot.left, plot.bottom),
                    );
                    for t in &axis.ticks {
                        let y = plot.top + t.offset;
                        self.surface.draw_segment(MarkClass::Axis, Pos::new(plot.left - TICK_LEN, y), Pos::new(plot.left, y));
                        self.surface.draw_text(MarkClass::Axis, Pos::new(plot.left - 9.0, y + 4.0), t.label.clone(), Anchor::End);
                    }
                    self.surface.draw_text(MarkClass::Axis, Pos::new(plot.left + 6.0, plot.top + 12.0), axis.label.clone(), Anchor::Start);
                }
            }
        }
    }

    /// Replace the regression line with one spanning x = 0 to `x_max`.
    pub fn draw_regression_line(&mut self, line: &RegressionLine, x_max: f64) {
        self.surface.remove(MarkClass::RegressionLine);
        let from = self.scales.to_screen(Point::new(0.0, line.line_at(0.0)));
        let to = self.scales.to_screen(Point::new(x_max, line.line_at(x_max)));
        self.surface.draw_segment(MarkClass::RegressionLine, from, to);
        self.line = Some(*line);
        debug!(slope = line.slope, intercept = line.intercept, x_max, "draw regression line");
    }

    /// Vertical segment per point from its y to the predicted y. Draws the line first when missing.
    pub fn draw_residuals(&mut self, points: &[Point], line: &RegressionLine) {
        if self.surface.count(MarkClass::RegressionLine) == 0 {
            self.draw_regression_line(line, max_x(points));
        }
        self.surface.remove(MarkClass::Residual);
        for &p in points {
            let from = self.scales.to_screen(p);
            let to = self.scales.to_screen(Point::new(p.x, line.line_at(p.x)));
            self.surface.draw_segment(MarkClass::Residual, from, to);
        }
        debug!(n = points.len(), "draw residuals");
    }

    pub fn clear_points(&mut self) -> usize { self.surface.remove(MarkClass::Point) }

    pub fn clear_line(&mut self) -> usize {
        self.line = None;
        self.surface.remove(MarkClass::RegressionLine)
    }

    pub fn clear_residuals(&mut self) -> usize { self.surface.remove(MarkClass::Residual) }

    /// New viewport size: rescale and redraw points. Axes and line are not touched.
    pub fn resize(&mut self, width: u32, height: u32, points: &[Point]) {
        self.width = width;
        self.height = height;
        self.scales = Scales::for_viewport(width, height, self.scales.insets);
        self.clear_points();
        self.render(points);
    }

    /// Full re-render after the point set changed: scales, axes, then all points.
    pub fn refresh(&mut self, points: &[Point]) {
        self.scales = Scales::for_viewport(self.width, self.height, self.scales.insets);
        self.draw_axes();
        self.clear_points();
        self.render(points);
    }

    pub fn move_cursor(&mut self, at: Pos) {
        self.surface.remove(MarkClass::Cursor);
        self.surface.add(Mark::new(MarkClass::Cursor, Shape::Circle { center: at, radius: self.style.cursor_radius }));
    }

    /// Show a coordinate tooltip when `at` is over a point or the regression line.
    /// Returns whether a tooltip is showing.
    pub fn hover(&mut self, at: Pos) -> bool {
        let tolerance = self.style.hover_tolerance;
        self.surface.remove(MarkClass::Tooltip);

        let hit = self.surface.pick(MarkClass::Point, at, tolerance).and_then(|m| m.datum);
        if let Some(datum) = hit {
            self.surface.draw_text(MarkClass::Tooltip, at.offset(5.0, -28.0), datum.to_string(), Anchor::Start);
            return true;
        }

        if let Some(line) = self.line {
            if self.surface.pick(MarkClass::RegressionLine, at, tolerance).is_some() {
                let x = self.scales.from_screen_x(at.x);
                let text = format!("({:.2}, {:.2})", x, line.line_at(x));
                let shape = Shape::Text { at: at.offset(5.0, 10.0), text, anchor: Anchor::Start };
                self.surface.add(Mark::new(MarkClass::Tooltip, shape).muted());
                return true;
            }
        }
        false
    }

    pub fn hide_tooltip(&mut self) { self.surface.remove(MarkClass::Tooltip); }

    pub fn draw_toolbar(&mut self, toolbar: &Toolbar) {
        self.surface.remove(MarkClass::Button);
        for b in toolbar.buttons() {
            self.surface.draw_rect(MarkClass::Button, b.rect);
            self.surface.draw_text(MarkClass::Button, b.rect.center().offset(0.0, 4.0), b.action.label(), Anchor::Middle);
        }
    }
}
