// File: crates/scatter-core/tests/view.rs
// Purpose: ChartView drawing semantics on the retained Scene (no backend involved).

use approx::assert_abs_diff_eq;
use scatter_core::scene::Anchor;
use scatter_core::view::CURSOR_HOME;
use scatter_core::{
    ChartView, Insets, MarkClass, Point, Pos, RegressionLine, ScaleTransform, Scene, Shape, Surface,
};

fn sample() -> Vec<Point> {
    vec![
        Point::new(10.0, 20.0),
        Point::new(50.0, 80.0),
        Point::new(100.0, 90.0),
        Point::new(200.0, 150.0),
    ]
}

fn view() -> ChartView<Scene> {
    ChartView::new(960, 500, Insets::default())
}

fn segment(shape: &Shape) -> (Pos, Pos) {
    match shape {
        Shape::Segment { from, to } => (*from, *to),
        other => panic!("expected segment, got {other:?}"),
    }
}

#[test]
fn one_mark_per_point_and_no_duplicates() {
    let mut v = view();
    let mut points = sample();
    assert_eq!(v.render(&points), 4);
    assert_eq!(v.render(&points), 0);
    points.push(Point::new(300.0, 10.0));
    assert_eq!(v.render(&points), 1);
    assert_eq!(v.surface().count(MarkClass::Point), 5);

    let last = v.surface().of_class(MarkClass::Point).last().unwrap();
    assert_eq!(last.datum, Some(Point::new(300.0, 10.0)));
    // x: left margin + x; y: top margin + (plot height - y)
    assert_eq!(last.shape, Shape::Circle { center: Pos::new(360.0, 460.0), radius: 2.9 });
}

#[test]
fn clear_then_render_of_empty_store_leaves_no_points() {
    let mut v = view();
    v.render(&sample());
    assert_eq!(v.clear_points(), 4);
    v.render(&[]);
    assert_eq!(v.surface().count(MarkClass::Point), 0);
}

#[test]
fn redrawing_the_line_keeps_a_single_element() {
    let mut v = view();
    let points = sample();
    let line = RegressionLine::fit(&points);
    v.draw_regression_line(&line, 200.0);
    v.draw_regression_line(&line, 200.0);
    assert_eq!(v.surface().count(MarkClass::RegressionLine), 1);
    assert_eq!(v.regression_line(), Some(line));

    let mark = v.surface().of_class(MarkClass::RegressionLine).next().unwrap();
    let (from, to) = segment(&mark.shape);
    let s = v.scales();
    assert_abs_diff_eq!(s.from_screen_x(from.x), 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(s.from_screen_x(to.x), 200.0, epsilon = 1e-3);
    assert_abs_diff_eq!(s.from_screen_y(to.y), line.line_at(200.0), epsilon = 1e-2);
}

#[test]
fn residual_lengths_match_data_distance() {
    let mut v = view();
    let points = sample();
    let line = RegressionLine::fit(&points);
    v.draw_residuals(&points, &line);

    // the line is drawn on demand
    assert_eq!(v.surface().count(MarkClass::RegressionLine), 1);
    assert_eq!(v.surface().count(MarkClass::Residual), points.len());

    let s = *v.scales();
    for (mark, p) in v.surface().of_class(MarkClass::Residual).zip(&points) {
        let (from, to) = segment(&mark.shape);
        assert_eq!(from.x, to.x);
        let len = (s.from_screen_y(from.y) - s.from_screen_y(to.y)).abs();
        assert_abs_diff_eq!(len, line.residual(*p).abs(), epsilon = 1e-2);
    }

    v.draw_residuals(&points, &line);
    assert_eq!(v.surface().count(MarkClass::Residual), points.len());
}

#[test]
fn clears_leave_other_marks_alone() {
    let mut v = view();
    let points = sample();
    v.render(&points);
    v.draw_residuals(&points, &RegressionLine::fit(&points));
    assert_eq!(v.clear_residuals(), 4);
    assert_eq!(v.clear_line(), 1);
    assert_eq!(v.regression_line(), None);
    assert_eq!(v.surface().count(MarkClass::Point), 4);
}

#[test]
fn degenerate_line_is_kept_but_not_finite() {
    let mut v = view();
    let one = [Point::new(5.0, 5.0)];
    v.draw_regression_line(&RegressionLine::fit(&one), 5.0);
    v.draw_regression_line(&RegressionLine::fit(&one), 5.0);
    let marks: Vec<_> = v.surface().of_class(MarkClass::RegressionLine).collect();
    assert_eq!(marks.len(), 1);
    assert!(!marks[0].shape.is_finite());
}

#[test]
fn axes_have_ticks_and_are_replaced_on_redraw() {
    let mut v = view();
    v.draw_axes();
    let n = v.surface().count(MarkClass::Axis);
    assert!(n > 20);
    v.draw_axes();
    assert_eq!(v.surface().count(MarkClass::Axis), n);

    let labels: Vec<String> = v
        .surface()
        .of_class(MarkClass::Axis)
        .filter_map(|m| match &m.shape {
            Shape::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert!(labels.iter().any(|l| l == "X"));
    assert!(labels.iter().any(|l| l == "Y"));
    assert!(labels.iter().any(|l| l == "450"));
}

#[test]
fn resize_redraws_points_but_not_axes_or_line() {
    let mut v = view();
    let points = sample();
    v.draw_axes();
    v.render(&points);
    v.draw_regression_line(&RegressionLine::fit(&points), 200.0);
    let axes_before: Vec<_> = v.surface().of_class(MarkClass::Axis).cloned().collect();
    let line_before: Vec<_> = v.surface().of_class(MarkClass::RegressionLine).cloned().collect();

    v.resize(600, 400, &points);

    assert_eq!(v.width(), 600);
    assert_eq!(v.scales().plot_height, 350.0);
    let axes_after: Vec<_> = v.surface().of_class(MarkClass::Axis).cloned().collect();
    let line_after: Vec<_> = v.surface().of_class(MarkClass::RegressionLine).cloned().collect();
    assert_eq!(axes_before, axes_after);
    assert_eq!(line_before, line_after);

    let first = v.surface().of_class(MarkClass::Point).next().unwrap();
    assert_eq!(first.shape, Shape::Circle { center: Pos::new(70.0, 350.0), radius: 2.9 });
    assert_eq!(v.surface().count(MarkClass::Point), points.len());
}

#[test]
fn hover_over_point_shows_coordinates() {
    let mut v = view();
    v.render(&[Point::new(100.0, 250.0)]);
    assert!(v.hover(Pos::new(161.0, 221.0)));
    let tip = v.surface().of_class(MarkClass::Tooltip).next().unwrap();
    assert_eq!(
        tip.shape,
        Shape::Text { at: Pos::new(166.0, 193.0), text: "(100.00, 250.00)".into(), anchor: Anchor::Start }
    );
    assert!(!tip.muted);

    assert!(!v.hover(Pos::new(600.0, 100.0)));
    assert_eq!(v.surface().count(MarkClass::Tooltip), 0);
}

#[test]
fn hover_over_line_shows_muted_prediction() {
    let mut v = view();
    let points = [Point::new(0.0, 0.0), Point::new(100.0, 100.0), Point::new(200.0, 200.0)];
    v.render(&points);
    v.draw_regression_line(&RegressionLine::fit(&points), 200.0);
    assert!(v.hover(Pos::new(110.0, 420.0)));
    let tip = v.surface().of_class(MarkClass::Tooltip).next().unwrap();
    assert!(tip.muted);
    match &tip.shape {
        Shape::Text { text, at, .. } => {
            assert_eq!(text, "(50.00, 50.00)");
            assert_eq!(*at, Pos::new(115.0, 430.0));
        }
        other => panic!("unexpected {other:?}"),
    }
    v.hide_tooltip();
    assert_eq!(v.surface().count(MarkClass::Tooltip), 0);
}

#[test]
fn cursor_starts_off_screen_and_follows_pointer() {
    let mut v = view();
    let cursor = v.surface().of_class(MarkClass::Cursor).next().unwrap();
    assert_eq!(cursor.shape, Shape::Circle { center: CURSOR_HOME, radius: 8.0 });
    v.move_cursor(Pos::new(300.0, 200.0));
    assert_eq!(v.surface().count(MarkClass::Cursor), 1);
    let cursor = v.surface().of_class(MarkClass::Cursor).next().unwrap();
    assert_eq!(cursor.shape, Shape::Circle { center: Pos::new(300.0, 200.0), radius: 8.0 });
}
