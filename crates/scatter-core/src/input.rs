// File: crates/scatter-core/src/input.rs
// Summary: Pointer and button handling: clicks append points, toolbar buttons dispatch view actions.

use tracing::info;

use crate::geometry::{Pos, RectF32};
use crate::point::Point;
use crate::regression::RegressionLine;
use crate::scale::ScaleTransform;
use crate::scene::Surface;
use crate::store::PointStore;
use crate::types::Insets;
use crate::view::ChartView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Remove points, line and residuals, and empty the store.
    Clear,
    DrawLine,
    /// Remove the line together with its residuals.
    ClearLine,
    DrawResiduals,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Clear, Action::DrawLine, Action::ClearLine, Action::DrawResiduals];

    pub fn label(self) -> &'static str {
        match self {
            Action::Clear => "Clear",
            Action::DrawLine => "Draw line",
            Action::ClearLine => "Clear line",
            Action::DrawResiduals => "Draw residuals",
        }
    }

    /// Stable identifier for logs and markup.
    pub fn element_id(self) -> &'static str {
        match self {
            Action::Clear => "clear-chart",
            Action::DrawLine => "line-draw",
            Action::ClearLine => "line-clear",
            Action::DrawResiduals => "residuals-draw",
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'c' => Some(Action::Clear),
            'l' => Some(Action::DrawLine),
            'k' => Some(Action::ClearLine),
            'r' => Some(Action::DrawResiduals),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Button {
    pub action: Action,
    pub rect: RectF32,
}

/// Row of action buttons in surface pixels.
#[derive(Clone, Debug, Default)]
pub struct Toolbar {
    buttons: Vec<Button>,
}

impl Toolbar {
    pub fn layout(origin: Pos, (w, h): (f32, f32), gap: f32) -> Self {
        let buttons = Action::ALL
            .iter()
            .enumerate()
            .map(|(i, &action)| Button {
                action,
                rect: RectF32::from_ltwh(origin.x + i as f32 * (w + gap), origin.y, w, h),
            })
            .collect();
        Self { buttons }
    }

    /// Buttons along the top margin, left-aligned with the plot.
    pub fn for_insets(insets: &Insets) -> Self {
        Self::layout(Pos::new(insets.left as f32, 8.0), (110.0, 26.0), 8.0)
    }

    pub fn buttons(&self) -> &[Button] { &self.buttons }

    pub fn hit(&self, at: Pos) -> Option<Action> {
        self.buttons.iter().find(|b| b.rect.contains(at)).map(|b| b.action)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutcome {
    Added(Point),
    Action(Action),
}

#[derive(Clone, Debug, Default)]
pub struct InputController {
    toolbar: Toolbar,
}

impl InputController {
    pub fn new() -> Self { Self::default() }

    pub fn with_toolbar(toolbar: Toolbar) -> Self { Self { toolbar } }

    pub fn toolbar(&self) -> &Toolbar { &self.toolbar }

    /// Cursor marker follows the pointer; tooltip tracks what is under it.
    pub fn pointer_move<S: Surface>(&self, view: &mut ChartView<S>, at: Pos) {
        view.move_cursor(at);
        view.hover(at);
    }

    pub fn pointer_leave<S: Surface>(&self, view: &mut ChartView<S>) {
        view.hide_tooltip();
    }

    /// Press on a button runs its action; anywhere else appends the data-space point and re-renders.
    /// Presses in the margins still add points, with coordinates outside the domain.
    pub fn pointer_down<S: Surface>(
        &self,
        store: &mut PointStore,
        view: &mut ChartView<S>,
        at: Pos,
    ) -> PointerOutcome {
        if let Some(action) = self.toolbar.hit(at) {
            self.apply(action, store, view);
            return PointerOutcome::Action(action);
        }
        let point = view.scales().from_screen(at);
        store.add(point);
        view.refresh(store.points());
        PointerOutcome::Added(point)
    }

    pub fn apply<S: Surface>(&self, action: Action, store: &mut PointStore, view: &mut ChartView<S>) {
        info!(action = action.element_id(), points = store.len(), "apply action");
        match action {
            Action::Clear => {
                view.clear_points();
                view.clear_line();
                view.clear_residuals();
                store.clear();
            }
            Action::DrawLine => {
                let line = RegressionLine::fit(store.points());
                view.draw_regression_line(&line, store.max_x());
            }
            Action::ClearLine => {
                view.clear_line();
                view.clear_residuals();
            }
            Action::DrawResiduals => {
                let line = RegressionLine::fit(store.points());
                view.draw_residuals(store.points(), &line);
            }
        }
    }
}
