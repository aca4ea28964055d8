// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the point store, regression math, scales and chart view.

pub mod error;
pub mod types;
pub mod geometry;
pub mod point;
pub mod store;
pub mod regression;
pub mod scale;
pub mod grid;
pub mod axis;
pub mod scene;
pub mod theme;
pub mod view;
pub mod input;
pub mod config;
pub mod svg;

pub use error::{Error, Result};
pub use types::Insets;
pub use geometry::{Pos, RectF32};
pub use point::Point;
pub use store::PointStore;
pub use regression::{correlation, intercept, slope, RegressionLine};
pub use scale::{LinearScale, Scales, ScaleTransform};
pub use axis::Axis;
pub use scene::{Mark, MarkClass, Scene, Shape, Surface};
pub use theme::{Color, Theme};
pub use view::{ChartView, ViewStyle};
pub use input::{Action, InputController, PointerOutcome, Toolbar};
pub use config::Config;
