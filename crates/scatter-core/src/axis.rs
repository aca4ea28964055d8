// File: crates/scatter-core/src/axis.rs
// Summary: Axis model with caption and ticks derived from a scale's domain.

use crate::grid::{format_tick, nice_ticks, tick_step};
use crate::scale::LinearScale;

/// Approximate number of ticks per axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis, in plot-relative pixels.
    pub offset: f32,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub orient: Orient,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn from_scale(label: impl Into<String>, orient: Orient, scale: &LinearScale, count: usize) -> Self {
        let (d0, d1) = scale.domain;
        let step = tick_step(d0, d1, count);
        let ticks = nice_ticks(d0, d1, count)
            .into_iter()
            .map(|value| Tick { value, offset: scale.map(value), label: format_tick(value, step) })
            .collect();
        Self { label: label.into(), orient, ticks }
    }

    pub fn default_x(scale: &LinearScale) -> Self {
        Self::from_scale("X", Orient::Bottom, scale, DEFAULT_TICK_COUNT)
    }

    pub fn default_y(scale: &LinearScale) -> Self {
        Self::from_scale("Y", Orient::Left, scale, DEFAULT_TICK_COUNT)
    }
}
