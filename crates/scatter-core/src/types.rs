// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (sizes, margins).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: u32 = 960;
/// Default surface height in pixels, margins included.
pub const HEIGHT: u32 = 500;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Margins with room above the plot for the action toolbar.
    pub const fn with_toolbar() -> Self {
        Self::new(60, 20, 44, 30)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60, 20, 20, 30)
    }
}
