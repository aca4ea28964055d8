// File: crates/scatter-core/src/config.rs
// Summary: TOML configuration (surface size, margins, theme, seeding, mark sizes); every field optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewStyle;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: String,
    pub seed_count: usize,
    pub seed_min: f64,
    pub seed_max: f64,
    pub point_radius: f32,
    pub cursor_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        let style = ViewStyle::default();
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: "light".to_string(),
            seed_count: 10,
            seed_min: 0.0,
            seed_max: 500.0,
            point_radius: style.point_radius,
            cursor_radius: style.cursor_radius,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let cfg = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn view_style(&self) -> ViewStyle {
        ViewStyle { point_radius: self.point_radius, cursor_radius: self.cursor_radius, ..ViewStyle::default() }
    }
}
