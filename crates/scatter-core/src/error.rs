// File: crates/scatter-core/src/error.rs
// Summary: Library error type for sampling, config and point-file failures.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Sampling needs a finite, non-empty half-open range.
    #[error("invalid sampling range [{min}, {max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("failed to access '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid point file: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
