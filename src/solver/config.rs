//! Optimizer configuration.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Default fixed-point scale: two decimal digits of precision.
pub const DEFAULT_SCALE: u32 = 100;

/// Optional refinement applied after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Improvement {
    /// Keep the constructed tour as is.
    #[default]
    None,
    /// Run 2-opt until no improving move remains.
    TwoOpt,
}

/// Errors loading or validating a [`SolverConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The scale factor must be positive.
    #[error("scale must be greater than zero")]
    ZeroScale,
    /// The config file could not be opened.
    #[error("cannot read config '{path}': {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The config document could not be parsed.
    #[error("invalid solver config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for [`RouteOptimizer`](super::RouteOptimizer).
///
/// Missing fields take their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use u_tour::solver::{Improvement, SolverConfig};
///
/// let config = SolverConfig::from_json_reader(r#"{ "improvement": "two_opt" }"#.as_bytes()).unwrap();
/// assert_eq!(config.scale, 100);
/// assert_eq!(config.improvement, Improvement::TwoOpt);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Multiplier applied to distances before rounding to integers.
    pub scale: u32,
    /// Post-construction refinement.
    pub improvement: Improvement,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            improvement: Improvement::None,
        }
    }
}

impl SolverConfig {
    /// Sets the scale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the refinement pass.
    pub fn with_improvement(mut self, improvement: Improvement) -> Self {
        self.improvement = improvement;
        self
    }

    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        Ok(())
    }

    /// Reads and validates a JSON config.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_reader(file)
    }
}
