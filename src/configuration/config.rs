//! Configuration types for loading run settings from YAML.
//!
//! A run configuration consists of:
//!
//! - [`EngineConfig`]       – force-pass scheduling
//! - [`ParametersConfig`]   – step size, iteration count and physical constants
//! - [`TrajectoryConfig`]   – how much path history each body keeps
//! - [`PresentationConfig`] – seed and texture count for tag assignment
//! - [`RunConfig`]          – top-level wrapper
//!
//! Every field has a default, so a partial (or empty) file is valid.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   parallel: true          # rayon force pass
//!   threads: 4              # omit for rayon's default
//!
//! parameters:
//!   dt: 2000.0              # seconds per iteration
//!   iterations: 1           # iterations per advance
//!   G: 6.6738480e-11        # gravitational constant
//!   eps2: 7.38905609893065  # softening, e^2
//!
//! trajectory:
//!   window: 512             # omit to keep the whole path
//!
//! presentation:
//!   seed: 42
//!   textures: 8
//! ```
//!
//! Bodies are not part of this file; they come from the record stream read
//! by [`crate::configuration::input`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::forces::G;
use crate::simulation::states::SOFTENING;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Force-pass scheduling
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub parallel: bool, // `true` - rayon data-parallel force pass, `false` - single thread
    pub threads: Option<usize>, // Size of the worker pool, `None` lets rayon decide
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Stepping and physical parameters
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,         // duration of one iteration
    pub iterations: u32, // iterations per advance
    pub G: f64,          // gravitational constant
    pub eps2: f64,       // softening - keeps forces finite for coincident points
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: 2000.0,
            iterations: 1,
            G,
            eps2: SOFTENING,
        }
    }
}

/// Trajectory history
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TrajectoryConfig {
    pub window: Option<usize>, // keep only the latest `window` positions, `None` keeps all
}

/// Tag assignment
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PresentationConfig {
    pub seed: u64,     // seed for colors and texture picks
    pub textures: u32, // number of texture handles on offer, 0 = none
}

/// Top-level run configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RunConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub trajectory: TrajectoryConfig,
    pub presentation: PresentationConfig,
}

impl RunConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not an empty map
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(s)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_yaml_str(&text).map_err(|source| ConfigError::Yaml {
            path: display,
            source,
        })
    }
}
