use crate::domain::{HexGrid, Rule, StepStrategy, rule_by_name};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or validating a simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Indicates an invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),

    /// The JSON document could not be decoded.
    #[error("cannot parse configuration: {0}")]
    Parse(String),

    /// The configuration file could not be read.
    #[error("cannot read configuration {path}: {message}")]
    Io {
        /// File that failed.
        path: String,
        /// Underlying I/O error.
        message: String,
    },
}

/// Settings for a headless simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Hexagons in even rows.
    pub width: usize,
    /// Rows of hexagons.
    pub height: usize,
    /// Milliseconds between simulation steps.
    pub tick_interval_ms: u64,
    /// How pass 1 of a step is scheduled.
    pub strategy: StepStrategy,
    /// Rule name, see `all_rules`.
    pub rule: String,
    /// Optional RNG seed for reproducible boards.
    pub rng_seed: Option<u64>,
    /// Probability of a cell starting alive.
    pub initial_density: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 15,
            tick_interval_ms: 100,
            strategy: StepStrategy::default(),
            rule: "HexLife".to_string(),
            rng_seed: None,
            initial_density: 0.0,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid("board dimensions must be non-zero"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive"));
        }
        if !(0.0..=1.0).contains(&self.initial_density) {
            return Err(ConfigError::Invalid("initial_density must be in [0, 1]"));
        }
        if rule_by_name(&self.rule).is_none() {
            return Err(ConfigError::Invalid("unknown rule name"));
        }
        Ok(())
    }

    /// Decode and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|error| ConfigError::Parse(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn rule(&self) -> Result<Box<dyn Rule>, ConfigError> {
        rule_by_name(&self.rule).ok_or(ConfigError::Invalid("unknown rule name"))
    }

    /// Empty board with the configured rule and strategy.
    pub fn build_grid(&self) -> Result<HexGrid, ConfigError> {
        self.validate()?;
        Ok(HexGrid::new(self.width, self.height)
            .with_rule(self.rule()?)
            .with_strategy(self.strategy))
    }
}
