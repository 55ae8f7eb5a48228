//! Step strategy enum for selecting how pass 1 of a grid step runs.
//!
//! Both strategies produce identical generations; they only differ in how the
//! per-hexagon evaluations are scheduled.

use serde::{Deserialize, Serialize};

/// Available evaluation strategies for `HexGrid::step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStrategy {
    /// Hexagons evaluated one after another on the calling thread
    Serial,
    /// Hexagons evaluated on the rayon thread pool
    #[default]
    Parallel,
}

impl StepStrategy {
    /// Get all available strategies
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel]
    }

    /// Display name for logs and benchmark output
    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Serial",
            StepStrategy::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "One hexagon at a time, single thread",
            StepStrategy::Parallel => "Hexagons evaluated in parallel with rayon",
        }
    }
}
