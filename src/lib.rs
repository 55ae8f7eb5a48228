// Domain layer - Hexagon geometry, stepping and file formats
pub mod domain;

// Application layer - Grid lock, configuration and drivers
pub mod application;

// Re-exports for convenience
pub use domain::{Cell, HexGrid, Hexagon, Pattern, presets, StepStrategy};
pub use application::{Driver, SharedGrid, Simulation, SimulationConfig};
