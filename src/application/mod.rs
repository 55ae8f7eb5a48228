mod config;
mod driver;
mod shared;
mod simulation;

pub use config::{ConfigError, SimulationConfig};
pub use driver::Driver;
pub use shared::SharedGrid;
pub use simulation::Simulation;
