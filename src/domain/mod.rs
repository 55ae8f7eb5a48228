mod cell;
mod direction;
mod error;
mod hex_grid;
mod hexagon;
pub mod layout;
mod level;
pub mod neighbors;
mod patterns;
pub mod rotation;
mod rules;
mod strategy;

pub use cell::Cell;
pub use direction::{Direction, Turn};
pub use error::{GridError, LevelError, PatternError};
pub use hex_grid::{HexGrid, PendingStep, neighbor_coord, row_len};
pub use hexagon::{CellBuffer, ChangeListener, HexCoord, Hexagon, Neighbors, OUT_OF_BOUNDS, RotationState};
pub use layout::Position;
pub use level::{LevelData, TileKind};
pub use patterns::{Pattern, presets};
pub use rules::{Rule, HexLifeRule, SparseLifeRule, all_rules, default_rule, rule_by_name};
pub use strategy::StepStrategy;
