//! Error types for the hexagon automaton.

use super::hexagon::HexCoord;
use thiserror::Error;

/// Errors raised while reading pattern data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// More cell codes than a hexagon has cells.
    #[error("too many cells in pattern: expected {expected}")]
    TooManyCells {
        /// Cells a hexagon holds.
        expected: usize,
    },

    /// Input ended before every cell had a code.
    #[error("too few cells in pattern: expected {expected}, got {got}")]
    TooFewCells {
        /// Cells a hexagon holds.
        expected: usize,
        /// Codes actually read.
        got: usize,
    },

    /// The pattern file could not be read.
    #[error("cannot read pattern {path}: {message}")]
    Io {
        /// File that failed.
        path: String,
        /// Underlying I/O error.
        message: String,
    },
}

/// Errors raised while reading level data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// No `data` line separates the header from the tiles.
    #[error("invalid level data: data section not found")]
    MissingDataSection,

    /// A header dimension is not a positive integer.
    #[error("invalid level header: {key} = {value:?}")]
    InvalidDimension {
        /// Header key.
        key: &'static str,
        /// Raw value.
        value: String,
    },

    /// `width * height` does not fit in memory addressing.
    #[error("level dimensions {width}x{height} are too large")]
    DimensionsTooLarge {
        /// Header width.
        width: usize,
        /// Header height.
        height: usize,
    },

    /// The tile section does not describe exactly `width * height` tiles.
    #[error("level file invalid: expected {expected} hexagons, got {got}")]
    TileCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Tile codes read.
        got: usize,
    },

    /// The level file could not be read.
    #[error("cannot read level {path}: {message}")]
    Io {
        /// File that failed.
        path: String,
        /// Underlying I/O error.
        message: String,
    },

    /// Building the grid from valid level data failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors raised by grid construction and grid invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The tile matrix does not have `width` columns of `height` entries.
    #[error("tile matrix is {columns}x{rows}, expected {width}x{height}")]
    DimensionMismatch {
        /// Expected columns.
        width: usize,
        /// Expected rows.
        height: usize,
        /// Columns supplied.
        columns: usize,
        /// Shortest column supplied.
        rows: usize,
    },

    /// A hexagon was placed at a slot that does not match its coordinates.
    #[error("hexagon {found} placed at slot {expected}")]
    CoordinateMismatch {
        /// Slot in the matrix.
        expected: HexCoord,
        /// Coordinates stored in the hexagon.
        found: HexCoord,
    },

    /// The hexagon already belongs to a grid.
    #[error("hexagon {0} is already attached to a grid")]
    AlreadyAttached(HexCoord),

    /// The hexagon already has a change subscriber.
    #[error("hexagon {0} already has a change listener")]
    ListenerAlreadySet(HexCoord),

    /// No tile exists at the coordinates.
    #[error("no hexagon at {0}")]
    MissingTile(HexCoord),

    /// The grid changed between evaluating and committing a step.
    #[error("pending step for revision {pending} cannot be committed at revision {current}")]
    StaleStep {
        /// Revision the step was evaluated against.
        pending: u64,
        /// Current grid revision.
        current: u64,
    },
}
