//! Hexagon patterns and the `.pat` text format.
//!
//! A pattern file lists one code per hexagon cell, top row first and each row
//! left to right. Whitespace and unknown characters are ignored, so the file
//! can be indented to look like the hexagon it describes.

use super::cell::Cell;
use super::error::PatternError;
use super::hexagon::{CellBuffer, Hexagon};
use super::layout::{self, CELL_COUNT, Position};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Represents the contents of one hexagon that can be stamped onto a grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub description: String,
    cells: CellBuffer,
}

fn cell_code(code: char) -> Option<Cell> {
    match code {
        'o' | 'O' | '0' => Some(Cell::Dead),
        'x' | 'X' => Some(Cell::Alive),
        'b' | 'B' => Some(Cell::Stone),
        's' | 'S' => Some(Cell::Spawner),
        _ => None,
    }
}

impl Pattern {
    /// Create a pattern from the coordinates of its alive cells. Positions
    /// outside the hexagon are ignored.
    pub fn new(name: &str, description: &str, alive: &[(usize, usize)]) -> Self {
        let pattern = Self {
            name: name.to_string(),
            description: description.to_string(),
            cells: CellBuffer::blank(),
        };
        alive
            .iter()
            .fold(pattern, |pattern, &(x, y)| pattern.with_cell(x, y, Cell::Alive))
    }

    /// Set one cell, returning the updated pattern.
    pub fn with_cell(mut self, x: usize, y: usize, cell: Cell) -> Self {
        let position = Position::new(x, y);
        if position.is_part_of_hexagon() {
            self.cells.get_mut(position).set(cell);
        }
        self
    }

    /// Parse `.pat` text. Exactly one code per hexagon cell is required.
    /// The first non-empty comment line becomes the description.
    pub fn parse(name: &str, text: &str) -> Result<Self, PatternError> {
        let mut order = layout::pattern_order();
        let mut cells = CellBuffer::blank();
        let mut read = 0;
        let mut description = None;

        for line in text.lines().map(str::trim) {
            if let Some(comment) = line.strip_prefix('#') {
                let comment = comment.trim();
                if description.is_none() && !comment.is_empty() {
                    description = Some(comment.to_string());
                }
                continue;
            }
            for cell in line.chars().filter_map(cell_code) {
                let Some(position) = order.next() else {
                    return Err(PatternError::TooManyCells { expected: CELL_COUNT });
                };
                cells.get_mut(position).set(cell);
                read += 1;
            }
        }

        if read < CELL_COUNT {
            return Err(PatternError::TooFewCells {
                expected: CELL_COUNT,
                got: read,
            });
        }

        let pattern = Self {
            name: name.to_string(),
            description: description.unwrap_or_default(),
            cells,
        };
        debug!(pattern = %pattern.name, alive = pattern.alive_count(), "pattern parsed");
        Ok(pattern)
    }

    /// Read a `.pat` file. The pattern is named after the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|error| PatternError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::parse(&name, &text)
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells.get(Position::new(x, y))
    }

    /// Every hexagon cell in file order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        layout::pattern_order().map(|position| (position, self.cells.get(position)))
    }

    pub fn alive_count(&self) -> usize {
        self.cells.alive_count()
    }

    /// A detached hexagon holding the pattern, ready for `set_pattern`.
    pub fn template(&self) -> Hexagon {
        let mut template = Hexagon::template();
        for (position, cell) in self.cells() {
            template.set_cell(position.x, position.y, cell);
        }
        template
    }
}

/// Built-in patterns
pub mod presets {
    use super::*;

    /// Every cell dead
    pub fn blank() -> Pattern {
        Pattern::new("Blank", "Every cell dead", &[])
    }

    /// Three cells on the north-west rim that spill into the neighbours
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Seed on the north-west rim, grows across borders",
            &[(1, 17), (1, 18), (1, 19)],
        )
    }

    /// Two spawners two cells apart keep feeding the cell between them
    pub fn beacon() -> Pattern {
        Pattern::new("Beacon", "Two spawners around the centre", &[])
            .with_cell(3, 8, Cell::Spawner)
            .with_cell(3, 12, Cell::Spawner)
    }

    /// A wedge at the east vertex, next to both eastern neighbours
    pub fn corner() -> Pattern {
        Pattern::new(
            "Corner",
            "Wedge filling the east corner",
            &[(6, 10), (5, 10), (5, 9), (5, 11)],
        )
    }

    /// Get all preset patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![blank(), glider(), beacon(), corner()]
    }

    /// Look a preset up by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}
