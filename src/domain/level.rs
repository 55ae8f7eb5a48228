//! Level files (`.lvl`): board dimensions plus a tile map.
//!
//! ```text
//! # comment
//! level.width=3
//! level.height=3
//! data
//! o b o
//!  m o
//! o o o
//! ```
//!
//! The data section lists `width` codes per row, top row first. Odd rows hold
//! one tile fewer, so their last code is read and ignored.

use super::error::LevelError;
use super::hex_grid::{HexGrid, row_len};
use super::hexagon::Hexagon;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const DATA_SEPARATOR: &str = "data";
const PROP_WIDTH: &str = "level.width";
const PROP_HEIGHT: &str = "level.height";
const DEFAULT_WIDTH: usize = 5;
const DEFAULT_HEIGHT: usize = 15;

/// What a level places at one board slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Plain,
    Stone,
    Missing,
}

impl TileKind {
    fn from_code(code: char) -> Option<TileKind> {
        match code {
            'o' | 'O' | '0' => Some(TileKind::Plain),
            'b' | 'B' => Some(TileKind::Stone),
            'm' | 'M' => Some(TileKind::Missing),
            _ => None,
        }
    }
}

/// A parsed level. Nothing is built until [`LevelData::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelData {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

fn dimension(key: &'static str, value: &str) -> Result<usize, LevelError> {
    value
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| LevelError::InvalidDimension {
            key,
            value: value.to_string(),
        })
}

impl LevelData {
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut lines = text.lines().map(str::trim);
        let mut width = DEFAULT_WIDTH;
        let mut height = DEFAULT_HEIGHT;

        let mut found_data = false;
        for line in lines.by_ref() {
            if line.starts_with('#') {
                continue;
            }
            if line.eq_ignore_ascii_case(DATA_SEPARATOR) {
                found_data = true;
                break;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                PROP_WIDTH => width = dimension(PROP_WIDTH, value.trim())?,
                PROP_HEIGHT => height = dimension(PROP_HEIGHT, value.trim())?,
                other => debug!(key = other, "ignoring level property"),
            }
        }
        if !found_data {
            return Err(LevelError::MissingDataSection);
        }

        let expected = width
            .checked_mul(height)
            .ok_or(LevelError::DimensionsTooLarge { width, height })?;

        let tiles: Vec<TileKind> = lines
            .filter(|line| !line.starts_with('#'))
            .flat_map(str::chars)
            .filter_map(TileKind::from_code)
            .collect();
        if tiles.len() != expected {
            return Err(LevelError::TileCountMismatch {
                expected,
                got: tiles.len(),
            });
        }

        debug!(width, height, "level parsed");
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|error| LevelError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        })?;
        Self::parse(&text)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Tile at board coordinates. Codes run from the top row down.
    pub fn kind(&self, x: usize, y: usize) -> TileKind {
        if x >= self.width || y >= self.height {
            return TileKind::Missing;
        }
        let row_from_top = self.height - 1 - y;
        self.tiles[row_from_top * self.width + x]
    }

    /// Build the board: plain tiles, stone tiles and gaps.
    pub fn build(&self) -> Result<HexGrid, LevelError> {
        let tiles = (0..self.width)
            .map(|x| {
                (0..self.height)
                    .map(|y| self.tile(x, y))
                    .collect()
            })
            .collect();
        let grid = HexGrid::from_tiles(self.width, self.height, tiles)?;
        info!("Level built with {} hexagons", grid.len());
        Ok(grid)
    }

    fn tile(&self, x: usize, y: usize) -> Option<Hexagon> {
        if x >= row_len(self.width, y) {
            return None;
        }
        let mut hexagon = Hexagon::new(x as i32, y as i32, true);
        match self.kind(x, y) {
            TileKind::Missing => return None,
            TileKind::Stone => hexagon.set_stone(),
            TileKind::Plain => {}
        }
        Some(hexagon)
    }
}
