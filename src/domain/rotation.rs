//! 60 degree rotation of a hexagon's cells.
//!
//! The permutation is derived from the hexagon geometry: every cell is turned
//! in cube coordinates around the centre cell `(3, 10)`. It is computed once
//! and shared by all hexagons.

use super::direction::Turn;
use super::hexagon::CellBuffer;
use super::layout::{self, HEX_HEIGHT, HEX_WIDTH, Position};
use std::sync::OnceLock;

const CENTER: Position = Position::new(3, 10);

type Cube = (i32, i32, i32);

fn to_cube(position: Position) -> Cube {
    let (u, v) = position.lattice();
    let (cu, cv) = CENTER.lattice();
    let q = u - cu;
    let r = (v - cv - q) / 2;
    (q, -q - r, r)
}

fn from_cube((q, _, r): Cube) -> Option<Position> {
    let (cu, cv) = CENTER.lattice();
    Position::from_lattice(q + cu, 2 * r + q + cv)
}

/// Where the cell at `position` ends up after one turn.
fn turned(position: Position, turn: Turn) -> Option<Position> {
    let (x, y, z) = to_cube(position);
    let cube = match turn {
        Turn::Clockwise => (-y, -z, -x),
        Turn::Counterclockwise => (-z, -x, -y),
    };
    from_cube(cube)
}

/// For every target position, the source position it is read from.
pub struct RotationTable {
    clockwise: [[Option<Position>; HEX_HEIGHT]; HEX_WIDTH],
    counterclockwise: [[Option<Position>; HEX_HEIGHT]; HEX_WIDTH],
}

impl RotationTable {
    fn build() -> Self {
        let mut clockwise = [[None; HEX_HEIGHT]; HEX_WIDTH];
        let mut counterclockwise = [[None; HEX_HEIGHT]; HEX_WIDTH];
        for source in layout::positions() {
            let (Some(cw), Some(ccw)) = (
                turned(source, Turn::Clockwise),
                turned(source, Turn::Counterclockwise),
            ) else {
                panic!("rotating {source:?} leaves the hexagon");
            };
            clockwise[cw.x][cw.y] = Some(source);
            counterclockwise[ccw.x][ccw.y] = Some(source);
        }
        Self { clockwise, counterclockwise }
    }

    /// Position whose value lands on `target` after `turn`.
    pub fn source(&self, target: Position, turn: Turn) -> Option<Position> {
        let table = match turn {
            Turn::Clockwise => &self.clockwise,
            Turn::Counterclockwise => &self.counterclockwise,
        };
        table.get(target.x)?.get(target.y).copied().flatten()
    }

    /// Position the value at `source` moves to after `turn`.
    pub fn destination(&self, source: Position, turn: Turn) -> Option<Position> {
        self.source(source, turn.inverse())
    }

    /// Write the turned contents of `source` into `target`.
    pub fn rotate(&self, source: &CellBuffer, target: &mut CellBuffer, turn: Turn) {
        for position in layout::positions() {
            if let Some(from) = self.source(position, turn) {
                target.get_mut(position).set(source.get(from));
            }
        }
    }
}

/// The shared rotation table.
pub fn rotation_table() -> &'static RotationTable {
    static TABLE: OnceLock<RotationTable> = OnceLock::new();
    TABLE.get_or_init(RotationTable::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    #[test]
    fn test_table_is_a_permutation() {
        let table = rotation_table();
        for turn in [Turn::Clockwise, Turn::Counterclockwise] {
            let mut sources: Vec<Position> = layout::positions()
                .map(|p| table.source(p, turn).expect("source for hexagon cell"))
                .collect();
            sources.sort();
            sources.dedup();
            assert_eq!(sources.len(), layout::CELL_COUNT);
        }
    }

    #[test]
    fn test_center_is_fixed() {
        let table = rotation_table();
        assert_eq!(table.source(CENTER, Turn::Clockwise), Some(CENTER));
        assert_eq!(table.source(CENTER, Turn::Counterclockwise), Some(CENTER));
    }

    #[test]
    fn test_known_counterclockwise_moves() {
        let table = rotation_table();
        let moves = [
            ((2, 0), (5, 2)),
            ((3, 0), (5, 5)),
            ((4, 0), (6, 8)),
            ((0, 8), (2, 0)),
            ((6, 8), (5, 18)),
            ((1, 18), (0, 8)),
            ((4, 20), (1, 18)),
        ];
        for ((x1, y1), (x2, y2)) in moves {
            assert_eq!(
                table.destination(Position::new(x1, y1), Turn::Counterclockwise),
                Some(Position::new(x2, y2))
            );
            assert_eq!(
                table.source(Position::new(x1, y1), Turn::Clockwise),
                Some(Position::new(x2, y2))
            );
        }
    }

    #[test]
    fn test_six_turns_are_identity() {
        let table = rotation_table();
        for position in layout::positions() {
            for turn in [Turn::Clockwise, Turn::Counterclockwise] {
                let end = (0..6).try_fold(position, |p, _| table.destination(p, turn));
                assert_eq!(end, Some(position));
            }
        }
    }

    #[test]
    fn test_turn_moves_lattice_directions() {
        // The neighbour to the north ends up to the north-east after a
        // clockwise turn.
        let table = rotation_table();
        let north_of_center = Position::new(3, 12);
        let moved = table.destination(north_of_center, Turn::Clockwise).unwrap();
        let (u, v) = moved.lattice();
        let (cu, cv) = CENTER.lattice();
        assert_eq!((u - cu, v - cv), Direction::NorthEast.lattice_step());
    }

    #[test]
    fn test_shared_cells_stay_on_the_rim() {
        let table = rotation_table();
        for position in layout::positions().filter(|p| p.is_shared()) {
            let moved = table.destination(position, Turn::Clockwise).unwrap();
            assert!(moved.is_shared(), "{position:?} moved to {moved:?}");
        }
    }
}
