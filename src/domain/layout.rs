//! Fixed geometry of one hexagon's local cell space.
//!
//! A hexagon lives in a 7x21 rectangle. Odd rows sit half a cell to the right
//! of even rows, and only a diamond of 109 positions belongs to the hexagon;
//! the rest of the rectangle is padding. Vertical neighbours are two rows
//! apart, so the local space is a doubled-height hex lattice whose lattice
//! coordinates are `(2x + y % 2, y)`.

/// Columns in the local rectangle.
pub const HEX_WIDTH: usize = 7;
/// Rows in the local rectangle.
pub const HEX_HEIGHT: usize = 21;
/// Cells that are part of a hexagon.
pub const CELL_COUNT: usize = 109;

/// Position inside a hexagon's local rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by an offset, staying inside the local rectangle.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Position> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < HEX_WIDTH && y < HEX_HEIGHT).then_some(Position { x, y })
    }

    pub const fn is_even_row(self) -> bool {
        self.y % 2 == 0
    }

    pub const fn is_part_of_hexagon(self) -> bool {
        is_part_of_hexagon(self.x, self.y)
    }

    pub const fn is_shared(self) -> bool {
        is_shared_cell(self.x, self.y)
    }

    /// Doubled-height lattice coordinates.
    pub const fn lattice(self) -> (i32, i32) {
        (2 * self.x as i32 + (self.y % 2) as i32, self.y as i32)
    }

    /// Inverse of [`Position::lattice`]; `None` for points that are not on
    /// the lattice or fall outside the hexagon.
    pub fn from_lattice(u: i32, v: i32) -> Option<Position> {
        if v < 0 || (u - v).rem_euclid(2) != 0 {
            return None;
        }
        let x = (u - v.rem_euclid(2)) / 2;
        if x < 0 {
            return None;
        }
        let position = Position::new(x as usize, v as usize);
        position.is_part_of_hexagon().then_some(position)
    }
}

/// Whether `(x, y)` is one of the 109 cells of the hexagon.
pub const fn is_part_of_hexagon(x: usize, y: usize) -> bool {
    if x >= HEX_WIDTH || y >= HEX_HEIGHT {
        return false;
    }
    match y {
        8 | 10 | 12 => true,
        5 | 7 | 9 | 11 | 13 | 15 => x < 6,
        2 | 4 | 6 | 14 | 16 | 18 => x > 0 && x < 6,
        1 | 3 | 17 | 19 => x > 0 && x < 5,
        _ => x > 1 && x < 5,
    }
}

/// Whether `(x, y)` is duplicated in an adjacent hexagon's local array.
pub const fn is_shared_cell(x: usize, y: usize) -> bool {
    match y {
        0 | 20 => is_part_of_hexagon(x, y),
        2 | 18 => x == 1 || x == 5,
        5 | 15 => x == 0 || x == 5,
        8 | 12 => x == 0 || x == 6,
        _ => false,
    }
}

/// Every cell of the hexagon, bottom row first, left to right.
pub fn positions() -> impl Iterator<Item = Position> {
    (0..HEX_HEIGHT)
        .flat_map(|y| (0..HEX_WIDTH).map(move |x| Position::new(x, y)))
        .filter(|position| position.is_part_of_hexagon())
}

/// Order in which pattern files list cells: top row first, left to right.
pub fn pattern_order() -> impl Iterator<Item = Position> {
    (0..HEX_HEIGHT)
        .rev()
        .flat_map(|y| (0..HEX_WIDTH).map(move |x| Position::new(x, y)))
        .filter(|position| position.is_part_of_hexagon())
}
