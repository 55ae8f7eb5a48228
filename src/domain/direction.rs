/// The six neighbour directions of a flat-topped hexagon, clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// Next direction after a 60 degree clockwise turn.
    pub const fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::Clockwise => Self::ALL[(self.index() + 1) % 6],
            Turn::Counterclockwise => Self::ALL[(self.index() + 5) % 6],
        }
    }

    /// One cell step in doubled-height lattice coordinates.
    pub const fn lattice_step(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 2),
            Direction::NorthEast => (1, 1),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -2),
            Direction::SouthWest => (-1, -1),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// Lattice offset between a hexagon's origin and its neighbour's origin.
    pub const fn tile_offset(self) -> (i32, i32) {
        let (u, v) = self.lattice_step();
        (u * 10, v * 10)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::NorthWest => "NW",
        }
    }
}

/// A 60 degree turn of a hexagon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    Counterclockwise,
}

impl Turn {
    pub const fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::Counterclockwise,
            Turn::Counterclockwise => Turn::Clockwise,
        }
    }
}
