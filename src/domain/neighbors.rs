//! Cell neighbour resolution across hexagon borders.
//!
//! Each direction has an ordered list of routes. The first route whose region
//! contains the cell decides which tile the neighbour lives in and the local
//! offset to apply; the offset depends on the row parity because odd rows are
//! staggered. The final route of every list stays inside the hexagon. The
//! resolved table covers all 109 x 6 cases and is built once.

use super::direction::Direction;
use super::layout::{self, HEX_HEIGHT, HEX_WIDTH, Position};
use std::sync::OnceLock;

/// Which tile a neighbouring cell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Own,
    Adjacent(Direction),
}

/// Where the neighbour of a cell is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellLink {
    pub tile: Tile,
    pub position: Position,
}

enum Region {
    Cells(&'static [(usize, usize)]),
    Row(usize),
    RowsFrom(usize),
    RowsUpTo(usize),
    Anywhere,
}

impl Region {
    fn contains(&self, position: Position) -> bool {
        match self {
            Region::Cells(cells) => cells.contains(&(position.x, position.y)),
            Region::Row(row) => position.y == *row,
            Region::RowsFrom(row) => position.y >= *row,
            Region::RowsUpTo(row) => position.y <= *row,
            Region::Anywhere => true,
        }
    }
}

struct Route {
    region: Region,
    via: Tile,
    even: (isize, isize),
    odd: (isize, isize),
}

const fn route(region: Region, via: Tile, even: (isize, isize), odd: (isize, isize)) -> Route {
    Route { region, via, even, odd }
}

// Shared cells of the four slanted edges.
const NE_EDGE: &[(usize, usize)] = &[(5, 18), (5, 15), (6, 12)];
const NW_EDGE: &[(usize, usize)] = &[(0, 12), (0, 15), (1, 18)];
const SE_EDGE: &[(usize, usize)] = &[(5, 2), (5, 5), (6, 8)];
const SW_EDGE: &[(usize, usize)] = &[(0, 8), (0, 5), (1, 2)];

// Outer rim cells whose diagonal neighbour lies across the matching edge.
const NE_RIM: &[(usize, usize)] = &[(4, 19), (5, 18), (5, 16), (5, 15), (5, 13), (6, 12), (6, 10)];
const SE_RIM: &[(usize, usize)] = &[(4, 1), (5, 2), (5, 4), (5, 5), (5, 7), (6, 8), (6, 10)];
const SW_RIM: &[(usize, usize)] = &[(0, 10), (0, 8), (0, 7), (0, 5), (1, 4), (1, 2), (1, 1)];
const NW_RIM: &[(usize, usize)] = &[(0, 10), (0, 12), (0, 13), (0, 15), (1, 16), (1, 18), (1, 19)];

use Direction::*;
use Tile::{Adjacent, Own};

const NORTH_ROUTES: &[Route] = &[
    route(Region::Cells(NE_EDGE), Adjacent(NorthEast), (-5, -8), (-5, -8)),
    route(Region::Cells(NW_EDGE), Adjacent(NorthWest), (5, -8), (5, -8)),
    route(Region::RowsFrom(19), Adjacent(North), (0, -18), (0, -18)),
    route(Region::Anywhere, Own, (0, 2), (0, 2)),
];

const SOUTH_ROUTES: &[Route] = &[
    route(Region::Cells(SE_EDGE), Adjacent(SouthEast), (-5, 8), (-5, 8)),
    route(Region::Cells(SW_EDGE), Adjacent(SouthWest), (5, 8), (5, 8)),
    route(Region::RowsUpTo(2), Adjacent(South), (0, 18), (0, 18)),
    route(Region::Anywhere, Own, (0, -2), (0, -2)),
];

const NORTH_EAST_ROUTES: &[Route] = &[
    route(Region::Row(20), Adjacent(North), (0, -19), (0, -19)),
    route(Region::Cells(NE_RIM), Adjacent(NorthEast), (-5, -9), (-4, -9)),
    route(Region::Cells(SE_EDGE), Adjacent(SouthEast), (-5, 11), (-4, 11)),
    route(Region::Anywhere, Own, (0, 1), (1, 1)),
];

const SOUTH_EAST_ROUTES: &[Route] = &[
    route(Region::Row(0), Adjacent(South), (0, 19), (0, 19)),
    route(Region::Cells(SE_RIM), Adjacent(SouthEast), (-5, 9), (-4, 9)),
    route(Region::Cells(NE_EDGE), Adjacent(NorthEast), (-5, -11), (-4, -11)),
    route(Region::Anywhere, Own, (0, -1), (1, -1)),
];

const SOUTH_WEST_ROUTES: &[Route] = &[
    route(Region::Row(0), Adjacent(South), (-1, 19), (-1, 19)),
    route(Region::Cells(SW_RIM), Adjacent(SouthWest), (4, 9), (5, 9)),
    route(Region::Cells(NW_EDGE), Adjacent(NorthWest), (4, -11), (5, -11)),
    route(Region::Anywhere, Own, (-1, -1), (0, -1)),
];

const NORTH_WEST_ROUTES: &[Route] = &[
    route(Region::Row(20), Adjacent(North), (-1, -19), (-1, -19)),
    route(Region::Cells(NW_RIM), Adjacent(NorthWest), (4, -9), (5, -9)),
    route(Region::Cells(SW_EDGE), Adjacent(SouthWest), (4, 11), (5, 11)),
    route(Region::Anywhere, Own, (-1, 1), (0, 1)),
];

const fn routes(direction: Direction) -> &'static [Route] {
    match direction {
        North => NORTH_ROUTES,
        NorthEast => NORTH_EAST_ROUTES,
        SouthEast => SOUTH_EAST_ROUTES,
        South => SOUTH_ROUTES,
        SouthWest => SOUTH_WEST_ROUTES,
        NorthWest => NORTH_WEST_ROUTES,
    }
}

/// A cell shared by two hexagons: `own` in this hexagon, `theirs` in the
/// neighbour across `SharedEdge::direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharedPair {
    pub own: Position,
    pub theirs: Position,
}

const fn pair(own: (usize, usize), theirs: (usize, usize)) -> SharedPair {
    SharedPair {
        own: Position::new(own.0, own.1),
        theirs: Position::new(theirs.0, theirs.1),
    }
}

/// The three cells a hexagon shares with its neighbour in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharedEdge {
    pub direction: Direction,
    pub pairs: [SharedPair; 3],
}

/// Copy lists used to keep duplicated border cells equal.
pub const SHARED_EDGES: [SharedEdge; 6] = [
    SharedEdge {
        direction: North,
        pairs: [pair((2, 20), (2, 0)), pair((3, 20), (3, 0)), pair((4, 20), (4, 0))],
    },
    SharedEdge {
        direction: South,
        pairs: [pair((2, 0), (2, 20)), pair((3, 0), (3, 20)), pair((4, 0), (4, 20))],
    },
    SharedEdge {
        direction: NorthEast,
        pairs: [pair((5, 18), (0, 8)), pair((5, 15), (0, 5)), pair((6, 12), (1, 2))],
    },
    SharedEdge {
        direction: SouthWest,
        pairs: [pair((0, 8), (5, 18)), pair((0, 5), (5, 15)), pair((1, 2), (6, 12))],
    },
    SharedEdge {
        direction: NorthWest,
        pairs: [pair((1, 18), (6, 8)), pair((0, 15), (5, 5)), pair((0, 12), (5, 2))],
    },
    SharedEdge {
        direction: SouthEast,
        pairs: [pair((6, 8), (1, 18)), pair((5, 5), (0, 15)), pair((5, 2), (0, 12))],
    },
];

/// Resolved neighbour links for every cell and direction.
pub struct NeighborTable {
    links: [[[Option<CellLink>; 6]; HEX_HEIGHT]; HEX_WIDTH],
}

impl NeighborTable {
    fn build() -> Self {
        let mut links = [[[None; 6]; HEX_HEIGHT]; HEX_WIDTH];
        for position in layout::positions() {
            for direction in Direction::ALL {
                links[position.x][position.y][direction.index()] =
                    Some(resolve(position, direction));
            }
        }
        Self { links }
    }

    /// Neighbour of `position` in `direction`; `None` for padding positions.
    pub fn link(&self, position: Position, direction: Direction) -> Option<CellLink> {
        self.links
            .get(position.x)?
            .get(position.y)?
            .get(direction.index())
            .copied()
            .flatten()
    }
}

fn resolve(position: Position, direction: Direction) -> CellLink {
    let Some(route) = routes(direction)
        .iter()
        .find(|route| route.region.contains(position))
    else {
        panic!("no neighbour route for {position:?} towards {direction:?}");
    };
    let (dx, dy) = if position.is_even_row() { route.even } else { route.odd };
    match position.offset(dx, dy) {
        Some(target) if target.is_part_of_hexagon() => CellLink { tile: route.via, position: target },
        _ => panic!("neighbour route from {position:?} towards {direction:?} leaves the hexagon"),
    }
}

/// The shared neighbour table.
pub fn neighbor_table() -> &'static NeighborTable {
    static TABLE: OnceLock<NeighborTable> = OnceLock::new();
    TABLE.get_or_init(NeighborTable::build)
}
