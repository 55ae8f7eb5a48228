use super::cell::Cell;
use super::direction::{Direction, Turn};
use super::error::GridError;
use super::hexagon::{CellBuffer, ChangeListener, HexCoord, Hexagon, Neighbors, OUT_OF_BOUNDS};
use super::layout::Position;
use super::neighbors::SHARED_EDGES;
use super::rules::{Rule, default_rule};
use super::strategy::StepStrategy;
use rand::Rng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, trace, warn};

/// Hexagons in row `y` of a board `width` tiles wide. Odd rows are inset
/// half a tile and hold one fewer, so every odd tile sits between two even ones.
pub const fn row_len(width: usize, y: usize) -> usize {
    if y % 2 == 0 { width } else { width.saturating_sub(1) }
}

/// Coordinates of the tile adjacent to `coord` in `direction`.
pub const fn neighbor_coord(coord: HexCoord, direction: Direction) -> HexCoord {
    let HexCoord { x, y } = coord;
    let even = y % 2 == 0;
    match direction {
        Direction::North => HexCoord::new(x, y + 2),
        Direction::South => HexCoord::new(x, y - 2),
        Direction::NorthEast if even => HexCoord::new(x, y + 1),
        Direction::NorthEast => HexCoord::new(x + 1, y + 1),
        Direction::SouthEast if even => HexCoord::new(x, y - 1),
        Direction::SouthEast => HexCoord::new(x + 1, y - 1),
        Direction::SouthWest if even => HexCoord::new(x - 1, y - 1),
        Direction::SouthWest => HexCoord::new(x, y - 1),
        Direction::NorthWest if even => HexCoord::new(x - 1, y + 1),
        Direction::NorthWest => HexCoord::new(x, y + 1),
    }
}

/// Result of pass 1 of a step: the next generation of every active hexagon,
/// not yet visible to anyone.
#[derive(Debug)]
pub struct PendingStep {
    revision: u64,
    updates: Vec<(usize, CellBuffer)>,
}

impl PendingStep {
    /// Hexagons that will advance when the step is committed.
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// The board: hexagon tiles in a honeycomb layout plus the step orchestration.
pub struct HexGrid {
    width: usize,
    height: usize,
    tiles: Vec<Hexagon>,
    index: HashMap<HexCoord, usize>,
    rule: Box<dyn Rule>,
    strategy: StepStrategy,
    generation: u64,
    revision: u64,
}

impl HexGrid {
    /// Create a board with every tile present, alive and dead-celled.
    pub fn new(width: usize, height: usize) -> Self {
        let tiles = (0..height)
            .flat_map(|y| (0..row_len(width, y)).map(move |x| (x, y)))
            .map(|(x, y)| Hexagon::new(x as i32, y as i32, true).attached())
            .collect();
        Self::assemble(width, height, tiles)
    }

    /// Create a board from a column-major tile matrix (`tiles[x][y]`).
    /// `None` marks a missing tile. Nothing is kept if any entry is invalid.
    pub fn from_tiles(
        width: usize,
        height: usize,
        tiles: Vec<Vec<Option<Hexagon>>>,
    ) -> Result<Self, GridError> {
        let rows = tiles.iter().map(Vec::len).min().unwrap_or(0);
        if tiles.len() != width || tiles.iter().any(|column| column.len() != height) {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                columns: tiles.len(),
                rows,
            });
        }

        let mut placed = Vec::new();
        for (x, column) in tiles.into_iter().enumerate() {
            for (y, slot) in column.into_iter().enumerate() {
                let Some(hexagon) = slot else { continue };
                let expected = HexCoord::new(x as i32, y as i32);
                if hexagon.coord() != expected {
                    return Err(GridError::CoordinateMismatch {
                        expected,
                        found: hexagon.coord(),
                    });
                }
                if hexagon.is_attached() {
                    return Err(GridError::AlreadyAttached(expected));
                }
                if x >= row_len(width, y) {
                    warn!(hexagon = %expected, "dropping hexagon outside the board");
                    continue;
                }
                placed.push(hexagon.attached());
            }
        }
        placed.sort_by_key(|hexagon| (hexagon.y(), hexagon.x()));
        Ok(Self::assemble(width, height, placed))
    }

    fn assemble(width: usize, height: usize, tiles: Vec<Hexagon>) -> Self {
        let index = tiles
            .iter()
            .enumerate()
            .map(|(i, hexagon)| (hexagon.coord(), i))
            .collect();
        info!("Created hex grid {}x{} with {} hexagons", width, height, tiles.len());
        Self {
            width,
            height,
            tiles,
            index,
            rule: default_rule(),
            strategy: StepStrategy::default(),
            generation: 0,
            revision: 0,
        }
    }

    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_strategy(mut self, strategy: StepStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        self.rule = rule;
    }

    pub fn set_strategy(&mut self, strategy: StepStrategy) {
        self.strategy = strategy;
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub const fn strategy(&self) -> StepStrategy {
        self.strategy
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn row_len(&self, y: usize) -> usize {
        row_len(self.width, y)
    }

    /// Present tiles, alive or not.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Completed steps since construction.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Coordinates of every present tile, bottom row first.
    pub fn coords(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.tiles.iter().map(Hexagon::coord)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Hexagon> + '_ {
        self.tiles.iter()
    }

    /// Tile at `(x, y)`; the out-of-bounds sentinel when there is none.
    pub fn hexagon(&self, x: i32, y: i32) -> &Hexagon {
        self.tile(HexCoord::new(x, y))
    }

    pub fn hexagon_mut(&mut self, x: i32, y: i32) -> Option<&mut Hexagon> {
        let index = *self.index.get(&HexCoord::new(x, y))?;
        self.tiles.get_mut(index)
    }

    /// Tile adjacent to `(x, y)` in `direction`.
    pub fn neighbor(&self, x: i32, y: i32, direction: Direction) -> &Hexagon {
        self.tile(neighbor_coord(HexCoord::new(x, y), direction))
    }

    fn tile(&self, coord: HexCoord) -> &Hexagon {
        self.index
            .get(&coord)
            .and_then(|&i| self.tiles.get(i))
            .unwrap_or(&OUT_OF_BOUNDS)
    }

    fn neighbors_of(&self, coord: HexCoord) -> Neighbors<'_> {
        Neighbors::new(Direction::ALL.map(|direction| self.tile(neighbor_coord(coord, direction))))
    }

    /// Pass 1: evaluate every active hexagon against the current buffers of
    /// its neighbours. Nothing observable changes.
    pub fn evaluate(&self) -> PendingStep {
        let rule = self.rule.as_ref();
        let evaluate_tile = |(index, hexagon): (usize, &Hexagon)| {
            (index, hexagon.evaluate(&self.neighbors_of(hexagon.coord()), rule))
        };
        let updates: Vec<(usize, CellBuffer)> = match self.strategy {
            StepStrategy::Serial => self
                .tiles
                .iter()
                .enumerate()
                .filter(|(_, hexagon)| hexagon.is_active())
                .map(evaluate_tile)
                .collect(),
            StepStrategy::Parallel => self
                .tiles
                .par_iter()
                .enumerate()
                .filter(|(_, hexagon)| hexagon.is_active())
                .map(evaluate_tile)
                .collect(),
        };
        PendingStep {
            revision: self.revision,
            updates,
        }
    }

    /// Pass 2: flip every evaluated hexagon to its new generation. A step
    /// evaluated before the grid was last modified is rejected.
    pub fn commit(&mut self, pending: PendingStep) -> Result<(), GridError> {
        if pending.revision != self.revision {
            return Err(GridError::StaleStep {
                pending: pending.revision,
                current: self.revision,
            });
        }
        self.apply(pending);
        Ok(())
    }

    /// Advance every active hexagon by one generation.
    pub fn step(&mut self) {
        let pending = self.evaluate();
        self.apply(pending);
    }

    fn apply(&mut self, pending: PendingStep) {
        let stepped = pending.updates.len();
        for (index, next) in pending.updates {
            self.tiles[index].commit(next);
        }
        self.generation += 1;
        self.revision += 1;
        trace!(generation = self.generation, hexagons = stepped, "grid stepped");
    }

    /// Push the shared border cells of `(x, y)` into every active neighbour.
    pub fn enforce_shared_cells(&mut self, x: i32, y: i32) -> bool {
        let coord = HexCoord::new(x, y);
        let Some(&source) = self.index.get(&coord) else {
            return false;
        };
        if !self.tiles[source].is_alive() {
            return false;
        }
        for edge in &SHARED_EDGES {
            let Some(&target) = self.index.get(&neighbor_coord(coord, edge.direction)) else {
                continue;
            };
            if !self.tiles[target].is_active() {
                continue;
            }
            let values = edge.pairs.map(|pair| self.tiles[source].stored(pair.own));
            let neighbor = &mut self.tiles[target];
            for (pair, value) in edge.pairs.iter().zip(values) {
                neighbor.stored_mut(pair.theirs).set(value);
            }
            neighbor.notify_changed();
        }
        self.revision += 1;
        true
    }

    /// Enforce shared cells for every tile, bottom row first.
    pub fn enforce_all_shared_cells(&mut self) {
        let coords: Vec<HexCoord> = self.coords().collect();
        for coord in coords {
            self.enforce_shared_cells(coord.x, coord.y);
        }
    }

    /// Whether every shared pair between two active adjacent tiles is equal.
    pub fn shared_cells_consistent(&self) -> bool {
        self.tiles.iter().filter(|hexagon| hexagon.is_active()).all(|hexagon| {
            SHARED_EDGES.iter().all(|edge| {
                let neighbor = self.tile(neighbor_coord(hexagon.coord(), edge.direction));
                !neighbor.is_active()
                    || edge
                        .pairs
                        .iter()
                        .all(|pair| hexagon.stored(pair.own) == neighbor.stored(pair.theirs))
            })
        })
    }

    /// Flip a cell of tile `(x, y)`. Shared cells are pushed to the neighbours.
    pub fn toggle_cell(&mut self, x: i32, y: i32, cell_x: usize, cell_y: usize) -> bool {
        let Some(hexagon) = self.hexagon_mut(x, y) else {
            return false;
        };
        if !hexagon.toggle_cell(cell_x, cell_y) {
            return false;
        }
        self.revision += 1;
        if Position::new(cell_x, cell_y).is_shared() {
            self.enforce_shared_cells(x, y);
        }
        true
    }

    /// Overwrite a cell of tile `(x, y)`. Shared cells are pushed to the neighbours.
    pub fn set_cell(&mut self, x: i32, y: i32, cell_x: usize, cell_y: usize, cell: Cell) -> bool {
        let Some(hexagon) = self.hexagon_mut(x, y) else {
            return false;
        };
        if !hexagon.set_cell(cell_x, cell_y, cell) {
            return false;
        }
        self.revision += 1;
        if Position::new(cell_x, cell_y).is_shared() {
            self.enforce_shared_cells(x, y);
        }
        true
    }

    /// Copy a template hexagon onto tile `(x, y)` and sync its borders.
    pub fn stamp_pattern(&mut self, x: i32, y: i32, template: &Hexagon) -> bool {
        let Some(hexagon) = self.hexagon_mut(x, y) else {
            return false;
        };
        if !hexagon.is_editable() {
            debug!(hexagon = %hexagon.coord(), "pattern rejected, hexagon not editable");
            return false;
        }
        hexagon.set_pattern(template);
        self.revision += 1;
        self.enforce_shared_cells(x, y);
        true
    }

    /// Start turning tile `(x, y)`. It is skipped by steps and reads as
    /// the sentinel until [`HexGrid::commit_rotation`].
    pub fn begin_rotation(&mut self, x: i32, y: i32, turn: Turn) -> bool {
        let started = self
            .hexagon_mut(x, y)
            .is_some_and(|hexagon| hexagon.begin_rotation(turn));
        if started {
            self.revision += 1;
        }
        started
    }

    /// Apply the pending turn of tile `(x, y)` and sync its borders.
    pub fn commit_rotation(&mut self, x: i32, y: i32) -> Option<Turn> {
        let turn = self.hexagon_mut(x, y)?.finish_rotation()?;
        self.revision += 1;
        self.enforce_shared_cells(x, y);
        Some(turn)
    }

    /// Begin and commit a turn in one go.
    pub fn rotate(&mut self, x: i32, y: i32, turn: Turn) -> bool {
        self.begin_rotation(x, y, turn) && self.commit_rotation(x, y).is_some()
    }

    pub fn set_active(&mut self, x: i32, y: i32, active: bool) -> bool {
        let Some(hexagon) = self.hexagon_mut(x, y) else {
            return false;
        };
        hexagon.set_active(active);
        self.revision += 1;
        true
    }

    pub fn toggle_active(&mut self, x: i32, y: i32) -> bool {
        let Some(hexagon) = self.hexagon_mut(x, y) else {
            return false;
        };
        hexagon.toggle_active();
        self.revision += 1;
        true
    }

    /// Register the change listener of tile `(x, y)`.
    pub fn subscribe(&mut self, x: i32, y: i32, listener: ChangeListener) -> Result<(), GridError> {
        self.hexagon_mut(x, y)
            .ok_or(GridError::MissingTile(HexCoord::new(x, y)))?
            .subscribe(listener)
    }

    /// Randomise every editable tile, then sync all borders.
    pub fn populate_random<R: Rng>(&mut self, rng: &mut R, probability: f64) {
        let populated = self
            .tiles
            .iter_mut()
            .map(|hexagon| hexagon.populate_random(&mut *rng, probability))
            .filter(|&changed| changed)
            .count();
        self.revision += 1;
        self.enforce_all_shared_cells();
        debug!(hexagons = populated, probability, "grid populated");
    }

    /// Alive cells summed over all alive tiles. Shared border cells count
    /// once per tile holding them.
    pub fn alive_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|hexagon| hexagon.is_alive())
            .map(Hexagon::alive_count)
            .sum()
    }
}

impl fmt::Debug for HexGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HexGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("tiles", &self.tiles.len())
            .field("rule", &self.rule.name())
            .field("strategy", &self.strategy)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn glider() -> Hexagon {
        let mut template = Hexagon::template();
        for y in 17..=19 {
            template.set_cell(1, y, Cell::Alive);
        }
        template
    }

    fn snapshot(grid: &HexGrid) -> Vec<Cell> {
        grid.tiles()
            .flat_map(|hexagon| layout::positions().map(|p| hexagon.cell_at(p)))
            .collect()
    }

    #[test]
    fn test_rows_alternate_length() {
        let grid = HexGrid::new(3, 4);
        assert_eq!(grid.row_len(0), 3);
        assert_eq!(grid.row_len(1), 2);
        assert_eq!(grid.len(), 10);
        assert!(grid.hexagon(2, 0).is_alive());
        assert!(!grid.hexagon(2, 1).is_alive());
    }

    #[test]
    fn test_neighbor_coords_follow_row_parity() {
        let even = HexCoord::new(1, 2);
        assert_eq!(neighbor_coord(even, Direction::North), HexCoord::new(1, 4));
        assert_eq!(neighbor_coord(even, Direction::South), HexCoord::new(1, 0));
        assert_eq!(neighbor_coord(even, Direction::NorthEast), HexCoord::new(1, 3));
        assert_eq!(neighbor_coord(even, Direction::NorthWest), HexCoord::new(0, 3));
        assert_eq!(neighbor_coord(even, Direction::SouthEast), HexCoord::new(1, 1));
        assert_eq!(neighbor_coord(even, Direction::SouthWest), HexCoord::new(0, 1));

        let odd = HexCoord::new(0, 1);
        assert_eq!(neighbor_coord(odd, Direction::NorthEast), HexCoord::new(1, 2));
        assert_eq!(neighbor_coord(odd, Direction::NorthWest), HexCoord::new(0, 2));
        assert_eq!(neighbor_coord(odd, Direction::SouthEast), HexCoord::new(1, 0));
        assert_eq!(neighbor_coord(odd, Direction::SouthWest), HexCoord::new(0, 0));
    }

    #[test]
    fn test_odd_tiles_sit_between_even_tiles() {
        for (width, height) in [(3, 3), (4, 5), (5, 15)] {
            let grid = HexGrid::new(width, height);
            for coord in grid.coords().filter(|c| c.y % 2 == 1 && c.y + 1 < height as i32) {
                for direction in [
                    Direction::NorthEast,
                    Direction::SouthEast,
                    Direction::SouthWest,
                    Direction::NorthWest,
                ] {
                    assert!(
                        grid.neighbor(coord.x, coord.y, direction).is_alive(),
                        "{coord} has no {} neighbour on a {width}x{height} board",
                        direction.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_tile_of_a_small_board_touches_another() {
        let grid = HexGrid::new(2, 2);
        for coord in grid.coords() {
            let touching = Direction::ALL
                .into_iter()
                .filter(|&direction| grid.neighbor(coord.x, coord.y, direction).is_alive())
                .count();
            assert!(touching > 0, "{coord} is isolated");
        }
        assert_eq!(grid.neighbor(0, 1, Direction::SouthWest).coord(), HexCoord::new(0, 0));
        assert_eq!(grid.neighbor(0, 1, Direction::SouthEast).coord(), HexCoord::new(1, 0));
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        let grid = HexGrid::new(4, 6);
        for coord in grid.coords() {
            for direction in Direction::ALL {
                let there = neighbor_coord(coord, direction);
                assert_eq!(neighbor_coord(there, direction.opposite()), coord);
            }
        }
    }

    #[test]
    fn test_missing_coordinates_answer_sentinel_tile() {
        let grid = HexGrid::new(2, 2);
        assert!(!grid.hexagon(5, 5).is_alive());
        assert!(!grid.hexagon(-1, 0).is_alive());
        assert_eq!(grid.hexagon(5, 5).cell(3, 10), Cell::SENTINEL);
        assert!(!grid.neighbor(0, 0, Direction::South).is_alive());
        assert!(!grid.neighbor(0, 0, Direction::NorthWest).is_alive());
        assert_eq!(grid.neighbor(0, 0, Direction::NorthEast).coord(), HexCoord::new(0, 1));
    }

    #[test]
    fn test_from_tiles_validates_matrix() {
        let too_narrow = HexGrid::from_tiles(2, 1, vec![vec![None]]);
        assert!(matches!(too_narrow, Err(GridError::DimensionMismatch { columns: 1, .. })));

        let misplaced = HexGrid::from_tiles(1, 1, vec![vec![Some(Hexagon::new(4, 4, true))]]);
        assert_eq!(
            misplaced.unwrap_err(),
            GridError::CoordinateMismatch {
                expected: HexCoord::new(0, 0),
                found: HexCoord::new(4, 4)
            }
        );

        let owned = HexGrid::from_tiles(1, 1, vec![vec![Some(Hexagon::new(0, 0, true).attached())]]);
        assert_eq!(owned.unwrap_err(), GridError::AlreadyAttached(HexCoord::new(0, 0)));
    }

    #[test]
    fn test_missing_and_dead_tiles() {
        let tiles = vec![
            vec![Some(Hexagon::new(0, 0, true)), Some(Hexagon::new(0, 1, false))],
            vec![None, None],
        ];
        let mut grid = HexGrid::from_tiles(2, 2, tiles).unwrap();
        assert_eq!(grid.len(), 2);
        assert!(!grid.hexagon(1, 0).is_alive());
        assert!(!grid.hexagon(0, 1).is_alive());
        assert_eq!(
            grid.subscribe(1, 0, Box::new(|_| {})),
            Err(GridError::MissingTile(HexCoord::new(1, 0)))
        );
        assert!(!grid.toggle_cell(0, 1, 3, 10));
        assert!(grid.evaluate().len() == 1);
    }

    #[test]
    fn test_toggle_shared_cell_reaches_neighbors() {
        let mut grid = HexGrid::new(2, 3);
        assert!(grid.toggle_cell(0, 0, 3, 20));
        assert_eq!(grid.hexagon(0, 2).cell(3, 0), Cell::Alive);

        assert!(grid.toggle_cell(0, 0, 5, 18));
        assert_eq!(grid.hexagon(0, 1).cell(0, 8), Cell::Alive);

        assert!(grid.toggle_cell(1, 0, 1, 18));
        assert_eq!(grid.hexagon(0, 1).cell(6, 8), Cell::Alive);
        assert!(grid.shared_cells_consistent());
    }

    #[test]
    fn test_stamp_syncs_borders() {
        let mut grid = HexGrid::new(2, 3);
        let mut template = Hexagon::template();
        template.set_cell(0, 12, Cell::Alive);
        template.set_cell(3, 20, Cell::Spawner);
        assert!(grid.stamp_pattern(1, 0, &template));
        assert_eq!(grid.hexagon(0, 1).cell(5, 2), Cell::Alive);
        assert_eq!(grid.hexagon(1, 2).cell(3, 0), Cell::Spawner);
        assert!(grid.shared_cells_consistent());
    }

    #[test]
    fn test_paused_neighbors_are_not_written() {
        let mut grid = HexGrid::new(2, 3);
        grid.set_active(0, 2, false);
        grid.toggle_cell(0, 0, 3, 20);
        grid.set_active(0, 2, true);
        assert_eq!(grid.hexagon(0, 2).cell(3, 0), Cell::Dead);
    }

    #[test]
    fn test_rotation_commit_resyncs_borders() {
        let mut grid = HexGrid::new(2, 3);
        grid.set_cell(1, 0, 4, 20, Cell::Alive);
        assert_eq!(grid.hexagon(1, 2).cell(4, 0), Cell::Alive);

        assert!(grid.begin_rotation(1, 0, Turn::Counterclockwise));
        assert!(!grid.begin_rotation(1, 0, Turn::Clockwise));
        assert_eq!(grid.hexagon(1, 0).cell(4, 20), Cell::SENTINEL);
        assert_eq!(grid.evaluate().len(), grid.len() - 1);

        assert_eq!(grid.commit_rotation(1, 0), Some(Turn::Counterclockwise));
        assert_eq!(grid.commit_rotation(1, 0), None);
        assert_eq!(grid.hexagon(1, 0).cell(1, 18), Cell::Alive);
        assert_eq!(grid.hexagon(0, 1).cell(6, 8), Cell::Alive);
        assert_eq!(grid.hexagon(1, 2).cell(4, 0), Cell::Dead);
        assert!(grid.shared_cells_consistent());
    }

    #[test]
    fn test_evaluate_leaves_current_generation_visible() {
        let mut grid = HexGrid::new(2, 2);
        grid.stamp_pattern(0, 0, &glider());
        let before = snapshot(&grid);

        let pending = grid.evaluate();
        assert_eq!(pending.len(), 3);
        assert_eq!(snapshot(&grid), before);

        grid.commit(pending).unwrap();
        assert_eq!(grid.generation(), 1);
        assert_ne!(snapshot(&grid), before);
    }

    #[test]
    fn test_stale_step_is_rejected() {
        let mut grid = HexGrid::new(2, 2);
        let pending = grid.evaluate();
        grid.toggle_cell(0, 0, 3, 10);
        assert!(matches!(grid.commit(pending), Err(GridError::StaleStep { .. })));
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let mut serial = HexGrid::new(3, 5).with_strategy(StepStrategy::Serial);
        let mut parallel = HexGrid::new(3, 5).with_strategy(StepStrategy::Parallel);
        serial.populate_random(&mut StdRng::seed_from_u64(42), 0.3);
        parallel.populate_random(&mut StdRng::seed_from_u64(42), 0.3);
        assert_eq!(snapshot(&serial), snapshot(&parallel));

        for _ in 0..5 {
            serial.step();
            parallel.step();
            assert_eq!(snapshot(&serial), snapshot(&parallel));
        }
    }

    #[test]
    fn test_random_population_keeps_borders_consistent() {
        let mut grid = HexGrid::new(4, 7);
        grid.populate_random(&mut StdRng::seed_from_u64(9), 0.5);
        assert!(grid.alive_count() > 0);
        assert!(grid.shared_cells_consistent());
        for _ in 0..3 {
            grid.step();
            assert!(grid.shared_cells_consistent());
        }
    }
}
