use super::cell::Cell;
use super::direction::{Direction, Turn};
use super::error::GridError;
use super::layout::{self, HEX_HEIGHT, HEX_WIDTH, Position};
use super::neighbors::{Tile, neighbor_table};
use super::rotation::rotation_table;
use super::rules::Rule;
use rand::Rng;
use std::fmt;
use tracing::{debug, info, trace};

/// Coordinates of a hexagon tile on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct HexCoord {
    pub x: i32,
    pub y: i32,
}

impl HexCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// One 7x21 cell array. Padding positions hold the sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    cells: [[Cell; HEX_HEIGHT]; HEX_WIDTH],
}

impl CellBuffer {
    const VOID: CellBuffer = CellBuffer {
        cells: [[Cell::SENTINEL; HEX_HEIGHT]; HEX_WIDTH],
    };

    /// Every hexagon cell dead, padding void.
    pub fn blank() -> Self {
        let mut buffer = Self::VOID;
        for position in layout::positions() {
            buffer.cells[position.x][position.y] = Cell::Dead;
        }
        buffer
    }

    pub fn get(&self, position: Position) -> Cell {
        self.cells
            .get(position.x)
            .and_then(|column| column.get(position.y))
            .copied()
            .unwrap_or(Cell::SENTINEL)
    }

    /// Mutable access for a position inside the 7x21 rectangle. Panics
    /// outside it.
    pub(crate) fn get_mut(&mut self, position: Position) -> &mut Cell {
        &mut self.cells[position.x][position.y]
    }

    pub fn alive_count(&self) -> usize {
        layout::positions().filter(|&p| self.get(p).is_alive()).count()
    }
}

/// Callback fired whenever a hexagon's visible cells change.
///
/// Listeners run inside the grid operation that caused the change, so when
/// the grid sits behind a `SharedGrid` the lock is still held. A listener
/// must not lock the grid itself; forward the coordinate (for example over a
/// channel) and read the grid once the operation has returned.
pub type ChangeListener = Box<dyn Fn(HexCoord) + Send + Sync>;

/// Rotation state machine: `Idle -> Rotating -> Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RotationState {
    #[default]
    Idle,
    Rotating(Turn),
}

/// The tile answered for every coordinate that has no hexagon.
pub static OUT_OF_BOUNDS: Hexagon = Hexagon::out_of_bounds();

/// The six hexagons around one tile, in `Direction::ALL` order.
#[derive(Clone, Copy)]
pub struct Neighbors<'a>([&'a Hexagon; 6]);

impl<'a> Neighbors<'a> {
    pub fn new(tiles: [&'a Hexagon; 6]) -> Self {
        Self(tiles)
    }

    /// No neighbours at all: every cross-border read is the sentinel.
    pub fn isolated() -> Neighbors<'static> {
        Neighbors([&OUT_OF_BOUNDS; 6])
    }

    pub fn get(&self, direction: Direction) -> &'a Hexagon {
        self.0[direction.index()]
    }
}

/// A hexagon tile holding a double-buffered 109-cell automaton.
pub struct Hexagon {
    buffers: [CellBuffer; 2],
    current: usize,
    coord: HexCoord,
    alive: bool,
    active: bool,
    rotation: RotationState,
    attached: bool,
    listener: Option<ChangeListener>,
}

impl Hexagon {
    /// Create a hexagon with every cell dead. `alive == false` makes a tile
    /// that exists on the board but never takes part in the simulation.
    pub fn new(x: i32, y: i32, alive: bool) -> Self {
        let blank = CellBuffer::blank();
        Self {
            buffers: [blank, blank],
            current: 0,
            coord: HexCoord::new(x, y),
            alive,
            active: true,
            rotation: RotationState::Idle,
            attached: false,
            listener: None,
        }
    }

    /// A detached hexagon used as a pattern template.
    pub fn template() -> Self {
        Self::new(-1, -1, true)
    }

    const fn out_of_bounds() -> Self {
        Self {
            buffers: [CellBuffer::VOID, CellBuffer::VOID],
            current: 0,
            coord: HexCoord::new(-1, -1),
            alive: false,
            active: false,
            rotation: RotationState::Idle,
            attached: false,
            listener: None,
        }
    }

    pub const fn coord(&self) -> HexCoord {
        self.coord
    }

    pub const fn x(&self) -> i32 {
        self.coord.x
    }

    pub const fn y(&self) -> i32 {
        self.coord.y
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Alive, not paused and not mid-rotation.
    pub const fn is_active(&self) -> bool {
        self.alive && self.active && matches!(self.rotation, RotationState::Idle)
    }

    pub const fn is_paused(&self) -> bool {
        !self.active
    }

    pub const fn is_rotating(&self) -> bool {
        matches!(self.rotation, RotationState::Rotating(_))
    }

    pub const fn rotation_state(&self) -> RotationState {
        self.rotation
    }

    /// Cells may be edited while the tile exists and is not rotating.
    pub const fn is_editable(&self) -> bool {
        self.alive && !self.is_rotating()
    }

    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Mark the hexagon as owned by a grid.
    pub(crate) fn attached(mut self) -> Self {
        self.attached = true;
        self
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    /// Register the single change listener. Tiles that are not alive never
    /// change, so subscribing to them is accepted and ignored.
    pub fn subscribe(&mut self, listener: ChangeListener) -> Result<(), GridError> {
        if !self.alive {
            trace!(hexagon = %self.coord, "ignoring listener for dead hexagon");
            return Ok(());
        }
        if self.listener.is_some() {
            return Err(GridError::ListenerAlreadySet(self.coord));
        }
        self.listener = Some(listener);
        Ok(())
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    pub fn notify_changed(&self) {
        if let Some(listener) = &self.listener {
            listener(self.coord);
        }
    }

    fn current_buffer(&self) -> &CellBuffer {
        &self.buffers[self.current]
    }

    /// Cell at a local coordinate. Inactive, rotating and dead tiles as well
    /// as out-of-range and padding positions answer the sentinel.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cell_at(Position::new(x, y))
    }

    pub fn cell_at(&self, position: Position) -> Cell {
        if !self.is_active() {
            return Cell::SENTINEL;
        }
        self.current_buffer().get(position)
    }

    /// Every hexagon cell as a renderer would see it.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        layout::positions().map(|position| (position, self.cell_at(position)))
    }

    /// Stored value regardless of tile state.
    pub(crate) fn stored(&self, position: Position) -> Cell {
        self.current_buffer().get(position)
    }

    pub(crate) fn stored_mut(&mut self, position: Position) -> &mut Cell {
        self.buffers[self.current].get_mut(position)
    }

    /// Alive cells in the current generation, counted regardless of tile state.
    pub fn alive_count(&self) -> usize {
        self.current_buffer().alive_count()
    }

    /// Flip a single cell between alive and dead. Returns whether it changed.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> bool {
        let position = Position::new(x, y);
        if !self.is_editable() || !position.is_part_of_hexagon() {
            return false;
        }
        let cell = self.stored_mut(position);
        let before = *cell;
        cell.toggle_alive();
        let changed = *cell != before;
        if changed {
            self.notify_changed();
        }
        changed
    }

    /// Overwrite a single cell. Returns whether it changed.
    pub fn set_cell(&mut self, x: usize, y: usize, value: Cell) -> bool {
        let position = Position::new(x, y);
        if !self.is_editable() || !position.is_part_of_hexagon() {
            return false;
        }
        let cell = self.stored_mut(position);
        let before = *cell;
        cell.set(value);
        let changed = *cell != before;
        if changed {
            self.notify_changed();
        }
        changed
    }

    /// Copy every cell of `template` into both buffers.
    pub fn set_pattern(&mut self, template: &Hexagon) {
        for position in layout::positions() {
            let value = template.stored(position);
            for buffer in &mut self.buffers {
                buffer.get_mut(position).set(value);
            }
        }
        debug!(hexagon = %self.coord, alive = self.alive_count(), "pattern stamped");
        self.notify_changed();
    }

    /// Turn the tile into stone. Shared border cells are left as they are.
    pub fn set_stone(&mut self) {
        info!("Setting hexagon at {} to be a stone hexagon", self.coord);
        for position in layout::positions().filter(|p| !p.is_shared()) {
            for buffer in &mut self.buffers {
                buffer.get_mut(position).set_stone();
            }
        }
    }

    /// Make every plain cell alive with `probability`, dead otherwise.
    pub fn populate_random<R: Rng>(&mut self, rng: &mut R, probability: f64) -> bool {
        if !self.is_editable() {
            return false;
        }
        let probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        for position in layout::positions() {
            let cell = self.stored_mut(position);
            if rng.random_bool(probability) {
                cell.set_alive();
            } else {
                cell.set_dead();
            }
        }
        self.notify_changed();
        true
    }

    /// Rotate the cells immediately: the turned contents are written into the
    /// other buffer, which then becomes current.
    pub fn rotate(&mut self, turn: Turn) {
        let other = 1 - self.current;
        let source = self.buffers[self.current];
        rotation_table().rotate(&source, &mut self.buffers[other], turn);
        self.flip();
    }

    /// Enter the rotating state. Fails on dead tiles and tiles already turning.
    pub fn begin_rotation(&mut self, turn: Turn) -> bool {
        if !self.alive || self.is_rotating() {
            return false;
        }
        debug!(hexagon = %self.coord, ?turn, "rotation started");
        self.rotation = RotationState::Rotating(turn);
        true
    }

    /// Apply the pending rotation and return to idle. `None` when idle.
    pub fn finish_rotation(&mut self) -> Option<Turn> {
        let RotationState::Rotating(turn) = self.rotation else {
            return None;
        };
        self.rotation = RotationState::Idle;
        self.rotate(turn);
        debug!(hexagon = %self.coord, ?turn, "rotation finished");
        Some(turn)
    }

    /// Compute the next generation from the current buffer without touching it.
    pub fn evaluate(&self, neighbors: &Neighbors<'_>, rule: &dyn Rule) -> CellBuffer {
        let table = neighbor_table();
        let current = self.current_buffer();
        let mut next = *current;
        for position in layout::positions() {
            let alive_neighbors = Direction::ALL
                .into_iter()
                .filter_map(|direction| table.link(position, direction))
                .filter(|link| match link.tile {
                    Tile::Own => current.get(link.position).is_alive(),
                    Tile::Adjacent(direction) => {
                        neighbors.get(direction).cell_at(link.position).is_alive()
                    }
                })
                .count() as u8;
            let cell = current.get(position);
            *next.get_mut(position) = cell.evolve(rule.next_alive(cell.is_alive(), alive_neighbors));
        }
        next
    }

    /// Store an evaluated generation in the other buffer and make it current.
    pub(crate) fn commit(&mut self, next: CellBuffer) {
        let other = 1 - self.current;
        self.buffers[other] = next;
        self.flip();
    }

    /// Step a hexagon that has no neighbours. Inactive tiles are skipped.
    pub fn step_isolated(&mut self, rule: &dyn Rule) -> bool {
        if !self.is_active() {
            return false;
        }
        let next = self.evaluate(&Neighbors::isolated(), rule);
        self.commit(next);
        true
    }

    fn flip(&mut self) {
        self.current = 1 - self.current;
        self.notify_changed();
    }
}

impl fmt::Debug for Hexagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hexagon")
            .field("coord", &self.coord)
            .field("alive", &self.alive)
            .field("active", &self.active)
            .field("rotation", &self.rotation)
            .field("alive_cells", &self.alive_count())
            .finish_non_exhaustive()
    }
}
