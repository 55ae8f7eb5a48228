/// Cell is the single automaton unit inside a hexagon.
///
/// `Dead` and `Alive` are the plain states the rule flips between. `Spawner`
/// and `Stone` are special: the rule never rewrites them. `Void` is the
/// immutable sentinel answered for padding positions, out-of-range queries and
/// cells of tiles that must not expose their real contents.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
    Spawner,
    Stone,
    Void,
}

impl Cell {
    /// The sentinel returned by every query that has no real cell behind it.
    pub const SENTINEL: Cell = Cell::Void;

    /// Alive for neighbour counting and rendering. Spawners count as alive.
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive | Cell::Spawner)
    }

    /// Anything the automaton must not toggle.
    pub const fn is_special(self) -> bool {
        !matches!(self, Cell::Alive | Cell::Dead)
    }

    pub const fn is_sentinel(self) -> bool {
        matches!(self, Cell::Void)
    }

    pub const fn is_stone(self) -> bool {
        matches!(self, Cell::Stone)
    }

    pub const fn is_spawner(self) -> bool {
        matches!(self, Cell::Spawner)
    }

    /// Copy the state of `other` into this cell.
    ///
    /// The sentinel never changes, and copying the sentinel into a real cell
    /// stores a plain dead cell.
    pub fn set(&mut self, other: Cell) {
        if self.is_sentinel() {
            return;
        }
        *self = if other.is_sentinel() { Cell::Dead } else { other };
    }

    pub fn set_alive(&mut self) {
        if *self == Cell::Dead {
            *self = Cell::Alive;
        }
    }

    pub fn set_dead(&mut self) {
        if *self == Cell::Alive {
            *self = Cell::Dead;
        }
    }

    pub fn set_stone(&mut self) {
        if !self.is_sentinel() {
            *self = Cell::Stone;
        }
    }

    pub fn set_spawner(&mut self) {
        if !self.is_sentinel() {
            *self = Cell::Spawner;
        }
    }

    /// Swap `Alive` and `Dead`; special cells are left alone.
    pub fn toggle_alive(&mut self) {
        *self = match *self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
            other => other,
        };
    }

    /// Apply a rule verdict, returning the next state of this cell.
    pub fn evolve(self, next_alive: bool) -> Self {
        let mut next = self;
        if next_alive {
            next.set_alive();
        } else {
            next.set_dead();
        }
        next
    }

    pub const fn name(self) -> &'static str {
        match self {
            Cell::Dead => "dead",
            Cell::Alive => "alive",
            Cell::Spawner => "spawner",
            Cell::Stone => "stone",
            Cell::Void => "void",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liveness() {
        assert!(Cell::Alive.is_alive());
        assert!(Cell::Spawner.is_alive());
        assert!(!Cell::Dead.is_alive());
        assert!(!Cell::Stone.is_alive());
        assert!(!Cell::SENTINEL.is_alive());
    }

    #[test]
    fn test_special_cells() {
        assert!(!Cell::Alive.is_special());
        assert!(!Cell::Dead.is_special());
        assert!(Cell::Spawner.is_special());
        assert!(Cell::Stone.is_special());
    }

    #[test]
    fn test_set_alive_and_dead_only_touch_plain_cells() {
        let mut stone = Cell::Stone;
        stone.set_alive();
        assert_eq!(stone, Cell::Stone);

        let mut spawner = Cell::Spawner;
        spawner.set_dead();
        assert_eq!(spawner, Cell::Spawner);

        let mut cell = Cell::Dead;
        cell.set_alive();
        assert_eq!(cell, Cell::Alive);
        cell.set_dead();
        assert_eq!(cell, Cell::Dead);
    }

    #[test]
    fn test_toggle() {
        let mut cell = Cell::Dead;
        cell.toggle_alive();
        assert_eq!(cell, Cell::Alive);
        cell.toggle_alive();
        assert_eq!(cell, Cell::Dead);

        let mut spawner = Cell::Spawner;
        spawner.toggle_alive();
        assert_eq!(spawner, Cell::Spawner);
    }

    #[test]
    fn test_sentinel_is_inert() {
        let mut sentinel = Cell::SENTINEL;
        sentinel.set_alive();
        sentinel.toggle_alive();
        sentinel.set(Cell::Alive);
        sentinel.set_stone();
        assert_eq!(sentinel, Cell::Void);
        assert!(!sentinel.is_alive());
    }

    #[test]
    fn test_copying_sentinel_stores_dead() {
        let mut cell = Cell::Alive;
        cell.set(Cell::SENTINEL);
        assert_eq!(cell, Cell::Dead);
    }

    #[test]
    fn test_evolve_respects_special_cells() {
        assert_eq!(Cell::Dead.evolve(true), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(false), Cell::Dead);
        assert_eq!(Cell::Stone.evolve(true), Cell::Stone);
        assert_eq!(Cell::Spawner.evolve(false), Cell::Spawner);
    }
}
