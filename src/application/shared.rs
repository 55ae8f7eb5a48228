use crate::domain::{HexGrid, Hexagon, Turn};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

/// The grid lock: a cloneable handle to one board.
///
/// Steps, edits, stamps and both halves of a rotation each run to completion
/// while holding the lock.
#[derive(Clone)]
pub struct SharedGrid {
    inner: Arc<Mutex<HexGrid>>,
}

impl SharedGrid {
    pub fn new(grid: HexGrid) -> Self {
        Self {
            inner: Arc::new(Mutex::new(grid)),
        }
    }

    /// Acquire the grid lock, recovering the guard if a previous holder panicked.
    pub fn lock(&self) -> MutexGuard<'_, HexGrid> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("grid lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Run `f` with the lock held.
    pub fn with<T>(&self, f: impl FnOnce(&mut HexGrid) -> T) -> T {
        f(&mut self.lock())
    }

    /// Advance the board one generation and return the new generation.
    pub fn step(&self) -> u64 {
        let mut grid = self.lock();
        grid.step();
        grid.generation()
    }

    pub fn toggle_cell(&self, x: i32, y: i32, cell_x: usize, cell_y: usize) -> bool {
        self.lock().toggle_cell(x, y, cell_x, cell_y)
    }

    pub fn stamp_pattern(&self, x: i32, y: i32, template: &Hexagon) -> bool {
        self.lock().stamp_pattern(x, y, template)
    }

    /// First critical section of a rotation.
    pub fn begin_rotation(&self, x: i32, y: i32, turn: Turn) -> bool {
        self.lock().begin_rotation(x, y, turn)
    }

    /// Second critical section of a rotation, after the caller's delay.
    pub fn commit_rotation(&self, x: i32, y: i32) -> Option<Turn> {
        self.lock().commit_rotation(x, y)
    }
}
