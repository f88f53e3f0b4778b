use std::mem;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use error::GridError;
use grid::Grid;
use pos::Pos;

pub mod error;
pub mod grid;
pub mod pos;

/// Conway-style cellular automaton on a fixed rectangular grid with
/// edge-clamped boundaries.
///
/// The transition rule works on the self-inclusive window sum `n` (the cell
/// plus every neighbor in its clamped window): a live cell survives iff `n`
/// is 3 or 4, a dead cell is born iff `n` is 3. That is the classic
/// 2-or-3-survive / 3-birth rule with the cell's own state folded into the
/// count.
#[derive(Debug, Clone)]
pub struct GridEngine {
    current: Grid,
    scratch: Grid,
    rng: StdRng,
}

impl GridEngine {
    /// All-dead engine with an OS-seeded random source.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::with_rng(rows, cols, StdRng::from_os_rng())
    }

    /// All-dead engine with a deterministic random source, so `randomize`
    /// is reproducible for a given seed.
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rows: usize, cols: usize, rng: StdRng) -> Result<Self, GridError> {
        Ok(Self {
            current: Grid::new(rows, cols)?,
            scratch: Grid::new(rows, cols)?,
            rng,
        })
    }

    pub fn rows(&self) -> usize {
        self.current.rows()
    }

    pub fn cols(&self) -> usize {
        self.current.cols()
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Row-major copy of the current generation, for rendering.
    pub fn snapshot(&self) -> Vec<Vec<bool>> {
        self.current.to_rows()
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.current
            .get(Pos { row, col })
            .ok_or(GridError::OutOfBounds { row, col })
    }

    /// Writes `alive` at the coordinate. Writing the current value back is a
    /// legal no-op.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let cell = self
            .current
            .get_mut(Pos { row, col })
            .ok_or(GridError::OutOfBounds { row, col })?;
        *cell = alive;
        Ok(())
    }

    /// Flips the cell between dead and alive.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let cell = self
            .current
            .get_mut(Pos { row, col })
            .ok_or(GridError::OutOfBounds { row, col })?;
        *cell = !*cell;
        Ok(())
    }

    /// Every cell dead. The all-dead grid is a fixed point of `step`.
    pub fn clear(&mut self) {
        self.current.clear();
    }

    /// Replaces the current generation with a fresh random configuration:
    /// an alive-cell count `k` drawn uniformly from `[0, rows*cols)` (the
    /// all-alive grid is never produced), placed uniformly at random by
    /// shuffling a flat sequence whose first `k` entries are alive.
    pub fn randomize(&mut self) {
        let total = self.current.cell_count();
        let alive = self.rng.random_range(0..total);

        let mut cells: Vec<bool> = (0..total).map(|index| index < alive).collect();
        cells.shuffle(&mut self.rng);

        self.current.replace(cells);
    }

    /// Advances one generation. The rule reads only prior-generation data:
    /// every next state is written to a scratch buffer, which then swaps in
    /// as the current grid.
    pub fn step(&mut self) {
        for (pos, alive) in self.current.enumerate() {
            let n = self.current.window_sum(pos);
            let next = if alive { n == 3 || n == 4 } else { n == 3 };
            *self.scratch.get_mut(pos).expect("buffers share dimensions") = next;
        }

        mem::swap(&mut self.current, &mut self.scratch);
    }
}
