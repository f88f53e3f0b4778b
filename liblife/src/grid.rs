use itertools::Itertools;

use super::error::GridError;
use super::pos::Pos;

/// Fixed-size rectangular field of cell states, row-major. Dimensions are set
/// at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid. Fails when either extent is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn all_dead(&self) -> bool {
        self.cells.iter().all(|alive| !alive)
    }

    pub fn get<P>(&self, pos: P) -> Option<bool>
    where
        P: Into<Pos>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    pub fn get_mut<P>(&mut self, pos: P) -> Option<&mut bool>
    where
        P: Into<Pos>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    pub fn enumerate(&self) -> impl Iterator<Item = (Pos, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, alive)| (self.index_to_pos(index), *alive))
    }

    /// Live-cell sum over the clamped neighborhood window around `pos`,
    /// including the cell itself. The window never wraps: it is rows
    /// `[max(0, r-1), min(rows, r+2))` by cols `[max(0, c-1), min(cols, c+2))`,
    /// so boundary cells simply have a smaller window.
    pub fn window_sum(&self, pos: Pos) -> usize {
        let top = pos.row.saturating_sub(1);
        let bottom = (pos.row + 2).min(self.rows);
        let left = pos.col.saturating_sub(1);
        let right = (pos.col + 2).min(self.cols);

        (top..bottom)
            .cartesian_product(left..right)
            .filter(|&(row, col)| self.cells[row * self.cols + col])
            .count()
    }

    /// Every cell dead, dimensions unchanged.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Replaces the whole buffer. `cells` must be row-major with exactly
    /// `rows * cols` entries.
    pub(crate) fn replace(&mut self, cells: Vec<bool>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }

    /// Row-major copy of the grid, one `Vec<bool>` per row.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.to_vec())
            .collect()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Pos>,
    {
        let Pos { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.cols {
            return None;
        }

        Some(col + (row * self.cols))
    }

    fn index_to_pos(&self, index: usize) -> Pos {
        let row = index / self.cols;
        let col = index % self.cols;
        Pos { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_extents() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimension { rows: 5, cols: 0 })
        );
        assert_eq!(
            Grid::new(0, 0),
            Err(GridError::InvalidDimension { rows: 0, cols: 0 })
        );
    }

    #[test]
    fn starts_all_dead() {
        let grid = Grid::new(3, 4).unwrap();
        assert!(grid.enumerate().all(|(_, alive)| !alive));
        assert_eq!(grid.cell_count(), 12);
    }

    #[test]
    fn get_is_none_outside_the_grid() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.get((0, 0)), Some(false));
        assert_eq!(grid.get((2, 3)), Some(false));
        assert_eq!(grid.get((3, 0)), None);
        assert_eq!(grid.get((0, 4)), None);
    }

    #[test]
    fn enumerate_is_row_major() {
        let grid = Grid::new(2, 3).unwrap();
        let order: Vec<(usize, usize)> = grid.enumerate().map(|(pos, _)| pos.into()).collect();
        assert_eq!(
            order,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn window_sum_clamps_at_edges() {
        let mut grid = Grid::new(4, 4).unwrap();
        for pos in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            *grid.get_mut(pos).unwrap() = true;
        }

        // Corner cell sees its 2x2 window only.
        assert_eq!(grid.window_sum(Pos { row: 0, col: 0 }), 4);
        // Interior cell diagonal to the block sees only its nearest corner.
        assert_eq!(grid.window_sum(Pos { row: 2, col: 2 }), 1);
        // Opposite corner sees nothing: no wraparound.
        assert_eq!(grid.window_sum(Pos { row: 3, col: 3 }), 0);
    }

    #[test]
    fn window_sum_includes_the_cell_itself() {
        let mut grid = Grid::new(3, 3).unwrap();
        *grid.get_mut((1, 1)).unwrap() = true;
        assert_eq!(grid.window_sum(Pos { row: 1, col: 1 }), 1);
    }
}
