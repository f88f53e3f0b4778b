use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}
