use thiserror::Error;

use crate::shape::Shape;

pub type Result<T> = core::result::Result<T, MatrixError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Matrix dimensions must be positive, got {rows}x{cols}")]
    EmptyShape { rows: usize, cols: usize },

    #[error("Matrix of {rows}x{cols} cells cannot be addressed with usize indices")]
    ShapeTooLarge { rows: usize, cols: usize },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatch),

    #[error("Index ({row}, {col}) out of bounds for {shape} matrix")]
    OutOfBounds { row: usize, col: usize, shape: Shape },

    #[error("Submatrix window out of bounds: {0}")]
    WindowOutOfBounds(#[from] WindowBound),

    #[error("Identity requires a square shape, got {0}")]
    NotSquare(Shape),

    #[error("Incomplete build: {missing} of {total} cells never set, first at ({row}, {col})")]
    IncompleteBuild {
        missing: usize,
        total: usize,
        row: usize,
        col: usize,
    },
}

/// What exactly disagreed with the declared shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatch {
    #[error("expected {expected} elements, got {actual}")]
    ElementCount { expected: usize, actual: usize },

    #[error("expected {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },

    #[error("expected {expected} columns, got {actual}")]
    ColCount { expected: usize, actual: usize },

    #[error("row {row} has {actual} columns, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// The submatrix bound that made a window invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowBound {
    #[error("empty row range, start {start} is past end {end}")]
    EmptyRows { start: usize, end: usize },

    #[error("empty column range, start {start} is past end {end}")]
    EmptyCols { start: usize, end: usize },

    #[error("last row {end} is outside a source with {limit} rows")]
    RowEnd { end: usize, limit: usize },

    #[error("last column {end} is outside a source with {limit} columns")]
    ColEnd { end: usize, limit: usize },
}
