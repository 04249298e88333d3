use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{MatrixError, Result};

/// The `(rows, cols)` pair of a matrix. Both dimensions are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: NonZeroUsize,
    cols: NonZeroUsize,
}

impl Shape {
    /// Creates a shape, rejecting a zero row or column count and any shape
    /// whose cell count does not fit in a `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        match (NonZeroUsize::new(rows), NonZeroUsize::new(cols)) {
            (Some(_), Some(_)) if rows.checked_mul(cols).is_none() => {
                Err(MatrixError::ShapeTooLarge { rows, cols })
            }
            (Some(rows), Some(cols)) => Ok(Self { rows, cols }),
            _ => Err(MatrixError::EmptyShape { rows, cols }),
        }
    }

    pub fn square(n: usize) -> Result<Self> {
        Self::new(n, n)
    }

    pub fn rows(&self) -> usize {
        self.rows.get()
    }

    pub fn cols(&self) -> usize {
        self.cols.get()
    }

    /// Number of cells, `rows * cols`. Cannot overflow, see [`Shape::new`].
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }

    /// Returns `OutOfBounds` unless `(row, col)` lies inside this shape.
    pub fn check(&self, row: usize, col: usize) -> Result<()> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds {
                row,
                col,
                shape: *self,
            })
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Splits a row-major linear index into `(row, col)`.
///
/// `cols` must be positive.
pub fn from_linear_index(idx: usize, cols: usize) -> (usize, usize) {
    (idx / cols, idx % cols)
}

/// Inverse of [`from_linear_index`].
pub fn to_linear_index(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col
}
