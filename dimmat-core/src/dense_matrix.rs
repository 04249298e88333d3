use std::fmt::Debug;
use std::sync::Arc;

use crate::error::{MatrixError, Result};
use crate::shape::{from_linear_index, to_linear_index, Shape};
use crate::traits::{Builder, Matrix};

/// An immutable base matrix stored in row-major order on the CPU.
///
/// Storage is shared behind an `Arc`, so clones are cheap and concurrent
/// reads need no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    shape: Shape,
    data: Arc<[T]>, // Data stored row-major: data[row * cols + col]
}

impl<T: Copy + Debug> DenseMatrix<T> {
    /// Returns a slice view of the underlying row-major data.
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Debug> Matrix for DenseMatrix<T> {
    type Value = T;

    fn shape(&self) -> Shape {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        self.shape.check(row, col)?;
        Ok(self.data[to_linear_index(row, col, self.shape.cols())])
    }
}

/// Builder producing a [`DenseMatrix`]. Tracks which cells have been written.
#[derive(Debug)]
pub struct DenseBuilder<T> {
    shape: Shape,
    cells: Vec<Option<T>>,
}

impl<T: Copy + Debug> DenseBuilder<T> {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            cells: vec![None; shape.len()],
        }
    }

    /// Number of cells not yet written.
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

impl<T: Copy + Debug> Builder for DenseBuilder<T> {
    type Value = T;
    type Output = DenseMatrix<T>;

    fn shape(&self) -> Shape {
        self.shape
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.shape.check(row, col)?;
        let cell = &mut self.cells[to_linear_index(row, col, self.shape.cols())];
        if let Some(previous) = cell.replace(value) {
            log::trace!("Cell ({}, {}) overwritten: {:?} -> {:?}", row, col, previous, value);
        }
        Ok(())
    }

    fn result(self) -> Result<DenseMatrix<T>> {
        let total = self.cells.len();
        let mut data = Vec::with_capacity(total);
        let mut first_missing = None;
        let mut missing = 0;
        for (idx, cell) in self.cells.into_iter().enumerate() {
            match cell {
                Some(value) => data.push(value),
                None => {
                    missing += 1;
                    first_missing.get_or_insert(idx);
                }
            }
        }
        if let Some(idx) = first_missing {
            let (row, col) = from_linear_index(idx, self.shape.cols());
            return Err(MatrixError::IncompleteBuild {
                missing,
                total,
                row,
                col,
            });
        }
        Ok(DenseMatrix {
            shape: self.shape,
            data: data.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(rows: usize, cols: usize) -> Shape {
        Shape::new(rows, cols).unwrap()
    }

    #[test]
    fn test_builder_complete_build() {
        let mut builder = DenseBuilder::new(shape(2, 2));
        assert_eq!(builder.unset_count(), 4);
        builder.set(0, 0, 1.0).unwrap();
        builder.set(0, 1, 2.0).unwrap();
        builder.set(1, 0, 3.0).unwrap();
        builder.set(1, 1, 4.0).unwrap();
        assert_eq!(builder.unset_count(), 0);

        let matrix = builder.result().unwrap();
        assert_eq!(matrix.shape(), shape(2, 2));
        assert_eq!(matrix.data(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(matrix.get(1, 0).unwrap(), 3.0);
    }

    #[test]
    fn test_builder_incomplete_build() {
        let mut builder = DenseBuilder::new(shape(2, 3));
        builder.set(0, 0, 1).unwrap();
        builder.set(0, 1, 1).unwrap();
        builder.set(1, 2, 1).unwrap();
        assert_eq!(
            builder.result(),
            Err(MatrixError::IncompleteBuild {
                missing: 3,
                total: 6,
                row: 0,
                col: 2
            })
        );
    }

    #[test]
    fn test_builder_set_out_of_bounds() {
        let mut builder = DenseBuilder::new(shape(2, 3));
        assert_eq!(
            builder.set(2, 0, 7),
            Err(MatrixError::OutOfBounds {
                row: 2,
                col: 0,
                shape: shape(2, 3)
            })
        );
        assert!(builder.set(0, 3, 7).is_err());
        assert_eq!(builder.unset_count(), 6);
    }

    #[test]
    fn test_builder_duplicate_set_last_write_wins() {
        let mut builder = DenseBuilder::new(shape(1, 1));
        builder.set(0, 0, 1).unwrap();
        builder.set(0, 0, 2).unwrap();
        assert_eq!(builder.result().unwrap().get(0, 0).unwrap(), 2);
    }

    #[test]
    fn test_builder_iterate_row_major() {
        let mut builder = DenseBuilder::new(shape(2, 3));
        let mut visited = Vec::new();
        builder
            .iterate(|b, row, col| {
                visited.push((row, col));
                b.set(row, col, row * 10 + col)
            })
            .unwrap();
        assert_eq!(
            visited,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        let matrix = builder.result().unwrap();
        assert_eq!(matrix.data(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_builder_iterate_stops_on_error() {
        let mut builder = DenseBuilder::new(shape(2, 2));
        let mut calls = 0;
        let err = builder.iterate(|b, row, col| {
            calls += 1;
            // Deliberately write past the last column on the second cell.
            b.set(row, col + row + 1, 0)
        });
        assert!(matches!(err, Err(MatrixError::OutOfBounds { .. })));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_dense_get_out_of_bounds() {
        let mut builder = DenseBuilder::new(shape(1, 2));
        builder.iterate(|b, r, c| b.set(r, c, 5u8)).unwrap();
        let matrix = builder.result().unwrap();
        assert!(matches!(
            matrix.get(1, 0),
            Err(MatrixError::OutOfBounds { row: 1, col: 0, .. })
        ));
        assert!(matrix.get(0, 2).is_err());
        assert!(matrix.get(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_dense_matrix_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DenseMatrix<f64>>();
    }
}
