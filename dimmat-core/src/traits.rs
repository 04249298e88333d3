use std::fmt::Debug;
use std::sync::Arc;

use num_traits::{One, Zero};

use crate::error::Result;
use crate::shape::Shape;

/// Element types a [`Factory`](crate::Factory) can fill: anything with an
/// additive and multiplicative identity.
pub trait Scalar: Copy + Debug + PartialEq + Zero + One {}

impl<T> Scalar for T where T: Copy + Debug + PartialEq + Zero + One {}

/// Read-only access to a fixed-shape grid of values.
///
/// Base matrices own their storage; views forward every read to another
/// matrix under an index remap.
pub trait Matrix: Debug {
    /// What a cell read returns. Copied out, never borrowed.
    type Value: Copy + Debug;

    /// Returns the shape of the matrix. Fixed for the lifetime of the value.
    fn shape(&self) -> Shape;

    /// Reads the element at `(row, col)`.
    ///
    /// # Errors
    /// Returns `MatrixError::OutOfBounds` if the index lies outside `shape()`.
    fn get(&self, row: usize, col: usize) -> Result<Self::Value>;

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.shape().rows()
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.shape().cols()
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    /// Iterates over all elements in row-major order.
    fn iter(&self) -> RowMajorIter<'_, Self>
    where
        Self: Sized,
    {
        RowMajorIter {
            matrix: self,
            idx: 0,
            len: self.shape().len(),
        }
    }

    /// Copies every element into a row-major `Vec`.
    fn to_row_major(&self) -> Result<Vec<Self::Value>>
    where
        Self: Sized,
    {
        self.iter().collect()
    }
}

/// Row-major iterator over any [`Matrix`], yielding `Result` per element.
#[derive(Debug)]
pub struct RowMajorIter<'a, M: Matrix> {
    matrix: &'a M,
    idx: usize,
    len: usize,
}

impl<M: Matrix> Iterator for RowMajorIter<'_, M> {
    type Item = Result<M::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.len {
            return None;
        }
        let (row, col) = crate::shape::from_linear_index(self.idx, self.matrix.cols());
        self.idx += 1;
        Some(self.matrix.get(row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl<M: Matrix> ExactSizeIterator for RowMajorIter<'_, M> {}

// Views are agnostic about how they hold their source: a borrow, a box or a
// shared handle all satisfy the contract.
impl<M: Matrix + ?Sized> Matrix for &M {
    type Value = M::Value;

    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn get(&self, row: usize, col: usize) -> Result<Self::Value> {
        (**self).get(row, col)
    }
}

impl<M: Matrix + ?Sized> Matrix for Box<M> {
    type Value = M::Value;

    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn get(&self, row: usize, col: usize) -> Result<Self::Value> {
        (**self).get(row, col)
    }
}

impl<M: Matrix + ?Sized> Matrix for Arc<M> {
    type Value = M::Value;

    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn get(&self, row: usize, col: usize) -> Result<Self::Value> {
        (**self).get(row, col)
    }
}

/// Single-use, write-once-per-cell accumulator that yields an immutable
/// [`Matrix`].
pub trait Builder {
    type Value;
    type Output: Matrix<Value = Self::Value>;

    /// The shape fixed when the builder was created.
    fn shape(&self) -> Shape;

    /// Writes one cell. A second write to the same cell replaces the first.
    fn set(&mut self, row: usize, col: usize, value: Self::Value) -> Result<()>;

    /// Calls `visitor` once for every cell in row-major order, handing the
    /// builder back so the visitor can `set` that cell. Stops at the first
    /// error the visitor returns.
    fn iterate<F>(&mut self, mut visitor: F) -> Result<()>
    where
        Self: Sized,
        F: FnMut(&mut Self, usize, usize) -> Result<()>,
    {
        let shape = self.shape();
        for row in 0..shape.rows() {
            for col in 0..shape.cols() {
                visitor(self, row, col)?;
            }
        }
        Ok(())
    }

    /// Freezes the builder into a matrix.
    ///
    /// # Errors
    /// Returns `MatrixError::IncompleteBuild` if any cell was never set.
    fn result(self) -> Result<Self::Output>;
}

/// Element-by-element equality. Matrices of different shapes are never equal.
pub fn matrices_equal<A, B>(a: &A, b: &B) -> Result<bool>
where
    A: Matrix,
    B: Matrix<Value = A::Value>,
    A::Value: PartialEq,
{
    if a.shape() != b.shape() {
        return Ok(false);
    }
    for (lhs, rhs) in a.iter().zip(b.iter()) {
        if lhs? != rhs? {
            return Ok(false);
        }
    }
    Ok(true)
}
