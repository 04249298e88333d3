use std::marker::PhantomData;

use crate::dense_matrix::{DenseBuilder, DenseMatrix};
use crate::error::{MatrixError, Result, ShapeMismatch};
use crate::shape::{from_linear_index, Shape};
use crate::traits::{Builder, Scalar};

/// Constructs fully-populated base matrices of one fixed shape.
///
/// Every shape precondition is checked before a builder is created, so a
/// failing call never leaves a partially filled matrix behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factory<T> {
    shape: Shape,
    _elem: PhantomData<fn() -> T>,
}

impl<T: Scalar> Factory<T> {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::with_shape(Shape::new(rows, cols)?))
    }

    pub fn square(n: usize) -> Result<Self> {
        Ok(Self::with_shape(Shape::square(n)?))
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            _elem: PhantomData,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// A fresh, empty builder for this factory's shape.
    pub fn builder(&self) -> DenseBuilder<T> {
        DenseBuilder::new(self.shape)
    }

    /// Builds a matrix from a flat row-major sequence of exactly
    /// `rows * cols` elements.
    ///
    /// # Errors
    /// Returns `ShapeMismatch::ElementCount` if the length is wrong.
    pub fn row_major<I>(&self, elements: I) -> Result<DenseMatrix<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        let expected = self.shape.len();
        if elements.len() != expected {
            return Err(ShapeMismatch::ElementCount {
                expected,
                actual: elements.len(),
            }
            .into());
        }

        let mut builder = self.builder();
        for (idx, value) in elements.into_iter().enumerate() {
            let (row, col) = from_linear_index(idx, self.shape.cols());
            builder.set(row, col, value)?;
        }
        self.finish(builder)
    }

    /// Builds a matrix whose cell `(row, col)` is `fill_elem(row, col)`.
    /// `fill_elem` is called exactly once per cell, in row-major order.
    pub fn tabulate<F>(&self, mut fill_elem: F) -> Result<DenseMatrix<T>>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut builder = self.builder();
        builder.iterate(|b, row, col| b.set(row, col, fill_elem(row, col)))?;
        self.finish(builder)
    }

    pub fn zeros(&self) -> Result<DenseMatrix<T>> {
        self.tabulate(|_, _| T::zero())
    }

    pub fn ones(&self) -> Result<DenseMatrix<T>> {
        self.tabulate(|_, _| T::one())
    }

    /// # Errors
    /// Returns `MatrixError::NotSquare` unless the factory shape is square.
    pub fn identity(&self) -> Result<DenseMatrix<T>> {
        if !self.shape.is_square() {
            return Err(MatrixError::NotSquare(self.shape));
        }
        self.tabulate(|row, col| if row == col { T::one() } else { T::zero() })
    }

    /// Builds a matrix from literal nested rows, e.g. `&[[1, 2], [3, 4]]` or
    /// `&[vec![1, 2], vec![3, 4]]`.
    ///
    /// # Errors
    /// Returns `ShapeMismatch::RowCount` or `ShapeMismatch::RowLength`
    /// naming the first row that disagrees with the factory shape.
    pub fn from_nested_rows<R>(&self, rows: &[R]) -> Result<DenseMatrix<T>>
    where
        R: AsRef<[T]>,
    {
        if rows.len() != self.shape.rows() {
            return Err(ShapeMismatch::RowCount {
                expected: self.shape.rows(),
                actual: rows.len(),
            }
            .into());
        }
        if let Some((row, bad)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != self.shape.cols())
        {
            return Err(ShapeMismatch::RowLength {
                row,
                expected: self.shape.cols(),
                actual: bad.as_ref().len(),
            }
            .into());
        }
        self.row_major(rows.iter().flat_map(|r| r.as_ref().iter().copied()))
    }

    /// Like [`Factory::from_nested_rows`], but the literal's size is fixed by
    /// its type, so only the outer and inner counts need comparing.
    ///
    /// # Errors
    /// Returns `ShapeMismatch::RowCount` or `ShapeMismatch::ColCount`.
    pub fn from_array<const R: usize, const C: usize>(
        &self,
        rows: [[T; C]; R],
    ) -> Result<DenseMatrix<T>> {
        if R != self.shape.rows() {
            return Err(ShapeMismatch::RowCount {
                expected: self.shape.rows(),
                actual: R,
            }
            .into());
        }
        if C != self.shape.cols() {
            return Err(ShapeMismatch::ColCount {
                expected: self.shape.cols(),
                actual: C,
            }
            .into());
        }
        self.row_major(rows.into_iter().flatten())
    }

    fn finish(&self, builder: DenseBuilder<T>) -> Result<DenseMatrix<T>> {
        let matrix = builder.result()?;
        log::debug!("Built {} base matrix", self.shape);
        Ok(matrix)
    }
}
