use crate::error::{Result, WindowBound};
use crate::shape::Shape;
use crate::traits::Matrix;

/// A rectangular window into another matrix.
///
/// The window is given by inclusive corners and validated once, at
/// construction; reads then only need checking against the window's own
/// shape before being offset into the source.
#[derive(Debug, Clone)]
pub struct Submatrix<M> {
    source: M,
    row_offset: usize,
    col_offset: usize,
    shape: Shape,
}

impl<M: Matrix> Submatrix<M> {
    /// Creates the window spanning `top_left..=bottom_right` of `source`.
    ///
    /// # Errors
    /// Returns `MatrixError::WindowOutOfBounds` if either range is empty or
    /// the bottom-right corner lies outside the source.
    pub fn new(source: M, top_left: (usize, usize), bottom_right: (usize, usize)) -> Result<Self> {
        let (row_start, col_start) = top_left;
        let (row_end, col_end) = bottom_right;
        let outer = source.shape();

        if row_start > row_end {
            return Err(WindowBound::EmptyRows {
                start: row_start,
                end: row_end,
            }
            .into());
        }
        if col_start > col_end {
            return Err(WindowBound::EmptyCols {
                start: col_start,
                end: col_end,
            }
            .into());
        }
        if row_end >= outer.rows() {
            return Err(WindowBound::RowEnd {
                end: row_end,
                limit: outer.rows(),
            }
            .into());
        }
        if col_end >= outer.cols() {
            return Err(WindowBound::ColEnd {
                end: col_end,
                limit: outer.cols(),
            }
            .into());
        }

        let shape = Shape::new(row_end - row_start + 1, col_end - col_start + 1)?;
        log::debug!(
            "Submatrix view {} at ({}, {}) over {} matrix",
            shape,
            row_start,
            col_start,
            outer
        );
        Ok(Self {
            source,
            row_offset: row_start,
            col_offset: col_start,
            shape,
        })
    }

    /// The top-left corner of the window in source coordinates.
    pub fn offset(&self) -> (usize, usize) {
        (self.row_offset, self.col_offset)
    }

    pub fn source(&self) -> &M {
        &self.source
    }

    pub fn into_inner(self) -> M {
        self.source
    }
}

impl<M: Matrix> Matrix for Submatrix<M> {
    type Value = M::Value;

    fn shape(&self) -> Shape {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> Result<M::Value> {
        self.shape.check(row, col)?;
        self.source.get(row + self.row_offset, col + self.col_offset)
    }
}

pub fn submatrix<M: Matrix>(
    source: M,
    top_left: (usize, usize),
    bottom_right: (usize, usize),
) -> Result<Submatrix<M>> {
    Submatrix::new(source, top_left, bottom_right)
}
