//! `proptest` strategies for shapes, matrices and submatrix windows.
//!
//! Matrices are drawn as a row-major cell vector and built through
//! [`Factory::row_major`], so shrinking works cell by cell and, for
//! [`arb_sized_matrix`], shape first.

use dimmat_core::{DenseMatrix, Factory, Scalar, Shape};
use proptest::prelude::*;

/// Shapes with `1..=max_rows` rows and `1..=max_cols` columns.
///
/// Both bounds must be positive, as for any `proptest` range.
pub fn arb_shape(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Shape> {
    (1..=max_rows, 1..=max_cols)
        .prop_filter_map("shape must be addressable", |(rows, cols)| {
            Shape::new(rows, cols).ok()
        })
}

/// Matrices of the factory's shape with every cell drawn from `elem`.
pub fn arb_matrix<T, S>(factory: Factory<T>, elem: S) -> impl Strategy<Value = DenseMatrix<T>>
where
    T: Scalar,
    S: Strategy<Value = T>,
{
    proptest::collection::vec(elem, factory.shape().len())
        .prop_filter_map("cell count must match the shape", move |cells| {
            factory.row_major(cells).ok()
        })
}

/// Matrices of any shape up to `max_rows x max_cols`.
pub fn arb_sized_matrix<T, S>(
    max_rows: usize,
    max_cols: usize,
    elem: S,
) -> impl Strategy<Value = DenseMatrix<T>>
where
    T: Scalar,
    S: Strategy<Value = T> + Clone,
{
    arb_shape(max_rows, max_cols)
        .prop_flat_map(move |shape| arb_matrix(Factory::with_shape(shape), elem.clone()))
}

/// Valid `(top_left, bottom_right)` corners of a window inside `shape`.
pub fn arb_window(shape: Shape) -> impl Strategy<Value = ((usize, usize), (usize, usize))> {
    let (rows, cols) = (shape.rows(), shape.cols());
    (0..rows, 0..cols).prop_flat_map(move |(row, col)| {
        (Just((row, col)), (row..rows, col..cols))
    })
}

/// Integers in `[-99, 99]`.
pub fn small_int_elems() -> impl Strategy<Value = i64> + Clone {
    -99i64..=99
}
