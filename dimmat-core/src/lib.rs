//! # dimmat-core
//!
//! Dimension-aware matrices: a builder/factory protocol that produces fully
//! populated base matrices, and zero-copy transpose and submatrix views over
//! any [`Matrix`].
//!
//! Dimensions are runtime values. Every shape precondition (positive
//! dimensions, matching element counts, square identity, in-bounds windows)
//! is checked once, when a matrix or view is created, and every element read
//! is bounds-checked against the reading matrix's own shape.
//!
//! ```
//! use dimmat_core::{transpose, submatrix, Factory, Matrix};
//!
//! let m = Factory::new(2, 3)?.row_major(vec![11, 12, 13, 21, 22, 23])?;
//! let t = transpose(&m);
//! assert_eq!((t.rows(), t.cols()), (3, 2));
//! assert_eq!(t.get(2, 0)?, 13);
//!
//! let corner = submatrix(&m, (0, 1), (1, 2))?;
//! assert_eq!(corner.to_row_major()?, vec![12, 13, 22, 23]);
//! # Ok::<(), dimmat_core::MatrixError>(())
//! ```

pub mod dense_matrix;
pub mod error;
pub mod factory;
pub mod shape;
pub mod traits;
pub mod views;

pub use dense_matrix::{DenseBuilder, DenseMatrix};
pub use error::{MatrixError, Result, ShapeMismatch, WindowBound};
pub use factory::Factory;
pub use shape::{from_linear_index, to_linear_index, Shape};
pub use traits::{matrices_equal, Builder, Matrix, RowMajorIter, Scalar};
pub use views::{submatrix, transpose, Submatrix, Transpose};
