//! Structural views: matrices that re-index another matrix's storage
//! without copying it.
//!
//! A view owns its source handle `M`. Pass `&m` to borrow, or an `Arc` to
//! share ownership; both implement [`Matrix`](crate::Matrix).

pub mod submatrix;
pub mod transpose;

pub use submatrix::{submatrix, Submatrix};
pub use transpose::{transpose, Transpose};
