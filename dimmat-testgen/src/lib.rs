//! `dimmat-testgen`: seeded generation of arbitrary matrices for property tests.
//!
//! A [`MatrixGen`] pairs a [`Factory`] with a `fastrand` generator and fills
//! each cell through [`Factory::tabulate`], so every generated matrix goes
//! through the same construction path as hand-built ones.
//!
//! The [`strategy`] module exposes the same construction as `proptest`
//! strategies, for property tests that want shrinking and case reporting.

pub mod strategy;

use dimmat_core::{DenseMatrix, Factory, Result, Scalar, Shape};

/// Reproducible source of random matrices of one fixed shape.
#[derive(Debug)]
pub struct MatrixGen<T> {
    factory: Factory<T>,
    rng: fastrand::Rng,
}

impl<T: Scalar> MatrixGen<T> {
    pub fn new(factory: Factory<T>, seed: u64) -> Self {
        Self {
            factory,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn shape(&self) -> Shape {
        self.factory.shape()
    }

    /// Generates one matrix, calling `elem` once per cell in row-major order.
    pub fn generate<F>(&mut self, mut elem: F) -> Result<DenseMatrix<T>>
    where
        F: FnMut(&mut fastrand::Rng) -> T,
    {
        self.factory.tabulate(|_, _| elem(&mut self.rng))
    }

    /// Generates `count` matrices.
    pub fn samples<F>(&mut self, count: usize, mut elem: F) -> Result<Vec<DenseMatrix<T>>>
    where
        F: FnMut(&mut fastrand::Rng) -> T,
    {
        let samples = (0..count)
            .map(|_| self.generate(&mut elem))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("Generated {} samples of shape {}", count, self.shape());
        Ok(samples)
    }
}

/// Picks a shape with `1..=max_rows` rows and `1..=max_cols` columns.
///
/// # Errors
/// Returns `MatrixError::EmptyShape` if either bound is zero, and
/// `MatrixError::ShapeTooLarge` if the bounds themselves overflow.
pub fn arbitrary_shape(rng: &mut fastrand::Rng, max_rows: usize, max_cols: usize) -> Result<Shape> {
    let bound = Shape::new(max_rows, max_cols)?;
    Shape::new(rng.usize(1..=bound.rows()), rng.usize(1..=bound.cols()))
}

/// Integers in `[-99, 99]`, small enough to read in a failing assertion.
pub fn small_ints(rng: &mut fastrand::Rng) -> i64 {
    rng.i64(-99..=99)
}

/// Floats in `[0, 1)`.
pub fn unit_floats(rng: &mut fastrand::Rng) -> f64 {
    rng.f64()
}
