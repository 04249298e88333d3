use crate::error::Result;
use crate::shape::Shape;
use crate::traits::Matrix;

/// Presents an `R x C` matrix as `C x R`. Construction reads no elements.
#[derive(Debug, Clone)]
pub struct Transpose<M> {
    source: M,
}

impl<M: Matrix> Transpose<M> {
    pub fn new(source: M) -> Self {
        log::debug!("Transpose view over {} matrix", source.shape());
        Self { source }
    }

    pub fn source(&self) -> &M {
        &self.source
    }

    pub fn into_inner(self) -> M {
        self.source
    }
}

impl<M: Matrix> Matrix for Transpose<M> {
    type Value = M::Value;

    fn shape(&self) -> Shape {
        self.source.shape().transposed()
    }

    fn get(&self, row: usize, col: usize) -> Result<M::Value> {
        self.shape().check(row, col)?;
        self.source.get(col, row)
    }
}

pub fn transpose<M: Matrix>(source: M) -> Transpose<M> {
    Transpose::new(source)
}
