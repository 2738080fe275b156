//! Matrix module: dense matrix construction.

pub mod dense;
pub use dense::DenseMatrix;
