//! Floating-point comparison conventions and the small reductions consumer
//! code composes with the indexing engine.

pub mod fp;
pub mod reduce;

pub use fp::{fp_equal, fp_nonzero, fp_zero, EPSILON};
pub use reduce::{find, sequence, sum, sum_all, Nnz};
