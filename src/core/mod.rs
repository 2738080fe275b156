//! Core traits and the column-major addressing convention.

pub mod addr;
pub mod traits;

pub use addr::{to_linear, to_pair};
pub use traits::{MatrixGet, Shape};
