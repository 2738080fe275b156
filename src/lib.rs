//! matdex: MATLAB-semantics indexing over Faer
//!
//! This crate provides the indexing, slicing, and assignment primitives that
//! reproduce MATLAB's indexing model (ordinal, logical, mixed, and column-major
//! linear addressing) on fixed-shape dense matrices and vectors, together with
//! the small linear-algebra emulation layer (`inv`, left/right division, matrix
//! power, `randperm`, `dec2bin`) that ports of dense connectivity-graph code
//! are written against.
//!
//! Matrices are `faer::Mat<f64>`; vectors are `Vec<f64>`. Containers never
//! resize: out-of-range indices on the fast path are caller error, and the
//! `index::checked` module offers validated counterparts for callers that want
//! fail-fast diagnostics instead.

pub mod core;
pub mod emu;
pub mod error;
pub mod index;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use crate::core::*;
pub use emu::*;
pub use error::*;
pub use index::*;
pub use matrix::*;
pub use utils::*;
