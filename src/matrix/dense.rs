//! Dense-matrix construction on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for
//! `faer::Mat<T>`, enabling construction from raw column-major storage, the
//! layout every linear-addressing law in this crate is phrased in.

use faer::Mat;

/// Construction from raw column-major storage.
pub trait DenseMatrix<T> {
    /// Build an `nrows x ncols` matrix from `data` laid out column-major
    /// (`data[j * nrows + i]` is element `(i, j)`).
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self;
}

impl<T: Copy + num_traits::Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i])
    }
}
