//! Core shape and access traits.

use faer::Mat;

/// O(1) shape queries.
///
/// Consumers are expected to pre-validate structure (square adjacency
/// matrix, matching operand sizes) before calling into the unchecked
/// indexing paths; this trait is the cheap surface they do it through.
pub trait Shape {
    /// Number of rows (or length for a vector).
    fn nrows(&self) -> usize;
    /// Number of columns (1 for a vector).
    fn ncols(&self) -> usize;
    /// Total element count.
    fn numel(&self) -> usize {
        self.nrows() * self.ncols()
    }
}

impl<T> Shape for Mat<T> {
    fn nrows(&self) -> usize {
        Mat::nrows(self)
    }
    fn ncols(&self) -> usize {
        Mat::ncols(self)
    }
}

/// A vector is a column: `nrows` is its length.
impl<T> Shape for Vec<T> {
    fn nrows(&self) -> usize {
        self.len()
    }
    fn ncols(&self) -> usize {
        1
    }
}

impl<T> Shape for [T] {
    fn nrows(&self) -> usize {
        self.len()
    }
    fn ncols(&self) -> usize {
        1
    }
}

/// Element access seam for generic read-side code.
pub trait MatrixGet<T> {
    fn get(&self, i: usize, j: usize) -> T;
}

impl<T: Copy + num_traits::Float> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}
