//! Ordinal (explicit-position) indexing and assignment.
//!
//! Index sequences are `&[f64]` with each entry truncated to `usize`, so a
//! vector produced by arithmetic or by [`find`](crate::utils::reduce::find)
//! can be used as an index sequence directly. Duplicates and arbitrary order
//! are permitted and preserved.
//!
//! Indexing with a single integer into a matrix uses the column-major linear
//! address from [`core::addr`](crate::core::addr); matrix-by-vector and
//! matrix-by-matrix forms apply that scalar form elementwise.
//!
//! None of these operations resize or bounds-check their target. The caller
//! must keep every index inside the container's fixed shape; debug builds
//! assert, release builds do whatever the underlying container does.

use faer::Mat;

use crate::core::addr;
use crate::core::traits::Shape;

/// Ordinal read: select elements of `self` at explicit positions.
pub trait OrdinalIndex<I> {
    type Output;
    /// Allocate and return the selection.
    fn ordinal_index(&self, indices: I) -> Self::Output;
}

/// Ordinal write: assign into `self` at explicit positions.
pub trait OrdinalAssign<I, V> {
    /// Write `values` (a broadcast scalar or a per-position container) into
    /// `self` at `indices`.
    fn ordinal_assign(&mut self, indices: I, values: V);
}

// Vector-by-vector

impl<'a> OrdinalIndex<&'a [f64]> for [f64] {
    type Output = Vec<f64>;

    fn ordinal_index(&self, indices: &[f64]) -> Vec<f64> {
        indices.iter().map(|&i| self[i as usize]).collect()
    }
}

impl<'a> OrdinalAssign<&'a [f64], f64> for [f64] {
    fn ordinal_assign(&mut self, indices: &[f64], value: f64) {
        for &i in indices {
            self[i as usize] = value;
        }
    }
}

impl<'a, 'b> OrdinalAssign<&'a [f64], &'b [f64]> for [f64] {
    fn ordinal_assign(&mut self, indices: &[f64], values: &[f64]) {
        debug_assert_eq!(indices.len(), values.len(), "one value per index");
        for (&i, &value) in indices.iter().zip(values) {
            self[i as usize] = value;
        }
    }
}

// Matrix-by-scalar (column-major linear address)

impl OrdinalIndex<usize> for Mat<f64> {
    type Output = f64;

    fn ordinal_index(&self, index: usize) -> f64 {
        debug_assert!(index < self.numel(), "linear index past end of matrix");
        let (row, col) = addr::to_pair(index, self.nrows());
        self[(row, col)]
    }
}

impl OrdinalAssign<usize, f64> for Mat<f64> {
    fn ordinal_assign(&mut self, index: usize, value: f64) {
        debug_assert!(index < self.numel(), "linear index past end of matrix");
        let (row, col) = addr::to_pair(index, self.nrows());
        self[(row, col)] = value;
    }
}

// Matrix-by-vector

impl<'a> OrdinalIndex<&'a [f64]> for Mat<f64> {
    type Output = Vec<f64>;

    fn ordinal_index(&self, indices: &[f64]) -> Vec<f64> {
        indices
            .iter()
            .map(|&i| OrdinalIndex::<usize>::ordinal_index(self, i as usize))
            .collect()
    }
}

impl<'a> OrdinalAssign<&'a [f64], f64> for Mat<f64> {
    fn ordinal_assign(&mut self, indices: &[f64], value: f64) {
        for &i in indices {
            OrdinalAssign::<usize, f64>::ordinal_assign(self, i as usize, value);
        }
    }
}

impl<'a, 'b> OrdinalAssign<&'a [f64], &'b [f64]> for Mat<f64> {
    fn ordinal_assign(&mut self, indices: &[f64], values: &[f64]) {
        debug_assert_eq!(indices.len(), values.len(), "one value per index");
        for (&i, &value) in indices.iter().zip(values) {
            OrdinalAssign::<usize, f64>::ordinal_assign(self, i as usize, value);
        }
    }
}

// Matrix-by-two-vectors (non-mixed Cartesian sub-block, the G(V,V) form)

impl<'a, 'b> OrdinalIndex<(&'a [f64], &'b [f64])> for Mat<f64> {
    type Output = Mat<f64>;

    fn ordinal_index(&self, (rows, cols): (&[f64], &[f64])) -> Mat<f64> {
        Mat::from_fn(rows.len(), cols.len(), |i, j| {
            self[(rows[i] as usize, cols[j] as usize)]
        })
    }
}

impl<'a, 'b> OrdinalAssign<(&'a [f64], &'b [f64]), f64> for Mat<f64> {
    fn ordinal_assign(&mut self, (rows, cols): (&[f64], &[f64]), value: f64) {
        for &r in rows {
            for &c in cols {
                self[(r as usize, c as usize)] = value;
            }
        }
    }
}

impl<'a, 'b, 'c> OrdinalAssign<(&'a [f64], &'b [f64]), &'c Mat<f64>> for Mat<f64> {
    /// The value matrix must be exactly `rows.len() x cols.len()`.
    fn ordinal_assign(&mut self, (rows, cols): (&[f64], &[f64]), values: &Mat<f64>) {
        debug_assert_eq!(values.nrows(), rows.len(), "value rows match selected rows");
        debug_assert_eq!(values.ncols(), cols.len(), "value cols match selected cols");
        for (i, &r) in rows.iter().enumerate() {
            for (j, &c) in cols.iter().enumerate() {
                self[(r as usize, c as usize)] = values[(i, j)];
            }
        }
    }
}

// Matrix-by-matrix: the scalar form applied over an index matrix of arbitrary
// shape, preserving that shape.

impl<'a> OrdinalIndex<&'a Mat<f64>> for Mat<f64> {
    type Output = Mat<f64>;

    fn ordinal_index(&self, indices: &Mat<f64>) -> Mat<f64> {
        Mat::from_fn(indices.nrows(), indices.ncols(), |i, j| {
            OrdinalIndex::<usize>::ordinal_index(self, indices[(i, j)] as usize)
        })
    }
}

impl<'a> OrdinalAssign<&'a Mat<f64>, f64> for Mat<f64> {
    fn ordinal_assign(&mut self, indices: &Mat<f64>, value: f64) {
        for j in 0..indices.ncols() {
            for i in 0..indices.nrows() {
                let index = indices[(i, j)] as usize;
                OrdinalAssign::<usize, f64>::ordinal_assign(self, index, value);
            }
        }
    }
}

impl<'a, 'b> OrdinalAssign<&'a Mat<f64>, &'b Mat<f64>> for Mat<f64> {
    /// The value matrix must have the index matrix's exact shape.
    fn ordinal_assign(&mut self, indices: &Mat<f64>, values: &Mat<f64>) {
        debug_assert_eq!(values.nrows(), indices.nrows(), "value shape matches index shape");
        debug_assert_eq!(values.ncols(), indices.ncols(), "value shape matches index shape");
        for j in 0..indices.ncols() {
            for i in 0..indices.nrows() {
                let index = indices[(i, j)] as usize;
                OrdinalAssign::<usize, f64>::ordinal_assign(self, index, values[(i, j)]);
            }
        }
    }
}
