//! Reductions over vectors and matrices: `nnz`, `find`, `sum`, and the colon
//! sequence. These are the arithmetic glue consumer code (clustering
//! coefficients, path lengths, rewiring loops) composes with the indexing
//! engine.

use faer::Mat;

use crate::utils::fp::fp_nonzero;

/// Count of nonzero (within EPSILON) entries.
pub trait Nnz {
    fn nnz(&self) -> usize;
}

impl Nnz for [f64] {
    fn nnz(&self) -> usize {
        self.iter().filter(|&&x| fp_nonzero(x)).count()
    }
}

impl Nnz for Mat<f64> {
    fn nnz(&self) -> usize {
        let mut count = 0;
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                if fp_nonzero(self[(i, j)]) {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Positions of the nonzero entries of `v`, in traversal order, as a vector
/// of doubles usable directly as an index sequence. `None` when `v` has no
/// nonzero entry, the same absent sentinel logical indexing uses.
pub fn find(v: &[f64]) -> Option<Vec<f64>> {
    let out: Vec<f64> = v
        .iter()
        .enumerate()
        .filter(|&(_, &x)| fp_nonzero(x))
        .map(|(i, _)| i as f64)
        .collect();
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Sum of a vector.
pub fn sum(v: &[f64]) -> f64 {
    v.iter().sum()
}

/// Sum of every element of a matrix.
pub fn sum_all(m: &Mat<f64>) -> f64 {
    let mut total = 0.0;
    for j in 0..m.ncols() {
        for i in 0..m.nrows() {
            total += m[(i, j)];
        }
    }
    total
}

/// The colon sequence `start:end` as a vector of doubles; `None` when
/// `start > end` (MATLAB's empty range).
pub fn sequence(start: i64, end: i64) -> Option<Vec<f64>> {
    if start > end {
        return None;
    }
    Some((start..=end).map(|i| i as f64).collect())
}
