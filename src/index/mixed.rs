//! Mixed indexing: explicit row indices combined with a logical column mask.

use faer::Mat;

use crate::utils::fp::fp_nonzero;
use crate::utils::reduce::Nnz;

/// Emulates `m(rows, logical_cols)` where `rows` holds explicit row indices
/// and `logical_cols` flags columns by nonzero entries.
///
/// The result is `rows.len() x nnz(logical_cols)`, with the flagged columns
/// emitted in ascending column order. Returns `None` when no column is
/// flagged or `rows` is empty.
pub fn mixed_logical_index(
    m: &Mat<f64>,
    rows: &[f64],
    logical_cols: &[f64],
) -> Option<Mat<f64>> {
    let ncols = logical_cols.nnz();
    if ncols == 0 || rows.is_empty() {
        return None;
    }
    let mut out = Mat::zeros(rows.len(), ncols);
    let mut column = 0;
    for (j, &flag) in logical_cols.iter().enumerate() {
        if fp_nonzero(flag) {
            for (i, &r) in rows.iter().enumerate() {
                out[(i, column)] = m[(r as usize, j)];
            }
            column += 1;
        }
    }
    Some(out)
}
