//! Validated counterparts of the indexing operations.
//!
//! The fast-path impls in `ordinal` and `logical` perform no bounds checking
//! in release builds. The functions here validate index ranges, mask lengths,
//! and value counts first, returning a descriptive [`IndexError`] instead of
//! tripping over the underlying container, then delegate to the fast path.
//! Precondition failures are a distinct channel from the zero-matches absent
//! sentinel, which stays `Option` inside the `Ok`.

use faer::Mat;

use crate::core::traits::Shape;
use crate::error::IndexError;
use crate::index::logical::{LogicalAssign, LogicalIndex};
use crate::index::ordinal::{OrdinalAssign, OrdinalIndex};
use crate::utils::reduce::Nnz;

fn check_indices(indices: &[f64], len: usize) -> Result<(), IndexError> {
    for &i in indices {
        let i = i as usize;
        if i >= len {
            return Err(IndexError::OutOfBounds(i, len));
        }
    }
    Ok(())
}

fn check_mask(mask: &[f64], len: usize) -> Result<(), IndexError> {
    if mask.len() != len {
        return Err(IndexError::MaskLength(mask.len(), len));
    }
    Ok(())
}

/// Checked vector-by-vector read.
pub fn ordinal_index_vector(v: &[f64], indices: &[f64]) -> Result<Vec<f64>, IndexError> {
    check_indices(indices, v.len())?;
    Ok(v.ordinal_index(indices))
}

/// Checked vector-by-vector assignment from per-position values.
pub fn ordinal_assign_vector(
    v: &mut [f64],
    indices: &[f64],
    values: &[f64],
) -> Result<(), IndexError> {
    check_indices(indices, v.len())?;
    if values.len() != indices.len() {
        return Err(IndexError::ValueCount(values.len(), indices.len()));
    }
    v.ordinal_assign(indices, values);
    Ok(())
}

/// Checked matrix read at a column-major linear address.
pub fn ordinal_index_linear(m: &Mat<f64>, index: usize) -> Result<f64, IndexError> {
    if index >= m.numel() {
        return Err(IndexError::OutOfBounds(index, m.numel()));
    }
    Ok(m.ordinal_index(index))
}

/// Checked matrix read over a sequence of linear addresses.
pub fn ordinal_index_matrix_vector(m: &Mat<f64>, indices: &[f64]) -> Result<Vec<f64>, IndexError> {
    check_indices(indices, m.numel())?;
    Ok(OrdinalIndex::<&[f64]>::ordinal_index(m, indices))
}

/// Checked Cartesian sub-block read (`m(rows, cols)`).
pub fn ordinal_index_submatrix(
    m: &Mat<f64>,
    rows: &[f64],
    cols: &[f64],
) -> Result<Mat<f64>, IndexError> {
    for &r in rows {
        let r = r as usize;
        if r >= m.nrows() {
            return Err(IndexError::RowOutOfBounds(r, m.nrows()));
        }
    }
    for &c in cols {
        let c = c as usize;
        if c >= m.ncols() {
            return Err(IndexError::ColOutOfBounds(c, m.ncols()));
        }
    }
    Ok(m.ordinal_index((rows, cols)))
}

/// Checked Cartesian sub-block assignment from a value matrix.
pub fn ordinal_assign_submatrix(
    m: &mut Mat<f64>,
    rows: &[f64],
    cols: &[f64],
    values: &Mat<f64>,
) -> Result<(), IndexError> {
    for &r in rows {
        let r = r as usize;
        if r >= m.nrows() {
            return Err(IndexError::RowOutOfBounds(r, m.nrows()));
        }
    }
    for &c in cols {
        let c = c as usize;
        if c >= m.ncols() {
            return Err(IndexError::ColOutOfBounds(c, m.ncols()));
        }
    }
    if values.nrows() != rows.len() || values.ncols() != cols.len() {
        return Err(IndexError::ValueShape(
            values.nrows(),
            values.ncols(),
            rows.len(),
            cols.len(),
        ));
    }
    m.ordinal_assign((rows, cols), values);
    Ok(())
}

/// Checked vector logical read. `Ok(None)` is the zero-matches sentinel.
pub fn logical_index_vector(v: &[f64], mask: &[f64]) -> Result<Option<Vec<f64>>, IndexError> {
    check_mask(mask, v.len())?;
    Ok(v.logical_index(mask))
}

/// Checked vector logical assignment from per-position values.
pub fn logical_assign_vector(
    v: &mut [f64],
    mask: &[f64],
    values: &[f64],
) -> Result<(), IndexError> {
    check_mask(mask, v.len())?;
    let selected = mask.nnz();
    if values.len() != selected {
        return Err(IndexError::ValueCount(values.len(), selected));
    }
    v.logical_assign(mask, values);
    Ok(())
}

/// Checked matrix-masked-by-matrix logical read.
///
/// The fast path folds "mask larger than source" into the absent sentinel;
/// here it is reported as a distinct precondition failure.
pub fn logical_index_matrix(
    m: &Mat<f64>,
    mask: &Mat<f64>,
) -> Result<Option<Vec<f64>>, IndexError> {
    if m.numel() < mask.numel() {
        return Err(IndexError::MaskLargerThanSource(mask.numel(), m.numel()));
    }
    Ok(m.logical_index(mask))
}
