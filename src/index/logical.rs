//! Logical (mask) indexing and assignment.
//!
//! A mask is a container of doubles read element-wise as booleans through
//! [`fp_nonzero`](crate::utils::fp::fp_nonzero). Reads return `None` when the
//! mask selects nothing (the absent sentinel callers must check before use),
//! and otherwise a vector of the selected values in the mask's traversal
//! order: left-to-right for vector masks, column-major (outer loop over
//! columns, inner over rows) for matrix masks. Assignments consume values in
//! that same order.

use faer::Mat;

use crate::core::addr;
use crate::core::traits::Shape;
use crate::index::ordinal::{OrdinalAssign, OrdinalIndex};
use crate::utils::fp::fp_nonzero;
use crate::utils::reduce::Nnz;

/// Logical read: gather the elements of `self` where `mask` is nonzero.
///
/// Returns `None` when nothing is selected (or when the mask cannot apply,
/// see the matrix-mask impl), never an empty container.
pub trait LogicalIndex<M> {
    type Output;
    fn logical_index(&self, mask: M) -> Option<Self::Output>;
}

/// Logical write: assign into `self` wherever `mask` is nonzero.
///
/// A per-position value sequence must hold exactly one value per nonzero
/// mask entry, consumed in the mask's traversal order.
pub trait LogicalAssign<M, V> {
    fn logical_assign(&mut self, mask: M, values: V);
}

// Vector masked by vector

impl<'a> LogicalIndex<&'a [f64]> for [f64] {
    type Output = Vec<f64>;

    fn logical_index(&self, mask: &[f64]) -> Option<Vec<f64>> {
        debug_assert_eq!(mask.len(), self.len(), "mask length matches vector");
        let out: Vec<f64> = self
            .iter()
            .zip(mask)
            .filter(|&(_, &flag)| fp_nonzero(flag))
            .map(|(&value, _)| value)
            .collect();
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

impl<'a> LogicalAssign<&'a [f64], f64> for [f64] {
    fn logical_assign(&mut self, mask: &[f64], value: f64) {
        debug_assert_eq!(mask.len(), self.len(), "mask length matches vector");
        for (slot, &flag) in self.iter_mut().zip(mask) {
            if fp_nonzero(flag) {
                *slot = value;
            }
        }
    }
}

impl<'a, 'b> LogicalAssign<&'a [f64], &'b [f64]> for [f64] {
    fn logical_assign(&mut self, mask: &[f64], values: &[f64]) {
        debug_assert_eq!(mask.len(), self.len(), "mask length matches vector");
        debug_assert_eq!(values.len(), mask.nnz(), "one value per selected position");
        let mut next = 0;
        for (slot, &flag) in self.iter_mut().zip(mask) {
            if fp_nonzero(flag) {
                *slot = values[next];
                next += 1;
            }
        }
    }
}

// Matrix masked by vector: the mask runs over the matrix's column-major
// linear addresses and must cover all of them.

impl<'a> LogicalIndex<&'a [f64]> for Mat<f64> {
    type Output = Vec<f64>;

    fn logical_index(&self, mask: &[f64]) -> Option<Vec<f64>> {
        debug_assert_eq!(mask.len(), self.numel(), "mask length matches element count");
        let mut out = Vec::with_capacity(mask.nnz());
        for (i, &flag) in mask.iter().enumerate() {
            if fp_nonzero(flag) {
                out.push(OrdinalIndex::<usize>::ordinal_index(self, i));
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

impl<'a> LogicalAssign<&'a [f64], f64> for Mat<f64> {
    fn logical_assign(&mut self, mask: &[f64], value: f64) {
        debug_assert_eq!(mask.len(), self.numel(), "mask length matches element count");
        for (i, &flag) in mask.iter().enumerate() {
            if fp_nonzero(flag) {
                OrdinalAssign::<usize, f64>::ordinal_assign(self, i, value);
            }
        }
    }
}

impl<'a, 'b> LogicalAssign<&'a [f64], &'b [f64]> for Mat<f64> {
    fn logical_assign(&mut self, mask: &[f64], values: &[f64]) {
        debug_assert_eq!(mask.len(), self.numel(), "mask length matches element count");
        debug_assert_eq!(values.len(), mask.nnz(), "one value per selected position");
        let mut next = 0;
        for (i, &flag) in mask.iter().enumerate() {
            if fp_nonzero(flag) {
                OrdinalAssign::<usize, f64>::ordinal_assign(self, i, values[next]);
                next += 1;
            }
        }
    }
}

// Matrix masked by matrix

impl<'a> LogicalIndex<&'a Mat<f64>> for Mat<f64> {
    type Output = Vec<f64>;

    /// Unlike the vector forms, the mask is not required to match the source's
    /// shape: any mask with `mask.numel() <= self.numel()` applies, addressing
    /// the source through the mask's own column-major linear layout. This
    /// deliberate relaxation supports masking a sub-structure of a larger
    /// matrix; a mask with more elements than the source yields `None`.
    fn logical_index(&self, mask: &Mat<f64>) -> Option<Vec<f64>> {
        if mask.nnz() == 0 || self.numel() < mask.numel() {
            return None;
        }
        let mut out = Vec::with_capacity(mask.nnz());
        for j in 0..mask.ncols() {
            for i in 0..mask.nrows() {
                if fp_nonzero(mask[(i, j)]) {
                    let index = addr::to_linear(i, j, mask.nrows());
                    out.push(OrdinalIndex::<usize>::ordinal_index(self, index));
                }
            }
        }
        Some(out)
    }
}

impl<'a> LogicalAssign<&'a Mat<f64>, f64> for Mat<f64> {
    fn logical_assign(&mut self, mask: &Mat<f64>, value: f64) {
        for j in 0..mask.ncols() {
            for i in 0..mask.nrows() {
                if fp_nonzero(mask[(i, j)]) {
                    let index = addr::to_linear(i, j, mask.nrows());
                    OrdinalAssign::<usize, f64>::ordinal_assign(self, index, value);
                }
            }
        }
    }
}

impl<'a, 'b> LogicalAssign<&'a Mat<f64>, &'b [f64]> for Mat<f64> {
    fn logical_assign(&mut self, mask: &Mat<f64>, values: &[f64]) {
        debug_assert_eq!(values.len(), mask.nnz(), "one value per selected position");
        let mut next = 0;
        for j in 0..mask.ncols() {
            for i in 0..mask.nrows() {
                if fp_nonzero(mask[(i, j)]) {
                    let index = addr::to_linear(i, j, mask.nrows());
                    OrdinalAssign::<usize, f64>::ordinal_assign(self, index, values[next]);
                    next += 1;
                }
            }
        }
    }
}
