//! Linear-algebra emulation over Faer: LU-based inverse, the `\` and `/`
//! division operators, dense product, and integer matrix power.
//!
//! Shape preconditions and singularity are signalled by returning `None`,
//! never by panicking: callers on the metric hot path check the sentinel and
//! move on. The factorization itself is Faer's full-pivoting LU, the same
//! path used for direct dense solves.

use faer::linalg::solvers::{FullPivLu, SolveCore};
use faer::{Conj, Mat};

use crate::utils::fp::fp_nonzero;

/// Matrix inverse via LU decomposition.
///
/// Returns `None` for a non-square matrix or when the determinant is zero
/// under the crate's EPSILON comparison (numerically singular).
pub fn inv(m: &Mat<f64>) -> Option<Mat<f64>> {
    if m.nrows() != m.ncols() {
        return None;
    }
    if !fp_nonzero(m.as_ref().determinant()) {
        return None;
    }
    let factor = FullPivLu::new(m.as_ref());
    // Solving against the identity yields the inverse column by column.
    let mut inv_m = Mat::<f64>::identity(m.nrows(), m.ncols());
    factor.solve_in_place_with_conj(Conj::No, inv_m.as_mut());
    Some(inv_m)
}

/// Emulates `m1 \ m2`, i.e. `inv(m1) * m2`.
///
/// Both operands must be square with equal row count; `None` otherwise, and
/// `None` when `m1` is singular.
pub fn div_left(m1: &Mat<f64>, m2: &Mat<f64>) -> Option<Mat<f64>> {
    if m1.nrows() != m1.ncols() || m2.nrows() != m2.ncols() || m1.nrows() != m2.nrows() {
        return None;
    }
    let inv_m1 = inv(m1)?;
    Some(mul(&inv_m1, m2))
}

/// Emulates `m1 / m2`, i.e. `(inv(m2') * m1')'`.
///
/// Same shape preconditions as [`div_left`]; `None` when `m2` is singular.
pub fn div_right(m1: &Mat<f64>, m2: &Mat<f64>) -> Option<Mat<f64>> {
    if m1.nrows() != m1.ncols() || m2.nrows() != m2.ncols() || m1.nrows() != m2.nrows() {
        return None;
    }
    let m2_t = m2.transpose().to_owned();
    let inv_m2_t = inv(&m2_t)?;
    let m1_t = m1.transpose().to_owned();
    Some(mul(&inv_m2_t, &m1_t).transpose().to_owned())
}

/// Dense product `m1 * m2` through the provider.
pub fn mul(m1: &Mat<f64>, m2: &Mat<f64>) -> Mat<f64> {
    m1 * m2
}

/// Emulates `m ^ power` by repeated multiplication.
///
/// Returns `None` for a non-square matrix or `power < 1`.
pub fn pow(m: &Mat<f64>, power: i32) -> Option<Mat<f64>> {
    if m.nrows() != m.ncols() || power < 1 {
        return None;
    }
    let mut pow_m = m.clone();
    for _ in 2..=power {
        pow_m = mul(&pow_m, m);
    }
    Some(pow_m)
}
