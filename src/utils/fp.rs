//! Epsilon-based floating-point comparisons.
//!
//! Every truthiness decision in the crate goes through these helpers: a mask
//! entry is "true" iff `fp_nonzero` holds, and the singularity gate in
//! `emu::linalg` uses the same convention. Keeping one EPSILON here means the
//! whole layer agrees on what counts as zero.

use num_traits::Float;

/// Comparison tolerance for treating a double as zero.
pub const EPSILON: f64 = 1e-6;

#[inline]
fn eps<T: Float>() -> T {
    T::from(EPSILON).unwrap_or_else(T::epsilon)
}

/// `|x|` strictly below EPSILON.
#[inline]
pub fn fp_zero<T: Float>(x: T) -> bool {
    x.abs() < eps()
}

/// `|x|` strictly above EPSILON. This is mask truthiness.
#[inline]
pub fn fp_nonzero<T: Float>(x: T) -> bool {
    x.abs() > eps()
}

/// `a` and `b` within EPSILON of each other.
#[inline]
pub fn fp_equal<T: Float>(a: T, b: T) -> bool {
    (a - b).abs() < eps()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_nonzero_partition_around_epsilon() {
        assert!(fp_zero(0.0));
        assert!(fp_zero(1e-9));
        assert!(!fp_nonzero(1e-9));
        assert!(fp_nonzero(1e-3));
        assert!(fp_nonzero(-1e-3));
    }

    #[test]
    fn equality_is_symmetric_in_sign() {
        assert!(fp_equal(1.0, 1.0 + 1e-9));
        assert!(fp_equal(1.0 + 1e-9, 1.0));
        assert!(!fp_equal(1.0, 1.1));
    }

    #[test]
    fn helpers_are_generic_over_float_width() {
        assert!(fp_zero(0.0f32));
        assert!(fp_nonzero(0.5f32));
    }
}
