//! Column-major linear addressing.
//!
//! A single integer addresses a 2-D position by varying the row fastest,
//! exactly as MATLAB's linear indexing does. Every matrix-by-scalar and
//! matrix-by-vector operation in this crate goes through this pair of
//! conversions; nothing else in the crate computes the mapping inline.

/// Split a column-major linear address into `(row, col)` for a matrix with
/// `nrows` rows.
#[inline]
pub fn to_pair(index: usize, nrows: usize) -> (usize, usize) {
    (index % nrows, index / nrows)
}

/// Combine `(row, col)` into a column-major linear address for a matrix with
/// `nrows` rows.
#[inline]
pub fn to_linear(row: usize, col: usize, nrows: usize) -> usize {
    col * nrows + row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_cell_of_a_rectangular_shape() {
        let nrows = 3;
        let ncols = 5;
        for col in 0..ncols {
            for row in 0..nrows {
                let idx = to_linear(row, col, nrows);
                assert_eq!(to_pair(idx, nrows), (row, col));
            }
        }
    }

    #[test]
    fn linear_addresses_vary_row_fastest() {
        // For a 3-row matrix, addresses 0,1,2 walk down column 0 and
        // address 3 wraps to the top of column 1.
        assert_eq!(to_pair(0, 3), (0, 0));
        assert_eq!(to_pair(2, 3), (2, 0));
        assert_eq!(to_pair(3, 3), (0, 1));
        assert_eq!(to_pair(5, 3), (2, 1));
    }
}
