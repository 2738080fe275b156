//! Tests for ordinal indexing: the identity and permutation laws, column-major
//! linear addressing, Cartesian sub-block extraction, and assignment
//! idempotence.

use faer::Mat;
use matdex::{randperm, DenseMatrix, OrdinalAssign, OrdinalIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `M = [[1,2,3],[4,5,6]]` laid out column-major.
fn two_by_three() -> Mat<f64> {
    Mat::from_raw(2, 3, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0])
}

/// Indexing a vector by the identity sequence returns it unchanged.
#[test]
fn identity_index_sequence_is_a_no_op() {
    let v: Vec<f64> = (0..17).map(|i| (i * i) as f64).collect();
    let idx: Vec<f64> = (0..17).map(|i| i as f64).collect();
    assert_eq!(v.ordinal_index(&idx[..]), v);
}

/// For a 3x4 matrix filled 0..11 column-major, linear address 5 lands on
/// row 2 of column 1 (5 = 2 + 3*1).
#[test]
fn linear_address_five_in_a_three_by_four() {
    let m: Mat<f64> = Mat::from_raw(3, 4, (0..12).map(f64::from).collect());
    let got: f64 = m.ordinal_index(5);
    assert_eq!(got, m[(2, 1)]);
    assert_eq!(got, 5.0);
}

/// `ordinal_index(M, rows=[0,1], cols=[2,0])` on [[1,2,3],[4,5,6]] gives
/// [[3,1],[6,4]].
#[test]
fn sub_block_extraction_concrete_case() {
    let m = two_by_three();
    let sub = m.ordinal_index((&[0.0, 1.0][..], &[2.0, 0.0][..]));
    assert_eq!(sub.nrows(), 2);
    assert_eq!(sub.ncols(), 2);
    assert_eq!(sub[(0, 0)], 3.0);
    assert_eq!(sub[(0, 1)], 1.0);
    assert_eq!(sub[(1, 0)], 6.0);
    assert_eq!(sub[(1, 1)], 4.0);
}

/// `G(p, p)` for a permutation `p` reindexes rows and columns consistently:
/// entry (i, j) of the result equals `G[p[i]][p[j]]`.
#[test]
fn permutation_reindexes_rows_and_columns_consistently() {
    let n = 8;
    let mut rng = StdRng::seed_from_u64(42);
    let g: Mat<f64> = Mat::from_fn(n, n, |_, _| rng.gen::<f64>());
    let p: Vec<f64> = randperm(&mut rng, n).into_iter().map(|i| i as f64).collect();

    let reindexed = g.ordinal_index((&p[..], &p[..]));
    for i in 0..n {
        for j in 0..n {
            assert_eq!(reindexed[(i, j)], g[(p[i] as usize, p[j] as usize)]);
        }
    }
}

/// Matrix-by-vector reads walk linear addresses column-major, in sequence
/// order, duplicates preserved.
#[test]
fn matrix_by_vector_read_follows_the_sequence() {
    let m = two_by_three();
    // Linear addresses: 0 -> 1, 3 -> 5 (row 1 col 1), 3 again, 4 -> 3.
    let out: Vec<f64> = m.ordinal_index(&[0.0, 3.0, 3.0, 4.0][..]);
    assert_eq!(out, vec![1.0, 5.0, 5.0, 3.0]);
}

/// Matrix-by-vector assignment: a broadcast scalar writes every listed linear
/// address, and per-position values pair up with the sequence one for one.
#[test]
fn matrix_by_vector_assignment_writes_linear_addresses() {
    let mut m: Mat<f64> = Mat::zeros(2, 3);
    // Linear addresses 0 -> (0,0), 3 -> (1,1), 4 -> (0,2).
    let idx = [0.0, 3.0, 4.0];
    m.ordinal_assign(&idx[..], 2.5);
    assert_eq!(m[(0, 0)], 2.5);
    assert_eq!(m[(1, 1)], 2.5);
    assert_eq!(m[(0, 2)], 2.5);
    assert_eq!(m[(1, 0)], 0.0);
    assert_eq!(m[(0, 1)], 0.0);
    assert_eq!(m[(1, 2)], 0.0);

    m.ordinal_assign(&idx[..], &[10.0, 11.0, 12.0][..]);
    assert_eq!(m[(0, 0)], 10.0);
    assert_eq!(m[(1, 1)], 11.0);
    assert_eq!(m[(0, 2)], 12.0);
}

/// Matrix-by-vector assignment then read through the same sequence recovers
/// the written values.
#[test]
fn matrix_by_vector_assignment_roundtrip() {
    let mut m = two_by_three();
    let idx = [5.0, 1.0, 2.0];
    m.ordinal_assign(&idx[..], &[-1.0, -2.0, -3.0][..]);
    let out: Vec<f64> = m.ordinal_index(&idx[..]);
    assert_eq!(out, vec![-1.0, -2.0, -3.0]);
}

/// An index matrix of arbitrary shape selects elementwise and preserves its
/// own shape.
#[test]
fn matrix_by_matrix_read_preserves_index_shape() {
    let m = two_by_three();
    let indices: Mat<f64> = Mat::from_raw(3, 1, vec![5.0, 0.0, 2.0]);
    let out = m.ordinal_index(&indices);
    assert_eq!(out.nrows(), 3);
    assert_eq!(out.ncols(), 1);
    assert_eq!(out[(0, 0)], 6.0);
    assert_eq!(out[(1, 0)], 1.0);
    assert_eq!(out[(2, 0)], 2.0);
}

/// Assignment applied twice with the same arguments leaves the same final
/// state as applied once.
#[test]
fn assignment_is_idempotent() {
    let idx = [1.0, 4.0, 2.0];
    let vals = [9.0, 8.0, 7.0];

    let mut once: Vec<f64> = (0..6).map(f64::from).collect();
    once.ordinal_assign(&idx[..], &vals[..]);
    let mut twice = once.clone();
    twice.ordinal_assign(&idx[..], &vals[..]);
    assert_eq!(once, twice);
    assert_eq!(once, vec![0.0, 9.0, 7.0, 3.0, 8.0, 5.0]);
}

/// Sub-block assignment from a value matrix writes each value to its
/// row/column pair; the rest of the target is untouched.
#[test]
fn sub_block_assignment_from_a_value_matrix() {
    let mut m: Mat<f64> = Mat::zeros(3, 3);
    let values: Mat<f64> = Mat::from_raw(2, 2, vec![1.0, 3.0, 2.0, 4.0]);
    m.ordinal_assign((&[2.0, 0.0][..], &[1.0, 2.0][..]), &values);
    assert_eq!(m[(2, 1)], 1.0);
    assert_eq!(m[(2, 2)], 2.0);
    assert_eq!(m[(0, 1)], 3.0);
    assert_eq!(m[(0, 2)], 4.0);
    assert_eq!(m[(1, 1)], 0.0);
}

/// Broadcast scalar assignment through an index matrix hits every listed
/// linear address.
#[test]
fn matrix_by_matrix_scalar_assignment() {
    let mut m: Mat<f64> = Mat::zeros(2, 2);
    let indices: Mat<f64> = Mat::from_raw(1, 3, vec![0.0, 3.0, 0.0]);
    m.ordinal_assign(&indices, 5.0);
    assert_eq!(m[(0, 0)], 5.0);
    assert_eq!(m[(1, 1)], 5.0);
    assert_eq!(m[(1, 0)], 0.0);
    assert_eq!(m[(0, 1)], 0.0);
}
