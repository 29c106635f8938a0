//! Integration tests for the reduction kernels over Z.

use krull_rings::Z;

use crate::dense_matrix::DenseMatrix;
use crate::reduce::{can_solve_left_reduced_triu, left_kernel, reduced_form, reduced_form_with_transform};

fn z(rows: Vec<Vec<i64>>) -> DenseMatrix<Z> {
    DenseMatrix::from_rows(
        rows.into_iter()
            .map(|r| r.into_iter().map(Z::new).collect())
            .collect(),
    )
}

fn zv(v: Vec<i64>) -> Vec<Z> {
    v.into_iter().map(Z::new).collect()
}

#[test]
fn reduced_form_of_diagonal_lattices() {
    // Rows spanning 3Z x 6Z and 2Z x 4Z together span Z x 2Z.
    let m = z(vec![vec![3, 0], vec![0, 6], vec![2, 0], vec![0, 4]]);
    assert_eq!(reduced_form(&m), z(vec![vec![1, 0], vec![0, 2]]));
}

#[test]
fn reduced_form_is_idempotent() {
    let m = z(vec![vec![4, 6, 2], vec![6, 3, 0], vec![0, 0, 5]]);
    let r = reduced_form(&m);
    assert_eq!(reduced_form(&r), r);
}

#[test]
fn reduced_form_normalizes_pivot_sign() {
    let m = z(vec![vec![-2, 0], vec![0, -3]]);
    assert_eq!(reduced_form(&m), z(vec![vec![2, 0], vec![0, 3]]));
}

#[test]
fn reduced_form_reduces_above_pivots() {
    let m = z(vec![vec![2, 7], vec![0, 3]]);
    assert_eq!(reduced_form(&m), z(vec![vec![2, 1], vec![0, 3]]));
}

#[test]
fn transform_reproduces_reduction() {
    let m = z(vec![vec![4, 6], vec![10, 15], vec![2, 2]]);
    let (reduced, transform, rank) = reduced_form_with_transform(&m);
    assert_eq!(transform.mm(&m), reduced);
    assert!(rank <= 2);
    for i in rank..reduced.num_rows() {
        assert!(reduced.row(i).iter().all(krull_rings::Ring::is_zero));
    }
}

#[test]
fn left_kernel_annihilates() {
    let m = z(vec![vec![3, 0], vec![0, 6], vec![2, 0], vec![0, 4]]);
    let (nullity, ker) = left_kernel(&m);
    assert_eq!(nullity, 2);
    assert_eq!(ker.num_rows(), 2);
    for i in 0..ker.num_rows() {
        assert!(m.vm(ker.row(i)).iter().all(krull_rings::Ring::is_zero));
    }
    // (2, 0, -3, 0) kills the matrix, so it must lie in the kernel lattice.
    assert!(can_solve_left_reduced_triu(&zv(vec![2, 0, -3, 0]), &ker).is_some());
    assert!(can_solve_left_reduced_triu(&zv(vec![0, 2, 0, -3]), &ker).is_some());
}

#[test]
fn left_kernel_of_independent_rows_is_trivial() {
    let m = z(vec![vec![2, 0], vec![0, 4]]);
    let (nullity, ker) = left_kernel(&m);
    assert_eq!(nullity, 0);
    assert_eq!(ker.num_rows(), 0);
    assert_eq!(ker.num_cols(), 2);
}

#[test]
fn solve_against_triangular_basis() {
    let basis = z(vec![vec![2, 0], vec![0, 4]]);

    let coeffs = can_solve_left_reduced_triu(&zv(vec![6, 0]), &basis).unwrap();
    assert_eq!(coeffs, zv(vec![3, 0]));

    let coeffs = can_solve_left_reduced_triu(&zv(vec![-4, 8]), &basis).unwrap();
    assert_eq!(coeffs, zv(vec![-2, 2]));

    // 1 is not a multiple of 2, 2 is not a multiple of 4.
    assert!(can_solve_left_reduced_triu(&zv(vec![1, 0]), &basis).is_none());
    assert!(can_solve_left_reduced_triu(&zv(vec![0, 2]), &basis).is_none());
}

#[test]
fn solve_with_off_pivot_columns() {
    // Pivot columns 0 and 2; column 1 is free of pivots.
    let basis = z(vec![vec![1, 2, 0], vec![0, 0, 3]]);

    let coeffs = can_solve_left_reduced_triu(&zv(vec![2, 4, 3]), &basis).unwrap();
    assert_eq!(coeffs, zv(vec![2, 1]));

    // Residual in the pivot-free column: no solution.
    assert!(can_solve_left_reduced_triu(&zv(vec![2, 5, 3]), &basis).is_none());
}

#[test]
fn solve_against_empty_basis() {
    let basis: DenseMatrix<Z> = DenseMatrix::zeros(0, 3);
    assert!(can_solve_left_reduced_triu(&zv(vec![0, 0, 0]), &basis).is_some());
    assert!(can_solve_left_reduced_triu(&zv(vec![0, 1, 0]), &basis).is_none());
}
