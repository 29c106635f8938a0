//! Canonical triangular forms over Euclidean domains.
//!
//! The canonical reduced triangular form of a matrix over a Euclidean
//! domain is the Hermite-like normal form used for module relation
//! matrices: nonzero rows with strictly increasing pivot columns, pivots
//! turned into their canonical associates, and every entry above a pivot
//! reduced modulo that pivot. With a fixed remainder convention the form
//! is unique, so relation matrices can be compared and solved against
//! directly.
//!
//! All elimination steps are two-row unimodular transforms built from the
//! extended gcd, so the row lattice is preserved exactly.

use krull_rings::EuclideanDomain;

use crate::dense_matrix::DenseMatrix;

/// Computes the canonical reduced triangular form, dropping zero rows.
#[must_use]
pub fn reduced_form<R: EuclideanDomain>(matrix: &DenseMatrix<R>) -> DenseMatrix<R> {
    let (reduced, _, rank) = reduced_form_with_transform(matrix);
    reduced.sub_rows(0, rank)
}

/// Computes the reduced triangular form together with its row transform.
///
/// Returns `(reduced, transform, rank)` where `transform * matrix ==
/// reduced`, `transform` is unimodular, and the `rank` leading rows of
/// `reduced` are nonzero (the rest are zero rows).
#[must_use]
pub fn reduced_form_with_transform<R: EuclideanDomain>(
    matrix: &DenseMatrix<R>,
) -> (DenseMatrix<R>, DenseMatrix<R>, usize) {
    let num_rows = matrix.num_rows();
    let num_cols = matrix.num_cols();
    let mut w = matrix.clone();
    let mut u = DenseMatrix::identity(num_rows);

    // Forward elimination: gcd out each column below the current pivot row.
    let mut pivot_row = 0;
    for col in 0..num_cols {
        if pivot_row == num_rows {
            break;
        }

        let Some(nonzero) = (pivot_row..num_rows).find(|&r| !w[(r, col)].is_zero()) else {
            continue;
        };
        w.swap_rows(pivot_row, nonzero);
        u.swap_rows(pivot_row, nonzero);

        for r in pivot_row + 1..num_rows {
            if w[(r, col)].is_zero() {
                continue;
            }
            let a = w[(pivot_row, col)].clone();
            let b = w[(r, col)].clone();
            let (g, s, t) = a.extended_gcd(&b);
            let qa = a.div(&g);
            let qb = b.div(&g);
            // [s t; -qb qa] has determinant (s*a + t*b)/g = 1.
            two_row_transform(&mut w, pivot_row, r, &s, &t, &qb, &qa);
            two_row_transform(&mut u, pivot_row, r, &s, &t, &qb, &qa);
        }

        pivot_row += 1;
    }
    let rank = pivot_row;

    // Normalize pivots to their canonical associates.
    for i in 0..rank {
        let Some(p) = w.pivot_col(i) else { continue };
        let cu = w[(i, p)].canonical_unit();
        if !cu.is_one() {
            let inv = cu
                .unit_inverse()
                .expect("canonical unit of a nonzero element must be a unit");
            w.scale_row(i, &inv);
            u.scale_row(i, &inv);
        }
    }

    // Reduce entries above each pivot modulo the pivot. Rows below a
    // pivot row only touch columns right of pivots already handled, so a
    // single left-to-right pass suffices.
    for i in 0..rank {
        let Some(p) = w.pivot_col(i) else { continue };
        for j in 0..i {
            let (q, _) = w[(j, p)].div_rem(&w[(i, p)]);
            if !q.is_zero() {
                w.add_scaled_row(j, i, &(-q.clone()));
                u.add_scaled_row(j, i, &(-q));
            }
        }
    }

    (w, u, rank)
}

/// Applies the unimodular transform `[s t; -qb qa]` to rows `(i, j)`.
fn two_row_transform<R: EuclideanDomain>(
    m: &mut DenseMatrix<R>,
    i: usize,
    j: usize,
    s: &R,
    t: &R,
    qb: &R,
    qa: &R,
) {
    for col in 0..m.num_cols() {
        let mi = m[(i, col)].clone();
        let mj = m[(j, col)].clone();
        m[(i, col)] = s.clone() * mi.clone() + t.clone() * mj.clone();
        m[(j, col)] = qa.clone() * mj - qb.clone() * mi;
    }
}

/// Computes a basis of the left kernel `{ v : v * A = 0 }`.
///
/// Returns the nullity and a basis matrix in canonical reduced form with
/// one kernel vector per row. The transform rows mapping to zero rows of
/// the reduced form span the kernel exactly: the transform is unimodular
/// and the nonzero reduced rows are independent over the fraction field.
#[must_use]
pub fn left_kernel<R: EuclideanDomain>(matrix: &DenseMatrix<R>) -> (usize, DenseMatrix<R>) {
    let (_, transform, rank) = reduced_form_with_transform(matrix);
    let nullity = matrix.num_rows() - rank;
    let basis = transform.sub_rows(rank, matrix.num_rows());
    (nullity, reduced_form(&basis))
}

/// Solves `x * basis = target` against a reduced triangular basis.
///
/// Walks the target left to right; each nonzero coordinate must sit in a
/// pivot column of `basis` and be exactly divisible by that pivot,
/// otherwise there is no solution over the ring. Returns one coefficient
/// per basis row.
///
/// # Panics
///
/// Panics if `target.len() != basis.num_cols()`.
#[must_use]
pub fn can_solve_left_reduced_triu<R: EuclideanDomain>(
    target: &[R],
    basis: &DenseMatrix<R>,
) -> Option<Vec<R>> {
    assert_eq!(target.len(), basis.num_cols());

    let pivots: Vec<Option<usize>> = (0..basis.num_rows()).map(|i| basis.pivot_col(i)).collect();
    let mut work = target.to_vec();
    let mut coeffs = vec![R::zero(); basis.num_rows()];

    for col in 0..work.len() {
        if work[col].is_zero() {
            continue;
        }
        let row = pivots.iter().position(|&p| p == Some(col))?;
        let (q, r) = work[col].div_rem(&basis[(row, col)]);
        if !r.is_zero() {
            return None;
        }
        for j in col..work.len() {
            work[j] = work[j].clone() - q.clone() * basis[(row, j)].clone();
        }
        coeffs[row] = q;
    }

    Some(coeffs)
}
