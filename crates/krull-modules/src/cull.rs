//! Presentation reduction: culling unit-pivot relations.
//!
//! A relation row whose pivot is a ring unit defines its pivot generator
//! in terms of later generators, so both the row and the generator are
//! redundant. `cull_matrix` identifies them on a canonical reduced
//! triangular relation matrix; `eliminate_culled` performs the matching
//! back-substitution and is what `submodule` construction uses to reach a
//! minimal presentation.

use krull_linalg::{reduced_form, DenseMatrix};
use krull_rings::EuclideanDomain;

/// The outcome of scanning a canonical relation matrix for redundancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CullResult {
    /// Surviving generator columns, in increasing order.
    pub gen_cols: Vec<usize>,
    /// Relation rows eliminated by substitution, in increasing order.
    pub culled: Vec<usize>,
    /// The pivot column of each surviving relation row, in row order.
    pub pivots: Vec<usize>,
}

/// Scans a canonical reduced triangular relation matrix for redundant
/// generator/relation pairs.
///
/// Rules, walking the rows in order with a column cursor:
/// - columns skipped before a row's pivot have no defining relation and
///   survive as generators;
/// - a row with a non-unit pivot is a genuine relation: the row survives
///   and its pivot column survives as a generator;
/// - a row with a unit pivot is culled together with its pivot column;
/// - trailing columns beyond the last pivot survive.
///
/// If exactly one relation row survives and it carries a unit entry in a
/// surviving column past its pivot, that row can be eliminated through
/// the unit as well: it is culled and the chosen column leaves the
/// surviving set.
#[must_use]
pub fn cull_matrix<R: EuclideanDomain>(matrix: &DenseMatrix<R>) -> CullResult {
    let num_cols = matrix.num_cols();
    let mut gen_cols = Vec::new();
    let mut culled = Vec::new();
    let mut pivots = Vec::new();
    let mut survivor = None;

    let mut col = 0;
    for row in 0..matrix.num_rows() {
        let Some(pivot) = matrix.pivot_col(row) else {
            break;
        };
        while col < pivot {
            gen_cols.push(col);
            col += 1;
        }
        if matrix[(row, pivot)].is_unit() {
            culled.push(row);
        } else {
            gen_cols.push(pivot);
            pivots.push(pivot);
            survivor = Some(row);
        }
        col = pivot + 1;
    }
    while col < num_cols {
        gen_cols.push(col);
        col += 1;
    }

    // A lone surviving relation can still be eliminated through a unit
    // entry past its pivot, if one sits in a surviving column.
    if pivots.len() == 1 {
        let row = survivor.expect("a recorded pivot implies a surviving row");
        if let Some(unit_col) = substitution_col(matrix, row) {
            culled.push(row);
            culled.sort_unstable();
            gen_cols.retain(|&c| c != unit_col);
            pivots.clear();
        }
    }

    CullResult {
        gen_cols,
        culled,
        pivots,
    }
}

/// The column through which a culled row eliminates a generator: the
/// pivot when the pivot is a unit, otherwise the first unit entry past
/// the pivot.
fn substitution_col<R: EuclideanDomain>(matrix: &DenseMatrix<R>, row: usize) -> Option<usize> {
    let pivot = matrix.pivot_col(row)?;
    if matrix[(row, pivot)].is_unit() {
        return Some(pivot);
    }
    (pivot + 1..matrix.num_cols()).find(|&j| matrix[(row, j)].is_unit())
}

/// Eliminates culled generators from a canonical relation matrix by
/// back-substitution.
///
/// One culled row is eliminated per pass, deepest first: the row is
/// substituted into every row above it, then dropped together with its
/// substitution column, and the remainder re-reduced and re-scanned.
/// Substitution can expose new unit pivots, so passes continue until the
/// scan culls nothing. The returned columns index the original matrix.
///
/// Returns the reduced relation matrix on the surviving generators and
/// the surviving column indices.
#[must_use]
pub fn eliminate_culled<R: EuclideanDomain>(
    matrix: &DenseMatrix<R>,
    cull: &CullResult,
) -> (DenseMatrix<R>, Vec<usize>) {
    let mut work = matrix.clone();
    let mut cols: Vec<usize> = (0..matrix.num_cols()).collect();
    let mut culled = cull.culled.clone();

    while let Some(&row) = culled.last() {
        let sub_col =
            substitution_col(&work, row).expect("a culled row must carry a unit entry");
        let inv = work[(row, sub_col)]
            .unit_inverse()
            .expect("substitution entry must be a unit");
        for above in 0..row {
            let coef = work[(above, sub_col)].clone();
            if !coef.is_zero() {
                work.add_scaled_row(above, row, &(-(coef * inv.clone())));
            }
        }

        // Drop the row and its column, then restore the canonical form.
        let kept_rows: Vec<usize> = (0..work.num_rows()).filter(|&r| r != row).collect();
        let kept_cols: Vec<usize> = (0..work.num_cols()).filter(|&c| c != sub_col).collect();
        cols = kept_cols.iter().map(|&c| cols[c]).collect();
        work = reduced_form(&work.select(&kept_rows, &kept_cols));

        culled = cull_matrix(&work).culled;
    }

    (work, cols)
}
