//! Dense matrix implementation.
//!
//! Relation and embedding matrices of finitely presented modules are
//! small and dense, so a contiguous row-major layout beats any sparse
//! scheme here.

use std::ops::{Index, IndexMut};

use krull_rings::Ring;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    ///
    /// `zeros(0, n)` is the empty relation matrix on `n` generators; the
    /// column count is kept even with no rows.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows have differing lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns the column index of the first nonzero entry of a row.
    #[must_use]
    pub fn pivot_col(&self, row: usize) -> Option<usize> {
        self.row(row).iter().position(|v| !v.is_zero())
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }

    /// Row-vector times matrix: y = v * A (the left action).
    ///
    /// # Panics
    ///
    /// Panics if `v.len() != num_rows`.
    #[must_use]
    pub fn vm(&self, v: &[R]) -> Vec<R> {
        assert_eq!(v.len(), self.num_rows);
        (0..self.num_cols)
            .map(|col| {
                v.iter()
                    .enumerate()
                    .fold(R::zero(), |acc, (row, c)| {
                        acc + c.clone() * self[(row, col)].clone()
                    })
            })
            .collect()
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions disagree.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = R::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                result[(i, j)] = sum;
            }
        }
        result
    }

    /// Stacks `other` below `self`.
    ///
    /// # Panics
    ///
    /// Panics if the column counts disagree.
    #[must_use]
    pub fn vstack(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_cols);
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Self {
            data,
            num_rows: self.num_rows + other.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Extracts the submatrix of rows in `start..end`.
    #[must_use]
    pub fn sub_rows(&self, start: usize, end: usize) -> Self {
        assert!(start <= end && end <= self.num_rows);
        Self {
            data: self.data[start * self.num_cols..end * self.num_cols].to_vec(),
            num_rows: end - start,
            num_cols: self.num_cols,
        }
    }

    /// Extracts the submatrix of the given rows restricted to the given columns.
    #[must_use]
    pub fn select(&self, rows: &[usize], cols: &[usize]) -> Self {
        let mut data = Vec::with_capacity(rows.len() * cols.len());
        for &i in rows {
            for &j in cols {
                data.push(self[(i, j)].clone());
            }
        }
        Self {
            data,
            num_rows: rows.len(),
            num_cols: cols.len(),
        }
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krull_rings::Z;

    fn z(rows: Vec<Vec<i64>>) -> DenseMatrix<Z> {
        DenseMatrix::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(Z::new).collect())
                .collect(),
        )
    }

    #[test]
    fn test_zeros_keeps_cols() {
        let m: DenseMatrix<Z> = DenseMatrix::zeros(0, 4);
        assert_eq!(m.num_rows(), 0);
        assert_eq!(m.num_cols(), 4);
    }

    #[test]
    fn test_vm() {
        let m = z(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let v = vec![Z::new(2), Z::new(-1)];
        // 2*(1,2,3) - (4,5,6) = (-2, -1, 0)
        assert_eq!(m.vm(&v), vec![Z::new(-2), Z::new(-1), Z::new(0)]);
    }

    #[test]
    fn test_mm() {
        let a = z(vec![vec![1, 2], vec![3, 4]]);
        let b = z(vec![vec![5, 6], vec![7, 8]]);
        let c = a.mm(&b);
        assert_eq!(c, z(vec![vec![19, 22], vec![43, 50]]));
    }

    #[test]
    fn test_vstack_and_sub_rows() {
        let a = z(vec![vec![1, 2]]);
        let b = z(vec![vec![3, 4], vec![5, 6]]);
        let s = a.vstack(&b);
        assert_eq!(s.num_rows(), 3);
        assert_eq!(s.row(2), &[Z::new(5), Z::new(6)]);
        assert_eq!(s.sub_rows(1, 3), b);
    }

    #[test]
    fn test_select() {
        let m = z(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let s = m.select(&[0, 2], &[1, 2]);
        assert_eq!(s, z(vec![vec![2, 3], vec![8, 9]]));
    }

    #[test]
    fn test_pivot_col() {
        let m = z(vec![vec![0, 0, 7], vec![0, 0, 0]]);
        assert_eq!(m.pivot_col(0), Some(2));
        assert_eq!(m.pivot_col(1), None);
    }
}
