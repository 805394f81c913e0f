//! Gaussian elimination: determinant, inverse and rank.

use crate::{Config, Field, LinalgError, Number, Result};

use super::Matrix;

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Returns a new identity matrix.
    pub(crate) fn new_identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Field, const N: usize> Matrix<T, N, N> {
    /// Returns the [determinant] of the matrix, using exact comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 9.0, 1.0],
    ///     [1.0, 1.0, -3.0],
    ///     [0.0, 1.0, 1.0],
    /// ]);
    /// assert_eq!(mat.determinant(), -4.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        self.determinant_with(&Config::default())
    }

    /// Returns the determinant of the matrix.
    ///
    /// The matrix is reduced to upper-triangular form. When a pivot is zero (according to
    /// `config.comparison`), a later row with a non-zero entry in that column is swapped in, which
    /// flips the sign of the result. If there is no such row, the determinant is exactly zero.
    pub fn determinant_with(&self, config: &Config) -> T {
        let cmp = config.comparison;
        let mut m = self.clone();
        let mut det = T::ONE;

        for col in 0..N {
            let Some(pivot) = (col..N).find(|&row| !cmp.is_zero(m[(row, col)])) else {
                return T::ZERO;
            };
            if pivot != col {
                m.swap_rows(pivot, col);
                det = -det;
            }

            let p = m[(col, col)];
            for row in col + 1..N {
                let factor = m[(row, col)] / p;
                for c in col..N {
                    let sub = factor * m[(col, c)];
                    m[(row, c)] -= sub;
                }
            }
            det *= p;
        }

        det
    }

    /// Returns the inverse of the matrix, using exact comparisons.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularMatrix`] if the matrix has no inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 0.0],
    ///     [0.0, 4.0],
    /// ]);
    /// assert_eq!(mat.inverted()?, Matrix::from_rows([
    ///     [0.5, 0.0],
    ///     [0.0, 0.25],
    /// ]));
    ///
    /// let singular = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [2.0, 4.0],
    /// ]);
    /// assert_eq!(singular.inverted(), Err(LinalgError::SingularMatrix));
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn inverted(&self) -> Result<Self> {
        self.inverted_with(&Config::default())
    }

    /// Returns the inverse of the matrix, computed by Gauss–Jordan elimination of `[self | I]`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularMatrix`] if some column has no non-zero pivot (according to
    /// `config.comparison`).
    pub fn inverted_with(&self, config: &Config) -> Result<Self> {
        let cmp = config.comparison;
        let mut m = self.clone();
        let mut inv = Self::new_identity();

        for col in 0..N {
            let Some(pivot) = (col..N).find(|&row| !cmp.is_zero(m[(row, col)])) else {
                log::trace!("no pivot in column {col}, {N}x{N} matrix is singular");
                return Err(LinalgError::SingularMatrix);
            };
            if pivot != col {
                m.swap_rows(pivot, col);
                inv.swap_rows(pivot, col);
            }

            let p = m[(col, col)];
            m.row_mut(col)[col..].iter_mut().for_each(|e| *e /= p);
            inv.row_mut(col).iter_mut().for_each(|e| *e /= p);
            m[(col, col)] = T::ONE;

            for row in (0..N).filter(|&row| row != col) {
                let factor = m[(row, col)];
                if cmp.is_zero(factor) {
                    continue;
                }
                for c in col..N {
                    let sub = factor * m[(col, c)];
                    m[(row, c)] -= sub;
                }
                for c in 0..N {
                    let sub = factor * inv[(col, c)];
                    inv[(row, c)] -= sub;
                }
            }
        }

        Ok(inv)
    }
}

impl<T: Field, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns the rank of the matrix, using exact comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [2.0, 4.0, 6.0],
    /// ]);
    /// assert_eq!(mat.rank(), 1);
    /// assert_eq!(Mat3d::identity().rank(), 3);
    /// ```
    pub fn rank(&self) -> usize {
        self.rank_with(&Config::default())
    }

    /// Returns the rank of the matrix (the number of linearly independent rows or columns).
    ///
    /// The result is at most `min(R, C)`. Pivots are tested for zero according to
    /// `config.comparison`.
    pub fn rank_with(&self, config: &Config) -> usize {
        if R >= C {
            tall_rank(self.clone(), config)
        } else {
            tall_rank(self.transposed(), config)
        }
    }
}

/// Computes the rank of a matrix that has at least as many rows as columns.
///
/// Starts from the full column count and eliminates one pivot column at a time. A column without
/// any usable pivot is dependent on the ones before it: it is overwritten with the last active
/// column, the active rank shrinks by one, and the same position is tried again.
fn tall_rank<T: Field, const A: usize, const B: usize>(
    mut m: Matrix<T, A, B>,
    config: &Config,
) -> usize {
    debug_assert!(A >= B);
    let cmp = config.comparison;
    let mut rank = B;
    let mut diag = 0;

    while diag < rank {
        if !cmp.is_zero(m[(diag, diag)]) {
            let p = m[(diag, diag)];
            for row in (0..A).filter(|&row| row != diag) {
                let factor = m[(row, diag)] / p;
                for col in diag..rank {
                    let sub = factor * m[(diag, col)];
                    m[(row, col)] -= sub;
                }
            }
            diag += 1;
        } else if let Some(row) = (diag + 1..A).find(|&row| !cmp.is_zero(m[(row, diag)])) {
            m.swap_rows(diag, row);
        } else {
            rank -= 1;
            for row in 0..A {
                m[(row, diag)] = m[(row, rank)];
            }
        }
    }

    rank
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, Comparison, Mat2, Mat3, Mat4, Matrix};

    use super::*;

    fn example() -> Mat3<f64> {
        Matrix::from_rows([[1.0, 9.0, 1.0], [1.0, 1.0, -3.0], [0.0, 1.0, 1.0]])
    }

    #[test]
    fn determinant() {
        assert_eq!(example().determinant(), -4.0);
        assert_eq!(Mat3::<f64>::identity().determinant(), 1.0);
        assert_eq!(Matrix::from_rows([[7.5]]).determinant(), 7.5);
        assert_eq!(
            Matrix::from_rows([[0.0, 1.0], [1.0, 0.0]]).determinant(),
            -1.0
        );
        assert_eq!(
            Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]).determinant(),
            0.0
        );
        assert_eq!(Mat4::<f64>::zero().determinant(), 0.0);
    }

    #[test]
    fn determinant_matches_cofactor_expansion() {
        let m = example();
        let cofactor = m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)]);
        assert_approx_eq!(m.determinant(), cofactor);
    }

    #[test]
    fn inverse() {
        let m = example();
        let inv = m.inverted().unwrap();
        assert_approx_eq!(&inv * &m, *Mat3::identity()).abs(1e-12);
        assert_approx_eq!(&m * &inv, *Mat3::identity()).abs(1e-12);
    }

    #[test]
    fn inverse_needs_row_swap() {
        let m = Matrix::from_rows([[0.0, 2.0], [4.0, 0.0]]);
        assert_eq!(
            m.inverted().unwrap(),
            Matrix::from_rows([[0.0, 0.25], [0.5, 0.0]])
        );
    }

    #[test]
    fn singular() {
        let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        assert_eq!(m.inverted(), Err(LinalgError::SingularMatrix));
        assert_eq!(Mat2::<f32>::zero().inverted(), Err(LinalgError::SingularMatrix));
    }

    #[test]
    fn tolerant_pivots() {
        // The rows differ by less than the machine epsilon.
        let m = Matrix::from_rows([[1e-3, 1e-3], [1e-3, 1.0000000000001e-3]]);
        assert_eq!(m.rank(), 2);
        assert!(m.inverted().is_ok());

        let tolerant = Config::default().with_comparison(Comparison::Epsilon);
        assert_eq!(m.rank_with(&tolerant), 1);
        assert_eq!(m.determinant_with(&tolerant), 0.0);
        assert!(m.inverted_with(&tolerant).is_err());
    }

    #[test]
    fn rank() {
        assert_eq!(Mat4::<f64>::identity().rank(), 4);
        assert_eq!(Mat3::<f64>::zero().rank(), 0);
        assert_eq!(example().rank(), 3);
        assert_eq!(
            Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]).rank(),
            2
        );
    }

    #[test]
    fn rank_non_square() {
        let wide = Matrix::from_rows([[1.0, 2.0, 3.0, 4.0], [2.0, 4.0, 6.0, 8.0]]);
        assert_eq!(wide.rank(), 1);
        assert_eq!(wide.transposed().rank(), 1);

        let tall = Matrix::from_rows([[0.0, 1.0], [0.0, 2.0], [0.0, 3.0]]);
        assert_eq!(tall.rank(), 1);

        let full = Matrix::from_rows([[0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(full.rank(), 2);
    }
}
