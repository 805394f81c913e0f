//! Linear equation systems.
//!
//! A system of `N` equations in `M` unknowns is given as an `N`x`M` coefficient [`Matrix`] `A` and
//! a [`Vector`] `b` of constant terms, and describes all `x` with `A * x = b`. [`solve`] brings
//! `[A | b]` into reduced row-echelon form and classifies the solution set.

use crate::{approx::ApproxEq, Config, Field, LinalgError, Matrix, Number, Result, Vector};

/// The shape of a solution set, as returned by [`Solution::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionKind {
    /// Exactly one solution.
    Determinate,
    /// Infinitely many solutions.
    Indeterminate,
    /// No solution.
    Contradictory,
}

/// The solution set of a linear equation system with `M` unknowns.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<T: Default, const M: usize> {
    /// The system has exactly one solution.
    Determinate(Vector<T, M>),

    /// The system has infinitely many solutions.
    ///
    /// Every solution is `constant` plus a linear combination of `directions`.
    Indeterminate {
        /// A particular solution, in which every free variable is 0.
        constant: Vector<T, M>,
        /// One direction per free variable. Each has a 1 at the position of its free variable and
        /// 0 at the positions of all other free variables.
        directions: Vec<Vector<T, M>>,
    },

    /// The system has no solution.
    Contradictory,
}

impl<T: Number, const M: usize> Solution<T, M> {
    pub fn kind(&self) -> SolutionKind {
        match self {
            Solution::Determinate(_) => SolutionKind::Determinate,
            Solution::Indeterminate { .. } => SolutionKind::Indeterminate,
            Solution::Contradictory => SolutionKind::Contradictory,
        }
    }

    /// Returns the unique solution, or the particular solution of an indeterminate system.
    ///
    /// Returns [`None`] if the system is contradictory.
    pub fn constant(&self) -> Option<&Vector<T, M>> {
        match self {
            Solution::Determinate(constant) | Solution::Indeterminate { constant, .. } => {
                Some(constant)
            }
            Solution::Contradictory => None,
        }
    }

    /// Returns the directions spanning the solution set.
    ///
    /// This is empty unless the system is indeterminate.
    pub fn directions(&self) -> &[Vector<T, M>] {
        match self {
            Solution::Indeterminate { directions, .. } => directions,
            Solution::Determinate(_) | Solution::Contradictory => &[],
        }
    }

    /// Returns the solution obtained by weighting each direction with the corresponding entry of
    /// `params` and adding them to the constant.
    ///
    /// Returns [`None`] if the system is contradictory.
    ///
    /// # Panics
    ///
    /// Panics if `params` does not contain exactly one value per direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// // x + y = 3
    /// let a = Matrix::from_rows([[1.0, 1.0]]);
    /// let solution = a.solve(&vec1(3.0));
    /// assert_eq!(solution.point(&[0.0]), Some(vec2(3.0, 0.0)));
    /// assert_eq!(solution.point(&[1.0]), Some(vec2(2.0, 1.0)));
    /// ```
    #[track_caller]
    pub fn point(&self, params: &[T]) -> Option<Vector<T, M>> {
        let directions = self.directions();
        assert_eq!(
            params.len(),
            directions.len(),
            "expected one parameter per solution direction"
        );

        let mut point = self.constant()?.clone();
        for (direction, &param) in directions.iter().zip(params) {
            point += direction * param;
        }
        Some(point)
    }

    /// Converts the solution into its constant and its directions.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ContradictorySystem`] if the system has no solution.
    pub fn into_result(self) -> Result<(Vector<T, M>, Vec<Vector<T, M>>)> {
        match self {
            Solution::Determinate(constant) => Ok((constant, Vec::new())),
            Solution::Indeterminate {
                constant,
                directions,
            } => Ok((constant, directions)),
            Solution::Contradictory => Err(LinalgError::ContradictorySystem),
        }
    }
}

impl<T: Default, const M: usize> Solution<T, M> {
    /// Returns whether both solutions have the same kind and `eq` holds for each pair of
    /// corresponding vectors.
    fn zip_vectors<F>(&self, other: &Self, mut eq: F) -> bool
    where
        F: FnMut(&Vector<T, M>, &Vector<T, M>) -> bool,
    {
        match (self, other) {
            (Solution::Determinate(a), Solution::Determinate(b)) => eq(a, b),
            (
                Solution::Indeterminate {
                    constant: a,
                    directions: da,
                },
                Solution::Indeterminate {
                    constant: b,
                    directions: db,
                },
            ) => da.len() == db.len() && eq(a, b) && da.iter().zip(db).all(|(a, b)| eq(a, b)),
            (Solution::Contradictory, Solution::Contradictory) => true,
            _ => false,
        }
    }
}

/// Solutions of different kinds are never approximately equal.
impl<T, const M: usize> ApproxEq for Solution<T, M>
where
    T: ApproxEq + Default,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.zip_vectors(other, |a, b| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.zip_vectors(other, |a, b| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.zip_vectors(other, |a, b| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

/// Solves `a * x = b` using exact comparisons.
///
/// # Examples
///
/// ```
/// # use dense_linalg::*;
/// let a = Matrix::from_rows([
///     [1.0, 1.0],
///     [2.0, 2.0],
/// ]);
/// let solution = solve(&a, &vec2(3.0, 6.0));
/// assert_eq!(solution.kind(), SolutionKind::Indeterminate);
/// assert_eq!(solution.constant(), Some(&vec2(3.0, 0.0)));
/// assert_eq!(solution.directions(), &[vec2(-1.0, 1.0)]);
/// ```
pub fn solve<T, const N: usize, const M: usize>(
    a: &Matrix<T, N, M>,
    b: &Vector<T, N>,
) -> Solution<T, M>
where
    T: Field,
{
    solve_with(a, b, &Config::default())
}

/// Solves `a * x = b`, testing values for zero according to `config.comparison`.
///
/// Columns are processed from left to right. A column with a non-zero entry in the rows that have
/// no pivot yet gets one: its row is moved up, normalized, and the column is eliminated from every
/// other row. Columns without such an entry belong to free variables.
pub fn solve_with<T, const N: usize, const M: usize>(
    a: &Matrix<T, N, M>,
    b: &Vector<T, N>,
    config: &Config,
) -> Solution<T, M>
where
    T: Field,
{
    let cmp = config.comparison;
    let mut a = a.clone();
    let mut b = b.clone();
    // `pivots[row]` is the column of the pivot in `row`.
    let mut pivots = Vec::with_capacity(N.min(M));

    for col in 0..M {
        let row = pivots.len();
        if row == N {
            break;
        }

        let Some(pivot) = (row..N).find(|&r| !cmp.is_zero(a[(r, col)])) else {
            log::trace!("no pivot in column {col}, variable is free");
            continue;
        };
        if pivot != row {
            a.swap_rows(pivot, row);
            b.as_mut_slice().swap(pivot, row);
        }

        let p = a[(row, col)];
        a.row_mut(row)[col..].iter_mut().for_each(|e| *e /= p);
        a[(row, col)] = T::ONE;
        b[row] /= p;

        for r in (0..N).filter(|&r| r != row) {
            let factor = a[(r, col)];
            if cmp.is_zero(factor) {
                continue;
            }
            for c in col..M {
                let sub = factor * a[(row, c)];
                a[(r, c)] -= sub;
            }
            let sub = factor * b[row];
            b[r] -= sub;
        }

        pivots.push(col);
    }

    let rank = pivots.len();

    // Rows without a pivot have only zero coefficients left.
    if let Some(row) = (rank..N).find(|&r| !cmp.is_zero(b[r])) {
        log::trace!("row {row} reduces to `0 = c` with non-zero `c`, system is contradictory");
        return Solution::Contradictory;
    }

    let mut constant = Vector::zero();
    for (row, &col) in pivots.iter().enumerate() {
        constant[col] = b[row];
    }

    if rank == M {
        log::trace!("{N}x{M} system is determinate");
        return Solution::Determinate(constant);
    }

    let directions: Vec<_> = (0..M)
        .filter(|col| !pivots.contains(col))
        .map(|free| {
            let mut direction = Vector::zero();
            direction[free] = T::ONE;
            for (row, &col) in pivots.iter().enumerate() {
                direction[col] = -a[(row, free)];
            }
            direction
        })
        .collect();
    log::trace!(
        "{N}x{M} system is indeterminate with {} free variable(s)",
        directions.len()
    );

    Solution::Indeterminate {
        constant,
        directions,
    }
}

impl<T: Field, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Solves the system `self * x = b`.
    ///
    /// See [`solve`].
    pub fn solve(&self, b: &Vector<T, N>) -> Solution<T, M> {
        solve(self, b)
    }

    /// Solves the system `self * x = b` with the given configuration.
    ///
    /// See [`solve_with`].
    pub fn solve_with(&self, b: &Vector<T, N>, config: &Config) -> Solution<T, M> {
        solve_with(self, b, config)
    }
}

/// Computes a vector perpendicular to all `K = D - 1` given `D`-dimensional vectors.
///
/// This generalizes the 2D perpendicular and the 3D cross product: the result spans the
/// solution set of the homogeneous system formed by the inputs. `K + 1 == D` is checked at
/// compile time.
///
/// # Errors
///
/// Returns [`LinalgError::LinearlyDependentVectors`] if the inputs are linearly dependent, in
/// which case there is no unique perpendicular direction.
///
/// # Examples
///
/// ```
/// # use dense_linalg::*;
/// let x = vec3(1.0, 0.0, 0.0);
/// let y = vec3(0.0, 1.0, 0.0);
/// assert_eq!(perpendicular(&[x.clone(), y])?, vec3(0.0, 0.0, 1.0));
///
/// let err = perpendicular(&[x.clone(), x * 2.0]);
/// assert_eq!(err, Err(LinalgError::LinearlyDependentVectors));
/// # Ok::<_, LinalgError>(())
/// ```
pub fn perpendicular<T, const K: usize, const D: usize>(
    vectors: &[Vector<T, D>; K],
) -> Result<Vector<T, D>>
where
    T: Field,
{
    perpendicular_with(vectors, &Config::default())
}

/// Computes a vector perpendicular to all `K = D - 1` given `D`-dimensional vectors, testing
/// values for zero according to `config.comparison`.
///
/// See [`perpendicular`].
pub fn perpendicular_with<T, const K: usize, const D: usize>(
    vectors: &[Vector<T, D>; K],
    config: &Config,
) -> Result<Vector<T, D>>
where
    T: Field,
{
    const { assert!(K + 1 == D, "perpendicular needs exactly D - 1 input vectors") };

    let a = Matrix::<T, K, D>::from_fn(|row, col| vectors[row][col]);
    match solve_with(&a, &Vector::zero(), config) {
        Solution::Indeterminate { mut directions, .. } if directions.len() == 1 => directions
            .pop()
            .ok_or(LinalgError::LinearlyDependentVectors),
        _ => Err(LinalgError::LinearlyDependentVectors),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_approx_eq, assert_approx_ne, vec2, vec3, vec4, Comparison, Mat2, Matrix, Vector,
    };

    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn approximate_solutions() {
        init();
        // x + 3y = 0.7, 2x + 6y = 1.4
        let a = Matrix::from_rows([[1.0, 3.0], [2.0, 6.0]]);
        let solution = a.solve(&vec2(0.7, 1.4));
        let expected = Solution::Indeterminate {
            constant: vec2(0.7, 0.0),
            directions: vec![vec2(-3.0, 1.0)],
        };
        assert_approx_eq!(solution, expected).abs(1e-12);
        assert_approx_ne!(solution, Solution::Determinate(vec2(0.7, 0.0))).abs(1.0);
        assert_approx_ne!(
            solution,
            Solution::Indeterminate {
                constant: vec2(0.7, 0.0),
                directions: vec![],
            }
        )
        .abs(1.0);
        assert_approx_eq!(Solution::<f64, 3>::Contradictory, Solution::Contradictory).ulps(0);
        assert_approx_ne!(Solution::Contradictory, Solution::Determinate(vec2(0.0, 0.0))).abs(1.0);
    }

    #[test]
    fn determinate() {
        init();
        let solution = solve(&Matrix::from_rows([[1.0, 0.0], [0.0, 1.0]]), &vec2(5.0, 7.0));
        assert_eq!(solution, Solution::Determinate(vec2(5.0, 7.0)));
        assert_eq!(solution.kind(), SolutionKind::Determinate);
        assert!(solution.directions().is_empty());
        assert_eq!(solution.point(&[]), Some(vec2(5.0, 7.0)));
    }

    #[test]
    fn determinate_with_swaps() {
        init();
        // 2y = 4, x + y = 5
        let a = Matrix::from_rows([[0.0, 2.0], [1.0, 1.0]]);
        let solution = a.solve(&vec2(4.0, 5.0));
        assert_eq!(solution, Solution::Determinate(vec2(3.0, 2.0)));
    }

    #[test]
    fn indeterminate() {
        init();
        let a = Matrix::from_rows([[1.0, 1.0], [2.0, 2.0]]);
        let solution = solve(&a, &vec2(3.0, 6.0));
        assert_eq!(solution.kind(), SolutionKind::Indeterminate);
        assert_eq!(solution.constant(), Some(&vec2(3.0, 0.0)));
        assert_eq!(solution.directions(), &[vec2(-1.0, 1.0)]);

        for t in [-2.0, 0.5, 10.0] {
            let x = solution.point(&[t]).unwrap();
            assert_eq!(&a * &x, vec2(3.0, 6.0));
        }
    }

    #[test]
    fn contradictory() {
        init();
        let solution = solve(&Mat2::<f64>::zero(), &vec2(1.0, 0.0));
        assert_eq!(solution, Solution::Contradictory);
        assert_eq!(solution.kind(), SolutionKind::Contradictory);
        assert_eq!(solution.constant(), None);
        assert_eq!(solution.point(&[]), None);
        assert_eq!(
            solution.into_result(),
            Err(LinalgError::ContradictorySystem)
        );

        // x + y = 1, x + y = 2
        let a = Matrix::from_rows([[1.0, 1.0], [1.0, 1.0]]);
        assert_eq!(a.solve(&vec2(1.0, 2.0)), Solution::Contradictory);
    }

    #[test]
    fn free_column_in_the_middle() {
        init();
        // x + 2y + z = 4, z = 1
        let a = Matrix::from_rows([[1.0, 2.0, 1.0], [0.0, 0.0, 1.0]]);
        let solution = a.solve(&vec2(4.0, 1.0));
        let (constant, directions) = solution.into_result().unwrap();
        assert_eq!(constant, vec3(3.0, 0.0, 1.0));
        assert_eq!(directions, vec![vec3(-2.0, 1.0, 0.0)]);
    }

    #[test]
    fn overdetermined() {
        init();
        // Three consistent equations in two unknowns.
        let a = Matrix::from_rows([[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
        assert_eq!(
            a.solve(&vec3(1.0, 2.0, 3.0)),
            Solution::Determinate(vec2(1.0, 2.0))
        );
        assert_eq!(a.solve(&vec3(1.0, 2.0, 4.0)), Solution::Contradictory);
    }

    #[test]
    fn tolerant_classification() {
        init();
        // The rows differ by less than the machine epsilon.
        let a = Matrix::from_rows([[1e-3, 1e-3], [1e-3, 1.0000000000001e-3]]);
        let b = vec2(1e-3, 1e-3);
        assert_eq!(a.solve(&b).kind(), SolutionKind::Determinate);

        let tolerant = Config::default().with_comparison(Comparison::Epsilon);
        let solution = a.solve_with(&b, &tolerant);
        assert_eq!(solution.kind(), SolutionKind::Indeterminate);
        assert_eq!(solution.constant(), Some(&vec2(1.0, 0.0)));
    }

    #[test]
    fn perpendicular_vectors() {
        init();
        let v = vec2(1.0, 2.0);
        let p = perpendicular(&[v.clone()]).unwrap();
        assert_eq!(v.dot(&p), 0.0);

        let a = vec3(1.0, 2.0, 0.0);
        let b = vec3(0.0, 1.0, 1.0);
        let p = perpendicular(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(p, a.cross_rh(&b));
        assert_eq!(a.dot(&p), 0.0);
        assert_eq!(b.dot(&p), 0.0);

        let vs = [
            vec4(1.0, 0.0, 0.0, 1.0),
            vec4(0.0, 1.0, 0.0, 1.0),
            vec4(0.0, 0.0, 1.0, 1.0),
        ];
        let p = perpendicular(&vs).unwrap();
        assert_eq!(p, vec4(-1.0, -1.0, -1.0, 1.0));
    }

    #[test]
    fn perpendicular_dependent() {
        init();
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(
            perpendicular(&[v.clone(), &v * -3.0]),
            Err(LinalgError::LinearlyDependentVectors)
        );
        assert_eq!(
            perpendicular(&[Vector::<f64, 2>::zero()]),
            Err(LinalgError::LinearlyDependentVectors)
        );
    }
}
