use std::{fmt, slice};

use itertools::{EitherOrBoth, Itertools};

use crate::{
    storage::{self, Buffer},
    Comparison, Epsilon, Number, Vector, Zero,
};

mod ops;
mod reduce;

pub(crate) use ops::multiply_into;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// Elements are stored in a [`Buffer`], so matrices of up to 16 elements (4x4) are stored inline
/// and larger ones on the heap. Cloning always copies the elements. `R` and `C` must both be at
/// least 1.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix with raw elements or from an
///   array of row or column vectors.
/// - [`Matrix::from_partial_rows`] accepts rows of any length and zero-fills what's missing.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - For square matrices, [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and
///   zero outside of it, and [`Matrix::identity`] returns a shared identity matrix.
/// - [`Matrix::zero`] (and [`Default`]) creates an all-zero matrix.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use dense_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use dense_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// # Structural Operations
///
/// [`Matrix::determinant`], [`Matrix::inverted`] and [`Matrix::rank`] are computed by Gaussian
/// elimination. Each has a `_with` variant taking a [`Config`][crate::Config], which decides
/// whether a pivot "is zero" exactly or within the machine epsilon. Elimination divides by pivots,
/// so these operations are meant for floating-point element types; integer division truncates.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone)]
pub struct Matrix<T: Default, const R: usize, const C: usize> {
    buf: Buffer<T>,
}

impl<T: Default, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Wraps a row-major buffer of exactly `R * C` elements.
    pub(crate) fn from_buffer(buf: Buffer<T>) -> Self {
        const { assert!(R >= 1 && C >= 1, "matrices must have at least 1 row and 1 column") };
        debug_assert_eq!(buf.len(), R * C);
        Self { buf }
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::from_buffer(Buffer::from_fn(R * C, |i| cb(i / C, i % C)))
    }

    /// Creates a matrix with each element set to `elem`.
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self::from_buffer(Buffer::filled(R * C, elem))
    }

    /// Creates a matrix with every element set to [`Zero::ZERO`].
    pub fn zero() -> Self
    where
        T: Zero + Copy,
    {
        Self::from_buffer(Buffer::zeroed(R * C))
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        let rows: [Vector<T, C>; R] = rows.map(Into::into);
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        let columns: [Vector<T, R>; C] = columns.map(Into::into);
        Self::from_fn(|row, col| columns[col][row])
    }

    /// Creates a [`Matrix`] from a list of rows of arbitrary length.
    ///
    /// Missing rows and elements are set to zero, excess ones are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Mat3::from_partial_rows(&[&[1, 2], &[3]]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 0, 0],
    ///     [0, 0, 0],
    /// ]));
    /// ```
    pub fn from_partial_rows(rows: &[&[T]]) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_fn(|row, col| {
            rows.get(row)
                .and_then(|r| r.get(col))
                .copied()
                .unwrap_or(T::ZERO)
        })
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.map(|i| i * 2), Matrix::from_rows([
    ///     [0, 2, 4],
    ///     [6, 8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(&self, mut f: F) -> Matrix<U, R, C>
    where
        T: Copy,
        U: Default,
        F: FnMut(T) -> U,
    {
        Matrix::from_buffer(Buffer::from_fn(R * C, |i| f(self.buf[i])))
    }

    /// Returns the number of rows, `R`.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns, `C`.
    #[inline]
    pub const fn columns(&self) -> usize {
        C
    }

    /// Returns the elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Returns a pointer to the first element of the row-major data.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns whether the elements are stored inline rather than on the heap.
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.buf.is_inline()
    }

    /// Returns an iterator over the elements in row-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// assert_eq!(mat.get(0, 3), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < R && col < C {
            Some(&self.buf[row * C + col])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < R && col < C {
            Some(&mut self.buf[row * C + col])
        } else {
            None
        }
    }

    /// Returns the elements of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[track_caller]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < R, "row index {row} out of bounds for matrix with {R} rows");
        &self.as_slice()[row * C..][..C]
    }

    /// Returns the elements of row `row` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[track_caller]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < R, "row index {row} out of bounds for matrix with {R} rows");
        &mut self.as_mut_slice()[row * C..][..C]
    }

    /// Copies column `col` into a vector.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.column(1), vec2(1, 3));
    /// ```
    #[track_caller]
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        assert!(col < C, "column index {col} out of bounds for matrix with {C} columns");
        Vector::from_fn(|row| self.buf[row * C + col])
    }

    /// Exchanges rows `a` and `b`.
    #[track_caller]
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(a < R && b < R, "row index out of bounds for matrix with {R} rows");
        for col in 0..C {
            self.buf.swap(a * C + col, b * C + col);
        }
    }

    /// Exchanges columns `a` and `b`.
    #[track_caller]
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        assert!(a < C && b < C, "column index out of bounds for matrix with {C} columns");
        for row in 0..R {
            self.buf.swap(row * C + a, row * C + b);
        }
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transposed();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transposed(&self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` will be initialized with [`T::ZERO`][`Zero::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(&self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| self.get(row, col).copied().unwrap_or(T::ZERO))
    }

    /// Converts the element type via [`From`].
    pub fn convert<U>(&self) -> Matrix<U, R, C>
    where
        T: Copy,
        U: From<T> + Default,
    {
        self.map(U::from)
    }

    /// Converts the element type and the size at once.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_rows([[1i32, 2], [3, 4]]);
    /// let big: Mat3<f64> = mat.convert_resize();
    /// assert_eq!(big.row(1), &[3.0, 4.0, 0.0]);
    /// ```
    pub fn convert_resize<U, const R2: usize, const C2: usize>(&self) -> Matrix<U, R2, C2>
    where
        T: Copy,
        U: From<T> + Zero + Default + Copy,
    {
        Matrix::from_fn(|row, col| self.get(row, col).map_or(U::ZERO, |&e| U::from(e)))
    }

    /// Adds a matrix of a different shape to `self`.
    ///
    /// The result has `max(R, R2)` rows and `max(C, C2)` columns, which is checked at compile
    /// time. Positions covered by both matrices are added. Positions covered by only one of them
    /// are copied from it, and positions covered by neither are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let a = Matrix::from_rows([[1, 2, 3]]);
    /// let b = Matrix::from_rows([[10], [20]]);
    /// let sum: Mat2x3<i32> = a.add_padded(&b);
    /// assert_eq!(sum, Matrix::from_rows([
    ///     [11, 2, 3],
    ///     [20, 0, 0],
    /// ]));
    /// ```
    pub fn add_padded<const R2: usize, const C2: usize, const RR: usize, const CR: usize>(
        &self,
        other: &Matrix<T, R2, C2>,
    ) -> Matrix<T, RR, CR>
    where
        T: Number,
    {
        padded_op(self, other, |a, b| a + b)
    }

    /// Subtracts a matrix of a different shape from `self`.
    ///
    /// Like [`Matrix::add_padded`], positions covered by only one operand are copied unchanged
    /// (*not* negated when they come from `other`).
    pub fn sub_padded<const R2: usize, const C2: usize, const RR: usize, const CR: usize>(
        &self,
        other: &Matrix<T, R2, C2>,
    ) -> Matrix<T, RR, CR>
    where
        T: Number,
    {
        padded_op(self, other, |a, b| a - b)
    }

    /// Compares `self` and `other` element-wise using the given policy.
    pub fn eq_with(&self, other: &Self, comparison: Comparison) -> bool
    where
        T: Epsilon + Copy,
    {
        self.iter()
            .zip(other.iter())
            .all(|(&a, &b)| comparison.equal(a, b))
    }
}

#[rustfmt::skip]
fn padded_op<
    T, F,
    const R: usize, const C: usize,
    const R2: usize, const C2: usize,
    const RR: usize, const CR: usize,
>(
    lhs: &Matrix<T, R, C>,
    rhs: &Matrix<T, R2, C2>,
    mut op: F,
) -> Matrix<T, RR, CR>
where
    T: Number,
    F: FnMut(T, T) -> T,
{
    const {
        assert!(
            RR == if R > R2 { R } else { R2 } && CR == if C > C2 { C } else { C2 },
            "padded matrix arithmetic must produce the larger shape"
        )
    };

    let mut out = Matrix::<T, RR, CR>::zero();
    for row in 0..RR {
        let cells = lhs
            .get_row(row)
            .iter()
            .zip_longest(rhs.get_row(row))
            .map(|pair| match pair {
                EitherOrBoth::Both(&a, &b) => op(a, b),
                EitherOrBoth::Left(&e) | EitherOrBoth::Right(&e) => e,
            });
        for (dest, value) in out.row_mut(row).iter_mut().zip(cells) {
            *dest = value;
        }
    }
    out
}

impl<T: Default, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns row `row`, or an empty slice past the last row.
    fn get_row(&self, row: usize) -> &[T] {
        if row < R {
            self.row(row)
        } else {
            &[]
        }
    }
}

impl<T: Default, const N: usize> Matrix<T, N, N> {
    /// Returns a shared identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. There is one instance per
    /// element type and size, created on first use; use [`Clone::clone`] to obtain an owned copy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let id = Mat2::<i32>::identity();
    /// assert_eq!(*id, Matrix::from_rows([[1, 0], [0, 1]]));
    /// assert!(std::ptr::eq(id, Mat2::<i32>::identity()));
    /// ```
    pub fn identity() -> &'static Self
    where
        T: Number + 'static,
    {
        storage::shared("matrix-identity", Self::new_identity)
    }

    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    /// assert_eq!(Mat3d::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Zero + Default + Copy,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Default + fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem:?}")?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self.row(row)));
        }
        list.finish()
    }
}

/// Prints one row per line, with elements separated by commas.
impl<T: Default + fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..R {
            if row != 0 {
                writeln!(f)?;
            }
            for (col, elem) in self.row(row).iter().enumerate() {
                if col != 0 {
                    f.write_str(", ")?;
                }
                elem.fmt(f)?;
            }
        }
        Ok(())
    }
}

impl<T: Default, const R: usize, const C: usize> AsRef<[T]> for Matrix<T, R, C> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::from_rows([[0, 1], [2, 3]]),
            Matrix::from_columns([[0, 2], [1, 3]]),
        );
        assert_eq!(
            Matrix::from_rows([vec2(0, 1), vec2(2, 3)]).as_slice(),
            &[0, 1, 2, 3],
        );
    }

    #[test]
    fn access() {
        let mut mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.columns(), 3);
        assert_eq!(mat[(1, 2)], 6);
        assert_eq!(mat.row(1), &[4, 5, 6]);
        assert_eq!(mat.column(0), vec2(1, 4));

        mat.row_mut(0)[1] = 20;
        *mat.get_mut(1, 1).unwrap() = 50;
        assert_eq!(mat, Matrix::from_rows([[1, 20, 3], [4, 50, 6]]));
        assert!(mat.get_mut(2, 0).is_none());
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mat = Mat2::<f64>::zero();
        let _ = mat[(0, 2)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn row_out_of_bounds() {
        Mat2::<f64>::zero().row(2);
    }

    #[test]
    fn swap() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        mat.swap_rows(0, 1);
        assert_eq!(mat, Matrix::from_rows([[3, 4], [1, 2]]));
        mat.swap_columns(0, 1);
        assert_eq!(mat, Matrix::from_rows([[4, 3], [2, 1]]));
    }

    #[test]
    fn storage() {
        assert!(Mat4::<f32>::zero().is_inline());
        let big = Matrix::<f32, 5, 5>::from_fn(|r, c| (r * 5 + c) as f32);
        assert!(!big.is_inline());
        assert_eq!(big.clone(), big);
    }

    #[test]
    fn identity() {
        let id = Mat3::<f64>::identity();
        assert_eq!(*id, Matrix::from_diagonal([1.0, 1.0, 1.0]));
        assert!(std::ptr::eq(id, Mat3::<f64>::identity()));
        assert_eq!(Matrix::<i32, 6, 6>::identity().trace(), 6);
    }

    #[test]
    fn resize() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat.resize::<1, 3>(), Matrix::from_rows([[1, 2, 0]]));
        assert_eq!(
            mat.resize::<3, 1>(),
            Matrix::from_rows([[1], [3], [0]])
        );
        assert_eq!(mat.convert::<f64>()[(1, 0)], 3.0);
    }

    #[test]
    fn padded() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[10, 20, 30]]);
        let sum: Mat2x3<i32> = a.add_padded(&b);
        assert_eq!(sum, Matrix::from_rows([[11, 22, 30], [3, 4, 0]]));
        let diff: Mat2x3<i32> = a.sub_padded(&b);
        assert_eq!(diff, Matrix::from_rows([[-9, -18, 30], [3, 4, 0]]));
    }

    #[test]
    fn same_elements_different_shapes() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[1, 2, 3, 4]]);
        assert_eq!(a.as_slice(), b.as_slice());
        assert_ne!((a.rows(), a.columns()), (b.rows(), b.columns()));
    }

    #[test]
    fn eq_infers_shape() {
        let a = Matrix::from_fn(|r, c| (r + c) as f64);
        assert_eq!(a, Matrix::from_rows([[0.0, 1.0], [1.0, 2.0]]));
        assert_eq!(Matrix::from_rows([[1, 2]]), Matrix::from_fn(|_, c| c as i32 + 1));
    }

    #[test]
    fn eq_with() {
        let a = Matrix::from_rows([[0.1 + 0.2]]);
        let b = Matrix::from_rows([[0.3]]);
        assert!(a != b);
        assert!(a.eq_with(&b, Comparison::Epsilon));
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(mat.trace(), 15);
        assert_eq!(mat.into_diagonal(), vec3(1, 5, 9));
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(format!("{mat:?}"), "[[1, 2], [3, 4]]");
        assert_eq!(format!("{mat}"), "1, 2\n3, 4");
    }
}
