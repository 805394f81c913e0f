//! Implementations of `std::ops`, and the multiplication kernel shared with chain evaluation.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, storage::Buffer, Number, Parallelism, Vector};

use super::Matrix;

impl<T: Default, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < R && col < C,
            "index ({row}, {col}) out of bounds for {R}x{C} matrix"
        );
        &self.buf[row * C + col]
    }
}

impl<T: Default, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < R && col < C,
            "index ({row}, {col}) out of bounds for {R}x{C} matrix"
        );
        &mut self.buf[row * C + col]
    }
}

impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U> + Default,
    U: Default,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq + Default, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq + Default,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.as_slice().ulps_diff_eq(other.as_slice(), ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T: Number, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.buf.iter_mut().for_each(|elem| *elem = -*elem);
        self
    }
}

/// Element-wise negation.
impl<T: Number, const R: usize, const C: usize> Neg for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        -self.clone()
    }
}

macro_rules! elementwise {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident, $sym:tt;)+) => {
        $(
            impl<T: Number, const R: usize, const C: usize> $assign<&Matrix<T, R, C>> for Matrix<T, R, C> {
                fn $assign_method(&mut self, rhs: &Matrix<T, R, C>) {
                    self.buf
                        .iter_mut()
                        .zip(rhs.iter())
                        .for_each(|(lhs, &rhs)| *lhs $sym rhs);
                }
            }

            impl<T: Number, const R: usize, const C: usize> $assign<Matrix<T, R, C>> for Matrix<T, R, C> {
                #[inline]
                fn $assign_method(&mut self, rhs: Matrix<T, R, C>) {
                    self.$assign_method(&rhs);
                }
            }

            impl<T: Number, const R: usize, const C: usize> $op<&Matrix<T, R, C>> for Matrix<T, R, C> {
                type Output = Matrix<T, R, C>;

                fn $method(mut self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                    self.$assign_method(rhs);
                    self
                }
            }

            impl<T: Number, const R: usize, const C: usize> $op<Matrix<T, R, C>> for Matrix<T, R, C> {
                type Output = Matrix<T, R, C>;

                #[inline]
                fn $method(self, rhs: Matrix<T, R, C>) -> Matrix<T, R, C> {
                    self.$method(&rhs)
                }
            }

            impl<T: Number, const R: usize, const C: usize> $op<&Matrix<T, R, C>> for &Matrix<T, R, C> {
                type Output = Matrix<T, R, C>;

                #[inline]
                fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                    self.clone().$method(rhs)
                }
            }
        )+
    };
}
elementwise! {
    Add::add, AddAssign::add_assign, +=;
    Sub::sub, SubAssign::sub_assign, -=;
}

macro_rules! scalar {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident, $sym:tt;)+) => {
        $(
            impl<T: Number, const R: usize, const C: usize> $assign<T> for Matrix<T, R, C> {
                fn $assign_method(&mut self, rhs: T) {
                    self.buf.iter_mut().for_each(|lhs| *lhs $sym rhs);
                }
            }

            impl<T: Number, const R: usize, const C: usize> $op<T> for Matrix<T, R, C> {
                type Output = Matrix<T, R, C>;

                fn $method(mut self, rhs: T) -> Matrix<T, R, C> {
                    self.$assign_method(rhs);
                    self
                }
            }

            impl<T: Number, const R: usize, const C: usize> $op<T> for &Matrix<T, R, C> {
                type Output = Matrix<T, R, C>;

                #[inline]
                fn $method(self, rhs: T) -> Matrix<T, R, C> {
                    self.clone().$method(rhs)
                }
            }
        )+
    };
}
scalar! {
    Mul::mul, MulAssign::mul_assign, *=;
    Div::div, DivAssign::div_assign, /=;
}

/// Computes the row-major product of an `out.len() / cols` x `inner` matrix and an `inner` x
/// `cols` matrix into `out`.
///
/// With the `parallel` feature enabled and `parallelism` applying to the output size, rows are
/// computed on the rayon thread pool. Each row is only ever written by one task.
pub(crate) fn multiply_into<T: Number>(
    out: &mut [T],
    lhs: &[T],
    rhs: &[T],
    inner: usize,
    cols: usize,
    parallelism: Parallelism,
) {
    debug_assert_eq!(lhs.len() * cols, out.len() * inner);
    debug_assert_eq!(rhs.len(), inner * cols);

    let fill_row = |(row, dest): (usize, &mut [T])| {
        let lhs_row = &lhs[row * inner..][..inner];
        for (col, dest) in dest.iter_mut().enumerate() {
            *dest = lhs_row
                .iter()
                .enumerate()
                .fold(T::ZERO, |acc, (k, &l)| acc + l * rhs[k * cols + col]);
        }
    };

    #[cfg(feature = "parallel")]
    if parallelism.applies_to(out.len()) {
        use rayon::{
            iter::{IndexedParallelIterator, ParallelIterator},
            slice::ParallelSliceMut,
        };

        log::trace!("multiplying {}x{cols} output in parallel", out.len() / cols);
        out.par_chunks_mut(cols).enumerate().for_each(fill_row);
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallelism;

    out.chunks_mut(cols).enumerate().for_each(fill_row);
}

impl<T: Number, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Multiplies `self` with `rhs`, parallelizing according to `parallelism`.
    ///
    /// The `*` operator is equivalent to calling this with [`Parallelism::Sequential`].
    pub fn mul_with<const P: usize>(
        &self,
        rhs: &Matrix<T, N, P>,
        parallelism: Parallelism,
    ) -> Matrix<T, M, P> {
        let mut out = Buffer::zeroed(M * P);
        multiply_into(
            out.as_mut_slice(),
            self.as_slice(),
            rhs.as_slice(),
            N,
            P,
            parallelism,
        );
        Matrix::from_buffer(out)
    }
}

/// Matrix * Matrix.
impl<T: Number, const M: usize, const N: usize, const P: usize> Mul<&Matrix<T, N, P>>
    for &Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: &Matrix<T, N, P>) -> Self::Output {
        self.mul_with(rhs, Parallelism::Sequential)
    }
}

/// Matrix * Matrix.
impl<T: Number, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    #[inline]
    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        &self * &rhs
    }
}

/// Matrix * Matrix, for a square right-hand side that keeps the shape of `self`.
impl<T: Number, const M: usize, const N: usize> MulAssign<&Matrix<T, N, N>> for Matrix<T, M, N> {
    fn mul_assign(&mut self, rhs: &Matrix<T, N, N>) {
        *self = &*self * rhs;
    }
}

impl<T: Number, const M: usize, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, M, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self *= &rhs;
    }
}

/// Matrix * Column Vector.
impl<T: Number, const R: usize, const C: usize> Mul<&Vector<T, C>> for &Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: &Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| {
            self.row(row)
                .iter()
                .zip(rhs.iter())
                .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
        })
    }
}

/// Matrix * Column Vector.
impl<T: Number, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        &self * &rhs
    }
}

macro_rules! left_scalar {
    ($($scalar:ty),+) => {
        $(
            /// Scalar-Matrix multiplication (scaling).
            impl<const R: usize, const C: usize> Mul<Matrix<$scalar, R, C>> for $scalar {
                type Output = Matrix<$scalar, R, C>;

                #[inline]
                fn mul(self, rhs: Matrix<$scalar, R, C>) -> Matrix<$scalar, R, C> {
                    rhs * self
                }
            }
        )+
    };
}
left_scalar!(f32, f64, i8, i16, i32, i64, i128, isize);
