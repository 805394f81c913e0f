//! Implementations of `std::ops`.
//!
//! Every binary operator is implemented for owned operands and for references. Owned left-hand
//! operands are updated in place and returned, references are cloned first.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, Number};

use super::Vector;

impl<T: Default, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        &self.buf[index]
    }
}

impl<T: Default, const D: usize> IndexMut<usize> for Vector<T, D> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buf[index]
    }
}

// More general impl than what the derive would generate.
impl<T, U, const D: usize> PartialEq<Vector<U, D>> for Vector<T, D>
where
    T: PartialEq<U> + Default,
    U: Default,
{
    fn eq(&self, other: &Vector<U, D>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq + Default, const D: usize> Eq for Vector<T, D> {}

impl<T, U, const D: usize> PartialEq<[U; D]> for Vector<T, D>
where
    T: PartialEq<U> + Default,
{
    fn eq(&self, other: &[U; D]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const D: usize> PartialEq<[U]> for Vector<T, D>
where
    T: PartialEq<U> + Default,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, const D: usize> ApproxEq for Vector<T, D>
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
impl<T: Number, const D: usize> Neg for Vector<T, D> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.iter_mut().for_each(|elem| *elem = -*elem);
        self
    }
}

/// Element-wise negation.
impl<T: Number, const D: usize> Neg for &Vector<T, D> {
    type Output = Vector<T, D>;

    fn neg(self) -> Vector<T, D> {
        -self.clone()
    }
}

macro_rules! elementwise {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident, $sym:tt;)+) => {
        $(
            impl<T: Number, const D: usize> $assign<&Vector<T, D>> for Vector<T, D> {
                fn $assign_method(&mut self, rhs: &Vector<T, D>) {
                    self.iter_mut()
                        .zip(rhs.iter())
                        .for_each(|(lhs, &rhs)| *lhs $sym rhs);
                }
            }

            impl<T: Number, const D: usize> $assign<Vector<T, D>> for Vector<T, D> {
                #[inline]
                fn $assign_method(&mut self, rhs: Vector<T, D>) {
                    self.$assign_method(&rhs);
                }
            }

            impl<T: Number, const D: usize> $op<&Vector<T, D>> for Vector<T, D> {
                type Output = Vector<T, D>;

                fn $method(mut self, rhs: &Vector<T, D>) -> Vector<T, D> {
                    self.$assign_method(rhs);
                    self
                }
            }

            impl<T: Number, const D: usize> $op<Vector<T, D>> for Vector<T, D> {
                type Output = Vector<T, D>;

                #[inline]
                fn $method(self, rhs: Vector<T, D>) -> Vector<T, D> {
                    self.$method(&rhs)
                }
            }

            impl<T: Number, const D: usize> $op<&Vector<T, D>> for &Vector<T, D> {
                type Output = Vector<T, D>;

                #[inline]
                fn $method(self, rhs: &Vector<T, D>) -> Vector<T, D> {
                    self.clone().$method(rhs)
                }
            }

            impl<T: Number, const D: usize> $op<Vector<T, D>> for &Vector<T, D> {
                type Output = Vector<T, D>;

                #[inline]
                fn $method(self, rhs: Vector<T, D>) -> Vector<T, D> {
                    self.clone().$method(&rhs)
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
            impl<T: Number, const D: usize> $assign<T> for Vector<T, D> {
                fn $assign_method(&mut self, rhs: T) {
                    self.iter_mut().for_each(|lhs| *lhs $sym rhs);
                }
            }

            impl<T: Number, const D: usize> $op<T> for Vector<T, D> {
                type Output = Vector<T, D>;

                fn $method(mut self, rhs: T) -> Vector<T, D> {
                    self.$assign_method(rhs);
                    self
                }
            }

            impl<T: Number, const D: usize> $op<T> for &Vector<T, D> {
                type Output = Vector<T, D>;

                #[inline]
                fn $method(self, rhs: T) -> Vector<T, D> {
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

// NB: with scalar multiplication taking `Mul<T>`, `Vector * Vector` is free to mean the dot product
// (an element-wise product would be ambiguous with it).

/// Dot product.
impl<T: Number, const D: usize> Mul<&Vector<T, D>> for &Vector<T, D> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: &Vector<T, D>) -> T {
        self.dot(rhs)
    }
}

/// Dot product.
impl<T: Number, const D: usize> Mul<Vector<T, D>> for Vector<T, D> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: Vector<T, D>) -> T {
        self.dot(&rhs)
    }
}

// Coherence rules out a blanket `impl<T> Mul<Vector<T, D>> for T`, so scalar-on-the-left is
// provided for the primitive types only.
macro_rules! left_scalar {
    ($($scalar:ty),+) => {
        $(
            /// Scalar-Vector multiplication (scaling).
            impl<const D: usize> Mul<Vector<$scalar, D>> for $scalar {
                type Output = Vector<$scalar, D>;

                #[inline]
                fn mul(self, rhs: Vector<$scalar, D>) -> Vector<$scalar, D> {
                    rhs * self
                }
            }

            /// Scalar-Vector multiplication (scaling).
            impl<const D: usize> Mul<&Vector<$scalar, D>> for $scalar {
                type Output = Vector<$scalar, D>;

                #[inline]
                fn mul(self, rhs: &Vector<$scalar, D>) -> Vector<$scalar, D> {
                    rhs * self
                }
            }
        )+
    };
}
left_scalar!(f32, f64, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vector};

    #[test]
    fn arithmetic() {
        let a = vec3(1, 2, 3);
        let b = vec3(10, 20, 30);
        assert_eq!(&a + &b, vec3(11, 22, 33));
        assert_eq!(&b - &a, vec3(9, 18, 27));
        assert_eq!(a.clone() + b.clone(), vec3(11, 22, 33));
        assert_eq!(-&a, vec3(-1, -2, -3));

        let mut c = a.clone();
        c += &b;
        c -= vec3(1, 1, 1);
        assert_eq!(c, vec3(10, 21, 32));
    }

    #[test]
    fn scalar() {
        let v = vec2(2.0, -4.0);
        assert_eq!(&v * 2.0, vec2(4.0, -8.0));
        assert_eq!(2.0 * &v, vec2(4.0, -8.0));
        assert_eq!(&v / 2.0, vec2(1.0, -2.0));
        assert_eq!(3i32 * vec2(1, 2), vec2(3, 6));

        let mut w = v.clone();
        w *= 0.5;
        w /= -1.0;
        assert_eq!(w, vec2(-1.0, 2.0));
    }

    #[test]
    fn dot_operator() {
        assert_eq!(vec3(1, 2, 3) * vec3(4, 5, 6), 32);
        assert_eq!(&vec2(1.5, 0.0) * &vec2(2.0, 9.0), 3.0);
    }

    #[test]
    fn heap_arithmetic() {
        let a = Vector::<i64, 32>::from_fn(|i| i as i64);
        let b = Vector::<i64, 32>::splat(1);
        let sum = &a + &b;
        assert!(!sum.is_inline());
        assert_eq!(sum[31], 32);
        assert_eq!(a * b, (0..32).sum::<i64>());
    }
}
