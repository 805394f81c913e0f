use std::ops;

/// Types that support computing their square root.
///
/// This is what makes [`Vector::magnitude`][crate::Vector::magnitude] and normalization available.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types with a machine epsilon, used for tolerant comparisons.
///
/// Integer types use an epsilon of 0, so a tolerant comparison of integers degrades to an exact
/// one.
pub trait Epsilon: PartialOrd + Sized {
    /// The smallest meaningful difference between two values of this type.
    const EPSILON: Self;

    /// Returns `|self - other|`.
    fn abs_diff(self, other: Self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric field types that support basic arithmetic operations.
///
/// Every vector and matrix algorithm in this crate is written against this bound. `Default` is
/// expected to produce the same value as [`Zero::ZERO`].
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + PartialEq
    + Default
    + Copy
    + Send
    + Sync
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + ops::AddAssign
        + ops::SubAssign
        + ops::MulAssign
        + ops::DivAssign
        + PartialEq
        + Default
        + Copy
        + Send
        + Sync
{
}

/// Numeric types closed under exact division, ie. [fields].
///
/// The elimination algorithms ([`Matrix::determinant`], [`Matrix::inverted`], [`Matrix::rank`],
/// [`solve`] and [`perpendicular`]) divide by pivots, so they are only available for field types.
/// Integer division truncates, and integers do not implement this trait:
///
/// ```compile_fail
/// # use dense_linalg::*;
/// let m = Matrix::from_rows([[2i32, 1], [1, 1]]);
/// m.determinant();
/// ```
///
/// ```compile_fail
/// # use dense_linalg::*;
/// let m = Matrix::from_rows([[1i64, 0], [0, 1]]);
/// m.solve(&vec2(1, 2));
/// ```
///
/// [fields]: https://en.wikipedia.org/wiki/Field_(mathematics)
/// [`Matrix::determinant`]: crate::Matrix::determinant
/// [`Matrix::inverted`]: crate::Matrix::inverted
/// [`Matrix::rank`]: crate::Matrix::rank
/// [`solve`]: crate::solve()
/// [`perpendicular`]: crate::perpendicular
pub trait Field: Number + Epsilon {}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Epsilon for $types {
                const EPSILON: Self = 0;

                fn abs_diff(self, other: Self) -> Self {
                    // Saturates when the distance does not fit the signed type.
                    Self::try_from(<$types>::abs_diff(self, other)).unwrap_or(Self::MAX)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Epsilon for $types {
                const EPSILON: Self = $types::EPSILON;

                fn abs_diff(self, other: Self) -> Self {
                    (self - other).abs()
                }
            }

            impl Field for $types {}

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_abs_diff() {
        assert_eq!(Epsilon::abs_diff(3u8, 5), 2);
        assert_eq!(Epsilon::abs_diff(5u8, 3), 2);
        assert_eq!(Epsilon::abs_diff(-4i32, 4), 8);
        assert_eq!(<i64 as Epsilon>::EPSILON, 0);
    }

    #[test]
    fn int_abs_diff_saturates() {
        assert_eq!(Epsilon::abs_diff(i32::MIN, 1), i32::MAX);
        assert_eq!(Epsilon::abs_diff(i8::MAX, i8::MIN), i8::MAX);
        assert_eq!(Epsilon::abs_diff(u64::MAX, 0), u64::MAX);
        assert_eq!(Epsilon::abs_diff(-100i8, 27), 127);
    }

    #[test]
    fn float_abs_diff() {
        assert_eq!(Epsilon::abs_diff(1.5f32, -0.5), 2.0);
        assert_eq!(<f64 as Epsilon>::EPSILON, f64::EPSILON);
    }
}
