//! Approximate equality, for tests and doctests.
//!
//! Elimination algorithms accumulate rounding errors, so results like `A⁻¹ * A` are rarely
//! *exactly* the identity. [`assert_approx_eq!`] compares such results with a tolerance that is
//! picked at the assertion site:
//!
//! ```
//! # use dense_linalg::*;
//! let m = Matrix::from_rows([
//!     [4.0, 7.0],
//!     [2.0, 6.0],
//! ]);
//! let inv = m.inverted()?;
//! assert_approx_eq!(&inv * &m, *Mat2::identity()).abs(1e-12);
//! # Ok::<_, LinalgError>(())
//! ```
//!
//! This is separate from [`Comparison::Epsilon`], which is the fixed policy the algorithms
//! themselves use to decide whether a pivot is zero.
//!
//! [`Comparison::Epsilon`]: crate::Comparison::Epsilon

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for approximate equality.
///
/// [`Vector`]s, [`Matrix`]es, slices and arrays compare equal if all of their elements do.
///
/// [`Vector`]: crate::Vector
/// [`Matrix`]: crate::Matrix
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The tolerance type of absolute and relative comparisons, usually [`f32`] or [`f64`].
    type Tolerance: DefaultTolerances + Copy;

    /// Returns whether `|self - other| <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns whether `|self - other| <= max(|self|, |other|) * rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns whether at most `ulps_tolerance` representable values lie between `self` and
    /// `other` (counting [*units in the last place*]).
    ///
    /// `NaN` is never equal to anything. `-0.0` and `+0.0` are equal, other values with differing
    /// signs never are.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances of the approximate assertion macros.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

macro_rules! default_tolerances {
    ($($t:ty),+) => {
        $(
            impl DefaultTolerances for $t {
                const DEFAULT_ABS_TOLERANCE: Self = <$t>::EPSILON;
                const DEFAULT_REL_TOLERANCE: Self = <$t>::EPSILON;
                const DEFAULT_ULPS_TOLERANCE: u32 = 4;
            }
        )+
    };
}
default_tolerances!(f32, f64);

/// Guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Before that, [`Asserter::abs`],
/// [`Asserter::rel`] and [`Asserter::ulps`] select the comparisons to perform; the values are
/// equal if *any* selected comparison says so. Without any selection, an absolute and a relative
/// comparison with the [`DefaultTolerances`] are performed.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the absolute difference of the values against `abs`.
    ///
    /// Works well for values close to zero, like the off-diagonal entries of a product that
    /// should be the identity matrix.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the absolute difference of the values against `rel` times the larger magnitude.
    ///
    /// Any non-zero value needs a tolerance of at least 1.0 to compare equal to 0.0.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Counts the representable values between the two values.
    ///
    /// Values of opposite sign are never equal, no matter how close to zero they are.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&self) -> bool {
        let (abs, rel) = match (self.abs, self.rel, self.ulps) {
            (None, None, None) => (
                Some(T::Tolerance::DEFAULT_ABS_TOLERANCE),
                Some(T::Tolerance::DEFAULT_REL_TOLERANCE),
            ),
            (abs, rel, _) => (abs, rel),
        };

        abs.is_some_and(|abs| self.left.abs_diff_eq(self.right, abs))
            || rel.is_some_and(|rel| self.left.rel_diff_eq(self.right, rel))
            || self
                .ulps
                .is_some_and(|ulps| self.left.ulps_diff_eq(self.right, ulps))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, so the location is captured in `new` and printed
    // as part of the message.
    fn drop(&mut self) {
        let expected = self.kind == AssertionKind::Eq;
        if self.equal() != expected {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    let msg = msg.map(|args| format!(": {args}")).unwrap_or_default();
    panic!("assertion `left {op} right` failed at {location}{msg}\n  left: {left:?}\n right: {right:?}")
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] for choosing the comparison and its
/// tolerance.
///
/// # Examples
///
/// ```
/// # use dense_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
///
/// assert_approx_eq!(vec2(1.0, 2.0), vec2(1.0, 2.0 + 1e-9)).abs(1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_ne!`], but returns an [`Asserter`] for choosing the comparison and its
/// tolerance.
///
/// # Examples
///
/// ```
/// # use dense_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// assert_approx_ne!(1.0, 1.0 + 2.0 * f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
