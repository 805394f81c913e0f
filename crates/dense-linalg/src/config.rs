//! Numeric policies passed to the elimination algorithms.
//!
//! There is no global state: every algorithm that needs to decide whether a value "is zero" takes
//! a [`Config`] (the shorthand methods use [`Config::default`]).

use crate::{Epsilon, Zero};

/// How two scalars are compared for equality.
///
/// This decision drives pivot search in [`Matrix::determinant_with`], [`Matrix::inverted_with`],
/// [`Matrix::rank_with`] and the solver's classification of rows and columns.
///
/// [`Matrix::determinant_with`]: crate::Matrix::determinant_with
/// [`Matrix::inverted_with`]: crate::Matrix::inverted_with
/// [`Matrix::rank_with`]: crate::Matrix::rank_with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparison {
    /// Values are equal if `a == b`.
    #[default]
    Exact,
    /// Values are equal if `|a - b| <= T::EPSILON`.
    Epsilon,
}

impl Comparison {
    /// Compares `a` and `b` according to this policy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let a = 0.1 + 0.2;
    /// assert!(!Comparison::Exact.equal(a, 0.3));
    /// assert!(Comparison::Epsilon.equal(a, 0.3));
    /// ```
    #[inline]
    pub fn equal<T: Epsilon>(self, a: T, b: T) -> bool {
        match self {
            Comparison::Exact => a == b,
            Comparison::Epsilon => a.abs_diff(b) <= T::EPSILON,
        }
    }

    /// Returns whether `value` compares equal to zero.
    #[inline]
    pub fn is_zero<T: Epsilon + Zero>(self, value: T) -> bool {
        self.equal(value, T::ZERO)
    }
}

/// Whether (and when) data-parallel loops are used.
///
/// Parallel execution only ever splits work over disjoint output rows, so it never changes a
/// result. It requires the `parallel` cargo feature; without it this setting is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Parallelism {
    /// Always run on the calling thread.
    #[default]
    Sequential,
    /// Parallelize operations whose output has at least this many elements.
    Threshold(usize),
}

impl Parallelism {
    /// Returns whether an operation producing `elements` outputs should run in parallel.
    pub fn applies_to(self, elements: usize) -> bool {
        match self {
            Parallelism::Sequential => false,
            Parallelism::Threshold(min) => cfg!(feature = "parallel") && elements >= min,
        }
    }
}

/// Numeric configuration of the engine.
///
/// # Examples
///
/// ```
/// # use dense_linalg::*;
/// let cfg = Config::tolerant().with_parallelism(Parallelism::Threshold(64 * 64));
/// assert_eq!(cfg.comparison, Comparison::Epsilon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Config {
    pub comparison: Comparison,
    pub parallelism: Parallelism,
}

impl Config {
    /// Exact comparisons, sequential execution. Same as [`Config::default`].
    pub const fn exact() -> Self {
        Self {
            comparison: Comparison::Exact,
            parallelism: Parallelism::Sequential,
        }
    }

    /// Epsilon-tolerant comparisons, sequential execution.
    pub const fn tolerant() -> Self {
        Self {
            comparison: Comparison::Epsilon,
            parallelism: Parallelism::Sequential,
        }
    }

    pub const fn with_comparison(self, comparison: Comparison) -> Self {
        Self { comparison, ..self }
    }

    pub const fn with_parallelism(self, parallelism: Parallelism) -> Self {
        Self {
            parallelism,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_vs_epsilon() {
        let sum = (0..10).fold(0.0f64, |acc, _| acc + 0.1);
        assert!(!Comparison::Exact.equal(sum, 1.0));
        assert!(Comparison::Epsilon.equal(sum, 1.0));
        assert!(!Comparison::Epsilon.equal(1.0f64, 1.0 + 4.0 * f64::EPSILON));
    }

    #[test]
    fn integers_are_always_exact() {
        assert!(Comparison::Epsilon.is_zero(0i32));
        assert!(!Comparison::Epsilon.is_zero(1i32));
        assert!(!Comparison::Epsilon.equal(2u8, 3u8));
        assert!(!Comparison::Epsilon.equal(i32::MIN, 1));
        assert!(!Comparison::Epsilon.equal(i64::MAX, i64::MIN));
        assert!(Comparison::Epsilon.equal(i8::MIN, i8::MIN));
    }

    #[test]
    fn sequential_never_applies() {
        assert!(!Parallelism::Sequential.applies_to(usize::MAX));
        assert!(!Parallelism::Threshold(100).applies_to(99));
        assert_eq!(
            Parallelism::Threshold(100).applies_to(100),
            cfg!(feature = "parallel")
        );
    }

    #[test]
    fn default_is_exact() {
        assert_eq!(Config::default(), Config::exact());
        assert_eq!(
            Config::exact().with_comparison(Comparison::Epsilon),
            Config::tolerant()
        );
    }
}
