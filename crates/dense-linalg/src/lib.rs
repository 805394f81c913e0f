//! Dense, fixed-size linear algebra.
//!
//! This library provides [`Vector`] and [`Matrix`] types whose dimensions are const generic
//! parameters, together with the classic elimination-based algorithms on top of them:
//! [determinants], [inverses], [ranks], [linear equation systems] and
//! [cost-optimized matrix chain products].
//!
//! [determinants]: Matrix::determinant
//! [inverses]: Matrix::inverted
//! [ranks]: Matrix::rank
//! [linear equation systems]: solve()
//! [cost-optimized matrix chain products]: Chain
//!
//! # Storage
//!
//! Vectors and matrices own their elements in a [`Buffer`]. Small objects (up to
//! [`INLINE_CAPACITY`] elements) are stored inline, larger ones on the heap. This is not
//! observable apart from [`Vector::is_inline`] and [`Matrix::is_inline`]: cloning is always deep,
//! and moving a heap-backed object never reallocates.
//!
//! # Numeric policy
//!
//! Whether a pivot "is zero" is decided by a [`Comparison`] policy, passed in a [`Config`]. The
//! `*_with` variants of the algorithms take a [`Config`]; all other methods use
//! [`Config::default`], which compares exactly. There is no global state.
//!
//! # Goals & Non-Goals
//!
//! - Dimensions are always known at compile time. Operations between mismatched shapes do not
//!   compile, and the few shape requirements that can't be expressed as bounds (eg. accessing
//!   [`Vector::z`] of a 2D vector) are checked by `const` assertions at monomorphization time.
//! - Matrices are stored row-major and unpadded.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals"). Algorithms that divide by pivots require a [`Field`], so they are not
//!   available for integer matrices.
//! - No results are signaled by [`LinalgError`] or [`Solution`] variants. Panics are reserved for
//!   contract violations like out-of-bounds indices.
//!
//! # Features
//!
//! - `parallel`: enables multi-threaded matrix multiplication via [rayon], controlled by
//!   [`Parallelism`].
//!
//! [rayon]: https://docs.rs/rayon

pub mod approx;
mod chain;
mod config;
mod error;
mod matrix;
mod solve;
mod storage;
mod traits;
mod vector;

pub use chain::*;
pub use config::*;
pub use error::*;
pub use matrix::*;
pub use solve::*;
pub use storage::{Buffer, INLINE_CAPACITY};
pub use traits::*;
pub use vector::*;
