//! Deferred matrix chain products.
//!
//! Matrix multiplication is associative, but the cost of a product of several matrices depends
//! heavily on the order the individual products are computed in. A [`Chain`] collects borrowed
//! operands and only multiplies them when evaluated, using the parenthesization that needs the
//! fewest scalar multiplications.

use std::{fmt, ops::Mul};

use itertools::Itertools;

use crate::{matrix::multiply_into, Buffer, Config, Matrix, Number};

/// A borrowed matrix with its dimensions erased from the type.
struct Operand<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
}

impl<'a, T> Clone for Operand<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Operand<'a, T> {}

/// An unevaluated product of matrices resulting in an `R`x`C` matrix.
///
/// Chains start out as a single matrix ([`Chain::new`] or [`Matrix::chain`]) and grow by
/// multiplying them with further matrices or chains. The operands are borrowed, and their
/// dimensions are checked by the type system just like for [`Matrix`] multiplication.
///
/// Nothing is computed until [`Chain::evaluate`] is called (or the chain is converted into a
/// [`Matrix`]). Evaluation does not consume or modify the chain and may be repeated.
///
/// # Examples
///
/// ```
/// # use dense_linalg::*;
/// let a = Matrix::<i32, 10, 1>::splat(1);
/// let b = Matrix::<i32, 1, 10>::splat(2);
/// let c = Matrix::<i32, 10, 1>::splat(3);
///
/// let chain = a.chain() * &b * &c;
/// assert_eq!(chain.plan().to_string(), "(A0 (A1 A2))");
/// assert_eq!(chain.evaluate(), &(&a * &b) * &c);
/// ```
pub struct Chain<'a, T: Default, const R: usize, const C: usize> {
    operands: Vec<Operand<'a, T>>,
}

impl<'a, T: Default, const R: usize, const C: usize> Chain<'a, T, R, C> {
    /// Creates a chain consisting only of `matrix`.
    pub fn new(matrix: &'a Matrix<T, R, C>) -> Self {
        Self {
            operands: vec![Operand {
                data: matrix.as_slice(),
                rows: R,
                cols: C,
            }],
        }
    }

    /// Returns the number of matrices in the chain.
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    /// Always returns `false`, since every chain has at least one operand.
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    /// Returns the dimension sequence of the chain.
    ///
    /// Operand `i` has `dims[i]` rows and `dims[i + 1]` columns.
    fn dimensions(&self) -> Vec<usize> {
        debug_assert!(self
            .operands
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.cols == b.rows));

        let mut dims = Vec::with_capacity(self.operands.len() + 1);
        dims.push(R);
        dims.extend(self.operands.iter().map(|op| op.cols));
        dims
    }

    /// Computes the cheapest evaluation order of the chain.
    pub fn plan(&self) -> ChainPlan {
        ChainPlan::from_dimensions(&self.dimensions())
    }
}

impl<'a, T: Number, const R: usize, const C: usize> Chain<'a, T, R, C> {
    /// Computes the product, using [`Config::default`].
    pub fn evaluate(&self) -> Matrix<T, R, C> {
        self.evaluate_with(&Config::default())
    }

    /// Computes the product, following the cheapest evaluation order.
    ///
    /// Each individual product uses the same kernel as `Matrix * Matrix`, parallelized according
    /// to `config.parallelism`.
    pub fn evaluate_with(&self, config: &Config) -> Matrix<T, R, C> {
        let plan = self.plan();
        log::debug!(
            "evaluating {R}x{C} chain {:?} as {plan}: {} scalar multiplications (naive: {})",
            self,
            plan.cost(),
            plan.naive_cost(),
        );

        match self.product(&plan, 0, self.len() - 1, config) {
            Product::Computed(buf) => Matrix::from_buffer(buf),
            Product::Operand(data) => Matrix::from_fn(|row, col| data[row * C + col]),
        }
    }

    /// Multiplies operands `i..=j`.
    fn product(&self, plan: &ChainPlan, i: usize, j: usize, config: &Config) -> Product<'a, T> {
        if i == j {
            return Product::Operand(self.operands[i].data);
        }

        let split = plan.split(i, j);
        let lhs = self.product(plan, i, split, config);
        let rhs = self.product(plan, split + 1, j, config);

        let rows = self.operands[i].rows;
        let inner = self.operands[split].cols;
        let cols = self.operands[j].cols;
        let mut out = Buffer::zeroed(rows * cols);
        multiply_into(
            out.as_mut_slice(),
            lhs.as_slice(),
            rhs.as_slice(),
            inner,
            cols,
            config.parallelism,
        );
        Product::Computed(out)
    }
}

/// A partial product: either one of the operands or an intermediate result.
enum Product<'a, T: Default> {
    Operand(&'a [T]),
    Computed(Buffer<T>),
}

impl<'a, T: Default> Product<'a, T> {
    fn as_slice(&self) -> &[T] {
        match self {
            Product::Operand(data) => data,
            Product::Computed(buf) => buf.as_slice(),
        }
    }
}

impl<'a, T: Default, const R: usize, const C: usize> Clone for Chain<'a, T, R, C> {
    fn clone(&self) -> Self {
        Self {
            operands: self.operands.clone(),
        }
    }
}

impl<'a, T: Default, const R: usize, const C: usize> fmt::Debug for Chain<'a, T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shapes = self
            .operands
            .iter()
            .map(|op| format!("{}x{}", op.rows, op.cols))
            .join(" * ");
        write!(f, "Chain({shapes})")
    }
}

/// Chain * Matrix.
impl<'a, T: Default, const R: usize, const K: usize, const C: usize> Mul<&'a Matrix<T, K, C>>
    for Chain<'a, T, R, K>
{
    type Output = Chain<'a, T, R, C>;

    fn mul(mut self, rhs: &'a Matrix<T, K, C>) -> Self::Output {
        self.operands.push(Operand {
            data: rhs.as_slice(),
            rows: K,
            cols: C,
        });
        Chain {
            operands: self.operands,
        }
    }
}

/// Chain * Chain.
impl<'a, T: Default, const R: usize, const K: usize, const C: usize> Mul<Chain<'a, T, K, C>>
    for Chain<'a, T, R, K>
{
    type Output = Chain<'a, T, R, C>;

    fn mul(mut self, rhs: Chain<'a, T, K, C>) -> Self::Output {
        self.operands.extend(rhs.operands);
        Chain {
            operands: self.operands,
        }
    }
}

impl<'a, T: Number, const R: usize, const C: usize> From<Chain<'a, T, R, C>> for Matrix<T, R, C> {
    fn from(chain: Chain<'a, T, R, C>) -> Self {
        chain.evaluate()
    }
}

impl<T: Default, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Starts a deferred [`Chain`] product with `self` as the leftmost operand.
    pub fn chain(&self) -> Chain<'_, T, R, C> {
        Chain::new(self)
    }
}

/// The cheapest evaluation order of a matrix chain.
///
/// The [`fmt::Display`] impl prints the parenthesization, naming the operands `A0`, `A1`, etc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainPlan {
    len: usize,
    dims: Vec<usize>,
    /// `cost[i * len + j]` is the minimal cost of multiplying operands `i..=j`.
    cost: Vec<usize>,
    /// `split[i * len + j]` is the last operand of the left factor of that product.
    split: Vec<usize>,
}

impl ChainPlan {
    /// Computes the plan for a chain whose operand `i` is a `dims[i]`x`dims[i + 1]` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `dims` has fewer than 2 entries.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let plan = ChainPlan::from_dimensions(&[10, 100, 5, 50]);
    /// assert_eq!(plan.to_string(), "((A0 A1) A2)");
    /// assert_eq!(plan.cost(), 7500);
    /// assert_eq!(plan.naive_cost(), 7500);
    /// ```
    #[track_caller]
    pub fn from_dimensions(dims: &[usize]) -> Self {
        assert!(dims.len() >= 2, "a matrix chain needs at least one operand");

        let len = dims.len() - 1;
        let mut cost = vec![0; len * len];
        let mut split = vec![0; len * len];

        for span in 2..=len {
            for i in 0..=len - span {
                let j = i + span - 1;
                let (best_split, best_cost) = (i..j)
                    .map(|s| {
                        let c = cost[i * len + s]
                            + cost[(s + 1) * len + j]
                            + dims[i] * dims[s + 1] * dims[j + 1];
                        (s, c)
                    })
                    .min_by_key(|&(_, c)| c)
                    .unwrap_or((i, 0));
                cost[i * len + j] = best_cost;
                split[i * len + j] = best_split;
            }
        }

        Self {
            len,
            dims: dims.to_vec(),
            cost,
            split,
        }
    }

    /// Returns the number of operands.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always returns `false`, since every plan has at least one operand.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of scalar multiplications needed by this plan.
    pub fn cost(&self) -> usize {
        self.cost[self.len - 1]
    }

    /// Returns the number of scalar multiplications needed when multiplying from left to right.
    pub fn naive_cost(&self) -> usize {
        let rows = self.dims[0];
        self.dims[1..]
            .iter()
            .tuple_windows()
            .map(|(&inner, &cols)| rows * inner * cols)
            .sum()
    }

    fn split(&self, i: usize, j: usize) -> usize {
        self.split[i * self.len + j]
    }

    fn fmt_range(&self, f: &mut fmt::Formatter<'_>, i: usize, j: usize) -> fmt::Result {
        if i == j {
            return write!(f, "A{i}");
        }

        let split = self.split(i, j);
        f.write_str("(")?;
        self.fmt_range(f, i, split)?;
        f.write_str(" ")?;
        self.fmt_range(f, split + 1, j)?;
        f.write_str(")")
    }
}

impl fmt::Display for ChainPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_range(f, 0, self.len - 1)
    }
}
