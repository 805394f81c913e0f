use std::{array, fmt, slice};

use itertools::{EitherOrBoth, Itertools};

use crate::{
    storage::{self, Buffer},
    Comparison, Epsilon, MinMax, Number, One, Sqrt, Zero,
};

mod ops;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f64`] elements.
pub type Vec1d = Vec1<f64>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// A `D`-element column vector storing elements of type `T`.
///
/// The elements live in a [`Buffer`], so small vectors are stored inline while vectors with more
/// than [`INLINE_CAPACITY`][crate::INLINE_CAPACITY] elements own a heap allocation. Either way,
/// cloning a vector copies its elements and moving it is cheap.
///
/// `D` must be at least 1. Instantiating a vector with `D = 0` fails to compile.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::from_partial`] takes a slice of any length, zero-padding or truncating it.
/// - [`Vector::splat`] copies the given value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::zero`] (and [`Default`]) creates an all-zero vector.
/// - [`Vector::one`] and [`Vector::zero_ref`] return shared `'static` instances.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays, and panic when out of
///   bounds. [`Vector::get`] and [`Vector::get_mut`] return [`Option`]s instead.
/// - For vectors with up to 4 dimensions, [`Vector::x`], [`Vector::y`], [`Vector::z`] and
///   [`Vector::w`] access the named axes. Accessing an axis the vector doesn't have is a
///   compile-time error.
/// - [`Vector::as_slice`] and [`Vector::as_mut_slice`] expose the contiguous elements.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone)]
pub struct Vector<T: Default, const D: usize> {
    buf: Buffer<T>,
}

impl<T: Default, const D: usize> Vector<T, D> {
    /// Wraps a buffer of exactly `D` elements.
    pub(crate) fn from_buffer(buf: Buffer<T>) -> Self {
        const { assert!(D >= 1, "vectors must have at least 1 dimension") };
        debug_assert_eq!(buf.len(), D);
        Self { buf }
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::from_buffer(Buffer::from_fn(D, cb))
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self::from_buffer(Buffer::filled(D, elem))
    }

    /// Creates a vector with every element set to [`Zero::ZERO`].
    #[inline]
    pub fn zero() -> Self
    where
        T: Zero + Copy,
    {
        Self::from_buffer(Buffer::zeroed(D))
    }

    /// Creates a vector from the leading elements of `elems`.
    ///
    /// Missing trailing elements are set to zero, excess elements are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// assert_eq!(Vec4::from_partial(&[1, 2]), vec4(1, 2, 0, 0));
    /// assert_eq!(Vec2::from_partial(&[1, 2, 3, 4]), vec2(1, 2));
    /// ```
    pub fn from_partial(elems: &[T]) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_fn(|i| elems.get(i).copied().unwrap_or(T::ZERO))
    }

    /// Returns a shared all-ones vector.
    ///
    /// The instance is created on first use and then reused for the rest of the program.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let ones = Vec3::<i32>::one();
    /// assert_eq!(*ones, vec3(1, 1, 1));
    /// assert!(std::ptr::eq(ones, Vec3::<i32>::one()));
    /// ```
    pub fn one() -> &'static Self
    where
        T: Number + 'static,
    {
        storage::shared("vector-one", || Self::splat(T::ONE))
    }

    /// Returns a shared all-zero vector.
    ///
    /// Like [`Vector::one`], this is created once per element type and dimension. Use
    /// [`Vector::zero`] to get an owned value instead.
    pub fn zero_ref() -> &'static Self
    where
        T: Number + 'static,
    {
        storage::shared("vector-zero", Self::zero)
    }

    /// Returns the number of dimensions, `D`.
    #[inline]
    pub const fn dimension(&self) -> usize {
        D
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Returns a pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns whether the elements are stored inline rather than on the heap.
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.buf.is_inline()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Copies the elements into an array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).to_array(), [1, 2, 3]);
    /// ```
    pub fn to_array(&self) -> [T; D]
    where
        T: Copy,
    {
        array::from_fn(|i| self.buf[i])
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(&self, mut f: F) -> Vector<U, D>
    where
        T: Copy,
        U: Default,
        F: FnMut(T) -> U,
    {
        Vector::from_fn(|i| f(self.buf[i]))
    }

    /// Converts the vector to a different dimension.
    ///
    /// Shared leading elements are copied, new elements are zero, and excess elements are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(v.resize::<2>(), vec2(1, 2));
    /// assert_eq!(v.resize::<4>(), vec4(1, 2, 3, 0));
    /// ```
    pub fn resize<const D2: usize>(&self) -> Vector<T, D2>
    where
        T: Zero + Copy,
    {
        Vector::from_partial(self.as_slice())
    }

    /// Converts the element type via [`From`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let v: Vec2<f64> = vec2(1i32, -2).convert();
    /// assert_eq!(v, vec2(1.0, -2.0));
    /// ```
    pub fn convert<U>(&self) -> Vector<U, D>
    where
        T: Copy,
        U: From<T> + Default,
    {
        self.map(U::from)
    }

    /// Converts the element type and the dimension at once.
    ///
    /// Behaves like [`Vector::convert`] followed by [`Vector::resize`].
    pub fn convert_resize<U, const D2: usize>(&self) -> Vector<U, D2>
    where
        T: Copy,
        U: From<T> + Zero + Default + Copy,
    {
        Vector::from_fn(|i| self.get(i).map_or(U::ZERO, |&e| U::from(e)))
    }

    /// Adds a vector of a different dimension to `self`.
    ///
    /// The result has `DR = max(D, D2)` dimensions, which is checked at compile time. Where both
    /// vectors have an element, they are added; the remaining elements of the longer vector are
    /// copied as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let v: Vec3<i32> = vec2(1, 2).add_padded(&vec3(10, 20, 30));
    /// assert_eq!(v, vec3(11, 22, 30));
    /// ```
    pub fn add_padded<const D2: usize, const DR: usize>(&self, other: &Vector<T, D2>) -> Vector<T, DR>
    where
        T: Number,
    {
        padded_op(self, other, |a, b| a + b)
    }

    /// Subtracts a vector of a different dimension from `self`.
    ///
    /// Overlapping elements are subtracted. The remaining elements of the longer operand are
    /// copied as they are, *not* negated, mirroring [`Vector::add_padded`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let v: Vec3<i32> = vec2(1, 2).sub_padded(&vec3(10, 20, 30));
    /// assert_eq!(v, vec3(-9, -18, 30));
    /// ```
    pub fn sub_padded<const D2: usize, const DR: usize>(&self, other: &Vector<T, D2>) -> Vector<T, DR>
    where
        T: Number,
    {
        padded_op(self, other, |a, b| a - b)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The `*` operator between two vectors computes the same value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(&b), 3);
    /// assert_eq!(&a * &b, 3);
    /// ```
    pub fn dot(&self, other: &Self) -> T
    where
        T: Number,
    {
        self.iter()
            .zip(other.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Alias of [`Vector::dot`].
    #[inline]
    pub fn inner_product(&self, other: &Self) -> T
    where
        T: Number,
    {
        self.dot(other)
    }

    /// Returns the squared magnitude (the dot product of the vector with itself).
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// assert_eq!(vec2(4, 0).magnitude_sqr(), 16);
    /// ```
    pub fn magnitude_sqr(&self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Alias of [`Vector::magnitude_sqr`].
    #[inline]
    pub fn length_sqr(&self) -> T
    where
        T: Number,
    {
        self.magnitude_sqr()
    }

    /// Returns the magnitude (Euclidean length) of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.magnitude_sqr().sqrt()
    }

    /// Alias of [`Vector::magnitude`].
    #[inline]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.magnitude()
    }

    /// Returns this vector divided by its magnitude, resulting in a unit vector.
    ///
    /// # Panics
    ///
    /// Panics if the magnitude of `self` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalized();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    #[track_caller]
    pub fn normalized(&self) -> Self
    where
        T: Number + Sqrt,
    {
        let mut out = self.clone();
        out.normalize();
        out
    }

    /// Divides this vector by its magnitude in place.
    ///
    /// # Panics
    ///
    /// Panics if the magnitude of `self` is zero.
    #[track_caller]
    pub fn normalize(&mut self)
    where
        T: Number + Sqrt,
    {
        let magnitude = self.magnitude();
        assert!(
            magnitude != T::ZERO,
            "cannot normalize a vector with zero magnitude"
        );
        *self /= magnitude;
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let a = vec3(-1.0, 2.0, f64::NAN);
    /// let b = vec3(3.0, f64::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(&b), vec3(-1.0, f64::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(&self, other: &Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let a = vec3(-1.0, 2.0, f64::NAN);
    /// let b = vec3(3.0, f64::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(&b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(&self, other: &Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    pub fn clamp(&self, min: &Self, max: &Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Compares `self` and `other` element-wise using the given policy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let a = vec2(0.1 + 0.2, 1.0);
    /// let b = vec2(0.3, 1.0);
    /// assert_ne!(a, b);
    /// assert!(a.eq_with(&b, Comparison::Epsilon));
    /// ```
    pub fn eq_with(&self, other: &Self, comparison: Comparison) -> bool
    where
        T: Epsilon + Copy,
    {
        self.iter()
            .zip(other.iter())
            .all(|(&a, &b)| comparison.equal(a, b))
    }
}

fn padded_op<T, F, const D: usize, const D2: usize, const DR: usize>(
    lhs: &Vector<T, D>,
    rhs: &Vector<T, D2>,
    mut op: F,
) -> Vector<T, DR>
where
    T: Number,
    F: FnMut(T, T) -> T,
{
    const {
        assert!(
            DR == if D > D2 { D } else { D2 },
            "padded vector arithmetic must produce the larger dimension"
        )
    };

    let elems = lhs.iter().zip_longest(rhs.iter()).map(|pair| match pair {
        EitherOrBoth::Both(&a, &b) => op(a, b),
        EitherOrBoth::Left(&e) | EitherOrBoth::Right(&e) => e,
    });
    Vector::from_buffer(Buffer::from_iter_exact(DR, elems))
}

macro_rules! axes {
    ($($get:ident, $get_mut:ident, $set:ident, $index:literal;)+) => {
        impl<T: Default, const D: usize> Vector<T, D> {
            $(
                #[doc = concat!("Returns the element at index ", stringify!($index), ".")]
                ///
                /// Only available if the vector has enough dimensions; otherwise compilation fails.
                #[inline]
                pub fn $get(&self) -> T
                where
                    T: Copy,
                {
                    const { assert!(D > $index, "vector has no such axis") };
                    self.buf[$index]
                }

                #[doc = concat!("Returns a mutable reference to the element at index ", stringify!($index), ".")]
                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    const { assert!(D > $index, "vector has no such axis") };
                    &mut self.buf[$index]
                }

                #[doc = concat!("Sets the element at index ", stringify!($index), ".")]
                #[inline]
                pub fn $set(&mut self, value: T) {
                    *self.$get_mut() = value;
                }
            )+
        }
    };
}
axes! {
    x, x_mut, set_x, 0;
    y, y_mut, set_y, 1;
    z, z_mut, set_z, 2;
    w, w_mut, set_w, 3;
}

impl<T: Number> Vector<T, 2> {
    /// Returns the left-handed perpendicular `(y, -x)`.
    ///
    /// In a Y-up coordinate system this is `self` rotated clockwise by a quarter turn.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let v = vec2(1, 2);
    /// assert_eq!(v.perpendicular_lh(), vec2(2, -1));
    /// assert_eq!(v.dot(&v.perpendicular_lh()), 0);
    /// ```
    pub fn perpendicular_lh(&self) -> Self {
        vec2(self.y(), -self.x())
    }

    /// Returns the right-handed perpendicular `(-y, x)`.
    ///
    /// In a Y-up coordinate system this is `self` rotated counterclockwise by a quarter turn.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// assert_eq!(vec2(1, 2).perpendicular_rh(), vec2(-2, 1));
    /// ```
    pub fn perpendicular_rh(&self) -> Self {
        vec2(-self.y(), self.x())
    }
}

impl<T: Number> Vector<T, 3> {
    /// Computes the right-handed cross product `self × other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let x = vec3(1, 0, 0);
    /// let y = vec3(0, 1, 0);
    /// assert_eq!(x.cross_rh(&y), vec3(0, 0, 1));
    /// assert_eq!(y.cross_rh(&x), vec3(0, 0, -1));
    /// ```
    pub fn cross_rh(&self, other: &Self) -> Self {
        let [a1, a2, a3] = self.to_array();
        let [b1, b2, b3] = other.to_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Computes the left-handed cross product, which points opposite to [`Vector::cross_rh`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_linalg::*;
    /// let x = vec3(1, 0, 0);
    /// let y = vec3(0, 1, 0);
    /// assert_eq!(x.cross_lh(&y), vec3(0, 0, -1));
    /// ```
    pub fn cross_lh(&self, other: &Self) -> Self {
        other.cross_rh(self)
    }
}

impl<T, const D: usize> Default for Vector<T, D>
where
    T: Zero + Default + Copy,
{
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Default, const D: usize> From<[T; D]> for Vector<T, D> {
    #[inline]
    fn from(value: [T; D]) -> Self {
        Self::from_buffer(Buffer::from_iter_exact(D, value))
    }
}

impl<T, const D: usize> fmt::Debug for Vector<T, D>
where
    T: Default + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in self.iter() {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const D: usize> fmt::Display for Vector<T, D>
where
    T: Default + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl<T: Default, const D: usize> AsRef<[T]> for Vector<T, D> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Default, const D: usize> AsMut<[T]> for Vector<T, D> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T: Default, const D: usize> IntoIterator for &'a Vector<T, D> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub fn vec1<T: Default>(x: T) -> Vec1<T> {
    Vector::from([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub fn vec2<T: Default>(x: T, y: T) -> Vec2<T> {
    Vector::from([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub fn vec3<T: Default>(x: T, y: T, z: T) -> Vec3<T> {
    Vector::from([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub fn vec4<T: Default>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector::from([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, INLINE_CAPACITY};

    use super::*;

    #[test]
    fn access() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!(v.x(), 1);
        assert_eq!(v.y(), 2);
        assert_eq!(v.z(), 3);
        assert_eq!(v.w(), 4);
        assert_eq!(v[2], 3);

        v.set_x(777);
        *v.w_mut() = 9;
        v[1] = 5;
        assert_eq!(v, [777, 5, 3, 9]);

        assert_eq!(v.get(3), Some(&9));
        assert_eq!(v.get(4), None);
        assert_eq!(v.dimension(), 4);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = vec3(1, 2, 3);
        let _ = v[3];
    }

    #[test]
    fn construction() {
        assert_eq!(Vec3::<i32>::zero(), vec3(0, 0, 0));
        assert_eq!(Vec3::<i32>::default(), vec3(0, 0, 0));
        assert_eq!(Vec2::splat(7u8), vec2(7, 7));
        assert_eq!(Vec3::from_partial(&[5]), vec3(5, 0, 0));
        assert_eq!(Vec1::from_partial(&[5, 6]), vec1(5));
    }

    #[test]
    fn storage() {
        assert!(vec4(0.0, 1.0, 2.0, 3.0).is_inline());
        let big = Vector::<f64, 20>::from_fn(|i| i as f64);
        assert!(!big.is_inline());
        assert!(INLINE_CAPACITY < 20);

        let copy = big.clone();
        assert_eq!(copy, big);
        assert_ne!(copy.as_ptr(), big.as_ptr());

        let ptr = big.as_ptr();
        let moved = big;
        assert_eq!(moved.as_ptr(), ptr);
    }

    #[test]
    fn shared_instances() {
        assert_eq!(*Vec3::<f64>::one(), vec3(1.0, 1.0, 1.0));
        assert_eq!(*Vec3::<f64>::zero_ref(), Vec3::zero());
        assert!(std::ptr::eq(Vec2::<i8>::one(), Vec2::<i8>::one()));
        assert_eq!(*Vec2::<i16>::one(), vec2(1, 1));
    }

    #[test]
    fn conversion() {
        let v = vec3(1i32, 2, 3);
        assert_eq!(v.resize::<5>(), Vector::from([1, 2, 3, 0, 0]));
        assert_eq!(v.resize::<1>(), vec1(1));
        assert_eq!(v.convert::<i64>(), vec3(1i64, 2, 3));
        assert_eq!(v.convert_resize::<f64, 2>(), vec2(1.0, 2.0));
        assert_eq!(v.convert_resize::<f64, 4>(), vec4(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn padded() {
        let a = vec2(1, 2);
        let b = vec4(10, 20, 30, 40);
        assert_eq!(a.add_padded::<4, 4>(&b), vec4(11, 22, 30, 40));
        assert_eq!(b.add_padded::<2, 4>(&a), vec4(11, 22, 30, 40));
        assert_eq!(b.sub_padded::<2, 4>(&a), vec4(9, 18, 30, 40));
        assert_eq!(a.sub_padded::<4, 4>(&b), vec4(-9, -18, 30, 40));
        assert_eq!(a.add_padded::<2, 2>(&a), vec2(2, 4));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec3(1, 2, 3)), "(1, 2, 3)");
        assert_eq!(format!("{}", vec1(1)), "(1)");
        assert_eq!(format!("{:?}", vec2(0.0, 1.0)), "(0.0, 1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(&vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).inner_product(&vec3(1, 3, -5)), 35);
        assert_eq!(vec3(1, 3, -5).magnitude_sqr(), 35);
        assert_eq!(vec2(1.0, 0.0).dot(&vec2(0.0, 1.0)), 0.0);
    }

    #[test]
    fn magnitude() {
        assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_approx_eq!(vec3(1.0, 1.0, 1.0).normalized().magnitude(), 1.0);

        let mut v = vec2(0.0f32, -2.0);
        v.normalize();
        assert_eq!(v, vec2(0.0, -1.0));
    }

    #[test]
    #[should_panic(expected = "zero magnitude")]
    fn normalize_zero() {
        Vec3::<f64>::zero().normalized();
    }

    #[test]
    fn perpendicular() {
        let v = vec2(3, 5);
        assert_eq!(v.perpendicular_lh(), vec2(5, -3));
        assert_eq!(v.perpendicular_rh(), vec2(-5, 3));
        assert_eq!(v.dot(&v.perpendicular_rh()), 0);
        assert_eq!(-v.perpendicular_lh(), v.perpendicular_rh());
    }

    #[test]
    fn cross() {
        let a = vec3(1, 3, -5);
        let b = vec3(4, -2, -1);
        let rh = a.cross_rh(&b);
        assert_eq!(rh, vec3(-13, -19, -14));
        assert_eq!(a.dot(&rh), 0);
        assert_eq!(b.dot(&rh), 0);
        assert_eq!(a.cross_lh(&b), -rh);
    }

    #[test]
    fn min_max() {
        let a = vec3(1, 5, -3);
        let b = vec3(2, 4, -4);
        assert_eq!(a.min(&b), vec3(1, 4, -4));
        assert_eq!(a.max(&b), vec3(2, 5, -3));
        assert_eq!(
            vec3(-10, 0, 10).clamp(&Vector::splat(-1), &Vector::splat(1)),
            vec3(-1, 0, 1)
        );
    }

    #[test]
    fn eq_with() {
        let sum = vec2(0.1 + 0.2, 0.7 + 0.1);
        let expected = vec2(0.3, 0.8);
        assert!(!sum.eq_with(&expected, Comparison::Exact));
        assert!(sum.eq_with(&expected, Comparison::Epsilon));
        assert!(!vec2(1, 2).eq_with(&vec2(1, 3), Comparison::Epsilon));
    }
}
