//! Owned element storage shared by [`Vector`] and [`Matrix`].
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt, mem,
    ops::{Index, IndexMut},
    slice,
    sync::{Mutex, PoisonError},
};

use once_cell::sync::Lazy;
use tinyvec::TinyVec;

use crate::Zero;

/// Maximum number of elements a [`Buffer`] stores inline, without allocating.
///
/// This covers every vector up to 16 dimensions and every matrix up to 4x4. Anything larger lives
/// on the heap, which keeps large fixed-size matrices from producing huge stack frames.
///
/// The limit is an element count, not a byte size: the inline array is sized `INLINE_CAPACITY`
/// elements of `T` for every `T`, so a `Buffer<f64>` reserves 128 bytes inline even when it holds
/// only 2 elements. A per-type byte budget would need the array length to depend on
/// `size_of::<T>()`, which stable const generics cannot express.
pub const INLINE_CAPACITY: usize = 16;

/// A fixed-length buffer of `T` that is either stored inline or heap-allocated.
///
/// The representation is chosen once, on construction, from the number of elements: buffers of up
/// to [`INLINE_CAPACITY`] elements are embedded in the value, longer ones own a heap allocation.
/// Both are accessed through the same flat-offset indexing and contiguous slice API.
///
/// - Cloning always performs an element-wise deep copy.
/// - Moving a heap-backed buffer moves the allocation without touching the elements.
/// - The length never changes after construction (except through [`Buffer::take`], which leaves an
///   empty buffer behind).
///
/// # Examples
///
/// ```
/// # use dense_linalg::Buffer;
/// let small = Buffer::from_fn(3, |i| i as f32);
/// assert!(small.is_inline());
///
/// let large = Buffer::<f32>::zeroed(100);
/// assert!(!large.is_inline());
/// assert_eq!(large.len(), 100);
/// ```
#[derive(Clone)]
pub struct Buffer<T: Default> {
    elems: TinyVec<[T; INLINE_CAPACITY]>,
}

impl<T: Default> Buffer<T> {
    /// Creates a buffer of `len` elements, initializing each by invoking `cb` with its offset.
    pub fn from_fn<F>(len: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        // `with_capacity` picks the inline representation if `len` fits.
        let mut elems = TinyVec::with_capacity(len);
        elems.extend((0..len).map(cb));
        debug_assert_eq!(elems.len(), len);
        Self { elems }
    }

    /// Creates a buffer of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Copy,
    {
        Self::from_fn(len, |_| value)
    }

    /// Creates a buffer of `len` elements set to [`Zero::ZERO`].
    pub fn zeroed(len: usize) -> Self
    where
        T: Zero + Copy,
    {
        Self::filled(len, T::ZERO)
    }

    /// Creates a buffer holding the elements of `iter`.
    pub fn from_iter_exact<I>(len: usize, iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let this = Self::from_fn(len, |i| match iter.next() {
            Some(elem) => elem,
            None => panic!("iterator yielded only {i} of {len} buffer elements"),
        });
        assert!(
            iter.next().is_none(),
            "iterator yielded more than {len} buffer elements"
        );
        this
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns whether the elements are stored inline (as opposed to in a heap allocation).
    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self.elems, TinyVec::Inline(_))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    /// Returns a pointer to the first element of the contiguous storage.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Swaps the elements at offsets `a` and `b`.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    /// Moves the contents out of `self`, leaving an empty buffer behind.
    ///
    /// No elements are copied or reallocated.
    pub fn take(&mut self) -> Self {
        Self {
            elems: mem::take(&mut self.elems),
        }
    }
}

impl<T: Default> Index<usize> for Buffer<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, offset: usize) -> &T {
        &self.as_slice()[offset]
    }
}

impl<T: Default> IndexMut<usize> for Buffer<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, offset: usize) -> &mut T {
        &mut self.as_mut_slice()[offset]
    }
}

impl<T: Default + fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

type SharedMap = HashMap<(TypeId, &'static str), &'static (dyn Any + Send + Sync)>;

static SHARED: Lazy<Mutex<SharedMap>> = Lazy::new(Default::default);

/// Returns the process-wide instance of `V` registered under `name`, creating it with `init` on
/// first use.
///
/// Instances are leaked and never mutated, so the returned reference stays valid (and unchanged)
/// for the rest of the program. Values of different types never collide, even under the same
/// `name`.
pub(crate) fn shared<V>(name: &'static str, init: impl FnOnce() -> V) -> &'static V
where
    V: Any + Send + Sync,
{
    let mut map = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
    let value = *map.entry((TypeId::of::<V>(), name)).or_insert_with(|| {
        log::trace!("initializing shared `{}` ({name})", std::any::type_name::<V>());
        let leaked: &'static (dyn Any + Send + Sync) = Box::leak(Box::new(init()));
        leaked
    });
    match value.downcast_ref::<V>() {
        Some(value) => value,
        None => unreachable!("shared value keyed by the wrong type"),
    }
}
