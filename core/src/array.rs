#![allow(unsafe_code)]

//! Fixed-length array with owned, allocator-backed storage.
//!
//! The length is decided at construction and never changes. Read access,
//! cursors and iteration come from [`Contiguous`].
//!
//! # Example
//!
//! ```
//! use funcol_core::{Array, Contiguous};
//!
//! let numbers = Array::from([1, 2, 3, 4, 5]);
//! let evens = numbers.filter(|n| n % 2 == 0);
//! assert_eq!(evens, [2, 4]);
//!
//! let doubled = numbers.map(|n| n * 2);
//! assert_eq!(doubled.at(4), Ok(&10));
//! assert!(doubled.at(5).is_err());
//! ```

use core::{
    fmt,
    ops::{Index, IndexMut},
    ptr,
};

use allocator_api2::alloc::{Allocator, Global};

use crate::iter::{Direction, Iter, IterMut};
use crate::raw::RawBuf;
use crate::traits::{Contiguous, private};

/// A heap block of exactly `len()` elements.
///
/// Cloning copies every element into a new block. [`take`](Array::take)
/// moves the block out and leaves an empty array behind.
pub struct Array<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    len: usize,
}

impl<T> Array<T> {
    /// `len` default-valued elements.
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        Self::new_in(len, Global)
    }

    /// Builds an array from an iterator that knows its length upfront.
    pub fn from_exact_iter(values: impl IntoIterator<Item = T, IntoIter: ExactSizeIterator>) -> Self {
        Self::from_exact_iter_in(values, Global)
    }

    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_exact_iter(values.iter().cloned())
    }

    /// Copies the elements of a cursor range, in range order.
    pub fn from_range<D: Direction>(range: Iter<'_, T, D>) -> Self
    where
        T: Clone,
    {
        Self::from_exact_iter(range.cloned())
    }
}

impl<T, A: Allocator> Array<T, A> {
    pub fn new_in(len: usize, alloc: A) -> Self
    where
        T: Default,
    {
        Self::from_exact_iter_in((0..len).map(|_| T::default()), alloc)
    }

    /// Builds an array in `alloc` from an iterator that knows its length
    /// upfront.
    ///
    /// # Panics
    ///
    /// If the iterator yields fewer elements than it reported.
    pub fn from_exact_iter_in(
        values: impl IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
        alloc: A,
    ) -> Self {
        let values = values.into_iter();
        let len = values.len();
        let mut array = Array {
            buf: RawBuf::with_capacity_in(len, alloc),
            len: 0,
        };
        for value in values.take(len) {
            array.push_within_capacity(value);
        }
        assert_eq!(array.len, len, "iterator exhausted too early");
        array
    }

    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Moves the storage out, leaving `self` empty and without storage.
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        Array {
            buf: self.buf.take(),
            len: core::mem::take(&mut self.len),
        }
    }

    /// A new array of the same length holding `op(element)` for each
    /// element. `self` is left untouched.
    pub fn map<U, F>(&self, op: F) -> Array<U, A>
    where
        A: Clone,
        F: FnMut(&T) -> U,
    {
        Array::from_exact_iter_in(self.iter().map(op), self.allocator().clone())
    }

    /// A new array holding clones of the elements matching `pred`, in their
    /// original order.
    ///
    /// Matches are collected into a scratch block as long as `self`, which
    /// is trimmed to the match count before it is returned.
    pub fn filter<P>(&self, mut pred: P) -> Self
    where
        T: Clone,
        A: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut scratch = Array {
            buf: RawBuf::with_capacity_in(self.len, self.allocator().clone()),
            len: 0,
        };
        for value in self.iter() {
            if pred(value) {
                scratch.push_within_capacity(value.clone());
            }
        }
        scratch.buf.shrink_to(scratch.len);
        scratch
    }

    /// Only used while building: the public length never changes.
    fn push_within_capacity(&mut self, value: T) {
        assert!(self.len < self.buf.capacity());
        // SAFETY: slot `len` is allocated and not live.
        unsafe { self.buf.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
    }
}

impl<T, A: Allocator> private::Sealed for Array<T, A> {}

impl<T, A: Allocator> Contiguous for Array<T, A> {
    type Elem = T;

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, A: Allocator> Drop for Array<T, A> {
    fn drop(&mut self) {
        // SAFETY: exactly `[0, len)` is live. `buf` releases the block after.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr(),
                self.len,
            ))
        };
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for Array<T, A> {
    fn clone(&self) -> Self {
        Self::from_exact_iter_in(self.iter().cloned(), self.allocator().clone())
    }
}

impl<T, A: Allocator + Default> Default for Array<T, A> {
    fn default() -> Self {
        Array {
            buf: RawBuf::new_in(A::default()),
            len: 0,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_exact_iter(values)
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T, A: Allocator> Index<usize> for Array<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, A: Allocator> IndexMut<usize> for Array<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Array<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, A, B> PartialEq<Array<U, B>> for Array<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &Array<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for Array<T, A> {}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for Array<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for Array<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, A: Allocator> AsRef<[T]> for Array<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for Array<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Array<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Array<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
