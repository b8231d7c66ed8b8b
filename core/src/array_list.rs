#![allow(unsafe_code)]

//! Growable list with owned, allocator-backed storage.
//!
//! Slots `[0, len)` hold live elements, slots `[len, capacity)` are allocated
//! but uninitialized. Appending past capacity doubles it; the capacity only
//! goes down through [`ArrayList::shrink_to_fit`].
//!
//! # Example
//!
//! ```
//! use funcol_core::{ArrayList, Contiguous};
//!
//! let mut list = ArrayList::new();
//! assert_eq!(list.capacity(), ArrayList::<i32>::DEFAULT_CAPACITY);
//! for i in 0..6 {
//!     list.push(i);
//! }
//! assert_eq!(list.capacity(), 10);
//!
//! list.shrink_to_fit();
//! assert_eq!(list.capacity(), 6);
//! assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1, 0]);
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

/// A contiguous, growable list.
///
/// Any operation that may reallocate (`push` at capacity, `reserve`,
/// `shrink_to_fit`, `take`) invalidates pointers obtained from
/// [`Contiguous::as_ptr`]. Cursors and iterators borrow the list, so they
/// cannot be held across those calls.
pub struct ArrayList<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    len: usize,
}

impl<T> ArrayList<T> {
    /// An empty list with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Builds a list whose length and capacity both equal the iterator's
    /// reported length.
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

impl<T, A: Allocator> ArrayList<T, A> {
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new_in(alloc: A) -> Self {
        Self::with_capacity_in(Self::DEFAULT_CAPACITY, alloc)
    }

    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        ArrayList {
            buf: RawBuf::with_capacity_in(capacity, alloc),
            len: 0,
        }
    }

    pub fn from_exact_iter_in(
        values: impl IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
        alloc: A,
    ) -> Self {
        let values = values.into_iter();
        let len = values.len();
        let mut list = Self::with_capacity_in(len, alloc);
        for value in values.take(len) {
            list.push(value);
        }
        list
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Appends `value`.
    ///
    /// When the list is full the capacity doubles first (from zero it
    /// becomes one). Growing moves every live element to a new block.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_one();
        }
        // SAFETY: `len < capacity`, so slot `len` is allocated and not live.
        unsafe { self.buf.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live and is no longer counted as such.
        Some(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        let live = self.len;
        self.len = 0;
        // SAFETY: `[0, live)` was live and is no longer counted as such.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), live)) };
    }

    /// Grows, by doubling, until `additional` more elements fit.
    pub fn reserve(&mut self, additional: usize) {
        let required = self
            .len
            .checked_add(additional)
            .expect("capacity overflow");
        if required <= self.capacity() {
            return;
        }
        let mut new_cap = self.capacity();
        while new_cap < required {
            new_cap = next_capacity(new_cap);
        }
        self.buf.grow_to(new_cap);
    }

    /// Reallocates so that `capacity() == len()`. Does nothing if that
    /// already holds.
    pub fn shrink_to_fit(&mut self) {
        if self.len < self.capacity() {
            self.buf.shrink_to(self.len);
        }
    }

    /// Moves the storage out, leaving `self` with no elements and no
    /// capacity.
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        ArrayList {
            buf: self.buf.take(),
            len: core::mem::take(&mut self.len),
        }
    }

    /// A new list holding `op(element)` for each element, in order.
    ///
    /// The result is accumulated with [`push`](Self::push) into a list
    /// pre-sized to `len()`.
    pub fn map<U, F>(&self, mut op: F) -> ArrayList<U, A>
    where
        A: Clone,
        F: FnMut(&T) -> U,
    {
        let mut mapped = ArrayList::with_capacity_in(self.len, self.allocator().clone());
        for value in self.iter() {
            mapped.push(op(value));
        }
        mapped
    }

    /// A new list holding clones of the elements matching `pred`, in their
    /// original order, with no spare capacity.
    pub fn filter<P>(&self, mut pred: P) -> Self
    where
        T: Clone,
        A: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut filtered = Self::with_capacity_in(self.len, self.allocator().clone());
        for value in self.iter() {
            if pred(value) {
                filtered.push(value.clone());
            }
        }
        filtered.shrink_to_fit();
        filtered
    }

    #[cold]
    fn grow_one(&mut self) {
        debug_assert_eq!(self.len, self.capacity());
        self.buf.grow_to(next_capacity(self.capacity()));
    }
}

/// Doubling, with a floor of one so that an empty list can still grow.
fn next_capacity(cap: usize) -> usize {
    cap.checked_mul(2).expect("capacity overflow").max(1)
}

impl<T, A: Allocator> private::Sealed for ArrayList<T, A> {}

impl<T, A: Allocator> Contiguous for ArrayList<T, A> {
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

impl<T, A: Allocator> Drop for ArrayList<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for ArrayList<T, A> {
    fn clone(&self) -> Self {
        Self::from_exact_iter_in(self.iter().cloned(), self.allocator().clone())
    }
}

impl<T, A: Allocator + Default> Default for ArrayList<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_exact_iter(values)
    }
}

impl<T: Clone> From<&[T]> for ArrayList<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T, A: Allocator> Extend<T> for ArrayList<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        self.reserve(values.size_hint().0);
        for value in values {
            self.push(value);
        }
    }
}

impl<T, A: Allocator + Default> FromIterator<T> for ArrayList<T, A> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::default();
        list.extend(values);
        list
    }
}

impl<T, A: Allocator> Index<usize> for ArrayList<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, A: Allocator> IndexMut<usize> for ArrayList<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for ArrayList<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, A, B> PartialEq<ArrayList<U, B>> for ArrayList<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &ArrayList<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for ArrayList<T, A> {}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for ArrayList<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for ArrayList<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, A: Allocator> AsRef<[T]> for ArrayList<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for ArrayList<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a ArrayList<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut ArrayList<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
