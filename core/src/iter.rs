#![allow(unsafe_code)]

//! Random-access cursors over contiguous storage.
//!
//! A [`Cursor`] is a typed position inside a block owned by some container.
//! It is a plain pointer with a direction and a borrow lifetime attached:
//!
//! ```text
//!            begin                end
//! Forward:     │                   │
//!              ▼                   ▼
//!            [ a | b | c | d ] (one past)
//!        ▲                 ▲
//!        │                 │
//! Reverse: rend          rbegin
//!  (one before)
//! ```
//!
//! Cursors never check bounds. Moving one is always safe (positions outside
//! the block are computed with wrapping arithmetic), but dereferencing is
//! `unsafe`: the caller must know the cursor sits on a live element.
//!
//! [`Iter`] and [`IterMut`] pair two cursors into a `[first, last)` range and
//! drive them as ordinary Rust iterators. The containers only hand out ranges
//! covering their live elements, so iterating one is safe.
//!
//! # Invalidation
//!
//! Every cursor and iterator borrows its container. Anything that may move the
//! storage (`push` past capacity, `shrink_to_fit`, `reserve`, `take`, drop)
//! needs `&mut` or ownership of the container and therefore cannot overlap
//! with a live cursor. Raw pointers taken from a cursor carry no such
//! protection.

use core::{fmt, iter::FusedIterator, marker::PhantomData};

mod private {
    pub trait Sealed {}
}

/// Step direction of a cursor. Sealed: only [`Forward`] and [`Reverse`] exist.
pub trait Direction: private::Sealed + Copy + 'static {
    /// Signed element offset of a single step.
    const STEP: isize;

    #[doc(hidden)]
    fn bounds<T>(base: *const T, len: usize) -> (*const T, *const T);
}

/// Walks toward increasing addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Forward;

/// Walks toward decreasing addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reverse;

impl private::Sealed for Forward {}
impl private::Sealed for Reverse {}

impl Direction for Forward {
    const STEP: isize = 1;

    fn bounds<T>(base: *const T, len: usize) -> (*const T, *const T) {
        (base, base.wrapping_add(len))
    }
}

impl Direction for Reverse {
    const STEP: isize = -1;

    fn bounds<T>(base: *const T, len: usize) -> (*const T, *const T) {
        // First is the last live slot, last is one before the first slot.
        (base.wrapping_add(len).wrapping_sub(1), base.wrapping_sub(1))
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Read-only cursor.
pub struct Cursor<'a, T, D: Direction = Forward> {
    ptr: *const T,
    _marker: PhantomData<(&'a T, D)>,
}

/// Read-only cursor walking backwards.
pub type ReverseCursor<'a, T> = Cursor<'a, T, Reverse>;

impl<'a, T, D: Direction> Cursor<'a, T, D> {
    /// Wraps a raw position. Any pointer is accepted; only [`get`](Self::get)
    /// cares whether it is valid.
    #[inline(always)]
    pub const fn from_ptr(ptr: *const T) -> Self {
        Cursor {
            ptr,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Moves one element in this cursor's direction (`++it`).
    #[inline(always)]
    pub fn inc(&mut self) -> &mut Self {
        self.ptr = self.ptr.wrapping_offset(D::STEP);
        self
    }

    /// Moves one element and returns the position before the move (`it++`).
    #[inline(always)]
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.inc();
        prev
    }

    /// Moves one element against this cursor's direction (`--it`).
    #[inline(always)]
    pub fn dec(&mut self) -> &mut Self {
        self.ptr = self.ptr.wrapping_offset(-D::STEP);
        self
    }

    /// Moves `n` elements in this cursor's direction. Negative `n` moves back.
    #[inline(always)]
    pub fn advance(&mut self, n: isize) -> &mut Self {
        self.ptr = self.ptr.wrapping_offset(n.wrapping_mul(D::STEP));
        self
    }

    /// Number of steps needed to get from `self` to `other`.
    pub fn distance_to(&self, other: &Self) -> isize {
        distance::<T>(self.ptr as usize, other.ptr as usize) * D::STEP
    }

    /// Dereferences the cursor.
    ///
    /// # Safety
    ///
    /// The cursor must point at a live element of the container it was
    /// obtained from. End and before-begin sentinels are never valid.
    #[inline(always)]
    pub unsafe fn get(&self) -> &'a T {
        // SAFETY: upheld by the caller.
        unsafe { &*self.ptr }
    }
}

impl<T, D: Direction> Clone for Cursor<'_, T, D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, D: Direction> Copy for Cursor<'_, T, D> {}

impl<T, D: Direction> PartialEq for Cursor<'_, T, D> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.ptr, other.ptr)
    }
}
impl<T, D: Direction> Eq for Cursor<'_, T, D> {}

impl<T, D: Direction> fmt::Debug for Cursor<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.ptr).finish()
    }
}

// Same semantics as `&'a T`.
unsafe impl<T: Sync, D: Direction> Send for Cursor<'_, T, D> {}
unsafe impl<T: Sync, D: Direction> Sync for Cursor<'_, T, D> {}

// =============================================================================
// CursorMut
// =============================================================================

/// Mutable cursor.
///
/// Copyable like [`Cursor`]. Two copies may point at the same slot, which is
/// why every access through it is `unsafe`.
pub struct CursorMut<'a, T, D: Direction = Forward> {
    ptr: *mut T,
    _marker: PhantomData<(&'a mut T, D)>,
}

/// Mutable cursor walking backwards.
pub type ReverseCursorMut<'a, T> = CursorMut<'a, T, Reverse>;

impl<'a, T, D: Direction> CursorMut<'a, T, D> {
    #[inline(always)]
    pub const fn from_ptr(ptr: *mut T) -> Self {
        CursorMut {
            ptr,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr
    }

    #[inline(always)]
    pub fn inc(&mut self) -> &mut Self {
        self.ptr = self.ptr.wrapping_offset(D::STEP);
        self
    }

    #[inline(always)]
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.inc();
        prev
    }

    #[inline(always)]
    pub fn dec(&mut self) -> &mut Self {
        self.ptr = self.ptr.wrapping_offset(-D::STEP);
        self
    }

    #[inline(always)]
    pub fn advance(&mut self, n: isize) -> &mut Self {
        self.ptr = self.ptr.wrapping_offset(n.wrapping_mul(D::STEP));
        self
    }

    pub fn distance_to(&self, other: &Self) -> isize {
        distance::<T>(self.ptr as usize, other.ptr as usize) * D::STEP
    }

    /// Read-only view of the same position.
    pub fn as_cursor(&self) -> Cursor<'a, T, D> {
        Cursor::from_ptr(self.ptr)
    }

    /// # Safety
    ///
    /// Same as [`Cursor::get`], and no mutable reference to the slot may be
    /// alive.
    #[inline(always)]
    pub unsafe fn get(&self) -> &'a T {
        // SAFETY: upheld by the caller.
        unsafe { &*self.ptr }
    }

    /// # Safety
    ///
    /// Same as [`Cursor::get`], and no other reference to the slot may be
    /// alive while the returned one is.
    #[inline(always)]
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn get_mut(&self) -> &'a mut T {
        // SAFETY: upheld by the caller.
        unsafe { &mut *self.ptr }
    }

    /// Assigns through the cursor (`*it = value`). The previous value is
    /// dropped.
    ///
    /// # Safety
    ///
    /// Same as [`get_mut`](Self::get_mut).
    #[inline(always)]
    pub unsafe fn write(&self, value: T) {
        // SAFETY: upheld by the caller.
        unsafe { *self.ptr = value };
    }
}

impl<T, D: Direction> Clone for CursorMut<'_, T, D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, D: Direction> Copy for CursorMut<'_, T, D> {}

impl<T, D: Direction> PartialEq for CursorMut<'_, T, D> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.ptr, other.ptr)
    }
}
impl<T, D: Direction> Eq for CursorMut<'_, T, D> {}

impl<T, D: Direction> fmt::Debug for CursorMut<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.ptr).finish()
    }
}

impl<'a, T, D: Direction> From<CursorMut<'a, T, D>> for Cursor<'a, T, D> {
    fn from(cursor: CursorMut<'a, T, D>) -> Self {
        cursor.as_cursor()
    }
}

// Same semantics as `&'a mut T`.
unsafe impl<T: Send, D: Direction> Send for CursorMut<'_, T, D> {}
unsafe impl<T: Sync, D: Direction> Sync for CursorMut<'_, T, D> {}

fn distance<T>(from: usize, to: usize) -> isize {
    match size_of::<T>() {
        0 => 0,
        size => (to.wrapping_sub(from) as isize) / size as isize,
    }
}

// =============================================================================
// Iter
// =============================================================================

/// A `[first, last)` range of read-only cursors, iterated as `&'a T`.
pub struct Iter<'a, T, D: Direction = Forward> {
    first: Cursor<'a, T, D>,
    last: Cursor<'a, T, D>,
}

impl<'a, T, D: Direction> Iter<'a, T, D> {
    /// Range over `len` live elements starting at `base`, in direction `D`.
    ///
    /// # Safety
    ///
    /// `base..base + len` must be live elements borrowed for `'a`.
    pub(crate) unsafe fn over(base: *const T, len: usize) -> Self {
        let (first, last) = D::bounds(base, len);
        Iter {
            first: Cursor::from_ptr(first),
            last: Cursor::from_ptr(last),
        }
    }

    /// Builds a range from two cursors.
    ///
    /// # Safety
    ///
    /// `last` must be reachable from `first` by repeated [`Cursor::inc`], and
    /// every position before `last` must be a live element for `'a`.
    pub unsafe fn from_cursors(first: Cursor<'a, T, D>, last: Cursor<'a, T, D>) -> Self {
        Iter { first, last }
    }

    /// The remaining `(first, last)` bounds.
    pub fn cursors(&self) -> (Cursor<'a, T, D>, Cursor<'a, T, D>) {
        (self.first, self.last)
    }
}

impl<'a, T, D: Direction> Iterator for Iter<'a, T, D> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.first == self.last {
            return None;
        }
        // SAFETY: positions in `[first, last)` are live by construction.
        let item = unsafe { self.first.get() };
        self.first.inc();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.distance_to(&self.last) as usize;
        (len, Some(len))
    }
}

impl<'a, T, D: Direction> DoubleEndedIterator for Iter<'a, T, D> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.first == self.last {
            return None;
        }
        self.last.dec();
        // SAFETY: `last` now sits on the final position of a non-empty range.
        Some(unsafe { self.last.get() })
    }
}

impl<T, D: Direction> ExactSizeIterator for Iter<'_, T, D> {}
impl<T, D: Direction> FusedIterator for Iter<'_, T, D> {}

impl<T, D: Direction> Clone for Iter<'_, T, D> {
    fn clone(&self) -> Self {
        Iter {
            first: self.first,
            last: self.last,
        }
    }
}

impl<T: fmt::Debug, D: Direction> fmt::Debug for Iter<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&DebugList(self.clone())).finish()
    }
}

struct DebugList<I>(I);

impl<I> fmt::Debug for DebugList<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

// =============================================================================
// IterMut
// =============================================================================

/// A `[first, last)` range of mutable cursors, iterated as `&'a mut T`.
pub struct IterMut<'a, T, D: Direction = Forward> {
    first: CursorMut<'a, T, D>,
    last: CursorMut<'a, T, D>,
}

impl<'a, T, D: Direction> IterMut<'a, T, D> {
    /// # Safety
    ///
    /// `base..base + len` must be live elements exclusively borrowed for `'a`.
    pub(crate) unsafe fn over(base: *mut T, len: usize) -> Self {
        let (first, last) = D::bounds(base.cast_const(), len);
        IterMut {
            first: CursorMut::from_ptr(first.cast_mut()),
            last: CursorMut::from_ptr(last.cast_mut()),
        }
    }

    /// # Safety
    ///
    /// As [`Iter::from_cursors`], and nothing else may access the range for
    /// `'a`.
    pub unsafe fn from_cursors(first: CursorMut<'a, T, D>, last: CursorMut<'a, T, D>) -> Self {
        IterMut { first, last }
    }

    /// Gives up the range and returns its remaining bounds.
    pub fn into_cursors(self) -> (CursorMut<'a, T, D>, CursorMut<'a, T, D>) {
        (self.first, self.last)
    }
}

impl<'a, T, D: Direction> Iterator for IterMut<'a, T, D> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.first == self.last {
            return None;
        }
        // SAFETY: live by construction; each position is yielded once.
        let item = unsafe { self.first.get_mut() };
        self.first.inc();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.distance_to(&self.last) as usize;
        (len, Some(len))
    }
}

impl<'a, T, D: Direction> DoubleEndedIterator for IterMut<'a, T, D> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.first == self.last {
            return None;
        }
        self.last.dec();
        // SAFETY: as in `next`.
        Some(unsafe { self.last.get_mut() })
    }
}

impl<T, D: Direction> ExactSizeIterator for IterMut<'_, T, D> {}
impl<T, D: Direction> FusedIterator for IterMut<'_, T, D> {}

impl<T, D: Direction> fmt::Debug for IterMut<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("first", &self.first)
            .field("last", &self.last)
            .finish()
    }
}
