#![allow(unsafe_code)]

use core::slice;

use crate::error::{Error, Result};
use crate::iter::{Cursor, CursorMut, Direction, Iter, IterMut, Reverse, ReverseCursor, ReverseCursorMut};

pub(crate) mod private {
    pub trait Sealed {}
}

/// Read and traversal surface shared by [`Array`](crate::Array) and
/// [`ArrayList`](crate::ArrayList).
///
/// Everything here is derived from two facts: where the first live element
/// is, and how many there are. The trait is sealed because the provided
/// methods trust both.
pub trait Contiguous: private::Sealed {
    type Elem;

    /// Pointer to the first element. Dangling but aligned when empty.
    ///
    /// Invalidated by anything that reallocates the storage.
    fn as_ptr(&self) -> *const Self::Elem;

    fn as_mut_ptr(&mut self) -> *mut Self::Elem;

    /// Number of live elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_slice(&self) -> &[Self::Elem] {
        // SAFETY: `[0, len)` is live and aligned.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    fn as_mut_slice(&mut self) -> &mut [Self::Elem] {
        let len = self.len();
        // SAFETY: as above, and we hold `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Checked access.
    fn at(&self, index: usize) -> Result<&Self::Elem> {
        self.as_slice().get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Checked mutable access.
    fn at_mut(&mut self, index: usize) -> Result<&mut Self::Elem> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    fn first(&self) -> Option<&Self::Elem> {
        self.as_slice().first()
    }

    fn last(&self) -> Option<&Self::Elem> {
        self.as_slice().last()
    }

    /// The element at index 0, unchecked.
    ///
    /// # Safety
    ///
    /// The container must not be empty.
    unsafe fn front(&self) -> &Self::Elem {
        debug_assert!(!self.is_empty());
        // SAFETY: upheld by the caller.
        unsafe { &*self.as_ptr() }
    }

    /// The element at index `len - 1`, unchecked.
    ///
    /// # Safety
    ///
    /// The container must not be empty.
    unsafe fn back(&self) -> &Self::Elem {
        debug_assert!(!self.is_empty());
        // SAFETY: upheld by the caller.
        unsafe { &*self.as_ptr().add(self.len() - 1) }
    }

    // --- Cursors ---

    fn begin(&self) -> Cursor<'_, Self::Elem> {
        self.iter().cursors().0
    }

    /// One-past-the-end sentinel.
    fn end(&self) -> Cursor<'_, Self::Elem> {
        self.iter().cursors().1
    }

    /// The last live element, walking backwards.
    fn rbegin(&self) -> ReverseCursor<'_, Self::Elem> {
        self.iter_rev().cursors().0
    }

    /// One-before-the-start sentinel.
    fn rend(&self) -> ReverseCursor<'_, Self::Elem> {
        self.iter_rev().cursors().1
    }

    /// `(begin, end)` as mutable cursors.
    ///
    /// Both are returned together because each borrows the container
    /// mutably.
    fn bounds_mut(&mut self) -> (CursorMut<'_, Self::Elem>, CursorMut<'_, Self::Elem>) {
        self.iter_mut().into_cursors()
    }

    /// `(rbegin, rend)` as mutable cursors.
    fn rbounds_mut(
        &mut self,
    ) -> (
        ReverseCursorMut<'_, Self::Elem>,
        ReverseCursorMut<'_, Self::Elem>,
    ) {
        self.iter_rev_mut().into_cursors()
    }

    // --- Iterators ---

    fn iter(&self) -> Iter<'_, Self::Elem> {
        // SAFETY: `[0, len)` is live for the borrow of `self`.
        unsafe { Iter::over(self.as_ptr(), self.len()) }
    }

    fn iter_mut(&mut self) -> IterMut<'_, Self::Elem> {
        let len = self.len();
        // SAFETY: as above, and we hold `&mut self`.
        unsafe { IterMut::over(self.as_mut_ptr(), len) }
    }

    fn iter_rev(&self) -> Iter<'_, Self::Elem, Reverse> {
        // SAFETY: `[0, len)` is live for the borrow of `self`.
        unsafe { Iter::over(self.as_ptr(), self.len()) }
    }

    fn iter_rev_mut(&mut self) -> IterMut<'_, Self::Elem, Reverse> {
        let len = self.len();
        // SAFETY: as above, and we hold `&mut self`.
        unsafe { IterMut::over(self.as_mut_ptr(), len) }
    }

    // --- Functional operations ---

    /// Calls `f` on every element in index order.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Self::Elem),
    {
        for value in self.iter() {
            f(value);
        }
    }

    /// Writes `op(element)` for every element, in order, through `out`, and
    /// returns `out` advanced past the last write.
    ///
    /// Each write is an assignment: the destination's previous value is
    /// dropped.
    ///
    /// # Safety
    ///
    /// `out` and the `len() - 1` positions after it must be live elements
    /// that nothing else accesses during the call.
    unsafe fn map_to<'o, U, D, F>(&self, mut out: CursorMut<'o, U, D>, mut op: F) -> CursorMut<'o, U, D>
    where
        D: Direction,
        F: FnMut(&Self::Elem) -> U,
    {
        for value in self.iter() {
            // SAFETY: upheld by the caller.
            unsafe { out.post_inc().write(op(value)) };
        }
        out
    }

    /// Bounded [`map_to`](Self::map_to): writes `min(len(), out.len())`
    /// transformed elements into `out` and returns how many were written.
    fn map_to_range<U, D, F>(&self, out: IterMut<'_, U, D>, mut op: F) -> usize
    where
        D: Direction,
        F: FnMut(&Self::Elem) -> U,
    {
        let mut written = 0;
        for (slot, value) in out.zip(self.iter()) {
            *slot = op(value);
            written += 1;
        }
        written
    }
}
