#![allow(unsafe_code)]

//! Raw, allocator-backed storage for a contiguous run of `T`.
//!
//! `RawBuf` only knows about capacity. It never reads, writes or drops
//! elements; tracking which slots are live is the owning container's job.
//!
//! A zero capacity is represented by a dangling, well-aligned pointer and
//! never touches the allocator.

use core::{alloc::Layout, marker::PhantomData, ptr::NonNull};

use alloc::alloc::handle_alloc_error;
use allocator_api2::alloc::Allocator;

pub(crate) struct RawBuf<T, A: Allocator> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T, A: Allocator> RawBuf<T, A> {
    /// Storage with no capacity. Does not allocate.
    pub(crate) fn new_in(alloc: A) -> Self {
        const { assert!(size_of::<T>() != 0, "zero-sized element types are not supported") };
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Storage for exactly `cap` elements, none of them live.
    pub(crate) fn with_capacity_in(cap: usize, alloc: A) -> Self {
        let mut buf = Self::new_in(alloc);
        if cap > 0 {
            let layout = Self::layout(cap);
            buf.ptr = match buf.alloc.allocate(layout) {
                Ok(ptr) => ptr.cast(),
                Err(_) => handle_alloc_error(layout),
            };
            buf.cap = cap;
        }
        buf
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Moves the block into a larger one of `new_cap` slots.
    ///
    /// The first `capacity()` slots are carried over bitwise, so whatever was
    /// live stays live at the same index. The old block is released.
    pub(crate) fn grow_to(&mut self, new_cap: usize) {
        assert!(new_cap >= self.cap);
        if new_cap == self.cap {
            return;
        }
        tracing::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            "growing storage"
        );

        let new_layout = Self::layout(new_cap);
        let result = if self.cap == 0 {
            self.alloc.allocate(new_layout)
        } else {
            // SAFETY: `ptr` came from `self.alloc` with `layout(cap)`, and the
            // new layout has the same alignment and a larger size.
            unsafe {
                self.alloc
                    .grow(self.ptr.cast(), Self::layout(self.cap), new_layout)
            }
        };
        self.ptr = match result {
            Ok(ptr) => ptr.cast(),
            Err(_) => handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }

    /// Moves the block into a smaller one of `new_cap` slots.
    ///
    /// Slots at or past `new_cap` must not be live. Shrinking to zero releases
    /// the block entirely.
    pub(crate) fn shrink_to(&mut self, new_cap: usize) {
        if new_cap >= self.cap {
            return;
        }
        tracing::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            "shrinking storage"
        );

        let old_layout = Self::layout(self.cap);
        if new_cap == 0 {
            // SAFETY: `ptr` came from `self.alloc` with `old_layout`.
            unsafe { self.alloc.deallocate(self.ptr.cast(), old_layout) };
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return;
        }

        let new_layout = Self::layout(new_cap);
        // SAFETY: `ptr` came from `self.alloc` with `old_layout`, and the new
        // layout has the same alignment and a smaller size.
        let result = unsafe { self.alloc.shrink(self.ptr.cast(), old_layout, new_layout) };
        self.ptr = match result {
            Ok(ptr) => ptr.cast(),
            Err(_) => handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }

    /// Swaps the storage out for an empty buffer on a clone of the allocator.
    pub(crate) fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let empty = Self::new_in(self.alloc.clone());
        core::mem::replace(self, empty)
    }

    fn layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("capacity overflow")
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        if self.cap > 0 {
            // SAFETY: a non-zero capacity means `ptr` is a live allocation
            // from `self.alloc` with exactly this layout.
            unsafe {
                self.alloc
                    .deallocate(self.ptr.cast(), Self::layout(self.cap))
            };
        }
    }
}

// The buffer owns its block exclusively, like `Box<[T]>`.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}
