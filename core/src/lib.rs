#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Contiguous containers on raw, allocator-backed storage.
//!
//! - [`Array`]: fixed length, decided at construction.
//! - [`ArrayList`]: growable, with explicit capacity management.
//! - [`iter`]: unchecked random-access cursors and the iterators built on
//!   them, forward and reverse.
//!
//! Both containers take an [`Allocator`] type parameter (defaulting to
//! [`Global`]) and share their read, traversal and functional surface
//! through [`Contiguous`].

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod array;
pub mod array_list;
pub mod error;
pub mod iter;
mod raw;
pub mod traits;

pub use allocator_api2::alloc::{Allocator, Global};
pub use array::Array;
pub use array_list::ArrayList;
pub use error::{Error, Result};
pub use iter::{
    Cursor, CursorMut, Direction, Forward, Iter, IterMut, Reverse, ReverseCursor, ReverseCursorMut,
};
pub use traits::Contiguous;

static_assertions::assert_eq_size!(Array<u64>, [usize; 3]);
static_assertions::assert_eq_size!(ArrayList<u64>, [usize; 3]);
static_assertions::assert_eq_size!(Cursor<'static, u64>, usize);
static_assertions::assert_impl_all!(ArrayList<u64>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(ArrayList<core::cell::Cell<u64>>: Sync);
