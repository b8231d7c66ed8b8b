//! funcol - contiguous containers with functional helpers
//!
//! # Overview
//!
//! funcol provides two containers over manually managed, allocator-backed
//! storage, and the cursors used to walk them:
//!
//! - [`Array`]: a fixed-length block, sized once at construction
//! - [`ArrayList`]: a growable list with observable capacity
//! - [`Cursor`] / [`CursorMut`]: unchecked random-access positions, forward
//!   or [`Reverse`]
//!
//! # Quick Start
//!
//! ```
//! use funcol::{Array, ArrayList, Contiguous};
//!
//! let numbers = Array::from([10, 20, 30]);
//!
//! // Functional helpers never mutate the receiver
//! let mut sum = 0;
//! numbers.for_each(|n| sum += n);
//! assert_eq!(sum, 60);
//! assert_eq!(numbers.map(|n| n / 10), [1, 2, 3]);
//!
//! // Checked access reports the offending index
//! let err = numbers.at(3).unwrap_err();
//! assert_eq!(err.to_string(), "index 3 out of bounds for length 3");
//!
//! // Lists double their capacity when full
//! let mut list = ArrayList::new();
//! for i in 0..6 {
//!     list.push(i);
//! }
//! assert_eq!((list.len(), list.capacity()), (6, 10));
//! ```
//!
//! # Cursors
//!
//! Cursors mirror classic iterator pairs. Moving them is safe; dereferencing
//! is `unsafe` because nothing checks that they sit on a live element.
//!
//! ```
//! use funcol::{Array, Contiguous};
//!
//! let array = Array::from([1, 2, 3]);
//! let (mut it, end) = (array.rbegin(), array.rend());
//! let mut seen = Vec::new();
//! while it != end {
//!     // SAFETY: `it` is strictly between rbegin and rend.
//!     seen.push(unsafe { *it.get() });
//!     it.inc();
//! }
//! assert_eq!(seen, [3, 2, 1]);
//! ```
//!
//! # Allocators
//!
//! Storage comes from an [`Allocator`], [`Global`] by default. Any
//! `allocator-api2` allocator can be plugged in, e.g. a bump arena:
//!
//! ```
//! use bumpalo::Bump;
//! use funcol::{ArrayList, Contiguous};
//!
//! let arena = Bump::new();
//! let mut list = ArrayList::with_capacity_in(2, &arena);
//! list.extend(["a", "b", "c"]);
//! assert_eq!(list, ["a", "b", "c"]);
//! assert_eq!(list.capacity(), 4);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export the public API from funcol_core
pub use funcol_core::{
    Allocator, Array, ArrayList, Contiguous, Cursor, CursorMut, Direction, Error, Forward, Global,
    Iter, IterMut, Result, Reverse, ReverseCursor, ReverseCursorMut,
};

// Modules stay reachable for their less common items
pub use funcol_core::{array, array_list, error, iter, traits};
