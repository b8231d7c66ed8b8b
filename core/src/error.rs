//! Error types for checked container access.

use thiserror::Error;

/// Error returned by the checked accessors of [`Array`](crate::Array) and
/// [`ArrayList`](crate::ArrayList).
///
/// Out-of-memory is not represented here: allocation failure aborts through
/// `handle_alloc_error`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `index` was not below the number of live elements.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
