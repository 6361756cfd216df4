//! Error types for [`DynVec`](crate::DynVec).

use thiserror::Error;

/// Shorthand for results returned by fallible [`DynVec`](crate::DynVec) operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by operations on [`DynVec`](crate::DynVec).
///
/// A failed operation never leaves a partial mutation behind: bounds are
/// checked before any growth or shifting happens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// [`pop`](crate::DynVec::pop) was called on an empty vector.
    #[error("cannot pop from an empty vector")]
    EmptyContainer,

    /// An element index was not below the current length.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A position passed to [`insert`](crate::DynVec::insert) or
    /// [`erase`](crate::DynVec::erase) lies outside the range the operation accepts.
    #[error("position {offset} out of range for length {len}")]
    IteratorOutOfRange { offset: isize, len: usize },
}
