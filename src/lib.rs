//! ## Intro
//!
//! A contiguous, growable vector for `Copy` elements, written from scratch
//! with no `unsafe`.
//!
//! [`DynVec`] owns one heap buffer. It never holds fewer than
//! [`DynVec::MIN_CAPACITY`] slots, and it doubles the buffer whenever an append
//! or insertion finds it full, which keeps appends amortized O(1).
//!
//! ```
//! # use dynvec::{DynVec, dynvec};
//! let mut vec: DynVec<u32> = dynvec![1, 2, 3];
//! assert_eq!(vec.capacity(), 5);
//!
//! vec.extend([4, 5, 6]);
//! assert_eq!(vec.capacity(), 10);
//! assert_eq!(vec.to_string(), "[1, 2, 3, 4, 5, 6]");
//! ```
//!
//! ## Errors instead of panics
//!
//! Operations that can fail on bad input return [`Error`]:
//!
//! | Operation | Error |
//! |-----------|-------|
//! | [`pop`](DynVec::pop) on an empty vector | [`Error::EmptyContainer`] |
//! | [`get`](DynVec::get) / [`get_mut`](DynVec::get_mut) with `index >= len` | [`Error::IndexOutOfRange`] |
//! | [`insert`](DynVec::insert) past the end, [`erase`](DynVec::erase) at or past the end | [`Error::IteratorOutOfRange`] |
//!
//! A failed operation leaves the vector exactly as it was. Plain indexing
//! (`vec[i]`) panics, like slices do.
//!
//! ## Cursors
//!
//! [`Cursor`] and [`CursorMut`] are random-access positions over the live
//! elements. They dereference to the element under them, step forward, compare
//! with each other (also across the two kinds) and a read-only pair can be
//! subtracted to get a signed distance. A `CursorMut` converts into a `Cursor`,
//! never the other way round.
//!
//! Cursors borrow the vector, so the reallocating operations cannot be called
//! while one is alive. To pass a place to [`insert`](DynVec::insert) or
//! [`erase`](DynVec::erase), detach it into a [`Position`] first:
//!
//! ```
//! # use dynvec::dynvec;
//! let mut vec = dynvec![1, 2, 3, 4, 5];
//!
//! let pos = (vec.begin() + 2).to_position();
//! vec.insert(pos, 99).unwrap();
//! assert_eq!(vec, [1, 2, 99, 3, 4, 5]);
//!
//! vec.erase(pos).unwrap();
//! assert_eq!(vec, [1, 2, 3, 4, 5]);
//! ```
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! [`DynVec`] implements [`serde::Serialize`] and [`serde::Deserialize`] as a sequence.
//!
//! ### `std`
//!
//! `DynVec<u8>` implements [`std::io::Write`] by appending.
//!
//! [`serde::Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`serde::Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
//! [`std::io::Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod cursor;
mod error;

pub mod dyn_vec;

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "std")]
mod std_io;

pub use cursor::{Cursor, CursorMut, Position};
#[doc(inline)]
pub use dyn_vec::DynVec;
pub use dyn_vec::IntoIter;
pub use error::{Error, Result};
