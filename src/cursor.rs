//! Random-access cursors over the live elements of a [`DynVec`](crate::DynVec).
//!
//! A cursor borrows the vector it was obtained from. Every operation that may
//! reallocate (`push`, `insert`, `reserve`, `shrink_to_fit`, ...) takes
//! `&mut DynVec`, so a cursor can never be used across a reallocation: the
//! borrow checker rejects it.
//!
//! To name a place for [`insert`](crate::DynVec::insert) or
//! [`erase`](crate::DynVec::erase), turn a cursor into a [`Position`], which
//! keeps only the offset and releases the borrow.

use core::{
    fmt,
    iter::FusedIterator,
    mem,
    ops::{Add, AddAssign, Deref, DerefMut, Sub},
    ptr,
};

#[inline]
fn signed(offset: usize) -> isize {
    isize::try_from(offset).unwrap_or(isize::MAX)
}

/// A logical offset into a [`DynVec`](crate::DynVec), detached from any borrow.
///
/// The offset is signed: arithmetic may move it before the first element,
/// in which case [`insert`](crate::DynVec::insert) and
/// [`erase`](crate::DynVec::erase) reject it. Arithmetic saturates at the
/// bounds of `isize`.
///
/// # Examples
///
/// ```
/// # use dynvec::{dynvec, DynVec, Position};
/// let mut vec: DynVec<i32> = dynvec![1, 2, 3];
///
/// let pos = vec.begin().to_position() + 1;
/// vec.insert(pos, 7).unwrap();
/// assert_eq!(vec, [1, 7, 2, 3]);
///
/// assert!(vec.erase(Position::new(-1)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(isize);

impl Position {
    /// Creates a position at the given signed offset from the first element.
    #[inline]
    pub const fn new(offset: isize) -> Self {
        Self(offset)
    }

    /// Returns the signed offset from the first element.
    #[inline]
    pub const fn offset(self) -> isize {
        self.0
    }

    /// Converts the offset into an index, if it lies within `0..=bound`.
    #[inline]
    pub(crate) fn to_index(self, bound: usize) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|&index| index <= bound)
    }
}

impl From<usize> for Position {
    #[inline]
    fn from(index: usize) -> Self {
        Self(signed(index))
    }
}

impl<T> From<Cursor<'_, T>> for Position {
    #[inline]
    fn from(cursor: Cursor<'_, T>) -> Self {
        Self(signed(cursor.offset))
    }
}

impl<T> From<CursorMut<'_, T>> for Position {
    #[inline]
    fn from(cursor: CursorMut<'_, T>) -> Self {
        Self(signed(cursor.offset))
    }
}

impl Add<isize> for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: isize) -> Position {
        Position(self.0.saturating_add(rhs))
    }
}

impl Sub<isize> for Position {
    type Output = Position;

    #[inline]
    fn sub(self, rhs: isize) -> Position {
        Position(self.0.saturating_sub(rhs))
    }
}

/// A read-only cursor into a [`DynVec`](crate::DynVec).
///
/// Obtained from [`begin`](crate::DynVec::begin) and [`end`](crate::DynVec::end),
/// or by converting a [`CursorMut`]. It is `Copy`, dereferences to the element
/// it points at and iterates forward over the remaining elements. Stepping
/// always moves the cursor, so there is no reverse iteration; walk
/// [`as_slice`](crate::DynVec::as_slice) backwards instead.
///
/// # Examples
///
/// ```
/// # use dynvec::{dynvec, DynVec};
/// let vec: DynVec<i32> = dynvec![10, 20, 30];
///
/// let mut cursor = vec.begin();
/// assert_eq!(*cursor, 10);
///
/// cursor.advance();
/// assert_eq!(*cursor, 20);
///
/// let last = vec.begin() + 2;
/// assert_eq!(*last, 30);
/// assert_eq!(last - vec.begin(), 2);
/// assert_eq!(vec.end() - vec.begin(), 3);
/// ```
pub struct Cursor<'a, T> {
    rest: &'a [T],
    offset: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// `live` must be the full run of live elements, `offset <= live.len()`.
    #[inline]
    pub(crate) fn new(live: &'a [T], offset: usize) -> Self {
        Self {
            rest: &live[offset..],
            offset,
        }
    }

    /// Returns the offset of this cursor from the first element.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Consumes the cursor, returning its detached [`Position`] and
    /// releasing the borrow of the vector.
    #[inline]
    pub fn to_position(self) -> Position {
        Position::from(self)
    }

    /// Returns `true` if there is no element under the cursor.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Returns the element under the cursor, or `None` at the end.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.rest.first()
    }

    /// Moves the cursor one element forward.
    ///
    /// # Panics
    /// Panics if the cursor is already at the end.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    #[inline]
    fn addr(&self) -> *const T {
        self.rest.as_ptr()
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match self.rest.first() {
            Some(value) => value,
            None => panic!("cannot dereference the end cursor"),
        }
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    #[inline]
    fn add_assign(&mut self, n: usize) {
        assert!(n <= self.rest.len(), "cannot advance a cursor past the end");
        self.rest = &self.rest[n..];
        self.offset += n;
    }
}

impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: usize) -> Self {
        self += n;
        self
    }
}

impl<T> Sub<Cursor<'_, T>> for Cursor<'_, T> {
    type Output = isize;

    /// Signed count of positions from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Cursor<'_, T>) -> isize {
        signed(self.offset) - signed(rhs.offset)
    }
}

impl<T> PartialEq<Cursor<'_, T>> for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Cursor<'_, T>) -> bool {
        ptr::eq(self.addr(), other.addr()) && self.offset == other.offset
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialEq<CursorMut<'_, T>> for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &CursorMut<'_, T>) -> bool {
        ptr::eq(self.addr(), other.addr()) && self.offset == other.offset
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let (first, rest) = self.rest.split_first()?;
        self.rest = rest;
        self.offset += 1;
        Some(first)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len(), Some(self.rest.len()))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("rest", &self.rest)
            .finish()
    }
}

/// A mutable cursor into a [`DynVec`](crate::DynVec).
///
/// Obtained from [`begin_mut`](crate::DynVec::begin_mut),
/// [`end_mut`](crate::DynVec::end_mut), [`insert`](crate::DynVec::insert) and
/// [`erase`](crate::DynVec::erase). It converts into a [`Cursor`] but not the
/// other way round.
///
/// # Examples
///
/// ```
/// # use dynvec::{dynvec, DynVec};
/// let mut vec: DynVec<i32> = dynvec![1, 2, 3];
///
/// let mut cursor = vec.begin_mut();
/// *cursor += 10;
/// cursor.advance();
/// *cursor *= 5;
///
/// assert_eq!(vec, [11, 10, 3]);
/// ```
pub struct CursorMut<'a, T> {
    rest: &'a mut [T],
    offset: usize,
}

impl<'a, T> CursorMut<'a, T> {
    /// `live` must be the full run of live elements, `offset <= live.len()`.
    #[inline]
    pub(crate) fn new(live: &'a mut [T], offset: usize) -> Self {
        Self {
            rest: &mut live[offset..],
            offset,
        }
    }

    /// Returns the offset of this cursor from the first element.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Consumes the cursor, returning its detached [`Position`] and
    /// releasing the borrow of the vector.
    #[inline]
    pub fn to_position(self) -> Position {
        Position::from(self)
    }

    /// Returns `true` if there is no element under the cursor.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Returns the element under the cursor, or `None` at the end.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.rest.first()
    }

    /// Returns the element under the cursor mutably, or `None` at the end.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.rest.first_mut()
    }

    /// Consumes the cursor, returning the element under it for the whole borrow.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::{dynvec, DynVec};
    /// let mut vec: DynVec<i32> = dynvec![1, 2, 3];
    ///
    /// let slot = vec.insert(1usize, 0).unwrap().into_mut().unwrap();
    /// *slot = 9;
    /// assert_eq!(vec, [1, 9, 2, 3]);
    /// ```
    #[inline]
    pub fn into_mut(self) -> Option<&'a mut T> {
        self.rest.first_mut()
    }

    /// Reborrows this cursor as a read-only [`Cursor`] at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            rest: &*self.rest,
            offset: self.offset,
        }
    }

    /// Moves the cursor one element forward.
    ///
    /// # Panics
    /// Panics if the cursor is already at the end.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    #[inline]
    fn addr(&self) -> *const T {
        self.rest.as_ptr()
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    #[inline]
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor {
            rest: cursor.rest,
            offset: cursor.offset,
        }
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match self.rest.first() {
            Some(value) => value,
            None => panic!("cannot dereference the end cursor"),
        }
    }
}

impl<T> DerefMut for CursorMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        match self.rest.first_mut() {
            Some(value) => value,
            None => panic!("cannot dereference the end cursor"),
        }
    }
}

impl<T> AddAssign<usize> for CursorMut<'_, T> {
    #[inline]
    fn add_assign(&mut self, n: usize) {
        assert!(n <= self.rest.len(), "cannot advance a cursor past the end");
        let rest = mem::take(&mut self.rest);
        self.rest = &mut rest[n..];
        self.offset += n;
    }
}

impl<T> Add<usize> for CursorMut<'_, T> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: usize) -> Self {
        self += n;
        self
    }
}

impl<T> PartialEq<CursorMut<'_, T>> for CursorMut<'_, T> {
    #[inline]
    fn eq(&self, other: &CursorMut<'_, T>) -> bool {
        ptr::eq(self.addr(), other.addr()) && self.offset == other.offset
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T> PartialEq<Cursor<'_, T>> for CursorMut<'_, T> {
    #[inline]
    fn eq(&self, other: &Cursor<'_, T>) -> bool {
        ptr::eq(self.addr(), other.addr()) && self.offset == other.offset
    }
}

impl<'a, T> Iterator for CursorMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        // An emptied window must keep its address for comparisons.
        if self.rest.is_empty() {
            return None;
        }
        let (first, rest) = mem::take(&mut self.rest).split_first_mut()?;
        self.rest = rest;
        self.offset += 1;
        Some(first)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len(), Some(self.rest.len()))
    }
}

impl<T> ExactSizeIterator for CursorMut<'_, T> {}

impl<T> FusedIterator for CursorMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("offset", &self.offset)
            .field("rest", &self.rest)
            .finish()
    }
}
