use alloc::{boxed::Box, vec, vec::Vec};
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

use crate::cursor::{Cursor, CursorMut, Position};
use crate::error::{Error, Result};

/// A contiguous, growable vector of `Copy` elements.
///
/// The buffer is a single owned allocation of `capacity` slots, of which the
/// first `len` are live. The capacity never drops below
/// [`MIN_CAPACITY`](DynVec::MIN_CAPACITY) and doubles whenever an append or
/// insertion finds the buffer full, so appends are amortized O(1).
///
/// Unlike [`Vec`], the fallible operations return [`Error`] instead of
/// panicking, and positions are expressed through [`Cursor`] / [`CursorMut`].
///
/// # Examples
///
/// ```
/// use dynvec::{DynVec, dynvec};
///
/// let mut vec: DynVec<i32> = DynVec::new();
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 5);
///
/// for i in 1..=6 {
///     vec.push(i);
/// }
/// // The sixth push doubled the buffer.
/// assert_eq!(vec.capacity(), 10);
/// assert_eq!(vec, [1, 2, 3, 4, 5, 6]);
///
/// // Insert before the third element.
/// let pos = (vec.begin() + 2).to_position();
/// vec.insert(pos, 99).unwrap();
/// assert_eq!(vec.to_string(), "[1, 2, 99, 3, 4, 5, 6]");
///
/// assert!(vec.get(7).is_err());
/// ```
pub struct DynVec<T> {
    buf: Box<[T]>,
    len: usize,
}

/// Creates a [`DynVec`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
/// The capacity is the number of elements, but never less than
/// [`DynVec::MIN_CAPACITY`].
///
/// # Examples
///
/// ```
/// # use dynvec::{dynvec, DynVec};
/// let vec: DynVec<i32> = dynvec![];
/// assert!(vec.is_empty());
///
/// let vec: DynVec<u8> = dynvec![7; 3];
/// assert_eq!(vec, [7, 7, 7]);
///
/// let vec = dynvec![1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(vec.len(), 7);
/// assert_eq!(vec.capacity(), 7);
/// ```
#[macro_export]
macro_rules! dynvec {
    [] => { $crate::DynVec::new() };
    [$elem:expr; $n:expr] => { $crate::DynVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::DynVec::from([ $($item),+ ]) };
}

impl<T> DynVec<T> {
    /// The smallest capacity a `DynVec` ever has, including after
    /// [`shrink_to_fit`](DynVec::shrink_to_fit).
    pub const MIN_CAPACITY: usize = 5;

    /// Returns the number of elements in the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::dynvec;
    /// let vec = dynvec![1, 2, 3];
    /// assert_eq!(vec.len(), 3);
    /// ```
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::DynVec;
    /// let mut vec = DynVec::new();
    /// assert!(vec.is_empty());
    ///
    /// vec.push(1);
    /// assert!(!vec.is_empty());
    /// ```
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::DynVec;
    /// let vec = DynVec::<u64>::with_capacity(12);
    /// assert_eq!(vec.capacity(), 12);
    /// ```
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Sets the length to zero.
    ///
    /// The capacity is kept and the slots are left as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::dynvec;
    /// let mut vec = dynvec![1, 2, 3, 4, 5, 6];
    /// vec.clear();
    ///
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 6);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Extracts a slice containing the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Extracts a mutable slice containing the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::{dynvec, Error};
    /// let vec = dynvec![10, 20, 30];
    ///
    /// assert_eq!(vec.get(1), Ok(&20));
    /// assert_eq!(vec.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::dynvec;
    /// let mut vec = dynvec![10, 20, 30];
    ///
    /// *vec.get_mut(0).unwrap() = 5;
    /// assert_eq!(vec, [5, 20, 30]);
    /// assert!(vec.get_mut(3).is_err());
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a read-only cursor at the first element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Returns a read-only cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Returns a mutable cursor at the first element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), 0)
    }

    /// Returns a mutable cursor one past the last element.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self.as_mut_slice(), len)
    }
}

impl<T: Copy + Default> DynVec<T> {
    /// Constructs a new, empty `DynVec` with [`MIN_CAPACITY`](DynVec::MIN_CAPACITY) slots.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::DynVec;
    /// let vec = DynVec::<i32>::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), DynVec::<i32>::MIN_CAPACITY);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::MIN_CAPACITY)
    }

    /// Constructs a new, empty `DynVec` with room for `capacity` elements.
    ///
    /// The capacity is raised to [`MIN_CAPACITY`](DynVec::MIN_CAPACITY) if smaller.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::DynVec;
    /// assert_eq!(DynVec::<i32>::with_capacity(2).capacity(), 5);
    /// assert_eq!(DynVec::<i32>::with_capacity(20).capacity(), 20);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Self::alloc_buf(capacity.max(Self::MIN_CAPACITY)),
            len: 0,
        }
    }

    /// Creates a `DynVec` holding a copy of `slice`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::DynVec;
    /// let vec = DynVec::from_slice(&[1, 2, 3]);
    /// assert_eq!(vec, [1, 2, 3]);
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    pub fn from_slice(slice: &[T]) -> Self {
        let len = slice.len();
        let mut buf = Self::alloc_buf(len.max(Self::MIN_CAPACITY));
        buf[..len].copy_from_slice(slice);
        Self { buf, len }
    }

    /// Creates a `DynVec` holding `n` copies of `elem`.
    pub fn from_elem(elem: T, n: usize) -> Self {
        let mut vec = Self::with_capacity(n);
        vec.buf[..n].fill(elem);
        vec.len = n;
        vec
    }

    #[inline]
    fn alloc_buf(capacity: usize) -> Box<[T]> {
        vec![T::default(); capacity].into_boxed_slice()
    }

    /// Moves the live elements into a fresh buffer of exactly `new_capacity` slots.
    ///
    /// Every cursor into the old buffer is gone by now: this takes `&mut self`.
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        debug_assert!(new_capacity >= Self::MIN_CAPACITY);

        let mut buf = Self::alloc_buf(new_capacity);
        buf[..self.len].copy_from_slice(self.as_slice());
        self.buf = buf;
    }

    /// Makes sure the vector can hold at least `capacity` elements in total.
    ///
    /// Unlike [`Vec::reserve`], the argument is the total capacity, not the
    /// number of additional elements. If it is not larger than the current
    /// capacity, nothing happens; otherwise the buffer is reallocated to
    /// exactly `capacity` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::dynvec;
    /// let mut vec = dynvec![1, 2, 3];
    ///
    /// vec.reserve(4); // do nothing
    /// assert_eq!(vec.capacity(), 5);
    ///
    /// vec.reserve(32);
    /// assert_eq!(vec.capacity(), 32);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Shrinks the capacity to the length, but not below
    /// [`MIN_CAPACITY`](DynVec::MIN_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::DynVec;
    /// let mut vec: DynVec<i32> = DynVec::with_capacity(40);
    /// vec.push(1);
    /// vec.push(2);
    ///
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.capacity(), 5);
    ///
    /// vec.extend(3..=8);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        // Equal to the current capacity whenever `len == capacity`.
        let capacity = self.len.max(Self::MIN_CAPACITY);
        if capacity != self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Appends an element to the back of the vector.
    ///
    /// A full buffer is doubled first.
    ///
    /// # Time complexity
    /// Amortized O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::dynvec;
    /// let mut vec = dynvec![1, 2, 3, 4, 5];
    /// assert_eq!(vec.capacity(), 5);
    ///
    /// vec.push(6);
    /// assert_eq!(vec.capacity(), 10);
    /// assert_eq!(vec, [1, 2, 3, 4, 5, 6]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        let len = self.len;
        if len == self.capacity() {
            self.reallocate(self.capacity() * 2);
        }
        self.buf[len] = value;
        self.len = len + 1;
    }

    /// Removes the last element and returns it.
    ///
    /// The capacity is not affected.
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::{dynvec, Error};
    /// let mut vec = dynvec![1, 2];
    ///
    /// assert_eq!(vec.pop(), Ok(2));
    /// assert_eq!(vec.pop(), Ok(1));
    /// assert_eq!(vec.pop(), Err(Error::EmptyContainer));
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }
        self.len -= 1;
        Ok(self.buf[self.len])
    }

    /// Inserts `value` at `position`, shifting every later element one slot to the right.
    ///
    /// `position` may equal the length, which appends. A full buffer is doubled
    /// before shifting. Returns a cursor at the inserted element.
    ///
    /// # Errors
    /// [`Error::IteratorOutOfRange`] if the offset is negative or greater than
    /// the length. The vector is left untouched.
    ///
    /// # Time complexity
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::dynvec;
    /// let mut vec = dynvec![1, 2, 3, 4, 5];
    ///
    /// let pos = (vec.begin() + 2).to_position();
    /// let cursor = vec.insert(pos, 99).unwrap();
    /// assert_eq!(*cursor, 99);
    /// assert_eq!(cursor.offset(), 2);
    /// assert_eq!(vec, [1, 2, 99, 3, 4, 5]);
    ///
    /// let end = vec.end().to_position();
    /// vec.insert(end, 100).unwrap();
    /// assert_eq!(vec, [1, 2, 99, 3, 4, 5, 100]);
    ///
    /// assert!(vec.insert(8usize, 0).is_err());
    /// ```
    pub fn insert(&mut self, position: impl Into<Position>, value: T) -> Result<CursorMut<'_, T>> {
        let position = position.into();
        let len = self.len;
        let index = position
            .to_index(len)
            .ok_or(Error::IteratorOutOfRange {
                offset: position.offset(),
                len,
            })?;

        if len >= self.capacity() {
            self.reallocate(self.capacity() * 2);
        }

        self.buf.copy_within(index..len, index + 1);
        self.buf[index] = value;
        self.len = len + 1;

        Ok(CursorMut::new(self.as_mut_slice(), index))
    }

    /// Removes the element at `position`, shifting every later element one slot to the left.
    ///
    /// Returns a cursor at the element that followed the removed one, which is
    /// the end cursor if the last element was removed.
    ///
    /// # Errors
    /// [`Error::IteratorOutOfRange`] if the offset is negative or not below the
    /// length. Erasing at the end is an error. The vector is left untouched.
    ///
    /// # Time complexity
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::dynvec;
    /// let mut vec = dynvec![1, 2, 99, 3];
    ///
    /// let pos = (vec.begin() + 2).to_position();
    /// let next = vec.erase(pos).unwrap();
    /// assert_eq!(*next, 3);
    /// assert_eq!(vec, [1, 2, 3]);
    ///
    /// let end = vec.end().to_position();
    /// assert!(vec.erase(end).is_err());
    ///
    /// let last = (vec.end().to_position()) - 1;
    /// assert!(vec.erase(last).unwrap().is_end());
    /// assert_eq!(vec, [1, 2]);
    /// ```
    pub fn erase(&mut self, position: impl Into<Position>) -> Result<CursorMut<'_, T>> {
        let position = position.into();
        let len = self.len;
        let index = position
            .to_index(len)
            .filter(|&index| index < len)
            .ok_or(Error::IteratorOutOfRange {
                offset: position.offset(),
                len,
            })?;

        self.buf.copy_within(index + 1..len, index);
        self.len = len - 1;

        Ok(CursorMut::new(self.as_mut_slice(), index))
    }

    /// Copies and appends all elements in a slice to the vector.
    ///
    /// When the buffer is too small it grows to the larger of the required
    /// length and twice the current capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynvec::dynvec;
    /// let mut vec = dynvec![1];
    /// vec.extend_from_slice(&[2, 3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// assert_eq!(vec.capacity(), 5);
    ///
    /// vec.extend_from_slice(&[0; 20]);
    /// assert_eq!(vec.capacity(), 24);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) {
        let len = self.len;
        let new_len = len + other.len();
        if new_len > self.capacity() {
            self.reallocate(new_len.max(self.capacity() * 2));
        }
        self.buf[len..new_len].copy_from_slice(other);
        self.len = new_len;
    }
}

impl<T: Copy + Default> Default for DynVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default> Clone for DynVec<T> {
    /// Copies the live elements into a fresh buffer with the same capacity.
    fn clone(&self) -> Self {
        let mut buf = Self::alloc_buf(self.capacity());
        buf[..self.len].copy_from_slice(self.as_slice());
        Self { buf, len: self.len }
    }

    /// Replaces the contents with a copy of `source`.
    ///
    /// The old buffer is always released, even if it was large enough; the
    /// new capacity equals `source`'s.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T> Index<usize> for DynVec<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynVec<T> {
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

/// Renders the live elements as `[a, b, c]`.
impl<T: fmt::Display> fmt::Display for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T> AsRef<[T]> for DynVec<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynVec<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Hash> Hash for DynVec<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<T: Ord> Ord for DynVec<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: PartialOrd> PartialOrd for DynVec<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        PartialOrd::partial_cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: Eq> Eq for DynVec<T> {}

impl<T, U> PartialEq<DynVec<U>> for DynVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &DynVec<U>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T, U> PartialEq<[U]> for DynVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        PartialEq::eq(self.as_slice(), other)
    }
}

impl<T, U> PartialEq<&[U]> for DynVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        PartialEq::eq(self.as_slice(), *other)
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T, U, const N: usize> PartialEq<&[U; N]> for DynVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U; N]) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Copy + Default, const N: usize> From<[T; N]> for DynVec<T> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::from_slice(&value)
    }
}

impl<T: Copy + Default> From<&[T]> for DynVec<T> {
    #[inline]
    fn from(value: &[T]) -> Self {
        Self::from_slice(value)
    }
}

impl<T> From<DynVec<T>> for Vec<T> {
    /// Reuses the buffer; the unused slots are dropped.
    #[inline]
    fn from(value: DynVec<T>) -> Self {
        let mut vec = value.buf.into_vec();
        vec.truncate(value.len);
        vec
    }
}

impl<T: Copy + Default> Extend<T> for DynVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let needed = self.len + lower;
        if needed > self.capacity() {
            self.reallocate(needed.max(self.capacity() * 2));
        }
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for DynVec<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}

impl<T: Copy + Default> FromIterator<T> for DynVec<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<'a, T> IntoIterator for &'a DynVec<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'a, T> IntoIterator for &'a mut DynVec<T> {
    type Item = &'a mut T;
    type IntoIter = CursorMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.begin_mut()
    }
}

/// An iterator that moves out of a [`DynVec`].
///
/// Created by the [`IntoIterator`] implementation of [`DynVec`].
///
/// # Examples
///
/// ```
/// # use dynvec::dynvec;
/// let vec = dynvec![1, 2, 3];
/// let mut iter = vec.into_iter();
///
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.len(), 1);
/// ```
pub struct IntoIter<T> {
    buf: Box<[T]>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining items as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[self.front..self.back]
    }
}

impl<T: Copy> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = self.buf[self.front];
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T: Copy> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.buf[self.back])
    }
}

impl<T: Copy> ExactSizeIterator for IntoIter<T> {}

impl<T: Copy> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T: Copy> IntoIterator for DynVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            buf: self.buf,
            front: 0,
            back: self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{DynVec, Error, Position, dynvec};
    use alloc::{format, string::ToString, vec::Vec};

    fn assert_invariants<T>(vec: &DynVec<T>) {
        assert!(vec.len() <= vec.capacity());
        assert!(vec.capacity() >= DynVec::<T>::MIN_CAPACITY);
    }

    #[test]
    fn construction() {
        let vec = DynVec::<i32>::new();
        assert_eq!((vec.len(), vec.capacity()), (0, 5));

        let vec = DynVec::<i32>::with_capacity(0);
        assert_eq!((vec.len(), vec.capacity()), (0, 5));

        let vec = DynVec::<i32>::with_capacity(9);
        assert_eq!((vec.len(), vec.capacity()), (0, 9));

        let vec = dynvec![1, 2, 3];
        assert_eq!((vec.len(), vec.capacity()), (3, 5));

        let vec: DynVec<i32> = (0..8).collect();
        assert_eq!(vec.len(), 8);
        assert_eq!(vec, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn from_elem_sizing() {
        let vec = DynVec::from_elem(3u8, 0);
        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), 5);

        let vec = DynVec::from_elem(3u8, 7);
        assert_eq!(vec, [3; 7]);
        assert_eq!(vec.capacity(), 7);

        let vec: DynVec<u8> = dynvec![9; 2];
        assert_eq!((vec.len(), vec.capacity()), (2, 5));
    }

    #[test]
    fn extend_by_reference() {
        let source = [4, 5, 6];
        let mut vec: DynVec<i32> = dynvec![1, 2, 3];
        vec.extend(source.iter());
        assert_eq!(vec, [1, 2, 3, 4, 5, 6]);
        assert_eq!(vec.capacity(), 10);

        let other = dynvec![7];
        vec.extend(&other);
        assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(other, [7]);
    }

    #[test]
    fn push_doubles_once() {
        let mut vec: DynVec<usize> = DynVec::new();
        let mut reallocations = 0;
        for i in 0..6 {
            let before = vec.capacity();
            vec.push(i * 10);
            if vec.capacity() != before {
                reallocations += 1;
            }
            assert_invariants(&vec);
        }

        assert_eq!(reallocations, 1);
        assert_eq!(vec.capacity(), 10);
        assert_eq!(vec.len(), 6);
        for i in 0..6 {
            assert_eq!(vec[i], i * 10);
        }
    }

    #[test]
    fn push_growth_sequence() {
        let mut vec = DynVec::new();
        let mut seen = Vec::new();
        for i in 0..100u32 {
            vec.push(i);
            if seen.last() != Some(&vec.capacity()) {
                seen.push(vec.capacity());
            }
        }
        assert_eq!(seen, [5, 10, 20, 40, 80, 160]);
    }

    #[test]
    fn clone_is_independent() {
        let a = dynvec![1, 2, 3];
        let mut b = a.clone();
        b.push(4);
        b[0] = 100;

        assert_eq!(a, [1, 2, 3]);
        assert_eq!(a.capacity(), 5);
        assert_eq!(b, [100, 2, 3, 4]);
    }

    #[test]
    fn clone_keeps_capacity() {
        let mut a: DynVec<u8> = DynVec::with_capacity(33);
        a.extend_from_slice(b"abc");
        let b = a.clone();
        assert_eq!(b.capacity(), 33);
        assert_eq!(b, *b"abc");
    }

    #[test]
    fn clone_from_takes_source_capacity() {
        let source = dynvec![7, 8];
        let mut target: DynVec<i32> = DynVec::with_capacity(64);
        target.extend_from_slice(&[1, 2, 3, 4]);

        target.clone_from(&source);
        assert_eq!(target, [7, 8]);
        assert_eq!(target.capacity(), 5);

        let mut small = dynvec![0];
        let big: DynVec<i32> = DynVec::with_capacity(16);
        small.clone_from(&big);
        assert!(small.is_empty());
        assert_eq!(small.capacity(), 16);
    }

    #[test]
    fn insert_then_erase_round_trip() {
        let mut vec = dynvec![1, 2, 3, 4, 5];

        let pos = (vec.begin() + 2).to_position();
        assert_eq!(*vec.insert(pos, 99).unwrap(), 99);
        assert_eq!(vec, [1, 2, 99, 3, 4, 5]);
        assert_eq!(vec.len(), 6);
        assert_eq!(vec.capacity(), 10);

        let next = vec.erase(pos).unwrap();
        assert_eq!(*next, 3);
        assert_eq!(vec, [1, 2, 3, 4, 5]);
        assert_eq!(vec.len(), 5);
    }

    #[test]
    fn insert_at_bounds() {
        let mut vec: DynVec<i32> = DynVec::new();
        assert!(vec.insert(0usize, 2).unwrap().offset() == 0);
        vec.insert(0usize, 1).unwrap();
        let end = vec.end().to_position();
        vec.insert(end, 3).unwrap();
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    fn failed_insert_changes_nothing() {
        let mut vec = dynvec![1, 2, 3, 4, 5];
        assert_eq!(vec.capacity(), 5);

        let past = vec.end().to_position() + 1;
        assert_eq!(
            vec.insert(past, 0).unwrap_err(),
            Error::IteratorOutOfRange { offset: 6, len: 5 }
        );
        assert_eq!(
            vec.insert(Position::new(-1), 0).unwrap_err(),
            Error::IteratorOutOfRange { offset: -1, len: 5 }
        );
        assert_eq!(vec.capacity(), 5);
        assert_eq!(vec, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_after_reserve_does_not_grow() {
        let mut vec = dynvec![1, 2];
        vec.reserve(8);
        for i in 0..6 {
            vec.insert(0usize, i).unwrap();
        }
        assert_eq!(vec.capacity(), 8);
        assert_eq!(vec.len(), 8);

        vec.insert(4usize, -1).unwrap();
        assert_eq!(vec.capacity(), 16);
        assert_eq!(vec, [5, 4, 3, 2, -1, 1, 0, 1, 2]);
    }

    #[test]
    fn erase_errors() {
        let mut vec = dynvec![1, 2, 3];

        let end = vec.end().to_position();
        assert_eq!(
            vec.erase(end).unwrap_err(),
            Error::IteratorOutOfRange { offset: 3, len: 3 }
        );
        assert!(vec.erase(Position::new(-2)).is_err());

        let mut empty: DynVec<i32> = DynVec::new();
        assert!(empty.erase(0usize).is_err());
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    fn erase_last_returns_end() {
        let mut vec = dynvec![1, 2, 3];
        let cursor = vec.erase(2usize).unwrap();
        assert!(cursor.is_end());
        assert_eq!(cursor.offset(), 2);
        assert_eq!(vec, [1, 2]);
    }

    #[test]
    fn bounds_errors() {
        let vec = dynvec![1, 2, 3];
        assert_eq!(
            vec.get(vec.len()),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );

        let mut empty: DynVec<i32> = DynVec::new();
        assert_eq!(empty.pop(), Err(Error::EmptyContainer));
        assert_eq!(empty.capacity(), 5);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for length 3")]
    fn index_past_len_panics() {
        let vec = dynvec![1, 2, 3];
        let _value: i32 = vec[3];
    }

    #[test]
    fn pop_keeps_capacity() {
        let mut vec: DynVec<i32> = (0..11).collect();
        let capacity = vec.capacity();
        assert_eq!(vec.pop(), Ok(10));
        assert_eq!(vec.len(), 10);
        assert_eq!(vec.capacity(), capacity);
    }

    #[test]
    fn clear_is_logical() {
        let mut vec: DynVec<i32> = (0..12).collect();
        let capacity = vec.capacity();
        vec.clear();
        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), capacity);
        assert!(vec.begin() == vec.end());

        vec.push(42);
        assert_eq!(vec, [42]);
    }

    #[test]
    fn reserve_is_exact() {
        let mut vec = dynvec![1, 2, 3];
        vec.reserve(5);
        assert_eq!(vec.capacity(), 5);
        vec.reserve(17);
        assert_eq!(vec.capacity(), 17);
        vec.reserve(6);
        assert_eq!(vec.capacity(), 17);
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    fn shrink_to_fit_is_idempotent() {
        let mut vec: DynVec<i32> = (0..7).collect();
        vec.reserve(50);

        vec.shrink_to_fit();
        let first = vec.capacity();
        vec.shrink_to_fit();
        assert_eq!(vec.capacity(), first);
        assert_eq!(first, 7);

        vec.clear();
        vec.shrink_to_fit();
        assert_eq!(vec.capacity(), 5);
        vec.shrink_to_fit();
        assert_eq!(vec.capacity(), 5);
        assert_invariants(&vec);
    }

    #[test]
    fn rendering() {
        let vec = dynvec![1, 2, 3];
        assert_eq!(vec.to_string(), "[1, 2, 3]");
        assert_eq!(format!("{vec:?}"), "[1, 2, 3]");

        let empty: DynVec<i32> = DynVec::new();
        assert_eq!(empty.to_string(), "[]");

        let single = dynvec!['x'];
        assert_eq!(single.to_string(), "[x]");
    }

    #[test]
    fn range_traversal() {
        let mut vec = dynvec![1, 2, 3, 4];

        let mut sum = 0;
        for value in &vec {
            sum += *value;
        }
        assert_eq!(sum, 10);

        for value in &mut vec {
            *value += 1;
        }
        assert_eq!(vec, [2, 3, 4, 5]);

        let owned: Vec<i32> = vec.into_iter().rev().collect();
        assert_eq!(owned, [5, 4, 3, 2]);
    }

    #[test]
    fn comparisons() {
        let a = dynvec![1, 2, 3];
        let b: DynVec<i32> = DynVec::from(&[1, 2, 3][..]);
        let c = dynvec![1, 2, 4];

        assert_eq!(a, b);
        assert!(a < c);
        assert_eq!(a, &[1, 2, 3]);
        assert_eq!(a, &[1, 2, 3][..]);

        let mut longer: DynVec<i32> = DynVec::with_capacity(30);
        longer.extend_from_slice(&[1, 2, 3]);
        assert_eq!(a, longer);
    }

    #[test]
    fn into_vec_drops_spare_slots() {
        let vec = dynvec![1, 2, 3];
        let vec: Vec<i32> = vec.into();
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    fn invariants_hold_under_mixed_operations() {
        let mut vec: DynVec<u16> = DynVec::new();
        for i in 0..200u16 {
            match i % 7 {
                0 | 1 | 2 => vec.push(i),
                3 => {
                    let was_empty = vec.is_empty();
                    assert_eq!(vec.pop().is_ok(), !was_empty);
                }
                4 => {
                    let at = vec.len() / 2;
                    vec.insert(at, i).unwrap();
                }
                5 => {
                    if !vec.is_empty() {
                        vec.erase(0usize).unwrap();
                    }
                }
                _ => vec.shrink_to_fit(),
            }
            assert_invariants(&vec);
        }
    }
}
