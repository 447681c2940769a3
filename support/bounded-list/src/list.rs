use alloc::boxed::Box;
use core::{
    fmt,
    mem::MaybeUninit,
    ops::{Index, IndexMut},
    ptr, slice,
};

use crate::{
    DEFAULT_CAPACITY,
    error::{BoundedListError, Result, rejected},
};

/// A list of at most `max_size` elements stored contiguously.
///
/// The buffer is allocated by the constructor and released by `Drop`; its
/// length is the list's `max_size` and never changes.
pub struct BoundedList<T> {
    // Slots `[0, size)` are initialized, `[size, contents.len())` are not.
    contents: Box<[MaybeUninit<T>]>,
    size: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(BoundedList<u64>, [usize; 3]);
static_assertions::assert_impl_all!(BoundedList<u32>: Send, Sync);

impl<T> BoundedList<T> {
    /// Creates an empty list holding up to [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list holding up to `max_size` elements.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            contents: Box::<[T]>::new_uninit_slice(max_size),
            size: 0,
        }
    }

    /// Drops every element. The buffer and `max_size` are kept.
    pub fn clear(&mut self) {
        let live = self.size;
        // A panicking destructor must not make us drop these again.
        self.size = 0;
        unsafe {
            let live = slice::from_raw_parts_mut(self.contents.as_mut_ptr().cast::<T>(), live);
            ptr::drop_in_place(live);
        }
    }

    /// Appends `data` after the current last element.
    pub fn push_back(&mut self, data: T) -> Result<()> {
        self.ensure_room()?;
        self.contents[self.size].write(data);
        self.size += 1;
        Ok(())
    }

    /// Inserts `data` in front of every other element.
    pub fn push_front(&mut self, data: T) -> Result<()> {
        self.insert(data, 0)
    }

    /// Inserts `data` at `index`, moving `[index, size)` one slot to the right.
    ///
    /// `index == size` appends. Fullness is checked before the index.
    pub fn insert(&mut self, data: T, index: usize) -> Result<()> {
        self.ensure_room()?;
        if index > self.size {
            return Err(rejected(BoundedListError::IndexOutOfRange {
                index,
                size: self.size,
            }));
        }
        self.shift_right(index);
        self.contents[index].write(data);
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, closing the gap.
    pub fn pop(&mut self, index: usize) -> Result<T> {
        if index >= self.size {
            return Err(rejected(BoundedListError::IndexOutOfRange {
                index,
                size: self.size,
            }));
        }
        // SAFETY: `index < size`, and `shift_left` overwrites the slot we read.
        let value = unsafe { self.contents[index].assume_init_read() };
        self.shift_left(index);
        self.size -= 1;
        Ok(value)
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Result<T> {
        self.ensure_not_empty()?;
        self.pop(0)
    }

    /// Removes and returns the last element. Nothing else moves.
    pub fn pop_back(&mut self) -> Result<T> {
        self.ensure_not_empty()?;
        self.size -= 1;
        // SAFETY: the slot was the last initialized one and is now outside the list.
        Ok(unsafe { self.contents[self.size].assume_init_read() })
    }

    /// True once `size == max_size`; every insertion fails until something is removed.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == self.max_size()
    }

    /// True when there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Capacity fixed at construction.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.contents.len()
    }

    /// Checked shared access to the element at `index`.
    ///
    /// Only live elements are reachable: `index` must be below `size`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or_else(|| {
            rejected(BoundedListError::IndexOutOfRange {
                index,
                size: self.size,
            })
        })
    }

    /// Checked mutable access to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| rejected(BoundedListError::IndexOutOfRange { index, size }))
    }

    /// Returns the element at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size`](Self::size).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size);
        unsafe { self.contents.get_unchecked(index).assume_init_ref() }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size`](Self::size).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size);
        unsafe { self.contents.get_unchecked_mut(index).assume_init_mut() }
    }

    /// The live elements `[0, size)`, in list order.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.contents.as_ptr().cast::<T>(), self.size) }
    }

    /// Mutable view of the live elements. The size cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.contents.as_mut_ptr().cast::<T>(), self.size) }
    }

    fn ensure_room(&self) -> Result<()> {
        if self.is_full() {
            return Err(rejected(BoundedListError::CapacityExceeded {
                max_size: self.max_size(),
            }));
        }
        Ok(())
    }

    fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(rejected(BoundedListError::EmptyStructure));
        }
        Ok(())
    }

    /// Moves `[index, size)` up by one slot, leaving `index` free to be written.
    fn shift_right(&mut self, index: usize) {
        debug_assert!(index <= self.size && self.size < self.max_size());
        tracing::trace!(index, size = self.size, "shift right");
        let base = self.contents.as_mut_ptr();
        // SAFETY: both ranges end at or before `size + 1 <= max_size`.
        // `ptr::copy` is a memmove, so the overlap is copied high end first.
        unsafe { ptr::copy(base.add(index), base.add(index + 1), self.size - index) };
    }

    /// Moves `(index, size)` down by one slot, overwriting `index`.
    fn shift_left(&mut self, index: usize) {
        debug_assert!(index < self.size);
        tracing::trace!(index, size = self.size, "shift left");
        let base = self.contents.as_mut_ptr();
        // SAFETY: both ranges lie inside `[0, size)`.
        unsafe { ptr::copy(base.add(index + 1), base.add(index), self.size - index - 1) };
    }
}

impl<T: PartialEq> BoundedList<T> {
    /// Removes the first element equal to `data`.
    pub fn remove(&mut self, data: &T) -> Result<()> {
        match self.position(data) {
            Some(index) => self.pop(index).map(drop),
            None => Err(rejected(BoundedListError::ValueNotFound)),
        }
    }

    pub fn contains(&self, data: &T) -> bool {
        self.position(data).is_some()
    }

    /// Returns the index of the first element equal to `data`.
    ///
    /// A miss is `Ok(None)`; only an empty list is an error.
    pub fn find(&self, data: &T) -> Result<Option<usize>> {
        self.ensure_not_empty()?;
        Ok(self.position(data))
    }

    fn position(&self, data: &T) -> Option<usize> {
        self.as_slice().iter().position(|item| item == data)
    }
}

impl<T: PartialOrd> BoundedList<T> {
    /// Inserts `data` before the first element that is not less than it.
    ///
    /// Keeps an ascending list ascending; equal elements end up after `data`.
    pub fn insert_sorted(&mut self, data: T) -> Result<()> {
        self.ensure_room()?;
        let index = self
            .as_slice()
            .iter()
            .take_while(|item| data > **item)
            .count();
        self.insert(data, index)
    }
}

impl<T> Default for BoundedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BoundedList<T> {
    fn drop(&mut self) {
        self.clear();
        // The buffer itself is freed by the `Box`.
    }
}

impl<T: Clone> Clone for BoundedList<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_capacity(self.max_size());
        for item in self.as_slice() {
            cloned.contents[cloned.size].write(item.clone());
            cloned.size += 1;
        }
        cloned
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for BoundedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for BoundedList<T> {}

impl<T> Index<usize> for BoundedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for BoundedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}
