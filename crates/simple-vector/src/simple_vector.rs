use core::{
    fmt,
    mem,
    ops::{Deref, DerefMut, Index, IndexMut},
    slice::{self, SliceIndex},
};

use svec_mem::{
    Buffer,
    CapacityError::{self, CapacityOverflow},
    slots::{move_slots, shift_right, shift_left, drop_slots},
};

use crate::{
    capacity_policy,
    reserve::ReserveProxy,
    VecError,
};

mod cmp;
mod conv;
mod into_iter;


pub use into_iter::IntoIter;

/// A growable array stored in one contiguous [`Buffer`].
///
/// Slots `[0, size)` hold live elements and slots `[size, capacity)` are spare. Appending
/// to a full vector doubles its capacity (an empty one grows to a single slot), while
/// [`reserve`](Self::reserve) and [`resize`](Self::resize) grow to exactly the requested
/// capacity. Capacity only shrinks through [`swap`](Self::swap) or assignment.
///
/// Any operation that changes capacity moves every element, so references into the
/// vector cannot be held across it; the borrow checker enforces this.
pub struct SimpleVector<T> {
    buffer: Buffer<T>,
    size: usize,
}

impl<T> SimpleVector<T> {

    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            buffer: Buffer::empty(),
            size: 0,
        }
    }

    /// Empty vector with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Buffer::create(capacity),
            size: 0,
        }
    }

    #[inline(always)]
    pub fn from_reserve(proxy: ReserveProxy) -> Self {
        Self::with_capacity(proxy.capacity())
    }

    /// `size` default values, with capacity equal to `size`.
    pub fn with_size(size: usize) -> Self
        where
            T: Default
    {
        Self::with_size_with(size, T::default)
    }

    /// `size` clones of `value`, with capacity equal to `size`.
    pub fn with_size_value(size: usize, value: T) -> Self
        where
            T: Clone
    {
        Self::with_size_with(size, || value.clone())
    }

    pub fn with_size_with<F>(size: usize, mut f: F) -> Self
        where
            F: FnMut() -> T
    {
        let mut vec = Self::with_capacity(size);
        for _ in 0..size {
            unsafe { vec.write_back(f()) }
        }
        vec
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.size) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr(), self.size) }
    }

    /// Bounds-checked access.
    pub fn at(&self, index: usize) -> crate::Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or(VecError::OutOfRange { index, size: self.size })
    }

    pub fn at_mut(&mut self, index: usize) -> crate::Result<&mut T> {
        let size = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VecError::OutOfRange { index, size })
    }

    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Grows the capacity to exactly `capacity` if it is currently smaller.
    ///
    /// # Panics
    /// Panics if the byte size of `capacity` slots overflows `isize::MAX`.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return
        }
        self.grow_into(Buffer::create(capacity));
    }

    /// [`reserve`](Self::reserve) that reports overflow and allocation failure instead of
    /// panicking. The vector is unchanged on error.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), CapacityError> {
        if capacity <= self.capacity() {
            return Ok(())
        }
        let buffer = Buffer::try_create(capacity)
            .inspect_err(|err| {
                vec_debug!("reserving {} slots failed: {}", capacity, err);
            })?;
        self.grow_into(buffer);
        Ok(())
    }

    /// Shrinks by dropping the tail, or grows by appending default values. Growing past
    /// the capacity reserves exactly `size` slots.
    pub fn resize(&mut self, size: usize)
        where
            T: Default
    {
        self.resize_with(size, T::default)
    }

    pub fn resize_with<F>(&mut self, size: usize, mut f: F)
        where
            F: FnMut() -> T
    {
        if size <= self.size {
            self.truncate(size);
            return
        }
        self.reserve(size);
        while self.size < size {
            unsafe { self.write_back(f()) }
        }
    }

    /// Drops the elements at `[size, self.size())`. Capacity is unchanged.
    pub fn truncate(&mut self, size: usize) {
        if size >= self.size {
            return
        }
        let tail = self.size - size;
        self.size = size;
        unsafe { drop_slots(self.buffer.get_raw().add(size), tail) }
    }

    pub fn push_back(&mut self, item: T) {
        if self.size == self.capacity() {
            let capacity = self.grown_capacity();
            self.grow_into(Buffer::create(capacity));
        }
        unsafe { self.write_back(item) }
    }

    /// [`push_back`](Self::push_back) that reports overflow and allocation failure. On
    /// error `item` is dropped and the vector is unchanged.
    pub fn try_push_back(&mut self, item: T) -> Result<(), CapacityError> {
        if self.size == self.capacity() {
            let capacity = capacity_policy::grow(self.capacity())
                .ok_or(CapacityOverflow { requested: usize::MAX })?;
            self.try_reserve(capacity)?;
        }
        unsafe { self.write_back(item) }
        Ok(())
    }

    /// Inserts `value` before the element at `index` and returns `index`. An `index`
    /// equal to [`size`](Self::size) appends.
    ///
    /// # Panics
    /// Panics if `index > size`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let size = self.size;
        if index > size {
            panic!("insertion index {} is out of bounds for size {}", index, size)
        }
        if size < self.capacity() {
            unsafe { shift_right(self.buffer.get_raw(), index, size).write(value) }
        } else {
            let mut new_buffer = Buffer::create(self.grown_capacity());
            unsafe {
                let src = self.buffer.get_raw();
                let dst = new_buffer.get_raw();
                move_slots(src, dst, index);
                dst.add(index).write(value);
                move_slots(src.add(index), dst.add(index + 1), size - index);
            }
            self.buffer.swap(&mut new_buffer);
            vec_trace!("reallocated {} -> {} slots on insert", new_buffer.len(), self.buffer.len());
        }
        self.size += 1;
        index
    }

    /// Removes and returns the last element. Capacity is unchanged.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) -> T {
        if self.size == 0 {
            panic!("pop_back on an empty vector")
        }
        self.size -= 1;
        unsafe { self.buffer.get_raw().add(self.size).read() }
    }

    /// Removes the element at `index`, shifting the rest left, and returns it.
    ///
    /// # Panics
    /// Panics if `index >= size`.
    pub fn remove(&mut self, index: usize) -> T {
        let size = self.size;
        if index >= size {
            panic!("removal index {} is out of bounds for size {}", index, size)
        }
        unsafe {
            let ptr = self.buffer.get_raw();
            let removed = ptr.add(index).read();
            shift_left(ptr, index, size);
            self.size -= 1;
            removed
        }
    }

    /// Drops the element at `index` and returns `index`, which now holds the next element
    /// or equals the new size if the last element was erased.
    ///
    /// # Panics
    /// Panics if `index >= size`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    /// Exchanges contents and capacities in O(1).
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the contents out, leaving `self` empty with no capacity.
    #[inline(always)]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Caller guarantees `size < capacity`.
    #[inline(always)]
    unsafe fn write_back(&mut self, value: T) {
        debug_assert!(self.size < self.capacity());
        unsafe { self.buffer.get_raw().add(self.size).write(value) }
        self.size += 1;
    }

    fn grown_capacity(&self) -> usize {
        match capacity_policy::grow(self.capacity()) {
            Some(capacity) => capacity,
            None => capacity_overflow(),
        }
    }

    /// Moves the live elements into `new_buffer` and adopts it. The old allocation is
    /// released when `new_buffer` goes out of scope.
    fn grow_into(&mut self, mut new_buffer: Buffer<T>) {
        debug_assert!(new_buffer.len() >= self.size);
        unsafe { move_slots(self.buffer.get_raw(), new_buffer.get_raw(), self.size) }
        self.buffer.swap(&mut new_buffer);
        vec_trace!("reallocated {} -> {} slots", new_buffer.len(), self.buffer.len());
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> Drop for SimpleVector<T> {

    fn drop(&mut self) {
        unsafe { drop_slots(self.buffer.get_raw(), self.size) }
    }
}

impl<T> Default for SimpleVector<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {

    /// The copy keeps the source's capacity, not just its size.
    fn clone(&self) -> Self {
        let mut vec = Self::with_capacity(self.capacity());
        for item in self.as_slice() {
            unsafe { vec.write_back(item.clone()) }
        }
        vec
    }

    /// Copy-and-swap: `self` ends up as `source.clone()`, capacity included.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for SimpleVector<T> {

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {

    type Output = I::Output;

    #[inline(always)]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {

    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<'vec, T> IntoIterator for &'vec SimpleVector<T> {

    type Item = &'vec T;
    type IntoIter = slice::Iter<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'vec, T> IntoIterator for &'vec mut SimpleVector<T> {

    type Item = &'vec mut T;
    type IntoIter = slice::IterMut<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
