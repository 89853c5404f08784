use core::{
    alloc::Layout,
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use std::alloc::handle_alloc_error;

use crate::{
    Allocator,
    CapacityError::{self, CapacityOverflow, AllocFailed},
    GlobalAlloc,
    const_assert,
    size_of,
};

/// A fixed number of `T` slots in one allocation.
///
/// The slot count is chosen at creation and never changes. Slots start out
/// uninitialized and the buffer never reads, writes or drops them: whoever owns the
/// buffer tracks which slots hold live values and drops them before the buffer goes
/// away. Dropping a [`Buffer`] only releases its memory.
///
/// Nothing is allocated for a length of zero or for zero-sized `T`; [`Buffer::get_raw`]
/// is then a dangling, well aligned pointer.
pub struct Buffer<T, Alloc: Allocator = GlobalAlloc> {
    data: NonNull<T>,
    len: usize,
    alloc: Alloc,
    _marker: PhantomData<T>,
}

const_assert!(size_of!(Buffer<u32>) == size_of!(Option<Buffer<u32>>));

unsafe impl<T: Send, Alloc: Allocator + Send> Send for Buffer<T, Alloc> {}

unsafe impl<T: Sync, Alloc: Allocator + Sync> Sync for Buffer<T, Alloc> {}

impl<T> Buffer<T, GlobalAlloc> {

    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            data: NonNull::dangling(),
            len: 0,
            alloc: GlobalAlloc,
            _marker: PhantomData,
        }
    }

    /// Allocates `len` slots.
    ///
    /// # Panics
    /// Panics if the byte size overflows. Allocation failure goes through
    /// [`handle_alloc_error`].
    #[inline]
    pub fn create(len: usize) -> Self {
        Self::create_in(len, GlobalAlloc)
    }

    #[inline]
    pub fn try_create(len: usize) -> Result<Self, CapacityError> {
        Self::try_create_in(len, GlobalAlloc)
    }
}

impl<T, Alloc: Allocator> Buffer<T, Alloc> {

    #[inline(always)]
    pub fn empty_in(alloc: Alloc) -> Self {
        Self {
            data: NonNull::dangling(),
            len: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    pub fn try_create_in(len: usize, alloc: Alloc) -> Result<Self, CapacityError> {
        if !Self::allocates(len) {
            return Ok(Self {
                data: NonNull::dangling(),
                len,
                alloc,
                _marker: PhantomData,
            })
        }
        let data = unsafe { alloc.allocate_uninit::<T>(len)? };
        Ok(Self {
            data,
            len,
            alloc,
            _marker: PhantomData,
        })
    }

    pub fn create_in(len: usize, alloc: Alloc) -> Self {
        match Self::try_create_in(len, alloc) {
            Ok(buffer) => buffer,
            Err(err) => Self::handle_error(err),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to the first slot. Valid for `len` slots while the buffer is alive.
    #[inline(always)]
    pub fn get_raw(&self) -> NonNull<T> {
        self.data
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn allocator(&self) -> &Alloc {
        &self.alloc
    }

    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    #[inline(always)]
    fn allocates(len: usize) -> bool {
        len != 0 && size_of!(T) != 0
    }

    #[cold]
    fn handle_error(err: CapacityError) -> ! {
        match err {
            CapacityOverflow { requested } => {
                panic!("capacity overflow: {} slots of {} bytes", requested, size_of!(T))
            },
            AllocFailed { new_capacity } => {
                match Layout::array::<T>(new_capacity) {
                    Ok(layout) => handle_alloc_error(layout),
                    Err(_) => panic!("{}", err),
                }
            },
        }
    }
}

impl<T> Default for Buffer<T, GlobalAlloc> {

    #[inline(always)]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, Alloc: Allocator> Drop for Buffer<T, Alloc> {

    fn drop(&mut self) {
        if Self::allocates(self.len) {
            unsafe { self.alloc.free_uninit(self.data, self.len) }
        }
    }
}

impl<T, Alloc: Allocator> core::fmt::Debug for Buffer<T, Alloc> {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buffer")
            .field("data", &self.data)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::cell::Cell;

    struct CountingAlloc<'a> {
        allocs: &'a Cell<usize>,
        frees: &'a Cell<usize>,
    }

    impl Allocator for CountingAlloc<'_> {

        unsafe fn allocate_raw(&self, layout: Layout) -> Option<NonNull<u8>> {
            self.allocs.set(self.allocs.get() + 1);
            unsafe { GlobalAlloc.allocate_raw(layout) }
        }

        unsafe fn free_raw(&self, ptr: NonNull<u8>, layout: Layout) {
            self.frees.set(self.frees.get() + 1);
            unsafe { GlobalAlloc.free_raw(ptr, layout) }
        }
    }

    struct NullAlloc;

    impl Allocator for NullAlloc {

        unsafe fn allocate_raw(&self, _: Layout) -> Option<NonNull<u8>> {
            None
        }

        unsafe fn free_raw(&self, _: NonNull<u8>, _: Layout) {
            panic!("nothing was allocated")
        }
    }

    #[test]
    fn empty_buffer_has_no_slots() {
        let buffer = Buffer::<u64>::empty();
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.get_raw(), NonNull::dangling());
    }

    #[test]
    fn create_allocates_exact_length() {
        let mut buffer = Buffer::<u32>::create(8);
        assert_eq!(buffer.len(), 8);
        let ptr = buffer.as_mut_ptr();
        for i in 0..8 {
            unsafe { ptr.add(i).write(i as u32 * 3) };
        }
        let read: Vec<u32> = (0..8).map(|i| unsafe { buffer.as_ptr().add(i).read() }).collect();
        assert_eq!(read, [0, 3, 6, 9, 12, 15, 18, 21]);
    }

    #[test]
    fn allocation_released_once_on_drop() {
        let allocs = Cell::new(0);
        let frees = Cell::new(0);
        {
            let buffer = Buffer::<u16, _>::create_in(4, CountingAlloc { allocs: &allocs, frees: &frees });
            assert_eq!(buffer.len(), 4);
            assert_eq!(allocs.get(), 1);
            assert_eq!(frees.get(), 0);
        }
        assert_eq!(frees.get(), 1);
    }

    #[test]
    fn zero_length_and_zero_sized_never_allocate() {
        let allocs = Cell::new(0);
        let frees = Cell::new(0);
        {
            let empty = Buffer::<u16, _>::create_in(0, CountingAlloc { allocs: &allocs, frees: &frees });
            let units = Buffer::<(), _>::create_in(1024, CountingAlloc { allocs: &allocs, frees: &frees });
            assert_eq!(empty.len(), 0);
            assert_eq!(units.len(), 1024);
        }
        assert_eq!(allocs.get(), 0);
        assert_eq!(frees.get(), 0);
    }

    #[test]
    fn swap_exchanges_ownership() {
        let mut a = Buffer::<u8>::create(3);
        let mut b = Buffer::<u8>::create(5);
        let (pa, pb) = (a.get_raw(), b.get_raw());
        a.swap(&mut b);
        assert_eq!(a.len(), 5);
        assert_eq!(b.len(), 3);
        assert_eq!(a.get_raw(), pb);
        assert_eq!(b.get_raw(), pa);
    }

    #[test]
    fn try_create_reports_failure() {
        let err = Buffer::<u64, _>::try_create_in(16, NullAlloc).unwrap_err();
        assert_eq!(err, AllocFailed { new_capacity: 16 });
    }

    #[test]
    fn try_create_reports_overflow() {
        let err = Buffer::<u64>::try_create(usize::MAX).unwrap_err();
        assert_eq!(err, CapacityOverflow { requested: usize::MAX });
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn create_panics_on_overflow() {
        let _ = Buffer::<u64>::create(usize::MAX / 2);
    }
}
