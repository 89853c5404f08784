use core::{
    alloc::Layout,
    ptr::NonNull,
};

use crate::CapacityError::{self, CapacityOverflow, AllocFailed};

pub trait Allocator {

    /// Returns `None` when the allocation fails. `layout` never has a size of zero.
    unsafe fn allocate_raw(&self, layout: Layout) -> Option<NonNull<u8>>;

    unsafe fn free_raw(&self, ptr: NonNull<u8>, layout: Layout);

    unsafe fn allocate_uninit<T>(&self, count: usize) -> Result<NonNull<T>, CapacityError> {
        let layout = Layout::array::<T>(count)
            .map_err(|_| CapacityOverflow { requested: count })?;
        unsafe { self
            .allocate_raw(layout)
            .map(|ptr| ptr.cast::<T>())
            .ok_or(AllocFailed { new_capacity: count })
        }
    }

    /// # Safety
    /// `ptr` must come from [`Allocator::allocate_uninit`] on the same allocator with the
    /// same `count`.
    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let layout = match Layout::array::<T>(count) {
            Ok(l) => l,
            Err(_) => return,
        };
        unsafe { self.free_raw(ptr.cast::<u8>(), layout) }
    }
}
