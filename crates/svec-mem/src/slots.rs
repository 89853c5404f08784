//! Raw slot relocation for containers built on [`Buffer`](crate::Buffer).
//!
//! Every function here works on a run of slots starting at `ptr`. The caller states
//! which slots are live; moved-from slots are left bitwise-stale and must be treated as
//! uninitialized afterwards.

use core::{
    mem::needs_drop,
    ptr::{self, NonNull},
};

/// Moves `len` live values from `src` into the uninitialized slots at `dst`.
///
/// # Safety
/// `src..src + len` must be live, `dst..dst + len` writable, and the ranges disjoint.
#[inline(always)]
pub unsafe fn move_slots<T>(src: NonNull<T>, dst: NonNull<T>, len: usize) {
    unsafe {
        src.copy_to_nonoverlapping(dst, len);
    }
}

/// Shifts the live slots `[index, len)` one slot to the right and returns the pointer to
/// the now vacant slot at `index`.
///
/// # Safety
/// Slots `[0, len)` must be live and slot `len` must be in bounds of the allocation.
#[inline(always)]
pub unsafe fn shift_right<T>(ptr: NonNull<T>, index: usize, len: usize) -> NonNull<T> {
    debug_assert!(index <= len);
    unsafe {
        let at = ptr.add(index);
        at.copy_to(at.add(1), len - index);
        at
    }
}

/// Closes the gap at `index` by shifting the live slots `(index, len)` one slot to the
/// left. Slot `len - 1` is stale afterwards.
///
/// # Safety
/// The value at `index` must already be moved out or dropped, and slots
/// `(index, len)` must be live.
#[inline(always)]
pub unsafe fn shift_left<T>(ptr: NonNull<T>, index: usize, len: usize) {
    debug_assert!(index < len);
    unsafe {
        let at = ptr.add(index);
        at.add(1).copy_to(at, len - index - 1);
    }
}

/// # Safety
/// `ptr..ptr + len` must be live. They are uninitialized after the call.
#[inline(always)]
pub unsafe fn drop_slots<T>(ptr: NonNull<T>, len: usize) {
    if needs_drop::<T>() {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len));
        }
    }
}
