//! Byte Fill
//!
//! The canonical fill rune. One byte per step, lowest address first,
//! exactly `len` writes. No alignment or word-size assumptions.

use core::ffi::c_int;

use crate::region::MemRegion;
use crate::trace;

/// Fill `len` bytes starting at `ptr` with `value`
///
/// Returns `ptr` unchanged so callers can chain on it.
///
/// # Safety
/// `ptr` must be valid for `len` byte writes. With `len == 0` the pointer
/// is never dereferenced and may be anything, null included.
#[inline]
pub unsafe fn fill_bytes(ptr: *mut u8, value: u8, len: usize) -> *mut u8 {
    let mut i = 0;
    while i < len {
        ptr.add(i).write(value);
        i += 1;
    }
    ptr
}

/// Fill a whole region with `value`, returning its base address
///
/// # Safety
/// The region must still describe writable memory (see
/// [`MemRegion::from_raw_parts`]).
#[inline]
pub unsafe fn fill_region(region: MemRegion, value: u8) -> *mut u8 {
    fill_bytes(region.base(), value, region.len())
}

/// Fill a slice with `value`
pub fn fill_slice(buf: &mut [u8], value: u8) {
    // SAFETY: a slice is valid for writes over its full length
    unsafe {
        fill_bytes(buf.as_mut_ptr(), value, buf.len());
    }
}

/// C `memset`: fill `len` bytes at `ptr` with the low 8 bits of `value`
///
/// # Safety
/// Same requirements as [`fill_bytes`].
#[cfg_attr(all(feature = "mem", not(test)), no_mangle)]
pub unsafe extern "C" fn memset(ptr: *mut u8, value: c_int, len: usize) -> *mut u8 {
    trace::mark(trace::FILL);
    fill_bytes(ptr, value as u8, len)
}
