//! ARM Run-time ABI Aliases
//!
//! When LLVM lowers struct initialization, array clearing and aggregate
//! assignment for an ARM EABI target it calls these names instead of the C
//! ones. They differ from the C signatures in two ways that matter:
//!
//! - `__aeabi_memset*` takes `(ptr, len, value)`; `memset` takes
//!   `(ptr, value, len)`. Swapping these silently writes `len` copies of the
//!   wrong byte, or a byte-sized count of the right one.
//! - `__aeabi_memclr*` takes no value at all; the fill is always zero.
//!
//! The `4`/`8` suffixes promise pointer alignment. With no word-sized fast
//! path there is nothing to exploit, so they forward exactly like the plain
//! variants. All of them return nothing.

use core::ffi::c_int;

use crate::fill::memset;
use crate::movement::memmove;

/// Fill `len` bytes at `ptr` with `value`; note the swapped argument order
///
/// # Safety
/// `ptr` must be valid for `len` byte writes.
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memset(ptr: *mut u8, len: usize, value: c_int) {
    memset(ptr, value, len);
}

/// [`__aeabi_memset`] with a 4-byte aligned `ptr`
///
/// # Safety
/// `ptr` must be valid for `len` byte writes.
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memset4(ptr: *mut u8, len: usize, value: c_int) {
    memset(ptr, value, len);
}

/// [`__aeabi_memset`] with an 8-byte aligned `ptr`
///
/// # Safety
/// `ptr` must be valid for `len` byte writes.
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memset8(ptr: *mut u8, len: usize, value: c_int) {
    memset(ptr, value, len);
}

/// Zero `len` bytes at `ptr`
///
/// # Safety
/// `ptr` must be valid for `len` byte writes.
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memclr(ptr: *mut u8, len: usize) {
    memset(ptr, 0, len);
}

/// Zero `len` bytes at a 4-byte aligned `ptr`
///
/// This is the one LLVM reaches for when clearing word-aligned locals.
///
/// # Safety
/// `ptr` must be valid for `len` byte writes.
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memclr4(ptr: *mut u8, len: usize) {
    memset(ptr, 0, len);
}

/// Zero `len` bytes at an 8-byte aligned `ptr`
///
/// # Safety
/// `ptr` must be valid for `len` byte writes.
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memclr8(ptr: *mut u8, len: usize) {
    memset(ptr, 0, len);
}

/// Overlap-safe copy; same argument order as `memmove`
///
/// # Safety
/// `src` must be valid for `len` byte reads, `dest` for `len` byte writes.
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memmove(dest: *mut u8, src: *const u8, len: usize) {
    memmove(dest, src, len);
}

/// # Safety
/// See [`__aeabi_memmove`].
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memmove4(dest: *mut u8, src: *const u8, len: usize) {
    memmove(dest, src, len);
}

/// # Safety
/// See [`__aeabi_memmove`].
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memmove8(dest: *mut u8, src: *const u8, len: usize) {
    memmove(dest, src, len);
}

/// Copy of non-overlapping regions, routed through the overlap-safe move
///
/// # Safety
/// `src` must be valid for `len` byte reads, `dest` for `len` byte writes.
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memcpy(dest: *mut u8, src: *const u8, len: usize) {
    memmove(dest, src, len);
}

/// # Safety
/// See [`__aeabi_memcpy`].
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memcpy4(dest: *mut u8, src: *const u8, len: usize) {
    memmove(dest, src, len);
}

/// # Safety
/// See [`__aeabi_memcpy`].
#[cfg_attr(all(feature = "aeabi", not(test)), no_mangle)]
pub unsafe extern "C" fn __aeabi_memcpy8(dest: *mut u8, src: *const u8, len: usize) {
    memmove(dest, src, len);
}
