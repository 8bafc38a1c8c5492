//! Byte Move
//!
//! The canonical move rune, correct under overlap. The walk direction is
//! picked from the relative addresses of the two regions:
//!
//! ```text
//! dest < src   ascending    dest writes trail behind the unread source
//! dest > src   descending   dest writes stay above the unread source
//! dest == src  nothing      every byte is already where it belongs
//! ```
//!
//! `memcpy` forwards here as well, so every copy entry point in the crate
//! shares one loop and none of them care whether the caller honoured the
//! no-overlap rule.

use core::ops::Range;

use crate::region::{CopyDirection, MemRegion, RegionError};
use crate::trace;

/// Copy `len` bytes from `src` to `dest`, tolerating overlap
///
/// Returns `dest`.
///
/// # Safety
/// - `src` must be valid for `len` byte reads
/// - `dest` must be valid for `len` byte writes
///
/// With `len == 0` neither pointer is dereferenced.
#[inline]
pub unsafe fn move_bytes(dest: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    match CopyDirection::between(dest, src) {
        CopyDirection::Stationary => {}
        CopyDirection::Ascending => copy_ascending(dest, src, len),
        CopyDirection::Descending => copy_descending(dest, src, len),
    }
    dest
}

#[inline(always)]
unsafe fn copy_ascending(dest: *mut u8, src: *const u8, len: usize) {
    let mut i = 0;
    while i < len {
        dest.add(i).write(src.add(i).read());
        i += 1;
    }
}

#[inline(always)]
unsafe fn copy_descending(dest: *mut u8, src: *const u8, len: usize) {
    let mut i = len;
    while i != 0 {
        i -= 1;
        dest.add(i).write(src.add(i).read());
    }
}

/// Move the bytes of `src` to `dest`, returning `dest`'s base address
///
/// Copies `min(src.len(), dest.len())` bytes.
///
/// # Safety
/// Both regions must still describe live memory (see
/// [`MemRegion::from_raw_parts`]).
#[inline]
pub unsafe fn move_region(dest: MemRegion, src: MemRegion) -> *mut u8 {
    let len = if src.len() < dest.len() { src.len() } else { dest.len() };
    move_bytes(dest.base(), src.base(), len)
}

/// Copy `buf[src]` to `buf[dest..]` inside one slice
///
/// The two ranges may overlap. Nothing is written unless both ranges fit.
///
/// # Example
/// ```
/// let mut buf = [1u8, 2, 3, 4, 5];
/// memweave::copy_within(&mut buf, 1..5, 0).unwrap();
/// assert_eq!(buf, [2, 3, 4, 5, 5]);
/// ```
pub fn copy_within(buf: &mut [u8], src: Range<usize>, dest: usize) -> Result<(), RegionError> {
    let whole = MemRegion::from_slice(buf);
    let from = whole.slice(src)?;
    let to = whole.subregion(dest, from.len())?;

    // SAFETY: both sub-regions were bounds-checked against `buf`, which is
    // borrowed mutably for the whole call
    unsafe {
        move_bytes(to.base(), from.base(), from.len());
    }
    Ok(())
}

/// C `memmove`: overlap-safe copy of `len` bytes, returning `dest`
///
/// # Safety
/// Same requirements as [`move_bytes`].
#[cfg_attr(all(feature = "mem", not(test)), no_mangle)]
pub unsafe extern "C" fn memmove(dest: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    trace::mark(trace::MOVE);
    move_bytes(dest, src, len)
}

/// C `memcpy`, returning `dest`
///
/// # Safety
/// Same requirements as [`move_bytes`]; overlap is tolerated.
#[cfg_attr(all(feature = "mem", not(test)), no_mangle)]
pub unsafe extern "C" fn memcpy(dest: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    trace::mark(trace::COPY);
    move_bytes(dest, src, len)
}
