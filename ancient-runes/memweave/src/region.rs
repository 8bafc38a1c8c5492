//! Memory Regions
//!
//! A region is a borrowed `(base, length)` pair handed over for the span of
//! one call. Regions never own the memory they describe and carry no
//! lifetime of their own; whoever builds one out of raw parts vouches for it.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Range;

/// Errors reported by the checked region helpers
///
/// The raw primitives never produce these; only the slice-facing wrappers
/// validate their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    /// Requested range does not fit inside the region
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },
    /// `offset + len` wrapped around the address space
    AddressOverflow,
    /// Range start lies past its end
    InvertedRange { start: usize, end: usize },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::OutOfBounds { offset, len, available } => write!(
                f,
                "Range {}..{} exceeds region of {} bytes",
                offset,
                offset + len,
                available
            ),
            RegionError::AddressOverflow => write!(f, "Region end wraps the address space"),
            RegionError::InvertedRange { start, end } => {
                write!(f, "Range start {} lies past end {}", start, end)
            }
        }
    }
}

/// A borrowed span of bytes: base address plus length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemRegion {
    base: *mut u8,
    len: usize,
}

impl MemRegion {
    /// Describe `len` bytes starting at `base`
    ///
    /// # Safety
    /// - `base` must be non-null whenever `len > 0`
    /// - `[base, base + len)` must be memory the caller may read and write
    ///   for as long as the region is used
    /// - `base + len` must not wrap the address space
    pub const unsafe fn from_raw_parts(base: *mut u8, len: usize) -> Self {
        Self { base, len }
    }

    /// Describe an entire mutable slice
    pub fn from_slice(buf: &mut [u8]) -> Self {
        Self {
            base: buf.as_mut_ptr(),
            len: buf.len(),
        }
    }

    #[inline(always)]
    pub const fn base(&self) -> *mut u8 {
        self.base
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base address as an unsigned native-width integer
    #[inline(always)]
    pub fn start_addr(&self) -> usize {
        self.base as usize
    }

    /// One past the last byte, as an unsigned native-width integer
    #[inline(always)]
    pub fn end_addr(&self) -> usize {
        self.start_addr().wrapping_add(self.len)
    }

    /// Check whether two regions share at least one byte
    ///
    /// Empty regions overlap nothing.
    pub fn overlaps(&self, other: &MemRegion) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.start_addr() < other.end_addr() && other.start_addr() < self.end_addr()
    }

    /// Carve `len` bytes starting `offset` bytes into this region
    pub fn subregion(&self, offset: usize, len: usize) -> Result<MemRegion, RegionError> {
        let end = offset.checked_add(len).ok_or(RegionError::AddressOverflow)?;
        if end > self.len {
            return Err(RegionError::OutOfBounds {
                offset,
                len,
                available: self.len,
            });
        }

        Ok(MemRegion {
            // In bounds: end <= self.len was checked above
            base: self.base.wrapping_add(offset),
            len,
        })
    }

    /// Carve a sub-region out of a half-open index range
    pub fn slice(&self, range: Range<usize>) -> Result<MemRegion, RegionError> {
        if range.start > range.end {
            return Err(RegionError::InvertedRange {
                start: range.start,
                end: range.end,
            });
        }
        self.subregion(range.start, range.end - range.start)
    }
}

/// Which way a move has to walk so unread source bytes are never clobbered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDirection {
    /// Source and destination coincide; there is nothing to move
    Stationary,
    /// Destination below source: walk index 0 upward
    Ascending,
    /// Destination above source: walk from the last index downward
    Descending,
}

impl CopyDirection {
    /// Decide the walk direction from the raw addresses
    ///
    /// Addresses are compared as `usize`, so regions straddling the
    /// midpoint of the address space still order correctly.
    #[inline(always)]
    pub fn between(dest: *const u8, src: *const u8) -> Self {
        match (dest as usize).cmp(&(src as usize)) {
            Ordering::Equal => CopyDirection::Stationary,
            Ordering::Less => CopyDirection::Ascending,
            Ordering::Greater => CopyDirection::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_slice() {
        let mut buf = [0u8; 16];
        let region = MemRegion::from_slice(&mut buf);

        assert_eq!(region.len(), 16);
        assert!(!region.is_empty());
        assert_eq!(region.end_addr() - region.start_addr(), 16);
    }

    #[test]
    fn test_subregion_bounds() {
        let mut buf = [0u8; 8];
        let region = MemRegion::from_slice(&mut buf);

        let tail = region.subregion(5, 3).unwrap();
        assert_eq!(tail.start_addr(), region.start_addr() + 5);
        assert_eq!(tail.len(), 3);

        // Zero-length at the very end is still in bounds
        assert!(region.subregion(8, 0).unwrap().is_empty());

        assert_eq!(
            region.subregion(6, 3),
            Err(RegionError::OutOfBounds { offset: 6, len: 3, available: 8 })
        );
        assert_eq!(region.subregion(usize::MAX, 2), Err(RegionError::AddressOverflow));
    }

    #[test]
    fn test_slice_rejects_inverted_range() {
        let mut buf = [0u8; 8];
        let region = MemRegion::from_slice(&mut buf);

        #[allow(clippy::reversed_empty_ranges)]
        let result = region.slice(4..2);
        assert_eq!(result, Err(RegionError::InvertedRange { start: 4, end: 2 }));
        assert_eq!(region.slice(2..4).unwrap().len(), 2);
    }

    #[test]
    fn test_overlap_detection() {
        let mut buf = [0u8; 10];
        let whole = MemRegion::from_slice(&mut buf);
        let low = whole.slice(0..5).unwrap();
        let mid = whole.slice(3..8).unwrap();
        let high = whole.slice(5..10).unwrap();
        let empty = whole.slice(4..4).unwrap();

        assert!(low.overlaps(&mid));
        assert!(mid.overlaps(&high));
        // Adjacent half-open ranges share no byte
        assert!(!low.overlaps(&high));
        assert!(!empty.overlaps(&whole));
    }

    #[test]
    fn test_copy_direction() {
        let buf = [0u8; 4];
        let p = buf.as_ptr();

        assert_eq!(CopyDirection::between(p, p), CopyDirection::Stationary);
        assert_eq!(CopyDirection::between(p, p.wrapping_add(1)), CopyDirection::Ascending);
        assert_eq!(CopyDirection::between(p.wrapping_add(1), p), CopyDirection::Descending);
    }

    #[test]
    fn test_copy_direction_is_unsigned() {
        // Above and below the signed midpoint: a signed compare would flip this
        let low = 0x7FFF_FFF0usize as *const u8;
        let high = (usize::MAX - 0x10) as *const u8;

        assert_eq!(CopyDirection::between(low, high), CopyDirection::Ascending);
        assert_eq!(CopyDirection::between(high, low), CopyDirection::Descending);
    }

    #[test]
    fn test_error_display() {
        let err = RegionError::OutOfBounds { offset: 6, len: 3, available: 8 };
        assert_eq!(err.to_string(), "Range 6..9 exceeds region of 8 bytes");
        assert_eq!(
            RegionError::AddressOverflow.to_string(),
            "Region end wraps the address space"
        );
    }
}
