//! Bring-up Markers
//!
//! Writes a single raw byte to COM1 whenever a canonical entry point is
//! entered. `core::fmt` can itself call `memset` and `memcpy`, so nothing
//! here formats; a marker is one `out` instruction and nothing else.
//!
//! Only live with the `trace` feature on bare-metal x86_64. Everywhere else
//! `mark` compiles to nothing.

/// Entered `memset`
pub(crate) const FILL: u8 = b'S';

/// Entered `memmove`
pub(crate) const MOVE: u8 = b'M';

/// Entered `memcpy`
pub(crate) const COPY: u8 = b'C';

#[cfg(all(feature = "trace", target_arch = "x86_64", target_os = "none"))]
mod serial {
    use x86_64::instructions::port::Port;

    /// COM1 data register
    const COM1: u16 = 0x3F8;

    #[inline(always)]
    pub(super) fn out(byte: u8) {
        let mut port = Port::<u8>::new(COM1);
        unsafe {
            port.write(byte);
        }
    }
}

#[cfg(all(feature = "trace", target_arch = "x86_64", target_os = "none"))]
#[inline(always)]
pub(crate) fn mark(byte: u8) {
    serial::out(byte);
}

#[cfg(not(all(feature = "trace", target_arch = "x86_64", target_os = "none")))]
#[inline(always)]
pub(crate) fn mark(_byte: u8) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_distinct() {
        assert_ne!(FILL, MOVE);
        assert_ne!(MOVE, COPY);
        assert_ne!(FILL, COPY);
    }

    #[test]
    fn test_mark_is_inert_on_hosted_builds() {
        // Hosted targets never touch the port
        mark(FILL);
        mark(MOVE);
        mark(COPY);
    }
}
