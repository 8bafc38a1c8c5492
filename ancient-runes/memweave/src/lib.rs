//! # Memweave - Ancient Runes
//!
//! The memory runes every compiled program silently leans on when there is
//! no operating system beneath it: byte fill and overlap-safe byte move,
//! plus the `__aeabi_*` entry points an ARM code generator emits for struct
//! initialization, array clearing and aggregate assignment.
//!
//! ## Philosophy
//! The lowest layer has no one to report to. These runes are unconditional
//! and unchecked; the caller vouches for every region it hands over.
//!
//! ## Layout
//! - [`fill`] - canonical byte fill (`memset`)
//! - [`movement`] - canonical overlap-safe move (`memmove`, `memcpy`)
//! - [`aeabi`] - ARM run-time ABI aliases forwarding to the two above
//! - [`region`] - the (base, length) pair and the copy-direction decision
//!
//! ## Symbols
//! Nothing is exported unmangled unless asked for. Enable `mem` for
//! `memset`/`memmove`/`memcpy` and `aeabi` for the `__aeabi_mem*` family.
//! Unit test builds never export, so the host harness keeps its own libc.
//!
//! ## Example
//! ```
//! let mut buf = [1u8, 2, 3, 4, 5];
//! memweave::copy_within(&mut buf, 0..4, 1).unwrap();
//! assert_eq!(buf, [1, 1, 2, 3, 4]);
//! ```

#![cfg_attr(not(test), no_std)]
// The byte loops below must never be recognized and lowered back into
// calls to the very symbols they define.
#![no_builtins]

pub mod aeabi;
pub mod fill;
pub mod movement;
pub mod region;
mod trace;

pub use fill::{fill_bytes, fill_region, fill_slice, memset};
pub use movement::{copy_within, memcpy, memmove, move_bytes, move_region};
pub use region::{CopyDirection, MemRegion, RegionError};
