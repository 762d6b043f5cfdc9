//! A minimal, fixed-capacity bitset written in pure Rust.
//! `no_std` with `alloc`, no `unsafe`.
//!
//! [`BitSet`] stores a set of small non-negative integers as packed bits in
//! 64-bit words. Its capacity is chosen once and never changes. Out of range
//! indices and comparisons between differently sized bitsets are reported as
//! [`BitSetError`]s instead of touching memory they shouldn't.
//!
//! # Examples
//! ```
//! use light_bitset::BitSet;
//!
//! let mut a = BitSet::new(100)?;
//! a.fill(&[1, 2, 3, 4, 5, 6, 7, 8, 9])?;
//!
//! let mut b = BitSet::new(100)?;
//! b.fill(&[10, 11, 12])?;
//!
//! assert!(a.is_disjoint(&b)?);
//! assert!(!a.not_disjoint(&b)?);
//! # Ok::<(), light_bitset::BitSetError>(())
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible, needs only `alloc`
//! - Capacity rounded up to whole 64-bit words, independent of the target
//! - Operations: `new`, `set`, `fill`, `is_set`, `is_disjoint`, `not_disjoint`
//! - Fallible API: every bounds or size violation is a [`BitSetError`]
//! - Optional `tracing` feature emitting events on construction and on errors

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod bitset;
mod error;
mod log;

pub use bitset::{BitSet, WORD_BITS, word_count};
pub use error::BitSetError;
