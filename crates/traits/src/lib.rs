//! Core checksum traits for polycrc.
//!
//! This crate provides the seam that every CRC engine in the workspace
//! conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Byte-oriented incremental checksums | CRC-8, CRC-32, CRC-64/XZ |
//! | [`BitChecksum`] | Checksums fed with arbitrary bit counts | CRC over 11-bit CAN identifiers |
//! | [`BitInput`] | Unsigned integers accepted as bit sources | `u8` .. `u128`, `usize` |
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error for a checksum that does not match
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod bits;
mod checksum;
pub mod error;

pub use bits::BitInput;
pub use checksum::{BitChecksum, Checksum};
pub use error::VerificationError;
