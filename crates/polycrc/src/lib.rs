//! Parameterized CRC computation with compile-time lookup tables.
//!
//! Any CRC from the [Rocksoft model] of 1 to 128 bits is described by a
//! [`Params`] record and turned into a [`Crc`]. Building a `Crc` derives its
//! lookup table and check value; in a `static` initializer all of this runs
//! at compile time. The [`catalog`] provides the published algorithms
//! ready-made.
//!
//! # Operations
//!
//! | Operation | Input | Notes |
//! |-----------|-------|-------|
//! | [`Crc::calc`] | `&[u8]` | One-shot, table-driven |
//! | [`Crc::calc_bits`] | low `n` bits of an integer | Any bit count, any `BitInput` |
//! | [`Crc::engine`] | - | Incremental [`Engine`], reset on [`finalize`](Engine::finalize) |
//! | [`Crc::update_register`] | register + `&[u8]` | Engine-free incremental API |
//! | [`Crc::calc_reference`] | `&[u8]` | Bit-by-bit oracle |
//!
//! # Example
//!
//! ```rust
//! use polycrc::{CRC32, CRC64_XZ, CrcLut16, Params};
//!
//! // Catalogue algorithms
//! assert_eq!(CRC32.calc(b"123456789"), 0xCBF4_3926);
//! assert_eq!(CRC64_XZ.check(), 0x995D_C9BB_DF19_39FA);
//!
//! // Streaming computation
//! let mut engine = CRC32.engine();
//! engine.update(b"1234");
//! engine.update(b"56789");
//! assert_eq!(engine.finalize(), 0xCBF4_3926);
//!
//! // Custom 5-bit CRC with the smallest table
//! static CRC5: CrcLut16<u8> = CrcLut16::<u8>::new(Params {
//!   width: 5,
//!   poly: 0x15,
//!   init: 0,
//!   reflect_in: false,
//!   reflect_out: false,
//!   xor_out: 0,
//!   check: None,
//! });
//! assert_eq!(CRC5.check(), 0x1C);
//! ```
//!
//! # Table Shapes
//!
//! The lookup table length is the second type parameter of [`Crc`]; see
//! [`LutKind`]. `Crc<W>` uses the shape selected by Cargo features:
//!
//! | Feature | Shape |
//! |---------|-------|
//! | (none) | [`LutKind::Lut32`] |
//! | `lut16` | [`LutKind::Lut16`] |
//! | `lut256` | [`LutKind::Lut256`] |
//!
//! # Errors
//!
//! Only construction can fail ([`ParamsError`]). [`Crc::new`] turns the
//! failure into a panic, which is a compile error in `const` context.
//!
//! # no_std Support
//!
//! This crate is `no_std` and never allocates.
//!
//! [Rocksoft model]: https://reveng.sourceforge.io/crc-catalogue/

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[macro_use]
mod macros;

mod algo;
pub mod catalog;
mod engine;
mod error;
pub mod lut;
mod params;
mod width;

impl_crc! {
  u8 => width::bits_rev_u8,
  u16 => width::bits_rev_u16,
  u32 => width::bits_rev_u32,
  u64 => width::bits_rev_u64,
  u128 => width::bits_rev_u128,
}

impl_engine!(u8, u16, u32, u64, u128);

pub use algo::{Crc, CrcLut16, CrcLut32, CrcLut256};
pub use catalog::*;
pub use engine::Engine;
pub use error::ParamsError;
pub use lut::{Lut, LutKind};
pub use params::{CHECK_INPUT, Params};
pub use traits::{BitChecksum, BitInput, Checksum, VerificationError};
pub use width::{
  Width, bits_rev, bits_rev_u8, bits_rev_u16, bits_rev_u32, bits_rev_u64, bits_rev_u128, register_bits,
};
