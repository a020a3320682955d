//! Predefined CRC algorithms.
//!
//! Parameter sets follow Greg Cook's
//! [Catalogue of parametrised CRC algorithms](https://reveng.sourceforge.io/crc-catalogue/).
//! Each algorithm is a `static` [`Crc`] built at compile time; its check value
//! is verified during that build, so a mistyped parameter is a compile error.
//! Alternative names are re-exports of the canonical item (`CRC32_ISCSI` is
//! `CRC32_C`).
//!
//! For lookup by name at runtime, [`find`] searches [`CATALOG`]:
//!
//! ```
//! use polycrc::catalog;
//!
//! let entry = catalog::find("crc-32/iscsi").unwrap();
//! assert_eq!(entry.name(), "CRC-32/C");
//! assert_eq!(entry.crc().calc(b"123456789"), 0xE306_9283);
//! ```

use core::fmt;

use crate::{BitInput, Crc, VerificationError};

/// Declare catalogue statics.
///
/// Columns: width, poly, init, reflect_in, reflect_out, xor_out, check.
macro_rules! catalog {
  ($($(#[$meta:meta])* $name:ident: $w:ty = [
    $width:literal, $poly:literal, $init:literal, $ri:literal, $ro:literal, $xo:literal, $check:literal
  ];)*) => {
    $(
      $(#[$meta])*
      pub static $name: $crate::Crc<$w> = $crate::Crc::<$w>::new($crate::Params {
        width: $width,
        poly: $poly,
        init: $init,
        reflect_in: $ri,
        reflect_out: $ro,
        xor_out: $xo,
        check: Some($check),
      });
    )*
  };
}

mod crc128;
mod crc16;
mod crc32;
mod crc64;
mod crc8;
mod index;

pub use self::{crc8::*, crc16::*, crc32::*, crc64::*, crc128::*, index::CATALOG};

// ─────────────────────────────────────────────────────────────────────────────
// Width-erased handle
// ─────────────────────────────────────────────────────────────────────────────

/// A catalogue algorithm of any register type.
///
/// Values go in and come out as `u128`; inputs wider than the CRC are
/// truncated to its width.
#[derive(Clone, Copy, Debug)]
pub enum AnyCrc {
  /// 1 to 8 bits.
  U8(&'static Crc<u8>),
  /// 9 to 16 bits.
  U16(&'static Crc<u16>),
  /// 17 to 32 bits.
  U32(&'static Crc<u32>),
  /// 33 to 64 bits.
  U64(&'static Crc<u64>),
  /// 65 to 128 bits.
  U128(&'static Crc<u128>),
}

macro_rules! dispatch {
  ($self:expr, $crc:ident => $body:expr) => {
    match $self {
      AnyCrc::U8($crc) => $body,
      AnyCrc::U16($crc) => $body,
      AnyCrc::U32($crc) => $body,
      AnyCrc::U64($crc) => $body,
      AnyCrc::U128($crc) => $body,
    }
  };
}

impl AnyCrc {
  /// CRC width in bits.
  #[must_use]
  pub fn width(self) -> u8 {
    dispatch!(self, crc => crc.width())
  }

  /// Generator polynomial, direct form.
  #[must_use]
  pub fn poly(self) -> u128 {
    dispatch!(self, crc => u128::from(crc.poly()))
  }

  /// Generator polynomial bit-reversed over the width.
  #[must_use]
  pub fn poly_rev(self) -> u128 {
    dispatch!(self, crc => u128::from(crc.poly_rev()))
  }

  /// Initial value, direct form.
  #[must_use]
  pub fn init(self) -> u128 {
    dispatch!(self, crc => u128::from(crc.init()))
  }

  /// Final XOR value.
  #[must_use]
  pub fn xor_out(self) -> u128 {
    dispatch!(self, crc => u128::from(crc.xor_out()))
  }

  /// CRC of [`CHECK_INPUT`](crate::CHECK_INPUT).
  #[must_use]
  pub fn check(self) -> u128 {
    dispatch!(self, crc => u128::from(crc.check()))
  }

  /// Whether input is consumed LSB first.
  #[must_use]
  pub fn reflect_in(self) -> bool {
    dispatch!(self, crc => crc.reflect_in())
  }

  /// Whether the output is reflected.
  #[must_use]
  pub fn reflect_out(self) -> bool {
    dispatch!(self, crc => crc.reflect_out())
  }

  /// Register size in bits.
  #[must_use]
  pub fn register_bits(self) -> u32 {
    dispatch!(self, crc => crc.register_bits())
  }

  /// CRC of `data`.
  #[must_use]
  pub fn calc(self, data: &[u8]) -> u128 {
    dispatch!(self, crc => u128::from(crc.calc(data)))
  }

  /// CRC of the low `n_bits` bits of `value`.
  #[must_use]
  pub fn calc_bits<V: BitInput>(self, value: V, n_bits: u32) -> u128 {
    dispatch!(self, crc => u128::from(crc.calc_bits(value, n_bits)))
  }

  /// CRC of `data`, computed bit by bit.
  #[must_use]
  pub fn calc_reference(self, data: &[u8]) -> u128 {
    dispatch!(self, crc => u128::from(crc.calc_reference(data)))
  }

  /// Compare the CRC of `data` with `expected`.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] if they differ.
  pub fn verify(self, data: &[u8], expected: u128) -> Result<(), VerificationError> {
    if self.calc(data) == expected {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Name index
// ─────────────────────────────────────────────────────────────────────────────

/// A named catalogue algorithm.
#[derive(Clone, Copy)]
pub struct Entry {
  name: &'static str,
  aliases: &'static [&'static str],
  crc: AnyCrc,
}

impl Entry {
  const fn new(name: &'static str, aliases: &'static [&'static str], crc: AnyCrc) -> Self {
    Self { name, aliases, crc }
  }

  /// Catalogue name, e.g. `"CRC-32/C"`.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Other names of the same algorithm.
  #[inline]
  #[must_use]
  pub const fn aliases(&self) -> &'static [&'static str] {
    self.aliases
  }

  /// The algorithm itself.
  #[inline]
  #[must_use]
  pub const fn crc(&self) -> AnyCrc {
    self.crc
  }

  /// The canonical name followed by the aliases.
  pub fn names(&self) -> impl Iterator<Item = &'static str> {
    core::iter::once(self.name).chain(self.aliases.iter().copied())
  }

  /// Whether `name` refers to this entry (see [`find`]).
  #[must_use]
  pub fn matches(&self, name: &str) -> bool {
    self.names().any(|candidate| same_name(candidate, name))
  }
}

impl fmt::Debug for Entry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Entry")
      .field("name", &self.name)
      .field("aliases", &self.aliases)
      .field("width", &self.crc.width())
      .finish_non_exhaustive()
  }
}

/// Names compare equal on their ASCII letters and digits, ignoring case.
fn same_name(a: &str, b: &str) -> bool {
  fn key(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.bytes()
      .filter(u8::is_ascii_alphanumeric)
      .map(|c| c.to_ascii_lowercase())
  }
  key(a).eq(key(b))
}

/// Look up a catalogue algorithm by name or alias.
///
/// Matching ignores case and everything but letters and digits, so
/// `"CRC-32/ISCSI"`, `"crc32_iscsi"` and `"Crc32Iscsi"` all find the same
/// entry.
///
/// ```
/// use polycrc::{CRC16_CCITT_FALSE, catalog::{self, AnyCrc}};
///
/// let entry = catalog::find("CRC-16/IBM-3740").unwrap();
/// assert!(matches!(entry.crc(), AnyCrc::U16(crc) if core::ptr::eq(crc, &CRC16_CCITT_FALSE)));
/// assert!(catalog::find("CRC-7/NOPE").is_none());
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static Entry> {
  CATALOG.iter().find(|entry| entry.matches(name))
}
