//! The CRC algorithm type.
//!
//! [`Crc`] bundles a parameter set with everything derived from it: the
//! width mask, the reflected polynomial, the effective initial register,
//! the lookup table and the check value. It is immutable once built and is
//! meant to live in a `static`, where construction runs at compile time.
//!
//! The computational methods (`new`, `calc`, `calc_bits`, `engine`, ...) are
//! generated per register type in [`crate::macros`]; this module holds the
//! type and the accessors that do not depend on the register arithmetic.

use core::fmt;

use crate::{
  Params, Width,
  lut::{DEFAULT_LUT_LEN, Lut, LutKind},
};

/// A fully derived CRC algorithm.
///
/// `W` is the register type: the smallest of `u8`, `u16`, `u32`, `u64`,
/// `u128` holding `width` bits. `N` is the lookup table length (16, 32 or
/// 256, see [`LutKind`]); it defaults to the shape chosen by Cargo features.
///
/// # Examples
///
/// ```
/// use polycrc::{Crc, Params};
///
/// static CRC16_MODBUS: Crc<u16> = Crc::<u16>::new(Params {
///   width: 16,
///   poly: 0x8005,
///   init: 0xFFFF,
///   reflect_in: true,
///   reflect_out: true,
///   xor_out: 0x0000,
///   check: Some(0x4B37),
/// });
///
/// assert_eq!(CRC16_MODBUS.calc(b"123456789"), 0x4B37);
/// assert_eq!(CRC16_MODBUS.poly_rev(), 0xA001);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Crc<W: Width, const N: usize = { DEFAULT_LUT_LEN }> {
  pub(crate) width: u8,
  pub(crate) poly: W,
  pub(crate) poly_rev: W,
  pub(crate) mask: W,
  pub(crate) init: W,
  pub(crate) init_register: W,
  pub(crate) reflect_in: bool,
  pub(crate) reflect_out: bool,
  pub(crate) xor_out: W,
  pub(crate) check: W,
  pub(crate) lut: Lut<W, N>,
}

/// CRC with a 16-entry nibble table.
pub type CrcLut16<W> = Crc<W, 16>;
/// CRC with a 32-entry split nibble table.
pub type CrcLut32<W> = Crc<W, 32>;
/// CRC with a 256-entry byte table.
pub type CrcLut256<W> = Crc<W, 256>;

impl<W: Width, const N: usize> Crc<W, N> {
  /// CRC width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Generator polynomial, direct form.
  #[inline]
  #[must_use]
  pub const fn poly(&self) -> W {
    self.poly
  }

  /// Generator polynomial bit-reversed over `width` bits.
  #[inline]
  #[must_use]
  pub const fn poly_rev(&self) -> W {
    self.poly_rev
  }

  /// Initial value as configured (direct form, masked).
  #[inline]
  #[must_use]
  pub const fn init(&self) -> W {
    self.init
  }

  /// Value XORed into the output after reflection.
  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> W {
    self.xor_out
  }

  /// CRC of [`CHECK_INPUT`](crate::CHECK_INPUT).
  ///
  /// Computed at construction; equal to the supplied check value when one was
  /// given.
  #[inline]
  #[must_use]
  pub const fn check(&self) -> W {
    self.check
  }

  /// Whether input bytes are consumed LSB first.
  #[inline]
  #[must_use]
  pub const fn reflect_in(&self) -> bool {
    self.reflect_in
  }

  /// Whether the register is bit-reversed before the final XOR.
  #[inline]
  #[must_use]
  pub const fn reflect_out(&self) -> bool {
    self.reflect_out
  }

  /// `width` low bits set.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> W {
    self.mask
  }

  /// Register size in bits (8, 16, 32, 64 or 128).
  #[inline]
  #[must_use]
  pub const fn register_bits(&self) -> u32 {
    W::BITS
  }

  /// The lookup table.
  #[inline]
  #[must_use]
  pub const fn lut(&self) -> &Lut<W, N> {
    &self.lut
  }

  /// Shape of the lookup table.
  #[inline]
  #[must_use]
  pub const fn lut_kind(&self) -> LutKind {
    Lut::<W, N>::KIND
  }

  /// The parameters this algorithm was built from, with the check value
  /// filled in.
  #[must_use]
  pub const fn params(&self) -> Params<W> {
    Params {
      width: self.width,
      poly: self.poly,
      init: self.init,
      reflect_in: self.reflect_in,
      reflect_out: self.reflect_out,
      xor_out: self.xor_out,
      check: Some(self.check),
    }
  }
}

impl<W: Width, const N: usize> fmt::Debug for Crc<W, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("width", &self.width)
      .field("poly", &format_args!("{:#x}", self.poly))
      .field("init", &format_args!("{:#x}", self.init))
      .field("reflect_in", &self.reflect_in)
      .field("reflect_out", &self.reflect_out)
      .field("xor_out", &format_args!("{:#x}", self.xor_out))
      .field("check", &format_args!("{:#x}", self.check))
      .field("lut", &Lut::<W, N>::KIND)
      .finish()
  }
}
