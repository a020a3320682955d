//! CRC register types and bit reversal.
//!
//! A CRC of width `w` runs in the smallest unsigned integer that holds `w`
//! bits:
//!
//! | Width | Register |
//! |-------|----------|
//! | 1-8 | `u8` |
//! | 9-16 | `u16` |
//! | 17-32 | `u32` |
//! | 33-64 | `u64` |
//! | 65-128 | `u128` |
//!
//! Bit reversal converts between the direct and reflected representations of
//! polynomials, initial values and results. The per-type `const fn` variants
//! are usable in constant initializers; [`bits_rev`] is the generic entry
//! point for runtime code.

// SAFETY: All array indexing in this module uses `& 0xF` nibble indices into a
// 16-entry table. Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

use core::{
  fmt::{Debug, LowerHex},
  hash::Hash,
};

mod sealed {
  pub trait Sealed {}
}

/// Nibble reversal table: `REV4[n]` is `n` with its four bits mirrored.
const REV4: [u8; 16] = [0x0, 0x8, 0x4, 0xC, 0x2, 0xA, 0x6, 0xE, 0x1, 0x9, 0x5, 0xD, 0x3, 0xB, 0x7, 0xF];

/// Unsigned integer types usable as a CRC register.
///
/// This trait is sealed: it is implemented for `u8`, `u16`, `u32`, `u64` and
/// `u128` only.
pub trait Width: sealed::Sealed + Copy + Eq + Hash + Debug + LowerHex + Send + Sync + 'static {
  /// Number of bits in the register type.
  const BITS: u32;

  /// Reverse the low `n_bits` bits of `self`; bits above `n_bits` are dropped.
  #[must_use]
  fn bits_rev(self, n_bits: u32) -> Self;

  /// Zero-extend to `u128`.
  #[must_use]
  fn widen(self) -> u128;
}

/// Reverse the order of the low `n_bits` bits of `value`.
///
/// Bit 0 swaps with bit `n_bits - 1`, bit 1 with bit `n_bits - 2`, and so on.
/// Bits at or above `n_bits` do not appear in the result. `n_bits` is clamped
/// to the width of `W`; `n_bits == 0` yields zero.
///
/// # Examples
///
/// ```
/// use polycrc::bits_rev;
///
/// assert_eq!(bits_rev(0b0001u8, 4), 0b1000);
/// assert_eq!(bits_rev(0x04C1_1DB7u32, 32), 0xEDB8_8320);
/// assert_eq!(bits_rev(0xFFu8, 3), 0b111);
/// ```
#[inline]
#[must_use]
pub fn bits_rev<W: Width>(value: W, n_bits: u32) -> W {
  value.bits_rev(n_bits)
}

/// Smallest register size in bits (8, 16, 32, 64 or 128) holding a `width`-bit
/// CRC, or `None` if no register fits (`width` is 0 or above 128).
///
/// ```
/// use polycrc::register_bits;
///
/// assert_eq!(register_bits(5), Some(8));
/// assert_eq!(register_bits(82), Some(128));
/// assert_eq!(register_bits(129), None);
/// ```
#[inline]
#[must_use]
pub const fn register_bits(width: u32) -> Option<u32> {
  match width {
    1..=8 => Some(8),
    9..=16 => Some(16),
    17..=32 => Some(32),
    33..=64 => Some(64),
    65..=128 => Some(128),
    _ => None,
  }
}

macro_rules! impl_width {
  ($($ty:ident => $rev:ident),* $(,)?) => {
    $(
      #[doc = concat!("Reverse the low `n_bits` bits of a `", stringify!($ty), "` (see [`bits_rev`]).")]
      ///
      /// Works four bits at a time through a nibble table, then shifts out the
      /// bits overshot when `n_bits` is not a multiple of four.
      #[must_use]
      pub const fn $rev(value: $ty, n_bits: u32) -> $ty {
        let mut n = if n_bits > <$ty>::BITS { <$ty>::BITS } else { n_bits };
        let mut v = value;
        let mut out: $ty = 0;

        while n > 4 {
          out |= REV4[(v & 0xF) as usize] as $ty;
          v >>= 4;
          out <<= 4;
          n -= 4;
        }
        (out | REV4[(v & 0xF) as usize] as $ty) >> (4 - n)
      }

      impl sealed::Sealed for $ty {}

      impl Width for $ty {
        const BITS: u32 = <$ty>::BITS;

        #[inline]
        fn bits_rev(self, n_bits: u32) -> Self {
          $rev(self, n_bits)
        }

        #[inline(always)]
        fn widen(self) -> u128 {
          self as u128
        }
      }
    )*
  };
}

impl_width! {
  u8 => bits_rev_u8,
  u16 => bits_rev_u16,
  u32 => bits_rev_u32,
  u64 => bits_rev_u64,
  u128 => bits_rev_u128,
}

#[cfg(test)]
mod tests {
  use super::*;

  /// One bit at a time; obviously correct.
  fn naive(value: u128, n_bits: u32) -> u128 {
    let mut out = 0;
    for i in 0..n_bits {
      if (value >> i) & 1 != 0 {
        out |= 1 << (n_bits - 1 - i);
      }
    }
    out
  }

  #[test]
  fn full_width_matches_reverse_bits() {
    for v in [0u32, 1, 0x8000_0000, 0x04C1_1DB7, 0xDEAD_BEEF, u32::MAX] {
      assert_eq!(bits_rev_u32(v, 32), v.reverse_bits());
    }
    for v in [0x42F0_E1EB_A9EA_3693u64, 1, u64::MAX] {
      assert_eq!(bits_rev_u64(v, 64), v.reverse_bits());
    }
    assert_eq!(bits_rev_u128(1, 128), 1u128 << 127);
  }

  #[test]
  fn every_length_matches_naive() {
    let v = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128;
    for n in 0..=128 {
      let masked = if n == 128 { v } else { v & ((1u128 << n) - 1) };
      assert_eq!(bits_rev_u128(v, n), naive(masked, n), "n_bits={n}");
    }
    for n in 0..=8 {
      assert_eq!(u128::from(bits_rev_u8(0xA5, n)), naive(0xA5 & ((1u128 << n) - 1), n), "n_bits={n}");
    }
  }

  #[test]
  fn high_bits_are_ignored() {
    assert_eq!(bits_rev_u16(0xFF01, 4), 0b1000);
    assert_eq!(bits_rev_u8(0b1110_0001, 1), 1);
  }

  #[test]
  fn zero_length_is_zero() {
    assert_eq!(bits_rev_u32(u32::MAX, 0), 0);
  }

  #[test]
  fn oversized_length_clamps() {
    assert_eq!(bits_rev_u8(0x01, 200), 0x80);
  }

  #[test]
  fn known_polynomials() {
    assert_eq!(bits_rev(0x1EDC_6F41u32, 32), 0x82F6_3B78);
    assert_eq!(bits_rev(0x8005u16, 16), 0xA001);
    assert_eq!(bits_rev(0x07u8, 8), 0xE0);
    assert_eq!(bits_rev(0x05u8, 5), 0x14);
    assert_eq!(bits_rev(0x3u8, 3), 0x6);
  }

  #[test]
  fn register_sizes() {
    assert_eq!(register_bits(1), Some(8));
    assert_eq!(register_bits(8), Some(8));
    assert_eq!(register_bits(9), Some(16));
    assert_eq!(register_bits(24), Some(32));
    assert_eq!(register_bits(40), Some(64));
    assert_eq!(register_bits(82), Some(128));
    assert_eq!(register_bits(128), Some(128));
  }

  #[test]
  fn no_register_outside_one_to_128() {
    assert_eq!(register_bits(0), None);
    assert_eq!(register_bits(129), None);
    assert_eq!(register_bits(u32::MAX), None);
  }
}
