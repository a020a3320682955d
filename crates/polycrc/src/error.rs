//! Configuration errors.
//!
//! A malformed parameter set is the only failure mode of this crate. It is
//! detected while building a [`Crc`](crate::Crc); when that happens in a
//! `static` or `const` initializer the error becomes a compile error.

use core::fmt;

/// A CRC parameter set was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamsError {
  /// Width is zero or larger than 128 bits.
  InvalidWidth {
    /// The rejected width.
    width: u8,
  },
  /// The register type is not the smallest of `u8`..`u128` holding `width` bits.
  RegisterMismatch {
    /// CRC width in bits.
    width: u8,
    /// Size of the register type that was supplied.
    register_bits: u32,
  },
  /// The supplied check value disagrees with the CRC of `"123456789"`.
  CheckMismatch {
    /// Check value from the parameters.
    expected: u128,
    /// Check value computed from the parameters.
    computed: u128,
  },
}

impl ParamsError {
  /// Static description, usable in `const` panics.
  #[must_use]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::InvalidWidth { .. } => "invalid CRC width: must be 1..=128 bits",
      Self::RegisterMismatch { .. } => "register type is not the smallest power-of-two integer holding the CRC width",
      Self::CheckMismatch { .. } => "CRC check value doesn't match",
    }
  }
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidWidth { width } => write!(f, "{} (got {width})", self.as_str()),
      Self::RegisterMismatch { width, register_bits } => {
        write!(f, "{} (width {width}, register u{register_bits})", self.as_str())
      }
      Self::CheckMismatch { expected, computed } => {
        write!(f, "{} (expected {expected:#x}, computed {computed:#x})", self.as_str())
      }
    }
  }
}

impl core::error::Error for ParamsError {}
