//! Unsigned integer bit sources.

/// An unsigned integer that can be consumed bit by bit.
///
/// Bit-granular checksum APIs take `n_bits` bits of a value starting from its
/// least significant bit. Implementations widen losslessly to `u128` so a
/// single code path serves every input type.
pub trait BitInput: Copy {
  /// Number of bits in the input type.
  const BITS: u32;

  /// Zero-extend the value to `u128`.
  #[must_use]
  fn widen(self) -> u128;
}

macro_rules! impl_bit_input {
  ($($ty:ty),* $(,)?) => {
    $(
      impl BitInput for $ty {
        const BITS: u32 = <$ty>::BITS;

        #[inline(always)]
        fn widen(self) -> u128 {
          self as u128
        }
      }
    )*
  };
}

impl_bit_input!(u8, u16, u32, u64, u128, usize);
