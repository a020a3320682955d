//! Incremental checksum traits.
//!
//! Traits for CRC engines that accumulate bytes (or bits) into a running
//! register and produce a value on demand.
//!
//! - **Streaming**: Incremental updates for data arriving in blocks
//! - **Reset-on-read**: `finalize()` hands out the value and rearms the engine
//! - **Bit granularity**: Fields that are not byte multiples feed in directly

use core::fmt::Debug;

use crate::{BitInput, VerificationError};

/// Incremental checksum engine.
///
/// # Usage
///
/// ```
/// use traits::Checksum;
///
/// /// Byte sum modulo 256.
/// #[derive(Default)]
/// struct Sum8(u8);
///
/// impl Checksum for Sum8 {
///   const OUTPUT_SIZE: usize = 1;
///   type Output = u8;
///
///   fn update(&mut self, data: &[u8]) {
///     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
///   }
///
///   fn finalize(&mut self) -> u8 {
///     let out = self.0;
///     self.reset();
///     out
///   }
///
///   fn reset(&mut self) {
///     self.0 = 0;
///   }
/// }
///
/// let mut engine = Sum8::default();
/// engine.update(b"123");
/// engine.update(b"456");
/// engine.update(b"789");
/// assert_eq!(engine.finalize(), 0xDD);
///
/// // The engine is fresh again: the next value is independent of the last.
/// engine.update(b"123456789");
/// assert_eq!(engine.finalize(), 0xDD);
/// assert!(engine.verify(0).is_ok());
/// ```
///
/// # Implementor Requirements
///
/// - Feeding a message through any sequence of `update` calls and then calling
///   `finalize()` once must equal the one-shot checksum of the concatenation
/// - `finalize()` must leave the engine in the state `reset()` produces
/// - `reset()` must restore the engine to its initial state
pub trait Checksum {
  /// Output size in bytes (size of the register type, not of the CRC width).
  ///
  /// - CRC-8 .. CRC-1: 1
  /// - CRC-16 .. CRC-10: 2
  /// - CRC-32 .. CRC-17: 4
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Update the engine with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the engine with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything fed so far and reset the engine.
  ///
  /// Once the value is returned the engine behaves as if newly created, so
  /// the same instance can start an independent computation immediately.
  #[must_use]
  fn finalize(&mut self) -> Self::Output;

  /// Reset the engine to its initial state, discarding accumulated input.
  fn reset(&mut self);

  /// Finalize and compare against `expected`.
  ///
  /// The engine is reset whether or not the values match.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] when the accumulated checksum differs from
  /// `expected`.
  #[inline]
  fn verify(&mut self, expected: Self::Output) -> Result<(), VerificationError> {
    if self.finalize() == expected {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }
}

/// Checksums that accept input at bit granularity.
///
/// Bits are taken from `value` starting at its least significant bit. How the
/// bits are ordered on the wire (LSB-first or MSB-first) is a property of the
/// algorithm, not of this trait.
pub trait BitChecksum: Checksum {
  /// Update the engine with the low `n_bits` bits of `value`.
  ///
  /// `n_bits` larger than `V::BITS` is clamped to `V::BITS`.
  fn update_bits<V: BitInput>(&mut self, value: V, n_bits: u32);
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Additive 8-bit checksum; the smallest thing that satisfies the contract.
  #[derive(Debug, Default)]
  struct Sum8 {
    acc: u8,
  }

  impl Checksum for Sum8 {
    const OUTPUT_SIZE: usize = 1;
    type Output = u8;

    fn update(&mut self, data: &[u8]) {
      for &b in data {
        self.acc = self.acc.wrapping_add(b);
      }
    }

    fn finalize(&mut self) -> u8 {
      let out = self.acc;
      self.reset();
      out
    }

    fn reset(&mut self) {
      self.acc = 0;
    }
  }

  impl BitChecksum for Sum8 {
    fn update_bits<V: BitInput>(&mut self, value: V, n_bits: u32) {
      let n_bits = n_bits.min(V::BITS);
      let masked = if n_bits >= 128 { value.widen() } else { value.widen() & ((1u128 << n_bits) - 1) };
      self.acc = self.acc.wrapping_add(masked as u8);
    }
  }

  #[test]
  fn vectored_matches_sequential() {
    let mut a = Sum8::default();
    a.update_vectored(&[b"12", b"", b"345"]);

    let mut b = Sum8::default();
    b.update(b"12345");

    assert_eq!(a.finalize(), b.finalize());
  }

  #[test]
  fn finalize_resets() {
    let mut s = Sum8::default();
    s.update(&[1, 2, 3]);
    assert_eq!(s.finalize(), 6);
    assert_eq!(s.finalize(), 0);
  }

  #[test]
  fn verify_reports_mismatch_and_resets() {
    let mut s = Sum8::default();
    s.update(&[10]);
    assert_eq!(s.verify(11), Err(VerificationError::new()));

    s.update(&[10]);
    assert_eq!(s.verify(10), Ok(()));
  }

  #[test]
  fn update_bits_clamps_to_input_width() {
    let mut s = Sum8::default();
    s.update_bits(0xFFu8, 200);
    assert_eq!(s.finalize(), 0xFF);

    s.update_bits(0b1011u8, 2);
    assert_eq!(s.finalize(), 0b11);
  }
}
