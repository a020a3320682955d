//! Incremental CRC computation.
//!
//! An [`Engine`] is a running register plus a reference to its [`Crc`]: two
//! machine words, cheap to create and copy. It implements
//! [`Checksum`](traits::Checksum) and [`BitChecksum`](traits::BitChecksum);
//! the inherent methods of the same names are generated per register type in
//! [`crate::macros`], so the traits need not be in scope.
//!
//! # Lifecycle
//!
//! ```text
//!          update / update_bits
//!              ┌──────────┐
//!              v          │
//! Fresh ──> Accumulating ─┘
//!   ^           │
//!   └─ finalize ┘   (also from Fresh)
//! ```
//!
//! [`finalize`](Engine::finalize) returns the CRC and puts the register back
//! to its initial value, so one engine serves any number of consecutive
//! messages.

use core::fmt;

use crate::{Crc, Width, lut::DEFAULT_LUT_LEN};

/// Incremental CRC engine bound to a [`Crc`].
///
/// # Examples
///
/// ```
/// use polycrc::CRC32;
///
/// let mut engine = CRC32.engine();
/// engine.update(b"123");
/// engine.update(b"456");
/// engine.update(b"789");
/// assert_eq!(engine.finalize(), 0xCBF4_3926);
///
/// // Reset on read: the next message starts from scratch.
/// engine.update(b"123456789");
/// assert_eq!(engine.finalize(), 0xCBF4_3926);
/// ```
#[derive(Clone, Copy)]
pub struct Engine<'a, W: Width, const N: usize = { DEFAULT_LUT_LEN }> {
  pub(crate) crc: &'a Crc<W, N>,
  pub(crate) register: W,
}

impl<'a, W: Width, const N: usize> Engine<'a, W, N> {
  /// The algorithm this engine computes.
  #[inline]
  #[must_use]
  pub const fn algorithm(&self) -> &'a Crc<W, N> {
    self.crc
  }

  /// Raw register, before the output transform.
  ///
  /// Can be threaded through [`Crc::update_register`] and friends to continue
  /// the computation without an engine.
  #[inline]
  #[must_use]
  pub const fn register(&self) -> W {
    self.register
  }
}

impl<W: Width, const N: usize> fmt::Debug for Engine<'_, W, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Engine")
      .field("width", &self.crc.width)
      .field("register", &format_args!("{:#x}", self.register))
      .finish_non_exhaustive()
  }
}
