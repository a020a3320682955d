//! Lookup table shapes.
//!
//! Every table-driven CRC advances its register one byte at a time through a
//! single `lookup(index: u8)` primitive. Three table shapes implement it,
//! trading memory for work per byte:
//!
//! | Shape | Entries | Per-byte lookups | Contents |
//! |-------|---------|------------------|----------|
//! | [`LutKind::Lut16`] | 16 | 2 (plus a fold) | CRC of each 4-bit value |
//! | [`LutKind::Lut32`] | 32 | 2 | CRC of each low nibble, then each high nibble |
//! | [`LutKind::Lut256`] | 256 | 1 | CRC of each byte |
//!
//! The shape is a const parameter of [`Crc`](crate::Crc), so each algorithm
//! carries exactly the table it needs and the lookup dispatch disappears at
//! monomorphization. Which shape `Crc<W>` uses when the parameter is omitted
//! is a build-time choice:
//!
//! - default: [`LutKind::Lut32`]
//! - feature `lut16`: [`LutKind::Lut16`]
//! - feature `lut256`: [`LutKind::Lut256`] (wins if both features are on)

use core::{fmt, mem::size_of};

/// Table shape, identified by its number of entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LutKind {
  /// 16 entries, one per nibble.
  Lut16,
  /// 32 entries: 16 low-nibble entries followed by 16 high-nibble entries.
  Lut32,
  /// 256 entries, one per byte.
  Lut256,
}

impl LutKind {
  /// Shape selected for `Crc<W>` by the enabled Cargo features.
  #[cfg(feature = "lut256")]
  pub const DEFAULT: Self = Self::Lut256;
  /// Shape selected for `Crc<W>` by the enabled Cargo features.
  #[cfg(all(feature = "lut16", not(feature = "lut256")))]
  pub const DEFAULT: Self = Self::Lut16;
  /// Shape selected for `Crc<W>` by the enabled Cargo features.
  #[cfg(not(any(feature = "lut16", feature = "lut256")))]
  pub const DEFAULT: Self = Self::Lut32;

  /// All shapes, smallest first.
  pub const ALL: [Self; 3] = [Self::Lut16, Self::Lut32, Self::Lut256];

  /// Number of table entries.
  #[inline]
  #[must_use]
  pub const fn len(self) -> usize {
    match self {
      Self::Lut16 => 16,
      Self::Lut32 => 32,
      Self::Lut256 => 256,
    }
  }

  /// Shape with `len` entries, if there is one.
  #[inline]
  #[must_use]
  pub const fn from_len(len: usize) -> Option<Self> {
    match len {
      16 => Some(Self::Lut16),
      32 => Some(Self::Lut32),
      256 => Some(Self::Lut256),
      _ => None,
    }
  }

  /// Short lowercase name (`"lut16"`, `"lut32"`, `"lut256"`), matching the
  /// Cargo feature names.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Lut16 => "lut16",
      Self::Lut32 => "lut32",
      Self::Lut256 => "lut256",
    }
  }
}

impl fmt::Display for LutKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Entry count of the default table shape.
pub const DEFAULT_LUT_LEN: usize = LutKind::DEFAULT.len();

/// A lookup table of `N` register-sized entries.
///
/// Holds nothing but the entries, so `size_of::<Lut<W, N>>()` is exactly
/// `N * size_of::<W>()`. Tables are built by [`Crc`](crate::Crc) and read
/// back through [`Crc::lookup`](crate::Crc::lookup); this type only exposes
/// them for inspection.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Lut<W, const N: usize> {
  entries: [W; N],
}

impl<W, const N: usize> Lut<W, N> {
  /// Shape of this table.
  ///
  /// Evaluating this for an `N` other than 16, 32 or 256 fails to compile,
  /// which is how unsupported table lengths are rejected.
  pub const KIND: LutKind = match LutKind::from_len(N) {
    Some(kind) => kind,
    None => panic!("lookup tables have 16, 32 or 256 entries"),
  };

  /// Table footprint in bytes.
  pub const SIZE_BYTES: usize = N * size_of::<W>();

  #[inline]
  pub(crate) const fn from_entries(entries: [W; N]) -> Self {
    Self { entries }
  }

  /// Shape of this table.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> LutKind {
    Self::KIND
  }

  /// Raw entries, in the layout described by [`LutKind`].
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[W; N] {
    &self.entries
  }

  /// Number of entries.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    N
  }

  /// Always `false`: tables hold at least 16 entries.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    N == 0
  }
}

impl<W, const N: usize> fmt::Debug for Lut<W, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Lut")
      .field("kind", &Self::KIND)
      .field("size_bytes", &Self::SIZE_BYTES)
      .finish_non_exhaustive()
  }
}
