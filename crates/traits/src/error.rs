//! Error types shared by checksum engines.
//!
//! Computation itself never fails; the only runtime error is a checksum that
//! does not match the value a caller expected. Individual crates define their
//! own configuration errors as needed.

use core::fmt;

/// Checksum verification failed.
///
/// Returned when a computed checksum differs from the expected one (a frame
/// check sequence, a stored trailer). Carries no detail: callers already hold
/// both values.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: u32, expected: u32) -> Result<(), VerificationError> {
///   if computed == expected {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// assert!(verify(0xCBF4_3926, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// The verification error. `#[non_exhaustive]` keeps the struct literal
  /// private, so construct it here.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("checksum mismatch")
  }
}

impl core::error::Error for VerificationError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};
  use core::error::Error;

  use super::*;

  #[test]
  fn formats() {
    let err = VerificationError::new();
    assert_eq!(err.to_string(), "checksum mismatch");
    assert_eq!(format!("{err:?}"), "VerificationError");
  }

  #[test]
  fn default_is_new() {
    assert_eq!(VerificationError::default(), VerificationError::new());
  }

  #[test]
  fn is_a_leaf_error() {
    assert!(VerificationError::new().source().is_none());
  }

  #[test]
  fn zero_sized_and_thread_safe() {
    fn bounds<T: Send + Sync + Unpin + Copy>() {}
    bounds::<VerificationError>();
    assert_eq!(size_of::<VerificationError>(), 0);
  }
}
