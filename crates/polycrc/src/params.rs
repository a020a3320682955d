//! CRC algorithm parameters.
//!
//! This module defines the parameter record for a CRC algorithm following
//! the conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

/// The check string: a CRC's check value is its CRC over these nine bytes.
pub const CHECK_INPUT: &[u8; 9] = b"123456789";

/// CRC algorithm parameters.
///
/// This struct captures all the parameters needed to define a CRC algorithm.
/// `W` is the register type (see [`Width`](crate::Width)).
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC (1-128)
/// - `poly`: The generator polynomial in direct form (without the implicit high bit)
/// - `init`: Initial register value, in direct form
/// - `reflect_in`: If true, input bytes are consumed LSB-first
/// - `reflect_out`: If true, the final register is reflected before the XOR
/// - `xor_out`: Value to XOR with the final CRC
/// - `check`: Expected CRC of [`CHECK_INPUT`]; verified when present
///
/// `poly`, `init` and `xor_out` are masked to `width` bits, so all-ones
/// values such as `u16::MAX` are accepted for narrower CRCs.
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC-32, CRC-32C) use
/// reflected input and output, which maps to LSB-first processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Params<W> {
  /// Width in bits (1-128).
  pub width: u8,
  /// Generator polynomial (direct form, without implicit high bit).
  pub poly: W,
  /// Initial value for the CRC register (direct form).
  pub init: W,
  /// Consume input bits LSB-first.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: W,
  /// Expected CRC of [`CHECK_INPUT`], if known.
  pub check: Option<W>,
}
