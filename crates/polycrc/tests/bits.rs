//! Bit-granular input against whole-byte input.
//!
//! A 64-bit message fed as chunks of 2 to 12 bits must leave the register
//! exactly where the same eight bytes would.

use polycrc::{catalog::AnyCrc, *};

const MESSAGE: u64 = 0b11011101_11101111_10111111_01111111_01111111_10111111_11110111_11111111;

/// `(value, n_bits)` in LSB-first stream order: the first chunk holds the
/// lowest 12 bits of [`MESSAGE`].
const CHUNKS: [(u16, u32); 9] = [
  (0b0111_1111_1111, 12),
  (0b011_1111_1111, 11),
  (0b0_1111_1111, 9),
  (0b0111_1111, 8),
  (0b011_1111, 7),
  (0b01_1111, 6),
  (0b0_1111, 5),
  (0b0111, 4),
  (0b11, 2),
];

#[test]
fn chunks_cover_the_message() {
  let mut value = 0u64;
  let mut shift = 0;
  for (chunk, n_bits) in CHUNKS {
    value |= u64::from(chunk) << shift;
    shift += n_bits;
  }
  assert_eq!(shift, 64);
  assert_eq!(value, MESSAGE);
}

macro_rules! check_chunks {
  ($name:expr, $crc:expr) => {{
    let crc = $crc;
    let mut reg = 0;
    if crc.reflect_in() {
      for (chunk, n_bits) in CHUNKS {
        reg = crc.update_register_bits(reg, chunk, n_bits);
      }
      assert_eq!(reg, crc.update_register(0, &MESSAGE.to_le_bytes()), "{}", $name);
    } else {
      for (chunk, n_bits) in CHUNKS.iter().rev().copied() {
        reg = crc.update_register_bits(reg, chunk, n_bits);
      }
      assert_eq!(reg, crc.update_register(0, &MESSAGE.to_be_bytes()), "{}", $name);
    }
    assert_eq!(reg, crc.update_register_bits(0, MESSAGE, 64), "{}", $name);
  }};
}

#[test]
fn bit_chunks_match_bytes_for_every_entry() {
  for entry in CATALOG {
    match entry.crc() {
      AnyCrc::U8(crc) => check_chunks!(entry.name(), crc),
      AnyCrc::U16(crc) => check_chunks!(entry.name(), crc),
      AnyCrc::U32(crc) => check_chunks!(entry.name(), crc),
      AnyCrc::U64(crc) => check_chunks!(entry.name(), crc),
      AnyCrc::U128(crc) => check_chunks!(entry.name(), crc),
    }
  }
}

#[test]
fn bit_chunks_match_bytes_for_every_shape() {
  for params in [CRC5_USB.params(), CRC3_ROHC.params(), CRC7.params()] {
    check_chunks!("lut16", &CrcLut16::<u8>::new(params));
    check_chunks!("lut32", &CrcLut32::<u8>::new(params));
    check_chunks!("lut256", &CrcLut256::<u8>::new(params));
  }
  for params in [CRC32.params(), CRC24.params(), CRC31_PHILIPS.params()] {
    check_chunks!("lut16", &CrcLut16::<u32>::new(params));
    check_chunks!("lut32", &CrcLut32::<u32>::new(params));
    check_chunks!("lut256", &CrcLut256::<u32>::new(params));
  }
}

#[test]
fn single_bits_match_bytes() {
  for crc in [&CRC8, &CRC8_MAXIM, &CRC4_ITU, &CRC1] {
    let mut engine = crc.engine();
    for byte in *CHECK_INPUT {
      if crc.reflect_in() {
        for i in 0..8 {
          engine.update_bits(byte >> i, 1);
        }
      } else {
        for i in (0..8).rev() {
          engine.update_bits(byte >> i, 1);
        }
      }
    }
    assert_eq!(engine.finalize(), crc.check());
  }
}

#[test]
fn zero_bits_leave_register_unchanged() {
  let mut engine = CRC16_ARC.engine();
  engine.update(b"1234");
  let before = engine.register();
  engine.update_bits(u128::MAX, 0);
  engine.update(&[]);
  assert_eq!(engine.register(), before);
}

#[test]
fn oversized_bit_counts_clamp_to_input_type() {
  assert_eq!(CRC32.calc_bits(0xA5u8, 200), CRC32.calc_bits(0xA5u8, 8));
  assert_eq!(CRC32.calc_bits(0xA5u8, 200), CRC32.calc(&[0xA5]));
}

#[test]
fn calc_byte_partial_bits() {
  // Three bits through CRC-3/GSM, MSB first: 0b101.
  let reg = CRC3_GSM.calc_byte(0b101, 3, CRC3_GSM.register_init());
  assert_eq!(reg, CRC3_GSM.update_register_bits(CRC3_GSM.register_init(), 0b101u8, 3));
  // Zero bits is a no-op.
  assert_eq!(CRC3_GSM.calc_byte(0xFF, 0, 0b010), 0b010);
}
