//! Fuzz target for the incremental engine.
//!
//! Tests that arbitrary sequences of byte and bit updates produce the same
//! result as one pass over the whole input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polycrc::{CRC7, CRC32, CRC40_GSM};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Bit chunks `(value, n_bits)`
  bits: Vec<(u64, u8)>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  test_streaming_bytes(data, &input.chunk_sizes);
  test_streaming_bits(&input.bits);
});

fn test_streaming_bytes(data: &[u8], chunk_sizes: &[usize]) {
  let expected = CRC32.calc(data);

  let mut engine = CRC32.engine();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    engine.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(engine.finalize(), expected, "crc32 streaming mismatch");
}

/// Bit chunks against a bit-by-bit replay through single-bit updates.
fn test_streaming_bits(bits: &[(u64, u8)]) {
  let mut chunked = CRC7.engine();
  let mut single = CRC7.engine();
  let mut wide = CRC40_GSM.engine();
  let mut wide_single = CRC40_GSM.engine();

  for &(value, n_bits) in bits {
    let n_bits = u32::from(n_bits % 65);
    chunked.update_bits(value, n_bits);
    wide.update_bits(value, n_bits);

    // CRC-7/MMC and CRC-40/GSM are direct: bit `n_bits - 1` comes first.
    for i in (0..n_bits).rev() {
      single.update_bits(value >> i, 1);
      wide_single.update_bits(value >> i, 1);
    }
  }

  assert_eq!(chunked.finalize(), single.finalize(), "crc7 bit streaming mismatch");
  assert_eq!(wide.finalize(), wide_single.finalize(), "crc40 bit streaming mismatch");
}
