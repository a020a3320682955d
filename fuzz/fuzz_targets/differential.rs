//! Differential fuzzing against reference implementations.
//!
//! Compares the table-driven paths against the bitwise reference and the
//! `crc` crate to catch any discrepancies.

#![no_main]

use libfuzzer_sys::fuzz_target;
use polycrc::{CRC3_GSM, CRC5_USB, CRC16_ARC, CRC16_CCITT_FALSE, CRC32, CRC64_XZ, CRC82_DARC, CrcLut16, CrcLut256};

fuzz_target!(|data: &[u8]| {
  test_crc32_differential(data);
  test_shapes(data);
  test_reference_paths(data);
});

fn test_crc32_differential(data: &[u8]) {
  let ours = CRC32.calc(data);
  let reference = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC).checksum(data);

  assert_eq!(
    ours, reference,
    "CRC-32 differential mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );

  let ours = CRC64_XZ.calc(data);
  let mut digest = crc64fast::Digest::new();
  digest.write(data);
  let reference = digest.sum64();
  assert_eq!(
    ours, reference,
    "CRC-64/XZ differential mismatch: ours={ours:#018x}, reference={reference:#018x}, len={}",
    data.len()
  );

  let ours = CRC5_USB.calc(data);
  let reference = crc::Crc::<u8>::new(&crc::CRC_5_USB).checksum(data);
  assert_eq!(ours, reference, "CRC-5/USB differential mismatch, len={}", data.len());
}

fn test_shapes(data: &[u8]) {
  let l16 = CrcLut16::<u16>::new(CRC16_CCITT_FALSE.params());
  let l256 = CrcLut256::<u16>::new(CRC16_CCITT_FALSE.params());
  let expected = CRC16_CCITT_FALSE.calc(data);
  assert_eq!(l16.calc(data), expected, "CRC-16 lut16 mismatch");
  assert_eq!(l256.calc(data), expected, "CRC-16 lut256 mismatch");

  let l16 = CrcLut16::<u8>::new(CRC3_GSM.params());
  let l256 = CrcLut256::<u8>::new(CRC3_GSM.params());
  let expected = CRC3_GSM.calc(data);
  assert_eq!(l16.calc(data), expected, "CRC-3 lut16 mismatch");
  assert_eq!(l256.calc(data), expected, "CRC-3 lut256 mismatch");
}

fn test_reference_paths(data: &[u8]) {
  assert_eq!(CRC16_ARC.calc(data), CRC16_ARC.calc_reference(data), "CRC-16/ARC reference mismatch");
  assert_eq!(CRC82_DARC.calc(data), CRC82_DARC.calc_reference(data), "CRC-82 reference mismatch");
  assert_eq!(CRC3_GSM.calc(data), CRC3_GSM.calc_reference(data), "CRC-3 reference mismatch");
}
