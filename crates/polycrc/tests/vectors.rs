//! Known-answer tests.
//!
//! Check values come from the CRC catalogue; the long-message values from
//! independent implementations over `0..=255`.

use polycrc::*;

// ─────────────────────────────────────────────────────────────────────────────
// Check string
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_values() {
  assert_eq!(CRC16_CCITT_FALSE.calc(CHECK_INPUT), 0x29B1);
  assert_eq!(CRC16_ARC.calc(CHECK_INPUT), 0xBB3D);
  assert_eq!(CRC16_XMODEM.calc(CHECK_INPUT), 0x31C3);
  assert_eq!(CRC32.calc(CHECK_INPUT), 0xCBF4_3926);
  assert_eq!(CRC32_C.calc(CHECK_INPUT), 0xE306_9283);
  assert_eq!(CRC32_MPEG2.calc(CHECK_INPUT), 0x0376_E6E7);
  assert_eq!(CRC64_XZ.calc(CHECK_INPUT), 0x995D_C9BB_DF19_39FA);
  assert_eq!(CRC64_GO_ISO.calc(CHECK_INPUT), 0xB909_56C7_75A4_1001);
  assert_eq!(CRC5_USB.calc(CHECK_INPUT), 0x19);
  assert_eq!(CRC8.calc(CHECK_INPUT), 0xF4);
  assert_eq!(CRC82_DARC.calc(CHECK_INPUT), 0x9EA8_3F62_5023_801F_D612);
}

#[test]
fn custom_five_bit_crc() {
  let crc = CrcLut16::<u8>::new(Params {
    width: 5,
    poly: 0x15,
    init: 0,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0,
    check: None,
  });
  assert_eq!(crc.check(), 0x1C);
  assert_eq!(crc.calc(CHECK_INPUT), 0x1C);
}

// ─────────────────────────────────────────────────────────────────────────────
// Long messages
// ─────────────────────────────────────────────────────────────────────────────

fn all_bytes() -> [u8; 256] {
  core::array::from_fn(|i| i as u8)
}

#[test]
fn all_byte_values() {
  let data = all_bytes();

  let crc8 = Crc::<u8>::new(Params {
    width: 8,
    poly: 0x07,
    init: 0,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0,
    check: None,
  });
  assert_eq!(crc8.calc(&data), 0x14);
  assert_eq!(CRC8.calc(&data), 0x14);

  let arc = Crc::<u16>::new(Params {
    width: 16,
    poly: 0x8005,
    init: 0,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0,
    check: None,
  });
  assert_eq!(arc.calc(&data), 0xBAD3);
  assert_eq!(CRC16_ARC.calc(&data), 0xBAD3);

  assert_eq!(CRC32.calc(&data), 0x2905_8C73);
}

#[test]
fn long_messages_agree_across_shapes() {
  let data: [u8; 256] = all_bytes();
  let l16 = CrcLut16::<u32>::new(CRC32.params());
  let l32 = CrcLut32::<u32>::new(CRC32.params());
  let l256 = CrcLut256::<u32>::new(CRC32.params());
  assert_eq!(l16.calc(&data), 0x2905_8C73);
  assert_eq!(l32.calc(&data), 0x2905_8C73);
  assert_eq!(l256.calc(&data), 0x2905_8C73);
}

// ─────────────────────────────────────────────────────────────────────────────
// Boundaries
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input() {
  // Init passed through the output transform.
  assert_eq!(CRC32.calc(&[]), 0);
  assert_eq!(CRC16_CCITT_FALSE.calc(&[]), 0xFFFF);
  assert_eq!(CRC5_USB.calc(&[]), 0);
  assert_eq!(CRC3_ROHC.calc(&[]), 0x07);
  assert_eq!(CRC64_XZ.calc(&[]), 0);
  assert_eq!(CRC32.calc_bits(0u32, 0), 0);
  assert_eq!(CRC32.engine().finalize(), 0);
}

#[test]
fn single_bytes() {
  assert_eq!(CRC32.calc(&[0]), 0xD202_EF8D);
  assert_eq!(CRC32.calc(&[0xFF]), 0xFF00_0000);
  assert_eq!(CRC16_XMODEM.calc(&[0x01]), 0x1021);
  assert_eq!(CRC8.calc(&[0x01]), 0x07);
}

#[test]
fn verify_reports_mismatch() {
  assert_eq!(CRC32.verify(CHECK_INPUT, 0xCBF4_3926), Ok(()));
  assert_eq!(CRC32.verify(CHECK_INPUT, 0xCBF4_3927), Err(VerificationError::new()));
}

#[test]
fn construction_errors() {
  let params = CRC32.params();
  assert_eq!(
    Crc::<u32>::try_new(Params { width: 0, ..params }),
    Err(ParamsError::InvalidWidth { width: 0 })
  );
  assert_eq!(
    Crc::<u32>::try_new(Params { width: 16, ..params }),
    Err(ParamsError::RegisterMismatch { width: 16, register_bits: 32 })
  );
  assert_eq!(
    Crc::<u32>::try_new(Params { check: Some(0xCBF4_3927), ..params }),
    Err(ParamsError::CheckMismatch { expected: 0xCBF4_3927, computed: 0xCBF4_3926 })
  );
  assert_eq!(Crc::<u32>::try_new(params), Ok(CRC32));
}
