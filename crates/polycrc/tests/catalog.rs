//! Catalogue integrity: published check values, reversed polynomials and
//! register types, across every table shape.

use polycrc::*;

/// Rebuild `$crc` with each table shape and run `$check` on all of them.
macro_rules! with_each_shape {
  ($w:ty, $crc:expr, |$c:ident| $check:expr) => {{
    let params = $crc.params();
    {
      let $c = CrcLut16::<$w>::new(params);
      $check;
    }
    {
      let $c = CrcLut32::<$w>::new(params);
      $check;
    }
    {
      let $c = CrcLut256::<$w>::new(params);
      $check;
    }
  }};
}

/// Run `$check` for every catalogue entry and table shape. `$orig` is the
/// catalogue static, `$c` the rebuilt algorithm.
macro_rules! for_each_entry {
  (|$name:ident, $orig:ident, $c:ident| $check:expr) => {
    for entry in CATALOG {
      let $name = entry.name();
      match entry.crc() {
        AnyCrc::U8($orig) => with_each_shape!(u8, $orig, |$c| $check),
        AnyCrc::U16($orig) => with_each_shape!(u16, $orig, |$c| $check),
        AnyCrc::U32($orig) => with_each_shape!(u32, $orig, |$c| $check),
        AnyCrc::U64($orig) => with_each_shape!(u64, $orig, |$c| $check),
        AnyCrc::U128($orig) => with_each_shape!(u128, $orig, |$c| $check),
      }
    }
  };
}

#[test]
fn check_values_hold_for_every_shape() {
  for_each_entry!(|name, _orig, c| {
    assert_eq!(c.calc(CHECK_INPUT), c.check(), "{name} ({})", c.lut_kind());
    assert_eq!(c.calc_reference(CHECK_INPUT), c.check(), "{name}");
  });
}

#[test]
fn shapes_agree_on_every_lookup_index() {
  for_each_entry!(|name, orig, c| {
    for i in 0..=255u8 {
      assert_eq!(c.lookup(i), orig.lookup(i), "{name} ({}) index {i}", c.lut_kind());
    }
  });
}

#[test]
fn published_reversed_polynomials() {
  macro_rules! published {
    ($($crc:ident => $rev:expr,)*) => {
      $(assert_eq!(u128::from($crc.poly_rev()), $rev, stringify!($crc));)*
    };
  }

  published! {
    CRC1 => 0x1,
    CRC3_GSM => 0x6,
    CRC4_ITU => 0xC,
    CRC5_USB => 0x14,
    CRC5_EPC => 0x12,
    CRC5_ITU => 0x15,
    CRC6_ITU => 0x30,
    CRC6_CDMA2000_B => 0x38,
    CRC6_DARC => 0x26,
    CRC6_NR => 0x21,
    CRC6_CDMA2000_A => 0x39,
    CRC6_GSM => 0x3D,
    CRC7 => 0x48,
    CRC7_UMTS => 0x51,
    CRC7_ROHC => 0x79,
    CRC7_MVB => 0x53,
    CRC8 => 0xE0,
    CRC8_EBU => 0xB8,
    CRC8_AUTOSAR => 0xF4,
    CRC8_MAXIM => 0x8C,
    CRC8_DARC => 0x9C,
    CRC8_GSM_B => 0x92,
    CRC8_CDMA2000 => 0xD9,
    CRC8_DVB_S2 => 0xAB,
    CRC8_BLUETOOTH => 0xE5,
    CRC10_GSM => 0x2BA,
    CRC10 => 0x331,
    CRC10_CDMA2000 => 0x26F,
    CRC11_UMTS => 0x706,
    CRC11 => 0x50E,
    CRC11_NR => 0x423,
    CRC12_DECT => 0xF01,
    CRC12_GSM => 0x8CB,
    CRC12_CDMA2000 => 0xC8F,
    CRC13_BBC => 0x15E7,
    CRC14_GSM => 0x2D01,
    CRC14_DARC => 0x2804,
    CRC15 => 0x4CD1,
    CRC15_MPT1327 => 0x540B,
    CRC16_DECT_R => 0x91A0,
    CRC16_NRSC5 => 0xD010,
    CRC16_AUG_CCITT => 0x8408,
    CRC16_PROFIBUS => 0xF3B8,
    CRC16_CHAKRAVARTY => 0xA8F4,
    CRC16_DNP => 0xA6BC,
    CRC16_M17 => 0xAC9A,
    CRC16_LJ1200 => 0xC6F6,
    CRC16_OPENSAFETY_B => 0xDAAE,
    CRC16_ARC => 0xA001,
    CRC16_T10_DIF => 0xEDD1,
    CRC16_CDMA2000 => 0xE613,
    CRC16_ARINC => 0xD405,
    CRC16_TELEDISK => 0xE905,
    CRC17_CAN_FD => 0x1_B42D,
    CRC21_CAN_FD => 0x13_2281,
    CRC24_BLE => 0xDA_6000,
    CRC24_INTERLAKEN => 0xC6_D14C,
    CRC24_FLEXRAY_A => 0xD3_B6BA,
    CRC24_LTE_B => 0xC6_0001,
    CRC24 => 0xDF_3261,
    CRC24_NR_C => 0xE8_8D4D,
    CRC30_CDMA => 0x38E7_4301,
    CRC31_PHILIPS => 0x76DC_4190,
    CRC32_XFER => 0xF500_0000,
    CRC32 => 0xEDB8_8320,
    CRC32_C => 0x82F6_3B78,
    CRC32_MEF => 0xEB31_D82E,
    CRC32_K2 => 0x992C_1A4C,
    CRC32_CDROM_EDC => 0xD801_8001,
    CRC32_Q => 0xD582_8281,
    CRC32_D => 0xD419_CC15,
    CRC32_AUTOSAR => 0xC8DF_352F,
    CRC40_GSM => 0x90_0041_2000,
    CRC64_GO_ISO => 0xD800_0000_0000_0000,
    CRC64_MS => 0x92C6_4265_D321_39A4,
    CRC64 => 0xC96C_5795_D787_0F42,
    CRC64_REDIS => 0x95AC_9329_AC4B_C9B5,
    CRC82_DARC => 0x2_2080_8A00_A202_2200_C430,
  }
}

#[test]
fn register_types() {
  macro_rules! register {
    ($($crc:ident: $w:ty,)*) => {
      $(
        let _: &Crc<$w> = &$crc;
        assert_eq!($crc.register_bits(), <$w>::BITS, stringify!($crc));
      )*
    };
  }

  register! {
    CRC1: u8,
    CRC3_GSM: u8,
    CRC4_ITU: u8,
    CRC5_USB: u8,
    CRC6_ITU: u8,
    CRC7: u8,
    CRC8: u8,
    CRC10_GSM: u16,
    CRC11_UMTS: u16,
    CRC12_DECT: u16,
    CRC13_BBC: u16,
    CRC14_GSM: u16,
    CRC15: u16,
    CRC16_DECT_R: u16,
    CRC17_CAN_FD: u32,
    CRC21_CAN_FD: u32,
    CRC24_BLE: u32,
    CRC30_CDMA: u32,
    CRC31_PHILIPS: u32,
    CRC32_XFER: u32,
    CRC40_GSM: u64,
    CRC64_GO_ISO: u64,
    CRC82_DARC: u128,
  }
}

#[test]
fn aliases_are_the_same_algorithm() {
  assert!(core::ptr::eq(&CRC32_ISCSI, &CRC32_C));
  assert!(core::ptr::eq(&CRC32_CASTAGNOLI, &CRC32_C));
  assert!(core::ptr::eq(&CRC16, &CRC16_ARC));
  assert!(core::ptr::eq(&X_CRC12, &CRC12_DECT));
  assert!(core::ptr::eq(&CRC64_ECMA182, &CRC64));
  assert!(core::ptr::eq(&CRC_B, &CRC16_X25));

  for entry in CATALOG {
    for alias in entry.aliases() {
      let found = catalog::find(alias).unwrap();
      assert!(core::ptr::eq(found, entry), "{alias}");
    }
  }
}

#[test]
fn params_round_trip() {
  for_each_entry!(|name, orig, c| {
    assert_eq!(c.params(), orig.params(), "{name}");
    assert_eq!(c.poly_rev(), orig.poly_rev(), "{name}");
    assert_eq!(c.register_init(), orig.register_init(), "{name}");
  });
}
