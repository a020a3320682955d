//! CRCs of 33 to 64 bits, computed in a `u64` register.

catalog! {
  /// `CRC-40/GSM`
  CRC40_GSM: u64 = [40, 0x00_0482_0009, 0, false, false, 0xFF_FFFF_FFFF, 0xD4_164F_C646];

  /// `CRC-64/GO-ISO`
  CRC64_GO_ISO: u64 = [64, 0x0000_0000_0000_001B, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF, 0xB909_56C7_75A4_1001];

  /// `CRC-64/MS`
  CRC64_MS: u64 = [64, 0x259C_84CB_A642_6349, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0, 0x75D4_B74F_024E_CEEA];

  /// `CRC-64`
  ///
  /// Also known as [`CRC64_ECMA182`].
  CRC64: u64 = [64, 0x42F0_E1EB_A9EA_3693, 0, false, false, 0, 0x6C40_DF5F_0B49_7347];

  /// `CRC-64/WE`
  CRC64_WE: u64 = [64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, false, false, 0xFFFF_FFFF_FFFF_FFFF, 0x62EC_59E3_F1A4_F00A];

  /// `CRC-64/XZ`
  ///
  /// Also known as [`CRC64_GO_ECMA`].
  CRC64_XZ: u64 = [64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF, 0x995D_C9BB_DF19_39FA];

  /// `CRC-64/REDIS`
  CRC64_REDIS: u64 = [64, 0xAD93_D235_94C9_35A9, 0, true, true, 0, 0xE9C6_D914_C4B8_D9CA];
}

pub use self::CRC64 as CRC64_ECMA182;
pub use self::CRC64_XZ as CRC64_GO_ECMA;
