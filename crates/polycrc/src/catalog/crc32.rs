//! CRCs of 17 to 32 bits, computed in a `u32` register.

catalog! {
  /// `CRC-17/CAN-FD`
  CRC17_CAN_FD: u32 = [17, 0x1_685B, 0, false, false, 0, 0x0_4F03];

  /// `CRC-21/CAN-FD`
  CRC21_CAN_FD: u32 = [21, 0x10_2899, 0, false, false, 0, 0x0E_D841];

  /// `CRC-24/BLE`
  CRC24_BLE: u32 = [24, 0x00_065B, 0x55_5555, true, true, 0, 0xC2_5A56];

  /// `CRC-24/INTERLAKEN`
  CRC24_INTERLAKEN: u32 = [24, 0x32_8B63, 0xFF_FFFF, false, false, 0xFF_FFFF, 0xB4_F3E6];

  /// `CRC-24/FLEXRAY-A`
  CRC24_FLEXRAY_A: u32 = [24, 0x5D_6DCB, 0xFE_DCBA, false, false, 0, 0x79_79BD];

  /// `CRC-24/FLEXRAY-B`
  CRC24_FLEXRAY_B: u32 = [24, 0x5D_6DCB, 0xAB_CDEF, false, false, 0, 0x1F_23B8];

  /// `CRC-24/LTE-B`
  CRC24_LTE_B: u32 = [24, 0x80_0063, 0, false, false, 0, 0x23_EF52];

  /// `CRC-24/OS9`
  CRC24_OS9: u32 = [24, 0x80_0063, 0xFF_FFFF, false, false, 0xFF_FFFF, 0x20_0FA5];

  /// `CRC-24`
  ///
  /// Also known as [`CRC24_OPENPGP`].
  CRC24: u32 = [24, 0x86_4CFB, 0xB7_04CE, false, false, 0, 0x21_CF02];

  /// `CRC-24/LTE-A`
  CRC24_LTE_A: u32 = [24, 0x86_4CFB, 0, false, false, 0, 0xCD_E703];

  /// `CRC-24/NR-C`
  CRC24_NR_C: u32 = [24, 0xB2_B117, 0, false, false, 0, 0xF4_8279];

  /// `CRC-30/CDMA`
  CRC30_CDMA: u32 = [30, 0x2030_B9C7, 0x3FFF_FFFF, false, false, 0x3FFF_FFFF, 0x04C3_4ABF];

  /// `CRC-31/PHILIPS`
  CRC31_PHILIPS: u32 = [31, 0x04C1_1DB7, 0x7FFF_FFFF, false, false, 0x7FFF_FFFF, 0x0CE9_E46C];

  /// `CRC-32/XFER`
  CRC32_XFER: u32 = [32, 0x0000_00AF, 0, false, false, 0, 0xBD0B_E338];

  /// `CRC-32`
  ///
  /// Also known as [`CRC32_ADCCP`], [`CRC32_ISO_HDLC`], [`CRC32_V42`], [`CRC32_XZ`].
  CRC32: u32 = [32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xCBF4_3926];

  /// `CRC-32/BZIP2`
  ///
  /// Also known as [`CRC32_AAL5`], [`CRC32_DECT_B`], [`B_CRC32`].
  CRC32_BZIP2: u32 = [32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, 0xFC89_1918];

  /// `CRC-32/EDC`
  ///
  /// Also known as [`CRC32_PRIME`].
  CRC32_EDC: u32 = [32, 0x04C1_1DB7, 0, false, false, 0, 0x89A1_897F];

  /// `CRC-32/JAMCRC`
  CRC32_JAMCRC: u32 = [32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0, 0x340B_C6D9];

  /// `CRC-32/MPEG2`
  CRC32_MPEG2: u32 = [32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0, 0x0376_E6E7];

  /// `CRC-32/POSIX`
  ///
  /// Also known as [`CRC32_CKSUM`].
  CRC32_POSIX: u32 = [32, 0x04C1_1DB7, 0, false, false, 0xFFFF_FFFF, 0x765E_7680];

  /// `CRC-32/C`
  ///
  /// Also known as [`CRC32_BASE91_C`], [`CRC32_CASTAGNOLI`], [`CRC32_INTERLAKEN`], [`CRC32_ISCSI`].
  CRC32_C: u32 = [32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xE306_9283];

  /// `CRC-32/K2`
  CRC32_K2: u32 = [32, 0x3258_3499, 0xFFFF_FFFF, true, true, 0, 0x1148_AB33];

  /// `CRC-32/MEF`
  ///
  /// Also known as [`CRC32_K`].
  CRC32_MEF: u32 = [32, 0x741B_8CD7, 0xFFFF_FFFF, true, true, 0, 0xD2C2_2F51];

  /// `CRC-32/CDROM-EDC`
  CRC32_CDROM_EDC: u32 = [32, 0x8001_801B, 0, true, true, 0, 0x6EC2_EDC4];

  /// `CRC-32/Q`
  ///
  /// Also known as [`CRC32_AIXM`].
  CRC32_Q: u32 = [32, 0x8141_41AB, 0, false, false, 0, 0x3010_BF7F];

  /// `CRC-32/D`
  ///
  /// Also known as [`CRC32_BASE91_D`].
  CRC32_D: u32 = [32, 0xA833_982B, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0x8731_5576];

  /// `CRC-32/AUTOSAR`
  CRC32_AUTOSAR: u32 = [32, 0xF4AC_FB13, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0x1697_D06A];
}

pub use self::CRC24 as CRC24_OPENPGP;
pub use self::CRC32 as CRC32_ADCCP;
pub use self::CRC32 as CRC32_ISO_HDLC;
pub use self::CRC32 as CRC32_V42;
pub use self::CRC32 as CRC32_XZ;
pub use self::CRC32_BZIP2 as CRC32_AAL5;
pub use self::CRC32_BZIP2 as CRC32_DECT_B;
pub use self::CRC32_BZIP2 as B_CRC32;
pub use self::CRC32_EDC as CRC32_PRIME;
pub use self::CRC32_POSIX as CRC32_CKSUM;
pub use self::CRC32_C as CRC32_BASE91_C;
pub use self::CRC32_C as CRC32_CASTAGNOLI;
pub use self::CRC32_C as CRC32_INTERLAKEN;
pub use self::CRC32_C as CRC32_ISCSI;
pub use self::CRC32_MEF as CRC32_K;
pub use self::CRC32_Q as CRC32_AIXM;
pub use self::CRC32_D as CRC32_BASE91_D;
