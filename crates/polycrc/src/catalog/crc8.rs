//! CRCs of 1 to 8 bits, computed in a `u8` register.

catalog! {
  /// `CRC-1`
  CRC1: u8 = [1, 0x01, 0, true, true, 0, 0x01];

  /// `CRC-3/GSM`
  CRC3_GSM: u8 = [3, 0x03, 0, false, false, 0x07, 0x04];

  /// `CRC-3/ROHC`
  CRC3_ROHC: u8 = [3, 0x03, 0x07, true, true, 0, 0x06];

  /// `CRC-4/ITU`
  ///
  /// Also known as [`CRC4_G704`].
  CRC4_ITU: u8 = [4, 0x03, 0, true, true, 0, 0x07];

  /// `CRC-4/INTERLAKEN`
  CRC4_INTERLAKEN: u8 = [4, 0x03, 0x0F, false, false, 0x0F, 0x0B];

  /// `CRC-5/USB`
  CRC5_USB: u8 = [5, 0x05, 0x1F, true, true, 0x1F, 0x19];

  /// `CRC-5/EPC`
  ///
  /// Also known as [`CRC5_EPC_C1G2`].
  CRC5_EPC: u8 = [5, 0x09, 0x09, false, false, 0, 0];

  /// `CRC-5/ITU`
  ///
  /// Also known as [`CRC5_G704`].
  CRC5_ITU: u8 = [5, 0x15, 0, true, true, 0, 0x07];

  /// `CRC-6/ITU`
  ///
  /// Also known as [`CRC6_G704`].
  CRC6_ITU: u8 = [6, 0x03, 0, true, true, 0, 0x06];

  /// `CRC-6/CDMA2000-B`
  CRC6_CDMA2000_B: u8 = [6, 0x07, 0x3F, false, false, 0, 0x3B];

  /// `CRC-6/DARC`
  CRC6_DARC: u8 = [6, 0x19, 0, true, true, 0, 0x26];

  /// `CRC-6/NR`
  CRC6_NR: u8 = [6, 0x21, 0, false, false, 0, 0x15];

  /// `CRC-6/CDMA2000-A`
  CRC6_CDMA2000_A: u8 = [6, 0x27, 0x3F, false, false, 0, 0x0D];

  /// `CRC-6/GSM`
  CRC6_GSM: u8 = [6, 0x2F, 0, false, false, 0x3F, 0x13];

  /// `CRC-7`
  ///
  /// Also known as [`CRC7_MMC`].
  CRC7: u8 = [7, 0x09, 0, false, false, 0, 0x75];

  /// `CRC-7/UMTS`
  CRC7_UMTS: u8 = [7, 0x45, 0, false, false, 0, 0x61];

  /// `CRC-7/ROHC`
  CRC7_ROHC: u8 = [7, 0x4F, 0x7F, true, true, 0, 0x53];

  /// `CRC-7/MVB`
  CRC7_MVB: u8 = [7, 0x65, 0, false, false, 0, 0x1F];

  /// `CRC-8`
  ///
  /// Also known as [`CRC8_PRIME`], [`CRC8_SMBUS`].
  CRC8: u8 = [8, 0x07, 0, false, false, 0, 0xF4];

  /// `CRC-8/HDLC`
  CRC8_HDLC: u8 = [8, 0x07, 0xFF, true, true, 0xFF, 0x2F];

  /// `CRC-8/ITU`
  ///
  /// Also known as [`CRC8_I432_1`].
  CRC8_ITU: u8 = [8, 0x07, 0, false, false, 0x55, 0xA1];

  /// `CRC-8/ROHC`
  CRC8_ROHC: u8 = [8, 0x07, 0xFF, true, true, 0, 0xD0];

  /// `CRC-8/EBU`
  ///
  /// Also known as [`CRC8_AES`], [`CRC8_TECH3250`].
  CRC8_EBU: u8 = [8, 0x1D, 0xFF, true, true, 0, 0x97];

  /// `CRC-8/GSM-A`
  CRC8_GSM_A: u8 = [8, 0x1D, 0, false, false, 0, 0x37];

  /// `CRC-8/HITAG`
  CRC8_HITAG: u8 = [8, 0x1D, 0xFF, false, false, 0, 0xB4];

  /// `CRC-8/ICODE`
  CRC8_ICODE: u8 = [8, 0x1D, 0xFD, false, false, 0, 0x7E];

  /// `CRC-8/MIFRAME-MAD`
  CRC8_MIFRAME_MAD: u8 = [8, 0x1D, 0xC7, false, false, 0, 0x99];

  /// `CRC-8/SAE-J1850`
  CRC8_SAE_J1850: u8 = [8, 0x1D, 0xFF, false, false, 0xFF, 0x4B];

  /// `CRC-8/AUTOSAR`
  CRC8_AUTOSAR: u8 = [8, 0x2F, 0xFF, false, false, 0xFF, 0xDF];

  /// `CRC-8/OPENSAFETY`
  CRC8_OPENSAFETY: u8 = [8, 0x2F, 0, false, false, 0, 0x3E];

  /// `CRC-8/MAXIM`
  ///
  /// Also known as [`CRC8_MAXIM_DOW`].
  CRC8_MAXIM: u8 = [8, 0x31, 0, true, true, 0, 0xA1];

  /// `CRC-8/NRSC5`
  CRC8_NRSC5: u8 = [8, 0x31, 0xFF, false, false, 0, 0xF7];

  /// `CRC-8/DARC`
  CRC8_DARC: u8 = [8, 0x39, 0, true, true, 0, 0x15];

  /// `CRC-8/GSM-B`
  CRC8_GSM_B: u8 = [8, 0x49, 0, false, false, 0xFF, 0x94];

  /// `CRC-8/CDMA2000`
  CRC8_CDMA2000: u8 = [8, 0x9B, 0xFF, false, false, 0, 0xDA];

  /// `CRC-8/LTE`
  CRC8_LTE: u8 = [8, 0x9B, 0, false, false, 0, 0xEA];

  /// `CRC-8/WCDMA`
  CRC8_WCDMA: u8 = [8, 0x9B, 0, true, true, 0, 0x25];

  /// `CRC-8/DVB-S2`
  CRC8_DVB_S2: u8 = [8, 0xD5, 0, false, false, 0, 0xBC];

  /// `CRC-8/BLUETOOTH`
  CRC8_BLUETOOTH: u8 = [8, 0xA7, 0, true, true, 0, 0x26];
}

pub use self::CRC4_ITU as CRC4_G704;
pub use self::CRC5_EPC as CRC5_EPC_C1G2;
pub use self::CRC5_ITU as CRC5_G704;
pub use self::CRC6_ITU as CRC6_G704;
pub use self::CRC7 as CRC7_MMC;
pub use self::CRC8 as CRC8_PRIME;
pub use self::CRC8 as CRC8_SMBUS;
pub use self::CRC8_ITU as CRC8_I432_1;
pub use self::CRC8_EBU as CRC8_AES;
pub use self::CRC8_EBU as CRC8_TECH3250;
pub use self::CRC8_MAXIM as CRC8_MAXIM_DOW;
