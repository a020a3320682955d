//! CRCs of 9 to 16 bits, computed in a `u16` register.

catalog! {
  /// `CRC-10/GSM`
  CRC10_GSM: u16 = [10, 0x175, 0, false, false, 0x3FF, 0x12A];

  /// `CRC-10`
  ///
  /// Also known as [`CRC10_ATM`], [`CRC10_I610`].
  CRC10: u16 = [10, 0x233, 0, false, false, 0, 0x199];

  /// `CRC-10/CDMA2000`
  CRC10_CDMA2000: u16 = [10, 0x3D9, 0x3FF, false, false, 0, 0x233];

  /// `CRC-11/UMTS`
  CRC11_UMTS: u16 = [11, 0x307, 0, false, false, 0, 0x061];

  /// `CRC-11`
  ///
  /// Also known as [`CRC11_FLEXRAY`].
  CRC11: u16 = [11, 0x385, 0x01A, false, false, 0, 0x5A3];

  /// `CRC-11/NR`
  CRC11_NR: u16 = [11, 0x621, 0, false, false, 0, 0x5CA];

  /// `CRC-12/DECT`
  ///
  /// Also known as [`X_CRC12`].
  CRC12_DECT: u16 = [12, 0x80F, 0, false, false, 0, 0xF5B];

  /// `CRC-12/UMTS`
  ///
  /// Also known as [`CRC12_3GPP`].
  CRC12_UMTS: u16 = [12, 0x80F, 0, false, true, 0, 0xDAF];

  /// `CRC-12/GSM`
  CRC12_GSM: u16 = [12, 0xD31, 0, false, false, 0xFFF, 0xB34];

  /// `CRC-12/CDMA2000`
  CRC12_CDMA2000: u16 = [12, 0xF13, 0xFFF, false, false, 0, 0xD4D];

  /// `CRC-13/BBC`
  CRC13_BBC: u16 = [13, 0x1CF5, 0, false, false, 0, 0x04FA];

  /// `CRC-14/GSM`
  CRC14_GSM: u16 = [14, 0x202D, 0, false, false, 0x3FFF, 0x30AE];

  /// `CRC-14/DARC`
  CRC14_DARC: u16 = [14, 0x0805, 0, true, true, 0, 0x082D];

  /// `CRC-15`
  ///
  /// Also known as [`CRC15_CAN`].
  CRC15: u16 = [15, 0x4599, 0, false, false, 0, 0x059E];

  /// `CRC-15/MPT1327`
  CRC15_MPT1327: u16 = [15, 0x6815, 0, false, false, 0x0001, 0x2566];

  /// `CRC-16/DECT-R`
  ///
  /// Also known as [`R_CRC16`].
  CRC16_DECT_R: u16 = [16, 0x0589, 0, false, false, 0x0001, 0x007E];

  /// `CRC-16/DECT-X`
  ///
  /// Also known as [`X_CRC16`].
  CRC16_DECT_X: u16 = [16, 0x0589, 0, false, false, 0, 0x007F];

  /// `CRC-16/NRSC5`
  CRC16_NRSC5: u16 = [16, 0x080B, 0xFFFF, true, true, 0, 0xA066];

  /// `CRC-16/AUG-CCITT`
  ///
  /// Also known as [`CRC16_SPI_FUJITSU`].
  CRC16_AUG_CCITT: u16 = [16, 0x1021, 0x1D0F, false, false, 0, 0xE5CC];

  /// `CRC-16/CCITT-FALSE`
  ///
  /// Also known as [`CRC16_AUTOSAR`], [`CRC16_IBM3740`].
  CRC16_CCITT_FALSE: u16 = [16, 0x1021, 0xFFFF, false, false, 0, 0x29B1];

  /// `CRC-16/GENIBUS`
  ///
  /// Also known as [`CRC16_DARC`], [`CRC16_EPC`], [`CRC16_EPC_C1G2`], [`CRC16_ICODE`].
  CRC16_GENIBUS: u16 = [16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E];

  /// `CRC-16/GSM`
  CRC16_GSM: u16 = [16, 0x1021, 0, false, false, 0xFFFF, 0xCE3C];

  /// `CRC-16/ISO-IEC14443-3-A`
  ///
  /// Also known as [`CRC_A`].
  CRC16_ISO_IEC14443_3_A: u16 = [16, 0x1021, 0xC6C6, true, true, 0, 0xBF05];

  /// `CRC-16/KERMIT`
  ///
  /// Also known as [`CRC16_BLUETOOTH`], [`CRC16_CCITT`], [`CRC16_CCITT_TRUE`], [`CRC16_V41_LSB`].
  CRC16_KERMIT: u16 = [16, 0x1021, 0, true, true, 0, 0x2189];

  /// `CRC-16/MCRF4XX`
  CRC16_MCRF4XX: u16 = [16, 0x1021, 0xFFFF, true, true, 0, 0x6F91];

  /// `CRC-16/RIELLO`
  CRC16_RIELLO: u16 = [16, 0x1021, 0xB2AA, true, true, 0, 0x63D0];

  /// `CRC-16/TMS37157`
  CRC16_TMS37157: u16 = [16, 0x1021, 0x89EC, true, true, 0, 0x26B1];

  /// `CRC-16/X25`
  ///
  /// Also known as [`CRC16_IBM_SDLC`], [`CRC16_ISO_HDLC`], [`CRC16_ISO_IEC14443_3_B`], [`CRC_B`].
  CRC16_X25: u16 = [16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E];

  /// `CRC-16/XMODEM`
  ///
  /// Also known as [`CRC16_802_15_4`], [`CRC16_ACORN`], [`CRC16_LTE`], [`CRC16_V41_MSB`].
  CRC16_XMODEM: u16 = [16, 0x1021, 0, false, false, 0, 0x31C3];

  /// `CRC-16/PROFIBUS`
  ///
  /// Also known as [`CRC16_IEC61158_2`].
  CRC16_PROFIBUS: u16 = [16, 0x1DCF, 0xFFFF, false, false, 0xFFFF, 0xA819];

  /// `CRC-16/CHAKRAVARTY`
  CRC16_CHAKRAVARTY: u16 = [16, 0x2F15, 0, false, false, 0, 0xA2D1];

  /// `CRC-16/DNP`
  CRC16_DNP: u16 = [16, 0x3D65, 0, true, true, 0xFFFF, 0xEA82];

  /// `CRC-16/EN13757`
  CRC16_EN13757: u16 = [16, 0x3D65, 0, false, false, 0xFFFF, 0xC2B7];

  /// `CRC-16/M17`
  CRC16_M17: u16 = [16, 0x5935, 0xFFFF, false, false, 0, 0x772B];

  /// `CRC-16/OPENSAFETY-A`
  CRC16_OPENSAFETY_A: u16 = [16, 0x5935, 0, false, false, 0, 0x5D38];

  /// `CRC-16/LJ1200`
  CRC16_LJ1200: u16 = [16, 0x6F63, 0, false, false, 0, 0xBDF4];

  /// `CRC-16/OPENSAFETY-B`
  CRC16_OPENSAFETY_B: u16 = [16, 0x755B, 0, false, false, 0, 0x20FE];

  /// `CRC-16/ARC`
  ///
  /// Also known as [`CRC16`], [`CRC16_LHA`].
  CRC16_ARC: u16 = [16, 0x8005, 0, true, true, 0, 0xBB3D];

  /// `CRC-16/BUYPASS`
  ///
  /// Also known as [`CRC16_UMTS`], [`CRC16_VERIFONE`].
  CRC16_BUYPASS: u16 = [16, 0x8005, 0, false, false, 0, 0xFEE8];

  /// `CRC-16/CMS`
  CRC16_CMS: u16 = [16, 0x8005, 0xFFFF, false, false, 0, 0xAEE7];

  /// `CRC-16/DDS110`
  CRC16_DDS110: u16 = [16, 0x8005, 0x800D, false, false, 0, 0x9ECF];

  /// `CRC-16/MAXIM`
  ///
  /// Also known as [`CRC16_MAXIM_DOW`].
  CRC16_MAXIM: u16 = [16, 0x8005, 0, true, true, 0xFFFF, 0x44C2];

  /// `CRC-16/MODBUS`
  CRC16_MODBUS: u16 = [16, 0x8005, 0xFFFF, true, true, 0, 0x4B37];

  /// `CRC-16/USB`
  CRC16_USB: u16 = [16, 0x8005, 0xFFFF, true, true, 0xFFFF, 0xB4C8];

  /// `CRC-16/T10-DIF`
  CRC16_T10_DIF: u16 = [16, 0x8BB7, 0, false, false, 0, 0xD0DB];

  /// `CRC-16/CDMA2000`
  CRC16_CDMA2000: u16 = [16, 0xC867, 0xFFFF, false, false, 0, 0x4C06];

  /// `CRC-16/ARINC`
  CRC16_ARINC: u16 = [16, 0xA02B, 0, false, false, 0, 0xEBA4];

  /// `CRC-16/TELEDISK`
  CRC16_TELEDISK: u16 = [16, 0xA097, 0, false, false, 0, 0x0FB3];
}

pub use self::CRC10 as CRC10_ATM;
pub use self::CRC10 as CRC10_I610;
pub use self::CRC11 as CRC11_FLEXRAY;
pub use self::CRC12_DECT as X_CRC12;
pub use self::CRC12_UMTS as CRC12_3GPP;
pub use self::CRC15 as CRC15_CAN;
pub use self::CRC16_DECT_R as R_CRC16;
pub use self::CRC16_DECT_X as X_CRC16;
pub use self::CRC16_AUG_CCITT as CRC16_SPI_FUJITSU;
pub use self::CRC16_CCITT_FALSE as CRC16_AUTOSAR;
pub use self::CRC16_CCITT_FALSE as CRC16_IBM3740;
pub use self::CRC16_GENIBUS as CRC16_DARC;
pub use self::CRC16_GENIBUS as CRC16_EPC;
pub use self::CRC16_GENIBUS as CRC16_EPC_C1G2;
pub use self::CRC16_GENIBUS as CRC16_ICODE;
pub use self::CRC16_ISO_IEC14443_3_A as CRC_A;
pub use self::CRC16_KERMIT as CRC16_BLUETOOTH;
pub use self::CRC16_KERMIT as CRC16_CCITT;
pub use self::CRC16_KERMIT as CRC16_CCITT_TRUE;
pub use self::CRC16_KERMIT as CRC16_V41_LSB;
pub use self::CRC16_X25 as CRC16_IBM_SDLC;
pub use self::CRC16_X25 as CRC16_ISO_HDLC;
pub use self::CRC16_X25 as CRC16_ISO_IEC14443_3_B;
pub use self::CRC16_X25 as CRC_B;
pub use self::CRC16_XMODEM as CRC16_802_15_4;
pub use self::CRC16_XMODEM as CRC16_ACORN;
pub use self::CRC16_XMODEM as CRC16_LTE;
pub use self::CRC16_XMODEM as CRC16_V41_MSB;
pub use self::CRC16_PROFIBUS as CRC16_IEC61158_2;
pub use self::CRC16_ARC as CRC16;
pub use self::CRC16_ARC as CRC16_LHA;
pub use self::CRC16_BUYPASS as CRC16_UMTS;
pub use self::CRC16_BUYPASS as CRC16_VERIFONE;
pub use self::CRC16_MAXIM as CRC16_MAXIM_DOW;
