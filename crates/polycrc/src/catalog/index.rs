//! Name index over every catalogue entry.

use super::*;

/// Every catalogue entry, ordered by width then polynomial.
pub static CATALOG: &[Entry] = &[
  Entry::new("CRC-1", &[], AnyCrc::U8(&CRC1)),
  Entry::new("CRC-3/GSM", &[], AnyCrc::U8(&CRC3_GSM)),
  Entry::new("CRC-3/ROHC", &[], AnyCrc::U8(&CRC3_ROHC)),
  Entry::new("CRC-4/ITU", &["CRC-4/G704"], AnyCrc::U8(&CRC4_ITU)),
  Entry::new("CRC-4/INTERLAKEN", &[], AnyCrc::U8(&CRC4_INTERLAKEN)),
  Entry::new("CRC-5/USB", &[], AnyCrc::U8(&CRC5_USB)),
  Entry::new("CRC-5/EPC", &["CRC-5/EPC-C1G2"], AnyCrc::U8(&CRC5_EPC)),
  Entry::new("CRC-5/ITU", &["CRC-5/G704"], AnyCrc::U8(&CRC5_ITU)),
  Entry::new("CRC-6/ITU", &["CRC-6/G704"], AnyCrc::U8(&CRC6_ITU)),
  Entry::new("CRC-6/CDMA2000-B", &[], AnyCrc::U8(&CRC6_CDMA2000_B)),
  Entry::new("CRC-6/DARC", &[], AnyCrc::U8(&CRC6_DARC)),
  Entry::new("CRC-6/NR", &[], AnyCrc::U8(&CRC6_NR)),
  Entry::new("CRC-6/CDMA2000-A", &[], AnyCrc::U8(&CRC6_CDMA2000_A)),
  Entry::new("CRC-6/GSM", &[], AnyCrc::U8(&CRC6_GSM)),
  Entry::new("CRC-7", &["CRC-7/MMC"], AnyCrc::U8(&CRC7)),
  Entry::new("CRC-7/UMTS", &[], AnyCrc::U8(&CRC7_UMTS)),
  Entry::new("CRC-7/ROHC", &[], AnyCrc::U8(&CRC7_ROHC)),
  Entry::new("CRC-7/MVB", &[], AnyCrc::U8(&CRC7_MVB)),
  Entry::new("CRC-8", &["CRC-8/PRIME", "CRC-8/SMBUS"], AnyCrc::U8(&CRC8)),
  Entry::new("CRC-8/HDLC", &[], AnyCrc::U8(&CRC8_HDLC)),
  Entry::new("CRC-8/ITU", &["CRC-8/I432-1"], AnyCrc::U8(&CRC8_ITU)),
  Entry::new("CRC-8/ROHC", &[], AnyCrc::U8(&CRC8_ROHC)),
  Entry::new("CRC-8/EBU", &["CRC-8/AES", "CRC-8/TECH3250"], AnyCrc::U8(&CRC8_EBU)),
  Entry::new("CRC-8/GSM-A", &[], AnyCrc::U8(&CRC8_GSM_A)),
  Entry::new("CRC-8/HITAG", &[], AnyCrc::U8(&CRC8_HITAG)),
  Entry::new("CRC-8/ICODE", &[], AnyCrc::U8(&CRC8_ICODE)),
  Entry::new("CRC-8/MIFRAME-MAD", &[], AnyCrc::U8(&CRC8_MIFRAME_MAD)),
  Entry::new("CRC-8/SAE-J1850", &[], AnyCrc::U8(&CRC8_SAE_J1850)),
  Entry::new("CRC-8/AUTOSAR", &[], AnyCrc::U8(&CRC8_AUTOSAR)),
  Entry::new("CRC-8/OPENSAFETY", &[], AnyCrc::U8(&CRC8_OPENSAFETY)),
  Entry::new("CRC-8/MAXIM", &["CRC-8/MAXIM-DOW"], AnyCrc::U8(&CRC8_MAXIM)),
  Entry::new("CRC-8/NRSC5", &[], AnyCrc::U8(&CRC8_NRSC5)),
  Entry::new("CRC-8/DARC", &[], AnyCrc::U8(&CRC8_DARC)),
  Entry::new("CRC-8/GSM-B", &[], AnyCrc::U8(&CRC8_GSM_B)),
  Entry::new("CRC-8/CDMA2000", &[], AnyCrc::U8(&CRC8_CDMA2000)),
  Entry::new("CRC-8/LTE", &[], AnyCrc::U8(&CRC8_LTE)),
  Entry::new("CRC-8/WCDMA", &[], AnyCrc::U8(&CRC8_WCDMA)),
  Entry::new("CRC-8/DVB-S2", &[], AnyCrc::U8(&CRC8_DVB_S2)),
  Entry::new("CRC-8/BLUETOOTH", &[], AnyCrc::U8(&CRC8_BLUETOOTH)),
  Entry::new("CRC-10/GSM", &[], AnyCrc::U16(&CRC10_GSM)),
  Entry::new("CRC-10", &["CRC-10/ATM", "CRC-10/I610"], AnyCrc::U16(&CRC10)),
  Entry::new("CRC-10/CDMA2000", &[], AnyCrc::U16(&CRC10_CDMA2000)),
  Entry::new("CRC-11/UMTS", &[], AnyCrc::U16(&CRC11_UMTS)),
  Entry::new("CRC-11", &["CRC-11/FLEXRAY"], AnyCrc::U16(&CRC11)),
  Entry::new("CRC-11/NR", &[], AnyCrc::U16(&CRC11_NR)),
  Entry::new("CRC-12/DECT", &["X-CRC-12"], AnyCrc::U16(&CRC12_DECT)),
  Entry::new("CRC-12/UMTS", &["CRC-12/3GPP"], AnyCrc::U16(&CRC12_UMTS)),
  Entry::new("CRC-12/GSM", &[], AnyCrc::U16(&CRC12_GSM)),
  Entry::new("CRC-12/CDMA2000", &[], AnyCrc::U16(&CRC12_CDMA2000)),
  Entry::new("CRC-13/BBC", &[], AnyCrc::U16(&CRC13_BBC)),
  Entry::new("CRC-14/GSM", &[], AnyCrc::U16(&CRC14_GSM)),
  Entry::new("CRC-14/DARC", &[], AnyCrc::U16(&CRC14_DARC)),
  Entry::new("CRC-15", &["CRC-15/CAN"], AnyCrc::U16(&CRC15)),
  Entry::new("CRC-15/MPT1327", &[], AnyCrc::U16(&CRC15_MPT1327)),
  Entry::new("CRC-16/DECT-R", &["R-CRC-16"], AnyCrc::U16(&CRC16_DECT_R)),
  Entry::new("CRC-16/DECT-X", &["X-CRC-16"], AnyCrc::U16(&CRC16_DECT_X)),
  Entry::new("CRC-16/NRSC5", &[], AnyCrc::U16(&CRC16_NRSC5)),
  Entry::new("CRC-16/AUG-CCITT", &["CRC-16/SPI-FUJITSU"], AnyCrc::U16(&CRC16_AUG_CCITT)),
  Entry::new("CRC-16/CCITT-FALSE", &["CRC-16/AUTOSAR", "CRC-16/IBM3740"], AnyCrc::U16(&CRC16_CCITT_FALSE)),
  Entry::new(
    "CRC-16/GENIBUS",
    &["CRC-16/DARC", "CRC-16/EPC", "CRC-16/EPC-C1G2", "CRC-16/ICODE"],
    AnyCrc::U16(&CRC16_GENIBUS),
  ),
  Entry::new("CRC-16/GSM", &[], AnyCrc::U16(&CRC16_GSM)),
  Entry::new("CRC-16/ISO-IEC14443-3-A", &["CRC-A"], AnyCrc::U16(&CRC16_ISO_IEC14443_3_A)),
  Entry::new(
    "CRC-16/KERMIT",
    &["CRC-16/BLUETOOTH", "CRC-16/CCITT", "CRC-16/CCITT-TRUE", "CRC-16/V41-LSB"],
    AnyCrc::U16(&CRC16_KERMIT),
  ),
  Entry::new("CRC-16/MCRF4XX", &[], AnyCrc::U16(&CRC16_MCRF4XX)),
  Entry::new("CRC-16/RIELLO", &[], AnyCrc::U16(&CRC16_RIELLO)),
  Entry::new("CRC-16/TMS37157", &[], AnyCrc::U16(&CRC16_TMS37157)),
  Entry::new(
    "CRC-16/X25",
    &["CRC-16/IBM-SDLC", "CRC-16/ISO-HDLC", "CRC-16/ISO-IEC14443-3-B", "CRC-B"],
    AnyCrc::U16(&CRC16_X25),
  ),
  Entry::new(
    "CRC-16/XMODEM",
    &["CRC-16/802-15-4", "CRC-16/ACORN", "CRC-16/LTE", "CRC-16/V41-MSB"],
    AnyCrc::U16(&CRC16_XMODEM),
  ),
  Entry::new("CRC-16/PROFIBUS", &["CRC-16/IEC61158-2"], AnyCrc::U16(&CRC16_PROFIBUS)),
  Entry::new("CRC-16/CHAKRAVARTY", &[], AnyCrc::U16(&CRC16_CHAKRAVARTY)),
  Entry::new("CRC-16/DNP", &[], AnyCrc::U16(&CRC16_DNP)),
  Entry::new("CRC-16/EN13757", &[], AnyCrc::U16(&CRC16_EN13757)),
  Entry::new("CRC-16/M17", &[], AnyCrc::U16(&CRC16_M17)),
  Entry::new("CRC-16/OPENSAFETY-A", &[], AnyCrc::U16(&CRC16_OPENSAFETY_A)),
  Entry::new("CRC-16/LJ1200", &[], AnyCrc::U16(&CRC16_LJ1200)),
  Entry::new("CRC-16/OPENSAFETY-B", &[], AnyCrc::U16(&CRC16_OPENSAFETY_B)),
  Entry::new("CRC-16/ARC", &["CRC-16", "CRC-16/LHA"], AnyCrc::U16(&CRC16_ARC)),
  Entry::new("CRC-16/BUYPASS", &["CRC-16/UMTS", "CRC-16/VERIFONE"], AnyCrc::U16(&CRC16_BUYPASS)),
  Entry::new("CRC-16/CMS", &[], AnyCrc::U16(&CRC16_CMS)),
  Entry::new("CRC-16/DDS110", &[], AnyCrc::U16(&CRC16_DDS110)),
  Entry::new("CRC-16/MAXIM", &["CRC-16/MAXIM-DOW"], AnyCrc::U16(&CRC16_MAXIM)),
  Entry::new("CRC-16/MODBUS", &[], AnyCrc::U16(&CRC16_MODBUS)),
  Entry::new("CRC-16/USB", &[], AnyCrc::U16(&CRC16_USB)),
  Entry::new("CRC-16/T10-DIF", &[], AnyCrc::U16(&CRC16_T10_DIF)),
  Entry::new("CRC-16/CDMA2000", &[], AnyCrc::U16(&CRC16_CDMA2000)),
  Entry::new("CRC-16/ARINC", &[], AnyCrc::U16(&CRC16_ARINC)),
  Entry::new("CRC-16/TELEDISK", &[], AnyCrc::U16(&CRC16_TELEDISK)),
  Entry::new("CRC-17/CAN-FD", &[], AnyCrc::U32(&CRC17_CAN_FD)),
  Entry::new("CRC-21/CAN-FD", &[], AnyCrc::U32(&CRC21_CAN_FD)),
  Entry::new("CRC-24/BLE", &[], AnyCrc::U32(&CRC24_BLE)),
  Entry::new("CRC-24/INTERLAKEN", &[], AnyCrc::U32(&CRC24_INTERLAKEN)),
  Entry::new("CRC-24/FLEXRAY-A", &[], AnyCrc::U32(&CRC24_FLEXRAY_A)),
  Entry::new("CRC-24/FLEXRAY-B", &[], AnyCrc::U32(&CRC24_FLEXRAY_B)),
  Entry::new("CRC-24/LTE-B", &[], AnyCrc::U32(&CRC24_LTE_B)),
  Entry::new("CRC-24/OS9", &[], AnyCrc::U32(&CRC24_OS9)),
  Entry::new("CRC-24", &["CRC-24/OPENPGP"], AnyCrc::U32(&CRC24)),
  Entry::new("CRC-24/LTE-A", &[], AnyCrc::U32(&CRC24_LTE_A)),
  Entry::new("CRC-24/NR-C", &[], AnyCrc::U32(&CRC24_NR_C)),
  Entry::new("CRC-30/CDMA", &[], AnyCrc::U32(&CRC30_CDMA)),
  Entry::new("CRC-31/PHILIPS", &[], AnyCrc::U32(&CRC31_PHILIPS)),
  Entry::new("CRC-32/XFER", &[], AnyCrc::U32(&CRC32_XFER)),
  Entry::new("CRC-32", &["CRC-32/ADCCP", "CRC-32/ISO-HDLC", "CRC-32/V42", "CRC-32/XZ"], AnyCrc::U32(&CRC32)),
  Entry::new("CRC-32/BZIP2", &["CRC-32/AAL5", "CRC-32/DECT-B", "B-CRC-32"], AnyCrc::U32(&CRC32_BZIP2)),
  Entry::new("CRC-32/EDC", &["CRC-32/PRIME"], AnyCrc::U32(&CRC32_EDC)),
  Entry::new("CRC-32/JAMCRC", &[], AnyCrc::U32(&CRC32_JAMCRC)),
  Entry::new("CRC-32/MPEG2", &[], AnyCrc::U32(&CRC32_MPEG2)),
  Entry::new("CRC-32/POSIX", &["CRC-32/CKSUM"], AnyCrc::U32(&CRC32_POSIX)),
  Entry::new(
    "CRC-32/C",
    &["CRC-32/BASE91-C", "CRC-32/CASTAGNOLI", "CRC-32/INTERLAKEN", "CRC-32/ISCSI"],
    AnyCrc::U32(&CRC32_C),
  ),
  Entry::new("CRC-32/K2", &[], AnyCrc::U32(&CRC32_K2)),
  Entry::new("CRC-32/MEF", &["CRC-32/K"], AnyCrc::U32(&CRC32_MEF)),
  Entry::new("CRC-32/CDROM-EDC", &[], AnyCrc::U32(&CRC32_CDROM_EDC)),
  Entry::new("CRC-32/Q", &["CRC-32/AIXM"], AnyCrc::U32(&CRC32_Q)),
  Entry::new("CRC-32/D", &["CRC-32/BASE91-D"], AnyCrc::U32(&CRC32_D)),
  Entry::new("CRC-32/AUTOSAR", &[], AnyCrc::U32(&CRC32_AUTOSAR)),
  Entry::new("CRC-40/GSM", &[], AnyCrc::U64(&CRC40_GSM)),
  Entry::new("CRC-64/GO-ISO", &[], AnyCrc::U64(&CRC64_GO_ISO)),
  Entry::new("CRC-64/MS", &[], AnyCrc::U64(&CRC64_MS)),
  Entry::new("CRC-64", &["CRC-64/ECMA182"], AnyCrc::U64(&CRC64)),
  Entry::new("CRC-64/WE", &[], AnyCrc::U64(&CRC64_WE)),
  Entry::new("CRC-64/XZ", &["CRC-64/GO-ECMA"], AnyCrc::U64(&CRC64_XZ)),
  Entry::new("CRC-64/REDIS", &[], AnyCrc::U64(&CRC64_REDIS)),
  Entry::new("CRC-82/DARC", &[], AnyCrc::U128(&CRC82_DARC)),
];
