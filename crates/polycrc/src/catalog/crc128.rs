//! CRCs of 65 to 128 bits, computed in a `u128` register.

catalog! {
  /// `CRC-82/DARC`
  CRC82_DARC: u128 = [82, 0x308C_0111_0114_0144_0411, 0, true, true, 0, 0x9EA8_3F62_5023_801F_D612];
}
