//! Bit-granular input in both bit orders.
//!
//! Run with: `cargo run --example calc_bits -p polycrc`
//!
//! A direct CRC reads its input MSB first, a reflected one LSB first. Feeding
//! the reflected engine the bit-reversed input therefore yields the same
//! register sequence, for any number of bits.

use polycrc::{CRC32, Crc, Params, bits_rev};

/// CRC-32 polynomial, direct, no pre- or post-conditioning.
static DIRECT: Crc<u32> = Crc::<u32>::new(Params {
  width: 32,
  poly: CRC32.poly(),
  init: 0,
  reflect_in: false,
  reflect_out: false,
  xor_out: 0,
  check: None,
});

/// The same, reading input LSB first but leaving the result in direct order.
static REFLECTED: Crc<u32> = Crc::<u32>::new(Params {
  reflect_in: true,
  check: None,
  ..DIRECT.params()
});

fn main() {
  let input = 0x0123_4567_89AB_CDEFu64;

  for n_bits in 0..=u64::BITS {
    let direct = DIRECT.calc_bits(input, n_bits);
    let reflected = REFLECTED.calc_bits(bits_rev(input, n_bits), n_bits);
    println!("{n_bits:2} bits: 0x{direct:08X}");
    assert_eq!(direct, reflected);
  }
}
