//! Print the lookup tables of CRC-32 in every shape.
//!
//! Run with: `cargo run --example lut -p polycrc`
//!
//! The 32-entry table holds the CRC of each low nibble followed by the CRC of
//! each high nibble; XOR-ing one of each gives the byte entry of the
//! 256-entry table.

use polycrc::{CRC32, CrcLut16, CrcLut32, CrcLut256, Width};

static LUT16: CrcLut16<u32> = CrcLut16::<u32>::new(CRC32.params());
static LUT32: CrcLut32<u32> = CrcLut32::<u32>::new(CRC32.params());
static LUT256: CrcLut256<u32> = CrcLut256::<u32>::new(CRC32.params());

/// Print `tab` as hex, eight entries per line.
fn print_table<W: Width>(tab: &[W]) {
  let digits = (W::BITS / 4) as usize;
  for row in tab.chunks(8) {
    let line: Vec<String> = row.iter().map(|v| format!("{v:0digits$x}")).collect();
    println!("{}", line.join(" "));
  }
}

fn main() {
  println!("{:?}\n", LUT32.lut());
  let (low, high) = LUT32.lut().entries().split_at(16);
  println!("low nibbles:");
  print_table(low);
  println!("high nibbles:");
  print_table(high);

  println!("\n{:?}\n", LUT16.lut());
  print_table(LUT16.lut().entries());

  println!("\n{:?}\n", LUT256.lut());
  print_table(LUT256.lut().entries());

  for index in 0..=255u8 {
    assert_eq!(LUT16.lookup(index), LUT256.lookup(index));
    assert_eq!(LUT32.lookup(index), LUT256.lookup(index));
  }
}
