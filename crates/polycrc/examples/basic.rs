//! Basic CRC usage: catalogue lookup, one-shot and streaming APIs.
//!
//! Run with: `cargo run --example basic -p polycrc`

use polycrc::{CHECK_INPUT, CRC5_USB, CRC16_CCITT_FALSE, CRC32, CRC64_XZ, CRC82_DARC, Crc, Params, catalog};

fn main() {
  println!("=== polycrc Basic Examples ===\n");

  one_shot_examples();
  streaming_example();
  custom_example();
  catalog_example();
}

/// One-shot computation over a byte slice.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  // CRC-32 (ISO-HDLC) - Ethernet, gzip, zip, PNG
  let crc32 = CRC32.calc(CHECK_INPUT);
  println!("CRC-32:             0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-64/XZ - XZ Utils, 7-Zip
  let crc64 = CRC64_XZ.calc(CHECK_INPUT);
  println!("CRC-64/XZ:          0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  // CRC-16/IBM-3740 (CCITT-FALSE)
  let crc16 = CRC16_CCITT_FALSE.calc(CHECK_INPUT);
  println!("CRC-16/CCITT-FALSE: 0x{crc16:04X}");
  assert_eq!(crc16, 0x29B1);

  // Narrower and wider than any primitive: 5 and 82 bits
  let crc5 = CRC5_USB.calc(CHECK_INPUT);
  println!("CRC-5/USB:          0x{crc5:02X}");
  assert_eq!(crc5, 0x19);

  let crc82 = CRC82_DARC.calc(CHECK_INPUT);
  println!("CRC-82/DARC:        0x{crc82:021X}");
  assert_eq!(crc82, CRC82_DARC.check());

  println!();
}

/// Streaming computation: the same result, however the input is split.
fn streaming_example() {
  println!("--- Streaming Computation ---\n");

  let mut engine = CRC32.engine();
  engine.update(&CHECK_INPUT[..3]);
  engine.update(&CHECK_INPUT[3..6]);
  engine.update(&CHECK_INPUT[6..]);
  let crc = engine.finalize();

  println!("Streaming CRC-32:   0x{crc:08X}");
  assert_eq!(crc, CRC32.calc(CHECK_INPUT));

  // finalize() reset the engine; it is ready for the next message.
  engine.update(b"hello");
  println!("Next message:       0x{:08X}", engine.finalize());

  println!();
}

/// A parameter set of your own, checked at compile time.
fn custom_example() {
  println!("--- Custom Parameters ---\n");

  static CRC12_DECT: Crc<u16> = Crc::<u16>::new(Params {
    width: 12,
    poly: 0x80F,
    init: 0,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0,
    check: Some(0xF5B),
  });

  println!("{CRC12_DECT:?}");
  println!("CRC-12/DECT:        0x{:03X}", CRC12_DECT.calc(CHECK_INPUT));

  println!();
}

/// Runtime lookup by name.
fn catalog_example() {
  println!("--- Catalogue ---\n");

  for name in ["CRC-32/ISCSI", "crc16_xmodem", "CRC-82/DARC", "CRC-99"] {
    match catalog::find(name) {
      Some(entry) => println!("{name:<14} -> {:<24} check 0x{:X}", entry.name(), entry.crc().check()),
      None => println!("{name:<14} -> not found"),
    }
  }

  println!("\n{} algorithms in the catalogue", catalog::CATALOG.len());
}
