//! Fuzz target for arbitrary parameter sets.
//!
//! Any width and register combination is either rejected or yields an
//! algorithm whose table shapes and bitwise reference agree.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polycrc::{CrcLut16, CrcLut32, CrcLut256, Params, ParamsError};

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  poly: u32,
  init: u32,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u32,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let params = Params {
    width: input.width,
    poly: input.poly,
    init: input.init,
    reflect_in: input.reflect_in,
    reflect_out: input.reflect_out,
    xor_out: input.xor_out,
    check: None,
  };

  let l32 = match CrcLut32::<u32>::try_new(params) {
    Ok(crc) => crc,
    Err(ParamsError::InvalidWidth { .. } | ParamsError::RegisterMismatch { .. }) => {
      assert!(!(17..=32).contains(&input.width), "width {} rejected", input.width);
      return;
    }
    Err(e) => panic!("unexpected error: {e}"),
  };
  let l16 = CrcLut16::<u32>::new(params);
  let l256 = CrcLut256::<u32>::new(params);

  let expected = l32.calc_reference(&input.data);
  assert_eq!(l32.calc(&input.data), expected, "lut32 mismatch for {l32:?}");
  assert_eq!(l16.calc(&input.data), expected, "lut16 mismatch for {l32:?}");
  assert_eq!(l256.calc(&input.data), expected, "lut256 mismatch for {l32:?}");
});
