//! Internal macros generating the per-register-type CRC code.
//!
//! The register arithmetic (shifts, masks, table indexing) cannot be written
//! once over the [`Width`](crate::Width) trait and still run in `const fn`
//! context, so it is stamped out for each of `u8`, `u16`, `u32`, `u64` and
//! `u128`. Everything generic lives in [`crate::algo`] and [`crate::engine`].
//!
//! Register layout: reflected CRCs keep the register in the low `width`
//! bits, LSB first. Direct CRCs narrower than a byte keep it in the top
//! `width` bits of the low byte while bytes are being folded in, so that
//! the polynomial's top term lines up with bit 7; every other direct CRC
//! keeps it in the low `width` bits. [`update_register`] and friends always
//! take and return the low-bits form.
//!
//! [`update_register`]: crate::Crc::update_register

/// Generate the constructors, slow and fast recurrences, table handling and
/// raw register API of `Crc<$w, N>`.
///
/// # Arguments
///
/// - `$w`: The register type (e.g., `u32`)
/// - `$rev`: The matching `const fn` bit reversal (e.g., `bits_rev_u32`)
macro_rules! impl_crc {
  ($($w:ty => $rev:path),* $(,)?) => {
    $(
      // SAFETY: Table indices are nibbles (< 16), `16 + nibble` (< 32) or
      // bytes (< 256), and each is only used with the shape that has at least
      // that many entries (`Lut::KIND` is derived from `N`).
      #[allow(clippy::indexing_slicing)]
      impl<const N: usize> $crate::Crc<$w, N> {
        /// Build an algorithm from `params`, validating them.
        ///
        /// # Errors
        ///
        /// - [`ParamsError::InvalidWidth`]: `width` is 0 or above 128.
        /// - [`ParamsError::RegisterMismatch`]: the register type is not the
        ///   smallest of `u8`..`u128` that holds `width` bits.
        /// - [`ParamsError::CheckMismatch`]: `params.check` is present and
        ///   differs from the computed CRC of `"123456789"`.
        ///
        /// [`ParamsError::InvalidWidth`]: crate::ParamsError::InvalidWidth
        /// [`ParamsError::RegisterMismatch`]: crate::ParamsError::RegisterMismatch
        /// [`ParamsError::CheckMismatch`]: crate::ParamsError::CheckMismatch
        pub const fn try_new(params: $crate::Params<$w>) -> Result<Self, $crate::ParamsError> {
          let width = params.width;
          if width == 0 || width > 128 {
            return Err($crate::ParamsError::InvalidWidth { width });
          }
          match $crate::width::register_bits(width as u32) {
            Some(bits) if bits == <$w>::BITS => {}
            _ => {
              return Err($crate::ParamsError::RegisterMismatch {
                width,
                register_bits: <$w>::BITS,
              });
            }
          }

          let bits = width as u32;
          let mask: $w = ((((1 as $w) << (bits - 1)) - 1) << 1) | 1;
          let poly = params.poly & mask;
          let init = params.init & mask;

          let mut crc = Self {
            width,
            poly,
            poly_rev: $rev(poly, bits),
            mask,
            init,
            init_register: if params.reflect_in { $rev(init, bits) } else { init },
            reflect_in: params.reflect_in,
            reflect_out: params.reflect_out,
            xor_out: params.xor_out & mask,
            check: 0,
            lut: $crate::lut::Lut::from_entries([0; N]),
          };
          crc.lut = $crate::lut::Lut::from_entries(crc.build_lut());

          let computed = crc.calc($crate::CHECK_INPUT);
          if let Some(expected) = params.check {
            if expected != computed {
              return Err($crate::ParamsError::CheckMismatch {
                expected: expected as u128,
                computed: computed as u128,
              });
            }
          }
          crc.check = computed;
          Ok(crc)
        }

        /// Build an algorithm from `params`.
        ///
        /// # Panics
        ///
        /// Panics if the parameters are invalid (see [`try_new`](Self::try_new)).
        /// In a `static` or `const` initializer this is a compile error.
        #[must_use]
        pub const fn new(params: $crate::Params<$w>) -> Self {
          match Self::try_new(params) {
            Ok(crc) => crc,
            Err(e) => panic!("{}", e.as_str()),
          }
        }

        // ─────────────────────────────────────────────────────────────────
        // Slow path
        // ─────────────────────────────────────────────────────────────────

        /// Fold the low `n_bits` bits of `input` into `crc`, one bit at a time.
        ///
        /// This is the shift-register definition of the CRC and the oracle for
        /// the table-driven paths; tables are built from it. Reflected CRCs
        /// consume `input` LSB first, direct CRCs MSB first (bit `n_bits - 1`
        /// first). `crc` and the result are low-bits registers. `n_bits` is
        /// clamped to 8; zero leaves `crc` unchanged.
        #[must_use]
        pub const fn calc_byte(&self, input: u8, n_bits: u32, crc: $w) -> $w {
          let n_bits = if n_bits > 8 { 8 } else { n_bits };
          if n_bits == 0 {
            return crc;
          }
          let input = if n_bits == 8 { input } else { input & ((1u8 << n_bits) - 1) };
          let bits = self.width as u32;
          let mut crc = crc;
          let mut n = n_bits;

          if self.reflect_in {
            crc ^= input as $w;
            while n > 0 {
              crc = if crc & 1 != 0 { (crc >> 1) ^ self.poly_rev } else { crc >> 1 };
              n -= 1;
            }
            crc
          } else if bits < n_bits {
            // Widen the register to the input so the top bits line up.
            let msb: $w = 1 << (n_bits - 1);
            let n_diff = n_bits - bits;
            let poly = self.poly << n_diff;
            crc = (input as $w) ^ (crc << n_diff);
            while n > 0 {
              crc = if crc & msb != 0 { (crc << 1) ^ poly } else { crc << 1 };
              n -= 1;
            }
            (crc >> n_diff) & self.mask
          } else {
            let msb: $w = 1 << (bits - 1);
            crc ^= (input as $w) << (bits - n_bits);
            while n > 0 {
              crc = if crc & msb != 0 { (crc << 1) ^ self.poly } else { crc << 1 };
              n -= 1;
            }
            crc & self.mask
          }
        }

        /// CRC of `data` computed bit by bit, without the lookup table.
        ///
        /// Same result as [`calc`](Self::calc), at a fraction of the speed.
        #[must_use]
        pub const fn calc_reference(&self, data: &[u8]) -> $w {
          let mut crc = self.init_register;
          let mut i = 0;
          while i < data.len() {
            crc = self.calc_byte(data[i], 8, crc);
            i += 1;
          }
          self.finalize_register(crc)
        }

        // ─────────────────────────────────────────────────────────────────
        // Table
        // ─────────────────────────────────────────────────────────────────

        const fn build_lut(&self) -> [$w; N] {
          let mut t: [$w; N] = [0; N];
          let align = if !self.reflect_in && self.width < 8 { 8 - self.width as u32 } else { 0 };
          let mut i = 0;
          match $crate::lut::Lut::<$w, N>::KIND {
            $crate::LutKind::Lut256 => {
              while i < 256 {
                t[i] = self.calc_byte(i as u8, 8, 0) << align;
                i += 1;
              }
            }
            $crate::LutKind::Lut32 => {
              while i < 16 {
                t[i] = self.calc_byte(i as u8, 8, 0) << align;
                t[16 + i] = self.calc_byte((i as u8) << 4, 8, 0) << align;
                i += 1;
              }
            }
            $crate::LutKind::Lut16 => {
              while i < 16 {
                t[i] = self.calc_byte(i as u8, 4, 0);
                i += 1;
              }
            }
          }
          t
        }

        /// Table lookup: the register contribution of folding byte `index`
        /// into a zero register.
        ///
        /// Every table shape answers the same question; this is the value a
        /// 256-entry table stores at `index`. For direct CRCs narrower than a
        /// byte the value is aligned to the top of the low byte.
        #[inline]
        #[must_use]
        pub const fn lookup(&self, index: u8) -> $w {
          let t = self.lut.entries();
          match $crate::lut::Lut::<$w, N>::KIND {
            $crate::LutKind::Lut256 => t[index as usize],
            $crate::LutKind::Lut32 => t[(index & 0xF) as usize] ^ t[16 + (index >> 4) as usize],
            $crate::LutKind::Lut16 => {
              if self.reflect_in {
                let lo = t[(index & 0xF) as usize];
                let lo = t[(lo & 0xF) as usize] ^ (lo >> 4);
                lo ^ t[(index >> 4) as usize]
              } else {
                let bits = self.width as u32;
                let hi = t[(index >> 4) as usize];
                let hi = if bits > 4 {
                  (t[(hi >> (bits - 4)) as usize] ^ (hi << 4)) & self.mask
                } else {
                  t[(hi << (4 - bits)) as usize]
                };
                let out = t[(index & 0xF) as usize] ^ hi;
                if bits < 8 { out << (8 - bits) } else { out }
              }
            }
          }
        }

        // ─────────────────────────────────────────────────────────────────
        // Fast path
        // ─────────────────────────────────────────────────────────────────

        /// `v << 8`, or zero when the register is a single byte.
        #[inline(always)]
        const fn shl8(v: $w) -> $w {
          match v.checked_shl(8) {
            Some(v) => v,
            None => 0,
          }
        }

        /// `v >> 8`, or zero when the register is a single byte.
        #[inline(always)]
        const fn shr8(v: $w) -> $w {
          match v.checked_shr(8) {
            Some(v) => v,
            None => 0,
          }
        }

        /// Reflected: fold one byte into a low-bits register.
        #[inline(always)]
        const fn step_reflected(&self, crc: $w, byte: u8) -> $w {
          let crc = crc ^ byte as $w;
          if self.width <= 8 {
            self.lookup(crc as u8)
          } else {
            self.lookup(crc as u8) ^ Self::shr8(crc)
          }
        }

        /// Direct: fold one byte into an aligned register.
        #[inline(always)]
        const fn step_direct(&self, crc: $w, byte: u8) -> $w {
          let bits = self.width as u32;
          if bits <= 8 {
            self.lookup(crc as u8 ^ byte)
          } else {
            self.lookup((crc >> (bits - 8)) as u8 ^ byte) ^ Self::shl8(crc)
          }
        }

        /// Direct: low-bits register into the form the byte steps expect.
        #[inline(always)]
        const fn align_direct(&self, crc: $w) -> $w {
          if self.width < 8 { crc << (8 - self.width as u32) } else { crc }
        }

        /// Direct: aligned register back into the low-bits form.
        #[inline(always)]
        const fn unalign_direct(&self, crc: $w) -> $w {
          if self.width < 8 {
            crc >> (8 - self.width as u32)
          } else {
            crc & self.mask
          }
        }

        /// Fold the low `n_bits` (at most 128) bits of `value` into `crc`.
        ///
        /// Reflected CRCs take whole bytes from the bottom of `value` and the
        /// leftover high bits last. Direct CRCs take the leftover high bits
        /// first, then whole bytes downwards.
        const fn update_wide_bits(&self, crc: $w, value: u128, n_bits: u32) -> $w {
          let bits = self.width as u32;
          let n_bits = if n_bits > 128 { 128 } else { n_bits };
          let rem = n_bits & 7;
          let mut n_bytes = n_bits >> 3;
          let mut crc = crc;

          if self.reflect_in {
            let mut v = value;
            while n_bytes > 0 {
              crc = self.step_reflected(crc, v as u8);
              v >>= 8;
              n_bytes -= 1;
            }
            if rem != 0 {
              crc ^= ((v as u8) & ((1u8 << rem) - 1)) as $w;
              crc = self.lookup((crc << (8 - rem)) as u8) ^ (crc >> rem);
            }
            crc
          } else {
            let mut n = n_bits;
            if rem != 0 {
              n -= rem;
              let input = ((value >> n) as u8) & ((1u8 << rem) - 1);
              if bits <= rem {
                crc = self.lookup((crc << (rem - bits)) as u8 ^ input);
              } else {
                let n_diff = bits - rem;
                let l = self.lookup((crc >> n_diff) as u8 ^ input);
                crc = if bits < 8 { l ^ (crc << (8 - n_diff)) } else { l ^ (crc << rem) };
              }
            } else {
              crc = self.align_direct(crc);
            }
            while n_bytes > 0 {
              n -= 8;
              crc = self.step_direct(crc, (value >> n) as u8);
              n_bytes -= 1;
            }
            self.unalign_direct(crc)
          }
        }

        // ─────────────────────────────────────────────────────────────────
        // Register API
        // ─────────────────────────────────────────────────────────────────

        /// Register value before any input.
        ///
        /// `init` in the register's bit order: reversed over `width` bits when
        /// input is reflected.
        #[inline]
        #[must_use]
        pub const fn register_init(&self) -> $w {
          self.init_register
        }

        /// Fold `data` into `register` through the lookup table.
        ///
        /// Starting from [`register_init`](Self::register_init) and finishing
        /// with [`finalize_register`](Self::finalize_register) gives the same
        /// result as [`calc`](Self::calc), however `data` is split across
        /// calls.
        #[must_use]
        pub const fn update_register(&self, register: $w, data: &[u8]) -> $w {
          let mut crc = register;
          let mut i = 0;
          if self.reflect_in {
            while i < data.len() {
              crc = self.step_reflected(crc, data[i]);
              i += 1;
            }
            crc
          } else {
            crc = self.align_direct(crc);
            while i < data.len() {
              crc = self.step_direct(crc, data[i]);
              i += 1;
            }
            self.unalign_direct(crc)
          }
        }

        /// Fold the low `n_bits` bits of `value` into `register`.
        ///
        /// `n_bits` is clamped to the bit width of `V`.
        #[inline]
        #[must_use]
        pub fn update_register_bits<V: $crate::BitInput>(&self, register: $w, value: V, n_bits: u32) -> $w {
          self.update_wide_bits(register, value.widen(), n_bits.min(V::BITS))
        }

        /// Apply the output transform to `register`: reflect it over `width`
        /// bits when `reflect_in != reflect_out`, then XOR with `xor_out`.
        ///
        /// Does not modify anything; the same register can keep absorbing
        /// input afterwards.
        #[inline]
        #[must_use]
        pub const fn finalize_register(&self, register: $w) -> $w {
          let crc = if self.reflect_in != self.reflect_out {
            $rev(register, self.width as u32)
          } else {
            register
          };
          crc ^ self.xor_out
        }

        // ─────────────────────────────────────────────────────────────────
        // One-shot
        // ─────────────────────────────────────────────────────────────────

        /// CRC of `data`.
        #[inline]
        #[must_use]
        pub const fn calc(&self, data: &[u8]) -> $w {
          self.finalize_register(self.update_register(self.init_register, data))
        }

        /// CRC of the low `n_bits` bits of `value`.
        ///
        /// Bit order follows `reflect_in`: reflected CRCs consume `value`
        /// from bit 0 upwards, direct CRCs from bit `n_bits - 1` downwards.
        /// `n_bits` is clamped to the bit width of `V`.
        #[inline]
        #[must_use]
        pub fn calc_bits<V: $crate::BitInput>(&self, value: V, n_bits: u32) -> $w {
          self.finalize_register(self.update_register_bits(self.init_register, value, n_bits))
        }

        /// Compare the CRC of `data` with `expected`.
        ///
        /// # Errors
        ///
        /// Returns [`VerificationError`](crate::VerificationError) if they
        /// differ.
        #[inline]
        pub fn verify(&self, data: &[u8], expected: $w) -> Result<(), $crate::VerificationError> {
          if self.calc(data) == expected {
            Ok(())
          } else {
            Err($crate::VerificationError::new())
          }
        }

        /// A fresh incremental engine.
        #[inline]
        #[must_use]
        pub const fn engine(&self) -> $crate::Engine<'_, $w, N> {
          $crate::Engine::<$w, N>::new(self)
        }
      }
    )*
  };
}

/// Generate the inherent methods and trait implementations of
/// `Engine<'_, $w, N>`.
macro_rules! impl_engine {
  ($($w:ty),* $(,)?) => {
    $(
      impl<'a, const N: usize> $crate::Engine<'a, $w, N> {
        /// Fresh engine for `crc`.
        #[inline]
        #[must_use]
        pub const fn new(crc: &'a $crate::Crc<$w, N>) -> Self {
          Self {
            crc,
            register: crc.init_register,
          }
        }

        /// Fold `data` into the running CRC.
        #[inline]
        pub fn update(&mut self, data: &[u8]) {
          self.register = self.crc.update_register(self.register, data);
        }

        /// Fold the low `n_bits` bits of `value` into the running CRC.
        ///
        /// `n_bits` is clamped to the bit width of `V`.
        #[inline]
        pub fn update_bits<V: $crate::BitInput>(&mut self, value: V, n_bits: u32) {
          self.register = self.crc.update_register_bits(self.register, value, n_bits);
        }

        /// CRC of everything fed so far, leaving the engine untouched.
        #[inline]
        #[must_use]
        pub const fn peek(&self) -> $w {
          self.crc.finalize_register(self.register)
        }

        /// CRC of everything fed so far; the engine starts over afterwards.
        #[inline]
        #[must_use]
        pub fn finalize(&mut self) -> $w {
          let out = self.peek();
          self.reset();
          out
        }

        /// Discard accumulated input.
        #[inline]
        pub fn reset(&mut self) {
          self.register = self.crc.init_register;
        }
      }

      impl<const N: usize> $crate::Checksum for $crate::Engine<'_, $w, N> {
        const OUTPUT_SIZE: usize = core::mem::size_of::<$w>();
        type Output = $w;

        #[inline]
        fn update(&mut self, data: &[u8]) {
          Self::update(self, data);
        }

        #[inline]
        fn finalize(&mut self) -> $w {
          Self::finalize(self)
        }

        #[inline]
        fn reset(&mut self) {
          Self::reset(self);
        }
      }

      impl<const N: usize> $crate::BitChecksum for $crate::Engine<'_, $w, N> {
        #[inline]
        fn update_bits<V: $crate::BitInput>(&mut self, value: V, n_bits: u32) {
          Self::update_bits(self, value, n_bits);
        }
      }
    )*
  };
}
