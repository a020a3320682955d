//! CRC throughput benchmarks.
//!
//! Run: `cargo bench -p polycrc --bench tables -- crc32`
//!
//! This benchmarks:
//! - Each lookup table shape (16, 32 and 256 entries) on CRC-32 and CRC-64/XZ
//! - Direct and reflected 16-bit CRCs at the default shape
//! - The bit-by-bit reference path, as the baseline the tables improve on
//! - The `crc` and `crc-fast` crates on CRC-32, for comparison

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use polycrc::{CRC16_ARC, CRC16_CCITT_FALSE, CRC32, CRC64_XZ, CrcLut16, CrcLut32, CrcLut256};

/// Standard benchmark sizes.
const SIZES: [usize; 5] = [256, 1024, 4096, 16384, 65536];

/// Deterministic, non-uniform input.
fn data(size: usize) -> Vec<u8> {
  (0..size).map(|i| (i.wrapping_mul(31) ^ (i >> 3)) as u8).collect()
}

/// Benchmark the three table shapes of CRC-32.
fn bench_crc32_shapes(c: &mut Criterion) {
  static L16: CrcLut16<u32> = CrcLut16::<u32>::new(CRC32.params());
  static L32: CrcLut32<u32> = CrcLut32::<u32>::new(CRC32.params());
  static L256: CrcLut256<u32> = CrcLut256::<u32>::new(CRC32.params());

  let mut group = c.benchmark_group("crc32");

  for size in SIZES {
    let data = data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("lut16", size), &data, |b, data| {
      b.iter(|| black_box(L16.calc(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("lut32", size), &data, |b, data| {
      b.iter(|| black_box(L32.calc(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("lut256", size), &data, |b, data| {
      b.iter(|| black_box(L256.calc(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("crc-crate", size), &data, |b, data| {
      let reference = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
      b.iter(|| black_box(reference.checksum(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("crc-fast", size), &data, |b, data| {
      b.iter(|| black_box(crc_fast::checksum(crc_fast::CrcAlgorithm::Crc32IsoHdlc, black_box(data)) as u32));
    });
  }

  group.finish();
}

/// Benchmark the three table shapes of CRC-64/XZ.
fn bench_crc64_shapes(c: &mut Criterion) {
  static L16: CrcLut16<u64> = CrcLut16::<u64>::new(CRC64_XZ.params());
  static L32: CrcLut32<u64> = CrcLut32::<u64>::new(CRC64_XZ.params());
  static L256: CrcLut256<u64> = CrcLut256::<u64>::new(CRC64_XZ.params());

  let mut group = c.benchmark_group("crc64/xz");

  for size in SIZES {
    let data = data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("lut16", size), &data, |b, data| {
      b.iter(|| black_box(L16.calc(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("lut32", size), &data, |b, data| {
      b.iter(|| black_box(L32.calc(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("lut256", size), &data, |b, data| {
      b.iter(|| black_box(L256.calc(black_box(data))));
    });
  }

  group.finish();
}

/// Benchmark direct vs reflected processing at the default shape.
fn bench_crc16(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc16");

  for size in SIZES {
    let data = data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("ccitt-false", size), &data, |b, data| {
      b.iter(|| black_box(CRC16_CCITT_FALSE.calc(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("arc", size), &data, |b, data| {
      b.iter(|| black_box(CRC16_ARC.calc(black_box(data))));
    });
  }

  group.finish();
}

/// Benchmark the bit-by-bit reference path.
fn bench_reference(c: &mut Criterion) {
  let mut group = c.benchmark_group("reference");

  // The bitwise path is slow; small sizes are enough to see the ratio.
  for size in [256, 4096] {
    let data = data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("crc32", size), &data, |b, data| {
      b.iter(|| black_box(CRC32.calc_reference(black_box(data))));
    });
  }

  group.finish();
}

/// Benchmark sub-byte input through the engine.
fn bench_bits(c: &mut Criterion) {
  let mut group = c.benchmark_group("bits");
  group.throughput(Throughput::Bytes(8));

  for n_bits in [7u32, 13, 64] {
    group.bench_with_input(BenchmarkId::new("crc32", n_bits), &n_bits, |b, &n_bits| {
      b.iter(|| black_box(CRC32.calc_bits(black_box(0xDEAD_BEEF_CAFE_F00Du64), n_bits)));
    });
  }

  group.finish();
}

criterion_group!(
  benches,
  bench_crc32_shapes,
  bench_crc64_shapes,
  bench_crc16,
  bench_reference,
  bench_bits,
);
criterion_main!(benches);
