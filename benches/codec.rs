use std::io::{self, Read};

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wordpack::{pack, unpack, Reader};

/// Mixed payload: partial words, zero runs, and literal text.
fn mixed_unpacked() -> Vec<u8> {
    [
        &[8u8, 0, 100, 6, 0, 1, 1, 2][..],
        &[8, 0, 100, 6, 0, 1, 1, 2],
        &[0; 32],
        &[0, 1, 0, 2, 0, 3, 0, 0],
        b"Hello, World!  Pad text.",
    ]
    .concat()
    .repeat(128)
}

/// Packed payload dominated by maximum-length zero runs, so every input byte
/// expands to a kilobyte of output.
fn run_heavy_packed() -> Vec<u8> {
    [0x00, 0xFF].repeat(1024)
}

fn bench_pack(c: &mut Criterion) {
    let src = mixed_unpacked();
    let mut group = c.benchmark_group("pack");
    group.throughput(Throughput::Bytes(src.len() as u64));
    group.bench_function("mixed", |b| {
        let mut dst = Vec::with_capacity(src.len());
        b.iter(|| {
            dst.clear();
            dst = pack(std::mem::take(&mut dst), black_box(&src));
        });
    });
    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack");
    for (name, packed) in [
        ("mixed", pack(Vec::new(), &mixed_unpacked())),
        ("run_heavy", run_heavy_packed()),
    ] {
        let unpacked_len = unpack(Vec::new(), &packed).unwrap().len();
        group.throughput(Throughput::Bytes(unpacked_len as u64));
        group.bench_function(name, |b| {
            let mut dst = Vec::with_capacity(unpacked_len);
            b.iter(|| {
                dst.clear();
                dst = unpack(std::mem::take(&mut dst), black_box(&packed)).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader");
    for (name, packed) in [
        ("mixed", pack(Vec::new(), &mixed_unpacked())),
        ("run_heavy", run_heavy_packed()),
    ] {
        let unpacked_len = unpack(Vec::new(), &packed).unwrap().len();
        group.throughput(Throughput::Bytes(unpacked_len as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut r = Reader::new(black_box(&packed[..]));
                let n = io::copy(&mut r, &mut io::sink()).unwrap();
                assert_eq!(n as usize, unpacked_len);
            });
        });
        group.bench_function(format!("{}_small_buffers", name), |b| {
            let mut buf = [0u8; 32];
            b.iter(|| {
                let mut r = Reader::new(black_box(&packed[..]));
                let mut total = 0;
                loop {
                    let n = r.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    total += n;
                }
                assert_eq!(total, unpacked_len);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pack, bench_unpack, bench_reader);
criterion_main!(benches);
