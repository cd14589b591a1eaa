use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use membw::bench::AlignedBuffer;
use membw::simd;

fn benchmark_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    for kib in [64usize, 1024] {
        let bytes = kib << 10;
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(kib), &bytes, |b, &bytes| {
            let mut buffer = AlignedBuffer::zeroed(bytes).unwrap();
            let mut seed = 1u64;
            b.iter(|| {
                buffer.fill_pseudo_random(black_box(seed));
                seed = seed.wrapping_add(1);
            });
        });
    }
    group.finish();
}

fn benchmark_stream_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_pass");
    for kib in [64usize, 1024] {
        let bytes = kib << 10;
        let mut buffer = AlignedBuffer::zeroed(bytes).unwrap();
        buffer.fill_pseudo_random(42);

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(kib), &buffer, |b, buffer| {
            b.iter(|| {
                let mut tot1 = simd::zero();
                let mut tot2 = simd::zero();
                for pair in buffer.as_vectors().chunks_exact(2) {
                    tot1 = simd::add(tot1, simd::load(&pair[0]));
                    tot2 = simd::add(tot2, simd::load(&pair[1]));
                }
                black_box(simd::movemask(simd::add(tot1, tot2)));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_fill, benchmark_stream_pass);
criterion_main!(benches);
