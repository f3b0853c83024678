use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qdense::kernel::{dot_u8_i8, dot_u8_i8_simd};

fn make_row(len: usize) -> (Vec<u8>, Vec<i8>) {
    let mut seed = 0x1234_5678_9abc_def0u64;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        (seed >> 32) as u8
    };
    let a: Vec<u8> = (0..len).map(|_| next()).collect();
    let b: Vec<i8> = (0..len).map(|_| next() as i8).collect();
    (a, b)
}

fn bench_dot(c: &mut Criterion) {
    // 1027 leaves a 3-element tail for the packed kernel
    let (a, b) = make_row(1027);
    c.bench_function("dot_u8_i8_scalar_1027", |ben| {
        ben.iter(|| black_box(dot_u8_i8(black_box(&a), black_box(&b))))
    });
    c.bench_function("dot_u8_i8_simd_1027", |ben| {
        ben.iter(|| black_box(dot_u8_i8_simd(black_box(&a), black_box(&b))))
    });
}

criterion_group!(benches, bench_dot);
criterion_main!(benches);
