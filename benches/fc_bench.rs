use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qdense::data::FcCase;
use qdense::runner::forward;

fn bench_fc_forward(c: &mut Criterion) {
    let case = FcCase::random(1024, 512, 0x5eed);
    let args = case.args();
    let mut output = vec![0i32; case.channels_out];

    c.bench_function("fc_forward_1024x512_1core", |ben| {
        ben.iter(|| forward(&args, black_box(&mut output), 1))
    });
    c.bench_function("fc_forward_1024x512_8core", |ben| {
        ben.iter(|| forward(&args, black_box(&mut output), 8))
    });
}

criterion_group!(benches, bench_fc_forward);
criterion_main!(benches);
