use checkerboard_transform::{
    mix, split_anchor, split_non_anchor, unsplit_anchor, unsplit_non_anchor, Shape, Tensor,
};
use core::mem::size_of;
use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Checkerboard (NHWC f32)");

    // A typical latent grid for a 1024x1024 image at 16x downsampling.
    let shape = Shape::new(1, 64, 64, 192);
    let y = Tensor::from_vec(
        shape,
        (0..shape.element_count()).map(|v| (v % 251) as f32).collect(),
    )
    .unwrap();
    let zeros = Tensor::<f32>::zeros(shape);

    group.throughput(criterion::Throughput::Bytes(
        (shape.element_count() * size_of::<f32>()) as u64,
    ));

    group.bench_function("mix", |b| b.iter(|| mix(&y, &zeros).unwrap()));

    group.bench_function("split_unsplit_non_anchor", |b| {
        b.iter(|| unsplit_non_anchor(&split_non_anchor(&y).unwrap()).unwrap())
    });

    group.bench_function("split_unsplit_anchor", |b| {
        b.iter(|| unsplit_anchor(&split_anchor(&y).unwrap()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
