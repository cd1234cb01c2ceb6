use binmorph_image::{BinaryImage, ImageSize};
use binmorph_imgproc::label::{colorize, label, Connectivity, DEFAULT_COLOR_SEED};
use binmorph_imgproc::morphology::{prune, skeletonize, thin, DEFAULT_PRUNE_SIZE};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

// A grid of filled discs, closer to a scanned binary drawing than random noise.
fn create_test_mask(width: usize, height: usize) -> BinaryImage {
    let size = ImageSize { width, height };
    BinaryImage::from_fn(size, |x, y| {
        let (cx, cy) = ((x % 32) as isize - 16, (y % 32) as isize - 16);
        cx * cx + cy * cy <= 121
    })
    .unwrap()
}

fn bench_skeleton(c: &mut Criterion) {
    let mut group = c.benchmark_group("Skeleton");

    for (width, height) in [(128, 128), (256, 256), (512, 512)].iter() {
        let src = create_test_mask(*width, *height);
        let parameter_string = format!("{width}x{height}");

        group.bench_with_input(
            BenchmarkId::new("thin", &parameter_string),
            &src,
            |b, src| b.iter(|| std::hint::black_box(thin(src))),
        );
        group.bench_with_input(
            BenchmarkId::new("skeletonize", &parameter_string),
            &src,
            |b, src| b.iter(|| std::hint::black_box(skeletonize(src))),
        );

        let skeleton = skeletonize(&src);
        group.bench_with_input(
            BenchmarkId::new("prune", &parameter_string),
            &skeleton,
            |b, skeleton| b.iter(|| std::hint::black_box(prune(skeleton, DEFAULT_PRUNE_SIZE))),
        );
        group.bench_with_input(
            BenchmarkId::new("label_colorize", &parameter_string),
            &src,
            |b, src| {
                b.iter(|| {
                    let (labels, _) = label(src, Connectivity::Eight);
                    std::hint::black_box(colorize(&labels, DEFAULT_COLOR_SEED))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_skeleton);
criterion_main!(benches);
