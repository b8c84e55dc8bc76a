use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use grayconv::{apply_col, apply_grid, apply_pix, apply_row, apply_seq, filters, GrayImage};

const SEED: u64 = 42;

fn random_image(side: u32) -> GrayImage {
    let mut buffer = vec![0u8; side as usize * side as usize];
    StdRng::seed_from_u64(SEED).fill_bytes(&mut buffer);
    GrayImage::from_vec_u8(side, side, buffer).unwrap()
}

fn bench_modes(c: &mut Criterion) {
    let image = random_image(1024);
    let src_view = image.view();
    let kernel = filters::by_name("gaussian_blur_3x3").unwrap();

    let mut group = c.benchmark_group("convolve 1024x1024");
    group.sample_size(10);
    group.bench_function("seq", |b| b.iter(|| apply_seq(&src_view, &kernel).unwrap()));
    group.bench_function("row", |b| b.iter(|| apply_row(&src_view, &kernel).unwrap()));
    group.bench_function("col", |b| b.iter(|| apply_col(&src_view, &kernel).unwrap()));
    for block_size in [64, 128, 256] {
        for x_workers in [1, 2, 4, 8] {
            group.bench_with_input(
                BenchmarkId::new("grid", format!("{block_size}px {x_workers}w")),
                &(block_size, x_workers),
                |b, &(block_size, x_workers)| {
                    b.iter(|| apply_grid(&src_view, &kernel, block_size, x_workers).unwrap())
                },
            );
        }
    }
    group.finish();
}

fn bench_pix_pathology(c: &mut Criterion) {
    // One task per pixel; a smaller image keeps the run tractable
    // while the dispatch overhead stays clearly visible.
    let image = random_image(256);
    let src_view = image.view();
    let kernel = filters::by_name("gaussian_blur_3x3").unwrap();

    let mut group = c.benchmark_group("convolve 256x256");
    group.sample_size(10);
    group.bench_function("pix", |b| b.iter(|| apply_pix(&src_view, &kernel).unwrap()));
    group.bench_function("seq", |b| b.iter(|| apply_seq(&src_view, &kernel).unwrap()));
    group.finish();
}

criterion_group!(benches, bench_modes, bench_pix_pathology);
criterion_main!(benches);
