use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use harris_detect::{
    correlation, extract_candidates, harris_response, smoothing, sobel_gradients, suppress_close_corners,
    DetectorBuilder, Grid, HarrisDetector, HarrisParams, Image,
};

/// Create benchmark image with realistic corner patterns
fn create_benchmark_image(width: usize, height: usize, complexity: &str) -> Image {
    match complexity {
        "checkerboard" => Grid::from_fn(width, height, |x, y| {
            if ((x / 16) + (y / 16)) % 2 == 0 { 40 } else { 210 }
        }),
        "realistic" => {
            // Horizontal gradient with deterministic noise and a few blocks
            let mut img = Grid::from_fn(width, height, |x, y| {
                let gradient = ((x as f32 / width as f32) * 50.0) as u8;
                let noise = ((x * 7 + y * 13) % 11) as u8;
                100 + gradient + noise
            });
            for i in 0..20 {
                let cx = (i * width / 20 + 5) % width;
                let cy = (i * height / 13 + 5) % height;
                for y in cy..(cy + 8).min(height) {
                    for x in cx..(cx + 8).min(width) {
                        img.set(x, y, if i % 2 == 0 { 20 } else { 240 });
                    }
                }
            }
            img
        }
        _ => Grid::filled(width, height, 128),
    }
}

fn create_test_params() -> HarrisParams {
    HarrisParams {
        n_threads: 1, // Single-threaded for consistent benchmarks
        ..HarrisParams::default()
    }
}

/// Benchmark full detection pipeline
fn bench_full_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_detection");
    let detector = HarrisDetector::new(create_test_params()).unwrap();

    for &(width, height) in &[(64, 64), (128, 128), (256, 256), (512, 512)] {
        for complexity in ["flat", "checkerboard", "realistic"] {
            let img = create_benchmark_image(width, height, complexity);
            group.bench_with_input(
                BenchmarkId::new(format!("{}x{}", width, height), complexity),
                &img,
                |b, img| b.iter(|| black_box(detector.detect(black_box(img)).unwrap())),
            );
        }
    }

    group.finish();
}

/// Benchmark individual pipeline stages
fn bench_pipeline_stages(c: &mut Criterion) {
    let img = create_benchmark_image(256, 256, "realistic");
    let params = create_test_params();
    let mut group = c.benchmark_group("pipeline_stages");

    group.bench_function("sobel_gradients", |b| {
        b.iter(|| black_box(sobel_gradients(black_box(&img))))
    });

    let grads = sobel_gradients(&img);
    group.bench_function("harris_response", |b| {
        b.iter(|| black_box(harris_response(black_box(&grads), params.k, params.window_size).unwrap()))
    });

    let response = harris_response(&grads, params.k, params.window_size).unwrap();
    group.bench_function("extract_candidates", |b| {
        b.iter(|| black_box(extract_candidates(black_box(&response), params.threshold, params.max_corners)))
    });

    let candidates = extract_candidates(&response, params.threshold, params.max_corners);
    group.bench_function("suppress_close_corners", |b| {
        b.iter(|| black_box(suppress_close_corners(black_box(&candidates), params.min_distance)))
    });

    group.finish();
}

/// Benchmark smoothing window impact
fn bench_window_size(c: &mut Criterion) {
    let img = create_benchmark_image(256, 256, "checkerboard");
    let grads = sobel_gradients(&img);
    let mut group = c.benchmark_group("window_size");

    for window in [3usize, 5, 7, 11, 15] {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &window| {
            b.iter(|| black_box(smoothing::gaussian_blur(black_box(&grads.ix), window)))
        });
    }

    group.finish();
}

/// Benchmark candidate cap impact on the quadratic suppression step
fn bench_max_corners_impact(c: &mut Criterion) {
    let img = create_benchmark_image(512, 512, "checkerboard");
    let mut group = c.benchmark_group("max_corners_impact");

    for max_corners in [100usize, 500, 2000] {
        let detector = DetectorBuilder::new()
            .threads(1)
            .threshold(0.0)
            .max_corners(max_corners)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(max_corners), &img, |b, img| {
            b.iter(|| black_box(detector.detect(black_box(img)).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark manual correlation against the demo kernel
fn bench_correlation(c: &mut Criterion) {
    let img = create_benchmark_image(256, 256, "realistic");
    let kernel = correlation::demo_kernel();
    let mut group = c.benchmark_group("correlation");

    group.bench_function("correlate_3x3", |b| {
        b.iter(|| black_box(correlation::correlate(black_box(&img), &kernel)))
    });
    group.bench_function("convolve_3x3", |b| {
        b.iter(|| black_box(correlation::convolve(black_box(&img), &kernel)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_detection,
    bench_pipeline_stages,
    bench_window_size,
    bench_max_corners_impact,
    bench_correlation
);

criterion_main!(benches);
