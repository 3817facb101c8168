//! Benchmarks for head pose estimation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use head_pose_landmarks::{
    estimator::normalize_angle, EstimatorConfig, HeadPoseEstimator, Landmark, LandmarkSet,
};

fn benchmark_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimation");

    let estimator = HeadPoseEstimator::new(EstimatorConfig::default()).expect("valid config");

    // Synthetic face mesh frame: points on an ellipse with mild depth
    let landmarks: LandmarkSet = (0..468)
        .map(|i| {
            let angle = (i as f32) * 2.0 * std::f32::consts::PI / 468.0;
            Landmark::new(
                0.5 + 0.2 * angle.cos(),
                0.5 + 0.3 * angle.sin(),
                0.05 * angle.sin(),
            )
        })
        .collect();

    group.bench_function("estimate_full_mesh", |b| {
        b.iter(|| {
            let pose = estimator
                .estimate(black_box(&landmarks))
                .expect("estimation failed");
            black_box(pose);
        });
    });

    group.finish();
}

fn benchmark_angle_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("angles");

    let angles: Vec<f32> = (-100..100).map(|i| i as f32 * 0.173).collect();

    group.bench_function("normalize_angle", |b| {
        b.iter(|| {
            for &angle in &angles {
                black_box(normalize_angle(black_box(angle)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_estimation, benchmark_angle_normalization);
criterion_main!(benches);
