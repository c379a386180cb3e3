use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmeanspp_rs::{fit, initialize, KMeansConfig, KMeansPP};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use std::time::Duration;

fn benchmark_initialize_varying_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeanspp_init_samples");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_features = 32;
    let k = 20;
    let sample_sizes = [1_000, 5_000, 10_000];

    for n_samples in sample_sizes.iter() {
        group.throughput(Throughput::Elements(*n_samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            n_samples,
            |b, &n_samples| {
                let data = Array2::random((n_samples, n_features), Uniform::new(-1.0, 1.0));

                b.iter(|| initialize(black_box(&data.view()), k, 42).unwrap());
            },
        );
    }
    group.finish();
}

fn benchmark_refine_varying_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("lloyd_clusters");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_samples = 5_000;
    let n_features = 32;
    let cluster_counts = [5, 20, 50];

    for k in cluster_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let data = Array2::random((n_samples, n_features), Uniform::new(-1.0, 1.0));
            let seeding = initialize(&data.view(), k, 42).unwrap();

            b.iter(|| {
                fit(
                    k,
                    10,
                    0.0,
                    black_box(&data.view()),
                    &seeding.centroids.view(),
                )
                .unwrap()
            });
        });
    }
    group.finish();
}

fn benchmark_train_varying_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeanspp_dimensions");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_samples = 2_000;
    let k = 10;
    let dimensions = [2, 16, 64];

    for n_features in dimensions.iter() {
        group.throughput(Throughput::Elements(*n_features as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_features),
            n_features,
            |b, &n_features| {
                let data = Array2::random((n_samples, n_features), Uniform::new(-1.0, 1.0));
                let config = KMeansConfig::new(k).with_max_iters(10).with_seed(42);

                b.iter(|| {
                    let mut kmeans = KMeansPP::with_config(config.clone());
                    kmeans.train(black_box(&data.view())).unwrap();
                    kmeans
                });
            },
        );
    }
    group.finish();
}

fn benchmark_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeanspp_predict");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_train = 5_000;
    let n_features = 32;
    let k = 50;
    let predict_sizes = [1_000, 5_000];

    let train_data = Array2::random((n_train, n_features), Uniform::new(-1.0, 1.0));
    let config = KMeansConfig::new(k).with_max_iters(10).with_seed(42);
    let mut kmeans = KMeansPP::with_config(config);
    kmeans.train(&train_data.view()).unwrap();

    for n_predict in predict_sizes.iter() {
        group.throughput(Throughput::Elements(*n_predict as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_predict),
            n_predict,
            |b, &n_predict| {
                let test_data = Array2::random((n_predict, n_features), Uniform::new(-1.0, 1.0));

                b.iter(|| kmeans.predict(black_box(&test_data.view())).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_initialize_varying_samples,
    benchmark_refine_varying_clusters,
    benchmark_train_varying_dimensions,
    benchmark_predict,
);

criterion_main!(benches);
