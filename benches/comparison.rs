use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Helpers: deterministic dense inputs
// ---------------------------------------------------------------------------

fn entry(i: usize, j: usize) -> f64 {
    ((i + 1) * 10 + j + 1) as f64 + ((i * 7 + j * 3) % 5) as f64
}

fn spd_entry(i: usize, j: usize) -> f64 {
    ((i + 1) * (j + 1)) as f64 + if i == j { 10.0 } else { 0.0 }
}

fn jacobi_spd(n: usize) -> jacobi_svd::DynMatrix<f64> {
    let a = jacobi_svd::DynMatrix::from_fn(n, n, spd_entry);
    &a * &a.transpose()
}

fn nalgebra_spd(n: usize) -> nalgebra::DMatrix<f64> {
    let a = nalgebra::DMatrix::from_fn(n, n, spd_entry);
    &a * a.transpose()
}

fn faer_spd(n: usize) -> faer::Mat<f64> {
    let a = faer::Mat::from_fn(n, n, spd_entry);
    &a * a.transpose()
}

// ---------------------------------------------------------------------------
// Matrix multiply (dominates forming AᵗA)
// ---------------------------------------------------------------------------

fn matmul_dyn_50(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_dyn_50x50");

    g.bench_function("jacobi_svd", |b| {
        let a = jacobi_svd::DynMatrix::from_fn(50, 50, |i, j| (i * 50 + j + 1) as f64);
        let m = jacobi_svd::DynMatrix::from_fn(50, 50, |i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::DMatrix::from_fn(50, 50, |i, j| (i * 50 + j + 1) as f64);
        let m = nalgebra::DMatrix::from_fn(50, 50, |i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("faer", |b| {
        let a = faer::Mat::from_fn(50, 50, |i, j| (i * 50 + j + 1) as f64);
        let m = faer::Mat::from_fn(50, 50, |i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// SVD
// ---------------------------------------------------------------------------

fn svd_dyn(c: &mut Criterion, rows: usize, cols: usize) {
    let mut g = c.benchmark_group(format!("svd_{}x{}", rows, cols));

    g.bench_function("jacobi_svd", |b| {
        let a = jacobi_svd::DynMatrix::from_fn(rows, cols, entry);
        b.iter(|| std::hint::black_box(&a).svd())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::DMatrix::from_fn(rows, cols, entry);
        b.iter(|| std::hint::black_box(&a).clone().svd(true, true))
    });

    g.bench_function("faer", |b| {
        let a = faer::Mat::from_fn(rows, cols, entry);
        b.iter(|| std::hint::black_box(&a).svd())
    });

    g.finish();
}

fn svd_4x4(c: &mut Criterion) {
    svd_dyn(c, 4, 4);
}

fn svd_20x8(c: &mut Criterion) {
    svd_dyn(c, 20, 8);
}

fn svd_50x50(c: &mut Criterion) {
    svd_dyn(c, 50, 50);
}

// ---------------------------------------------------------------------------
// Symmetric eigendecomposition
// ---------------------------------------------------------------------------

fn eigen_symmetric(c: &mut Criterion, n: usize) {
    let mut g = c.benchmark_group(format!("eigen_symmetric_{}x{}", n, n));

    g.bench_function("jacobi_svd", |b| {
        let a = jacobi_spd(n);
        b.iter(|| std::hint::black_box(&a).eig_symmetric())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_spd(n);
        b.iter(|| std::hint::black_box(&a).clone().symmetric_eigen())
    });

    g.bench_function("faer", |b| {
        let a = faer_spd(n);
        b.iter(|| std::hint::black_box(&a).selfadjoint_eigendecomposition(faer::Side::Lower))
    });

    g.finish();
}

fn eigen_symmetric_6x6(c: &mut Criterion) {
    eigen_symmetric(c, 6);
}

fn eigen_symmetric_30x30(c: &mut Criterion) {
    eigen_symmetric(c, 30);
}

// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    matmul_dyn_50,
    svd_4x4,
    svd_20x8,
    svd_50x50,
    eigen_symmetric_6x6,
    eigen_symmetric_30x30,
);
criterion_main!(benches);
