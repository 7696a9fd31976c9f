use criterion::{black_box, criterion_group, criterion_main, Criterion};
use faer::Mat;
use matrixkit::{ColMajorMatrix, DenseMatrix, FaerMatrix, Matrix, MatrixOps};

fn bench_multiply(c: &mut Criterion) {
    let n = 64;

    let mut dense = DenseMatrix::<i64>::create(n, n).unwrap();
    dense.fill_row_wise();
    c.bench_function("dense multiply", |ben| {
        ben.iter(|| black_box(&dense).multiply(black_box(&dense)).unwrap())
    });

    let mut col_major = ColMajorMatrix::<i64>::create(n, n).unwrap();
    col_major.fill_row_wise();
    c.bench_function("col-major multiply", |ben| {
        ben.iter(|| black_box(&col_major).multiply(black_box(&col_major)).unwrap())
    });

    let a = FaerMatrix::from_mat(Mat::from_fn(n, n, |i, j| ((i * n + j) as f64).sin())).unwrap();
    c.bench_function("faer-backed multiply", |ben| {
        ben.iter(|| black_box(&a).multiply(black_box(&a)).unwrap())
    });

    c.bench_function("faer raw matmul", |ben| {
        ben.iter(|| black_box(a.as_mat()) * black_box(a.as_mat()))
    });
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
