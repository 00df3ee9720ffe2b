// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for elementwise unary kernels.

use array_core::{ColMajor, HostMatrix, HostVector};
use blas1_ops::abs;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_abs_vector(c: &mut Criterion) {
    let n = 1 << 16;
    let src = HostVector::from_vec((0..n).map(|i| -(i as f32)).collect());
    let mut dst = HostVector::zeros(n);

    c.bench_function("abs/f32/vector/65536", |b| {
        b.iter(|| {
            abs(&mut dst, black_box(&src)).unwrap();
        })
    });
}

fn bench_abs_matrix(c: &mut Criterion) {
    let (rows, cols) = (256, 256);
    let data: Vec<f32> = (0..rows * cols).map(|i| -(i as f32)).collect();
    let src: HostMatrix<f32> = HostMatrix::from_vec(rows, cols, data).unwrap();
    let mut dst = HostMatrix::<f32>::zeros(rows, cols);

    c.bench_function("abs/f32/matrix/256x256", |b| {
        b.iter(|| {
            abs(&mut dst, black_box(&src)).unwrap();
        })
    });
}

fn bench_abs_matrix_col_major(c: &mut Criterion) {
    let (rows, cols) = (256, 256);
    let data: Vec<f32> = (0..rows * cols).map(|i| -(i as f32)).collect();
    let src: HostMatrix<f32, ColMajor> = HostMatrix::from_vec(rows, cols, data).unwrap();
    let mut dst: HostMatrix<f32, ColMajor> = HostMatrix::zeros(rows, cols);

    c.bench_function("abs/f32/matrix/256x256/col-major", |b| {
        b.iter(|| {
            abs(&mut dst, black_box(&src)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_abs_vector,
    bench_abs_matrix,
    bench_abs_matrix_col_major
);
criterion_main!(benches);
