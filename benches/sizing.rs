// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use criterion::{criterion_group, criterion_main, Criterion};
use devil::{DataFormat, DataType, PixelRegion};
use std::hint::black_box;

pub fn benchmark_byte_len(c: &mut Criterion) {
    let fmts = [
        DataFormat::LUMINANCE,
        DataFormat::RGB,
        DataFormat::RGBA,
        DataFormat::BGRA,
    ];
    let types = [DataType::UNSIGNED_BYTE, DataType::HALF, DataType::DOUBLE];
    let dims = [(320, 240), (1920, 1080), (7680, 4320)];

    for fmt in fmts.iter() {
        let mut group = c.benchmark_group(format!("byte_len/{}", fmt));
        for ty in types.iter() {
            for dim in dims.iter() {
                let region = PixelRegion::new(dim.0, dim.1, *fmt, *ty);
                group.bench_with_input(
                    format!("{}-{}x{}", ty, dim.0, dim.1),
                    &region,
                    |b, region| b.iter(|| black_box(region).byte_len()),
                );
            }
        }
    }
}

criterion_group!(benches, benchmark_byte_len);
criterion_main!(benches);
