// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use criterion::{criterion_group, criterion_main, Criterion};
use devil::{testing::FakeEngine, DataFormat, DataType, ImageType, PixelRegion, Runtime, Variant};

pub fn benchmark_transfer(c: &mut Criterion) {
    let dims = [(320, 240), (640, 480), (1920, 1080)];
    let runtime = Runtime::with_engine(Variant::current(), FakeEngine::new());
    let session = runtime.acquire();
    let image = session.generate().unwrap();
    session.bind(image).unwrap();

    let mut group = c.benchmark_group("transfer");
    for dim in dims.iter() {
        let pixels = vec![0x80u8; dim.0 as usize * dim.1 as usize * 4];
        session
            .set_tex_image(dim.0, dim.1, 1, DataFormat::RGBA, DataType::UNSIGNED_BYTE, &pixels)
            .unwrap();
        let region = PixelRegion::new(dim.0, dim.1, DataFormat::RGBA, DataType::UNSIGNED_BYTE);

        group.bench_function(format!("copy_pixels/{}x{}", dim.0, dim.1), |b| {
            b.iter(|| session.copy_pixels(&region).unwrap())
        });
        group.bench_function(format!("image_data/{}x{}", dim.0, dim.1), |b| {
            b.iter(|| session.image_data().unwrap())
        });
        group.bench_function(format!("save_to_memory/{}x{}", dim.0, dim.1), |b| {
            b.iter(|| session.save_to_memory(ImageType::RAW).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_transfer);
criterion_main!(benches);
