use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use senml_resolve::query::by_name;
use senml_resolve::{SenMLBuilder, SenMLPack, SenMLRecord, units};

fn sensor_pack(readings: usize) -> SenMLPack {
    let mut builder = SenMLBuilder::new()
        .base_name("urn:dev:ow:10e2073a01080063:")
        .base_time(1_320_067_464.0)
        .base_unit(units::CELSIUS);

    for i in 0..readings {
        builder = builder.add_measurement(format!("temp{}", i), 20.0 + i as f64 * 0.1, i as f64);
    }

    builder
        .add_record(SenMLRecord::with_value("latitude", 60.07965).with_unit(units::LAT))
        .add_record(SenMLRecord::with_value("longitude", 24.30621).with_unit(units::LON))
        .build()
}

fn lookup_benchmark(c: &mut Criterion) {
    let pack = sensor_pack(64);

    c.bench_function("normalize_64", |b| b.iter(|| black_box(&pack).normalize()));

    c.bench_function("find_value_64", |b| {
        b.iter(|| black_box(&pack).find_value(by_name("temp32")))
    });

    c.bench_function("lat_lon_64", |b| b.iter(|| black_box(&pack).lat_lon()));
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
