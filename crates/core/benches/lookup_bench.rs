mod common;

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use aozoraconv_core::{
    Coordinate, decode_document, encode_document, kuten_to_sjis, to_coordinate, to_unicode,
};

use common::{
    XorShift64, bench_config, bench_criterion, bytes_throughput, configure_group,
    elements_throughput,
};

const SAMPLES: usize = 4096;

fn random_assigned(seed: u64) -> Vec<Coordinate> {
    let mut rng = XorShift64::new(seed);
    let mut coords = Vec::with_capacity(SAMPLES);
    while coords.len() < SAMPLES {
        let plane = rng.gen_range(1, 2);
        let row = rng.gen_range(1, 94);
        let cell = rng.gen_range(1, 94);
        if let Ok(coord) = Coordinate::new(plane, row, cell)
            && coord.to_unicode().is_some()
        {
            coords.push(coord);
        }
    }
    coords
}

fn bench_lookups(c: &mut Criterion) {
    let cfg = bench_config();
    let coords = random_assigned(cfg.seed);
    let texts: Vec<&str> = coords.iter().filter_map(|c| c.to_unicode()).collect();

    let mut group = c.benchmark_group("lookup");
    configure_group(&mut group, &cfg);
    group.throughput(elements_throughput(coords.len()));

    group.bench_function("to_unicode", |b| {
        b.iter(|| {
            for coord in &coords {
                black_box(to_unicode(coord.plane(), coord.row(), coord.cell()).ok());
            }
        })
    });
    group.bench_function("to_coordinate", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(to_coordinate(text).ok());
            }
        })
    });
    group.bench_function("kuten_to_sjis", |b| {
        b.iter(|| {
            for coord in &coords {
                black_box(kuten_to_sjis(coord.row(), coord.cell()));
            }
        })
    });
    group.finish();
}

fn bench_documents(c: &mut Criterion) {
    let cfg = bench_config();
    let text = "吾輩は猫である。名前はまだ無い。〜どこで生れたかとんと見当がつかぬ。\n".repeat(256);
    let bytes = encode_document(&text).expect("encodable sample");

    let mut group = c.benchmark_group("document");
    configure_group(&mut group, &cfg);

    group.throughput(bytes_throughput(text.len()));
    group.bench_function("encode_document", |b| {
        b.iter(|| black_box(encode_document(black_box(&text)).ok()))
    });
    group.throughput(bytes_throughput(bytes.len()));
    group.bench_function("decode_document", |b| {
        b.iter(|| black_box(decode_document(black_box(&bytes)).ok()))
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = bench_criterion();
    targets = bench_lookups, bench_documents
}
criterion_main!(benches);
