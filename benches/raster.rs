use binraster::extract::{extract, ExtractionStrategy, ListingPolicy};
use binraster::{convert_bytes, to_grid, ConversionConfig, ImageGeometry, Reconciliation};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn synthetic_listing(lines: usize) -> String {
    let mut out = String::with_capacity(lines * 57);
    for line in 0..lines {
        out.push_str(&format!("{:08X}", 0x0040_1000 + line * 16));
        for i in 0..16 {
            if (line + i) % 13 == 0 {
                out.push_str(" ??");
            } else {
                out.push_str(&format!(" {:02X}", (line * 31 + i * 7) % 256));
            }
        }
        out.push('\n');
    }
    out
}

fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing");
    let text = synthetic_listing(8192);
    group.throughput(Throughput::Bytes(text.len() as u64));
    for policy in [ListingPolicy::StrictWidth, ListingPolicy::PrefixPattern] {
        let strategy = ExtractionStrategy::AddressColumnStrip(policy);
        group.bench_function(format!("{policy:?}"), |b| {
            b.iter(|| extract(text.as_bytes(), strategy))
        });
    }
    group.finish();
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");
    let payload: Vec<u8> = (0..20_000u32).map(|i| (i * 17 % 256) as u8).collect();
    let geometry = ImageGeometry::default();
    for policy in [
        Reconciliation::PadTruncate,
        Reconciliation::TileRepeat,
        Reconciliation::SquareAutoSize,
    ] {
        group.bench_function(format!("{policy:?}"), |b| {
            b.iter(|| to_grid(&payload, geometry, policy))
        });
    }
    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let data: Vec<u8> = (0..1_000_000u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8)
        .collect();
    group.throughput(Throughput::Bytes(data.len() as u64));
    let configs = [
        ("pad_truncate", ConversionConfig::default()),
        ("document_fingerprint", ConversionConfig::document_fingerprint()),
    ];
    for (name, config) in configs {
        group.bench_function(name, |b| b.iter(|| convert_bytes(&data, &config)));
    }
    group.finish();
}

criterion_group!(benches, bench_listing, bench_reconcile, bench_convert);
criterion_main!(benches);
