use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::{TimeZone, Utc};
use ctxlog::{Formatter, Level, LoggerName, Record, json};
use serde_json::json;

fn bench_render(c: &mut Criterion) {
    let small = json!({"test": "test"});
    let nested = json!({
        "order": 1042,
        "customer": {"name": "山田太郎", "tier": "gold"},
        "lines": (0..32).map(|i| json!({"sku": format!("SKU-{i:04}"), "qty": i})).collect::<Vec<_>>(),
        "placed_at": Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
    });

    let mut group = c.benchmark_group("json_render");
    group.bench_function("small", |b| b.iter(|| json::render(black_box(&small)).unwrap()));
    group.bench_function("nested", |b| b.iter(|| json::render(black_box(&nested)).unwrap()));
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let formatter = Formatter::default();
    let record = Record::new(Level::Info, LoggerName::new("bench.TestClass.run"), "INFO TEST");

    c.bench_function("format_default_line", |b| {
        b.iter(|| formatter.format(black_box(&record)))
    });
}

criterion_group!(benches, bench_render, bench_format);
criterion_main!(benches);
