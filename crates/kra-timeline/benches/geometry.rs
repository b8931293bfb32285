use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kra_timeline::{TimeSpan, ViewGranularity};

fn bench_geometry(c: &mut Criterion) {
    let spans: Vec<TimeSpan> = (1..=365)
        .filter_map(|ordinal| {
            let start = NaiveDate::from_yo_opt(2024, ordinal)?;
            let end = NaiveDate::from_yo_opt(2024, (ordinal + 45).min(366));
            Some(TimeSpan::new(start, end))
        })
        .collect();

    let mut group = c.benchmark_group("geometry");
    for g in ViewGranularity::ALL {
        group.bench_function(g.as_str(), |b| {
            b.iter(|| {
                spans
                    .iter()
                    .map(|span| span.geometry(black_box(g)).width)
                    .sum::<f64>()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geometry);
criterion_main!(benches);
