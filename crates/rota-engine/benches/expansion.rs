//! Benchmarks for pattern expansion and conflict scanning.

use std::hint::black_box;

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rota_engine::{expand, find_conflicts, Day, MonthlyPattern, PatternKind, RelativeWeek};

fn relative_pattern(id: &str, duration_months: u32) -> MonthlyPattern {
    MonthlyPattern {
        id: id.to_string(),
        name: String::new(),
        kind: PatternKind::Relative,
        day_of_month: None,
        relative_week: Some(RelativeWeek::Last),
        relative_day: Some(Day::Friday),
        start_date: Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
        duration_months,
        time_slots: Vec::new(),
        active: true,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    for months in [12u32, 60, 120] {
        group.bench_with_input(BenchmarkId::from_parameter(months), &months, |b, &months| {
            let pattern = relative_pattern("bench", months);
            b.iter(|| expand(black_box(&pattern)));
        });
    }

    group.finish();
}

fn bench_find_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_conflicts");

    for count in [5usize, 25, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let candidate = relative_pattern("candidate", 12);
            let existing: Vec<MonthlyPattern> = (0..count)
                .map(|i| relative_pattern(&format!("existing-{}", i), 12))
                .collect();
            b.iter(|| find_conflicts(black_box(&candidate), black_box(&existing)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_expand, bench_find_conflicts);
criterion_main!(benches);
