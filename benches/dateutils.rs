//! Benchmarks for the calendar computations, in a fixed offset and in a zone with DST

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::{FixedOffset, TimeZone};
use chrono_tz::America::New_York;

use chrono_dateutils::{is_leap_year, Calendar, Canonical, DateRange, DayShift, Month};

fn bench_offset_days_fixed(c: &mut Criterion) {
    let zone = FixedOffset::east_opt(8 * 60 * 60).unwrap();
    let dt = zone.with_ymd_and_hms(2018, 1, 11, 10, 5, 13).unwrap();
    c.bench_function("bench_offset_days_fixed", |b| {
        b.iter(|| black_box(dt).offset_days(black_box(45)))
    });
}

fn bench_offset_days_dst(c: &mut Criterion) {
    let dt = New_York.with_ymd_and_hms(2024, 3, 9, 2, 30, 0).unwrap();
    c.bench_function("bench_offset_days_dst", |b| {
        b.iter(|| black_box(dt).offset_days(black_box(1)))
    });
}

fn bench_to_canonical(c: &mut Criterion) {
    let dt = New_York.with_ymd_and_hms(2024, 11, 3, 1, 30, 0).unwrap();
    c.bench_function("bench_to_canonical", |b| b.iter(|| black_box(dt).to_canonical()));
}

fn bench_is_same_day(c: &mut Criterion) {
    let first = New_York.with_ymd_and_hms(2024, 11, 3, 0, 15, 0).unwrap();
    let second = New_York.with_ymd_and_hms(2024, 11, 3, 23, 45, 0).unwrap();
    c.bench_function("bench_is_same_day", |b| {
        b.iter(|| black_box(first).is_same_day(&black_box(second)))
    });
}

fn bench_number_of_weeks(c: &mut Criterion) {
    let calendar = Calendar::new(New_York);
    c.bench_function("bench_number_of_weeks", |b| {
        b.iter(|| {
            for month in Month::ALL {
                black_box(calendar.number_of_weeks_in_month(month, 2024, 1));
            }
        })
    });
}

fn bench_days_inclusive(c: &mut Criterion) {
    let end = New_York.with_ymd_and_hms(2024, 12, 31, 18, 0, 0).unwrap();
    let range = DateRange::days_of_history(366, end).unwrap();
    c.bench_function("bench_days_inclusive", |b| {
        b.iter(|| black_box(&range).number_of_days_between_inclusive())
    });
}

fn bench_is_leap_year(c: &mut Criterion) {
    c.bench_function("bench_is_leap_year", |b| {
        b.iter(|| {
            for year in 0i32..2000 {
                black_box(is_leap_year(black_box(year)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_offset_days_fixed,
    bench_offset_days_dst,
    bench_to_canonical,
    bench_is_same_day,
    bench_number_of_weeks,
    bench_days_inclusive,
    bench_is_leap_year,
);

criterion_main!(benches);
