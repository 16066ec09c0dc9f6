// ABOUTME: Criterion benchmarks for schedule projection, skip shifting and persistence encoding
// ABOUTME: Measures year-long schedules as produced by applying a template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the schedule algorithms.
//!
//! Uses year-long projections since that is what applying a template
//! produces and what every skip has to shift.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use workout_calendar::models::{Schedule, Template, TemplateEntry, WorkoutStatusState};
use workout_calendar::schedule::{month_markings, project, shift};

fn split_template() -> Template {
    Template {
        id: 1,
        name: "Push Pull Legs".to_owned(),
        description: String::new(),
        tasks: ["Push", "Pull", "Legs", "Run", "Rest"]
            .iter()
            .enumerate()
            .map(|(i, exercise)| TemplateEntry {
                day: u32::try_from(i + 1).unwrap(),
                exercise: (*exercise).to_owned(),
            })
            .collect(),
    }
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn bench_projection(c: &mut Criterion) {
    let template = split_template();
    let mut group = c.benchmark_group("project_template");

    for horizon in [30_u32, 365, 3660] {
        group.throughput(Throughput::Elements(u64::from(horizon)));
        group.bench_with_input(BenchmarkId::from_parameter(horizon), &horizon, |b, &days| {
            b.iter(|| project(black_box(&template), black_box(start()), days).unwrap());
        });
    }
    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let schedule = project(&split_template(), start(), 365).unwrap();
    let mut group = c.benchmark_group("shift_schedule");
    group.throughput(Throughput::Elements(schedule.len() as u64));

    group.bench_function("skip_first_day", |b| {
        b.iter(|| shift(black_box(&schedule), black_box(start())));
    });
    group.bench_function("skip_mid_year", |b| {
        let mid = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        b.iter(|| shift(black_box(&schedule), black_box(mid)));
    });
    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let schedule = project(&split_template(), start(), 365).unwrap();
    let encoded = serde_json::to_string(&schedule).unwrap();
    let mut group = c.benchmark_group("schedule_json");
    group.throughput(Throughput::Bytes(encoded.len() as u64));

    group.bench_function("serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&schedule)).unwrap());
    });
    group.bench_function("deserialize", |b| {
        b.iter(|| serde_json::from_str::<Schedule>(black_box(&encoded)).unwrap());
    });
    group.finish();
}

fn bench_month_view(c: &mut Criterion) {
    let schedule = project(&split_template(), start(), 365).unwrap();
    let statuses = WorkoutStatusState::new();

    c.bench_function("month_markings", |b| {
        b.iter(|| month_markings(black_box(&schedule), &statuses, 2024, 6, None).unwrap());
    });
}

criterion_group!(
    benches,
    bench_projection,
    bench_shift,
    bench_encoding,
    bench_month_view
);
criterion_main!(benches);
