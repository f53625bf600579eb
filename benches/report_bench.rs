// ABOUTME: Criterion benchmarks for nutrition report assembly
// ABOUTME: Measures single reports per pipeline and parallel batch assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for report assembly.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriplan::intelligence::config::NutritionConfig;
use nutriplan::intelligence::macro_allocator::allocate_macros;
use nutriplan::intelligence::report::{PlanMode, ReportAssembler};
use nutriplan::intelligence::resolver::DietCategoryResolver;
use nutriplan::models::{
    ActivityLevel, Goal, MedicalCondition, PersonProfile, PersonProfileParams, Sex,
};

/// Deterministic spread of profiles across every enum value
fn generate_profiles(count: usize) -> Vec<PersonProfile> {
    let conditions = [
        MedicalCondition::None,
        MedicalCondition::Diabetes,
        MedicalCondition::Hypertension,
        MedicalCondition::Obesity,
    ];
    (0..count)
        .map(|index| {
            PersonProfile::new(PersonProfileParams {
                age: 18 + (index % 60) as u32,
                sex: if index % 2 == 0 { Sex::Male } else { Sex::Female },
                weight_kg: 45.0 + ((index * 37) % 80) as f64,
                height_cm: 150.0 + ((index * 13) % 50) as f64,
                activity_level: ActivityLevel::ALL[index % ActivityLevel::ALL.len()],
                goal: Goal::ALL[index % Goal::ALL.len()],
                condition: conditions[index % conditions.len()],
            })
            .unwrap()
        })
        .collect()
}

fn assembler() -> ReportAssembler {
    ReportAssembler::new(NutritionConfig::default(), DietCategoryResolver::rule_based()).unwrap()
}

/// Benchmark one report per pipeline
fn bench_single_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_report");
    let assembler = assembler();
    let profile = generate_profiles(1).remove(0);

    group.bench_function("direct", |b| {
        b.iter(|| assembler.assemble(black_box(&profile), PlanMode::Direct));
    });
    group.bench_function("recommend", |b| {
        b.iter(|| assembler.assemble(black_box(&profile), PlanMode::Recommend));
    });

    group.finish();
}

/// Benchmark macro allocation alone
fn bench_macro_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("macro_allocation");
    let ratio = NutritionConfig::default()
        .diet_ratios
        .for_goal(Goal::Lose);

    group.bench_function("allocate_macros", |b| {
        b.iter(|| allocate_macros(black_box(2259), black_box(&ratio)));
    });

    group.finish();
}

/// Benchmark parallel batch assembly with varying sizes
fn bench_batch_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let assembler = assembler();

    for count in [10_usize, 100, 1000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("assemble_batch", count),
            &profiles,
            |b, profiles| {
                b.iter(|| assembler.assemble_batch(black_box(profiles), PlanMode::Recommend));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_report,
    bench_macro_allocation,
    bench_batch_assembly,
);
criterion_main!(benches);
