use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use csisim::config::{Horizon, ProjectionInputs};
use csisim::projection::project;
use csisim::report::report_rows;
use csisim::tiers::resolve_tier;
use csisim::types::Year;

// ── Group 1: tier_resolution — table scan cost ───────────────────────────────

fn bench_tier_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("tier_resolution");
    group.throughput(Throughput::Elements(1001));
    group.bench_function("full_score_range", |b| {
        b.iter(|| {
            for score in 0..=1000 {
                std::hint::black_box(resolve_tier(score));
            }
        })
    });
    group.finish();
}

// ── Group 2: project — horizon scaling ───────────────────────────────────────

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    // ownership 3 keeps the wave set growing every third year, so longer
    // horizons exercise both the year loop and the wave scan.
    let inputs = ProjectionInputs {
        score: 950,
        sample_size: 100_000,
        ownership_years: 3,
        warranty_years: 5,
        vehicle_profit: 500,
        service_profit: 200,
    };
    for &years in &[15u32, 60, 150, 600] {
        group.throughput(Throughput::Elements(years as u64));
        group.bench_with_input(BenchmarkId::from_parameter(years), &years, |b, &y| {
            let horizon = Horizon::spanning(Year(2026), y);
            b.iter(|| project(&inputs, horizon))
        });
    }
    group.finish();
}

// ── Group 3: report — rounding + aggregation over a ledger ───────────────────

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    for &years in &[15u32, 150] {
        group.throughput(Throughput::Elements(years as u64));
        group.bench_with_input(BenchmarkId::from_parameter(years), &years, |b, &y| {
            let inputs = ProjectionInputs::canonical();
            b.iter_batched(
                || project(&inputs, Horizon::spanning(Year(2026), y)),
                |ledger| report_rows(&ledger, &inputs),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tier_resolution, bench_project, bench_report);
criterion_main!(benches);
