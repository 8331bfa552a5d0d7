//! Benchmarks for the fare math and the aggregation path.
#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fairfare::application::services::FareAggregator;
use fairfare::domain::entities::NormalizedEstimate;
use fairfare::domain::services::eligibility::EligibilityPolicy;
use fairfare::domain::services::estimator::LocalFareEstimator;
use fairfare::domain::services::surge::FixedSurge;
use fairfare::domain::value_objects::{FareBreakdown, Location, Provider, Route};
use fairfare::infrastructure::providers::EstimateSource;
use std::sync::Arc;

/// In-memory source: no network, fixed payload.
#[derive(Debug)]
struct StaticSource {
    estimates: Vec<NormalizedEstimate>,
}

impl StaticSource {
    fn with_count(count: usize) -> Self {
        let estimates = (0..count)
            .map(|i| {
                NormalizedEstimate::builder(
                    Provider::NammaYatri,
                    "AUTO_RICKSHAW",
                    FareBreakdown::from_reported_total(80.0 + i as f64, 30.0, 10.0),
                    "12 min",
                )
                .build()
            })
            .collect();
        Self { estimates }
    }
}

#[async_trait]
impl EstimateSource for StaticSource {
    fn provider(&self) -> Provider {
        Provider::NammaYatri
    }

    async fn fetch_estimates(
        &self,
        _pickup: &Location,
        _destination: &Location,
    ) -> Vec<NormalizedEstimate> {
        self.estimates.clone()
    }
}

fn aggregator_with(count: usize) -> FareAggregator {
    FareAggregator::new(
        Arc::new(StaticSource::with_count(count)),
        Arc::new(FixedSurge::neutral()),
        EligibilityPolicy::new(),
    )
}

fn bench_local_estimate(c: &mut Criterion) {
    let estimator = LocalFareEstimator::ola();
    let route = Route::new(12_500.0, 1_500.0, "25 mins");

    c.bench_function("local_estimate", |b| {
        b.iter(|| estimator.estimate(black_box(&route), black_box(1.2)));
    });
}

fn bench_compare_fares(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let route = Route::new(12_500.0, 1_500.0, "25 mins");
    let pickup = Location::new("MG Road, Bengaluru", 12.9757, 77.6050, "a");
    let destination = Location::new("HSR Layout, Bengaluru", 12.9121, 77.6446, "b");

    let mut group = c.benchmark_group("compare_fares");
    for live_count in [0_usize, 3, 10] {
        let aggregator = aggregator_with(live_count);
        group.bench_function(format!("live_{live_count}"), |b| {
            b.to_async(&rt)
                .iter(|| aggregator.compare_fares(&route, &pickup, &destination));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_local_estimate, bench_compare_fares);
criterion_main!(benches);
