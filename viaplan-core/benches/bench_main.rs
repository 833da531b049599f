use criterion::{Criterion, black_box, criterion_group, criterion_main};

use viaplan_core::Error;
use viaplan_core::prelude::*;

/// Deterministic in-memory oracle; weight derived from the pair's bytes
struct SyntheticOracle;

impl DistanceOracle for SyntheticOracle {
    fn fetch(&self, origin: &str, destination: &str) -> Result<RouteLeg, Error> {
        let seed = origin
            .bytes()
            .chain(destination.bytes())
            .fold(7u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)));
        let distance = 1.0 + (seed % 50) as f64;
        Ok(RouteLeg {
            distance,
            duration: distance / 40.0,
        })
    }
}

fn synthetic_places(n: usize) -> Vec<Place> {
    (0..n)
        .map(|i| Place::new(format!("Place {i}"), "bench"))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let places = synthetic_places(30);

    c.bench_function("build_route_graph_30_places", |b| {
        b.iter(|| {
            let oracle = CachedOracle::new(SyntheticOracle);
            black_box(build_route_graph(&oracle, &places).unwrap())
        });
    });
}

fn bench_query(c: &mut Criterion) {
    let places = synthetic_places(30);
    let oracle = CachedOracle::new(SyntheticOracle);
    let graph = build_route_graph(&oracle, &places).unwrap();

    c.bench_function("shortest_path_30_places", |b| {
        b.iter(|| black_box(shortest_path(&graph, "Place 0", "Place 29", Metric::Distance).unwrap()));
    });
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
