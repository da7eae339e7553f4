use std::{hint::black_box, sync::Arc, sync::atomic::AtomicBool};

use caravel_optimizer::{
    problem::{
        customer::CustomerBuilder,
        location::Location,
        vehicle_routing_problem::{VehicleRoutingProblem, VehicleRoutingProblemBuilder},
    },
    solver::{
        construction::construct_solution,
        ils::IteratedLocalSearch,
        solver_params::{SolverParams, Termination},
    },
};
use criterion::{Criterion, criterion_group, criterion_main};

/// Deterministic ring instance: `count` customers spread on a circle around
/// the depot, visited by `vehicles` vehicles.
fn ring_problem(count: usize, vehicles: usize) -> VehicleRoutingProblem {
    let mut locations = vec![Location::from_cartesian(0.0, 0.0)];
    let mut customers = Vec::new();

    for index in 0..count {
        let angle = index as f64 * std::f64::consts::TAU / count as f64;
        locations.push(Location::from_cartesian(
            50.0 + 30.0 * angle.cos(),
            50.0 + 30.0 * angle.sin(),
        ));

        let mut builder = CustomerBuilder::default();
        builder.set_external_id(format!("{index}"));
        builder.set_location_id(index + 1);
        builder.set_demand(1.0);
        customers.push(builder.build());
    }

    let mut builder = VehicleRoutingProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_customers(customers);
    builder.set_vehicle_count(vehicles);
    builder.set_vehicle_capacity(count as f64);

    builder.build()
}

fn construction_benchmark(c: &mut Criterion) {
    let problem = ring_problem(100, 5);
    let cancelled = AtomicBool::new(false);

    c.bench_function("construct 100 customers / 5 vehicles", |b| {
        b.iter(|| construct_solution(black_box(&problem), &cancelled).unwrap())
    });
}

fn search_benchmark(c: &mut Criterion) {
    c.bench_function("iterated local search, 5 iterations", |b| {
        b.iter(|| {
            let ils = IteratedLocalSearch::new(
                Arc::new(ring_problem(40, 3)),
                SolverParams {
                    terminations: vec![Termination::Iterations(5)],
                    ..SolverParams::default()
                },
            );

            ils.execute().unwrap()
        })
    });
}

criterion_group!(benches, construction_benchmark, search_benchmark);
criterion_main!(benches);
