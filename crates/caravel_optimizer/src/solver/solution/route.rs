use serde::Serialize;
use smallvec::SmallVec;

use crate::problem::{customer::CustomerIdx, vehicle_routing_problem::VehicleRoutingProblem};

pub type CustomerSequence = SmallVec<[CustomerIdx; 16]>;

/// One vehicle's ordered visiting sequence, treated as an immutable value
/// object: feasibility and distance are computed from the sequence when the
/// route is built and the sequence never changes afterwards. Candidate
/// modifications always construct a new `Route`.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    customers: CustomerSequence,
    total_distance: f64,
    is_feasible: bool,
}

impl Route {
    pub fn new(problem: &VehicleRoutingProblem, customers: impl Into<CustomerSequence>) -> Self {
        let customers = customers.into();
        let (total_distance, is_feasible) = evaluate(problem, &customers);

        Route {
            customers,
            total_distance,
            is_feasible,
        }
    }

    pub fn empty() -> Self {
        Route {
            customers: CustomerSequence::new(),
            total_distance: 0.0,
            is_feasible: true,
        }
    }

    pub fn customers(&self) -> &[CustomerIdx] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn is_feasible(&self) -> bool {
        self.is_feasible
    }
}

/// Walks the schedule depot -> customers -> depot. A vehicle arriving before
/// a window opens waits; arriving after it closes, or exceeding capacity at
/// any point, makes the route infeasible. The empty route is trivially
/// feasible with zero distance.
fn evaluate(problem: &VehicleRoutingProblem, customers: &[CustomerIdx]) -> (f64, bool) {
    let mut distance = 0.0;
    let mut load = 0.0;
    let mut feasible = true;

    let depot = problem.depot_location_id();
    let mut time = problem.depot_time_window().start();
    let mut previous = depot;

    for &index in customers {
        let customer = problem.customer(index);
        let leg = problem.travel_cost(previous, customer.location_id());
        distance += leg;

        let arrival = time + leg;
        let window = customer.time_window();
        if !window.is_satisfied(arrival) {
            feasible = false;
        }
        time = window.service_start(arrival) + customer.service_duration();

        load += customer.demand();
        if load > problem.vehicle_capacity() {
            feasible = false;
        }

        previous = customer.location_id();
    }

    let leg = problem.travel_cost(previous, depot);
    distance += leg;
    if !problem.depot_time_window().is_satisfied(time + leg) {
        feasible = false;
    }

    (distance, feasible)
}
