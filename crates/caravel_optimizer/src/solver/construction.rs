use std::sync::atomic::{AtomicBool, Ordering};

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::{
    problem::{customer::CustomerIdx, vehicle_routing_problem::VehicleRoutingProblem},
    solver::{
        error::SolverError,
        solution::{
            route::{CustomerSequence, Route},
            solution::Solution,
        },
    },
};

/// Greedy earliest-due-date construction.
///
/// Runs passes until every customer is serviced. Each pass orders the
/// unserviced customers by ascending due date (ties by enumeration order)
/// and visits the vehicles in fixed order; each vehicle appends the first
/// candidate whose extended route stays feasible, at most one customer per
/// vehicle per pass. A pass that assigns nothing while customers remain
/// fails with `UnassignableCustomers` instead of retrying forever.
///
/// The serviced state is an explicit bitset local to this function; no
/// customer is ever marked twice, so each customer lands in exactly one
/// route. Returns exactly `vehicle_count` routes, some possibly empty.
pub fn construct_solution(
    problem: &VehicleRoutingProblem,
    is_stopped: &AtomicBool,
) -> Result<Solution, SolverError> {
    problem.validate()?;

    let customer_count = problem.customers().len();
    let mut routes: Vec<CustomerSequence> =
        vec![CustomerSequence::new(); problem.vehicle_count()];
    let mut serviced = FixedBitSet::with_capacity(customer_count);

    while serviced.count_ones(..) < customer_count {
        if is_stopped.load(Ordering::Relaxed) {
            return Err(SolverError::Cancelled);
        }

        let candidates = due_date_ordered(problem, &serviced);
        let mut assigned = 0usize;

        for route in routes.iter_mut() {
            for &candidate in &candidates {
                if serviced.contains(candidate.get()) {
                    continue;
                }

                let mut attempt = route.clone();
                attempt.push(candidate);
                if Route::new(problem, attempt).is_feasible() {
                    route.push(candidate);
                    serviced.insert(candidate.get());
                    assigned += 1;
                    break;
                }
            }
        }

        if assigned == 0 {
            return Err(SolverError::UnassignableCustomers(candidates));
        }

        debug!(
            assigned,
            remaining = customer_count - serviced.count_ones(..),
            "construction pass complete"
        );
    }

    Ok(Solution::new(
        routes
            .into_iter()
            .map(|customers| Route::new(problem, customers))
            .collect(),
    ))
}

fn due_date_ordered(problem: &VehicleRoutingProblem, serviced: &FixedBitSet) -> Vec<CustomerIdx> {
    let mut candidates: Vec<CustomerIdx> = (0..problem.customers().len())
        .map(CustomerIdx::new)
        .filter(|candidate| !serviced.contains(candidate.get()))
        .collect();

    candidates.sort_by(|&a, &b| {
        problem
            .customer(a)
            .due_date()
            .total_cmp(&problem.customer(b).due_date())
            .then(a.cmp(&b))
    });

    candidates
}
