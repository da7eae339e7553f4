use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, instrument};

use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        moves::reverse_segment,
        solution::{route::Route, solution::Solution},
    },
};

/// Capability to drive a solution to a local optimum. The iterated local
/// search orchestrator holds its re-optimization strategy behind this trait
/// so alternatives can be substituted.
pub trait Optimizer {
    fn optimize(&self, solution: &Solution) -> Solution;
}

/// Intra-route 2-opt local search with a first-improvement-with-restart
/// policy: candidates are scanned in canonical `(k, j)` order, the first
/// feasible strictly-shorter reversal is applied, and the scan restarts. A
/// route has converged once a full scan accepts nothing.
pub struct LocalSearch {
    problem: Arc<VehicleRoutingProblem>,
    is_stopped: Arc<AtomicBool>,
}

impl LocalSearch {
    pub fn new(problem: Arc<VehicleRoutingProblem>, is_stopped: Arc<AtomicBool>) -> Self {
        LocalSearch {
            problem,
            is_stopped,
        }
    }

    #[instrument(skip_all, level = "debug")]
    fn optimize_route(&self, route: &Route) -> Route {
        let mut current = route.clone();

        loop {
            // Cancellation leaves the route at its best state so far.
            if self.is_stopped.load(Ordering::Relaxed) {
                return current;
            }

            let len = current.len();
            let pairs: Vec<(usize, usize)> = (0..len)
                .flat_map(|k| ((k + 1)..len).map(move |j| (k, j)))
                .collect();

            // Candidates are evaluated on worker threads, but `find_map_first`
            // commits the canonically-first improvement, so the outcome is
            // identical to a serial scan. Acceptance is strict improvement
            // only; ties are rejected so the distance sequence is strictly
            // decreasing and the loop terminates.
            let improvement = pairs.into_par_iter().find_map_first(|(k, j)| {
                let candidate = Route::new(
                    &self.problem,
                    reverse_segment(current.customers(), k, j),
                );

                (candidate.is_feasible()
                    && candidate.total_distance() < current.total_distance())
                .then_some(candidate)
            });

            match improvement {
                Some(candidate) => {
                    debug!(
                        from = current.total_distance(),
                        to = candidate.total_distance(),
                        "2-opt improvement applied"
                    );
                    current = candidate;
                }
                None => return current,
            }
        }
    }
}

impl Optimizer for LocalSearch {
    fn optimize(&self, solution: &Solution) -> Solution {
        // Each route converges independently.
        Solution::new(
            solution
                .routes()
                .iter()
                .map(|route| self.optimize_route(route))
                .collect(),
        )
    }
}
