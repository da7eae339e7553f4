use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use jiff::Timestamp;
use parking_lot::Mutex;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, info, instrument};

use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        best_solution::BestSolution,
        construction::construct_solution,
        error::SolverError,
        local_search::{LocalSearch, Optimizer},
        moves::{exchange_tails, relocate_one, swap_one},
        solution::{route::Route, solution::Solution},
        solver_params::{SolverParams, Termination},
    },
    timed_phase,
};

type Objective = Box<dyn Fn(&Solution) -> f64 + Send + Sync>;
type BestSolutionHandler = Arc<Mutex<dyn FnMut(&BestSolution) + Send + Sync + 'static>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PairOperator {
    ExchangeTails,
    RelocateOne,
    SwapOne,
}

const PAIR_OPERATORS: [PairOperator; 3] = [
    PairOperator::ExchangeTails,
    PairOperator::RelocateOne,
    PairOperator::SwapOne,
];

#[derive(Clone, Copy, Debug)]
struct PairMove {
    first: usize,
    second: usize,
    split_first: usize,
    split_second: usize,
    operator: PairOperator,
}

/// Iterated local search: construct, optimize, then alternate inter-route
/// perturbation with re-optimization while the objective strictly improves.
///
/// The re-optimization strategy is held behind the [`Optimizer`] capability
/// so it can be substituted. Every accepted improvement is pushed to the
/// registered observers; the engine itself performs no output.
pub struct IteratedLocalSearch<O> {
    problem: Arc<VehicleRoutingProblem>,
    optimizer: O,
    objective: Objective,
    params: SolverParams,
    is_stopped: Arc<AtomicBool>,
    handlers: Vec<BestSolutionHandler>,
}

impl IteratedLocalSearch<LocalSearch> {
    pub fn new(problem: Arc<VehicleRoutingProblem>, params: SolverParams) -> Self {
        let is_stopped = Arc::new(AtomicBool::new(false));
        let optimizer = LocalSearch::new(Arc::clone(&problem), Arc::clone(&is_stopped));
        let objective = default_objective(&problem);

        IteratedLocalSearch {
            problem,
            optimizer,
            objective,
            params,
            is_stopped,
            handlers: Vec::new(),
        }
    }
}

/// The problem's own objective, unless overridden via [`with_objective`].
///
/// [`with_objective`]: IteratedLocalSearch::with_objective
fn default_objective(problem: &Arc<VehicleRoutingProblem>) -> Objective {
    let problem = Arc::clone(problem);
    Box::new(move |solution| problem.objective(solution))
}

// `Sync` because perturbation shares `&self` across rayon workers.
impl<O: Optimizer + Sync> IteratedLocalSearch<O> {
    pub fn with_optimizer(
        problem: Arc<VehicleRoutingProblem>,
        optimizer: O,
        params: SolverParams,
    ) -> Self {
        let objective = default_objective(&problem);

        IteratedLocalSearch {
            problem,
            optimizer,
            objective,
            params,
            is_stopped: Arc::new(AtomicBool::new(false)),
            handlers: Vec::new(),
        }
    }

    pub fn with_objective<F>(mut self, objective: F) -> Self
    where
        F: Fn(&Solution) -> f64 + Send + Sync + 'static,
    {
        self.objective = Box::new(objective);
        self
    }

    pub fn problem(&self) -> &VehicleRoutingProblem {
        &self.problem
    }

    pub fn on_best_solution<F>(&mut self, callback: F)
    where
        F: FnMut(&BestSolution) + Send + Sync + 'static,
    {
        self.handlers.push(Arc::new(Mutex::new(callback)));
    }

    pub fn stop(&self) {
        self.is_stopped.store(true, Ordering::Relaxed);
    }

    /// Runs the full search: construction, initial local search, then the
    /// perturb/re-optimize loop. Returns the best solution found; the
    /// accepted objective values form a strictly decreasing sequence.
    pub fn execute(&self) -> Result<BestSolution, SolverError> {
        self.is_stopped.store(false, Ordering::Relaxed);
        let start = Timestamp::now();

        let initial = timed_phase!(
            "construction",
            construct_solution(&self.problem, &self.is_stopped)
        )?;

        let mut best = timed_phase!("initial local search", self.optimizer.optimize(&initial));
        let mut best_value = (self.objective)(&best);
        let mut iteration = 0usize;
        self.notify(&best, best_value, iteration);

        loop {
            if self.should_terminate(start, iteration) {
                break;
            }

            iteration += 1;
            let perturbed = self.perturbation(&best);
            let candidate = self.optimizer.optimize(&perturbed);
            let candidate_value = (self.objective)(&candidate);

            if candidate_value < best_value {
                debug!(iteration, candidate_value, best_value, "improvement accepted");
                best = candidate;
                best.retain_non_empty();
                best_value = candidate_value;
                self.notify(&best, best_value, iteration);
            } else {
                debug!(iteration, candidate_value, best_value, "search converged");
                break;
            }
        }

        info!(
            iterations = iteration,
            objective = best_value,
            routes = best.routes().len(),
            "iterated local search finished"
        );

        Ok(BestSolution {
            solution: best,
            objective_value: best_value,
            iteration,
        })
    }

    /// Structural perturbation across route pairs. Scans every unordered
    /// route pair, every split point pair, and every pair operator in
    /// canonical order; a candidate is accepted when both resulting routes
    /// are feasible and their combined distance strictly improves the
    /// pair's. After any acceptance the full scan restarts; convergence is a
    /// full pass without acceptance. Empty routes are legal intermediate
    /// states and are only dropped after convergence.
    #[instrument(skip_all, level = "debug")]
    pub fn perturbation(&self, solution: &Solution) -> Solution {
        let mut routes: Vec<Route> = solution.routes().to_vec();

        loop {
            if self.is_stopped.load(Ordering::Relaxed) {
                break;
            }

            let candidates = enumerate_pair_moves(&routes);
            let improvement = candidates
                .into_par_iter()
                .find_map_first(|pair_move| self.evaluate_pair_move(&routes, pair_move));

            match improvement {
                Some((first, second, route_a, route_b)) => {
                    routes[first] = route_a;
                    routes[second] = route_b;
                }
                None => break,
            }
        }

        routes.retain(|route| !route.is_empty());
        Solution::new(routes)
    }

    fn evaluate_pair_move(
        &self,
        routes: &[Route],
        pair_move: PairMove,
    ) -> Option<(usize, usize, Route, Route)> {
        let a = routes[pair_move.first].customers();
        let b = routes[pair_move.second].customers();

        let (first, second) = match pair_move.operator {
            PairOperator::ExchangeTails => {
                exchange_tails(a, b, pair_move.split_first, pair_move.split_second)
            }
            PairOperator::RelocateOne => {
                relocate_one(a, b, pair_move.split_first, pair_move.split_second)
            }
            PairOperator::SwapOne => {
                swap_one(a, b, pair_move.split_first, pair_move.split_second)
            }
        };

        let first = Route::new(&self.problem, first);
        let second = Route::new(&self.problem, second);

        let current = routes[pair_move.first].total_distance()
            + routes[pair_move.second].total_distance();

        (first.is_feasible()
            && second.is_feasible()
            && first.total_distance() + second.total_distance() < current)
            .then_some((pair_move.first, pair_move.second, first, second))
    }

    fn notify(&self, solution: &Solution, objective_value: f64, iteration: usize) {
        if self.handlers.is_empty() {
            return;
        }

        let best = BestSolution {
            solution: solution.clone(),
            objective_value,
            iteration,
        };

        for handler in &self.handlers {
            handler.lock()(&best);
        }
    }

    fn should_terminate(&self, start: Timestamp, iteration: usize) -> bool {
        if self.is_stopped.load(Ordering::Relaxed) {
            return true;
        }

        self.params
            .terminations
            .iter()
            .any(|termination| match *termination {
                Termination::Iterations(max_iterations) => iteration >= max_iterations,
                Termination::Duration(max_duration) => {
                    Timestamp::now().duration_since(start) > max_duration
                }
            })
    }
}

fn enumerate_pair_moves(routes: &[Route]) -> Vec<PairMove> {
    let mut moves = Vec::new();

    for first in 0..routes.len() {
        for second in (first + 1)..routes.len() {
            for split_first in 0..routes[first].len() + 2 {
                for split_second in 0..routes[second].len() + 2 {
                    for operator in PAIR_OPERATORS {
                        moves.push(PairMove {
                            first,
                            second,
                            split_first,
                            split_second,
                            operator,
                        });
                    }
                }
            }
        }
    }

    moves
}
