use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        best_solution::BestSolution,
        error::SolverError,
        ils::IteratedLocalSearch,
        local_search::LocalSearch,
        solver_params::SolverParams,
    },
};

#[derive(Copy, Clone, Debug, Serialize)]
pub enum SolverStatus {
    Pending,
    Running,
    Completed,
}

/// Facade over the iterated local search engine: owns the evaluation thread
/// pool, tracks status, and keeps the last accepted best solution available
/// while a search runs.
pub struct Solver {
    engine: IteratedLocalSearch<LocalSearch>,
    thread_pool: rayon::ThreadPool,
    status: RwLock<SolverStatus>,
    best: Arc<RwLock<Option<BestSolution>>>,
}

impl Solver {
    pub fn new(problem: VehicleRoutingProblem, params: SolverParams) -> Result<Self, SolverError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(params.evaluation_threads.number_of_threads())
            .build()?;

        let mut engine = IteratedLocalSearch::new(Arc::new(problem), params);

        let best = Arc::new(RwLock::new(None));
        let shared = Arc::clone(&best);
        engine.on_best_solution(move |incumbent| {
            *shared.write() = Some(incumbent.clone());
        });

        Ok(Solver {
            engine,
            thread_pool,
            status: RwLock::new(SolverStatus::Pending),
            best,
        })
    }

    pub fn problem(&self) -> &VehicleRoutingProblem {
        self.engine.problem()
    }

    pub fn on_best_solution<F>(&mut self, callback: F)
    where
        F: FnMut(&BestSolution) + Send + Sync + 'static,
    {
        self.engine.on_best_solution(callback);
    }

    pub fn solve(&self) -> Result<BestSolution, SolverError> {
        *self.status.write() = SolverStatus::Running;
        let result = self.thread_pool.install(|| self.engine.execute());
        *self.status.write() = SolverStatus::Completed;
        result
    }

    pub fn stop(&self) {
        self.engine.stop();
    }

    pub fn status(&self) -> SolverStatus {
        *self.status.read()
    }

    pub fn current_best_solution(&self) -> Option<BestSolution> {
        self.best.read().clone()
    }
}
