use thiserror::Error;

use crate::problem::customer::CustomerIdx;

/// Fatal search errors. Infeasible or non-improving candidate moves are
/// expected outcomes of speculative generation and are silently rejected,
/// never surfaced here.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("invalid problem: {0}")]
    InvalidProblem(String),
    #[error("construction pass assigned no customer; unassignable customers: {0:?}")]
    UnassignableCustomers(Vec<CustomerIdx>),
    #[error("search cancelled before a feasible solution was found")]
    Cancelled,
    #[error("failed to build the evaluation thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
