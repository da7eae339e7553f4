use serde::Serialize;

use crate::solver::solution::solution::Solution;

/// Snapshot published to observers every time the search accepts a strictly
/// better solution.
#[derive(Debug, Clone, Serialize)]
pub struct BestSolution {
    pub solution: Solution,
    pub objective_value: f64,
    pub iteration: usize,
}
