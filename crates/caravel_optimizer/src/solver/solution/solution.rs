use fxhash::FxHashSet;
use serde::Serialize;

use crate::{problem::customer::CustomerIdx, solver::solution::route::Route};

/// An ordered collection of routes, at most one per vehicle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    pub fn new(routes: Vec<Route>) -> Self {
        Solution { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(Route::total_distance).sum()
    }

    pub fn is_feasible(&self) -> bool {
        self.routes.iter().all(Route::is_feasible)
    }

    pub fn customer_count(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// The set of customers visited by any route. The set's size equals
    /// `customer_count` exactly when no customer appears twice.
    pub fn customer_set(&self) -> FxHashSet<CustomerIdx> {
        self.routes
            .iter()
            .flat_map(|route| route.customers().iter().copied())
            .collect()
    }

    pub fn retain_non_empty(&mut self) {
        self.routes.retain(|route| !route.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_total_distance_sums_routes() {
        let problem = test_utils::create_line_problem(3, 2);
        let solution = Solution::new(vec![
            test_utils::create_route(&problem, &[0]),
            test_utils::create_route(&problem, &[1, 2]),
        ]);

        assert_eq!(solution.total_distance(), 2.0 + 6.0);
    }

    #[test]
    fn test_retain_non_empty_drops_empty_routes() {
        let problem = test_utils::create_line_problem(2, 3);
        let mut solution = Solution::new(vec![
            test_utils::create_route(&problem, &[0]),
            Route::empty(),
            test_utils::create_route(&problem, &[1]),
        ]);

        solution.retain_non_empty();

        assert_eq!(solution.routes().len(), 2);
        assert_eq!(solution.customer_count(), 2);
    }

    #[test]
    fn test_customer_set_detects_all_customers() {
        let problem = test_utils::create_line_problem(3, 2);
        let solution = Solution::new(vec![
            test_utils::create_route(&problem, &[0, 2]),
            test_utils::create_route(&problem, &[1]),
        ]);

        assert_eq!(solution.customer_set().len(), 3);
        assert_eq!(solution.customer_count(), 3);
    }
}
