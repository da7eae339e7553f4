pub mod best_solution;
pub mod construction;
pub mod error;
pub mod ils;
pub mod local_search;
pub mod moves;
pub mod solution;
pub mod solver;
pub mod solver_params;
