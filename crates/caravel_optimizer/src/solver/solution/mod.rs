pub mod route;
pub mod solution;
