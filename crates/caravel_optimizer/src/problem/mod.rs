pub mod customer;
pub mod location;
pub mod time_window;
pub mod travel_cost_matrix;
pub mod vehicle_routing_problem;
