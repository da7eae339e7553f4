use crate::{
    problem::{
        customer::{Customer, CustomerBuilder, CustomerIdx},
        location::Location,
        time_window::TimeWindow,
        vehicle_routing_problem::{VehicleRoutingProblem, VehicleRoutingProblemBuilder},
    },
    solver::solution::route::{CustomerSequence, Route},
};

/// Depot at the origin, `customer_count` customers on a line at
/// `x = 1, 2, ...`, wide-open windows and unbounded capacity.
pub fn create_line_problem(customer_count: usize, vehicle_count: usize) -> VehicleRoutingProblem {
    let mut locations = vec![Location::from_cartesian(0.0, 0.0)];
    let mut customers = Vec::new();

    for index in 0..customer_count {
        locations.push(Location::from_cartesian((index + 1) as f64, 0.0));
        customers.push(create_customer(index, index + 1));
    }

    let mut builder = VehicleRoutingProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_customers(customers);
    builder.set_vehicle_count(vehicle_count);

    builder.build()
}

/// Line problem where customer `i` carries `demands[i]`.
pub fn create_problem_with_demands(
    demands: Vec<f64>,
    vehicle_count: usize,
    vehicle_capacity: f64,
) -> VehicleRoutingProblem {
    let mut locations = vec![Location::from_cartesian(0.0, 0.0)];
    let mut customers = Vec::new();

    for (index, demand) in demands.into_iter().enumerate() {
        locations.push(Location::from_cartesian((index + 1) as f64, 0.0));

        let mut builder = CustomerBuilder::default();
        builder.set_external_id(format!("c{index}"));
        builder.set_location_id(index + 1);
        builder.set_demand(demand);
        customers.push(builder.build());
    }

    let mut builder = VehicleRoutingProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_customers(customers);
    builder.set_vehicle_count(vehicle_count);
    builder.set_vehicle_capacity(vehicle_capacity);

    builder.build()
}

/// One vehicle; each entry places a customer at `(x, y)` with the given
/// `(start, end)` window. Zero service times keep schedules easy to follow.
pub fn create_problem_with_windows(
    entries: Vec<((f64, f64), (f64, f64))>,
) -> VehicleRoutingProblem {
    let mut locations = vec![Location::from_cartesian(0.0, 0.0)];
    let mut customers = Vec::new();

    for (index, ((x, y), (start, end))) in entries.into_iter().enumerate() {
        locations.push(Location::from_cartesian(x, y));

        let mut builder = CustomerBuilder::default();
        builder.set_external_id(format!("c{index}"));
        builder.set_location_id(index + 1);
        builder.set_time_window(TimeWindow::new(start, end));
        customers.push(builder.build());
    }

    let mut builder = VehicleRoutingProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_customers(customers);
    builder.set_vehicle_count(1);

    builder.build()
}

/// All customers share one location next to the depot so any visiting order
/// is feasible; only the due dates differ.
pub fn create_problem_with_due_dates(
    due_dates: Vec<f64>,
    vehicle_count: usize,
) -> VehicleRoutingProblem {
    let locations = vec![
        Location::from_cartesian(0.0, 0.0),
        Location::from_cartesian(1.0, 0.0),
    ];
    let mut customers = Vec::new();

    for (index, due_date) in due_dates.into_iter().enumerate() {
        let mut builder = CustomerBuilder::default();
        builder.set_external_id(format!("c{index}"));
        builder.set_location_id(1);
        builder.set_time_window(TimeWindow::new(0.0, due_date));
        customers.push(builder.build());
    }

    let mut builder = VehicleRoutingProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_customers(customers);
    builder.set_vehicle_count(vehicle_count);

    builder.build()
}

/// Two well-separated clusters of four customers each, listed in
/// alternating order so the round-robin construction interleaves the
/// clusters and leaves plenty of room for the search to improve.
pub fn create_clustered_problem() -> VehicleRoutingProblem {
    let coordinates = [
        (10.0, 1.0),
        (1.0, 10.0),
        (10.0, 2.0),
        (2.0, 10.0),
        (11.0, 1.0),
        (1.0, 11.0),
        (11.0, 2.0),
        (2.0, 11.0),
    ];

    let mut locations = vec![Location::from_cartesian(0.0, 0.0)];
    let mut customers = Vec::new();

    for (index, (x, y)) in coordinates.into_iter().enumerate() {
        locations.push(Location::from_cartesian(x, y));
        customers.push(create_customer(index, index + 1));
    }

    let mut builder = VehicleRoutingProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_customers(customers);
    builder.set_vehicle_count(2);

    builder.build()
}

pub fn create_route(problem: &VehicleRoutingProblem, customers: &[usize]) -> Route {
    let sequence = customers
        .iter()
        .map(|&index| CustomerIdx::new(index))
        .collect::<CustomerSequence>();

    Route::new(problem, sequence)
}

pub fn customer_ids(route: &Route) -> Vec<usize> {
    route
        .customers()
        .iter()
        .map(|customer| customer.get())
        .collect()
}

fn create_customer(index: usize, location_id: usize) -> Customer {
    let mut builder = CustomerBuilder::default();
    builder.set_external_id(format!("c{index}"));
    builder.set_location_id(location_id);

    builder.build()
}
