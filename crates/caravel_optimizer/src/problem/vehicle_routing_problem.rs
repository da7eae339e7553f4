use crate::{
    problem::{
        customer::{Customer, CustomerIdx},
        location::{Location, LocationIdx},
        time_window::TimeWindow,
        travel_cost_matrix::TravelCostMatrix,
    },
    solver::{error::SolverError, solution::solution::Solution},
};

/// Read-only context for a search run: the customer set, the depot, the
/// fleet bound, and the travel cost matrix.
#[derive(Debug, Clone)]
pub struct VehicleRoutingProblem {
    locations: Vec<Location>,
    travel_costs: TravelCostMatrix,
    customers: Vec<Customer>,
    depot_location_id: LocationIdx,
    depot_time_window: TimeWindow,
    vehicle_count: usize,
    vehicle_capacity: f64,
}

impl VehicleRoutingProblem {
    pub fn travel_cost(&self, from: LocationIdx, to: LocationIdx) -> f64 {
        self.travel_costs.cost(from, to)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer(&self, index: CustomerIdx) -> &Customer {
        &self.customers[index]
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn depot_location_id(&self) -> LocationIdx {
        self.depot_location_id
    }

    pub fn depot_time_window(&self) -> TimeWindow {
        self.depot_time_window
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    pub fn vehicle_capacity(&self) -> f64 {
        self.vehicle_capacity
    }

    /// Default objective: total traveled distance over all routes.
    pub fn objective(&self, solution: &Solution) -> f64 {
        solution.total_distance()
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        if self.vehicle_count == 0 && !self.customers.is_empty() {
            return Err(SolverError::InvalidProblem(String::from(
                "no vehicles available for a nonempty customer set",
            )));
        }

        if self.vehicle_capacity <= 0.0
            && self.customers.iter().any(|customer| customer.demand() > 0.0)
        {
            return Err(SolverError::InvalidProblem(String::from(
                "vehicle capacity is nonpositive but customers carry demand",
            )));
        }

        if let Some(customer) = self
            .customers
            .iter()
            .find(|customer| customer.location_id().get() >= self.locations.len())
        {
            return Err(SolverError::InvalidProblem(format!(
                "customer {} references unknown location {}",
                customer.external_id(),
                customer.location_id()
            )));
        }

        if self.depot_location_id.get() >= self.locations.len() {
            return Err(SolverError::InvalidProblem(format!(
                "depot references unknown location {}",
                self.depot_location_id
            )));
        }

        Ok(())
    }
}

pub struct VehicleRoutingProblemBuilder {
    locations: Vec<Location>,
    customers: Vec<Customer>,
    depot_location_id: LocationIdx,
    depot_time_window: TimeWindow,
    vehicle_count: usize,
    vehicle_capacity: f64,
}

impl Default for VehicleRoutingProblemBuilder {
    fn default() -> Self {
        VehicleRoutingProblemBuilder {
            locations: Vec::new(),
            customers: Vec::new(),
            depot_location_id: LocationIdx::new(0),
            depot_time_window: TimeWindow::wide_open(),
            vehicle_count: 0,
            vehicle_capacity: f64::INFINITY,
        }
    }
}

impl VehicleRoutingProblemBuilder {
    pub fn set_locations(&mut self, locations: Vec<Location>) -> &mut Self {
        self.locations = locations;
        self
    }

    pub fn set_customers(&mut self, customers: Vec<Customer>) -> &mut Self {
        self.customers = customers;
        self
    }

    pub fn set_depot_location_id(&mut self, location_id: usize) -> &mut Self {
        self.depot_location_id = LocationIdx::new(location_id);
        self
    }

    pub fn set_depot_time_window(&mut self, time_window: TimeWindow) -> &mut Self {
        self.depot_time_window = time_window;
        self
    }

    pub fn set_vehicle_count(&mut self, vehicle_count: usize) -> &mut Self {
        self.vehicle_count = vehicle_count;
        self
    }

    pub fn set_vehicle_capacity(&mut self, vehicle_capacity: f64) -> &mut Self {
        self.vehicle_capacity = vehicle_capacity;
        self
    }

    pub fn build(self) -> VehicleRoutingProblem {
        let travel_costs = TravelCostMatrix::from_euclidean(&self.locations);

        VehicleRoutingProblem {
            locations: self.locations,
            travel_costs,
            customers: self.customers,
            depot_location_id: self.depot_location_id,
            depot_time_window: self.depot_time_window,
            vehicle_count: self.vehicle_count,
            vehicle_capacity: self.vehicle_capacity,
        }
    }
}
