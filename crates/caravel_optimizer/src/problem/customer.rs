use crate::{
    define_index_newtype,
    problem::{location::LocationIdx, time_window::TimeWindow},
};

define_index_newtype!(CustomerIdx, Customer);

#[derive(Debug, Clone)]
pub struct Customer {
    external_id: String,
    location_id: LocationIdx,
    demand: f64,
    service_duration: f64,
    time_window: TimeWindow,
}

impl Customer {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn location_id(&self) -> LocationIdx {
        self.location_id
    }

    pub fn demand(&self) -> f64 {
        self.demand
    }

    pub fn service_duration(&self) -> f64 {
        self.service_duration
    }

    pub fn time_window(&self) -> TimeWindow {
        self.time_window
    }

    /// Due date used by the construction heuristic's urgency ordering.
    pub fn due_date(&self) -> f64 {
        self.time_window.end()
    }
}

pub struct CustomerBuilder {
    external_id: String,
    location_id: LocationIdx,
    demand: f64,
    service_duration: f64,
    time_window: TimeWindow,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        CustomerBuilder {
            external_id: String::new(),
            location_id: LocationIdx::new(0),
            demand: 0.0,
            service_duration: 0.0,
            time_window: TimeWindow::wide_open(),
        }
    }
}

impl CustomerBuilder {
    pub fn set_external_id(&mut self, external_id: String) -> &mut Self {
        self.external_id = external_id;
        self
    }

    pub fn set_location_id(&mut self, location_id: usize) -> &mut Self {
        self.location_id = LocationIdx::new(location_id);
        self
    }

    pub fn set_demand(&mut self, demand: f64) -> &mut Self {
        self.demand = demand;
        self
    }

    pub fn set_service_duration(&mut self, service_duration: f64) -> &mut Self {
        self.service_duration = service_duration;
        self
    }

    pub fn set_time_window(&mut self, time_window: TimeWindow) -> &mut Self {
        self.time_window = time_window;
        self
    }

    pub fn build(&self) -> Customer {
        Customer {
            external_id: self.external_id.clone(),
            location_id: self.location_id,
            demand: self.demand,
            service_duration: self.service_duration,
            time_window: self.time_window,
        }
    }
}
