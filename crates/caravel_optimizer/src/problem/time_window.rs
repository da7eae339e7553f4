use serde::{Deserialize, Serialize};

/// Delivery window in problem time units. Arriving before `start` means
/// waiting until the window opens; arriving after `end` is infeasible.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    start: f64,
    end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        TimeWindow { start, end }
    }

    pub const fn wide_open() -> Self {
        TimeWindow {
            start: 0.0,
            end: f64::INFINITY,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn is_satisfied(&self, arrival: f64) -> bool {
        arrival <= self.end
    }

    /// The earliest moment service can begin for the given arrival time.
    pub fn service_start(&self, arrival: f64) -> f64 {
        arrival.max(self.start)
    }
}
